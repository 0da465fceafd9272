use crate::app::{App, Focus, FormField, LoginField};
use crate::board::{StatusSummary, TaskBoard};
use crate::error::Result;
use crate::session::Screen;
use crate::task::{Status, Task};
use crossterm::event::{self, Event};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};

const TITLE: &str = "Team Task Tracker";
const EMPTY_BOARD: &str = "No tasks yet. Add your first task above!";

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key)?;
        }
    }
    Ok(())
}

pub fn draw(f: &mut Frame, app: &App) {
    match (app.screen(), app.board()) {
        (Screen::Dashboard, Some(board)) => draw_dashboard(f, app, board),
        _ => draw_login(f, app),
    }
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Completed => Color::Green,
        Status::InProgress => Color::Yellow,
        Status::Pending => Color::Gray,
    }
}

fn focused_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn draw_login(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(f.area());

    let login = app.login();
    f.render_widget(
        Paragraph::new(Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD))),
        chunks[0],
    );

    let masked = "*".repeat(login.password.chars().count());
    let fields = [
        (LoginField::Email, "Email", login.email.as_str(), chunks[1]),
        (LoginField::Password, "Password", masked.as_str(), chunks[2]),
    ];
    for (field, label, value, area) in fields {
        let input = Paragraph::new(value).block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_style(focused_style(login.focus == field)),
        );
        f.render_widget(input, area);
    }

    let hint = app
        .message()
        .map(|m| Line::from(Span::styled(m, Style::default().fg(Color::Red))))
        .unwrap_or_else(|| Line::from("Tab: switch field  Enter: sign in  Esc: quit"));
    f.render_widget(Paragraph::new(hint), chunks[3]);
}

fn draw_dashboard(f: &mut Frame, app: &App, board: &TaskBoard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(
        Paragraph::new(Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD))),
        chunks[0],
    );
    draw_summary(f, chunks[1], &board.summary());
    draw_form(f, chunks[2], app, board);
    draw_tasks(f, chunks[3], app, board.list_tasks());
    draw_footer(f, chunks[4], app);
}

fn draw_summary(f: &mut Frame, area: Rect, summary: &StatusSummary) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let order = [Status::Completed, Status::InProgress, Status::Pending];
    for (i, status) in order.into_iter().enumerate() {
        let count = Paragraph::new(Span::styled(
            summary.get(status).to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered()
        .block(
            Block::default()
                .title(status.label())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(status_color(status))),
        );
        f.render_widget(count, chunks[i]);
    }
}

fn draw_form(f: &mut Frame, area: Rect, app: &App, board: &TaskBoard) {
    let draft = board.draft();
    let lines: Vec<Line> = FormField::ALL
        .into_iter()
        .map(|field| {
            let value = match field {
                FormField::Title => draft.title.clone(),
                FormField::Assignee => draft.assignee.clone(),
                FormField::DueDate => app.due_input().to_string(),
                FormField::Status => format!("< {} >", draft.status.label()),
                FormField::Description => draft.description.clone(),
            };
            let focused = app.focus() == Focus::Form(field);
            Line::from(vec![
                Span::styled(format!("{:<12}", field.label()), focused_style(focused)),
                Span::raw(value),
            ])
        })
        .collect();

    let form = Paragraph::new(lines).block(
        Block::default()
            .title("Add Task")
            .borders(Borders::ALL)
            .border_style(focused_style(matches!(app.focus(), Focus::Form(_)))),
    );
    f.render_widget(form, area);
}

fn task_item(task: &Task) -> ListItem<'_> {
    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("[{}] ", task.id)),
            Span::styled(&task.title, Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", task.status.label()),
                Style::default().fg(status_color(task.status)),
            ),
        ]),
        Line::from(format!("    Assigned to: {}", task.assignee)),
    ];
    if !task.description.is_empty() {
        lines.push(Line::from(format!("    {}", task.description)));
    }
    if let Some(due) = task.due_label() {
        lines.push(Line::from(format!("    Due: {due}")));
    }
    ListItem::new(lines)
}

fn draw_tasks(f: &mut Frame, area: Rect, app: &App, tasks: &[Task]) {
    let block = Block::default()
        .title("Tasks")
        .borders(Borders::ALL)
        .border_style(focused_style(app.focus() == Focus::List));

    if tasks.is_empty() {
        f.render_widget(Paragraph::new(EMPTY_BOARD).centered().block(block), area);
        return;
    }

    let items: Vec<ListItem> = tasks.iter().map(task_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::List {
        state.select(Some(app.selected()));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let hint = match app.focus() {
        Focus::List => "n: new task  ←/→: status  d: delete  q: quit",
        Focus::Form(_) => "Tab: next field  Enter: add  Esc: back to list",
    };
    let line = match app.message() {
        Some(msg) => Line::from(vec![
            Span::styled(msg, Style::default().fg(Color::Yellow)),
            Span::raw("  |  "),
            Span::raw(hint),
        ]),
        None => Line::from(hint),
    };
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn logged_in(config: &Config) -> App {
        let mut app = App::new(config);
        for code in [
            KeyCode::Char('a'),
            KeyCode::Tab,
            KeyCode::Char('p'),
            KeyCode::Enter,
        ] {
            app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
        }
        app
    }

    #[test]
    fn login_screen_masks_password() {
        let mut app = App::new(&Config::default());
        for code in [KeyCode::Char('x'), KeyCode::Tab, KeyCode::Char('s')] {
            app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
        }
        let screen = render(&app);
        assert!(screen.contains("Password"));
        assert!(screen.contains('*'));
        assert!(!screen.contains("Assigned to"));
    }

    #[test]
    fn dashboard_shows_summary_and_due_dates() {
        let app = logged_in(&Config::default());
        let screen = render(&app);
        assert!(screen.contains("Completed"));
        assert!(screen.contains("In Progress"));
        // count row of the summary boxes: completed, in progress, pending
        let counts: String = screen
            .lines()
            .nth(2)
            .unwrap()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        assert_eq!(counts, "334");
        assert!(screen.contains("Website Redesign"));
        assert!(screen.contains("Assigned to: Sarah Johnson"));
        assert!(screen.contains("Due: Feb 15, 2024"));
    }

    #[test]
    fn empty_board_shows_placeholder() {
        let config = Config {
            sample_tasks: false,
            ..Config::default()
        };
        let app = logged_in(&config);
        assert!(render(&app).contains(EMPTY_BOARD));
    }
}
