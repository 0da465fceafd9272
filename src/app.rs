//! Application state and key handling.
//!
//! `App` owns the session gate and, once logged in, the task board. Every
//! key press is handled here as a plain state transition so the behaviour
//! can be exercised without a terminal.

use crate::board::TaskBoard;
use crate::config::Config;
use crate::draft::DraftUpdate;
use crate::error::Result;
use crate::session::{Screen, SessionGate};
use crate::task::Status;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

const DUE_DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
}

impl LoginForm {
    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }
}

/// Fields of the new-task form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Assignee,
    DueDate,
    Status,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Assignee,
        FormField::DueDate,
        FormField::Status,
        FormField::Description,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            FormField::Title => "Task Title",
            FormField::Assignee => "Assignee",
            FormField::DueDate => "Due Date",
            FormField::Status => "Status",
            FormField::Description => "Description",
        }
    }

    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Assignee,
            FormField::Assignee => FormField::DueDate,
            FormField::DueDate => FormField::Status,
            FormField::Status => FormField::Description,
            FormField::Description => FormField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Assignee => FormField::Title,
            FormField::DueDate => FormField::Assignee,
            FormField::Status => FormField::DueDate,
            FormField::Description => FormField::Status,
        }
    }
}

/// Where dashboard key presses go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Form(FormField),
}

#[derive(Debug)]
pub struct App {
    sample_tasks: bool,
    gate: SessionGate,
    login: LoginForm,
    board: Option<TaskBoard>,
    focus: Focus,
    selected: usize,
    due_input: String,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            sample_tasks: config.sample_tasks,
            gate: SessionGate::new(),
            login: LoginForm::default(),
            board: None,
            focus: Focus::default(),
            selected: 0,
            due_input: String::new(),
            message: None,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.gate.screen()
    }

    pub fn login(&self) -> &LoginForm {
        &self.login
    }

    /// The board; present only after a successful login.
    pub fn board(&self) -> Option<&TaskBoard> {
        self.board.as_ref()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Raw text of the due-date field as typed.
    pub fn due_input(&self) -> &str {
        &self.due_input
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        match self.gate.screen() {
            Screen::Login => self.handle_login_key(key),
            Screen::Dashboard => {
                match self.focus {
                    Focus::List => self.handle_list_key(key),
                    Focus::Form(field) => self.handle_form_key(field, key),
                }
                Ok(())
            }
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.toggle_focus();
            }
            KeyCode::Backspace => {
                self.login.focused_mut().pop();
            }
            KeyCode::Char(c) => self.login.focused_mut().push(c),
            KeyCode::Enter => {
                if self.gate.attempt_login(&self.login.email, &self.login.password) {
                    self.mount_board()?;
                } else {
                    self.message = Some("Email and password are required".to_string());
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn mount_board(&mut self) -> Result<()> {
        let board = if self.sample_tasks {
            TaskBoard::with_sample_tasks()?
        } else {
            TaskBoard::new()
        };
        debug!(tasks = board.list_tasks().len(), "dashboard mounted");
        self.board = Some(board);
        self.login.password.clear();
        self.message = None;
        self.focus = Focus::List;
        self.selected = 0;
        Ok(())
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let Some(board) = self.board.as_mut() else {
            return;
        };
        let len = board.list_tasks().len();
        let selected_id = board.list_tasks().get(self.selected).map(|t| (t.id, t.status));

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Tab => self.focus = Focus::Form(FormField::Title),
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Left | KeyCode::Right => {
                if let Some((id, status)) = selected_id {
                    let status = if key.code == KeyCode::Right {
                        status.next()
                    } else {
                        status.prev()
                    };
                    board.update_status(id, status);
                    self.message = Some(format!("{id} is now {}", status.label()));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some((id, _)) = selected_id {
                    board.delete_task(id);
                    let remaining = board.list_tasks().len();
                    self.selected = self.selected.min(remaining.saturating_sub(1));
                    self.message = Some(format!("Deleted task {id}"));
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, field: FormField, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::List,
            KeyCode::Tab => self.focus = Focus::Form(field.next()),
            KeyCode::BackTab => self.focus = Focus::Form(field.prev()),
            KeyCode::Enter => self.submit_draft(),
            KeyCode::Left if field == FormField::Status => self.cycle_draft_status(Status::prev),
            KeyCode::Right if field == FormField::Status => self.cycle_draft_status(Status::next),
            KeyCode::Char(' ') if field == FormField::Status => {
                self.cycle_draft_status(Status::next)
            }
            KeyCode::Backspace => self.edit_field(field, |text| {
                text.pop();
            }),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_field(field, |text| text.push(c))
            }
            _ => {}
        }
    }

    fn edit_field(&mut self, field: FormField, edit: impl FnOnce(&mut String)) {
        let Some(board) = self.board.as_mut() else {
            return;
        };
        let draft = board.draft();
        let update = match field {
            FormField::Title => {
                let mut text = draft.title.clone();
                edit(&mut text);
                DraftUpdate::Title(text)
            }
            FormField::Assignee => {
                let mut text = draft.assignee.clone();
                edit(&mut text);
                DraftUpdate::Assignee(text)
            }
            FormField::Description => {
                let mut text = draft.description.clone();
                edit(&mut text);
                DraftUpdate::Description(text)
            }
            FormField::DueDate => {
                edit(&mut self.due_input);
                DraftUpdate::DueDate(parse_due_date(&self.due_input))
            }
            FormField::Status => return,
        };
        board.update_draft(update);
    }

    fn cycle_draft_status(&mut self, step: fn(Status) -> Status) {
        if let Some(board) = self.board.as_mut() {
            let status = step(board.draft().status);
            board.update_draft(DraftUpdate::Status(status));
        }
    }

    fn submit_draft(&mut self) {
        let Some(board) = self.board.as_mut() else {
            return;
        };
        if !self.due_input.is_empty() && board.draft().due_date.is_none() {
            self.message = Some("Due date must be YYYY-MM-DD".to_string());
            return;
        }
        match board.create_task() {
            Ok(task) => {
                self.due_input.clear();
                self.focus = Focus::Form(FormField::Title);
                self.message = Some(format!("Added task {}", task.id));
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }
}

fn parse_due_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DUE_DATE_INPUT_FORMAT).ok()
}
