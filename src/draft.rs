//! The new-task form state and the messages that edit it.

use crate::error::ValidationError;
use crate::task::{Status, Task, TaskId};
use chrono::NaiveDate;

/// A task that has not been admitted to the board yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub due_date: Option<NaiveDate>,
    pub status: Status,
}

/// A change to exactly one draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftUpdate {
    Title(String),
    Description(String),
    Assignee(String),
    DueDate(Option<NaiveDate>),
    Status(Status),
}

impl Draft {
    pub fn apply(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::Title(title) => self.title = title,
            DraftUpdate::Description(description) => self.description = description,
            DraftUpdate::Assignee(assignee) => self.assignee = assignee,
            DraftUpdate::DueDate(due_date) => self.due_date = due_date,
            DraftUpdate::Status(status) => self.status = status,
        }
    }

    /// Checks the required fields are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.assignee.is_empty() {
            return Err(ValidationError::MissingAssignee);
        }
        Ok(())
    }

    pub(crate) fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            assignee: self.assignee,
            due_date: self.due_date,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_update_touches_one_field() {
        let mut draft = Draft::default();
        draft.apply(DraftUpdate::Title("Fix bug".into()));
        draft.apply(DraftUpdate::Assignee("A".into()));
        draft.apply(DraftUpdate::Status(Status::Completed));

        assert_eq!(draft.title, "Fix bug");
        assert_eq!(draft.assignee, "A");
        assert_eq!(draft.status, Status::Completed);
        assert!(draft.description.is_empty());
        assert_eq!(draft.due_date, None);
    }

    #[test]
    fn due_date_can_be_cleared() {
        let mut draft = Draft::default();
        draft.apply(DraftUpdate::DueDate(NaiveDate::from_ymd_opt(2024, 2, 15)));
        assert!(draft.due_date.is_some());
        draft.apply(DraftUpdate::DueDate(None));
        assert_eq!(draft.due_date, None);
    }

    #[test]
    fn validation_reports_title_before_assignee() {
        assert_eq!(Draft::default().validate(), Err(ValidationError::MissingTitle));

        let draft = Draft {
            title: "t".into(),
            assignee: String::new(),
            ..Draft::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingAssignee));
    }

    #[test]
    fn whitespace_counts_as_present() {
        let draft = Draft {
            title: "   ".into(),
            assignee: "A".into(),
            ..Draft::default()
        };
        assert_eq!(draft.validate(), Ok(()));
    }
}
