use crate::draft::{Draft, DraftUpdate};
use crate::error::ValidationError;
use crate::task::{Status, Task, TaskId};
use serde::Deserialize;
use tracing::{debug, info};

const SAMPLE_TASKS: &str = include_str!("sample_tasks.toml");

#[derive(Deserialize)]
struct SeedFile {
    tasks: Vec<Task>,
}

/// Per-status task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusSummary {
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Pending => self.pending,
            Status::InProgress => self.in_progress,
            Status::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }
}

/// The task collection and the draft being composed for it.
#[derive(Debug)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    draft: Draft,
    next_id: u64,
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBoard {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            draft: Draft::default(),
            next_id: 1,
        }
    }

    /// Builds a board holding the ten demo tasks.
    pub fn with_sample_tasks() -> Result<Self, toml::de::Error> {
        let seed: SeedFile = toml::from_str(SAMPLE_TASKS)?;
        Ok(Self::from_tasks(seed.tasks))
    }

    // Ids are kept as given; new ids start above the highest one.
    fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        debug!(count = tasks.len(), next_id, "task board seeded");
        Self {
            tasks,
            draft: Draft::default(),
            next_id,
        }
    }

    pub fn list_tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn update_draft(&mut self, update: DraftUpdate) {
        self.draft.apply(update);
    }

    /// Admits the current draft as a new task.
    ///
    /// On success the draft is reset. On failure neither the collection nor
    /// the draft changes.
    pub fn create_task(&mut self) -> Result<Task, ValidationError> {
        if let Err(err) = self.draft.validate() {
            debug!(error = %err, "draft rejected");
            return Err(err);
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        let task = std::mem::take(&mut self.draft).into_task(id);
        info!(id = %task.id, title = %task.title, status = %task.status, "task created");
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub fn delete_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() < before {
            info!(id = %id, "task deleted");
        }
    }

    pub fn update_status(&mut self, id: TaskId, status: Status) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            info!(id = %id, from = %task.status, to = %status, "task status changed");
            task.status = status;
        }
    }

    pub fn summary(&self) -> StatusSummary {
        self.tasks
            .iter()
            .fold(StatusSummary::default(), |mut summary, task| {
                match task.status {
                    Status::Pending => summary.pending += 1,
                    Status::InProgress => summary.in_progress += 1,
                    Status::Completed => summary.completed += 1,
                }
                summary
            })
    }
}
