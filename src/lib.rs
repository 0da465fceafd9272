//! Terminal team task tracker.
//!
//! A permissive login gate in front of an in-memory task board. The board
//! and gate are plain types; [`app`] maps key presses onto them and [`ui`]
//! draws the result with ratatui.

pub mod app;
pub mod board;
pub mod config;
pub mod draft;
pub mod error;
pub mod logging;
pub mod session;
pub mod task;
pub mod ui;

pub use board::{StatusSummary, TaskBoard};
pub use draft::{Draft, DraftUpdate};
pub use error::{AppError, ValidationError};
pub use session::{Screen, SessionGate};
pub use task::{format_due_date, ParseStatusError, Status, Task, TaskId};
