mod commands;
mod history;

use thiserror::Error;

pub use commands::Command;
pub use history::CommandHistory;

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur while applying or reverting a command
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("element {0} not found in document")]
    ElementNotFound(usize),

    #[error("nothing to {0}")]
    EmptyHistory(&'static str),
}
