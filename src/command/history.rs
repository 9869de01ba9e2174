use log::{debug, info};

use super::{Command, CommandError, CommandResult};
use crate::document::Document;

/// Manages the history of executed commands for undo/redo functionality
#[derive(Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command against the document and record it.
    ///
    /// Any fresh input invalidates the redo stack: drawing after an undo
    /// discards the undone future.
    pub fn execute(&mut self, command: Command, document: &mut Document) -> CommandResult {
        command.apply(document)?;
        debug!("executed: {}", command.label());
        self.undo_stack.push(command);
        self.redo_stack.clear();
        Ok(())
    }

    /// Undo the last executed command
    pub fn undo(&mut self, document: &mut Document) -> CommandResult {
        let command = self
            .undo_stack
            .pop()
            .ok_or(CommandError::EmptyHistory("undo"))?;
        command.unapply(document)?;
        info!("undo: {}", command.label());
        self.redo_stack.push(command);
        Ok(())
    }

    /// Redo the last undone command
    pub fn redo(&mut self, document: &mut Document) -> CommandResult {
        let command = self
            .redo_stack
            .pop()
            .ok_or(CommandError::EmptyHistory("redo"))?;
        command.apply(document)?;
        info!("redo: {}", command.label());
        self.undo_stack.push(command);
        Ok(())
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    /// Forget everything. Used by the clear-canvas button, which wipes the
    /// document and both stacks in one motion.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
