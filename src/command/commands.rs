use egui::{Pos2, Vec2};

use super::{CommandError, CommandResult};
use crate::document::Document;
use crate::element::{Element, ElementKind};

/// An undoable mutation of the document.
///
/// Each variant carries everything needed to take itself back, so undo is
/// `unapply` rather than a document snapshot.
#[derive(Clone, Debug)]
pub enum Command {
    /// Add a finished drawable (stroke or sticker) to the display list
    AddElement { element: ElementKind },

    /// Move an element; `old_position` is the rect origin before the move
    MoveElement {
        element_id: usize,
        delta: Vec2,
        old_position: Pos2,
    },
}

impl Command {
    /// A short human-readable label for the history readout
    pub fn label(&self) -> &'static str {
        match self {
            Command::AddElement { element } => match element {
                ElementKind::Stroke(_) => "Add stroke",
                ElementKind::Sticker(_) => "Add sticker",
            },
            Command::MoveElement { .. } => "Move sticker",
        }
    }

    /// Apply the command to the document
    pub fn apply(&self, document: &mut Document) -> CommandResult {
        match self {
            Command::AddElement { element } => {
                document.add_element(element.clone());
                Ok(())
            }
            Command::MoveElement {
                element_id, delta, ..
            } => {
                let element = document
                    .element_mut(*element_id)
                    .ok_or(CommandError::ElementNotFound(*element_id))?;
                element.translate(*delta);
                Ok(())
            }
        }
    }

    /// Revert the command on the document
    pub fn unapply(&self, document: &mut Document) -> CommandResult {
        match self {
            Command::AddElement { element } => {
                document
                    .remove_element(element.id())
                    .ok_or(CommandError::ElementNotFound(element.id()))?;
                Ok(())
            }
            Command::MoveElement {
                element_id,
                old_position,
                ..
            } => {
                let element = document
                    .element_mut(*element_id)
                    .ok_or(CommandError::ElementNotFound(*element_id))?;
                let delta = *old_position - element.rect().min;
                element.translate(delta);
                Ok(())
            }
        }
    }
}
