use egui::{Pos2, Ui};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::document::Document;
use crate::renderer::Renderer;

mod marker_tool;
mod sticker_tool;

pub use marker_tool::{MarkerSettings, MarkerTool, THICK_WIDTH, THIN_WIDTH};
pub use sticker_tool::{StickerSettings, StickerTool, DEFAULT_STICKERS};

/// Which tool is active. The app owns one instance of each tool and
/// dispatches through the [`Tool`] trait.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Marker,
    Sticker,
}

impl ToolKind {
    pub const ALL: [ToolKind; 2] = [ToolKind::Marker, ToolKind::Sticker];
}

/// Tool trait defines the interface for all drawing tools
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Single-glyph icon for the tool selector button
    fn icon(&self) -> &'static str;

    /// Called when the tool is selected (activated).
    /// Can be used to initialize or reset tool state.
    fn activate(&mut self) {}

    /// Called when the tool is deselected. Must drop any in-progress state.
    fn deactivate(&mut self);

    /// Handle pointer press on the canvas.
    /// Return a Command to **begin** an action if applicable, or None.
    fn on_pointer_down(&mut self, pos: Pos2, document: &Document) -> Option<Command>;

    /// Handle pointer movement over the canvas, held or not.
    fn on_pointer_move(&mut self, pos: Pos2, document: &Document) -> Option<Command>;

    /// Handle pointer release on the canvas.
    /// Return a Command to **finalize** an action if applicable.
    fn on_pointer_up(&mut self, pos: Pos2, document: &Document) -> Option<Command>;

    /// Pointer left the canvas; hover previews must disappear. A tool may
    /// finalize work it cannot carry across the edge.
    fn on_pointer_leave(&mut self, document: &Document) -> Option<Command>;

    /// Push the tool's current preview state into the renderer
    fn update_preview(&self, renderer: &mut Renderer);

    /// Show tool-specific controls in the toolbar.
    /// Return a Command if the interaction should trigger an action.
    fn ui(&mut self, ui: &mut Ui) -> Option<Command>;
}
