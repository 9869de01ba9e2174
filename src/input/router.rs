use log::warn;

use super::{InputEvent, PanelKind};
use crate::command::CommandHistory;
use crate::document::Document;
use crate::tools::Tool;

/// Routes one input event to the active tool and runs whatever command the
/// tool hands back through the history.
///
/// Only canvas events reach the tool; presses on the toolbar are egui's
/// business. Leave events are always delivered so previews get dropped.
pub fn route_event(
    event: &InputEvent,
    tool: &mut dyn Tool,
    document: &mut Document,
    history: &mut CommandHistory,
) {
    let command = match event {
        InputEvent::PointerDown { location } if location.panel == PanelKind::Canvas => {
            tool.on_pointer_down(location.position, document)
        }
        InputEvent::PointerMove { location } if location.panel == PanelKind::Canvas => {
            tool.on_pointer_move(location.position, document)
        }
        InputEvent::PointerUp { location } if location.panel == PanelKind::Canvas => {
            tool.on_pointer_up(location.position, document)
        }
        InputEvent::PointerLeave => tool.on_pointer_leave(document),
        _ => None,
    };

    if let Some(command) = command {
        if let Err(err) = history.execute(command, document) {
            warn!("command failed: {err}");
        }
    }
}
