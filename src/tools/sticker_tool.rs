use egui::{Pos2, Slider, TextEdit, Ui};
use log::info;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::document::Document;
use crate::element::sticker::Sticker;
use crate::element::{factory, Element, ElementKind};
use crate::renderer::Renderer;
use crate::tools::Tool;
use crate::util::time;

/// Built-in sticker palette; user-added glyphs append to it.
pub const DEFAULT_STICKERS: [&str; 6] = ["🙂", "⭐", "❤", "🔥", "🌈", "🐙"];

const MIN_SIZE: f32 = 16.0;
const MAX_SIZE: f32 = 96.0;

/// Sticker configuration; persisted across runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickerSettings {
    pub glyph: String,
    pub size: f32,
    pub rotation: f32,
    /// User-added glyphs, shown after the built-ins
    pub custom: Vec<String>,
}

impl Default for StickerSettings {
    fn default() -> Self {
        Self {
            glyph: DEFAULT_STICKERS[0].to_owned(),
            size: 32.0,
            rotation: 0.0,
            custom: Vec::new(),
        }
    }
}

/// An existing sticker being dragged to a new spot.
struct DragState {
    element_id: usize,
    /// Rect origin before the drag, for the undo side of the move
    old_position: Pos2,
    start: Pos2,
    current: Pos2,
    /// Copied appearance, so the ghost matches what is being moved
    glyph: String,
    size: f32,
    rotation: f32,
}

/// Places emoji stickers and repositions the ones already placed.
///
/// A press over an existing sticker starts a drag that ends in an undoable
/// move; a press anywhere else places the selected glyph on release.
#[derive(Default)]
pub struct StickerTool {
    settings: StickerSettings,
    hover: Option<Pos2>,
    drag: Option<DragState>,
    /// A press landed on the canvas; only then does a release place anything
    armed: bool,
    custom_input: String,
}

impl StickerTool {
    pub fn new(settings: StickerSettings) -> Self {
        Self {
            settings,
            hover: None,
            drag: None,
            armed: false,
            custom_input: String::new(),
        }
    }

    pub fn settings(&self) -> &StickerSettings {
        &self.settings
    }

    /// Topmost sticker under the pointer; strokes are never draggable
    fn sticker_under(document: &Document, pos: Pos2) -> Option<&Sticker> {
        document.elements().iter().rev().find_map(|element| {
            match element {
                ElementKind::Sticker(sticker) if sticker.hit_test(pos) => Some(sticker),
                _ => None,
            }
        })
    }

    fn palette_button(ui: &mut Ui, glyph: &str, selected: bool) -> bool {
        ui.selectable_label(selected, egui::RichText::new(glyph).size(20.0))
            .clicked()
    }
}

impl Tool for StickerTool {
    fn name(&self) -> &'static str {
        "Sticker"
    }

    fn icon(&self) -> &'static str {
        "😀"
    }

    fn deactivate(&mut self) {
        self.hover = None;
        self.drag = None;
        self.armed = false;
    }

    fn on_pointer_down(&mut self, pos: Pos2, document: &Document) -> Option<Command> {
        if let Some(sticker) = Self::sticker_under(document, pos) {
            self.drag = Some(DragState {
                element_id: sticker.id(),
                old_position: sticker.rect().min,
                start: pos,
                current: pos,
                glyph: sticker.glyph().to_owned(),
                size: sticker.size(),
                rotation: sticker.rotation(),
            });
        } else {
            self.armed = true;
        }
        None
    }

    fn on_pointer_move(&mut self, pos: Pos2, _document: &Document) -> Option<Command> {
        self.hover = Some(pos);
        if let Some(drag) = &mut self.drag {
            drag.current = pos;
        }
        None
    }

    fn on_pointer_up(&mut self, pos: Pos2, _document: &Document) -> Option<Command> {
        if let Some(drag) = self.drag.take() {
            let delta = pos - drag.start;
            // A click that never moved is not a move worth remembering
            if delta.length() < 0.5 {
                return None;
            }
            return Some(Command::MoveElement {
                element_id: drag.element_id,
                delta,
                old_position: drag.old_position,
            });
        }

        if !self.armed {
            // The press happened somewhere else (or never happened)
            return None;
        }
        self.armed = false;

        Some(Command::AddElement {
            element: factory::create_sticker(
                &self.settings.glyph,
                pos,
                self.settings.size,
                self.settings.rotation,
            ),
        })
    }

    fn on_pointer_leave(&mut self, _document: &Document) -> Option<Command> {
        // Dropping the drag leaves the sticker where it was
        self.hover = None;
        self.drag = None;
        self.armed = false;
        None
    }

    fn update_preview(&self, renderer: &mut Renderer) {
        let ghost = match (&self.drag, self.hover) {
            // Id 0 keeps the ghost out of any id lookup
            (Some(drag), _) => Some(Sticker::new(
                0,
                drag.glyph.clone(),
                drag.current,
                drag.size,
                drag.rotation,
            )),
            (None, Some(pos)) => Some(Sticker::new(
                0,
                self.settings.glyph.clone(),
                pos,
                self.settings.size,
                self.settings.rotation,
            )),
            (None, None) => None,
        };
        renderer.set_ghost_sticker(ghost);
        renderer.set_preview_stroke(None);
        renderer.set_cursor_ring(None);
    }

    fn ui(&mut self, ui: &mut Ui) -> Option<Command> {
        ui.label("Stickers:");
        ui.horizontal_wrapped(|ui| {
            for glyph in DEFAULT_STICKERS {
                if Self::palette_button(ui, glyph, self.settings.glyph == glyph) {
                    self.settings.glyph = glyph.to_owned();
                }
            }
            let customs = self.settings.custom.clone();
            for glyph in &customs {
                if Self::palette_button(ui, glyph, &self.settings.glyph == glyph) {
                    self.settings.glyph = glyph.clone();
                }
            }
        });

        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut self.custom_input)
                    .desired_width(60.0)
                    .hint_text("custom"),
            );
            let can_add = !self.custom_input.trim().is_empty();
            if ui.add_enabled(can_add, egui::Button::new("Add")).clicked() {
                let glyph = self.custom_input.trim().to_owned();
                info!("custom sticker added: {glyph}");
                if !self.settings.custom.contains(&glyph) {
                    self.settings.custom.push(glyph.clone());
                }
                self.settings.glyph = glyph;
                self.custom_input.clear();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Size:");
            ui.add(Slider::new(&mut self.settings.size, MIN_SIZE..=MAX_SIZE));
        });

        ui.horizontal(|ui| {
            ui.label("Rotation:");
            ui.drag_angle(&mut self.settings.rotation);
            if ui.button("Shuffle").clicked() {
                // Sub-second wall clock seeds the tilt
                let t = time::current_time_secs().fract() as f32;
                self.settings.rotation = (t - 0.5) * std::f32::consts::TAU;
            }
        });

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    fn place(tool: &mut StickerTool, document: &mut Document, pos: Pos2) {
        tool.on_pointer_down(pos, document);
        if let Some(command) = tool.on_pointer_up(pos, document) {
            command.apply(document).unwrap();
        }
    }

    #[test]
    fn release_over_empty_canvas_places_a_sticker() {
        let mut tool = StickerTool::new(StickerSettings::default());
        let mut document = Document::new();
        place(&mut tool, &mut document, Pos2::new(100.0, 100.0));
        assert_eq!(document.elements().len(), 1);
    }

    #[test]
    fn drag_of_existing_sticker_emits_move_command() {
        let mut tool = StickerTool::new(StickerSettings::default());
        let mut document = Document::new();
        place(&mut tool, &mut document, Pos2::new(100.0, 100.0));

        tool.on_pointer_down(Pos2::new(100.0, 100.0), &document);
        tool.on_pointer_move(Pos2::new(140.0, 120.0), &document);
        match tool.on_pointer_up(Pos2::new(140.0, 120.0), &document) {
            Some(Command::MoveElement { delta, .. }) => {
                assert_eq!(delta, egui::Vec2::new(40.0, 20.0));
            }
            other => panic!("expected move command, got {other:?}"),
        }
    }

    #[test]
    fn click_on_sticker_without_motion_is_a_no_op() {
        let mut tool = StickerTool::new(StickerSettings::default());
        let mut document = Document::new();
        place(&mut tool, &mut document, Pos2::new(100.0, 100.0));

        tool.on_pointer_down(Pos2::new(100.0, 100.0), &document);
        assert!(tool.on_pointer_up(Pos2::new(100.0, 100.0), &document).is_none());
        assert_eq!(document.elements().len(), 1);
    }
}
