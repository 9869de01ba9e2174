use egui::{Color32, Pos2, Slider, Ui};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::document::Document;
use crate::element::{ElementKind, StrokeInProgress};
use crate::renderer::{CursorRing, Renderer};
use crate::tools::Tool;

/// Width of the "thin" marker preset
pub const THIN_WIDTH: f32 = 2.0;
/// Width of the "thick" marker preset
pub const THICK_WIDTH: f32 = 8.0;

const MIN_WIDTH: f32 = 1.0;
const MAX_WIDTH: f32 = 24.0;

/// Marker configuration; persisted across runs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerSettings {
    pub color: Color32,
    pub width: f32,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: THIN_WIDTH,
        }
    }
}

/// Freehand drawing tool. Pointer-down starts a stroke, each move extends
/// it, pointer-up freezes it into an undoable add command.
#[derive(Default)]
pub struct MarkerTool {
    settings: MarkerSettings,
    current_stroke: Option<StrokeInProgress>,
    hover: Option<Pos2>,
}

impl MarkerTool {
    pub fn new(settings: MarkerSettings) -> Self {
        Self {
            settings,
            current_stroke: None,
            hover: None,
        }
    }

    pub fn settings(&self) -> MarkerSettings {
        self.settings
    }

    fn finalize_stroke(&mut self) -> Option<Command> {
        let stroke = self.current_stroke.take()?;
        Some(Command::AddElement {
            element: ElementKind::Stroke(stroke.finish()),
        })
    }
}

impl Tool for MarkerTool {
    fn name(&self) -> &'static str {
        "Marker"
    }

    fn icon(&self) -> &'static str {
        "🖊"
    }

    fn deactivate(&mut self) {
        self.current_stroke = None;
        self.hover = None;
    }

    fn on_pointer_down(&mut self, pos: Pos2, _document: &Document) -> Option<Command> {
        // Width and color are captured here; toolbar changes made while the
        // button is held do not retouch this stroke
        self.current_stroke = Some(StrokeInProgress::new(
            pos,
            self.settings.width,
            self.settings.color,
        ));
        None
    }

    fn on_pointer_move(&mut self, pos: Pos2, _document: &Document) -> Option<Command> {
        self.hover = Some(pos);
        if let Some(stroke) = &mut self.current_stroke {
            stroke.add_point(pos);
        }
        None
    }

    fn on_pointer_up(&mut self, pos: Pos2, _document: &Document) -> Option<Command> {
        if let Some(stroke) = &mut self.current_stroke {
            stroke.add_point(pos);
        }
        self.finalize_stroke()
    }

    fn on_pointer_leave(&mut self, _document: &Document) -> Option<Command> {
        self.hover = None;
        // A release outside the canvas would never reach us, so the line
        // ends at the edge
        self.finalize_stroke()
    }

    fn update_preview(&self, renderer: &mut Renderer) {
        renderer.set_preview_stroke(self.current_stroke.as_ref().map(|s| s.preview()));
        let ring = match (&self.current_stroke, self.hover) {
            (None, Some(center)) => Some(CursorRing {
                center,
                radius: (self.settings.width / 2.0).max(1.5),
                color: self.settings.color,
            }),
            _ => None,
        };
        renderer.set_cursor_ring(ring);
        renderer.set_ghost_sticker(None);
    }

    fn ui(&mut self, ui: &mut Ui) -> Option<Command> {
        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.settings.width == THIN_WIDTH, "Thin")
                .clicked()
            {
                self.settings.width = THIN_WIDTH;
            }
            if ui
                .selectable_label(self.settings.width == THICK_WIDTH, "Thick")
                .clicked()
            {
                self.settings.width = THICK_WIDTH;
            }
        });

        ui.horizontal(|ui| {
            ui.label("Width:");
            ui.add(Slider::new(&mut self.settings.width, MIN_WIDTH..=MAX_WIDTH));
        });

        ui.horizontal(|ui| {
            ui.label("Color:");
            egui::color_picker::color_edit_button_srgba(
                ui,
                &mut self.settings.color,
                egui::color_picker::Alpha::Opaque,
            );
        });

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_cycle_produces_one_add_command() {
        let mut tool = MarkerTool::new(MarkerSettings::default());
        let document = Document::new();

        assert!(tool.on_pointer_down(Pos2::new(1.0, 1.0), &document).is_none());
        assert!(tool.on_pointer_move(Pos2::new(2.0, 2.0), &document).is_none());
        let command = tool.on_pointer_up(Pos2::new(3.0, 3.0), &document);
        match command {
            Some(Command::AddElement {
                element: ElementKind::Stroke(stroke),
            }) => assert_eq!(stroke.points().len(), 3),
            other => panic!("expected stroke add command, got {other:?}"),
        }

        // Nothing left in flight
        assert!(tool.on_pointer_up(Pos2::new(3.0, 3.0), &document).is_none());
    }

    #[test]
    fn leaving_the_canvas_finalizes_the_stroke() {
        let mut tool = MarkerTool::new(MarkerSettings::default());
        let document = Document::new();
        tool.on_pointer_down(Pos2::new(1.0, 1.0), &document);
        tool.on_pointer_move(Pos2::new(5.0, 5.0), &document);
        assert!(tool.on_pointer_leave(&document).is_some());
    }

    #[test]
    fn width_change_does_not_reach_stroke_in_flight() {
        let mut tool = MarkerTool::new(MarkerSettings {
            color: Color32::BLACK,
            width: THIN_WIDTH,
        });
        let document = Document::new();
        tool.on_pointer_down(Pos2::new(1.0, 1.0), &document);
        tool.settings.width = THICK_WIDTH;
        match tool.on_pointer_up(Pos2::new(4.0, 4.0), &document) {
            Some(Command::AddElement {
                element: ElementKind::Stroke(stroke),
            }) => assert_eq!(stroke.thickness(), THIN_WIDTH),
            other => panic!("expected stroke add command, got {other:?}"),
        }
    }
}
