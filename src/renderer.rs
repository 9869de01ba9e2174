use egui::{Color32, Painter, Pos2, Rect, Stroke as EguiStroke};

use crate::document::Document;
use crate::element::{Element, Sticker, Stroke};

const SHEET_COLOR: Color32 = Color32::WHITE;
const SHEET_BORDER: Color32 = Color32::from_gray(160);
const GHOST_OPACITY: f32 = 0.5;

/// Cursor-follow indicator for the marker: a ring matching the width and
/// color of the line the next drag would leave.
#[derive(Clone, Copy, Debug)]
pub struct CursorRing {
    pub center: Pos2,
    pub radius: f32,
    pub color: Color32,
}

/// Repaints the scene every frame and holds the transient preview state fed
/// by the active tool. Previews never enter the document and are invisible
/// to undo.
#[derive(Default)]
pub struct Renderer {
    preview_stroke: Option<Stroke>,
    ghost_sticker: Option<Sticker>,
    cursor_ring: Option<CursorRing>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_preview_stroke(&mut self, stroke: Option<Stroke>) {
        self.preview_stroke = stroke;
    }

    pub fn set_ghost_sticker(&mut self, sticker: Option<Sticker>) {
        self.ghost_sticker = sticker;
    }

    pub fn set_cursor_ring(&mut self, ring: Option<CursorRing>) {
        self.cursor_ring = ring;
    }

    /// Drop every preview in one go; used on tool switches and pointer leave.
    pub fn clear_previews(&mut self) {
        self.preview_stroke = None;
        self.ghost_sticker = None;
        self.cursor_ring = None;
    }

    /// Clear-and-redraw: paint the sheet, then every element in z-order,
    /// then the previews on top.
    pub fn render(&self, painter: &Painter, canvas_rect: Rect, document: &Document) {
        painter.rect_filled(canvas_rect, 0.0, SHEET_COLOR);
        painter.rect_stroke(canvas_rect, 0.0, EguiStroke::new(1.0, SHEET_BORDER));

        for element in document.elements() {
            element.draw(painter);
        }

        if let Some(stroke) = &self.preview_stroke {
            stroke.draw(painter);
        }

        if let Some(sticker) = &self.ghost_sticker {
            sticker.draw_with_opacity(painter, GHOST_OPACITY);
        }

        if let Some(ring) = &self.cursor_ring {
            painter.circle_stroke(ring.center, ring.radius, EguiStroke::new(1.0, ring.color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use egui::{Context, LayerId, RawInput, Vec2};

    #[test]
    fn render_draws_document_and_previews_without_panicking() {
        let mut document = Document::new();
        document.add_element(factory::create_stroke(
            vec![Pos2::new(10.0, 10.0), Pos2::new(40.0, 40.0)],
            2.0,
            Color32::BLACK,
        ));
        document.add_element(factory::create_sticker(
            "🙂",
            Pos2::new(60.0, 60.0),
            24.0,
            0.4,
        ));

        let mut renderer = Renderer::new();
        renderer.set_cursor_ring(Some(CursorRing {
            center: Pos2::new(20.0, 20.0),
            radius: 4.0,
            color: Color32::BLACK,
        }));

        // Fonts only exist inside a frame, so paint inside Context::run
        let ctx = Context::default();
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(128.0, 128.0));
        let _ = ctx.run(RawInput::default(), |ctx| {
            let painter = egui::Painter::new(ctx.clone(), LayerId::background(), rect);
            renderer.render(&painter, rect, &document);
        });
    }
}
