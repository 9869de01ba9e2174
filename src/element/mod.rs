use egui::{Painter, Pos2, Rect, Vec2};

// Re-export concrete implementations
mod common;
pub(crate) mod sticker;
pub(crate) mod stroke;

pub use sticker::Sticker;
pub use stroke::{Stroke, StrokeInProgress};

/// Common trait that everything in the display list must implement
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> usize;

    /// Get the element kind as a string
    fn kind(&self) -> &'static str;

    /// Get the bounding rectangle for this element
    fn rect(&self) -> Rect;

    /// Draw the element using the provided painter
    fn draw(&self, painter: &Painter);

    /// Test if the element contains the given position
    fn hit_test(&self, pos: Pos2) -> bool;

    /// Translate the element by the given delta
    fn translate(&mut self, delta: Vec2);
}

/// Enumeration of all element kinds in the document
#[derive(Clone, Debug, PartialEq)]
pub enum ElementKind {
    Stroke(stroke::Stroke),
    Sticker(sticker::Sticker),
}

impl Element for ElementKind {
    fn id(&self) -> usize {
        match self {
            ElementKind::Stroke(s) => s.id(),
            ElementKind::Sticker(s) => s.id(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ElementKind::Stroke(_) => "stroke",
            ElementKind::Sticker(_) => "sticker",
        }
    }

    fn rect(&self) -> Rect {
        match self {
            ElementKind::Stroke(s) => s.rect(),
            ElementKind::Sticker(s) => s.rect(),
        }
    }

    fn draw(&self, painter: &Painter) {
        match self {
            ElementKind::Stroke(s) => s.draw(painter),
            ElementKind::Sticker(s) => s.draw(painter),
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        match self {
            ElementKind::Stroke(s) => s.hit_test(pos),
            ElementKind::Sticker(s) => s.hit_test(pos),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        match self {
            ElementKind::Stroke(s) => s.translate(delta),
            ElementKind::Sticker(s) => s.translate(delta),
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use crate::id_generator::generate_id;
    use egui::Color32;

    /// Create a new stroke element from finished points
    pub fn create_stroke(points: Vec<Pos2>, thickness: f32, color: Color32) -> ElementKind {
        ElementKind::Stroke(stroke::Stroke::new(generate_id(), points, thickness, color))
    }

    /// Create a new sticker element
    pub fn create_sticker(glyph: &str, position: Pos2, size: f32, rotation: f32) -> ElementKind {
        ElementKind::Sticker(sticker::Sticker::new(
            generate_id(),
            glyph.to_owned(),
            position,
            size,
            rotation,
        ))
    }
}
