use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Vec2};

use super::Element;
use crate::element::common;

/// A placed glyph: an emoji (or any short piece of text) with a position,
/// a font size, and a rotation applied about its center.
#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    id: usize,
    glyph: String,
    position: Pos2,
    size: f32,
    rotation: f32,
}

impl Sticker {
    pub(crate) fn new(id: usize, glyph: String, position: Pos2, size: f32, rotation: f32) -> Self {
        Self {
            id,
            glyph,
            position,
            size,
            rotation,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Paint the glyph with an opacity factor; 1.0 for placed stickers,
    /// lower for the cursor ghost.
    pub(crate) fn draw_with_opacity(&self, painter: &Painter, opacity: f32) {
        let galley = painter.layout_no_wrap(
            self.glyph.clone(),
            FontId::proportional(self.size),
            Color32::BLACK,
        );
        let half = galley.size() * 0.5;
        // TextShape rotates about its top-left corner, so walk the corner
        // back from the center through the same rotation
        let top_left = self.position - common::rotate_vec(half, self.rotation);
        let mut shape = TextShape::new(top_left, galley, Color32::BLACK);
        shape.angle = self.rotation;
        shape.opacity_factor = opacity;
        painter.add(shape);
    }

    /// The glyph box before rotation. Text metrics are not available away
    /// from a paint pass, so this estimates from the font size; emoji are
    /// roughly square at their point size.
    fn unrotated_size(&self) -> Vec2 {
        let chars = self.glyph.chars().count().max(1) as f32;
        Vec2::new(self.size * chars, self.size)
    }
}

impl Element for Sticker {
    fn id(&self) -> usize {
        self.id
    }

    fn kind(&self) -> &'static str {
        "sticker"
    }

    fn rect(&self) -> Rect {
        common::rotated_bounds(self.position, self.unrotated_size(), self.rotation)
    }

    fn draw(&self, painter: &Painter) {
        self.draw_with_opacity(painter, 1.0);
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        self.rect().contains(pos)
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_tracks_position() {
        let mut sticker = Sticker::new(1, "🙂".to_owned(), Pos2::new(50.0, 50.0), 24.0, 0.0);
        assert!(sticker.hit_test(Pos2::new(50.0, 50.0)));
        assert!(!sticker.hit_test(Pos2::new(90.0, 90.0)));

        sticker.translate(Vec2::new(40.0, 40.0));
        assert!(sticker.hit_test(Pos2::new(90.0, 90.0)));
        assert_eq!(sticker.position(), Pos2::new(90.0, 90.0));
    }

    #[test]
    fn rotation_widens_the_bounding_box() {
        let flat = Sticker::new(1, "⭐".to_owned(), Pos2::new(0.0, 0.0), 32.0, 0.0);
        let tilted = Sticker::new(
            2,
            "⭐".to_owned(),
            Pos2::new(0.0, 0.0),
            32.0,
            std::f32::consts::FRAC_PI_4,
        );
        assert!(tilted.rect().height() > flat.rect().height());
    }
}
