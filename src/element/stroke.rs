use egui::{Color32, Painter, Pos2, Rect, Stroke as EguiStroke, Vec2};

use super::Element;
use crate::element::common;

/// A finished freehand line: an ordered run of points with one width and color.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    id: usize,
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl Stroke {
    pub(crate) fn new(id: usize, points: Vec<Pos2>, thickness: f32, color: Color32) -> Self {
        Self {
            id,
            points,
            thickness,
            color,
        }
    }

    /// Get the points that make up this stroke
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Element for Stroke {
    fn id(&self) -> usize {
        self.id
    }

    fn kind(&self) -> &'static str {
        "stroke"
    }

    fn rect(&self) -> Rect {
        // Pad the point bounds by half the line width
        common::calculate_bounds(&self.points, self.thickness / 2.0)
    }

    fn draw(&self, painter: &Painter) {
        match self.points.len() {
            0 => {}
            // A click without a drag leaves a dot
            1 => {
                painter.circle_filled(self.points[0], self.thickness / 2.0, self.color);
            }
            _ => {
                painter.add(egui::Shape::line(
                    self.points.clone(),
                    EguiStroke::new(self.thickness, self.color),
                ));
            }
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        match self.points.len() {
            0 => false,
            1 => (pos - self.points[0]).length() <= self.thickness / 2.0,
            _ => self.points.windows(2).any(|window| {
                common::distance_to_line_segment(pos, window[0], window[1])
                    <= self.thickness / 2.0
            }),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }
}

/// The stroke being drawn while the pointer is held down.
///
/// Accumulates one point per pointer move and becomes an immutable [`Stroke`]
/// on pointer up. Width and color are captured when the stroke starts, so
/// toolbar changes never reach a line already in flight.
pub struct StrokeInProgress {
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl StrokeInProgress {
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            thickness,
            color,
        }
    }

    /// Append a point, skipping consecutive duplicates.
    pub fn add_point(&mut self, point: Pos2) {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// Freeze into a stroke element with a fresh id.
    pub fn finish(self) -> Stroke {
        Stroke::new(
            crate::id_generator::generate_id(),
            self.points,
            self.thickness,
            self.color,
        )
    }

    /// Cloned snapshot for preview rendering; previews carry the id 0
    /// sentinel and never enter the document.
    pub fn preview(&self) -> Stroke {
        Stroke::new(0, self.points.clone(), self.thickness, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_points_are_skipped() {
        let mut wip = StrokeInProgress::new(Pos2::new(1.0, 1.0), 2.0, Color32::BLACK);
        wip.add_point(Pos2::new(1.0, 1.0));
        wip.add_point(Pos2::new(2.0, 1.0));
        wip.add_point(Pos2::new(2.0, 1.0));
        assert_eq!(wip.points().len(), 2);
    }

    #[test]
    fn single_point_stroke_hit_tests_as_dot() {
        let stroke = Stroke::new(1, vec![Pos2::new(10.0, 10.0)], 6.0, Color32::BLACK);
        assert!(stroke.hit_test(Pos2::new(12.0, 10.0)));
        assert!(!stroke.hit_test(Pos2::new(14.0, 10.0)));
        assert!(stroke.rect().width() > 0.0);
    }
}
