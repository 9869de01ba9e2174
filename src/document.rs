use egui::Vec2;

use crate::element::{Element, ElementKind};

/// Logical size of the drawing sheet, in ui points.
pub const CANVAS_SIZE: Vec2 = Vec2::new(512.0, 512.0);

/// The display list: every placed drawable in z-order (oldest first).
///
/// The document knows nothing about undo; commands mutate it and the
/// history remembers how to take each mutation back.
#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<ElementKind>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Elements in paint order
    pub fn elements(&self) -> &[ElementKind] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn add_element(&mut self, element: ElementKind) {
        self.elements.push(element);
    }

    /// Remove an element by id, returning it if present
    pub fn remove_element(&mut self, id: usize) -> Option<ElementKind> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        Some(self.elements.remove(index))
    }

    pub fn find_element_by_id(&self, id: usize) -> Option<&ElementKind> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn element_mut(&mut self, id: usize) -> Option<&mut ElementKind> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Topmost element under `pos`, if any
    pub fn hit_test(&self, pos: egui::Pos2) -> Option<&ElementKind> {
        self.elements.iter().rev().find(|e| e.hit_test(pos))
    }

    /// Drop every element. The caller is responsible for resetting any
    /// history that refers to them.
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}
