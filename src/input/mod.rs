use egui::{Context, PointerButton, Pos2, Rect};

mod router;
pub use router::route_event;

/// Represents which part of the window an input event occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// The drawing sheet
    Canvas,
    /// The toolbar side panel
    Toolbar,
    /// Anywhere else (window chrome, margins)
    Global,
}

/// Where an input event occurred
#[derive(Debug, Clone, Copy)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// The panel the position falls in
    pub panel: PanelKind,
}

/// Domain-level pointer events, decoupled from egui's raw input.
///
/// Only the primary button draws; the other buttons are ignored here.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { location: InputLocation },
    /// Primary button was released
    PointerUp { location: InputLocation },
    /// Pointer moved, held or not
    PointerMove { location: InputLocation },
    /// Pointer entered the window
    PointerEnter { location: InputLocation },
    /// Pointer left the canvas or the window; previews must be dropped
    PointerLeave,
}

/// Converts raw egui input into [`InputEvent`]s and remembers which panel
/// the pointer was last over so canvas exits produce a leave event.
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    last_panel: PanelKind,
    canvas_rect: Option<Rect>,
    toolbar_rect: Option<Rect>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
            last_panel: PanelKind::Global,
            canvas_rect: None,
            toolbar_rect: None,
        }
    }

    /// Update the drawing sheet rectangle (set by the canvas panel each frame)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    /// Update the toolbar rectangle
    pub fn set_toolbar_rect(&mut self, rect: Rect) {
        self.toolbar_rect = Some(rect);
    }

    pub fn canvas_rect(&self) -> Option<Rect> {
        self.canvas_rect
    }

    /// Determine which panel a position is in
    fn determine_panel(&self, pos: Pos2) -> PanelKind {
        if let Some(rect) = self.canvas_rect {
            if rect.contains(pos) {
                return PanelKind::Canvas;
            }
        }

        if let Some(rect) = self.toolbar_rect {
            if rect.contains(pos) {
                return PanelKind::Toolbar;
            }
        }

        PanelKind::Global
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            panel: self.determine_panel(pos),
        }
    }

    /// Process raw egui input for this frame and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            if let Some(pos) = input.pointer.hover_pos() {
                let location = self.make_location(pos);

                if self.last_pointer_pos.is_none() {
                    events.push(InputEvent::PointerEnter { location });
                } else if self.last_panel == PanelKind::Canvas
                    && location.panel != PanelKind::Canvas
                {
                    // Crossing off the sheet counts as leaving: the tool
                    // preview must not linger at the edge
                    events.push(InputEvent::PointerLeave);
                }

                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove { location });
                }

                if input.pointer.button_pressed(PointerButton::Primary) {
                    events.push(InputEvent::PointerDown { location });
                }
                if input.pointer.button_released(PointerButton::Primary) {
                    events.push(InputEvent::PointerUp { location });
                }

                self.last_pointer_pos = Some(pos);
                self.last_panel = location.panel;
            } else if self.last_pointer_pos.is_some() {
                events.push(InputEvent::PointerLeave);
                self.last_pointer_pos = None;
                self.last_panel = PanelKind::Global;
            }
        });

        events
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
