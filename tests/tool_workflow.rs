// Drives the pointer-event layer end to end: domain events through the
// router into the active tool, commands into the history, mutations into
// the document.

use egui::Pos2;
use sketchpad::command::CommandHistory;
use sketchpad::document::Document;
use sketchpad::input::{route_event, InputEvent, InputLocation, PanelKind};
use sketchpad::tools::{MarkerSettings, MarkerTool, StickerSettings, StickerTool};
use sketchpad::{Element, ElementKind};

fn on_canvas(x: f32, y: f32) -> InputLocation {
    InputLocation {
        position: Pos2::new(x, y),
        panel: PanelKind::Canvas,
    }
}

fn on_toolbar(x: f32, y: f32) -> InputLocation {
    InputLocation {
        position: Pos2::new(x, y),
        panel: PanelKind::Toolbar,
    }
}

#[test]
fn drag_across_canvas_leaves_one_stroke() {
    let mut tool = MarkerTool::new(MarkerSettings::default());
    let mut document = Document::new();
    let mut history = CommandHistory::new();

    let events = [
        InputEvent::PointerDown {
            location: on_canvas(10.0, 10.0),
        },
        InputEvent::PointerMove {
            location: on_canvas(20.0, 15.0),
        },
        InputEvent::PointerMove {
            location: on_canvas(30.0, 25.0),
        },
        InputEvent::PointerUp {
            location: on_canvas(30.0, 25.0),
        },
    ];
    for event in &events {
        route_event(event, &mut tool, &mut document, &mut history);
    }

    assert_eq!(document.elements().len(), 1);
    assert!(history.can_undo());
    match &document.elements()[0] {
        ElementKind::Stroke(stroke) => assert_eq!(stroke.points().len(), 3),
        other => panic!("unexpected element: {other:?}"),
    }
}

#[test]
fn toolbar_events_never_reach_the_tool() {
    let mut tool = MarkerTool::new(MarkerSettings::default());
    let mut document = Document::new();
    let mut history = CommandHistory::new();

    let events = [
        InputEvent::PointerDown {
            location: on_toolbar(5.0, 5.0),
        },
        InputEvent::PointerUp {
            location: on_toolbar(5.0, 5.0),
        },
    ];
    for event in &events {
        route_event(event, &mut tool, &mut document, &mut history);
    }

    assert!(document.is_empty());
    assert!(!history.can_undo());
}

#[test]
fn leaving_the_canvas_mid_drag_finalizes_the_stroke() {
    let mut tool = MarkerTool::new(MarkerSettings::default());
    let mut document = Document::new();
    let mut history = CommandHistory::new();

    let events = [
        InputEvent::PointerDown {
            location: on_canvas(10.0, 10.0),
        },
        InputEvent::PointerMove {
            location: on_canvas(500.0, 10.0),
        },
        InputEvent::PointerLeave,
        // The release happens outside; nothing more may be recorded
        InputEvent::PointerUp {
            location: on_toolbar(600.0, 10.0),
        },
    ];
    for event in &events {
        route_event(event, &mut tool, &mut document, &mut history);
    }

    assert_eq!(document.elements().len(), 1);
    assert_eq!(history.undo_stack().len(), 1);
}

#[test]
fn sticker_place_then_drag_is_two_undo_steps() {
    let mut tool = StickerTool::new(StickerSettings::default());
    let mut document = Document::new();
    let mut history = CommandHistory::new();

    let place = [
        InputEvent::PointerDown {
            location: on_canvas(100.0, 100.0),
        },
        InputEvent::PointerUp {
            location: on_canvas(100.0, 100.0),
        },
    ];
    for event in &place {
        route_event(event, &mut tool, &mut document, &mut history);
    }
    assert_eq!(document.elements().len(), 1);
    let placed_rect = document.elements()[0].rect();

    let drag = [
        InputEvent::PointerDown {
            location: on_canvas(100.0, 100.0),
        },
        InputEvent::PointerMove {
            location: on_canvas(160.0, 130.0),
        },
        InputEvent::PointerUp {
            location: on_canvas(160.0, 130.0),
        },
    ];
    for event in &drag {
        route_event(event, &mut tool, &mut document, &mut history);
    }

    assert_eq!(history.undo_stack().len(), 2);
    assert_ne!(document.elements()[0].rect(), placed_rect);

    // Undo the move, then the placement
    history.undo(&mut document).unwrap();
    assert_eq!(document.elements()[0].rect(), placed_rect);
    history.undo(&mut document).unwrap();
    assert!(document.is_empty());
}
