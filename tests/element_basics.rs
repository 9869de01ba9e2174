use egui::{Color32, Pos2, Vec2};
use sketchpad::document::Document;
use sketchpad::element::{factory, Element, ElementKind};

#[test]
fn stroke_rect_covers_its_points_plus_half_width() {
    let stroke = factory::create_stroke(
        vec![Pos2::new(10.0, 10.0), Pos2::new(30.0, 50.0)],
        4.0,
        Color32::BLACK,
    );
    let rect = stroke.rect();
    assert_eq!(rect.min, Pos2::new(8.0, 8.0));
    assert_eq!(rect.max, Pos2::new(32.0, 52.0));
}

#[test]
fn stroke_hit_test_respects_thickness() {
    let stroke = factory::create_stroke(
        vec![Pos2::new(0.0, 0.0), Pos2::new(100.0, 0.0)],
        6.0,
        Color32::BLACK,
    );
    assert!(stroke.hit_test(Pos2::new(50.0, 2.0)));
    assert!(!stroke.hit_test(Pos2::new(50.0, 10.0)));
}

#[test]
fn translate_moves_every_point() {
    let mut stroke = factory::create_stroke(
        vec![Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0)],
        2.0,
        Color32::BLACK,
    );
    let before = stroke.rect();
    stroke.translate(Vec2::new(5.0, 7.0));
    let after = stroke.rect();
    assert_eq!(after.min - before.min, Vec2::new(5.0, 7.0));
}

#[test]
fn elements_get_unique_ids() {
    let a = factory::create_stroke(vec![Pos2::ZERO], 1.0, Color32::BLACK);
    let b = factory::create_sticker("🙂", Pos2::ZERO, 24.0, 0.0);
    assert_ne!(a.id(), b.id());
}

#[test]
fn document_hit_test_prefers_the_topmost_element() {
    let mut document = Document::new();
    let below = factory::create_sticker("🙂", Pos2::new(50.0, 50.0), 32.0, 0.0);
    let above = factory::create_sticker("⭐", Pos2::new(50.0, 50.0), 32.0, 0.0);
    let above_id = above.id();
    document.add_element(below);
    document.add_element(above);

    let hit = document.hit_test(Pos2::new(50.0, 50.0)).unwrap();
    assert_eq!(hit.id(), above_id);
}

#[test]
fn document_remove_element_returns_the_removed_drawable() {
    let mut document = Document::new();
    let sticker = factory::create_sticker("🐙", Pos2::new(10.0, 10.0), 24.0, 0.0);
    let id = sticker.id();
    document.add_element(sticker);

    let removed = document.remove_element(id);
    assert!(matches!(removed, Some(ElementKind::Sticker(_))));
    assert!(document.is_empty());
    assert!(document.remove_element(id).is_none());
}
