use egui::Rect;

use crate::app::SketchApp;
use crate::document::CANVAS_SIZE;

pub fn canvas_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();
        // Fixed-size sheet, centered; the window resizing never reflows
        // what has been drawn
        let canvas_rect = Rect::from_center_size(available.center(), CANVAS_SIZE);
        app.set_canvas_rect(canvas_rect);

        app.handle_input(ctx);

        let painter = ui.painter_at(canvas_rect);
        app.render_canvas(&painter, canvas_rect);
    });
}
