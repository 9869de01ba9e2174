use eframe::egui;

/// Square icon button used for the tool selector.
pub struct ToolButton {
    pub icon: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(icon: &'static str, label: &'static str, selected: bool) -> Self {
        Self {
            icon,
            label,
            selected,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(36.0, 36.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                ui.visuals().selection.bg_fill
            } else if response.hovered() {
                ui.visuals().widgets.hovered.bg_fill
            } else {
                ui.visuals().widgets.inactive.bg_fill
            };

            // Draw background
            ui.painter().rect_filled(rect, 4.0, bg_color);

            // Draw icon text centered
            let font_id = egui::FontId::proportional(22.0);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon,
                font_id,
                ui.visuals().text_color(),
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, ui.visuals().selection.stroke.color),
                );
            }
        }

        response.on_hover_text(self.label)
    }
}
