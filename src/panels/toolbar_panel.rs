use crate::app::SketchApp;
use crate::components::ToolButton;
use crate::tools::ToolKind;

pub fn toolbar_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("toolbar")
        .resizable(false)
        .default_width(190.0)
        .show(ctx, |ui| {
            app.set_toolbar_rect(ui.max_rect());

            ui.heading("Sketchpad");
            ui.separator();

            // Tool selector
            ui.horizontal(|ui| {
                for kind in ToolKind::ALL {
                    let tool = app.tool(kind);
                    let selected = app.active_tool_kind() == kind;
                    if ToolButton::new(tool.icon(), tool.name(), selected)
                        .show(ui)
                        .clicked()
                    {
                        app.set_active_tool(kind);
                    }
                }
            });

            ui.separator();

            // Active tool controls
            if let Some(command) = app.active_tool_ui(ui) {
                app.execute_command(command);
            }

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.command_history().can_undo();
                let can_redo = app.command_history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });

            ui.horizontal(|ui| {
                let has_content = !app.document().is_empty();
                if ui
                    .add_enabled(has_content, egui::Button::new("Clear"))
                    .clicked()
                {
                    app.clear_canvas();
                }

                #[cfg(not(target_arch = "wasm32"))]
                if ui.button("Export PNG").clicked() {
                    app.request_export(ctx);
                }
                #[cfg(target_arch = "wasm32")]
                ui.add_enabled(false, egui::Button::new("Export PNG"))
                    .on_hover_text("Export is available in the desktop build");
            });

            ui.separator();

            let history = app.command_history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack: {}", history.undo_stack().len()));
                ui.label(format!("Redo stack: {}", history.redo_stack().len()));
            });
        });
}
