use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::command::{Command, CommandHistory};
use crate::document::Document;
use crate::input::{self, InputHandler};
use crate::panels;
use crate::renderer::Renderer;
use crate::tools::{MarkerSettings, MarkerTool, StickerSettings, StickerTool, Tool, ToolKind};

#[cfg(not(target_arch = "wasm32"))]
use crate::export;

/// Tool configuration restored on startup. The drawing itself is deliberately
/// not part of this: a sketch lives and dies with its session.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct SavedSettings {
    marker: MarkerSettings,
    sticker: StickerSettings,
    active_tool: ToolKind,
}

/// The sketchpad application.
pub struct SketchApp {
    document: Document,
    history: CommandHistory,
    renderer: Renderer,
    input: InputHandler,
    marker: MarkerTool,
    sticker: StickerTool,
    active_tool: ToolKind,
    #[cfg(not(target_arch = "wasm32"))]
    export_requested: bool,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: SavedSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self {
            document: Document::new(),
            history: CommandHistory::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            marker: MarkerTool::new(settings.marker),
            sticker: StickerTool::new(settings.sticker),
            active_tool: settings.active_tool,
            #[cfg(not(target_arch = "wasm32"))]
            export_requested: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn command_history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn active_tool_kind(&self) -> ToolKind {
        self.active_tool
    }

    pub fn tool(&self, kind: ToolKind) -> &dyn Tool {
        match kind {
            ToolKind::Marker => &self.marker,
            ToolKind::Sticker => &self.sticker,
        }
    }

    fn active_tool_mut(&mut self) -> &mut dyn Tool {
        match self.active_tool {
            ToolKind::Marker => &mut self.marker,
            ToolKind::Sticker => &mut self.sticker,
        }
    }

    /// Switch tools, dropping the outgoing tool's in-progress state and
    /// previews.
    pub fn set_active_tool(&mut self, kind: ToolKind) {
        if self.active_tool == kind {
            return;
        }
        self.active_tool_mut().deactivate();
        self.renderer.clear_previews();
        self.active_tool = kind;
        self.active_tool_mut().activate();
        info!("tool selected: {}", self.tool(kind).name());
    }

    /// Show the active tool's controls; any command it returns is executed.
    pub fn active_tool_ui(&mut self, ui: &mut egui::Ui) -> Option<Command> {
        self.active_tool_mut().ui(ui)
    }

    pub fn execute_command(&mut self, command: Command) {
        if let Err(err) = self.history.execute(command, &mut self.document) {
            warn!("command failed: {err}");
        }
    }

    pub fn undo(&mut self) {
        if let Err(err) = self.history.undo(&mut self.document) {
            warn!("undo failed: {err}");
        }
    }

    pub fn redo(&mut self) {
        if let Err(err) = self.history.redo(&mut self.document) {
            warn!("redo failed: {err}");
        }
    }

    /// Wipe the sheet. Also forgets the whole undo/redo history, so a clear
    /// cannot be taken back.
    pub fn clear_canvas(&mut self) {
        info!(
            "canvas cleared, {} elements dropped",
            self.document.elements().len()
        );
        self.document.clear();
        self.history.clear();
    }

    pub fn set_canvas_rect(&mut self, rect: egui::Rect) {
        self.input.set_canvas_rect(rect);
    }

    pub fn set_toolbar_rect(&mut self, rect: egui::Rect) {
        self.input.set_toolbar_rect(rect);
    }

    /// Convert this frame's raw input into domain events and route them to
    /// the active tool.
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        let events = self.input.process_input(ctx);
        if events.is_empty() {
            return;
        }

        let Self {
            document,
            history,
            marker,
            sticker,
            active_tool,
            ..
        } = self;
        let tool: &mut dyn Tool = match active_tool {
            ToolKind::Marker => marker,
            ToolKind::Sticker => sticker,
        };

        for event in &events {
            input::route_event(event, tool, document, history);
        }
    }

    /// Repaint the scene: document in z-order, then the active tool's
    /// previews on top.
    pub fn render_canvas(&mut self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let Self {
            document,
            renderer,
            marker,
            sticker,
            active_tool,
            ..
        } = self;
        let tool: &dyn Tool = match active_tool {
            ToolKind::Marker => marker,
            ToolKind::Sticker => sticker,
        };

        tool.update_preview(renderer);
        renderer.render(painter, canvas_rect, document);
    }

    /// Kick off an export: ask the backend for a frame capture; the reply
    /// arrives as an input event on a later frame.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn request_export(&mut self, ctx: &egui::Context) {
        self.export_requested = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
    }

    /// Pick up the screenshot reply, crop out the canvas, and save it.
    #[cfg(not(target_arch = "wasm32"))]
    fn handle_screenshot_events(&mut self, ctx: &egui::Context) {
        if !self.export_requested {
            return;
        }

        let capture = ctx.input(|input| {
            input.events.iter().rev().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(capture) = capture else {
            return;
        };
        self.export_requested = false;

        let Some(canvas_rect) = self.input.canvas_rect() else {
            warn!("export failed: canvas was never laid out");
            return;
        };

        let result = export::canvas_bitmap(
            &capture,
            canvas_rect,
            ctx.pixels_per_point(),
            export::EXPORT_SCALE,
        )
        .and_then(|bitmap| export::encode_png(&bitmap))
        .and_then(|bytes| export::save_png_with_dialog(&bytes, &export::default_file_name()));

        match result {
            Ok(Some(path)) => info!("canvas exported to {}", path.display()),
            Ok(None) => info!("export cancelled"),
            Err(err) => warn!("export failed: {err}"),
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = SavedSettings {
            marker: self.marker.settings(),
            sticker: self.sticker.settings().clone(),
            active_tool: self.active_tool,
        };
        eframe::set_value(storage, eframe::APP_KEY, &settings);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar_panel(self, ctx);
        panels::canvas_panel(self, ctx);

        #[cfg(not(target_arch = "wasm32"))]
        self.handle_screenshot_events(ctx);
    }
}
