#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod document;
pub mod element;
pub mod export;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod tools;
pub mod util;

pub use app::SketchApp;
pub use command::{Command, CommandHistory};
pub use document::Document;
pub use element::{Element, ElementKind};
pub use input::{InputEvent, InputLocation};
pub use renderer::Renderer;
pub use tools::{MarkerTool, StickerTool, Tool};
