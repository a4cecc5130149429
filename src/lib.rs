#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod panels;
pub mod solve;
pub mod stroke;
pub mod texture_manager;
pub mod tools;

pub use app::SketchSolveApp;
pub use canvas::{CanvasSurface, EncodedImage, ImageFormat};
pub use config::SketchConfig;
pub use error::{AppError, CanvasError, SolveError};
pub use input::{CanvasInput, CanvasInputAdapter};
pub use solve::{HttpSolveClient, SolveAnswer, SolveClient, SolveOrchestrator, SolveResult};
pub use stroke::{Point, StrokeSession};
pub use tools::{StrokeParams, ToolMode, ToolState};
