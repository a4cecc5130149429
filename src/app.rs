use crate::canvas::{CanvasSurface, ImageFormat};
use crate::config::SketchConfig;
use crate::error::AppError;
use crate::input::CanvasInputAdapter;
use crate::panels;
use crate::solve::{HttpSolveClient, SolveClient, SolveOrchestrator, SolveResult};
use crate::texture_manager::CanvasTexture;
use crate::tools::{ToolMode, ToolState};
use egui::{Color32, TextureId, Vec2};
use std::sync::Arc;

/// The sketch-and-solve window.
///
/// Everything is mutated from the UI thread. The tokio runtime only drives
/// outbound solve requests, whose outcomes are picked up each frame.
pub struct SketchSolveApp {
    config: SketchConfig,
    canvas: CanvasSurface,
    texture: CanvasTexture,
    input: CanvasInputAdapter,
    tools: ToolState,
    solver: SolveOrchestrator,
    client: Arc<dyn SolveClient>,
    runtime: tokio::runtime::Runtime,
    ctx: egui::Context,
}

impl SketchSolveApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, AppError> {
        let config: SketchConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        let config = config.with_env_overrides();

        let client = HttpSolveClient::new(config.endpoint.clone())?;
        log::info!("Solving against {}", client.endpoint());

        Self::with_client(cc.egui_ctx.clone(), config, Arc::new(client))
    }

    /// Build the app around any [`SolveClient`].
    pub fn with_client(
        ctx: egui::Context,
        config: SketchConfig,
        client: Arc<dyn SolveClient>,
    ) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("solve-requests")
            .enable_all()
            .build()?;

        Ok(Self {
            tools: ToolState::new(config.brush_settings()),
            config,
            canvas: CanvasSurface::new(Color32::WHITE),
            texture: CanvasTexture::new(),
            input: CanvasInputAdapter::new(),
            solver: SolveOrchestrator::new(),
            client,
            runtime,
            ctx,
        })
    }

    pub fn tool_mode(&self) -> ToolMode {
        self.tools.mode()
    }

    pub fn select_tool(&mut self, mode: ToolMode) {
        self.tools.select(mode);
    }

    pub fn base_width(&self) -> f32 {
        self.tools.settings().base_width
    }

    pub fn set_base_width(&mut self, width: f32) {
        self.tools.set_base_width(width);
        self.config.base_width = self.tools.settings().base_width;
    }

    pub fn ink(&self) -> Color32 {
        self.tools.settings().ink
    }

    pub fn set_ink(&mut self, ink: Color32) {
        self.tools.set_ink(ink);
        self.config.ink = [ink.r(), ink.g(), ink.b()];
    }

    pub fn solve_result(&self) -> &SolveResult {
        self.solver.result()
    }

    pub fn is_drawing(&self) -> bool {
        self.canvas.is_drawing()
    }

    /// Wipe the canvas and forget the current answer.
    pub fn clear(&mut self) {
        log::info!("Clearing canvas");
        self.canvas.clear();
        self.solver.reset();
    }

    /// Send the current drawing to the solver.
    pub fn solve(&mut self) {
        let format = ImageFormat::Jpeg {
            quality: self.config.jpeg_quality,
        };
        let image = match self.canvas.serialize(format) {
            Ok(image) => image,
            Err(err) => {
                log::warn!("Cannot solve: {err}");
                return;
            }
        };

        let request = self.solver.solve(self.client.as_ref(), &image);
        let ctx = self.ctx.clone();
        self.runtime.spawn(async move {
            request.await;
            ctx.request_repaint();
        });
    }

    /// Size the canvas the first time its panel is laid out.
    pub(crate) fn ensure_canvas(&mut self, size: Vec2) {
        if !self.canvas.is_initialized() {
            self.canvas.initialize(size);
        }
    }

    pub(crate) fn handle_input(&mut self, response: &egui::Response) {
        let params = self.tools.params();
        for event in self.input.process(response, self.canvas.is_drawing()) {
            self.canvas.handle(event, &params);
        }
    }

    pub(crate) fn canvas_texture(&mut self, ctx: &egui::Context) -> Option<(TextureId, Vec2)> {
        let texture = self.texture.sync(ctx, &self.canvas)?;
        Some((texture, self.canvas.size()?))
    }
}

impl eframe::App for SketchSolveApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.solver.poll();

        panels::tools_panel(self, ctx);
        panels::solution_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
