use egui::Color32;

/// The drawing modes selectable from the tools panel.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ToolMode {
    #[default]
    Pen,
    Eraser,
}

impl ToolMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Eraser => "Eraser",
        }
    }
}

/// How the ends of a connecting segment are shaped.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LineCap {
    Butt,
    Round,
}

/// How new paint combines with the pixels already in the buffer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Composite {
    /// Regular alpha blending over the existing pixel.
    SourceOver,
    /// Overwrite the existing pixel outright.
    Copy,
}

/// Everything the stroke renderer needs to know to lay down paint.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct StrokeParams {
    pub color: Color32,
    pub width: f32,
    pub cap: LineCap,
    pub composite: Composite,
}

/// User adjustable inputs the tool modes derive their parameters from.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct BrushSettings {
    pub ink: Color32,
    pub background: Color32,
    pub base_width: f32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            ink: Color32::BLACK,
            background: Color32::WHITE,
            base_width: 5.0,
        }
    }
}

/// Tracks the active drawing mode.
///
/// Starts in [`ToolMode::Pen`] so a stroke made before any tool button is
/// pressed still has well defined parameters.
#[derive(Debug, Clone, Default)]
pub struct ToolState {
    mode: ToolMode,
    settings: BrushSettings,
}

impl ToolState {
    pub fn new(settings: BrushSettings) -> Self {
        Self {
            mode: ToolMode::Pen,
            settings,
        }
    }

    /// Switch to `mode`. Switching never touches the canvas.
    pub fn select(&mut self, mode: ToolMode) {
        if self.mode != mode {
            log::info!("Tool selected: {}", mode.name());
        }
        self.mode = mode;
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    pub fn set_base_width(&mut self, width: f32) {
        self.settings.base_width = width.max(1.0);
    }

    pub fn set_ink(&mut self, ink: Color32) {
        self.settings.ink = ink;
    }

    /// Stroke parameters for the active mode.
    pub fn params(&self) -> StrokeParams {
        let BrushSettings {
            ink,
            background,
            base_width,
        } = self.settings;

        match self.mode {
            ToolMode::Pen => StrokeParams {
                color: ink,
                width: base_width * 2.0,
                cap: LineCap::Butt,
                composite: Composite::SourceOver,
            },
            // Erasing is painting in the background color, never punching alpha.
            ToolMode::Eraser => StrokeParams {
                color: background,
                width: base_width * 4.0,
                cap: LineCap::Round,
                composite: Composite::SourceOver,
            },
        }
    }
}
