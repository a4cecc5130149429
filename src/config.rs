use crate::tools::BrushSettings;
use egui::Color32;

/// Environment variable that overrides the persisted solve endpoint.
pub const ENDPOINT_ENV: &str = "SKETCH_SOLVE_ENDPOINT";

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/solveServer";

/// Range of the brush size slider.
pub const BASE_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 1.0..=60.0;

/// Settings persisted between runs. Drawings themselves are never stored.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchConfig {
    pub endpoint: String,
    /// JPEG quality used when sending the canvas, `1..=100`.
    pub jpeg_quality: u8,
    pub base_width: f32,
    pub ink: [u8; 3],
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            jpeg_quality: 95,
            base_width: 5.0,
            ink: [0, 0, 0],
        }
    }
}

impl SketchConfig {
    /// Apply environment overrides on top of the loaded settings.
    pub fn with_env_overrides(self) -> Self {
        self.with_endpoint_override(std::env::var(ENDPOINT_ENV).ok())
    }

    fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            log::info!("Using solve endpoint from {ENDPOINT_ENV}: {endpoint}");
            self.endpoint = endpoint;
        }
        self
    }

    pub fn ink_color(&self) -> Color32 {
        let [r, g, b] = self.ink;
        Color32::from_rgb(r, g, b)
    }

    pub fn brush_settings(&self) -> BrushSettings {
        BrushSettings {
            ink: self.ink_color(),
            background: Color32::WHITE,
            base_width: self
                .base_width
                .clamp(*BASE_WIDTH_RANGE.start(), *BASE_WIDTH_RANGE.end()),
        }
    }
}
