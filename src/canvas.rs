use crate::error::CanvasError;
use crate::input::CanvasInput;
use crate::stroke::{self, Point, StrokeSession};
use crate::tools::StrokeParams;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use egui::{Color32, Vec2};
use image::RgbaImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;

/// Encoding used when the canvas is serialized.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ImageFormat {
    Png,
    /// Lossy encoding, quality in `1..=100`.
    Jpeg { quality: u8 },
}

/// An encoded snapshot of the canvas.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    /// `data:<mime>;base64,<payload>`
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// The drawing surface: a single opaque raster layer plus the stroke in progress.
#[derive(Debug)]
pub struct CanvasSurface {
    buffer: Option<RgbaImage>,
    background: Color32,
    session: Option<StrokeSession>,
    // Bumped on every pixel change so the on-screen texture knows to refresh.
    version: u64,
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}

impl CanvasSurface {
    pub fn new(background: Color32) -> Self {
        Self {
            buffer: None,
            background,
            session: None,
            version: 0,
        }
    }

    /// Size the buffer 1:1 to the on-screen rect and paint the background.
    ///
    /// Runs once when the canvas first becomes visible. Later resizes keep the
    /// original buffer.
    pub fn initialize(&mut self, size: Vec2) {
        let width = size.x.round().max(1.0) as u32;
        let height = size.y.round().max(1.0) as u32;
        let mut buffer = RgbaImage::new(width, height);
        stroke::fill(&mut buffer, self.background);
        log::info!("Canvas initialized at {width}x{height}");

        self.buffer = Some(buffer);
        self.session = None;
        self.version += 1;
    }

    pub fn is_initialized(&self) -> bool {
        self.buffer.is_some()
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&StrokeSession> {
        self.session.as_ref()
    }

    pub fn buffer(&self) -> Option<&RgbaImage> {
        self.buffer.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn size(&self) -> Option<Vec2> {
        self.buffer
            .as_ref()
            .map(|b| Vec2::new(b.width() as f32, b.height() as f32))
    }

    /// Dispatch one pointer event.
    pub fn handle(&mut self, input: CanvasInput, params: &StrokeParams) {
        match input {
            CanvasInput::PointerDown(point) => self.on_pointer_down(point, params),
            CanvasInput::PointerMove(point) => self.on_pointer_move(point, params),
            CanvasInput::PointerUp => self.on_pointer_up(),
        }
    }

    /// Start a stroke and mark a dot, so a tap without drag still leaves ink.
    pub fn on_pointer_down(&mut self, point: Point, params: &StrokeParams) {
        let Some(buffer) = self.buffer.as_mut() else {
            return;
        };
        stroke::paint_dot(buffer, point, params);
        self.session = Some(StrokeSession::begin(point));
        self.version += 1;
    }

    pub fn on_pointer_move(&mut self, point: Point, params: &StrokeParams) {
        let (Some(session), Some(buffer)) = (self.session, self.buffer.as_mut()) else {
            return;
        };
        let (from, session) = session.advance(point);
        stroke::paint_segment(buffer, from, point, params);
        self.session = Some(session);
        self.version += 1;
    }

    pub fn on_pointer_up(&mut self) {
        self.session = None;
    }

    /// Repaint the whole buffer in the background color.
    ///
    /// The caller is responsible for resetting the solve result alongside.
    pub fn clear(&mut self) {
        if let Some(buffer) = self.buffer.as_mut() {
            stroke::fill(buffer, self.background);
            self.version += 1;
        }
    }

    /// Encode the current buffer. Safe to call mid-stroke; the buffer is untouched.
    pub fn serialize(&self, format: ImageFormat) -> Result<EncodedImage, CanvasError> {
        let buffer = self.buffer.as_ref().ok_or(CanvasError::NotInitialized)?;
        let mut bytes = Vec::new();

        let mime = match format {
            ImageFormat::Png => {
                buffer.write_with_encoder(PngEncoder::new(&mut bytes))?;
                "image/png"
            }
            ImageFormat::Jpeg { quality } => {
                // JPEG has no alpha channel; the canvas is opaque anyway.
                let rgb = image::DynamicImage::ImageRgba8(buffer.clone()).to_rgb8();
                rgb.write_with_encoder(JpegEncoder::new_with_quality(
                    &mut bytes,
                    quality.clamp(1, 100),
                ))?;
                "image/jpeg"
            }
        };

        Ok(EncodedImage { mime, bytes })
    }
}
