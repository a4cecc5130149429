use crate::canvas::CanvasSurface;
use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

/// Keeps the GPU copy of the canvas buffer in sync with its pixels.
///
/// The texture is re-uploaded only when the canvas version moves.
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    uploaded_version: Option<u64>,
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload the canvas if it changed and return the texture to paint.
    pub fn sync(&mut self, ctx: &Context, canvas: &CanvasSurface) -> Option<TextureId> {
        let buffer = canvas.buffer()?;

        if self.uploaded_version != Some(canvas.version()) {
            let size = [buffer.width() as usize, buffer.height() as usize];
            let image = ColorImage::from_rgba_unmultiplied(size, buffer.as_raw());

            match &mut self.handle {
                Some(handle) => handle.set(image, TextureOptions::NEAREST),
                None => {
                    let handle = ctx.load_texture("sketch-canvas", image, TextureOptions::NEAREST);
                    self.handle = Some(handle);
                }
            }
            self.uploaded_version = Some(canvas.version());
        }

        self.handle.as_ref().map(|handle| handle.id())
    }
}
