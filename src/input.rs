use crate::stroke::Point;
use egui::{Pos2, Rect, Response};

/// Pointer events as the canvas sees them, in canvas space.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CanvasInput {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
}

/// Primary pointer state sampled for one frame.
#[derive(Debug, Clone, Copy)]
pub struct PointerSample {
    /// Latest pointer position in screen coordinates, if any.
    pub position: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    /// Whether the press landed on the canvas (not on a panel covering it).
    pub over_canvas: bool,
}

/// Turns egui pointer state into [`CanvasInput`] events for a single pointer.
#[derive(Debug, Default)]
pub struct CanvasInputAdapter {
    last_position: Option<Pos2>,
}

impl CanvasInputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this frame's primary pointer state from the canvas response.
    pub fn process(&mut self, response: &Response, drawing: bool) -> Vec<CanvasInput> {
        let over_canvas = response.hovered();
        let sample = response.ctx.input(|input| PointerSample {
            position: input.pointer.interact_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
            over_canvas,
        });
        self.interpret(sample, response.rect, drawing)
    }

    /// Pure half of [`Self::process`].
    pub fn interpret(
        &mut self,
        sample: PointerSample,
        canvas: Rect,
        drawing: bool,
    ) -> Vec<CanvasInput> {
        let mut events = Vec::new();
        let mut drawing = drawing;

        if let Some(pos) = sample.position {
            if sample.pressed && sample.over_canvas && canvas.contains(pos) {
                events.push(CanvasInput::PointerDown(Point::relative_to(pos, canvas.min)));
                self.last_position = Some(pos);
                drawing = true;
            } else if drawing && self.last_position != Some(pos) {
                events.push(CanvasInput::PointerMove(Point::relative_to(pos, canvas.min)));
                self.last_position = Some(pos);
            }
        }

        if sample.released && drawing {
            events.push(CanvasInput::PointerUp);
            self.last_position = None;
        }

        events
    }
}
