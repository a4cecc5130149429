//! Stroke capture and rasterization.
//!
//! Paint is laid down directly into an RGBA buffer: a dab (filled disc) for the
//! initial press, and for every later pointer sample a connecting segment
//! unioned with a dab at the new point. The dab closes the notch a plain
//! segment leaves at direction changes, and it keeps fast, sparse pointer
//! samples joined.

use crate::tools::{Composite, LineCap, StrokeParams};
use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};

/// A pen position relative to the canvas' own top-left corner.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert a screen position into canvas space.
    pub fn relative_to(pos: Pos2, origin: Pos2) -> Self {
        Self::new(pos.x - origin.x, pos.y - origin.y)
    }
}

/// State held while the pointer is pressed on the canvas.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct StrokeSession {
    last_point: Point,
}

impl StrokeSession {
    pub fn begin(point: Point) -> Self {
        Self { last_point: point }
    }

    pub fn last_point(&self) -> Point {
        self.last_point
    }

    /// Move the session to `point`, returning the segment just travelled.
    pub fn advance(self, point: Point) -> (Point, Self) {
        (self.last_point, Self { last_point: point })
    }
}

/// Smallest radius a dab is drawn with, so the pixel under the pointer is
/// always covered even for hairline brushes.
const MIN_RADIUS: f32 = 0.75;

/// Paint a single dab centred on `at`.
pub fn paint_dot(buffer: &mut RgbaImage, at: Point, params: &StrokeParams) {
    let radius = (params.width / 2.0).max(MIN_RADIUS);
    paint_covered(buffer, (at, at, radius), params, |px, py| {
        distance_sq(px, py, at) <= radius * radius
    });
}

/// Paint a segment from `from` to `to` together with a dab at `to`.
pub fn paint_segment(buffer: &mut RgbaImage, from: Point, to: Point, params: &StrokeParams) {
    let radius = (params.width / 2.0).max(MIN_RADIUS);
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length_sq = dx * dx + dy * dy;

    paint_covered(buffer, (from, to, radius), params, |px, py| {
        // The dab at the end point.
        if distance_sq(px, py, to) <= radius * radius {
            return true;
        }
        if length_sq <= f32::EPSILON {
            return false;
        }

        let t = ((px - from.x) * dx + (py - from.y) * dy) / length_sq;
        let t = match params.cap {
            LineCap::Butt if !(0.0..=1.0).contains(&t) => return false,
            LineCap::Butt => t,
            LineCap::Round => t.clamp(0.0, 1.0),
        };
        let nearest = Point::new(from.x + t * dx, from.y + t * dy);
        distance_sq(px, py, nearest) <= radius * radius
    });
}

/// Overwrite every pixel with `color`.
pub fn fill(buffer: &mut RgbaImage, color: Color32) {
    let params = StrokeParams {
        color,
        width: 0.0,
        cap: LineCap::Butt,
        composite: Composite::Copy,
    };
    let corner = Point::new(buffer.width() as f32, buffer.height() as f32);
    paint_covered(buffer, (Point::new(0.0, 0.0), corner, 0.0), &params, |_, _| true);
}

/// Pixel rectangle `[x0, x1) x [y0, y1)` covering both points grown by `radius`,
/// clipped to a `width` x `height` buffer. `None` when nothing is left.
fn bounds(
    a: Point,
    b: Point,
    radius: f32,
    width: u32,
    height: u32,
) -> Option<(u32, u32, u32, u32)> {
    let min_x = a.x.min(b.x) - radius;
    let min_y = a.y.min(b.y) - radius;
    let max_x = a.x.max(b.x) + radius;
    let max_y = a.y.max(b.y) + radius;
    if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
        return None;
    }

    // Clamp in f32 so far-away coordinates never overflow the integer range.
    let (width, height) = (width as f32, height as f32);
    let x0 = min_x.floor().clamp(0.0, width);
    let y0 = min_y.floor().clamp(0.0, height);
    let x1 = (max_x.ceil() + 1.0).clamp(0.0, width);
    let y1 = (max_y.ceil() + 1.0).clamp(0.0, height);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

/// Blend `params.color` into every pixel near the `a`-`b` span whose centre
/// passes `covers`.
///
/// Each pixel is tested once against the union of shapes, so overlapping
/// primitives of one call never blend twice.
fn paint_covered(
    buffer: &mut RgbaImage,
    (a, b, radius): (Point, Point, f32),
    params: &StrokeParams,
    covers: impl Fn(f32, f32) -> bool,
) {
    let Some((x0, y0, x1, y1)) = bounds(a, b, radius, buffer.width(), buffer.height()) else {
        return;
    };
    let source = params.color.to_srgba_unmultiplied();

    for y in y0..y1 {
        for x in x0..x1 {
            if covers(x as f32 + 0.5, y as f32 + 0.5) {
                let pixel = buffer.get_pixel_mut(x, y);
                *pixel = composite(*pixel, source, params.composite);
            }
        }
    }
}

fn composite(dst: Rgba<u8>, src: [u8; 4], mode: Composite) -> Rgba<u8> {
    match mode {
        Composite::Copy => Rgba(src),
        Composite::SourceOver => {
            let src_a = src[3] as f32 / 255.0;
            if src_a >= 1.0 {
                return Rgba(src);
            }
            let dst_a = dst.0[3] as f32 / 255.0;
            let out_a = src_a + dst_a * (1.0 - src_a);
            if out_a <= 0.0 {
                return Rgba([0, 0, 0, 0]);
            }
            let channel = |i: usize| {
                let s = src[i] as f32 * src_a;
                let d = dst.0[i] as f32 * dst_a * (1.0 - src_a);
                ((s + d) / out_a).round().clamp(0.0, 255.0) as u8
            };
            Rgba([
                channel(0),
                channel(1),
                channel(2),
                (out_a * 255.0).round() as u8,
            ])
        }
    }
}

fn distance_sq(px: f32, py: f32, p: Point) -> f32 {
    let dx = px - p.x;
    let dy = py - p.y;
    dx * dx + dy * dy
}
