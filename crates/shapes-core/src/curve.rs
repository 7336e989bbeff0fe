//! Closed-form filled shapes: ellipse and lozenge.

use ssd1306_72x40::FrameBuffer;

use crate::{
    geom::{LAST_COLUMN, nearer_edge_distance, to_pixel},
    mode::DrawMode,
    shape::Shape,
};

/// Filled ellipse centred at `(x0, y0)` with radii `rx`, `ry`.
///
/// Overwrites the columns it covers in `shape`. Non-positive radii draw nothing.
pub fn ellipse(
    fb: &mut FrameBuffer,
    shape: &mut Shape,
    x0: f32,
    y0: f32,
    rx: f32,
    ry: f32,
    mode: DrawMode,
) {
    if !(rx > 0.0 && ry > 0.0) {
        return;
    }

    let ratio = ry / rx;
    let r2 = rx * rx;
    symmetric_profile(fb, shape, x0, y0, rx, mode, |dx| {
        ratio * libm::sqrtf((r2 - dx * dx).max(0.0))
    });
}

/// Filled rhombus centred at `(x0, y0)` with half-diagonals `rx`, `ry`.
///
/// Overwrites the columns it covers in `shape`. Non-positive radii draw nothing.
pub fn lozenge(
    fb: &mut FrameBuffer,
    shape: &mut Shape,
    x0: f32,
    y0: f32,
    rx: f32,
    ry: f32,
    mode: DrawMode,
) {
    if !(rx > 0.0 && ry > 0.0) {
        return;
    }

    symmetric_profile(fb, shape, x0, y0, rx, mode, |dx| (1.0 - dx / rx) * ry);
}

/// Fills the columns within `rx` of `x0` with `y0 ± half_height(dx)`, where
/// `dx` is measured to the column edge nearest the centre so that any column
/// the curve overlaps gets at least one pixel, then draws the shape over the
/// unclamped range.
fn symmetric_profile<F>(
    fb: &mut FrameBuffer,
    shape: &mut Shape,
    x0: f32,
    y0: f32,
    rx: f32,
    mode: DrawMode,
    half_height: F,
) where
    F: Fn(f32) -> f32,
{
    let x_first = to_pixel(x0 - rx);
    let x_last = libm::ceilf(x0 + rx - 0.5) as i32;

    for x in x_first.max(0)..=x_last.min(LAST_COLUMN) {
        let dy = half_height(nearer_edge_distance(x, x0));
        shape.set_column(x, to_pixel(y0 - dy), to_pixel(y0 + dy));
    }

    shape.draw(fb, x_first, x_last, mode);
}
