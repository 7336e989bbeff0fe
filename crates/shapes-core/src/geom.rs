//! Pixel/coordinate conventions.
//!
//! Integer coordinates sit at pixel centres: pixel `(0, 0)` covers
//! `[-0.5, 0.5) x [-0.5, 0.5)`.

use ssd1306_72x40::protocol;

pub const WIDTH: i32 = protocol::WIDTH as i32;
pub const HEIGHT: i32 = protocol::HEIGHT as i32;
pub const LAST_COLUMN: i32 = WIDTH - 1;
pub const LAST_ROW: i32 = HEIGHT - 1;

/// Maps a real coordinate to the pixel containing it (round half up).
#[inline]
pub fn to_pixel(c: f32) -> i32 {
    libm::floorf(c + 0.5) as i32
}

/// Half-extent used by the ellipse and lozenge: distance from the centre to
/// the nearer edge of column `x`, or 0 when the centre lies inside it.
#[inline]
pub(crate) fn nearer_edge_distance(x: i32, x0: f32) -> f32 {
    let dx = libm::fabsf(x as f32 - x0);
    if dx < 0.5 { 0.0 } else { dx - 0.5 }
}
