//! Horizontally travelling twisted band.

use core::f32::consts::TAU;

use ssd1306_72x40::FrameBuffer;

use crate::{
    geom::LAST_COLUMN,
    mode::DrawMode,
    shape::Shape,
};

/// Placement of the band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwisterConfig {
    /// First column; the phase is measured from here.
    pub x1: i32,
    /// Last column. `x1 < 0` / `x2 > 71` leave the band's ends off screen.
    pub x2: i32,
    /// Centre line.
    pub y0: f32,
    /// Half-height.
    pub ry: f32,
}

impl Default for TwisterConfig {
    fn default() -> Self {
        Self {
            x1: -1,
            x2: 72,
            y0: 19.5,
            ry: 18.0,
        }
    }
}

/// Draws a band twisting around the line `y = y0`.
///
/// `phase` is the twist angle at `x1`; the wavelength changes linearly in
/// angular speed from `wavelen1` at `x1` to `wavelen2` at `x2`. The front face
/// is drawn in `Outline`, the back face in `BgOutline`. Overwrites the columns
/// it covers in `shape`.
pub fn twister(
    fb: &mut FrameBuffer,
    shape: &mut Shape,
    phase: f32,
    wavelen1: f32,
    wavelen2: f32,
    config: &TwisterConfig,
) {
    let valid = |w: f32| w.is_finite() && w != 0.0;
    if !valid(wavelen1) || !valid(wavelen2) {
        return;
    }

    let TwisterConfig { x1, x2, y0, ry } = *config;
    let omega = TAU / wavelen1;
    let omega2 = TAU / wavelen2;
    // Column distances can exceed `i32`, so they are taken in `f32`.
    let alpha = if x2 != x1 {
        (omega2 - omega) / (x2 as f32 - x1 as f32)
    } else {
        0.0
    };

    for x in x1.max(0)..=x2.min(LAST_COLUMN) {
        let dx = x as f32 - x1 as f32;
        let phi = phase + omega * dx + 0.5 * alpha * dx * dx;
        let dy = ry * libm::sinf(phi);
        // Half a pixel away from the centre line on both sides.
        let upper = libm::floorf(y0 - dy) as i32;
        let lower = libm::floorf(y0 + dy + 1.0) as i32;
        shape.set_column(x, upper, lower);
    }

    shape.draw(fb, x1, x2, DrawMode::Outline);
    shape.draw_back(fb, x1, x2, DrawMode::BgOutline);
}
