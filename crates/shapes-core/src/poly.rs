//! Convex polygons that can be scaled, rotated and placed anywhere.

use core::fmt;

use heapless::Vec;
use log::{debug, trace, warn};
use ssd1306_72x40::FrameBuffer;

use crate::{
    geom::to_pixel,
    mode::DrawMode,
    shape::{EMPTY_LOWER, EMPTY_UPPER, Edge, Shape},
};

/// Most vertices a polygon can hold.
pub const MAX_VERTICES: usize = 32;

/// Rejected vertex lists.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PolyError {
    /// `x` and `y` have different lengths.
    LengthMismatch { x: usize, y: usize },
    /// Fewer than three vertices.
    TooFewVertices(usize),
    /// More than [`MAX_VERTICES`] vertices.
    TooManyVertices(usize),
    /// Unit is zero or not finite.
    InvalidUnit,
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyError::LengthMismatch { x, y } => {
                write!(f, "x and y lengths differ ({x} vs {y})")
            }
            PolyError::TooFewVertices(n) => write!(f, "polygon needs at least 3 vertices, got {n}"),
            PolyError::TooManyVertices(n) => {
                write!(f, "polygon holds at most {MAX_VERTICES} vertices, got {n}")
            }
            PolyError::InvalidUnit => f.write_str("unit must be finite and non-zero"),
        }
    }
}

/// Placement applied by [`ConvexPoly::draw`]: scale first, then rotate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Counter-clockwise rotation in degrees.
    pub angle: f32,
    pub sx: f32,
    pub sy: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            angle: 0.0,
            sx: 1.0,
            sy: 1.0,
        }
    }
}

/// A convex polygon in its own y-up frame, reference point at the origin.
///
/// Vertices are listed counter-clockwise. Neither convexity nor winding is
/// checked (see the `contract-checks` feature); other input renders
/// unpredictably.
#[derive(Clone, Debug)]
pub struct ConvexPoly {
    x: Vec<f32, MAX_VERTICES>,
    y: Vec<f32, MAX_VERTICES>,
    unit: f32,
}

impl ConvexPoly {
    /// Builds a polygon from vertex coordinates, each divided by `unit`.
    pub fn new(x: &[f32], y: &[f32], unit: f32) -> Result<Self, PolyError> {
        if !(unit.is_finite() && unit != 0.0) {
            warn!("poly: rejected unit={}", unit);
            return Err(PolyError::InvalidUnit);
        }

        let mut poly = Self {
            x: Vec::new(),
            y: Vec::new(),
            unit,
        };
        poly.change(x, y)?;
        Ok(poly)
    }

    /// Replaces the vertices, keeping the unit given at construction.
    ///
    /// On error the previous vertices are kept.
    pub fn change(&mut self, x: &[f32], y: &[f32]) -> Result<(), PolyError> {
        let n = validate(x.len(), y.len()).inspect_err(|err| warn!("poly: rejected: {}", err))?;

        self.x.clear();
        self.y.clear();
        for (&vx, &vy) in x.iter().zip(y) {
            // Capacity was checked by `validate`.
            let _ = self.x.push(vx / self.unit);
            let _ = self.y.push(vy / self.unit);
        }
        debug!("poly: {} vertices unit={}", n, self.unit);

        #[cfg(feature = "contract-checks")]
        debug_assert!(
            self.is_convex_ccw(),
            "polygon vertices must be convex and counter-clockwise"
        );

        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.x.len()
    }

    /// Vertex `i` in the polygon's own frame, after dividing by the unit.
    pub fn vertex(&self, i: usize) -> Option<(f32, f32)> {
        Some((*self.x.get(i)?, *self.y.get(i)?))
    }

    /// `true` when every turn is a left turn (or straight) in the y-up frame
    /// and the polygon encloses positive area.
    pub fn is_convex_ccw(&self) -> bool {
        let n = self.x.len();
        let mut area2 = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let k = (i + 2) % n;
            let cross = (self.x[j] - self.x[i]) * (self.y[k] - self.y[j])
                - (self.y[j] - self.y[i]) * (self.x[k] - self.x[j]);
            if cross < 0.0 {
                return false;
            }
            area2 += self.x[i] * self.y[j] - self.x[j] * self.y[i];
        }
        area2 > 0.0
    }

    /// Draws the polygon with its reference point at screen `(x0, y0)`.
    ///
    /// Resets and overwrites the columns it covers in `shape`.
    pub fn draw(
        &self,
        fb: &mut FrameBuffer,
        shape: &mut Shape,
        x0: f32,
        y0: f32,
        mode: DrawMode,
        transform: &Transform,
    ) {
        let n = self.x.len();
        let angle = transform.angle.to_radians();
        let (sin, cos) = (libm::sinf(angle), libm::cosf(angle));

        let mut sx: Vec<f32, MAX_VERTICES> = Vec::new();
        let mut sy: Vec<f32, MAX_VERTICES> = Vec::new();
        for (&vx, &vy) in self.x.iter().zip(&self.y) {
            let px = vx * transform.sx;
            let py = vy * transform.sy;
            let _ = sx.push(x0 + cos * px - sin * py);
            // Screen rows grow downwards.
            let _ = sy.push(y0 - (sin * px + cos * py));
        }

        let mut left = 0;
        let mut right = 0;
        for i in 1..n {
            if sx[i] < sx[left] {
                left = i;
            }
            if sx[i] > sx[right] {
                right = i;
            }
        }

        let x_first = to_pixel(sx[left]);
        let x_last = to_pixel(sx[right]);
        trace!("poly: columns {}..={} mode={:?}", x_first, x_last, mode);
        shape.reset(x_first, x_last, EMPTY_UPPER, EMPTY_LOWER);

        // Counter-clockwise from the leftmost vertex runs along the bottom of
        // the screen; clockwise runs along the top.
        let mut i = left;
        while i != right {
            let j = (i + 1) % n;
            shape.line_segment(sx[i], sy[i], sx[j], sy[j], Edge::Lower, true);
            i = j;
        }
        let mut i = left;
        while i != right {
            let j = (i + n - 1) % n;
            shape.line_segment(sx[i], sy[i], sx[j], sy[j], Edge::Upper, true);
            i = j;
        }

        shape.draw(fb, x_first, x_last, mode);
    }
}

fn validate(nx: usize, ny: usize) -> Result<usize, PolyError> {
    if nx != ny {
        return Err(PolyError::LengthMismatch { x: nx, y: ny });
    }
    if nx < 3 {
        return Err(PolyError::TooFewVertices(nx));
    }
    if nx > MAX_VERTICES {
        return Err(PolyError::TooManyVertices(nx));
    }
    Ok(nx)
}
