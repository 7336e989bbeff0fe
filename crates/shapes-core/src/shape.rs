//! Per-column boundary representation of a y-convex shape.

use ssd1306_72x40::{FrameBuffer, protocol};

use crate::{
    blit::vline,
    geom::{LAST_COLUMN, WIDTH, to_pixel},
    mode::DrawMode,
};

/// Default `upper` written by [`Shape::reset_all`]: below the screen.
pub const EMPTY_UPPER: i32 = 40;
/// Default `lower` written by [`Shape::reset_all`]: above the screen.
pub const EMPTY_LOWER: i32 = -1;

/// Which boundary array a line segment extends.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Edge {
    /// Topmost row per column; only ever moved up.
    Upper,
    /// Bottommost row per column; only ever moved down.
    Lower,
}

#[derive(Clone, Copy, Eq, PartialEq)]
enum Face {
    Front,
    Back,
}

/// A y-convex shape stored as one vertical span per screen column.
///
/// Column `x` covers rows `upper[x]..=lower[x]`; it is empty when
/// `lower[x] < upper[x]`. Values may lie off screen, which tells the outline
/// modes that the border there is not visible.
///
/// Boundaries persist between shapes: callers reset (or overwrite) every column
/// they are about to draw.
#[derive(Clone, Debug)]
pub struct Shape {
    upper: [i32; protocol::WIDTH],
    lower: [i32; protocol::WIDTH],
}

impl Default for Shape {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape {
    /// Creates a shape with every column empty.
    pub const fn new() -> Self {
        Self {
            upper: [EMPTY_UPPER; protocol::WIDTH],
            lower: [EMPTY_LOWER; protocol::WIDTH],
        }
    }

    pub fn upper(&self) -> &[i32; protocol::WIDTH] {
        &self.upper
    }

    pub fn lower(&self) -> &[i32; protocol::WIDTH] {
        &self.lower
    }

    pub fn upper_mut(&mut self) -> &mut [i32; protocol::WIDTH] {
        &mut self.upper
    }

    pub fn lower_mut(&mut self) -> &mut [i32; protocol::WIDTH] {
        &mut self.lower
    }

    /// Returns `(upper, lower)` of column `x`, if on screen.
    pub fn column(&self, x: i32) -> Option<(i32, i32)> {
        if !(0..WIDTH).contains(&x) {
            return None;
        }

        Some((self.upper[x as usize], self.lower[x as usize]))
    }

    /// Overwrites column `x`.
    ///
    /// Returns `false` when `x` is off screen.
    pub fn set_column(&mut self, x: i32, upper: i32, lower: i32) -> bool {
        if !(0..WIDTH).contains(&x) {
            return false;
        }

        self.upper[x as usize] = upper;
        self.lower[x as usize] = lower;
        true
    }

    /// Sets columns `x1..=x2` (clamped to the screen) to `upper`/`lower`.
    pub fn reset(&mut self, x1: i32, x2: i32, upper: i32, lower: i32) {
        let x1 = x1.max(0);
        let x2 = x2.min(LAST_COLUMN);
        if x2 < x1 {
            return;
        }

        let range = x1 as usize..=x2 as usize;
        self.upper[range.clone()].fill(upper);
        self.lower[range].fill(lower);
    }

    /// Empties every column.
    pub fn reset_all(&mut self) {
        self.reset(0, LAST_COLUMN, EMPTY_UPPER, EMPTY_LOWER);
    }

    /// Accumulates the edge from `(x0, y0)` to `(x1, y1)` into one boundary.
    ///
    /// Expects `x0 <= x1`. The boundary only grows outward (up for
    /// [`Edge::Upper`], down for [`Edge::Lower`]), so the edges of one convex
    /// polygon can be fed in any order.
    ///
    /// With `fine = false` interior columns are sampled at their centre. With
    /// `fine = true` each column is sampled at whichever edge lies further
    /// outward, so every pixel the area behind the segment overlaps is included.
    pub fn line_segment(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, edge: Edge, fine: bool) {
        let px0 = to_pixel(x0);
        let px1 = to_pixel(x1);
        if px0 > px1 || px0 >= WIDTH || px1 < 0 {
            return;
        }

        self.extend(edge, px0, to_pixel(y0));
        self.extend(edge, px1, to_pixel(y1));

        // Outward is to the right when the segment moves away from the shape
        // as x grows: rising for the upper boundary, falling for the lower.
        let outward_right = match edge {
            Edge::Upper => y1 < y0,
            Edge::Lower => y1 > y0,
        };
        // Far-off endpoints saturate in `to_pixel`; only the visible columns matter.
        let (px0, px1) = (px0.max(-1), px1.min(WIDTH));
        let (start, end) = match (fine, outward_right) {
            (true, true) => (px0, px1),
            (true, false) => (px0 + 1, px1 + 1),
            (false, _) => (px0 + 1, px1),
        };
        let start = start.max(0);
        let end = end.min(WIDTH);
        if end <= start {
            return;
        }

        let slope = (y1 - y0) / (x1 - x0);
        for px in start..end {
            let x = match (fine, outward_right) {
                (true, true) => px as f32 + 0.5,
                (true, false) => px as f32 - 0.5,
                (false, _) => px as f32,
            };
            self.extend(edge, px, to_pixel(y0 + slope * (x - x0)));
        }
    }

    fn extend(&mut self, edge: Edge, x: i32, y: i32) {
        if !(0..WIDTH).contains(&x) {
            return;
        }

        let x = x as usize;
        match edge {
            Edge::Upper => self.upper[x] = self.upper[x].min(y),
            Edge::Lower => self.lower[x] = self.lower[x].max(y),
        }
    }

    /// Draws columns `x1..=x2`.
    ///
    /// `x1 < 0` or `x2 > 71` mean the shape's left/right end lies off screen;
    /// the outline modes then leave that end open. In the outline modes the end
    /// columns `x1` and `x2` are drawn entirely in the border polarity and the
    /// vertical border between columns is reconstructed from neighbouring spans.
    /// The outline is incomplete at the physical screen edges, where the
    /// neighbour beyond the screen is unknown.
    pub fn draw(&self, fb: &mut FrameBuffer, x1: i32, x2: i32, mode: DrawMode) {
        self.draw_face(fb, x1, x2, mode, Face::Front);
    }

    /// Draws with the roles of `upper` and `lower` swapped.
    ///
    /// Columns that are empty on the front face (`lower < upper`) become the
    /// span `lower..=upper` here, e.g. the hidden side of a twisted band.
    pub fn draw_back(&self, fb: &mut FrameBuffer, x1: i32, x2: i32, mode: DrawMode) {
        self.draw_face(fb, x1, x2, mode, Face::Back);
    }

    #[inline]
    fn span(&self, x: i32, face: Face) -> (i32, i32) {
        let x = x as usize;
        match face {
            Face::Front => (self.upper[x], self.lower[x]),
            Face::Back => (self.lower[x], self.upper[x]),
        }
    }

    fn draw_face(&self, fb: &mut FrameBuffer, x1: i32, x2: i32, mode: DrawMode, face: Face) {
        let cx1 = x1.max(0);
        let cx2 = x2.min(LAST_COLUMN);
        if cx2 < cx1 {
            return;
        }

        if !mode.has_border() {
            for x in cx1..=cx2 {
                let (y1, y2) = self.span(x, face);
                vline(fb, x, x, y1, y2, mode);
            }
            return;
        }

        let border_mode = mode.border_mode();
        for x in cx1..=cx2 {
            let (y1, y2) = self.span(x, face);
            if x == x1 || x == x2 {
                vline(fb, x, x, y1, y2, border_mode);
                continue;
            }
            if y2 < y1 {
                continue;
            }

            vline(fb, x, x, y1, y2, mode);

            let mut y1_bdry = y1;
            let mut y2_bdry = y2;
            let neighbours = [(x < cx2).then_some(x + 1), (x > cx1).then_some(x - 1)];
            for nb in neighbours.into_iter().flatten() {
                let (nb_y1, nb_y2) = self.span(nb, face);
                if nb_y1 <= nb_y2 {
                    y1_bdry = y1_bdry.max(nb_y1);
                    y2_bdry = y2_bdry.min(nb_y2);
                } else {
                    // Nothing next door: this column is the shape's side wall.
                    y1_bdry = y2;
                }
            }

            if y1_bdry.saturating_sub(1) > y1 {
                vline(fb, x, x, y1 + 1, y1_bdry - 1, border_mode);
            }
            if y2_bdry.saturating_add(1) < y2 {
                vline(fb, x, x, y2_bdry + 1, y2 - 1, border_mode);
            }
        }
    }
}
