//! Axis-aligned rectangles, drawn straight through the blitters.

use ssd1306_72x40::FrameBuffer;

use crate::{
    blit::{hline, vline},
    mode::DrawMode,
};

/// Filled rectangle from `(x0, y0)` to `(x1, y1)` inclusive, clipped to screen.
///
/// The outline modes fill the 1px-inset interior and hand the border to
/// [`rect_outline`] in the opposite polarity.
pub fn rect(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, mode: DrawMode) {
    if !mode.has_border() {
        vline(fb, x0, x1, y0, y1, mode);
        return;
    }

    if x0 < x1 && y0 < y1 {
        vline(fb, x0 + 1, x1 - 1, y0 + 1, y1 - 1, mode.body_mode());
    }
    rect_outline(fb, x0, y0, x1, y1, mode.border_mode());
}

/// 1px rectangle border from `(x0, y0)` to `(x1, y1)` inclusive.
///
/// Every border pixel is touched exactly once, so `Xor` is safe for any size.
/// The outline modes draw like `Fill` / `BgFill`.
pub fn rect_outline(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, mode: DrawMode) {
    if x1 < x0 || y1 < y0 {
        return;
    }

    let mode = mode.body_mode();
    vline(fb, x0, x0, y0, y1, mode);
    if x0 < x1 {
        vline(fb, x1, x1, y0, y1, mode);
    }
    if x1.saturating_sub(x0) > 1 {
        hline(fb, y0, x0 + 1, x1 - 1, mode);
        if y0 < y1 {
            hline(fb, y1, x0 + 1, x1 - 1, mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_rect_sets_one_pixel() {
        let mut fb = FrameBuffer::new();
        rect(&mut fb, 7, 9, 7, 9, DrawMode::Fill);
        assert_eq!(fb.count_set(), 1);
        assert_eq!(fb.pixel(7, 9), Some(true));
    }

    #[test]
    fn filled_rect_is_clipped() {
        let mut fb = FrameBuffer::new();
        rect(&mut fb, -5, -5, 4, 2, DrawMode::Fill);
        assert_eq!(fb.count_set(), 5 * 3);

        rect(&mut fb, 80, 0, 90, 39, DrawMode::Fill);
        rect(&mut fb, 10, 10, 9, 20, DrawMode::Fill);
        assert_eq!(fb.count_set(), 5 * 3);
    }

    #[test]
    fn xor_outline_touches_small_rects_once() {
        for (w, h) in [(1, 1), (2, 2), (1, 4), (4, 1), (2, 5), (3, 3)] {
            let mut fb = FrameBuffer::new();
            rect_outline(&mut fb, 20, 20, 20 + w - 1, 20 + h - 1, DrawMode::Xor);
            let perimeter = if w <= 2 || h <= 2 {
                (w * h) as u32
            } else {
                (2 * w + 2 * h - 4) as u32
            };
            assert_eq!(fb.count_set(), perimeter, "{w}x{h}");

            rect_outline(&mut fb, 20, 20, 20 + w - 1, 20 + h - 1, DrawMode::Xor);
            assert_eq!(fb.count_set(), 0, "{w}x{h}");
        }
    }

    #[test]
    fn outline_rect_has_inverted_border() {
        let mut fb = FrameBuffer::new();
        rect(&mut fb, 10, 10, 14, 13, DrawMode::Outline);

        for x in 10..=14 {
            for y in 10..=13 {
                let border = x == 10 || x == 14 || y == 10 || y == 13;
                assert_eq!(fb.pixel(x, y), Some(!border), "({x}, {y})");
            }
        }
        assert_eq!(fb.count_set(), 3 * 2);
    }

    #[test]
    fn extreme_coordinates_clip_without_overflow() {
        let mut fb = FrameBuffer::new();
        rect_outline(&mut fb, i32::MAX, 0, i32::MAX, 5, DrawMode::Fill);
        rect_outline(&mut fb, i32::MIN, i32::MIN, i32::MIN, i32::MAX, DrawMode::Fill);
        rect(&mut fb, i32::MAX - 1, 0, i32::MAX, 5, DrawMode::Outline);
        assert_eq!(fb.count_set(), 0);

        rect(&mut fb, i32::MIN, i32::MIN, i32::MAX, i32::MAX, DrawMode::Outline);
        assert_eq!(fb.count_set(), 72 * 40);
        rect_outline(&mut fb, i32::MIN, 0, i32::MAX, 39, DrawMode::Xor);
        assert_eq!(fb.count_set(), 72 * 38);
    }

    #[test]
    fn outline_mode_passed_to_rect_outline_draws_like_fill() {
        let mut a = FrameBuffer::new();
        let mut b = FrameBuffer::new();
        rect_outline(&mut a, 3, 3, 9, 8, DrawMode::Outline);
        rect_outline(&mut b, 3, 3, 9, 8, DrawMode::Fill);
        assert_eq!(a.bytes(), b.bytes());
        assert_eq!(a.count_set(), 2 * 7 + 2 * 6 - 4);
    }
}
