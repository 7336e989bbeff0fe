//! Vertical and horizontal span blitters.
//!
//! Both clip to the screen; a range that is empty after clipping writes nothing.

use ssd1306_72x40::{FrameBuffer, protocol::PAGE_ROWS};

use crate::{
    geom::{HEIGHT, LAST_COLUMN, LAST_ROW},
    mode::DrawMode,
};

const PAGE_SHIFT: i32 = 3;
const ROW_MASK: i32 = PAGE_ROWS as i32 - 1;

#[derive(Clone, Copy)]
enum BitOp {
    Set,
    Clear,
    Toggle,
}

impl BitOp {
    fn for_mode(mode: DrawMode) -> Self {
        match mode {
            DrawMode::Xor => BitOp::Toggle,
            DrawMode::Fill | DrawMode::Outline => BitOp::Set,
            DrawMode::BgFill | DrawMode::BgOutline => BitOp::Clear,
        }
    }

    #[inline]
    fn apply(self, byte: &mut u8, mask: u8) {
        match self {
            BitOp::Set => *byte |= mask,
            BitOp::Clear => *byte &= !mask,
            BitOp::Toggle => *byte ^= mask,
        }
    }
}

/// Draws columns `x1..=x2` over rows `y1..=y2`.
///
/// `Fill`/`Outline` set, `BgFill`/`BgOutline` clear, `Xor` toggles. The outline
/// modes additionally invert the rows `y1` and `y2` when they are on screen,
/// giving the span a 1px border at its ends.
pub fn vline(fb: &mut FrameBuffer, x1: i32, x2: i32, y1: i32, y2: i32, mode: DrawMode) {
    let cy1 = y1.max(0);
    let cy2 = y2.min(LAST_ROW);
    let cx1 = x1.max(0);
    let cx2 = x2.min(LAST_COLUMN);
    if cy2 < cy1 || cx2 < cx1 {
        return;
    }

    let op = BitOp::for_mode(mode);

    let first_page = (cy1 >> PAGE_SHIFT) as usize;
    let first_bit = cy1 & ROW_MASK;
    let first_mask = 0xFFu8 << first_bit;

    let last_page = (cy2 >> PAGE_SHIFT) as usize;
    let last_bit = cy2 & ROW_MASK;
    let last_mask = 0xFFu8 >> (ROW_MASK - last_bit);

    for x in cx1 as usize..=cx2 as usize {
        if first_page == last_page {
            op.apply(fb.page_byte_mut(x, first_page), first_mask & last_mask);
            continue;
        }

        op.apply(fb.page_byte_mut(x, first_page), first_mask);
        for page in first_page + 1..last_page {
            op.apply(fb.page_byte_mut(x, page), 0xFF);
        }
        op.apply(fb.page_byte_mut(x, last_page), last_mask);
    }

    if !mode.has_border() {
        return;
    }

    let top_visible = cy1 == y1;
    let bottom_visible = cy2 == y2 && y1 != y2;
    for x in cx1 as usize..=cx2 as usize {
        if top_visible {
            BitOp::Toggle.apply(fb.page_byte_mut(x, first_page), 1u8 << first_bit);
        }
        if bottom_visible {
            BitOp::Toggle.apply(fb.page_byte_mut(x, last_page), 1u8 << last_bit);
        }
    }
}

/// Draws row `y` over columns `x1..=x2`.
///
/// Outline modes draw like their plain counterparts.
pub fn hline(fb: &mut FrameBuffer, y: i32, x1: i32, x2: i32, mode: DrawMode) {
    if !(0..HEIGHT).contains(&y) {
        return;
    }
    let cx1 = x1.max(0);
    let cx2 = x2.min(LAST_COLUMN);
    if cx2 < cx1 {
        return;
    }

    let op = BitOp::for_mode(mode);
    let page = (y >> PAGE_SHIFT) as usize;
    let mask = 1u8 << (y & ROW_MASK);
    for x in cx1 as usize..=cx2 as usize {
        op.apply(fb.page_byte_mut(x, page), mask);
    }
}
