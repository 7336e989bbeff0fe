//! In-memory framebuffer for the 72x40 SSD1306 window.

use core::convert::TryFrom;

use crate::protocol::{BUFFER_SIZE, HEIGHT, PAGE_ROWS, PAGES, WIDTH};

/// Byte offset of column `x` within page `page`.
#[inline]
pub const fn byte_index(x: usize, page: usize) -> usize {
    page * WIDTH + x
}

/// 1bpp framebuffer for the panel.
///
/// Bytes are column-major within a page: byte `(y / 8) * 72 + x` holds the
/// eight rows of column `x` in that page, bit 0 being the topmost row.
#[derive(Clone)]
pub struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Creates a new blank (all pixels off) framebuffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; BUFFER_SIZE],
        }
    }

    /// Returns the underlying framebuffer bytes.
    pub fn bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Returns mutable framebuffer bytes.
    pub fn bytes_mut(&mut self) -> &mut [u8; BUFFER_SIZE] {
        &mut self.bytes
    }

    /// Fills the framebuffer with pixels off (`on = false`) or on (`on = true`).
    pub fn fill(&mut self, on: bool) {
        self.bytes.fill(if on { 0xFF } else { 0x00 });
    }

    /// Returns the byte holding rows `page * 8 .. page * 8 + 8` of column `x`.
    ///
    /// Callers index within `0..WIDTH` and `0..PAGES`.
    #[inline]
    pub fn page_byte_mut(&mut self, x: usize, page: usize) -> &mut u8 {
        &mut self.bytes[byte_index(x, page)]
    }

    /// Sets a pixel state.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        let bit_mask = 1u8 << (y % PAGE_ROWS);
        let byte = self.page_byte_mut(x, y / PAGE_ROWS);

        if on {
            *byte |= bit_mask;
        } else {
            *byte &= !bit_mask;
        }

        true
    }

    /// Reads a pixel state.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }

        let bit_mask = 1u8 << (y % PAGE_ROWS);
        Some((self.bytes[byte_index(x, y / PAGE_ROWS)] & bit_mask) != 0)
    }

    /// Number of pixels currently on.
    pub fn count_set(&self) -> u32 {
        self.bytes.iter().map(|byte| byte.count_ones()).sum()
    }

    /// Returns the payload of page 0..5.
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        if page >= PAGES {
            return None;
        }

        let start = byte_index(0, page);
        <&[u8; WIDTH]>::try_from(&self.bytes[start..start + WIDTH]).ok()
    }
}
