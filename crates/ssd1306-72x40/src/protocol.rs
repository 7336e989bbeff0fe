//! Wire-level protocol helpers for the SSD1306 in its 72x40 configuration.

/// Visible width in pixels.
pub const WIDTH: usize = 72;
/// Visible height in pixels.
pub const HEIGHT: usize = 40;
/// Rows packed into one byte (one controller page).
pub const PAGE_ROWS: usize = 8;
/// Number of pages (byte-rows) covering the visible height.
pub const PAGES: usize = HEIGHT / PAGE_ROWS;
/// Total framebuffer size in bytes.
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// First controller column that is wired to the 72-column glass.
pub const DEFAULT_COLUMN_OFFSET: u8 = 28;

pub const CMD_DISPLAY_OFF: u8 = 0xAE;
pub const CMD_DISPLAY_ON: u8 = 0xAF;
pub const CMD_SET_CONTRAST: u8 = 0x81;
pub const CMD_SET_COLUMN_ADDRESS: u8 = 0x21;
pub const CMD_SET_PAGE_ADDRESS: u8 = 0x22;

/// Packet size of the controller bring-up sequence.
pub const INIT_SEQUENCE_SIZE: usize = 25;

/// Packet size of a window (column + page range) selection.
///
/// Layout:
/// - 3 bytes column address command + start + end
/// - 3 bytes page address command + start + end
pub const WINDOW_PACKET_SIZE: usize = 6;

/// Builds the command-mode bring-up sequence.
///
/// `flip` rotates the panel by 180 degrees (segment remap + COM scan direction).
#[rustfmt::skip]
pub fn build_init_sequence(contrast: u8, flip: bool) -> [u8; INIT_SEQUENCE_SIZE] {
    let (seg_remap, com_scan) = if flip { (0xA0, 0xC0) } else { (0xA1, 0xC8) };

    [
        CMD_DISPLAY_OFF,
        0xD5, 0x80, // clock divide / oscillator
        0xA8, (HEIGHT - 1) as u8, // multiplex ratio
        0xD3, 0x00, // display offset
        0x40, // start line 0
        0x8D, 0x14, // charge pump on
        0x20, 0x00, // horizontal addressing
        seg_remap,
        com_scan,
        0xDA, 0x12, // COM pins
        CMD_SET_CONTRAST, contrast,
        0xD9, 0xF1, // pre-charge
        0xDB, 0x40, // VCOMH deselect
        0xA4, // resume from RAM
        0xA6, // non-inverted
        CMD_DISPLAY_ON,
    ]
}

/// Builds the window selection covering the whole visible area.
#[inline]
pub fn build_window_packet(column_offset: u8) -> Option<[u8; WINDOW_PACKET_SIZE]> {
    let last_column = column_offset.checked_add((WIDTH - 1) as u8)?;
    if last_column > 127 {
        return None;
    }

    Some([
        CMD_SET_COLUMN_ADDRESS,
        column_offset,
        last_column,
        CMD_SET_PAGE_ADDRESS,
        0,
        (PAGES - 1) as u8,
    ])
}

/// Builds a contrast update.
#[inline]
pub fn build_contrast_packet(contrast: u8) -> [u8; 2] {
    [CMD_SET_CONTRAST, contrast]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_constants_match_panel() {
        assert_eq!(PAGES, 5);
        assert_eq!(BUFFER_SIZE, 360);
    }

    #[test]
    fn init_sequence_brackets_display_power() {
        let seq = build_init_sequence(0x7F, false);
        assert_eq!(seq[0], CMD_DISPLAY_OFF);
        assert_eq!(seq[INIT_SEQUENCE_SIZE - 1], CMD_DISPLAY_ON);
        assert_eq!(seq[4], 39);
        assert_eq!(seq[17], 0x7F);
    }

    #[test]
    fn flip_swaps_scan_direction() {
        let normal = build_init_sequence(0x7F, false);
        let flipped = build_init_sequence(0x7F, true);
        assert_eq!((normal[12], normal[13]), (0xA1, 0xC8));
        assert_eq!((flipped[12], flipped[13]), (0xA0, 0xC0));
    }

    #[test]
    fn window_covers_visible_columns() {
        let packet = build_window_packet(DEFAULT_COLUMN_OFFSET).unwrap();
        assert_eq!(packet, [0x21, 28, 99, 0x22, 0, 4]);
    }

    #[test]
    fn window_past_controller_ram_is_rejected() {
        assert_eq!(build_window_packet(57), None);
        assert!(build_window_packet(56).is_some());
    }
}
