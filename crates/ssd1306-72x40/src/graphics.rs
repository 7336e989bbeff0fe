use core::convert::Infallible;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
};

use crate::{
    FrameBuffer,
    protocol::{HEIGHT, PAGE_ROWS, WIDTH},
};

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            let _ = self.set_pixel(x, y, color.is_on());
        }

        Ok(())
    }

    /// Writes whole page bytes, masking only the first and last page of each column.
    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        let (x1, y1) = (area.top_left.x as usize, area.top_left.y as usize);
        let (x2, y2) = (bottom_right.x as usize, bottom_right.y as usize);
        for page in y1 / PAGE_ROWS..=y2 / PAGE_ROWS {
            let page_top = page * PAGE_ROWS;
            let first = y1.max(page_top) - page_top;
            let last = y2.min(page_top + PAGE_ROWS - 1) - page_top;
            let mask = (0xFFu8 << first) & (0xFFu8 >> (PAGE_ROWS - 1 - last));
            for x in x1..=x2 {
                let byte = self.page_byte_mut(x, page);
                if color.is_on() {
                    *byte |= mask;
                } else {
                    *byte &= !mask;
                }
            }
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_core::geometry::Point;

    use super::*;

    #[test]
    fn draw_iter_skips_negative_and_clips_large_points() {
        let mut fb = FrameBuffer::new();
        let pixels = [
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(5, 9), BinaryColor::On),
            Pixel(Point::new(80, 9), BinaryColor::On),
        ];

        fb.draw_iter(pixels).unwrap();

        assert_eq!(fb.count_set(), 1);
        assert_eq!(fb.pixel(5, 9), Some(true));
        assert_eq!(fb.size(), Size::new(72, 40));
    }

    #[test]
    fn fill_solid_masks_partial_pages_and_clips() {
        let mut fb = FrameBuffer::new();
        let area = Rectangle::new(Point::new(-2, 6), Size::new(5, 13));
        fb.fill_solid(&area, BinaryColor::On).unwrap();

        // Columns 0..=2, rows 6..=18.
        assert_eq!(fb.count_set(), 3 * 13);
        assert_eq!(fb.page(0).unwrap()[0], 0b1100_0000);
        assert_eq!(fb.page(1).unwrap()[2], 0xFF);
        assert_eq!(fb.page(2).unwrap()[1], 0b0000_0111);
        assert_eq!(fb.pixel(3, 10), Some(false));

        fb.fill_solid(&Rectangle::new(Point::new(1, 7), Size::new(1, 2)), BinaryColor::Off)
            .unwrap();
        assert_eq!(fb.count_set(), 3 * 13 - 2);

        fb.fill_solid(&Rectangle::new(Point::new(72, 0), Size::new(4, 4)), BinaryColor::On)
            .unwrap();
        assert_eq!(fb.count_set(), 3 * 13 - 2);
    }
}
