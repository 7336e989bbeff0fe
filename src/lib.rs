#![cfg_attr(not(test), no_std)]

//! Shape rendering for the Thumby's 72x40 monochrome screen.
//!
//! [`Canvas`] pairs a frame with the scratch [`Shape`] every generator writes
//! its column spans into. Firmware takes the scratch once at start-up with
//! [`take_scratch`] and keeps the canvas for the lifetime of the program.

use embedded_hal::{digital::OutputPin, spi::SpiDevice};
use log::debug;
use static_cell::StaticCell;

pub use shapes_core::{
    ConvexPoly, DrawMode, EMPTY_LOWER, EMPTY_UPPER, Edge, InvalidMode, MAX_VERTICES, PolyError,
    Shape, Transform, TwisterConfig,
};
pub use ssd1306_72x40::{self as display, Config as DisplayConfig, FrameBuffer, Ssd1306};

static SCRATCH: StaticCell<Shape> = StaticCell::new();

/// Hands out the process-wide scratch shape. Returns `None` after the first call.
pub fn take_scratch() -> Option<&'static mut Shape> {
    let shape = SCRATCH.try_init(Shape::new())?;
    debug!(
        "scratch shape allocated ({} bytes)",
        core::mem::size_of::<Shape>()
    );
    Some(shape)
}

/// A frame plus the scratch shape the generators build into.
///
/// Each drawing call finishes before the next one starts; generators reset
/// the columns they use, so consecutive shapes never see each other's spans.
/// Spans written by hand through [`Canvas::shape_mut`] are the caller's to
/// reset.
pub struct Canvas<'s> {
    frame: FrameBuffer,
    shape: &'s mut Shape,
}

impl<'s> Canvas<'s> {
    pub fn new(shape: &'s mut Shape) -> Self {
        Self {
            frame: FrameBuffer::new(),
            shape,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    pub fn shape(&self) -> &Shape {
        self.shape
    }

    pub fn shape_mut(&mut self) -> &mut Shape {
        self.shape
    }

    /// Sets every pixel to `on`.
    pub fn fill(&mut self, on: bool) {
        self.frame.fill(on);
    }

    pub fn clear(&mut self) {
        self.fill(false);
    }

    pub fn vline(&mut self, x1: i32, x2: i32, y1: i32, y2: i32, mode: DrawMode) {
        shapes_core::vline(&mut self.frame, x1, x2, y1, y2, mode);
    }

    pub fn hline(&mut self, y: i32, x1: i32, x2: i32, mode: DrawMode) {
        shapes_core::hline(&mut self.frame, y, x1, x2, mode);
    }

    pub fn rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, mode: DrawMode) {
        shapes_core::rect(&mut self.frame, x0, y0, x1, y1, mode);
    }

    pub fn rect_outline(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, mode: DrawMode) {
        shapes_core::rect_outline(&mut self.frame, x0, y0, x1, y1, mode);
    }

    pub fn ellipse(&mut self, x0: f32, y0: f32, rx: f32, ry: f32, mode: DrawMode) {
        shapes_core::ellipse(&mut self.frame, self.shape, x0, y0, rx, ry, mode);
    }

    pub fn lozenge(&mut self, x0: f32, y0: f32, rx: f32, ry: f32, mode: DrawMode) {
        shapes_core::lozenge(&mut self.frame, self.shape, x0, y0, rx, ry, mode);
    }

    pub fn twister(&mut self, phase: f32, wavelen1: f32, wavelen2: f32, config: &TwisterConfig) {
        shapes_core::twister(&mut self.frame, self.shape, phase, wavelen1, wavelen2, config);
    }

    pub fn polygon(
        &mut self,
        poly: &ConvexPoly,
        x0: f32,
        y0: f32,
        mode: DrawMode,
        transform: &Transform,
    ) {
        poly.draw(&mut self.frame, self.shape, x0, y0, mode, transform);
    }

    /// Draws columns `x1..=x2` of the scratch shape as built by hand.
    pub fn draw_shape(&mut self, x1: i32, x2: i32, mode: DrawMode) {
        self.shape.draw(&mut self.frame, x1, x2, mode);
    }

    /// Sends the frame to the panel.
    pub fn flush<SPI, DC>(
        &self,
        display: &mut Ssd1306<SPI, DC>,
    ) -> display::DriverResult<SPI::Error, DC::Error>
    where
        SPI: SpiDevice<u8>,
        DC: OutputPin,
    {
        display.flush_full(&self.frame)
    }
}
