#![cfg_attr(not(test), no_std)]

//! SSD1306 (72x40 window, as wired on the Thumby) framebuffer and driver primitives.

mod framebuffer;
pub mod protocol;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use framebuffer::{FrameBuffer, byte_index};

use embedded_hal::{digital::OutputPin, spi::SpiDevice};
use log::debug;

/// Driver configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Contrast level written during init.
    pub contrast: u8,
    /// First controller column of the visible window.
    pub column_offset: u8,
    /// Rotate the image by 180 degrees.
    pub flip: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contrast: 0x7F,
            column_offset: protocol::DEFAULT_COLUMN_OFFSET,
            flip: false,
        }
    }
}

/// Driver errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error<SpiErr, DcErr> {
    /// SPI transaction failed.
    Spi(SpiErr),
    /// D/C pin operation failed.
    Dc(DcErr),
    /// Configuration is outside supported bounds.
    InvalidInput,
}

pub type DriverResult<SpiErr, DcErr> = Result<(), Error<SpiErr, DcErr>>;

/// SSD1306 driver for the 72x40 window.
#[derive(Debug)]
pub struct Ssd1306<SPI, DC> {
    spi: SPI,
    dc: DC,
    config: Config,
}

impl<SPI, DC> Ssd1306<SPI, DC>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
{
    /// Creates a new driver instance.
    pub fn new(spi: SPI, dc: DC, config: Config) -> Self {
        Self { spi, dc, config }
    }

    /// Returns current configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Releases owned bus and pin.
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }

    /// Sends the bring-up sequence and turns the panel on.
    pub fn init(&mut self) -> DriverResult<SPI::Error, DC::Error> {
        debug!(
            "ssd1306: init contrast={} column_offset={} flip={}",
            self.config.contrast, self.config.column_offset, self.config.flip
        );
        let sequence = protocol::build_init_sequence(self.config.contrast, self.config.flip);
        self.command(&sequence)
    }

    /// Updates the contrast register.
    pub fn set_contrast(&mut self, contrast: u8) -> DriverResult<SPI::Error, DC::Error> {
        self.config.contrast = contrast;
        self.command(&protocol::build_contrast_packet(contrast))
    }

    /// Flushes a full framebuffer.
    pub fn flush_full(&mut self, frame: &FrameBuffer) -> DriverResult<SPI::Error, DC::Error> {
        let window =
            protocol::build_window_packet(self.config.column_offset).ok_or(Error::InvalidInput)?;
        self.command(&window)?;

        self.dc.set_high().map_err(Error::Dc)?;
        self.spi.write(frame.bytes()).map_err(Error::Spi)
    }

    fn command(&mut self, bytes: &[u8]) -> DriverResult<SPI::Error, DC::Error> {
        self.dc.set_low().map_err(Error::Dc)?;
        self.spi.write(bytes).map_err(Error::Spi)
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;
    use std::{cell::RefCell, rc::Rc};

    use embedded_hal::{
        digital::ErrorType as PinErrorType,
        spi::{ErrorType as SpiErrorType, Operation},
    };

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Dc(bool),
        Write(Vec<u8>),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct RecordingSpi(Log);

    impl SpiErrorType for RecordingSpi {
        type Error = Infallible;
    }

    impl SpiDevice<u8> for RecordingSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Infallible> {
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.0.borrow_mut().push(Event::Write(bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    struct RecordingPin(Log);

    impl PinErrorType for RecordingPin {
        type Error = Infallible;
    }

    impl OutputPin for RecordingPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().push(Event::Dc(false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().push(Event::Dc(true));
            Ok(())
        }
    }

    fn make_driver(config: Config) -> (Ssd1306<RecordingSpi, RecordingPin>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let driver = Ssd1306::new(RecordingSpi(log.clone()), RecordingPin(log.clone()), config);
        (driver, log)
    }

    #[test]
    fn init_is_sent_in_command_mode() {
        let (mut driver, log) = make_driver(Config::default());
        driver.init().unwrap();

        let events = log.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], Event::Dc(false));
        assert_eq!(
            events[1],
            Event::Write(protocol::build_init_sequence(0x7F, false).to_vec())
        );
    }

    #[test]
    fn flush_selects_window_then_streams_pages() {
        let (mut driver, log) = make_driver(Config::default());
        let mut frame = FrameBuffer::new();
        frame.set_pixel(0, 0, true);

        driver.flush_full(&frame).unwrap();

        let events = log.borrow();
        assert_eq!(events[0], Event::Dc(false));
        assert_eq!(events[1], Event::Write(vec![0x21, 28, 99, 0x22, 0, 4]));
        assert_eq!(events[2], Event::Dc(true));
        match &events[3] {
            Event::Write(bytes) => {
                assert_eq!(bytes.len(), protocol::BUFFER_SIZE);
                assert_eq!(bytes[0], 0x01);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn invalid_column_offset_is_rejected_before_any_write() {
        let config = Config {
            column_offset: 100,
            ..Config::default()
        };
        let (mut driver, log) = make_driver(config);

        assert_eq!(driver.flush_full(&FrameBuffer::new()), Err(Error::InvalidInput));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn set_contrast_updates_config() {
        let (mut driver, log) = make_driver(Config::default());
        driver.set_contrast(0x10).unwrap();

        assert_eq!(driver.config().contrast, 0x10);
        assert_eq!(log.borrow()[1], Event::Write(vec![0x81, 0x10]));
    }
}
