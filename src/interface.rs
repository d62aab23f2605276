//! Transport between the driver and the SSD1306
//!
//! The controller takes two byte streams on one bus: commands with DC low and
//! display RAM data with DC high. [`DisplayInterface`] is that split;
//! [`Interface`] implements it for a 4-wire SPI panel.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 requires:
//! - SPI bus (MOSI + SCK, chip select handled by the [`SpiDevice`])
//! - 2 GPIO pins:
//!   - **DC**: low for commands, high for RAM data
//!   - **RST**: held low to reset the controller
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1306_fb::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! // Chip select belongs to the SpiDevice
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Pulse the reset line
//! interface.reset(&mut delay);
//!
//! // Send a command batch
//! let _ = interface.send_command(&[0xAE, 0xA6]);
//!
//! // Three columns of RAM: lit, dark, lit
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Byte transport used by [`Display`](crate::display::Display)
///
/// [`Interface`] covers blocking SPI. Implement the trait directly for I2C
/// (control byte framing) or for a DMA driven bus, which should also
/// override [`transfer_in_progress`](Self::transfer_in_progress).
pub trait DisplayInterface {
    /// Bus or pin failure, carried inside [`Error::Interface`](crate::Error::Interface)
    type Error: Debug;

    /// Send a batch of command bytes to the controller
    ///
    /// Parameter bytes travel in the same batch as their command, all with
    /// DC low.
    fn send_command(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Write display RAM bytes (DC high) at the controller's address pointer
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Pulse the reset line: low for [`RESET_PULSE_MS`], then high and wait
    /// as long again before the first command
    fn reset<D: DelayNs>(&mut self, delay: &mut D);

    /// Whether a previously started transfer is still being clocked out
    ///
    /// Blocking implementations finish every transfer before returning and
    /// can keep the default. Asynchronous (DMA) implementations report
    /// `true` until the bus is free again.
    fn transfer_in_progress(&self) -> bool {
        false
    }
}

/// Failure of the SPI bus or of the DC pin
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI write failed
    Spi(SpiErr),
    /// DC pin could not be driven
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Reset pulse width in milliseconds
pub const RESET_PULSE_MS: u32 = 10;

/// 4-wire SPI transport: an [`SpiDevice`] plus DC and RST pins
///
/// Reset pin errors are ignored; a panel with RST tied high still works.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct Interface<SPI, DC, RST> {
    /// Bus with its own chip select
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Wrap the bus and pins; nothing is sent until the first call
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Consume the interface and return the bus and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(commands).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        let _ = self.rst.set_low();
        delay.delay_ms(RESET_PULSE_MS);
        let _ = self.rst.set_high();
        delay.delay_ms(RESET_PULSE_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Dc(bool),
        Rst(bool),
        Write(Vec<u8>),
        DelayMs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    impl SpiErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi {
        fn transaction(
            &mut self,
            operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            for op in operations.iter() {
                if let embedded_hal::spi::Operation::Write(bytes) = op {
                    self.log.borrow_mut().push(Event::Write(bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    struct MockPin {
        log: Log,
        is_dc: bool,
    }

    impl ErrorType for MockPin {
        type Error = MockError;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.record(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.record(true);
            Ok(())
        }
    }

    impl MockPin {
        fn record(&self, level: bool) {
            let event = if self.is_dc {
                Event::Dc(level)
            } else {
                Event::Rst(level)
            };
            self.log.borrow_mut().push(event);
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    fn mock_interface(log: &Log, fail: bool) -> Interface<MockSpi, MockPin, MockPin> {
        Interface::new(
            MockSpi {
                log: log.clone(),
                fail,
            },
            MockPin {
                log: log.clone(),
                is_dc: true,
            },
            MockPin {
                log: log.clone(),
                is_dc: false,
            },
        )
    }

    #[test]
    fn test_command_drives_dc_low() {
        let log = Log::default();
        let mut interface = mock_interface(&log, false);

        interface.send_command(&[0x81, 0x7F]).unwrap();

        assert_eq!(
            *log.borrow(),
            alloc::vec![Event::Dc(false), Event::Write(alloc::vec![0x81, 0x7F])]
        );
    }

    #[test]
    fn test_data_drives_dc_high() {
        let log = Log::default();
        let mut interface = mock_interface(&log, false);

        interface.send_data(&[0xAA; 4]).unwrap();

        assert_eq!(
            *log.borrow(),
            alloc::vec![Event::Dc(true), Event::Write(alloc::vec![0xAA; 4])]
        );
    }

    #[test]
    fn test_reset_sequence() {
        let log = Log::default();
        let mut interface = mock_interface(&log, false);
        let mut delay = MockDelay { log: log.clone() };

        interface.reset(&mut delay);

        assert_eq!(
            *log.borrow(),
            alloc::vec![
                Event::Rst(false),
                Event::DelayMs(10),
                Event::Rst(true),
                Event::DelayMs(10),
            ]
        );
    }

    #[test]
    fn test_spi_error_is_wrapped() {
        let log = Log::default();
        let mut interface = mock_interface(&log, true);

        let result = interface.send_data(&[0x00]);
        assert!(matches!(result, Err(InterfaceError::Spi(MockError))));
        assert!(!interface.transfer_in_progress());
    }
}
