//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306 OLED
//! controller. Commands and their parameters are sent over SPI with the DC
//! pin low; framebuffer contents are sent with DC high.
//!
//! ## Command Structure
//!
//! Unlike many controllers, parameter bytes are part of the command stream:
//! a whole batch like `[SET_CONTRAST, 0x7F, DISPLAY_ON]` goes out in a
//! single command transfer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_fb::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Contrast and display on in one batch
//! let _ = interface.send_command(&[command::SET_CONTRAST, 0x7F, command::DISPLAY_ON]);
//! ```

// Fundamental commands

/// Set contrast control (0x81), followed by 1 byte
pub const SET_CONTRAST: u8 = 0x81;

/// Output follows RAM content (0xA4)
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Output ignores RAM content, every pixel lit (0xA5)
pub const DISPLAY_ALL_ON: u8 = 0xA5;

/// Normal display, RAM bit 1 = pixel on (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse display, RAM bit 0 = pixel on (0xA7)
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal mode (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Scrolling commands

/// Continuous right horizontal scroll setup (0x26), followed by 6 bytes
pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;

/// Continuous left horizontal scroll setup (0x27), followed by 6 bytes
pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;

/// Continuous vertical and right horizontal scroll setup (0x29), followed by 5 bytes
pub const VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;

/// Continuous vertical and left horizontal scroll setup (0x2A), followed by 5 bytes
pub const VERTICAL_AND_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;

/// Stop scrolling (0x2E)
///
/// RAM must be rewritten after deactivating a running scroll.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Start scrolling with the last setup (0x2F)
pub const ACTIVATE_SCROLL: u8 = 0x2F;

// Addressing setting commands

/// Set memory addressing mode (0x20), followed by 1 byte
pub const MEMORY_MODE: u8 = 0x20;

/// Set column start and end address (0x21), followed by 2 bytes
pub const COLUMN_ADDR: u8 = 0x21;

/// Set page start and end address (0x22), followed by 2 bytes
pub const PAGE_ADDR: u8 = 0x22;

/// Horizontal addressing: column pointer wraps into the next page
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

// Hardware configuration commands

/// Set display RAM start line (0x40 | line)
pub const SET_START_LINE: u8 = 0x40;

/// Segment re-map (0xA0 | remap)
pub const SEGMENT_REMAP: u8 = 0xA0;

/// Set multiplex ratio (0xA8), followed by 1 byte (rows - 1)
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM output scan from COM0 to COM[N-1] (0xC0)
pub const COM_SCAN_INC: u8 = 0xC0;

/// COM output scan from COM[N-1] to COM0 (0xC8)
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Set display offset (0xD3), followed by 1 byte
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA), followed by 1 byte
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency (0xD5), followed by 1 byte
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;

/// Set pre-charge period (0xD9), followed by 1 byte
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB), followed by 1 byte
pub const SET_VCOM_DETECT: u8 = 0xDB;

// Charge pump

/// Charge pump setting (0x8D), followed by 1 byte
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Charge pump disabled (external VCC)
pub const CHARGE_PUMP_OFF: u8 = 0x10;

/// Charge pump enabled (internal VCC)
pub const CHARGE_PUMP_ON: u8 = 0x14;

// Default values

/// Pre-charge period for an external supply
pub const PRECHARGE_DEFAULT_EXTERNAL: u8 = 0x22;

/// Pre-charge period for the internal charge pump
pub const PRECHARGE_DEFAULT_SWITCHCAP: u8 = 0xF1;

/// Suggested clock divide ratio / oscillator frequency
pub const CLOCK_DIV_DEFAULT: u8 = 0x80;

/// Alternative COM pin configuration, used by 128x64 modules
pub const COM_PINS_DEFAULT: u8 = 0x12;

/// Contrast after reset with the internal charge pump
pub const CONTRAST_DEFAULT_SWITCHCAP: u8 = 0xCF;

/// Contrast after reset with an external supply
pub const CONTRAST_DEFAULT_EXTERNAL: u8 = 0x9F;

/// Scroll step interval codes, indexed from every 2 frames up to every 256 frames
pub const SCROLL_INTERVALS: [u8; 8] = [0x07, 0x04, 0x05, 0x00, 0x06, 0x01, 0x02, 0x03];

/// VCOMH deselect level
///
/// Raising the level brightens the panel at the cost of contrast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum VcomhLevel {
    /// ~0.65 x VCC
    Low = 0x00,
    /// ~0.77 x VCC (reset value)
    #[default]
    Default = 0x20,
    /// ~0.83 x VCC
    High = 0x30,
}

impl TryFrom<u8> for VcomhLevel {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::Low),
            0x20 => Ok(Self::Default),
            0x30 => Ok(Self::High),
            other => Err(other),
        }
    }
}

/// Horizontal scroll direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Content moves right
    #[default]
    Right,
    /// Content moves left
    Left,
}

impl ScrollDirection {
    /// Command byte for horizontal-only scrolling
    pub fn horizontal_command(self) -> u8 {
        match self {
            Self::Right => RIGHT_HORIZONTAL_SCROLL,
            Self::Left => LEFT_HORIZONTAL_SCROLL,
        }
    }

    /// Command byte for combined vertical and horizontal scrolling
    pub fn diagonal_command(self) -> u8 {
        match self {
            Self::Right => VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL,
            Self::Left => VERTICAL_AND_LEFT_HORIZONTAL_SCROLL,
        }
    }
}

/// Map a scroll interval index (0 = every 2 frames, 7 = every 256 frames)
/// to its command code, clamping out-of-range indices to 7
pub fn scroll_interval(index: u8) -> u8 {
    SCROLL_INTERVALS[usize::from(index.min(7))]
}
