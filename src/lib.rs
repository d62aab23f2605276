//! SSD1306 OLED Framebuffer Driver
//!
//! A driver for the SSD1306 monochrome OLED controller (128x64 and smaller
//! panels) with a bank-ordered framebuffer and fast drawing primitives.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation required
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Bank-wise line, rectangle, triangle and circle rasterizers
//! - Bitmap blitting with 1x to 4x scaling
//! - Three built-in fonts with cursor and free positioned printing
//! - Multiple framebuffers swapped in and out of the display
//! - Hardware scrolling, contrast, inversion and sleep control
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1306_fb::{Builder, Color, Display, DisplayHandle, FrameBuffer, Interface, TextStyle};
//!
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
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let config = Builder::new().contrast(0x7F).build();
//!
//! let mut storage = [0u8; 1024];
//! let buffer = match FrameBuffer::new(&mut storage[..], config.dimensions) {
//!     Ok(buffer) => buffer,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config, DisplayHandle::new(buffer));
//! let _ = display.init(&mut delay);
//!
//! display.buffer_mut().circle(64, 32, 20, Color::On);
//! display.handle_mut().print("Hello", TextStyle::default(), false);
//! let _ = display.refresh();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Bitmap blitting
pub mod bitmap;
/// Pixel color for monochrome panels
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in fonts and text styles
pub mod font;
/// Bank-ordered pixel buffer
pub mod framebuffer;
/// Framebuffer plus text cursor
pub mod handle;
/// Hardware interface abstraction
pub mod interface;
/// Lines
pub mod line;
/// Rectangles, triangles and circles
pub mod shape;
/// Text printing
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use command::{ScrollDirection, VcomhLevel};
pub use config::{Builder, Config, Dimensions, VccSource};
pub use display::Display;
pub use error::{BlitError, BufferError, BuilderError, Error, MAX_HEIGHT, MAX_WIDTH};
pub use font::{Align, Font, Glyph, TextStyle};
pub use framebuffer::FrameBuffer;
pub use handle::{Cursor, DisplayHandle};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};
pub use text::TextWriter;
