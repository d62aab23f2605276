//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! display operations ([`Error`]) and the bank-aligned bitmap fast path
//! ([`BlitError`]).
//!
//! Geometry never produces an error: coordinates and lengths that fall
//! outside the framebuffer are clipped, and an unsupported scale or font
//! selector turns the call into a no-op.
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`BufferError`] - Storage handed to [`FrameBuffer::new`](crate::FrameBuffer::new) is too small
//! - [`BlitError`] - Misuse of [`FrameBuffer::draw_bitmap_aligned`](crate::FrameBuffer::draw_bitmap_aligned)
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::{BuilderError, Dimensions};
//!
//! // Height must be a multiple of 8
//! let result = Dimensions::new(128, 60);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//!
//! // Too wide for the controller
//! assert!(Dimensions::new(200, 64).is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum segment outputs (columns) driven by the SSD1306
pub const MAX_WIDTH: u16 = 128;

/// Maximum COM outputs (rows) driven by the SSD1306
pub const MAX_HEIGHT: u16 = 64;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// A previous transfer is still being clocked out
    ///
    /// Returned instead of starting a new transmission while
    /// [`DisplayInterface::transfer_in_progress`] reports `true`.
    TransferInProgress,
    /// Buffer is too small for the display
    ///
    /// The provided buffer must be at least `dimensions.buffer_size()` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::TransferInProgress => write!(f, "Transfer still in progress"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_WIDTH}x{MAX_HEIGHT}, height must be multiple of 8)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

/// Errors reported by the bank-aligned bitmap copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlitError {
    /// The destination row or the bitmap height is not a multiple of 8
    Misaligned {
        /// Requested destination row
        y: i32,
        /// Requested bitmap height
        height: u32,
    },
    /// The source slice holds fewer bytes than `width * height / 8`
    SourceTooShort {
        /// Bytes needed for the requested bitmap size
        required: usize,
        /// Bytes in the provided slice
        provided: usize,
    },
}

impl core::fmt::Display for BlitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Misaligned { y, height } => {
                write!(f, "Bitmap not bank aligned: y={y}, height={height}")
            }
            Self::SourceTooShort { required, provided } => write!(
                f,
                "Bitmap source too short: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for BlitError {}

/// Error returned when wrapping storage that cannot hold a full frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferError {
    /// Bytes needed for the requested dimensions
    pub required: usize,
    /// Bytes in the provided storage
    pub provided: usize,
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Frame buffer too small: required {} bytes, provided {}",
            self.required, self.provided
        )
    }
}

impl core::error::Error for BufferError {}
