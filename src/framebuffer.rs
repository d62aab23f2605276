//! Bit-packed 1bpp framebuffer
//!
//! The SSD1306 stores its display RAM in pages of 8 rows. Each byte holds 8
//! vertically stacked pixels of one column, least significant bit on top:
//!
//! ```text
//!            x=0      x=1      x=2          x=W-1
//! bank 0   [byte 0] [byte 1] [byte 2] ... [byte W-1]      rows 0..7
//! bank 1   [byte W] [  W+1 ] [  W+2 ] ... [ 2W-1   ]      rows 8..15
//! ...
//! ```
//!
//! Pixel `(x, y)` lives in bit `y & 7` of byte `(y >> 3) * W + x`. The
//! framebuffer is a plain byte slice in exactly this layout, so a refresh
//! streams it to the controller unchanged in horizontal addressing mode.
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::{Color, Dimensions, FrameBuffer};
//!
//! let mut storage = [0u8; 1024];
//! let mut fb = match FrameBuffer::new(&mut storage[..], Dimensions::SSD1306_128X64) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//!
//! fb.set_pixel(3, 10, Color::On);
//! assert_eq!(fb.get_pixel(3, 10), Some(Color::On));
//! assert_eq!(fb.as_bytes()[128 + 3], 0b0000_0100);
//!
//! // Out of range is not an error
//! fb.set_pixel(-1, 200, Color::On);
//! assert_eq!(fb.get_pixel(-1, 200), None);
//! ```

use crate::color::Color;
use crate::config::Dimensions;
use crate::error::BufferError;

/// Mask with the lowest `n` bits set, filling a bank from the top row down
#[inline]
pub(crate) const fn lsb2msb(n: u32) -> u8 {
    if n >= 8 { 0xFF } else { ((1u16 << n) - 1) as u8 }
}

/// Mask with the highest `n` bits set, filling a bank from the bottom row up
#[inline]
pub(crate) const fn msb2lsb(n: u32) -> u8 {
    if n >= 8 { 0xFF } else { (0xFF00u16 >> n) as u8 }
}

/// Mask covering `len` rows starting at row `offset` inside one bank
///
/// `offset + len` must not exceed 8.
#[inline]
pub(crate) const fn span_mask(offset: u32, len: u32) -> u8 {
    lsb2msb(len) << offset
}

/// Clip the run `start..start+len` to `0..limit`
///
/// Returns the clipped start and length, or `None` when nothing is left.
pub(crate) fn clip_span(start: i32, len: u32, limit: u32) -> Option<(u32, u32)> {
    let start = i64::from(start);
    let end = (start + i64::from(len)).min(i64::from(limit));
    let start = start.max(0);
    if end <= start {
        return None;
    }
    Some((start as u32, (end - start) as u32))
}

/// A 1bpp framebuffer over caller-provided storage
///
/// `B` is anything that derefs to a byte slice: a static array, a
/// `&mut [u8]` or a `Vec<u8>`. Storage longer than one frame is allowed;
/// only the first `width * height / 8` bytes are used.
#[derive(Debug)]
pub struct FrameBuffer<B> {
    buffer: B,
    dimensions: Dimensions,
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap `buffer` as a framebuffer of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns [`BufferError`] if `buffer` holds fewer than
    /// `dimensions.buffer_size()` bytes.
    pub fn new(buffer: B, dimensions: Dimensions) -> Result<Self, BufferError> {
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(BufferError { required, provided });
        }
        Ok(Self { buffer, dimensions })
    }

    /// Give back the underlying storage
    pub fn release(self) -> B {
        self.buffer
    }

    /// Dimensions the buffer was created with
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        u32::from(self.dimensions.width)
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        u32::from(self.dimensions.height)
    }

    /// Number of 8-row banks
    #[inline]
    pub fn banks(&self) -> u32 {
        self.height() / 8
    }

    /// Frame bytes in controller order
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.dimensions.buffer_size();
        self.buffer.as_ref().get(..len).unwrap_or_default()
    }

    /// Mutable frame bytes in controller order
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        let len = self.dimensions.buffer_size();
        self.buffer.as_mut().get_mut(..len).unwrap_or_default()
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        self.as_mut_bytes().fill(color.fill_byte());
    }

    /// Set the pixel at `(x, y)`
    ///
    /// Coordinates outside the buffer are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((x, y)) = self.checked(x, y) {
            self.set_pixel_unchecked(x, y, color);
        }
    }

    /// [`set_pixel`](Self::set_pixel) for coordinates computed in `i64`
    #[inline]
    pub(crate) fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }

    /// Read the pixel at `(x, y)`
    ///
    /// Returns `None` for coordinates outside the buffer.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (x, y) = self.checked(x, y)?;
        let byte = self.as_bytes().get(self.index(x, y))?;
        Some(Color::from(byte & (1 << (y & 7)) != 0))
    }

    /// Convert to unsigned coordinates if `(x, y)` is inside the buffer
    pub(crate) fn checked(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.width() && y < self.height()).then_some((x, y))
    }

    /// Byte index holding pixel `(x, y)`
    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        (y as usize >> 3) * self.width() as usize + x as usize
    }

    #[inline]
    pub(crate) fn set_pixel_unchecked(&mut self, x: u32, y: u32, color: Color) {
        debug_assert!(x < self.width() && y < self.height(), "pixel ({x}, {y}) out of range");
        let index = self.index(x, y);
        self.apply_mask(index, 1 << (y & 7), color);
    }

    /// Apply `color` to the bits of byte `index` selected by `mask`
    #[inline]
    pub(crate) fn apply_mask(&mut self, index: usize, mask: u8, color: Color) {
        debug_assert!(index < self.dimensions.buffer_size(), "byte {index} out of range");
        if let Some(byte) = self.as_mut_bytes().get_mut(index) {
            color.apply(byte, mask);
        }
    }

    /// Overwrite byte `index` with `value`
    #[inline]
    pub(crate) fn set_byte(&mut self, index: usize, value: u8) {
        debug_assert!(index < self.dimensions.buffer_size(), "byte {index} out of range");
        if let Some(byte) = self.as_mut_bytes().get_mut(index) {
            *byte = value;
        }
    }

    /// Set the `n` lowest bits of byte `index`
    #[inline]
    pub(crate) fn set_bits_lsb2msb(&mut self, index: usize, n: u32, color: Color) {
        self.apply_mask(index, lsb2msb(n), color);
    }

    /// Set the `n` highest bits of byte `index`
    #[inline]
    pub(crate) fn set_bits_msb2lsb(&mut self, index: usize, n: u32, color: Color) {
        self.apply_mask(index, msb2lsb(n), color);
    }

    /// Apply `mask` to `len` consecutive columns of one bank
    pub(crate) fn apply_run(&mut self, bank: u32, x: u32, len: u32, mask: u8, color: Color) {
        let start = self.index(x, bank << 3);
        let end = start + len as usize;
        debug_assert!(end <= self.dimensions.buffer_size(), "run {start}..{end} out of range");
        if let Some(run) = self.as_mut_bytes().get_mut(start..end) {
            for byte in run {
                color.apply(byte, mask);
            }
        }
    }

    /// Copy `bytes` into one bank starting at column `x`
    pub(crate) fn write_run(&mut self, bank: u32, x: u32, bytes: &[u8]) {
        let start = self.index(x, bank << 3);
        let end = start + bytes.len();
        debug_assert!(end <= self.dimensions.buffer_size(), "run {start}..{end} out of range");
        if let Some(run) = self.as_mut_bytes().get_mut(start..end) {
            run.copy_from_slice(bytes);
        }
    }
}
