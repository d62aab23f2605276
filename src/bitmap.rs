//! Bitmap blitting
//!
//! Bitmaps use the framebuffer layout with their own width as stride:
//! pixel `(i, j)` is bit `j & 7` of byte `(j >> 3) * len_x + i`. Glyph
//! columns and images converted for the SSD1306 are already in this form.
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::{Color, Dimensions, FrameBuffer};
//!
//! // 3 x 8 bitmap: a solid bar, an empty column, a single dot on top
//! let arrow = [0xFF, 0x00, 0x01];
//!
//! let mut storage = [0u8; 1024];
//! let mut fb = match FrameBuffer::new(&mut storage[..], Dimensions::SSD1306_128X64) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//!
//! // Doubled: every source pixel becomes a 2 x 2 block
//! fb.draw_bitmap(&arrow, 10, 3, 3, 8, 2);
//! assert_eq!(fb.get_pixel(10, 3), Some(Color::On));
//! assert_eq!(fb.get_pixel(11, 18), Some(Color::On));
//! assert_eq!(fb.get_pixel(12, 3), Some(Color::Off));
//! ```

use log::warn;

use crate::color::Color;
use crate::error::BlitError;
use crate::framebuffer::{FrameBuffer, span_mask};

/// Largest supported scale factor
pub const MAX_SCALE: u32 = 4;

/// Bytes needed to hold a `len_x` x `len_y` bitmap
pub(crate) fn source_size(len_x: u32, len_y: u32) -> usize {
    len_x as usize * len_y.div_ceil(8) as usize
}

/// Read source pixel `(i, j)`
#[inline]
fn source_pixel(src: &[u8], len_x: u32, i: u32, j: u32) -> Color {
    let pos = (j as usize >> 3) * len_x as usize + i as usize;
    let byte = src.get(pos).copied().unwrap_or_default();
    Color::from((byte >> (j & 7)) & 1 != 0)
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw a `len_x` x `len_y` bitmap with its top left corner at `(x0, y0)`
    ///
    /// `scale` enlarges each source pixel to a `scale` x `scale` block using
    /// nearest neighbour replication. Supported scales are 1 to 4; any other
    /// value draws nothing. Both set and cleared source pixels are written.
    ///
    /// The origin must be on screen. Rows and columns past the right or
    /// bottom edge are dropped in whole source pixels. A `src` shorter than
    /// the bitmap draws nothing.
    pub fn draw_bitmap(
        &mut self,
        src: &[u8],
        x0: i32,
        y0: i32,
        len_x: u32,
        len_y: u32,
        scale: u32,
    ) {
        if !(1..=MAX_SCALE).contains(&scale) {
            return;
        }
        let Some((x0, y0)) = self.checked(x0, y0) else {
            return;
        };
        if src.len() < source_size(len_x, len_y) {
            return;
        }

        let draw_x = len_x.min((self.width() - x0) / scale);
        let draw_y = len_y.min((self.height() - y0) / scale);

        if scale == 1 {
            self.blit(src, x0, y0, draw_x, draw_y, len_x);
        } else {
            self.blit_scaled(src, x0, y0, draw_x, draw_y, len_x, scale);
        }
    }

    fn blit(&mut self, src: &[u8], x0: u32, y0: u32, draw_x: u32, draw_y: u32, len_x: u32) {
        for j in 0..draw_y {
            let y = y0 + j;
            let mask = 1 << (y & 7);
            let pos = self.index(x0, y);
            for i in 0..draw_x {
                let color = source_pixel(src, len_x, i, j);
                self.apply_mask(pos + i as usize, mask, color);
            }
        }
    }

    /// Replicate every source pixel into a `scale` x `scale` block
    ///
    /// A block row that crosses a bank boundary is written as the upper
    /// part of one bank plus the lower part of the next.
    fn blit_scaled(
        &mut self,
        src: &[u8],
        x0: u32,
        y0: u32,
        draw_x: u32,
        draw_y: u32,
        len_x: u32,
        scale: u32,
    ) {
        let stride = self.width() as usize;
        let mut y = y0;

        for j in 0..draw_y {
            let offset = y & 7;
            let room = 8 - offset;
            let mut pos = self.index(x0, y);

            for i in 0..draw_x {
                let color = source_pixel(src, len_x, i, j);
                for k in 0..scale as usize {
                    if scale > room {
                        self.set_bits_msb2lsb(pos + k, room, color);
                        self.set_bits_lsb2msb(pos + stride + k, scale - room, color);
                    } else {
                        self.apply_mask(pos + k, span_mask(offset, scale), color);
                    }
                }
                pos += scale as usize;
            }
            y += scale;
        }
    }

    /// Copy a bank-aligned bitmap one bank row at a time
    ///
    /// Much faster than [`draw_bitmap`](Self::draw_bitmap) but only for
    /// bitmaps that start on a bank boundary and cover whole banks. The
    /// bitmap is clipped at the right and bottom edges; an origin off
    /// screen draws nothing.
    ///
    /// # Errors
    ///
    /// - [`BlitError::Misaligned`] if `y0` or `len_y` is not a multiple of 8
    /// - [`BlitError::SourceTooShort`] if `src` holds fewer than
    ///   `len_x * len_y / 8` bytes
    pub fn draw_bitmap_aligned(
        &mut self,
        src: &[u8],
        x0: i32,
        y0: i32,
        len_x: u32,
        len_y: u32,
    ) -> Result<(), BlitError> {
        if y0 & 7 != 0 || len_y & 7 != 0 {
            warn!("Rejected unaligned bitmap: y={} height={}", y0, len_y);
            return Err(BlitError::Misaligned { y: y0, height: len_y });
        }
        let required = source_size(len_x, len_y);
        if src.len() < required {
            warn!(
                "Rejected bitmap: {} bytes provided, {} required",
                src.len(),
                required
            );
            return Err(BlitError::SourceTooShort {
                required,
                provided: src.len(),
            });
        }
        let Some((x0, y0)) = self.checked(x0, y0) else {
            return Ok(());
        };
        if len_x == 0 {
            return Ok(());
        }

        let draw_x = len_x.min(self.width() - x0) as usize;
        let banks = (len_y / 8).min((self.height() - y0) / 8);
        let first_bank = y0 >> 3;

        // Source rows keep the full bitmap width as stride when clipped
        for (bank, row) in src.chunks(len_x as usize).take(banks as usize).enumerate() {
            if let Some(row) = row.get(..draw_x) {
                self.write_run(first_bank + bank as u32, x0, row);
            }
        }
        Ok(())
    }
}
