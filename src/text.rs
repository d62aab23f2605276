//! Text printing
//!
//! Two ways to put text on screen:
//!
//! - **Cursor mode** ([`DisplayHandle::print`]): glyphs are copied straight
//!   into bank rows at the handle's cursor. Fast, but rows are fixed to
//!   the 8-pixel banks; [`Align`](crate::Align) places the glyph inside its bank.
//! - **Free mode** ([`FrameBuffer::print_at`]): glyphs go through
//!   [`FrameBuffer::draw_bitmap`] and can start on any pixel and be
//!   scaled up to 4x.
//!
//! Both wrap to the start of the next line at `\n` or when the next glyph
//! would not fit, and wrap back to the top after the last line. Bytes
//! without a glyph are skipped. A glyph wider than the whole panel is
//! clipped at the right edge.
//!
//! ## Example
//!
//! ```
//! use core::fmt::Write;
//! use ssd1306_fb::{Dimensions, DisplayHandle, Font, FrameBuffer, TextStyle, TextWriter};
//!
//! let mut storage = [0u8; 1024];
//! let fb = match FrameBuffer::new(&mut storage[..], Dimensions::SSD1306_128X64) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//! let mut handle = DisplayHandle::new(fb);
//!
//! handle.print("Hello\n", TextStyle::default(), false);
//!
//! let mut writer = TextWriter::new(&mut handle, TextStyle::default(), false);
//! let _ = write!(writer, "T={}C", 21);
//!
//! handle.buffer_mut().print_at("BIG", Font::Large, 0, 40, 2, false);
//! ```

use crate::bitmap::MAX_SCALE;
use crate::font::{Font, TextStyle};
use crate::framebuffer::FrameBuffer;
use crate::handle::DisplayHandle;

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Print `text` with its first glyph's top left corner at `(x, y)`
    ///
    /// Glyphs are enlarged by `scale` (1 to 4, anything else prints
    /// nothing). With `invert` the glyph cell is drawn lit and the glyph
    /// itself dark.
    pub fn print_at(&mut self, text: &str, font: Font, x: i32, y: i32, scale: u32, invert: bool) {
        if !(1..=MAX_SCALE).contains(&scale) {
            return;
        }
        let advance = font.width() * scale;
        let line_height = font.height() * scale;
        let (width, height) = (i64::from(self.width()), i64::from(self.height()));
        let (mut x, mut y) = (i64::from(x), i64::from(y));

        for byte in text.bytes() {
            if byte == b'\n' || (x > 0 && x + i64::from(advance) > width) {
                x = 0;
                y += i64::from(line_height);
            }
            if y >= height {
                y = 0;
            }

            let Some(glyph) = font.glyph(byte) else {
                continue;
            };
            let glyph = if invert { glyph.inverted() } else { glyph };
            let (Ok(gx), Ok(gy)) = (i32::try_from(x), i32::try_from(y)) else {
                return;
            };
            self.draw_bitmap(glyph.columns(), gx, gy, font.width(), font.height(), scale);
            x += i64::from(advance);
        }
    }
}

impl<B> DisplayHandle<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Print `text` at the cursor and advance it
    ///
    /// With `invert` the whole bank column behind each glyph is lit and the
    /// glyph drawn dark.
    pub fn print(&mut self, text: &str, style: TextStyle, invert: bool) {
        let font = style.font;
        let advance = font.width();
        let shift = style.shift();
        let (width, banks) = (self.buffer.width(), self.buffer.banks());

        for byte in text.bytes() {
            if byte == b'\n' || (self.cursor.x > 0 && self.cursor.x + advance > width) {
                self.cursor.x = 0;
                self.cursor.row += 1;
            }
            if self.cursor.row >= banks {
                self.cursor.row = 0;
            }

            let Some(glyph) = font.glyph(byte) else {
                continue;
            };
            let glyph = glyph.shifted(shift);
            let glyph = if invert { glyph.inverted() } else { glyph };
            // Glyphs wider than the panel lose their right columns
            let room = width.saturating_sub(self.cursor.x) as usize;
            let columns = glyph.columns();
            let columns = columns.get(..room).unwrap_or(columns);
            self.buffer.write_run(self.cursor.row, self.cursor.x, columns);
            self.cursor.x += advance;
        }
    }
}

/// [`core::fmt::Write`] adapter printing at a handle's cursor
///
/// Lets `write!` format straight into the framebuffer without an
/// intermediate string.
pub struct TextWriter<'a, B> {
    handle: &'a mut DisplayHandle<B>,
    style: TextStyle,
    invert: bool,
}

impl<'a, B> TextWriter<'a, B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a writer printing with `style`
    pub fn new(handle: &'a mut DisplayHandle<B>, style: TextStyle, invert: bool) -> Self {
        Self {
            handle,
            style,
            invert,
        }
    }
}

impl<B> core::fmt::Write for TextWriter<'_, B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.handle.print(s, self.style, self.invert);
        Ok(())
    }
}
