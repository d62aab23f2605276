//! Display handle: a framebuffer plus its text cursor
//!
//! A [`Display`](crate::Display) draws into exactly one handle at a time.
//! Several handles can be prepared up front and swapped in with
//! [`Display::swap_handle`](crate::Display::swap_handle), e.g. to flip
//! between screens without redrawing them.

use crate::color::Color;
use crate::framebuffer::FrameBuffer;

/// Text cursor position
///
/// Cursor printing is bank aligned, so the vertical position is a bank
/// row (`y / 8`) rather than a pixel row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Column in pixels
    pub x: u32,
    /// Bank row
    pub row: u32,
}

/// A framebuffer and the cursor used for text printing
#[derive(Debug)]
pub struct DisplayHandle<B> {
    pub(crate) buffer: FrameBuffer<B>,
    pub(crate) cursor: Cursor,
}

impl<B> DisplayHandle<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a handle with the cursor in the top left corner
    pub fn new(buffer: FrameBuffer<B>) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
        }
    }

    /// Give back the framebuffer
    pub fn release(self) -> FrameBuffer<B> {
        self.buffer
    }

    /// The framebuffer
    pub fn buffer(&self) -> &FrameBuffer<B> {
        &self.buffer
    }

    /// The framebuffer, for drawing
    pub fn buffer_mut(&mut self) -> &mut FrameBuffer<B> {
        &mut self.buffer
    }

    /// Current cursor position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Move the cursor
    ///
    /// `x` is kept only if it is inside the buffer, and `y` likewise; `y`
    /// is rounded down to its bank. An out of range coordinate leaves that
    /// axis unchanged.
    pub fn set_cursor(&mut self, x: u32, y: u32) {
        if x < self.buffer.width() {
            self.cursor.x = x;
        }
        if y < self.buffer.height() {
            self.cursor.row = y >> 3;
        }
    }

    /// Move the cursor to the top left corner
    pub fn home(&mut self) {
        self.cursor = Cursor::default();
    }

    /// Fill the framebuffer with `color`
    pub fn fill(&mut self, color: Color) {
        self.buffer.fill(color);
    }
}
