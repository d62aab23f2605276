//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::color::Color;
use crate::command::{
    ACTIVATE_SCROLL, COLUMN_ADDR, COM_SCAN_DEC, COM_SCAN_INC, DEACTIVATE_SCROLL,
    DISPLAY_ALL_ON, DISPLAY_ALL_ON_RESUME, DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY, MEMORY_MODE,
    MEMORY_MODE_HORIZONTAL, NORMAL_DISPLAY, PAGE_ADDR, SEGMENT_REMAP, SET_CHARGE_PUMP,
    SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_CLOCK_DIV, SET_DISPLAY_OFFSET, SET_MULTIPLEX,
    SET_PRECHARGE, SET_START_LINE, SET_VCOM_DETECT, ScrollDirection, VcomhLevel,
    scroll_interval,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::handle::DisplayHandle;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for SSD1306
///
/// Owns the hardware interface and the active [`DisplayHandle`]. Drawing
/// happens on the handle's framebuffer through [`buffer_mut`](Self::buffer_mut)
/// or [`handle_mut`](Self::handle_mut); [`refresh`](Self::refresh) pushes it
/// to the panel.
///
/// Every command refuses to start with [`Error::TransferInProgress`] while
/// the interface reports an unfinished transfer.
pub struct Display<I, B>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Framebuffer and cursor currently drawn to and refreshed
    handle: DisplayHandle<B>,
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config, handle: DisplayHandle<B>) -> Self {
        Self {
            interface,
            config,
            handle,
        }
    }

    /// Consume the display and return the interface and the active handle
    pub fn release(self) -> (I, DisplayHandle<B>) {
        (self.interface, self.handle)
    }

    /// Perform hardware reset and send the initialization sequence
    ///
    /// Also moves the text cursor of the active handle back to the top left
    /// corner. The framebuffer is left as is; call [`refresh`](Self::refresh)
    /// to show it.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.ensure_idle()?;
        debug!(
            "Initializing {}x{} panel",
            self.config.dimensions.width, self.config.dimensions.height
        );

        self.interface.reset(delay);
        self.handle.home();

        let multiplex = (self.config.dimensions.height - 1) as u8;
        self.send_command(&[
            DISPLAY_OFF,
            SET_DISPLAY_CLOCK_DIV,
            self.config.clock_div,
            SET_MULTIPLEX,
            multiplex,
            SET_DISPLAY_OFFSET,
            0x00,
            SET_START_LINE,
            NORMAL_DISPLAY,
            DEACTIVATE_SCROLL,
        ])?;

        let remap = SEGMENT_REMAP | u8::from(self.config.segment_remap);
        let com_scan = if self.config.com_scan_reversed {
            COM_SCAN_DEC
        } else {
            COM_SCAN_INC
        };
        self.send_command(&[
            MEMORY_MODE,
            MEMORY_MODE_HORIZONTAL,
            remap,
            com_scan,
            SET_COM_PINS,
            self.config.com_pins,
            SET_CONTRAST,
            self.config.contrast,
            SET_PRECHARGE,
            self.config.vcc.precharge(),
        ])?;

        self.send_command(&[
            SET_VCOM_DETECT,
            self.config.vcomh as u8,
            DISPLAY_ALL_ON_RESUME,
            SET_CHARGE_PUMP,
            self.config.vcc.charge_pump(),
            DISPLAY_ON,
        ])?;

        debug!("Display initialized");
        Ok(())
    }

    /// Send the active framebuffer to the display
    pub fn refresh(&mut self) -> DisplayResult<I> {
        self.ensure_idle()?;

        let dims = self.config.dimensions;
        let required = dims.buffer_size();
        let provided = self.handle.buffer.as_bytes().len();
        if provided < required {
            return Err(Error::BufferTooSmall { required, provided });
        }

        self.send_command(&[
            COLUMN_ADDR,
            0,
            (dims.width - 1) as u8,
            PAGE_ADDR,
            0,
            (dims.banks() - 1) as u8,
        ])?;

        trace!("Refreshing {} bytes", required);
        let frame = self.handle.buffer.as_bytes().get(..required).unwrap_or_default();
        self.interface.send_data(frame).map_err(Error::Interface)
    }

    /// Fill the active framebuffer with `color`
    ///
    /// Nothing is sent until the next [`refresh`](Self::refresh).
    pub fn fill(&mut self, color: Color) {
        self.handle.fill(color);
    }

    /// Invert the panel output (lit pixels go dark and vice versa)
    ///
    /// Applied by the controller; RAM content is unchanged.
    pub fn invert(&mut self, invert: bool) -> DisplayResult<I> {
        let command = if invert { INVERT_DISPLAY } else { NORMAL_DISPLAY };
        self.checked_command(&[command])
    }

    /// Light every pixel regardless of RAM (`true`), or follow RAM again
    ///
    /// RAM is left untouched, so turning this off shows the last refresh.
    pub fn all_pixels_on(&mut self, on: bool) -> DisplayResult<I> {
        let command = if on { DISPLAY_ALL_ON } else { DISPLAY_ALL_ON_RESUME };
        self.checked_command(&[command])
    }

    /// Enter (`true`) or leave (`false`) sleep mode
    pub fn sleep_mode(&mut self, sleep: bool) -> DisplayResult<I> {
        let command = if sleep { DISPLAY_OFF } else { DISPLAY_ON };
        self.checked_command(&[command])
    }

    /// Set the contrast (brightness) register
    pub fn contrast(&mut self, value: u8) -> DisplayResult<I> {
        self.checked_command(&[SET_CONTRAST, value])
    }

    /// Set the VCOMH deselect level
    pub fn vcomh(&mut self, level: VcomhLevel) -> DisplayResult<I> {
        self.checked_command(&[SET_VCOM_DETECT, level as u8])
    }

    /// Start continuous horizontal scrolling of the whole display
    ///
    /// `interval` selects the step period from 0 (every 2 frames) to 7
    /// (every 256 frames); larger values are clamped to 7.
    pub fn hscroll(&mut self, interval: u8, direction: ScrollDirection) -> DisplayResult<I> {
        let end_page = self.end_page();
        self.checked_command(&[
            direction.horizontal_command(),
            0x00,
            0x00,
            scroll_interval(interval),
            end_page,
            0x00,
            0xFF,
            ACTIVATE_SCROLL,
        ])
    }

    /// Start continuous diagonal scrolling
    ///
    /// Like [`hscroll`](Self::hscroll), with the content also moving up by
    /// `vertical_offset` rows (0 to 63) per step.
    pub fn hvscroll(
        &mut self,
        interval: u8,
        vertical_offset: u8,
        direction: ScrollDirection,
    ) -> DisplayResult<I> {
        let end_page = self.end_page();
        self.checked_command(&[
            direction.diagonal_command(),
            0x00,
            0x00,
            scroll_interval(interval),
            end_page,
            vertical_offset & 0x3F,
            ACTIVATE_SCROLL,
        ])
    }

    /// Stop scrolling
    ///
    /// Call [`refresh`](Self::refresh) afterwards; RAM content is undefined
    /// once a scroll has run.
    pub fn scroll_disable(&mut self) -> DisplayResult<I> {
        self.checked_command(&[DEACTIVATE_SCROLL])
    }

    /// Set oscillator frequency and clock divide ratio, both 0 to 15
    ///
    /// Values above 15 are clamped.
    pub fn timings(&mut self, freq: u8, div_ratio: u8) -> DisplayResult<I> {
        let value = (freq.min(15) << 4) | div_ratio.min(15);
        self.checked_command(&[SET_DISPLAY_CLOCK_DIV, value])
    }

    /// Set the pre-charge period in display clocks, clamped to 1..=15
    pub fn precharge(&mut self, period: u8) -> DisplayResult<I> {
        self.checked_command(&[SET_PRECHARGE, period.clamp(1, 15)])
    }

    /// Make `handle` the active handle and return the previous one
    ///
    /// No data is sent and the new handle is not checked against the
    /// configured dimensions.
    pub fn swap_handle(&mut self, handle: DisplayHandle<B>) -> DisplayHandle<B> {
        debug!("Swapping display handle");
        core::mem::replace(&mut self.handle, handle)
    }

    /// The active handle
    pub fn handle(&self) -> &DisplayHandle<B> {
        &self.handle
    }

    /// The active handle, for drawing and printing
    pub fn handle_mut(&mut self) -> &mut DisplayHandle<B> {
        &mut self.handle
    }

    /// The active framebuffer
    pub fn buffer(&self) -> &FrameBuffer<B> {
        self.handle.buffer()
    }

    /// The active framebuffer, for drawing
    pub fn buffer_mut(&mut self) -> &mut FrameBuffer<B> {
        self.handle.buffer_mut()
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn end_page(&self) -> u8 {
        (self.config.dimensions.banks() - 1) as u8
    }

    fn ensure_idle(&self) -> DisplayResult<I> {
        if self.interface.transfer_in_progress() {
            return Err(Error::TransferInProgress);
        }
        Ok(())
    }

    fn checked_command(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.ensure_idle()?;
        self.send_command(commands)
    }

    /// Send a command batch to the display controller
    fn send_command(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_command(commands)
            .map_err(Error::Interface)
    }
}
