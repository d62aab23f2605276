//! Graphics support via embedded-graphics
//!
//! [`FrameBuffer`] and [`Display`] implement
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget), so any
//! embedded-graphics primitive, font or image can be drawn next to the
//! built-in rasterizers. Solid fills go through the bank-wise area fill
//! rather than pixel by pixel.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     mono_font::{MonoTextStyle, ascii::FONT_6X10},
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//!     text::Text,
//! };
//! use ssd1306_fb::{Color, FrameBuffer};
//!
//! let mut storage = [0u8; 1024];
//! let mut fb = match FrameBuffer::new(&mut storage[..], ssd1306_fb::Dimensions::SSD1306_128X64) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//!
//! let _ = fb.clear(Color::Off);
//! let _ = Circle::new(Point::new(40, 8), 48)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::On, 2))
//!     .draw(&mut fb);
//! let _ = Text::new("Hi", Point::new(56, 36), MonoTextStyle::new(&FONT_6X10, Color::On))
//!     .draw(&mut fb);
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
    primitives::Rectangle,
};

use crate::color::Color;
use crate::display::Display;
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;

impl<B> DrawTarget for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_area(
            area.top_left.x,
            area.top_left.y,
            area.size.width,
            area.size.height,
            color,
        );
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl<B> OriginDimensions for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// Draws into the active handle's framebuffer
impl<I, B> DrawTarget for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.buffer_mut().draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.buffer_mut().fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buffer_mut().clear(color)
    }
}

impl<I, B> OriginDimensions for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        self.buffer().size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Dimensions};
    use crate::handle::DisplayHandle;
    use alloc::vec;
    use alloc::vec::Vec;
    use embedded_graphics::primitives::{Circle, Line, Primitive, PrimitiveStyle};
    use embedded_graphics::Drawable;
    use embedded_hal::delay::DelayNs;

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, _commands: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) {}
    }

    fn framebuffer() -> FrameBuffer<Vec<u8>> {
        FrameBuffer::new(vec![0u8; 1024], Dimensions::SSD1306_128X64).unwrap()
    }

    #[test]
    fn test_size() {
        let fb = FrameBuffer::new(vec![0u8; 512], Dimensions::new(128, 32).unwrap()).unwrap();
        assert_eq!(fb.size(), Size::new(128, 32));

        let display = Display::new(
            MockInterface,
            Config::default(),
            DisplayHandle::new(framebuffer()),
        );
        assert_eq!(display.size(), Size::new(128, 64));
    }

    #[test]
    fn test_fill_solid_matches_rectangle() {
        let mut drawn = framebuffer();
        Rectangle::new(Point::new(-3, 5), Size::new(20, 30))
            .into_styled(PrimitiveStyle::with_fill(Color::On))
            .draw(&mut drawn)
            .unwrap();

        let mut expected = framebuffer();
        expected.rectangle(0, 5, 16, 34, Color::On, true);
        assert_eq!(drawn.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn test_draw_iter_clips() {
        let mut fb = framebuffer();
        Line::new(Point::new(-10, -10), Point::new(200, 200))
            .into_styled(PrimitiveStyle::with_stroke(Color::On, 1))
            .draw(&mut fb)
            .unwrap();

        for i in 0..64 {
            assert_eq!(fb.get_pixel(i, i), Some(Color::On));
        }
        assert_eq!(fb.get_pixel(64, 63), Some(Color::Off));
    }

    #[test]
    fn test_clear_and_circle_through_display() {
        let mut display = Display::new(
            MockInterface,
            Config::default(),
            DisplayHandle::new(framebuffer()),
        );
        display.clear(Color::On).unwrap();
        assert!(display.buffer().as_bytes().iter().all(|&b| b == 0xFF));

        Circle::new(Point::new(10, 10), 21)
            .into_styled(PrimitiveStyle::with_fill(Color::Off))
            .draw(&mut display)
            .unwrap();
        assert_eq!(display.buffer().get_pixel(20, 20), Some(Color::Off));
        assert_eq!(display.buffer().get_pixel(0, 0), Some(Color::On));
    }
}
