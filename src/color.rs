//! Pixel color for monochrome OLED panels
//!
//! The SSD1306 drives one bit per pixel: a set bit lights the pixel, a
//! cleared bit leaves it dark.
//!
//! | Color | Pixel bit | Fill byte |
//! |-------|-----------|-----------|
//! | Off   | 0         | 0x00      |
//! | On    | 1         | 0xFF      |
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::Color;
//!
//! assert_eq!(Color::On.fill_byte(), 0xFF);
//! assert_eq!(Color::Off.fill_byte(), 0x00);
//!
//! // Drawing with the opposite color erases
//! assert_eq!(!Color::On, Color::Off);
//! ```

/// Colors supported by the SSD1306
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Dark pixel (bit cleared)
    #[default]
    Off,
    /// Lit pixel (bit set)
    On,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Self::from(color.is_on())
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl core::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl Color {
    /// Byte value with all 8 pixels of a bank set to this color
    ///
    /// ## Example
    ///
    /// ```
    /// use ssd1306_fb::Color;
    ///
    /// assert_eq!(Color::Off.fill_byte(), 0x00);
    /// assert_eq!(Color::On.fill_byte(), 0xFF);
    /// ```
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Off => 0x00,
            Self::On => 0xFF,
        }
    }

    /// Whether the pixel is lit
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// Apply this color to `byte` for every bit set in `mask`
    #[inline]
    pub(crate) fn apply(self, byte: &mut u8, mask: u8) {
        match self {
            Self::On => *byte |= mask,
            Self::Off => *byte &= !mask,
        }
    }
}
