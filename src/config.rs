//! Display configuration types and builder

use crate::command::{
    CHARGE_PUMP_OFF, CHARGE_PUMP_ON, CLOCK_DIV_DEFAULT, COM_PINS_DEFAULT, CONTRAST_DEFAULT_EXTERNAL,
    CONTRAST_DEFAULT_SWITCHCAP, PRECHARGE_DEFAULT_EXTERNAL, PRECHARGE_DEFAULT_SWITCHCAP,
    VcomhLevel,
};
pub use crate::error::{BuilderError, MAX_HEIGHT, MAX_WIDTH};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (segment outputs)
    pub width: u16,
    /// Height in pixels (COM outputs), always a multiple of 8
    pub height: u16,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::SSD1306_128X64
    }
}

impl Dimensions {
    /// The common 128x64 panel
    pub const SSD1306_128X64: Self = Self {
        width: 128,
        height: 64,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width is 0 or > MAX_WIDTH
    /// - height is 0 or > MAX_HEIGHT
    /// - height % 8 != 0 (rows are stored in 8-pixel banks)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_HEIGHT || height % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-pixel banks (display pages)
    pub fn banks(&self) -> usize {
        self.height as usize / 8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        (self.width as usize * self.height as usize) / 8
    }
}

/// Source of the panel driving voltage
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VccSource {
    /// Panel voltage supplied externally; the charge pump stays off
    External,
    /// Panel voltage generated from the 3.3V rail by the internal charge pump
    #[default]
    SwitchCap,
}

impl VccSource {
    /// Charge pump setting byte for this supply
    pub fn charge_pump(self) -> u8 {
        match self {
            Self::External => CHARGE_PUMP_OFF,
            Self::SwitchCap => CHARGE_PUMP_ON,
        }
    }

    /// Pre-charge period byte recommended for this supply
    pub fn precharge(self) -> u8 {
        match self {
            Self::External => PRECHARGE_DEFAULT_EXTERNAL,
            Self::SwitchCap => PRECHARGE_DEFAULT_SWITCHCAP,
        }
    }

    /// Contrast value the controller uses after reset with this supply
    pub fn default_contrast(self) -> u8 {
        match self {
            Self::External => CONTRAST_DEFAULT_EXTERNAL,
            Self::SwitchCap => CONTRAST_DEFAULT_SWITCHCAP,
        }
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters sent during
/// [`Display::init`](crate::Display::init). Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Panel supply
    pub vcc: VccSource,
    /// Contrast register value
    pub contrast: u8,
    /// VCOMH deselect level
    pub vcomh: VcomhLevel,
    /// Display clock divide ratio / oscillator frequency byte
    pub clock_div: u8,
    /// COM pins hardware configuration byte (0x12 for 128x64, 0x02 for 128x32)
    pub com_pins: u8,
    /// Map column 127 to SEG0 (mirror horizontally)
    pub segment_remap: bool,
    /// Scan COM outputs from COM[N-1] to COM0 (mirror vertically)
    pub com_scan_reversed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1306_fb::{Builder, Dimensions, VccSource, VcomhLevel};
///
/// let dims = match Dimensions::new(128, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = Builder::new()
///     .dimensions(dims)
///     .vcc(VccSource::External)
///     .vcomh(VcomhLevel::High)
///     .build();
/// assert_eq!(config.contrast, 0x9F);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions
    dimensions: Dimensions,
    /// Panel supply
    vcc: VccSource,
    /// Contrast override (None = default for the supply)
    contrast: Option<u8>,
    /// VCOMH deselect level
    vcomh: VcomhLevel,
    /// Display clock divide ratio / oscillator frequency byte
    clock_div: u8,
    /// COM pins hardware configuration byte
    com_pins: u8,
    /// Segment remap
    segment_remap: bool,
    /// COM scan direction
    com_scan_reversed: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::SSD1306_128X64,
            vcc: VccSource::SwitchCap,
            contrast: None,
            vcomh: VcomhLevel::Default,
            // Suggested ratio from the datasheet
            clock_div: CLOCK_DIV_DEFAULT,
            com_pins: COM_PINS_DEFAULT,
            // Column 127 mapped to SEG0 and COM scanned in reverse: the
            // usual module wiring puts (0, 0) at the top left this way
            segment_remap: true,
            com_scan_reversed: true,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set the panel supply
    pub fn vcc(mut self, vcc: VccSource) -> Self {
        self.vcc = vcc;
        self
    }

    /// Set the contrast value sent during initialization
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = Some(value);
        self
    }

    /// Set the VCOMH deselect level
    pub fn vcomh(mut self, level: VcomhLevel) -> Self {
        self.vcomh = level;
        self
    }

    /// Set the display clock divide ratio / oscillator frequency byte
    pub fn clock_div(mut self, value: u8) -> Self {
        self.clock_div = value;
        self
    }

    /// Set the COM pins hardware configuration byte
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = value;
        self
    }

    /// Set segment remap
    pub fn segment_remap(mut self, value: bool) -> Self {
        self.segment_remap = value;
        self
    }

    /// Set COM scan direction
    pub fn com_scan_reversed(mut self, value: bool) -> Self {
        self.com_scan_reversed = value;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            dimensions: self.dimensions,
            vcc: self.vcc,
            contrast: self
                .contrast
                .unwrap_or_else(|| self.vcc.default_contrast()),
            vcomh: self.vcomh,
            clock_div: self.clock_div,
            com_pins: self.com_pins,
            segment_remap: self.segment_remap,
            com_scan_reversed: self.com_scan_reversed,
        }
    }
}
