//! Cosmetic model for the widget: colors, background choices and themes.
//!
//! Background colors and themes are small closed sets addressed by the
//! string ids persisted in the settings store.

use serde::{Deserialize, Serialize};

/// An ARGB color as consumed by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArgbColor {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ArgbColor {
    pub const WHITE: ArgbColor = ArgbColor::rgb(255, 255, 255);
    pub const BLACK: ArgbColor = ArgbColor::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Packed `0xAARRGGBB` value
    pub fn to_argb_u32(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Convert to hex string for display
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse `#RRGGBB` (leading `#` optional) into an opaque color
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return Err("Hex color must be 6 characters".to_string());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

        Ok(Self::rgb(r, g, b))
    }
}

/// Widget background color choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundColor {
    #[default]
    White,
    Black,
    Blue,
    Green,
}

impl BackgroundColor {
    pub const ALL: [BackgroundColor; 4] = [
        BackgroundColor::White,
        BackgroundColor::Black,
        BackgroundColor::Blue,
        BackgroundColor::Green,
    ];

    pub fn id(self) -> &'static str {
        match self {
            BackgroundColor::White => "white",
            BackgroundColor::Black => "black",
            BackgroundColor::Blue => "blue",
            BackgroundColor::Green => "green",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.id() == id)
    }

    /// Opaque base color before transparency is applied
    pub fn base_color(self) -> ArgbColor {
        match self {
            BackgroundColor::White => ArgbColor::WHITE,
            BackgroundColor::Black => ArgbColor::BLACK,
            // Material Blue 500
            BackgroundColor::Blue => ArgbColor::rgb(0x21, 0x96, 0xF3),
            // Material Green 500
            BackgroundColor::Green => ArgbColor::rgb(0x4C, 0xAF, 0x50),
        }
    }

    pub fn is_dark(self) -> bool {
        !matches!(self, BackgroundColor::White)
    }

    /// Text color readable on this background
    pub fn text_color(self) -> ArgbColor {
        if self.is_dark() {
            ArgbColor::WHITE
        } else {
            ArgbColor::BLACK
        }
    }
}

/// Direction used when cycling through an ordered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleDirection {
    Previous,
    Next,
}

/// Accent themes, cycled in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Blue,
    Green,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Light, Theme::Dark, Theme::Blue, Theme::Green];

    pub fn id(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Blue => "blue",
            Theme::Green => "green",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Blue => "Blue",
            Theme::Green => "Green",
        }
    }

    /// Accent used for the page title and navigation buttons
    pub fn accent(self) -> ArgbColor {
        match self {
            Theme::Light => ArgbColor::rgb(0x19, 0x76, 0xD2),
            Theme::Dark => ArgbColor::rgb(0x42, 0x42, 0x42),
            Theme::Blue => ArgbColor::rgb(0x0D, 0x47, 0xA1),
            Theme::Green => ArgbColor::rgb(0x38, 0x8E, 0x3C),
        }
    }

    pub fn cycle(self, direction: CycleDirection) -> Self {
        let len = Self::ALL.len();
        let position = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        let index = match direction {
            CycleDirection::Next => (position + 1) % len,
            CycleDirection::Previous => (position + len - 1) % len,
        };
        Self::ALL[index]
    }
}
