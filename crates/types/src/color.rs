//! Foundational color types used by the gauge ring.
//!
//! Colors arrive as CSS color strings in the configuration and are only parsed
//! when a gradient has to be computed; explicit palettes are passed through to
//! the renderer untouched.

use serde::{Deserialize, Serialize};

/// RGBA color with alpha channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        )
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidHex);

        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16).ok_or(ColorParseError::InvalidHex)? as u8;
                    channels[i] = v * 17;
                }
                Ok(Self::from_rgba8(channels[0], channels[1], channels[2], 255))
            }
            6 => Ok(Self::from_rgba8(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                255,
            )),
            8 => Ok(Self::from_rgba8(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])?,
            )),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Parse any CSS color: hex, named (`green`), `rgb()`, `hsl()`, ...
    ///
    /// Channels are quantized to 8 bits.
    pub fn from_css(css: &str) -> Result<Self, ColorParseError> {
        let trimmed = css.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }
        let [r, g, b, a] = csscolorparser::parse(trimmed)
            .map_err(|e| ColorParseError::InvalidCss(e.to_string()))?
            .to_rgba8();
        Ok(Self::from_rgba8(r, g, b, a))
    }

    /// Lowercase `#rrggbb` (alpha is dropped)
    pub fn to_hex(&self) -> String {
        let (r, g, b, _) = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Convert to HSL. Hue is undefined for greys, saturation for black and white.
    pub fn to_hsl(&self) -> Hsl {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let d = max - min;
        let l = (max + min) / 2.0;

        if d == 0.0 {
            let s = if l > 0.0 && l < 1.0 { Some(0.0) } else { None };
            return Hsl { h: None, s, l };
        }

        let s = if l < 0.5 {
            d / (max + min)
        } else {
            d / (2.0 - max - min)
        };
        let h = if self.r == max {
            (self.g - self.b) / d + if self.g < self.b { 6.0 } else { 0.0 }
        } else if self.g == max {
            (self.b - self.r) / d + 2.0
        } else {
            (self.r - self.g) / d + 4.0
        };

        Hsl {
            h: Some(h * 60.0),
            s: Some(s),
            l,
        }
    }

    /// Interpolate towards `other` in HSL space along the shortest hue path.
    ///
    /// Channels are quantized to 8 bits, as a rendered color would be.
    pub fn interpolate_hsl(&self, other: &Color, t: f64) -> Color {
        let a = self.to_hsl();
        let b = other.to_hsl();

        // an undefined component borrows the other end's value
        let ah = a.h.or(b.h).unwrap_or(0.0);
        let bh = b.h.or(a.h).unwrap_or(0.0);
        let as_ = a.s.or(b.s).unwrap_or(0.0);
        let bs = b.s.or(a.s).unwrap_or(0.0);

        let mut dh = bh - ah;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }

        Hsl {
            h: Some(ah + dh * t),
            s: Some(as_ + (bs - as_) * t),
            l: a.l + (b.l - a.l) * t,
        }
        .to_color()
    }
}

fn channel_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// Hue (degrees), saturation and lightness (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: Option<f64>,
    pub s: Option<f64>,
    pub l: f64,
}

impl Hsl {
    pub fn to_color(&self) -> Color {
        let mut h = self.h.unwrap_or(0.0) % 360.0;
        if h < 0.0 {
            h += 360.0;
        }
        let s = self.s.unwrap_or(0.0).clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;

        let channel = |mut h: f64| {
            if h > 360.0 {
                h -= 360.0;
            } else if h < 0.0 {
                h += 360.0;
            }
            let v = if h < 60.0 {
                m1 + (m2 - m1) * h / 60.0
            } else if h < 180.0 {
                m2
            } else if h < 240.0 {
                m1 + (m2 - m1) * (240.0 - h) / 60.0
            } else {
                m1
            };
            (v * 255.0).round() as u8
        };

        Color::from_rgba8(channel(h + 120.0), channel(h), channel(h - 120.0), 255)
    }
}

/// Error type for color parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length
    InvalidLength,
    /// Not a CSS color
    InvalidCss(String),
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 3, 6 or 8)"),
            Self::InvalidCss(reason) => write!(f, "not a CSS color: {}", reason),
        }
    }
}

impl std::error::Error for ColorParseError {}
