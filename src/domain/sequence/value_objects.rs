use crate::domain::errors::{DisplayError, DisplayResult};
use std::str::FromStr;

/// Value Object - feature orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strand {
    #[default]
    Forward,
    Reverse,
}

impl Strand {
    /// Genbank-style strand number; 0 (unknown) reads as forward.
    pub fn from_sign(sign: i64) -> Self {
        if sign < 0 { Strand::Reverse } else { Strand::Forward }
    }

    /// Direction glyph used in tooltips
    pub fn arrow(self) -> &'static str {
        match self {
            Strand::Forward => "---->",
            Strand::Reverse => "<----",
        }
    }
}

/// Value Object - 8-bit RGB color parsed from an HTML hex code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Accepts `RRGGBB` with or without a leading `#`, any letter case.
    pub fn parse(code: &str) -> DisplayResult<Self> {
        let digits = code.strip_prefix('#').unwrap_or(code);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DisplayError::InvalidColor(code.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| DisplayError::InvalidColor(code.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Perceived brightness on a 0..=255 scale.
    pub fn luminance(&self) -> f64 {
        self.red as f64 * 0.299 + self.green as f64 * 0.587 + self.blue as f64 * 0.114
    }

    /// HSV to RGB with every component in `0.0..=1.0`; channels truncate.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let to_u8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
        if saturation == 0.0 {
            return Self::new(to_u8(value), to_u8(value), to_u8(value));
        }
        let sector = (hue * 6.0).floor();
        let f = hue * 6.0 - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));
        let (r, g, b) = match (sector as i64).rem_euclid(6) {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
