//! Color helpers shared by the catalog and the renderer
//!
//! Colors are stored as 8-bit RGB plus a float alpha so they can be handed
//! to Canvas 2D as CSS strings without conversion loss.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let clean = hex.strip_prefix('#').unwrap_or(hex);
        if clean.len() != 6 || !clean.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&clean[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// `#rrggbb`, alpha dropped
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS color string (hex when opaque, `rgba()` otherwise)
    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            self.to_hex()
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Add `amount` to every channel, saturating at 255
    pub fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
            a: self.a,
        }
    }

    /// Linear interpolation per channel, rounded
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parse() {
        assert_eq!(Color::from_hex("#ff9d4d"), Some(Color::rgb(255, 157, 77)));
        assert_eq!(Color::from_hex("4294ff"), Some(Color::rgb(66, 148, 255)));
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::rgb(255, 105, 180).to_hex(), "#ff69b4");
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Color::from_hex("#ffe636").unwrap();
        let b = Color::from_hex("#d8b20b").unwrap();
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        // (255+216)/2 = 235.5 -> 236, (230+178)/2 = 204, (54+11)/2 = 32.5 -> 33
        assert_eq!(a.lerp(b, 0.5), Color::rgb(236, 204, 33));
    }

    #[test]
    fn test_lighten_saturates() {
        let shine = Color::rgb(255, 230, 54).lighten(50);
        assert_eq!(shine, Color::rgb(255, 255, 104));
    }

    #[test]
    fn test_css() {
        assert_eq!(Color::WHITE.css(), "#ffffff");
        assert_eq!(Color::BLACK.with_alpha(0.5).css(), "rgba(0, 0, 0, 0.5)");
    }
}
