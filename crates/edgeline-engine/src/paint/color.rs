use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::ParseColorError;

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
/// - channels are finite; equality and hashing assume it (see [`is_finite`](Self::is_finite)).
///
/// Premultiplied storage makes "absent" and "fully transparent" the same
/// value, so blending toward nothing is a plain channel-wise lerp.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0 under PartialEq, so both must hash alike.
        for c in [self.r, self.g, self.b, self.a] {
            let bits = if c == 0.0 { 0 } else { c.to_bits() };
            bits.hash(state);
        }
    }
}

impl Color {
    pub const TRANSPARENT: Color = Color::transparent();
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (straight alpha). The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::new(s, "expected hex digits"));
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ParseColorError::new(
                s,
                format!("expected 6 or 8 hex digits, got {}", hex.len()),
            ));
        }

        // ASCII hex digits only, so byte slicing is on char boundaries.
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| ParseColorError::new(s, e.to_string()))
        };
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, a))
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        debug_assert!(
            r.is_finite() && g.is_finite() && b.is_finite() && a.is_finite(),
            "Color::from_premul: channels must be finite"
        );
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        debug_assert!(
            r.is_finite() && g.is_finite() && b.is_finite() && a.is_finite(),
            "Color::from_straight: channels must be finite"
        );
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to [0, 1] and enforces premultiplication.
    #[inline]
    pub fn clamped(self) -> Self {
        let a = self.a.clamp(0.0, 1.0);
        Self {
            r: self.r.clamp(0.0, a),
            g: self.g.clamp(0.0, a),
            b: self.b.clamp(0.0, a),
            a,
        }
    }

    /// Channel-wise blend in premultiplied space.
    ///
    /// `t == 0` returns `self` and `t == 1` returns `other` unchanged, even
    /// outside the `[0, 1]` range. Any other `t` is clamped, so extrapolated
    /// blends stay a valid color.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Self {
        if t == 0.0 {
            return self;
        }
        if t == 1.0 {
            return other;
        }
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
        .clamped()
    }

    /// Blend between two optional colors.
    ///
    /// An absent color behaves as fully transparent. Both absent yields `None`.
    #[inline]
    pub fn lerp_opt(a: Option<Color>, b: Option<Color>, t: f32) -> Option<Color> {
        match (a, b) {
            (None, None) => None,
            (a, b) => Some(a.unwrap_or_default().lerp(b.unwrap_or_default(), t)),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}
