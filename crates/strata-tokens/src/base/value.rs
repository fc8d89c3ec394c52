//! Typed scalar token values.
//!
//! Every constructor that accepts a literal is visible only inside the
//! `base` module. Higher tiers can copy these values or combine them
//! (`Color::with_alpha`, `Insets`), but cannot mint new ones.

use std::fmt;

use serde::{Serialize, Serializer};

/// An sRGB color with a percentage alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    alpha: u8,
}

impl Color {
    pub(in crate::base) const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            alpha: 100,
        }
    }

    /// Same color with the given opacity as its alpha channel.
    pub const fn with_alpha(self, opacity: Opacity) -> Self {
        Self {
            alpha: opacity.0,
            ..self
        }
    }

    /// Same color, fully opaque.
    pub const fn opaque(self) -> Self {
        Self { alpha: 100, ..self }
    }

    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub const fn alpha(&self) -> Opacity {
        Opacity(self.alpha)
    }

    pub const fn is_opaque(&self) -> bool {
        self.alpha == 100
    }

    /// Relative luminance per WCAG 2.x, in `0.0..=1.0`.
    pub fn luminance(&self) -> f64 {
        fn channel(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// WCAG contrast ratio between two opaque colors.
    pub fn contrast_ratio(&self, other: &Color) -> f64 {
        let (a, b) = (self.luminance(), other.luminance());
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        (hi + 0.05) / (lo + 0.05)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                Opacity(self.alpha)
            )
        }
    }
}

/// A length in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Px(u16);

impl Px {
    pub(in crate::base) const fn new(px: u16) -> Self {
        Self(px)
    }

    pub const fn get(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// A duration in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ms(u16);

impl Ms {
    pub(in crate::base) const fn new(ms: u16) -> Self {
        Self(ms)
    }

    pub const fn get(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Ms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Opacity stored as a whole percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Opacity(u8);

impl Opacity {
    pub(in crate::base) const fn percent(pct: u8) -> Self {
        Self(if pct > 100 { 100 } else { pct })
    }

    pub const fn get(&self) -> u8 {
        self.0
    }

    pub fn fraction(&self) -> f32 {
        self.0 as f32 / 100.0
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fraction())
    }
}

/// Numeric font weight (100-900).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(u16);

impl FontWeight {
    pub(in crate::base) const fn new(weight: u16) -> Self {
        Self(weight)
    }

    pub const fn get(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unitless line height stored in thousandths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineHeight(u16);

impl LineHeight {
    pub(in crate::base) const fn permille(value: u16) -> Self {
        Self(value)
    }

    pub fn ratio(&self) -> f32 {
        self.0 as f32 / 1000.0
    }
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ratio())
    }
}

/// CSS timing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Easing(&'static str);

impl Easing {
    pub(in crate::base) const fn css(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// CSS box-shadow value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shadow(&'static str);

impl Shadow {
    pub(in crate::base) const fn css(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// CSS font-family stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontFamily(&'static str);

impl FontFamily {
    pub(in crate::base) const fn css(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Stacking layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZIndex(u16);

impl ZIndex {
    pub(in crate::base) const fn new(z: u16) -> Self {
        Self(z)
    }

    pub const fn get(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for ZIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! display_str {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0)
            }
        }
    )*};
}

display_str!(Easing, Shadow, FontFamily);

macro_rules! serialize_as_string {
    ($($ty:ty),*) => {$(
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }
    )*};
}

serialize_as_string!(Color, Px, Ms, Easing, Shadow, FontFamily);

impl Serialize for Opacity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.fraction())
    }
}

impl Serialize for LineHeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.ratio())
    }
}

impl Serialize for FontWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

impl Serialize for ZIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_display() {
        assert_eq!(Color::hex(0x2563eb).to_string(), "#2563eb");
        assert_eq!(Color::hex(0x000000).to_string(), "#000000");
    }

    #[test]
    fn color_with_alpha_display() {
        let c = Color::hex(0x000000).with_alpha(Opacity::percent(50));
        assert_eq!(c.to_string(), "rgba(0, 0, 0, 0.5)");
        assert!(!c.is_opaque());
        assert_eq!(c.opaque(), Color::hex(0x000000));
    }

    #[test]
    fn opacity_clamps() {
        assert_eq!(Opacity::percent(140).get(), 100);
    }

    #[test]
    fn contrast_black_on_white() {
        let ratio = Color::hex(0x000000).contrast_ratio(&Color::hex(0xffffff));
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn scalar_display() {
        assert_eq!(Px::new(16).to_string(), "16px");
        assert_eq!(Ms::new(150).to_string(), "150ms");
        assert_eq!(LineHeight::permille(1500).to_string(), "1.5");
        assert_eq!(FontWeight::new(600).to_string(), "600");
    }

    #[test]
    fn scalars_serialize_as_css() {
        assert_eq!(serde_json::to_string(&Px::new(4)).unwrap(), "\"4px\"");
        assert_eq!(
            serde_json::to_string(&Color::hex(0xffffff)).unwrap(),
            "\"#ffffff\""
        );
        assert_eq!(serde_json::to_string(&ZIndex::new(1300)).unwrap(), "1300");
    }
}
