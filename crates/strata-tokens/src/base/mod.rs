//! Base tier: the only place raw primitive values appear.
//!
//! Color ramps indexed 50-900, a 4px spacing scale, type scales, radii,
//! border widths, shadows, motion pairs, opacities, breakpoints, layers and
//! a handful of fixed component sizes. Everything above this tier selects
//! from [`BASE`].

mod value;

use serde::Serialize;

use crate::tokens::token_record;

pub use value::{Color, Easing, FontFamily, FontWeight, LineHeight, Ms, Opacity, Px, Shadow, ZIndex};

/// Position on a color ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl Shade {
    pub const ALL: [Shade; 10] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    pub fn value(&self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
        }
    }
}

token_record! {
    /// A ten-step color scale from lightest (50) to darkest (900).
    pub struct Ramp / RampPatch {
        s50: Color,
        s100: Color,
        s200: Color,
        s300: Color,
        s400: Color,
        s500: Color,
        s600: Color,
        s700: Color,
        s800: Color,
        s900: Color,
    }
}

impl Ramp {
    const fn from_hex(hex: [u32; 10]) -> Self {
        Self {
            s50: Color::hex(hex[0]),
            s100: Color::hex(hex[1]),
            s200: Color::hex(hex[2]),
            s300: Color::hex(hex[3]),
            s400: Color::hex(hex[4]),
            s500: Color::hex(hex[5]),
            s600: Color::hex(hex[6]),
            s700: Color::hex(hex[7]),
            s800: Color::hex(hex[8]),
            s900: Color::hex(hex[9]),
        }
    }

    pub const fn shade(&self, shade: Shade) -> Color {
        match shade {
            Shade::S50 => self.s50,
            Shade::S100 => self.s100,
            Shade::S200 => self.s200,
            Shade::S300 => self.s300,
            Shade::S400 => self.s400,
            Shade::S500 => self.s500,
            Shade::S600 => self.s600,
            Shade::S700 => self.s700,
            Shade::S800 => self.s800,
            Shade::S900 => self.s900,
        }
    }
}

token_record! {
    /// Translucent black backdrops behind modal surfaces.
    pub struct Scrims / ScrimsPatch {
        light: Color,
        dark: Color,
        strong: Color,
    }
}

token_record! {
    pub struct ColorScales / ColorScalesPatch {
        white: Color,
        black: Color,
        transparent: Color,
        scrim: Scrims,
        gray: Ramp,
        blue: Ramp,
        indigo: Ramp,
        purple: Ramp,
        pink: Ramp,
        red: Ramp,
        orange: Ramp,
        amber: Ramp,
        green: Ramp,
        teal: Ramp,
        cyan: Ramp,
    }
}

token_record! {
    /// Multiples of 4px, keyed by multiplier.
    pub struct SpacingScale / SpacingScalePatch {
        s0: Px,
        s1: Px,
        s2: Px,
        s3: Px,
        s4: Px,
        s5: Px,
        s6: Px,
        s8: Px,
        s9: Px,
        s10: Px,
        s12: Px,
        s13: Px,
        s14: Px,
        s16: Px,
        s20: Px,
        s24: Px,
    }
}

token_record! {
    pub struct FontSizeScale / FontSizeScalePatch {
        xs: Px,
        sm: Px,
        md: Px,
        lg: Px,
        xl: Px,
        xxl: Px,
        display: Px,
        hero: Px,
    }
}

token_record! {
    pub struct FontWeightScale / FontWeightScalePatch {
        regular: FontWeight,
        medium: FontWeight,
        semibold: FontWeight,
        bold: FontWeight,
    }
}

token_record! {
    pub struct LineHeightScale / LineHeightScalePatch {
        tight: LineHeight,
        normal: LineHeight,
        relaxed: LineHeight,
    }
}

token_record! {
    pub struct FontFamilies / FontFamiliesPatch {
        sans: FontFamily,
        serif: FontFamily,
        mono: FontFamily,
    }
}

token_record! {
    pub struct RadiusScale / RadiusScalePatch {
        none: Px,
        sm: Px,
        md: Px,
        lg: Px,
        xl: Px,
        xxl: Px,
        full: Px,
    }
}

token_record! {
    pub struct BorderWidthScale / BorderWidthScalePatch {
        none: Px,
        thin: Px,
        thick: Px,
        heavy: Px,
    }
}

token_record! {
    pub struct ShadowScale / ShadowScalePatch {
        none: Shadow,
        xs: Shadow,
        sm: Shadow,
        md: Shadow,
        lg: Shadow,
        xl: Shadow,
        inner: Shadow,
    }
}

token_record! {
    /// A duration and the easing curve it is always paired with.
    pub struct MotionPair / MotionPairPatch {
        duration: Ms,
        easing: Easing,
    }
}

token_record! {
    pub struct MotionScale / MotionScalePatch {
        instant: MotionPair,
        fast: MotionPair,
        normal: MotionPair,
        slow: MotionPair,
        enter: MotionPair,
        exit: MotionPair,
        meditative: MotionPair,
    }
}

token_record! {
    /// Percentages, keyed by value.
    pub struct OpacityScale / OpacityScalePatch {
        o0: Opacity,
        o8: Opacity,
        o12: Opacity,
        o16: Opacity,
        o24: Opacity,
        o38: Opacity,
        o50: Opacity,
        o64: Opacity,
        o80: Opacity,
        o100: Opacity,
    }
}

token_record! {
    /// Minimum viewport widths.
    pub struct Breakpoints / BreakpointsPatch {
        xs: Px,
        sm: Px,
        md: Px,
        lg: Px,
        xl: Px,
    }
}

token_record! {
    pub struct ZIndexScale / ZIndexScalePatch {
        base: ZIndex,
        dropdown: ZIndex,
        sticky: ZIndex,
        dock: ZIndex,
        overlay: ZIndex,
        modal: ZIndex,
        popover: ZIndex,
        tooltip: ZIndex,
        toast: ZIndex,
    }
}

token_record! {
    /// Exact sizes with no semantic equivalent.
    pub struct SizingScale / SizingScalePatch {
        control_sm: Px,
        control_md: Px,
        control_lg: Px,
        icon_xs: Px,
        icon_sm: Px,
        icon_md: Px,
        icon_lg: Px,
        icon_xl: Px,
        dot: Px,
        dot_lg: Px,
        illustration_sm: Px,
        illustration_lg: Px,
        panel_min: Px,
        panel: Px,
        list: Px,
        dialog_sm: Px,
        dialog_md: Px,
        dialog_lg: Px,
        text_max: Px,
    }
}

token_record! {
    /// The complete base tier.
    pub struct BaseTokens / BaseTokensPatch {
        colors: ColorScales,
        spacing: SpacingScale,
        font_size: FontSizeScale,
        font_weight: FontWeightScale,
        line_height: LineHeightScale,
        font_family: FontFamilies,
        radius: RadiusScale,
        border_width: BorderWidthScale,
        shadow: ShadowScale,
        motion: MotionScale,
        opacity: OpacityScale,
        breakpoint: Breakpoints,
        z_index: ZIndexScale,
        sizing: SizingScale,
    }
}

const STANDARD: Easing = Easing::css("cubic-bezier(0.4, 0, 0.2, 1)");
const DECELERATE: Easing = Easing::css("cubic-bezier(0, 0, 0.2, 1)");
const ACCELERATE: Easing = Easing::css("cubic-bezier(0.4, 0, 1, 1)");

const fn motion(ms: u16, easing: Easing) -> MotionPair {
    MotionPair {
        duration: Ms::new(ms),
        easing,
    }
}

/// The base tier.
pub static BASE: BaseTokens = BaseTokens {
    colors: ColorScales {
        white: Color::hex(0xffffff),
        black: Color::hex(0x000000),
        transparent: Color::hex(0x000000).with_alpha(Opacity::percent(0)),
        scrim: Scrims {
            light: Color::hex(0x000000).with_alpha(Opacity::percent(50)),
            dark: Color::hex(0x000000).with_alpha(Opacity::percent(64)),
            strong: Color::hex(0x000000).with_alpha(Opacity::percent(80)),
        },
        gray: Ramp::from_hex([
            0xf9fafb, 0xf3f4f6, 0xe5e7eb, 0xd1d5db, 0x9ca3af, 0x6b7280, 0x4b5563, 0x374151,
            0x1f2937, 0x111827,
        ]),
        blue: Ramp::from_hex([
            0xeff6ff, 0xdbeafe, 0xbfdbfe, 0x93c5fd, 0x60a5fa, 0x3b82f6, 0x2563eb, 0x1d4ed8,
            0x1e40af, 0x1e3a8a,
        ]),
        indigo: Ramp::from_hex([
            0xeef2ff, 0xe0e7ff, 0xc7d2fe, 0xa5b4fc, 0x818cf8, 0x6366f1, 0x4f46e5, 0x4338ca,
            0x3730a3, 0x312e81,
        ]),
        purple: Ramp::from_hex([
            0xfaf5ff, 0xf3e8ff, 0xe9d5ff, 0xd8b4fe, 0xc084fc, 0xa855f7, 0x9333ea, 0x7e22ce,
            0x6b21a8, 0x581c87,
        ]),
        pink: Ramp::from_hex([
            0xfdf2f8, 0xfce7f3, 0xfbcfe8, 0xf9a8d4, 0xf472b6, 0xec4899, 0xdb2777, 0xbe185d,
            0x9d174d, 0x831843,
        ]),
        red: Ramp::from_hex([
            0xfef2f2, 0xfee2e2, 0xfecaca, 0xfca5a5, 0xf87171, 0xef4444, 0xdc2626, 0xb91c1c,
            0x991b1b, 0x7f1d1d,
        ]),
        orange: Ramp::from_hex([
            0xfff7ed, 0xffedd5, 0xfed7aa, 0xfdba74, 0xfb923c, 0xf97316, 0xea580c, 0xc2410c,
            0x9a3412, 0x7c2d12,
        ]),
        amber: Ramp::from_hex([
            0xfffbeb, 0xfef3c7, 0xfde68a, 0xfcd34d, 0xfbbf24, 0xf59e0b, 0xd97706, 0xb45309,
            0x92400e, 0x78350f,
        ]),
        green: Ramp::from_hex([
            0xf0fdf4, 0xdcfce7, 0xbbf7d0, 0x86efac, 0x4ade80, 0x22c55e, 0x16a34a, 0x15803d,
            0x166534, 0x14532d,
        ]),
        teal: Ramp::from_hex([
            0xf0fdfa, 0xccfbf1, 0x99f6e4, 0x5eead4, 0x2dd4bf, 0x14b8a6, 0x0d9488, 0x0f766e,
            0x115e59, 0x134e4a,
        ]),
        cyan: Ramp::from_hex([
            0xecfeff, 0xcffafe, 0xa5f3fc, 0x67e8f9, 0x22d3ee, 0x06b6d4, 0x0891b2, 0x0e7490,
            0x155e75, 0x164e63,
        ]),
    },
    spacing: SpacingScale {
        s0: Px::new(0),
        s1: Px::new(4),
        s2: Px::new(8),
        s3: Px::new(12),
        s4: Px::new(16),
        s5: Px::new(20),
        s6: Px::new(24),
        s8: Px::new(32),
        s9: Px::new(36),
        s10: Px::new(40),
        s12: Px::new(48),
        s13: Px::new(52),
        s14: Px::new(56),
        s16: Px::new(64),
        s20: Px::new(80),
        s24: Px::new(96),
    },
    font_size: FontSizeScale {
        xs: Px::new(12),
        sm: Px::new(14),
        md: Px::new(16),
        lg: Px::new(18),
        xl: Px::new(20),
        xxl: Px::new(24),
        display: Px::new(32),
        hero: Px::new(48),
    },
    font_weight: FontWeightScale {
        regular: FontWeight::new(400),
        medium: FontWeight::new(500),
        semibold: FontWeight::new(600),
        bold: FontWeight::new(700),
    },
    line_height: LineHeightScale {
        tight: LineHeight::permille(1250),
        normal: LineHeight::permille(1500),
        relaxed: LineHeight::permille(1750),
    },
    font_family: FontFamilies {
        sans: FontFamily::css("'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif"),
        serif: FontFamily::css("'Cormorant Garamond', Georgia, serif"),
        mono: FontFamily::css("'JetBrains Mono', 'SF Mono', 'Consolas', monospace"),
    },
    radius: RadiusScale {
        none: Px::new(0),
        sm: Px::new(2),
        md: Px::new(4),
        lg: Px::new(8),
        xl: Px::new(12),
        xxl: Px::new(16),
        full: Px::new(9999),
    },
    border_width: BorderWidthScale {
        none: Px::new(0),
        thin: Px::new(1),
        thick: Px::new(2),
        heavy: Px::new(3),
    },
    shadow: ShadowScale {
        none: Shadow::css("none"),
        xs: Shadow::css("0 1px 2px rgba(0, 0, 0, 0.05)"),
        sm: Shadow::css("0 1px 3px rgba(0, 0, 0, 0.1), 0 1px 2px rgba(0, 0, 0, 0.06)"),
        md: Shadow::css("0 4px 6px rgba(0, 0, 0, 0.1), 0 2px 4px rgba(0, 0, 0, 0.06)"),
        lg: Shadow::css("0 10px 15px rgba(0, 0, 0, 0.1), 0 4px 6px rgba(0, 0, 0, 0.05)"),
        xl: Shadow::css("0 20px 25px rgba(0, 0, 0, 0.1), 0 10px 10px rgba(0, 0, 0, 0.04)"),
        inner: Shadow::css("inset 0 2px 4px rgba(0, 0, 0, 0.06)"),
    },
    motion: MotionScale {
        instant: motion(0, Easing::css("linear")),
        fast: motion(150, STANDARD),
        normal: motion(250, STANDARD),
        slow: motion(400, STANDARD),
        enter: motion(250, DECELERATE),
        exit: motion(200, ACCELERATE),
        meditative: motion(1000, STANDARD),
    },
    opacity: OpacityScale {
        o0: Opacity::percent(0),
        o8: Opacity::percent(8),
        o12: Opacity::percent(12),
        o16: Opacity::percent(16),
        o24: Opacity::percent(24),
        o38: Opacity::percent(38),
        o50: Opacity::percent(50),
        o64: Opacity::percent(64),
        o80: Opacity::percent(80),
        o100: Opacity::percent(100),
    },
    breakpoint: Breakpoints {
        xs: Px::new(0),
        sm: Px::new(600),
        md: Px::new(900),
        lg: Px::new(1200),
        xl: Px::new(1536),
    },
    z_index: ZIndexScale {
        base: ZIndex::new(0),
        dropdown: ZIndex::new(1000),
        sticky: ZIndex::new(1100),
        dock: ZIndex::new(1200),
        overlay: ZIndex::new(1250),
        modal: ZIndex::new(1300),
        popover: ZIndex::new(1400),
        tooltip: ZIndex::new(1500),
        toast: ZIndex::new(1600),
    },
    sizing: SizingScale {
        control_sm: Px::new(32),
        control_md: Px::new(40),
        control_lg: Px::new(48),
        icon_xs: Px::new(12),
        icon_sm: Px::new(16),
        icon_md: Px::new(20),
        icon_lg: Px::new(24),
        icon_xl: Px::new(32),
        dot: Px::new(8),
        dot_lg: Px::new(12),
        illustration_sm: Px::new(120),
        illustration_lg: Px::new(200),
        panel_min: Px::new(200),
        panel: Px::new(280),
        list: Px::new(320),
        dialog_sm: Px::new(400),
        dialog_md: Px::new(560),
        dialog_lg: Px::new(800),
        text_max: Px::new(480),
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{Leaf, Tokens};

    #[test]
    fn spacing_is_four_px_multiples() {
        for (path, leaf) in BASE.spacing.leaves() {
            match leaf {
                Leaf::Length(px) => assert_eq!(px.get() % 4, 0, "{} = {}", path, px),
                other => panic!("unexpected leaf {:?}", other),
            }
        }
    }

    #[test]
    fn ramps_darken_monotonically() {
        for ramp in [&BASE.colors.gray, &BASE.colors.blue, &BASE.colors.red, &BASE.colors.green] {
            let lum: Vec<f64> = Shade::ALL.iter().map(|s| ramp.shade(*s).luminance()).collect();
            for pair in lum.windows(2) {
                assert!(pair[0] > pair[1], "ramp not monotonic: {:?}", lum);
            }
        }
    }

    #[test]
    fn shade_lookup_matches_fields() {
        assert_eq!(BASE.colors.blue.shade(Shade::S600), BASE.colors.blue.s600);
        assert_eq!(BASE.colors.blue.s600.to_string(), "#2563eb");
        assert_eq!(Shade::S900.value(), 900);
    }

    #[test]
    fn breakpoints_ascend() {
        let bp = &BASE.breakpoint;
        assert!(bp.xs < bp.sm && bp.sm < bp.md && bp.md < bp.lg && bp.lg < bp.xl);
    }

    #[test]
    fn base_leaf_count_is_stable() {
        // 3 singletons + 3 scrims + 11 ramps of 10
        let colors = BASE.colors.leaves().len();
        assert_eq!(colors, 116);
    }

    #[test]
    fn scrims_are_translucent_black() {
        let scrim = &BASE.colors.scrim;
        for (color, alpha) in [
            (scrim.light, BASE.opacity.o50),
            (scrim.dark, BASE.opacity.o64),
            (scrim.strong, BASE.opacity.o80),
        ] {
            assert_eq!(color.opaque(), BASE.colors.black);
            assert_eq!(color.alpha(), alpha);
        }
    }
}
