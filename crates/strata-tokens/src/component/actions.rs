//! Buttons and chips.

use std::fmt;
use std::str::FromStr;

use crate::base::{BaseTokens, Color, FontFamily, FontWeight, MotionPair, Opacity, Px};
use crate::error::TokenError;
use crate::semantic::{Insets, SemanticTokens};
use crate::tokens::token_record;

/// Which button variant bundle to read.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum ButtonVariant {
    /// Filled with the primary action color
    #[default]
    Primary,
    /// Quiet filled background
    Secondary,
    /// Transparent with a visible border
    Outlined,
    /// Text only until hovered
    Ghost,
    /// Destructive action
    Danger,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outlined,
        ButtonVariant::Ghost,
        ButtonVariant::Danger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outlined => "outlined",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Danger => "danger",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Control size shared by buttons and other fixed-height controls.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum ControlSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FromStr for ControlSize {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "sm" => Ok(ControlSize::Small),
            "medium" | "md" => Ok(ControlSize::Medium),
            "large" | "lg" => Ok(ControlSize::Large),
            _ => Err(TokenError::InvalidValue {
                kind: "control size",
                value: s.to_string(),
            }),
        }
    }
}

token_record! {
    pub struct ButtonVariantTokens / ButtonVariantTokensPatch {
        background: Color,
        text: Color,
        border: Color,
        hover_background: Color,
        active_background: Color,
    }
}

token_record! {
    pub struct ControlSizeTokens / ControlSizeTokensPatch {
        height: Px,
        padding: Insets,
        font_size: Px,
        icon_size: Px,
        gap: Px,
    }
}

token_record! {
    pub struct ButtonTokens / ButtonTokensPatch {
        primary: ButtonVariantTokens,
        secondary: ButtonVariantTokens,
        outlined: ButtonVariantTokens,
        ghost: ButtonVariantTokens,
        danger: ButtonVariantTokens,
        small: ControlSizeTokens,
        medium: ControlSizeTokens,
        large: ControlSizeTokens,
        radius: Px,
        border_width: Px,
        font_family: FontFamily,
        font_weight: FontWeight,
        focus_ring: Color,
        transition: MotionPair,
        disabled_opacity: Opacity,
    }
}

impl ButtonTokens {
    pub fn compose(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        let s = &base.spacing;
        let clear = base.colors.transparent;
        let size = |height, x, font_size, icon_size| ControlSizeTokens {
            height,
            padding: Insets::new(x, s.s0),
            font_size,
            icon_size,
            gap: sem.space.inline_sm,
        };

        Self {
            primary: ButtonVariantTokens {
                background: sem.action.primary,
                text: sem.text.on_action,
                border: sem.action.primary,
                hover_background: sem.action.primary_hover,
                active_background: sem.action.primary_active,
            },
            secondary: ButtonVariantTokens {
                background: sem.action.secondary,
                text: sem.text.primary,
                border: sem.action.secondary,
                hover_background: sem.action.secondary_hover,
                active_background: sem.action.secondary_active,
            },
            outlined: ButtonVariantTokens {
                background: clear,
                text: sem.action.primary,
                border: sem.border.strong,
                hover_background: sem.background.hover,
                active_background: sem.background.selected,
            },
            ghost: ButtonVariantTokens {
                background: clear,
                text: sem.text.primary,
                border: clear,
                hover_background: sem.background.hover,
                active_background: sem.background.sunken,
            },
            danger: ButtonVariantTokens {
                background: sem.action.danger,
                text: sem.text.on_action,
                border: sem.action.danger,
                hover_background: sem.action.danger_hover,
                active_background: sem.action.danger_active,
            },
            small: size(base.sizing.control_sm, s.s3, base.font_size.sm, base.sizing.icon_sm),
            medium: size(base.sizing.control_md, s.s4, base.font_size.sm, base.sizing.icon_md),
            large: size(base.sizing.control_lg, s.s6, base.font_size.md, base.sizing.icon_lg),
            radius: sem.shape.control,
            border_width: sem.border.width,
            font_family: sem.typography.label.family,
            font_weight: sem.typography.label.weight,
            focus_ring: sem.focus.ring,
            transition: sem.motion.hover.clone(),
            disabled_opacity: base.opacity.o38,
        }
    }

    /// Colors for one variant.
    pub fn variant(&self, variant: ButtonVariant) -> &ButtonVariantTokens {
        match variant {
            ButtonVariant::Primary => &self.primary,
            ButtonVariant::Secondary => &self.secondary,
            ButtonVariant::Outlined => &self.outlined,
            ButtonVariant::Ghost => &self.ghost,
            ButtonVariant::Danger => &self.danger,
        }
    }

    /// Metrics for one size.
    pub fn size(&self, size: ControlSize) -> &ControlSizeTokens {
        match size {
            ControlSize::Small => &self.small,
            ControlSize::Medium => &self.medium,
            ControlSize::Large => &self.large,
        }
    }
}

token_record! {
    pub struct ChipTokens / ChipTokensPatch {
        height: Px,
        padding: Insets,
        radius: Px,
        font_size: Px,
        font_weight: FontWeight,
        gap: Px,
        icon_size: Px,
        border_width: Px,
    }
}

impl ChipTokens {
    pub fn compose(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        Self {
            height: base.spacing.s6,
            padding: Insets::new(base.spacing.s2, base.spacing.s0),
            radius: sem.shape.pill,
            font_size: sem.typography.caption.size,
            font_weight: base.font_weight.medium,
            gap: sem.space.inline_xs,
            icon_size: base.sizing.icon_xs,
            border_width: sem.border.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BASE;

    fn tokens() -> ButtonTokens {
        ButtonTokens::compose(&BASE, &SemanticTokens::derive(&BASE))
    }

    #[test]
    fn variant_selects_bundle() {
        let t = tokens();
        assert_eq!(t.variant(ButtonVariant::Danger).background, BASE.colors.red.s600);
        assert_eq!(t.variant(ButtonVariant::Ghost).border, BASE.colors.transparent);
    }

    #[test]
    fn sizes_ascend() {
        let t = tokens();
        assert!(t.size(ControlSize::Small).height < t.size(ControlSize::Medium).height);
        assert!(t.size(ControlSize::Medium).height < t.size(ControlSize::Large).height);
    }

    #[test]
    fn variant_names() {
        let names: Vec<&str> = ButtonVariant::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(names, vec!["primary", "secondary", "outlined", "ghost", "danger"]);
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn control_size_parses() {
        assert_eq!("lg".parse::<ControlSize>().unwrap(), ControlSize::Large);
        assert!(matches!(
            "huge".parse::<ControlSize>(),
            Err(TokenError::InvalidValue { kind: "control size", .. })
        ));
        assert!("huge".parse::<ControlSize>().is_err());
    }
}
