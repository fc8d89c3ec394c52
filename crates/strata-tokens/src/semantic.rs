//! Semantic tier: purpose-named aliases onto the base tier.
//!
//! Each field answers "what is this for" (`text.primary`,
//! `status.error.background`, `focus.ring`) by selecting exactly one base
//! value. [`SemanticTokens::derive`] is the light-mode baseline; dark and
//! high-contrast modes patch it (see [`crate::contextual`]).

use crate::base::{BaseTokens, Color, FontFamily, FontWeight, LineHeight, MotionPair, Px, Shadow};
use crate::tokens::token_record;

token_record! {
    /// Horizontal and vertical padding built from two base lengths.
    pub struct Insets / InsetsPatch {
        x: Px,
        y: Px,
    }
}

impl Insets {
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Uniform padding on both axes.
    pub const fn all(v: Px) -> Self {
        Self { x: v, y: v }
    }

    /// CSS `padding` shorthand (vertical first).
    pub fn css(&self) -> String {
        format!("{} {}", self.y, self.x)
    }
}

token_record! {
    /// Complete text style.
    pub struct FontSpec / FontSpecPatch {
        family: FontFamily,
        size: Px,
        weight: FontWeight,
        line_height: LineHeight,
    }
}

impl FontSpec {
    /// Declarations for an inline `style` attribute.
    pub fn css(&self) -> String {
        format!(
            "font-family: {}; font-size: {}; font-weight: {}; line-height: {};",
            self.family, self.size, self.weight, self.line_height
        )
    }
}

token_record! {
    pub struct TextTokens / TextTokensPatch {
        primary: Color,
        secondary: Color,
        muted: Color,
        disabled: Color,
        inverse: Color,
        link: Color,
        link_hover: Color,
        on_action: Color,
    }
}

token_record! {
    pub struct BackgroundTokens / BackgroundTokensPatch {
        canvas: Color,
        surface: Color,
        elevated: Color,
        sunken: Color,
        inverse: Color,
        overlay: Color,
        hover: Color,
        selected: Color,
        disabled: Color,
    }
}

token_record! {
    pub struct BorderTokens / BorderTokensPatch {
        default: Color,
        subtle: Color,
        strong: Color,
        focus: Color,
        error: Color,
        disabled: Color,
        width: Px,
        width_strong: Px,
    }
}

token_record! {
    pub struct ActionTokens / ActionTokensPatch {
        primary: Color,
        primary_hover: Color,
        primary_active: Color,
        secondary: Color,
        secondary_hover: Color,
        secondary_active: Color,
        danger: Color,
        danger_hover: Color,
        danger_active: Color,
    }
}

token_record! {
    /// Colors for one status family.
    pub struct StatusTone / StatusTonePatch {
        text: Color,
        background: Color,
        border: Color,
        icon: Color,
    }
}

token_record! {
    pub struct StatusTokens / StatusTokensPatch {
        error: StatusTone,
        warning: StatusTone,
        success: StatusTone,
        info: StatusTone,
        pending: StatusTone,
        neutral: StatusTone,
    }
}

token_record! {
    pub struct FocusTokens / FocusTokensPatch {
        ring: Color,
        ring_width: Px,
        ring_offset: Px,
    }
}

token_record! {
    /// Spacing aliases: inset (padding), stack (vertical gap), inline (horizontal gap).
    pub struct SpaceTokens / SpaceTokensPatch {
        inset_xs: Insets,
        inset_sm: Insets,
        inset_md: Insets,
        inset_lg: Insets,
        stack_xs: Px,
        stack_sm: Px,
        stack_md: Px,
        stack_lg: Px,
        inline_xs: Px,
        inline_sm: Px,
        inline_md: Px,
        inline_lg: Px,
    }
}

token_record! {
    pub struct TypographyTokens / TypographyTokensPatch {
        body: FontSpec,
        body_small: FontSpec,
        label: FontSpec,
        caption: FontSpec,
        heading: FontSpec,
        title: FontSpec,
        code: FontSpec,
    }
}

token_record! {
    pub struct ElevationTokens / ElevationTokensPatch {
        flat: Shadow,
        raised: Shadow,
        floating: Shadow,
        overlay: Shadow,
        modal: Shadow,
    }
}

token_record! {
    pub struct MotionTokens / MotionTokensPatch {
        hover: MotionPair,
        expand: MotionPair,
        enter: MotionPair,
        exit: MotionPair,
        emphasis: MotionPair,
    }
}

token_record! {
    pub struct ShapeTokens / ShapeTokensPatch {
        control: Px,
        container: Px,
        dialog: Px,
        pill: Px,
    }
}

token_record! {
    /// The complete semantic tier.
    pub struct SemanticTokens / SemanticTokensPatch {
        text: TextTokens,
        background: BackgroundTokens,
        border: BorderTokens,
        action: ActionTokens,
        status: StatusTokens,
        focus: FocusTokens,
        space: SpaceTokens,
        typography: TypographyTokens,
        elevation: ElevationTokens,
        motion: MotionTokens,
        shape: ShapeTokens,
    }
}

impl SemanticTokens {
    /// Light-mode baseline.
    pub fn derive(base: &BaseTokens) -> Self {
        let c = &base.colors;
        let s = &base.spacing;
        let fs = &base.font_size;
        let fw = &base.font_weight;
        let lh = &base.line_height;
        let ff = &base.font_family;

        let tone = |text, background, border, icon| StatusTone {
            text,
            background,
            border,
            icon,
        };
        let font = |family, size, weight, line_height| FontSpec {
            family,
            size,
            weight,
            line_height,
        };

        Self {
            text: TextTokens {
                primary: c.gray.s900,
                secondary: c.gray.s600,
                muted: c.gray.s500,
                disabled: c.gray.s400,
                inverse: c.white,
                link: c.blue.s600,
                link_hover: c.blue.s700,
                on_action: c.white,
            },
            background: BackgroundTokens {
                canvas: c.white,
                surface: c.gray.s50,
                elevated: c.white,
                sunken: c.gray.s100,
                inverse: c.gray.s900,
                overlay: c.scrim.light,
                hover: c.gray.s100,
                selected: c.blue.s50,
                disabled: c.gray.s100,
            },
            border: BorderTokens {
                default: c.gray.s200,
                subtle: c.gray.s100,
                strong: c.gray.s400,
                focus: c.blue.s500,
                error: c.red.s600,
                disabled: c.gray.s200,
                width: base.border_width.thin,
                width_strong: base.border_width.thick,
            },
            action: ActionTokens {
                primary: c.blue.s600,
                primary_hover: c.blue.s700,
                primary_active: c.blue.s800,
                secondary: c.gray.s100,
                secondary_hover: c.gray.s200,
                secondary_active: c.gray.s300,
                danger: c.red.s600,
                danger_hover: c.red.s700,
                danger_active: c.red.s800,
            },
            status: StatusTokens {
                error: tone(c.red.s700, c.red.s50, c.red.s200, c.red.s600),
                warning: tone(c.amber.s800, c.amber.s50, c.amber.s200, c.amber.s600),
                success: tone(c.green.s700, c.green.s50, c.green.s200, c.green.s600),
                info: tone(c.blue.s700, c.blue.s50, c.blue.s200, c.blue.s600),
                pending: tone(c.purple.s700, c.purple.s50, c.purple.s200, c.purple.s600),
                neutral: tone(c.gray.s700, c.gray.s100, c.gray.s200, c.gray.s500),
            },
            focus: FocusTokens {
                ring: c.blue.s500,
                ring_width: base.border_width.thick,
                ring_offset: base.border_width.thick,
            },
            space: SpaceTokens {
                inset_xs: Insets::new(s.s2, s.s1),
                inset_sm: Insets::new(s.s3, s.s2),
                inset_md: Insets::all(s.s4),
                inset_lg: Insets::all(s.s6),
                stack_xs: s.s1,
                stack_sm: s.s2,
                stack_md: s.s4,
                stack_lg: s.s6,
                inline_xs: s.s1,
                inline_sm: s.s2,
                inline_md: s.s3,
                inline_lg: s.s4,
            },
            typography: TypographyTokens {
                body: font(ff.sans, fs.md, fw.regular, lh.normal),
                body_small: font(ff.sans, fs.sm, fw.regular, lh.normal),
                label: font(ff.sans, fs.sm, fw.medium, lh.tight),
                caption: font(ff.sans, fs.xs, fw.regular, lh.normal),
                heading: font(ff.sans, fs.xl, fw.semibold, lh.tight),
                title: font(ff.sans, fs.display, fw.bold, lh.tight),
                code: font(ff.mono, fs.sm, fw.regular, lh.relaxed),
            },
            elevation: ElevationTokens {
                flat: base.shadow.none,
                raised: base.shadow.sm,
                floating: base.shadow.md,
                overlay: base.shadow.lg,
                modal: base.shadow.xl,
            },
            motion: MotionTokens {
                hover: base.motion.fast.clone(),
                expand: base.motion.normal.clone(),
                enter: base.motion.enter.clone(),
                exit: base.motion.exit.clone(),
                emphasis: base.motion.slow.clone(),
            },
            shape: ShapeTokens {
                control: base.radius.md,
                container: base.radius.lg,
                dialog: base.radius.xl,
                pill: base.radius.full,
            },
        }
    }

    /// Tone for a status family.
    pub fn status_tone(&self, status: crate::status::Status) -> &StatusTone {
        use crate::status::Status;
        match status {
            Status::Error => &self.status.error,
            Status::Warning => &self.status.warning,
            Status::Success => &self.status.success,
            Status::Info => &self.status.info,
            Status::Pending => &self.status.pending,
            Status::Neutral => &self.status.neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BASE;

    #[test]
    fn text_primary_is_darkest_gray() {
        let sem = SemanticTokens::derive(&BASE);
        assert_eq!(sem.text.primary, BASE.colors.gray.s900);
        assert_eq!(sem.text.primary.to_string(), "#111827");
    }

    #[test]
    fn primary_text_meets_contrast_on_canvas() {
        let sem = SemanticTokens::derive(&BASE);
        assert!(sem.text.primary.contrast_ratio(&sem.background.canvas) >= 4.5);
        assert!(sem.text.on_action.contrast_ratio(&sem.action.primary) >= 4.5);
    }

    #[test]
    fn overlay_aliases_base_scrim() {
        let sem = SemanticTokens::derive(&BASE);
        assert_eq!(sem.background.overlay, BASE.colors.scrim.light);
        assert_eq!(sem.background.overlay.alpha(), BASE.opacity.o50);
    }

    #[test]
    fn insets_css_is_vertical_first() {
        let sem = SemanticTokens::derive(&BASE);
        assert_eq!(sem.space.inset_sm.css(), "8px 12px");
    }

    #[test]
    fn font_spec_css() {
        let sem = SemanticTokens::derive(&BASE);
        let css = sem.typography.label.css();
        assert!(css.contains("font-size: 14px;"));
        assert!(css.contains("font-weight: 500;"));
    }
}
