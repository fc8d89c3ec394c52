//! Status indicators, dock layout, transfer list and illustrated messages.

use crate::base::{BaseTokens, Color, FontWeight, MotionPair, Opacity, Px, Shadow, ZIndex};
use crate::semantic::{FontSpec, Insets, SemanticTokens};
use crate::tokens::token_record;

token_record! {
    pub struct StatusIndicatorTokens / StatusIndicatorTokensPatch {
        dot_size: Px,
        dot_size_large: Px,
        icon_size: Px,
        shape_size: Px,
        gap: Px,
        chip_height: Px,
        chip_padding: Insets,
        chip_radius: Px,
        chip_border_width: Px,
        chip_font_size: Px,
        chip_font_weight: FontWeight,
        badge_min_size: Px,
        badge_padding: Insets,
        badge_radius: Px,
        badge_font_size: Px,
        badge_font_weight: FontWeight,
        inline_font: FontSpec,
        differential_font: FontSpec,
        pulse: MotionPair,
        pulse_opacity: Opacity,
    }
}

impl StatusIndicatorTokens {
    pub fn compose(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        let s = &base.spacing;
        Self {
            dot_size: base.sizing.dot,
            dot_size_large: base.sizing.dot_lg,
            icon_size: base.sizing.icon_sm,
            shape_size: base.sizing.icon_sm,
            gap: sem.space.inline_sm,
            chip_height: s.s6,
            chip_padding: Insets::new(s.s2, s.s0),
            chip_radius: sem.shape.pill,
            chip_border_width: sem.border.width,
            chip_font_size: sem.typography.caption.size,
            chip_font_weight: base.font_weight.medium,
            badge_min_size: s.s5,
            badge_padding: Insets::new(s.s1, s.s0),
            badge_radius: sem.shape.pill,
            badge_font_size: base.font_size.xs,
            badge_font_weight: base.font_weight.semibold,
            inline_font: sem.typography.body_small.clone(),
            differential_font: FontSpec {
                family: base.font_family.mono,
                ..sem.typography.label.clone()
            },
            pulse: base.motion.meditative.clone(),
            pulse_opacity: base.opacity.o50,
        }
    }
}

token_record! {
    pub struct DockTokens / DockTokensPatch {
        background: Color,
        panel_background: Color,
        panel_border: Color,
        header_background: Color,
        header_text: Color,
        header_height: Px,
        header_padding: Insets,
        header_font: FontSpec,
        divider: Color,
        divider_width: Px,
        drop_zone: Color,
        drop_zone_border: Color,
        drop_zone_border_width: Px,
        panel_width: Px,
        panel_min_width: Px,
        collapsed_size: Px,
        radius: Px,
        shadow: Shadow,
        z_index: ZIndex,
        gap: Px,
        transition: MotionPair,
        dragging_opacity: Opacity,
    }
}

impl DockTokens {
    pub fn compose(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        Self {
            background: sem.background.surface,
            panel_background: sem.background.elevated,
            panel_border: sem.border.default,
            header_background: sem.background.sunken,
            header_text: sem.text.secondary,
            header_height: base.sizing.control_sm,
            header_padding: Insets::new(base.spacing.s3, base.spacing.s0),
            header_font: sem.typography.label.clone(),
            divider: sem.border.default,
            divider_width: sem.border.width,
            drop_zone: sem.action.primary.with_alpha(base.opacity.o12),
            drop_zone_border: sem.action.primary,
            drop_zone_border_width: sem.border.width_strong,
            panel_width: base.sizing.panel,
            panel_min_width: base.sizing.panel_min,
            collapsed_size: base.sizing.control_sm,
            radius: sem.shape.control,
            shadow: sem.elevation.raised,
            z_index: base.z_index.dock,
            gap: base.spacing.s0,
            transition: sem.motion.expand.clone(),
            dragging_opacity: base.opacity.o50,
        }
    }
}

token_record! {
    pub struct TransferListTokens / TransferListTokensPatch {
        list_background: Color,
        list_border: Color,
        list_border_width: Px,
        list_radius: Px,
        list_width: Px,
        list_height: Px,
        header_background: Color,
        header_text: Color,
        header_font: FontSpec,
        header_padding: Insets,
        item_height: Px,
        item_padding: Insets,
        item_text: Color,
        item_hover_background: Color,
        item_selected_background: Color,
        item_selected_text: Color,
        control_gap: Px,
        gap: Px,
        filter_height: Px,
        empty_text: Color,
    }
}

impl TransferListTokens {
    pub fn compose(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        Self {
            list_background: sem.background.elevated,
            list_border: sem.border.default,
            list_border_width: sem.border.width,
            list_radius: sem.shape.container,
            list_width: base.sizing.panel,
            list_height: base.sizing.list,
            header_background: sem.background.surface,
            header_text: sem.text.secondary,
            header_font: sem.typography.label.clone(),
            header_padding: sem.space.inset_sm.clone(),
            item_height: base.sizing.control_md,
            item_padding: sem.space.inset_sm.clone(),
            item_text: sem.text.primary,
            item_hover_background: sem.background.hover,
            item_selected_background: sem.background.selected,
            item_selected_text: sem.action.primary,
            control_gap: sem.space.stack_sm,
            gap: sem.space.inline_lg,
            filter_height: base.sizing.control_sm,
            empty_text: sem.text.muted,
        }
    }
}

token_record! {
    pub struct IllustratedMessageTokens / IllustratedMessageTokensPatch {
        illustration_size: Px,
        illustration_size_compact: Px,
        illustration_color: Color,
        accent: Color,
        badge_size: Px,
        badge_color: Color,
        heading: FontSpec,
        body: FontSpec,
        heading_color: Color,
        body_color: Color,
        gap: Px,
        actions_gap: Px,
        max_width: Px,
        padding: Insets,
    }
}

impl IllustratedMessageTokens {
    pub fn compose(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        Self {
            illustration_size: base.sizing.illustration_lg,
            illustration_size_compact: base.sizing.illustration_sm,
            illustration_color: sem.border.strong,
            accent: sem.action.primary.with_alpha(base.opacity.o16),
            badge_size: base.sizing.icon_xl,
            badge_color: sem.action.primary,
            heading: sem.typography.heading.clone(),
            body: sem.typography.body.clone(),
            heading_color: sem.text.primary,
            body_color: sem.text.secondary,
            gap: sem.space.stack_md,
            actions_gap: sem.space.inline_md,
            max_width: base.sizing.text_max,
            padding: sem.space.inset_lg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BASE;

    #[test]
    fn dock_drop_zone_is_translucent_primary() {
        let sem = SemanticTokens::derive(&BASE);
        let dock = DockTokens::compose(&BASE, &sem);
        assert_eq!(dock.drop_zone.opaque(), sem.action.primary);
        assert_eq!(dock.drop_zone.alpha(), BASE.opacity.o12);
    }

    #[test]
    fn differential_uses_mono_family() {
        let sem = SemanticTokens::derive(&BASE);
        let status = StatusIndicatorTokens::compose(&BASE, &sem);
        assert_eq!(status.differential_font.family, BASE.font_family.mono);
        assert_eq!(status.differential_font.size, sem.typography.label.size);
    }
}
