//! Text inputs, combo boxes and file drop zones.

use crate::base::{BaseTokens, Color, MotionPair, Px, Shadow, ZIndex};
use crate::semantic::{FontSpec, Insets, SemanticTokens};
use crate::tokens::token_record;

token_record! {
    pub struct InputTokens / InputTokensPatch {
        background: Color,
        text: Color,
        placeholder: Color,
        label: FontSpec,
        label_color: Color,
        helper: Color,
        error_text: Color,
        border: Color,
        border_hover: Color,
        border_focus: Color,
        border_error: Color,
        border_width: Px,
        focus_ring: Color,
        height: Px,
        padding: Insets,
        radius: Px,
        font: FontSpec,
        label_gap: Px,
        disabled_background: Color,
        disabled_text: Color,
        transition: MotionPair,
    }
}

impl InputTokens {
    pub fn compose(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        Self {
            background: sem.background.canvas,
            text: sem.text.primary,
            placeholder: sem.text.muted,
            label: sem.typography.label.clone(),
            label_color: sem.text.secondary,
            helper: sem.text.muted,
            error_text: sem.status.error.text,
            border: sem.border.default,
            border_hover: sem.border.strong,
            border_focus: sem.border.focus,
            border_error: sem.border.error,
            border_width: sem.border.width,
            focus_ring: sem.focus.ring.with_alpha(base.opacity.o24),
            height: base.sizing.control_md,
            padding: Insets::new(base.spacing.s3, base.spacing.s2),
            radius: sem.shape.control,
            font: sem.typography.body_small.clone(),
            label_gap: sem.space.stack_xs,
            disabled_background: sem.background.disabled,
            disabled_text: sem.text.disabled,
            transition: sem.motion.hover.clone(),
        }
    }
}

token_record! {
    pub struct ComboBoxTokens / ComboBoxTokensPatch {
        listbox_background: Color,
        listbox_border: Color,
        listbox_shadow: Shadow,
        listbox_radius: Px,
        listbox_max_height: Px,
        listbox_offset: Px,
        z_index: ZIndex,
        option_height: Px,
        option_padding: Insets,
        option_text: Color,
        option_highlight_background: Color,
        option_selected_background: Color,
        option_selected_text: Color,
        match_weight: crate::base::FontWeight,
        empty_text: Color,
    }
}

impl ComboBoxTokens {
    pub fn compose(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        Self {
            listbox_background: sem.background.elevated,
            listbox_border: sem.border.default,
            listbox_shadow: sem.elevation.floating,
            listbox_radius: sem.shape.control,
            listbox_max_height: base.sizing.list,
            listbox_offset: sem.space.stack_xs,
            z_index: base.z_index.dropdown,
            option_height: base.sizing.control_md,
            option_padding: Insets::new(base.spacing.s3, base.spacing.s2),
            option_text: sem.text.primary,
            option_highlight_background: sem.background.hover,
            option_selected_background: sem.background.selected,
            option_selected_text: sem.action.primary,
            match_weight: base.font_weight.semibold,
            empty_text: sem.text.muted,
        }
    }
}

token_record! {
    pub struct FileDropTokens / FileDropTokensPatch {
        background: Color,
        background_active: Color,
        border: Color,
        border_active: Color,
        border_width: Px,
        radius: Px,
        padding: Insets,
        text: Color,
        hint: Color,
        icon: Color,
        icon_size: Px,
        gap: Px,
        transition: MotionPair,
    }
}

impl FileDropTokens {
    pub fn compose(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        Self {
            background: sem.background.surface,
            background_active: sem.background.selected,
            border: sem.border.strong,
            border_active: sem.action.primary,
            border_width: sem.border.width_strong,
            radius: sem.shape.container,
            padding: sem.space.inset_lg.clone(),
            text: sem.text.primary,
            hint: sem.text.muted,
            icon: sem.text.secondary,
            icon_size: base.sizing.icon_xl,
            gap: sem.space.stack_sm,
            transition: sem.motion.hover.clone(),
        }
    }
}
