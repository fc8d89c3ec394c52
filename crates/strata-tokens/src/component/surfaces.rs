//! Cards, modals and tooltips.

use crate::base::{BaseTokens, Color, MotionPair, Px, Shadow, ZIndex};
use crate::semantic::{FontSpec, Insets, SemanticTokens};
use crate::tokens::token_record;

token_record! {
    pub struct CardTokens / CardTokensPatch {
        background: Color,
        border: Color,
        border_width: Px,
        radius: Px,
        padding: Insets,
        shadow: Shadow,
        gap: Px,
        title: FontSpec,
        title_color: Color,
        body_color: Color,
    }
}

impl CardTokens {
    pub fn compose(sem: &SemanticTokens) -> Self {
        Self {
            background: sem.background.elevated,
            border: sem.border.default,
            border_width: sem.border.width,
            radius: sem.shape.container,
            padding: sem.space.inset_md.clone(),
            shadow: sem.elevation.raised,
            gap: sem.space.stack_sm,
            title: sem.typography.heading.clone(),
            title_color: sem.text.primary,
            body_color: sem.text.secondary,
        }
    }
}

token_record! {
    pub struct ModalTokens / ModalTokensPatch {
        background: Color,
        backdrop: Color,
        radius: Px,
        padding: Insets,
        shadow: Shadow,
        width_sm: Px,
        width_md: Px,
        width_lg: Px,
        z_index: ZIndex,
        backdrop_z_index: ZIndex,
        title: FontSpec,
        body: FontSpec,
        gap: Px,
        enter: MotionPair,
        exit: MotionPair,
    }
}

impl ModalTokens {
    pub fn compose(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        Self {
            background: sem.background.elevated,
            backdrop: sem.background.overlay,
            radius: sem.shape.dialog,
            padding: sem.space.inset_lg.clone(),
            shadow: sem.elevation.modal,
            width_sm: base.sizing.dialog_sm,
            width_md: base.sizing.dialog_md,
            width_lg: base.sizing.dialog_lg,
            z_index: base.z_index.modal,
            backdrop_z_index: base.z_index.overlay,
            title: sem.typography.heading.clone(),
            body: sem.typography.body.clone(),
            gap: sem.space.stack_md,
            enter: sem.motion.enter.clone(),
            exit: sem.motion.exit.clone(),
        }
    }
}

token_record! {
    pub struct TooltipTokens / TooltipTokensPatch {
        background: Color,
        text: Color,
        radius: Px,
        padding: Insets,
        font_size: Px,
        max_width: Px,
        z_index: ZIndex,
        enter: MotionPair,
    }
}

impl TooltipTokens {
    pub fn compose(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        Self {
            background: sem.background.inverse,
            text: sem.text.inverse,
            radius: base.radius.md,
            padding: sem.space.inset_xs.clone(),
            font_size: sem.typography.caption.size,
            max_width: base.sizing.panel,
            z_index: base.z_index.tooltip,
            enter: sem.motion.enter.clone(),
        }
    }
}
