//! Assistant surfaces: message bubbles, confidence and streaming cues.

use serde::Serialize;

use crate::base::{BaseTokens, Color, MotionPair, Px};
use crate::semantic::{Insets, SemanticTokens};
use crate::tokens::token_record;

/// Coarse confidence bucket for model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Bucket a score in `0.0..=1.0`. Non-finite scores count as low.
    pub fn from_score(score: f64) -> Self {
        if !score.is_finite() {
            Confidence::Low
        } else if score >= 0.8 {
            Confidence::High
        } else if score >= 0.5 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

token_record! {
    pub struct AiTokens / AiTokensPatch {
        accent: Color,
        accent_subtle: Color,
        gradient_start: Color,
        gradient_end: Color,
        assistant_bubble: Color,
        assistant_text: Color,
        user_bubble: Color,
        user_text: Color,
        bubble_radius: Px,
        bubble_padding: Insets,
        bubble_max_width: Px,
        confidence_high: Color,
        confidence_medium: Color,
        confidence_low: Color,
        streaming_cursor: Color,
        streaming_cursor_width: Px,
        cursor_blink: MotionPair,
        thinking: MotionPair,
        sparkle_size: Px,
    }
}

impl AiTokens {
    pub fn derive(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        let c = &base.colors;
        Self {
            accent: c.purple.s600,
            accent_subtle: c.purple.s50,
            gradient_start: c.purple.s500,
            gradient_end: c.blue.s500,
            assistant_bubble: sem.background.surface,
            assistant_text: sem.text.primary,
            user_bubble: sem.action.primary,
            user_text: sem.text.on_action,
            bubble_radius: base.radius.xxl,
            bubble_padding: sem.space.inset_sm.clone(),
            bubble_max_width: base.sizing.text_max,
            confidence_high: sem.status.success.icon,
            confidence_medium: sem.status.warning.icon,
            confidence_low: sem.status.error.icon,
            streaming_cursor: c.purple.s500,
            streaming_cursor_width: base.border_width.thick,
            cursor_blink: base.motion.meditative.clone(),
            thinking: base.motion.slow.clone(),
            sparkle_size: base.sizing.icon_sm,
        }
    }

    pub fn confidence(&self, level: Confidence) -> Color {
        match level {
            Confidence::High => self.confidence_high,
            Confidence::Medium => self.confidence_medium,
            Confidence::Low => self.confidence_low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BASE;

    #[test]
    fn confidence_buckets() {
        assert_eq!(Confidence::from_score(0.95), Confidence::High);
        assert_eq!(Confidence::from_score(0.8), Confidence::High);
        assert_eq!(Confidence::from_score(0.6), Confidence::Medium);
        assert_eq!(Confidence::from_score(0.1), Confidence::Low);
        assert_eq!(Confidence::from_score(f64::NAN), Confidence::Low);
        assert_eq!(Confidence::from_score(f64::INFINITY), Confidence::Low);
        assert_eq!(Confidence::from_score(f64::NEG_INFINITY), Confidence::Low);
    }

    #[test]
    fn confidence_colors_follow_status_tones() {
        let sem = SemanticTokens::derive(&BASE);
        let ai = AiTokens::derive(&BASE, &sem);
        assert_eq!(ai.confidence(Confidence::Low), sem.status.error.icon);
        assert_eq!(ai.confidence(Confidence::High), sem.status.success.icon);
    }
}
