//! Contextual overrides: rendering modes and interaction states.
//!
//! Each context is a [`ThemePatch`] built only from base values. Light mode
//! is the empty patch because the semantic tier already derives the light
//! baseline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base::{BaseTokens, Color, MotionPairPatch};
use crate::error::TokenError;
use crate::resolve::ThemePatch;
use crate::semantic::{StatusTonePatch, TextTokensPatch};

/// Rendering mode selected by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Light,
    Dark,
    HighContrast,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Light, Mode::Dark, Mode::HighContrast];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
            Mode::HighContrast => "high-contrast",
        }
    }

    /// Overrides this mode layers on the light baseline.
    pub fn patch(&self, base: &BaseTokens) -> ThemePatch {
        match self {
            Mode::Light => ThemePatch::default(),
            Mode::Dark => dark(base),
            Mode::HighContrast => high_contrast(base),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            "high-contrast" | "high_contrast" | "contrast" | "hc" => Ok(Mode::HighContrast),
            _ => Err(TokenError::UnknownMode(s.to_string())),
        }
    }
}

fn tone(text: Color, background: Color, border: Color, icon: Color) -> StatusTonePatch {
    StatusTonePatch {
        text: Some(text),
        background: Some(background),
        border: Some(border),
        icon: Some(icon),
    }
}

fn dark(base: &BaseTokens) -> ThemePatch {
    let c = &base.colors;
    let mut p = ThemePatch::default();

    let sem = &mut p.semantic;
    sem.text = TextTokensPatch {
        primary: Some(c.gray.s50),
        secondary: Some(c.gray.s300),
        muted: Some(c.gray.s400),
        disabled: Some(c.gray.s600),
        inverse: Some(c.gray.s900),
        link: Some(c.blue.s400),
        link_hover: Some(c.blue.s300),
        on_action: None,
    };
    sem.background.canvas = Some(c.gray.s900);
    sem.background.surface = Some(c.gray.s800);
    sem.background.elevated = Some(c.gray.s800);
    sem.background.sunken = Some(c.black);
    sem.background.inverse = Some(c.gray.s50);
    sem.background.overlay = Some(c.scrim.dark);
    sem.background.hover = Some(c.gray.s700);
    sem.background.selected = Some(c.blue.s900);
    sem.background.disabled = Some(c.gray.s800);
    sem.border.default = Some(c.gray.s700);
    sem.border.subtle = Some(c.gray.s800);
    sem.border.strong = Some(c.gray.s500);
    sem.border.focus = Some(c.blue.s400);
    sem.border.error = Some(c.red.s400);
    sem.border.disabled = Some(c.gray.s700);
    sem.action.primary = Some(c.blue.s500);
    sem.action.primary_hover = Some(c.blue.s400);
    sem.action.primary_active = Some(c.blue.s300);
    sem.action.secondary = Some(c.gray.s700);
    sem.action.secondary_hover = Some(c.gray.s600);
    sem.action.secondary_active = Some(c.gray.s500);
    sem.action.danger = Some(c.red.s500);
    sem.action.danger_hover = Some(c.red.s400);
    sem.action.danger_active = Some(c.red.s300);
    sem.status.error = tone(c.red.s300, c.red.s900, c.red.s700, c.red.s400);
    sem.status.warning = tone(c.amber.s300, c.amber.s900, c.amber.s700, c.amber.s400);
    sem.status.success = tone(c.green.s300, c.green.s900, c.green.s700, c.green.s400);
    sem.status.info = tone(c.blue.s300, c.blue.s900, c.blue.s700, c.blue.s400);
    sem.status.pending = tone(c.purple.s300, c.purple.s900, c.purple.s700, c.purple.s400);
    sem.status.neutral = tone(c.gray.s300, c.gray.s800, c.gray.s600, c.gray.s400);
    sem.focus.ring = Some(c.blue.s400);
    sem.elevation.raised = Some(base.shadow.xs);

    let comp = &mut p.component;
    comp.card.shadow = Some(base.shadow.none);
    comp.dock.drop_zone = Some(c.blue.s400.with_alpha(base.opacity.o16));
    comp.tooltip.background = Some(c.gray.s700);
    comp.tooltip.text = Some(c.gray.s50);

    let domain = &mut p.domain;
    for (i, color) in [c.blue.s300, c.blue.s400, c.blue.s500, c.blue.s600, c.blue.s700]
        .into_iter()
        .enumerate()
    {
        domain.charts.primary.insert(i, Some(color));
    }
    domain.charts.diverging.insert(4, Some(c.gray.s700));
    domain.ai.accent = Some(c.purple.s400);
    domain.ai.accent_subtle = Some(c.purple.s900);
    domain.ai.streaming_cursor = Some(c.purple.s400);

    p
}

fn high_contrast(base: &BaseTokens) -> ThemePatch {
    let c = &base.colors;
    let bw = &base.border_width;
    let mut p = ThemePatch::default();

    let sem = &mut p.semantic;
    sem.text = TextTokensPatch {
        primary: Some(c.black),
        secondary: Some(c.gray.s900),
        muted: Some(c.gray.s800),
        disabled: Some(c.gray.s600),
        inverse: Some(c.white),
        link: Some(c.blue.s800),
        link_hover: Some(c.blue.s900),
        on_action: Some(c.white),
    };
    sem.background.surface = Some(c.white);
    sem.background.sunken = Some(c.gray.s100);
    sem.background.inverse = Some(c.black);
    sem.background.overlay = Some(c.scrim.strong);
    sem.background.hover = Some(c.gray.s200);
    sem.background.selected = Some(c.blue.s100);
    sem.border.default = Some(c.gray.s900);
    sem.border.subtle = Some(c.gray.s700);
    sem.border.strong = Some(c.black);
    sem.border.focus = Some(c.black);
    sem.border.error = Some(c.red.s800);
    sem.border.disabled = Some(c.gray.s600);
    sem.border.width = Some(bw.thick);
    sem.border.width_strong = Some(bw.heavy);
    sem.action.primary = Some(c.blue.s800);
    sem.action.primary_hover = Some(c.blue.s900);
    sem.action.primary_active = Some(c.black);
    sem.action.secondary = Some(c.gray.s200);
    sem.action.secondary_hover = Some(c.gray.s300);
    sem.action.secondary_active = Some(c.gray.s400);
    sem.action.danger = Some(c.red.s800);
    sem.action.danger_hover = Some(c.red.s900);
    sem.action.danger_active = Some(c.black);
    sem.status.error = tone(c.red.s900, c.white, c.red.s800, c.red.s800);
    sem.status.warning = tone(c.amber.s900, c.white, c.amber.s800, c.amber.s800);
    sem.status.success = tone(c.green.s900, c.white, c.green.s800, c.green.s800);
    sem.status.info = tone(c.blue.s900, c.white, c.blue.s800, c.blue.s800);
    sem.status.pending = tone(c.purple.s900, c.white, c.purple.s800, c.purple.s800);
    sem.status.neutral = tone(c.gray.s900, c.white, c.gray.s800, c.gray.s800);
    sem.focus.ring = Some(c.black);
    sem.focus.ring_width = Some(bw.heavy);

    let comp = &mut p.component;
    comp.button.outlined.border = Some(c.black);
    comp.button.ghost.border = Some(c.gray.s900);
    comp.dock.drop_zone = Some(c.blue.s800.with_alpha(base.opacity.o24));
    comp.input.focus_ring = Some(c.black);

    let domain = &mut p.domain;
    domain.data_table.stripe_background = Some(c.gray.s100);
    domain.charts.grid = Some(c.gray.s700);
    domain.charts.axis = Some(c.black);

    p
}

/// Transient interaction state layered on top of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    Hover,
    Active,
    Disabled,
    Focus,
    Loading,
}

impl InteractionState {
    pub const ALL: [InteractionState; 5] = [
        InteractionState::Hover,
        InteractionState::Active,
        InteractionState::Disabled,
        InteractionState::Focus,
        InteractionState::Loading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionState::Hover => "hover",
            InteractionState::Active => "active",
            InteractionState::Disabled => "disabled",
            InteractionState::Focus => "focus",
            InteractionState::Loading => "loading",
        }
    }

    /// Overrides for this state under `mode`. Layered after the mode patch.
    pub fn patch(&self, base: &BaseTokens, mode: Mode) -> ThemePatch {
        let c = &base.colors;
        let mut p = ThemePatch::default();
        let (dark, contrast) = (mode == Mode::Dark, mode == Mode::HighContrast);

        let pick = |light, on_dark, on_contrast| {
            if dark {
                on_dark
            } else if contrast {
                on_contrast
            } else {
                light
            }
        };

        match self {
            InteractionState::Hover => {
                p.semantic.action.primary = Some(pick(c.blue.s700, c.blue.s400, c.blue.s900));
                p.semantic.action.secondary = Some(pick(c.gray.s200, c.gray.s600, c.gray.s300));
                p.semantic.action.danger = Some(pick(c.red.s700, c.red.s400, c.red.s900));
                p.component.input.border = Some(pick(c.gray.s400, c.gray.s500, c.black));
                p.component.card.shadow = Some(base.shadow.md);
            }
            InteractionState::Active => {
                p.semantic.action.primary = Some(pick(c.blue.s800, c.blue.s300, c.black));
                p.semantic.action.secondary = Some(pick(c.gray.s300, c.gray.s500, c.gray.s400));
                p.semantic.action.danger = Some(pick(c.red.s800, c.red.s300, c.black));
                p.component.card.shadow = Some(base.shadow.xs);
            }
            InteractionState::Disabled => {
                let muted = pick(c.gray.s300, c.gray.s700, c.gray.s400);
                p.semantic.action.primary = Some(muted);
                p.semantic.action.secondary = Some(muted);
                p.semantic.action.danger = Some(muted);
                p.semantic.text.primary = Some(pick(c.gray.s400, c.gray.s600, c.gray.s600));
                p.semantic.text.on_action = Some(pick(c.gray.s500, c.gray.s400, c.gray.s800));
                p.semantic.border.default = Some(pick(c.gray.s200, c.gray.s700, c.gray.s600));
                p.component.input.background = Some(pick(c.gray.s100, c.gray.s800, c.gray.s100));
            }
            InteractionState::Focus => {
                let ring = pick(c.blue.s500, c.blue.s400, c.black);
                p.semantic.border.default = Some(ring);
                p.semantic.focus.ring_width = Some(base.border_width.heavy);
                p.component.input.border = Some(ring);
            }
            InteractionState::Loading => {
                p.semantic.text.primary = Some(pick(c.gray.s500, c.gray.s400, c.gray.s800));
                p.semantic.motion.emphasis = MotionPairPatch {
                    duration: Some(base.motion.meditative.duration),
                    easing: Some(base.motion.meditative.easing),
                };
                p.component.status_indicator.pulse.duration = Some(base.motion.slow.duration);
                p.component.button.disabled_opacity = Some(base.opacity.o64);
            }
        }

        p
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionState {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InteractionState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TokenError::UnknownState(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BASE;

    #[test]
    fn light_is_empty() {
        assert_eq!(Mode::Light.patch(&BASE), ThemePatch::default());
    }

    #[test]
    fn dark_inverts_text_and_canvas() {
        let patch = Mode::Dark.patch(&BASE);
        assert_eq!(patch.semantic.text.primary, Some(BASE.colors.gray.s50));
        assert_eq!(patch.semantic.background.canvas, Some(BASE.colors.gray.s900));
        assert_eq!(patch.semantic.text.on_action, None);
    }

    #[test]
    fn high_contrast_thickens_borders() {
        let patch = Mode::HighContrast.patch(&BASE);
        assert_eq!(patch.semantic.border.width, Some(BASE.border_width.thick));
        assert_eq!(patch.semantic.focus.ring_width, Some(BASE.border_width.heavy));
    }

    #[test]
    fn mode_parses_aliases() {
        assert_eq!("Dark".parse::<Mode>().unwrap(), Mode::Dark);
        assert_eq!("hc".parse::<Mode>().unwrap(), Mode::HighContrast);
        assert_eq!(Mode::HighContrast.to_string(), "high-contrast");
        assert!(matches!("sepia".parse::<Mode>(), Err(TokenError::UnknownMode(_))));
    }

    #[test]
    fn loading_slows_emphasis_motion() {
        let set = crate::resolve::resolve(Mode::Light);
        let loading = set.with_state(InteractionState::Loading);
        assert_ne!(set.semantic().motion.emphasis, loading.semantic().motion.emphasis);
        assert_eq!(loading.semantic().motion.emphasis, BASE.motion.meditative);
    }

    #[test]
    fn every_state_patches_something() {
        for mode in Mode::ALL {
            for state in InteractionState::ALL {
                assert_ne!(state.patch(&BASE, mode), ThemePatch::default(), "{} {}", mode, state);
            }
        }
    }

    #[test]
    fn hover_follows_mode() {
        let light = InteractionState::Hover.patch(&BASE, Mode::Light);
        let dark = InteractionState::Hover.patch(&BASE, Mode::Dark);
        assert_eq!(light.semantic.action.primary, Some(BASE.colors.blue.s700));
        assert_eq!(dark.semantic.action.primary, Some(BASE.colors.blue.s400));
    }

    #[test]
    fn state_parses() {
        assert_eq!("LOADING".parse::<InteractionState>().unwrap(), InteractionState::Loading);
        assert!(matches!(
            "pressed".parse::<InteractionState>(),
            Err(TokenError::UnknownState(_))
        ));
    }
}
