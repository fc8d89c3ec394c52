//! Resolution of a complete token set for one rendering context.
//!
//! Order of operations:
//!
//! 1. derive the semantic tier from base, then apply each layer's semantic patch
//! 2. compose components from that patched semantic tier, then apply component patches
//! 3. derive domain tables the same way
//!
//! Layers are the mode patch followed by the interaction-state patch, if any.

use std::fmt::Write as _;

use serde::Serialize;

use crate::base::{BaseTokens, BASE};
use crate::component::ComponentTokens;
use crate::contextual::{InteractionState, Mode};
use crate::domain::DomainTokens;
use crate::error::{TokenError, TokenResult};
use crate::semantic::SemanticTokens;
use crate::tokens::{token_record, Leaf, TokenPath, Tokens};

token_record! {
    /// Every tier above base, as one tree.
    pub struct ThemeTokens / ThemePatch {
        semantic: SemanticTokens,
        component: ComponentTokens,
        domain: DomainTokens,
    }
}

impl ThemeTokens {
    /// The light baseline with no contextual overrides.
    pub fn baseline(base: &BaseTokens) -> Self {
        Self::layered(base, &[])
    }

    fn layered(base: &BaseTokens, layers: &[ThemePatch]) -> Self {
        let mut semantic = SemanticTokens::derive(base);
        for layer in layers {
            semantic.apply(&layer.semantic);
        }

        let mut component = ComponentTokens::compose(base, &semantic);
        for layer in layers {
            component.apply(&layer.component);
        }

        let mut domain = DomainTokens::derive(base, &semantic);
        for layer in layers {
            domain.apply(&layer.domain);
        }

        Self {
            semantic,
            component,
            domain,
        }
    }
}

/// A fully merged, immutable token set for one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSet {
    mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<InteractionState>,
    reduced_motion: bool,
    #[serde(flatten)]
    theme: ThemeTokens,
}

/// Resolve the token set for `mode`.
pub fn resolve(mode: Mode) -> TokenSet {
    TokenSet::resolve(mode)
}

impl TokenSet {
    pub fn resolve(mode: Mode) -> Self {
        Self::build(mode, None, false)
    }

    fn build(mode: Mode, state: Option<InteractionState>, reduced_motion: bool) -> Self {
        let mut layers = vec![mode.patch(&BASE)];
        if let Some(state) = state {
            layers.push(state.patch(&BASE, mode));
        }

        let mut theme = ThemeTokens::layered(&BASE, &layers);
        if reduced_motion {
            let instant = BASE.motion.instant.duration;
            theme.map_leaves(&mut |leaf: Leaf| match leaf {
                Leaf::Duration(_) => Leaf::Duration(instant),
                other => other,
            });
        }

        tracing::debug!(
            mode = %mode,
            state = ?state,
            reduced_motion,
            "resolved token set"
        );

        Self {
            mode,
            state,
            reduced_motion,
            theme,
        }
    }

    /// Same mode with an interaction-state patch layered on top.
    pub fn with_state(&self, state: InteractionState) -> Self {
        Self::build(self.mode, Some(state), self.reduced_motion)
    }

    /// Same context with every motion duration collapsed to zero, or restored.
    pub fn with_reduced_motion(&self, reduced_motion: bool) -> Self {
        Self::build(self.mode, self.state, reduced_motion)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> Option<InteractionState> {
        self.state
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn theme(&self) -> &ThemeTokens {
        &self.theme
    }

    pub fn semantic(&self) -> &SemanticTokens {
        &self.theme.semantic
    }

    pub fn component(&self) -> &ComponentTokens {
        &self.theme.component
    }

    pub fn domain(&self) -> &DomainTokens {
        &self.theme.domain
    }

    /// Every leaf of the theme, tier-prefixed.
    pub fn leaves(&self) -> Vec<(TokenPath, Leaf)> {
        self.theme.leaves()
    }

    /// Look up one leaf by dotted path, e.g. `semantic.text.primary`.
    /// Paths starting with `base.` read the base tier.
    pub fn get(&self, path: &str) -> TokenResult<Leaf> {
        let path = path.trim();
        let leaves = if path.starts_with("base.") {
            BASE.leaves_at(TokenPath::root("base"))
        } else {
            self.theme.leaves()
        };
        leaves
            .into_iter()
            .find(|(p, _)| p.to_string() == path)
            .map(|(_, leaf)| leaf)
            .ok_or_else(|| TokenError::UnknownToken(path.to_string()))
    }

    /// Render the theme as CSS custom properties on `:root`.
    pub fn to_css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (path, leaf) in self.theme.leaves() {
            let _ = writeln!(css, "  {}: {};", path.css_variable(), leaf);
        }
        css.push_str("}\n");
        css
    }

    /// Serialize the full set as pretty JSON.
    pub fn to_json(&self) -> TokenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
