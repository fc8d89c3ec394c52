//! Inline style builder.
//!
//! Components compute their `style` attribute from tokens with this
//! builder so the result is a plain `String` that tests can inspect.

use std::fmt::{self, Write};

use strata_tokens::base::MotionPair;
use strata_tokens::TokenSet;

/// Accumulates CSS declarations for an inline `style` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style(String);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `property: value;`.
    pub fn set(mut self, property: &str, value: impl fmt::Display) -> Self {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        let _ = write!(self.0, "{}: {};", property, value);
        self
    }

    /// Append `property: value;` only when `condition` holds.
    pub fn set_if(self, condition: bool, property: &str, value: impl fmt::Display) -> Self {
        if condition {
            self.set(property, value)
        } else {
            self
        }
    }

    /// Append pre-rendered declarations such as [`FontSpec::css`].
    ///
    /// [`FontSpec::css`]: strata_tokens::FontSpec::css
    pub fn extend(mut self, declarations: &str) -> Self {
        if declarations.is_empty() {
            return self;
        }
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(declarations);
        self
    }

    /// `transition` over the given properties with one motion pair.
    pub fn transition(self, properties: &[&str], motion: &MotionPair) -> Self {
        let value = properties
            .iter()
            .map(|p| format!("{} {} {}", p, motion.duration, motion.easing))
            .collect::<Vec<_>>()
            .join(", ");
        self.set("transition", value)
    }

    /// `border: <width> solid <color>`.
    pub fn border(self, width: impl fmt::Display, color: impl fmt::Display) -> Self {
        self.set("border", format!("{} solid {}", width, color))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join a component's own class with an optional caller class.
pub fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// `@keyframes` rules the components reference by name.
pub fn keyframes(tokens: &TokenSet) -> String {
    let pulse = tokens.component().status_indicator.pulse_opacity;
    format!(
        "@keyframes strata-pulse {{ 0%, 100% {{ opacity: 1; }} 50% {{ opacity: {}; }} }}\n\
         @keyframes strata-blink {{ 0%, 100% {{ opacity: 1; }} 50% {{ opacity: 0; }} }}\n\
         @keyframes strata-fade-in {{ from {{ opacity: 0; }} to {{ opacity: 1; }} }}\n",
        pulse
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_tokens::BASE;

    #[test]
    fn declarations_are_space_separated() {
        let style = Style::new().set("color", "red").set("padding", "4px 8px");
        assert_eq!(style.as_str(), "color: red; padding: 4px 8px;");
    }

    #[test]
    fn set_if_skips_false() {
        let style = Style::new()
            .set_if(false, "opacity", 0.5)
            .set_if(true, "cursor", "pointer");
        assert_eq!(style.to_string(), "cursor: pointer;");
    }

    #[test]
    fn transition_uses_motion_pair() {
        let style = Style::new().transition(&["background", "color"], &BASE.motion.fast);
        let expected = format!(
            "transition: background {d} {e}, color {d} {e};",
            d = BASE.motion.fast.duration,
            e = BASE.motion.fast.easing
        );
        assert_eq!(style.into_string(), expected);
    }

    #[test]
    fn extend_ignores_empty() {
        let style = Style::new().extend("").set("gap", "4px").extend("top: 0;");
        assert_eq!(style.as_str(), "gap: 4px; top: 0;");
    }

    #[test]
    fn pulse_keyframes_use_token_opacity() {
        let set = strata_tokens::resolve(strata_tokens::Mode::Light);
        let css = keyframes(&set);
        let opacity = set.component().status_indicator.pulse_opacity;
        assert!(css.contains(&format!("50% {{ opacity: {}; }}", opacity)));
        assert!(css.contains("strata-blink"));
    }

    #[test]
    fn join_class_variants() {
        assert_eq!(join_class("btn", None), "btn");
        assert_eq!(join_class("btn", Some("")), "btn");
        assert_eq!(join_class("btn", Some("wide")), "btn wide");
    }
}
