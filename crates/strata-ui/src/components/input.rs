//! Input Field Components
//!
//! Text inputs and textareas styled from the `input` component bundle.
//! Features:
//! - Label with optional hint, helper or error line below
//! - Border color follows focus, error and disabled state
//! - Focus ring drawn as a translucent box-shadow

use std::sync::Arc;

use dioxus::prelude::*;
use strata_tokens::{IconLibrary, IconName, TokenSet};

use crate::components::icon::Icon;
use crate::style::{join_class, Style};

/// Visual state of a text field.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FieldState {
    pub focused: bool,
    pub invalid: bool,
    pub disabled: bool,
}

/// Inline style for an `input` or `textarea`.
pub fn field_style(tokens: &TokenSet, state: FieldState, multiline: bool) -> String {
    let input = &tokens.component().input;
    let border = if state.invalid {
        input.border_error
    } else if state.focused {
        input.border_focus
    } else {
        input.border
    };
    let (background, color) = if state.disabled {
        (input.disabled_background, input.disabled_text)
    } else {
        (input.background, input.text)
    };

    Style::new()
        .set("box-sizing", "border-box")
        .set("width", "100%")
        .set_if(!multiline, "height", input.height)
        .set("padding", input.padding.css())
        .extend(&input.font.css())
        .set("color", color)
        .set("background", background)
        .border(input.border_width, border)
        .set("border-radius", input.radius)
        .set("outline", "none")
        .set_if(
            state.focused && !state.disabled,
            "box-shadow",
            format!("0 0 0 {} {}", tokens.semantic().focus.ring_width, input.focus_ring),
        )
        .set_if(multiline, "resize", "vertical")
        .transition(&["border-color", "box-shadow"], &input.transition)
        .into_string()
}

/// Inline style for a field label.
pub fn label_style(tokens: &TokenSet) -> String {
    let input = &tokens.component().input;
    Style::new()
        .set("display", "block")
        .set("margin-bottom", input.label_gap)
        .extend(&input.label.css())
        .set("color", input.label_color)
        .into_string()
}

/// Inline style for the helper or error line.
pub fn helper_style(tokens: &TokenSet, invalid: bool) -> String {
    let input = &tokens.component().input;
    Style::new()
        .set("display", "block")
        .set("margin-top", input.label_gap)
        .set("font-size", tokens.semantic().typography.caption.size)
        .set("color", if invalid { input.error_text } else { input.helper })
        .into_string()
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    pub tokens: Arc<TokenSet>,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint next to the label (e.g. "optional")
    #[props(default)]
    pub hint: Option<String>,
    /// Helper line below the field
    #[props(default)]
    pub helper: Option<String>,
    /// Error message; marks the field invalid and replaces the helper
    #[props(default)]
    pub error: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text field
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         tokens: tokens.clone(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let mut focused = use_signal(|| false);
    let fallback_id = use_hook(|| format!("input-{}", rand_id()));
    let id = props.id.clone().unwrap_or(fallback_id);
    let state = FieldState {
        focused: focused(),
        invalid: error_text(props.error.as_deref()).is_some(),
        disabled: props.disabled,
    };
    let style = field_style(&props.tokens, state, false);
    let class = join_class("strata-input", props.class.as_deref());
    let label_css = label_style(&props.tokens);
    let hint_color = props.tokens.component().input.helper;
    let oninput = props.oninput;

    rsx! {
        div { class: "strata-field",
            if let Some(label) = &props.label {
                label {
                    style: "{label_css}",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { style: "color: {hint_color};", " ({hint})" }
                    }
                }
            }
            input {
                id: "{id}",
                class: "{class}",
                style: "{style}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                "aria-invalid": if state.invalid { "true" } else { "false" },
                onfocus: move |_| focused.set(true),
                onblur: move |_| focused.set(false),
                oninput: move |e| oninput.call(e.value()),
            }
            {field_message(&props.tokens, props.helper.as_deref(), error_text(props.error.as_deref()))}
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub tokens: Arc<TokenSet>,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub hint: Option<String>,
    #[props(default)]
    pub helper: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub id: Option<String>,
}

/// Multi-line text field
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let mut focused = use_signal(|| false);
    let fallback_id = use_hook(|| format!("textarea-{}", rand_id()));
    let id = props.id.clone().unwrap_or(fallback_id);
    let state = FieldState {
        focused: focused(),
        invalid: error_text(props.error.as_deref()).is_some(),
        disabled: props.disabled,
    };
    let style = field_style(&props.tokens, state, true);
    let label_css = label_style(&props.tokens);
    let hint_color = props.tokens.component().input.helper;
    let oninput = props.oninput;

    rsx! {
        div { class: "strata-field",
            if let Some(label) = &props.label {
                label {
                    style: "{label_css}",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { style: "color: {hint_color};", " ({hint})" }
                    }
                }
            }
            textarea {
                id: "{id}",
                class: "strata-input strata-textarea",
                style: "{style}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                "aria-invalid": if state.invalid { "true" } else { "false" },
                onfocus: move |_| focused.set(true),
                onblur: move |_| focused.set(false),
                oninput: move |e| oninput.call(e.value()),
            }
            {field_message(&props.tokens, props.helper.as_deref(), error_text(props.error.as_deref()))}
        }
    }
}

/// Error message to show; empty strings count as no error.
pub fn error_text(error: Option<&str>) -> Option<&str> {
    error.filter(|e| !e.trim().is_empty())
}

/// Helper or error line under a field; nothing when both are unset.
fn field_message(tokens: &TokenSet, helper: Option<&str>, error: Option<&str>) -> Element {
    if let Some(error) = error {
        let style = helper_style(tokens, true);
        return rsx! {
            span { role: "alert", style: "{style}", "{error}" }
        };
    }
    match helper {
        Some(helper) => {
            let style = helper_style(tokens, false);
            rsx! {
                span { style: "{style}", "{helper}" }
            }
        }
        None => rsx! {},
    }
}

/// Generate a simple random ID for form elements
fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}

/// Search input with a leading icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    pub tokens: Arc<TokenSet>,
    /// Current search value
    pub value: String,
    /// Handler called when search changes
    pub oninput: EventHandler<String>,
    #[props(default = "Search".to_string())]
    pub placeholder: String,
    #[props(default)]
    pub library: IconLibrary,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let mut focused = use_signal(|| false);
    let input = &props.tokens.component().input;
    let state = FieldState {
        focused: focused(),
        ..FieldState::default()
    };
    let icon_size = props.tokens.component().button.small.icon_size;
    let style = Style::new()
        .extend(&field_style(&props.tokens, state, false))
        .set("padding-left", format!("calc({} + {} * 2)", icon_size, input.padding.x))
        .into_string();
    let icon_style = Style::new()
        .set("position", "absolute")
        .set("left", input.padding.x)
        .set("top", "50%")
        .set("transform", "translateY(-50%)")
        .set("display", "inline-flex")
        .set("color", input.placeholder)
        .into_string();
    let oninput = props.oninput;

    rsx! {
        div { class: "strata-search", style: "position: relative;",
            span { style: "{icon_style}",
                Icon { name: IconName::Search, library: props.library, size: icon_size }
            }
            input {
                class: "strata-input strata-search-input",
                style: "{style}",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                "aria-label": "{props.placeholder}",
                onfocus: move |_| focused.set(true),
                onblur: move |_| focused.set(false),
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_tokens::{resolve, Mode};

    #[test]
    fn rand_id_generates_number() {
        let id1 = rand_id();
        let id2 = rand_id();
        assert!(id1 < 1_000_000);
        assert!(id2 < 1_000_000);
    }

    #[test]
    fn blank_error_is_no_error() {
        assert_eq!(error_text(None), None);
        assert_eq!(error_text(Some("  ")), None);
        assert_eq!(error_text(Some("Required")), Some("Required"));
    }

    #[test]
    fn border_follows_state() {
        let set = resolve(Mode::Light);
        let input = &set.component().input;

        let idle = field_style(&set, FieldState::default(), false);
        assert!(idle.contains(&format!("solid {};", input.border)));
        assert!(!idle.contains("box-shadow"));

        let focused = FieldState {
            focused: true,
            ..FieldState::default()
        };
        let style = field_style(&set, focused, false);
        assert!(style.contains(&format!("solid {};", input.border_focus)));
        assert!(style.contains(&input.focus_ring.to_string()));

        let invalid = FieldState {
            focused: true,
            invalid: true,
            ..FieldState::default()
        };
        assert!(field_style(&set, invalid, false).contains(&format!("solid {};", input.border_error)));
    }

    #[test]
    fn disabled_uses_disabled_colors() {
        let set = resolve(Mode::Dark);
        let input = &set.component().input;
        let state = FieldState {
            disabled: true,
            ..FieldState::default()
        };
        let style = field_style(&set, state, false);
        assert!(style.contains(&format!("background: {};", input.disabled_background)));
        assert!(style.contains(&format!("color: {};", input.disabled_text)));
    }

    #[test]
    fn textarea_has_no_fixed_height() {
        let set = resolve(Mode::Light);
        let style = field_style(&set, FieldState::default(), true);
        assert!(!style.contains("height:"));
        assert!(style.contains("resize: vertical;"));
    }

    #[test]
    fn helper_switches_to_error_color() {
        let set = resolve(Mode::Light);
        let input = &set.component().input;
        assert!(helper_style(&set, false).contains(&input.helper.to_string()));
        assert!(helper_style(&set, true).contains(&input.error_text.to_string()));
    }
}
