//! Button Components
//!
//! Token-styled buttons:
//! - Button: every [`ButtonVariant`] at every [`ControlSize`]
//! - IconButton: square button around a single icon
//! - CloseButton: IconButton with the `close` glyph

use std::sync::Arc;

use dioxus::prelude::*;
use strata_tokens::{ButtonVariant, ControlSize, IconLibrary, IconName, TokenSet};

use crate::components::icon::Icon;
use crate::style::{join_class, Style};

/// Pointer state a button tracks locally.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

/// Inline style for a button.
pub fn button_style(
    tokens: &TokenSet,
    variant: ButtonVariant,
    size: ControlSize,
    pointer: PointerState,
    disabled: bool,
) -> String {
    let button = &tokens.component().button;
    let colors = button.variant(variant);
    let metrics = button.size(size);
    let background = match (disabled, pointer) {
        (true, _) | (false, PointerState::Idle) => colors.background,
        (false, PointerState::Hovered) => colors.hover_background,
        (false, PointerState::Pressed) => colors.active_background,
    };

    Style::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("gap", metrics.gap)
        .set("height", metrics.height)
        .set("padding", metrics.padding.css())
        .set("font-family", button.font_family)
        .set("font-size", metrics.font_size)
        .set("font-weight", button.font_weight)
        .set("color", colors.text)
        .set("background", background)
        .border(button.border_width, colors.border)
        .set("border-radius", button.radius)
        .set("cursor", if disabled { "not-allowed" } else { "pointer" })
        .set_if(disabled, "opacity", button.disabled_opacity)
        .transition(&["background", "color", "border-color"], &button.transition)
        .into_string()
}

/// Inline style for a square icon-only button.
pub fn icon_button_style(tokens: &TokenSet, size: ControlSize, pointer: PointerState) -> String {
    let button = &tokens.component().button;
    let ghost = button.variant(ButtonVariant::Ghost);
    let metrics = button.size(size);
    let background = match pointer {
        PointerState::Idle => ghost.background,
        PointerState::Hovered => ghost.hover_background,
        PointerState::Pressed => ghost.active_background,
    };

    Style::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("width", metrics.height)
        .set("height", metrics.height)
        .set("padding", "0")
        .set("color", ghost.text)
        .set("background", background)
        .border(button.border_width, ghost.border)
        .set("border-radius", button.radius)
        .set("cursor", "pointer")
        .transition(&["background"], &button.transition)
        .into_string()
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Resolved tokens for the active mode
    pub tokens: Arc<TokenSet>,
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Height, padding and type size
    #[props(default)]
    pub size: ControlSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Token-styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         tokens: tokens.clone(),
///         variant: ButtonVariant::Danger,
///         onclick: move |_| delete_row(),
///         "Delete"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut pointer = use_signal(PointerState::default);
    let style = button_style(
        &props.tokens,
        props.variant,
        props.size,
        pointer(),
        props.disabled,
    );
    let class = join_class(
        &format!("strata-btn strata-btn-{}", props.variant),
        props.class.as_deref(),
    );
    let disabled = props.disabled;
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{class}",
            style: "{style}",
            r#type: "{props.button_type}",
            disabled: disabled,
            "aria-disabled": if disabled { "true" } else { "false" },
            onmouseenter: move |_| pointer.set(PointerState::Hovered),
            onmouseleave: move |_| pointer.set(PointerState::Idle),
            onmousedown: move |_| pointer.set(PointerState::Pressed),
            onmouseup: move |_| pointer.set(PointerState::Hovered),
            onclick: move |_| {
                if disabled {
                    return;
                }
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, expand, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub tokens: Arc<TokenSet>,
    /// Glyph to draw
    pub icon: IconName,
    #[props(default)]
    pub library: IconLibrary,
    #[props(default)]
    pub size: ControlSize,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let mut pointer = use_signal(PointerState::default);
    let style = icon_button_style(&props.tokens, props.size, pointer());
    let icon_size = props.tokens.component().button.size(props.size).icon_size;
    let class = join_class("strata-icon-btn", props.class.as_deref());
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{class}",
            style: "{style}",
            r#type: "button",
            title: "{props.aria_label}",
            "aria-label": "{props.aria_label}",
            onmouseenter: move |_| pointer.set(PointerState::Hovered),
            onmouseleave: move |_| pointer.set(PointerState::Idle),
            onmousedown: move |_| pointer.set(PointerState::Pressed),
            onmouseup: move |_| pointer.set(PointerState::Hovered),
            onclick: move |_| onclick.call(()),
            Icon { name: props.icon, library: props.library, size: icon_size }
        }
    }
}

/// Close button with the `close` glyph
#[component]
pub fn CloseButton(
    tokens: Arc<TokenSet>,
    onclick: EventHandler<()>,
    #[props(default)] library: IconLibrary,
) -> Element {
    rsx! {
        IconButton {
            tokens: tokens,
            icon: IconName::Close,
            library: library,
            size: ControlSize::Small,
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "strata-close-btn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_tokens::{resolve, Mode};

    #[test]
    fn primary_uses_action_background() {
        let set = resolve(Mode::Light);
        let style = button_style(
            &set,
            ButtonVariant::Primary,
            ControlSize::Medium,
            PointerState::Idle,
            false,
        );
        let expected = format!("background: {};", set.component().button.primary.background);
        assert!(style.contains(&expected));
        assert!(style.contains("cursor: pointer;"));
    }

    #[test]
    fn hover_and_press_swap_background() {
        let set = resolve(Mode::Dark);
        let tokens = &set.component().button.secondary;
        let hovered = button_style(
            &set,
            ButtonVariant::Secondary,
            ControlSize::Small,
            PointerState::Hovered,
            false,
        );
        let pressed = button_style(
            &set,
            ButtonVariant::Secondary,
            ControlSize::Small,
            PointerState::Pressed,
            false,
        );
        assert!(hovered.contains(&format!("background: {};", tokens.hover_background)));
        assert!(pressed.contains(&format!("background: {};", tokens.active_background)));
    }

    #[test]
    fn disabled_ignores_pointer_and_dims() {
        let set = resolve(Mode::Light);
        let style = button_style(
            &set,
            ButtonVariant::Danger,
            ControlSize::Large,
            PointerState::Pressed,
            true,
        );
        let button = &set.component().button;
        assert!(style.contains(&format!("background: {};", button.danger.background)));
        assert!(style.contains(&format!("opacity: {};", button.disabled_opacity)));
        assert!(style.contains("cursor: not-allowed;"));
    }

    #[test]
    fn size_sets_height() {
        let set = resolve(Mode::Light);
        for size in [ControlSize::Small, ControlSize::Medium, ControlSize::Large] {
            let style = button_style(&set, ButtonVariant::Ghost, size, PointerState::Idle, false);
            let height = set.component().button.size(size).height;
            assert!(style.contains(&format!("height: {};", height)));
        }
    }

    #[test]
    fn icon_button_is_square() {
        let set = resolve(Mode::Light);
        let style = icon_button_style(&set, ControlSize::Medium, PointerState::Idle);
        let side = set.component().button.medium.height;
        assert!(style.contains(&format!("width: {};", side)));
        assert!(style.contains(&format!("height: {};", side)));
    }
}
