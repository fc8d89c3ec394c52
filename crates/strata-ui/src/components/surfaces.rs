//! Surface Components
//!
//! Card, Modal and Tooltip containers.

use std::sync::Arc;

use dioxus::prelude::*;
use strata_tokens::{ControlSize, IconLibrary, TokenSet};

use crate::components::button::CloseButton;
use crate::style::Style;

pub fn card_style(tokens: &TokenSet) -> String {
    let t = &tokens.component().card;
    Style::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("gap", t.gap)
        .set("padding", t.padding.css())
        .set("background", t.background)
        .border(t.border_width, t.border)
        .set("border-radius", t.radius)
        .set("box-shadow", t.shadow)
        .set("color", t.body_color)
        .into_string()
}

/// Dialog width for a size; `Small` and `Large` map to the narrow and wide
/// dialog widths.
pub fn modal_style(tokens: &TokenSet, size: ControlSize) -> String {
    let t = &tokens.component().modal;
    let width = match size {
        ControlSize::Small => t.width_sm,
        ControlSize::Medium => t.width_md,
        ControlSize::Large => t.width_lg,
    };
    Style::new()
        .set("position", "relative")
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("gap", t.gap)
        .set("width", width)
        .set("max-width", "calc(100vw - 32px)")
        .set("padding", t.padding.css())
        .set("background", t.background)
        .set("border-radius", t.radius)
        .set("box-shadow", t.shadow)
        .set("z-index", t.z_index)
        .extend(&t.body.css())
        .set("animation", format!("strata-fade-in {} {}", t.enter.duration, t.enter.easing))
        .into_string()
}

pub fn backdrop_style(tokens: &TokenSet) -> String {
    let t = &tokens.component().modal;
    Style::new()
        .set("position", "fixed")
        .set("inset", "0")
        .set("display", "flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("background", t.backdrop)
        .set("z-index", t.backdrop_z_index)
        .into_string()
}

pub fn tooltip_style(tokens: &TokenSet) -> String {
    let t = &tokens.component().tooltip;
    Style::new()
        .set("position", "absolute")
        .set("bottom", "calc(100% + 4px)")
        .set("left", "50%")
        .set("transform", "translateX(-50%)")
        .set("max-width", t.max_width)
        .set("width", "max-content")
        .set("padding", t.padding.css())
        .set("background", t.background)
        .set("color", t.text)
        .set("font-size", t.font_size)
        .set("border-radius", t.radius)
        .set("z-index", t.z_index)
        .set("pointer-events", "none")
        .set("animation", format!("strata-fade-in {} {}", t.enter.duration, t.enter.easing))
        .into_string()
}

/// Elevated container with an optional title
#[component]
pub fn Card(
    tokens: Arc<TokenSet>,
    #[props(default)] title: Option<String>,
    children: Element,
) -> Element {
    let style = card_style(&tokens);
    let t = &tokens.component().card;
    let title_style = Style::new()
        .set("margin", "0")
        .extend(&t.title.css())
        .set("color", t.title_color)
        .into_string();

    rsx! {
        section { class: "strata-card", style: "{style}",
            if let Some(title) = title {
                h3 { style: "{title_style}", "{title}" }
            }
            {children}
        }
    }
}

/// Properties for the Modal component
#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    pub tokens: Arc<TokenSet>,
    pub show: bool,
    pub title: String,
    pub on_close: EventHandler<()>,
    #[props(default = ControlSize::Medium)]
    pub size: ControlSize,
    #[props(default)]
    pub library: IconLibrary,
    pub children: Element,
}

/// Dialog over a backdrop; clicking the backdrop or pressing Escape closes it
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal {
///         tokens: tokens.clone(),
///         show: show_modal(),
///         title: "Delete file?".to_string(),
///         on_close: move |_| show_modal.set(false),
///         p { "This cannot be undone." }
///     }
/// }
/// ```
#[component]
pub fn Modal(props: ModalProps) -> Element {
    if !props.show {
        return rsx! {};
    }

    let on_close = props.on_close;
    let backdrop = backdrop_style(&props.tokens);
    let dialog = modal_style(&props.tokens, props.size);
    let t = &props.tokens.component().modal;
    let title_style = Style::new()
        .set("margin", "0")
        .extend(&t.title.css())
        .into_string();

    rsx! {
        div {
            class: "strata-modal-backdrop",
            style: "{backdrop}",
            onclick: move |_| on_close.call(()),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "strata-modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{props.title}",
                style: "{dialog}",
                onclick: move |e| e.stop_propagation(),
                div { style: "display: flex; align-items: center; justify-content: space-between;",
                    h2 { style: "{title_style}", "{props.title}" }
                    CloseButton {
                        tokens: props.tokens.clone(),
                        library: props.library,
                        onclick: move |_| on_close.call(()),
                    }
                }
                {props.children}
            }
        }
    }
}

/// Shows `text` above its children while hovered or focused
#[component]
pub fn Tooltip(tokens: Arc<TokenSet>, text: String, children: Element) -> Element {
    let mut visible = use_signal(|| false);
    let style = tooltip_style(&tokens);

    rsx! {
        span {
            class: "strata-tooltip-anchor",
            style: "position: relative; display: inline-flex;",
            onmouseenter: move |_| visible.set(true),
            onmouseleave: move |_| visible.set(false),
            onfocusin: move |_| visible.set(true),
            onfocusout: move |_| visible.set(false),
            {children}
            if visible() {
                span { class: "strata-tooltip", role: "tooltip", style: "{style}", "{text}" }
            }
        }
    }
}
