//! Illustrated Message Component
//!
//! Empty, error and success states: artwork, a heading, body copy and an
//! optional row of actions. Copy defaults to [`Illustration::content`].

use std::sync::Arc;

use dioxus::prelude::*;
use strata_tokens::illustration::Layer;
use strata_tokens::{lookup_illustration, IconLibrary, Illustration, TokenSet};

use crate::components::icon::Icon;
use crate::style::Style;

/// `(fill, stroke)` for one artwork layer.
pub fn layer_paint(tokens: &TokenSet, layer: Layer) -> (String, String) {
    let t = &tokens.component().illustrated_message;
    match layer {
        Layer::Accent => (t.accent.to_string(), "none".to_string()),
        Layer::Outline => ("none".to_string(), t.illustration_color.to_string()),
    }
}

/// Heading and body after applying overrides.
pub fn message_copy(
    illustration: Illustration,
    heading: Option<&str>,
    body: Option<&str>,
) -> (String, String) {
    let defaults = illustration.content();
    (
        heading.unwrap_or(defaults.heading).to_string(),
        body.unwrap_or(defaults.body).to_string(),
    )
}

pub fn container_style(tokens: &TokenSet) -> String {
    let t = &tokens.component().illustrated_message;
    Style::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("align-items", "center")
        .set("text-align", "center")
        .set("gap", t.gap)
        .set("max-width", t.max_width)
        .set("margin", "0 auto")
        .set("padding", t.padding.css())
        .into_string()
}

/// Badge pinned to the bottom-right corner of the artwork.
pub fn badge_style(tokens: &TokenSet) -> String {
    let t = &tokens.component().illustrated_message;
    Style::new()
        .set("position", "absolute")
        .set("right", "0")
        .set("bottom", "0")
        .set("display", "flex")
        .set("color", t.badge_color)
        .into_string()
}

/// Properties for the IllustratedMessage component
#[derive(Clone, PartialEq, Props)]
pub struct IllustratedMessageProps {
    pub tokens: Arc<TokenSet>,
    pub illustration: Illustration,
    /// Replaces the default heading
    #[props(default)]
    pub heading: Option<String>,
    /// Replaces the default body copy
    #[props(default)]
    pub body: Option<String>,
    /// Smaller artwork for inline empty states
    #[props(default = false)]
    pub compact: bool,
    /// Library for the badge icon
    #[props(default)]
    pub library: IconLibrary,
    /// Action buttons shown under the copy
    #[props(default = VNode::empty())]
    pub children: Element,
}

/// Illustrated empty, error or success state
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IllustratedMessage {
///         tokens: tokens.clone(),
///         illustration: Illustration::NoResults,
///         Button { tokens: tokens.clone(), "Clear filters" }
///     }
/// }
/// ```
#[component]
pub fn IllustratedMessage(props: IllustratedMessageProps) -> Element {
    let t = &props.tokens.component().illustrated_message;
    let (heading, body) = message_copy(
        props.illustration,
        props.heading.as_deref(),
        props.body.as_deref(),
    );
    let size = if props.compact {
        t.illustration_size_compact
    } else {
        t.illustration_size
    };
    let paths: Vec<(String, String, &'static str)> = props
        .illustration
        .artwork()
        .iter()
        .map(|(layer, d)| {
            let (fill, stroke) = layer_paint(&props.tokens, *layer);
            (fill, stroke, *d)
        })
        .collect();
    let style = container_style(&props.tokens);
    let artwork_style = Style::new()
        .set("position", "relative")
        .set("width", size)
        .set("height", size)
        .into_string();
    let badge = badge_style(&props.tokens);
    let badge_icon = props.illustration.badge();
    let badge_size = t.badge_size;
    let badge_color = t.badge_color;
    let heading_style = Style::new()
        .set("margin", "0")
        .extend(&t.heading.css())
        .set("color", t.heading_color)
        .into_string();
    let body_style = Style::new()
        .set("margin", "0")
        .extend(&t.body.css())
        .set("color", t.body_color)
        .into_string();
    let actions_style = Style::new()
        .set("display", "flex")
        .set("gap", t.actions_gap)
        .set("justify-content", "center")
        .into_string();
    let class = format!("strata-illustrated strata-illustrated-{}", props.illustration);

    rsx! {
        div { class: "{class}", style: "{style}",
            div { style: "{artwork_style}",
                svg {
                    view_box: Illustration::VIEW_BOX,
                    width: "{size}",
                    height: "{size}",
                    stroke_width: "6",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    "aria-hidden": "true",
                    for (fill, stroke, d) in paths {
                        path { d: d, fill: "{fill}", stroke: "{stroke}" }
                    }
                }
                span { style: "{badge}",
                    Icon { name: badge_icon, library: props.library, size: badge_size, color: badge_color }
                }
            }
            h3 { style: "{heading_style}", "{heading}" }
            p { style: "{body_style}", "{body}" }
            div { style: "{actions_style}", {props.children} }
        }
    }
}

/// Properties for the IllustratedMessageByName component
#[derive(Clone, PartialEq, Props)]
pub struct IllustratedMessageByNameProps {
    pub tokens: Arc<TokenSet>,
    /// Kebab- or snake-case illustration name
    pub name: String,
    #[props(default)]
    pub heading: Option<String>,
    #[props(default)]
    pub body: Option<String>,
    #[props(default = false)]
    pub compact: bool,
    #[props(default)]
    pub library: IconLibrary,
    #[props(default = VNode::empty())]
    pub children: Element,
}

/// Illustrated message looked up by string; unknown names render nothing
#[component]
pub fn IllustratedMessageByName(props: IllustratedMessageByNameProps) -> Element {
    let Some(illustration) = lookup_illustration(&props.name) else {
        return rsx! {};
    };
    let (heading, body) = message_copy(illustration, props.heading.as_deref(), props.body.as_deref());

    rsx! {
        IllustratedMessage {
            tokens: props.tokens.clone(),
            illustration: illustration,
            heading: heading,
            body: body,
            compact: props.compact,
            library: props.library,
            {props.children}
        }
    }
}
