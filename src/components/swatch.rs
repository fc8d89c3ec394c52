//! Swatch and section helpers shared by the gallery pages.

use std::sync::Arc;

use dioxus::prelude::*;
use strata_tokens::{Color, TokenSet};
use strata_ui::Style;

pub fn swatch_style(tokens: &TokenSet, color: Color) -> String {
    let sem = tokens.semantic();
    Style::new()
        .set("width", "48px")
        .set("height", "32px")
        .set("background", color)
        .border(sem.border.width, sem.border.subtle)
        .set("border-radius", sem.shape.control)
        .into_string()
}

/// A color chip with its token path and value
#[component]
pub fn Swatch(tokens: Arc<TokenSet>, label: String, color: Color) -> Element {
    let chip = swatch_style(&tokens, color);
    let sem = tokens.semantic();
    let caption = Style::new()
        .set("color", sem.text.secondary)
        .extend(&sem.typography.caption.css())
        .into_string();

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 4px; width: 120px;",
            div { style: "{chip}", title: "{color}" }
            span { style: "{caption}", "{label}" }
            code { style: "{caption}", "{color}" }
        }
    }
}

/// Titled block on a gallery page
#[component]
pub fn DemoSection(
    tokens: Arc<TokenSet>,
    title: String,
    #[props(default)] caption: Option<String>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let sem = tokens.semantic();
    let heading = Style::new()
        .extend(&sem.typography.heading.css())
        .set("color", sem.text.primary)
        .into_string();

    rsx! {
        section { class: "gallery-section",
            h2 { style: "{heading}", "{title}" }
            if let Some(caption) = caption {
                p { class: "gallery-caption", "{caption}" }
            }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_tokens::{resolve, Mode};

    #[test]
    fn swatch_paints_its_color() {
        let set = resolve(Mode::Light);
        let color = set.semantic().action.primary;
        assert!(swatch_style(&set, color).contains(&format!("background: {};", color)));
    }
}
