//! Illustrated messages for every illustration.

use dioxus::prelude::*;
use strata_tokens::{ButtonVariant, ControlSize, Illustration};
use strata_ui::{Button, IllustratedMessage, IllustratedMessageByName};

use crate::components::DemoSection;
use crate::context::{use_theme, use_tokens};

#[component]
pub fn IllustrationsPage() -> Element {
    let tokens = use_tokens();
    let library = use_theme().read().library();
    let mut compact = use_signal(|| false);
    let toggle_label = if compact() { "Full size" } else { "Compact" };

    rsx! {
        DemoSection {
            tokens: tokens.clone(),
            title: "Illustrated Messages".to_string(),
            caption: "Default copy comes with each illustration and can be overridden.".to_string(),
            Button {
                tokens: tokens.clone(),
                variant: ButtonVariant::Outlined,
                size: ControlSize::Small,
                onclick: move |_| compact.set(!compact()),
                "{toggle_label}"
            }
        }

        div { class: "gallery-row", style: "align-items: flex-start;",
            for illustration in Illustration::ALL {
                IllustratedMessage {
                    key: "{illustration}",
                    tokens: tokens.clone(),
                    illustration: illustration,
                    compact: compact(),
                    library: library,
                }
            }
        }

        DemoSection { tokens: tokens.clone(), title: "With overrides and actions".to_string(),
            IllustratedMessage {
                tokens: tokens.clone(),
                illustration: Illustration::NoResults,
                library: library,
                heading: "No matching widgets".to_string(),
                body: "Try a different filter or clear it to see everything.".to_string(),
                Button { tokens: tokens.clone(), variant: ButtonVariant::Primary, "Clear filter" }
                Button { tokens: tokens.clone(), variant: ButtonVariant::Ghost, "Help" }
            }
        }

        DemoSection {
            tokens: tokens.clone(),
            title: "Lookup by name".to_string(),
            caption: "\"offline\" resolves; \"haunted\" renders nothing.".to_string(),
            IllustratedMessageByName { tokens: tokens.clone(), name: "offline".to_string(), compact: true, library: library }
            IllustratedMessageByName { tokens: tokens.clone(), name: "haunted".to_string() }
        }
    }
}
