//! Transfer list demo with a live readout of the chosen items.

use dioxus::prelude::*;
use strata_tokens::Item;
use strata_ui::TransferList;

use crate::components::DemoSection;
use crate::context::{use_theme, use_tokens};

pub fn sample_languages() -> Vec<Item> {
    [
        ("rust", "Rust"),
        ("go", "Go"),
        ("python", "Python"),
        ("typescript", "TypeScript"),
        ("kotlin", "Kotlin"),
        ("swift", "Swift"),
        ("elixir", "Elixir"),
        ("haskell", "Haskell"),
    ]
    .into_iter()
    .map(|(id, label)| Item::new(id, label))
    .collect()
}

#[component]
pub fn TransferPage() -> Element {
    let tokens = use_tokens();
    let library = use_theme().read().library();
    let mut chosen = use_signal(Vec::<Item>::new);
    let summary = if chosen.read().is_empty() {
        "Nothing selected yet".to_string()
    } else {
        chosen
            .read()
            .iter()
            .map(|item| item.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    rsx! {
        DemoSection {
            tokens: tokens.clone(),
            title: "Transfer List".to_string(),
            caption: "Select items and move them across. Filters narrow each side independently.".to_string(),
            TransferList {
                tokens: tokens.clone(),
                left: sample_languages(),
                library: library,
                onchange: move |(_, right): (Vec<Item>, Vec<Item>)| chosen.set(right),
            }
            p { class: "gallery-caption", "Selected: {summary}" }
        }
    }
}
