//! Form controls and surfaces: buttons, fields, combo box, file drop,
//! card, tooltip and modal.

use dioxus::prelude::*;
use strata_tokens::{ButtonVariant, ControlSize, IconName};
use strata_ui::{
    Button, Card, ComboBox, FileDrop, IconButton, Input, Modal, TextArea, Tooltip,
};

use crate::components::DemoSection;
use crate::context::{use_theme, use_tokens};

pub const BUTTON_VARIANTS: [ButtonVariant; 5] = [
    ButtonVariant::Primary,
    ButtonVariant::Secondary,
    ButtonVariant::Outlined,
    ButtonVariant::Ghost,
    ButtonVariant::Danger,
];

pub const CONTROL_SIZES: [ControlSize; 3] = [ControlSize::Small, ControlSize::Medium, ControlSize::Large];

/// Error for the email field, if any.
pub fn email_error(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.contains('@') {
        None
    } else {
        Some("Enter an address like name@example.com".to_string())
    }
}

pub fn frameworks() -> Vec<String> {
    [
        "Actix", "Axum", "Bevy", "Dioxus", "Leptos", "Rocket", "Tauri", "Tokio", "Warp", "Yew",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

#[component]
pub fn FormsPage() -> Element {
    let tokens = use_tokens();
    let library = use_theme().read().library();
    let mut clicks = use_signal(|| 0u32);
    let mut email = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut framework = use_signal(|| None::<String>);
    let mut files = use_signal(Vec::<String>::new);
    let mut show_modal = use_signal(|| false);

    let error = email_error(&email());
    let picked = framework().unwrap_or_else(|| "none".to_string());
    let dropped = if files.read().is_empty() {
        "No files yet".to_string()
    } else {
        files.read().join(", ")
    };
    let grid: Vec<(ControlSize, Vec<ButtonVariant>)> = CONTROL_SIZES
        .into_iter()
        .map(|size| (size, BUTTON_VARIANTS.to_vec()))
        .collect();
    let clicked = clicks();

    rsx! {
        DemoSection {
            tokens: tokens.clone(),
            title: "Buttons".to_string(),
            caption: format!("Clicked {} times", clicked),
            for (size, variants) in grid {
                div { class: "gallery-row",
                    for variant in variants {
                        Button {
                            tokens: tokens.clone(),
                            variant: variant,
                            size: size,
                            onclick: move |_| clicks += 1,
                            "{variant}"
                        }
                    }
                }
            }
            div { class: "gallery-row",
                Button { tokens: tokens.clone(), disabled: true, "Disabled" }
                IconButton {
                    tokens: tokens.clone(),
                    icon: IconName::Plus,
                    library: library,
                    aria_label: "Add".to_string(),
                    onclick: move |_| clicks += 1,
                }
                Tooltip { tokens: tokens.clone(), text: "Downloads the current theme".to_string(),
                    IconButton {
                        tokens: tokens.clone(),
                        icon: IconName::Download,
                        library: library,
                        aria_label: "Download".to_string(),
                        onclick: move |_| clicks += 1,
                    }
                }
            }
        }

        DemoSection { tokens: tokens.clone(), title: "Fields".to_string(),
            div { style: "display: grid; grid-template-columns: repeat(2, minmax(0, 320px)); gap: 16px;",
                Input {
                    tokens: tokens.clone(),
                    value: email(),
                    oninput: move |value| email.set(value),
                    label: "Email".to_string(),
                    hint: "required".to_string(),
                    placeholder: "name@example.com".to_string(),
                    helper: "We never share it.".to_string(),
                    error: error.clone().unwrap_or_default(),
                    input_type: "email".to_string(),
                    required: true,
                }
                Input {
                    tokens: tokens.clone(),
                    value: "read only".to_string(),
                    oninput: move |_| {},
                    label: "Disabled".to_string(),
                    disabled: true,
                }
                TextArea {
                    tokens: tokens.clone(),
                    value: notes(),
                    oninput: move |value| notes.set(value),
                    label: "Notes".to_string(),
                    placeholder: "Anything else?".to_string(),
                }
                ComboBox {
                    tokens: tokens.clone(),
                    options: frameworks(),
                    label: "Framework".to_string(),
                    library: library,
                    onselect: move |value: String| framework.set(Some(value)),
                }
            }
            p { class: "gallery-caption", "Framework: {picked}" }
        }

        DemoSection { tokens: tokens.clone(), title: "File drop".to_string(),
            FileDrop {
                tokens: tokens.clone(),
                library: library,
                onfiles: move |names: Vec<String>| files.set(names),
            }
            p { class: "gallery-caption", "{dropped}" }
        }

        DemoSection { tokens: tokens.clone(), title: "Surfaces".to_string(),
            div { class: "gallery-row", style: "align-items: stretch;",
                Card { tokens: tokens.clone(), title: "Card".to_string(),
                    p { style: "margin: 0;", "Raised container for grouped content." }
                    Button {
                        tokens: tokens.clone(),
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| show_modal.set(true),
                        "Open modal"
                    }
                }
            }
            Modal {
                tokens: tokens.clone(),
                show: show_modal(),
                title: "Discard changes?".to_string(),
                library: library,
                on_close: move |_| show_modal.set(false),
                p { style: "margin: 0;", "Unsaved edits to this theme will be lost." }
                div { class: "gallery-row", style: "justify-content: flex-end;",
                    Button {
                        tokens: tokens.clone(),
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| show_modal.set(false),
                        "Cancel"
                    }
                    Button {
                        tokens: tokens.clone(),
                        variant: ButtonVariant::Danger,
                        onclick: move |_| show_modal.set(false),
                        "Discard"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_error_only_for_malformed_input() {
        assert_eq!(email_error(""), None);
        assert_eq!(email_error("me@example.com"), None);
        assert!(email_error("me.example.com").is_some());
    }

    #[test]
    fn framework_options_are_sorted() {
        let options = frameworks();
        let mut sorted = options.clone();
        sorted.sort();
        assert_eq!(options, sorted);
    }
}
