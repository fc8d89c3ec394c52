//! Combo Box Component
//!
//! Text input with a filtered listbox. Arrow keys move a wrapping
//! highlight, Enter commits it, Escape closes the list. The query, matches
//! and highlight live in [`ComboState`].

use std::sync::Arc;

use dioxus::prelude::*;
use strata_tokens::{ComboState, IconLibrary, IconName, TokenSet};

use crate::components::icon::Icon;
use crate::components::input::{field_style, label_style, FieldState};
use crate::style::Style;

/// One rendered option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboOption {
    pub value: String,
    /// Text before, inside and after the query match
    pub segments: (String, String, String),
    pub highlighted: bool,
    pub selected: bool,
}

/// Split `option` around a byte range; out-of-bounds ranges leave it whole.
pub fn split_match(option: &str, range: Option<(usize, usize)>) -> (String, String, String) {
    let whole = || (option.to_string(), String::new(), String::new());
    let Some((start, end)) = range else {
        return whole();
    };
    match (option.get(..start), option.get(start..end), option.get(end..)) {
        (Some(before), Some(hit), Some(after)) => {
            (before.to_string(), hit.to_string(), after.to_string())
        }
        _ => whole(),
    }
}

/// Options to render for the current state.
pub fn combo_options(state: &ComboState) -> Vec<ComboOption> {
    let highlighted = state.highlighted_index();
    state
        .matches()
        .into_iter()
        .enumerate()
        .map(|(i, option)| ComboOption {
            value: option.to_string(),
            segments: split_match(option, state.match_range(option)),
            highlighted: highlighted == Some(i),
            selected: state.selected() == Some(option),
        })
        .collect()
}

pub fn option_style(tokens: &TokenSet, option: &ComboOption) -> String {
    let t = &tokens.component().combo_box;
    let background = if option.highlighted {
        t.option_highlight_background
    } else if option.selected {
        t.option_selected_background
    } else {
        t.listbox_background
    };
    Style::new()
        .set("display", "flex")
        .set("align-items", "center")
        .set("justify-content", "space-between")
        .set("min-height", t.option_height)
        .set("padding", t.option_padding.css())
        .set("background", background)
        .set(
            "color",
            if option.selected {
                t.option_selected_text
            } else {
                t.option_text
            },
        )
        .set("cursor", "pointer")
        .into_string()
}

pub fn listbox_style(tokens: &TokenSet) -> String {
    let t = &tokens.component().combo_box;
    Style::new()
        .set("position", "absolute")
        .set("left", "0")
        .set("right", "0")
        .set("top", format!("calc(100% + {})", t.listbox_offset))
        .set("z-index", t.z_index)
        .set("max-height", t.listbox_max_height)
        .set("overflow-y", "auto")
        .set("margin", "0")
        .set("padding", "0")
        .set("list-style", "none")
        .set("background", t.listbox_background)
        .border(tokens.semantic().border.width, t.listbox_border)
        .set("border-radius", t.listbox_radius)
        .set("box-shadow", t.listbox_shadow)
        .extend(&tokens.semantic().typography.body_small.css())
        .into_string()
}

/// Properties for the ComboBox component
#[derive(Clone, PartialEq, Props)]
pub struct ComboBoxProps {
    pub tokens: Arc<TokenSet>,
    pub options: Vec<String>,
    /// Called when an option is committed
    pub onselect: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = "Type to filter".to_string())]
    pub placeholder: String,
    #[props(default)]
    pub library: IconLibrary,
    /// Listbox id, also used to derive option ids
    #[props(default = "strata-combo".to_string())]
    pub id: String,
}

/// Filterable single-select input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ComboBox {
///         tokens: tokens.clone(),
///         options: vec!["Rust".to_string(), "Ruby".to_string()],
///         onselect: move |lang: String| chosen.set(lang),
///     }
/// }
/// ```
#[component]
pub fn ComboBox(props: ComboBoxProps) -> Element {
    let mut state = use_signal(|| ComboState::new(props.options.clone()));
    let mut focused = use_signal(|| false);
    let onselect = props.onselect;

    let (query, open, options, active) = {
        let current = state.read();
        (
            current.query().to_string(),
            current.is_open(),
            combo_options(&current),
            current.highlighted_index(),
        )
    };
    let listbox_id = format!("{}-listbox", props.id);
    let active_id = active
        .map(|i| format!("{}-option-{}", props.id, i))
        .unwrap_or_default();
    let input_style = field_style(
        &props.tokens,
        FieldState {
            focused: focused(),
            ..FieldState::default()
        },
        false,
    );
    let list_style = listbox_style(&props.tokens);
    let t = &props.tokens.component().combo_box;
    let match_weight = t.match_weight;
    let empty_style = Style::new()
        .set("padding", t.option_padding.css())
        .set("color", t.empty_text)
        .into_string();
    let check_size = props.tokens.component().button.small.icon_size;
    let label_css = label_style(&props.tokens);
    let rows: Vec<(ComboOption, String, String)> = options
        .into_iter()
        .enumerate()
        .map(|(i, option)| {
            let style = option_style(&props.tokens, &option);
            (option, style, format!("{}-option-{}", props.id, i))
        })
        .collect();

    let on_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::ArrowDown => {
            evt.prevent_default();
            state.write().highlight_next();
        }
        Key::ArrowUp => {
            evt.prevent_default();
            state.write().highlight_previous();
        }
        Key::Enter => {
            let choice = state.write().select_highlighted();
            if let Some(choice) = choice {
                evt.prevent_default();
                onselect.call(choice);
            }
        }
        Key::Escape => state.write().close(),
        _ => {}
    };

    rsx! {
        div { class: "strata-combo strata-field", style: "position: relative;",
            if let Some(label) = &props.label {
                label { style: "{label_css}", r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                class: "strata-input",
                style: "{input_style}",
                r#type: "text",
                role: "combobox",
                autocomplete: "off",
                placeholder: "{props.placeholder}",
                value: "{query}",
                "aria-expanded": if open { "true" } else { "false" },
                "aria-controls": "{listbox_id}",
                "aria-autocomplete": "list",
                "aria-activedescendant": "{active_id}",
                onfocus: move |_| {
                    focused.set(true);
                    state.write().open();
                },
                onblur: move |_| {
                    focused.set(false);
                    state.write().close();
                },
                oninput: move |e| state.write().set_query(e.value()),
                onkeydown: on_keydown,
            }
            if open {
                ul { id: "{listbox_id}", role: "listbox", style: "{list_style}",
                    if rows.is_empty() {
                        li { style: "{empty_style}", "No matches" }
                    }
                    for (option, option_css, option_id) in rows {
                        li {
                            key: "{option.value}",
                            id: "{option_id}",
                            role: "option",
                            "aria-selected": if option.selected { "true" } else { "false" },
                            style: "{option_css}",
                            onmousedown: {
                                let value = option.value.clone();
                                move |e: MouseEvent| {
                                    e.prevent_default();
                                    state.write().select(value.clone());
                                    onselect.call(value.clone());
                                }
                            },
                            span {
                                "{option.segments.0}"
                                strong { style: "font-weight: {match_weight};", "{option.segments.1}" }
                                "{option.segments.2}"
                            }
                            if option.selected {
                                Icon { name: IconName::Check, library: props.library, size: check_size }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_tokens::{resolve, Mode};

    #[test]
    fn split_around_match() {
        assert_eq!(
            split_match("Python", Some((2, 4))),
            ("Py".to_string(), "th".to_string(), "on".to_string())
        );
        assert_eq!(
            split_match("Go", None),
            ("Go".to_string(), String::new(), String::new())
        );
        assert_eq!(
            split_match("Go", Some((1, 9))),
            ("Go".to_string(), String::new(), String::new())
        );
    }

    #[test]
    fn options_track_highlight_and_selection() {
        let mut state = ComboState::new(["Rust", "Ruby", "Go"]);
        state.set_query("ru");
        state.highlight_next();
        state.highlight_next();

        let options = combo_options(&state);
        assert_eq!(options.len(), 2);
        assert!(!options[0].highlighted);
        assert!(options[1].highlighted);
        assert_eq!(options[1].segments.1, "Ru");

        state.select_highlighted();
        state.set_query("");
        let options = combo_options(&state);
        assert!(options.iter().any(|o| o.value == "Ruby" && o.selected));
    }

    #[test]
    fn highlighted_option_uses_highlight_background() {
        let set = resolve(Mode::Light);
        let t = &set.component().combo_box;
        let option = ComboOption {
            value: "Rust".to_string(),
            segments: ("Rust".to_string(), String::new(), String::new()),
            highlighted: true,
            selected: true,
        };
        let style = option_style(&set, &option);
        assert!(style.contains(&format!("background: {};", t.option_highlight_background)));
        assert!(style.contains(&format!("color: {};", t.option_selected_text)));
    }

    #[test]
    fn listbox_stacks_above_content() {
        let set = resolve(Mode::Dark);
        let t = &set.component().combo_box;
        let style = listbox_style(&set);
        assert!(style.contains(&format!("z-index: {};", t.z_index)));
        assert!(style.contains(&format!("max-height: {};", t.listbox_max_height)));
    }
}
