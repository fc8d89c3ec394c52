//! Transfer List Component
//!
//! Two filterable lists with per-item selection and four move controls.
//! All list logic lives in [`TransferState`]; this module only renders it
//! and forwards clicks.

use std::sync::Arc;

use dioxus::prelude::*;
use strata_tokens::{
    ButtonVariant, ControlSize, IconLibrary, IconName, Item, Side, TokenSet, TransferState,
};

use crate::components::button::Button;
use crate::components::icon::Icon;
use crate::style::Style;

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRow {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

/// Rows currently visible on `side`.
pub fn visible_rows(state: &TransferState<Item>, side: Side) -> Vec<TransferRow> {
    state
        .visible(side)
        .into_iter()
        .map(|item| TransferRow {
            id: item.id.clone(),
            label: item.label.clone(),
            selected: state.is_selected(&item.id),
        })
        .collect()
}

/// Run one move on `state` and return both sides afterwards.
pub fn apply_move(
    state: &mut TransferState<Item>,
    op: fn(&mut TransferState<Item>),
) -> (Vec<Item>, Vec<Item>) {
    op(state);
    (
        state.items(Side::Left).to_vec(),
        state.items(Side::Right).to_vec(),
    )
}

/// Pane header text: `"Available (2/5)"` while something is selected.
pub fn pane_heading(title: &str, selected: usize, total: usize) -> String {
    if selected > 0 {
        format!("{} ({}/{})", title, selected, total)
    } else {
        format!("{} ({})", title, total)
    }
}

pub fn row_style(tokens: &TokenSet, selected: bool, hovered: bool) -> String {
    let t = &tokens.component().transfer_list;
    let background = if selected {
        t.item_selected_background
    } else if hovered {
        t.item_hover_background
    } else {
        tokens.semantic().background.elevated
    };
    Style::new()
        .set("display", "flex")
        .set("align-items", "center")
        .set("box-sizing", "border-box")
        .set("width", "100%")
        .set("min-height", t.item_height)
        .set("padding", t.item_padding.css())
        .set("border", "none")
        .set("text-align", "left")
        .set("cursor", "pointer")
        .set("background", background)
        .set("color", if selected { t.item_selected_text } else { t.item_text })
        .extend(&tokens.semantic().typography.body_small.css())
        .into_string()
}

pub fn pane_style(tokens: &TokenSet) -> String {
    let t = &tokens.component().transfer_list;
    Style::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("width", t.list_width)
        .set("height", t.list_height)
        .set("background", t.list_background)
        .border(t.list_border_width, t.list_border)
        .set("border-radius", t.list_radius)
        .set("overflow", "hidden")
        .into_string()
}

/// Properties for the TransferList component
#[derive(Clone, PartialEq, Props)]
pub struct TransferListProps {
    pub tokens: Arc<TokenSet>,
    /// Initial left-hand items
    pub left: Vec<Item>,
    /// Initial right-hand items
    #[props(default)]
    pub right: Vec<Item>,
    #[props(default = "Available".to_string())]
    pub left_title: String,
    #[props(default = "Selected".to_string())]
    pub right_title: String,
    #[props(default)]
    pub library: IconLibrary,
    /// Called with `(left, right)` after every move
    #[props(default)]
    pub onchange: Option<EventHandler<(Vec<Item>, Vec<Item>)>>,
}

/// Dual list with move-selected and move-all controls
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TransferList {
///         tokens: tokens.clone(),
///         left: vec![Item::new("rust", "Rust"), Item::new("go", "Go")],
///         onchange: move |(_, right): (Vec<Item>, Vec<Item>)| chosen.set(right),
///     }
/// }
/// ```
#[component]
pub fn TransferList(props: TransferListProps) -> Element {
    let mut state = use_signal(|| TransferState::new(props.left.clone(), props.right.clone()));
    let onchange = props.onchange;

    let mut apply = move |op: fn(&mut TransferState<Item>)| {
        let sides = apply_move(&mut state.write(), op);
        if let Some(handler) = &onchange {
            handler.call(sides);
        }
    };

    let (left_rows, right_rows, left_selected, right_selected, left_total, right_total, left_filter, right_filter) = {
        let current = state.read();
        (
            visible_rows(&current, Side::Left),
            visible_rows(&current, Side::Right),
            current.selected_count(Side::Left),
            current.selected_count(Side::Right),
            current.items(Side::Left).len(),
            current.items(Side::Right).len(),
            current.filter(Side::Left).to_string(),
            current.filter(Side::Right).to_string(),
        )
    };

    let t = &props.tokens.component().transfer_list;
    let layout = Style::new()
        .set("display", "flex")
        .set("align-items", "center")
        .set("gap", t.gap)
        .into_string();
    let controls = Style::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("gap", t.control_gap)
        .into_string();
    let icon_size = props.tokens.component().button.small.icon_size;

    rsx! {
        div { class: "strata-transfer", style: "{layout}",
            TransferPane {
                tokens: props.tokens.clone(),
                side: Side::Left,
                heading: pane_heading(&props.left_title, left_selected, left_total),
                rows: left_rows,
                filter: left_filter,
                on_toggle: move |id: String| state.write().toggle_selected(&id),
                on_filter: move |f: String| state.write().set_filter(Side::Left, f),
            }
            div { style: "{controls}", role: "group", "aria-label": "Move items",
                Button {
                    tokens: props.tokens.clone(),
                    variant: ButtonVariant::Outlined,
                    size: ControlSize::Small,
                    disabled: left_total == 0,
                    onclick: move |_| apply(TransferState::move_all_right),
                    Icon { name: IconName::ChevronsRight, library: props.library, size: icon_size, aria_label: "Move all right".to_string() }
                }
                Button {
                    tokens: props.tokens.clone(),
                    variant: ButtonVariant::Outlined,
                    size: ControlSize::Small,
                    disabled: left_selected == 0,
                    onclick: move |_| apply(TransferState::move_selected_right),
                    Icon { name: IconName::ChevronRight, library: props.library, size: icon_size, aria_label: "Move selected right".to_string() }
                }
                Button {
                    tokens: props.tokens.clone(),
                    variant: ButtonVariant::Outlined,
                    size: ControlSize::Small,
                    disabled: right_selected == 0,
                    onclick: move |_| apply(TransferState::move_selected_left),
                    Icon { name: IconName::ChevronLeft, library: props.library, size: icon_size, aria_label: "Move selected left".to_string() }
                }
                Button {
                    tokens: props.tokens.clone(),
                    variant: ButtonVariant::Outlined,
                    size: ControlSize::Small,
                    disabled: right_total == 0,
                    onclick: move |_| apply(TransferState::move_all_left),
                    Icon { name: IconName::ChevronsLeft, library: props.library, size: icon_size, aria_label: "Move all left".to_string() }
                }
            }
            TransferPane {
                tokens: props.tokens.clone(),
                side: Side::Right,
                heading: pane_heading(&props.right_title, right_selected, right_total),
                rows: right_rows,
                filter: right_filter,
                on_toggle: move |id: String| state.write().toggle_selected(&id),
                on_filter: move |f: String| state.write().set_filter(Side::Right, f),
            }
        }
    }
}

#[component]
fn TransferPane(
    tokens: Arc<TokenSet>,
    side: Side,
    heading: String,
    rows: Vec<TransferRow>,
    filter: String,
    on_toggle: EventHandler<String>,
    on_filter: EventHandler<String>,
) -> Element {
    let t = &tokens.component().transfer_list;
    let input = &tokens.component().input;
    let header = Style::new()
        .set("padding", t.header_padding.css())
        .set("background", t.header_background)
        .set("color", t.header_text)
        .extend(&t.header_font.css())
        .set("border-bottom", format!("{} solid {}", t.list_border_width, t.list_border))
        .into_string();
    let filter_style = Style::new()
        .set("box-sizing", "border-box")
        .set("width", "100%")
        .set("height", t.filter_height)
        .set("padding", input.padding.css())
        .set("border", "none")
        .set("border-bottom", format!("{} solid {}", t.list_border_width, t.list_border))
        .set("background", input.background)
        .set("color", input.text)
        .set("outline", "none")
        .into_string();
    let empty = Style::new()
        .set("padding", t.item_padding.css())
        .set("color", t.empty_text)
        .set("font-style", "italic")
        .into_string();
    let pane = pane_style(&tokens);

    rsx! {
        div { class: "strata-transfer-pane strata-transfer-{side}", style: "{pane}",
            div { style: "{header}", "{heading}" }
            input {
                style: "{filter_style}",
                r#type: "search",
                placeholder: "Filter",
                "aria-label": "Filter {heading}",
                value: "{filter}",
                oninput: move |e| on_filter.call(e.value()),
            }
            div {
                role: "listbox",
                "aria-multiselectable": "true",
                style: "flex: 1; overflow-y: auto;",
                if rows.is_empty() {
                    div { style: "{empty}", "No items" }
                }
                for row in rows {
                    TransferRowView {
                        key: "{row.id}",
                        tokens: tokens.clone(),
                        row: row.clone(),
                        on_toggle: on_toggle,
                    }
                }
            }
        }
    }
}

#[component]
fn TransferRowView(tokens: Arc<TokenSet>, row: TransferRow, on_toggle: EventHandler<String>) -> Element {
    let mut hovered = use_signal(|| false);
    let style = row_style(&tokens, row.selected, hovered());
    let id = row.id.clone();

    rsx! {
        button {
            r#type: "button",
            role: "option",
            "aria-selected": if row.selected { "true" } else { "false" },
            style: "{style}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            onclick: move |_| on_toggle.call(id.clone()),
            "{row.label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_tokens::{resolve, Mode};

    fn sample() -> TransferState<Item> {
        TransferState::new(
            vec![
                Item::new("a", "Alpha"),
                Item::new("b", "Beta"),
                Item::new("c", "Gamma"),
            ],
            vec![],
        )
    }

    #[test]
    fn rows_follow_filter_and_selection() {
        let mut state = sample();
        state.toggle_selected("b");
        state.set_filter(Side::Left, "a");

        let rows = visible_rows(&state, Side::Left);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(rows[1].selected);
        assert!(!rows[0].selected);

        state.set_filter(Side::Left, "gam");
        assert_eq!(visible_rows(&state, Side::Left).len(), 1);
    }

    #[test]
    fn moves_report_both_sides() {
        let mut state = sample();
        let (left, right) = apply_move(&mut state, TransferState::move_all_right);
        assert!(left.is_empty());
        let ids: Vec<&str> = right.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        state.toggle_selected("b");
        let (left, right) = apply_move(&mut state, TransferState::move_selected_left);
        assert_eq!(left, vec![Item::new("b", "Beta")]);
        assert_eq!(right.len(), 2);
    }

    #[test]
    fn heading_shows_selection() {
        assert_eq!(pane_heading("Available", 0, 5), "Available (5)");
        assert_eq!(pane_heading("Available", 2, 5), "Available (2/5)");
    }

    #[test]
    fn selected_row_wins_over_hover() {
        let set = resolve(Mode::Light);
        let t = &set.component().transfer_list;
        let style = row_style(&set, true, true);
        assert!(style.contains(&format!("background: {};", t.item_selected_background)));
        let style = row_style(&set, false, true);
        assert!(style.contains(&format!("background: {};", t.item_hover_background)));
    }

    #[test]
    fn pane_uses_list_size() {
        let set = resolve(Mode::Dark);
        let t = &set.component().transfer_list;
        let style = pane_style(&set);
        assert!(style.contains(&format!("width: {};", t.list_width)));
        assert!(style.contains(&format!("height: {};", t.list_height)));
    }
}
