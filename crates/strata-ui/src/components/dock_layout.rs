//! Dock Layout Component
//!
//! Panels docked into left, center, right and bottom zones. Panel headers
//! are HTML5 drag sources and every zone is a drop target; collapse and
//! close buttons sit in each header. [`DockState`] owns the layout.

use std::sync::Arc;

use dioxus::prelude::*;
use strata_tokens::{DockPanel, DockState, DockZone, IconLibrary, IconName, TokenSet};

use crate::components::button::IconButton;
use crate::style::Style;

/// CSS grid area name for a zone.
pub fn grid_area(zone: DockZone) -> &'static str {
    zone.as_str()
}

/// Outer grid: side columns shrink to the collapsed width when every panel
/// in them is collapsed or the zone is empty.
pub fn layout_style(tokens: &TokenSet, state: &DockState) -> String {
    let t = &tokens.component().dock;
    let column = |zone: DockZone| {
        let panels = state.panels_in(zone);
        if panels.is_empty() {
            "min-content".to_string()
        } else if panels.iter().all(|p| p.collapsed) {
            t.collapsed_size.to_string()
        } else {
            format!("minmax({}, {})", t.panel_min_width, t.panel_width)
        }
    };
    Style::new()
        .set("display", "grid")
        .set(
            "grid-template-columns",
            format!("{} 1fr {}", column(DockZone::Left), column(DockZone::Right)),
        )
        .set("grid-template-rows", "1fr auto")
        .set(
            "grid-template-areas",
            "\"left center right\" \"bottom bottom bottom\"",
        )
        .set("gap", t.divider_width)
        .set("background", t.divider)
        .set("height", "100%")
        .set("min-height", "0")
        .into_string()
}

/// Style for one zone, highlighted while a drag hovers it.
pub fn zone_style(tokens: &TokenSet, zone: DockZone, drop_target: bool) -> String {
    let t = &tokens.component().dock;
    let style = Style::new()
        .set("grid-area", grid_area(zone))
        .set("display", "flex")
        .set(
            "flex-direction",
            if zone == DockZone::Bottom { "row" } else { "column" },
        )
        .set("gap", t.divider_width)
        .set("min-width", "0")
        .set("min-height", t.collapsed_size);
    if drop_target {
        style
            .set("background", t.drop_zone)
            .set(
                "outline",
                format!("{} dashed {}", t.drop_zone_border_width, t.drop_zone_border),
            )
            .set("outline-offset", format!("-{}", t.drop_zone_border_width))
            .into_string()
    } else {
        style.set("background", t.background).into_string()
    }
}

/// Style for one panel, dimmed while it is the drag source.
pub fn panel_style(tokens: &TokenSet, dragging: bool) -> String {
    let t = &tokens.component().dock;
    Style::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("flex", "1 1 0")
        .set("min-width", "0")
        .set("background", t.panel_background)
        .border(t.divider_width, t.panel_border)
        .set("border-radius", t.radius)
        .set("overflow", "hidden")
        .set_if(dragging, "opacity", t.dragging_opacity)
        .transition(&["opacity"], &t.transition)
        .into_string()
}

pub fn header_style(tokens: &TokenSet) -> String {
    let t = &tokens.component().dock;
    Style::new()
        .set("display", "flex")
        .set("align-items", "center")
        .set("justify-content", "space-between")
        .set("height", t.header_height)
        .set("padding", t.header_padding.css())
        .set("background", t.header_background)
        .set("color", t.header_text)
        .extend(&t.header_font.css())
        .set("cursor", "grab")
        .set("user-select", "none")
        .into_string()
}

/// Properties for the DockLayout component
#[derive(Clone, PartialEq, Props)]
pub struct DockLayoutProps {
    pub tokens: Arc<TokenSet>,
    /// Initial panels
    pub panels: Vec<DockPanel>,
    /// Renders a panel body from its id
    pub content: Callback<String, Element>,
    #[props(default)]
    pub library: IconLibrary,
    /// Called with the full panel list after every change
    #[props(default)]
    pub onchange: Option<EventHandler<Vec<DockPanel>>>,
}

/// Drag-and-drop dock of panels
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     DockLayout {
///         tokens: tokens.clone(),
///         panels: vec![
///             DockPanel::new("files", "Files", DockZone::Left),
///             DockPanel::new("editor", "Editor", DockZone::Center),
///         ],
///         content: move |id: String| rsx! { p { "{id}" } },
///     }
/// }
/// ```
#[component]
pub fn DockLayout(props: DockLayoutProps) -> Element {
    let mut state = use_signal(|| DockState::new(props.panels.clone()));
    let mut drop_target = use_signal(|| None::<DockZone>);
    let onchange = props.onchange;

    let notify = move || {
        if let Some(handler) = &onchange {
            handler.call(state.read().panels().to_vec());
        }
    };

    let (layout, dragging, zones) = {
        let current = state.read();
        let zones: Vec<(DockZone, String, Vec<DockPanel>)> = DockZone::ALL
            .into_iter()
            .map(|zone| {
                let style = zone_style(&props.tokens, zone, drop_target() == Some(zone));
                let panels = current.panels_in(zone).into_iter().cloned().collect();
                (zone, style, panels)
            })
            .collect();
        (
            layout_style(&props.tokens, &current),
            current.dragging().map(str::to_string),
            zones,
        )
    };

    rsx! {
        div { class: "strata-dock", style: "{layout}",
            for (zone, zone_css, panels) in zones {
                div {
                    key: "{zone}",
                    class: "strata-dock-zone strata-dock-{zone}",
                    style: "{zone_css}",
                    "aria-label": "{zone} dock",
                    ondragenter: move |e| {
                        e.prevent_default();
                        drop_target.set(Some(zone));
                    },
                    ondragover: move |e| e.prevent_default(),
                    ondragleave: move |_| {
                        if drop_target() == Some(zone) {
                            drop_target.set(None);
                        }
                    },
                    ondrop: move |e| {
                        e.prevent_default();
                        drop_target.set(None);
                        let docked = state.write().drop_into(zone);
                        if docked {
                            notify();
                        }
                    },
                    for panel in panels {
                        DockPanelView {
                            key: "{panel.id}",
                            tokens: props.tokens.clone(),
                            library: props.library,
                            dragging: dragging.as_deref() == Some(panel.id.as_str()),
                            body: props.content.call(panel.id.clone()),
                            panel: panel.clone(),
                            on_drag_start: move |id: String| {
                                state.write().begin_drag(&id);
                            },
                            on_drag_end: move |_| {
                                drop_target.set(None);
                                state.write().cancel_drag();
                            },
                            on_toggle: move |id: String| {
                                state.write().toggle_collapsed(&id);
                                notify();
                            },
                            on_close: move |id: String| {
                                state.write().close(&id);
                                notify();
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DockPanelView(
    tokens: Arc<TokenSet>,
    panel: DockPanel,
    library: IconLibrary,
    dragging: bool,
    body: Element,
    on_drag_start: EventHandler<String>,
    on_drag_end: EventHandler<()>,
    on_toggle: EventHandler<String>,
    on_close: EventHandler<String>,
) -> Element {
    let style = panel_style(&tokens, dragging);
    let header = header_style(&tokens);
    let body_style = Style::new()
        .set("flex", "1")
        .set("overflow", "auto")
        .set("padding", tokens.semantic().space.inset_sm.css())
        .set("color", tokens.semantic().text.primary)
        .into_string();
    let collapse_icon = if panel.collapsed {
        IconName::ChevronDown
    } else {
        IconName::ChevronUp
    };
    let collapse_label = if panel.collapsed {
        format!("Expand {}", panel.title)
    } else {
        format!("Collapse {}", panel.title)
    };
    let drag_id = panel.id.clone();
    let toggle_id = panel.id.clone();
    let close_id = panel.id.clone();

    rsx! {
        section {
            class: "strata-dock-panel",
            style: "{style}",
            "aria-label": "{panel.title}",
            div {
                style: "{header}",
                draggable: "true",
                ondragstart: move |_| on_drag_start.call(drag_id.clone()),
                ondragend: move |_| on_drag_end.call(()),
                span { "{panel.title}" }
                div { style: "display: flex;",
                    IconButton {
                        tokens: tokens.clone(),
                        icon: collapse_icon,
                        library: library,
                        size: strata_tokens::ControlSize::Small,
                        aria_label: collapse_label,
                        onclick: move |_| on_toggle.call(toggle_id.clone()),
                    }
                    IconButton {
                        tokens: tokens.clone(),
                        icon: IconName::Close,
                        library: library,
                        size: strata_tokens::ControlSize::Small,
                        aria_label: format!("Close {}", panel.title),
                        onclick: move |_| on_close.call(close_id.clone()),
                    }
                }
            }
            if !panel.collapsed {
                div { style: "{body_style}", {body} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_tokens::{resolve, Mode};

    fn dock() -> DockState {
        DockState::new(vec![
            DockPanel::new("files", "Files", DockZone::Left),
            DockPanel::new("editor", "Editor", DockZone::Center),
        ])
    }

    #[test]
    fn empty_side_zone_is_min_content() {
        let set = resolve(Mode::Light);
        let style = layout_style(&set, &dock());
        let t = &set.component().dock;
        let expected = format!(
            "grid-template-columns: minmax({}, {}) 1fr min-content;",
            t.panel_min_width, t.panel_width
        );
        assert!(style.contains(&expected), "{}", style);
    }

    #[test]
    fn collapsed_zone_shrinks() {
        let set = resolve(Mode::Light);
        let mut state = dock();
        state.toggle_collapsed("files");
        let style = layout_style(&set, &state);
        let collapsed = set.component().dock.collapsed_size;
        assert!(style.contains(&format!("grid-template-columns: {} 1fr", collapsed)));
    }

    #[test]
    fn drop_target_is_highlighted() {
        let set = resolve(Mode::Dark);
        let t = &set.component().dock;
        let active = zone_style(&set, DockZone::Right, true);
        let idle = zone_style(&set, DockZone::Right, false);
        assert!(active.contains(&format!("background: {};", t.drop_zone)));
        assert!(active.contains("dashed"));
        assert!(idle.contains(&format!("background: {};", t.background)));
        assert!(idle.contains("grid-area: right;"));
    }

    #[test]
    fn dragged_panel_is_dimmed() {
        let set = resolve(Mode::Light);
        let opacity = set.component().dock.dragging_opacity;
        assert!(panel_style(&set, true).contains(&format!("opacity: {};", opacity)));
        assert!(!panel_style(&set, false).contains("opacity:"));
    }

    #[test]
    fn bottom_zone_lays_out_in_a_row() {
        let set = resolve(Mode::Light);
        assert!(zone_style(&set, DockZone::Bottom, false).contains("flex-direction: row;"));
        assert!(zone_style(&set, DockZone::Left, false).contains("flex-direction: column;"));
    }
}
