//! Dock layout demo: drag panel headers between zones.

use dioxus::prelude::*;
use strata_tokens::{DockPanel, DockZone};
use strata_ui::DockLayout;

use crate::components::DemoSection;
use crate::context::{use_theme, use_tokens};

pub fn sample_panels() -> Vec<DockPanel> {
    vec![
        DockPanel::new("explorer", "Explorer", DockZone::Left),
        DockPanel::new("outline", "Outline", DockZone::Left),
        DockPanel::new("editor", "Editor", DockZone::Center),
        DockPanel::new("inspector", "Inspector", DockZone::Right),
        DockPanel::new("terminal", "Terminal", DockZone::Bottom),
        DockPanel::new("problems", "Problems", DockZone::Bottom),
    ]
}

/// Zone counts as `"left 2 · center 1 · ..."`.
pub fn zone_summary(panels: &[DockPanel]) -> String {
    DockZone::ALL
        .into_iter()
        .map(|zone| {
            let count = panels.iter().filter(|p| p.zone == zone).count();
            format!("{} {}", zone, count)
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

#[component]
pub fn DockPage() -> Element {
    let tokens = use_tokens();
    let library = use_theme().read().library();
    let mut layout = use_signal(sample_panels);
    let summary = zone_summary(&layout.read());

    rsx! {
        DemoSection {
            tokens: tokens.clone(),
            title: "Dock Layout".to_string(),
            caption: "Drag a panel header into another zone. Collapse and close from the header.".to_string(),
            p { class: "gallery-caption", "{summary}" }
            div { style: "height: 520px;",
                DockLayout {
                    tokens: tokens.clone(),
                    panels: sample_panels(),
                    library: library,
                    content: move |id: String| rsx! {
                        p { class: "gallery-caption", "Contents of {id}" }
                    },
                    onchange: move |panels: Vec<DockPanel>| layout.set(panels),
                }
            }
        }
    }
}
