//! Token overview: semantic color groups, type scale and the live audit.

use dioxus::prelude::*;
use strata_tokens::{audit_theme, Color, FontSpec, Status, TokenSet};
use strata_ui::{StatusIndicator, StatusVariant, Style};

use crate::components::{DemoSection, Swatch};
use crate::context::use_tokens;

/// Named semantic colors shown as swatches, grouped by purpose.
pub fn color_groups(tokens: &TokenSet) -> Vec<(&'static str, Vec<(&'static str, Color)>)> {
    let sem = tokens.semantic();
    vec![
        (
            "Text",
            vec![
                ("text.primary", sem.text.primary),
                ("text.secondary", sem.text.secondary),
                ("text.muted", sem.text.muted),
                ("text.link", sem.text.link),
                ("text.inverse", sem.text.inverse),
            ],
        ),
        (
            "Background",
            vec![
                ("background.canvas", sem.background.canvas),
                ("background.surface", sem.background.surface),
                ("background.elevated", sem.background.elevated),
                ("background.sunken", sem.background.sunken),
                ("background.selected", sem.background.selected),
            ],
        ),
        (
            "Action",
            vec![
                ("action.primary", sem.action.primary),
                ("action.primary_hover", sem.action.primary_hover),
                ("action.secondary", sem.action.secondary),
                ("action.danger", sem.action.danger),
            ],
        ),
        (
            "Border",
            vec![
                ("border.default", sem.border.default),
                ("border.subtle", sem.border.subtle),
                ("border.strong", sem.border.strong),
                ("border.focus", sem.border.focus),
            ],
        ),
    ]
}

fn type_scale(tokens: &TokenSet) -> Vec<(&'static str, FontSpec)> {
    let t = &tokens.semantic().typography;
    vec![
        ("title", t.title.clone()),
        ("heading", t.heading.clone()),
        ("body", t.body.clone()),
        ("body_small", t.body_small.clone()),
        ("label", t.label.clone()),
        ("caption", t.caption.clone()),
        ("code", t.code.clone()),
    ]
}

#[component]
pub fn Overview() -> Element {
    let tokens = use_tokens();
    let report = audit_theme(&tokens);
    let (audit_status, audit_label) = if report.is_clean() {
        (
            Status::Success,
            format!("{} tokens trace to base", report.checked),
        )
    } else {
        (
            Status::Error,
            format!("{} untraceable tokens", report.findings.len()),
        )
    };
    let groups = color_groups(&tokens);
    let samples: Vec<(&'static str, String)> = type_scale(&tokens)
        .into_iter()
        .map(|(name, font)| (name, Style::new().extend(&font.css()).into_string()))
        .collect();
    let mode = tokens.mode();

    rsx! {
        DemoSection {
            tokens: tokens.clone(),
            title: "Tokens".to_string(),
            caption: format!("Resolved for {} mode", mode),
            StatusIndicator {
                tokens: tokens.clone(),
                variant: StatusVariant::Chip { status: audit_status, label: Some(audit_label) },
            }
        }

        for (group, swatches) in groups {
            DemoSection { key: "{group}", tokens: tokens.clone(), title: group.to_string(),
                div { class: "gallery-row",
                    for (label, color) in swatches {
                        Swatch { key: "{label}", tokens: tokens.clone(), label: label.to_string(), color: color }
                    }
                }
            }
        }

        DemoSection { tokens: tokens.clone(), title: "Typography".to_string(),
            for (name, style) in samples {
                div { key: "{name}", style: "{style}", "{name}: The quick brown fox" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_tokens::{resolve, Mode};

    #[test]
    fn groups_change_with_mode() {
        let light = color_groups(&resolve(Mode::Light));
        let dark = color_groups(&resolve(Mode::Dark));
        assert_eq!(light.len(), dark.len());
        assert_ne!(light[0].1[0].1, dark[0].1[0].1);
    }
}
