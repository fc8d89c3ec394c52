//! Every StatusIndicator variant for every status.

use dioxus::prelude::*;
use strata_tokens::{Differential, Status};
use strata_ui::{StatusIndicator, StatusVariant};

use crate::components::DemoSection;
use crate::context::{use_theme, use_tokens};

/// One row of the gallery per variant family, each over all statuses.
pub fn variant_rows() -> Vec<(&'static str, Vec<StatusVariant>)> {
    let each = |build: fn(Status) -> StatusVariant| -> Vec<StatusVariant> {
        Status::ALL.into_iter().map(build).collect()
    };
    vec![
        ("Icon", each(|status| StatusVariant::Icon { status })),
        ("Shape", each(|status| StatusVariant::Shape { status })),
        (
            "Dot",
            each(|status| StatusVariant::Dot {
                status,
                pulse: status == Status::Pending,
                large: false,
            }),
        ),
        ("Chip", each(StatusVariant::chip)),
        (
            "Inline",
            each(|status| StatusVariant::Inline {
                status,
                label: None,
            }),
        ),
        (
            "Badge",
            vec![
                StatusVariant::badge(Status::Info, 3),
                StatusVariant::badge(Status::Error, 42),
                StatusVariant::badge(Status::Warning, 120),
                StatusVariant::Badge {
                    status: Status::Neutral,
                    count: 12,
                    max: 9,
                },
            ],
        ),
        (
            "Differential",
            vec![
                StatusVariant::Differential(Differential::percent(4.2)),
                StatusVariant::Differential(Differential::percent(-8.3)),
                StatusVariant::Differential(Differential::new(0.0)),
                StatusVariant::Differential(Differential {
                    lower_is_better: true,
                    ..Differential::new(120.0)
                }),
            ],
        ),
    ]
}

#[component]
pub fn StatusPage() -> Element {
    let tokens = use_tokens();
    let library = use_theme().read().library();
    let rows = variant_rows();

    rsx! {
        DemoSection {
            tokens: tokens.clone(),
            title: "Status Indicators".to_string(),
            caption: "Each status pairs a color with its own icon and shape.".to_string(),
        }
        for (name, variants) in rows {
            DemoSection { key: "{name}", tokens: tokens.clone(), title: name.to_string(),
                div { class: "gallery-row",
                    for variant in variants {
                        StatusIndicator { tokens: tokens.clone(), variant: variant, library: library }
                    }
                }
            }
        }
    }
}
