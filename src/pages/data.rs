//! Domain tables: chart palettes, data-table densities and AI surfaces.

use dioxus::prelude::*;
use strata_tokens::{
    ButtonVariant, ChartPalette, Confidence, ControlSize, Density, Differential, IconName,
    TokenSet,
};
use strata_ui::{Button, Icon, StatusIndicator, StatusVariant, Style};

use crate::components::{DemoSection, Swatch};
use crate::context::{use_theme, use_tokens};

/// One demo table row: service, latency change in percent, uptime score.
pub struct ServiceRow {
    pub name: &'static str,
    pub latency_change: f64,
    pub uptime: f64,
}

pub const SERVICES: [ServiceRow; 5] = [
    ServiceRow { name: "gateway", latency_change: -4.2, uptime: 0.999 },
    ServiceRow { name: "billing", latency_change: 12.5, uptime: 0.97 },
    ServiceRow { name: "search", latency_change: 0.0, uptime: 0.995 },
    ServiceRow { name: "auth", latency_change: 1.04, uptime: 0.62 },
    ServiceRow { name: "reports", latency_change: -18.0, uptime: 0.41 },
];

pub fn table_cell_style(tokens: &TokenSet, density: Density, striped: bool) -> String {
    let table = &tokens.domain().data_table;
    let preset = table.density(density);
    Style::new()
        .set("height", preset.row_height)
        .set("padding", preset.cell_padding.css())
        .set("font-size", preset.font_size)
        .set("color", table.text)
        .set(
            "background",
            if striped {
                table.stripe_background
            } else {
                table.row_background
            },
        )
        .set("border-bottom", format!("{} solid {}", table.border_width, table.border))
        .into_string()
}

pub fn bubble_style(tokens: &TokenSet, from_user: bool) -> String {
    let ai = &tokens.domain().ai;
    Style::new()
        .set("align-self", if from_user { "flex-end" } else { "flex-start" })
        .set("max-width", ai.bubble_max_width)
        .set("padding", ai.bubble_padding.css())
        .set("border-radius", ai.bubble_radius)
        .set(
            "background",
            if from_user {
                ai.user_bubble
            } else {
                ai.assistant_bubble
            },
        )
        .set("color", if from_user { ai.user_text } else { ai.assistant_text })
        .into_string()
}

#[component]
pub fn DataPage() -> Element {
    let tokens = use_tokens();
    let mut theme = use_theme();
    let (library, density) = {
        let current = theme.read();
        (current.library(), current.density())
    };

    let charts = &tokens.domain().charts;
    let palettes: Vec<(ChartPalette, Vec<(String, strata_tokens::Color)>)> = ChartPalette::ALL
        .into_iter()
        .map(|palette| {
            let swatches = charts
                .palette(palette)
                .iter()
                .enumerate()
                .map(|(i, color)| (format!("{}.{}", palette, i), *color))
                .collect();
            (palette, swatches)
        })
        .collect();

    let densities: Vec<(Density, ButtonVariant)> = Density::ALL
        .into_iter()
        .map(|d| {
            let variant = if d == density {
                ButtonVariant::Primary
            } else {
                ButtonVariant::Outlined
            };
            (d, variant)
        })
        .collect();
    let table = &tokens.domain().data_table;
    let header_style = Style::new()
        .set("text-align", "left")
        .set("padding", table.density(density).cell_padding.css())
        .set("background", table.header_background)
        .set("color", table.header_text)
        .extend(&table.header_font.css())
        .into_string();
    let rows: Vec<(&'static str, Differential, Confidence, String)> = SERVICES
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let change = Differential {
                lower_is_better: true,
                ..Differential::percent(row.latency_change)
            };
            (
                row.name,
                change,
                Confidence::from_score(row.uptime),
                table_cell_style(&tokens, density, i % 2 == 1),
            )
        })
        .collect();

    let ai = &tokens.domain().ai;
    let user_bubble = bubble_style(&tokens, true);
    let assistant_bubble = bubble_style(&tokens, false);
    let sparkle_color = ai.accent;
    let sparkle_size = ai.sparkle_size;
    let cursor_style = Style::new()
        .set("display", "inline-block")
        .set("width", ai.streaming_cursor_width)
        .set("height", "1em")
        .set("margin-left", "2px")
        .set("vertical-align", "text-bottom")
        .set("background", ai.streaming_cursor)
        .set(
            "animation",
            format!("strata-blink {} {} infinite", ai.cursor_blink.duration, ai.cursor_blink.easing),
        )
        .into_string();
    let confidence: Vec<(Confidence, String)> = [Confidence::High, Confidence::Medium, Confidence::Low]
        .into_iter()
        .map(|level| {
            let style = Style::new()
                .set("display", "inline-block")
                .set("width", "10px")
                .set("height", "10px")
                .set("border-radius", "50%")
                .set("background", ai.confidence(level))
                .into_string();
            (level, style)
        })
        .collect();

    rsx! {
        for (palette, swatches) in palettes {
            DemoSection {
                key: "{palette}",
                tokens: tokens.clone(),
                title: format!("Chart palette: {}", palette),
                caption: "Series indices wrap around the palette.".to_string(),
                div { class: "gallery-row",
                    for (label, color) in swatches {
                        Swatch { key: "{label}", tokens: tokens.clone(), label: label.clone(), color: color }
                    }
                }
            }
        }

        DemoSection { tokens: tokens.clone(), title: "Data table".to_string(),
            div { class: "gallery-row",
                for (option, variant) in densities {
                    Button {
                        tokens: tokens.clone(),
                        size: ControlSize::Small,
                        variant: variant,
                        onclick: move |_| theme.write().set_density(option),
                        "{option}"
                    }
                }
            }
            table { style: "border-collapse: collapse; width: 100%; max-width: 720px;",
                thead {
                    tr {
                        th { style: "{header_style}", "Service" }
                        th { style: "{header_style}", "Latency" }
                        th { style: "{header_style}", "Confidence" }
                    }
                }
                tbody {
                    for (name, change, level, cell) in rows {
                        tr { key: "{name}",
                            td { style: "{cell}", "{name}" }
                            td { style: "{cell}",
                                StatusIndicator {
                                    tokens: tokens.clone(),
                                    variant: StatusVariant::Differential(change),
                                    library: library,
                                }
                            }
                            td { style: "{cell}", "{level:?}" }
                        }
                    }
                }
            }
        }

        DemoSection { tokens: tokens.clone(), title: "AI surfaces".to_string(),
            div { style: "display: flex; flex-direction: column; gap: 8px; max-width: 720px;",
                div { style: "{user_bubble}", "Which services regressed this week?" }
                div { style: "{assistant_bubble}",
                    Icon { name: IconName::Sparkle, library: library, size: sparkle_size, color: sparkle_color }
                    " Billing latency rose 12.5% and reports uptime dropped"
                    span { style: "{cursor_style}" }
                }
            }
            div { class: "gallery-row",
                for (level, dot) in confidence {
                    span { key: "{level:?}", style: "display: inline-flex; align-items: center; gap: 4px;",
                        span { style: "{dot}" }
                        "{level:?}"
                    }
                }
            }
        }
    }
}
