//! Status Indicator Component
//!
//! One component, seven presentations. [`StatusVariant`] is closed and
//! [`IndicatorModel::build`] is the only place that turns a variant into
//! colors, text and a marker, so adding an arm is a compile error until it
//! is handled here.
//!
//! | Variant | Marker | Text |
//! |---------|--------|------|
//! | Icon | status icon | none (label is aria only) |
//! | Shape | status shape | none |
//! | Dot | small status shape, optional pulse | none |
//! | Chip | status icon | label, in a bordered pill |
//! | Inline | status icon | label, running text |
//! | Badge | none | capped count |
//! | Differential | trend arrow | signed value |

use std::sync::Arc;

use dioxus::prelude::*;
use strata_tokens::{
    badge_text, status_config, Color, Differential, IconLibrary, IconName, IndicatorShape, Px,
    Status, StatusConfig, TokenSet, Trend,
};

use crate::components::icon::Icon;
use crate::style::Style;

/// Default cap for badge counts.
pub const DEFAULT_BADGE_MAX: u32 = 99;

/// What a status indicator shows.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusVariant {
    /// Status icon alone
    Icon { status: Status },
    /// Status shape alone
    Shape { status: Status },
    /// Small shape marker, optionally pulsing
    Dot {
        status: Status,
        pulse: bool,
        large: bool,
    },
    /// Pill with icon and label; `label` overrides the status name
    Chip {
        status: Status,
        label: Option<String>,
    },
    /// Icon followed by text, for use inside sentences
    Inline {
        status: Status,
        label: Option<String>,
    },
    /// Count bubble, `"{max}+"` past `max`
    Badge { status: Status, count: u32, max: u32 },
    /// Signed change colored by trend
    Differential(Differential),
}

impl StatusVariant {
    pub fn badge(status: Status, count: u32) -> Self {
        StatusVariant::Badge {
            status,
            count,
            max: DEFAULT_BADGE_MAX,
        }
    }

    pub fn chip(status: Status) -> Self {
        StatusVariant::Chip {
            status,
            label: None,
        }
    }

    /// Status whose tone the variant renders in.
    pub fn status(&self) -> Status {
        match self {
            StatusVariant::Icon { status }
            | StatusVariant::Shape { status }
            | StatusVariant::Dot { status, .. }
            | StatusVariant::Chip { status, .. }
            | StatusVariant::Inline { status, .. }
            | StatusVariant::Badge { status, .. } => *status,
            StatusVariant::Differential(diff) => diff.trend().status(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatusVariant::Icon { .. } => "icon",
            StatusVariant::Shape { .. } => "shape",
            StatusVariant::Dot { .. } => "dot",
            StatusVariant::Chip { .. } => "chip",
            StatusVariant::Inline { .. } => "inline",
            StatusVariant::Badge { .. } => "badge",
            StatusVariant::Differential(_) => "differential",
        }
    }
}

/// Glyph drawn before the text, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    Icon { name: IconName, size: Px },
    Shape { shape: IndicatorShape, size: Px },
    None,
}

/// Everything needed to render one indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorModel {
    pub config: StatusConfig,
    pub marker: Marker,
    /// Visible text, if the variant shows any
    pub text: Option<String>,
    /// Screen-reader label
    pub aria_label: String,
    /// Foreground color for marker and text
    pub color: Color,
    pub container_style: String,
    /// `aria-live` politeness
    pub live: &'static str,
    pub trend: Option<Trend>,
}

impl IndicatorModel {
    /// Resolve a variant against the active tokens.
    pub fn build(variant: &StatusVariant, tokens: &TokenSet) -> Self {
        let config = status_config(variant.status());
        let tone = tokens.semantic().status_tone(config.status);
        let t = &tokens.component().status_indicator;
        let live = if config.announce_assertively {
            "assertive"
        } else {
            "polite"
        };
        let row = || {
            Style::new()
                .set("display", "inline-flex")
                .set("align-items", "center")
                .set("gap", t.gap)
        };

        let (marker, text, aria_label, color, style, trend) = match variant {
            StatusVariant::Icon { .. } => (
                Marker::Icon {
                    name: config.icon,
                    size: t.icon_size,
                },
                None,
                config.label.to_string(),
                tone.icon,
                row().set("color", tone.icon),
                None,
            ),
            StatusVariant::Shape { .. } => (
                Marker::Shape {
                    shape: config.shape,
                    size: t.shape_size,
                },
                None,
                config.label.to_string(),
                tone.icon,
                row().set("color", tone.icon),
                None,
            ),
            StatusVariant::Dot { pulse, large, .. } => {
                let size = if *large { t.dot_size_large } else { t.dot_size };
                let style = row().set("color", tone.icon).set_if(
                    *pulse,
                    "animation",
                    format!(
                        "strata-pulse {} {} infinite",
                        t.pulse.duration, t.pulse.easing
                    ),
                );
                (
                    Marker::Shape {
                        shape: config.shape,
                        size,
                    },
                    None,
                    config.label.to_string(),
                    tone.icon,
                    style,
                    None,
                )
            }
            StatusVariant::Chip { label, .. } => {
                let text = label.clone().unwrap_or_else(|| config.label.to_string());
                let style = row()
                    .set("height", t.chip_height)
                    .set("padding", t.chip_padding.css())
                    .set("border-radius", t.chip_radius)
                    .border(t.chip_border_width, tone.border)
                    .set("background", tone.background)
                    .set("color", tone.text)
                    .set("font-size", t.chip_font_size)
                    .set("font-weight", t.chip_font_weight)
                    .set("white-space", "nowrap");
                (
                    Marker::Icon {
                        name: config.icon,
                        size: t.icon_size,
                    },
                    Some(text.clone()),
                    text,
                    tone.text,
                    style,
                    None,
                )
            }
            StatusVariant::Inline { label, .. } => {
                let text = label.clone().unwrap_or_else(|| config.label.to_string());
                let style = row().extend(&t.inline_font.css()).set("color", tone.text);
                (
                    Marker::Icon {
                        name: config.icon,
                        size: t.icon_size,
                    },
                    Some(text.clone()),
                    text,
                    tone.text,
                    style,
                    None,
                )
            }
            StatusVariant::Badge { count, max, .. } => {
                let text = badge_text(*count, *max);
                let style = Style::new()
                    .set("display", "inline-flex")
                    .set("align-items", "center")
                    .set("justify-content", "center")
                    .set("box-sizing", "border-box")
                    .set("min-width", t.badge_min_size)
                    .set("height", t.badge_min_size)
                    .set("padding", t.badge_padding.css())
                    .set("border-radius", t.badge_radius)
                    .set("background", tone.icon)
                    .set("color", tokens.semantic().text.on_action)
                    .set("font-size", t.badge_font_size)
                    .set("font-weight", t.badge_font_weight);
                let aria = format!("{} {}", text, config.label.to_lowercase());
                (
                    Marker::None,
                    Some(text),
                    aria,
                    tokens.semantic().text.on_action,
                    style,
                    None,
                )
            }
            StatusVariant::Differential(diff) => {
                let text = diff.text();
                let trend = diff.trend();
                let style = row()
                    .extend(&t.differential_font.css())
                    .set("color", tone.text);
                let aria = format!("{} ({})", text, trend_word(trend));
                (
                    Marker::Icon {
                        name: diff.icon(),
                        size: t.icon_size,
                    },
                    Some(text),
                    aria,
                    tone.text,
                    style,
                    Some(trend),
                )
            }
        };

        Self {
            config,
            marker,
            text,
            aria_label,
            color,
            container_style: style.into_string(),
            live,
            trend,
        }
    }
}

fn trend_word(trend: Trend) -> &'static str {
    match trend {
        Trend::Positive => "improved",
        Trend::Negative => "worsened",
        Trend::Flat => "unchanged",
    }
}

/// Properties for the StatusIndicator component
#[derive(Clone, PartialEq, Props)]
pub struct StatusIndicatorProps {
    pub tokens: Arc<TokenSet>,
    pub variant: StatusVariant,
    #[props(default)]
    pub library: IconLibrary,
}

/// Render a status in one of seven presentations
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusIndicator {
///         tokens: tokens.clone(),
///         variant: StatusVariant::Differential(Differential::percent(-8.3)),
///     }
/// }
/// ```
#[component]
pub fn StatusIndicator(props: StatusIndicatorProps) -> Element {
    let model = IndicatorModel::build(&props.variant, &props.tokens);
    let class = format!(
        "strata-status strata-status-{} strata-status-{}",
        props.variant.name(),
        model.config.status
    );
    let color = model.color;
    let marker = match model.marker {
        Marker::Icon { name, size } => rsx! {
            Icon { name: name, library: props.library, size: size, color: color }
        },
        Marker::Shape { shape, size } => rsx! {
            svg {
                view_box: "0 0 16 16",
                width: "{size}",
                height: "{size}",
                fill: "currentColor",
                "aria-hidden": "true",
                style: "flex-shrink: 0;",
                path { d: shape.svg_path() }
            }
        },
        Marker::None => rsx! {},
    };

    rsx! {
        span {
            class: "{class}",
            style: "{model.container_style}",
            role: "status",
            "aria-live": model.live,
            "aria-label": "{model.aria_label}",
            {marker}
            if let Some(text) = &model.text {
                span { "aria-hidden": "true", "{text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_tokens::{resolve, Mode};

    #[test]
    fn every_arm_reads_the_catalog() {
        let set = resolve(Mode::Light);
        for status in Status::ALL {
            let variants = [
                StatusVariant::Icon { status },
                StatusVariant::Shape { status },
                StatusVariant::Dot {
                    status,
                    pulse: false,
                    large: false,
                },
                StatusVariant::chip(status),
                StatusVariant::Inline {
                    status,
                    label: None,
                },
                StatusVariant::badge(status, 3),
            ];
            for variant in variants {
                let model = IndicatorModel::build(&variant, &set);
                assert_eq!(model.config, status_config(status), "{}", variant.name());
            }
        }
    }

    #[test]
    fn error_icon_uses_error_tone_and_is_assertive() {
        let set = resolve(Mode::Light);
        let model = IndicatorModel::build(
            &StatusVariant::Icon {
                status: Status::Error,
            },
            &set,
        );
        assert_eq!(model.color, set.semantic().status.error.icon);
        assert_eq!(
            model.marker,
            Marker::Icon {
                name: IconName::Error,
                size: set.component().status_indicator.icon_size
            }
        );
        assert_eq!(model.live, "assertive");
        assert_eq!(model.aria_label, "Error");
        assert!(model.text.is_none());
    }

    #[test]
    fn shape_and_dot_draw_status_shape() {
        let set = resolve(Mode::Light);
        let t = &set.component().status_indicator;
        let shape = IndicatorModel::build(
            &StatusVariant::Shape {
                status: Status::Warning,
            },
            &set,
        );
        assert_eq!(
            shape.marker,
            Marker::Shape {
                shape: IndicatorShape::Triangle,
                size: t.shape_size
            }
        );

        let dot = IndicatorModel::build(
            &StatusVariant::Dot {
                status: Status::Success,
                pulse: true,
                large: true,
            },
            &set,
        );
        assert_eq!(
            dot.marker,
            Marker::Shape {
                shape: IndicatorShape::Square,
                size: t.dot_size_large
            }
        );
        assert!(dot.container_style.contains("strata-pulse"));
    }

    #[test]
    fn chip_label_override() {
        let set = resolve(Mode::Dark);
        let model = IndicatorModel::build(
            &StatusVariant::Chip {
                status: Status::Pending,
                label: Some("Syncing".to_string()),
            },
            &set,
        );
        assert_eq!(model.text.as_deref(), Some("Syncing"));
        assert_eq!(model.aria_label, "Syncing");
        assert!(model
            .container_style
            .contains(&set.semantic().status.pending.background.to_string()));
    }

    #[test]
    fn badge_caps_count() {
        let set = resolve(Mode::Light);
        let model = IndicatorModel::build(&StatusVariant::badge(Status::Info, 1000), &set);
        assert_eq!(model.text.as_deref(), Some("99+"));
        assert_eq!(model.marker, Marker::None);
        assert_eq!(model.aria_label, "99+ info");
    }

    #[test]
    fn negative_differential_uses_error_tone() {
        let set = resolve(Mode::Light);
        let model =
            IndicatorModel::build(&StatusVariant::Differential(Differential::percent(-8.3)), &set);
        assert_eq!(model.text.as_deref(), Some("-8.3%"));
        assert_eq!(model.trend, Some(Trend::Negative));
        assert_eq!(model.config.status, Status::Error);
        assert_eq!(model.color, set.semantic().status.error.text);
        assert_eq!(model.aria_label, "-8.3% (worsened)");
    }

    #[test]
    fn flat_differential_is_neutral() {
        let set = resolve(Mode::Light);
        let model = IndicatorModel::build(&StatusVariant::Differential(Differential::new(0.0)), &set);
        assert_eq!(model.trend, Some(Trend::Flat));
        assert_eq!(model.config.status, Status::Neutral);
        assert_eq!(model.text.as_deref(), Some("0.0"));
    }

    #[test]
    fn reduced_motion_stops_pulse() {
        let set = resolve(Mode::Light).with_reduced_motion(true);
        let model = IndicatorModel::build(
            &StatusVariant::Dot {
                status: Status::Pending,
                pulse: true,
                large: false,
            },
            &set,
        );
        assert!(model.container_style.contains("strata-pulse 0ms"));
    }
}
