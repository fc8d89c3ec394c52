//! Status catalog shared by every status-indicator variant.
//!
//! | Status | Severity | Shape | Icon |
//! |--------|----------|-------|------|
//! | error | high | circle | `error` |
//! | warning | medium | triangle | `warning` |
//! | success | low | square | `check-circle` |
//! | info | low | diamond | `info` |
//! | pending | medium | ring | `clock` |
//! | neutral | none | dash | `minus-circle` |
//!
//! Shapes differ per status so color is never the only cue.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TokenError;
use crate::icons::IconName;

/// A status family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Error,
    Warning,
    Success,
    Info,
    Pending,
    Neutral,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::Error,
        Status::Warning,
        Status::Success,
        Status::Info,
        Status::Pending,
        Status::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Error => "error",
            Status::Warning => "warning",
            Status::Success => "success",
            Status::Info => "info",
            Status::Pending => "pending",
            Status::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "danger" | "critical" => Ok(Status::Error),
            "warning" | "warn" => Ok(Status::Warning),
            "success" | "ok" => Ok(Status::Success),
            "info" => Ok(Status::Info),
            "pending" | "in-progress" => Ok(Status::Pending),
            "neutral" | "inactive" => Ok(Status::Neutral),
            _ => Err(TokenError::UnknownStatus(s.to_string())),
        }
    }
}

/// How urgently a status demands attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

/// Geometric marker drawn by the `Shape` and `Dot` indicator variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorShape {
    Circle,
    Triangle,
    Square,
    Diamond,
    Ring,
    Dash,
}

impl IndicatorShape {
    /// SVG markup for the marker on a 16×16 grid.
    pub fn svg_path(&self) -> &'static str {
        match self {
            IndicatorShape::Circle => "M8 2a6 6 0 1 0 0 12A6 6 0 0 0 8 2z",
            IndicatorShape::Triangle => "M8 2 14.5 14h-13z",
            IndicatorShape::Square => "M3 3h10v10H3z",
            IndicatorShape::Diamond => "M8 1.5 14.5 8 8 14.5 1.5 8z",
            IndicatorShape::Ring => "M8 2a6 6 0 1 0 0 12A6 6 0 0 0 8 2zm0 3a3 3 0 1 1 0 6 3 3 0 0 1 0-6z",
            IndicatorShape::Dash => "M2 6.5h12v3H2z",
        }
    }
}

/// Visual configuration for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusConfig {
    pub status: Status,
    pub severity: Severity,
    pub shape: IndicatorShape,
    pub icon: IconName,
    pub label: &'static str,
    /// Whether the live region should interrupt (`assertive`) or wait.
    pub announce_assertively: bool,
}

/// Look up the shared configuration for a status.
pub fn status_config(status: Status) -> StatusConfig {
    let (severity, shape, icon, label) = match status {
        Status::Error => (Severity::High, IndicatorShape::Circle, IconName::Error, "Error"),
        Status::Warning => (Severity::Medium, IndicatorShape::Triangle, IconName::Warning, "Warning"),
        Status::Success => (Severity::Low, IndicatorShape::Square, IconName::CheckCircle, "Success"),
        Status::Info => (Severity::Low, IndicatorShape::Diamond, IconName::Info, "Info"),
        Status::Pending => (Severity::Medium, IndicatorShape::Ring, IconName::Clock, "Pending"),
        Status::Neutral => (Severity::None, IndicatorShape::Dash, IconName::MinusCircle, "Neutral"),
    };
    StatusConfig {
        status,
        severity,
        shape,
        icon,
        label,
        announce_assertively: severity == Severity::High,
    }
}

/// Direction of a differential value after accounting for polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
    Flat,
}

impl Trend {
    /// Status whose tone renders this trend.
    pub fn status(&self) -> Status {
        match self {
            Trend::Positive => Status::Success,
            Trend::Negative => Status::Error,
            Trend::Flat => Status::Neutral,
        }
    }
}

/// A signed change such as `+4.2%` or `-8.3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Differential {
    pub value: f64,
    pub percentage: bool,
    /// Digits after the decimal point.
    pub precision: usize,
    /// Treat increases as bad (latency, error rate).
    pub lower_is_better: bool,
}

impl Differential {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            percentage: false,
            precision: 1,
            lower_is_better: false,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            percentage: true,
            ..Self::new(value)
        }
    }

    fn rounded(&self) -> f64 {
        if !self.value.is_finite() {
            return 0.0;
        }
        let scale = 10f64.powi(self.precision as i32);
        (self.value * scale).round() / scale
    }

    /// Formatted value with explicit sign: `+4.2%`, `-8.3%`, `0.0%`.
    pub fn text(&self) -> String {
        let rounded = self.rounded();
        let number = if rounded == 0.0 {
            format!("{:.*}", self.precision, 0.0)
        } else if rounded > 0.0 {
            format!("+{:.*}", self.precision, rounded)
        } else {
            format!("{:.*}", self.precision, rounded)
        };
        if self.percentage {
            format!("{}%", number)
        } else {
            number
        }
    }

    /// Direction of the change in terms of good or bad.
    pub fn trend(&self) -> Trend {
        let rounded = self.rounded();
        let up = if rounded > 0.0 {
            Trend::Positive
        } else if rounded < 0.0 {
            Trend::Negative
        } else {
            return Trend::Flat;
        };
        match (up, self.lower_is_better) {
            (Trend::Positive, true) => Trend::Negative,
            (Trend::Negative, true) => Trend::Positive,
            (trend, _) => trend,
        }
    }

    /// Arrow icon for the raw direction of the value.
    pub fn icon(&self) -> IconName {
        let rounded = self.rounded();
        if rounded > 0.0 {
            IconName::TrendUp
        } else if rounded < 0.0 {
            IconName::TrendDown
        } else {
            IconName::Minus
        }
    }
}

/// Badge count text, capped: `count > max` displays `"{max}+"`.
pub fn badge_text(count: u32, max: u32) -> String {
    if count > max {
        format!("{}+", max)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_config() {
        let config = status_config(Status::Error);
        assert_eq!(config.severity, Severity::High);
        assert_eq!(config.shape, IndicatorShape::Circle);
        assert_eq!(config.icon, IconName::Error);
        assert_eq!(config.label, "Error");
        assert!(config.announce_assertively);
    }

    #[test]
    fn shapes_are_distinct() {
        let shapes: std::collections::HashSet<IndicatorShape> =
            Status::ALL.iter().map(|s| status_config(*s).shape).collect();
        assert_eq!(shapes.len(), Status::ALL.len());
    }

    #[test]
    fn status_parses_aliases_case_insensitively() {
        assert_eq!("ERROR".parse::<Status>().unwrap(), Status::Error);
        assert_eq!("warn".parse::<Status>().unwrap(), Status::Warning);
        assert!(matches!("mauve".parse::<Status>(), Err(TokenError::UnknownStatus(_))));
    }

    #[test]
    fn negative_percentage_differential() {
        let diff = Differential::percent(-8.3);
        assert_eq!(diff.text(), "-8.3%");
        assert_eq!(diff.trend(), Trend::Negative);
        assert_eq!(diff.trend().status(), Status::Error);
        assert_eq!(diff.icon(), IconName::TrendDown);
    }

    #[test]
    fn positive_differential_has_plus_sign() {
        assert_eq!(Differential::new(4.25).text(), "+4.3");
        assert_eq!(Differential::percent(12.0).text(), "+12.0%");
    }

    #[test]
    fn values_rounding_to_zero_are_flat() {
        let diff = Differential::percent(-0.04);
        assert_eq!(diff.text(), "0.0%");
        assert_eq!(diff.trend(), Trend::Flat);
        assert_eq!(diff.icon(), IconName::Minus);
    }

    #[test]
    fn lower_is_better_inverts_trend() {
        let diff = Differential {
            lower_is_better: true,
            ..Differential::new(3.0)
        };
        assert_eq!(diff.trend(), Trend::Negative);
        assert_eq!(diff.icon(), IconName::TrendUp);
    }

    #[test]
    fn badge_caps_at_max() {
        assert_eq!(badge_text(7, 99), "7");
        assert_eq!(badge_text(99, 99), "99");
        assert_eq!(badge_text(150, 99), "99+");
    }
}
