//! Chart palettes and chrome colors.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::base::{BaseTokens, Color, Px, BASE};
use crate::error::TokenError;
use crate::semantic::{FontSpec, SemanticTokens};
use crate::tokens::token_record;

/// Named chart palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPalette {
    /// Five steps of the brand hue, for single-series emphasis
    Primary,
    /// Ten distinct hues for unordered series
    Categorical,
    /// Light to dark, for ordered magnitudes
    Sequential,
    /// Two hues meeting at a neutral midpoint
    Diverging,
}

impl ChartPalette {
    pub const ALL: [ChartPalette; 4] = [
        ChartPalette::Primary,
        ChartPalette::Categorical,
        ChartPalette::Sequential,
        ChartPalette::Diverging,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartPalette::Primary => "primary",
            ChartPalette::Categorical => "categorical",
            ChartPalette::Sequential => "sequential",
            ChartPalette::Diverging => "diverging",
        }
    }
}

impl fmt::Display for ChartPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartPalette {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartPalette::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TokenError::UnknownPalette(s.to_string()))
    }
}

token_record! {
    pub struct ChartTokens / ChartTokensPatch {
        primary: [Color; 5],
        categorical: [Color; 10],
        sequential: [Color; 9],
        diverging: [Color; 9],
        axis: Color,
        grid: Color,
        label: Color,
        label_font: FontSpec,
        tooltip_background: Color,
        tooltip_text: Color,
        line_width: Px,
        point_size: Px,
        bar_radius: Px,
    }
}

fn categorical(base: &BaseTokens) -> [Color; 10] {
    let c = &base.colors;
    [
        c.blue.s600,
        c.orange.s500,
        c.green.s600,
        c.purple.s600,
        c.red.s500,
        c.teal.s500,
        c.pink.s500,
        c.amber.s500,
        c.indigo.s500,
        c.cyan.s600,
    ]
}

impl ChartTokens {
    pub fn derive(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        let c = &base.colors;
        Self {
            primary: [c.blue.s700, c.blue.s600, c.blue.s500, c.blue.s400, c.blue.s300],
            categorical: categorical(base),
            sequential: [
                c.blue.s100,
                c.blue.s200,
                c.blue.s300,
                c.blue.s400,
                c.blue.s500,
                c.blue.s600,
                c.blue.s700,
                c.blue.s800,
                c.blue.s900,
            ],
            diverging: [
                c.red.s700,
                c.red.s500,
                c.red.s300,
                c.red.s100,
                c.gray.s50,
                c.blue.s100,
                c.blue.s300,
                c.blue.s500,
                c.blue.s700,
            ],
            axis: sem.border.strong,
            grid: sem.border.subtle,
            label: sem.text.secondary,
            label_font: sem.typography.caption.clone(),
            tooltip_background: sem.background.inverse,
            tooltip_text: sem.text.inverse,
            line_width: base.border_width.thick,
            point_size: base.sizing.dot,
            bar_radius: base.radius.sm,
        }
    }

    pub fn palette(&self, palette: ChartPalette) -> &[Color] {
        match palette {
            ChartPalette::Primary => &self.primary,
            ChartPalette::Categorical => &self.categorical,
            ChartPalette::Sequential => &self.sequential,
            ChartPalette::Diverging => &self.diverging,
        }
    }

    /// Color for series `index`, wrapping around the palette.
    pub fn color(&self, palette: ChartPalette, index: usize) -> Color {
        let colors = self.palette(palette);
        colors[index % colors.len()]
    }
}

/// Categorical series color from the light baseline, wrapping at ten.
pub fn chart_color(index: usize) -> Color {
    let colors = categorical(&BASE);
    colors[index % colors.len()]
}
