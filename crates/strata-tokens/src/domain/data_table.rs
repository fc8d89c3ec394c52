//! Data-table colors and density presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base::{BaseTokens, Color, Px};
use crate::error::TokenError;
use crate::semantic::{FontSpec, Insets, SemanticTokens};
use crate::tokens::token_record;

/// Vertical rhythm of table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    #[default]
    Standard,
    Comfortable,
}

impl Density {
    pub const ALL: [Density; 3] = [Density::Compact, Density::Standard, Density::Comfortable];

    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Compact => "compact",
            Density::Standard => "standard",
            Density::Comfortable => "comfortable",
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Density {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Density::Compact),
            "standard" => Ok(Density::Standard),
            "comfortable" => Ok(Density::Comfortable),
            _ => Err(TokenError::UnknownDensity(s.to_string())),
        }
    }
}

token_record! {
    pub struct DensityPreset / DensityPresetPatch {
        row_height: Px,
        cell_padding: Insets,
        font_size: Px,
    }
}

token_record! {
    pub struct DataTableTokens / DataTableTokensPatch {
        header_background: Color,
        header_text: Color,
        header_font: FontSpec,
        row_background: Color,
        stripe_background: Color,
        hover_background: Color,
        selected_background: Color,
        text: Color,
        border: Color,
        border_width: Px,
        sort_icon: Color,
        sort_icon_size: Px,
        compact: DensityPreset,
        standard: DensityPreset,
        comfortable: DensityPreset,
    }
}

impl DataTableTokens {
    pub fn derive(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        let s = &base.spacing;
        let fs = &base.font_size;
        Self {
            header_background: sem.background.surface,
            header_text: sem.text.secondary,
            header_font: sem.typography.label.clone(),
            row_background: sem.background.elevated,
            stripe_background: sem.background.surface,
            hover_background: sem.background.hover,
            selected_background: sem.background.selected,
            text: sem.text.primary,
            border: sem.border.default,
            border_width: sem.border.width,
            sort_icon: sem.text.muted,
            sort_icon_size: base.sizing.icon_xs,
            compact: DensityPreset {
                row_height: s.s9,
                cell_padding: Insets::new(s.s2, s.s1),
                font_size: fs.xs,
            },
            standard: DensityPreset {
                row_height: s.s13,
                cell_padding: Insets::new(s.s4, s.s2),
                font_size: fs.sm,
            },
            comfortable: DensityPreset {
                row_height: s.s16,
                cell_padding: Insets::all(s.s4),
                font_size: fs.md,
            },
        }
    }

    pub fn density(&self, density: Density) -> &DensityPreset {
        match density {
            Density::Compact => &self.compact,
            Density::Standard => &self.standard,
            Density::Comfortable => &self.comfortable,
        }
    }
}
