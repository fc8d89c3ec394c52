//! Domain extension tables for specific widget families.

mod ai;
mod charts;
mod data_table;

pub use ai::{AiTokens, AiTokensPatch, Confidence};
pub use charts::{chart_color, ChartPalette, ChartTokens, ChartTokensPatch};
pub use data_table::{DataTableTokens, DataTableTokensPatch, Density, DensityPreset, DensityPresetPatch};

use crate::base::BaseTokens;
use crate::semantic::SemanticTokens;
use crate::tokens::token_record;

token_record! {
    pub struct DomainTokens / DomainTokensPatch {
        charts: ChartTokens,
        data_table: DataTableTokens,
        ai: AiTokens,
    }
}

impl DomainTokens {
    pub fn derive(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        Self {
            charts: ChartTokens::derive(base, sem),
            data_table: DataTableTokens::derive(base, sem),
            ai: AiTokens::derive(base, sem),
        }
    }
}
