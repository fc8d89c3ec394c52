//! Component tier: one bundle per widget family.
//!
//! Bundles read the semantic tier first and reach into base only for
//! tightly constrained values (control heights, layers, fixed widths).
//! Variant sub-bundles are alternatives the consumer selects; nothing here
//! dispatches on them.

mod actions;
mod forms;
mod surfaces;
mod widgets;

pub use actions::{
    ButtonTokens, ButtonTokensPatch, ButtonVariant, ButtonVariantTokens, ButtonVariantTokensPatch,
    ChipTokens, ChipTokensPatch, ControlSize, ControlSizeTokens, ControlSizeTokensPatch,
};
pub use forms::{
    ComboBoxTokens, ComboBoxTokensPatch, FileDropTokens, FileDropTokensPatch, InputTokens,
    InputTokensPatch,
};
pub use surfaces::{CardTokens, CardTokensPatch, ModalTokens, ModalTokensPatch, TooltipTokens, TooltipTokensPatch};
pub use widgets::{
    DockTokens, DockTokensPatch, IllustratedMessageTokens, IllustratedMessageTokensPatch,
    StatusIndicatorTokens, StatusIndicatorTokensPatch, TransferListTokens, TransferListTokensPatch,
};

use crate::base::BaseTokens;
use crate::semantic::SemanticTokens;
use crate::tokens::token_record;

token_record! {
    /// The complete component tier.
    pub struct ComponentTokens / ComponentTokensPatch {
        button: ButtonTokens,
        chip: ChipTokens,
        input: InputTokens,
        combo_box: ComboBoxTokens,
        file_drop: FileDropTokens,
        card: CardTokens,
        modal: ModalTokens,
        tooltip: TooltipTokens,
        status_indicator: StatusIndicatorTokens,
        dock: DockTokens,
        transfer_list: TransferListTokens,
        illustrated_message: IllustratedMessageTokens,
    }
}

impl ComponentTokens {
    /// Build every bundle from base and an already mode-patched semantic tier.
    pub fn compose(base: &BaseTokens, sem: &SemanticTokens) -> Self {
        Self {
            button: ButtonTokens::compose(base, sem),
            chip: ChipTokens::compose(base, sem),
            input: InputTokens::compose(base, sem),
            combo_box: ComboBoxTokens::compose(base, sem),
            file_drop: FileDropTokens::compose(base, sem),
            card: CardTokens::compose(sem),
            modal: ModalTokens::compose(base, sem),
            tooltip: TooltipTokens::compose(base, sem),
            status_indicator: StatusIndicatorTokens::compose(base, sem),
            dock: DockTokens::compose(base, sem),
            transfer_list: TransferListTokens::compose(base, sem),
            illustrated_message: IllustratedMessageTokens::compose(base, sem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BASE;
    use crate::tokens::Tokens;

    #[test]
    fn semantic_changes_flow_into_components() {
        let mut sem = SemanticTokens::derive(&BASE);
        sem.action.primary = BASE.colors.purple.s600;
        let comp = ComponentTokens::compose(&BASE, &sem);
        assert_eq!(comp.button.primary.background, BASE.colors.purple.s600);
        assert_eq!(comp.dock.drop_zone_border, BASE.colors.purple.s600);
    }

    #[test]
    fn modal_sits_above_backdrop() {
        let comp = ComponentTokens::compose(&BASE, &SemanticTokens::derive(&BASE));
        assert!(comp.modal.z_index > comp.modal.backdrop_z_index);
        assert!(comp.tooltip.z_index > comp.modal.z_index);
    }

    #[test]
    fn every_bundle_is_visited() {
        let comp = ComponentTokens::compose(&BASE, &SemanticTokens::derive(&BASE));
        let leaves = comp.leaves();
        for bundle in [
            "button",
            "chip",
            "input",
            "combo_box",
            "file_drop",
            "card",
            "modal",
            "tooltip",
            "status_indicator",
            "dock",
            "transfer_list",
            "illustrated_message",
        ] {
            assert!(
                leaves.iter().any(|(p, _)| p.tier() == Some(bundle)),
                "missing bundle {}",
                bundle
            );
        }
    }
}
