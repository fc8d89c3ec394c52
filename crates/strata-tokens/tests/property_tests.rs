//! Property-based tests for palettes and widget state
//!
//! Uses proptest to check cyclic indexing, transfer conservation and
//! combo-box navigation bounds.

use proptest::prelude::*;
use strata_tokens::{
    chart_color, resolve, ChartPalette, ComboState, Item, Mode, Side, TransferState,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Short labels drawn from a small alphabet so filters actually hit
fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C ]{0,6}").expect("valid regex")
}

/// Items with unique ids
fn items_strategy(max: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(label_strategy(), 0..max).prop_map(|labels| {
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Item::new(format!("item-{}", i), label))
            .collect()
    })
}

/// Operations on a transfer list
#[derive(Debug, Clone)]
enum TransferOp {
    Toggle(usize),
    Filter(bool, String),
    MoveAllRight,
    MoveAllLeft,
    MoveSelectedRight,
    MoveSelectedLeft,
}

fn transfer_ops_strategy() -> impl Strategy<Value = Vec<TransferOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..30usize).prop_map(TransferOp::Toggle),
            1 => (any::<bool>(), label_strategy()).prop_map(|(left, f)| TransferOp::Filter(left, f)),
            1 => Just(TransferOp::MoveAllRight),
            1 => Just(TransferOp::MoveAllLeft),
            2 => Just(TransferOp::MoveSelectedRight),
            2 => Just(TransferOp::MoveSelectedLeft),
        ],
        0..40,
    )
}

fn ids(state: &TransferState<Item>, side: Side) -> Vec<String> {
    state.items(side).iter().map(|i| i.id.clone()).collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Palette lookups wrap at the palette length for every palette
    #[test]
    fn palette_indexing_is_cyclic(index in 0usize..10_000) {
        let set = resolve(Mode::Light);
        let charts = &set.domain().charts;
        for palette in ChartPalette::ALL {
            let len = charts.palette(palette).len();
            prop_assert_eq!(charts.color(palette, index), charts.color(palette, index + len));
        }
        prop_assert_eq!(chart_color(index), chart_color(index + 10));
    }

    /// No sequence of operations loses or duplicates an item
    #[test]
    fn transfer_conserves_items(items in items_strategy(30), ops in transfer_ops_strategy()) {
        let total = items.len();
        let all_ids: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        let mut state = TransferState::new(items, vec![]);

        for op in ops {
            match op {
                TransferOp::Toggle(i) => {
                    if let Some(id) = all_ids.get(i) {
                        state.toggle_selected(id);
                    }
                }
                TransferOp::Filter(left, f) => {
                    state.set_filter(if left { Side::Left } else { Side::Right }, f)
                }
                TransferOp::MoveAllRight => state.move_all_right(),
                TransferOp::MoveAllLeft => state.move_all_left(),
                TransferOp::MoveSelectedRight => state.move_selected_right(),
                TransferOp::MoveSelectedLeft => state.move_selected_left(),
            }

            let mut seen = ids(&state, Side::Left);
            seen.extend(ids(&state, Side::Right));
            prop_assert_eq!(seen.len(), total);
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), total);
        }
    }

    /// Moving selected items keeps both sides in their relative order
    #[test]
    fn move_selected_preserves_order(items in items_strategy(20), picks in prop::collection::vec(any::<bool>(), 20)) {
        let before: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        let mut state = TransferState::new(items, vec![]);
        for (id, pick) in before.iter().zip(&picks) {
            if *pick {
                state.toggle_selected(id);
            }
        }
        state.move_selected_right();

        let expected_right: Vec<String> = before
            .iter()
            .zip(&picks)
            .filter(|(_, pick)| **pick)
            .map(|(id, _)| id.clone())
            .collect();
        let expected_left: Vec<String> = before
            .iter()
            .zip(&picks)
            .filter(|(_, pick)| !**pick)
            .map(|(id, _)| id.clone())
            .collect();
        prop_assert_eq!(ids(&state, Side::Right), expected_right);
        prop_assert_eq!(ids(&state, Side::Left), expected_left);
    }

    /// Visible items are always a subsequence of the side's items
    #[test]
    fn visible_is_subset(items in items_strategy(20), filter in label_strategy()) {
        let mut state = TransferState::new(items, vec![]);
        state.set_filter(Side::Left, filter.clone());
        let needle = filter.trim().to_lowercase();
        for item in state.visible(Side::Left) {
            prop_assert!(item.label.to_lowercase().contains(&needle));
        }
    }

    /// The combo highlight always points inside the current matches
    #[test]
    fn combo_highlight_stays_in_bounds(
        options in prop::collection::vec(label_strategy(), 0..15),
        query in label_strategy(),
        moves in prop::collection::vec(any::<bool>(), 0..30),
    ) {
        let mut combo = ComboState::new(options);
        combo.set_query(query);
        let len = combo.matches().len();

        for forward in moves {
            if forward {
                combo.highlight_next();
            } else {
                combo.highlight_previous();
            }
            match combo.highlighted_index() {
                Some(i) => prop_assert!(i < len),
                None => prop_assert_eq!(len, 0),
            }
        }
    }
}
