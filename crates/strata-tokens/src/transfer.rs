//! Transfer list state: two filterable lists and the moves between them.
//!
//! Moves preserve source order and append to the end of the destination.
//! Move-all ignores filters; move-selected moves every selected item on
//! the source side whether or not the filter currently shows it. Moved
//! items are deselected.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Anything that can be listed in a transfer list.
pub trait TransferItem {
    /// Stable identity, unique across both sides.
    fn id(&self) -> &str;
    /// Text shown in the list and matched by filters.
    fn label(&self) -> &str;
}

/// Plain id/label pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub label: String,
}

impl Item {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl TransferItem for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Case-insensitive substring match; a blank filter matches everything.
pub fn matches_filter(label: &str, filter: &str) -> bool {
    let filter = filter.trim();
    filter.is_empty() || label.to_lowercase().contains(&filter.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferState<T> {
    left: Vec<T>,
    right: Vec<T>,
    left_filter: String,
    right_filter: String,
    selected: BTreeSet<String>,
}

impl<T: TransferItem> TransferState<T> {
    pub fn new(left: Vec<T>, right: Vec<T>) -> Self {
        Self {
            left,
            right,
            left_filter: String::new(),
            right_filter: String::new(),
            selected: BTreeSet::new(),
        }
    }

    pub fn items(&self, side: Side) -> &[T] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn filter(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_filter,
            Side::Right => &self.right_filter,
        }
    }

    pub fn set_filter(&mut self, side: Side, filter: impl Into<String>) {
        let filter = filter.into();
        match side {
            Side::Left => self.left_filter = filter,
            Side::Right => self.right_filter = filter,
        }
    }

    /// Items on `side` that pass that side's filter, in list order.
    pub fn visible(&self, side: Side) -> Vec<&T> {
        let filter = self.filter(side);
        self.items(side)
            .iter()
            .filter(|item| matches_filter(item.label(), filter))
            .collect()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Flip selection of `id`. Ids not present on either side are ignored.
    pub fn toggle_selected(&mut self, id: &str) {
        let known = self.left.iter().chain(self.right.iter()).any(|item| item.id() == id);
        if !known {
            return;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Select every item the filter shows on `side`.
    pub fn select_visible(&mut self, side: Side) {
        let ids: Vec<String> = self.visible(side).iter().map(|item| item.id().to_string()).collect();
        self.selected.extend(ids);
    }

    /// Number of selected items on `side`.
    pub fn selected_count(&self, side: Side) -> usize {
        self.items(side)
            .iter()
            .filter(|item| self.selected.contains(item.id()))
            .count()
    }

    pub fn move_all_right(&mut self) {
        self.move_all(Side::Left);
    }

    pub fn move_all_left(&mut self) {
        self.move_all(Side::Right);
    }

    pub fn move_selected_right(&mut self) {
        self.move_selected(Side::Left);
    }

    pub fn move_selected_left(&mut self) {
        self.move_selected(Side::Right);
    }

    fn sides_mut(&mut self, from: Side) -> (&mut Vec<T>, &mut Vec<T>) {
        match from {
            Side::Left => (&mut self.left, &mut self.right),
            Side::Right => (&mut self.right, &mut self.left),
        }
    }

    fn move_all(&mut self, from: Side) {
        let moved: Vec<T> = self.sides_mut(from).0.drain(..).collect();
        for item in &moved {
            self.selected.remove(item.id());
        }
        self.sides_mut(from).1.extend(moved);
    }

    fn move_selected(&mut self, from: Side) {
        let selected = std::mem::take(&mut self.selected);
        let (source, dest) = self.sides_mut(from);
        let (moved, kept): (Vec<T>, Vec<T>) = source
            .drain(..)
            .partition(|item| selected.contains(item.id()));
        *source = kept;
        let moved_ids: Vec<String> = moved.iter().map(|item| item.id().to_string()).collect();
        dest.extend(moved);

        self.selected = selected;
        for id in moved_ids {
            self.selected.remove(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn fruit() -> TransferState<Item> {
        TransferState::new(
            vec![
                Item::new("a", "Apple"),
                Item::new("b", "Banana"),
                Item::new("c", "Cherry"),
            ],
            vec![Item::new("d", "Date")],
        )
    }

    #[test]
    fn move_all_right_preserves_order() {
        let mut state = TransferState::new(vec![Item::new("a", "a"), Item::new("b", "b")], vec![]);
        state.move_all_right();
        assert!(state.items(Side::Left).is_empty());
        assert_eq!(ids(state.items(Side::Right)), vec!["a", "b"]);
    }

    #[test]
    fn move_all_appends_to_destination() {
        let mut state = fruit();
        state.move_all_left();
        assert_eq!(ids(state.items(Side::Left)), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn move_all_ignores_filter() {
        let mut state = fruit();
        state.set_filter(Side::Left, "ban");
        state.move_all_right();
        assert!(state.items(Side::Left).is_empty());
        assert_eq!(state.items(Side::Right).len(), 4);
    }

    #[test]
    fn move_selected_moves_only_selected() {
        let mut state = fruit();
        state.toggle_selected("c");
        state.toggle_selected("a");
        state.move_selected_right();
        assert_eq!(ids(state.items(Side::Left)), vec!["b"]);
        assert_eq!(ids(state.items(Side::Right)), vec!["d", "a", "c"]);
        assert!(!state.is_selected("a"));
        assert!(!state.is_selected("c"));
    }

    #[test]
    fn move_selected_keeps_other_side_selection() {
        let mut state = fruit();
        state.toggle_selected("a");
        state.toggle_selected("d");
        state.move_selected_right();
        assert!(state.is_selected("d"));
        assert_eq!(state.selected_count(Side::Right), 1);
    }

    #[test]
    fn hidden_selected_items_still_move() {
        let mut state = fruit();
        state.toggle_selected("a");
        state.set_filter(Side::Left, "cherry");
        state.move_selected_right();
        assert_eq!(ids(state.items(Side::Right)), vec!["d", "a"]);
    }

    #[test]
    fn filter_is_case_insensitive_and_total() {
        let mut state = fruit();
        state.set_filter(Side::Left, "AN");
        let visible: Vec<&str> = state.visible(Side::Left).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(visible, vec!["b"]);

        state.set_filter(Side::Left, "[*unmatched(");
        assert!(state.visible(Side::Left).is_empty());

        state.set_filter(Side::Left, "   ");
        assert_eq!(state.visible(Side::Left).len(), 3);
    }

    #[test]
    fn toggle_ignores_unknown_ids() {
        let mut state = fruit();
        state.toggle_selected("zzz");
        assert!(!state.is_selected("zzz"));
        state.toggle_selected("b");
        state.toggle_selected("b");
        assert!(!state.is_selected("b"));
    }

    #[test]
    fn select_visible_respects_filter() {
        let mut state = fruit();
        state.set_filter(Side::Left, "e");
        state.select_visible(Side::Left);
        assert!(state.is_selected("a"));
        assert!(state.is_selected("c"));
        assert!(!state.is_selected("b"));
    }
}
