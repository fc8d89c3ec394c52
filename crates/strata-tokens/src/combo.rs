//! Combo box state: a query, the options it matches and a keyboard
//! highlight that wraps at both ends.

use crate::transfer::matches_filter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboState {
    options: Vec<String>,
    query: String,
    /// Index into `matches()`.
    highlighted: Option<usize>,
    selected: Option<String>,
    open: bool,
}

impl ComboState {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    /// Replace the query, open the listbox and reset the highlight.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.open = true;
        self.highlighted = None;
    }

    /// Options matching the query, case-insensitively. A blank query
    /// matches every option.
    pub fn matches(&self) -> Vec<&str> {
        self.options
            .iter()
            .map(String::as_str)
            .filter(|option| matches_filter(option, &self.query))
            .collect()
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted(&self) -> Option<&str> {
        let index = self.highlighted?;
        self.matches().get(index).copied()
    }

    pub fn highlight_next(&mut self) {
        let len = self.matches().len();
        self.open = true;
        self.highlighted = match (len, self.highlighted) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some((i + 1) % len),
        };
    }

    pub fn highlight_previous(&mut self) {
        let len = self.matches().len();
        self.open = true;
        self.highlighted = match (len, self.highlighted) {
            (0, _) => None,
            (len, None) => Some(len - 1),
            (len, Some(i)) => Some((i + len - 1) % len),
        };
    }

    /// Commit the highlighted option: it becomes the selection and the query.
    pub fn select_highlighted(&mut self) -> Option<String> {
        let choice = self.highlighted()?.to_string();
        self.select(choice.clone());
        Some(choice)
    }

    /// Commit `value` directly, as a pointer click does.
    pub fn select(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.query = value.clone();
        self.selected = Some(value);
        self.close();
    }

    /// Byte range of the query inside `option`, for emphasis. `None` when
    /// the query is blank or absent. The range covers the matched
    /// characters of `option`, whose folded width may differ from the
    /// query's.
    pub fn match_range(&self, option: &str) -> Option<(usize, usize)> {
        let needle: Vec<char> = self.query.trim().to_lowercase().chars().collect();
        if needle.is_empty() {
            return None;
        }
        option.char_indices().find_map(|(start, _)| {
            folded_prefix_len(&option[start..], &needle).map(|len| (start, start + len))
        })
    }
}

/// Byte length of the shortest prefix of `haystack` whose lowercase form
/// is exactly `needle`.
fn folded_prefix_len(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, ch) in haystack.char_indices() {
        for folded in ch.to_lowercase() {
            if needle.get(matched) != Some(&folded) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs() -> ComboState {
        ComboState::new(["Rust", "Ruby", "Python", "Go"])
    }

    #[test]
    fn empty_query_shows_all() {
        assert_eq!(langs().matches().len(), 4);
    }

    #[test]
    fn query_filters_case_insensitively() {
        let mut combo = langs();
        combo.set_query("RU");
        assert_eq!(combo.matches(), vec!["Rust", "Ruby"]);
        assert!(combo.is_open());
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let mut combo = langs();
        combo.set_query("cobol");
        assert!(combo.matches().is_empty());
        combo.highlight_next();
        assert_eq!(combo.highlighted(), None);
        assert_eq!(combo.select_highlighted(), None);
    }

    #[test]
    fn highlight_wraps_both_ways() {
        let mut combo = langs();
        combo.set_query("r");
        combo.highlight_previous();
        assert_eq!(combo.highlighted(), Some("Ruby"));
        combo.highlight_next();
        assert_eq!(combo.highlighted(), Some("Rust"));
        combo.highlight_next();
        combo.highlight_next();
        assert_eq!(combo.highlighted(), Some("Rust"));
    }

    #[test]
    fn select_commits_and_closes() {
        let mut combo = langs();
        combo.set_query("py");
        combo.highlight_next();
        assert_eq!(combo.select_highlighted().as_deref(), Some("Python"));
        assert_eq!(combo.selected(), Some("Python"));
        assert_eq!(combo.query(), "Python");
        assert!(!combo.is_open());
        assert_eq!(combo.highlighted_index(), None);
    }

    #[test]
    fn match_range_finds_query() {
        let mut combo = langs();
        combo.set_query("th");
        assert_eq!(combo.match_range("Python"), Some((2, 4)));
        assert_eq!(combo.match_range("Go"), None);
    }

    #[test]
    fn match_range_spans_haystack_characters() {
        let mut combo = ComboState::new(["ski"]);
        combo.set_query("\u{212A}");
        assert_eq!(combo.match_range("ski"), Some((1, 2)));

        let mut combo = ComboState::new(["Da\u{212A}ota"]);
        combo.set_query("ko");
        assert_eq!(combo.match_range("Da\u{212A}ota"), Some((2, 6)));
    }
}
