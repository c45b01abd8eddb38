//! The mutable state of a picking session.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::item::MatchResult;

/// Query, highlighted row and selection of a session
///
/// `results` sits behind an `Arc` so that cloning the state into a render
/// snapshot does not copy the result list.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    query: String,
    /// in chars
    cursor_position: usize,
    results: Arc<Vec<MatchResult>>,
    cursor_item: Option<usize>,
    /// keyed by `item_index`
    selected_items: IndexSet<usize>,
}

impl SelectionState {
    /// State with an empty query showing `results`
    pub fn new(results: Vec<MatchResult>) -> Self {
        let mut state = Self::default();
        state.set_results(results);
        state
    }

    /// An immutable copy for the renderer
    pub fn snapshot(&self) -> Arc<SelectionState> {
        Arc::new(self.clone())
    }

    /// Current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Position of the input cursor in the query, in chars
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Ranked results for the current query
    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    /// Index of the highlighted row in `results`, `None` iff `results` is empty
    pub fn cursor_item(&self) -> Option<usize> {
        self.cursor_item
    }

    /// The highlighted result
    pub fn current(&self) -> Option<&MatchResult> {
        self.cursor_item.and_then(|idx| self.results.get(idx))
    }

    /// Selected item indices, in selection order
    pub fn selected_items(&self) -> &IndexSet<usize> {
        &self.selected_items
    }

    /// Whether the item at `item_index` of the input list is selected
    pub fn is_selected(&self, item_index: usize) -> bool {
        self.selected_items.contains(&item_index)
    }

    /// Replaces the results and re-clamps the highlighted row
    ///
    /// The row index is kept when still valid, so it may now point at a different item.
    pub fn set_results(&mut self, results: Vec<MatchResult>) {
        self.cursor_item = match results.len() {
            0 => None,
            len => Some(self.cursor_item.unwrap_or(0).min(len - 1)),
        };
        self.results = Arc::new(results);
    }

    /// Moves the highlighted row by `delta`, wrapping around the list
    pub fn move_cursor_wrapping(&mut self, delta: isize) {
        let len = self.results.len();
        if let Some(current) = self.cursor_item {
            let next = (current as isize + delta).rem_euclid(len as isize);
            self.cursor_item = Some(next as usize);
        }
    }

    /// Moves the highlighted row by `delta`, stopping at both ends
    pub fn move_cursor_clamped(&mut self, delta: isize) {
        let len = self.results.len();
        if let Some(current) = self.cursor_item {
            let next = (current as isize).saturating_add(delta).clamp(0, len as isize - 1);
            self.cursor_item = Some(next as usize);
        }
    }

    fn query_len(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map_or(self.query.len(), |(idx, _)| idx)
    }

    /// Replaces the query and puts the input cursor at its end
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.cursor_position = self.query_len();
    }

    /// Inserts `c` at the input cursor and advances it
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor_position);
        self.query.insert(at, c);
        self.cursor_position += 1;
    }

    /// Deletes the char before the input cursor, returns false at the start of the query
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.cursor_position -= 1;
        let at = self.byte_offset(self.cursor_position);
        self.query.remove(at);
        true
    }

    /// Deletes the char under the input cursor, returns false at the end of the query
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor_position >= self.query_len() {
            return false;
        }
        let at = self.byte_offset(self.cursor_position);
        self.query.remove(at);
        true
    }

    /// Moves the input cursor one char left
    pub fn move_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Moves the input cursor one char right
    pub fn move_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.query_len());
    }

    /// Moves the input cursor to the start of the query
    pub fn move_to_start(&mut self) {
        self.cursor_position = 0;
    }

    /// Moves the input cursor to the end of the query
    pub fn move_to_end(&mut self) {
        self.cursor_position = self.query_len();
    }

    /// Toggles the selection of `item_index`
    ///
    /// Adding is refused once `max` items are selected. Returns whether the selection changed.
    pub fn toggle(&mut self, item_index: usize, max: Option<usize>) -> bool {
        if self.selected_items.shift_remove(&item_index) {
            trace!("deselected item {item_index}");
            return true;
        }
        if max.is_some_and(|max| self.selected_items.len() >= max) {
            debug!("selection limit of {} reached", self.selected_items.len());
            return false;
        }
        trace!("selected item {item_index}");
        self.selected_items.insert(item_index)
    }
}
