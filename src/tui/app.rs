use std::sync::Arc;

use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyEvent, KeyModifiers};

use super::event::Action;
use super::state::SelectionState;
use crate::binds::KeyMap;
use crate::item::Candidate;
use crate::matcher::Matcher;
use crate::options::PickOptions;
use crate::{PickError, Result};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Waiting for keys
    Active,
    /// The user accepted the selection
    Confirmed,
    /// The user aborted
    Aborted,
}

/// The selection controller: turns keys into state changes
///
/// It only touches [`SelectionState`]; drawing is up to the caller, which
/// publishes [`App::snapshot`] after every handled key.
pub struct App {
    state: SelectionState,
    candidates: Vec<Candidate>,
    matcher: Matcher,
    keymap: KeyMap,
    multi: bool,
    max_selection: Option<usize>,
    reverse: bool,
    status: Status,
}

impl App {
    /// Starts a session over `items`
    ///
    /// Fails with [`PickError::EmptyInput`] when there is nothing to pick from.
    pub fn from_options<I, S>(options: &PickOptions, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let matcher = Matcher::from_options(options);
        let candidates = matcher.candidates(items);
        if candidates.is_empty() {
            return Err(PickError::EmptyInput);
        }
        let state = SelectionState::new(matcher.run(&candidates, ""));
        let mut app = Self {
            state,
            candidates,
            matcher,
            keymap: options.keymap.clone(),
            multi: options.multi,
            max_selection: options.max_selection,
            reverse: options.reverse,
            status: Status::Active,
        };
        if let Some(query) = options.query.as_deref().filter(|q| !q.is_empty()) {
            app.state.set_query(query);
            app.rematch();
        }
        debug!("session started, {} items", app.candidates.len());
        Ok(app)
    }

    /// Current session state
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// An immutable copy of the state for the renderer
    pub fn snapshot(&self) -> Arc<SelectionState> {
        self.state.snapshot()
    }

    /// Where the session stands
    pub fn status(&self) -> Status {
        self.status
    }

    /// True once the session was confirmed or aborted
    pub fn should_quit(&self) -> bool {
        self.status != Status::Active
    }

    /// Number of candidates
    pub fn total(&self) -> usize {
        self.candidates.len()
    }

    /// Text of the candidate at `item_index` of the input list
    pub fn item(&self, item_index: usize) -> Option<&str> {
        self.candidates.get(item_index).map(Candidate::text)
    }

    /// Handles one key press, returns whether the state changed
    ///
    /// Unbound plain or shifted chars are typed into the query, other unbound keys are ignored.
    pub fn handle_key(&mut self, key: &KeyEvent, page_size: usize) -> bool {
        debug!("key event: {key:?}");
        let action = match self.keymap.action_for(key) {
            Some(action) => action.clone(),
            None => match (key.modifiers, key.code) {
                (KeyModifiers::NONE, Char(c)) => Action::AddChar(c),
                (KeyModifiers::SHIFT, Char(c)) => Action::AddChar(c.to_uppercase().next().unwrap_or(c)),
                _ => return false,
            },
        };
        self.handle_action(&action, page_size)
    }

    /// Applies `action`, returns whether the state changed
    ///
    /// `page_size` is the number of result rows on screen. Nothing happens once the
    /// session is no longer active.
    pub fn handle_action(&mut self, action: &Action, page_size: usize) -> bool {
        use Action::*;

        if self.should_quit() {
            return false;
        }
        trace!("{action:?}");
        // down means towards the bottom of the screen, which is the start of a reversed list
        let down: isize = if self.reverse { -1 } else { 1 };
        match action {
            Abort => {
                debug!("session aborted");
                self.status = Status::Aborted;
            }
            Accept => {
                debug!("session confirmed");
                self.status = Status::Confirmed;
            }
            AddChar(c) => {
                self.state.insert_char(*c);
                self.rematch();
            }
            BackwardChar => self.state.move_left(),
            BackwardDeleteChar => {
                if !self.state.delete_backward() {
                    return false;
                }
                self.rematch();
            }
            BeginningOfLine => self.state.move_to_start(),
            DeleteChar => {
                if !self.state.delete_forward() {
                    return false;
                }
                self.rematch();
            }
            Down(n) => self.state.move_cursor_wrapping(down * *n as isize),
            EndOfLine => self.state.move_to_end(),
            ForwardChar => self.state.move_right(),
            Ignore => return false,
            PageDown(n) => self.state.move_cursor_clamped(down * (page_size * *n as usize) as isize),
            PageUp(n) => self.state.move_cursor_clamped(-down * (page_size * *n as usize) as isize),
            Toggle => {
                if !self.multi {
                    return false;
                }
                let Some(item_index) = self.state.current().map(|result| result.item_index) else {
                    return false;
                };
                return self.state.toggle(item_index, self.max_selection);
            }
            Up(n) => self.state.move_cursor_wrapping(-down * *n as isize),
        }
        true
    }

    /// Re-runs the matcher for the current query
    fn rematch(&mut self) {
        let results = self.matcher.run(&self.candidates, self.state.query());
        self.state.set_results(results);
    }

    /// The picked item indices, in input order
    ///
    /// A multi-select session without selected items picks the highlighted one.
    pub fn selection(&self) -> Result<Vec<usize>> {
        if self.multi && !self.state.selected_items().is_empty() {
            let mut picked: Vec<usize> = self.state.selected_items().iter().copied().collect();
            picked.sort_unstable();
            return Ok(picked);
        }
        self.state
            .current()
            .map(|result| vec![result.item_index])
            .ok_or(PickError::EmptyResult)
    }

    /// Ends the session
    ///
    /// A session that was not confirmed counts as aborted.
    pub fn finish(&self) -> Result<Vec<usize>> {
        match self.status {
            Status::Confirmed => self.selection(),
            Status::Active | Status::Aborted => Err(PickError::AbortedByUser),
        }
    }
}
