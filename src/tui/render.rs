//! Turns a [`SelectionState`] into cells.
//!
//! Layout, top to bottom: the result rows, the status line and the query line.
//!
//! <pre>
//! |> current line  |  marker, blank, text
//! | >selected line |  blank, selection glyph, text
//! |  normal line   |
//! |  2/10          |  status line
//! |> query         |  prompt and query
//! </pre>

use ratatui::style::{Color, Modifier, Style};

use super::state::SelectionState;
use super::surface::Surface;
use super::util::{char_display_width, str_display_width};
use super::viewport::Viewport;
use crate::Result;
use crate::options::PickOptions;
use crate::theme::ColorTheme;

/// Column where the item text starts
const TEXT_COL: u16 = 2;

/// One draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// Write `ch` at `(row, col)`
    Cell {
        /// Screen row
        row: u16,
        /// Screen column
        col: u16,
        /// Char to draw
        ch: char,
        /// Foreground color
        fg: Color,
        /// Background color
        bg: Color,
        /// Text attributes
        modifier: Modifier,
    },
    /// Put the text input cursor at `(row, col)`
    Cursor {
        /// Screen row
        row: u16,
        /// Screen column
        col: u16,
    },
}

impl Draw {
    fn cell(row: u16, col: u16, ch: char, style: Style) -> Self {
        Draw::Cell {
            row,
            col,
            ch,
            fg: style.fg.unwrap_or(Color::Reset),
            bg: style.bg.unwrap_or(Color::Reset),
            modifier: style.add_modifier,
        }
    }
}

/// Draws the result list, the status line and the query line
#[derive(Debug, Clone)]
pub struct Renderer {
    viewport: Viewport,
    theme: ColorTheme,
    prompt: String,
    selector_icon: char,
    multi_select_icon: char,
    multi: bool,
    reverse: bool,
    total: usize,
}

impl Renderer {
    /// Renderer for a session over `total` candidates
    pub fn from_options(options: &PickOptions, total: usize) -> Self {
        Self {
            viewport: Viewport::default(),
            theme: ColorTheme::init_from_options(options),
            prompt: options.prompt.clone(),
            selector_icon: options.selector_icon.chars().next().unwrap_or('>'),
            multi_select_icon: options.multi_select_icon.chars().next().unwrap_or('>'),
            multi: options.multi,
            reverse: options.reverse,
            total,
        }
    }

    /// Replaces the color theme
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = theme;
        self
    }

    /// The scroll state, as of the last frame
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Computes the draw calls of a `rows` x `cols` frame, updating the scroll position
    pub fn frame(&mut self, state: &SelectionState, rows: u16, cols: u16) -> Vec<Draw> {
        let mut draws = Vec::new();
        let results = state.results();
        let window = self
            .viewport
            .update(results.len(), state.cursor_item(), rows, self.reverse);

        for row in 0..window.item_rows {
            let Some(idx) = window.result_index(row) else {
                continue;
            };
            let result = &results[idx];
            let row = row as u16;
            let highlighted = state.cursor_item() == Some(idx);
            let line_style = if highlighted { self.theme.current } else { self.theme.normal };
            let match_style = if highlighted {
                self.theme.current_match
            } else {
                self.theme.normal.patch(self.theme.matched)
            };

            if highlighted {
                self.put(&mut draws, row, 0, self.selector_icon, self.theme.cursor, cols);
                self.put(&mut draws, row, 1, ' ', line_style, cols);
            }
            if state.is_selected(result.item_index) {
                let style = line_style.patch(self.theme.selected);
                self.put(&mut draws, row, 1, self.multi_select_icon, style, cols);
            }

            let mut highlights = result.highlights.iter().peekable();
            let mut col = TEXT_COL;
            for (char_idx, ch) in result.text.chars().enumerate() {
                let is_match = highlights.next_if(|&&h| h == char_idx).is_some();
                let style = if is_match { match_style } else { line_style };
                match self.put(&mut draws, row, col, ch, style, cols) {
                    Some(next) => col = next,
                    None => break,
                }
            }
        }

        if rows >= 2 {
            let mut status = format!("  {}/{}", results.len(), self.total);
            let selected = state.selected_items().len();
            if self.multi && selected > 0 {
                status.push_str(&format!(" [{selected}]"));
            }
            self.put_str(&mut draws, rows - 2, 0, &status, self.theme.info, cols);
        }

        if rows >= 1 {
            let query_row = rows - 1;
            let col = self.put_str(&mut draws, query_row, 0, &self.prompt, self.theme.prompt, cols);
            self.put_str(&mut draws, query_row, col, state.query(), self.theme.query, cols);

            let before_cursor: String = state.query().chars().take(state.cursor_position()).collect();
            let cursor_col = str_display_width(&self.prompt).saturating_add(str_display_width(&before_cursor));
            draws.push(Draw::Cursor {
                row: query_row,
                col: cursor_col.min(cols.saturating_sub(1)),
            });
        }

        draws
    }

    /// Draws a frame of `state` on `surface`
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, state: &SelectionState) -> Result<()> {
        let (rows, cols) = surface.size()?;
        let draws = self.frame(state, rows, cols);
        surface.clear()?;
        for draw in draws {
            match draw {
                Draw::Cell {
                    row,
                    col,
                    ch,
                    fg,
                    bg,
                    modifier,
                } => surface.set_cell(row, col, ch, fg, bg, modifier),
                Draw::Cursor { row, col } => surface.set_input_cursor(row, col),
            }
        }
        surface.flush()
    }

    /// Pushes one char, returns the next column or `None` when it does not fit
    fn put(&self, draws: &mut Vec<Draw>, row: u16, col: u16, ch: char, style: Style, cols: u16) -> Option<u16> {
        let next = col.checked_add(char_display_width(ch))?;
        if next > cols {
            return None;
        }
        draws.push(Draw::cell(row, col, ch, style));
        Some(next)
    }

    /// Pushes chars until the end of the line, returns the column after the last one drawn
    fn put_str(&self, draws: &mut Vec<Draw>, row: u16, mut col: u16, s: &str, style: Style, cols: u16) -> u16 {
        for ch in s.chars() {
            match self.put(draws, row, col, ch, style, cols) {
                Some(next) => col = next,
                None => break,
            }
        }
        col
    }
}
