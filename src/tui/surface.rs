//! What the picker needs from a terminal.

use crossterm::event::KeyEvent;
use ratatui::style::{Color, Modifier};

use crate::Result;

/// A drawable character grid
///
/// Coordinates are `(row, col)` from the top-left corner. Cells written since
/// the last [`Surface::clear`] become visible on [`Surface::flush`].
pub trait Surface {
    /// Current size as `(rows, cols)`
    fn size(&self) -> Result<(u16, u16)>;

    /// Writes one char; writes outside the surface are ignored
    fn set_cell(&mut self, row: u16, col: u16, ch: char, fg: Color, bg: Color, modifier: Modifier);

    /// Starts a new frame with every cell blank
    fn clear(&mut self) -> Result<()>;

    /// Shows the frame
    fn flush(&mut self) -> Result<()>;

    /// Places the text input cursor, shown on the next flush
    fn set_input_cursor(&mut self, row: u16, col: u16);

    /// True when the size changed since the previous call
    fn poll_resize(&mut self) -> Result<bool>;
}

/// A blocking source of key presses
pub trait KeySource {
    /// Waits for the next key press
    fn read_key(&mut self) -> Result<KeyEvent>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> Result<(u16, u16)> {
        (**self).size()
    }

    fn set_cell(&mut self, row: u16, col: u16, ch: char, fg: Color, bg: Color, modifier: Modifier) {
        (**self).set_cell(row, col, ch, fg, bg, modifier)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn set_input_cursor(&mut self, row: u16, col: u16) {
        (**self).set_input_cursor(row, col)
    }

    fn poll_resize(&mut self) -> Result<bool> {
        (**self).poll_resize()
    }
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn read_key(&mut self) -> Result<KeyEvent> {
        (**self).read_key()
    }
}
