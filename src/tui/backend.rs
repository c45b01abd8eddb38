use std::io::{BufWriter, Stderr};
use std::ops::{Deref, DerefMut};
use std::sync::Once;

use crossterm::cursor;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect, Size};
use ratatui::prelude::Backend;
use ratatui::style::{Color, Modifier, Style};

use super::surface::{KeySource, Surface};
use crate::{PickError, Result};

static PANIC_HOOK_SET: Once = Once::new();

/// The backend used on a real terminal
pub type DefaultBackend = CrosstermBackend<BufWriter<Stderr>>;

/// Terminal surface drawing through ratatui
///
/// Cells are staged in a buffer and handed to ratatui on flush, which only
/// sends the cells that changed since the previous frame.
pub struct Tui<B: Backend = DefaultBackend> {
    /// The ratatui terminal instance
    pub terminal: ratatui::Terminal<B>,
    staged: Buffer,
    input_cursor: Option<Position>,
    last_size: Size,
    entered: bool,
}

impl Tui<DefaultBackend> {
    /// Creates a TUI drawing on stderr, leaving stdout free for the output
    pub fn new() -> Result<Self> {
        Self::with_backend(CrosstermBackend::new(BufWriter::new(std::io::stderr())))
    }
}

impl<B: Backend> Tui<B>
where
    B::Error: Send + Sync + 'static,
{
    /// Creates a new TUI with the specified backend
    pub fn with_backend(backend: B) -> Result<Self> {
        let terminal = ratatui::Terminal::new(backend).map_err(PickError::terminal)?;
        let last_size = terminal.size().map_err(PickError::terminal)?;
        Ok(Self {
            staged: Buffer::empty(Rect::from((Position::ORIGIN, last_size))),
            terminal,
            input_cursor: None,
            last_size,
            entered: false,
        })
    }
}

impl<B: Backend> Tui<B> {
    /// Enters the TUI by enabling raw mode and switching to the alternate screen
    pub fn enter(&mut self) -> Result<()> {
        set_panic_hook();
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(std::io::stderr(), EnterAlternateScreen, cursor::Show)?;
        self.entered = true;
        debug!("entered alternate screen");
        Ok(())
    }

    /// Exits the TUI by leaving the alternate screen and disabling raw mode
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        crossterm::execute!(std::io::stderr(), LeaveAlternateScreen, cursor::Show)?;
        crossterm::terminal::disable_raw_mode()?;
        debug!("left alternate screen");
        Ok(())
    }

    /// Where the text input cursor was placed for the current frame
    pub fn input_cursor(&self) -> Option<Position> {
        self.input_cursor
    }
}

impl<B: Backend> Deref for Tui<B> {
    type Target = ratatui::Terminal<B>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl<B: Backend> DerefMut for Tui<B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl<B: Backend> Drop for Tui<B> {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

impl<B: Backend> Surface for Tui<B>
where
    B::Error: Send + Sync + 'static,
{
    fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size().map_err(PickError::terminal)?;
        Ok((size.height, size.width))
    }

    fn set_cell(&mut self, row: u16, col: u16, ch: char, fg: Color, bg: Color, modifier: Modifier) {
        let style = Style::default().fg(fg).bg(bg).add_modifier(modifier);
        if let Some(cell) = self.staged.cell_mut(Position::new(col, row)) {
            cell.set_char(ch).set_style(style);
        }
    }

    fn clear(&mut self) -> Result<()> {
        let size = self.terminal.size().map_err(PickError::terminal)?;
        self.staged.resize(Rect::from((Position::ORIGIN, size)));
        self.staged.reset();
        self.input_cursor = None;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let staged = &self.staged;
        let input_cursor = self.input_cursor;
        self.terminal
            .draw(|frame| {
                let area = frame.area().intersection(staged.area);
                let buf = frame.buffer_mut();
                for y in area.top()..area.bottom() {
                    for x in area.left()..area.right() {
                        buf[(x, y)] = staged[(x, y)].clone();
                    }
                }
                if let Some(position) = input_cursor {
                    frame.set_cursor_position(position);
                }
            })
            .map_err(PickError::terminal)?;
        Ok(())
    }

    fn set_input_cursor(&mut self, row: u16, col: u16) {
        self.input_cursor = Some(Position::new(col, row));
    }

    fn poll_resize(&mut self) -> Result<bool> {
        let size = self.terminal.size().map_err(PickError::terminal)?;
        let resized = size != self.last_size;
        if resized {
            debug!(
                "terminal resized from {}x{} to {}x{}",
                self.last_size.width, self.last_size.height, size.width, size.height
            );
            self.last_size = size;
        }
        Ok(resized)
    }
}

/// Reads key presses from the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn read_key(&mut self) -> Result<KeyEvent> {
        loop {
            // resizes are picked up by the resize watcher
            if let Event::Key(key) = crossterm::event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(key);
            }
        }
    }
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            ratatui::restore(); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    });
}
