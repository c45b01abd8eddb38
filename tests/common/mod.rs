#[macro_use]
pub mod insta;

use std::collections::VecDeque;
use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fzpick::tui::KeySource;

/// Keys fed to a session one at a time
///
/// Once the script is exhausted, reading fails like a closed terminal would.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Every char of `s` as an unmodified key press, then `end`
    pub fn typed(s: &str, end: KeyCode) -> Self {
        Self::new(
            s.chars()
                .map(|c| key(KeyCode::Char(c)))
                .chain(std::iter::once(key(end))),
        )
    }

    /// Keys not read yet
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> fzpick::Result<KeyEvent> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted").into())
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
