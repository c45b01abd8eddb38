//! Key binding configuration and parsing.
//!
//! This module provides utilities for parsing and managing keyboard shortcuts
//! and their associated actions.

use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};

use color_eyre::Result;
use color_eyre::eyre::{OptionExt, eyre};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::event::{self, Action};

/// A map of key events to their associated action
#[derive(Clone, Debug)]
pub struct KeyMap(pub HashMap<KeyEvent, Action>);

impl Deref for KeyMap {
    type Target = HashMap<KeyEvent, Action>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for KeyMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<&str> for KeyMap {
    fn from(value: &str) -> Self {
        parse_keymaps(value.split(','))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        get_default_key_map()
    }
}

impl KeyMap {
    /// Adds keymaps from the source, parsing them using parse_keymap
    ///
    /// Invalid entries are logged and skipped.
    pub fn add_keymaps<'a, T>(&mut self, source: T)
    where
        T: Iterator<Item = &'a str>,
    {
        for map in source {
            if let Ok((key, action)) = parse_keymap(map) {
                self.bind(key, action)
                    .unwrap_or_else(|err| debug!("Failed to bind key {map}: {err}"));
            } else {
                debug!("Failed to parse key: {map}");
            }
        }
    }

    fn bind(&mut self, key: &str, action: Action) -> Result<()> {
        let key = parse_key(key)?;
        self.insert(key, action);
        Ok(())
    }

    /// Looks up the action bound to `key`
    ///
    /// Shift is ignored for plain characters since terminals report it inconsistently.
    pub fn action_for(&self, key: &KeyEvent) -> Option<&Action> {
        self.get(key).or_else(|| match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.get(&KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT))
            }
            _ => None,
        })
    }
}

/// Bindings every session starts with, as `(key, action)` in `--bind` syntax
const DEFAULT_BINDS: &[(&str, Action)] = &[
    ("enter", Action::Accept),
    ("esc", Action::Abort),
    ("ctrl-c", Action::Abort),
    ("ctrl-g", Action::Abort),
    ("up", Action::Up(1)),
    ("ctrl-k", Action::Up(1)),
    ("ctrl-p", Action::Up(1)),
    ("down", Action::Down(1)),
    ("ctrl-j", Action::Down(1)),
    ("ctrl-n", Action::Down(1)),
    ("pgup", Action::PageUp(1)),
    ("pgdn", Action::PageDown(1)),
    ("left", Action::BackwardChar),
    ("ctrl-b", Action::BackwardChar),
    ("right", Action::ForwardChar),
    ("ctrl-f", Action::ForwardChar),
    ("tab", Action::Toggle),
    ("home", Action::BeginningOfLine),
    ("ctrl-a", Action::BeginningOfLine),
    ("end", Action::EndOfLine),
    ("ctrl-e", Action::EndOfLine),
    ("bspace", Action::BackwardDeleteChar),
    ("ctrl-h", Action::BackwardDeleteChar),
    ("del", Action::DeleteChar),
];

/// Returns the default key bindings
pub fn get_default_key_map() -> KeyMap {
    KeyMap(
        DEFAULT_BINDS
            .iter()
            .filter_map(|(key, action)| parse_key(key).ok().map(|key| (key, action.clone())))
            .collect(),
    )
}

fn modifier(name: &str) -> Option<KeyModifiers> {
    Some(match name {
        "ctrl" => KeyModifiers::CONTROL,
        "alt" => KeyModifiers::ALT,
        "shift" => KeyModifiers::SHIFT,
        _ => return None,
    })
}

fn named_key(name: &str) -> Option<KeyCode> {
    Some(match name {
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "bspace" | "bs" | "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "tab" => KeyCode::Tab,
        "btab" => KeyCode::BackTab,
        "esc" => KeyCode::Esc,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "del" | "delete" => KeyCode::Delete,
        "pgup" | "page-up" => KeyCode::PageUp,
        "pgdn" | "pgdown" | "page-down" => KeyCode::PageDown,
        f => KeyCode::F(f.strip_prefix('f')?.parse().ok()?),
    })
}

/// Parses a key str such as `ctrl-alt-x`, `A` or `pgup` into a crossterm KeyEvent
///
/// An uppercase letter stands for its shifted lowercase key.
pub fn parse_key(key: &str) -> Result<KeyEvent> {
    let (prefix, name) = match key.rsplit_once('-') {
        // a trailing '-' is the minus key itself
        Some((prefix, "")) => (prefix.strip_suffix('-').unwrap_or(prefix), "-"),
        Some((prefix, name)) => (prefix, name),
        None => ("", key),
    };
    if name.is_empty() {
        return Err(eyre!("Cannot parse empty key"));
    }

    let mut mods = prefix
        .split('-')
        .filter(|part| !part.is_empty())
        .try_fold(KeyModifiers::NONE, |mods, part| {
            modifier(part)
                .map(|m| mods | m)
                .ok_or_else(|| eyre!("Failed to parse {part} as key modifier"))
        })?;

    let mut chars = name.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_uppercase() => {
            mods |= KeyModifiers::SHIFT;
            KeyCode::Char(c.to_lowercase().next().ok_or_eyre("no lowercase form")?)
        }
        (Some(c), None) => KeyCode::Char(c),
        _ => named_key(&name.to_lowercase()).ok_or_else(|| eyre!("Unknown key {name}"))?,
    };

    Ok(KeyEvent::new(code, mods))
}

/// Parse an iterator of keymaps into a KeyMap, on top of the defaults
pub fn parse_keymaps<'a, T>(maps: T) -> KeyMap
where
    T: Iterator<Item = &'a str>,
{
    let mut res = KeyMap::default();
    res.add_keymaps(maps);
    res
}

/// Parse a single keymap and return the key and action
pub fn parse_keymap(key_action: &str) -> Result<(&str, Action)> {
    if key_action.is_empty() {
        return Err(eyre!("Got an empty keybind, skipping"));
    }
    debug!("got key_action: {:?}", key_action);
    let (key, action) = key_action
        .split_once(':')
        .ok_or(eyre!("Failed to parse {} as key and action", key_action))?;
    let action = event::parse_action(action).ok_or(eyre!("Unknown action `{}`", action))?;
    Ok((key, action))
}
