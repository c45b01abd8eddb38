//! Actions the selection controller understands.

/// Actions that can be performed on a picking session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Abort and exit with error
    Abort,
    /// Accept selection and exit
    Accept,
    /// Add a character to the query
    AddChar(char),
    /// Move cursor backward one character
    BackwardChar,
    /// Delete character before cursor
    BackwardDeleteChar,
    /// Move cursor to beginning of line
    BeginningOfLine,
    /// Delete character under cursor
    DeleteChar,
    /// Move the highlighted row down by N items
    Down(u16),
    /// Move cursor to end of line
    EndOfLine,
    /// Move cursor forward one character
    ForwardChar,
    /// Do nothing
    Ignore,
    /// Move the highlighted row down by N pages
    PageDown(u16),
    /// Move the highlighted row up by N pages
    PageUp(u16),
    /// Toggle selection of the highlighted item
    Toggle,
    /// Move the highlighted row up by N items
    Up(u16),
}

/// Parses an action string into an Action enum
///
/// Counted actions accept an argument, e.g. `down(2)` or `page-up:3`.
pub fn parse_action(raw_action: &str) -> Option<Action> {
    use Action::*;

    let (action, arg) = match raw_action.split_once([':', '(']) {
        None => (raw_action, None),
        Some((act, "")) => (act, None),
        Some((act, a)) => (act, Some(a.trim_end_matches(')'))),
    };
    trace!("parse_action: action={action}, arg={arg:?}");
    let count = || arg.and_then(|s| s.parse().ok()).unwrap_or(1);

    match action {
        "abort" => Some(Abort),
        "accept" => Some(Accept),
        "add-char" => arg.and_then(|s| s.chars().next()).map(AddChar),
        "backward-char" => Some(BackwardChar),
        "backward-delete-char" => Some(BackwardDeleteChar),
        "beginning-of-line" => Some(BeginningOfLine),
        "delete-char" => Some(DeleteChar),
        "down" => Some(Down(count())),
        "end-of-line" => Some(EndOfLine),
        "forward-char" => Some(ForwardChar),
        "ignore" => Some(Ignore),
        "page-down" => Some(PageDown(count())),
        "page-up" => Some(PageUp(count())),
        "toggle" => Some(Toggle),
        "up" => Some(Up(count())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_actions() {
        assert_eq!(parse_action("accept"), Some(Action::Accept));
        assert_eq!(parse_action("toggle"), Some(Action::Toggle));
        assert_eq!(parse_action("execute"), None);
    }

    #[test]
    fn counted_actions() {
        assert_eq!(parse_action("down"), Some(Action::Down(1)));
        assert_eq!(parse_action("down(3)"), Some(Action::Down(3)));
        assert_eq!(parse_action("page-up:2"), Some(Action::PageUp(2)));
        assert_eq!(parse_action("up(x)"), Some(Action::Up(1)));
    }

    #[test]
    fn add_char_needs_a_char() {
        assert_eq!(parse_action("add-char:x"), Some(Action::AddChar('x')));
        assert_eq!(parse_action("add-char"), None);
    }
}
