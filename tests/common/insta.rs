use clap::Parser;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fzpick::{
    PickError, PickOptions,
    tui::{App, Renderer, Screen, Status, Tui, event::Action},
};
use ratatui::backend::TestBackend;

/// A test harness for running picker sessions with insta snapshots.
///
/// Snapshots live in `tests/snapshots/`, one file per `@snap`: `<file>__<test>.snap`,
/// then `<file>__<test>-2.snap` and so on.
///
/// Keys go through [`App::handle_key`] and every state change is published to
/// a [`Screen`] over a [`TestBackend`], the same path a real session takes.
pub struct TestHarness {
    /// The selection controller
    pub app: App,
    /// The screen the session draws on
    pub screen: Screen<Tui<TestBackend>>,
}

impl TestHarness {
    /// Send a key event and redraw if the state changed.
    pub fn key(&mut self, key: KeyEvent) -> Result<()> {
        let page_size = self.screen.page_size()?;
        if self.app.handle_key(&key, page_size) {
            self.screen.publish(self.app.snapshot())?;
        }
        Ok(())
    }

    /// Send a character key event.
    pub fn char(&mut self, c: char) -> Result<()> {
        self.key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    /// Type a string, sending each character as a key event.
    pub fn type_str(&mut self, s: &str) -> Result<()> {
        for c in s.chars() {
            self.char(c)?;
        }
        Ok(())
    }

    /// Send an action and redraw if the state changed.
    pub fn action(&mut self, action: Action) -> Result<()> {
        let page_size = self.screen.page_size()?;
        if self.app.handle_action(&action, page_size) {
            self.screen.publish(self.app.snapshot())?;
        }
        Ok(())
    }

    /// Resize the terminal and let the screen pick it up.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.screen.surface_mut().backend_mut().resize(width, height);
        self.screen.redraw_if_resized()?;
        Ok(())
    }

    /// The screen content, one line per row, trailing blanks removed.
    pub fn buffer_view(&self) -> String {
        let buffer = self.screen.surface().backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                let line: String = (area.left()..area.right()).map(|x| buffer[(x, y)].symbol()).collect();
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The screen content followed by the input cursor position.
    pub fn snapshot_view(&self) -> String {
        let cursor = self
            .screen
            .surface()
            .input_cursor()
            .map(|pos| format!("cursor: ({}, {})", pos.y, pos.x))
            .unwrap_or_else(|| "cursor: none".to_string());
        format!("{}\n{}", self.buffer_view(), cursor)
    }

    /// Text of the highlighted item
    pub fn current(&self) -> Option<String> {
        self.app.state().current().map(|r| r.text.to_string())
    }

    /// The exit code `fzp` would use, if the session is over.
    pub fn app_exit_code(&self) -> Option<i32> {
        match self.app.status() {
            Status::Active => None,
            Status::Aborted => Some(130),
            Status::Confirmed => match self.app.finish() {
                Ok(_) => Some(0),
                Err(PickError::EmptyResult) => Some(1),
                Err(_) => Some(2),
            },
        }
    }

    /// The picked items, if the session was confirmed.
    pub fn output(&self) -> Option<Vec<String>> {
        let picked = self.app.finish().ok()?;
        Some(
            picked
                .into_iter()
                .filter_map(|idx| self.app.item(idx).map(str::to_string))
                .collect(),
        )
    }
}

/// Initialize a test harness with a terminal of the given size.
pub fn enter_sized<I, S>(items: I, options: PickOptions, width: u16, height: u16) -> Result<TestHarness>
where
    I: IntoIterator<Item = S>,
    S: Into<std::sync::Arc<str>>,
{
    let app = App::from_options(&options, items)?;
    let tui = Tui::with_backend(TestBackend::new(width, height))?;
    let mut screen = Screen::new(tui, Renderer::from_options(&options, app.total()));
    screen.publish(app.snapshot())?;
    Ok(TestHarness { app, screen })
}

/// Initialize a test harness on a 30x8 terminal.
pub fn enter_items<I, S>(items: I, options: PickOptions) -> Result<TestHarness>
where
    I: IntoIterator<Item = S>,
    S: Into<std::sync::Arc<str>>,
{
    enter_sized(items, options, 30, 8)
}

/// Parse PickOptions from CLI-style arguments.
pub fn parse_options(args: &[&str]) -> PickOptions {
    let mut full_args = vec!["fzp"];
    full_args.extend(args);
    PickOptions::try_parse_from(full_args)
        .expect("Failed to parse options")
        .build()
}

// ============================================================================
// Macros
// ============================================================================

#[macro_export]
macro_rules! snap {
    ($harness:ident) => {
        insta::assert_snapshot!($harness.snapshot_view());
    };
}

/// Macro for writing compact insta snapshot tests.
///
/// ```ignore
/// insta_test!(test_name, ["a", "b", "c"], &["--multi"], {
///     @snap;              // Compare the screen with the next snapshot of the test
///     @char 'f';          // Send single character
///     @type "foo";        // Type string
///     @action Down(1);    // Send action
///     @key Enter;         // Send special key
///     @ctrl 'j';          // Send a control chord
///     @resize 30, 5;      // Resize the terminal
///     @exited 0;          // Assert the exit code fzp would use
/// });
/// ```
///
/// A `(width, height)` before the block sets the terminal size, 30x8 otherwise.
#[macro_export]
macro_rules! insta_test {
    ($name:ident, [$($item:expr),* $(,)?], $options:expr, { $($content:tt)* }) => {
        insta_test!($name, [$($item),*], $options, (30, 8), { $($content)* });
    };

    ($name:ident, [$($item:expr),* $(,)?], $options:expr, ($width:expr, $height:expr), { $($content:tt)* }) => {
        #[test]
        fn $name() -> color_eyre::Result<()> {
            let options = $crate::common::insta::parse_options($options);
            #[allow(unused_mut)]
            let mut h = $crate::common::insta::enter_sized([$($item),*], options, $width, $height)?;

            insta_test!(@expand h; $($content)*);

            Ok(())
        }
    };

    // Token processing rules
    (@expand $h:ident; ) => {};

    // @snap - compare the screen with a file snapshot, numbered per test
    (@expand $h:ident; @snap ; $($rest:tt)*) => {
        $crate::snap!($h);
        insta_test!(@expand $h; $($rest)*);
    };

    // @char - send single character
    (@expand $h:ident; @char $c:expr ; $($rest:tt)*) => {
        $h.char($c)?;
        insta_test!(@expand $h; $($rest)*);
    };

    // @type - type a string
    (@expand $h:ident; @type $text:expr ; $($rest:tt)*) => {
        $h.type_str($text)?;
        insta_test!(@expand $h; $($rest)*);
    };

    // @action - send an action (e.g. @action Toggle;)
    (@expand $h:ident; @action $action:ident ; $($rest:tt)*) => {
        $h.action(fzpick::tui::event::Action::$action)?;
        insta_test!(@expand $h; $($rest)*);
    };

    // @action with parenthesized args (e.g. @action Down(1);)
    (@expand $h:ident; @action $action:ident ($($args:tt)*) ; $($rest:tt)*) => {
        $h.action(fzpick::tui::event::Action::$action($($args)*))?;
        insta_test!(@expand $h; $($rest)*);
    };

    // @key - send a special key (Enter, Esc, Tab, etc.)
    (@expand $h:ident; @key $key:ident ; $($rest:tt)*) => {
        $h.key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::$key,
            crossterm::event::KeyModifiers::NONE
        ))?;
        insta_test!(@expand $h; $($rest)*);
    };

    // @ctrl with char
    (@expand $h:ident; @ctrl $key:literal ; $($rest:tt)*) => {
        $h.key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char($key),
            crossterm::event::KeyModifiers::CONTROL
        ))?;
        insta_test!(@expand $h; $($rest)*);
    };

    // @shift with char
    (@expand $h:ident; @shift $key:literal ; $($rest:tt)*) => {
        $h.key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char($key),
            crossterm::event::KeyModifiers::SHIFT
        ))?;
        insta_test!(@expand $h; $($rest)*);
    };

    // @resize - change the terminal size
    (@expand $h:ident; @resize $width:expr, $height:expr ; $($rest:tt)*) => {
        $h.resize($width, $height)?;
        insta_test!(@expand $h; $($rest)*);
    };

    // @dbg - debug print current buffer
    (@expand $h:ident; @dbg; $($rest:tt)*) => {
        println!("DBG buffer:\n{}", $h.snapshot_view());
        insta_test!(@expand $h; $($rest)*);
    };

    // @assert - run an assertion closure taking the harness
    // Usage: @assert(|h| h.current().as_deref() == Some("b"));
    (@expand $h:ident; @assert ( $assertion:expr ) ; $($rest:tt)*) => {
        assert!(($assertion)(&$h));
        insta_test!(@expand $h; $($rest)*);
    };

    // @output - assert the picked items
    (@expand $h:ident; @output [$($item:expr),* $(,)?] ; $($rest:tt)*) => {
        assert_eq!($h.output(), Some(vec![$($item.to_string()),*]));
        insta_test!(@expand $h; $($rest)*);
    };

    // @exited - assert the exit code fzp would use
    // Usage: @exited 0;      // Accepted with a result
    //        @exited 130;    // Aborted
    (@expand $h:ident; @exited $code:expr ; $($rest:tt)*) => {
        assert_eq!(
            $h.app_exit_code(),
            Some($code),
            "Expected app to exit with status code {}, but got {:?}",
            $code,
            $h.app_exit_code()
        );
        insta_test!(@expand $h; $($rest)*);
    };
}
