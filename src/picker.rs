use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use crate::options::PickOptions;
use crate::tui::screen::lock;
use crate::tui::{App, CrosstermKeys, KeySource, Renderer, ResizeWatcher, Screen, Surface, Tui};
use crate::{PickError, Result};

/// Runs picking sessions
///
/// ```no_run
/// use fzpick::prelude::*;
///
/// let options = PickOptionsBuilder::default().multi(true).build().unwrap();
/// let picked = Picker::new(options).multi_select(["awk", "bash", "csh", "fish"]);
/// match picked {
///     Ok(items) => println!("{}", items.join("\n")),
///     Err(e) if e.is_abort() => {}
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Clone, Default)]
pub struct Picker {
    options: PickOptions,
}

impl Picker {
    /// A picker using `options` for every session
    pub fn new(options: PickOptions) -> Self {
        Self { options }
    }

    /// The options of every session
    pub fn options(&self) -> &PickOptions {
        &self.options
    }

    /// Lets the user pick one item on the terminal
    pub fn select<I, S>(&self, items: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::sync::Arc<str>>,
    {
        let options = PickOptions {
            multi: false,
            ..self.options.clone()
        };
        run_on_terminal(&options, items)?
            .into_iter()
            .next()
            .ok_or(PickError::EmptyResult)
    }

    /// Lets the user pick any number of items on the terminal, returned in input order
    pub fn multi_select<I, S>(&self, items: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::sync::Arc<str>>,
    {
        let options = PickOptions {
            multi: true,
            ..self.options.clone()
        };
        run_on_terminal(&options, items)
    }

    /// Runs a session on any surface, reading keys from `keys`
    ///
    /// Returns the picked items in input order, a single one unless `multi` is set.
    pub fn run_on<S, K, I, T>(&self, surface: &mut S, keys: &mut K, items: I) -> Result<Vec<String>>
    where
        S: Surface + Send,
        K: KeySource + ?Sized,
        I: IntoIterator<Item = T>,
        T: Into<std::sync::Arc<str>>,
    {
        let app = App::from_options(&self.options, items)?;
        run_session(&self.options, app, surface, keys)
    }
}

fn run_on_terminal<I, S>(options: &PickOptions, items: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<std::sync::Arc<str>>,
{
    // an empty input fails before the terminal is touched
    let app = App::from_options(options, items)?;
    let mut tui = Tui::new()?;
    tui.enter()?;
    let res = run_session(options, app, &mut tui, &mut CrosstermKeys);
    tui.exit()?;
    res
}

fn run_session<S, K>(options: &PickOptions, mut app: App, surface: &mut S, keys: &mut K) -> Result<Vec<String>>
where
    S: Surface + Send,
    K: KeySource + ?Sized,
{
    let screen = Mutex::new(Screen::new(surface, Renderer::from_options(options, app.total())));
    lock(&screen).publish(app.snapshot())?;

    thread::scope(|scope| -> Result<()> {
        let period = Duration::from_millis(options.resize_poll_ms.max(1));
        let _watcher = ResizeWatcher::spawn(scope, &screen, period)?;
        while !app.should_quit() {
            let key = keys.read_key()?;
            let page_size = lock(&screen).page_size()?;
            if app.handle_key(&key, page_size) {
                lock(&screen).publish(app.snapshot())?;
            }
        }
        Ok(())
    })?;

    let picked = app.finish()?;
    debug!("session ended, {} item(s) picked", picked.len());
    Ok(picked
        .into_iter()
        .filter_map(|item_index| app.item(item_index))
        .map(str::to_string)
        .collect())
}
