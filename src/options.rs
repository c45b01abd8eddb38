//! Configuration options for the picker.
//!
//! This module provides the `PickOptions` struct and builder, used both by
//! library callers and (with the `cli` feature) parsed from the command line.

use std::sync::Arc;

use derive_builder::Builder;

use crate::binds::KeyMap;
use crate::engine::Normalizer;
use crate::matcher::OrderBy;

/// fzp - interactive fuzzy picker
///
/// Reads candidates from stdin, one per line, and prints the selected ones.
#[derive(Builder, Clone)]
#[builder(build_fn(name = "final_build"))]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "fzp", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct PickOptions {
    //  --- Search ---
    /// Ordering of the matched items
    ///
    /// * **score**: best fuzzy match first
    ///
    /// * **length**: shortest item first, surrounding whitespace ignored
    #[cfg_attr(
        feature = "cli",
        arg(long, value_enum, default_value = "score", help_heading = "Search", verbatim_doc_comment)
    )]
    pub order_by: OrderBy,

    /// Strip diacritics from items and query before matching
    ///
    /// `café` then matches `cafe` and the other way around
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Search"))]
    pub normalize: bool,

    /// Custom normalizer applied to items and query, implies `normalize`
    #[cfg_attr(feature = "cli", arg(skip))]
    #[builder(setter(strip_option))]
    pub normalizer: Option<Arc<dyn Normalizer>>,

    //  --- Interface ---
    /// Comma separated list of key bindings, in KEY:ACTION form
    ///
    /// Example: `--bind ctrl-j:accept,ctrl-k:toggle`
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Interface", verbatim_doc_comment))]
    pub bind: Vec<String>,

    /// Enable multiple selection
    ///
    /// Uses Tab by default for selection
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Interface"))]
    pub multi: bool,

    /// Maximum number of items that can be selected
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Interface"))]
    pub max_selection: Option<usize>,

    /// Set color theme
    ///
    /// Format: [BASE][,COLOR:ANSI[:ATTR1:ATTR2:..]]
    /// BASE is one of default, 16, bw, none
    /// COLOR is one of normal, matched, current, current_match, query, info, prompt, marker, marker_bg, selected
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Interface", verbatim_doc_comment))]
    pub color: Option<String>,

    //  --- Layout ---
    /// Show the first item at the bottom, right above the query line
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Layout"))]
    pub reverse: bool,

    /// Set prompt
    #[cfg_attr(feature = "cli", arg(long, short, default_value = "> ", help_heading = "Layout"))]
    pub prompt: String,

    /// Set highlighted item icon
    #[cfg_attr(
        feature = "cli",
        arg(long = "selector", alias = "pointer", default_value = ">", help_heading = "Layout")
    )]
    pub selector_icon: String,

    /// Set selected item icon
    #[cfg_attr(
        feature = "cli",
        arg(long = "multi-selector", default_value = ">", help_heading = "Layout")
    )]
    pub multi_select_icon: String,

    //  --- Scripting ---
    /// Initial query
    #[cfg_attr(feature = "cli", arg(long, short, help_heading = "Scripting"))]
    pub query: Option<String>,

    /// Filter mode: print the items matching the given query, best first, and exit
    ///
    /// Nothing is drawn and no key is read.
    #[cfg_attr(feature = "cli", arg(long, short, help_heading = "Scripting"))]
    pub filter: Option<String>,

    /// Interval between two terminal size checks, in milliseconds
    #[cfg_attr(feature = "cli", arg(long, default_value = "100", hide = true))]
    pub resize_poll_ms: u64,

    /// The internal (parsed) keymap
    #[cfg_attr(feature = "cli", arg(skip))]
    #[builder(setter(skip))]
    pub keymap: KeyMap,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            order_by: OrderBy::default(),
            normalize: false,
            normalizer: None,
            bind: Vec::new(),
            multi: false,
            max_selection: None,
            color: None,
            reverse: false,
            prompt: String::from("> "),
            selector_icon: String::from(">"),
            multi_select_icon: String::from(">"),
            query: None,
            filter: None,
            resize_poll_ms: 100,
            keymap: KeyMap::default(),
        }
    }
}

impl PickOptionsBuilder {
    /// Builds the PickOptions from the builder
    pub fn build(&mut self) -> Result<PickOptions, PickOptionsBuilderError> {
        self.final_build().map(|opts| opts.build())
    }
}

impl PickOptions {
    /// Finalizes the options by parsing the key bindings
    pub fn build(mut self) -> Self {
        self.keymap = self.bind.iter().fold(KeyMap::default(), |mut res, part| {
            res.add_keymaps(part.split(','));
            res
        });
        self
    }
}
