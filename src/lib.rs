//! fzpick is an embeddable interactive fuzzy picker.
//!
//! Given a list of strings, it lets the user type a query, ranks the items by
//! fuzzy-match quality as the query changes, and returns the item(s) the user
//! picked. It can be used as a library or through the `fzp` command-line tool.
//!
//! # Examples
//!
//! ```no_run
//! use fzpick::prelude::*;
//!
//! let options = PickOptionsBuilder::default()
//!     .prompt("lang> ".to_string())
//!     .normalize(true)
//!     .build()
//!     .unwrap();
//!
//! let picked = Picker::new(options).select(["rust", "français", "español"]);
//! ```
//!
//! The matching engine can also be used on its own:
//!
//! ```
//! use fzpick::matcher::Matcher;
//!
//! let matcher = Matcher::default();
//! let candidates = matcher.candidates(["foobaz", "fooBarbaz", "foo"]);
//! let ranked = matcher.run(&candidates, "oBz");
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].text.as_ref(), "fooBarbaz");
//! assert_eq!(ranked[0].score, 49);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod binds;
pub mod engine;
mod error;
pub mod fuzzy_matcher;
pub mod item;
pub mod matcher;
pub mod options;
mod picker;
pub mod prelude;
pub mod theme;
pub mod tui;

pub use crate::error::{PickError, Result};
pub use crate::matcher::{Matcher, OrderBy};
pub use crate::options::{PickOptions, PickOptionsBuilder};
pub use crate::picker::Picker;
