//! A library for rendering personal names from compact format patterns.
//!
//! A pattern is a short string in which single letters stand for parts of a
//! name (`g` for the given name, `f` for the family name, `I` for initials,
//! and so on), `i`, `j` and `k` stand for configurable separators, and a
//! handful of operators add conditional text, fallbacks and text transforms.
//! Patterns compile once into a tree that can render any number of
//! [`NameRecord`]s.
//!
//! # Examples
//! ```
//! use name_format::{compile, render, Key, Markup, NameRecord, Settings};
//!
//! let pattern = compile("t+i(g|x)+iUf");
//! let settings = Settings::default();
//!
//! let record = NameRecord::new()
//!     .with(Key::Given, "Ada")
//!     .with(Key::Family, "Lovelace");
//! assert_eq!("Ada LOVELACE", render(&pattern, &record, &settings));
//!
//! let record = record.with(Key::Title, "Countess");
//! assert_eq!(
//!     "<span class=\"title\">Countess</span> <span class=\"given\">Ada</span> <span class=\"family\">LOVELACE</span>",
//!     render(&pattern, &record, &settings.with_markup(Markup::Wrapped))
//! );
//! ```
//!
//! # Pattern syntax
//!
//! | Token | Meaning |
//! |---|---|
//! | `t` `g` `m` `f` `c` `s` | title, given, middle, family, credentials, generational suffix |
//! | `p` / `q` | preferred, falling back to given / preferred only |
//! | `a` | alternative |
//! | `x` `y` `z` | first letter of given, middle, family |
//! | `w` / `v` | first letter of `p` / of `q` |
//! | `A` | first letter of alternative |
//! | `d` `D` `e` `E` | preferred or family, family or preferred, given or family, family or given |
//! | `I` `J` `K` `M` | initials of given+family, given+middle+family, given, given+middle |
//! | `i` `j` `k` | the three separators from [`Settings`] |
//! | `L` `U` `F` `G` `T` `S` `B` `b` | lowercase, uppercase, capitalize first letter, capitalize words, trim, HTML-escape, first word, last word of the next unit |
//! | `X+LY` | `L` only if both `X` and `Y` are non-empty |
//! | `=LY` / `^LY` | `L` only if `Y` is non-empty / empty |
//! | `X\|Y` | `X` unless it is empty, otherwise `Y` |
//! | `(`…`)` | a group, which acts as a single unit |
//! | `\c` | the character `c`, literally |
//!
//! Any other character is literal text. Compilation never fails: unmatched
//! brackets and operators missing an operand are kept as literal text.

mod cache;
mod case;
mod composition;
#[cfg(feature = "serialization")]
mod config;
mod error;
mod formats;
mod list;
mod markup;
mod parse;
mod pattern;
mod record;
mod render;
mod segment;
mod settings;
mod token;
mod transform;

#[cfg(feature = "serialization")]
mod serialization;

#[cfg(feature = "ffi")]
pub mod external;

pub use cache::PatternCache;
#[cfg(feature = "serialization")]
pub use config::Config;
pub use error::{Error, Result};
pub use formats::{builtin_format, builtin_formats};
pub use list::{format_list, Conjunction, DelimiterPrecedesLast, ListSettings};
pub use markup::{escape_html, wrap, Markup};
pub use pattern::{Node, Pattern, Neighbours};
pub use record::{Key, NameRecord};
pub use segment::{first_character, initials, split, Words};
pub use settings::Settings;
pub use token::{Component, Condition, Separator, Source, Transform};

/// Compile a pattern. Equivalent to [`Pattern::compile`].
pub fn compile(pattern: &str) -> Pattern {
    Pattern::compile(pattern)
}

/// Render a name record with a compiled pattern. Equivalent to
/// [`Pattern::render`].
pub fn render(pattern: &Pattern, record: &NameRecord, settings: &Settings) -> String {
    pattern.render(record, settings)
}
