//! Composable terminal text styles rendered to [ANSI escape codes].
//!
//! This library allows to:
//!
//! - Compose foreground / background colors and text modifiers (bold, underline etc.)
//!   into reusable, immutable [`Style`]s.
//! - Apply styles to strings, emitting escape codes only if the terminal supports them.
//! - Build [`TerminalString`]s from differently styled fragments and render them lazily.
//!
//! The crate does not perform I/O or detect terminal capabilities; it only produces strings.
//! Color support is reported by a [`SupportOracle`], which is consulted on each render.
//!
//! # Styles
//!
//! [`Style`] is an immutable value holding an optional foreground color, an optional background color
//! and a set of [`Modifier`]s. Styles are built by chaining builder methods starting from
//! the default style, [`CHALK`]. Each builder returns a new style; colors are overwritten
//! ("last write wins"), while modifiers accumulate.
//!
//! ```
//! use term_chalk::{ColorSupport, CHALK};
//!
//! let style = CHALK.bold().red().bg_blue();
//! let rendered = style.on_with(&ColorSupport::Basic, ["x"]);
//! assert_eq!(
//!     rendered,
//!     "\u{1b}[1m\u{1b}[31m\u{1b}[44mx\u{1b}[22m\u{1b}[39m\u{1b}[49m"
//! );
//! ```
//!
//! Opening codes are emitted in the fixed order: modifiers (in the declaration order of [`Modifier`]),
//! then the foreground color, then the background color. Closing codes follow the same component order.
//!
//! # Colors
//!
//! Colors are open for extension via the [`RainbowColor`] trait, which produces open / close codes
//! for the foreground and background layers. The crate provides the 16 basic ANSI colors
//! ([`Ansi16Color`]) and [`ExtendedColor`]s (256 indexed colors and 24-bit RGB colors),
//! the latter validated at construction.
//!
//! ```
//! use term_chalk::{ColorSupport, ExtendedColor, CHALK};
//!
//! let orange = CHALK.fg("#fa4".parse::<ExtendedColor>()?).underline();
//! let rendered = orange.on_with(&ColorSupport::TrueColor, ["warning"]);
//! assert_eq!(
//!     rendered,
//!     "\u{1b}[4m\u{1b}[38;2;255;170;68mwarning\u{1b}[24m\u{1b}[39m"
//! );
//! # anyhow::Ok(())
//! ```
//!
//! # Color support
//!
//! Rendering methods that don't take an oracle explicitly (e.g., [`Style::on()`] or the [`Display`](core::fmt::Display)
//! implementation of [`TerminalString`]) use [`ColorSupport::current()`]: the innermost thread-local override
//! set via [`ColorSupport::scope()`], or the process-wide level set via [`ColorSupport::set_global()`].
//! The level is read on each render and is never cached in styles or strings.
//!
//! ```
//! use term_chalk::{ColorSupport, CHALK};
//!
//! let message = CHALK.yellow().paint("careful") + " now";
//! assert_eq!(ColorSupport::None.scope(|| message.to_string()), "careful now");
//! assert_eq!(
//!     ColorSupport::Ansi256.scope(|| message.to_string()),
//!     "\u{1b}[33mcareful\u{1b}[39m now"
//! );
//! ```
//!
//! # Style specs
//!
//! Styles can be parsed from and printed as human-readable specs like `bold red on bright-white`;
//! see the [`FromStr`](core::str::FromStr) implementation for [`Style`] for details.
//!
//! # Crate features
//!
//! ## `tracing`
//!
//! *(Off by default)*
//!
//! Emits [`tracing`](https://docs.rs/tracing/) spans and events when rendering styles,
//! e.g. when color close codes in nested strings are neutralized.
//!
//! [ANSI escape codes]: https://en.wikipedia.org/wiki/ANSI_escape_code

// Documentation settings.
#![doc(html_root_url = "https://docs.rs/term-chalk/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use crate::{
    color::{
        parse_hex_color, rgb_color_to_hex, Ansi16Color, Color, ExtendedColor, RainbowColor,
    },
    errors::{ColorError, HexColorError, ParseError, ParseErrorKind},
    modifier::{Modifier, Modifiers},
    string::{Fragment, TerminalString},
    style::{Style, CHALK, CK},
    support::{ColorSupport, CurrentSupport, SupportOracle},
};

mod color;
mod errors;
mod modifier;
mod string;
mod style;
mod support;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
