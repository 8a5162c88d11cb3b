//! Terminal color support levels and the oracle consulted when rendering styles.

use core::{cell::Cell, fmt, str::FromStr};
use std::sync::atomic::{AtomicU8, Ordering};

use crate::{ParseError, ParseErrorKind};

/// Color support level of the output terminal.
///
/// Levels are ordered by increasing capabilities. Rendering only distinguishes [`Self::None`]
/// (no escape codes are emitted at all) from the other levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorSupport {
    /// No support for escape codes; styled text is output verbatim.
    None,
    /// Basic 16 ANSI colors.
    Basic,
    /// 256 indexed colors.
    Ansi256,
    /// 24-bit RGB colors.
    TrueColor,
}

static GLOBAL_SUPPORT: AtomicU8 = AtomicU8::new(ColorSupport::Basic as u8);

thread_local! {
    static SCOPED_SUPPORT: Cell<Option<ColorSupport>> = const { Cell::new(None) };
}

impl ColorSupport {
    const ALL: [Self; 4] = [Self::None, Self::Basic, Self::Ansi256, Self::TrueColor];

    /// Checks whether this level allows emitting escape codes.
    pub const fn has_colors(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the process-wide support level. Initially, it is [`Self::Basic`].
    pub fn global() -> Self {
        Self::ALL[usize::from(GLOBAL_SUPPORT.load(Ordering::Relaxed))]
    }

    /// Sets the process-wide support level, e.g. based on the output of a detection library.
    /// Threads that have a [scoped override](Self::scope()) are not affected until the override ends.
    pub fn set_global(self) {
        let prev = GLOBAL_SUPPORT.swap(self as u8, Ordering::Relaxed);
        #[cfg(feature = "tracing")]
        tracing::debug!(prev = %Self::ALL[usize::from(prev)], level = %self, "set global color support level");
        #[cfg(not(feature = "tracing"))]
        let _ = prev;
    }

    /// Returns the support level effective for the current thread: the innermost
    /// [scoped override](Self::scope()) if there is one, or the [global level](Self::global()).
    pub fn current() -> Self {
        SCOPED_SUPPORT
            .with(Cell::get)
            .unwrap_or_else(Self::global)
    }

    /// Runs `action` with this level overriding the support level for the current thread.
    /// The previous level is restored once `action` completes (including when it panics).
    ///
    /// # Examples
    ///
    /// ```
    /// use term_chalk::{ColorSupport, CHALK};
    ///
    /// let plain = ColorSupport::None.scope(|| CHALK.red().on(["hi"]));
    /// assert_eq!(plain, "hi");
    /// let styled = ColorSupport::Basic.scope(|| CHALK.red().on(["hi"]));
    /// assert_eq!(styled, "\u{1b}[31mhi\u{1b}[39m");
    /// ```
    pub fn scope<R>(self, action: impl FnOnce() -> R) -> R {
        struct RestoreGuard(Option<ColorSupport>);

        impl Drop for RestoreGuard {
            fn drop(&mut self) {
                SCOPED_SUPPORT.with(|cell| cell.set(self.0));
            }
        }

        let _guard = RestoreGuard(SCOPED_SUPPORT.with(|cell| cell.replace(Some(self))));
        action()
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::Ansi256 => "ansi256",
            Self::TrueColor => "truecolor",
        }
    }
}

impl fmt::Display for ColorSupport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ColorSupport {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "none" | "never" | "0" => Self::None,
            "basic" | "ansi" | "ansi16" | "16" | "1" => Self::Basic,
            "ansi256" | "256" | "2" => Self::Ansi256,
            "truecolor" | "24bit" | "3" => Self::TrueColor,
            _ => return Err(ParseErrorKind::UnsupportedLevel.with_pos(0..s.len())),
        })
    }
}

/// Source of truth about [`ColorSupport`] queried on each render.
pub trait SupportOracle {
    /// Returns the current color support level.
    fn color_support(&self) -> ColorSupport;
}

/// A fixed level acts as an oracle always reporting this level.
impl SupportOracle for ColorSupport {
    fn color_support(&self) -> ColorSupport {
        *self
    }
}

impl<F> SupportOracle for F
where
    F: Fn() -> ColorSupport,
{
    fn color_support(&self) -> ColorSupport {
        self()
    }
}

/// Oracle reporting the [level effective for the current thread](ColorSupport::current()).
/// This is the oracle used by rendering methods that don't take an oracle explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentSupport;

impl SupportOracle for CurrentSupport {
    fn color_support(&self) -> ColorSupport {
        ColorSupport::current()
    }
}

#[cfg(test)]
mod tests {
    use std::panic;

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn scoped_override_is_restored() {
        let outer = ColorSupport::current();
        ColorSupport::None.scope(|| {
            assert_eq!(ColorSupport::current(), ColorSupport::None);
            ColorSupport::TrueColor.scope(|| {
                assert_eq!(ColorSupport::current(), ColorSupport::TrueColor);
            });
            assert_eq!(ColorSupport::current(), ColorSupport::None);
        });
        assert_eq!(ColorSupport::current(), outer);
    }

    #[test]
    fn scoped_override_is_restored_on_panic() {
        ColorSupport::Ansi256.scope(|| {
            let result = panic::catch_unwind(|| {
                ColorSupport::None.scope(|| panic!("oops"));
            });
            assert!(result.is_err());
            assert_eq!(ColorSupport::current(), ColorSupport::Ansi256);
        });
    }

    #[test]
    fn oracle_implementations() {
        assert_eq!(ColorSupport::Ansi256.color_support(), ColorSupport::Ansi256);
        let closure = || ColorSupport::None;
        assert_eq!(closure.color_support(), ColorSupport::None);
        let current = ColorSupport::TrueColor.scope(|| CurrentSupport.color_support());
        assert_eq!(current, ColorSupport::TrueColor);
    }

    #[test]
    fn parsing_support_level() {
        assert_eq!("none".parse::<ColorSupport>().unwrap(), ColorSupport::None);
        assert_eq!("256".parse::<ColorSupport>().unwrap(), ColorSupport::Ansi256);
        assert_eq!(
            " TrueColor ".parse::<ColorSupport>().unwrap(),
            ColorSupport::TrueColor
        );
        for level in ColorSupport::ALL {
            assert_eq!(level.to_string().parse::<ColorSupport>().unwrap(), level);
        }

        let err = "rainbow".parse::<ColorSupport>().unwrap_err();
        assert_matches!(err.kind(), ParseErrorKind::UnsupportedLevel);
        assert_eq!(err.pos(), 0..7);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(ColorSupport::None < ColorSupport::Basic);
        assert!(ColorSupport::Ansi256 < ColorSupport::TrueColor);
        assert!(!ColorSupport::None.has_colors());
        assert!(ColorSupport::Basic.has_colors());
    }
}
