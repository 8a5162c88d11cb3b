//! Error types.

use core::{fmt, ops};

/// Error parsing hexadecimal RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HexColorError {
    /// Color string doesn't start with a hash `#`.
    NoHash,
    /// Color string has unexpected length (not 4 or 7).
    InvalidLen,
    /// Color string contains an invalid hex digit.
    InvalidHexDigit,
}

impl HexColorError {
    const fn as_str(self) -> &'static str {
        match self {
            Self::NoHash => "color string doesn't start with a hash `#`",
            Self::InvalidLen => "color string has unexpected length (not 4 or 7)",
            Self::InvalidHexDigit => "color string contains an invalid hex digit",
        }
    }
}

impl fmt::Display for HexColorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl std::error::Error for HexColorError {}

/// Errors constructing an [`ExtendedColor`](crate::ExtendedColor) from unchecked input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColorError {
    /// Indexed color is outside the `0..=255` range.
    IndexOutOfRange(u16),
    /// Indexed color spec is a decimal number too large to be represented, e.g. `color(99999)`.
    IndexTooLarge,
    /// Indexed color spec is not a decimal number, e.g. `color(x)`.
    InvalidIndex,
    /// Error parsing a hexadecimal RGB color.
    Hex(HexColorError),
}

impl fmt::Display for ColorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange(index) => {
                write!(formatter, "color index {index} is out of range (0..=255)")
            }
            Self::IndexTooLarge => formatter.write_str("color index is out of range (0..=255)"),
            Self::InvalidIndex => formatter.write_str("color index is not a decimal number"),
            Self::Hex(err) => fmt::Display::fmt(err, formatter),
        }
    }
}

impl From<HexColorError> for ColorError {
    fn from(err: HexColorError) -> Self {
        Self::Hex(err)
    }
}

impl std::error::Error for ColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hex(err) => Some(err),
            _ => None,
        }
    }
}

/// Kind of a [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// Unsupported token in a style spec, e.g. `what`.
    UnsupportedStyle,
    /// `on` token without the following color.
    UnfinishedBackground,
    /// Color specified twice for the same layer, like `red green` or `on red on blue`.
    DuplicateColor,
    /// Invalid extended color, e.g. `#c0g` or `color(300)`.
    Color(ColorError),
    /// Unknown color support level.
    UnsupportedLevel,
}

impl ParseErrorKind {
    pub(crate) fn with_pos(self, pos: ops::Range<usize>) -> ParseError {
        ParseError { kind: self, pos }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedStyle => formatter.write_str("unsupported style specifier"),
            Self::UnfinishedBackground => {
                formatter.write_str("no background specified after `on` keyword")
            }
            Self::DuplicateColor => formatter.write_str("duplicate color specifier"),
            Self::Color(err) => write!(formatter, "invalid color: {err}"),
            Self::UnsupportedLevel => formatter.write_str("unknown color support level"),
        }
    }
}

/// Errors that can occur parsing [`Style`](crate::Style)s or
/// [`ColorSupport`](crate::ColorSupport) levels from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    pos: ops::Range<usize>,
}

impl ParseError {
    /// Returns the kind of this error.
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Returns (byte) position in the source string that corresponds to this error.
    pub fn pos(&self) -> ops::Range<usize> {
        self.pos.clone()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "invalid style spec at {:?}: {}",
            self.pos, self.kind
        )
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Color(err) => Some(err),
            _ => None,
        }
    }
}
