//! Color model: basic 16 ANSI colors, extended colors and the open [`RainbowColor`] capability.

use core::{fmt, str::FromStr};
use std::{borrow::Cow, sync::Arc};

use anstyle::{Ansi256Color, AnsiColor, RgbColor};

use crate::{ColorError, HexColorError};

#[cfg(test)]
mod tests;

/// Closes any foreground color, resetting it to the terminal default.
pub(crate) const FG_CLOSE: &str = "\u{1b}[39m";
/// Closes any background color, resetting it to the terminal default.
pub(crate) const BG_CLOSE: &str = "\u{1b}[49m";

/// Capability of producing SGR escape codes for a color in the foreground and background layers.
///
/// All colors shipped with this crate implement this trait; it can be implemented for custom
/// color encodings as well and then used via [`Color::custom()`]. The [`Display`](fmt::Display)
/// implementation should output a human-readable color name; it is used when printing
/// [`Style`](crate::Style)s.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use core::fmt;
/// use term_chalk::{Color, ColorSupport, RainbowColor, CHALK};
///
/// /// Uses the colon-separated form of 24-bit colors.
/// #[derive(Debug)]
/// struct ColonRgb(u8, u8, u8);
///
/// impl fmt::Display for ColonRgb {
///     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(formatter, "rgb:{}:{}:{}", self.0, self.1, self.2)
///     }
/// }
///
/// impl RainbowColor for ColonRgb {
///     fn fg_open_code(&self) -> Cow<'static, str> {
///         format!("\u{1b}[38:2::{}:{}:{}m", self.0, self.1, self.2).into()
///     }
///
///     fn bg_open_code(&self) -> Cow<'static, str> {
///         format!("\u{1b}[48:2::{}:{}:{}m", self.0, self.1, self.2).into()
///     }
/// }
///
/// let style = CHALK.fg(Color::custom(ColonRgb(255, 0, 0)));
/// let rendered = style.on_with(&ColorSupport::TrueColor, ["hot"]);
/// assert_eq!(rendered, "\u{1b}[38:2::255:0:0mhot\u{1b}[39m");
/// ```
pub trait RainbowColor: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Returns the code switching the foreground (text) color to this color.
    fn fg_open_code(&self) -> Cow<'static, str>;

    /// Returns the code switching the foreground color back to the default one.
    fn fg_close_code(&self) -> Cow<'static, str> {
        Cow::Borrowed(FG_CLOSE)
    }

    /// Returns the code switching the background color to this color.
    fn bg_open_code(&self) -> Cow<'static, str>;

    /// Returns the code switching the background color back to the default one.
    fn bg_close_code(&self) -> Cow<'static, str> {
        Cow::Borrowed(BG_CLOSE)
    }

    /// Converts this color to the [`anstyle`] data model, if possible.
    fn to_anstyle(&self) -> Option<anstyle::Color> {
        None
    }
}

/// One of 16 basic ANSI colors: 8 base hues, each in normal and bright variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)] // self-explanatory
pub enum Ansi16Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

const FG_OPEN_CODES: [&str; 16] = [
    "\u{1b}[30m",
    "\u{1b}[31m",
    "\u{1b}[32m",
    "\u{1b}[33m",
    "\u{1b}[34m",
    "\u{1b}[35m",
    "\u{1b}[36m",
    "\u{1b}[37m",
    "\u{1b}[90m",
    "\u{1b}[91m",
    "\u{1b}[92m",
    "\u{1b}[93m",
    "\u{1b}[94m",
    "\u{1b}[95m",
    "\u{1b}[96m",
    "\u{1b}[97m",
];

const BG_OPEN_CODES: [&str; 16] = [
    "\u{1b}[40m",
    "\u{1b}[41m",
    "\u{1b}[42m",
    "\u{1b}[43m",
    "\u{1b}[44m",
    "\u{1b}[45m",
    "\u{1b}[46m",
    "\u{1b}[47m",
    "\u{1b}[100m",
    "\u{1b}[101m",
    "\u{1b}[102m",
    "\u{1b}[103m",
    "\u{1b}[104m",
    "\u{1b}[105m",
    "\u{1b}[106m",
    "\u{1b}[107m",
];

const NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

impl Ansi16Color {
    /// All colors in the declaration order (i.e., ordered by their SGR code).
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Checks whether this is a bright color variant.
    pub const fn is_bright(self) -> bool {
        self.index() >= 8
    }

    /// Returns the bright (`true`) or normal (`false`) variant of the same hue.
    pub const fn bright(self, yes: bool) -> Self {
        let base = self.index() % 8;
        Self::ALL[if yes { base + 8 } else { base }]
    }

    /// Returns the name of the hue, e.g. `red` for both `Red` and `BrightRed`.
    pub const fn hue_name(self) -> &'static str {
        NAMES[self.index() % 8]
    }

    /// Looks up a normal color by its hue name (e.g., `red`).
    pub fn from_hue_name(name: &str) -> Option<Self> {
        let pos = NAMES.iter().position(|&candidate| candidate == name)?;
        Some(Self::ALL[pos])
    }

    /// Returns the SGR code for this color used as a foreground.
    pub const fn fg_open_str(self) -> &'static str {
        FG_OPEN_CODES[self.index()]
    }

    /// Returns the SGR code for this color used as a background.
    pub const fn bg_open_str(self) -> &'static str {
        BG_OPEN_CODES[self.index()]
    }
}

impl fmt::Display for Ansi16Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bright() {
            formatter.write_str("bright-")?;
        }
        formatter.write_str(self.hue_name())
    }
}

impl RainbowColor for Ansi16Color {
    fn fg_open_code(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.fg_open_str())
    }

    fn bg_open_code(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.bg_open_str())
    }

    fn to_anstyle(&self) -> Option<anstyle::Color> {
        Some(AnsiColor::from(*self).into())
    }
}

impl From<Ansi16Color> for AnsiColor {
    fn from(color: Ansi16Color) -> Self {
        match color {
            Ansi16Color::Black => Self::Black,
            Ansi16Color::Red => Self::Red,
            Ansi16Color::Green => Self::Green,
            Ansi16Color::Yellow => Self::Yellow,
            Ansi16Color::Blue => Self::Blue,
            Ansi16Color::Magenta => Self::Magenta,
            Ansi16Color::Cyan => Self::Cyan,
            Ansi16Color::White => Self::White,
            Ansi16Color::BrightBlack => Self::BrightBlack,
            Ansi16Color::BrightRed => Self::BrightRed,
            Ansi16Color::BrightGreen => Self::BrightGreen,
            Ansi16Color::BrightYellow => Self::BrightYellow,
            Ansi16Color::BrightBlue => Self::BrightBlue,
            Ansi16Color::BrightMagenta => Self::BrightMagenta,
            Ansi16Color::BrightCyan => Self::BrightCyan,
            Ansi16Color::BrightWhite => Self::BrightWhite,
        }
    }
}

impl From<AnsiColor> for Ansi16Color {
    fn from(color: AnsiColor) -> Self {
        match color {
            AnsiColor::Black => Self::Black,
            AnsiColor::Red => Self::Red,
            AnsiColor::Green => Self::Green,
            AnsiColor::Yellow => Self::Yellow,
            AnsiColor::Blue => Self::Blue,
            AnsiColor::Magenta => Self::Magenta,
            AnsiColor::Cyan => Self::Cyan,
            AnsiColor::White => Self::White,
            AnsiColor::BrightBlack => Self::BrightBlack,
            AnsiColor::BrightRed => Self::BrightRed,
            AnsiColor::BrightGreen => Self::BrightGreen,
            AnsiColor::BrightYellow => Self::BrightYellow,
            AnsiColor::BrightBlue => Self::BrightBlue,
            AnsiColor::BrightMagenta => Self::BrightMagenta,
            AnsiColor::BrightCyan => Self::BrightCyan,
            AnsiColor::BrightWhite => Self::BrightWhite,
        }
    }
}

/// Color outside the basic 16-color palette: one of [256 indexed colors] or a 24-bit RGB color.
///
/// Uses the [`anstyle`] data model for colors. Unchecked input (e.g., wide integers or strings)
/// is validated by [`Self::indexed()`], [`Self::from_hex()`] and the [`FromStr`] implementation.
///
/// # Examples
///
/// ```
/// use term_chalk::{ColorError, ExtendedColor, RainbowColor};
///
/// let color: ExtendedColor = "#fa4".parse()?;
/// assert_eq!(color, ExtendedColor::rgb(0xff, 0xaa, 0x44));
/// assert_eq!(color.fg_open_code(), "\u{1b}[38;2;255;170;68m");
///
/// let color = ExtendedColor::indexed(42)?;
/// assert_eq!(color.to_string(), "color(42)");
/// assert_eq!(color.bg_open_code(), "\u{1b}[48;5;42m");
///
/// let err = ExtendedColor::indexed(300).unwrap_err();
/// assert_eq!(err, ColorError::IndexOutOfRange(300));
/// # anyhow::Ok(())
/// ```
///
/// [256 indexed colors]: https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtendedColor {
    /// Indexed color from the 256-color palette.
    Indexed(Ansi256Color),
    /// 24-bit RGB color.
    Rgb(RgbColor),
}

impl ExtendedColor {
    /// Creates an indexed color.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is outside the `0..=255` range.
    pub fn indexed(index: u16) -> Result<Self, ColorError> {
        let index = u8::try_from(index).map_err(|_| ColorError::IndexOutOfRange(index))?;
        Ok(Self::Indexed(Ansi256Color(index)))
    }

    /// Creates a 24-bit RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(RgbColor(r, g, b))
    }

    /// Parses a color from the CSS-like hex format, e.g. `#fa4` or `#c0ffee`.
    ///
    /// # Errors
    ///
    /// Returns an error if `hex` is not a valid hex color spec.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Ok(Self::Rgb(parse_hex_color(hex)?))
    }

    fn sgr_params(self) -> String {
        match self {
            Self::Indexed(Ansi256Color(index)) => format!("5;{index}"),
            Self::Rgb(RgbColor(r, g, b)) => format!("2;{r};{g};{b}"),
        }
    }
}

impl fmt::Display for ExtendedColor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Indexed(Ansi256Color(index)) => write!(formatter, "color({index})"),
            Self::Rgb(color) => formatter.write_str(&rgb_color_to_hex(color)),
        }
    }
}

impl FromStr for ExtendedColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        let index = s
            .strip_prefix("color(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);
        // Leading zeros are disallowed to keep the canonical form unambiguous.
        if index.is_empty() || (index.len() > 1 && index.starts_with('0')) {
            return Err(ColorError::InvalidIndex);
        }
        if !index.bytes().all(|ch| ch.is_ascii_digit()) {
            return Err(ColorError::InvalidIndex);
        }
        let index: u16 = index.parse().map_err(|_| ColorError::IndexTooLarge)?;
        Self::indexed(index)
    }
}

impl RainbowColor for ExtendedColor {
    fn fg_open_code(&self) -> Cow<'static, str> {
        Cow::Owned(format!("\u{1b}[38;{}m", self.sgr_params()))
    }

    fn bg_open_code(&self) -> Cow<'static, str> {
        Cow::Owned(format!("\u{1b}[48;{}m", self.sgr_params()))
    }

    fn to_anstyle(&self) -> Option<anstyle::Color> {
        Some(match *self {
            Self::Indexed(color) => color.into(),
            Self::Rgb(color) => color.into(),
        })
    }
}

impl From<Ansi256Color> for ExtendedColor {
    fn from(color: Ansi256Color) -> Self {
        Self::Indexed(color)
    }
}

impl From<RgbColor> for ExtendedColor {
    fn from(color: RgbColor) -> Self {
        Self::Rgb(color)
    }
}

/// Parses a color from the CSS-like hex format, e.g. `#fa4` or `#c0ffee`.
///
/// # Errors
///
/// Returns an error if `hex` is not a valid hex color spec.
pub fn parse_hex_color(hex: &str) -> Result<RgbColor, HexColorError> {
    fn hex_digit(ch: u8) -> Result<u8, HexColorError> {
        match ch {
            b'0'..=b'9' => Ok(ch - b'0'),
            b'a'..=b'f' => Ok(ch - b'a' + 10),
            b'A'..=b'F' => Ok(ch - b'A' + 10),
            _ => Err(HexColorError::InvalidHexDigit),
        }
    }

    let Some(digits) = hex.as_bytes().strip_prefix(b"#") else {
        return Err(HexColorError::NoHash);
    };
    match *digits {
        [r, g, b] => Ok(RgbColor(
            hex_digit(r)? * 17,
            hex_digit(g)? * 17,
            hex_digit(b)? * 17,
        )),
        [r1, r0, g1, g0, b1, b0] => Ok(RgbColor(
            hex_digit(r1)? * 16 + hex_digit(r0)?,
            hex_digit(g1)? * 16 + hex_digit(g0)?,
            hex_digit(b1)? * 16 + hex_digit(b0)?,
        )),
        _ => Err(HexColorError::InvalidLen),
    }
}

/// Converts an RGB color to the CSS-like hex format, using the short form if possible.
pub fn rgb_color_to_hex(RgbColor(r, g, b): RgbColor) -> String {
    if r % 17 == 0 && g % 17 == 0 && b % 17 == 0 {
        format!("#{:x}{:x}{:x}", r / 17, g / 17, b / 17)
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Clone)]
enum ColorRepr {
    Ansi16(Ansi16Color),
    Extended(ExtendedColor),
    Custom(Arc<dyn RainbowColor>),
}

/// Color that can be set as the foreground or background of a [`Style`](crate::Style).
///
/// This is a cheaply cloneable handle to any [`RainbowColor`]. Basic and extended colors are stored
/// inline; [custom](Self::custom()) ones are shared.
///
/// Colors are compared by the escape codes they produce.
#[derive(Clone)]
pub struct Color(ColorRepr);

impl Color {
    /// Wraps a custom color encoding.
    pub fn custom(color: impl RainbowColor) -> Self {
        Self(ColorRepr::Custom(Arc::new(color)))
    }

    /// Returns this color as a basic ANSI color, if it is one.
    pub fn as_ansi16(&self) -> Option<Ansi16Color> {
        match &self.0 {
            ColorRepr::Ansi16(color) => Some(*color),
            _ => None,
        }
    }

    /// Returns this color as an extended color, if it is one.
    pub fn as_extended(&self) -> Option<ExtendedColor> {
        match &self.0 {
            ColorRepr::Extended(color) => Some(*color),
            _ => None,
        }
    }

    fn as_dyn(&self) -> &dyn RainbowColor {
        match &self.0 {
            ColorRepr::Ansi16(color) => color as &dyn RainbowColor,
            ColorRepr::Extended(color) => color,
            ColorRepr::Custom(color) => color.as_ref(),
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_dyn(), formatter)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_dyn(), formatter)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (ColorRepr::Ansi16(lhs), ColorRepr::Ansi16(rhs)) => lhs == rhs,
            (ColorRepr::Extended(lhs), ColorRepr::Extended(rhs)) => lhs == rhs,
            _ => {
                self.fg_open_code() == other.fg_open_code()
                    && self.fg_close_code() == other.fg_close_code()
                    && self.bg_open_code() == other.bg_open_code()
                    && self.bg_close_code() == other.bg_close_code()
            }
        }
    }
}

impl Eq for Color {}

impl RainbowColor for Color {
    fn fg_open_code(&self) -> Cow<'static, str> {
        self.as_dyn().fg_open_code()
    }

    fn fg_close_code(&self) -> Cow<'static, str> {
        self.as_dyn().fg_close_code()
    }

    fn bg_open_code(&self) -> Cow<'static, str> {
        self.as_dyn().bg_open_code()
    }

    fn bg_close_code(&self) -> Cow<'static, str> {
        self.as_dyn().bg_close_code()
    }

    fn to_anstyle(&self) -> Option<anstyle::Color> {
        self.as_dyn().to_anstyle()
    }
}

impl From<Ansi16Color> for Color {
    fn from(color: Ansi16Color) -> Self {
        Self(ColorRepr::Ansi16(color))
    }
}

impl From<ExtendedColor> for Color {
    fn from(color: ExtendedColor) -> Self {
        Self(ColorRepr::Extended(color))
    }
}

impl From<AnsiColor> for Color {
    fn from(color: AnsiColor) -> Self {
        Ansi16Color::from(color).into()
    }
}

impl From<Ansi256Color> for Color {
    fn from(color: Ansi256Color) -> Self {
        ExtendedColor::from(color).into()
    }
}

impl From<RgbColor> for Color {
    fn from(color: RgbColor) -> Self {
        ExtendedColor::from(color).into()
    }
}

impl From<anstyle::Color> for Color {
    fn from(color: anstyle::Color) -> Self {
        match color {
            anstyle::Color::Ansi(color) => color.into(),
            anstyle::Color::Ansi256(color) => color.into(),
            anstyle::Color::Rgb(color) => color.into(),
        }
    }
}
