//! `Style` and its rendering.

use std::borrow::Cow;

use anstyle::Effects;

use crate::{
    Ansi16Color, Color, CurrentSupport, Modifier, Modifiers, RainbowColor, SupportOracle,
    TerminalString,
};

mod parse;

/// Default style without colors or modifiers. This is the starting point for building styles.
///
/// # Examples
///
/// ```
/// use term_chalk::{ColorSupport, CHALK};
///
/// let error = CHALK.bold().red();
/// let rendered = error.on_with(&ColorSupport::Basic, ["error:"]);
/// assert_eq!(rendered, "\u{1b}[1m\u{1b}[31merror:\u{1b}[22m\u{1b}[39m");
/// ```
pub const CHALK: Style = Style::new();

/// Short alias for [`CHALK`].
pub const CK: Style = CHALK;

/// Immutable combination of an optional foreground color, an optional background color
/// and a set of [`Modifier`]s.
///
/// Builder methods consume the style and return a new one; clone the style beforehand
/// to keep the original. Colors follow "last write wins" semantics, while modifiers accumulate.
///
/// # Examples
///
/// ```
/// use term_chalk::{Ansi16Color, ColorSupport, Modifier, Style, CHALK};
///
/// let style = CHALK.red().italic().bg_white().blue().bold();
/// assert_eq!(style.fg_color().and_then(|color| color.as_ansi16()), Some(Ansi16Color::Blue));
/// assert!(style.modifiers().contains(Modifier::Italic));
/// assert_eq!(style.to_string(), "bold italic blue on white");
///
/// let rendered = style.on_with(&ColorSupport::None, ["plain ", "text"]);
/// assert_eq!(rendered, "plain text");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub(crate) fg: Option<Color>,
    pub(crate) bg: Option<Color>,
    pub(crate) modifiers: Modifiers,
}

macro_rules! color_builders {
    ($($fg:ident, $bg:ident => $color:ident,)+) => {
        $(
        #[doc = concat!("Sets the foreground color to [`Ansi16Color::", stringify!($color), "`].")]
        pub fn $fg(self) -> Self {
            self.fg(Ansi16Color::$color)
        }

        #[doc = concat!("Sets the background color to [`Ansi16Color::", stringify!($color), "`].")]
        pub fn $bg(self) -> Self {
            self.bg(Ansi16Color::$color)
        }
        )+
    };
}

macro_rules! modifier_builders {
    ($($name:ident => $modifier:ident,)+) => {
        $(
        #[doc = concat!("Adds the [`Modifier::", stringify!($modifier), "`] modifier.")]
        pub fn $name(self) -> Self {
            self.modify(Modifier::$modifier)
        }
        )+
    };
}

impl Style {
    /// Creates a style without colors or modifiers. Same as [`CHALK`].
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            modifiers: Modifiers::new(),
        }
    }

    /// Checks whether this style has neither colors nor modifiers. Such a style renders text as is.
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.modifiers.is_empty()
    }

    /// Returns the foreground color.
    pub fn fg_color(&self) -> Option<&Color> {
        self.fg.as_ref()
    }

    /// Returns the background color.
    pub fn bg_color(&self) -> Option<&Color> {
        self.bg.as_ref()
    }

    /// Returns the set of modifiers.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Sets the foreground color, replacing the previously set one.
    pub fn fg(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Sets the background color, replacing the previously set one.
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Adds a modifier to the set of modifiers.
    pub fn modify(mut self, modifier: Modifier) -> Self {
        self.modifiers = self.modifiers.insert(modifier);
        self
    }

    modifier_builders!(
        reset => Reset,
        bold => Bold,
        faint => Faint,
        italic => Italic,
        underline => Underline,
        reverse => Reverse,
        conceal => Conceal,
        crossed_out => CrossedOut,
    );

    /// Alias for [`Self::faint()`].
    pub fn dim(self) -> Self {
        self.faint()
    }

    /// Alias for [`Self::conceal()`].
    pub fn hidden(self) -> Self {
        self.conceal()
    }

    /// Alias for [`Self::crossed_out()`].
    pub fn strikethrough(self) -> Self {
        self.crossed_out()
    }

    color_builders!(
        black, bg_black => Black,
        red, bg_red => Red,
        green, bg_green => Green,
        yellow, bg_yellow => Yellow,
        blue, bg_blue => Blue,
        magenta, bg_magenta => Magenta,
        cyan, bg_cyan => Cyan,
        white, bg_white => White,
        black_bright, bg_black_bright => BrightBlack,
        red_bright, bg_red_bright => BrightRed,
        green_bright, bg_green_bright => BrightGreen,
        yellow_bright, bg_yellow_bright => BrightYellow,
        blue_bright, bg_blue_bright => BrightBlue,
        magenta_bright, bg_magenta_bright => BrightMagenta,
        cyan_bright, bg_cyan_bright => BrightCyan,
        white_bright, bg_white_bright => BrightWhite,
    );

    /// Alias for [`Self::black_bright()`].
    pub fn gray(self) -> Self {
        self.black_bright()
    }

    /// Alias for [`Self::bg_black_bright()`].
    pub fn bg_gray(self) -> Self {
        self.bg_black_bright()
    }

    /// Returns the concatenated codes switching this style on: modifiers in their declaration order,
    /// then the foreground color, then the background color.
    pub fn open_codes(&self) -> String {
        StyleCodes::new(self).open
    }

    /// Returns the concatenated codes switching this style off, in the same component order
    /// as [`Self::open_codes()`].
    pub fn close_codes(&self) -> String {
        StyleCodes::new(self).close
    }

    /// Renders `strings` with this style according to the [current](crate::ColorSupport::current())
    /// color support level.
    ///
    /// If the level is [`None`](crate::ColorSupport::None), strings are concatenated verbatim.
    /// Otherwise, each string is wrapped in the style codes independently, and the results are
    /// concatenated. Before wrapping, occurrences of the foreground / background close code
    /// in a string are replaced with the open code of this style's color, so that a nested string
    /// styled with the same color does not end this style's color early.
    ///
    /// # Examples
    ///
    /// ```
    /// use term_chalk::{ColorSupport, CHALK};
    ///
    /// let red = CHALK.red();
    /// let nested = ColorSupport::Basic.scope(|| {
    ///     let inner = CHALK.red().on(["b"]);
    ///     red.on(["a", inner.as_str(), "c"])
    /// });
    /// assert_eq!(
    ///     nested,
    ///     "\u{1b}[31ma\u{1b}[39m\
    ///      \u{1b}[31m\u{1b}[31mb\u{1b}[31m\u{1b}[39m\
    ///      \u{1b}[31mc\u{1b}[39m"
    /// );
    /// ```
    pub fn on<I>(&self, strings: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.on_with(&CurrentSupport, strings)
    }

    /// Renders `strings` with this style using the specified color support `oracle`.
    /// Otherwise, works the same as [`Self::on()`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all, fields(style = %self), ret)
    )]
    pub fn on_with<O, I>(&self, oracle: &O, strings: I) -> String
    where
        O: SupportOracle + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let strings = strings.into_iter();
        let mut output = String::new();
        if !oracle.color_support().has_colors() {
            for s in strings {
                output.push_str(s.as_ref());
            }
            return output;
        }

        let codes = StyleCodes::new(self);
        for s in strings {
            codes.wrap(s.as_ref(), &mut output);
        }
        output
    }

    /// Creates a [`TerminalString`] consisting of a single fragment styled with this style.
    ///
    /// # Examples
    ///
    /// ```
    /// use term_chalk::{ColorSupport, CHALK};
    ///
    /// let greeting = CHALK.bold().paint("Hello") + ", " + CHALK.green().paint("world");
    /// assert_eq!(greeting.text(), "Hello, world");
    /// assert_eq!(
    ///     greeting.render_with(&ColorSupport::Basic),
    ///     "\u{1b}[1mHello\u{1b}[22m, \u{1b}[32mworld\u{1b}[39m"
    /// );
    /// ```
    pub fn paint(&self, text: impl Into<String>) -> TerminalString {
        TerminalString::styled(text, self.clone())
    }
}

/// Escape codes for a [`Style`], computed once per render.
#[derive(Debug)]
pub(crate) struct StyleCodes {
    open: String,
    close: String,
    /// (close, open) pairs for colors; close codes inside the wrapped text are replaced with open ones.
    color_codes: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl StyleCodes {
    pub(crate) fn new(style: &Style) -> Self {
        let mut open = String::new();
        let mut close = String::new();
        for modifier in style.modifiers.iter() {
            open.push_str(modifier.open_code());
            close.push_str(modifier.close_code());
        }

        let fg_codes = style
            .fg
            .as_ref()
            .map(|color| (color.fg_close_code(), color.fg_open_code()));
        let bg_codes = style
            .bg
            .as_ref()
            .map(|color| (color.bg_close_code(), color.bg_open_code()));
        let color_codes: Vec<_> = fg_codes.into_iter().chain(bg_codes).collect();
        for (close_code, open_code) in &color_codes {
            open.push_str(open_code);
            close.push_str(close_code);
        }

        Self {
            open,
            close,
            color_codes,
        }
    }

    /// Wraps `text` into the codes and appends the result to `output`.
    pub(crate) fn wrap(&self, text: &str, output: &mut String) {
        let mut text = Cow::Borrowed(text);
        for (close_code, open_code) in &self.color_codes {
            let (close_code, open_code): (&str, &str) = (close_code, open_code);
            if close_code.is_empty() || !text.contains(close_code) {
                continue;
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(
                count = text.matches(close_code).count(),
                close_code,
                "neutralized nested color close codes"
            );
            text = Cow::Owned(text.replace(close_code, open_code));
        }

        output.push_str(&self.open);
        output.push_str(&text);
        output.push_str(&self.close);
    }
}

const EFFECTS: [(Modifier, Effects); 7] = [
    (Modifier::Bold, Effects::BOLD),
    (Modifier::Faint, Effects::DIMMED),
    (Modifier::Italic, Effects::ITALIC),
    (Modifier::Underline, Effects::UNDERLINE),
    (Modifier::Reverse, Effects::INVERT),
    (Modifier::Conceal, Effects::HIDDEN),
    (Modifier::CrossedOut, Effects::STRIKETHROUGH),
];

/// Converts to the [`anstyle`] data model. [`Modifier::Reset`] and custom colors without
/// an `anstyle` equivalent are dropped.
impl From<&Style> for anstyle::Style {
    fn from(style: &Style) -> Self {
        let effects = EFFECTS
            .iter()
            .filter(|(modifier, _)| style.modifiers.contains(*modifier))
            .fold(Effects::new(), |acc, &(_, effect)| acc.insert(effect));
        Self::new()
            .fg_color(style.fg.as_ref().and_then(RainbowColor::to_anstyle))
            .bg_color(style.bg.as_ref().and_then(RainbowColor::to_anstyle))
            .effects(effects)
    }
}

/// Converts from the [`anstyle`] data model. Effects without a [`Modifier`] equivalent
/// (e.g., blinking or curly underline) are dropped.
impl From<anstyle::Style> for Style {
    fn from(style: anstyle::Style) -> Self {
        let effects = style.get_effects();
        let modifiers = EFFECTS
            .iter()
            .filter(|(_, effect)| effects.contains(*effect))
            .map(|&(modifier, _)| modifier)
            .collect();
        Self {
            fg: style.get_fg_color().map(Color::from),
            bg: style.get_bg_color().map(Color::from),
            modifiers,
        }
    }
}
