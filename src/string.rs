//! `TerminalString`: a sequence of styled fragments.

use core::{fmt, ops};

use unicode_width::UnicodeWidthStr;

use crate::{style::StyleCodes, CurrentSupport, Style, SupportOracle};

/// Span of text with a style attached.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StyledSpan {
    style: Style,
    start: usize,
    len: usize,
}

impl StyledSpan {
    fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Fragment of a [`TerminalString`]: text with a uniform [`Style`] attached to it.
/// Returned by the [`TerminalString::fragments()`] iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Unstyled text.
    pub text: &'a str,
    /// Style applied to the text.
    pub style: &'a Style,
}

/// Ordered sequence of text fragments, each with its own [`Style`].
///
/// Strings are composed by concatenation with `+`, either with other `TerminalString`s or with plain
/// strings (which become fragments with the default style). Concatenation never merges fragments,
/// even if adjacent fragments have the same style.
///
/// The [`Display`](fmt::Display) implementation renders the string with escape codes according to
/// the [current](crate::ColorSupport::current()) color support level; [`Self::render_with()`] allows to specify
/// the support oracle explicitly. [`Self::text()`] returns the text without styling.
///
/// # Examples
///
/// ```
/// use term_chalk::{ColorSupport, CHALK};
///
/// let status = "Status: " + CHALK.green().bold().paint("OK") + " (3 checks)";
/// assert_eq!(status.fragment_count(), 3);
/// assert_eq!(status.text(), "Status: OK (3 checks)");
///
/// let rendered = ColorSupport::Basic.scope(|| status.to_string());
/// assert_eq!(
///     rendered,
///     "Status: \u{1b}[1m\u{1b}[32mOK\u{1b}[22m\u{1b}[39m (3 checks)"
/// );
/// let plain = ColorSupport::None.scope(|| status.to_string());
/// assert_eq!(plain, "Status: OK (3 checks)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalString {
    text: String,
    spans: Vec<StyledSpan>,
}

impl TerminalString {
    /// Creates an empty string without fragments.
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            spans: Vec::new(),
        }
    }

    /// Creates a string consisting of a single fragment with the specified style.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        let text = text.into();
        let len = text.len();
        Self {
            text,
            spans: vec![StyledSpan {
                style,
                start: 0,
                len,
            }],
        }
    }

    /// Creates a string consisting of a single fragment with the default style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::new())
    }

    /// Returns the unstyled text of all fragments concatenated.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the unstyled text behind this string.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns the number of fragments in this string.
    pub fn fragment_count(&self) -> usize {
        self.spans.len()
    }

    /// Checks whether this string has no fragments.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns the display width of the text, as measured by [`unicode-width`](unicode_width).
    pub fn width(&self) -> usize {
        self.text.width()
    }

    /// Iterates over fragments in this string.
    pub fn fragments(&self) -> impl ExactSizeIterator<Item = Fragment<'_>> + '_ {
        self.spans.iter().map(|span| Fragment {
            text: &self.text[span.start..span.end()],
            style: &span.style,
        })
    }

    fn append(&mut self, other: &Self) {
        let offset = self.text.len();
        self.spans.extend(other.spans.iter().map(|span| StyledSpan {
            start: span.start + offset,
            ..span.clone()
        }));
        self.text.push_str(&other.text);
    }

    /// Renders this string with escape codes, using the specified color support `oracle`.
    /// The oracle is queried once.
    ///
    /// Each fragment is wrapped into the codes of its style in the same way as [`Style::on()`] does,
    /// including neutralizing color close codes that may be present in the fragment text.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "trace",
            skip_all,
            fields(self.fragment_count = self.fragment_count()),
            ret
        )
    )]
    pub fn render_with<O: SupportOracle + ?Sized>(&self, oracle: &O) -> String {
        if !oracle.color_support().has_colors() {
            return self.text.clone();
        }

        let mut output = String::with_capacity(self.text.len());
        for fragment in self.fragments() {
            StyleCodes::new(fragment.style).wrap(fragment.text, &mut output);
        }
        output
    }
}

impl fmt::Display for TerminalString {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.render_with(&CurrentSupport))
    }
}

impl From<&str> for TerminalString {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for TerminalString {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl ops::Add for TerminalString {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.append(&rhs);
        self
    }
}

impl ops::Add<&TerminalString> for &TerminalString {
    type Output = TerminalString;

    fn add(self, rhs: &TerminalString) -> TerminalString {
        let mut output = self.clone();
        output.append(rhs);
        output
    }
}

impl ops::Add<&str> for TerminalString {
    type Output = Self;

    fn add(self, rhs: &str) -> Self {
        self + Self::plain(rhs)
    }
}

impl ops::Add<String> for TerminalString {
    type Output = Self;

    fn add(self, rhs: String) -> Self {
        self + Self::plain(rhs)
    }
}

impl ops::Add<TerminalString> for &str {
    type Output = TerminalString;

    fn add(self, rhs: TerminalString) -> TerminalString {
        TerminalString::plain(self) + rhs
    }
}

impl ops::Add<TerminalString> for String {
    type Output = TerminalString;

    fn add(self, rhs: TerminalString) -> TerminalString {
        TerminalString::plain(self) + rhs
    }
}

impl ops::AddAssign for TerminalString {
    fn add_assign(&mut self, rhs: Self) {
        self.append(&rhs);
    }
}

impl ops::AddAssign<&str> for TerminalString {
    fn add_assign(&mut self, rhs: &str) {
        self.append(&Self::plain(rhs));
    }
}

impl FromIterator<TerminalString> for TerminalString {
    fn from_iter<I: IntoIterator<Item = TerminalString>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |acc, s| acc + s)
    }
}

impl Extend<TerminalString> for TerminalString {
    fn extend<I: IntoIterator<Item = TerminalString>>(&mut self, iter: I) {
        for s in iter {
            self.append(&s);
        }
    }
}
