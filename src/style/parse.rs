//! Human-readable style specs, e.g. `bold red on bright-white`.

use core::{fmt, ops, str::FromStr};

use super::Style;
use crate::{Ansi16Color, Color, ExtendedColor, Modifier, ParseError, ParseErrorKind};

/// Splits `raw` into tokens delimited by whitespace, commas or semicolons.
fn tokens(raw: &str) -> impl Iterator<Item = (ops::Range<usize>, &str)> + '_ {
    let is_delimiter = |ch: char| ch.is_ascii_whitespace() || matches!(ch, ',' | ';');
    let mut pos = 0;
    std::iter::from_fn(move || {
        let rest = &raw[pos..];
        let start = pos + rest.find(|ch| !is_delimiter(ch))?;
        let len = raw[start..].find(is_delimiter).unwrap_or(raw.len() - start);
        pos = start + len;
        Some((start..pos, &raw[start..pos]))
    })
}

fn parse_color(token: &str) -> Result<Option<Color>, ParseErrorKind> {
    if matches!(token, "gray" | "grey") {
        return Ok(Some(Ansi16Color::BrightBlack.into()));
    }
    if let Some(color) = Ansi16Color::from_hue_name(token) {
        return Ok(Some(color.into()));
    }
    let bright_hue = token
        .strip_prefix("bright-")
        .or_else(|| token.strip_suffix('!'));
    if let Some(color) = bright_hue.and_then(Ansi16Color::from_hue_name) {
        return Ok(Some(color.bright(true).into()));
    }

    let is_extended = token.starts_with('#')
        || token.starts_with("color(")
        || token.bytes().next().is_some_and(|ch| ch.is_ascii_digit());
    if is_extended {
        let color: ExtendedColor = token.parse().map_err(ParseErrorKind::Color)?;
        Ok(Some(color.into()))
    } else {
        Ok(None)
    }
}

/// Parses a style from a human-readable spec.
///
/// A spec is a list of tokens separated by whitespace and / or commas `,` or semicolons `;`.
/// A token is one of:
///
/// - A [`Modifier`] name or its alias, e.g. `bold`, `dim` or `strikethrough`.
/// - A foreground color: one of 8 base hues (`red`), a bright hue (`bright-red` or `red!`),
///   `gray` / `grey`, an indexed color (`color(42)` or `42`) or a hex RGB color (`#fa4`, `#c0ffee`).
/// - A background color: `on` followed by a color token, e.g. `on blue`.
///
/// The [`Display`](fmt::Display) implementation for `Style` outputs a spec in this format
/// (unless the style contains [custom colors](Color::custom())).
///
/// # Examples
///
/// ```
/// use term_chalk::{ExtendedColor, ParseErrorKind, Style, CHALK};
///
/// let style: Style = "bold, ul red! on #c0ffee".parse()?;
/// let expected = CHALK
///     .bold()
///     .underline()
///     .red_bright()
///     .bg(ExtendedColor::rgb(0xc0, 0xff, 0xee));
/// assert_eq!(style, expected);
/// assert_eq!(style.to_string(), "bold underline bright-red on #c0ffee");
///
/// let err = "bold on".parse::<Style>().unwrap_err();
/// assert_eq!(*err.kind(), ParseErrorKind::UnfinishedBackground);
/// assert_eq!(err.pos(), 5..7);
/// # anyhow::Ok(())
/// ```
impl FromStr for Style {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut style = Self::new();
        let mut tokens = tokens(raw);
        while let Some((range, token)) = tokens.next() {
            if token == "on" {
                let Some((color_range, color_token)) = tokens.next() else {
                    return Err(ParseErrorKind::UnfinishedBackground.with_pos(range));
                };
                let color = parse_color(color_token)
                    .map_err(|kind| kind.with_pos(color_range.clone()))?
                    .ok_or_else(|| ParseErrorKind::UnfinishedBackground.with_pos(range.clone()))?;
                if style.bg.is_some() {
                    return Err(ParseErrorKind::DuplicateColor.with_pos(range.start..color_range.end));
                }
                style.bg = Some(color);
            } else if let Some(modifier) = Modifier::from_name(token) {
                style = style.modify(modifier);
            } else {
                let color = parse_color(token)
                    .map_err(|kind| kind.with_pos(range.clone()))?
                    .ok_or_else(|| ParseErrorKind::UnsupportedStyle.with_pos(range.clone()))?;
                if style.fg.is_some() {
                    return Err(ParseErrorKind::DuplicateColor.with_pos(range));
                }
                style.fg = Some(color);
            }
        }
        Ok(style)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for modifier in self.modifiers.iter() {
            write!(formatter, "{separator}{modifier}")?;
            separator = " ";
        }
        if let Some(color) = &self.fg {
            write!(formatter, "{separator}{color}")?;
            separator = " ";
        }
        if let Some(color) = &self.bg {
            write!(formatter, "{separator}on {color}")?;
        }
        Ok(())
    }
}
