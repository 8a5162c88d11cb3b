//! Tests for the color model.

use assert_matches::assert_matches;

use super::*;

#[test]
fn basic_color_codes() {
    for (i, color) in Ansi16Color::ALL.into_iter().enumerate() {
        let (fg_base, bg_base) = if color.is_bright() { (90, 100) } else { (30, 40) };
        let offset = i % 8;
        assert_eq!(
            color.fg_open_code(),
            format!("\u{1b}[{}m", fg_base + offset),
            "{color:?}"
        );
        assert_eq!(
            color.bg_open_code(),
            format!("\u{1b}[{}m", bg_base + offset),
            "{color:?}"
        );
        assert_eq!(color.fg_close_code(), "\u{1b}[39m");
        assert_eq!(color.bg_close_code(), "\u{1b}[49m");
    }

    assert_eq!(Ansi16Color::Red.fg_open_str(), "\u{1b}[31m");
    assert_eq!(Ansi16Color::BrightRed.bg_open_str(), "\u{1b}[101m");
}

#[test]
fn bright_variants() {
    assert_eq!(Ansi16Color::Blue.bright(true), Ansi16Color::BrightBlue);
    assert_eq!(Ansi16Color::BrightBlue.bright(false), Ansi16Color::Blue);
    assert_eq!(Ansi16Color::BrightBlue.bright(true), Ansi16Color::BrightBlue);
    assert!(!Ansi16Color::White.is_bright());
    assert_eq!(Ansi16Color::BrightWhite.hue_name(), "white");
    assert_eq!(Ansi16Color::BrightWhite.to_string(), "bright-white");
    assert_eq!(Ansi16Color::from_hue_name("cyan"), Some(Ansi16Color::Cyan));
    assert_eq!(Ansi16Color::from_hue_name("bright-cyan"), None);
}

#[test]
fn extended_color_codes() {
    let indexed = ExtendedColor::indexed(208).unwrap();
    assert_eq!(indexed.fg_open_code(), "\u{1b}[38;5;208m");
    assert_eq!(indexed.bg_open_code(), "\u{1b}[48;5;208m");
    assert_eq!(indexed.fg_close_code(), "\u{1b}[39m");
    assert_eq!(indexed.bg_close_code(), "\u{1b}[49m");

    let rgb = ExtendedColor::rgb(0, 128, 255);
    assert_eq!(rgb.fg_open_code(), "\u{1b}[38;2;0;128;255m");
    assert_eq!(rgb.bg_open_code(), "\u{1b}[48;2;0;128;255m");
}

#[test]
fn extended_color_validation() {
    assert_eq!(
        ExtendedColor::indexed(255).unwrap(),
        ExtendedColor::Indexed(Ansi256Color(255))
    );
    assert_eq!(
        ExtendedColor::indexed(256).unwrap_err(),
        ColorError::IndexOutOfRange(256)
    );

    assert_matches!(
        ExtendedColor::from_hex("c0ffee"),
        Err(ColorError::Hex(HexColorError::NoHash))
    );
    assert_matches!(
        ExtendedColor::from_hex("#c0ffe"),
        Err(ColorError::Hex(HexColorError::InvalidLen))
    );
    assert_matches!(
        ExtendedColor::from_hex("#c0fxee"),
        Err(ColorError::Hex(HexColorError::InvalidHexDigit))
    );

    assert_matches!("color()".parse::<ExtendedColor>(), Err(ColorError::InvalidIndex));
    assert_matches!("color(x)".parse::<ExtendedColor>(), Err(ColorError::InvalidIndex));
    assert_matches!("007".parse::<ExtendedColor>(), Err(ColorError::InvalidIndex));
    assert_matches!(
        "color(1000)".parse::<ExtendedColor>(),
        Err(ColorError::IndexOutOfRange(1000))
    );
    assert_matches!(
        "99999".parse::<ExtendedColor>(),
        Err(ColorError::IndexTooLarge)
    );
    assert_matches!(
        "color(65536)".parse::<ExtendedColor>(),
        Err(ColorError::IndexTooLarge)
    );
    assert_eq!(
        "0".parse::<ExtendedColor>().unwrap(),
        ExtendedColor::Indexed(Ansi256Color(0))
    );
}

#[test]
fn hex_color_formatting() {
    let short = parse_hex_color("#fa4").unwrap();
    assert_eq!(short, RgbColor(0xff, 0xaa, 0x44));
    assert_eq!(rgb_color_to_hex(short), "#fa4");

    let long = parse_hex_color("#C0FFEE").unwrap();
    assert_eq!(rgb_color_to_hex(long), "#c0ffee");
    assert_eq!(ExtendedColor::Rgb(long).to_string(), "#c0ffee");
}

#[test]
fn anstyle_conversions() {
    for color in Ansi16Color::ALL {
        let converted = AnsiColor::from(color);
        assert_eq!(Ansi16Color::from(converted), color);
        assert_eq!(
            color.to_anstyle(),
            Some(anstyle::Color::Ansi(converted)),
            "{color:?}"
        );
    }

    let color = Color::from(anstyle::Color::Ansi256(Ansi256Color(42)));
    assert_eq!(color.as_extended(), Some(ExtendedColor::indexed(42).unwrap()));
    assert_eq!(
        color.to_anstyle(),
        Some(anstyle::Color::Ansi256(Ansi256Color(42)))
    );
    let color = Color::from(RgbColor(1, 2, 3));
    assert_eq!(color.as_extended(), Some(ExtendedColor::rgb(1, 2, 3)));
    assert_eq!(color.as_ansi16(), None);
}

#[derive(Debug)]
struct CustomRed;

impl fmt::Display for CustomRed {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("custom-red")
    }
}

impl RainbowColor for CustomRed {
    fn fg_open_code(&self) -> Cow<'static, str> {
        Cow::Borrowed("\u{1b}[31m")
    }

    fn bg_open_code(&self) -> Cow<'static, str> {
        Cow::Borrowed("\u{1b}[41m")
    }
}

#[test]
fn custom_colors_are_compared_by_codes() {
    let custom = Color::custom(CustomRed);
    assert_eq!(custom, Color::from(Ansi16Color::Red));
    assert_ne!(custom, Color::from(Ansi16Color::BrightRed));
    assert_eq!(custom.to_string(), "custom-red");
    assert_eq!(format!("{custom:?}"), "CustomRed");
    assert_eq!(custom.to_anstyle(), None);
    assert_eq!(custom.as_ansi16(), None);
}
