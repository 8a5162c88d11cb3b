//! Property testing for styles and terminal strings.

use proptest::{num, prelude::*};
use term_chalk::{
    Ansi16Color, Color, ColorSupport, ExtendedColor, Modifier, Style, TerminalString,
};

fn modifier() -> impl Strategy<Value = Modifier> {
    (0..Modifier::ALL.len()).prop_map(|idx| Modifier::ALL[idx])
}

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        (0..Ansi16Color::ALL.len()).prop_map(|idx| Color::from(Ansi16Color::ALL[idx])),
        num::u8::ANY.prop_map(|idx| ExtendedColor::indexed(idx.into()).unwrap().into()),
        (num::u8::ANY, num::u8::ANY, num::u8::ANY)
            .prop_map(|(r, g, b)| ExtendedColor::rgb(r, g, b).into()),
    ]
}

fn style() -> impl Strategy<Value = Style> {
    (
        proptest::collection::vec(modifier(), 0..4),
        proptest::option::of(color()),
        proptest::option::of(color()),
    )
        .prop_map(|(modifiers, fg, bg)| {
            let mut style = modifiers.into_iter().fold(Style::new(), Style::modify);
            if let Some(fg) = fg {
                style = style.fg(fg);
            }
            if let Some(bg) = bg {
                style = style.bg(bg);
            }
            style
        })
}

fn terminal_string() -> impl Strategy<Value = TerminalString> {
    proptest::collection::vec((style(), TEXT), 0..4).prop_map(|fragments| {
        fragments
            .into_iter()
            .map(|(style, text)| style.paint(text))
            .collect()
    })
}

const TEXT: &str = r"[^\x1b]{0,16}";

proptest! {
    #[test]
    fn rendering_without_colors_is_identity(
        style in style(),
        strings in proptest::collection::vec(TEXT, 0..4),
    ) {
        let rendered = style.on_with(&ColorSupport::None, &strings);
        prop_assert_eq!(rendered, strings.concat());
    }

    #[test]
    fn plain_style_is_identity(strings in proptest::collection::vec(TEXT, 0..4)) {
        let rendered = Style::new().on_with(&ColorSupport::TrueColor, &strings);
        prop_assert_eq!(rendered, strings.concat());
    }

    #[test]
    fn modifier_order_does_not_matter(
        modifiers in proptest::collection::vec(modifier(), 0..6),
        text in TEXT,
    ) {
        let forward = modifiers.iter().copied().fold(Style::new(), Style::modify);
        let backward = modifiers.iter().rev().copied().fold(Style::new(), Style::modify);
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(
            forward.on_with(&ColorSupport::Basic, [&text]),
            backward.on_with(&ColorSupport::Basic, [&text])
        );
    }

    #[test]
    fn rendered_string_is_wrapped_in_style_codes(style in style(), text in TEXT) {
        let rendered = style.on_with(&ColorSupport::TrueColor, [&text]);
        prop_assert!(rendered.starts_with(&style.open_codes()));
        prop_assert!(rendered.ends_with(&style.close_codes()));
    }

    #[test]
    fn concatenation_is_associative(
        a in terminal_string(),
        b in terminal_string(),
        c in terminal_string(),
    ) {
        let left = (a.clone() + b.clone()) + c.clone();
        let right = a + (b + c);
        prop_assert_eq!(
            left.render_with(&ColorSupport::TrueColor),
            right.render_with(&ColorSupport::TrueColor)
        );
        prop_assert_eq!(left, right);
    }

    #[test]
    fn text_projection_concatenates_fragments(s in terminal_string()) {
        let fragments_text: String = s.fragments().map(|fragment| fragment.text).collect();
        prop_assert_eq!(s.text(), fragments_text.as_str());
        prop_assert_eq!(s.render_with(&ColorSupport::None), fragments_text);
    }

    #[test]
    fn style_specs_roundtrip(style in style()) {
        let spec = style.to_string();
        let parsed: Style = spec.parse()?;
        prop_assert_eq!(parsed, style);
    }
}
