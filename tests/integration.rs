//! Tests tracing instrumentation of style rendering.

use term_chalk::{ColorSupport, CHALK};
use tracing::{subscriber::DefaultGuard, Subscriber};
use tracing_capture::{CaptureLayer, SharedStorage, Storage};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, registry::LookupSpan, FmtSubscriber,
};

fn create_fmt_subscriber() -> impl Subscriber + for<'a> LookupSpan<'a> {
    FmtSubscriber::builder()
        .pretty()
        .with_span_events(FmtSpan::CLOSE)
        .with_test_writer()
        .with_env_filter("term_chalk=trace")
        .finish()
}

fn enable_tracing_assertions() -> (DefaultGuard, SharedStorage) {
    let storage = SharedStorage::default();
    let subscriber = create_fmt_subscriber().with(CaptureLayer::new(&storage));
    let guard = tracing::subscriber::set_default(subscriber);
    (guard, storage)
}

#[test]
fn rendering_style_with_nested_close_codes() {
    let (_guard, tracing_storage) = enable_tracing_assertions();
    let inner = CHALK.red().on_with(&ColorSupport::Basic, ["inner"]);
    let outer = CHALK.bold().red().on_with(&ColorSupport::Basic, [format!("<{inner}>")]);
    assert_eq!(
        outer,
        "\u{1b}[1m\u{1b}[31m<\u{1b}[31minner\u{1b}[31m>\u{1b}[22m\u{1b}[39m"
    );
    assert_tracing_for_rendering(&tracing_storage.lock());
}

fn assert_tracing_for_rendering(storage: &Storage) {
    let spans: Vec<_> = storage
        .root_spans()
        .filter(|span| span.metadata().name() == "on_with")
        .collect();
    assert_eq!(spans.len(), 2);

    assert_eq!(spans[0]["style"].as_debug_str(), Some("red"));
    assert!(spans[0]
        .events()
        .all(|event| event.message() != Some("neutralized nested color close codes")));

    let outer_span = &spans[1];
    assert_eq!(outer_span["style"].as_debug_str(), Some("bold red"));
    let event = outer_span
        .events()
        .find(|event| event.message() == Some("neutralized nested color close codes"))
        .expect("neutralization event not found");
    assert_eq!(event["count"].as_uint(), Some(1));
    assert_eq!(event["close_code"].as_str(), Some("\u{1b}[39m"));
}

#[test]
fn rendering_terminal_string() {
    let (_guard, tracing_storage) = enable_tracing_assertions();
    let s = CHALK.green().paint("ok") + " " + CHALK.blue().paint("done");
    let rendered = s.render_with(&ColorSupport::Ansi256);
    assert_eq!(
        rendered,
        "\u{1b}[32mok\u{1b}[39m \u{1b}[34mdone\u{1b}[39m"
    );

    let storage = tracing_storage.lock();
    let span = storage
        .root_spans()
        .find(|span| span.metadata().name() == "render_with")
        .expect("`render_with` span not found");
    assert_eq!(span["self.fragment_count"].as_uint(), Some(3));
}

#[test]
fn setting_global_support_is_traced() {
    let (_guard, tracing_storage) = enable_tracing_assertions();
    // Other tests in this binary use explicit oracles, so changing the global level is safe.
    ColorSupport::TrueColor.set_global();
    assert_eq!(ColorSupport::global(), ColorSupport::TrueColor);
    assert_eq!(
        CHALK.red().on(["x"]),
        "\u{1b}[31mx\u{1b}[39m"
    );
    ColorSupport::None.set_global();
    assert_eq!(CHALK.red().on(["x"]), "x");
    ColorSupport::Basic.set_global();

    let storage = tracing_storage.lock();
    let levels: Vec<_> = storage
        .root_events()
        .filter(|event| event.message() == Some("set global color support level"))
        .filter_map(|event| event["level"].as_debug_str().map(str::to_owned))
        .collect();
    assert_eq!(levels, ["truecolor", "none", "basic"]);
}
