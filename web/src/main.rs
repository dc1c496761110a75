use dioxus::prelude::*;

use ui::components::{Footer, SiteNavbar};
use ui::core::config::site_config;
use ui::core::content::ContentSnapshot;
use ui::core::platform::is_mobile_width;
use ui::hooks::{use_shared_viewport_width, use_viewport_provider};
use ui::views::Home;

mod content;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Landing {},
    #[route("/:locale")]
    Localized { locale: String },
}

const THEME_CSS: &str = ui::THEME_CSS;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global content locale; the navbar switcher and `/:locale` routes write it.
    let locale = use_signal(initial_locale);
    use_context_provider(|| locale);

    let snapshot = use_hook(content::load);
    use_context_provider(|| snapshot);

    rsx! {
        document::Style { "{THEME_CSS}" }
        Router::<Route> {}
    }
}

fn initial_locale() -> String {
    let code = site_config()
        .locale
        .negotiate(&ui::i18n::requested_language_tags())
        .to_string();
    ui::i18n::apply_locale(&code);
    code
}

#[component]
fn SiteLayout() -> Element {
    // The only resize listener; descendants read the shared width.
    let width = use_viewport_provider();

    rsx! {
        SiteNavbar {}
        Outlet::<Route> {}
        Footer { is_mobile: is_mobile_width(width()) }
    }
}

#[component]
fn Landing() -> Element {
    rsx! { SiteHome {} }
}

/// `/:locale` pins the active locale; unsupported codes resolve to the default.
#[component]
fn Localized(locale: String) -> Element {
    let mut active = use_context::<Signal<String>>();

    use_effect(use_reactive((&locale,), move |(locale,)| {
        let code = site_config().locale.resolve(Some(locale.as_str())).to_string();
        if *active.peek() != code {
            ui::i18n::apply_locale(&code);
            active.set(code);
        }
    }));

    rsx! { SiteHome {} }
}

#[component]
fn SiteHome() -> Element {
    let locale = use_context::<Signal<String>>();
    let content = use_context::<ContentSnapshot>();
    let width = use_shared_viewport_width();

    rsx! {
        Home {
            content,
            locale: locale(),
            is_mobile: is_mobile_width(width()),
        }
    }
}
