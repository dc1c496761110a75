use dioxus::prelude::*;

use crate::core::config::site_config;
use crate::hooks::use_active_locale;
use crate::i18n;
use crate::t;

/// Site header with brand and locale switcher.
///
/// Switching locale writes the global locale signal (provided by the platform
/// crate) and moves UI strings to the matching Fluent language. The home view
/// reacts to the signal and reconciles the displayed CMS page.
#[component]
pub fn SiteNavbar() -> Element {
    i18n::init();

    let config = site_config();
    let locale_ctx = use_active_locale();
    let current = locale_ctx
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(|| config.locale.default_locale.clone());
    let show_switcher = config.locale.locale_list.len() > 1;

    #[cfg(debug_assertions)]
    {
        tracing::debug!("[i18n] SiteNavbar render locale={current}");
    }

    let on_change = move |evt: FormEvent| {
        let code = evt.value();
        if !site_config().locale.is_supported(&code) {
            tracing::warn!("[i18n] ignoring unsupported locale `{code}`");
            return;
        }
        i18n::apply_locale(&code);
        if let Some(mut locale) = locale_ctx {
            locale.set(code);
        }
    };

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "{config.name}" }
                    if let Some(description) = config.description.as_ref() {
                        span { class: "navbar__brand-subtitle", "{description}" }
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current}",
                            oninput: on_change,
                            for entry in config.locale.locale_list.iter() {
                                option {
                                    key: "{entry.code}",
                                    value: "{entry.code}",
                                    selected: entry.code == current,
                                    "{entry.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
