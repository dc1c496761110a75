//! Locally authored tabs that carry no state.

use dioxus::prelude::*;

use crate::core::config::site_config;
use crate::hooks::use_locale_marker;
use crate::t;

#[component]
pub fn NewsTab() -> Element {
    let _locale = use_locale_marker();
    rsx! {
        div { class: "tab-content",
            h2 { class: "section-heading", {t!("news-title")} }
            p { class: "coming-soon", {t!("news-coming-soon")} }
        }
    }
}

#[component]
pub fn AboutTab() -> Element {
    let _locale = use_locale_marker();
    rsx! {
        div { class: "tab-content",
            div { class: "about",
                h2 { class: "section-heading", {t!("about-title")} }
                p { class: "about__text", {t!("about-text")} }
            }
        }
    }
}

#[component]
pub fn ContactTab() -> Element {
    let _locale = use_locale_marker();
    let contact = &site_config().contact;
    let whatsapp = contact.whatsapp.clone().unwrap_or_else(|| "#".into());
    let email = contact
        .email
        .as_ref()
        .map(|address| format!("mailto:{address}"))
        .unwrap_or_else(|| "#".into());

    rsx! {
        div { class: "tab-content",
            div { class: "contact",
                h2 { class: "section-heading", {t!("contact-title")} }
                p { class: "contact__subtitle", {t!("contact-subtitle")} }
                div { class: "contact__buttons",
                    a {
                        class: "contact__button contact__button--whatsapp",
                        href: "{whatsapp}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!("contact-whatsapp")}
                    }
                    a { class: "contact__button contact__button--email", href: "{email}",
                        "✉ "
                        {t!("contact-email")}
                    }
                }
            }
        }
    }
}

/// Shown for tab ids that resolve to nothing.
#[component]
pub fn FallbackTab() -> Element {
    let _locale = use_locale_marker();
    rsx! {
        div { class: "tab-content",
            p { class: "coming-soon", {t!("fallback-select-tab")} }
        }
    }
}
