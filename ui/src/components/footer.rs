use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::core::config::site_config;
use crate::hooks::use_locale_marker;
use crate::t;

#[component]
pub fn Footer(is_mobile: bool) -> Element {
    let _locale = use_locale_marker();
    let config = site_config();
    let year = OffsetDateTime::now_utc().year().to_string();
    let copyright = t!("footer-copyright", year = year, name = config.name.clone());

    // Mobile stacks socials above the copyright line.
    let (copyright_order, socials_order) = if is_mobile { (2, 1) } else { (1, 2) };
    let content_class = if is_mobile {
        "footer__content footer__content--mobile"
    } else {
        "footer__content"
    };

    rsx! {
        footer { class: "footer",
            div { class: content_class,
                div { class: "footer__copyright", style: "order: {copyright_order}", "{copyright}" }
                nav {
                    class: "footer__socials",
                    style: "order: {socials_order}",
                    aria_label: t!("footer-social-label"),
                    for social in config.socials.iter() {
                        a {
                            key: "{social.handle}-{social.label()}",
                            class: "footer__social",
                            href: social.url(),
                            target: "_blank",
                            rel: "noopener noreferrer",
                            title: social.label(),
                            "{social.label()}"
                        }
                    }
                }
            }
        }
    }
}
