use dioxus::prelude::*;

use crate::core::sections::ServiceSection;
use crate::hooks::use_locale_marker;
use crate::t;

/// Side navigation for the services tab; highlights the section in view.
#[component]
pub fn ServicesToc(active: ServiceSection, on_section_click: EventHandler<String>) -> Element {
    let _locale = use_locale_marker();
    rsx! {
        aside { class: "services-toc",
            div { class: "services-toc__content",
                h4 { class: "services-toc__title", {t!("toc-services-title")} }
                ul { class: "services-toc__list",
                    for section in ServiceSection::ALL {
                        li {
                            key: "{section}",
                            class: item_class(section == active),
                            onclick: move |_| on_section_click.call(section.dom_id().to_string()),
                            {section_label(section)}
                        }
                    }
                }
            }
        }
    }
}

fn item_class(active: bool) -> &'static str {
    if active {
        "services-toc__item services-toc__item--active"
    } else {
        "services-toc__item"
    }
}

pub(crate) fn section_label(section: ServiceSection) -> String {
    match section {
        ServiceSection::Accounting => t!("service-accounting-title"),
        ServiceSection::Taxation => t!("service-taxation-title"),
        ServiceSection::CorporateAdvisory => t!("service-corporate-title"),
    }
}
