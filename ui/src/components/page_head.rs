use dioxus::prelude::*;

use crate::core::config::site_config;
use crate::core::content::SiteDescriptor;

/// Document title, description and canonical URL for the home page.
#[component]
pub fn PageHead(site: SiteDescriptor, locale: String) -> Element {
    let domain = &site_config().domain;
    let canonical = if domain.is_empty() {
        format!("/{locale}")
    } else {
        format!("https://{domain}/{locale}")
    };

    rsx! {
        document::Title { "{site.name}" }
        document::Meta { name: "description", content: "{site.description}" }
        document::Meta { property: "og:title", content: "{site.name}" }
        document::Meta { property: "og:description", content: "{site.description}" }
        document::Link { rel: "canonical", href: "{canonical}" }
    }
}
