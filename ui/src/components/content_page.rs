use dioxus::prelude::*;

use crate::core::content::{Block, BlockKind, PageInfo, RecordMap};
use crate::core::toc::toc_entries;
use crate::hooks::use_locale_marker;
use crate::t;

/// Renders one CMS page from its record map, with a side TOC when the gate
/// allows it.
#[component]
pub fn ContentPage(page: PageInfo, records: Option<RecordMap>, show_toc: bool) -> Element {
    let _locale = use_locale_marker();
    let Some(records) = records else {
        return rsx! {
            article { class: "content-page",
                h2 { class: "content-page__title", "{page.title}" }
                p { class: "content-page__pending", {t!("page-records-pending")} }
            }
        };
    };

    let entries = if show_toc { toc_entries(&records) } else { Vec::new() };
    let layout_class = if show_toc {
        "content-page__layout content-page__layout--with-toc"
    } else {
        "content-page__layout"
    };

    rsx! {
        div { class: layout_class,
            article { class: "content-page", lang: "{page.language}",
                h2 { class: "content-page__title", "{page.title}" }
                for block in records.blocks.iter() {
                    {render_block(block)}
                }
            }
            if show_toc {
                aside { class: "page-toc",
                    h4 { class: "page-toc__title", {t!("page-toc-title")} }
                    ul { class: "page-toc__list",
                        for entry in entries {
                            li {
                                key: "{entry.block_id}",
                                class: "page-toc__item page-toc__item--level-{entry.level}",
                                a { href: "#{entry.block_id}", "{entry.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_block(block: &Block) -> Element {
    let id = block.id.clone();
    let text = block.text.clone();
    match block.kind {
        BlockKind::Header => rsx! {
            h2 { key: "{id}", id: "{id}", class: "content-block content-block--h1", "{text}" }
        },
        BlockKind::SubHeader => rsx! {
            h3 { key: "{id}", id: "{id}", class: "content-block content-block--h2", "{text}" }
        },
        BlockKind::SubSubHeader => rsx! {
            h4 { key: "{id}", id: "{id}", class: "content-block content-block--h3", "{text}" }
        },
        BlockKind::Text => rsx! {
            p { key: "{id}", class: "content-block content-block--text", "{text}" }
        },
        BlockKind::BulletedList => rsx! {
            ul { key: "{id}", class: "content-block content-block--list",
                li { "{text}" }
            }
        },
        BlockKind::Other => rsx! {},
    }
}
