use dioxus::prelude::*;

use crate::core::content::PageInfo;
use crate::hooks::use_locale_marker;
use crate::t;

/// Landing view for the `recentPosts` sentinel: posts of the active locale.
#[component]
pub fn RecentPosts(posts: Vec<PageInfo>, on_select: EventHandler<String>) -> Element {
    let _locale = use_locale_marker();
    rsx! {
        div { class: "tab-content",
            h2 { class: "section-heading", {t!("recent-posts-title")} }
            if posts.is_empty() {
                p { class: "coming-soon", {t!("recent-posts-empty")} }
            } else {
                ul { class: "recent-posts",
                    for post in posts {
                        li { key: "{post.page_id}", class: "recent-posts__item",
                            button {
                                r#type: "button",
                                class: "recent-posts__link",
                                onclick: {
                                    let id = post.page_id.clone();
                                    move |_| on_select.call(id.clone())
                                },
                                "{post.title}"
                            }
                        }
                    }
                }
            }
        }
    }
}
