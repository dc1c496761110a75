use dioxus::prelude::*;

use crate::core::content::PageInfo;
use crate::core::tabs::Tab;
use crate::hooks::use_locale_marker;
use crate::t;

/// Tab bar: the locally authored tabs followed by one entry per CMS home
/// page of the active locale.
#[component]
pub fn HomeNav(
    home_pages: Vec<PageInfo>,
    active_tab: Tab,
    on_nav_click: EventHandler<String>,
) -> Element {
    let _locale = use_locale_marker();
    rsx! {
        nav { class: "home-nav", aria_label: t!("nav-sections-label"),
            for tab in Tab::LOCAL {
                button {
                    key: "{tab.id()}",
                    r#type: "button",
                    class: nav_class(tab == active_tab),
                    onclick: {
                        let id = tab.id().to_string();
                        move |_| on_nav_click.call(id.clone())
                    },
                    {local_label(&tab)}
                }
            }
            for page in home_pages {
                button {
                    key: "{page.page_id}",
                    r#type: "button",
                    class: nav_class(active_tab == Tab::Page(page.page_id.clone())),
                    onclick: {
                        let id = page.page_id.clone();
                        move |_| on_nav_click.call(id.clone())
                    },
                    "{page.title}"
                }
            }
        }
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "home-nav__item home-nav__item--active"
    } else {
        "home-nav__item"
    }
}

fn local_label(tab: &Tab) -> String {
    match tab {
        Tab::Services => t!("nav-services"),
        Tab::News => t!("nav-news"),
        Tab::About => t!("nav-about"),
        Tab::Contact => t!("nav-contact"),
        Tab::RecentPosts => t!("nav-recent-posts"),
        Tab::Page(id) => id.clone(),
    }
}
