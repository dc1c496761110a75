//! Home page: a tab controller over locally authored views and CMS pages.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::info;

use crate::components::{ContentPage, HomeNav, PageHead};
use crate::core::content::{ContentSnapshot, PageInfo, PageType};
use crate::core::reconcile::{LocaleReconciler, ReconcileKey};
use crate::core::sections::SectionTracker;
use crate::core::tabs::{Tab, TabState};
use crate::core::toc::should_show_toc;
use crate::hooks::use_shared_viewport_width;
use crate::t;
use crate::views::{AboutTab, ContactTab, FallbackTab, NewsTab, RecentPosts, ServicesView};

#[component]
pub fn Home(content: ContentSnapshot, locale: String, is_mobile: bool) -> Element {
    let mut tabs = use_signal(TabState::default);
    let sections = use_signal(SectionTracker::default);
    let width = use_shared_viewport_width();
    let reconciler = use_hook(|| Rc::new(RefCell::new(LocaleReconciler::new())));

    // Re-resolve the displayed CMS page when the locale or the content map
    // changes. `peek` keeps the tab state out of the dependency set.
    use_effect(use_reactive((&locale, &content), move |(locale, content)| {
        let Some(site_map) = content.site_map.as_deref() else {
            return;
        };
        let key = ReconcileKey {
            locale,
            content_revision: content.revision(),
        };
        let current = tabs.peek().clone();
        if let Some(next) = reconciler.borrow_mut().run(key, site_map, &current) {
            info!(
                "[home] locale reconciliation: {} -> {}",
                current.active_tab.id(),
                next.active_tab.id()
            );
            tabs.set(next);
        }
    }));

    let show_toc = use_memo(use_reactive((&content, &is_mobile), move |(content, is_mobile)| {
        let state = tabs.read();
        let page_id = state.displayed_page.as_deref();
        should_show_toc(
            page_id.and_then(|id| content.page(id)),
            page_id.and_then(|id| content.record_map(id)),
            is_mobile,
            width(),
        )
    }));

    let (Some(site), Some(site_map)) = (content.site.clone(), content.site_map.clone()) else {
        return rsx! {
            div { class: "home__loading", {t!("loading")} }
        };
    };

    #[cfg(debug_assertions)]
    {
        tracing::debug!("[home] render locale={locale} tab={}", tabs.read().active_tab.id());
    }

    let home_pages: Vec<PageInfo> = site_map.pages_of(PageType::Home, &locale).cloned().collect();
    let state = tabs();

    let body = match &state.active_tab {
        Tab::Services => rsx! { ServicesView { tracker: sections } },
        Tab::News => rsx! { NewsTab {} },
        Tab::About => rsx! { AboutTab {} },
        Tab::Contact => rsx! { ContactTab {} },
        Tab::RecentPosts => {
            let posts: Vec<PageInfo> =
                site_map.pages_of(PageType::Post, &locale).cloned().collect();
            rsx! {
                RecentPosts { posts, on_select: move |id: String| tabs.write().select_page(id) }
            }
        }
        Tab::Page(page_id) => match content.page(page_id) {
            Some(page) if state.displayed_page.as_deref() == Some(page_id.as_str()) => rsx! {
                ContentPage {
                    key: "{page_id}",
                    page: page.clone(),
                    records: content.record_map(page_id).cloned(),
                    show_toc: show_toc(),
                }
            },
            _ => rsx! { FallbackTab {} },
        },
    };

    rsx! {
        PageHead { site, locale: locale.clone() }

        div { class: "home",
            HomeNav {
                home_pages,
                active_tab: state.active_tab.clone(),
                on_nav_click: move |id: String| tabs.write().select_tab(&id),
            }
            main { class: "home__main", {body} }
        }
    }
}
