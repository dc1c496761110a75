//! Tab controller state for the home view.
//!
//! The active tab is either one of the locally authored views or the id of a
//! CMS page. Selection is not validated against the site map; an id that does
//! not resolve simply renders the fallback view.

use super::content::PageId;

pub const SERVICES: &str = "services";
pub const NEWS: &str = "news";
pub const ABOUT: &str = "about";
pub const CONTACT: &str = "contact";
pub const RECENT_POSTS: &str = "recentPosts";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Services,
    News,
    About,
    Contact,
    /// Sentinel used when locale reconciliation finds nothing to show.
    RecentPosts,
    Page(PageId),
}

impl Tab {
    /// Local tabs in navigation order.
    pub const LOCAL: [Tab; 4] = [Tab::Services, Tab::News, Tab::About, Tab::Contact];

    pub fn from_id(id: &str) -> Self {
        match id {
            SERVICES => Tab::Services,
            NEWS => Tab::News,
            ABOUT => Tab::About,
            CONTACT => Tab::Contact,
            RECENT_POSTS => Tab::RecentPosts,
            other => Tab::Page(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Tab::Services => SERVICES,
            Tab::News => NEWS,
            Tab::About => ABOUT,
            Tab::Contact => CONTACT,
            Tab::RecentPosts => RECENT_POSTS,
            Tab::Page(id) => id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabState {
    pub active_tab: Tab,
    /// CMS page currently rendered, if any.
    pub displayed_page: Option<PageId>,
}

impl TabState {
    /// Select a tab by id. Local labels clear the displayed page; any other
    /// id is treated as a page id and displayed as-is.
    pub fn select_tab(&mut self, id: &str) {
        match Tab::from_id(id) {
            Tab::Page(page_id) => self.select_page(page_id),
            local => {
                self.active_tab = local;
                self.displayed_page = None;
            }
        }
    }

    pub fn select_page(&mut self, page_id: impl Into<PageId>) {
        let page_id = page_id.into();
        self.active_tab = Tab::Page(page_id.clone());
        self.displayed_page = Some(page_id);
    }

    /// Deterministic landing spot when no page can be shown.
    pub fn fall_back(&mut self) {
        self.active_tab = Tab::RecentPosts;
        self.displayed_page = None;
    }

    pub fn shows_services(&self) -> bool {
        self.active_tab == Tab::Services
    }
}
