//! Locale reconciliation: when the active locale changes while a CMS page is
//! displayed, move to that page's equivalent in the new locale.
//!
//! Resolution order for the displayed page `P`:
//! 1. a page with the same type and slug in the new locale;
//! 2. the first page of the same type in the new locale (natural order);
//! 3. the `recentPosts` sentinel with no displayed page.

use super::content::{PageId, PageInfo, SiteMap};
use super::tabs::TabState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Exact(PageId),
    FirstOfType(PageId),
    Fallback,
}

pub fn resolve_equivalent(site_map: &SiteMap, current: &PageInfo, locale: &str) -> Resolution {
    if let Some(page) = site_map
        .pages_of(current.page_type, locale)
        .find(|page| page.slug == current.slug)
    {
        return Resolution::Exact(page.page_id.clone());
    }

    match site_map.pages_of(current.page_type, locale).next() {
        Some(page) => Resolution::FirstOfType(page.page_id.clone()),
        None => Resolution::Fallback,
    }
}

/// Compute the tab state after reconciling against `locale`.
///
/// Returns `None` when nothing should change: no CMS page is displayed, the
/// displayed id is unknown to the site map, or the page is already the right
/// one for the locale.
pub fn reconcile(site_map: &SiteMap, state: &TabState, locale: &str) -> Option<TabState> {
    let current = state
        .displayed_page
        .as_deref()
        .and_then(|page_id| site_map.get(page_id))?;

    let mut next = state.clone();
    match resolve_equivalent(site_map, current, locale) {
        Resolution::Exact(page_id) | Resolution::FirstOfType(page_id) => next.select_page(page_id),
        Resolution::Fallback => next.fall_back(),
    }

    (next != *state).then_some(next)
}

/// Identity of the external inputs that may trigger reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileKey {
    pub locale: String,
    pub content_revision: u64,
}

/// One-shot gate around [`reconcile`].
///
/// Reconciliation runs at most once per distinct `(locale, content revision)`
/// pair. The displayed page is deliberately not part of the key: it is the
/// reconciler's own output, and keying on it would re-trigger on every write.
#[derive(Debug, Default)]
pub struct LocaleReconciler {
    last: Option<ReconcileKey>,
}

impl LocaleReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run reconciliation if `key` differs from the last one seen.
    pub fn run(
        &mut self,
        key: ReconcileKey,
        site_map: &SiteMap,
        state: &TabState,
    ) -> Option<TabState> {
        if self.last.as_ref() == Some(&key) {
            return None;
        }
        let next = reconcile(site_map, state, &key.locale);
        self.last = Some(key);
        next
    }
}
