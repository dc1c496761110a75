//! Scroll-spy state for the services view.
//!
//! Visibility batches arrive from the platform observer; the section with the
//! highest intersection ratio wins. Equal ratios resolve to the topmost
//! section (document order), so the outcome never depends on the order in
//! which the batch lists its entries.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use super::subscription::ScopedSubscription;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ServiceSection {
    #[default]
    Accounting,
    Taxation,
    CorporateAdvisory,
}

impl ServiceSection {
    /// Document order.
    pub const ALL: [ServiceSection; 3] = [
        ServiceSection::Accounting,
        ServiceSection::Taxation,
        ServiceSection::CorporateAdvisory,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            ServiceSection::Accounting => "accounting",
            ServiceSection::Taxation => "taxation",
            ServiceSection::CorporateAdvisory => "corporate-advisory",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.dom_id() == id)
    }
}

impl fmt::Display for ServiceSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// One observer entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionVisibility {
    pub section_id: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl SectionVisibility {
    pub fn new(section_id: impl Into<String>, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            section_id: section_id.into(),
            is_intersecting,
            ratio,
        }
    }
}

/// Pick the most visible section of a batch, if any is visible at all.
pub fn most_visible(batch: &[SectionVisibility]) -> Option<ServiceSection> {
    let mut best: Option<(ServiceSection, f64)> = None;

    for entry in batch {
        if !entry.is_intersecting || !(entry.ratio > 0.0) {
            continue;
        }
        let Some(section) = ServiceSection::from_dom_id(&entry.section_id) else {
            continue;
        };
        best = match best {
            Some((current, ratio))
                if ratio > entry.ratio || (ratio == entry.ratio && current < section) =>
            {
                Some((current, ratio))
            }
            _ => Some((section, entry.ratio)),
        };
    }

    best.map(|(section, _)| section)
}

/// Handle identifying one observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionToken(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionTracker {
    active: ServiceSection,
    generation: u64,
    live: Option<SubscriptionToken>,
}

impl SectionTracker {
    pub fn active(&self) -> ServiceSection {
        self.active
    }

    pub fn is_subscribed(&self) -> bool {
        self.live.is_some()
    }

    /// Start a new registration. Any previous token becomes stale.
    pub fn subscribe(&mut self) -> SubscriptionToken {
        self.generation += 1;
        let token = SubscriptionToken(self.generation);
        self.live = Some(token);
        token
    }

    /// End a registration. Unsubscribing a stale token is a no-op.
    pub fn unsubscribe(&mut self, token: SubscriptionToken) {
        if self.live == Some(token) {
            self.live = None;
        }
    }

    /// Apply a visibility batch delivered for `token`.
    ///
    /// Returns the new active section when it changed.
    pub fn observe(
        &mut self,
        token: SubscriptionToken,
        batch: &[SectionVisibility],
    ) -> Option<ServiceSection> {
        if self.live != Some(token) {
            return None;
        }
        let winner = most_visible(batch)?;
        self.set_active(winner)
    }

    /// Click-to-scroll: unknown ids are ignored, known ids become active
    /// immediately without waiting for the observer.
    pub fn scroll_to(&mut self, id: &str) -> Option<ServiceSection> {
        let section = ServiceSection::from_dom_id(id)?;
        self.active = section;
        Some(section)
    }

    fn set_active(&mut self, section: ServiceSection) -> Option<ServiceSection> {
        (self.active != section).then(|| {
            self.active = section;
            section
        })
    }
}

/// Shared, possibly busy, access to a [`SectionTracker`].
///
/// Observer callbacks run outside the render cycle, so a write may find the
/// tracker already borrowed. `with_tracker` returns `None` in that case.
pub trait TrackerAccess: Clone + 'static {
    fn with_tracker<R>(&self, f: impl FnOnce(&mut SectionTracker) -> R) -> Option<R>;
}

impl TrackerAccess for Rc<RefCell<SectionTracker>> {
    fn with_tracker<R>(&self, f: impl FnOnce(&mut SectionTracker) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut tracker| f(&mut *tracker))
    }
}

/// Callback handed to a visibility backend.
pub type BatchHandler = Box<dyn FnMut(Vec<SectionVisibility>)>;

/// Subscribe `tracker` and register `handler` with a visibility backend for
/// every service section.
///
/// Dropping the returned guard releases the backend first, then retires the
/// token, so a batch the backend had already queued is rejected.
pub fn attach_tracker<A: TrackerAccess>(
    tracker: A,
    backend: impl FnOnce(&[&str], BatchHandler) -> ScopedSubscription,
) -> ScopedSubscription {
    let Some(token) = tracker.with_tracker(SectionTracker::subscribe) else {
        debug!("[sections] tracker busy, observer not attached");
        return ScopedSubscription::inert();
    };

    let handler: BatchHandler = {
        let tracker = tracker.clone();
        Box::new(move |batch: Vec<SectionVisibility>| {
            match tracker.with_tracker(|state| state.observe(token, &batch)) {
                Some(Some(section)) => debug!("[sections] active section -> {section}"),
                Some(None) => {}
                None => debug!("[sections] tracker busy, dropped batch of {}", batch.len()),
            }
        })
    };
    let ids = ServiceSection::ALL.map(ServiceSection::dom_id);
    let registration = backend(&ids, handler);

    ScopedSubscription::new(move || {
        drop(registration);
        if tracker.with_tracker(|state| state.unsubscribe(token)).is_none() {
            debug!("[sections] tracker busy on release, {token:?} left live");
        }
        debug!("[sections] observer released");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_ratio_wins() {
        let batch = [
            SectionVisibility::new("accounting", true, 0.25),
            SectionVisibility::new("taxation", true, 0.75),
            SectionVisibility::new("corporate-advisory", true, 0.5),
        ];
        assert_eq!(most_visible(&batch), Some(ServiceSection::Taxation));
    }

    #[test]
    fn ties_go_to_topmost_regardless_of_order() {
        let forward = [
            SectionVisibility::new("taxation", true, 0.5),
            SectionVisibility::new("corporate-advisory", true, 0.5),
        ];
        let reversed = [forward[1].clone(), forward[0].clone()];
        assert_eq!(most_visible(&forward), Some(ServiceSection::Taxation));
        assert_eq!(most_visible(&reversed), Some(ServiceSection::Taxation));
    }

    #[test]
    fn non_intersecting_and_unknown_entries_are_skipped() {
        let batch = [
            SectionVisibility::new("accounting", false, 1.0),
            SectionVisibility::new("pricing", true, 1.0),
            SectionVisibility::new("taxation", true, 0.0),
        ];
        assert_eq!(most_visible(&batch), None);
    }

    #[test]
    fn empty_batch_keeps_active_section() {
        let mut tracker = SectionTracker::default();
        let token = tracker.subscribe();
        tracker.scroll_to("taxation");
        assert_eq!(tracker.observe(token, &[]), None);
        assert_eq!(tracker.active(), ServiceSection::Taxation);
    }

    #[test]
    fn resubscribe_invalidates_old_token() {
        let mut tracker = SectionTracker::default();
        let old = tracker.subscribe();
        let new = tracker.subscribe();
        let batch = [SectionVisibility::new("taxation", true, 1.0)];
        assert_eq!(tracker.observe(old, &batch), None);
        assert_eq!(tracker.observe(new, &batch), Some(ServiceSection::Taxation));

        // Stale unsubscribe must not tear down the live registration.
        tracker.unsubscribe(old);
        assert!(tracker.is_subscribed());
    }
}
