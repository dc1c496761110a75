//! Services tab: three service blocks plus a scroll-spy TOC.
//!
//! The visibility observer is acquired when this view mounts and released
//! when it unmounts (tab switch or parent teardown). Releasing it also
//! unsubscribes the tracker token, so a batch that was already queued by the
//! browser cannot move the active section afterwards.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::components::{section_label, ServicesToc};
use crate::core::platform;
use crate::core::sections::{attach_tracker, SectionTracker, ServiceSection, TrackerAccess};
use crate::core::subscription::ScopedSubscription;
use crate::hooks::use_locale_marker;
use crate::t;

#[component]
pub fn ServicesView(tracker: Signal<SectionTracker>) -> Element {
    let _locale = use_locale_marker();
    let mut anchors = use_signal(HashMap::<ServiceSection, Rc<MountedData>>::new);
    let observer: Rc<RefCell<Option<ScopedSubscription>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    {
        let observer = observer.clone();
        use_effect(move || {
            if observer.borrow().is_some() {
                return;
            }
            *observer.borrow_mut() = Some(attach_tracker(TrackerSignal(tracker), |ids, handler| {
                platform::observe_sections(ids, handler)
            }));
        });
    }

    use_drop(move || {
        observer.borrow_mut().take();
    });

    let on_section_click = move |id: String| {
        let Some(section) = ServiceSection::from_dom_id(&id) else {
            debug!("[sections] ignoring unknown section `{id}`");
            return;
        };
        let Some(anchor) = anchors.read().get(&section).cloned() else {
            debug!("[sections] section `{id}` not mounted yet");
            return;
        };
        let mut tracker = tracker;
        tracker.write().scroll_to(&id);
        spawn(async move {
            if let Err(err) = anchor.scroll_to(ScrollBehavior::Smooth).await {
                debug!("[sections] smooth scroll to `{id}` failed: {err}");
            }
        });
    };

    let active = tracker.read().active();

    rsx! {
        div { class: "tab-content",
            div { class: "services-hero",
                h1 { class: "services-hero__heading", {t!("services-title")} }
                p { class: "services-hero__description", {t!("services-intro")} }
            }

            div { class: "services-with-toc",
                div { class: "services",
                    for section in ServiceSection::ALL {
                        div {
                            key: "{section}",
                            id: section.dom_id(),
                            class: "service-block",
                            onmounted: move |evt: MountedEvent| {
                                anchors.write().insert(section, evt.data());
                            },
                            h3 { class: "service-block__title", {section_label(section)} }
                            p { class: "service-block__description",
                                {section_description(section)}
                            }
                            div { class: "service-block__grid",
                                div { class: "service-card",
                                    h4 { class: "service-card__title",
                                        {t!("service-key-features")}
                                    }
                                    ul { class: "service-card__features",
                                        for feature in section_features(section) {
                                            li { "✓ {feature}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                ServicesToc { active, on_section_click }
            }
        }
    }
}

/// Writes from observer callbacks go through `try_write`, which fails while
/// a render holds the signal.
#[derive(Clone, Copy)]
struct TrackerSignal(Signal<SectionTracker>);

impl TrackerAccess for TrackerSignal {
    fn with_tracker<R>(&self, f: impl FnOnce(&mut SectionTracker) -> R) -> Option<R> {
        let mut signal = self.0;
        let mut state = signal.try_write().ok()?;
        Some(f(&mut *state))
    }
}

fn section_description(section: ServiceSection) -> String {
    match section {
        ServiceSection::Accounting => t!("service-accounting-desc"),
        ServiceSection::Taxation => t!("service-taxation-desc"),
        ServiceSection::CorporateAdvisory => t!("service-corporate-desc"),
    }
}

fn section_features(section: ServiceSection) -> Vec<String> {
    match section {
        ServiceSection::Accounting => vec![
            t!("service-accounting-f1"),
            t!("service-accounting-f2"),
            t!("service-accounting-f3"),
        ],
        ServiceSection::Taxation => vec![
            t!("service-taxation-f1"),
            t!("service-taxation-f2"),
            t!("service-taxation-f3"),
        ],
        ServiceSection::CorporateAdvisory => vec![
            t!("service-corporate-f1"),
            t!("service-corporate-f2"),
            t!("service-corporate-f3"),
            t!("service-corporate-f4"),
            t!("service-corporate-f5"),
        ],
    }
}
