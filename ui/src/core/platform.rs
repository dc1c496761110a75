//! Platform glue: viewport size, resize listening and section visibility.
//!
//! On wasm32 these wrap the browser APIs. Native targets have no viewport to
//! observe, so they report a fixed desktop width and hand out inert guards.

use super::sections::SectionVisibility;
use super::subscription::ScopedSubscription;

/// Widths below this are laid out as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;
/// Width reported where no browser window exists.
pub const NATIVE_VIEWPORT_WIDTH: u32 = 1280;

/// Root margin for the section observer: ignore the sticky header band and
/// the lower half of the viewport.
pub const SECTION_ROOT_MARGIN: &str = "-120px 0px -50% 0px";
pub const SECTION_THRESHOLDS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

pub fn is_mobile_width(width: u32) -> bool {
    width < MOBILE_BREAKPOINT
}

#[cfg(target_arch = "wasm32")]
pub fn viewport_width() -> u32 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width.max(0.0) as u32)
        .unwrap_or(NATIVE_VIEWPORT_WIDTH)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_width() -> u32 {
    NATIVE_VIEWPORT_WIDTH
}

/// Call `on_resize` with the new width on every window resize until the
/// returned guard is dropped.
#[cfg(target_arch = "wasm32")]
pub fn listen_resize(mut on_resize: impl FnMut(u32) + 'static) -> ScopedSubscription {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return ScopedSubscription::inert();
    };

    let callback = Closure::<dyn FnMut()>::new(move || on_resize(viewport_width()));
    if window
        .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!("[viewport] unable to attach resize listener");
        return ScopedSubscription::inert();
    }

    ScopedSubscription::new(move || {
        if window
            .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::debug!("[viewport] resize listener already detached");
        }
        drop(callback);
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn listen_resize(on_resize: impl FnMut(u32) + 'static) -> ScopedSubscription {
    let _ = on_resize;
    ScopedSubscription::inert()
}

/// Observe the elements with the given DOM ids and deliver each visibility
/// batch to `on_batch`. Ids with no element are skipped.
#[cfg(target_arch = "wasm32")]
pub fn observe_sections(
    ids: &[&str],
    mut on_batch: impl FnMut(Vec<SectionVisibility>) + 'static,
) -> ScopedSubscription {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return ScopedSubscription::inert();
    };

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        let batch = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| {
                SectionVisibility::new(
                    entry.target().id(),
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                )
            })
            .collect();
        on_batch(batch);
    });

    let thresholds = SECTION_THRESHOLDS
        .iter()
        .map(|t| wasm_bindgen::JsValue::from_f64(*t))
        .collect::<js_sys::Array>();
    let init = IntersectionObserverInit::new();
    init.set_root_margin(SECTION_ROOT_MARGIN);
    init.set_threshold(&thresholds);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(_) => {
                tracing::warn!("[sections] IntersectionObserver unavailable");
                return ScopedSubscription::inert();
            }
        };

    let targets: Vec<web_sys::Element> = ids
        .iter()
        .filter_map(|id| document.get_element_by_id(id))
        .collect();
    for target in &targets {
        observer.observe(target);
    }
    tracing::debug!("[sections] observing {} of {} sections", targets.len(), ids.len());

    ScopedSubscription::new(move || {
        for target in &targets {
            observer.unobserve(target);
        }
        observer.disconnect();
        drop(callback);
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn observe_sections(
    ids: &[&str],
    on_batch: impl FnMut(Vec<SectionVisibility>) + 'static,
) -> ScopedSubscription {
    let _ = (ids, on_batch);
    ScopedSubscription::inert()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(is_mobile_width(MOBILE_BREAKPOINT - 1));
        assert!(!is_mobile_width(MOBILE_BREAKPOINT));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_targets_hand_out_inert_guards() {
        assert!(!observe_sections(&["accounting"], |_| {}).is_active());
        assert!(!listen_resize(|_| {}).is_active());
        assert_eq!(viewport_width(), NATIVE_VIEWPORT_WIDTH);
    }
}
