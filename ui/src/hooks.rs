//! Dioxus hooks over `core::platform`.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::platform;
use crate::core::subscription::ScopedSubscription;

/// Shared viewport width, provided once per window by the platform crate.
#[derive(Clone, Copy, PartialEq)]
pub struct ViewportWidth(pub Signal<u32>);

/// Current viewport width, kept up to date by a resize listener that lives
/// exactly as long as the calling component.
pub fn use_viewport_width() -> Signal<u32> {
    let mut width = use_signal(platform::viewport_width);
    let listener: Rc<RefCell<Option<ScopedSubscription>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    {
        let listener = listener.clone();
        use_effect(move || {
            if listener.borrow().is_some() {
                return;
            }
            width.set(platform::viewport_width());
            let guard = platform::listen_resize(move |next| width.set(next));
            *listener.borrow_mut() = Some(guard);
        });
    }

    use_drop(move || {
        listener.borrow_mut().take();
    });

    width
}

/// Attach the window's single resize listener and share its width with every
/// descendant through [`ViewportWidth`].
pub fn use_viewport_provider() -> Signal<u32> {
    let width = use_viewport_width();
    use_context_provider(|| ViewportWidth(width));
    width
}

/// Width shared by an ancestor's [`use_viewport_provider`]. Without one the
/// width is read once and never updated.
pub fn use_shared_viewport_width() -> Signal<u32> {
    let fallback = use_signal(platform::viewport_width);
    try_use_context::<ViewportWidth>()
        .map(|ViewportWidth(width)| width)
        .unwrap_or(fallback)
}

/// Active content locale provided by the platform crate, if any.
pub fn use_active_locale() -> Option<Signal<String>> {
    try_use_context::<Signal<String>>()
}

/// Subscribe the calling component to the global locale signal.
///
/// `t!` lookups are not reactive, so every component rendering UI strings
/// calls this to re-render after the switcher changes language.
pub fn use_locale_marker() -> Option<String> {
    use_active_locale().map(|locale| locale())
}
