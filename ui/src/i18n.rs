//! Internationalization (i18n) support for `hacapital-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/hacapital-ui.ftl   (fallback/reference)
//!   fr-FR/hacapital-ui.ftl
//! ```
//!
//! UI strings are keyed by Fluent tags (`fr-FR`) while CMS content uses bare
//! language codes (`fr`). [`apply_locale`] maps one to the other through the
//! site config's `localeList`.
//!
//! To add a new locale:
//! 1. Copy `en-US/hacapital-ui.ftl` to `i18n/<lang-id>/hacapital-ui.ftl`.
//! 2. Translate each message value (keep IDs and variable placeholders identical).
//! 3. Add the locale to `localeList` in `site.config.json`.
//! 4. Run tests to ensure completeness.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::core::config::site_config;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-services")
///     t!("footer-copyright", year = 2025, name = "HAcapital")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the fallback FTL filename).
const DOMAIN: &str = "hacapital-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Switch UI strings to match a content locale code (`en`, `fr`, ...).
pub fn apply_locale(code: &str) {
    let Some(tag) = site_config().locale.ui_tag(code) else {
        warn!("[i18n] no UI language configured for locale `{code}`");
        return;
    };
    if let Err(err) = set_language(tag) {
        warn!("[i18n] switching to {tag} failed ({err})");
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// The user's preferred languages as BCP-47 strings, most preferred first.
pub fn requested_language_tags() -> Vec<String> {
    requested_languages().iter().map(|lang| lang.to_string()).collect()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn configured_ui_tags_are_embedded() {
        let available = available_languages();
        for entry in &site_config().locale.locale_list {
            assert!(
                available.contains(&entry.ui_tag),
                "locale {} points at missing UI language {}",
                entry.code,
                entry.ui_tag
            );
        }
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let _ = set_language("en-US");
        let s = fl!(&*LOADER, "nav-services");
        assert_eq!(s, "Services");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "nav-services");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-services");
        assert_eq!(before, after);
    }
}
