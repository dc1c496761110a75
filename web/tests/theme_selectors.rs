#![cfg(test)]
//! Guards the selectors that `ui` components rely on in the unified theme
//! (`ui/assets/theme/main.css`, inlined by `web/src/main.rs`).
//!
//! A plain substring check is enough to catch a renamed or dropped class. If
//! you intentionally rename a selector, update the component markup and this
//! list together.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global
    ":root",
    "--color-bg",
    "body {",
    ".visually-hidden",
    // Navbar
    ".navbar {",
    ".navbar__brand-mark",
    ".navbar__locale",
    // Home & tabs
    ".home {",
    ".home__loading",
    ".home-nav__item",
    ".home-nav__item--active",
    ".tab-content",
    // Services scroll-spy
    ".services-with-toc",
    ".service-block",
    ".services-toc__item",
    ".services-toc__item--active",
    // CMS pages
    ".content-page__layout--with-toc",
    ".page-toc__item--level-2",
    ".recent-posts__link",
    // Contact
    ".contact__button--whatsapp",
    ".contact__button--email",
    // Footer
    ".footer__content--mobile",
    ".footer__social",
    // Responsive breakpoints (TOC width, mobile)
    "@media (max-width: 1199px)",
    "@media (max-width: 767px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{:?}",
        missing.len(),
        missing
    );
}

#[test]
fn services_sections_offset_the_sticky_header() {
    assert!(
        THEME_CSS.contains("scroll-margin-top"),
        "service blocks need a scroll margin so click-to-scroll clears the navbar"
    );
}
