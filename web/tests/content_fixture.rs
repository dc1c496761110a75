//! Sanity checks on the bundled CMS export.

use ui::core::config::site_config;
use ui::core::content::{ContentSnapshot, PageType};
use ui::core::reconcile::{resolve_equivalent, Resolution};

const SNAPSHOT_JSON: &str = include_str!("../content/site.json");

fn snapshot() -> ContentSnapshot {
    ContentSnapshot::from_json(SNAPSHOT_JSON).expect("bundled content parses")
}

#[test]
fn every_page_uses_a_configured_locale() {
    let snapshot = snapshot();
    let locales = &site_config().locale;
    for page in snapshot.site_map.as_ref().expect("pages present").iter() {
        assert!(
            locales.is_supported(&page.language),
            "page {} uses unconfigured locale {}",
            page.page_id,
            page.language
        );
    }
}

#[test]
fn every_locale_has_a_home_page() {
    let snapshot = snapshot();
    let map = snapshot.site_map.as_ref().unwrap();
    for entry in &site_config().locale.locale_list {
        assert!(
            map.pages_of(PageType::Home, &entry.code).next().is_some(),
            "no Home page for {}",
            entry.code
        );
    }
}

#[test]
fn tax_calendar_has_a_french_twin() {
    let snapshot = snapshot();
    let map = snapshot.site_map.as_ref().unwrap();
    let en = map.get("2f1c0a7e-en-tax-calendar").unwrap();
    assert_eq!(
        resolve_equivalent(map, en, "fr"),
        Resolution::Exact("c97a2b05-fr-tax-calendar".into())
    );
}
