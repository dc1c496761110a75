//! Content collaborator for the web build: the CMS export bundled at
//! compile time (`web/content/site.json`).

use tracing::{error, info};
use ui::core::config::site_config;
use ui::core::content::ContentSnapshot;

const SNAPSHOT_JSON: &str = include_str!("../content/site.json");

pub fn load() -> ContentSnapshot {
    match ContentSnapshot::from_json(SNAPSHOT_JSON) {
        Ok(snapshot) => {
            info!(
                "[content] loaded {} pages, {} record maps",
                snapshot.site_map.as_ref().map_or(0, |map| map.len()),
                snapshot.record_maps.len()
            );
            snapshot.with_site_fallback(site_config().descriptor())
        }
        Err(err) => {
            // The home view keeps showing its loading placeholder.
            error!("[content] {err}");
            ContentSnapshot::pending()
        }
    }
}
