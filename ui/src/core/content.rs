//! Read-only content supplied by the CMS collaborator: the site map (page
//! metadata) and per-page record maps (pre-parsed block content).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type PageId = String;

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content snapshot is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("record map supplied for unknown page `{0}`")]
    OrphanRecordMap(PageId),
}

/// Site-level metadata used by the page head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageType {
    Home,
    Post,
    Category,
    #[serde(other)]
    Other,
}

impl PageType {
    /// Long-form pages are the only ones that may carry a table of contents.
    pub fn is_long_form(self) -> bool {
        matches!(self, PageType::Home | PageType::Post)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page_id: PageId,
    #[serde(rename = "type")]
    pub page_type: PageType,
    pub language: String,
    pub slug: String,
    #[serde(default)]
    pub title: String,
}

/// All content pages in their natural enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PageInfo>", into = "Vec<PageInfo>")]
pub struct SiteMap {
    pages: Vec<PageInfo>,
    index: HashMap<PageId, usize>,
}

impl SiteMap {
    /// Build a site map. A repeated page id keeps its first definition.
    pub fn new(pages: impl IntoIterator<Item = PageInfo>) -> Self {
        let mut map = SiteMap::default();
        for page in pages {
            if map.index.contains_key(&page.page_id) {
                tracing::warn!("[content] duplicate page id `{}` ignored", page.page_id);
                continue;
            }
            map.index.insert(page.page_id.clone(), map.pages.len());
            map.pages.push(page);
        }
        map
    }

    pub fn get(&self, page_id: &str) -> Option<&PageInfo> {
        self.index.get(page_id).map(|&idx| &self.pages[idx])
    }

    pub fn contains(&self, page_id: &str) -> bool {
        self.index.contains_key(page_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageInfo> {
        self.pages.iter()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages of one type in one language, in natural order.
    pub fn pages_of<'a>(
        &'a self,
        page_type: PageType,
        language: &'a str,
    ) -> impl Iterator<Item = &'a PageInfo> + 'a {
        self.pages
            .iter()
            .filter(move |page| page.page_type == page_type && page.language == language)
    }
}

impl From<Vec<PageInfo>> for SiteMap {
    fn from(pages: Vec<PageInfo>) -> Self {
        SiteMap::new(pages)
    }
}

impl From<SiteMap> for Vec<PageInfo> {
    fn from(map: SiteMap) -> Self {
        map.pages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Header,
    SubHeader,
    SubSubHeader,
    Text,
    BulletedList,
    #[serde(other)]
    Other,
}

impl BlockKind {
    pub fn is_heading(self) -> bool {
        matches!(self, BlockKind::Header | BlockKind::SubHeader | BlockKind::SubSubHeader)
    }

    /// Heading depth (1..=3) for heading kinds.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            BlockKind::Header => Some(1),
            BlockKind::SubHeader => Some(2),
            BlockKind::SubSubHeader => Some(3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default)]
    pub text: String,
}

/// Block content of a single page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMap {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl RecordMap {
    pub fn heading_count(&self) -> usize {
        self.blocks.iter().filter(|block| block.kind.is_heading()).count()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotFile {
    #[serde(default)]
    site: Option<SiteDescriptor>,
    #[serde(default)]
    pages: Option<Vec<PageInfo>>,
    #[serde(default)]
    record_maps: HashMap<PageId, RecordMap>,
}

/// Everything the content collaborator hands to the home view.
///
/// Two snapshots compare equal only when they share a revision; a freshly
/// loaded snapshot always gets a new one.
#[derive(Debug, Clone)]
pub struct ContentSnapshot {
    pub site: Option<SiteDescriptor>,
    pub site_map: Option<Arc<SiteMap>>,
    pub record_maps: Arc<HashMap<PageId, RecordMap>>,
    revision: u64,
}

impl PartialEq for ContentSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision
    }
}

impl ContentSnapshot {
    pub fn new(
        site: Option<SiteDescriptor>,
        site_map: Option<SiteMap>,
        record_maps: HashMap<PageId, RecordMap>,
    ) -> Self {
        Self {
            site,
            site_map: site_map.map(Arc::new),
            record_maps: Arc::new(record_maps),
            revision: next_revision(),
        }
    }

    /// Snapshot with nothing loaded yet; renders the loading placeholder.
    pub fn pending() -> Self {
        Self::new(None, None, HashMap::new())
    }

    /// Parse the JSON snapshot format:
    /// `{ "site": {..}, "pages": [PageInfo..], "recordMaps": { id: { "blocks": [..] } } }`.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let file: SnapshotFile = serde_json::from_str(raw)?;
        let site_map = file.pages.map(SiteMap::new);

        if let Some(map) = site_map.as_ref() {
            if let Some(orphan) = file.record_maps.keys().find(|id| !map.contains(id)) {
                return Err(ContentError::OrphanRecordMap(orphan.clone()));
            }
        }

        Ok(Self::new(file.site, site_map, file.record_maps))
    }

    /// Use `site` when the snapshot did not carry its own descriptor.
    pub fn with_site_fallback(mut self, site: SiteDescriptor) -> Self {
        if self.site.is_none() {
            self.site = Some(site);
        }
        self
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_ready(&self) -> bool {
        self.site.is_some() && self.site_map.is_some()
    }

    pub fn page(&self, page_id: &str) -> Option<&PageInfo> {
        self.site_map.as_deref().and_then(|map| map.get(page_id))
    }

    pub fn record_map(&self, page_id: &str) -> Option<&RecordMap> {
        self.record_maps.get(page_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: &str, page_type: PageType, language: &str, slug: &str) -> PageInfo {
        PageInfo {
            page_id: id.into(),
            page_type,
            language: language.into(),
            slug: slug.into(),
            title: String::new(),
        }
    }

    #[test]
    fn site_map_keeps_natural_order_and_first_duplicate() {
        let map = SiteMap::new(vec![
            page("b", PageType::Home, "en", "about"),
            page("a", PageType::Home, "en", "team"),
            page("b", PageType::Post, "fr", "dup"),
        ]);
        let ids: Vec<_> = map.iter().map(|p| p.page_id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(map.get("b").map(|p| p.page_type), Some(PageType::Home));
    }

    #[test]
    fn pages_of_filters_type_and_language() {
        let map = SiteMap::new(vec![
            page("1", PageType::Home, "en", "x"),
            page("2", PageType::Post, "en", "y"),
            page("3", PageType::Home, "fr", "x"),
        ]);
        let ids: Vec<_> = map.pages_of(PageType::Home, "fr").map(|p| p.page_id.clone()).collect();
        assert_eq!(ids, ["3"]);
    }

    #[test]
    fn unknown_types_deserialize_leniently() {
        let raw = r#"[{"pageId":"p","type":"Gallery","language":"en","slug":"g"}]"#;
        let map: SiteMap = serde_json::from_str(raw).unwrap();
        assert_eq!(map.get("p").unwrap().page_type, PageType::Other);

        let block: Block = serde_json::from_str(r#"{"id":"b","type":"callout"}"#).unwrap();
        assert_eq!(block.kind, BlockKind::Other);
    }

    #[test]
    fn heading_count_covers_three_levels() {
        let records: RecordMap = serde_json::from_str(
            r#"{"blocks":[
                {"id":"1","type":"header","text":"A"},
                {"id":"2","type":"text","text":"body"},
                {"id":"3","type":"sub_header","text":"B"},
                {"id":"4","type":"sub_sub_header","text":"C"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(records.heading_count(), 3);
    }

    #[test]
    fn snapshot_rejects_orphan_record_maps() {
        let raw = r#"{
            "site": {"name": "HAcapital"},
            "pages": [],
            "recordMaps": {"ghost": {"blocks": []}}
        }"#;
        assert!(matches!(
            ContentSnapshot::from_json(raw),
            Err(ContentError::OrphanRecordMap(id)) if id == "ghost"
        ));
    }

    #[test]
    fn snapshots_compare_by_revision() {
        let a = ContentSnapshot::pending();
        let b = ContentSnapshot::pending();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert!(!a.is_ready());
    }
}
