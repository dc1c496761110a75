//! Table-of-contents visibility gate for CMS pages.

use super::content::{PageInfo, RecordMap};

/// Fewest headings worth a table of contents.
pub const MIN_TOC_ITEMS: usize = 3;
/// Narrowest viewport (logical px) with room for the side TOC.
pub const TOC_MIN_WIDTH: u32 = 1200;

/// All four conditions must hold: long-form page, enough headings, desktop
/// layout, wide viewport. Missing page info or records never show a TOC.
pub fn should_show_toc(
    page: Option<&PageInfo>,
    records: Option<&RecordMap>,
    is_mobile: bool,
    width: u32,
) -> bool {
    let (Some(page), Some(records)) = (page, records) else {
        return false;
    };

    page.page_type.is_long_form()
        && records.heading_count() >= MIN_TOC_ITEMS
        && !is_mobile
        && width >= TOC_MIN_WIDTH
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub block_id: String,
    pub text: String,
    pub level: u8,
}

pub fn toc_entries(records: &RecordMap) -> Vec<TocEntry> {
    records
        .blocks
        .iter()
        .filter_map(|block| {
            block.kind.heading_level().map(|level| TocEntry {
                block_id: block.id.clone(),
                text: block.text.clone(),
                level,
            })
        })
        .collect()
}
