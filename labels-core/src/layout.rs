//! Grid placement of labels across pages.
//!
//! Cells are filled column-major: down the first column, then the next
//! column to the right, then a new page. Item `i` lands in slot
//! `i % (rows * columns)` of page `i / (rows * columns)`.

use std::collections::HashMap;

use crate::geometry::PageGeometry;
use crate::models::{Page, PlacedItem, SetRecord};
use crate::names::normalize;
use crate::variants::VariantTag;

/// How many items each record turns into.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    pub expand_by_variant: bool,
    pub variants: Vec<VariantTag>,
}

impl LayoutOptions {
    /// One item per record per tag, in the given tag order.
    pub fn with_variants(variants: Vec<VariantTag>) -> Self {
        Self {
            expand_by_variant: true,
            variants,
        }
    }
}

/// Top-left corner and page of the `index`-th item.
pub fn position(index: usize, geometry: &PageGeometry) -> (usize, f64, f64) {
    let per_page = geometry.items_per_page();
    let page = index / per_page;
    let slot = index % per_page;
    let column = slot / geometry.rows();
    let row = slot % geometry.rows();
    let x = geometry.margin() + column as f64 * geometry.cell_width();
    let y = geometry.margin() + row as f64 * geometry.cell_height();
    (page, x, y)
}

/// Place every record (or every record/variant pair) on the grid.
///
/// Records are taken in the given order. Display names go through
/// `renames`. No blank items are added to fill the last page.
pub fn layout(
    records: &[SetRecord],
    renames: &HashMap<String, String>,
    geometry: &PageGeometry,
    options: &LayoutOptions,
) -> Vec<PlacedItem> {
    let expanded: Vec<(&SetRecord, Option<VariantTag>)> = if options.expand_by_variant {
        records
            .iter()
            .flat_map(|r| options.variants.iter().map(move |v| (r, Some(*v))))
            .collect()
    } else {
        records.iter().map(|r| (r, None)).collect()
    };

    expanded
        .into_iter()
        .enumerate()
        .map(|(i, (rec, variant))| {
            let (page_index, x, y) = position(i, geometry);
            PlacedItem {
                display_name: normalize(&rec.name, renames).to_string(),
                code: rec.code.clone(),
                release_date: rec.release_date,
                icon: rec.icon.clone(),
                variant,
                page_index,
                x,
                y,
            }
        })
        .collect()
}

/// Group placed items into pages. An empty layout has no pages.
pub fn paginate(items: Vec<PlacedItem>) -> Vec<Page> {
    let mut pages: Vec<Page> = Vec::new();
    for item in items {
        match pages.last_mut() {
            Some(page) if page.index == item.page_index => page.items.push(item),
            _ => pages.push(Page {
                index: item.page_index,
                items: vec![item],
            }),
        }
    }
    pages
}
