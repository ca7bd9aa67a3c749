//! Layout engine for printable trading-card set labels and dividers.
//!
//! Catalog records go through [`filter::filter`], get display names from
//! [`names::normalize`], are placed on a page grid by [`layout::layout`] and
//! split into [`Page`]s. [`guides::guides`] produces the cutting marks shared
//! by every page and [`svg::build_page_svg`] turns a page into a document.

pub mod config;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod guides;
pub mod layout;
pub mod models;
pub mod names;
pub mod svg;
pub mod variants;

pub use config::LabelConfig;
pub use error::{Error, Result};
pub use filter::{FilterCriteria, filter, unknown_codes};
pub use geometry::{PageGeometry, PaperSize, Template};
pub use guides::{CuttingGuides, guides};
pub use layout::{LayoutOptions, layout, paginate};
pub use models::{Page, PlacedItem, Segment, SetList, SetRecord};
pub use names::normalize;
pub use svg::build_page_svg;
pub use variants::VariantTag;

/// Everything needed to print one run: the pages in order and the guides
/// they all share.
#[derive(Clone, Debug, Default)]
pub struct LabelPlan {
    pub pages: Vec<Page>,
    pub guides: CuttingGuides,
}

impl LabelPlan {
    /// Filter, rename and lay out `catalog` in one go.
    pub fn build(
        catalog: &[SetRecord],
        criteria: &FilterCriteria,
        renames: &std::collections::HashMap<String, String>,
        geometry: &PageGeometry,
        options: &LayoutOptions,
    ) -> Self {
        let selected = filter(catalog, criteria);
        log::info!("{} of {} sets selected", selected.len(), catalog.len());
        let items = layout(&selected, renames, geometry, options);
        Self {
            pages: paginate(items),
            guides: guides(geometry),
        }
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(|p| p.items.len()).sum()
    }
}
