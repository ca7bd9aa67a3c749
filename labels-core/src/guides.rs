use serde::Serialize;

use crate::geometry::PageGeometry;
use crate::models::Segment;

/// Where the ticks start and stop, as fractions of the margin measured from
/// the page edge.
const TICK_START: f64 = 0.5;
const TICK_END: f64 = 0.8;

/// Tick marks in the margins lining up with every grid line.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CuttingGuides {
    pub horizontal: Vec<Segment>,
    pub vertical: Vec<Segment>,
}

impl CuttingGuides {
    pub fn all(&self) -> impl Iterator<Item = &Segment> {
        self.horizontal.iter().chain(self.vertical.iter())
    }
}

/// Guides for `geometry`. They depend on nothing else, so one set serves
/// every page.
pub fn guides(geometry: &PageGeometry) -> CuttingGuides {
    let m = geometry.margin();
    let w = geometry.page_width();
    let h = geometry.page_height();

    let mut horizontal = Vec::with_capacity(2 * (geometry.rows() + 1));
    for i in 0..=geometry.rows() {
        let y = m + i as f64 * geometry.cell_height();
        horizontal.push(Segment {
            x1: m * TICK_START,
            y1: y,
            x2: m * TICK_END,
            y2: y,
        });
        horizontal.push(Segment {
            x1: w - m * TICK_START,
            y1: y,
            x2: w - m * TICK_END,
            y2: y,
        });
    }

    let mut vertical = Vec::with_capacity(2 * (geometry.columns() + 1));
    for j in 0..=geometry.columns() {
        let x = m + j as f64 * geometry.cell_width();
        vertical.push(Segment {
            x1: x,
            y1: m * TICK_START,
            x2: x,
            y2: m * TICK_END,
        });
        vertical.push(Segment {
            x1: x,
            y1: h - m * TICK_START,
            x2: x,
            y2: h - m * TICK_END,
        });
    }

    CuttingGuides {
        horizontal,
        vertical,
    }
}
