//! Page sizes, label templates and the validated grid they produce.
//!
//! All lengths are tenths of a millimetre.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported paper, landscape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
}

impl PaperSize {
    pub const ALL: [PaperSize; 2] = [PaperSize::Letter, PaperSize::A4];

    /// (width, height)
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PaperSize::Letter => (2790.0, 2160.0),
            PaperSize::A4 => (2970.0, 2100.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::Letter => "letter",
            PaperSize::A4 => "a4",
        }
    }
}

impl FromStr for PaperSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaperSize::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPaperSize(s.to_string()))
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What kind of sheet is printed: a dense sheet of small labels or a few
/// card-sized dividers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Labels,
    Dividers,
}

impl Template {
    pub fn name(self) -> &'static str {
        match self {
            Template::Labels => "labels",
            Template::Dividers => "dividers",
        }
    }

    /// Default grid: (columns, rows, margin).
    pub fn grid(self) -> (usize, usize, f64) {
        match self {
            Template::Labels => (4, 15, 200.0),
            // 69.25 x 95 mm cells on A4 landscape
            Template::Dividers => (4, 2, 100.0),
        }
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "labels" | "label" => Ok(Template::Labels),
            "dividers" | "divider" => Ok(Template::Dividers),
            _ => Err(Error::UnknownTemplate(s.to_string())),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Largest column or row count a grid may have.
pub const MAX_GRID: usize = 1000;

/// Validated page grid. Cells are never empty once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PageGeometry {
    page_width: f64,
    page_height: f64,
    margin: f64,
    columns: usize,
    rows: usize,
}

impl PageGeometry {
    pub fn new(
        page_width: f64,
        page_height: f64,
        margin: f64,
        columns: usize,
        rows: usize,
    ) -> Result<Self, Error> {
        if columns == 0 || rows == 0 {
            return Err(Error::InvalidGeometry(format!(
                "grid must have at least one column and row (got {columns}x{rows})"
            )));
        }
        if columns > MAX_GRID || rows > MAX_GRID {
            return Err(Error::InvalidGeometry(format!(
                "grid {columns}x{rows} exceeds {MAX_GRID} columns or rows"
            )));
        }
        if !(page_width.is_finite() && page_height.is_finite() && margin.is_finite()) {
            return Err(Error::InvalidGeometry("non-finite page dimensions".into()));
        }
        if margin < 0.0 {
            return Err(Error::InvalidGeometry(format!("negative margin {margin}")));
        }
        if margin * 2.0 >= page_width || margin * 2.0 >= page_height {
            return Err(Error::InvalidGeometry(format!(
                "margin {margin} leaves no room on a {page_width}x{page_height} page"
            )));
        }
        Ok(Self {
            page_width,
            page_height,
            margin,
            columns,
            rows,
        })
    }

    /// Geometry for a paper size and template, with optional overrides.
    pub fn for_paper(
        paper: PaperSize,
        template: Template,
        columns: Option<usize>,
        rows: Option<usize>,
        margin: Option<f64>,
    ) -> Result<Self, Error> {
        let (w, h) = paper.dimensions();
        let (c, r, m) = template.grid();
        Self::new(
            w,
            h,
            margin.unwrap_or(m),
            columns.unwrap_or(c),
            rows.unwrap_or(r),
        )
    }

    pub fn page_width(&self) -> f64 {
        self.page_width
    }
    pub fn page_height(&self) -> f64 {
        self.page_height
    }
    pub fn margin(&self) -> f64 {
        self.margin
    }
    pub fn columns(&self) -> usize {
        self.columns
    }
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_width(&self) -> f64 {
        (self.page_width - 2.0 * self.margin) / self.columns as f64
    }

    pub fn cell_height(&self) -> f64 {
        (self.page_height - 2.0 * self.margin) / self.rows as f64
    }

    pub fn items_per_page(&self) -> usize {
        self.rows * self.columns
    }
}
