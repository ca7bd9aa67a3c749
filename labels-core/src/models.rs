use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::variants::VariantTag;

/// One catalog entry, as returned by the Scryfall `/sets` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    pub code: String,
    pub name: String,
    #[serde(rename = "released_at", default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub card_count: u32,
    #[serde(rename = "set_type")]
    pub category: String,
    #[serde(rename = "digital", default)]
    pub is_digital_only: bool,
    // Remote URL or a local path, resolved by the caller.
    #[serde(rename = "icon_svg_uri", default)]
    pub icon: String,
}

impl SetRecord {
    pub fn code_lower(&self) -> String {
        self.code.to_lowercase()
    }
}

/// Body of the `/sets` listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SetList {
    #[serde(default)]
    pub data: Vec<SetRecord>,
}

/// One label or divider positioned on a page. Coordinates are the top-left
/// corner of the cell in tenths of a millimetre.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacedItem {
    pub display_name: String,
    pub code: String,
    pub release_date: Option<NaiveDate>,
    pub icon: String,
    pub variant: Option<VariantTag>,
    pub page_index: usize,
    pub x: f64,
    pub y: f64,
}

/// All items sharing a page index.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Page {
    pub index: usize,
    pub items: Vec<PlacedItem>,
}

impl Page {
    /// Page number as printed in file names.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// A straight cutting mark.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scryfall_set_object() {
        let json = r#"{
            "object": "set",
            "code": "neo",
            "name": "Kamigawa: Neon Dynasty",
            "released_at": "2022-02-18",
            "set_type": "expansion",
            "card_count": 512,
            "digital": false,
            "icon_svg_uri": "https://svgs.scryfall.io/sets/neo.svg"
        }"#;
        let rec: SetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.code, "neo");
        assert_eq!(rec.category, "expansion");
        assert_eq!(rec.card_count, 512);
        assert_eq!(rec.release_date, NaiveDate::from_ymd_opt(2022, 2, 18));
        assert!(!rec.is_digital_only);
    }

    #[test]
    fn missing_release_date_is_none() {
        let json = r#"{"code":"x","name":"X","set_type":"box"}"#;
        let rec: SetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.release_date, None);
        assert_eq!(rec.card_count, 0);
        assert!(rec.icon.is_empty());
    }
}
