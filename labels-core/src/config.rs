use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::filter::{
    DEFAULT_CATEGORIES, DEFAULT_DENIED_CODES, DEFAULT_MINIMUM_CARD_COUNT, FilterCriteria,
};
use crate::names::default_renames;
use crate::variants::VariantTag;

pub const DEFAULT_API_URL: &str = "https://api.scryfall.com/sets";
pub const DEFAULT_USER_AGENT: &str = concat!("mtglabels/", env!("CARGO_PKG_VERSION"));

/// User configuration, read from JSON. Every field may be left out.
///
/// ```json
/// {
///   "minimum_card_count": 80,
///   "denied_codes": ["sum"],
///   "renames": { "Dominaria United Commander": "DMU Commander" },
///   "variants": ["W", "U", "B", "R", "G"]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub allowed_categories: BTreeSet<String>,
    pub denied_codes: BTreeSet<String>,
    pub minimum_card_count: u32,
    /// Merged over the built-in table.
    pub renames: HashMap<String, String>,
    pub variants: Vec<VariantTag>,
    pub api_url: String,
    pub user_agent: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            allowed_categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            denied_codes: DEFAULT_DENIED_CODES.iter().map(|s| s.to_string()).collect(),
            minimum_card_count: DEFAULT_MINIMUM_CARD_COUNT,
            renames: HashMap::new(),
            variants: VariantTag::DEFAULT_ORDER.to_vec(),
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl LabelConfig {
    pub fn from_json(txt: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(txt)?)
    }

    /// Filter criteria, with `explicit_codes` overriding everything else
    /// when non-empty.
    pub fn criteria<S: AsRef<str>>(&self, explicit_codes: &[S]) -> FilterCriteria {
        FilterCriteria {
            allowed_categories: self.allowed_categories.clone(),
            denied_codes: self.denied_codes.clone(),
            minimum_card_count: self.minimum_card_count,
            explicit_codes: explicit_codes
                .iter()
                .map(|c| c.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Built-in renames with the configured ones on top.
    pub fn rename_table(&self) -> HashMap<String, String> {
        let mut table = default_renames();
        table.extend(self.renames.iter().map(|(k, v)| (k.clone(), v.clone())));
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(LabelConfig::from_json("{}").unwrap(), LabelConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let cfg = LabelConfig::from_json(
            r#"{"minimum_card_count": 80, "variants": ["w", "u"],
                "renames": {"Dominaria United Commander": "DMU Commander"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.minimum_card_count, 80);
        assert_eq!(cfg.variants, [VariantTag::White, VariantTag::Blue]);
        assert!(cfg.denied_codes.contains("cmb1"));
        let table = cfg.rename_table();
        assert_eq!(table["Dominaria United Commander"], "DMU Commander");
        assert_eq!(table["Adventures in the Forgotten Realms"], "Forgotten Realms");
    }

    #[test]
    fn bad_variant_is_a_config_error() {
        assert!(matches!(
            LabelConfig::from_json(r#"{"variants": ["Q"]}"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn explicit_codes_are_lowercased() {
        let c = LabelConfig::default().criteria(&["NEO", "Mh1"]);
        assert!(c.explicit_codes.contains("neo"));
        assert!(c.explicit_codes.contains("mh1"));
    }
}
