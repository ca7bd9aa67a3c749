//! Which catalog records get a label, and in what order.

use std::collections::BTreeSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::models::SetRecord;

/// Set types printed by default.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "core",
    "expansion",
    "starter",
    "masters",
    "commander",
    "planechase",
    "draft_innovation",
    "duel_deck",
    "premium_deck",
    "from_the_vault",
    "archenemy",
    "box",
    "funny",
];

/// Codes skipped even when their type and size qualify.
pub const DEFAULT_DENIED_CODES: &[&str] = &[
    "cmb1", "amh1", "cmb2", "fbb", "sum", "4bb", "bchr", "rin", "ren", "rqs", "itp", "sir", "sis",
    "cst",
];

/// Smallest real expansion is Arabian Nights with 78 cards.
pub const DEFAULT_MINIMUM_CARD_COUNT: u32 = 50;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Empty allows every category.
    pub allowed_categories: BTreeSet<String>,
    pub denied_codes: BTreeSet<String>,
    pub minimum_card_count: u32,
    /// When non-empty, the only rule applied.
    pub explicit_codes: BTreeSet<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            allowed_categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            denied_codes: DEFAULT_DENIED_CODES.iter().map(|s| s.to_string()).collect(),
            minimum_card_count: DEFAULT_MINIMUM_CARD_COUNT,
            explicit_codes: BTreeSet::new(),
        }
    }
}

impl FilterCriteria {
    /// Criteria selecting exactly `codes`, case-insensitively.
    pub fn explicit<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            explicit_codes: codes.into_iter().map(|c| c.as_ref().to_lowercase()).collect(),
            ..Self::default()
        }
    }

    fn explicit_lower(&self) -> BTreeSet<String> {
        self.explicit_codes.iter().map(|c| c.to_lowercase()).collect()
    }

    /// Whether a single record passes, ignoring ordering.
    pub fn accepts(&self, rec: &SetRecord) -> bool {
        let code = rec.code_lower();
        if !self.explicit_codes.is_empty() {
            return self
                .explicit_codes
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&code));
        }
        if rec.is_digital_only {
            debug!("skipping {code}: digital only");
            return false;
        }
        if self
            .denied_codes
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&code))
        {
            debug!("skipping {code}: denied");
            return false;
        }
        if rec.card_count < self.minimum_card_count {
            debug!(
                "skipping {code}: {} cards < {}",
                rec.card_count, self.minimum_card_count
            );
            return false;
        }
        if !self.allowed_categories.is_empty() && !self.allowed_categories.contains(&rec.category)
        {
            debug!("skipping {code}: category {}", rec.category);
            return false;
        }
        true
    }
}

/// Records accepted by `criteria`, oldest first.
///
/// The catalog lists sets newest first, so the accepted records are returned
/// in reverse input order. Explicit codes that match nothing in `records` are
/// logged as warnings.
pub fn filter(records: &[SetRecord], criteria: &FilterCriteria) -> Vec<SetRecord> {
    for code in unknown_codes(records, criteria) {
        warn!("Unknown set '{code}'");
    }
    let mut out: Vec<SetRecord> = records
        .iter()
        .filter(|r| criteria.accepts(r))
        .cloned()
        .collect();
    out.reverse();
    out
}

/// Explicit codes (lower-cased, sorted) absent from `records`.
pub fn unknown_codes(records: &[SetRecord], criteria: &FilterCriteria) -> Vec<String> {
    if criteria.explicit_codes.is_empty() {
        return Vec::new();
    }
    let known: BTreeSet<String> = records.iter().map(SetRecord::code_lower).collect();
    criteria
        .explicit_lower()
        .difference(&known)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(code: &str, category: &str, cards: u32, digital: bool) -> SetRecord {
        SetRecord {
            code: code.into(),
            name: code.to_uppercase(),
            release_date: None,
            card_count: cards,
            category: category.into(),
            is_digital_only: digital,
            icon: String::new(),
        }
    }

    #[test]
    fn default_rules() {
        let c = FilterCriteria::default();
        assert!(c.accepts(&rec("neo", "expansion", 300, false)));
        assert!(!c.accepts(&rec("neo", "expansion", 300, true)));
        assert!(!c.accepts(&rec("cmb1", "expansion", 300, false)));
        assert!(!c.accepts(&rec("CMB1", "expansion", 300, false)));
        assert!(!c.accepts(&rec("neo", "expansion", 49, false)));
        assert!(c.accepts(&rec("neo", "expansion", 50, false)));
        assert!(!c.accepts(&rec("pneo", "promo", 300, false)));
    }

    #[test]
    fn empty_categories_allow_all() {
        let c = FilterCriteria {
            allowed_categories: BTreeSet::new(),
            ..FilterCriteria::default()
        };
        assert!(c.accepts(&rec("ptok", "token", 60, false)));
    }

    #[test]
    fn output_is_reversed() {
        let records = vec![
            rec("c", "core", 100, false),
            rec("b", "core", 100, false),
            rec("a", "core", 100, false),
        ];
        let out = filter(&records, &FilterCriteria::default());
        let codes: Vec<_> = out.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["a", "b", "c"]);
    }

    #[test]
    fn unknown_codes_are_reported_lowercase() {
        let records = vec![rec("neo", "expansion", 300, false)];
        let c = FilterCriteria {
            explicit_codes: ["NEO", "XYZ", "Abc"].iter().map(|s| s.to_string()).collect(),
            ..FilterCriteria::default()
        };
        assert_eq!(unknown_codes(&records, &c), ["abc", "xyz"]);
        assert_eq!(filter(&records, &c).len(), 1);
    }

    #[test]
    fn no_unknown_codes_without_explicit_list() {
        let records = vec![rec("neo", "expansion", 300, false)];
        assert!(unknown_codes(&records, &FilterCriteria::default()).is_empty());
    }
}
