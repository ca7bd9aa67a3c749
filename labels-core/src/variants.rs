use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Colour pip used to split one set into several dividers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VariantTag {
    Multicolor,
    Colorless,
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl VariantTag {
    /// Order used by `--pips` unless the configuration says otherwise.
    pub const DEFAULT_ORDER: [VariantTag; 7] = [
        VariantTag::Multicolor,
        VariantTag::Colorless,
        VariantTag::White,
        VariantTag::Blue,
        VariantTag::Black,
        VariantTag::Red,
        VariantTag::Green,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            VariantTag::Multicolor => "M",
            VariantTag::Colorless => "C",
            VariantTag::White => "W",
            VariantTag::Blue => "U",
            VariantTag::Black => "B",
            VariantTag::Red => "R",
            VariantTag::Green => "G",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VariantTag::Multicolor => "Multicolour",
            VariantTag::Colorless => "Colourless",
            VariantTag::White => "White",
            VariantTag::Blue => "Blue",
            VariantTag::Black => "Black",
            VariantTag::Red => "Red",
            VariantTag::Green => "Green",
        }
    }

    /// Pip fill colour.
    pub fn fill(self) -> &'static str {
        match self {
            VariantTag::Multicolor => "#d9b44a",
            VariantTag::Colorless => "#c8c2bd",
            VariantTag::White => "#f8f6d8",
            VariantTag::Blue => "#aae0fa",
            VariantTag::Black => "#cbc2bf",
            VariantTag::Red => "#f9aa8f",
            VariantTag::Green => "#9bd3ae",
        }
    }

    /// Parse a list of pip symbols such as `["W", "u", "B"]`.
    pub fn parse_list<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<VariantTag>, Error> {
        symbols.iter().map(|s| s.as_ref().parse()).collect()
    }
}

impl FromStr for VariantTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" | "MULTI" | "MULTICOLOR" | "MULTICOLOUR" => Ok(VariantTag::Multicolor),
            "C" | "COLORLESS" | "COLOURLESS" => Ok(VariantTag::Colorless),
            "W" | "WHITE" => Ok(VariantTag::White),
            "U" | "BLUE" => Ok(VariantTag::Blue),
            "B" | "BLACK" => Ok(VariantTag::Black),
            "R" | "RED" => Ok(VariantTag::Red),
            "G" | "GREEN" => Ok(VariantTag::Green),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}

impl TryFrom<String> for VariantTag {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VariantTag> for String {
    fn from(tag: VariantTag) -> Self {
        tag.symbol().to_string()
    }
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
