use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use staffhub_core::DomainError;

use crate::text::is_blank;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex color pattern is valid")
});

/// `#rgb` or `#rrggbb`, case-insensitive. Blank input is never valid.
pub fn is_valid_hex_color(text: Option<&str>) -> bool {
    match text {
        Some(t) if !is_blank(Some(t)) => HEX_COLOR.is_match(t),
        _ => false,
    }
}

/// A validated CSS hex color as entered by the user (case preserved).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_hex_color(Some(s)) {
            Ok(Self(s.to_string()))
        } else {
            Err(DomainError::validation(format!("'{s}' is not a hex color")))
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl core::fmt::Display for HexColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
