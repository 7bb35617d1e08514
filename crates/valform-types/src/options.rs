use serde::{Deserialize, Serialize};
use std::fmt;

/// Named configuration bucket scoping one formatter's options.
///
/// The wire names match the keys the configuration objects were written
/// against, so stored configuration round-trips through JSON unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "numberFormatter")]
    NumberFormatter,
    #[serde(rename = "phones")]
    Phones,
    #[serde(rename = "tags")]
    Tags,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "specialCharsModifier")]
    SpecialCharsModifier,
    #[serde(rename = "URLValidator")]
    UrlValidator,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::NumberFormatter => "numberFormatter",
            Domain::Phones => "phones",
            Domain::Tags => "tags",
            Domain::Password => "password",
            Domain::SpecialCharsModifier => "specialCharsModifier",
            Domain::UrlValidator => "URLValidator",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Digit budgets for the number formatter.
///
/// `overall_digit_limit` caps the integer-part digit count before the
/// formatter escalates to a coarser magnitude tier; `decimal_digit_limit`
/// caps the fractional digits shown. With either limit absent the value is
/// rendered unabbreviated and unrounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberFormatOptions {
    pub overall_digit_limit: Option<u32>,
    pub decimal_digit_limit: Option<u32>,
}

/// Grouping pattern for the phone formatter.
///
/// `format` is a dash-separated list of group sizes (e.g. "3-4-4"). When
/// `is_international` is false the leading group is treated as the country
/// code and dropped from the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhoneOptions {
    pub format: String,
    pub is_international: bool,
}

impl Default for PhoneOptions {
    fn default() -> Self {
        Self {
            format: String::new(),
            is_international: true,
        }
    }
}

/// Candidate separators for the tag splitter. Empty means "use whichever
/// special characters occur in the input".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagOptions {
    pub separators: Vec<String>,
}

/// Special characters exempt from stripping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecialCharsOptions {
    pub exceptions: String,
}

/// Canonicalization flags for the URL validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlOptions {
    pub domain_only: bool,
    pub path_included: bool,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            domain_only: false,
            path_included: true,
        }
    }
}

/// One strength bracket: the label awarded when a password meets both the
/// diversity and length floors. Brackets are ranked by `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrengthTier {
    pub id: u32,
    pub value: String,
    pub min_diversity: u32,
    pub min_length: u32,
}

impl StrengthTier {
    pub fn new(id: u32, value: impl Into<String>, min_diversity: u32, min_length: u32) -> Self {
        Self {
            id,
            value: value.into(),
            min_diversity,
            min_length,
        }
    }
}

/// Composition minimums and strength brackets for the password validator.
///
/// A minimum of `None` or 0 (empty string for `symbol`) disables the
/// corresponding check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordOptions {
    pub character_len: Option<u32>,
    pub upper_case: Option<u32>,
    pub lower_case: Option<u32>,
    pub num: Option<u32>,
    pub symbol: Option<String>,
    pub strength_options: Option<Vec<StrengthTier>>,
}

/// Strength brackets used when none are configured.
pub fn default_strength_tiers() -> Vec<StrengthTier> {
    vec![
        StrengthTier::new(0, "Too weak", 0, 0),
        StrengthTier::new(1, "Weak", 2, 6),
        StrengthTier::new(2, "Medium", 3, 8),
        StrengthTier::new(3, "Strong", 4, 10),
    ]
}
