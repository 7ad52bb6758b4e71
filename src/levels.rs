use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Closed seniority vocabulary shared by requirements and candidates.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[strum(serialize_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Staff,
    Principal,
}

/// Name -> ordinal table. Ordinal 0 is reserved for "absent".
pub const LEVEL_ORDINALS: [(&str, u8); 5] = [
    ("junior", 1),
    ("mid", 2),
    ("senior", 3),
    ("staff", 4),
    ("principal", 5),
];

impl ExperienceLevel {
    pub fn ordinal(self) -> u8 {
        // Variants are declared in table order
        LEVEL_ORDINALS[self as usize].1
    }

    /// Parses an exact lowercase level name. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::from_str(raw).ok()
    }

    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// Ordinal of an optional level string; empty, missing and unknown all map to 0.
pub fn level_ordinal(raw: Option<&str>) -> u8 {
    raw.and_then(ExperienceLevel::parse)
        .map(ExperienceLevel::ordinal)
        .unwrap_or(0)
}
