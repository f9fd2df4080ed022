//! Closed option sets for sort and filter actions.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Ordering applied by [`crate::derive::sort_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriterion {
    /// Ascending by name, case-insensitive.
    Name,
    /// Descending by pledged amount.
    Pledged,
    /// Descending by backer count.
    Backers,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 3] = [Self::Name, Self::Pledged, Self::Backers];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Pledged => "pledged",
            Self::Backers => "backers",
        }
    }
}

/// Subset selected by [`crate::derive::filter_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    All,
    /// `pledged >= goal`.
    Funded,
    /// `pledged < goal`.
    Unfunded,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [Self::All, Self::Funded, Self::Unfunded];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Funded => "funded",
            Self::Unfunded => "unfunded",
        }
    }
}

/// Label did not name a known sort criterion or filter mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel {
    /// Which option set was parsed (`sort criterion` / `filter mode`).
    pub kind: &'static str,
    pub value: String,
}

impl Display for UnknownLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.value)
    }
}

impl Error for UnknownLabel {}

impl FromStr for SortCriterion {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == normalized)
            .ok_or_else(|| UnknownLabel {
                kind: "sort criterion",
                value: value.to_string(),
            })
    }
}

impl FromStr for FilterMode {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| UnknownLabel {
                kind: "filter mode",
                value: value.to_string(),
            })
    }
}

impl Display for SortCriterion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for FilterMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
