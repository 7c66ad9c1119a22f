//! Post ordering.

use serde::{Deserialize, Serialize};

/// How a listing is ordered.
///
/// `Hot` and `Top` currently share the same score-descending order; the
/// variants stay separate so a recency decay can land in one match arm
/// without touching callers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Hot,
    New,
    Top,
}

impl SortMode {
    /// Parse a query value. Absent or unknown values take the default.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("new") => Self::New,
            Some("top") => Self::Top,
            _ => Self::Hot,
        }
    }
}
