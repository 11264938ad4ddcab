//! Knowledge-domain tags.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{Display, EnumString};

/// A knowledge-scope tag routing a query to domain-specific answering
/// behavior.
///
/// The set is open-ended: the five well-known domains are first-class
/// variants, and any other string round-trips through [`Domain::Custom`].
/// Parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Domain {
    General,
    Legal,
    Medical,
    Academic,
    Business,
    /// Any domain tag outside the built-in set.
    #[strum(default)]
    Custom(String),
}

impl Default for Domain {
    fn default() -> Self {
        Domain::General
    }
}

// Domains serialize as their plain string form ("legal", "medical", ...),
// matching the wire shape clients send for domain selection.
impl Serialize for Domain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Domain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
