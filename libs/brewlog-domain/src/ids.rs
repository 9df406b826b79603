use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a coffee in the inventory
///
/// Coffee IDs are generated from the time the coffee was added
/// (`%Y%m%d%H%M%S`), but any text read back from storage is accepted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CoffeeId(String);

impl CoffeeId {
    /// Create a CoffeeId from existing text
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a CoffeeId from a timestamp
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.format("%Y%m%d%H%M%S").to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CoffeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CoffeeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CoffeeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a logged brew
///
/// Wraps a UUID v7 so that IDs sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BrewId(Uuid);

impl BrewId {
    /// Generate a new BrewId
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the inner UUID value
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BrewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BrewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for BrewId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::str::FromStr for BrewId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_coffee_id_from_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(CoffeeId::from_timestamp(at).as_str(), "20240309070501");
    }

    #[test]
    fn test_coffee_id_display() {
        let id = CoffeeId::new("20240309070501");
        assert_eq!(format!("{}", id), "20240309070501");
    }

    #[test]
    fn test_brew_id_generation() {
        let id1 = BrewId::new();
        let id2 = BrewId::new();

        assert_ne!(id1, id2, "Each BrewId should be unique");
    }

    #[test]
    fn test_brew_id_roundtrips_through_text() {
        let id = BrewId::new();
        let parsed: BrewId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
