//! Floor identifier for the analyzed building
//!
//! The building served by the elevator bank has a fixed closed range of
//! floors, 0 through 15. Absent floors still participate in the analysis
//! with a count of zero, so the full range is always enumerable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of floors in the building
pub const FLOOR_COUNT: u8 = 16;

/// A floor of the building, in the closed range [0, 15]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Floor(u8);

impl Floor {
    /// Lowest floor of the building
    pub const MIN: Floor = Floor(0);

    /// Highest floor of the building
    pub const MAX: Floor = Floor(FLOOR_COUNT - 1);

    /// Create a floor, rejecting values outside the building's range
    pub fn new(value: u8) -> Result<Self, String> {
        if value < FLOOR_COUNT {
            Ok(Floor(value))
        } else {
            Err(format!("Floor {} is outside the building range 0-{}", value, FLOOR_COUNT - 1))
        }
    }

    /// The numeric floor value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Iterate over every floor of the building, lowest first
    pub fn all() -> impl Iterator<Item = Floor> {
        (0..FLOOR_COUNT).map(Floor)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Floor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Floor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Floor::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_bounds() {
        assert_eq!(Floor::new(0).unwrap().value(), 0);
        assert_eq!(Floor::new(15).unwrap().value(), 15);
        assert!(Floor::new(16).is_err());
        assert!(Floor::new(255).is_err());
    }

    #[test]
    fn test_floor_all_covers_building() {
        let floors: Vec<Floor> = Floor::all().collect();
        assert_eq!(floors.len(), FLOOR_COUNT as usize);
        assert_eq!(floors.first(), Some(&Floor::MIN));
        assert_eq!(floors.last(), Some(&Floor::MAX));
    }

    #[test]
    fn test_floor_ordering_and_display() {
        let mut floors = vec![Floor::new(7).unwrap(), Floor::new(2).unwrap()];
        floors.sort();
        assert_eq!(format!("{}", floors[0]), "2");
        assert_eq!(format!("{}", floors[1]), "7");
    }

    #[test]
    fn test_floor_serde_round_trip() {
        let floor = Floor::new(9).unwrap();
        let json = serde_json::to_string(&floor).unwrap();
        assert_eq!(json, "9");
        let deserialized: Floor = serde_json::from_str(&json).unwrap();
        assert_eq!(floor, deserialized);

        // Out-of-range values must fail to deserialize
        assert!(serde_json::from_str::<Floor>("16").is_err());
    }
}
