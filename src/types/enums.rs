//! Enumeration types for the elevator usage analyzer
//!
//! This module contains the closed enumerated sets used throughout the
//! analysis: the elevator bank identifiers, the time-of-day periods, and
//! the report output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The elevators of the building, a fixed bank of five
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Elevator {
    /// Elevator A
    A,
    /// Elevator B
    B,
    /// Elevator C
    C,
    /// Elevator D
    D,
    /// Elevator E
    E,
}

impl Elevator {
    /// All elevators of the bank, in alphabetical order
    pub const ALL: [Elevator; 5] =
        [Elevator::A, Elevator::B, Elevator::C, Elevator::D, Elevator::E];

    /// The single-letter code used in the input data
    pub fn code(&self) -> char {
        match self {
            Elevator::A => 'A',
            Elevator::B => 'B',
            Elevator::C => 'C',
            Elevator::D => 'D',
            Elevator::E => 'E',
        }
    }
}

impl fmt::Display for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Elevator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(Elevator::A),
            "b" => Ok(Elevator::B),
            "c" => Ok(Elevator::C),
            "d" => Ok(Elevator::D),
            "e" => Ok(Elevator::E),
            _ => Err(format!("Unknown elevator code: {}", s)),
        }
    }
}

/// The time-of-day periods in which an elevator call is recorded
///
/// The input data encodes these as single letters: M (morning),
/// V (afternoon, from the original "vespertino"), N (night).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    /// Morning period (code M)
    Morning,
    /// Afternoon period (code V)
    Afternoon,
    /// Night period (code N)
    Night,
}

impl Period {
    /// All periods, in declaration order
    pub const ALL: [Period; 3] = [Period::Morning, Period::Afternoon, Period::Night];

    /// The single-letter code used in the input data
    pub fn code(&self) -> char {
        match self {
            Period::Morning => 'M',
            Period::Afternoon => 'V',
            Period::Night => 'N',
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Morning => write!(f, "Morning"),
            Period::Afternoon => write!(f, "Afternoon"),
            Period::Night => write!(f, "Night"),
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "morning" => Ok(Period::Morning),
            "v" | "afternoon" => Ok(Period::Afternoon),
            "n" | "night" => Ok(Period::Night),
            _ => Err(format!("Unknown period code: {}", s)),
        }
    }
}

/// Output format options for the generated report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text report
    #[default]
    Text,
    /// JSON summary document
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevator_display() {
        assert_eq!(format!("{}", Elevator::A), "A");
        assert_eq!(format!("{}", Elevator::E), "E");
    }

    #[test]
    fn test_elevator_from_str() {
        assert_eq!("A".parse::<Elevator>().unwrap(), Elevator::A);
        assert_eq!("a".parse::<Elevator>().unwrap(), Elevator::A);
        assert_eq!(" c ".parse::<Elevator>().unwrap(), Elevator::C);
        assert_eq!("E".parse::<Elevator>().unwrap(), Elevator::E);

        // Test error case
        assert!("F".parse::<Elevator>().is_err());
        assert!("".parse::<Elevator>().is_err());
    }

    #[test]
    fn test_elevator_ordering() {
        let mut elevators = vec![Elevator::E, Elevator::B, Elevator::A];
        elevators.sort();
        assert_eq!(elevators, vec![Elevator::A, Elevator::B, Elevator::E]);
    }

    #[test]
    fn test_period_display() {
        assert_eq!(format!("{}", Period::Morning), "Morning");
        assert_eq!(format!("{}", Period::Afternoon), "Afternoon");
        assert_eq!(format!("{}", Period::Night), "Night");
    }

    #[test]
    fn test_period_codes() {
        assert_eq!(Period::Morning.code(), 'M');
        assert_eq!(Period::Afternoon.code(), 'V');
        assert_eq!(Period::Night.code(), 'N');
    }

    #[test]
    fn test_period_from_str() {
        assert_eq!("M".parse::<Period>().unwrap(), Period::Morning);
        assert_eq!("m".parse::<Period>().unwrap(), Period::Morning);
        assert_eq!("V".parse::<Period>().unwrap(), Period::Afternoon);
        assert_eq!("afternoon".parse::<Period>().unwrap(), Period::Afternoon);
        assert_eq!("N".parse::<Period>().unwrap(), Period::Night);
        assert_eq!("night".parse::<Period>().unwrap(), Period::Night);

        // Test error case
        assert!("X".parse::<Period>().is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_enum_serialization() {
        let elevator = Elevator::C;
        let json = serde_json::to_string(&elevator).unwrap();
        let deserialized: Elevator = serde_json::from_str(&json).unwrap();
        assert_eq!(elevator, deserialized);

        let period = Period::Afternoon;
        let json = serde_json::to_string(&period).unwrap();
        let deserialized: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}
