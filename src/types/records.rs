//! Usage record types
//!
//! Two shapes of record exist: the raw wire shape deserialized from the
//! input JSON (integer floor plus free-form code strings) and the typed
//! domain record the analyzer consumes. Conversion between the two, with
//! its defaulting rules, lives in the loader.

use super::enums::{Elevator, Period};
use super::floor::Floor;
use serde::{Deserialize, Serialize};

/// A single record as it appears in the input file
///
/// The elevator and period are kept as strings here because the wire
/// format carries unvalidated codes; the loader maps them onto the
/// closed enumerations. Field aliases accept the original Portuguese
/// wire names (`andar`, `elevador`, `turno`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUsageRecord {
    /// The floor the user traveled to
    #[serde(alias = "andar")]
    pub floor: i64,
    /// The elevator code string ("A" through "E")
    #[serde(alias = "elevador")]
    pub elevator: String,
    /// The period code string ("M", "V" or "N")
    #[serde(alias = "turno")]
    pub period: String,
}

/// One observed elevator call, fully typed
///
/// Immutable once created; the analyzer owns a list of these for the
/// lifetime of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UsageRecord {
    /// The floor the user traveled to
    pub floor: Floor,
    /// The elevator that served the call
    pub elevator: Elevator,
    /// The period in which the call happened
    pub period: Period,
}

impl UsageRecord {
    /// Create a usage record from already-validated components
    pub fn new(floor: Floor, elevator: Elevator, period: Period) -> Self {
        Self { floor, elevator, period }
    }
}
