//! Core types for the elevator usage analyzer
//!
//! This module contains the fundamental data types for the analysis:
//!
//! - **Floor**: the building's closed floor range [0, 15]
//! - **Enums**: type-safe enumerations for elevators, periods, and output formats
//! - **Records**: the raw wire record and the typed usage record
//! - **Configuration**: report configuration with validation and CLI support

pub mod config;
pub mod enums;
pub mod floor;
pub mod records;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use floor::*;
pub use records::*;
