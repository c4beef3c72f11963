//! Mass sizing for propellant tanks and lander subsystems.
//!
//! Every correlation here is closed form. Lookup tables are keyed by closed
//! enumerations; text only enters through [`std::str::FromStr`], which is where
//! unknown categories are rejected.

pub mod materials;
pub mod subsystems;
pub mod tanks;

pub use materials::{Propellant, TankMaterial};
pub use subsystems::{ArrayType, LanderSize, SubsystemInputs, Subsystems, TankSlot};
pub use tanks::{TankSet, TankSetRequest, TankShape};

use thiserror::Error;

/// Invalid-configuration faults raised while sizing tanks and subsystems.
#[derive(Debug, Error, PartialEq)]
pub enum SizingError {
    #[error("unknown propellant '{0}'")]
    UnknownPropellant(String),
    #[error("unknown tank material '{0}'")]
    UnknownMaterial(String),
    #[error("unknown solar array type '{0}'")]
    UnknownArrayType(String),
    #[error("unknown lander size class '{0}'")]
    UnknownLanderSize(String),
    #[error("{0} is not a supported fuel for engine sizing")]
    UnsupportedFuel(Propellant),
    #[error("tank count must be at least 1")]
    ZeroTankCount,
    #[error("{quantity} must be positive, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },
}

pub(crate) fn require_positive(quantity: &'static str, value: f64) -> Result<f64, SizingError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SizingError::NonPositive { quantity, value })
    }
}
