//! Engine descriptors and rocket-equation phase models.

mod phase;
mod summary;

pub use phase::{DeltaVRequest, Phase, powered_descent_delta_v};
pub use summary::MissionSummary;

use lunar_core::mass_flow_kg_s;
use thiserror::Error;

/// Errors raised when building engines or phases from invalid inputs.
#[derive(Debug, Error, PartialEq)]
pub enum PropulsionError {
    #[error("phase '{phase}' start mass must be positive, got {mass_kg} kg")]
    NonPositiveStartMass { phase: String, mass_kg: f64 },
    #[error("specific impulse must be positive, got {0} s")]
    InvalidSpecificImpulse(f64),
    #[error("thrust must be positive, got {0} N")]
    InvalidThrust(f64),
    #[error("mixture ratio must be non-negative, got {0}")]
    InvalidMixtureRatio(f64),
}

/// Bipropellant engine with an assumed thrust, specific impulse, and mixture ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    pub isp_seconds: f64,
    pub thrust_n: f64,
    /// Oxidizer-to-fuel mass ratio.
    pub mixture_ratio: f64,
}

impl Engine {
    pub fn new(isp_seconds: f64, thrust_n: f64, mixture_ratio: f64) -> Result<Self, PropulsionError> {
        if !(isp_seconds > 0.0) {
            return Err(PropulsionError::InvalidSpecificImpulse(isp_seconds));
        }
        if !(thrust_n > 0.0) {
            return Err(PropulsionError::InvalidThrust(thrust_n));
        }
        if !(mixture_ratio >= 0.0) {
            return Err(PropulsionError::InvalidMixtureRatio(mixture_ratio));
        }
        Ok(Self {
            isp_seconds,
            thrust_n,
            mixture_ratio,
        })
    }

    /// Propellant mass flow at full thrust (kg/s).
    pub fn mass_flow_kg_s(&self) -> f64 {
        mass_flow_kg_s(self.thrust_n, self.isp_seconds)
    }

    /// Oxidizer share of a propellant load.
    pub fn oxidizer_fraction(&self) -> f64 {
        self.mixture_ratio / (1.0 + self.mixture_ratio)
    }

    /// Fuel share of a propellant load.
    pub fn fuel_fraction(&self) -> f64 {
        1.0 / (1.0 + self.mixture_ratio)
    }
}
