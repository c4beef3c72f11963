//! Preliminary sizing of a lunar lander: phase-by-phase propellant, tanks,
//! subsystem dry mass, and the launch mass by thrust trade space.
//!
//! The physics lives in the member crates; this crate re-exports them so the
//! binaries and integration tests share one entry point, and owns plotting.

pub mod plot;

pub use lunar_config as config;
pub use lunar_core as common;
pub use lunar_export as export;
pub use lunar_mission as mission;
pub use lunar_orbits as orbits;
pub use lunar_propulsion as propulsion;
pub use lunar_sizing as sizing;
