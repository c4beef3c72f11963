//! Mission orchestration: the Earth-to-lunar-surface phase chain, the launch
//! mass by thrust trade space, and the reference-case dry mass budget.

pub mod budget;
pub mod launch;
pub mod profile;
pub mod settings;
pub mod sweep;

pub use budget::{BudgetRequest, MassBudget, TankPlan, size_budget};
pub use launch::LaunchCurve;
pub use profile::{BurnBudget, LUNAR_LANDING_SCHEDULE, MissionProfile, ScheduledBurn, fly_mission};
pub use settings::{budget_request, reference_index, trade_request};
pub use sweep::{GridIndex, TradeGrid, TradeSpace, TradeSpaceRequest, run_trade_space};

use lunar_propulsion::PropulsionError;
use lunar_sizing::SizingError;

/// Top-level mission sizing error.
#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    #[error("phase sizing failed: {0}")]
    Propulsion(#[from] PropulsionError),
    #[error("invalid configuration: {0}")]
    Sizing(#[from] SizingError),
    #[error("reference point ({launch_mass_index}, {thrust_index}) lies outside the {rows}x{cols} grid")]
    ReferenceOutOfRange {
        launch_mass_index: usize,
        thrust_index: usize,
        rows: usize,
        cols: usize,
    },
}
