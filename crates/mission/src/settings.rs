//! Conversion from configuration records into runtime requests.

use lunar_config::{BudgetConfig, SizerConfig, TankConfig};
use lunar_core::grid::linspace;

use crate::budget::{BudgetRequest, TankPlan};
use crate::{GridIndex, LaunchCurve, MissionError, TradeSpaceRequest};

/// Build the sweep request described by a configuration.
pub fn trade_request(config: &SizerConfig) -> TradeSpaceRequest {
    let sweep = &config.sweep;
    TradeSpaceRequest {
        launch_masses_kg: linspace(
            sweep.launch_mass_min_kg,
            sweep.launch_mass_max_kg,
            sweep.launch_mass_points,
        ),
        thrusts_n: linspace(sweep.thrust_min_n, sweep.thrust_max_n, sweep.thrust_points),
        isp_seconds: config.engine.isp_seconds,
        mixture_ratio: config.engine.mixture_ratio,
        launch_curve: LaunchCurve::new(config.launch_curve.apogee_coefficients.clone()),
    }
}

/// Grid point designated for the phase report and mass budget.
pub fn reference_index(config: &SizerConfig) -> GridIndex {
    GridIndex {
        launch_mass: config.reference.launch_mass_index,
        thrust: config.reference.thrust_index,
    }
}

/// Resolve category names in the budget configuration.
pub fn budget_request(config: &BudgetConfig) -> Result<BudgetRequest, MissionError> {
    Ok(BudgetRequest {
        oxidizer_tanks: tank_plan(&config.oxidizer_tanks)?,
        fuel_tanks: tank_plan(&config.fuel_tanks)?,
        payload_power_w: config.payload_power_w,
        array_type: config.array_type.parse()?,
        lander_size: config.lander_size.parse()?,
        battery_duration_h: config.battery_duration_h,
    })
}

fn tank_plan(config: &TankConfig) -> Result<TankPlan, MissionError> {
    Ok(TankPlan {
        propellant: config.propellant.parse()?,
        material: config.material.parse()?,
        tank_count: config.tank_count,
        max_radius_m: config.max_radius_m,
        design_pressure_pa: config.design_pressure_pa,
    })
}
