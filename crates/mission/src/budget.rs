//! Dry mass budget for a single flown mission.

use log::info;
use lunar_propulsion::Engine;
use lunar_sizing::{
    ArrayType, LanderSize, Propellant, SubsystemInputs, Subsystems, TankMaterial, TankSet,
    TankSetRequest,
};

use crate::{MissionError, MissionProfile};

/// Tank description before the propellant load is known.
#[derive(Debug, Clone, PartialEq)]
pub struct TankPlan {
    pub propellant: Propellant,
    pub material: TankMaterial,
    pub tank_count: u32,
    pub max_radius_m: f64,
    pub design_pressure_pa: f64,
}

impl TankPlan {
    fn with_load(&self, propellant_mass_kg: f64) -> TankSetRequest {
        TankSetRequest {
            propellant: self.propellant,
            material: self.material,
            tank_count: self.tank_count,
            max_radius_m: self.max_radius_m,
            design_pressure_pa: self.design_pressure_pa,
            propellant_mass_kg,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRequest {
    pub oxidizer_tanks: TankPlan,
    pub fuel_tanks: TankPlan,
    pub payload_power_w: f64,
    pub array_type: ArrayType,
    pub lander_size: LanderSize,
    pub battery_duration_h: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MassBudget {
    pub vehicle_start_mass_kg: f64,
    pub engine: Engine,
    pub oxidizer_tanks: TankSet,
    pub fuel_tanks: TankSet,
    pub subsystems: Subsystems,
}

/// Size tanks for the mission's oxidizer and fuel totals, then roll up subsystems.
pub fn size_budget(
    mission: &MissionProfile,
    request: &BudgetRequest,
) -> Result<MassBudget, MissionError> {
    let oxidizer_tanks =
        TankSet::size(&request.oxidizer_tanks.with_load(mission.summary.oxidizer_kg))?;
    let fuel_tanks = TankSet::size(&request.fuel_tanks.with_load(mission.summary.fuel_kg))?;

    let subsystems = Subsystems::size(&SubsystemInputs {
        vehicle_start_mass_kg: mission.launch_mass_kg,
        engine: &mission.engine,
        oxidizer_tanks: &oxidizer_tanks,
        fuel_tanks: &fuel_tanks,
        payload_power_w: request.payload_power_w,
        array_type: request.array_type,
        lander_size: request.lander_size,
        battery_duration_h: request.battery_duration_h,
    })?;

    info!(
        "budget for m0 = {:.1} kg: tanks {:.1} kg + {:.1} kg",
        mission.launch_mass_kg, oxidizer_tanks.total_mass_kg, fuel_tanks.total_mass_kg
    );

    Ok(MassBudget {
        vehicle_start_mass_kg: mission.launch_mass_kg,
        engine: mission.engine,
        oxidizer_tanks,
        fuel_tanks,
        subsystems,
    })
}
