//! Lander subsystem mass roll-up.
//!
//! Each subsystem comes from a parametric correlation on vehicle start mass,
//! power demand, or tank geometry. Structure and landing gear close the loop as
//! a fixed fraction of the basic dry mass.

use std::fmt;
use std::str::FromStr;

use log::info;
use lunar_core::constants::G0;
use lunar_propulsion::Engine;

use crate::{Propellant, SizingError, TankSet, require_positive};

/// Power growth margin on the combined lander and payload load.
pub const POWER_MARGIN: f64 = 0.30;
/// Usable battery capacity fraction.
pub const BATTERY_USABLE_FRACTION: f64 = 0.70;
/// Battery specific energy (Wh/kg).
pub const BATTERY_SPECIFIC_ENERGY_WH_KG: f64 = 100.0;
/// Spray-on foam insulation density (kg/m³) and thickness (m).
pub const SOFI_DENSITY_KG_M3: f64 = 50.0;
pub const SOFI_THICKNESS_M: f64 = 0.005;
/// Multi-layer insulation density (kg/m³) and thickness (m).
pub const MLI_DENSITY_KG_M3: f64 = 80.0;
pub const MLI_THICKNESS_M: f64 = 0.001;
pub const STRUCTURE_FRACTION: f64 = 0.20;
pub const LANDING_GEAR_FRACTION: f64 = 0.08;
/// Mass growth allowance on the basic total.
pub const GROWTH_ALLOWANCE_FRACTION: f64 = 0.15;
/// Program margin on the basic total.
pub const MARGIN_FRACTION: f64 = 0.15;
/// Thermal control as a fraction of vehicle start mass.
pub const THERMAL_FRACTION: f64 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayType {
    BodyMounted,
    Deployable,
}

impl ArrayType {
    /// Specific power of the array (W/kg).
    pub fn specific_power_w_kg(self) -> f64 {
        match self {
            ArrayType::BodyMounted => 30.0,
            ArrayType::Deployable => 75.0,
        }
    }
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArrayType::BodyMounted => "Body",
            ArrayType::Deployable => "Deployable",
        })
    }
}

impl FromStr for ArrayType {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "body" | "body-mounted" | "bodymounted" => Ok(ArrayType::BodyMounted),
            "deployable" => Ok(ArrayType::Deployable),
            _ => Err(SizingError::UnknownArrayType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanderSize {
    Small,
    Large,
}

impl LanderSize {
    /// Power conversion and distribution hardware (kg).
    pub fn power_conversion_kg(self) -> f64 {
        match self {
            LanderSize::Small => 30.0,
            LanderSize::Large => 50.0,
        }
    }

    /// Housekeeping power draw (W).
    pub fn baseline_power_w(self) -> f64 {
        match self {
            LanderSize::Small => 300.0,
            LanderSize::Large => 1200.0,
        }
    }

    /// Reaction control, pressurization, and feedline masses (kg).
    pub fn fixed_propulsion_kg(self) -> (f64, f64, f64) {
        match self {
            LanderSize::Small => (20.0, 50.0, 20.0),
            LanderSize::Large => (50.0, 100.0, 50.0),
        }
    }
}

impl fmt::Display for LanderSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LanderSize::Small => "Small",
            LanderSize::Large => "Large",
        })
    }
}

impl FromStr for LanderSize {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(LanderSize::Small),
            "large" => Ok(LanderSize::Large),
            _ => Err(SizingError::UnknownLanderSize(s.to_string())),
        }
    }
}

/// Main engine thrust-to-weight assumed for each fuel family.
pub fn engine_thrust_to_weight(fuel: Propellant) -> Result<f64, SizingError> {
    match fuel {
        Propellant::Hydrogen => Ok(40.0),
        Propellant::Methane | Propellant::Mmh => Ok(50.0),
        Propellant::Rp1 => Ok(60.0),
        Propellant::Oxygen | Propellant::Nto => Err(SizingError::UnsupportedFuel(fuel)),
    }
}

/// Which side of the feed system a tank set serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TankSlot {
    Oxidizer,
    Fuel,
}

impl TankSlot {
    /// Spray-on foam goes on LOX oxidizer tanks and on LH2 or LCH4 fuel tanks.
    pub fn takes_foam(self, propellant: Propellant) -> bool {
        match self {
            TankSlot::Oxidizer => propellant == Propellant::Oxygen,
            TankSlot::Fuel => matches!(propellant, Propellant::Hydrogen | Propellant::Methane),
        }
    }
}

/// Foam and blanket insulation for one tank set, `(sofi_kg, mli_kg)`.
pub fn insulation_kg(tanks: &TankSet, slot: TankSlot) -> (f64, f64) {
    let area = tanks.total_area_m2();
    let mli = MLI_THICKNESS_M * area * MLI_DENSITY_KG_M3;
    let sofi = if slot.takes_foam(tanks.propellant) {
        SOFI_THICKNESS_M * area * SOFI_DENSITY_KG_M3
    } else {
        0.0
    };
    (sofi, mli)
}

#[derive(Debug, Clone)]
pub struct SubsystemInputs<'a> {
    pub vehicle_start_mass_kg: f64,
    pub engine: &'a Engine,
    pub oxidizer_tanks: &'a TankSet,
    pub fuel_tanks: &'a TankSet,
    pub payload_power_w: f64,
    pub array_type: ArrayType,
    pub lander_size: LanderSize,
    pub battery_duration_h: f64,
}

/// Subsystem mass breakdown with growth and margin.
#[derive(Debug, Clone, PartialEq)]
pub struct Subsystems {
    pub avionics_kg: f64,

    pub power_conversion_kg: f64,
    pub max_tank_length_m: f64,
    pub wiring_kg: f64,
    pub margined_power_w: f64,
    pub array_kg: f64,
    pub energy_wh: f64,
    pub margined_energy_wh: f64,
    pub battery_kg: f64,
    pub electrical_kg: f64,

    pub oxidizer_sofi_kg: f64,
    pub oxidizer_mli_kg: f64,
    pub fuel_sofi_kg: f64,
    pub fuel_mli_kg: f64,

    pub engine_thrust_to_weight: f64,
    pub engine_kg: f64,
    pub rcs_kg: f64,
    pub pressurization_kg: f64,
    pub feedlines_kg: f64,
    pub propulsion_kg: f64,

    pub thermal_kg: f64,

    pub dry_without_structure_kg: f64,
    pub structure_kg: f64,
    pub landing_gear_kg: f64,
    pub structure_and_gear_kg: f64,

    pub total_basic_kg: f64,
    pub growth_allowance_kg: f64,
    pub total_predicted_kg: f64,
    pub margin_kg: f64,
    pub total_allowable_kg: f64,
}

impl Subsystems {
    pub fn size(inputs: &SubsystemInputs<'_>) -> Result<Self, SizingError> {
        let m0 = require_positive("vehicle start mass", inputs.vehicle_start_mass_kg)?;
        require_positive("battery discharge duration", inputs.battery_duration_h)?;
        if !(inputs.payload_power_w >= 0.0) {
            return Err(SizingError::NonPositive {
                quantity: "payload power",
                value: inputs.payload_power_w,
            });
        }

        let avionics_kg = 8.0 * m0.powf(0.361);

        // Electrical
        let power_conversion_kg = inputs.lander_size.power_conversion_kg();
        let max_tank_length_m = inputs.oxidizer_tanks.length_m.max(inputs.fuel_tanks.length_m);
        let wiring_kg = 1.058 * m0.sqrt() * max_tank_length_m.powf(0.25);
        let margined_power_w =
            (1.0 + POWER_MARGIN) * (inputs.lander_size.baseline_power_w() + inputs.payload_power_w);
        let array_kg = margined_power_w / inputs.array_type.specific_power_w_kg();
        let energy_wh = inputs.battery_duration_h * margined_power_w;
        let margined_energy_wh = energy_wh / BATTERY_USABLE_FRACTION;
        let battery_kg = margined_energy_wh / BATTERY_SPECIFIC_ENERGY_WH_KG;
        let electrical_kg = power_conversion_kg + wiring_kg + array_kg + battery_kg;

        let (oxidizer_sofi_kg, oxidizer_mli_kg) =
            insulation_kg(inputs.oxidizer_tanks, TankSlot::Oxidizer);
        let (fuel_sofi_kg, fuel_mli_kg) = insulation_kg(inputs.fuel_tanks, TankSlot::Fuel);

        // Propulsion
        let engine_thrust_to_weight = engine_thrust_to_weight(inputs.fuel_tanks.propellant)?;
        let engine_kg = inputs.engine.thrust_n / (engine_thrust_to_weight * G0);
        let (rcs_kg, pressurization_kg, feedlines_kg) = inputs.lander_size.fixed_propulsion_kg();
        let propulsion_kg = engine_kg + rcs_kg + pressurization_kg + feedlines_kg;

        let thermal_kg = THERMAL_FRACTION * m0;

        // Structure is a fixed share of the finished dry mass.
        let dry_without_structure_kg = avionics_kg + electrical_kg + propulsion_kg + thermal_kg;
        let structure_share = STRUCTURE_FRACTION + LANDING_GEAR_FRACTION;
        let scale = dry_without_structure_kg / (1.0 - structure_share);
        let structure_kg = scale * STRUCTURE_FRACTION;
        let landing_gear_kg = scale * LANDING_GEAR_FRACTION;
        let structure_and_gear_kg = scale * structure_share;

        let total_basic_kg = dry_without_structure_kg + structure_and_gear_kg;
        let growth_allowance_kg = GROWTH_ALLOWANCE_FRACTION * total_basic_kg;
        let total_predicted_kg = total_basic_kg + growth_allowance_kg;
        let margin_kg = MARGIN_FRACTION * total_basic_kg;
        let total_allowable_kg = total_predicted_kg + margin_kg;

        info!(
            "dry mass: basic {total_basic_kg:.1} kg, predicted {total_predicted_kg:.1} kg, allowable {total_allowable_kg:.1} kg"
        );

        Ok(Self {
            avionics_kg,
            power_conversion_kg,
            max_tank_length_m,
            wiring_kg,
            margined_power_w,
            array_kg,
            energy_wh,
            margined_energy_wh,
            battery_kg,
            electrical_kg,
            oxidizer_sofi_kg,
            oxidizer_mli_kg,
            fuel_sofi_kg,
            fuel_mli_kg,
            engine_thrust_to_weight,
            engine_kg,
            rcs_kg,
            pressurization_kg,
            feedlines_kg,
            propulsion_kg,
            thermal_kg,
            dry_without_structure_kg,
            structure_kg,
            landing_gear_kg,
            structure_and_gear_kg,
            total_basic_kg,
            growth_allowance_kg,
            total_predicted_kg,
            margin_kg,
            total_allowable_kg,
        })
    }
}
