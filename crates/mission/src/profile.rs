//! The eight-burn lunar landing chain.

use log::debug;
use lunar_orbits::apogee_raise_delta_v;
use lunar_propulsion::{DeltaVRequest, Engine, MissionSummary, Phase};

use crate::{LaunchCurve, MissionError};

/// Where a scheduled burn gets its delta-v budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BurnBudget {
    /// Raise apogee from the launch-delivered orbit to lunar distance.
    TransLunarInjection,
    Fixed(f64),
    /// Powered descent, from thrust-to-weight at ignition.
    PoweredDescent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledBurn {
    pub name: &'static str,
    pub budget: BurnBudget,
}

const fn burn(name: &'static str, budget: BurnBudget) -> ScheduledBurn {
    ScheduledBurn { name, budget }
}

pub const LUNAR_LANDING_SCHEDULE: [ScheduledBurn; 8] = [
    burn("TLI", BurnBudget::TransLunarInjection),
    burn("TCM1", BurnBudget::Fixed(20.0)),
    burn("TCM2", BurnBudget::Fixed(5.0)),
    burn("TCM3", BurnBudget::Fixed(5.0)),
    burn("LOI", BurnBudget::Fixed(850.0)),
    burn("TCM4", BurnBudget::Fixed(5.0)),
    burn("DOI", BurnBudget::Fixed(25.0)),
    burn("PDI", BurnBudget::PoweredDescent),
];

/// One flown mission: every phase in order plus its propellant totals.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionProfile {
    pub launch_mass_kg: f64,
    pub engine: Engine,
    pub initial_apogee_km: f64,
    pub tli_delta_v_m_s: f64,
    pub phases: Vec<Phase>,
    pub summary: MissionSummary,
}

impl MissionProfile {
    /// Mass landed after the final phase.
    pub fn payload_kg(&self) -> f64 {
        self.phases
            .last()
            .map(|phase| phase.end_mass_kg)
            .unwrap_or(self.launch_mass_kg)
    }

    /// Thrust-to-weight when the last burn (powered descent) ignites.
    pub fn pdi_start_thrust_to_weight(&self) -> f64 {
        self.phases
            .last()
            .map(|phase| phase.thrust_to_weight)
            .unwrap_or(f64::NAN)
    }

    /// False when a degenerate input (such as an apogee below the parking
    /// orbit) has carried NaN or infinity into the propellant totals.
    pub fn has_finite_propellant(&self) -> bool {
        self.summary.oxidizer_kg.is_finite() && self.summary.fuel_kg.is_finite()
    }

    pub fn phase(&self, name: &str) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.name == name)
    }
}

/// Fly [`LUNAR_LANDING_SCHEDULE`] from the given separated mass.
pub fn fly_mission(
    launch_mass_kg: f64,
    engine: &Engine,
    launch_curve: &LaunchCurve,
) -> Result<MissionProfile, MissionError> {
    let initial_apogee_km = launch_curve.apogee_altitude_km(launch_mass_kg);
    let tli_delta_v_m_s = apogee_raise_delta_v(initial_apogee_km);

    let mut phases: Vec<Phase> = Vec::with_capacity(LUNAR_LANDING_SCHEDULE.len());
    let mut mass_kg = launch_mass_kg;
    for scheduled in &LUNAR_LANDING_SCHEDULE {
        let request = match scheduled.budget {
            BurnBudget::TransLunarInjection => DeltaVRequest::Explicit(tli_delta_v_m_s),
            BurnBudget::Fixed(dv) => DeltaVRequest::Explicit(dv),
            BurnBudget::PoweredDescent => DeltaVRequest::DerivedFromThrustToWeight,
        };
        let phase = Phase::new(scheduled.name, mass_kg, request, engine)?;
        mass_kg = phase.end_mass_kg;
        phases.push(phase);
    }

    let summary = MissionSummary::from_phases(&phases);
    debug!(
        "mission m0 = {launch_mass_kg:.1} kg, F = {:.0} N: apogee {initial_apogee_km:.0} km, payload {mass_kg:.1} kg",
        engine.thrust_n
    );

    Ok(MissionProfile {
        launch_mass_kg,
        engine: *engine,
        initial_apogee_km,
        tli_delta_v_m_s,
        phases,
        summary,
    })
}
