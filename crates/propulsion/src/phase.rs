use log::{debug, warn};
use lunar_core::constants::G0;
use lunar_core::thrust_to_weight;

use crate::{Engine, PropulsionError};

/// How a phase obtains its delta-v.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeltaVRequest {
    /// Burn exactly this much (m/s).
    Explicit(f64),
    /// Use the powered-descent correlation evaluated at the phase's starting thrust-to-weight.
    DerivedFromThrustToWeight,
}

/// Powered-descent delta-v correlation (m/s) as a function of initial thrust-to-weight.
pub fn powered_descent_delta_v(thrust_to_weight: f64) -> f64 {
    4335.0 * (-thrust_to_weight * 20.25).exp() + 1880.0
}

/// One propulsive mission phase sized with the ideal rocket equation.
///
/// Phases are chained by the caller: the next phase starts at this phase's
/// `end_mass_kg`. A delta-v budget larger than the vehicle can deliver yields a
/// negative end mass; that is reported, not rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub name: String,
    pub request: DeltaVRequest,
    pub engine: Engine,
    pub start_mass_kg: f64,
    pub thrust_to_weight: f64,
    pub delta_v_m_s: f64,
    pub propellant_kg: f64,
    pub oxidizer_kg: f64,
    pub fuel_kg: f64,
    pub end_mass_kg: f64,
}

impl Phase {
    pub fn new(
        name: impl Into<String>,
        start_mass_kg: f64,
        request: DeltaVRequest,
        engine: &Engine,
    ) -> Result<Self, PropulsionError> {
        let name = name.into();
        // NaN passes through so degenerate upstream results stay visible.
        if start_mass_kg <= 0.0 {
            return Err(PropulsionError::NonPositiveStartMass {
                phase: name,
                mass_kg: start_mass_kg,
            });
        }

        let thrust_to_weight = thrust_to_weight(engine.thrust_n, start_mass_kg);
        let delta_v_m_s = match request {
            DeltaVRequest::Explicit(dv) => dv,
            DeltaVRequest::DerivedFromThrustToWeight => powered_descent_delta_v(thrust_to_weight),
        };

        let exhaust_velocity = engine.isp_seconds * G0;
        let propellant_kg = start_mass_kg * (1.0 - (-delta_v_m_s / exhaust_velocity).exp());
        let oxidizer_kg = propellant_kg * engine.oxidizer_fraction();
        let fuel_kg = propellant_kg * engine.fuel_fraction();
        let end_mass_kg = start_mass_kg - propellant_kg;

        if !delta_v_m_s.is_finite() {
            warn!("phase {name}: delta-v is not finite ({delta_v_m_s})");
        } else if end_mass_kg < 0.0 {
            warn!("phase {name}: end mass is negative ({end_mass_kg:.1} kg)");
        }
        debug!(
            "phase {name}: dv = {delta_v_m_s:.1} m/s, m0 = {start_mass_kg:.1} kg, mf = {end_mass_kg:.1} kg"
        );

        Ok(Self {
            name,
            request,
            engine: *engine,
            start_mass_kg,
            thrust_to_weight,
            delta_v_m_s,
            propellant_kg,
            oxidizer_kg,
            fuel_kg,
            end_mass_kg,
        })
    }

    /// Start the next phase of a chain from this phase's end mass.
    pub fn then(
        &self,
        name: impl Into<String>,
        request: DeltaVRequest,
        engine: &Engine,
    ) -> Result<Phase, PropulsionError> {
        Phase::new(name, self.end_mass_kg, request, engine)
    }

    /// Burn duration at full thrust (s).
    pub fn burn_time_s(&self) -> f64 {
        self.propellant_kg / self.engine.mass_flow_kg_s()
    }

    /// Final-to-initial mass ratio of the burn.
    pub fn mass_ratio(&self) -> f64 {
        self.end_mass_kg / self.start_mass_kg
    }
}
