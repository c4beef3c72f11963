use crate::Phase;

/// Propellant totals across an ordered sequence of phases.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MissionSummary {
    pub propellant_kg: f64,
    pub oxidizer_kg: f64,
    pub fuel_kg: f64,
    pub delta_v_m_s: f64,
    /// End mass of the last phase, `None` for an empty sequence.
    pub final_mass_kg: Option<f64>,
}

impl MissionSummary {
    pub fn from_phases(phases: &[Phase]) -> Self {
        let mut summary = phases.iter().fold(Self::default(), |mut acc, phase| {
            acc.propellant_kg += phase.propellant_kg;
            acc.oxidizer_kg += phase.oxidizer_kg;
            acc.fuel_kg += phase.fuel_kg;
            acc.delta_v_m_s += phase.delta_v_m_s;
            acc
        });
        summary.final_mass_kg = phases.last().map(|phase| phase.end_mass_kg);
        summary
    }
}
