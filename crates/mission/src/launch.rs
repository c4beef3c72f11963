/// Launch vehicle performance: apogee altitude (km) reachable for a separated mass (kg).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchCurve {
    /// Polynomial coefficients in ascending powers of mass.
    pub coefficients: Vec<f64>,
}

impl LaunchCurve {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    pub fn apogee_altitude_km(&self, launch_mass_kg: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * launch_mass_kg + c)
    }
}
