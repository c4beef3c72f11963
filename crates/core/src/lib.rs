//! Core units, constants, and shared primitives for the lunar lander sizing workspace.

/// Physical constants. SI unless the name says otherwise.
pub mod constants {
    /// Gravity used by every sizing correlation in the workspace (m/s²).
    ///
    /// The correlations were fit with 9.81, not the standard 9.80665.
    pub const G0: f64 = 9.81;
    /// Earth gravitational parameter (km³/s²).
    pub const MU_EARTH_KM3_S2: f64 = 398_600.0;
    /// Earth equatorial radius (km).
    pub const EARTH_RADIUS_KM: f64 = 6_378.0;
}

/// Unit conversion helpers.
pub mod units {
    /// Convert kilometres per second to metres per second.
    #[inline]
    pub fn kms_to_ms(v: f64) -> f64 {
        v * 1_000.0
    }
}

/// Sampling helpers for parameter sweeps.
pub mod grid {
    /// Evenly spaced samples over `[start, end]`, endpoints included.
    ///
    /// A single point yields `[start]`; zero points yields an empty vector.
    pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
        match points {
            0 => Vec::new(),
            1 => vec![start],
            n => {
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                    .collect()
            }
        }
    }
}

/// Mass flow for a given thrust and specific impulse (kg/s).
#[inline]
pub fn mass_flow_kg_s(thrust_n: f64, isp_seconds: f64) -> f64 {
    thrust_n / (isp_seconds * constants::G0)
}

/// Thrust-to-weight ratio against the sizing gravity constant.
#[inline]
pub fn thrust_to_weight(thrust_n: f64, mass_kg: f64) -> f64 {
    thrust_n / (mass_kg * constants::G0)
}
