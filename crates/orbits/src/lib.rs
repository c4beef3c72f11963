//! Orbit raise helpers for the Earth departure leg.
//!
//! All burns happen at the periapsis of a 185 km parking orbit. The departure
//! orbit is described by its apogee altitude, the transfer orbit by a fixed
//! 410,000 km apogee that reaches lunar distance.
use lunar_core::constants::{EARTH_RADIUS_KM, MU_EARTH_KM3_S2};
use lunar_core::units::kms_to_ms;

/// Parking orbit periapsis altitude (km).
pub const PARKING_PERIAPSIS_ALTITUDE_KM: f64 = 185.0;
/// Apogee altitude of the lunar transfer orbit (km).
pub const TRANSLUNAR_APOGEE_ALTITUDE_KM: f64 = 410_000.0;

/// Periapsis radius shared by the initial and target orbits (km).
pub fn periapsis_radius_km() -> f64 {
    EARTH_RADIUS_KM + PARKING_PERIAPSIS_ALTITUDE_KM
}

/// Vis-viva speed `sqrt(mu (2/r - 1/a))`, in the units implied by `mu`.
///
/// Negative radicands produce NaN and are returned as such.
pub fn vis_viva_speed(mu_km3_s2: f64, radius_km: f64, semi_major_axis_km: f64) -> f64 {
    (mu_km3_s2 * (2.0 / radius_km - 1.0 / semi_major_axis_km)).sqrt()
}

/// Semi-major axis of an orbit with the shared periapsis and the given apogee altitude (km).
pub fn semi_major_axis_km(apogee_altitude_km: f64) -> f64 {
    (periapsis_radius_km() + EARTH_RADIUS_KM + apogee_altitude_km) / 2.0
}

/// Periapsis delta-v (m/s) to raise apogee from `initial_apogee_altitude_km` to
/// `target_apogee_altitude_km`.
pub fn apogee_raise_delta_v_between(
    initial_apogee_altitude_km: f64,
    target_apogee_altitude_km: f64,
) -> f64 {
    let r = periapsis_radius_km();
    let v_initial = vis_viva_speed(
        MU_EARTH_KM3_S2,
        r,
        semi_major_axis_km(initial_apogee_altitude_km),
    );
    let v_target = vis_viva_speed(
        MU_EARTH_KM3_S2,
        r,
        semi_major_axis_km(target_apogee_altitude_km),
    );
    kms_to_ms(v_target - v_initial)
}

/// Periapsis delta-v (m/s) to raise apogee to lunar distance.
///
/// Degenerate apogees (semi-major axis at or below zero) yield NaN.
pub fn apogee_raise_delta_v(initial_apogee_altitude_km: f64) -> f64 {
    apogee_raise_delta_v_between(initial_apogee_altitude_km, TRANSLUNAR_APOGEE_ALTITUDE_KM)
}
