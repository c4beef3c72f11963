use lunar_lander_sizer::common::constants::{EARTH_RADIUS_KM, MU_EARTH_KM3_S2};
use lunar_lander_sizer::orbits::{
    PARKING_PERIAPSIS_ALTITUDE_KM, TRANSLUNAR_APOGEE_ALTITUDE_KM, apogee_raise_delta_v,
};

fn reference_delta_v(initial_apogee_km: f64) -> f64 {
    let r_start = EARTH_RADIUS_KM + PARKING_PERIAPSIS_ALTITUDE_KM;
    let a_start = (r_start + EARTH_RADIUS_KM + initial_apogee_km) / 2.0;
    let a_end = (r_start + EARTH_RADIUS_KM + TRANSLUNAR_APOGEE_ALTITUDE_KM) / 2.0;
    let v_start = (MU_EARTH_KM3_S2 * (2.0 / r_start - 1.0 / a_start)).sqrt();
    let v_end = (MU_EARTH_KM3_S2 * (2.0 / r_start - 1.0 / a_end)).sqrt();
    1000.0 * (v_end - v_start)
}

#[test]
fn circular_parking_orbit_needs_full_translunar_burn() {
    // A 185 km apogee is the circular parking orbit itself.
    let dv = apogee_raise_delta_v(185.0);
    let r = EARTH_RADIUS_KM + PARKING_PERIAPSIS_ALTITUDE_KM;
    let circular = (MU_EARTH_KM3_S2 / r).sqrt();
    let a_end = (r + EARTH_RADIUS_KM + TRANSLUNAR_APOGEE_ALTITUDE_KM) / 2.0;
    let expected = 1000.0 * ((MU_EARTH_KM3_S2 * (2.0 / r - 1.0 / a_end)).sqrt() - circular);
    assert!((dv - expected).abs() < 1e-9, "dv = {dv}, expected = {expected}");
    assert!((dv - 3142.215).abs() < 1e-2, "dv = {dv}");
}

#[test]
fn matches_vis_viva_for_representative_apogees() {
    for apogee in [1_000.0, 35_786.0, 75_082.6, 200_000.0] {
        let dv = apogee_raise_delta_v(apogee);
        let expected = reference_delta_v(apogee);
        assert!(
            ((dv - expected) / expected).abs() < 1e-9,
            "apogee {apogee}: dv = {dv}, expected = {expected}"
        );
    }
    let geo = apogee_raise_delta_v(35_786.0);
    assert!(geo > 0.0 && (geo - 683.21).abs() < 0.01, "geo dv = {geo}");
}

#[test]
fn delta_v_shrinks_as_initial_apogee_approaches_target() {
    let apogees = [185.0, 5_000.0, 35_786.0, 100_000.0, 300_000.0, 409_000.0];
    let dvs: Vec<f64> = apogees.iter().map(|&a| apogee_raise_delta_v(a)).collect();
    for pair in dvs.windows(2) {
        assert!(pair[0] > pair[1], "not decreasing: {dvs:?}");
    }
    assert!(apogee_raise_delta_v(TRANSLUNAR_APOGEE_ALTITUDE_KM).abs() < 1e-9);
}

#[test]
fn degenerate_apogee_yields_nan() {
    assert!(apogee_raise_delta_v(-10_000.0).is_nan());
}
