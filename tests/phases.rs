use lunar_lander_sizer::common::constants::G0;
use lunar_lander_sizer::propulsion::{
    DeltaVRequest, Engine, MissionSummary, Phase, PropulsionError, powered_descent_delta_v,
};

fn engine(thrust_n: f64) -> Engine {
    Engine::new(450.0, thrust_n, 5.5).expect("engine")
}

#[test]
fn rocket_equation_keeps_propellant_below_start_mass() {
    let eng = engine(3000.0);
    for (m0, dv) in [(100.0, 0.0), (3870.0, 333.0), (5000.0, 4000.0), (1.0, 20_000.0)] {
        let phase = Phase::new("burn", m0, DeltaVRequest::Explicit(dv), &eng).expect("phase");
        assert!(phase.propellant_kg < m0);
        assert!(phase.propellant_kg >= 0.0);
        assert!((phase.oxidizer_kg + phase.fuel_kg - phase.propellant_kg).abs() < 1e-9 * m0);
        assert!((phase.end_mass_kg - (m0 - phase.propellant_kg)).abs() < 1e-12 * m0);
        let expected_ratio = (-dv / (450.0 * G0)).exp();
        assert!((phase.mass_ratio() - expected_ratio).abs() < 1e-12);
    }
}

#[test]
fn mixture_ratio_splits_oxidizer_and_fuel() {
    let phase = Phase::new("LOI", 3564.5, DeltaVRequest::Explicit(850.0), &engine(3000.0)).unwrap();
    assert!((phase.oxidizer_kg / phase.fuel_kg - 5.5).abs() < 1e-9);
}

#[test]
fn chained_phases_multiply_mass_ratios() {
    let eng = engine(5000.0);
    let a = Phase::new("A", 4200.0, DeltaVRequest::Explicit(850.0), &eng).unwrap();
    let b = a.then("B", DeltaVRequest::Explicit(25.0), &eng).unwrap();
    let combined = Phase::new("AB", 4200.0, DeltaVRequest::Explicit(875.0), &eng).unwrap();

    assert_eq!(b.start_mass_kg, a.end_mass_kg);
    let chained = a.mass_ratio() * b.mass_ratio();
    assert!((chained - combined.mass_ratio()).abs() < 1e-12);
    assert!((b.end_mass_kg - combined.end_mass_kg).abs() < 1e-9);
    // Split burns consume the same total propellant as the combined burn.
    assert!((a.propellant_kg + b.propellant_kg - combined.propellant_kg).abs() < 1e-9);
}

#[test]
fn derived_delta_v_uses_thrust_to_weight_at_ignition() {
    let eng = engine(3000.0);
    let phase = Phase::new("PDI", 2920.3, DeltaVRequest::DerivedFromThrustToWeight, &eng).unwrap();
    let tw = 3000.0 / (2920.3 * G0);
    assert!((phase.thrust_to_weight - tw).abs() < 1e-12);
    assert!((phase.delta_v_m_s - (4335.0 * (-tw * 20.25).exp() + 1880.0)).abs() < 1e-9);
    assert!((phase.delta_v_m_s - 2400.0).abs() < 0.1);

    // Higher thrust-to-weight means a shorter, cheaper descent.
    assert!(powered_descent_delta_v(0.5) < powered_descent_delta_v(0.1));
    assert!(powered_descent_delta_v(10.0) > 1880.0);
}

#[test]
fn burn_time_follows_mass_flow() {
    let eng = engine(4500.0);
    let phase = Phase::new("TCM1", 3000.0, DeltaVRequest::Explicit(20.0), &eng).unwrap();
    let mdot = 4500.0 / (450.0 * G0);
    assert!((eng.mass_flow_kg_s() - mdot).abs() < 1e-12);
    assert!((phase.burn_time_s() - phase.propellant_kg / mdot).abs() < 1e-9);
}

#[test]
fn non_positive_start_mass_is_rejected() {
    let eng = engine(3000.0);
    for m0 in [0.0, -10.0] {
        let err = Phase::new("bad", m0, DeltaVRequest::Explicit(5.0), &eng).unwrap_err();
        assert!(matches!(err, PropulsionError::NonPositiveStartMass { .. }), "{err:?}");
    }
}

#[test]
fn nan_inputs_propagate() {
    let eng = engine(3000.0);
    let phase = Phase::new("TLI", 3870.0, DeltaVRequest::Explicit(f64::NAN), &eng).unwrap();
    assert!(phase.end_mass_kg.is_nan());
    let next = phase.then("TCM1", DeltaVRequest::Explicit(20.0), &eng).unwrap();
    assert!(next.end_mass_kg.is_nan());
}

#[test]
fn engine_parameters_are_validated() {
    assert_eq!(
        Engine::new(0.0, 3000.0, 5.5),
        Err(PropulsionError::InvalidSpecificImpulse(0.0))
    );
    assert_eq!(
        Engine::new(450.0, -1.0, 5.5),
        Err(PropulsionError::InvalidThrust(-1.0))
    );
    assert_eq!(
        Engine::new(450.0, 3000.0, -0.5),
        Err(PropulsionError::InvalidMixtureRatio(-0.5))
    );
}

#[test]
fn summary_sums_each_propellant_column() {
    let eng = engine(3000.0);
    let a = Phase::new("A", 3000.0, DeltaVRequest::Explicit(100.0), &eng).unwrap();
    let b = a.then("B", DeltaVRequest::Explicit(200.0), &eng).unwrap();
    let summary = MissionSummary::from_phases(&[a.clone(), b.clone()]);
    assert!((summary.propellant_kg - (a.propellant_kg + b.propellant_kg)).abs() < 1e-9);
    assert!((summary.oxidizer_kg - (a.oxidizer_kg + b.oxidizer_kg)).abs() < 1e-9);
    assert!((summary.fuel_kg - (a.fuel_kg + b.fuel_kg)).abs() < 1e-9);
    assert!((summary.delta_v_m_s - 300.0).abs() < 1e-12);
    assert_eq!(summary.final_mass_kg, Some(b.end_mass_kg));

    let reversed = MissionSummary::from_phases(&[b, a]);
    assert!((reversed.propellant_kg - summary.propellant_kg).abs() < 1e-9);
}

#[test]
fn empty_summary_is_zero() {
    let summary = MissionSummary::from_phases(&[]);
    assert_eq!(summary.propellant_kg, 0.0);
    assert_eq!(summary.oxidizer_kg, 0.0);
    assert_eq!(summary.fuel_kg, 0.0);
    assert_eq!(summary.final_mass_kg, None);
}
