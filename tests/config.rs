use std::fs;

use lunar_lander_sizer::config::{ConfigError, SizerConfig, load_sizer_config};
use lunar_lander_sizer::mission::{MissionError, budget_request, trade_request};
use lunar_lander_sizer::sizing::{ArrayType, LanderSize, Propellant, SizingError, TankMaterial};

#[test]
fn shipped_config_matches_builtin_baseline() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/sizer.toml");
    let config = load_sizer_config(path).expect("load sizer.toml");
    assert_eq!(config, SizerConfig::default());
}

#[test]
fn yaml_overrides_only_named_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sizer.yaml");
    fs::write(
        &path,
        "sweep:\n  thrust_points: 5\nbudget:\n  lander_size: Large\n  array_type: Body\n",
    )
    .unwrap();

    let config = load_sizer_config(&path).expect("load yaml");
    assert_eq!(config.sweep.thrust_points, 5);
    assert_eq!(config.sweep.launch_mass_points, 4);
    assert_eq!(config.engine, SizerConfig::default().engine);

    let request = trade_request(&config);
    assert_eq!(request.thrusts_n, vec![3000.0, 6000.0, 9000.0, 12000.0, 15000.0]);

    let budget = budget_request(&config.budget).expect("budget request");
    assert_eq!(budget.lander_size, LanderSize::Large);
    assert_eq!(budget.array_type, ArrayType::BodyMounted);
    assert_eq!(budget.oxidizer_tanks.propellant, Propellant::Oxygen);
    assert_eq!(budget.fuel_tanks.material, TankMaterial::Al2219);
}

#[test]
fn empty_sweep_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sizer.toml");
    fs::write(&path, "[sweep]\nlaunch_mass_points = 0\n").unwrap();

    match load_sizer_config(&path) {
        Err(ConfigError::InvalidSweep(msg)) => assert!(msg.contains("launch mass")),
        other => panic!("expected InvalidSweep, got {other:?}"),
    }
}

#[test]
fn inverted_range_is_rejected() {
    let mut config = SizerConfig::default();
    config.sweep.thrust_min_n = 20_000.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidSweep(_))));

    let mut config = SizerConfig::default();
    config.launch_curve.apogee_coefficients.clear();
    assert!(matches!(config.validate(), Err(ConfigError::InvalidSweep(_))));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[sweep\nthrust_points = 3\n").unwrap();
    assert!(matches!(load_sizer_config(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn unknown_category_names_surface_as_sizing_errors() {
    let mut config = SizerConfig::default();
    config.budget.array_type = "Gimballed".to_string();
    match budget_request(&config.budget) {
        Err(MissionError::Sizing(SizingError::UnknownArrayType(name))) => {
            assert_eq!(name, "Gimballed")
        }
        other => panic!("expected UnknownArrayType, got {other:?}"),
    }

    let mut config = SizerConfig::default();
    config.budget.fuel_tanks.material = "Titanium".to_string();
    assert!(matches!(
        budget_request(&config.budget),
        Err(MissionError::Sizing(SizingError::UnknownMaterial(_)))
    ));
}
