use std::f64::consts::PI;

use lunar_lander_sizer::sizing::tanks::sphere_volume;
use lunar_lander_sizer::sizing::{
    Propellant, SizingError, TankMaterial, TankSet, TankSetRequest, TankShape,
};

fn request(propellant_mass_kg: f64) -> TankSetRequest {
    TankSetRequest {
        propellant: Propellant::Oxygen,
        material: TankMaterial::Al2219,
        tank_count: 1,
        max_radius_m: 0.9,
        design_pressure_pa: 275_000.0,
        propellant_mass_kg,
    }
}

#[test]
fn small_load_fits_a_sphere_at_minimum_gauge() {
    let tanks = TankSet::size(&request(1000.0)).expect("tank set");
    assert_eq!(tanks.shape, TankShape::Sphere);
    assert_eq!(tanks.cylinder_length_m, 0.0);
    assert!((tanks.radius_m - 0.613008).abs() < 1e-5, "r = {}", tanks.radius_m);
    assert!((tanks.length_m - 2.0 * tanks.radius_m).abs() < 1e-12);
    assert_eq!(tanks.dome_thickness_m, TankMaterial::Al2219.min_gauge_m());
    assert!((tanks.mass_per_tank_kg - 64.3728).abs() < 1e-3);
    assert!((tanks.total_mass_kg - 70.8101).abs() < 1e-3);
}

#[test]
fn equal_volume_goes_to_sphere_branch() {
    let free = TankSet::size(&request(1500.0)).unwrap();
    assert_eq!(free.shape, TankShape::Sphere);

    let mut tight = request(1500.0);
    tight.max_radius_m = free.radius_m;
    let tied = TankSet::size(&tight).unwrap();
    assert_eq!(tied.shape, TankShape::Sphere);
    assert_eq!(tied.cylinder_length_m, 0.0);
    assert_eq!(tied.radius_m, free.radius_m);

    tight.max_radius_m = free.radius_m * (1.0 - 1e-9);
    let capped = TankSet::size(&tight).unwrap();
    assert_eq!(capped.shape, TankShape::Spherocylinder);
}

#[test]
fn large_load_grows_a_cylinder_at_max_radius() {
    let req = TankSetRequest {
        propellant: Propellant::Nto,
        material: TankMaterial::Stainless,
        tank_count: 2,
        max_radius_m: 0.5,
        design_pressure_pa: 2.0e6,
        propellant_mass_kg: 1500.0,
    };
    let tanks = TankSet::size(&req).unwrap();
    assert_eq!(tanks.shape, TankShape::Spherocylinder);
    assert_eq!(tanks.radius_m, 0.5);
    let volume = sphere_volume(0.5) + PI * 0.25 * tanks.cylinder_length_m;
    assert!((volume - tanks.volume_per_tank_m3).abs() < 1e-12);
    assert!((tanks.volume_per_tank_m3 - 1500.0 / 1450.0 / 2.0 * 1.1).abs() < 1e-12);
    assert!((tanks.cylinder_length_m - 0.0577627).abs() < 1e-6);

    // Pressure-limited walls: the hoop wall is twice the dome.
    assert!(tanks.dome_thickness_m > TankMaterial::Stainless.min_gauge_m());
    assert!((tanks.cylinder_thickness_m - 2.0 * tanks.dome_thickness_m).abs() < 1e-15);
    let head = 1.5 * (2.0e6 + 1450.0 * 50.0 * tanks.length_m);
    assert!((tanks.sizing_pressure_pa - head).abs() < 1e-6);
    assert!((tanks.total_mass_kg - 294.9035).abs() < 1e-3);
}

#[test]
fn mass_increases_with_propellant_load() {
    let mut previous = 0.0;
    for mass in [100.0, 500.0, 1000.0, 2500.0, 5000.0, 10_000.0] {
        let tanks = TankSet::size(&request(mass)).unwrap();
        assert!(tanks.total_mass_kg > previous, "mass {mass}: {}", tanks.total_mass_kg);
        previous = tanks.total_mass_kg;
    }
}

#[test]
fn mounting_penalty_compounds_with_tank_count() {
    let one = TankSet::size(&request(2000.0)).unwrap();
    let mut two_req = request(2000.0);
    two_req.tank_count = 2;
    let two = TankSet::size(&two_req).unwrap();
    assert!((one.total_mass_kg - one.mass_per_tank_kg * 1.1).abs() < 1e-9);
    assert!((two.total_mass_kg - two.mass_per_tank_kg * 2.0 * 1.21).abs() < 1e-9);
    assert!((two.total_area_m2() - 2.0 * two.area_per_tank_m2()).abs() < 1e-12);
}

#[test]
fn invalid_inputs_are_configuration_errors() {
    let mut req = request(1000.0);
    req.tank_count = 0;
    assert_eq!(TankSet::size(&req), Err(SizingError::ZeroTankCount));

    let mut req = request(1000.0);
    req.max_radius_m = 0.0;
    assert!(matches!(TankSet::size(&req), Err(SizingError::NonPositive { .. })));

    assert!(matches!(
        TankSet::size(&request(-5.0)),
        Err(SizingError::NonPositive { quantity: "propellant mass", .. })
    ));
}

#[test]
fn table_names_parse_and_unknown_names_fail() {
    assert_eq!("Al-Li".parse::<TankMaterial>(), Ok(TankMaterial::AlLi));
    assert_eq!("stainless".parse::<TankMaterial>(), Ok(TankMaterial::Stainless));
    assert_eq!("RP-1".parse::<Propellant>(), Ok(Propellant::Rp1));
    assert_eq!("MMH".parse::<Propellant>(), Ok(Propellant::Mmh));
    assert_eq!(
        "Unobtainium".parse::<TankMaterial>(),
        Err(SizingError::UnknownMaterial("Unobtainium".to_string()))
    );
    assert_eq!(
        "Hydrazine".parse::<Propellant>(),
        Err(SizingError::UnknownPropellant("Hydrazine".to_string()))
    );
    for propellant in Propellant::ALL {
        assert_eq!(propellant.to_string().parse::<Propellant>(), Ok(propellant));
    }
}
