//! Pressure-fed propellant tank sizing.
//!
//! Tanks are spheres when a sphere no larger than the radius limit holds the
//! propellant, otherwise cylinders with hemispherical domes at the radius limit.

use std::f64::consts::PI;

use log::debug;

use crate::{Propellant, SizingError, TankMaterial, require_positive};

/// Ullage allowance as a fraction of propellant volume.
pub const ULLAGE_FRACTION: f64 = 0.10;
/// Peak axial acceleration for hydrostatic head (m/s²).
pub const MAX_ACCELERATION_M_S2: f64 = 50.0;
/// Allowance for welds, bosses, and fittings as a fraction of shell mass.
pub const FITTINGS_FRACTION: f64 = 0.20;
/// Factor of safety on the sizing pressure.
pub const FACTOR_OF_SAFETY: f64 = 1.5;
/// Per-tank mounting penalty, compounded once per tank.
pub const MOUNTING_PENALTY: f64 = 1.1;

/// Inputs for one set of identical tanks holding a single propellant.
#[derive(Debug, Clone, PartialEq)]
pub struct TankSetRequest {
    pub propellant: Propellant,
    pub material: TankMaterial,
    pub tank_count: u32,
    pub max_radius_m: f64,
    pub design_pressure_pa: f64,
    pub propellant_mass_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TankShape {
    Sphere,
    /// Cylinder closed by two hemispherical domes.
    Spherocylinder,
}

/// Geometry, wall sizing, and mass of a tank set.
#[derive(Debug, Clone, PartialEq)]
pub struct TankSet {
    pub propellant: Propellant,
    pub material: TankMaterial,
    pub tank_count: u32,
    pub max_radius_m: f64,
    pub design_pressure_pa: f64,
    pub propellant_mass_kg: f64,

    pub propellant_volume_m3: f64,
    /// Volume of one tank including ullage.
    pub volume_per_tank_m3: f64,
    pub shape: TankShape,
    pub radius_m: f64,
    pub cylinder_length_m: f64,
    /// Overall length of one tank, dome to dome.
    pub length_m: f64,
    pub dome_area_m2: f64,
    pub cylinder_area_m2: f64,
    pub sizing_pressure_pa: f64,
    pub dome_thickness_m: f64,
    pub cylinder_thickness_m: f64,
    pub mass_per_tank_kg: f64,
    pub total_mass_kg: f64,
}

/// Radius of a sphere with the given volume.
pub fn sphere_radius_for_volume(volume_m3: f64) -> f64 {
    (volume_m3 * 3.0 / (4.0 * PI)).cbrt()
}

pub fn sphere_volume(radius_m: f64) -> f64 {
    4.0 / 3.0 * PI * radius_m.powi(3)
}

impl TankSet {
    pub fn size(request: &TankSetRequest) -> Result<Self, SizingError> {
        if request.tank_count == 0 {
            return Err(SizingError::ZeroTankCount);
        }
        require_positive("maximum tank radius", request.max_radius_m)?;
        require_positive("tank design pressure", request.design_pressure_pa)?;
        require_positive("propellant mass", request.propellant_mass_kg)?;

        let rho_prop = request.propellant.density_kg_m3();
        let rho_wall = request.material.density_kg_m3();
        let count = f64::from(request.tank_count);

        let propellant_volume_m3 = request.propellant_mass_kg / rho_prop;
        let volume_per_tank_m3 = propellant_volume_m3 / count * (1.0 + ULLAGE_FRACTION);

        // Equality stays spherical.
        let required_radius = sphere_radius_for_volume(volume_per_tank_m3);
        let (shape, radius_m, cylinder_length_m) = if required_radius <= request.max_radius_m {
            (TankShape::Sphere, required_radius, 0.0)
        } else {
            let r = request.max_radius_m;
            let cylinder = (volume_per_tank_m3 - sphere_volume(r)) / (PI * r * r);
            (TankShape::Spherocylinder, r, cylinder)
        };
        let length_m = cylinder_length_m + 2.0 * radius_m;

        let dome_area_m2 = 4.0 * PI * radius_m * radius_m;
        let cylinder_area_m2 = 2.0 * PI * radius_m * cylinder_length_m;

        let sizing_pressure_pa = FACTOR_OF_SAFETY
            * (request.design_pressure_pa + rho_prop * MAX_ACCELERATION_M_S2 * length_m);
        let dome_pressure_thickness =
            sizing_pressure_pa * radius_m / (2.0 * request.material.yield_stress_pa());
        let cylinder_pressure_thickness = 2.0 * dome_pressure_thickness;
        let min_gauge = request.material.min_gauge_m();
        let dome_thickness_m = dome_pressure_thickness.max(min_gauge);
        let cylinder_thickness_m = cylinder_pressure_thickness.max(min_gauge);

        let shell_mass =
            (dome_area_m2 * dome_thickness_m + cylinder_area_m2 * cylinder_thickness_m) * rho_wall;
        let mass_per_tank_kg = shell_mass * (1.0 + FITTINGS_FRACTION);
        let total_mass_kg =
            mass_per_tank_kg * count * MOUNTING_PENALTY.powi(request.tank_count as i32);

        debug!(
            "{} tanks: {:?} x{}, r = {:.3} m, L = {:.3} m, mass = {:.1} kg",
            request.propellant, shape, request.tank_count, radius_m, length_m, total_mass_kg
        );

        Ok(Self {
            propellant: request.propellant,
            material: request.material,
            tank_count: request.tank_count,
            max_radius_m: request.max_radius_m,
            design_pressure_pa: request.design_pressure_pa,
            propellant_mass_kg: request.propellant_mass_kg,
            propellant_volume_m3,
            volume_per_tank_m3,
            shape,
            radius_m,
            cylinder_length_m,
            length_m,
            dome_area_m2,
            cylinder_area_m2,
            sizing_pressure_pa,
            dome_thickness_m,
            cylinder_thickness_m,
            mass_per_tank_kg,
            total_mass_kg,
        })
    }

    pub fn area_per_tank_m2(&self) -> f64 {
        self.dome_area_m2 + self.cylinder_area_m2
    }

    /// Wetted surface of every tank in the set, used for insulation sizing.
    pub fn total_area_m2(&self) -> f64 {
        self.area_per_tank_m2() * f64::from(self.tank_count)
    }
}
