//! Export helpers for console reports, CSV, and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod report {
    use std::fmt::Write;

    use lunar_mission::MassBudget;
    use lunar_propulsion::{MissionSummary, Phase};
    use lunar_sizing::TankSet;

    const RULE: &str =
        "------------------------------------------------------------------------";

    /// Fixed-width phase table: one row per phase, masses to 0.1 kg.
    pub fn phase_table(phases: &[Phase]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(
            out,
            "{:<20}{:>11}{:>11}{:>11}{:>13}{:>13}{:>14}",
            "Phase Name",
            "DV (m/s)",
            "Mass0 (kg)",
            "MassF (kg)",
            "TotProp (kg)",
            "OxProp (kg)",
            "FuelProp (kg)"
        );
        let _ = writeln!(out, "{RULE}");
        for phase in phases {
            let _ = writeln!(
                out,
                "{:<20}{:>11.1}{:>11.1}{:>11.1}{:>13.1}{:>13.1}{:>14.1}",
                phase.name,
                phase.delta_v_m_s,
                phase.start_mass_kg,
                phase.end_mass_kg,
                phase.propellant_kg,
                phase.oxidizer_kg,
                phase.fuel_kg
            );
        }
        out
    }

    pub fn summary_line(summary: &MissionSummary) -> String {
        format!(
            "Total: dv = {:.1} m/s, propellant = {:.1} kg (ox {:.1} kg, fuel {:.1} kg), final mass = {:.1} kg",
            summary.delta_v_m_s,
            summary.propellant_kg,
            summary.oxidizer_kg,
            summary.fuel_kg,
            summary.final_mass_kg.unwrap_or(f64::NAN)
        )
    }

    fn tank_lines(out: &mut String, label: &str, tanks: &TankSet) {
        let _ = writeln!(
            out,
            "{label:<22}{} in {} x{} ({:?}), r = {:.3} m, L = {:.3} m, t = {:.2}/{:.2} mm, mass = {:.1} kg",
            tanks.propellant,
            tanks.material,
            tanks.tank_count,
            tanks.shape,
            tanks.radius_m,
            tanks.length_m,
            tanks.dome_thickness_m * 1_000.0,
            tanks.cylinder_thickness_m * 1_000.0,
            tanks.total_mass_kg
        );
    }

    /// Tank geometry and subsystem mass breakdown.
    pub fn budget_table(budget: &MassBudget) -> String {
        let s = &budget.subsystems;
        let mut out = String::new();
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(
            out,
            "Mass budget (vehicle start mass {:.1} kg, thrust {:.0} N)",
            budget.vehicle_start_mass_kg, budget.engine.thrust_n
        );
        let _ = writeln!(out, "{RULE}");
        tank_lines(&mut out, "Oxidizer tanks", &budget.oxidizer_tanks);
        tank_lines(&mut out, "Fuel tanks", &budget.fuel_tanks);
        let rows = [
            ("Avionics", s.avionics_kg),
            ("Electrical", s.electrical_kg),
            ("  Wiring", s.wiring_kg),
            ("  Solar array", s.array_kg),
            ("  Battery", s.battery_kg),
            ("Propulsion", s.propulsion_kg),
            ("  Main engine", s.engine_kg),
            ("Thermal", s.thermal_kg),
            ("Structure", s.structure_kg),
            ("Landing gear", s.landing_gear_kg),
            ("Insulation (SOFI)", s.oxidizer_sofi_kg + s.fuel_sofi_kg),
            ("Insulation (MLI)", s.oxidizer_mli_kg + s.fuel_mli_kg),
            ("Total basic", s.total_basic_kg),
            ("Growth allowance", s.growth_allowance_kg),
            ("Total predicted", s.total_predicted_kg),
            ("Margin", s.margin_kg),
            ("Total allowable", s.total_allowable_kg),
        ];
        for (label, mass) in rows {
            let _ = writeln!(out, "{label:<22}{mass:>12.1} kg");
        }
        out
    }
}

pub mod trade {
    use std::io::{self, Write};

    use lunar_mission::TradeSpace;

    pub const HEADER: &str = "launch_mass_index,thrust_index,launch_mass_kg,thrust_n,initial_apogee_km,tli_dv_m_s,payload_kg,pdi_thrust_to_weight,propellant_kg";

    /// Write the standard trade-space CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted per grid point.
    #[derive(Debug, Clone, Copy)]
    pub struct Record {
        pub launch_mass_index: usize,
        pub thrust_index: usize,
        pub launch_mass_kg: f64,
        pub thrust_n: f64,
        pub initial_apogee_km: f64,
        pub tli_dv_m_s: f64,
        pub payload_kg: f64,
        pub pdi_thrust_to_weight: f64,
        pub propellant_kg: f64,
    }

    impl Record {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{:.3},{:.3},{:.3},{:.6},{:.6},{:.6},{:.6}",
                self.launch_mass_index,
                self.thrust_index,
                self.launch_mass_kg,
                self.thrust_n,
                self.initial_apogee_km,
                self.tli_dv_m_s,
                self.payload_kg,
                self.pdi_thrust_to_weight,
                self.propellant_kg,
            )
        }
    }

    /// Flatten a trade space into CSV rows, launch mass major.
    pub fn records(space: &TradeSpace) -> Vec<Record> {
        space
            .missions
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter().enumerate().map(move |(j, mission)| Record {
                    launch_mass_index: i,
                    thrust_index: j,
                    launch_mass_kg: mission.launch_mass_kg,
                    thrust_n: mission.engine.thrust_n,
                    initial_apogee_km: mission.initial_apogee_km,
                    tli_dv_m_s: mission.tli_delta_v_m_s,
                    payload_kg: mission.payload_kg(),
                    pdi_thrust_to_weight: mission.pdi_start_thrust_to_weight(),
                    propellant_kg: mission.summary.propellant_kg,
                })
            })
            .collect()
    }

    pub fn write_trade_space(writer: &mut dyn Write, space: &TradeSpace) -> io::Result<()> {
        write_header(writer)?;
        for record in records(space) {
            record.write_to(writer)?;
        }
        writer.flush()
    }
}

pub mod budget {
    use std::io::{self, Write};
    use std::path::Path;

    use lunar_mission::MassBudget;
    use lunar_sizing::{Propellant, TankMaterial, TankSet};
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    #[derive(Debug, Serialize)]
    pub struct TankSidecar {
        pub propellant: Propellant,
        pub material: TankMaterial,
        pub tank_count: u32,
        pub propellant_mass_kg: f64,
        pub shape: &'static str,
        pub radius_m: f64,
        pub cylinder_length_m: f64,
        pub length_m: f64,
        pub dome_thickness_m: f64,
        pub cylinder_thickness_m: f64,
        pub total_mass_kg: f64,
    }

    impl From<&TankSet> for TankSidecar {
        fn from(tanks: &TankSet) -> Self {
            Self {
                propellant: tanks.propellant,
                material: tanks.material,
                tank_count: tanks.tank_count,
                propellant_mass_kg: tanks.propellant_mass_kg,
                shape: match tanks.shape {
                    lunar_sizing::TankShape::Sphere => "sphere",
                    lunar_sizing::TankShape::Spherocylinder => "spherocylinder",
                },
                radius_m: tanks.radius_m,
                cylinder_length_m: tanks.cylinder_length_m,
                length_m: tanks.length_m,
                dome_thickness_m: tanks.dome_thickness_m,
                cylinder_thickness_m: tanks.cylinder_thickness_m,
                total_mass_kg: tanks.total_mass_kg,
            }
        }
    }

    /// JSON envelope for a reference-case mass budget.
    #[derive(Debug, Serialize)]
    pub struct BudgetSidecar {
        pub vehicle_start_mass_kg: f64,
        pub thrust_n: f64,
        pub oxidizer_tanks: TankSidecar,
        pub fuel_tanks: TankSidecar,
        pub avionics_kg: f64,
        pub electrical_kg: f64,
        pub propulsion_kg: f64,
        pub thermal_kg: f64,
        pub structure_kg: f64,
        pub landing_gear_kg: f64,
        pub insulation_kg: f64,
        pub total_basic_kg: f64,
        pub growth_allowance_kg: f64,
        pub total_predicted_kg: f64,
        pub margin_kg: f64,
        pub total_allowable_kg: f64,
    }

    impl From<&MassBudget> for BudgetSidecar {
        fn from(budget: &MassBudget) -> Self {
            let s = &budget.subsystems;
            Self {
                vehicle_start_mass_kg: budget.vehicle_start_mass_kg,
                thrust_n: budget.engine.thrust_n,
                oxidizer_tanks: (&budget.oxidizer_tanks).into(),
                fuel_tanks: (&budget.fuel_tanks).into(),
                avionics_kg: s.avionics_kg,
                electrical_kg: s.electrical_kg,
                propulsion_kg: s.propulsion_kg,
                thermal_kg: s.thermal_kg,
                structure_kg: s.structure_kg,
                landing_gear_kg: s.landing_gear_kg,
                insulation_kg: s.oxidizer_sofi_kg
                    + s.oxidizer_mli_kg
                    + s.fuel_sofi_kg
                    + s.fuel_mli_kg,
                total_basic_kg: s.total_basic_kg,
                growth_allowance_kg: s.growth_allowance_kg,
                total_predicted_kg: s.total_predicted_kg,
                margin_kg: s.margin_kg,
                total_allowable_kg: s.total_allowable_kg,
            }
        }
    }

    pub fn write_budget_json(path: &Path, budget: &MassBudget) -> io::Result<()> {
        let mut writer = crate::writer_for_path(path)?;
        to_writer_pretty(&mut writer, &BudgetSidecar::from(budget))?;
        writer.flush()
    }
}
