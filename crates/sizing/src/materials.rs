//! Fixed property tables for propellants and tank wall materials.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::SizingError;

/// Propellants the tank and insulation tables know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Propellant {
    Oxygen,
    Hydrogen,
    Methane,
    #[serde(rename = "MMH")]
    Mmh,
    #[serde(rename = "NTO")]
    Nto,
    #[serde(rename = "RP-1")]
    Rp1,
}

impl Propellant {
    pub const ALL: [Propellant; 6] = [
        Propellant::Oxygen,
        Propellant::Hydrogen,
        Propellant::Methane,
        Propellant::Mmh,
        Propellant::Nto,
        Propellant::Rp1,
    ];

    /// Liquid density (kg/m³).
    pub fn density_kg_m3(self) -> f64 {
        match self {
            Propellant::Oxygen => 1140.0,
            Propellant::Hydrogen => 70.0,
            Propellant::Methane => 420.0,
            Propellant::Mmh => 866.0,
            Propellant::Nto => 1450.0,
            Propellant::Rp1 => 820.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Propellant::Oxygen => "Oxygen",
            Propellant::Hydrogen => "Hydrogen",
            Propellant::Methane => "Methane",
            Propellant::Mmh => "MMH",
            Propellant::Nto => "NTO",
            Propellant::Rp1 => "RP-1",
        }
    }
}

impl fmt::Display for Propellant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Propellant {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Propellant::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SizingError::UnknownPropellant(s.to_string()))
    }
}

/// Tank wall materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TankMaterial {
    Al2219,
    Stainless,
    #[serde(rename = "Al-Li")]
    AlLi,
}

impl TankMaterial {
    pub const ALL: [TankMaterial; 3] = [
        TankMaterial::Al2219,
        TankMaterial::Stainless,
        TankMaterial::AlLi,
    ];

    /// Material density (kg/m³).
    pub fn density_kg_m3(self) -> f64 {
        match self {
            TankMaterial::Al2219 => 2840.0,
            TankMaterial::Stainless => 8000.0,
            TankMaterial::AlLi => 2700.0,
        }
    }

    /// Yield stress (Pa).
    pub fn yield_stress_pa(self) -> f64 {
        match self {
            TankMaterial::Al2219 => 2.9e8,
            TankMaterial::Stainless => 2.15e8,
            TankMaterial::AlLi => 7.0e8,
        }
    }

    /// Minimum manufacturable wall thickness (m).
    pub fn min_gauge_m(self) -> f64 {
        match self {
            TankMaterial::Al2219 => 0.004,
            TankMaterial::Stainless => 0.0004,
            TankMaterial::AlLi => 0.004,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TankMaterial::Al2219 => "Al2219",
            TankMaterial::Stainless => "Stainless",
            TankMaterial::AlLi => "Al-Li",
        }
    }
}

impl fmt::Display for TankMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TankMaterial {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TankMaterial::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SizingError::UnknownMaterial(s.to_string()))
    }
}
