//! Configuration models and loaders for the lunar lander sizer.
//!
//! Every field has a default, so an empty file (or no file at all) reproduces
//! the baseline trade study.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Complete sizer configuration.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SizerConfig {
    pub sweep: SweepConfig,
    pub engine: EngineConfig,
    pub launch_curve: LaunchCurveConfig,
    pub reference: ReferenceConfig,
    pub budget: BudgetConfig,
}

/// Launch mass and thrust ranges swept by the trade study.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SweepConfig {
    pub launch_mass_min_kg: f64,
    pub launch_mass_max_kg: f64,
    pub launch_mass_points: usize,
    pub thrust_min_n: f64,
    pub thrust_max_n: f64,
    pub thrust_points: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            launch_mass_min_kg: 3870.0,
            launch_mass_max_kg: 8000.0,
            launch_mass_points: 4,
            thrust_min_n: 3000.0,
            thrust_max_n: 15000.0,
            thrust_points: 13,
        }
    }
}

/// Main engine performance held fixed across the sweep.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub isp_seconds: f64,
    pub mixture_ratio: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            isp_seconds: 450.0,
            mixture_ratio: 5.5,
        }
    }
}

/// Polynomial fit of achievable apogee altitude (km) against separated mass (kg).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LaunchCurveConfig {
    /// Coefficients in ascending powers of launch mass.
    pub apogee_coefficients: Vec<f64>,
}

impl Default for LaunchCurveConfig {
    fn default() -> Self {
        Self {
            apogee_coefficients: vec![1.7624e6, -1.0181e3, 2.2196e-1, -2.1506e-5, 7.7999e-10],
        }
    }
}

/// Grid point whose phase-by-phase results are reported and budgeted.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ReferenceConfig {
    pub launch_mass_index: usize,
    pub thrust_index: usize,
}

/// Inputs for the reference-case dry mass budget.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BudgetConfig {
    pub oxidizer_tanks: TankConfig,
    pub fuel_tanks: TankConfig,
    pub payload_power_w: f64,
    pub array_type: String,
    pub lander_size: String,
    pub battery_duration_h: f64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            oxidizer_tanks: TankConfig {
                propellant: "Oxygen".to_string(),
                material: "Al2219".to_string(),
                tank_count: 1,
                max_radius_m: 0.9,
                design_pressure_pa: 275_000.0,
            },
            fuel_tanks: TankConfig {
                propellant: "Hydrogen".to_string(),
                material: "Al2219".to_string(),
                tank_count: 2,
                max_radius_m: 0.8,
                design_pressure_pa: 275_000.0,
            },
            payload_power_w: 100.0,
            array_type: "Deployable".to_string(),
            lander_size: "Small".to_string(),
            battery_duration_h: 8.0,
        }
    }
}

/// One tank set as written in configuration files. Category names are resolved
/// (and rejected if unknown) when the budget is sized.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TankConfig {
    pub propellant: String,
    pub material: String,
    pub tank_count: u32,
    pub max_radius_m: f64,
    pub design_pressure_pa: f64,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid sweep: {0}")]
    InvalidSweep(String),
}

/// Load a sizer configuration from TOML (by extension) or YAML, then validate it.
pub fn load_sizer_config<P: AsRef<Path>>(path: P) -> Result<SizerConfig, ConfigError> {
    let path = path.as_ref();
    let config: SizerConfig = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    config.validate()?;
    Ok(config)
}

impl SizerConfig {
    /// Reject sweeps that cannot produce a grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.sweep;
        check_range("launch mass", s.launch_mass_min_kg, s.launch_mass_max_kg, s.launch_mass_points)?;
        check_range("thrust", s.thrust_min_n, s.thrust_max_n, s.thrust_points)?;
        if self.launch_curve.apogee_coefficients.is_empty() {
            return Err(ConfigError::InvalidSweep(
                "launch curve needs at least one coefficient".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_range(label: &str, min: f64, max: f64, points: usize) -> Result<(), ConfigError> {
    if points == 0 {
        return Err(ConfigError::InvalidSweep(format!("{label} needs at least one point")));
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(ConfigError::InvalidSweep(format!("{label} range must be finite")));
    }
    if min > max {
        return Err(ConfigError::InvalidSweep(format!(
            "{label} minimum {min} exceeds maximum {max}"
        )));
    }
    Ok(())
}
