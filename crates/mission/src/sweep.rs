//! Launch mass by thrust trade space.
//!
//! Each grid point flies the full phase chain with an engine of that thrust.
//! No search is performed; every combination is evaluated and kept.

use log::info;
use lunar_propulsion::Engine;

use crate::{LaunchCurve, MissionError, MissionProfile, fly_mission};

/// Sweep definition with concrete sample values.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeSpaceRequest {
    pub launch_masses_kg: Vec<f64>,
    pub thrusts_n: Vec<f64>,
    pub isp_seconds: f64,
    pub mixture_ratio: f64,
    pub launch_curve: LaunchCurve,
}

/// `(launch mass index, thrust index)` into a trade grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndex {
    pub launch_mass: usize,
    pub thrust: usize,
}

/// Scalar outcomes of the sweep, indexed `[launch mass][thrust]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TradeGrid {
    pub launch_masses_kg: Vec<f64>,
    pub thrusts_n: Vec<f64>,
    pub payload_kg: Vec<Vec<f64>>,
    pub pdi_thrust_to_weight: Vec<Vec<f64>>,
}

impl TradeGrid {
    pub fn rows(&self) -> usize {
        self.launch_masses_kg.len()
    }

    pub fn cols(&self) -> usize {
        self.thrusts_n.len()
    }

    /// Payload along the launch mass axis for one thrust column.
    pub fn payload_by_launch_mass(&self, thrust_index: usize) -> Vec<(f64, f64)> {
        self.launch_masses_kg
            .iter()
            .zip(&self.payload_kg)
            .filter_map(|(&m, row)| row.get(thrust_index).map(|&p| (m, p)))
            .collect()
    }

    /// Payload against PDI thrust-to-weight for one launch mass row.
    pub fn payload_by_thrust_to_weight(&self, launch_mass_index: usize) -> Vec<(f64, f64)> {
        match (
            self.pdi_thrust_to_weight.get(launch_mass_index),
            self.payload_kg.get(launch_mass_index),
        ) {
            (Some(tw), Some(payload)) => tw.iter().copied().zip(payload.iter().copied()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Full sweep result: the scalar grid plus every flown mission.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeSpace {
    pub grid: TradeGrid,
    /// Indexed `[launch mass][thrust]`, like the grid.
    pub missions: Vec<Vec<MissionProfile>>,
}

impl TradeSpace {
    pub fn mission(&self, index: GridIndex) -> Result<&MissionProfile, MissionError> {
        self.missions
            .get(index.launch_mass)
            .and_then(|row| row.get(index.thrust))
            .ok_or(MissionError::ReferenceOutOfRange {
                launch_mass_index: index.launch_mass,
                thrust_index: index.thrust,
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            })
    }
}

pub fn run_trade_space(request: &TradeSpaceRequest) -> Result<TradeSpace, MissionError> {
    let rows = request.launch_masses_kg.len();
    let cols = request.thrusts_n.len();
    let mut grid = TradeGrid {
        launch_masses_kg: request.launch_masses_kg.clone(),
        thrusts_n: request.thrusts_n.clone(),
        payload_kg: vec![vec![f64::NAN; cols]; rows],
        pdi_thrust_to_weight: vec![vec![f64::NAN; cols]; rows],
    };
    let mut missions = Vec::with_capacity(rows);

    for (i, &launch_mass_kg) in request.launch_masses_kg.iter().enumerate() {
        let mut row = Vec::with_capacity(cols);
        for (j, &thrust_n) in request.thrusts_n.iter().enumerate() {
            let engine = Engine::new(request.isp_seconds, thrust_n, request.mixture_ratio)?;
            let mission = fly_mission(launch_mass_kg, &engine, &request.launch_curve)?;
            grid.payload_kg[i][j] = mission.payload_kg();
            grid.pdi_thrust_to_weight[i][j] = mission.pdi_start_thrust_to_weight();
            row.push(mission);
        }
        missions.push(row);
    }

    info!("swept {rows} launch masses x {cols} thrusts");
    Ok(TradeSpace { grid, missions })
}
