use std::path::{Path, PathBuf};

use clap::Parser;
use csv::ReaderBuilder;
use log::info;
use lunar_lander_sizer::mission::TradeGrid;
use lunar_lander_sizer::plot;

/// Re-render the payload charts from a trade-space CSV written by `sizer`.
#[derive(Parser, Debug)]
#[command(author, version, about = "Render payload trade charts from CSV")]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "artifacts")]
    output_dir: PathBuf,
    /// Chart file extension
    #[arg(long, default_value = "png", value_parser = ["png", "svg"])]
    plot_format: String,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 700)]
    height: u32,
}

#[derive(Debug, Clone, Copy)]
struct Row {
    launch_mass_index: usize,
    thrust_index: usize,
    launch_mass_kg: f64,
    thrust_n: f64,
    payload_kg: f64,
    pdi_thrust_to_weight: f64,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let rows = read_rows(&cli.input)?;
    if rows.is_empty() {
        return Err(anyhow::anyhow!("No grid points in the provided CSV"));
    }
    let grid = build_grid(&rows)?;

    let charts = [
        ("payload_vs_launch_mass", plot::payload_vs_launch_mass(&grid)),
        ("payload_vs_thrust_to_weight", plot::payload_vs_thrust_to_weight(&grid)),
    ];
    for (stem, curves) in charts {
        let path = cli.output_dir.join(format!("{stem}.{}", cli.plot_format));
        plot::render(&path, &curves, (cli.width, cli.height))?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn read_rows(path: &Path) -> anyhow::Result<Vec<Row>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))
    };
    let mass_idx_col = column("launch_mass_index")?;
    let thrust_idx_col = column("thrust_index")?;
    let mass_col = column("launch_mass_kg")?;
    let thrust_col = column("thrust_n")?;
    let payload_col = column("payload_kg")?;
    let tw_col = column("pdi_thrust_to_weight")?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let float = |idx: usize| r.get(idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let index = |idx: usize| -> anyhow::Result<usize> {
            r.get(idx)
                .unwrap_or("")
                .parse()
                .map_err(|_| anyhow::anyhow!("bad grid index in row {:?}", r.position()))
        };
        rows.push(Row {
            launch_mass_index: index(mass_idx_col)?,
            thrust_index: index(thrust_idx_col)?,
            launch_mass_kg: float(mass_col),
            thrust_n: float(thrust_col),
            payload_kg: float(payload_col),
            pdi_thrust_to_weight: float(tw_col),
        });
    }
    Ok(rows)
}

fn build_grid(rows: &[Row]) -> anyhow::Result<TradeGrid> {
    // A full grid has one row per point, so no index can reach the row count.
    let limit = rows.len();
    if let Some(bad) = rows
        .iter()
        .find(|r| r.launch_mass_index >= limit || r.thrust_index >= limit)
    {
        return Err(anyhow::anyhow!(
            "grid index ({}, {}) out of range for {} rows",
            bad.launch_mass_index,
            bad.thrust_index,
            limit
        ));
    }
    let n_mass = rows.iter().map(|r| r.launch_mass_index + 1).max().unwrap_or(0);
    let n_thrust = rows.iter().map(|r| r.thrust_index + 1).max().unwrap_or(0);
    let mut grid = TradeGrid {
        launch_masses_kg: vec![f64::NAN; n_mass],
        thrusts_n: vec![f64::NAN; n_thrust],
        payload_kg: vec![vec![f64::NAN; n_thrust]; n_mass],
        pdi_thrust_to_weight: vec![vec![f64::NAN; n_thrust]; n_mass],
    };
    for row in rows {
        let (i, j) = (row.launch_mass_index, row.thrust_index);
        grid.launch_masses_kg[i] = row.launch_mass_kg;
        grid.thrusts_n[j] = row.thrust_n;
        grid.payload_kg[i][j] = row.payload_kg;
        grid.pdi_thrust_to_weight[i][j] = row.pdi_thrust_to_weight;
    }
    Ok(grid)
}
