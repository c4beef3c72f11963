use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use lunar_lander_sizer::config::{SizerConfig, load_sizer_config};
use lunar_lander_sizer::export::{budget, report, trade, writer_for_path};
use lunar_lander_sizer::mission::{
    budget_request, reference_index, run_trade_space, size_budget, trade_request,
};
use lunar_lander_sizer::plot;

/// Sweep launch mass and main engine thrust, report the reference mission,
/// size its tanks and subsystems, and chart the payload trade space.
#[derive(Parser, Debug)]
#[command(author, version, about = "Lunar lander propulsion and mass sizer")]
struct Cli {
    /// Sizer configuration (TOML or YAML). Built-in baseline when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory receiving the CSV, JSON, and chart artifacts
    #[arg(long, default_value = "artifacts")]
    output_dir: PathBuf,

    /// Skip chart rendering
    #[arg(long, default_value_t = false)]
    no_plots: bool,

    /// Chart file extension
    #[arg(long, default_value = "png", value_parser = ["png", "svg"])]
    plot_format: String,

    #[arg(long, default_value_t = 1000)]
    width: u32,

    #[arg(long, default_value_t = 700)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_sizer_config(path)?,
        None => SizerConfig::default(),
    };

    let space = run_trade_space(&trade_request(&config))?;
    let reference = space.mission(reference_index(&config))?;

    println!(
        "Reference case: start mass {:.1} kg, thrust {:.0} N, initial apogee {:.1} km",
        reference.launch_mass_kg, reference.engine.thrust_n, reference.initial_apogee_km
    );
    print!("{}", report::phase_table(&reference.phases));
    println!("{}", report::summary_line(&reference.summary));

    let csv_path = cli.output_dir.join("trade_space.csv");
    let mut writer = writer_for_path(&csv_path)?;
    trade::write_trade_space(&mut *writer, &space)?;
    info!("wrote {}", csv_path.display());

    if !cli.no_plots {
        let charts = [
            ("payload_vs_launch_mass", plot::payload_vs_launch_mass(&space.grid)),
            ("payload_vs_thrust_to_weight", plot::payload_vs_thrust_to_weight(&space.grid)),
        ];
        for (stem, curves) in charts {
            let path = cli.output_dir.join(format!("{stem}.{}", cli.plot_format));
            match plot::render(&path, &curves, (cli.width, cli.height)) {
                Ok(()) => info!("wrote {}", path.display()),
                Err(err) => warn!("unable to render {}: {err}", path.display()),
            }
        }
    }

    if !reference.has_finite_propellant() {
        warn!("reference case propellant load is not finite; skipping mass budget");
        return Ok(());
    }
    let mass_budget = size_budget(reference, &budget_request(&config.budget)?)?;
    print!("{}", report::budget_table(&mass_budget));

    let json_path = cli.output_dir.join("mass_budget.json");
    budget::write_budget_json(&json_path, &mass_budget)?;
    info!("wrote {}", json_path.display());

    Ok(())
}
