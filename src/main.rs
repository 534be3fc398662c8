use dartsim::{build_scenario, ScenarioConfig};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "baseline.yaml")]
    file_name: String,

    /// Write the full frame history to this path as YAML
    #[arg(short)]
    out: Option<PathBuf>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut model = build_scenario(scenario_cfg)?;
    model.run();

    let summary = model.summary();
    println!("asteroids:             {}", summary.num_asteroids);
    println!("intercepted:           {}", summary.num_intercepted);
    println!("struck earth:          {}", summary.num_asteroids_collided);
    println!("intercepted + struck:  {}", summary.num_intercepted_collided);
    println!("interception rate:     {:.2}%", summary.interception_rate());
    println!("failed interceptions:  {:.2}%", summary.failed_interception_rate());
    println!("protection rate:       {:.2}%", summary.protection_rate());

    if let Some(path) = args.out {
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_yaml::to_writer(file, model.history())?;
        println!("history ({} frames) written to {}", model.history().len(), path.display());
    }

    Ok(())
}
