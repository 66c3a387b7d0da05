use gravbox::{Sandbox, SandboxConfig, Vec2};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "grid.yaml")]
    file_name: String,

    /// Number of ticks to run
    #[arg(short = 'n', long, default_value_t = 2000)]
    steps: u64,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<SandboxConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("cannot open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let config: SandboxConfig = serde_yaml::from_reader(reader)?;

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_scenario_from_yaml(&args.file_name)?;

    let mut sandbox = Sandbox::from_config(&config);

    // The sandbox stays idle until a body is picked; headless runs pick
    // the body nearest the configured point (the grid center by default)
    let pick = config.pick.unwrap_or([0.0, 0.0]);
    sandbox
        .select_at(Vec2::new(pick[0], pick[1]))
        .context("no body within reach of the pick point")?;

    for _ in 0..args.steps {
        sandbox.step(args.dt)?;
    }

    let stats = sandbox.stats();
    println!(
        "after {} steps: {} of {} bodies alive, {} dead",
        args.steps, stats.live_count, stats.initial_count, stats.dead_count
    );
    match stats.selected_alive {
        Some(true) => println!("the tracked body survived"),
        Some(false) => println!("the tracked body was absorbed"),
        None => {}
    }

    Ok(())
}
