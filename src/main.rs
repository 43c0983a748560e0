use orbsim::simulation::constants::{M_EARTH, PLANET_COLORS};
use orbsim::{
    commit_preview, compute_preview, set_trails_enabled, step, PreviewRequest, Scenario,
    ScenarioConfig,
};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Headless driver: loads a scenario (or the built-in solar system), runs
/// it for a number of ticks and logs collisions along the way.
#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML in the scenarios/ directory; built-in solar system when omitted
    #[arg(short)]
    file_name: Option<String>,

    /// Number of external ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Disable trail recording
    #[arg(long)]
    no_trails: bool,

    /// Commit this many extra Earth-mass planets from previews before running
    #[arg(long, default_value_t = 0)]
    add_planets: u32,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut scenario = match &args.file_name {
        Some(name) => Scenario::build_scenario(load_scenario_from_yaml(name)?)?,
        None => Scenario::solar_system()?,
    };

    if args.no_trails {
        set_trails_enabled(&mut scenario, false);
    }

    // Preview-and-commit a few extra planets around the anchor body,
    // cycling through the palette like an interactive host would
    for i in 0..args.add_planets {
        let request = PreviewRequest {
            mass: M_EARTH,
            period_years: 1.5 + f64::from(i),
            eccentricity: 0.1,
            color: PLANET_COLORS[i as usize % PLANET_COLORS.len()].to_string(),
        };
        let preview = compute_preview(
            &scenario.world,
            0,
            &request,
            true,
            &scenario.forces,
            &scenario.parameters,
        )?;
        let name = format!("Planet-{}", i + 1);
        commit_preview(&mut scenario.world, &preview, &name);
        info!("committed {} on a {:.1} yr orbit", name, request.period_years);
    }

    info!(
        "starting with {} bodies, dt = {} s, {} sub-steps per tick",
        scenario.world.bodies.len(),
        scenario.parameters.dt,
        scenario.parameters.steps_per_frame
    );

    for tick in 0..args.ticks {
        let report = step(&mut scenario);
        for event in &report.events {
            info!(
                "collision at ({:.3e}, {:.3e}) m, {:.3e} J lost",
                event.position.x, event.position.y, event.energy_lost
            );
        }
        if tick % 100 == 0 {
            info!(
                "day {:.2}: {} bodies",
                scenario.world.elapsed / 86400.0,
                scenario.world.bodies.len()
            );
        }
    }

    // final state, mass in Earth masses and speed in km/s
    println!(
        "after {:.2} days:",
        scenario.world.elapsed / 86400.0
    );
    for body in &scenario.world.bodies {
        println!(
            "  {:<16} {:>12.1} M_E  {:>8.1} km/s",
            body.name,
            body.m / M_EARTH,
            body.v.norm() / 1000.0
        );
    }

    Ok(())
}
