use madmaze_rust::common::JointState;
use madmaze_rust::config::{Cli, Config};
use madmaze_rust::scenario::Scenario;
use madmaze_rust::solver::{JointBfs, Solver};

use anyhow::{anyhow, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();
    let cli = Cli::parse();
    let config = Config::new(&cli);
    config.validate()?;

    let scenario = if config.random_scenario {
        let mut rng = StdRng::seed_from_u64(config.seed as u64);
        Scenario::generate_random(config.num_nodes, config.num_corridors, &mut rng)
    } else {
        Scenario::load_from_yaml(&config.scenario_path)
            .with_context(|| format!("error with scenario file: {}", config.scenario_path))?
    };

    let (maze, mut start) = scenario.into_maze()?;
    if let Some(rocket) = config.rocket_start {
        start = JointState::new(rocket - 1, start.lucky);
    }
    if let Some(lucky) = config.lucky_start {
        start = JointState::new(start.rocket, lucky - 1);
    }
    if start.rocket > maze.terminal() || start.lucky > maze.terminal() {
        return Err(anyhow!("start {start:?} is outside the maze"));
    }

    let mut solver = JointBfs::new(&maze, start);
    match solver.solve() {
        Some(solution) => {
            assert!(solution.verify(&maze, start));
            for step in &solution.moves {
                println!("{}", step.describe(&maze));
            }
            if let Some(output_path) = config.output_path.as_ref() {
                Scenario::write_solution_to_json(output_path, &solution)?;
                info!("Wrote solution to {output_path}");
            }
        }
        None => println!("No solution"),
    }

    Ok(())
}
