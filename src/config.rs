use anyhow::anyhow;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "MadMaze Solver",
    about = "Two-token colored maze reachability solver.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(
        long,
        help = "Path to the YAML maze scenario file",
        default_value = "maze_file/spacewreck.yaml"
    )]
    pub scenario_path: String,

    #[arg(long, help = "Override Rocket's starting node (1-based)")]
    pub rocket_start: Option<usize>,

    #[arg(long, help = "Override Lucky's starting node (1-based)")]
    pub lucky_start: Option<usize>,

    #[arg(long, help = "Write the solved move list to this JSON file")]
    pub output_path: Option<String>,

    #[arg(
        long,
        help = "Generate a random scenario instead of loading one",
        default_value_t = false
    )]
    pub random_scenario: bool,

    #[arg(
        long,
        help = "Number of colored nodes in a generated scenario",
        default_value_t = 8
    )]
    pub num_nodes: usize,

    #[arg(
        long,
        help = "Number of corridors in a generated scenario",
        default_value_t = 16
    )]
    pub num_corridors: usize,

    #[arg(
        long,
        help = "Seed for the random number generator",
        default_value_t = 0
    )]
    pub seed: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub scenario_path: String,
    pub rocket_start: Option<usize>,
    pub lucky_start: Option<usize>,
    pub output_path: Option<String>,
    pub random_scenario: bool,
    pub num_nodes: usize,
    pub num_corridors: usize,
    pub seed: usize,
}

impl Config {
    pub fn new(cli: &Cli) -> Self {
        Self {
            scenario_path: cli.scenario_path.clone(),
            rocket_start: cli.rocket_start,
            lucky_start: cli.lucky_start,
            output_path: cli.output_path.clone(),
            random_scenario: cli.random_scenario,
            num_nodes: cli.num_nodes,
            num_corridors: cli.num_corridors,
            seed: cli.seed,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.rocket_start == Some(0) || self.lucky_start == Some(0) {
            return Err(anyhow!("Start positions are 1-based, got 0"));
        }

        if self.random_scenario && self.num_nodes == 0 {
            return Err(anyhow!(
                "A generated scenario needs at least one colored node"
            ));
        }

        Ok(())
    }
}
