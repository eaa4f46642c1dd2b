use anyhow::{anyhow, Context, Result};
use rand::prelude::*;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing::info;

use crate::common::{JointState, Solution};
use crate::maze::{Color, Maze};

/// On-disk maze description. Node numbering is 1-based to match the corridor
/// charts the puzzles ship with; the terminal node is implicit at index
/// `nodes.len() + 1` and never listed.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub nodes: Vec<Color>,
    pub corridors: Vec<CorridorSpec>,
    pub rocket: usize,
    pub lucky: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CorridorSpec {
    pub from: usize,
    pub to: usize,
    pub color: Color,
}

impl Scenario {
    pub fn load_from_yaml(path: &str) -> Result<Scenario> {
        let file =
            File::open(path).with_context(|| format!("failed to open scenario file {path}"))?;
        let reader = BufReader::new(file);
        let scenario = serde_yaml::from_reader(reader)?;
        Ok(scenario)
    }

    /// Validates the 1-based description and converts it into the solver's
    /// 0-based maze plus the joint start state.
    pub fn into_maze(self) -> Result<(Maze, JointState)> {
        let terminal = self.nodes.len() + 1;

        let corridors = self
            .corridors
            .iter()
            .map(|corridor| {
                if corridor.from == 0
                    || corridor.from > terminal
                    || corridor.to == 0
                    || corridor.to > terminal
                {
                    return Err(anyhow!(
                        "corridor {} -> {} references a node outside 1..={}",
                        corridor.from,
                        corridor.to,
                        terminal
                    ));
                }
                Ok((corridor.from - 1, corridor.to - 1, corridor.color))
            })
            .collect::<Result<Vec<_>>>()?;

        for (token, position) in [("Rocket", self.rocket), ("Lucky", self.lucky)] {
            if position == 0 || position > terminal {
                return Err(anyhow!(
                    "{} starts at node {}, outside 1..={}",
                    token,
                    position,
                    terminal
                ));
            }
        }

        let maze = Maze::new(self.nodes, corridors)?;
        let start = JointState::new(self.rocket - 1, self.lucky - 1);
        info!("Loaded maze with {} nodes, start {start:?}", maze.node_count());
        Ok((maze, start))
    }

    /// Random scenario with uniformly colored nodes and corridors. Corridors
    /// always leave a colored node but may lead to the terminal; both tokens
    /// start on colored nodes.
    pub fn generate_random<R: Rng + ?Sized>(
        num_nodes: usize,
        num_corridors: usize,
        rng: &mut R,
    ) -> Scenario {
        let palette = [Color::Blue, Color::Red, Color::Yellow, Color::Green];

        let nodes = (0..num_nodes)
            .map(|_| *palette.choose(rng).unwrap())
            .collect();
        let corridors = (0..num_corridors)
            .map(|_| CorridorSpec {
                from: rng.gen_range(1..=num_nodes),
                to: rng.gen_range(1..=num_nodes + 1),
                color: *palette.choose(rng).unwrap(),
            })
            .collect();

        let scenario = Scenario {
            nodes,
            corridors,
            rocket: rng.gen_range(1..=num_nodes),
            lucky: rng.gen_range(1..=num_nodes),
        };
        info!("Generated scenario: {scenario:?}");
        scenario
    }

    pub fn write_solution_to_json(path: &str, solution: &Solution) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = io::BufWriter::new(file);
        let json_data = serde_json::to_string_pretty(&solution.moves)?;
        writer.write_all(json_data.as_bytes())?;

        Ok(())
    }
}
