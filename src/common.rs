use serde::Serialize;
use std::fmt;

use crate::maze::Maze;

/// Joint position of both tokens. The pair is ordered: (rocket, lucky) and
/// (lucky, rocket) are different states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JointState {
    pub rocket: usize,
    pub lucky: usize,
}

impl JointState {
    pub fn new(rocket: usize, lucky: usize) -> Self {
        JointState { rocket, lucky }
    }

    /// True once either token stands on the terminal node.
    pub fn touches(&self, terminal: usize) -> bool {
        self.rocket == terminal || self.lucky == terminal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Token {
    Rocket,
    Lucky,
}

impl Token {
    pub fn letter(&self) -> char {
        match self {
            Token::Rocket => 'R',
            Token::Lucky => 'L',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Rocket => write!(f, "Rocket"),
            Token::Lucky => write!(f, "Lucky"),
        }
    }
}

/// One step of a solution: a single token walks one corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub actor: Token,
    pub destination: usize,
}

impl Move {
    pub fn apply(&self, state: JointState) -> JointState {
        match self.actor {
            Token::Rocket => JointState::new(self.destination, state.lucky),
            Token::Lucky => JointState::new(state.rocket, self.destination),
        }
    }

    /// Output line for one step, destination 1-based:
    /// `R 2 # Rocket moves to B`.
    pub fn describe(&self, maze: &Maze) -> String {
        format!(
            "{} {} # {} moves to {}",
            self.actor.letter(),
            self.destination + 1,
            self.actor,
            maze.node_label(self.destination),
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub moves: Vec<Move>,
}

impl Solution {
    /// Replays the moves from `start` under the color-matching rule: a step is
    /// legal only along a corridor whose color equals the color of the node
    /// the other token stands on. True iff every step is legal and the final
    /// state touches the terminal.
    pub fn verify(&self, maze: &Maze, start: JointState) -> bool {
        let mut current = start;
        for step in &self.moves {
            let (from, other) = match step.actor {
                Token::Rocket => (current.rocket, current.lucky),
                Token::Lucky => (current.lucky, current.rocket),
            };
            let legal = maze.corridors_from(from).iter().any(|corridor| {
                corridor.to == step.destination
                    && maze.node_color(other) == Some(corridor.color)
            });
            if !legal {
                return false;
            }
            current = step.apply(current);
        }
        current.touches(maze.terminal())
    }
}
