use std::collections::VecDeque;
use std::time::Instant;

use tracing::debug;

use super::{Solver, StateGraph};
use crate::common::{JointState, Move, Solution, Token};
use crate::maze::Maze;
use crate::stat::Stats;

/// Breadth-first solver over the joint state space. Moves have unit cost, so
/// the first terminal-touching state in discovery order closes a shortest
/// solution.
pub struct JointBfs<'a> {
    maze: &'a Maze,
    start: JointState,
    stats: Stats,
}

impl<'a> JointBfs<'a> {
    pub fn new(maze: &'a Maze, start: JointState) -> Self {
        JointBfs {
            maze,
            start,
            stats: Stats::default(),
        }
    }
}

impl Solver for JointBfs<'_> {
    fn solve(&mut self) -> Option<Solution> {
        let total_solve_start_time = Instant::now();

        let graph = StateGraph::build(self.maze, self.start);
        self.stats.states = graph.len();
        self.stats.transitions = graph.transition_count();

        let (order, parents) = bfs_tree(&graph);
        self.stats.expanded_nodes = order.len();

        // The start state is first in discovery order, so starting on the
        // terminal yields an empty move list.
        let terminal = self.maze.terminal();
        let winning = order
            .iter()
            .copied()
            .find(|&idx| graph.state(idx).touches(terminal))?;
        debug!("winning state: {:?}", graph.state(winning));

        let moves = construct_moves(&graph, &parents, winning);
        self.stats.moves = moves.len();
        self.stats.time_us = total_solve_start_time.elapsed().as_micros() as usize;
        self.stats.print();

        Some(Solution { moves })
    }
}

/// FIFO traversal from the start state (index 0 in the arena). Returns the
/// discovery order and each state's BFS parent; the start has none.
fn bfs_tree(graph: &StateGraph) -> (Vec<usize>, Vec<Option<usize>>) {
    let mut parents = vec![None; graph.len()];
    let mut seen = vec![false; graph.len()];
    let mut order = Vec::with_capacity(graph.len());
    let mut frontier = VecDeque::new();

    seen[0] = true;
    frontier.push_back(0);

    while let Some(current) = frontier.pop_front() {
        order.push(current);
        for &next in graph.neighbors(current) {
            if !seen[next] {
                seen[next] = true;
                parents[next] = Some(current);
                frontier.push_back(next);
            }
        }
    }

    (order, parents)
}

/// Walks the parent chain from the winning state back to the start, reading
/// off which token moved from the single differing coordinate, then reverses
/// into start-to-finish order.
fn construct_moves(graph: &StateGraph, parents: &[Option<usize>], winning: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut current = winning;

    while let Some(parent) = parents[current] {
        let state = graph.state(current);
        let before = graph.state(parent);
        let step = match (state.rocket != before.rocket, state.lucky != before.lucky) {
            (true, false) => Move {
                actor: Token::Rocket,
                destination: state.rocket,
            },
            (false, true) => Move {
                actor: Token::Lucky,
                destination: state.lucky,
            },
            // Every transition moves exactly one token; anything else means
            // the state graph is corrupted.
            _ => unreachable!("transition {before:?} -> {state:?} moved zero or both tokens"),
        };
        moves.push(step);
        current = parent;
    }

    moves.reverse();
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Color;

    #[test]
    fn test_one_move_win() {
        // Nodes A(Red), B(Blue), C(Red), terminal at index 3. Rocket on A,
        // Lucky on B. Rocket's corridor A -> B is blue against Lucky's blue
        // node, legal but fruitless; Lucky's corridor B -> end is red against
        // Rocket's red node, which wins in one move.
        let maze = Maze::new(
            vec![Color::Red, Color::Blue, Color::Red],
            vec![(0, 1, Color::Blue), (1, 3, Color::Red)],
        )
        .unwrap();
        let start = JointState::new(0, 1);

        let solution = JointBfs::new(&maze, start).solve().unwrap();
        assert_eq!(
            solution.moves,
            vec![Move {
                actor: Token::Lucky,
                destination: 3,
            }]
        );
        assert_eq!(solution.moves[0].describe(&maze), "L 4 # Lucky moves to end");
        assert!(solution.verify(&maze, start));
    }

    #[test]
    fn test_two_move_win() {
        // Rocket must cross A -> B -> end, both corridors green and Lucky
        // parked on green C the whole time. Lucky's own red corridor C -> A
        // only leads into a dead end (both tokens on A match nothing).
        let maze = Maze::new(
            vec![Color::Red, Color::Blue, Color::Green],
            vec![
                (0, 1, Color::Green),
                (1, 3, Color::Green),
                (2, 0, Color::Red),
            ],
        )
        .unwrap();
        let start = JointState::new(0, 2);

        let solution = JointBfs::new(&maze, start).solve().unwrap();
        assert_eq!(
            solution.moves,
            vec![
                Move {
                    actor: Token::Rocket,
                    destination: 1,
                },
                Move {
                    actor: Token::Rocket,
                    destination: 3,
                },
            ]
        );
        assert!(solution.verify(&maze, start));
    }

    #[test]
    fn test_start_on_terminal_is_trivial_win() {
        let maze = Maze::new(
            vec![Color::Red, Color::Blue],
            vec![(0, 1, Color::Blue)],
        )
        .unwrap();
        let start = JointState::new(0, maze.terminal());

        let solution = JointBfs::new(&maze, start).solve().unwrap();
        assert!(solution.moves.is_empty());
        assert!(solution.verify(&maze, start));
    }

    #[test]
    fn test_no_corridors_has_no_solution() {
        let maze = Maze::new(vec![Color::Red, Color::Blue], vec![]).unwrap();

        assert!(JointBfs::new(&maze, JointState::new(0, 1)).solve().is_none());
    }

    #[test]
    fn test_corridor_cycle_has_no_solution() {
        // Tokens can shuffle between the two red nodes forever, but no
        // corridor reaches the terminal.
        let maze = Maze::new(
            vec![Color::Red, Color::Red],
            vec![(0, 1, Color::Red), (1, 0, Color::Red)],
        )
        .unwrap();

        assert!(JointBfs::new(&maze, JointState::new(0, 1)).solve().is_none());
    }

    #[test]
    fn test_repeated_searches_agree_on_length() {
        let maze = Maze::new(
            vec![Color::Red, Color::Blue, Color::Green],
            vec![
                (0, 1, Color::Green),
                (1, 3, Color::Green),
                (2, 0, Color::Red),
            ],
        )
        .unwrap();
        let start = JointState::new(0, 2);

        let first = JointBfs::new(&maze, start).solve().unwrap();
        let second = JointBfs::new(&maze, start).solve().unwrap();
        assert_eq!(first.moves.len(), second.moves.len());
    }

    #[test]
    fn test_terminal_token_freezes_the_other() {
        // Once Lucky reaches the colorless terminal, Rocket's blue corridor
        // can no longer fire: the only reachable win is Lucky's.
        let maze = Maze::new(
            vec![Color::Red, Color::Blue],
            vec![(0, 1, Color::Blue), (1, 2, Color::Red)],
        )
        .unwrap();
        let start = JointState::new(0, 1);

        let solution = JointBfs::new(&maze, start).solve().unwrap();
        assert_eq!(
            solution.moves,
            vec![Move {
                actor: Token::Lucky,
                destination: 2,
            }]
        );
        assert!(solution.verify(&maze, start));
    }
}
