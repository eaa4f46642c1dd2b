use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::common::JointState;
use crate::maze::Maze;

/// Reachability graph over joint token positions. States are interned into an
/// arena the first time they appear; the interning map doubles as the visited
/// set, so no pair is ever expanded twice even when the underlying corridors
/// cycle.
#[derive(Debug, Clone)]
pub struct StateGraph {
    states: Vec<JointState>,
    edges: Vec<Vec<usize>>,
    index: HashMap<JointState, usize>,
}

impl StateGraph {
    /// Expands every joint state reachable from `start` by legal single-token
    /// moves, using an explicit worklist. A corridor move is legal iff the
    /// corridor color equals the color of the node the *other* token stands
    /// on; the terminal node has no color, so a token parked there freezes
    /// the other one.
    #[instrument(skip_all, name = "state_space_build", level = "debug")]
    pub fn build(maze: &Maze, start: JointState) -> Self {
        let mut graph = StateGraph {
            states: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
        };

        let root = graph.intern(start);
        let mut worklist = vec![root];

        while let Some(current) = worklist.pop() {
            let JointState { rocket, lucky } = graph.states[current];

            for corridor in maze.corridors_from(rocket) {
                if maze.node_color(lucky) == Some(corridor.color) {
                    graph.link(current, JointState::new(corridor.to, lucky), &mut worklist);
                }
            }
            for corridor in maze.corridors_from(lucky) {
                if maze.node_color(rocket) == Some(corridor.color) {
                    graph.link(current, JointState::new(rocket, corridor.to), &mut worklist);
                }
            }
        }

        debug!(
            "state space: {} states, {} transitions",
            graph.len(),
            graph.transition_count()
        );
        graph
    }

    fn intern(&mut self, state: JointState) -> usize {
        let idx = self.states.len();
        self.states.push(state);
        self.edges.push(Vec::new());
        self.index.insert(state, idx);
        idx
    }

    /// Records the transition; a target seen for the first time is queued for
    /// expansion. Transitions into already-visited states are kept so the
    /// edge set stays complete.
    fn link(&mut self, from: usize, target: JointState, worklist: &mut Vec<usize>) {
        let idx = match self.index.get(&target) {
            Some(&idx) => idx,
            None => {
                let idx = self.intern(target);
                worklist.push(idx);
                idx
            }
        };
        self.edges[from].push(idx);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn transition_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub fn states(&self) -> &[JointState] {
        &self.states
    }

    pub fn state(&self, idx: usize) -> JointState {
        self.states[idx]
    }

    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.edges[idx]
    }
}
