use tracing::info;

#[derive(Debug, Clone, Default)]
pub(crate) struct Stats {
    pub(crate) moves: usize,
    pub(crate) time_us: usize,
    pub(crate) states: usize,
    pub(crate) transitions: usize,
    pub(crate) expanded_nodes: usize,
}

impl Stats {
    pub(crate) fn print(&self) {
        info!(
            "Moves {:?} Time(microseconds) {:?} States {:?} Transitions {:?} Expanded nodes {:?}",
            self.moves, self.time_us, self.states, self.transitions, self.expanded_nodes
        );
    }
}
