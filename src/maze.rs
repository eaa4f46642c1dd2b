use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Corridor and node colors. The terminal node carries no color, so there is
/// no variant for it; `Maze::node_color` returns `None` there instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "B")]
    Blue,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "Y")]
    Yellow,
    #[serde(rename = "G")]
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corridor {
    pub to: usize,
    pub color: Color,
}

/// The maze itself: one color per regular node plus a colorless terminal node
/// whose index is one past the last colored node, and a directed adjacency
/// list of colored corridors.
#[derive(Debug, Clone)]
pub struct Maze {
    colors: Vec<Color>,
    corridors: Vec<Vec<Corridor>>,
}

impl Maze {
    pub fn new(colors: Vec<Color>, corridors: Vec<(usize, usize, Color)>) -> Result<Self> {
        let terminal = colors.len();
        let mut adjacency = vec![Vec::new(); terminal + 1];
        for (from, to, color) in corridors {
            if from > terminal || to > terminal {
                return Err(anyhow!(
                    "corridor {} -> {} references a node outside 0..={}",
                    from,
                    to,
                    terminal
                ));
            }
            adjacency[from].push(Corridor { to, color });
        }
        Ok(Maze {
            colors,
            corridors: adjacency,
        })
    }

    /// Index of the colorless terminal node.
    pub fn terminal(&self) -> usize {
        self.colors.len()
    }

    pub fn node_count(&self) -> usize {
        self.colors.len() + 1
    }

    /// `None` exactly for the terminal node.
    pub fn node_color(&self, node: usize) -> Option<Color> {
        self.colors.get(node).copied()
    }

    pub fn corridors_from(&self, node: usize) -> &[Corridor] {
        &self.corridors[node]
    }

    /// Human-readable node name: `A`, `B`, ... for regular nodes, `end` for
    /// the terminal.
    pub fn node_label(&self, node: usize) -> String {
        if node == self.terminal() {
            "end".to_string()
        } else {
            alpha_label(node + 1)
        }
    }
}

/// Bijective base-26 over A..Z: 1 -> "A", 26 -> "Z", 27 -> "AA", 28 -> "AB".
pub fn alpha_label(mut num: usize) -> String {
    let mut out = String::new();
    while num > 0 {
        num -= 1;
        out.insert(0, (b'A' + (num % 26) as u8) as char);
        num /= 26;
    }
    out
}
