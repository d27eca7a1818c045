//! Whole-grid population query: live cells and connected shapes

use crate::life::Board;

/// Result of a [`Board::census`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Census {
    /// Total number of live cells.
    pub alive_cells: usize,
    /// Number of maximal 8-connected groups of live cells.
    pub shapes: usize,
}

impl Board {
    /// Count live cells and connected shapes (8-connectivity, diagonals
    /// included, consistent with the simulation's own neighbor definition).
    ///
    /// The visited markers live in a buffer rebuilt on every call, so
    /// repeated queries on an unchanged board always agree. The flood fill
    /// uses an explicit stack; component size is bounded by the grid, not by
    /// call-stack depth.
    pub fn census(&self) -> Census {
        let mut visited = vec![false; self.cells.len()];
        let mut stack = Vec::new();
        let mut alive_cells = 0;
        let mut shapes = 0;

        for idx in 0..self.cells.len() {
            if !self.cells[idx].alive {
                continue;
            }
            alive_cells += 1;
            if visited[idx] {
                continue;
            }

            shapes += 1;
            visited[idx] = true;
            stack.push(idx);
            while let Some(current) = stack.pop() {
                for &n in &self.neighbors[current] {
                    if self.cells[n].alive && !visited[n] {
                        visited[n] = true;
                        stack.push(n);
                    }
                }
            }
        }

        Census {
            alive_cells,
            shapes,
        }
    }
}
