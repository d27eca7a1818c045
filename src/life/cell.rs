//! A single automaton cell and the transition rule

/// One cell of the board.
///
/// Cells are plain data: the board owns them in a flat row-major vector and
/// keeps the neighbor topology in a parallel index table, so a cell never
/// references its neighbors directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    /// Staged next state. Only meaningful between the compute and commit
    /// phases of a single `Board::advance` call.
    pub(crate) pending: bool,
}

impl Cell {
    /// Create a cell in the given state.
    pub fn new(alive: bool) -> Self {
        Self {
            alive,
            pending: false,
        }
    }

    /// Stage the next state from the current live-neighbor count. Reads
    /// nothing but its own `alive` flag and the supplied count.
    pub(crate) fn compute_next(&mut self, live_neighbors: u8) {
        self.pending = next_state(self.alive, live_neighbors);
    }

    /// Promote the staged state to the current one.
    pub(crate) fn commit(&mut self) {
        self.alive = self.pending;
    }
}

/// Conway's transition rule: a live cell survives with 2 or 3 live
/// neighbors; a dead cell is born with exactly 3.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) | (false, 3) => true,
        _ => false,
    }
}
