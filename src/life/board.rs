//! Toroidal board: cell storage, neighbor topology, generation stepping

use crate::error::ConfigError;
use crate::life::Cell;
use rand::Rng;

/// A fixed-size toroidal Game of Life grid.
///
/// Cells live in a flat row-major vector; the 8-neighbor topology is wired
/// once at construction as a parallel table of indices. Edges wrap, so every
/// cell has exactly 8 neighbor entries (with repeats on degenerate grids:
/// a 1x1 board is its own neighbor in all 8 slots).
#[derive(Debug, Clone)]
pub struct Board {
    columns: usize,
    rows: usize,
    cell_size: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) neighbors: Vec<[usize; 8]>,
}

/// Equality compares dimensions and live/dead state only. Staged next-state
/// flags are transient and carry no meaning between generations.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.rows == other.rows
            && self.cell_size == other.cell_size
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| a.alive == b.alive)
    }
}

impl Eq for Board {}

impl Board {
    /// Create a board of `(width / cell_size) x (height / cell_size)` cells
    /// and seed each one alive with probability `live_density`.
    ///
    /// `cell_size` is a display scale factor only; it must divide both
    /// dimensions exactly (a non-dividing size is rejected rather than
    /// silently truncated).
    pub fn random<R: Rng>(
        width: usize,
        height: usize,
        cell_size: usize,
        live_density: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let mut board = Self::empty(width, height, cell_size)?;
        board.randomize(live_density, rng)?;
        Ok(board)
    }

    /// Create an all-dead board with wired topology.
    pub fn empty(width: usize, height: usize, cell_size: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::NonPositiveDimensions { width, height });
        }
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if width % cell_size != 0 || height % cell_size != 0 {
            return Err(ConfigError::NonDividingCellSize {
                width,
                height,
                cell_size,
            });
        }

        let columns = width / cell_size;
        let rows = height / cell_size;
        Ok(Self {
            columns,
            rows,
            cell_size,
            cells: vec![Cell::default(); columns * rows],
            neighbors: connect_neighbors(columns, rows),
        })
    }

    pub(crate) fn from_cells(columns: usize, rows: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), columns * rows);
        Self {
            columns,
            rows,
            cell_size: 1,
            cells,
            neighbors: connect_neighbors(columns, rows),
        }
    }

    /// Re-seed every cell alive with probability `live_density`.
    pub fn randomize<R: Rng>(&mut self, live_density: f64, rng: &mut R) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&live_density) {
            return Err(ConfigError::DensityOutOfRange(live_density));
        }
        for cell in &mut self.cells {
            cell.alive = rng.gen_bool(live_density);
        }
        Ok(())
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Width in display units.
    pub fn width(&self) -> usize {
        self.columns * self.cell_size
    }

    /// Height in display units.
    pub fn height(&self) -> usize {
        self.rows * self.cell_size
    }

    #[inline]
    pub(crate) fn index(&self, col: usize, row: usize) -> usize {
        row * self.columns + col
    }

    pub fn is_alive(&self, col: usize, row: usize) -> bool {
        self.cells[self.index(col, row)].alive
    }

    pub fn set_alive(&mut self, col: usize, row: usize, alive: bool) {
        let idx = self.index(col, row);
        self.cells[idx].alive = alive;
    }

    /// Count total living cells.
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Advance the whole grid one generation with simultaneous-update
    /// semantics: phase 1 stages every cell's next state reading only
    /// current `alive` flags, phase 2 commits. Traversal order cannot be
    /// observed.
    pub fn advance(&mut self) {
        for idx in 0..self.cells.len() {
            let live_neighbors = self.live_neighbor_count(idx);
            self.cells[idx].compute_next(live_neighbors);
        }
        for cell in &mut self.cells {
            cell.commit();
        }
    }

    pub(crate) fn live_neighbor_count(&self, idx: usize) -> u8 {
        self.neighbors[idx]
            .iter()
            .filter(|&&n| self.cells[n].alive)
            .count() as u8
    }
}

/// Build the toroidal neighbor table for a `columns x rows` grid.
///
/// Slot order is fixed: top-left, top, top-right, left, right, bottom-left,
/// bottom, bottom-right. The order carries no rule semantics but keeps
/// traversals reproducible.
fn connect_neighbors(columns: usize, rows: usize) -> Vec<[usize; 8]> {
    let mut table = Vec::with_capacity(columns * rows);
    for y in 0..rows {
        for x in 0..columns {
            let x_l = if x > 0 { x - 1 } else { columns - 1 };
            let x_r = if x < columns - 1 { x + 1 } else { 0 };
            let y_t = if y > 0 { y - 1 } else { rows - 1 };
            let y_b = if y < rows - 1 { y + 1 } else { 0 };

            let at = |col: usize, row: usize| row * columns + col;
            table.push([
                at(x_l, y_t),
                at(x, y_t),
                at(x_r, y_t),
                at(x_l, y),
                at(x_r, y),
                at(x_l, y_b),
                at(x, y_b),
                at(x_r, y_b),
            ]);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::cell::next_state;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board_from_live(columns: usize, rows: usize, live: &[(usize, usize)]) -> Board {
        let mut board = Board::empty(columns, rows, 1).unwrap();
        for &(col, row) in live {
            board.set_alive(col, row, true);
        }
        board
    }

    #[test]
    fn test_every_cell_has_eight_neighbors() {
        let board = Board::empty(5, 4, 1).unwrap();
        assert_eq!(board.neighbors.len(), 20);
        for slots in &board.neighbors {
            assert_eq!(slots.len(), 8);
            for &n in slots {
                assert!(n < board.cells.len());
            }
        }
    }

    #[test]
    fn test_neighbor_relation_is_symmetric() {
        let board = Board::empty(5, 3, 1).unwrap();
        for (idx, slots) in board.neighbors.iter().enumerate() {
            for &n in slots {
                assert!(
                    board.neighbors[n].contains(&idx),
                    "cell {} lists {} but not vice versa",
                    idx,
                    n
                );
            }
        }
    }

    #[test]
    fn test_corner_wraps_to_opposite_edges() {
        let board = Board::empty(4, 3, 1).unwrap();
        // Top-left corner (0,0): its top-left neighbor is the bottom-right
        // corner (3,2).
        assert_eq!(board.neighbors[0][0], board.index(3, 2));
        // Its left neighbor is (3,0).
        assert_eq!(board.neighbors[0][3], board.index(3, 0));
    }

    #[test]
    fn test_one_by_one_torus_is_self_adjacent() {
        let mut board = board_from_live(1, 1, &[(0, 0)]);
        let slots = board.neighbors[0];
        assert_eq!(slots, [0; 8]);

        // A lone live cell sees 8 live neighbors (all itself) and dies.
        board.advance();
        assert!(!board.is_alive(0, 0));

        // A dead 1x1 board stays dead.
        board.advance();
        assert!(!board.is_alive(0, 0));
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut board = board_from_live(5, 5, &[(2, 2)]);
        board.advance();
        assert_eq!(board.living_count(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut board = board_from_live(5, 5, &block);
        let before = board.clone();
        for _ in 0..4 {
            board.advance();
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_l_tromino_closes_into_block() {
        let mut board = board_from_live(5, 5, &[(1, 1), (2, 1), (1, 2)]);
        board.advance();
        let expected = board_from_live(5, 5, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        assert_eq!(board, expected);
    }

    #[test]
    fn test_blinker_oscillates() {
        let vertical = [(2, 1), (2, 2), (2, 3)];
        let horizontal = [(1, 2), (2, 2), (3, 2)];
        let mut board = board_from_live(5, 5, &vertical);

        board.advance();
        assert_eq!(board, board_from_live(5, 5, &horizontal));

        board.advance();
        assert_eq!(board, board_from_live(5, 5, &vertical));
    }

    #[test]
    fn test_advance_is_traversal_order_independent() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::random(12, 9, 1, 0.4, &mut rng).unwrap();
        let snapshot = board.clone();

        board.advance();

        // Reference: recompute every next state from the frozen snapshot,
        // walking the cells in reverse order.
        for idx in (0..snapshot.cells.len()).rev() {
            let count = snapshot.live_neighbor_count(idx);
            let expected = next_state(snapshot.cells[idx].alive, count);
            assert_eq!(board.cells[idx].alive, expected, "cell {} diverged", idx);
        }
    }

    #[test]
    fn test_random_density_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let full = Board::random(6, 6, 1, 1.0, &mut rng).unwrap();
        assert_eq!(full.living_count(), 36);

        let empty = Board::random(6, 6, 1, 0.0, &mut rng).unwrap();
        assert_eq!(empty.living_count(), 0);
    }

    #[test]
    fn test_cell_size_scales_display_dimensions() {
        let board = Board::empty(50, 20, 5).unwrap();
        assert_eq!(board.columns(), 10);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.width(), 50);
        assert_eq!(board.height(), 20);
    }

    #[test]
    fn test_invalid_construction() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Board::empty(0, 10, 1),
            Err(ConfigError::NonPositiveDimensions {
                width: 0,
                height: 10
            })
        );
        assert_eq!(Board::empty(10, 10, 0), Err(ConfigError::ZeroCellSize));
        assert_eq!(
            Board::empty(10, 10, 3),
            Err(ConfigError::NonDividingCellSize {
                width: 10,
                height: 10,
                cell_size: 3
            })
        );
        assert_eq!(
            Board::random(10, 10, 1, 1.5, &mut rng),
            Err(ConfigError::DensityOutOfRange(1.5))
        );
        assert_eq!(
            Board::random(10, 10, 1, -0.1, &mut rng),
            Err(ConfigError::DensityOutOfRange(-0.1))
        );
    }
}
