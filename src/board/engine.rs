use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::config::{BoardConfig, BorderPolicy};
use super::error::BoardError;
use super::rules::RuleTable;
use super::topology::{NEIGHBOR_OFFSETS, Topology};

/// Square Game of Life board.
///
/// Cells live in a single row-major buffer indexed `y * size + x`. A second
/// buffer of the same shape receives each new generation and is swapped in
/// when the advance completes, so neighbor counts always read the previous
/// generation.
#[derive(Clone, Debug)]
pub struct LifeBoard {
    size: usize,
    cells: Vec<bool>,
    /// Next-generation buffer, reused across advances.
    scratch: Vec<bool>,
    rules: RuleTable,
    border: BorderPolicy,
    generation: u64,
}

/// Owned deep copy of a board's cells at one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    size: usize,
    generation: u64,
    cells: Vec<bool>,
}

impl Snapshot {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Raw cell state, ignoring any border policy.
    pub fn cell(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.cells[y * self.size + x]
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

impl LifeBoard {
    /// Create a `size × size` board seeded with the fixed default seed.
    pub fn new(size: i64) -> Result<Self, BoardError> {
        Self::with_config(size, BoardConfig::default())
    }

    /// Like `new`, but an invalid size yields `None`.
    pub fn create(size: i64) -> Option<Self> {
        Self::new(size).ok()
    }

    /// Create a board with explicit configuration.
    pub fn with_config(size: i64, config: BoardConfig) -> Result<Self, BoardError> {
        let edge = usize::try_from(size)
            .ok()
            .filter(|&s| s > 0 && s.checked_mul(s).is_some())
            .ok_or(BoardError::InvalidSize(size))?;
        let seed = config.resolve_seed();
        let border = config.resolve_border();

        let mut board = Self {
            size: edge,
            cells: vec![false; edge * edge],
            scratch: vec![false; edge * edge],
            rules: RuleTable::new(),
            border,
            generation: 0,
        };
        board.seed(seed);
        log::info!("created {edge}x{edge} board (seed {seed}, border {border:?})");
        Ok(board)
    }

    /// Refill every cell from a fresh PRNG seeded with `seed`.
    ///
    /// Draws are consumed column by column (`x` outer, `y` inner) and each
    /// one maps to a cell as `draw % 2`.
    fn seed(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for x in 0..self.size {
            for y in 0..self.size {
                self.cells[y * self.size + x] = rng.next_u32() % 2 == 1;
            }
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn border_policy(&self) -> BorderPolicy {
        self.border
    }

    /// Raw row-major cell storage, ignoring the border policy.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if self.border.accepts(x, self.size) && self.border.accepts(y, self.size) {
            Some(y as usize * self.size + x as usize)
        } else {
            None
        }
    }

    /// Read a cell. Coordinates rejected by the border policy read as dead.
    pub fn get_cell(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Write a cell. Returns `false` without mutating when the border policy
    /// rejects the coordinates.
    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    /// Flip a cell through the accessors. Returns whether the write landed.
    pub fn toggle_cell(&mut self, x: i64, y: i64) -> bool {
        let current = self.get_cell(x, y);
        self.set_cell(x, y, !current)
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Count of live cells in storage, border ring included.
    pub fn population(&self) -> u64 {
        self.cells.iter().filter(|&&alive| alive).count() as u64
    }

    /// Visit every coordinate for which `get_cell` reports a live cell.
    pub fn for_each_live<F: FnMut(i64, i64)>(&self, mut f: F) {
        let size = self.size as i64;
        for y in 0..size {
            for x in 0..size {
                if self.get_cell(x, y) {
                    f(x, y);
                }
            }
        }
    }

    /// Live cells among the eight neighbors of `(x, y)`, read from storage.
    pub fn neighbor_count(&self, x: usize, y: usize, topology: Topology) -> u8 {
        let mut count = 0u8;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let Some(nx) = topology.step(x, dx, self.size) else {
                continue;
            };
            let Some(ny) = topology.step(y, dy, self.size) else {
                continue;
            };
            count += self.cells[ny * self.size + nx] as u8;
        }
        count
    }

    /// Advance one generation under `topology`.
    pub fn advance(&mut self, topology: Topology) {
        let size = self.size;
        for y in 0..size {
            for x in 0..size {
                let neighbors = self.neighbor_count(x, y, topology);
                let i = y * size + x;
                self.scratch[i] = self.rules.lookup(self.cells[i], neighbors);
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
        log::trace!(
            "generation {} ({}, population {})",
            self.generation,
            topology.name(),
            self.population()
        );
    }

    pub fn advance_bounded(&mut self) {
        self.advance(Topology::Bounded);
    }

    pub fn advance_toroidal(&mut self) {
        self.advance(Topology::Toroidal);
    }

    /// Advance `n` generations.
    pub fn advance_n(&mut self, topology: Topology, n: u64) {
        for _ in 0..n {
            self.advance(topology);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.size,
            generation: self.generation,
            cells: self.cells.clone(),
        }
    }

    /// Replace the cells with a snapshot taken from a board of the same size.
    /// Returns `false` and leaves the board untouched on a size mismatch.
    pub fn restore(&mut self, snapshot: &Snapshot) -> bool {
        if snapshot.size != self.size {
            log::warn!(
                "refusing to restore {0}x{0} snapshot into {1}x{1} board",
                snapshot.size,
                self.size
            );
            return false;
        }
        self.cells.copy_from_slice(&snapshot.cells);
        self.generation = snapshot.generation;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, BorderPolicy, LifeBoard, Topology};

    fn empty_board(size: i64) -> LifeBoard {
        let mut board = LifeBoard::with_config(
            size,
            BoardConfig::default().border_policy(BorderPolicy::Full),
        )
        .expect("valid size");
        board.clear();
        board
    }

    #[test]
    fn scratch_buffer_is_reused_across_advances() {
        let mut board = empty_board(6);
        let scratch_ptr = board.scratch.as_ptr();
        let cells_ptr = board.cells.as_ptr();

        board.advance(Topology::Toroidal);
        assert_eq!(board.cells.as_ptr(), scratch_ptr);
        board.advance(Topology::Toroidal);
        assert_eq!(board.cells.as_ptr(), cells_ptr);
        assert_eq!(board.scratch.len(), 36);
    }

    #[test]
    fn neighbor_count_on_corner() {
        let mut board = empty_board(4);
        board.set_cell(3, 3, true);
        board.set_cell(3, 0, true);
        board.set_cell(0, 3, true);
        board.set_cell(1, 1, true);

        assert_eq!(board.neighbor_count(0, 0, Topology::Bounded), 1);
        assert_eq!(board.neighbor_count(0, 0, Topology::Toroidal), 4);
    }

    #[test]
    fn restore_rejects_mismatched_size() {
        let small = empty_board(3).snapshot();
        let mut board = empty_board(5);
        board.set_cell(2, 2, true);
        assert!(!board.restore(&small));
        assert!(board.get_cell(2, 2));
    }

    #[test]
    fn generation_counter_tracks_advances() {
        let mut board = empty_board(4);
        board.advance_n(Topology::Bounded, 3);
        assert_eq!(board.generation(), 3);
        let snap = board.snapshot();
        board.advance_toroidal();
        assert!(board.restore(&snap));
        assert_eq!(board.generation(), 3);
    }
}
