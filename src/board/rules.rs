//! Rule table generation for B3/S23.

/// Number of distinct neighbor counts in a Moore neighborhood (0..=8).
const NEIGHBOR_STATES: usize = 9;

/// Precomputed next-state lookup indexed by `alive * 9 + neighbors`.
#[derive(Clone, Debug)]
pub struct RuleTable {
    table: [bool; 2 * NEIGHBOR_STATES],
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleTable {
    pub fn new() -> Self {
        let mut table = [false; 2 * NEIGHBOR_STATES];
        for alive in [false, true] {
            for neighbors in 0..NEIGHBOR_STATES as u8 {
                table[index(alive, neighbors)] = output_for(alive, neighbors);
            }
        }
        Self { table }
    }

    #[inline(always)]
    pub fn lookup(&self, alive: bool, neighbors: u8) -> bool {
        debug_assert!(neighbors <= 8);
        self.table[index(alive, neighbors)]
    }
}

#[inline(always)]
fn index(alive: bool, neighbors: u8) -> usize {
    alive as usize * NEIGHBOR_STATES + neighbors as usize
}

fn output_for(alive: bool, neighbors: u8) -> bool {
    if alive {
        // Fewer than two dies of loneliness, more than three of crowding.
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}
