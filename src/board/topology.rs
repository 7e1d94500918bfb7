//! Edge handling for neighbor lookups.

/// How the board's edges behave when counting neighbors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Off-grid neighbors are absent.
    Bounded,
    /// Opposite edges are adjacent on both axes (a torus).
    #[default]
    Toroidal,
}

/// Moore neighborhood offsets, `(dx, dy)`.
pub(crate) const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Topology {
    /// Resolve `coord + delta` along one axis of length `size`.
    ///
    /// `delta` must be in `-1..=1`. Toroidal maps `size` to `0` and `-1` to
    /// `size - 1`. On boards smaller than three cells the same neighbor can
    /// be reached through more than one offset and is counted each time.
    #[inline(always)]
    pub fn step(self, coord: usize, delta: isize, size: usize) -> Option<usize> {
        debug_assert!(coord < size);
        match (self, delta) {
            (_, 0) => Some(coord),
            (Topology::Bounded, -1) => coord.checked_sub(1),
            (Topology::Bounded, _) => (coord + 1 < size).then_some(coord + 1),
            (Topology::Toroidal, -1) => Some(if coord == 0 { size - 1 } else { coord - 1 }),
            (Topology::Toroidal, _) => Some(if coord + 1 == size { 0 } else { coord + 1 }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Topology::Bounded => "bounded",
            Topology::Toroidal => "toroidal",
        }
    }

    /// Parse a topology name. `sphere` and `torus` are accepted aliases for
    /// the wrapping variant.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bounded" | "clamped" => Some(Topology::Bounded),
            "toroidal" | "torus" | "sphere" | "wrap" => Some(Topology::Toroidal),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Topology;

    #[test]
    fn bounded_drops_off_grid_neighbors() {
        assert_eq!(Topology::Bounded.step(0, -1, 5), None);
        assert_eq!(Topology::Bounded.step(4, 1, 5), None);
        assert_eq!(Topology::Bounded.step(2, -1, 5), Some(1));
        assert_eq!(Topology::Bounded.step(2, 1, 5), Some(3));
    }

    #[test]
    fn toroidal_wraps_both_directions() {
        assert_eq!(Topology::Toroidal.step(0, -1, 5), Some(4));
        assert_eq!(Topology::Toroidal.step(4, 1, 5), Some(0));
        assert_eq!(Topology::Toroidal.step(0, 0, 5), Some(0));
    }

    #[test]
    fn single_cell_torus_is_its_own_neighbor() {
        assert_eq!(Topology::Toroidal.step(0, -1, 1), Some(0));
        assert_eq!(Topology::Toroidal.step(0, 1, 1), Some(0));
    }

    #[test]
    fn names_round_trip_and_aliases() {
        for topology in [Topology::Bounded, Topology::Toroidal] {
            assert_eq!(Topology::from_name(topology.name()), Some(topology));
        }
        assert_eq!(Topology::from_name("Sphere"), Some(Topology::Toroidal));
        assert_eq!(Topology::from_name("hexagonal"), None);
    }
}
