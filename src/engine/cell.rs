/// A single grid position: its alive/dead state plus the live-neighbor
/// count stored for it during the most recent count phase.
///
/// The neighbor count is transient scratch space. It is written by the
/// grid once per generation and consumed by [`Cell::commit`]; it carries
/// no meaning outside that window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    neighbors: u8,
}

impl Cell {
    #[inline]
    pub fn new(alive: bool) -> Self {
        Self {
            alive,
            neighbors: 0,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub(super) fn set_neighbors(&mut self, count: u8) {
        debug_assert!(count <= 8, "a cell has at most 8 neighbors");
        self.neighbors = count;
    }

    /// Replaces this cell's state with its next-generation state, using
    /// the neighbor count stored by the last count phase.
    #[inline]
    pub(super) fn commit(&mut self) {
        self.alive = next_state(self.alive, self.neighbors);
    }
}

/// The Conway transition rule as a pure function of the current state
/// and the live-neighbor count.
///
/// A dead cell comes to life with exactly 3 live neighbors; a live cell
/// survives with 2 or 3; everything else is dead next generation.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}
