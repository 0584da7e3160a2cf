mod cell;

pub use self::cell::{Cell, next_state};
use crate::error::GridError;
use rayon::prelude::*;

/// A fixed-size Game of Life grid with periodic boundary conditions.
///
/// Cells are stored row-major in a flat vector (`index = y * width + x`),
/// so a cell's position is implicit from its index. Edges wrap: the
/// right neighbor of the last column is the first column of the same
/// row, and likewise vertically.
#[derive(Debug, Clone)]
pub struct TorusGrid {
    width: usize,
    height: usize,
    generation: u64,
    cells: Vec<Cell>,
}

impl TorusGrid {
    /// Builds a grid from a row-major seed, where element `i` of the
    /// seed becomes the cell at `(i % width, i / width)`.
    pub fn new(width: usize, height: usize, seed: &[bool]) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimension { width, height });
        }
        let expected = width * height;
        if seed.len() != expected {
            return Err(GridError::SeedLength {
                width,
                height,
                expected,
                actual: seed.len(),
            });
        }

        Ok(Self {
            width,
            height,
            generation: 0,
            cells: seed.iter().map(|&alive| Cell::new(alive)).collect(),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The state of the cell at `(x, y)`, or an error if the coordinate
    /// is outside the grid.
    pub fn state(&self, x: usize, y: usize) -> Result<bool, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[y * self.width + x].is_alive())
    }

    /// Enumerates every `((x, y), alive)` pair in row-major order, for
    /// renderers that redraw the whole grid each frame.
    pub fn states(&self) -> impl Iterator<Item = ((usize, usize), bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| ((i % self.width, i / self.width), cell.is_alive()))
    }

    /// The grid's rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Counts the live cells among the 8 toroidal neighbors of `(x, y)`,
    /// the 3x3 neighborhood minus the center.
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let left = (x + self.width - 1) % self.width;
        let right = (x + 1) % self.width;
        let up = (y + self.height - 1) % self.height;
        let down = (y + 1) % self.height;

        let neighbors = [
            (left, up),
            (x, up),
            (right, up),
            (left, y),
            (right, y),
            (left, down),
            (x, down),
            (right, down),
        ];
        neighbors
            .into_iter()
            .map(|(nx, ny)| u8::from(self.cells[ny * self.width + nx].is_alive()))
            .sum()
    }

    /// Moves the simulation forward exactly one generation.
    ///
    /// Two strictly ordered phases: first every cell's live-neighbor
    /// count is computed against the current state and stored, then
    /// every cell commits its next state from the stored count. The
    /// split guarantees each next state depends only on the previous
    /// generation, never on a sibling's already-updated state.
    pub fn advance(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let count = self.live_neighbors(x, y);
                self.cells[y * self.width + x].set_neighbors(count);
            }
        }
        for cell in &mut self.cells {
            cell.commit();
        }
        self.generation += 1;
    }

    /// Same result as [`advance`](Self::advance), with each phase
    /// parallelized across the coordinate space. The count phase is
    /// fully materialized before any cell commits, so the two-phase
    /// ordering holds.
    pub fn advance_parallel(&mut self) {
        let width = self.width;
        let counts: Vec<u8> = (0..self.cells.len())
            .into_par_iter()
            .map(|i| self.live_neighbors(i % width, i / width))
            .collect();

        self.cells
            .par_iter_mut()
            .zip(counts)
            .for_each(|(cell, count)| {
                cell.set_neighbors(count);
                cell.commit();
            });
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(width: usize, height: usize, alive: &[(usize, usize)]) -> TorusGrid {
        let mut seed = vec![false; width * height];
        for &(x, y) in alive {
            seed[y * width + x] = true;
        }
        TorusGrid::new(width, height, &seed).expect("well-formed test grid")
    }

    fn alive_cells(grid: &TorusGrid) -> Vec<(usize, usize)> {
        grid.states()
            .filter(|&(_, alive)| alive)
            .map(|(pos, _)| pos)
            .collect()
    }

    #[test]
    fn construction_is_row_major() {
        let seed = [true, false, false, false, false, true];
        let grid = TorusGrid::new(3, 2, &seed).unwrap();

        assert_eq!(grid.state(0, 0), Ok(true));
        assert_eq!(grid.state(2, 1), Ok(true));
        assert_eq!(grid.state(1, 0), Ok(false));
        assert_eq!(grid.state(2, 0), Ok(false));
        assert_eq!(grid.state(0, 1), Ok(false));
        assert_eq!(grid.state(1, 1), Ok(false));
    }

    #[test]
    fn every_coordinate_has_exactly_one_cell() {
        let grid = grid_from(5, 7, &[]);

        assert_eq!(grid.states().count(), 5 * 7);
        for y in 0..7 {
            for x in 0..5 {
                assert!(grid.state(x, y).is_ok());
            }
        }
    }

    #[test]
    fn rejects_mismatched_seed_length() {
        let err = TorusGrid::new(4, 4, &[false; 15]).unwrap_err();
        assert_eq!(
            err,
            GridError::SeedLength {
                width: 4,
                height: 4,
                expected: 16,
                actual: 15,
            }
        );
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            TorusGrid::new(0, 4, &[]).unwrap_err(),
            GridError::EmptyDimension { width: 0, height: 4 }
        );
        assert_eq!(
            TorusGrid::new(4, 0, &[]).unwrap_err(),
            GridError::EmptyDimension { width: 4, height: 0 }
        );
    }

    #[test]
    fn out_of_bounds_reads_fail() {
        let grid = grid_from(4, 3, &[]);

        assert_eq!(
            grid.state(4, 0).unwrap_err(),
            GridError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3,
            }
        );
        assert!(grid.state(0, 3).is_err());
        assert!(grid.state(0, 2).is_ok());
    }

    #[test]
    fn generation_counts_advances() {
        let mut grid = grid_from(4, 4, &[]);
        assert_eq!(grid.generation(), 0);

        grid.advance();
        assert_eq!(grid.generation(), 1);
        grid.advance();
        grid.advance_parallel();
        assert_eq!(grid.generation(), 3);
    }

    #[test]
    fn dead_grid_stays_dead() {
        let mut grid = grid_from(6, 6, &[]);
        for _ in 0..5 {
            grid.advance();
        }
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn block_is_a_still_life() {
        let block = [(2, 2), (3, 2), (2, 3), (3, 3)];
        let mut grid = grid_from(6, 6, &block);

        grid.advance();
        assert_eq!(alive_cells(&grid), block);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let vertical = [(3, 2), (3, 3), (3, 4)];
        let mut grid = grid_from(8, 8, &vertical);

        grid.advance();
        assert_eq!(alive_cells(&grid), [(2, 3), (3, 3), (4, 3)]);

        grid.advance();
        assert_eq!(alive_cells(&grid), vertical);
    }

    #[test]
    fn neighbors_wrap_around_corners() {
        // three corner cells are mutual toroidal neighbors of (4, 4);
        // one step closes them into a block wrapped across all four
        // corners, which then holds as a still life
        let mut grid = grid_from(5, 5, &[(0, 0), (4, 0), (0, 4)]);

        grid.advance();
        assert_eq!(alive_cells(&grid), [(0, 0), (4, 0), (0, 4), (4, 4)]);

        grid.advance();
        assert_eq!(alive_cells(&grid), [(0, 0), (4, 0), (0, 4), (4, 4)]);
    }

    #[test]
    fn glider_translates_diagonally() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut grid = grid_from(8, 8, &glider);

        for _ in 0..4 {
            grid.advance();
        }

        let mut shifted: Vec<_> = glider
            .iter()
            .map(|&(x, y)| ((x + 1) % 8, (y + 1) % 8))
            .collect();
        shifted.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(alive_cells(&grid), shifted);
    }

    // an in-place update where each cell commits as soon as it is
    // counted, so later cells see their earlier siblings' new states
    fn single_pass_update(grid: &mut TorusGrid) {
        for y in 0..grid.height {
            for x in 0..grid.width {
                let count = grid.live_neighbors(x, y);
                let cell = &mut grid.cells[y * grid.width + x];
                cell.set_neighbors(count);
                cell.commit();
            }
        }
    }

    #[test]
    fn two_phase_split_is_load_bearing() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut two_phase = grid_from(8, 8, &glider);
        let mut single_pass = two_phase.clone();

        two_phase.advance();
        single_pass_update(&mut single_pass);

        assert_ne!(alive_cells(&two_phase), alive_cells(&single_pass));
    }

    #[test]
    fn parallel_advance_matches_serial() {
        let seed: Vec<bool> = (0..16 * 16).map(|i| i % 7 == 0 || i % 11 == 3).collect();
        let mut serial = TorusGrid::new(16, 16, &seed).unwrap();
        let mut parallel = serial.clone();

        for _ in 0..10 {
            serial.advance();
            parallel.advance_parallel();
            assert_eq!(alive_cells(&serial), alive_cells(&parallel));
        }
        assert_eq!(serial.generation(), parallel.generation());
    }
}
