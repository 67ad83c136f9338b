use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use tracing::{debug, trace};

use super::{GridView, Pattern, rules::next_state};
use crate::error::GridError;

/// Probability of a cell starting alive when none is given
pub const DEFAULT_SEED_PROBABILITY: f64 = 0.5;

/// Grid owns the cell matrix and advances it one generation at a time.
///
/// Two equally sized buffers are kept: one is the current generation, the
/// other is the scratch target of the next `tick`. A tick reads only the
/// current buffer, writes only the scratch buffer, then flips `current` so
/// advancing never copies cells.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    buffers: [Vec<bool>; 2],
    /// Index into `buffers` of the current generation
    current: usize,
    generation: u64,
}

impl Grid {
    /// Create a grid seeded with a 50/50 chance per cell from the
    /// thread-local entropy source
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::with_probability(width, height, DEFAULT_SEED_PROBABILITY)
    }

    /// Create a grid where each cell is alive with `probability`
    pub fn with_probability(width: usize, height: usize, probability: f64) -> Result<Self, GridError> {
        Self::with_rng(width, height, probability, &mut rand::rng())
    }

    /// Create a reproducible grid from a numeric seed
    pub fn seeded(width: usize, height: usize, probability: f64, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(width, height, probability, &mut StdRng::seed_from_u64(seed))
    }

    /// Create a grid drawing every cell from the supplied random source.
    ///
    /// Cells are drawn row by row, so the same source state always yields
    /// the same grid.
    pub fn with_rng<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        validate_dimensions(width, height)?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability(probability));
        }

        let cells = (0..width * height)
            .map(|_| rng.random_bool(probability))
            .collect();

        debug!(width, height, probability, "seeded grid");
        Ok(Self::from_parts(width, height, cells))
    }

    /// Create a grid from an explicit row-major buffer (`cells[j * width + i]`)
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        validate_dimensions(width, height)?;
        if cells.len() != width * height {
            return Err(GridError::CellCountMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(Self::from_parts(width, height, cells))
    }

    /// Create an otherwise dead grid with `pattern`'s top-left corner at
    /// `origin`. Pattern cells falling outside the grid are dropped.
    pub fn from_pattern(
        width: usize,
        height: usize,
        pattern: &Pattern,
        origin: (usize, usize),
    ) -> Result<Self, GridError> {
        validate_dimensions(width, height)?;
        let mut cells = vec![false; width * height];
        pattern
            .cells_at(origin.0, origin.1)
            .filter(|&(i, j)| i < width && j < height)
            .for_each(|(i, j)| cells[j * width + i] = true);

        debug!(width, height, pattern = pattern.name, ?origin, "placed pattern");
        Ok(Self::from_parts(width, height, cells))
    }

    fn from_parts(width: usize, height: usize, cells: Vec<bool>) -> Self {
        Self {
            width,
            height,
            buffers: [cells, vec![false; width * height]],
            current: 0,
            generation: 0,
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of ticks applied since construction
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the current generation
    pub fn current_state(&self) -> GridView<'_> {
        GridView::new(self.width, self.height, &self.buffers[self.current])
    }

    /// Count total alive cells
    pub fn population(&self) -> usize {
        self.current_state().population()
    }

    /// Number of alive cells in the Moore neighborhood of `(i, j)`.
    /// Positions off the grid are skipped, never wrapped or clamped.
    pub fn alive_neighbors(&self, i: usize, j: usize) -> u8 {
        count_alive_moore_neighbors(&self.buffers[self.current], self.width, self.height, i, j)
    }

    /// How many of the 8 Moore neighbor positions of `(i, j)` lie on the grid
    pub fn in_bounds_neighbor_count(&self, i: usize, j: usize) -> usize {
        moore_neighbors(self.width, self.height, i, j).count()
    }

    /// Advance exactly one generation
    pub fn tick(&mut self) {
        let (width, height) = self.dimensions();
        let (current, scratch) = self.split_buffers();

        for j in 0..height {
            for i in 0..width {
                let idx = j * width + i;
                let neighbors = count_alive_moore_neighbors(current, width, height, i, j);
                scratch[idx] = next_state(current[idx], neighbors);
            }
        }

        self.swap_buffers();
    }

    /// Advance exactly one generation, computing rows in parallel.
    /// Produces the same result as [`Grid::tick`].
    pub fn tick_parallel(&mut self) {
        let (width, height) = self.dimensions();
        let (current, scratch) = self.split_buffers();

        scratch
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(j, row)| {
                for (i, cell) in row.iter_mut().enumerate() {
                    let neighbors = count_alive_moore_neighbors(current, width, height, i, j);
                    *cell = next_state(current[j * width + i], neighbors);
                }
            });

        self.swap_buffers();
    }

    /// Advance `n` generations
    pub fn tick_n(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Current buffer for reading, scratch buffer for writing
    fn split_buffers(&mut self) -> (&[bool], &mut [bool]) {
        let [first, second] = &mut self.buffers;
        if self.current == 0 {
            (first.as_slice(), second.as_mut_slice())
        } else {
            (second.as_slice(), first.as_mut_slice())
        }
    }

    fn swap_buffers(&mut self) {
        self.current ^= 1;
        self.generation += 1;
        trace!(generation = self.generation, population = self.population(), "tick");
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.current_state();
        for j in 0..self.height {
            let row = view.row(j).unwrap_or_default();
            let line: String = row.iter().map(|&alive| if alive { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimension { width, height });
    }
    Ok(())
}

/// On-grid positions of the Moore neighborhood of `(i, j)`
fn moore_neighbors(
    width: usize,
    height: usize,
    i: usize,
    j: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (-1isize..=1)
        .flat_map(|dj| (-1isize..=1).map(move |di| (di, dj)))
        .filter(|&(di, dj)| di != 0 || dj != 0)
        .filter_map(move |(di, dj)| {
            let ni = i.checked_add_signed(di)?;
            let nj = j.checked_add_signed(dj)?;
            (ni < width && nj < height).then_some((ni, nj))
        })
}

fn count_alive_moore_neighbors(cells: &[bool], width: usize, height: usize, i: usize, j: usize) -> u8 {
    moore_neighbors(width, height, i, j)
        .filter(|&(ni, nj)| cells[nj * width + ni])
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand_chacha::ChaCha8Rng;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut cells = vec![false; width * height];
        for &(i, j) in alive {
            cells[j * width + i] = true;
        }
        Grid::from_cells(width, height, cells).unwrap()
    }

    fn alive(grid: &Grid) -> Vec<(usize, usize)> {
        grid.current_state().alive_cells().collect()
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimension { width: 0, height: 5 }
        );
        assert_eq!(
            Grid::new(5, 0).unwrap_err(),
            GridError::InvalidDimension { width: 5, height: 0 }
        );
    }

    #[test]
    fn test_rejects_bad_probability() {
        for p in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Grid::with_probability(4, 4, p),
                Err(GridError::InvalidProbability(_))
            ));
        }
    }

    #[test]
    fn test_dimension_checked_before_probability() {
        assert!(matches!(
            Grid::with_probability(0, 4, 2.0),
            Err(GridError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_seeding_extremes() {
        let dead = Grid::with_probability(12, 7, 0.0).unwrap();
        assert_eq!(dead.population(), 0);

        let full = Grid::with_probability(12, 7, 1.0).unwrap();
        assert_eq!(full.population(), 12 * 7);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        let first = Grid::with_rng(30, 20, 0.5, &mut a).unwrap();
        let second = Grid::with_rng(30, 20, 0.5, &mut b).unwrap();
        assert_eq!(first.current_state(), second.current_state());

        assert_eq!(
            Grid::seeded(30, 20, 0.5, 99).unwrap().current_state(),
            Grid::seeded(30, 20, 0.5, 99).unwrap().current_state()
        );
    }

    #[test]
    fn test_from_cells_length_mismatch() {
        assert_eq!(
            Grid::from_cells(3, 3, vec![false; 8]).unwrap_err(),
            GridError::CellCountMismatch { expected: 9, actual: 8 }
        );
    }

    #[test]
    fn test_corner_has_three_neighbor_positions() {
        let grid = grid_with(5, 5, &[(0, 0)]);
        assert_eq!(grid.in_bounds_neighbor_count(0, 0), 3);
        assert_eq!(grid.in_bounds_neighbor_count(4, 4), 3);
        assert_eq!(grid.in_bounds_neighbor_count(2, 0), 5);
        assert_eq!(grid.in_bounds_neighbor_count(2, 2), 8);
    }

    #[test]
    fn test_edges_do_not_wrap_or_clamp() {
        // Full 3x3: clamping would count the corner itself as a neighbor,
        // wrapping would give every cell 8.
        let grid = Grid::with_probability(3, 3, 1.0).unwrap();
        assert_eq!(grid.alive_neighbors(0, 0), 3);
        assert_eq!(grid.alive_neighbors(1, 0), 5);
        assert_eq!(grid.alive_neighbors(1, 1), 8);

        // Cells on the far edge must not see the opposite side
        let grid = grid_with(4, 4, &[(0, 1), (0, 2)]);
        assert_eq!(grid.alive_neighbors(3, 1), 0);
        assert_eq!(grid.alive_neighbors(1, 1), 2);
    }

    #[test]
    fn test_lone_corner_cell_dies() {
        let mut grid = grid_with(2, 2, &[(0, 0)]);
        grid.tick();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_full_corner_block_survives() {
        // Each cell of a full 2x2 grid has exactly 3 in-bounds neighbors
        let mut grid = Grid::with_probability(2, 2, 1.0).unwrap();
        grid.tick();
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn test_all_dead_stays_dead() {
        for (w, h) in [(1, 1), (3, 3), (17, 5)] {
            let mut grid = Grid::with_probability(w, h, 0.0).unwrap();
            grid.tick_n(3);
            assert_eq!(grid.population(), 0);
        }
    }

    #[test]
    fn test_block_still_life() {
        let mut grid = Grid::from_pattern(6, 6, &presets::block(), (2, 2)).unwrap();
        let before = alive(&grid);

        for _ in 0..5 {
            grid.tick();
            assert_eq!(alive(&grid), before);
        }
    }

    #[test]
    fn test_blinker_evolution() {
        // Updating in place would let the births above the row feed into
        // the row itself within the same tick.
        let mut grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        // After one generation, should be vertical
        grid.tick();
        assert_eq!(alive(&grid), vec![(2, 1), (2, 2), (2, 3)]);

        // After two generations, back to horizontal
        grid.tick();
        assert_eq!(alive(&grid), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_generation_counter() {
        let mut grid = Grid::with_probability(4, 4, 0.5).unwrap();
        assert_eq!(grid.generation(), 0);
        grid.tick();
        grid.tick_parallel();
        grid.tick_n(3);
        assert_eq!(grid.generation(), 5);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut serial = Grid::with_rng(37, 23, 0.4, &mut rng).unwrap();
        let mut parallel = serial.clone();

        for _ in 0..10 {
            serial.tick();
            parallel.tick_parallel();
            assert_eq!(serial.current_state(), parallel.current_state());
        }
    }

    #[test]
    fn test_tick_is_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut a = Grid::with_rng(20, 20, 0.5, &mut rng).unwrap();
        let mut b = a.clone();
        a.tick();
        b.tick();
        assert_eq!(a.current_state(), b.current_state());
    }

    #[test]
    fn test_display() {
        let grid = grid_with(3, 2, &[(0, 0), (2, 1)]);
        assert_eq!(grid.to_string(), "#..\n..#\n");
    }
}
