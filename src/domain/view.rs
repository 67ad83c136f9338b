/// Read-only view of a grid's current generation.
///
/// Borrows the current buffer only; the scratch buffer is never reachable
/// through it and there is no way to mutate cells.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    width: usize,
    height: usize,
    cells: &'a [bool],
}

impl<'a> GridView<'a> {
    pub(crate) fn new(width: usize, height: usize, cells: &'a [bool]) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Cell at column `i`, row `j`, or `None` outside the grid
    pub fn get(&self, i: usize, j: usize) -> Option<bool> {
        (i < self.width && j < self.height).then(|| self.cells[j * self.width + i])
    }

    /// Out-of-range positions read as dead
    pub fn is_alive(&self, i: usize, j: usize) -> bool {
        self.get(i, j).unwrap_or(false)
    }

    /// Row `j` as a slice indexed by column
    pub fn row(&self, j: usize) -> Option<&'a [bool]> {
        (j < self.height).then(|| &self.cells[j * self.width..(j + 1) * self.width])
    }

    /// Iterate over all cells as `(i, j, alive)`, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + 'a {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &alive)| (idx % width, idx / width, alive))
    }

    /// Positions of alive cells only
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.iter_cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(i, j, _)| (i, j))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Owned snapshot indexed `matrix[i][j]`
    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        (0..self.width)
            .map(|i| (0..self.height).map(|j| self.cells[j * self.width + i]).collect())
            .collect()
    }
}

impl PartialEq for GridView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.cells == other.cells
    }
}

impl Eq for GridView<'_> {}
