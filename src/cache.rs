use crate::{Grid, IdentityCounts};

/// Per-tick neighbor statistics for every cell.
///
/// [`refresh`](Self::refresh) recomputes the whole grid before anything
/// reads the tables, so rule evaluation always sees one coherent snapshot
/// of the previous committed generation. Tables are valid only for the
/// grid state they were computed from (`source_tick`).
pub struct NeighborCache {
    rows: usize,
    cols: usize,
    adjacent: Vec<IdentityCounts>,
    diagonal: Vec<IdentityCounts>,
    combined: Vec<IdentityCounts>,
    source_tick: u64,
}

impl NeighborCache {
    pub fn new(rows: usize, cols: usize) -> Self {
        let size = rows * cols;
        Self {
            rows,
            cols,
            adjacent: vec![IdentityCounts::default(); size],
            diagonal: vec![IdentityCounts::default(); size],
            combined: vec![IdentityCounts::default(); size],
            source_tick: 0,
        }
    }

    /// Recomputes every cell's tables from the committed grid state.
    pub fn refresh(&mut self, grid: &Grid) {
        assert_eq!((self.rows, self.cols), (grid.rows(), grid.cols()));
        for r in 0..self.rows {
            let r1 = if r == 0 { self.rows - 1 } else { r - 1 };
            let r2 = if r == self.rows - 1 { 0 } else { r + 1 };
            for c in 0..self.cols {
                let c1 = if c == 0 { self.cols - 1 } else { c - 1 };
                let c2 = if c == self.cols - 1 { 0 } else { c + 1 };

                let mut adjacent = IdentityCounts::default();
                adjacent.add(grid.cell_at(r1, c));
                adjacent.add(grid.cell_at(r2, c));
                adjacent.add(grid.cell_at(r, c1));
                adjacent.add(grid.cell_at(r, c2));

                let mut diagonal = IdentityCounts::default();
                diagonal.add(grid.cell_at(r1, c1));
                diagonal.add(grid.cell_at(r1, c2));
                diagonal.add(grid.cell_at(r2, c1));
                diagonal.add(grid.cell_at(r2, c2));

                let i = r * self.cols + c;
                self.combined[i] = adjacent.merged(&diagonal);
                self.adjacent[i] = adjacent;
                self.diagonal[i] = diagonal;
            }
        }
        self.source_tick = grid.ticks();
    }

    /// Tick of the grid state the tables were computed from.
    pub fn source_tick(&self) -> u64 {
        self.source_tick
    }

    /// Orthogonal neighbors (N/S/E/W), toroidally wrapped.
    pub fn adjacent(&self, row: usize, col: usize) -> &IdentityCounts {
        &self.adjacent[row * self.cols + col]
    }

    /// Corner neighbors (NE/NW/SE/SW), toroidally wrapped.
    pub fn diagonal(&self, row: usize, col: usize) -> &IdentityCounts {
        &self.diagonal[row * self.cols + col]
    }

    /// Elementwise sum of the adjacent and diagonal tables.
    pub fn combined(&self, row: usize, col: usize) -> &IdentityCounts {
        &self.combined[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Identity;

    #[test]
    fn counts_wrap_around_edges() {
        let mut grid = Grid::new(4, 4);
        grid.set_cell(0, 0, 1).unwrap();

        let mut cache = NeighborCache::new(4, 4);
        cache.refresh(&grid);

        // (0, 0) is the east neighbor of (0, 3) and the corner neighbor
        // of (3, 3) across the seam.
        assert_eq!(cache.adjacent(0, 3).count(Identity::Live), 1);
        assert_eq!(cache.diagonal(3, 3).count(Identity::Live), 1);
        assert_eq!(cache.combined(3, 3).count(Identity::Live), 1);
        assert_eq!(cache.diagonal(0, 3).count(Identity::Live), 0);
    }

    #[test]
    fn tables_always_cover_eight_neighbors() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(1, 1, 2).unwrap();

        let mut cache = NeighborCache::new(3, 3);
        cache.refresh(&grid);

        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(cache.adjacent(r, c).total(), 4);
                assert_eq!(cache.diagonal(r, c).total(), 4);
                assert_eq!(cache.combined(r, c).total(), 8);
            }
        }
        assert_eq!(cache.combined(0, 0).count(Identity::Fire), 1);
        assert_eq!(cache.combined(1, 1).count(Identity::Fire), 0);
    }
}
