use crate::{Grid, Identity, NeighborCache};

/// Per-cell skip flags for the current tick.
///
/// A cell is static when it is Inactive and its combined neighbor table
/// contains only the Inactive key, i.e. the cell and all eight neighbors
/// are Inactive. Static cells are skipped during rule evaluation.
///
/// Standing invariant: this pruning is sound only while no rule in the
/// active set can move an Inactive cell out of Inactive from an
/// all-Inactive neighborhood. Re-validate whenever a rule is added; a
/// rule that breaks it must be excluded from pruning eligibility.
pub struct StaticityClassifier {
    rows: usize,
    cols: usize,
    flags: Vec<bool>,
}

impl StaticityClassifier {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            flags: vec![false; rows * cols],
        }
    }

    /// Derives skip flags from the cache. A pure function of grid and
    /// cache, so repeated calls without an intervening mutation yield
    /// identical flags.
    pub fn classify(&mut self, grid: &Grid, cache: &NeighborCache) {
        for r in 0..self.rows {
            for c in 0..self.cols {
                self.flags[r * self.cols + c] = grid.cell_at(r, c) == Identity::Inactive
                    && cache.combined(r, c).only_inactive();
            }
        }
    }

    pub fn is_static(&self, row: usize, col: usize) -> bool {
        self.flags[row * self.cols + col]
    }

    /// Row-major view of all flags.
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_and_its_neighborhood_are_not_static() {
        let mut grid = Grid::new(8, 8);
        grid.set_cell(3, 3, 1).unwrap();

        let mut cache = NeighborCache::new(8, 8);
        cache.refresh(&grid);
        let mut classifier = StaticityClassifier::new(8, 8);
        classifier.classify(&grid, &cache);

        assert!(!classifier.is_static(3, 3));
        assert!(!classifier.is_static(2, 2));
        assert!(!classifier.is_static(4, 3));
        assert!(classifier.is_static(0, 0));
        assert!(classifier.is_static(3, 6));
    }

    #[test]
    fn classification_is_idempotent() {
        let mut grid = Grid::new(8, 8);
        grid.set_cell(3, 3, 1).unwrap();
        grid.set_cell(6, 1, 3).unwrap();

        let mut cache = NeighborCache::new(8, 8);
        cache.refresh(&grid);
        let mut classifier = StaticityClassifier::new(8, 8);

        classifier.classify(&grid, &cache);
        let first = classifier.flags().to_vec();
        classifier.classify(&grid, &cache);
        assert_eq!(first, classifier.flags());
    }
}
