use crate::{Grid, GridError, Identity, NeighborCache, RuleInput, RuleSet, StaticityClassifier};

/// One cell of the read path handed to collaborators (rendering, tools).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub identity: Identity,
    /// Flag from the most recent classification. After a tick this still
    /// describes the generation that was evaluated, which is exactly what
    /// an incremental renderer needs: static cells cannot have changed.
    pub is_static: bool,
}

/// Owns the grid and drives it one synchronous generation at a time.
///
/// The only entry point external callers use. Phases within a tick run
/// strictly in order with no overlap: refresh the neighbor cache over the
/// whole grid, classify static cells, evaluate the rest, commit the next
/// generation atomically.
pub struct Simulator {
    grid: Grid,
    cache: NeighborCache,
    staticity: StaticityClassifier,
    rules: RuleSet,
    scratch: Vec<Identity>,
}

impl Simulator {
    /// Creates an all-Inactive simulation with the given rule table.
    pub fn new(rows: usize, cols: usize, rules: RuleSet) -> Self {
        let mut sim = Self {
            grid: Grid::new(rows, cols),
            cache: NeighborCache::new(rows, cols),
            staticity: StaticityClassifier::new(rows, cols),
            rules,
            scratch: Vec::with_capacity(rows * cols),
        };
        sim.refresh_view();
        sim
    }

    /// Advances the simulation one generation.
    ///
    /// Generation N+1 is computed purely from generation N's cached
    /// tables; no rule observes an already-mutated neighbor. The new grid
    /// replaces the old one as a single atomic commit.
    pub fn tick(&mut self) {
        self.refresh_view();

        self.scratch.clear();
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        for r in 0..rows {
            for c in 0..cols {
                let current = self.grid.cell_at(r, c);
                let next = if self.staticity.is_static(r, c) {
                    current
                } else {
                    self.rules.evaluate(RuleInput {
                        identity: current,
                        adjacent: self.cache.adjacent(r, c),
                        diagonal: self.cache.diagonal(r, c),
                        neighbor: self.cache.combined(r, c),
                    })
                };
                self.scratch.push(next);
            }
        }
        self.grid.commit(&mut self.scratch);
    }

    // Caches and flags are tick-scoped; recompute them whenever the
    // committed grid state they describe has been replaced.
    fn refresh_view(&mut self) {
        self.cache.refresh(&self.grid);
        self.staticity.classify(&self.grid, &self.cache);
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Generations committed so far.
    pub fn ticks(&self) -> u64 {
        self.grid.ticks()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Iterates `(row, col, identity, is_static)` over every cell in
    /// row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        (0..rows).flat_map(move |row| {
            (0..cols).map(move |col| CellView {
                row,
                col,
                identity: self.grid.cell_at(row, col),
                is_static: self.staticity.is_static(row, col),
            })
        })
    }

    /// Number of cells the most recent classification marked skippable.
    pub fn static_cells(&self) -> usize {
        self.staticity.flags().iter().filter(|&&f| f).count()
    }

    /// Bulk load; see [`Grid::initialize`]. The grid is unchanged on error.
    pub fn initialize(&mut self, matrix: &[Vec<u8>]) -> Result<(), GridError> {
        self.grid.initialize(matrix)?;
        self.refresh_view();
        Ok(())
    }

    /// Validated single-cell override; see [`Grid::set_cell`].
    pub fn set_cell(&mut self, row: usize, col: usize, code: u8) -> Result<(), GridError> {
        self.grid.set_cell(row, col, code)?;
        self.refresh_view();
        Ok(())
    }

    /// Dense matrix of identity codes; see [`Grid::snapshot`].
    pub fn snapshot(&self) -> Vec<Vec<u8>> {
        self.grid.snapshot()
    }

    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        self.grid.randomize(seed, fill_rate);
        self.refresh_view();
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.refresh_view();
    }
}
