/// n-by-n site percolation grid
///
/// Sites are 1-indexed (row, col) in [1,n]x[1,n] and start blocked. Opening a
/// site merges it with its open orthogonal neighbors in a weighted quick-union
/// structure over N*N + 2 elements: the N*N cells plus two virtual reservoir
/// nodes. The virtual top (id 0) is pre-merged with every row-1 cell and the
/// virtual bottom (id N*N + 1) with every row-n cell, so `percolates` is a
/// single connectivity query instead of a grid scan.
///
/// Fullness queries go through a second structure that carries the same
/// unions minus the bottom-reservoir merges. Querying the shared structure
/// would report bottom-connected sites as full once the system percolates
/// (top and bottom share a root through the percolating path); the top-only
/// structure never sees that shortcut, so `is_full` is free of that backwash.
use anyhow::{bail, Result};

use crate::union_find::UnionFind;

/// Element id of the virtual top reservoir
const TOP: usize = 0;

pub struct Percolation {
    n: usize,
    /// (n+1)x(n+1) so (row, col) indexes directly; row/col 0 unused
    open: Vec<Vec<bool>>,
    open_count: usize,
    /// Shared structure with both reservoirs, answers `percolates`
    uf: UnionFind,
    /// Top-reservoir-only structure, answers `is_full` without backwash
    uf_top: UnionFind,
}

impl Percolation {
    /// Create an n-by-n grid with all sites blocked
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            bail!("grid size must be at least 1");
        }

        let cells = n * n;
        let mut uf = UnionFind::new(cells + 2)?;
        let mut uf_top = UnionFind::new(cells + 2)?;

        // Merge the virtual top with every row-1 cell
        for col in 1..=n {
            uf.union(TOP, col)?;
            uf_top.union(TOP, col)?;
        }
        // Merge the virtual bottom with every row-n cell (shared structure only)
        for id in cells - n + 1..=cells {
            uf.union(cells + 1, id)?;
        }

        Ok(Percolation {
            n,
            open: vec![vec![false; n + 1]; n + 1],
            open_count: 0,
            uf,
            uf_top,
        })
    }

    /// Grid dimension
    pub fn size(&self) -> usize {
        self.n
    }

    /// Element id of the virtual bottom reservoir
    fn bottom(&self) -> usize {
        self.n * self.n + 1
    }

    /// Map a 1-indexed (row, col) to its element id in [1, n*n]
    fn site_id(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + col
    }

    fn validate(&self, row: usize, col: usize) -> Result<()> {
        if row < 1 || row > self.n || col < 1 || col > self.n {
            bail!(
                "site ({row}, {col}) out of range for {n}x{n} grid",
                n = self.n
            );
        }
        Ok(())
    }

    /// Open the site (row, col) if it is not open already, merging it with
    /// each open orthogonal neighbor
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.validate(row, col)?;

        if self.open[row][col] {
            return Ok(());
        }
        self.open[row][col] = true;
        self.open_count += 1;

        let site = self.site_id(row, col);
        let neighbors = [
            (row > 1, row - 1, col),
            (row < self.n, row + 1, col),
            (col > 1, row, col - 1),
            (col < self.n, row, col + 1),
        ];
        for (in_bounds, nrow, ncol) in neighbors {
            if in_bounds && self.open[nrow][ncol] {
                let neighbor = self.site_id(nrow, ncol);
                self.uf.union(site, neighbor)?;
                self.uf_top.union(site, neighbor)?;
            }
        }
        Ok(())
    }

    /// Is the site (row, col) open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        Ok(self.open[row][col])
    }

    /// Is the site (row, col) connected to the top reservoir through open sites?
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;

        if !self.open[row][col] {
            return Ok(false);
        }
        if row == 1 {
            return Ok(true);
        }
        let site = self.site_id(row, col);
        self.uf_top.connected(site, TOP)
    }

    /// Number of open sites
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Does an open path connect the top row to the bottom row?
    pub fn percolates(&mut self) -> Result<bool> {
        self.uf.connected(TOP, self.bottom())
    }
}
