/// Weighted quick-union (disjoint sets) data structure backing grid connectivity
///
/// Union-by-size bounds tree height to O(log m); path halving during `find`
/// flattens traversed paths, so queries are near-constant amortized.
use anyhow::{bail, Result};

pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Create a new UnionFind with m singleton elements
    pub fn new(m: usize) -> Result<Self> {
        if m < 1 {
            bail!("UnionFind needs at least one element, got {m}");
        }
        let parent = (0..m).collect();
        let size = vec![1; m];
        Ok(UnionFind { parent, size })
    }

    /// Number of elements (fixed at construction)
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        // new() rejects m == 0
        false
    }

    fn validate(&self, i: usize) -> Result<()> {
        if i >= self.parent.len() {
            bail!(
                "element {i} out of range for UnionFind of {} elements",
                self.parent.len()
            );
        }
        Ok(())
    }

    /// Find the root of element i, halving the path along the way
    pub fn find(&mut self, mut i: usize) -> Result<usize> {
        self.validate(i)?;
        while self.parent[i] != i {
            // Point i at its grandparent before stepping up
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        Ok(i)
    }

    /// Union the sets containing p and q, attaching the smaller tree's root
    /// under the larger tree's root. No-op if already in the same set.
    pub fn union(&mut self, p: usize, q: usize) -> Result<()> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;

        if root_p == root_q {
            return Ok(());
        }

        // Union by size
        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        Ok(())
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }
}
