//! Disjoint-set forest with path compression and union by rank.
//!
//! A fresh [`DisjointSet`] is created by every algorithm invocation; nothing in
//! this crate keeps partition state between calls.
//!
//! `find` is iterative: one pass walks to the root, a second pass repoints every
//! visited node directly at it. Long parent chains cannot overflow the stack.

use crate::error::{Error, Result};

/// Partition of `[0, n)` into disjoint components.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// `n` singleton components (make-set for every element).
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// `true` if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of components currently in the partition.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Split everything back into singletons.
    pub fn reset(&mut self) {
        for (i, p) in self.parent.iter_mut().enumerate() {
            *p = i;
        }
        self.rank.fill(0);
        self.components = self.parent.len();
    }

    /// Representative of `x`'s component.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`] if `x >= len()`.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.root(x))
    }

    /// Merge the components of `x` and `y`. Returns `false` if they were
    /// already the same component.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`] if either operand is out of range.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.merge(x, y))
    }

    /// `true` if `x` and `y` are in the same component.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`] if either operand is out of range.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.same(x, y))
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(Error::InvalidIndex {
                index: x,
                len: self.parent.len(),
            })
        }
    }

    // Unchecked variants for callers whose indices come from a validated `Graph`.

    pub(crate) fn root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    pub(crate) fn same(&mut self, x: usize, y: usize) -> bool {
        self.root(x) == self.root(y)
    }

    pub(crate) fn merge(&mut self, x: usize, y: usize) -> bool {
        let rx = self.root(x);
        let ry = self.root(y);
        if rx == ry {
            return false;
        }

        // Lower rank goes under higher; on a tie `y`'s root goes under `x`'s.
        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        self.components -= 1;
        true
    }
}
