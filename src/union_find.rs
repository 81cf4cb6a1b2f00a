//! `UnionFind` is a disjoint-set data structure.

use std::cmp::Ordering;

/// `UnionFind` is a disjoint-set data structure. It tracks set membership of *n* elements
/// indexed from *0* to *n - 1*, where *n* is fixed at construction.
///
/// <http://en.wikipedia.org/wiki/Disjoint-set_data_structure>
///
/// Too awesome not to quote:
///
/// "The amortized time per operation is **O(α(n))** where **α(n)** is the
/// inverse of **f(x) = A(x, x)** with **A** being the extremely fast-growing Ackermann function."
#[derive(Debug, Clone)]
pub struct UnionFind {
    // For element at index *i*, store the index of its parent; the representative itself
    // stores its own index. This forms equivalence classes which are the disjoint sets, each
    // with a unique representative.
    parent: Vec<usize>,
    // The rank corresponds roughly to the depth of the treeset.
    rank: Vec<u8>,
}

impl UnionFind {
    /// Create a new `UnionFind` of `n` disjoint sets, `{0}, {1}, .., {n - 1}`.
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements tracked by this structure.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Return the representative for `x`.
    ///
    /// **Panics** if `x` is out of bounds.
    pub fn find(&self, x: usize) -> usize {
        let mut x = x;
        loop {
            let xparent = self.parent[x];
            if xparent == x {
                return x;
            }
            x = xparent;
        }
    }

    /// Return the representative for `x`.
    ///
    /// Write back the found representative, flattening the internal
    /// datastructure in the process and quickening future lookups.
    ///
    /// **Panics** if `x` is out of bounds.
    pub fn find_mut(&mut self, x: usize) -> usize {
        let mut x = x;
        let mut parent = self.parent[x];
        while parent != x {
            let grandparent = self.parent[parent];
            self.parent[x] = grandparent;
            x = parent;
            parent = grandparent;
        }
        x
    }

    /// Returns `true` if the given elements belong to the same set, and returns
    /// `false` otherwise.
    pub fn equiv(&self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Unite the two sets containing `x` and `y` using union-by-rank.
    ///
    /// If the ranks are equal, `x`'s set wins and becomes the representative of the
    /// merged set (its rank increases by one).
    ///
    /// Return `false` if the sets were already the same, `true` if they were unified.
    ///
    /// **Panics** if `x` or `y` is out of bounds.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        if x == y {
            return false;
        }
        let xrep = self.find_mut(x);
        let yrep = self.find_mut(y);

        if xrep == yrep {
            return false;
        }

        match self.rank[xrep].cmp(&self.rank[yrep]) {
            Ordering::Greater => self.parent[yrep] = xrep,
            Ordering::Less => self.parent[xrep] = yrep,
            Ordering::Equal => {
                self.parent[yrep] = xrep;
                self.rank[xrep] += 1;
            }
        }
        true
    }

    /// Return a vector mapping each element to its representative.
    pub fn into_labeling(mut self) -> Vec<usize> {
        for ix in 0..self.parent.len() {
            let k = self.parent[ix];
            let rep = self.find_mut(k);
            self.parent[ix] = rep;
        }
        self.parent
    }
}
