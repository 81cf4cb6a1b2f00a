//! `OrderedUnionFind` is a disjoint-set structure that always unites into the first argument.
//!
//! Classical union-find exposes its internal representative, an artifact of union-by-rank that
//! can flip between either argument's root on a union. GD2 instead needs a *name* for each
//! cluster that is stable under that artifact: the name a caller observes for a class is always
//! the name the class had under its *first*-argument lineage. This mirrors
//! `dmikurube/dominators-python`'s `OrderedUnionFind`, layered here over [`UnionFind`] the way the
//! teacher layers algorithm-specific bookkeeping over its own `UnionFind`.

use crate::union_find::UnionFind;

/// A union-find whose observable class name is decoupled from the underlying representative.
#[derive(Debug, Clone)]
pub struct OrderedUnionFind {
    uf: UnionFind,
    name: Vec<Option<usize>>,
}

impl OrderedUnionFind {
    /// Create an ordered union-find over `n` singleton classes `{0}, {1}, .., {n - 1}`.
    pub fn new(n: usize) -> Self {
        OrderedUnionFind {
            uf: UnionFind::new(n),
            name: vec![None; n],
        }
    }

    /// Return the observable name of `x`'s class.
    ///
    /// If the underlying representative has not been named yet, it is named after itself.
    pub fn lookup(&mut self, x: usize) -> usize {
        let root = self.uf.find_mut(x);
        *self.name[root].get_or_insert(root)
    }

    /// Unite the classes containing `a` and `b`.
    ///
    /// The merged class's name becomes the name `a`'s class had just before the union;
    /// `b`'s name is overwritten.
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.uf.find_mut(a);
        let root_b = self.uf.find_mut(b);

        let name_a = *self.name[root_a].get_or_insert(root_a);
        self.uf.union(root_a, root_b);
        let merged_root = self.uf.find_mut(root_a);
        self.name[merged_root] = Some(name_a);
    }
}
