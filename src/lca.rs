//! Offline least-common-ancestor queries over the input spanning tree.
//!
//! GD2 only ever needs the LCA of each graph arc's endpoints, and the full set of arcs is known
//! before the dominator computation starts. That makes Tarjan's classical offline LCA algorithm —
//! one pass over a bottom-up tree order, backed by a disjoint-set union whose representatives
//! carry an "ancestor" marker — the natural fit, in the same spirit as the teacher's
//! `lengauer_tarjan` building one ancestor/label array per DFS pass instead of re-deriving
//! ancestry per query.

use crate::union_find::UnionFind;

/// Precomputed answers to a fixed batch of LCA queries over a spanning tree.
#[derive(Debug)]
pub struct LcaOracle {
    answers: Vec<usize>,
}

impl LcaOracle {
    /// Answer every query in `queries` against the tree described by `parents`/`postorder`.
    ///
    /// `postorder[i]` must be a valid bottom-up traversal of `parents` (the verifier guarantees
    /// this before preparation ever constructs an oracle). Construction and answer order depend
    /// only on `postorder` and the query list itself, never on hash-container iteration, so the
    /// result is deterministic across runs.
    pub fn build(parents: &[usize], postorder: &[usize], queries: &[(usize, usize)]) -> Self {
        let n = postorder.len();
        let mut uf = UnionFind::new(n);
        let mut ancestor: Vec<usize> = (0..n).collect();
        let mut colored = vec![false; n];

        // queries_at[v] lists, for every query touching v, the query's other endpoint and index.
        let mut queries_at: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
        for (qi, &(x, y)) in queries.iter().enumerate() {
            queries_at[x].push((y, qi));
            if y != x {
                queries_at[y].push((x, qi));
            }
        }

        let mut answers = vec![0usize; queries.len()];
        for &u in postorder {
            for &(other, qi) in &queries_at[u] {
                if colored[other] || other == u {
                    answers[qi] = ancestor[uf.find(other)];
                }
            }
            colored[u] = true;

            let parent = parents.get(u).copied();
            if let Some(parent) = parent {
                if parent != u {
                    uf.union(u, parent);
                    let root = uf.find_mut(u);
                    ancestor[root] = parent;
                }
            }
        }

        LcaOracle { answers }
    }

    /// The answer to the `i`-th query passed to [`LcaOracle::build`].
    pub fn get(&self, query_index: usize) -> usize {
        self.answers[query_index]
    }

    /// Convenience one-off query, used by tests and by callers outside the hot
    /// preparation path. Rebuilds the offline structure for a single query; batch callers
    /// should use [`LcaOracle::build`] directly instead.
    pub fn single(root: usize, parents: &[usize], postorder: &[usize], a: usize, b: usize) -> usize {
        debug_assert!(root < postorder.len());
        let oracle = LcaOracle::build(parents, postorder, &[(a, b)]);
        oracle.get(0)
    }
}

#[cfg(test)]
mod tests {
    use super::LcaOracle;

    // Tree:
    //        0
    //      / | \
    //     1  2  3
    //    /|     |
    //   4 5     6
    fn sample_tree() -> (Vec<usize>, Vec<usize>) {
        // parents[v] defined for every non-root node; parents[0] is unused (root).
        let parents = vec![0, 0, 0, 0, 1, 1, 3];
        let postorder = vec![4, 5, 1, 2, 6, 3, 0];
        (parents, postorder)
    }

    #[test]
    fn lca_of_siblings_is_shared_parent() {
        let (parents, postorder) = sample_tree();
        assert_eq!(LcaOracle::single(0, &parents, &postorder, 4, 5), 1);
        assert_eq!(LcaOracle::single(0, &parents, &postorder, 1, 2), 0);
        assert_eq!(LcaOracle::single(0, &parents, &postorder, 4, 6), 0);
    }

    #[test]
    fn lca_with_ancestor_is_the_ancestor() {
        let (parents, postorder) = sample_tree();
        assert_eq!(LcaOracle::single(0, &parents, &postorder, 4, 1), 1);
        assert_eq!(LcaOracle::single(0, &parents, &postorder, 6, 0), 0);
    }

    #[test]
    fn lca_of_node_with_itself_is_itself() {
        let (parents, postorder) = sample_tree();
        assert_eq!(LcaOracle::single(0, &parents, &postorder, 5, 5), 5);
    }

    #[test]
    fn batch_queries_answered_independently() {
        let (parents, postorder) = sample_tree();
        let queries = [(4, 5), (1, 2), (6, 4), (2, 2)];
        let oracle = LcaOracle::build(&parents, &postorder, &queries);
        assert_eq!(oracle.get(0), 1);
        assert_eq!(oracle.get(1), 0);
        assert_eq!(oracle.get(2), 0);
        assert_eq!(oracle.get(3), 2);
    }
}
