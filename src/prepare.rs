//! Builds the per-node in-degree totals and LCA-bucketed arc lists that the GD2 engine consumes.

use tracing::debug;

use crate::lca::LcaOracle;

/// Inputs the GD2 engine needs beyond the normalized edges themselves.
pub struct Prepared {
    /// `total[v]`: in-degree of `v` in the normalized edge set.
    pub total: Vec<usize>,
    /// `arcs[u]`: normalized arcs whose LCA is `u`.
    pub arcs: Vec<Vec<(usize, usize)>>,
}

/// Computes in-degrees and buckets each normalized arc under its LCA.
///
/// Arcs are bucketed by LCA because, by induction over the post-order, the LCA is the earliest
/// point at which both of an arc's endpoints' clusters are simultaneously ancestors of everything
/// processed so far.
pub fn prepare(parents: &[usize], postorder: &[usize], edges: &[(usize, usize)]) -> Prepared {
    let n = parents.len();
    let mut total = vec![0usize; n];
    for &(_, dst) in edges {
        total[dst] += 1;
    }

    let lca = LcaOracle::build(parents, postorder, edges);
    let mut arcs: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
    for (i, &(src, dst)) in edges.iter().enumerate() {
        arcs[lca.get(i)].push((src, dst));
    }

    debug!(nodes = n, edges = edges.len(), "prepared totals and arc buckets");
    Prepared { total, arcs }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_arcs_at_their_lca() {
        // Diamond: 0 -> {1, 2} -> 3, parents 1:0, 2:0, 3:1.
        let parents = vec![0, 0, 0, 1];
        let postorder = vec![3, 1, 2, 0];
        let edges = vec![(0, 1), (0, 2), (1, 3), (2, 3)];

        let prepared = prepare(&parents, &postorder, &edges);
        assert_eq!(prepared.total, vec![0, 1, 1, 2]);

        // (1, 3) has LCA 1; (2, 3) has LCA 0 (2 and 3's nearest shared ancestor); the two
        // "entry" arcs (0,1) and (0,2) have LCA 0 as well.
        assert_eq!(prepared.arcs[1], vec![(1, 3)]);
        let mut at_root = prepared.arcs[0].clone();
        at_root.sort_unstable();
        assert_eq!(at_root, vec![(0, 1), (0, 2), (2, 3)]);
        assert!(prepared.arcs[2].is_empty());
        assert!(prepared.arcs[3].is_empty());
    }
}
