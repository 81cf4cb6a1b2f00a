//! Compute the immediate dominator of every node reachable from a root, via the disjoint-set-union
//! based "GD, Version 2" algorithm of Fraczak, Georgiadis, Miller, and Tarjan
//! ("Finding Dominators via Disjoint Set Union", arXiv:1310.2118).
//!
//! # The Dominance Relation
//!
//! In a directed graph with a root node **R**, a node **A** is said to *dominate* a node **B**
//! iff every path from **R** to **B** contains **A**. The node **A** is the *immediate
//! dominator* of **B** iff it strictly dominates **B** and there is no **C** with **A**
//! dominating **C** and **C** dominating **B**.
//!
//! The public [`Dominators`] wrapper mirrors the teacher's `petgraph::algo::dominators::Dominators`
//! API shape (`root`, `immediate_dominator`, iteration over dominators and dominated-by sets),
//! specialized from a generic `N: Copy + Eq + Hash` node type to the plain `[0, N)` node indices
//! this system always uses.
//!
//! # A precondition [`verify_spanning_tree`] cannot check
//!
//! Like Lengauer-Tarjan and Semi-NCA, GD2 assumes `parents`/`postorder` describe a tree an actual
//! depth-first search of `edges` could produce: every non-tree edge must be a forward edge
//! (ancestor to descendant) or a back edge (descendant to ancestor), never a *cross* edge between
//! two branches that are neither. Whether a given cross edge is consistent with the supplied
//! traversal depends on the order a DFS would have visited sibling subtrees in — information the
//! tree and postorder alone don't carry, and which [`verify_spanning_tree`] has no way to recover
//! (constructing the spanning tree is explicitly out of scope; it is always an input). Feeding GD2
//! a tree/postorder/edges combination no DFS could have produced is not rejected up front; it can
//! silently produce a wrong `idom` for nodes pulled into the wrong cluster by the errant cross
//! edge.

use error_stack::{Report, Result};
use tracing::{debug, debug_span, error};

use crate::error::{DomError, InvariantKind};
use crate::ordered_union_find::OrderedUnionFind;
use crate::prepare::{prepare, Prepared};
use crate::snca;
use crate::verify::verify_spanning_tree;

/// Knobs for [`compute`], analogous to the small behavioral toggles the teacher's algorithm
/// structs carry alongside the graph itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Run the independent Semi-NCA computation (see [`crate::snca`]) after GD2 and return an
    /// error if the two disagree. Intended for tests and paranoid callers; doubles the work of a
    /// call, and requires `preorder` to be supplied.
    pub cross_check: bool,
    /// Treat a missing `preorder` input as an error instead of simply skipping the pre-order
    /// consistency check (and, if `cross_check` is set, the Semi-NCA pass).
    pub require_preorder: bool,
}

/// The dominance relation for a graph and root, computed by [`compute`].
#[derive(Debug, Clone)]
pub struct Dominators {
    root: usize,
    idom: Vec<usize>,
}

impl Dominators {
    /// Build a `Dominators` directly from a precomputed `idom` array. Used by [`crate::snca`] to
    /// wrap its result in the same public shape GD2 returns.
    pub(crate) fn from_idom(root: usize, idom: Vec<usize>) -> Self {
        Dominators { root, idom }
    }

    /// The root node these dominance relations were computed for.
    pub fn root(&self) -> usize {
        self.root
    }

    /// The number of nodes covered (`N`).
    pub fn len(&self) -> usize {
        self.idom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idom.is_empty()
    }

    /// The immediate dominator of `node`.
    ///
    /// Returns `None` for the root itself (which has no immediate dominator) and for any node
    /// outside `[0, N)`.
    pub fn immediate_dominator(&self, node: usize) -> Option<usize> {
        if node == self.root {
            None
        } else {
            self.idom.get(node).copied()
        }
    }

    /// Iterate over `node`'s strict dominators, nearest first.
    pub fn strict_dominators(&self, node: usize) -> Option<DominatorsIter<'_>> {
        if node < self.idom.len() {
            Some(DominatorsIter {
                dominators: self,
                node: self.immediate_dominator(node),
            })
        } else {
            None
        }
    }

    /// Iterate over all of `node`'s dominators, including `node` itself, nearest first.
    pub fn dominators(&self, node: usize) -> Option<DominatorsIter<'_>> {
        if node < self.idom.len() {
            Some(DominatorsIter {
                dominators: self,
                node: Some(node),
            })
        } else {
            None
        }
    }

    /// Iterate over every node immediately dominated by `node` (not including `node` itself).
    pub fn immediately_dominated_by(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.idom
            .iter()
            .enumerate()
            .filter(move |&(dominated, &dominator)| dominator == node && dominated != node)
            .map(|(dominated, _)| dominated)
    }

    /// The raw `idom` vector; `idom[root] == root`.
    pub fn as_idom_slice(&self) -> &[usize] {
        &self.idom
    }
}

/// Iterator over a node's dominators, from nearest to the root.
#[derive(Debug, Clone)]
pub struct DominatorsIter<'a> {
    dominators: &'a Dominators,
    node: Option<usize>,
}

impl<'a> Iterator for DominatorsIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let next = self.node.take()?;
        self.node = self.dominators.immediate_dominator(next);
        Some(next)
    }
}

/// Verify, prepare, and run GD2 over the given spanning tree and edge set.
///
/// `parents` must have length `N = postorder.len()`, with `parents[root]` conventionally set to
/// `root` itself (its value is never read). See the module documentation for the dominance
/// relation this computes.
pub fn compute(
    root: usize,
    edges: &[(usize, usize)],
    parents: &[usize],
    postorder: &[usize],
    preorder: Option<&[usize]>,
    config: Config,
) -> Result<Dominators, DomError> {
    if config.require_preorder && preorder.is_none() {
        return Err(Report::new(DomError::MissingPreorder));
    }

    let normalized = {
        let _span = debug_span!("verify").entered();
        verify_spanning_tree(root, edges, parents, postorder, preorder)?
    };

    compute_normalized(root, &normalized, parents, postorder, preorder, config)
}

/// Like [`compute`], but skips `verify_spanning_tree` — for callers that already hold a
/// normalized edge list from a prior call (e.g. the CLI, which verifies once up front to produce
/// the edge set it also renders).
///
/// `edges` must already be normalized (no self-loops, at most one arc per ordered pair) and
/// consistent with `parents`/`postorder`/`preorder`; passing unverified input here skips the
/// checks `compute` would have applied and may panic or silently misbehave.
pub fn compute_normalized(
    root: usize,
    edges: &[(usize, usize)],
    parents: &[usize],
    postorder: &[usize],
    preorder: Option<&[usize]>,
    config: Config,
) -> Result<Dominators, DomError> {
    if config.require_preorder && preorder.is_none() {
        return Err(Report::new(DomError::MissingPreorder));
    }

    let Prepared { total, arcs } = {
        let _span = debug_span!("prepare").entered();
        prepare(parents, postorder, edges)
    };

    let idom = {
        let _span = debug_span!("gd2").entered();
        run_gd2(root, parents, postorder, total, arcs)?
    };

    let dominators = Dominators { root, idom };

    if config.cross_check {
        let alt = snca::compute(root, edges, parents, postorder, preorder)?;
        if alt.as_idom_slice() != dominators.as_idom_slice() {
            error!("GD2 and Semi-NCA disagree on immediate dominators");
            return Err(Report::new(DomError::InternalInvariant(
                InvariantKind::CrossCheckDisagreement,
                root,
            )));
        }
    }

    Ok(dominators)
}

/// The GD2 main loop described in the module documentation: process nodes in post-order,
/// maintaining `out_node`, `in_node`, `same`, `total`, and `added` per the three-phase cycle.
fn run_gd2(
    root: usize,
    parents: &[usize],
    postorder: &[usize],
    mut total: Vec<usize>,
    mut arcs: Vec<Vec<(usize, usize)>>,
) -> Result<Vec<usize>, DomError> {
    let n = parents.len();
    let mut d = vec![usize::MAX; n];
    d[root] = root;

    let mut out_node: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut in_node: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut same: Vec<Vec<usize>> = (0..n).map(|v| vec![v]).collect();
    let mut added: Vec<usize> = vec![0; n];
    let mut ouf = OrderedUnionFind::new(n);

    for &u in postorder {
        // Phase A: ingest arcs bucketed at u.
        for (x, y) in std::mem::take(&mut arcs[u]) {
            let fx = ouf.lookup(x);
            let fy = ouf.lookup(y);
            out_node[fx].push(y);
            in_node[fy].push(x);
            added[fy] += 1;
        }

        // Phase B: drain the out-queue.
        while let Some(y) = out_node[u].pop() {
            let v = ouf.lookup(y);
            if v != u {
                total[v] = decrement(total[v], InvariantKind::NegativeTotal, v)?;
                added[v] = decrement(added[v], InvariantKind::NegativeAdded, v)?;
            }
            if total[v] == 0 {
                let x = ouf.lookup(parents[v]);
                if x == u {
                    for &w in &same[v] {
                        d[w] = u;
                    }
                } else {
                    let moved = std::mem::take(&mut same[v]);
                    same[x].extend(moved);
                }
                ouf.union(parents[v], v);
                let moved = std::mem::take(&mut out_node[v]);
                out_node[x].extend(moved);
            }
        }

        // Phase C: drain the in-queue.
        while let Some(z) = in_node[u].pop() {
            let mut v = ouf.lookup(z);
            while v != u {
                let moved_same = std::mem::take(&mut same[v]);
                same[u].extend(moved_same);
                let x = ouf.lookup(parents[v]);
                ouf.union(parents[v], v);
                let moved_in = std::mem::take(&mut in_node[v]);
                in_node[x].extend(moved_in);
                let moved_out = std::mem::take(&mut out_node[v]);
                out_node[x].extend(moved_out);
                total[x] += total[v];
                added[x] += added[v];
                v = x;
            }
        }

        total[u] = total[u].checked_sub(added[u]).ok_or_else(|| {
            Report::new(DomError::InternalInvariant(InvariantKind::NegativeTotal, u))
        })?;
        added[u] = 0;
    }

    debug!("GD2 main loop complete");

    if let Some(missing) = d.iter().position(|&v| v == usize::MAX) {
        error!(node = missing, "node left without an immediate dominator");
        return Err(Report::new(DomError::InternalInvariant(
            InvariantKind::UnassignedDominator,
            missing,
        )));
    }

    Ok(d)
}

/// `value -= 1`, reported as an `InternalInvariant` violation on underflow instead of panicking.
///
/// `total`/`added` are only ever decremented after the engine has itself established they are
/// positive; an underflow here means a bug in the bookkeeping above, not a malformed input (the
/// verifier has already rejected those).
fn decrement(value: usize, kind: InvariantKind, node: usize) -> Result<usize, DomError> {
    value
        .checked_sub(1)
        .ok_or_else(|| Report::new(DomError::InternalInvariant(kind, node)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(
        root: usize,
        edges: Vec<(usize, usize)>,
        parents: Vec<usize>,
        postorder: Vec<usize>,
    ) -> Vec<usize> {
        compute(root, &edges, &parents, &postorder, None, Config::default())
            .expect("valid scenario")
            .as_idom_slice()
            .to_vec()
    }

    #[test]
    fn scenario_a_singleton() {
        let idom = run(0, vec![], vec![0], vec![0]);
        assert_eq!(idom, vec![0]);
    }

    #[test]
    fn scenario_b_chain() {
        let idom = run(
            0,
            vec![(0, 1), (1, 2), (2, 3), (3, 4)],
            vec![0, 0, 1, 2, 3],
            vec![4, 3, 2, 1, 0],
        );
        assert_eq!(idom, vec![0, 0, 1, 2, 3]);
    }

    #[test]
    fn scenario_c_diamond() {
        let idom = run(
            0,
            vec![(0, 1), (0, 2), (1, 3), (2, 3)],
            vec![0, 0, 0, 1],
            vec![3, 1, 2, 0],
        );
        assert_eq!(idom, vec![0, 0, 0, 0]);
    }

    #[test]
    fn scenario_d_loop_back() {
        let idom = run(
            0,
            vec![(0, 1), (1, 2), (2, 1), (2, 3)],
            vec![0, 0, 1, 2],
            vec![3, 2, 1, 0],
        );
        assert_eq!(idom, vec![0, 0, 1, 2]);
    }

    #[test]
    fn scenario_e_shared_join() {
        let idom = run(
            0,
            vec![(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5), (3, 5)],
            vec![0, 0, 0, 1, 3, 4],
            vec![5, 4, 3, 1, 2, 0],
        );
        assert_eq!(idom, vec![0, 0, 0, 0, 3, 3]);
    }

    #[test]
    fn root_has_no_immediate_dominator() {
        let dom = compute(
            0,
            &[(0, 1), (1, 2)],
            &[0, 0, 1],
            &[2, 1, 0],
            None,
            Config::default(),
        )
        .unwrap();
        assert_eq!(dom.immediate_dominator(0), None);
        assert_eq!(dom.root(), 0);
    }

    #[test]
    fn dominators_iterator_walks_to_the_root() {
        let dom = compute(
            0,
            &[(0, 1), (1, 2), (2, 3)],
            &[0, 0, 1, 2],
            &[3, 2, 1, 0],
            None,
            Config::default(),
        )
        .unwrap();
        let chain: Vec<_> = dom.dominators(3).unwrap().collect();
        assert_eq!(chain, vec![3, 2, 1, 0]);
        let strict: Vec<_> = dom.strict_dominators(3).unwrap().collect();
        assert_eq!(strict, vec![2, 1, 0]);
    }

    #[test]
    fn immediately_dominated_by_excludes_self() {
        let dom = compute(
            0,
            &[(0, 1), (0, 2), (1, 3), (2, 3)],
            &[0, 0, 0, 1],
            &[3, 1, 2, 0],
            None,
            Config::default(),
        )
        .unwrap();
        let mut children: Vec<_> = dom.immediately_dominated_by(0).collect();
        children.sort_unstable();
        assert_eq!(children, vec![1, 2, 3]);
    }

    #[test]
    fn cross_check_against_semi_nca_agrees() {
        let config = Config {
            cross_check: true,
            require_preorder: false,
        };
        let preorder = vec![0, 1, 3, 2];
        let dom = compute(
            0,
            &[(0, 1), (0, 2), (1, 3), (2, 3)],
            &[0, 0, 0, 1],
            &[3, 1, 2, 0],
            Some(&preorder),
            config,
        )
        .unwrap();
        assert_eq!(dom.as_idom_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn missing_preorder_is_rejected_when_required() {
        let config = Config {
            cross_check: false,
            require_preorder: true,
        };
        let err = compute(0, &[(0, 1)], &[0, 0], &[1, 0], None, config).unwrap_err();
        assert!(matches!(err.current_context(), DomError::MissingPreorder));
    }

    #[test]
    fn compute_normalized_skips_verification_but_agrees_with_compute() {
        let edges = vec![(0, 1), (0, 2), (1, 3), (2, 3)];
        let parents = vec![0, 0, 0, 1];
        let postorder = vec![3, 1, 2, 0];
        let verified = verify_spanning_tree(0, &edges, &parents, &postorder, None).unwrap();

        let via_compute =
            compute(0, &edges, &parents, &postorder, None, Config::default()).unwrap();
        let via_normalized = compute_normalized(
            0,
            &verified,
            &parents,
            &postorder,
            None,
            Config::default(),
        )
        .unwrap();
        assert_eq!(via_compute.as_idom_slice(), via_normalized.as_idom_slice());
    }

    #[test]
    fn compute_normalized_also_requires_preorder_when_configured() {
        let config = Config {
            cross_check: false,
            require_preorder: true,
        };
        let err = compute_normalized(0, &[(0, 1)], &[0, 0], &[1, 0], None, config).unwrap_err();
        assert!(matches!(err.current_context(), DomError::MissingPreorder));
    }
}

