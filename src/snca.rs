//! Semi-NCA: an independent dominator computation used only to cross-check GD2.
//!
//! Supplements the distilled specification with the original source's commented-out `snca`
//! routine, rewritten here as a standard semidominator-path-compression pass over a
//! preorder-indexed ancestor array — the same shape as the teacher's `lengauer_tarjan`
//! (`eval`/`compress`/`link` triple), keyed by the externally supplied DFS order when the caller
//! has one, or by a DFS this module runs over the spanning tree when it doesn't.

use error_stack::Result;

use crate::dominators::Dominators;
use crate::error::DomError;

/// Compute dominators independently of GD2, for use as a cross-check.
///
/// `edges` should be the normalized edge set (self-loops and duplicate arcs already removed);
/// `parents`/`postorder` describe the same spanning tree GD2 consumed. `preorder`, if supplied,
/// must be a valid top-down traversal of the same tree; otherwise one is derived from `parents`.
pub fn compute(
    root: usize,
    edges: &[(usize, usize)],
    parents: &[usize],
    postorder: &[usize],
    preorder: Option<&[usize]>,
) -> Result<Dominators, DomError> {
    let n = parents.len();
    let owned_preorder;
    let preorder: &[usize] = match preorder {
        Some(p) => p,
        None => {
            owned_preorder = derive_preorder(root, parents, n);
            &owned_preorder
        }
    };

    let mut rpreorder = vec![0usize; n];
    for (rank, &node) in preorder.iter().enumerate() {
        rpreorder[node] = rank;
    }

    // Predecessors, addressed by preorder rank for both the edge and its source.
    let mut preds_by_rank: Vec<Vec<usize>> = vec![Vec::new(); n];
    for &(src, dst) in edges {
        preds_by_rank[rpreorder[dst]].push(rpreorder[src]);
    }

    // ancestor[i]: preorder rank of i's tree ancestor reached by the compression so far.
    let mut ancestor = vec![usize::MAX; n];
    // label[i]: preorder rank carrying the smallest semidominator rank seen on i's compressed path.
    let mut label: Vec<usize> = (0..n).collect();
    let mut semi: Vec<usize> = (0..n).collect();
    let mut idom_rank = vec![0usize; n];

    // Process ranks from highest (deepest in preorder numbering, processed last by the DFS) down
    // to 1, skipping the root at rank 0.
    for i in (1..n).rev() {
        let mut best = semi[i];
        for &v in &preds_by_rank[i] {
            let u = if v <= i {
                v
            } else {
                compress(v, i, &mut ancestor, &mut label);
                label[v]
            };
            if semi[u] < best {
                best = semi[u];
            }
        }
        semi[i] = best;
        label[i] = semi[i];
        let tree_parent_rank = rpreorder[parents[preorder[i]]];
        ancestor[i] = tree_parent_rank;
        idom_rank[i] = tree_parent_rank;
    }

    for i in 1..n {
        let mut j = idom_rank[i];
        while j > semi[i] {
            j = idom_rank[j];
        }
        idom_rank[i] = j;
    }

    let mut idom = vec![root; n];
    for i in 1..n {
        idom[preorder[i]] = preorder[idom_rank[i]];
    }
    idom[root] = root;

    Ok(Dominators::from_idom(root, idom))
}

/// Path-compress `v` towards the root of its linked tree path, stopping short of rank `limit`,
/// updating `label[v]` to the smallest-`semi` node found along the way. Mirrors the teacher's
/// `lengauer_tarjan::compress`, but walking `ancestor` links built up rank-by-rank instead of a
/// link-eval forest populated by a separate DFS pass.
fn compress(v: usize, limit: usize, ancestor: &mut [usize], label: &mut [usize]) {
    let a = ancestor[v];
    if a == usize::MAX || a <= limit {
        return;
    }
    if ancestor[a] != usize::MAX && ancestor[a] > limit {
        compress(a, limit, ancestor, label);
        if label[a] < label[v] {
            label[v] = label[a];
        }
        ancestor[v] = ancestor[a];
    }
}

fn derive_preorder(root: usize, parents: &[usize], n: usize) -> Vec<usize> {
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    for v in 0..n {
        if v != root {
            children[parents[v]].push(v);
        }
    }

    let mut preorder = Vec::with_capacity(n);
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        preorder.push(node);
        for &child in children[node].iter().rev() {
            stack.push(child);
        }
    }
    preorder
}
