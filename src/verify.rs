//! Normalizes the input edge multiset and validates the supplied spanning tree metadata.
//!
//! Ported from `dmikurube/dominators-python`'s `verify_spanning_tree`, but with the reachability
//! check tightened to an explicit bound (the original always returned `true`) and failures
//! reported through [`DomError`] instead of printed diagnostics and ad-hoc exceptions.

use error_stack::{Report, Result};
use tracing::debug;

use crate::error::DomError;

/// Confirms `root` is reachable from every node via `parents`, normalizes `edges`, and checks
/// that `postorder` (and, if supplied, `preorder`) are valid traversals of the tree.
///
/// Returns the normalized edge list: self-loops removed, and at most one `(src, dst)` arc per
/// ordered pair.
pub fn verify_spanning_tree(
    root: usize,
    edges: &[(usize, usize)],
    parents: &[usize],
    postorder: &[usize],
    preorder: Option<&[usize]>,
) -> Result<Vec<(usize, usize)>, DomError> {
    let n = parents.len();
    check_reachability(root, parents, n)?;
    debug!(n, "all nodes reach the root");

    check_edges_in_range(edges, n)?;
    debug!("all edge endpoints lie in [0, N)");

    let normalized = normalize_edges(edges);
    debug!(
        before = edges.len(),
        after = normalized.len(),
        "normalized edge multiset"
    );

    check_tree_edges_present(root, parents, &normalized)?;
    debug!("all tree edges present in the normalized edge set");

    check_post_order(root, parents, postorder)?;
    debug!("post-order is a valid bottom-up traversal");

    if let Some(preorder) = preorder {
        check_pre_order(root, parents, preorder)?;
        debug!("pre-order is a valid top-down traversal");
    }

    Ok(normalized)
}

/// Walks `parents` from every node towards `root`, bounding each walk at `n` steps.
///
/// A walk that does not reach the root within `n` steps can only mean a cycle in `parents` that
/// never touches the root, so the offending starting node is reported as unreachable.
fn check_reachability(root: usize, parents: &[usize], n: usize) -> Result<(), DomError> {
    let mut reachable = vec![false; n];
    reachable[root] = true;

    for start in 0..n {
        if reachable[start] {
            continue;
        }

        let mut stack = Vec::new();
        let mut node = start;
        let mut steps = 0;
        while !reachable[node] {
            stack.push(node);
            node = parents[node];
            steps += 1;
            if steps > n {
                return Err(Report::new(DomError::NotReachable(start)));
            }
        }

        for node in stack.into_iter().rev() {
            reachable[node] = true;
        }
    }

    Ok(())
}

/// Rejects any edge whose source or destination falls outside `[0, n)`, before `normalize_edges`
/// and everything downstream starts indexing `Vec`s of length `n` with those values.
fn check_edges_in_range(edges: &[(usize, usize)], n: usize) -> Result<(), DomError> {
    for &(src, dst) in edges {
        if src >= n || dst >= n {
            return Err(Report::new(DomError::EdgeOutOfRange(src, dst)));
        }
    }
    Ok(())
}

/// Discards self-loops and any arc whose destination has already been recorded for the same
/// source, preserving the first occurrence's position otherwise.
fn normalize_edges(edges: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let n = edges
        .iter()
        .map(|&(src, dst)| src.max(dst) + 1)
        .max()
        .unwrap_or(0);
    let mut seen: Vec<std::collections::HashSet<usize>> = vec![Default::default(); n];
    let mut normalized = Vec::with_capacity(edges.len());

    for &(src, dst) in edges {
        if src == dst {
            continue;
        }
        if seen[src].insert(dst) {
            normalized.push((src, dst));
        }
    }

    normalized
}

fn check_tree_edges_present(
    root: usize,
    parents: &[usize],
    normalized: &[(usize, usize)],
) -> Result<(), DomError> {
    let n = parents.len();
    let mut destinations: Vec<std::collections::HashSet<usize>> = vec![Default::default(); n];
    for &(src, dst) in normalized {
        destinations[src].insert(dst);
    }

    for v in 0..n {
        if v == root {
            continue;
        }
        let parent = parents[v];
        if !destinations[parent].contains(&v) {
            return Err(Report::new(DomError::TreeEdgeMissing(parent, v)));
        }
    }

    Ok(())
}

fn check_post_order(root: usize, parents: &[usize], postorder: &[usize]) -> Result<(), DomError> {
    let n = parents.len();
    let mut visited = vec![false; n];

    for (position, &node) in postorder.iter().enumerate() {
        if node == root {
            if position != n - 1 {
                return Err(Report::new(DomError::RootNotLast));
            }
            break;
        }
        if visited[parents[node]] {
            return Err(Report::new(DomError::PostOrderViolation(node)));
        }
        visited[node] = true;
    }

    Ok(())
}

fn check_pre_order(root: usize, parents: &[usize], preorder: &[usize]) -> Result<(), DomError> {
    let n = parents.len();
    let mut visited = vec![false; n];

    for (reverse_position, &node) in preorder.iter().enumerate().rev() {
        if node == root {
            if reverse_position != 0 {
                return Err(Report::new(DomError::RootNotLast));
            }
            break;
        }
        if visited[parents[node]] {
            return Err(Report::new(DomError::PreOrderViolation(node)));
        }
        visited[node] = true;
    }

    Ok(())
}
