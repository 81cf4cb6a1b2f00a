//! Error types for the dominator computation core.
//!
//! Structured as a plain `Context` enum in the style of the teacher's per-algorithm
//! `shortest_paths::*::error` modules. Every fallible function in this crate returns
//! `error_stack::Result<T, DomError>` and constructs failures via `error_stack::Report::new`,
//! so the core stays ignorant of presentation while still letting callers print or inspect the
//! full context chain.

use std::fmt::{Display, Formatter};

use error_stack::Context;

/// The kind of defensive invariant GD2 detected as violated.
///
/// A violation here is always a bug in this crate, never a consequence of bad input — the
/// verifier rejects malformed input before GD2 ever runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantKind {
    /// A cluster's `total` counter went negative.
    NegativeTotal,
    /// A cluster's `added` counter went negative.
    NegativeAdded,
    /// GD2 finished its main loop without assigning every node an immediate dominator.
    UnassignedDominator,
    /// The Semi-NCA cross-check produced a different `idom` array than GD2.
    CrossCheckDisagreement,
}

impl Display for InvariantKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeTotal => write!(f, "total counter went negative"),
            Self::NegativeAdded => write!(f, "added counter went negative"),
            Self::UnassignedDominator => write!(f, "node left without an immediate dominator"),
            Self::CrossCheckDisagreement => write!(f, "GD2 and Semi-NCA disagree"),
        }
    }
}

/// Errors produced by the verifier, preparation, and GD2 engine.
#[derive(Debug)]
pub enum DomError {
    /// The parent map declared more than one self-mapped (root) node.
    MultipleRoots,
    /// `v` cannot reach the root by following `parents`.
    NotReachable(usize),
    /// An edge referenced a node outside `[0, N)`, where `N = parents.len()`.
    EdgeOutOfRange(usize, usize),
    /// The spanning tree claims edge `(parent, v)` but it is absent from the graph.
    TreeEdgeMissing(usize, usize),
    /// `v` was visited in post-order before one of its descendants.
    PostOrderViolation(usize),
    /// `v` was visited in pre-order after one of its descendants.
    PreOrderViolation(usize),
    /// The final post-order (or first pre-order) position does not hold the root.
    RootNotLast,
    /// A preorder was required (by `Config::require_preorder` or `Config::cross_check`) but
    /// none was supplied.
    MissingPreorder,
    /// GD2 detected a defensive invariant violation — a bug, not a user error.
    InternalInvariant(InvariantKind, usize),
}

impl Display for DomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MultipleRoots => write!(f, "parent map declares more than one root"),
            Self::NotReachable(v) => write!(f, "node {v} cannot reach the root"),
            Self::EdgeOutOfRange(src, dst) => {
                write!(f, "edge ({src}, {dst}) references a node outside [0, N)")
            }
            Self::TreeEdgeMissing(parent, v) => {
                write!(f, "tree edge ({parent}, {v}) is missing from the graph")
            }
            Self::PostOrderViolation(v) => {
                write!(f, "node {v} appears before a descendant in post-order")
            }
            Self::PreOrderViolation(v) => {
                write!(f, "node {v} appears after a descendant in pre-order")
            }
            Self::RootNotLast => write!(f, "root is not last in post-order (or first in pre-order)"),
            Self::MissingPreorder => {
                write!(f, "a preorder is required for this configuration but none was supplied")
            }
            Self::InternalInvariant(kind, node) => {
                write!(f, "internal invariant violated at node {node}: {kind}")
            }
        }
    }
}

impl Context for DomError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offending_node() {
        let err = DomError::TreeEdgeMissing(2, 5);
        assert_eq!(err.to_string(), "tree edge (2, 5) is missing from the graph");
    }
}
