//! Immediate dominator trees via disjoint-set union.
//!
//! Computes, for a rooted directed graph, the immediate dominator of every reachable node using
//! GD2 ("General Dominators, version 2"), the disjoint-set-union algorithm of Fraczak, Georgiadis,
//! Miller, and Tarjan. See [`dominators`] for the main entry point and the dominance relation it
//! computes, and [`snca`] for an independent cross-check implementation.

pub mod dominators;
pub mod error;
pub mod io;
mod lca;
mod ordered_union_find;
mod prepare;
pub mod snca;
mod union_find;
mod verify;

pub use crate::dominators::compute as compute_dominators;
pub use crate::dominators::compute_normalized as compute_dominators_normalized;
pub use crate::dominators::{Config, Dominators, DominatorsIter};
pub use crate::error::{DomError, InvariantKind};
pub use crate::verify::verify_spanning_tree;
