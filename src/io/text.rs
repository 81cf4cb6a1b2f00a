//! The plain textual `idom` listing: one `"<node>: <idom>"` line per node, ascending by id.

use std::fmt::Write;

use crate::dominators::Dominators;

/// Render `dominators` as the textual listing described in the module documentation.
pub fn render(dominators: &Dominators) -> String {
    let mut out = String::new();
    for node in 0..dominators.len() {
        let idom = dominators.immediate_dominator(node).unwrap_or(node);
        writeln!(out, "{node}: {idom}").expect("writing to a String never fails");
    }
    out
}
