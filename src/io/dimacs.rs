//! DIMACS-style export of the graph, the spanning tree, and the supplied orderings — all with
//! the DIMACS convention of 1-based ids, ported from the original source's `dimacs.py`.

use std::fmt::Write;

use error_stack::{Report, Result};

/// The `dimacs` subcommand variant requested on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The default: the graph itself (`p` header + `a` lines).
    Graph,
    Parents,
    Preorder,
    Postorder,
}

impl Variant {
    pub fn parse(name: Option<&str>) -> Result<Self, super::AdapterError> {
        match name {
            None => Ok(Variant::Graph),
            Some("parents") => Ok(Variant::Parents),
            Some("preorder") => Ok(Variant::Preorder),
            Some("postorder") => Ok(Variant::Postorder),
            Some(other) => Err(Report::new(super::AdapterError::UnknownDimacsVariant {
                variant: other.to_string(),
            })),
        }
    }
}

/// `p <N> <M> <root+1> <N>` header followed by one `a <src+1> <dst+1>` line per edge.
pub fn render_graph(root: usize, n: usize, edges: &[(usize, usize)]) -> String {
    let mut out = String::new();
    writeln!(out, "p {} {} {} {}", n, edges.len(), root + 1, n).unwrap();
    for &(src, dst) in edges {
        writeln!(out, "a {} {}", src + 1, dst + 1).unwrap();
    }
    out
}

/// `parents <N> <root+1>` header followed by one `<node+1> <parent+1>` line per node.
pub fn render_parents(root: usize, parents: &[usize]) -> String {
    let n = parents.len();
    let mut out = String::new();
    writeln!(out, "parents {} {}", n, root + 1).unwrap();
    for (node, &parent) in parents.iter().enumerate() {
        writeln!(out, "{} {}", node + 1, parent + 1).unwrap();
    }
    out
}

/// `preorder <N> <root+1>` header followed by one `<position+1> <node+1>` line.
pub fn render_preorder(root: usize, preorder: &[usize]) -> String {
    render_order("preorder", root, preorder)
}

/// `postorder <N> <root+1>` header followed by one `<position+1> <node+1>` line.
pub fn render_postorder(root: usize, postorder: &[usize]) -> String {
    render_order("postorder", root, postorder)
}

fn render_order(label: &str, root: usize, order: &[usize]) -> String {
    let n = order.len();
    let mut out = String::new();
    writeln!(out, "{label} {} {}", n, root + 1).unwrap();
    for (position, &node) in order.iter().enumerate() {
        writeln!(out, "{} {}", position + 1, node + 1).unwrap();
    }
    out
}
