//! Loads the `edges.json` / `parents.json` / `postorder.json` / `preorder.json` input files into
//! the dense, index-based shapes the core expects.
//!
//! `parents.json` and the order files are read as a JSON object (string key -> integer value),
//! the same shape the original Python tooling's `OrderedDict`-backed loader used, and converted
//! here into the dense `Vec<usize>` form the rest of this crate works with internally.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use error_stack::{Report, Result};
use serde::Deserialize;

use super::AdapterError;

#[derive(Debug, Deserialize)]
struct EdgesFile {
    edges: Vec<(usize, usize)>,
}

fn read_json_object(path: &Path) -> Result<BTreeMap<usize, usize>, AdapterError> {
    let raw = fs::read_to_string(path).map_err(|_| {
        Report::new(AdapterError::FileNotFound {
            path: path.to_path_buf(),
        })
    })?;
    let by_string: BTreeMap<String, usize> = serde_json::from_str(&raw).map_err(|err| {
        Report::new(AdapterError::MalformedJson {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })
    })?;

    let mut by_int = BTreeMap::new();
    for (key, value) in by_string {
        let key: usize = key.parse().map_err(|_| {
            Report::new(AdapterError::MalformedJson {
                path: path.to_path_buf(),
                detail: format!("non-integer key {key:?}"),
            })
        })?;
        by_int.insert(key, value);
    }
    Ok(by_int)
}

/// Load `edges.json`: `{"edges": [[src, dst], ...]}`.
pub fn load_edges(path: &Path) -> Result<Vec<(usize, usize)>, AdapterError> {
    let raw = fs::read_to_string(path).map_err(|_| {
        Report::new(AdapterError::FileNotFound {
            path: path.to_path_buf(),
        })
    })?;
    let file: EdgesFile = serde_json::from_str(&raw).map_err(|err| {
        Report::new(AdapterError::MalformedJson {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })
    })?;
    Ok(file.edges)
}

/// Load `parents.json`: an object mapping every node id to its parent id, with the root mapping
/// to itself. Returns `(root, parents)` with `parents` dense and `parents[root] == root`.
pub fn load_parents(path: &Path) -> Result<(usize, Vec<usize>), AdapterError> {
    let map = read_json_object(path)?;
    let n = map.len();

    let mut roots = Vec::new();
    let mut parents = vec![0usize; n];
    for (&node, &parent) in &map {
        if node >= n {
            return Err(Report::new(AdapterError::MalformedJson {
                path: path.to_path_buf(),
                detail: format!("node id {node} is out of the contiguous [0, {n}) range"),
            }));
        }
        if node == parent {
            roots.push(node);
        }
        parents[node] = parent;
    }

    match roots.as_slice() {
        [] => Err(Report::new(AdapterError::NoRoot)),
        [root] => Ok((*root, parents)),
        _ => Err(Report::new(AdapterError::MultipleRoots)),
    }
}

/// Load an order file (`postorder.json` or `preorder.json`): an object mapping position to node
/// id. Returns the dense `Vec<usize>` with `result[position] == node`.
pub fn load_order(path: &Path) -> Result<Vec<usize>, AdapterError> {
    let map = read_json_object(path)?;
    let n = map.len();
    let mut order = vec![0usize; n];
    for (&position, &node) in &map {
        if position >= n {
            return Err(Report::new(AdapterError::MalformedJson {
                path: path.to_path_buf(),
                detail: format!("position {position} is out of the contiguous [0, {n}) range"),
            }));
        }
        order[position] = node;
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_edges() {
        let file = write_temp(r#"{"edges": [[0, 1], [1, 2]]}"#);
        let edges = load_edges(file.path()).unwrap();
        assert_eq!(edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn loads_parents_and_finds_the_root() {
        let file = write_temp(r#"{"0": 0, "1": 0, "2": 1}"#);
        let (root, parents) = load_parents(file.path()).unwrap();
        assert_eq!(root, 0);
        assert_eq!(parents, vec![0, 0, 1]);
    }

    #[test]
    fn rejects_multiple_roots() {
        let file = write_temp(r#"{"0": 0, "1": 1}"#);
        let err = load_parents(file.path()).unwrap_err();
        assert!(matches!(err.current_context(), AdapterError::MultipleRoots));
    }

    #[test]
    fn loads_an_order_file() {
        let file = write_temp(r#"{"0": 3, "1": 1, "2": 2, "3": 0}"#);
        let postorder = load_order(file.path()).unwrap();
        assert_eq!(postorder, vec![3, 1, 2, 0]);
    }
}
