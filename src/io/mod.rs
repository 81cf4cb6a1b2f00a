//! File-format adapters: JSON input loading, the textual `idom` listing, and DIMACS export.
//!
//! Grounded on the `omtsf-cli` example's `CliError` (a flat enum carrying its own process exit
//! code), layered over the core's `error-stack`-based [`crate::DomError`] the same way the
//! teacher's `EntryError`/`MapError` layer over a backend error: a unit `Core` variant that
//! carries no payload of its own, reached via `.change_context(AdapterError::Core)` so the
//! original `DomError`'s attachments stay in the `Report`'s context chain instead of being
//! duplicated into a new field.

pub mod dimacs;
pub mod json;
pub mod text;

use std::fmt;
use std::path::PathBuf;

use error_stack::Context;

/// Errors the `io` adapters and the `domgd` binary can produce, each mapped to a stable process
/// exit code.
#[derive(Debug)]
pub enum AdapterError {
    /// A required input file could not be opened.
    FileNotFound { path: PathBuf },
    /// A file's contents could not be parsed as JSON, or did not match the expected shape.
    MalformedJson { path: PathBuf, detail: String },
    /// The `parents.json` map declared more than one self-mapped (root) node.
    MultipleRoots,
    /// The `parents.json` map declared no self-mapped (root) node.
    NoRoot,
    /// A `dimacs` subcommand name was not one of `parents`, `preorder`, `postorder` (or absent).
    UnknownDimacsVariant { variant: String },
    /// The core verifier, preparation, or GD2 engine rejected the input.
    ///
    /// Refer to the attached [`crate::DomError`] context for what actually went wrong.
    Core,
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path } => write!(f, "could not open {}", path.display()),
            Self::MalformedJson { path, detail } => {
                write!(f, "malformed JSON in {}: {detail}", path.display())
            }
            Self::MultipleRoots => write!(f, "parents.json declares more than one root"),
            Self::NoRoot => write!(f, "parents.json declares no root (no node maps to itself)"),
            Self::UnknownDimacsVariant { variant } => {
                write!(f, "unknown dimacs variant {variant:?}")
            }
            Self::Core => write!(f, "input was rejected by the dominator computation core"),
        }
    }
}

impl Context for AdapterError {}

impl AdapterError {
    /// The process exit code this error should produce, per the CLI's documented contract:
    /// `2` for anything that prevented the core from ever running, `1` for a rejection by the
    /// core itself.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core => 1,
            _ => 2,
        }
    }
}
