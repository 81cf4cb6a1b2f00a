//! `domgd`: compute and print immediate dominator trees from JSON-described graphs.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use error_stack::{Report, Result, ResultExt};

use domgd::io::{dimacs, json, text, AdapterError};
use domgd::{compute_dominators_normalized, verify_spanning_tree, Config};

#[derive(Debug, Parser)]
#[command(name = "domgd", about = "Immediate dominator trees via disjoint-set union")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the edges file.
    #[arg(long, global = true, default_value = "edges.json")]
    edges: PathBuf,

    /// Path to the parents file.
    #[arg(long, global = true, default_value = "parents.json")]
    parents: PathBuf,

    /// Path to the postorder file.
    #[arg(long, global = true, default_value = "postorder.json")]
    postorder: PathBuf,

    /// Path to the preorder file, if available.
    #[arg(long, global = true)]
    preorder: Option<PathBuf>,

    /// Run the Semi-NCA cross-check after GD2 and fail if they disagree.
    #[arg(long, global = true)]
    cross_check: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the textual `"<node>: <idom>"` listing.
    Dominators,
    /// Print a DIMACS-formatted export of the graph or one of its auxiliary tables.
    Dimacs {
        /// `parents`, `preorder`, or `postorder`; omit for the graph itself.
        variant: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(rendered) => {
            print!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // `{:#}` (alternate Display) walks the full `Report` context chain; plain `{err}`
            // would print only the outermost `AdapterError`, losing the underlying `DomError`.
            eprintln!("domgd: {err:#}");
            ExitCode::from(err.current_context().exit_code() as u8)
        }
    }
}

/// Loads every input file, then verifies the spanning tree unconditionally before dispatching on
/// `cli.command` — matching `original_source/dominators.py`'s and `dimacs.py`'s `main()`, both of
/// which call `verify_spanning_tree` before producing any output, regardless of which output is
/// requested. This is also what makes the normalized edge set (not the raw input) the one ever
/// rendered or fed to the core; `compute_dominators_normalized` then reuses that already-verified
/// edge set instead of re-verifying it.
fn run(cli: &Cli) -> Result<String, AdapterError> {
    let edges = json::load_edges(&cli.edges)?;
    let (root, parents) = json::load_parents(&cli.parents)?;
    let postorder = json::load_order(&cli.postorder)?;
    let preorder = cli
        .preorder
        .as_ref()
        .map(|path| json::load_order(path))
        .transpose()?;

    let normalized = verify_spanning_tree(root, &edges, &parents, &postorder, preorder.as_deref())
        .change_context(AdapterError::Core)?;

    let config = Config {
        cross_check: cli.cross_check,
        require_preorder: cli.cross_check,
    };

    match &cli.command {
        Command::Dominators => {
            let dominators = compute_dominators_normalized(
                root,
                &normalized,
                &parents,
                &postorder,
                preorder.as_deref(),
                config,
            )
            .change_context(AdapterError::Core)?;
            Ok(text::render(&dominators))
        }
        Command::Dimacs { variant } => {
            let variant = dimacs::Variant::parse(variant.as_deref())?;
            Ok(match variant {
                dimacs::Variant::Graph => dimacs::render_graph(root, parents.len(), &normalized),
                dimacs::Variant::Parents => dimacs::render_parents(root, &parents),
                dimacs::Variant::Preorder => {
                    let preorder = preorder.ok_or_else(|| {
                        Report::new(AdapterError::MalformedJson {
                            path: PathBuf::from("preorder.json"),
                            detail: "a preorder file is required for this dimacs variant"
                                .to_string(),
                        })
                    })?;
                    dimacs::render_preorder(root, &preorder)
                }
                dimacs::Variant::Postorder => dimacs::render_postorder(root, &postorder),
            })
        }
    }
}
