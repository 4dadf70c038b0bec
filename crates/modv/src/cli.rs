//! CLI argument parsing and the pipeline behind it.
//!
//! The surface mirrors how the tool is meant to be driven:
//!
//! ```bash
//! go mod graph | modv
//! go mod graph | modv golang.org/x/text@v0.3.2 results/
//! go mod graph | modv --dot - > deps.dot
//! ```

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use clap::Parser;

use modv_graph::{BranchMap, EdgeList, Module, RetainPolicy, dot};

use crate::error::{Error, Result};
use crate::storage;

/// Modv: module dependency chain extraction and visualization.
///
/// Reads `go mod graph` output on stdin, reconstructs each module's chain
/// of ancestors back to the root, and writes the result as JSON Lines.
#[derive(Parser, Debug)]
#[command(name = "modv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target module token (`name@version`) to filter branches around
    ///
    /// Without a target the whole branch map is written. With one, only the
    /// target's chain is kept: root + direct parent by default, the full
    /// chain with `--full`.
    pub target: Option<String>,

    /// Directory to write the persisted branch map into
    ///
    /// Defaults to the current directory. The file is named after the root
    /// module, e.g. `example.com_app.branches.jsonl`.
    pub out_dir: Option<PathBuf>,

    /// Keep the target's full ancestor chain instead of root + direct parent
    #[arg(long)]
    pub full: bool,

    /// Retain superseded intermediate chain entries as queryable keys
    #[arg(long)]
    pub keep_intermediates: bool,

    /// Write the dependency graph as Graphviz dot to PATH (`-` for stdout)
    #[arg(long, value_name = "PATH")]
    pub dot: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Run the full pipeline: ingest `input`, build, filter, persist, render.
///
/// # Errors
///
/// Any ingestion, build, or filter error from [`modv_graph`], plus I/O and
/// serialization failures while writing output.
pub fn run(cli: &Cli, input: impl BufRead) -> Result<()> {
    let edges = EdgeList::from_reader(input)?;

    let policy = if cli.keep_intermediates {
        RetainPolicy::KeepIntermediates
    } else {
        RetainPolicy::LeavesOnly
    };
    let branches = BranchMap::build(&edges, policy)?;

    let branches = match &cli.target {
        Some(token) => {
            let target = Module::parse(token);
            if cli.full {
                branches.filter_full(&target)?
            } else {
                branches.filter_short(&target)?
            }
        }
        None => branches,
    };

    let out_path = output_path(cli.out_dir.as_deref(), edges.root())?;
    storage::save_branches(&branches, &out_path)?;

    if let Some(dot_path) = &cli.dot {
        let rendered = dot::render(&edges);
        if dot_path.as_os_str() == "-" {
            print!("{rendered}");
        } else {
            fs::write(dot_path, rendered)?;
            tracing::info!(path = %dot_path.display(), "wrote dot graph");
        }
    }

    Ok(())
}

/// Resolve where the branch map lands: `<dir>/<root>.branches.jsonl`, or
/// the current directory when no directory was given.
fn output_path(dir: Option<&Path>, root: Option<&Module>) -> Result<PathBuf> {
    let name = storage::branch_file_name(root);
    match dir {
        Some(dir) if !dir.is_dir() => Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        }),
        Some(dir) => Ok(dir.join(name)),
        None => Ok(PathBuf::from(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli_with(target: Option<&str>, out_dir: &Path) -> Cli {
        Cli {
            target: target.map(String::from),
            out_dir: Some(out_dir.to_path_buf()),
            full: false,
            keep_intermediates: false,
            dot: None,
            verbose: 0,
        }
    }

    #[test]
    fn pipeline_writes_branch_file_named_after_root() {
        let dir = TempDir::new().unwrap();
        let cli = cli_with(None, dir.path());

        run(&cli, "modA modB@v1\nmodB@v1 modC@v2\n".as_bytes()).unwrap();

        let out = dir.path().join("modA.branches.jsonl");
        let loaded = storage::load_branches(&out).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded.get(&Module::parse("modC@v2")),
            Some(&[Module::parse("modA"), Module::parse("modB@v1")][..])
        );
    }

    #[test]
    fn target_filters_to_short_chain_by_default() {
        let dir = TempDir::new().unwrap();
        let cli = cli_with(Some("modD@v3"), dir.path());

        run(
            &cli,
            "modA modB@v1\nmodB@v1 modC@v2\nmodC@v2 modD@v3\n".as_bytes(),
        )
        .unwrap();

        let loaded = storage::load_branches(&dir.path().join("modA.branches.jsonl")).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded.get(&Module::parse("modD@v3")),
            Some(&[Module::parse("modA"), Module::parse("modC@v2")][..])
        );
    }

    #[test]
    fn target_extended_past_under_leaves_only_comes_back_empty() {
        let dir = TempDir::new().unwrap();
        let cli = cli_with(Some("modC@v2"), dir.path());

        run(
            &cli,
            "modA modB@v1\nmodB@v1 modC@v2\nmodC@v2 modD@v3\n".as_bytes(),
        )
        .unwrap();

        // modC@v2 was extended past, so it is no longer a leaf key.
        let loaded = storage::load_branches(&dir.path().join("modA.branches.jsonl")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn keep_intermediates_makes_internal_modules_filterable() {
        let dir = TempDir::new().unwrap();
        let mut cli = cli_with(Some("modC@v2"), dir.path());
        cli.keep_intermediates = true;
        cli.full = true;

        run(
            &cli,
            "modA modB@v1\nmodB@v1 modC@v2\nmodC@v2 modD@v3\n".as_bytes(),
        )
        .unwrap();

        let loaded = storage::load_branches(&dir.path().join("modA.branches.jsonl")).unwrap();
        assert_eq!(
            loaded.get(&Module::parse("modC@v2")),
            Some(&[Module::parse("modA"), Module::parse("modB@v1")][..])
        );
    }

    #[test]
    fn dot_flag_writes_the_rendered_graph() {
        let dir = TempDir::new().unwrap();
        let mut cli = cli_with(None, dir.path());
        let dot_path = dir.path().join("deps.dot");
        cli.dot = Some(dot_path.clone());

        run(&cli, "modA modB@v1\n".as_bytes()).unwrap();

        let rendered = fs::read_to_string(&dot_path).unwrap();
        assert!(rendered.contains("1 [label=\"modA\"];"));
        assert!(rendered.contains("1 -> 2;"));
    }

    #[test]
    fn missing_output_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let cli = cli_with(None, &dir.path().join("does-not-exist"));

        let err = run(&cli, "modA modB@v1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }

    #[test]
    fn root_target_is_fatal() {
        let dir = TempDir::new().unwrap();
        let cli = cli_with(Some("modA"), dir.path());

        let err = run(&cli, "modA modB@v1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Graph(modv_graph::Error::RootTarget { .. })
        ));
    }
}
