//! Branch map persistence as JSON Lines.
//!
//! One record per line, `{"leaf": ..., "chain": [...]}`, written in map
//! order. Loading rebuilds the map in file order, so a save/load round trip
//! preserves the key order, every chain, and full module identity.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use modv_graph::{BranchMap, Module};

use crate::error::Result;

/// One persisted branch: a leaf module and its ancestor chain.
#[derive(Debug, Serialize, Deserialize)]
struct BranchRecord {
    leaf: Module,
    chain: Vec<Module>,
}

/// Write `branches` to `path`, one JSON record per line.
///
/// # Errors
///
/// Returns an error when the file cannot be created or a record cannot be
/// serialized.
pub fn save_branches(branches: &BranchMap, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for (leaf, chain) in branches {
        let record = BranchRecord {
            leaf: leaf.clone(),
            chain: chain.clone(),
        };
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    tracing::info!(branches = branches.len(), path = %path.display(), "saved branch map");
    Ok(())
}

/// Read a branch map written by [`save_branches`]. Blank lines are skipped.
///
/// # Errors
///
/// Returns an error when the file cannot be read or a line is not a valid
/// branch record.
pub fn load_branches(path: &Path) -> Result<BranchMap> {
    let reader = BufReader::new(File::open(path)?);
    let mut branches = BranchMap::default();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: BranchRecord = serde_json::from_str(&line)?;
        branches.insert(record.leaf, record.chain);
    }
    Ok(branches)
}

/// File name for a persisted branch map, derived from the root module.
///
/// Module paths contain `/`, which must not leak into the file name. A
/// graph with no root falls back to a fixed name.
#[must_use]
pub fn branch_file_name(root: Option<&Module>) -> String {
    match root {
        Some(root) => format!("{}.branches.jsonl", root.name.replace('/', "_")),
        None => "branches.jsonl".to_string(),
    }
}
