//! Edge-list ingestion.
//!
//! Reads the dumper's output line by line. Each line is two space-separated
//! tokens, `parent dependant`; anything after the second token is ignored.
//! Edges are kept in input order, repeats included, because the branch
//! builder depends on that order. Distinct modules are collected in
//! first-seen order so the renderer can assign stable integer ids.

use std::io::BufRead;

use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::module::Module;

/// One parsed input line: `dependant` is required by `parent`.
///
/// For chain building, `parent` is the endpoint closer to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// The requiring module.
    pub parent: Module,
    /// The required module.
    pub dependant: Module,
}

/// The full parsed input: edges in input order plus the deduplicated set of
/// modules in first-encounter order.
#[derive(Debug, Default, Clone)]
pub struct EdgeList {
    edges: Vec<Edge>,
    modules: IndexSet<Module>,
}

impl EdgeList {
    /// Ingest a dumper edge list from `reader`.
    ///
    /// Lines are `\n`-terminated; end-of-stream ends ingestion normally. A
    /// line with fewer than two space-separated tokens is fatal.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedLine`] for a line without two tokens, and
    /// [`Error::Io`] for any read failure other than end-of-stream.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut list = Self::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let mut fields = line.split(' ');
            let (Some(parent), Some(dependant)) = (fields.next(), fields.next()) else {
                return Err(Error::MalformedLine {
                    line_no: idx + 1,
                    line,
                });
            };
            if parent.is_empty() || dependant.is_empty() {
                return Err(Error::MalformedLine {
                    line_no: idx + 1,
                    line,
                });
            }
            list.push(Module::parse(parent), Module::parse(dependant));
        }
        tracing::debug!(
            edges = list.edges.len(),
            modules = list.modules.len(),
            "ingested edge list"
        );
        Ok(list)
    }

    /// Record one edge, registering both endpoints in the module set.
    pub fn push(&mut self, parent: Module, dependant: Module) {
        self.modules.insert(parent.clone());
        self.modules.insert(dependant.clone());
        self.edges.push(Edge { parent, dependant });
    }

    /// Edges in input order, repeats retained.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Distinct modules in first-encounter order.
    #[must_use]
    pub fn modules(&self) -> &IndexSet<Module> {
        &self.modules
    }

    /// The root module: the first version-less module encountered.
    ///
    /// Returns `None` when the input contained no root (or no edges at all).
    #[must_use]
    pub fn root(&self) -> Option<&Module> {
        self.modules.iter().find(|m| m.is_root())
    }

    /// True when no edges were ingested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
