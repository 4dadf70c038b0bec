//! Module dependency branch extraction.
//!
//! This crate rebuilds the flat edge-list output of a module dependency
//! dumper (`go mod graph` style: one `parent dependant` pair per line) into
//! per-module ancestor chains, and provides filtering and Graphviz dot
//! rendering over the result.
//!
//! # Pipeline
//!
//! ```text
//! BufRead -> EdgeList::from_reader -> BranchMap::build -> filter_* -> output
//! ```
//!
//! The whole crate is synchronous and single-pass: edges are consumed in
//! input order and the builder relies on the dumper emitting every parent
//! as an earlier dependant (or as the root) before it is used as a parent.

#![forbid(unsafe_code)]

pub mod branches;
pub mod dot;
pub mod edges;
pub mod error;
pub mod filter;
pub mod module;

pub use branches::{BranchMap, RetainPolicy};
pub use edges::{Edge, EdgeList};
pub use error::{Error, Result};
pub use module::Module;
