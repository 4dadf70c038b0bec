//! Modv CLI - module dependency chain extraction from the command line.
//!
//! This crate wraps [`modv_graph`] with a thin pipeline binary: read a
//! `go mod graph` edge list from stdin, build and optionally filter the
//! branch map, persist it as JSON Lines, and optionally render the full
//! graph as Graphviz dot.

#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod storage;

pub use error::{Error, Result};
