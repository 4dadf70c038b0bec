//! Branch filtering.
//!
//! Narrows a built [`BranchMap`] to a single target module, either with its
//! full ancestor chain or shortened to `[root, direct parent]`. Filters are
//! pure: the input map is never touched, a new map is returned.
//!
//! A target that is not a recorded key is not an error. The chain simply is
//! not there to report, so the filter warns and returns an empty map; the
//! caller persists "nothing matched" instead of the whole graph.

use crate::branches::BranchMap;
use crate::error::{Error, Result};
use crate::module::Module;

impl BranchMap {
    /// Narrow the map to `target` with its full ancestor chain.
    ///
    /// # Errors
    ///
    /// [`Error::RootTarget`] when `target` is the root module.
    pub fn filter_full(&self, target: &Module) -> Result<Self> {
        let Some(chain) = self.lookup(target)? else {
            return Ok(Self::default());
        };
        let mut filtered = Self::default();
        filtered.insert(target.clone(), chain.to_vec());
        Ok(filtered)
    }

    /// Narrow the map to `target` with a 2-element `[root, direct parent]`
    /// chain.
    ///
    /// A target that sits directly under the root has a chain of length 1;
    /// its shortened form repeats the root as both elements.
    ///
    /// # Errors
    ///
    /// [`Error::RootTarget`] when `target` is the root module.
    pub fn filter_short(&self, target: &Module) -> Result<Self> {
        let Some(chain) = self.lookup(target)? else {
            return Ok(Self::default());
        };
        let mut filtered = Self::default();
        if let (Some(root), Some(parent)) = (chain.first(), chain.last()) {
            filtered.insert(target.clone(), vec![root.clone(), parent.clone()]);
        }
        Ok(filtered)
    }

    fn lookup(&self, target: &Module) -> Result<Option<&[Module]>> {
        if target.is_root() {
            return Err(Error::RootTarget {
                module: target.clone(),
            });
        }
        let chain = self.get(target);
        if chain.is_none() {
            tracing::warn!(module = %target, "target is not a recorded leaf, nothing to filter");
        }
        Ok(chain)
    }
}
