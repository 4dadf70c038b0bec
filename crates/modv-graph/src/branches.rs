//! Branch building.
//!
//! Converts the ordered edge list into a mapping from each module to the
//! chain of ancestors connecting it back to the root. The builder is a
//! single pass of chain extension: a root parent starts a fresh chain, a
//! non-root parent must already own a chain, which is copied and extended
//! for the dependant.
//!
//! Precondition: edges arrive root-outward, i.e. every non-root parent has
//! appeared as a dependant on an earlier line. The dumper emits its output
//! in that order; out-of-order input fails with [`Error::BrokenChain`].

use indexmap::IndexMap;

use crate::edges::EdgeList;
use crate::error::{Error, Result};
use crate::module::Module;

/// What to do with a chain entry once a later edge extends past it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RetainPolicy {
    /// Drop superseded entries: only leaf-most modules remain as keys.
    #[default]
    LeavesOnly,
    /// Keep superseded entries so every ancestor stays queryable.
    KeepIntermediates,
}

/// Mapping from a module to its ordered ancestor chain.
///
/// Each value runs from the root (first element) toward the keyed module's
/// direct parent (last element); the key itself is not part of the chain.
/// Key order is insertion order, which makes serialized output stable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BranchMap {
    branches: IndexMap<Module, Vec<Module>>,
}

impl BranchMap {
    /// Build the branch map from an ingested edge list.
    ///
    /// Later edges overwrite earlier chains for the same dependant, so a
    /// repeated edge is harmless. Under [`RetainPolicy::LeavesOnly`] an
    /// entry is removed as soon as an edge extends past it; under
    /// [`RetainPolicy::KeepIntermediates`] it is left in place.
    ///
    /// # Errors
    ///
    /// [`Error::BrokenChain`] when an edge's parent is neither the root nor
    /// a previously recorded dependant.
    pub fn build(edges: &EdgeList, policy: RetainPolicy) -> Result<Self> {
        let mut branches: IndexMap<Module, Vec<Module>> = IndexMap::new();
        for edge in edges.edges() {
            if edge.parent.is_root() {
                branches.insert(edge.dependant.clone(), vec![edge.parent.clone()]);
                continue;
            }
            let Some(parent_chain) = branches.get(&edge.parent) else {
                return Err(Error::BrokenChain {
                    missing: edge.parent.clone(),
                });
            };
            // Copy-and-append: the dependant's chain must not share storage
            // with the entry it grew from.
            let mut chain = parent_chain.clone();
            chain.push(edge.parent.clone());
            if policy == RetainPolicy::LeavesOnly {
                branches.shift_remove(&edge.parent);
            }
            branches.insert(edge.dependant.clone(), chain);
        }
        tracing::debug!(branches = branches.len(), ?policy, "built branch map");
        Ok(Self { branches })
    }

    /// Look up the ancestor chain recorded for `module`.
    #[must_use]
    pub fn get(&self, module: &Module) -> Option<&[Module]> {
        self.branches.get(module).map(Vec::as_slice)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Module, &Vec<Module>)> {
        self.branches.iter()
    }

    /// Number of recorded chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// True when no chains are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Insert one entry, preserving insertion order. Used by filters and by
    /// deserialization; `build` is the normal constructor.
    pub fn insert(&mut self, leaf: Module, chain: Vec<Module>) {
        self.branches.insert(leaf, chain);
    }
}

impl<'a> IntoIterator for &'a BranchMap {
    type Item = (&'a Module, &'a Vec<Module>);
    type IntoIter = indexmap::map::Iter<'a, Module, Vec<Module>>;

    fn into_iter(self) -> Self::IntoIter {
        self.branches.iter()
    }
}
