// Copyright 2025 Mikael Lund
//
// Licensed under the Apache license, version 2.0 (the "license");
// you may not use this file except in compliance with the license.
// You may obtain a copy of the license at
//
//     http://www.apache.org/licenses/license-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the license is distributed on an "as is" basis,
// without warranties or conditions of any kind, either express or implied.
// See the license for the specific language governing permissions and
// limitations under the license.

//! # Residue bookkeeping
//!
//! Residues are identified by the `(chain, number, name)` triple found in
//! structure records and numbered by [`ResidueIndex`] in the order they
//! first appear. That ordering matters: tleap renumbers residues from one
//! when it loads a structure, so commands like `bond mol.12.SG` must use
//! the load order, not the sequence numbers printed in the file.
//!
//! # Examples
//!
//! ~~~
//! use leapgen::topology::{ResidueIndex, ResidueKey};
//!
//! let cys5 = ResidueKey::new('A', 5, "CYS");
//! let cys40 = ResidueKey::new('A', 40, "CYS");
//! // one key per atom record; repeats collapse onto the first index
//! let index = ResidueIndex::from_keys([cys5.clone(), cys5.clone(), cys40.clone()]);
//! assert_eq!(index.get(&cys5), Some(1));
//! assert_eq!(index.get(&cys40), Some(2));
//! assert_eq!(index.len(), 2);
//! ~~~

mod residue;
mod ssbond;

use std::collections::HashMap;

use itertools::Itertools;

pub use residue::ResidueKey;
pub use ssbond::SsBond;

/// Stable mapping from residue identity to a dense, 1-based index.
///
/// Indices follow first appearance; a key seen again keeps its original
/// index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidueIndex {
    indices: HashMap<ResidueKey, usize>,
}

impl ResidueIndex {
    /// Build the index from residue keys in observation order.
    ///
    /// The keys are typically one per atom record, duplicates included;
    /// only the first occurrence of each distinct key is assigned an index.
    pub fn from_keys(keys: impl IntoIterator<Item = ResidueKey>) -> Self {
        let indices = keys.into_iter().unique().zip(1..).collect();
        Self { indices }
    }

    /// Index of the given residue, or `None` if it never appeared.
    pub fn get(&self, key: &ResidueKey) -> Option<usize> {
        self.indices.get(key).copied()
    }

    /// Number of distinct residues.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if no residues were indexed.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
