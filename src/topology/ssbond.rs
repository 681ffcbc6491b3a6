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

//! Disulfide bridges between residue pairs.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use super::ResidueKey;

/// Disulfide bridge declared by one SSBOND record.
///
/// The pair is ordered: `first` and `second` keep the order of the record
/// they were read from, so generated commands follow the input file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SsBond {
    /// First residue of the bridge
    first: ResidueKey,
    /// Second residue of the bridge
    second: ResidueKey,
}

impl SsBond {
    /// Create a new bridge. Performs no sanity checks.
    pub fn new(first: ResidueKey, second: ResidueKey) -> Self {
        Self { first, second }
    }

    /// Both residues of the bridge, in record order.
    pub fn residues(&self) -> [&ResidueKey; 2] {
        [&self.first, &self.second]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residues_keep_record_order() {
        let bond = SsBond::new(
            ResidueKey::new('A', 40, "CYS"),
            ResidueKey::new('A', 5, "CYS"),
        );
        assert_eq!(bond.first().number(), 40);
        assert_eq!(bond.second().number(), 5);
        let [first, second] = bond.residues();
        assert_eq!(first, bond.first());
        assert_eq!(second, bond.second());
    }
}
