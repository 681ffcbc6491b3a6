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

//! Residue identities as they appear in structure records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Residue name that tleap bonds through its gamma sulfur.
const CYSTEINE: &str = "CYS";

/// Identity of one residue: chain, sequence number, name.
///
/// Equality is exact on all three fields. A blank chain identifier is kept
/// as a space so that keys read from coordinate records and from SSBOND
/// records compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResidueKey {
    /// Single-character chain identifier
    chain: char,
    /// Residue sequence number
    number: i32,
    /// Residue name, e.g. "CYS"
    name: String,
}

impl ResidueKey {
    pub fn new(chain: char, number: i32, name: impl Into<String>) -> Self {
        Self {
            chain,
            number,
            name: name.into(),
        }
    }

    /// Chain identifier (a space if the record left it blank)
    #[inline(always)]
    pub fn chain(&self) -> char {
        self.chain
    }

    /// Residue sequence number
    #[inline(always)]
    pub fn number(&self) -> i32 {
        self.number
    }

    /// Residue name
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if the residue is named as an unbridged cysteine
    pub fn is_cysteine(&self) -> bool {
        self.name == CYSTEINE
    }
}

impl fmt::Display for ResidueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.chain, self.number, self.name)
    }
}
