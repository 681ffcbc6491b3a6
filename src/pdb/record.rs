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

//! Fixed-column field extraction for ATOM, HETATM and SSBOND records.
//!
//! PDB records are fixed-width; whitespace splitting would misread lines
//! with missing chain identifiers or merged fields, so fields are sliced
//! by byte position and trimmed. A range past the end of the line reads
//! as an empty field.

use std::ops::Range;

use anyhow::{Context, Result};

use crate::topology::{ResidueKey, SsBond};

// ATOM/HETATM: residue name, chain identifier, residue sequence number
const ATOM_NAME: Range<usize> = 17..20;
const ATOM_CHAIN: usize = 21;
const ATOM_NUMBER: Range<usize> = 22..26;

// SSBOND: the same three fields for each of the two partners
const SSBOND_NAME1: Range<usize> = 11..14;
const SSBOND_CHAIN1: usize = 15;
const SSBOND_NUMBER1: Range<usize> = 17..21;
const SSBOND_NAME2: Range<usize> = 25..28;
const SSBOND_CHAIN2: usize = 29;
const SSBOND_NUMBER2: Range<usize> = 31..35;

/// Residue identity from an ATOM or HETATM record.
pub(super) fn atom_residue(line: &str) -> Result<ResidueKey> {
    residue_fields(line, ATOM_NAME, ATOM_CHAIN, ATOM_NUMBER)
}

/// Both residue identities from an SSBOND record, in record order.
pub(super) fn ssbond_pair(line: &str) -> Result<SsBond> {
    let first = residue_fields(line, SSBOND_NAME1, SSBOND_CHAIN1, SSBOND_NUMBER1)?;
    let second = residue_fields(line, SSBOND_NAME2, SSBOND_CHAIN2, SSBOND_NUMBER2)?;
    Ok(SsBond::new(first, second))
}

fn residue_fields(
    line: &str,
    name: Range<usize>,
    chain: usize,
    number: Range<usize>,
) -> Result<ResidueKey> {
    let digits = column(line, number.clone());
    let number = digits.parse::<i32>().with_context(|| {
        format!(
            "invalid residue number {:?} in columns {}-{}",
            digits,
            number.start + 1,
            number.end
        )
    })?;
    let chain = column(line, chain..chain + 1).chars().next().unwrap_or(' ');
    Ok(ResidueKey::new(chain, number, column(line, name)))
}

/// Slice a column range out of a record line and trim surrounding blanks.
fn column(line: &str, range: Range<usize>) -> &str {
    let end = range.end.min(line.len());
    line.get(range.start..end).unwrap_or("").trim()
}
