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

//! # Structure file scanning
//!
//! A single pass over a PDB file collects the residue identity of every
//! ATOM/HETATM record and the residue pairs of every SSBOND record, both in
//! file order. All other record types are skipped unread. The input is never
//! modified; renaming happens later through the generated shell script.

mod record;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::topology::{ResidueKey, SsBond};

/// Records collected from one pass over a structure file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PdbRecords {
    /// Residue identity of every ATOM/HETATM record, one entry per atom.
    /// Consecutive atoms of one residue repeat its key; collapsing the
    /// repeats is [`crate::topology::ResidueIndex`]'s job.
    pub residues: Vec<ResidueKey>,
    /// Bridges from SSBOND records, duplicates included, in file order.
    pub ssbonds: Vec<SsBond>,
}

/// Scan a PDB file for residue identities and disulfide records.
pub fn scan(path: &Path) -> Result<PdbRecords> {
    let file = File::open(path).with_context(|| format!("cannot open {:?}", path))?;
    scan_reader(BufReader::new(file)).with_context(|| format!("cannot parse {:?}", path))
}

/// Scan any line-oriented source. See [`scan`].
///
/// Fails on the first ATOM, HETATM or SSBOND record whose residue number
/// columns do not parse; the error names the offending line.
pub fn scan_reader(reader: impl BufRead) -> Result<PdbRecords> {
    let mut records = PdbRecords::default();
    for (line, number) in reader.lines().zip(1..) {
        let line = line?;
        if line.starts_with("ATOM") || line.starts_with("HETATM") {
            let residue = record::atom_residue(&line)
                .with_context(|| format!("bad atom record on line {}", number))?;
            records.residues.push(residue);
        } else if line.starts_with("SSBOND") {
            let bond = record::ssbond_pair(&line)
                .with_context(|| format!("bad SSBOND record on line {}", number))?;
            records.ssbonds.push(bond);
        }
    }
    log::debug!(
        "Scanned {} atom records and {} SSBOND records",
        records.residues.len(),
        records.ssbonds.len()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = concat!(
        "HEADER    MEMBRANE PROTEIN\n",
        "REMARK   2 RESOLUTION.    2.00 ANGSTROMS.\n",
        "SSBOND   1 CYS A    5    CYS A   40\n",
        "ATOM      1  N   CYS A   5      11.104  13.207   2.100  1.00 20.00           N\n",
        "ATOM      2  SG  CYS A   5      11.504  13.607   2.500  1.00 20.00           S\n",
        "TER\n",
        "HETATM    3  K     K A 201      20.000  20.000  20.000  1.00 30.00           K\n",
        "END\n",
    );

    #[test]
    fn collects_atoms_and_ssbonds_in_file_order() {
        let records = scan_reader(MINIMAL.as_bytes()).unwrap();
        assert_eq!(
            records.residues,
            vec![
                ResidueKey::new('A', 5, "CYS"),
                ResidueKey::new('A', 5, "CYS"),
                ResidueKey::new('A', 201, "K"),
            ]
        );
        assert_eq!(records.ssbonds.len(), 1);
        assert_eq!(*records.ssbonds[0].first(), ResidueKey::new('A', 5, "CYS"));
        assert_eq!(*records.ssbonds[0].second(), ResidueKey::new('A', 40, "CYS"));
    }

    #[test]
    fn other_record_types_are_ignored() {
        let records = scan_reader("REMARK\nTER\nEND\n".as_bytes()).unwrap();
        assert!(records.residues.is_empty());
        assert!(records.ssbonds.is_empty());
    }

    #[test]
    fn empty_input_is_fine() {
        let records = scan_reader("".as_bytes()).unwrap();
        assert_eq!(records, PdbRecords::default());
    }

    #[test]
    fn error_reports_one_based_line_number() {
        let input = "TER\nATOM      1  N   CYS A   x      0.000   0.000   0.000\n";
        let err = scan_reader(input.as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn duplicate_ssbond_records_are_kept() {
        let line = "SSBOND   1 CYS A    5    CYS A   40\n";
        let input = format!("{}{}", line, line);
        let records = scan_reader(input.as_bytes()).unwrap();
        assert_eq!(records.ssbonds.len(), 2);
        assert_eq!(records.ssbonds[0], records.ssbonds[1]);
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = scan(Path::new("no_such_file.pdb")).unwrap_err();
        assert!(err.to_string().contains("no_such_file.pdb"));
    }
}
