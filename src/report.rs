//! Serializable summary of one generation run.

use std::path::{Path, PathBuf};

use itertools::{Either, Itertools};
use serde::Serialize;

use crate::topology::{ResidueIndex, SsBond};

/// What a run read and what the generated scripts will do, for the
/// optional YAML report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Input structure file
    input: PathBuf,
    /// Directory the scripts were written into
    output_dir: PathBuf,
    /// Number of distinct residues indexed from the atom records
    residues: usize,
    /// Number of SSBOND records found, duplicates included
    ssbond_records: usize,
    /// Bonds the tleap script declares, as pairs of 1-based residue
    /// indices in record order
    bonds: Vec<[usize; 2]>,
    /// Records with at least one partner missing from the atom records
    unmapped: Vec<SsBond>,
}

impl Report {
    pub fn new(
        input: &Path,
        output_dir: &Path,
        index: &ResidueIndex,
        ssbonds: &[SsBond],
    ) -> Self {
        let (bonds, unmapped) = ssbonds.iter().partition_map(|bond| {
            match (index.get(bond.first()), index.get(bond.second())) {
                (Some(n1), Some(n2)) => Either::Left([n1, n2]),
                _ => Either::Right(bond.clone()),
            }
        });
        Self {
            input: input.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            residues: index.len(),
            ssbond_records: ssbonds.len(),
            bonds,
            unmapped,
        }
    }
}
