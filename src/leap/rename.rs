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

//! Shell script that retypes bridged cysteines as CYX.
//!
//! tleap only forms a disulfide bond if both partners carry the CYX residue
//! name and no thiol hydrogen, so the script rewrites the hydrogenated
//! structure with one rename and one HG-strip sed command per partner
//! before the main tleap run loads it.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use super::{HYDROGENATED, HYDROGENATED_CYX, HYDROGENATED_TMP};
use crate::topology::{ResidueIndex, SsBond};

/// Write the cysteine rename script.
///
/// Only partners named CYS with a known index produce sed commands; an
/// unmapped partner is skipped here without note, leaving the report to
/// the tleap script.
pub fn write_rename_script(
    writer: &mut impl Write,
    dir: &Path,
    index: &ResidueIndex,
    ssbonds: &[SsBond],
) -> Result<()> {
    writeln!(writer, "#!/bin/bash")?;
    writeln!(writer, "cd {}", dir.display())?;
    writeln!(writer, "cp {} {}", HYDROGENATED, HYDROGENATED_TMP)?;
    for bond in ssbonds {
        for residue in bond.residues() {
            if !residue.is_cysteine() {
                continue;
            }
            if let Some(n) = index.get(residue) {
                writeln!(
                    writer,
                    "sed -i '/CYS *{} /s/CYS/CYX/' {}",
                    n, HYDROGENATED_TMP
                )?;
                writeln!(
                    writer,
                    "sed -i '/CYX *{} /{{ / HG /d }}' {}",
                    n, HYDROGENATED_TMP
                )?;
            }
        }
    }
    writeln!(writer, "cp {} {}", HYDROGENATED_TMP, HYDROGENATED_CYX)?;
    Ok(())
}
