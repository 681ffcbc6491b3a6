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

//! The main tleap input: force fields, disulfide bonds, ions, solvation.

use std::io::Write;

use anyhow::Result;

use super::{AMBER_SUBDIR, HYDROGENATED_CYX};
use crate::topology::{ResidueIndex, SsBond};

/// Write the tleap input script.
///
/// Each SSBOND record yields exactly one line, duplicates included: a
/// `bond` command through the gamma sulfurs when both partners map to an
/// index, otherwise a warning comment naming the pair.
pub fn write_tleap_input(
    writer: &mut impl Write,
    index: &ResidueIndex,
    ssbonds: &[SsBond],
) -> Result<()> {
    writeln!(writer, "source leaprc.protein.ff19SB")?;
    writeln!(writer, "source leaprc.gaff2")?;
    writeln!(writer, "source leaprc.lipid21")?;
    writeln!(writer, "source leaprc.water.tip3p")?;
    writeln!(writer, "loadamberparams frcmod.ionsjc_tip3p")?;
    writeln!(writer)?;
    writeln!(writer, "# Step 2: Load renamed CYX PDB")?;
    writeln!(writer, "mol = loadpdb {}", HYDROGENATED_CYX)?;
    writeln!(writer)?;
    writeln!(writer, "# Step 3: Add disulfide bonds")?;
    for bond in ssbonds {
        match (index.get(bond.first()), index.get(bond.second())) {
            (Some(n1), Some(n2)) => writeln!(writer, "bond mol.{}.SG mol.{}.SG", n1, n2)?,
            _ => {
                log::warn!(
                    "Residue lookup failed for bridge {} - {}",
                    bond.first(),
                    bond.second()
                );
                writeln!(
                    writer,
                    "# Warning: could not map {} or {}",
                    bond.first(),
                    bond.second()
                )?;
            }
        }
    }
    writeln!(writer)?;
    writeln!(writer, "# Step 4: Add ions and solvate")?;
    writeln!(writer, "addions mol K+ 0")?;
    writeln!(writer, "addions mol Cl- 0")?;
    writeln!(writer, "solvatebox mol TIP3PBOX 10.0")?;
    writeln!(writer)?;
    writeln!(writer, "# Step 5: Save output")?;
    writeln!(writer, "savepdb mol {}/with_water.pdb", AMBER_SUBDIR)?;
    writeln!(
        writer,
        "saveamberparm mol {}/com.prmtop {}/com.inpcrd",
        AMBER_SUBDIR, AMBER_SUBDIR
    )?;
    writeln!(writer, "quit")?;
    Ok(())
}
