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

//! # tleap input generation
//!
//! Two scripts are generated per input structure and written into a
//! directory named after it: a shell script renaming bridged cysteines
//! to CYX ([`RENAME_SCRIPT`]) and the main tleap input ([`TLEAP_INPUT`])
//! that loads the renamed structure, declares the disulfide bonds, adds
//! counter ions, solvates and saves the parameterized system under
//! [`AMBER_SUBDIR`]. Neither script is executed here; running them is
//! left to the operator.

mod rename;
mod tleap;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::topology::{ResidueIndex, SsBond};
pub use rename::write_rename_script;
pub use tleap::write_tleap_input;

/// Generated shell script renaming bridged cysteines
pub const RENAME_SCRIPT: &str = "rename_cys_to_cyx.sh";
/// Generated tleap input declaring bonds, ions and solvent
pub const TLEAP_INPUT: &str = "tleap.in";
/// Subdirectory tleap saves the parameterized system into
pub const AMBER_SUBDIR: &str = "amber_input";

// Hydrogenated structure the rename script expects in the output
// directory, produced by an earlier tleap pass, plus its two rewrites.
pub(crate) const HYDROGENATED: &str = "first_with_hydrogens.pdb";
pub(crate) const HYDROGENATED_TMP: &str = "first_with_hydrogens_tmp.pdb";
pub(crate) const HYDROGENATED_CYX: &str = "first_with_hydrogens_cyx.pdb";

/// Output directory for one input structure, named after the file.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    dir: PathBuf,
}

impl OutputLayout {
    /// Create the output directory next to the current working directory.
    ///
    /// The directory takes the input's base name with the extension
    /// stripped, e.g. `structures/toxin.pdb` becomes `toxin/`, and the
    /// [`AMBER_SUBDIR`] subdirectory is created along with it.
    pub fn create(input: &Path) -> Result<Self> {
        let dir = derived_dir(input)?;
        std::fs::create_dir_all(dir.join(AMBER_SUBDIR))
            .with_context(|| format!("cannot create output directory {:?}", dir))?;
        Ok(Self { dir })
    }

    /// Output directory, relative to the working directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write both generated scripts into the output directory.
    pub fn generate(&self, index: &ResidueIndex, ssbonds: &[SsBond]) -> Result<()> {
        let path = self.dir.join(RENAME_SCRIPT);
        let mut writer = BufWriter::new(create_file(&path)?);
        write_rename_script(&mut writer, &self.dir, index, ssbonds)?;
        writer.flush()?;
        log::info!("Wrote {}", path.display());

        let path = self.dir.join(TLEAP_INPUT);
        let mut writer = BufWriter::new(create_file(&path)?);
        write_tleap_input(&mut writer, index, ssbonds)?;
        writer.flush()?;
        log::info!("Wrote {}", path.display());
        Ok(())
    }
}

/// Output directory name for an input structure: the base name with the
/// extension stripped, parent directories dropped.
fn derived_dir(input: &Path) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .with_context(|| format!("cannot derive an output directory from {:?}", input))?;
    Ok(PathBuf::from(stem))
}

fn create_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("cannot create {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_name_strips_path_and_extension() {
        assert_eq!(
            derived_dir(Path::new("structures/toxin.pdb")).unwrap(),
            Path::new("toxin")
        );
        // extensionless names pass through; only the last dot is stripped
        assert_eq!(derived_dir(Path::new("toxin")).unwrap(), Path::new("toxin"));
        assert_eq!(derived_dir(Path::new("a.b.pdb")).unwrap(), Path::new("a.b"));
    }

    #[test]
    fn inputs_without_a_file_name_are_rejected() {
        assert!(derived_dir(Path::new("..")).is_err());
        assert!(derived_dir(Path::new("")).is_err());
    }
}
