//! Shared utilities for integration tests.
//!
//! Provides helpers for running the `leapgen` CLI binary in a scratch
//! working directory, plus a small column-exact PDB fixture shared by
//! several test files.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to the compiled `leapgen` binary.
pub fn leapgen_binary() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_BIN_EXE_leapgen"));
    if !path.exists() {
        path = PathBuf::from("target/debug/leapgen");
    }
    path
}

/// Run leapgen in `workdir` with the given arguments and assert success.
///
/// The working directory matters: the output directory is created relative
/// to it, so every test gets its own scratch directory.
pub fn run_leapgen(workdir: &Path, args: &[&str]) -> Output {
    let output = Command::new(leapgen_binary())
        .args(args)
        .current_dir(workdir)
        .output()
        .expect("failed to execute leapgen binary");
    assert!(
        output.status.success(),
        "leapgen exited with status {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

/// Write the smallest interesting structure: two chain-A cysteines with
/// sequence numbers 5 and 40, bridged by one SSBOND record.
pub fn write_two_cysteine_pdb(path: &Path) {
    let pdb = concat!(
        "HEADER    DE NOVO PROTEIN                 01-JAN-24   1TST\n",
        "SSBOND   1 CYS A    5    CYS A   40                          1555   1555  2.03\n",
        "ATOM      1  CA  CYS A   5      11.104  13.207   2.100  1.00 20.00           C\n",
        "ATOM      2  SG  CYS A   5      11.504  13.607   2.500  1.00 20.00           S\n",
        "ATOM      3  CA  CYS A  40      12.304  14.407   3.300  1.00 20.00           C\n",
        "ATOM      4  SG  CYS A  40      12.704  14.807   3.700  1.00 20.00           S\n",
        "TER       5      CYS A  40\n",
        "END\n",
    );
    std::fs::write(path, pdb).expect("failed to write PDB fixture");
}

/// All sed commands of a generated rename script, in order.
pub fn sed_commands(script: &str) -> Vec<&str> {
    script
        .lines()
        .filter(|line| line.starts_with("sed -i"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sed_commands_picks_only_sed_lines() {
        let script = "#!/bin/bash\ncd x\nsed -i 'a' f\ncp a b\nsed -i 'b' f\n";
        assert_eq!(sed_commands(script), vec!["sed -i 'a' f", "sed -i 'b' f"]);
    }

    #[test]
    fn fixture_places_fields_in_pdb_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.pdb");
        write_two_cysteine_pdb(&path);
        let contents = std::fs::read_to_string(&path).unwrap();
        let atom = contents.lines().nth(2).unwrap();
        assert_eq!(&atom[17..20], "CYS");
        assert_eq!(&atom[21..22], "A");
        assert_eq!(atom[22..26].trim(), "5");
        let ssbond = contents.lines().nth(1).unwrap();
        assert_eq!(&ssbond[11..14], "CYS");
        assert_eq!(ssbond[31..35].trim(), "40");
    }
}
