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

use crate::{
    leap::{OutputLayout, RENAME_SCRIPT, TLEAP_INPUT},
    pdb,
    report::Report,
    topology::ResidueIndex,
};
use anyhow::Result;
use clap::Parser;
use pretty_env_logger::env_logger::DEFAULT_FILTER_ENV;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Input structure in PDB format
    pub input: PathBuf,

    /// Verbose output. See more with e.g. RUST_LOG=Trace
    #[clap(long, short = 'v', action)]
    pub verbose: bool,
    /// Also write a YAML report of the run to this file
    #[clap(long, short = 'r')]
    pub report: Option<PathBuf>,
}

pub fn do_main() -> Result<()> {
    let args = Args::parse();
    if std::env::var(DEFAULT_FILTER_ENV).is_err() {
        std::env::set_var(
            DEFAULT_FILTER_ENV,
            if args.verbose { "Debug" } else { "Info" },
        );
    }
    pretty_env_logger::init();

    run(&args.input, args.report.as_deref())
}

/// Helper function to serialize data to a YAML file
fn write_yaml<T: serde::Serialize>(data: &T, output: &mut std::fs::File) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    output.write_all(yaml.as_bytes())?;
    Ok(())
}

fn run(input: &Path, report: Option<&Path>) -> Result<()> {
    let records = pdb::scan(input)?;
    let index = ResidueIndex::from_keys(records.residues);
    log::info!("Indexed {} residues from {:?}", index.len(), input);
    log::info!("Found {} SSBOND records", records.ssbonds.len());

    let layout = OutputLayout::create(input)?;
    layout.generate(&index, &records.ssbonds)?;

    if let Some(path) = report {
        let summary = Report::new(input, layout.dir(), &index, &records.ssbonds);
        let mut file = std::fs::File::create(path)?;
        write_yaml(&summary, &mut file)?;
        log::info!("Wrote {}", path.display());
    }

    // Manual follow-up commands; none of the generated scripts are run here
    println!("All files saved in: {}/", layout.dir().display());
    println!("To run the steps, execute:");
    println!(
        "cd {} && tleap -f make_hydrogens.in && bash {} && tleap -f {}",
        layout.dir().display(),
        RENAME_SCRIPT,
        TLEAP_INPUT
    );
    Ok(())
}
