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

pub mod cli;
pub mod leap;
pub mod pdb;
pub mod report;
pub mod topology;

pub use crate::pdb::{scan, PdbRecords};
pub use crate::topology::{ResidueIndex, ResidueKey, SsBond};
