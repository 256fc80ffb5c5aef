// gedtree - GEDCOM lineage-linked document toolkit
//
// Copyright (c) 2026 gedtree contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! GEDCOM toolkit command line interface.

use clap::Parser;
use gedtree_cli::cli::Commands;
use std::process::ExitCode;

/// gedtree - GEDCOM lineage-linked document toolkit
///
/// # Examples
///
/// ```bash
/// # Validate a GEDCOM file
/// gedtree validate family.ged
///
/// # Convert to tab-separated or JSON form
/// gedtree convert family.ged --to tsv
/// gedtree convert family.ged --to json --output family.json
///
/// # Turn exported JSON back into GEDCOM
/// gedtree from-json family.json --output family.ged
///
/// # List individuals, or summarize the tree
/// gedtree persons family.ged
/// gedtree stats family.ged
/// ```
#[derive(Parser)]
#[command(name = "gedtree")]
#[command(author, version, about = "GEDCOM lineage-linked document toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
