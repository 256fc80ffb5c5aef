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

//! CLI command definitions and argument parsing.

use crate::commands;
use clap::{Subcommand, ValueEnum};

/// Output formats for the convert command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Lineage-linked GEDCOM text
    Ged,
    /// Tab-separated (level, tag, value columns)
    Tsv,
    /// JSON object keyed by record identifier
    Json,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a GEDCOM file and report its structure
    Validate {
        /// GEDCOM file to validate
        file: String,

        /// Maximum nesting level accepted
        #[arg(long)]
        max_level: Option<u32>,

        /// Maximum number of lines accepted
        #[arg(long)]
        max_lines: Option<usize>,
    },

    /// Convert a GEDCOM file to another output format
    Convert {
        /// GEDCOM file to convert
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value = "ged")]
        to: OutputFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Compact JSON output (single line)
        #[arg(long)]
        compact: bool,
    },

    /// Convert exported JSON back into GEDCOM text
    FromJson {
        /// JSON file to convert
        file: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List individual records with their names
    Persons {
        /// GEDCOM file to read
        file: String,
    },

    /// Summarize record counts and nesting depth
    Stats {
        /// GEDCOM file to read
        file: String,
    },
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Validate {
                file,
                max_level,
                max_lines,
            } => commands::validate(&file, max_level, max_lines),
            Commands::Convert {
                file,
                to,
                output,
                compact,
            } => commands::convert(&file, to, output.as_deref(), compact),
            Commands::FromJson { file, output } => {
                commands::from_json(&file, output.as_deref())
            }
            Commands::Persons { file } => commands::persons(&file),
            Commands::Stats { file } => commands::stats(&file),
        }
    }
}
