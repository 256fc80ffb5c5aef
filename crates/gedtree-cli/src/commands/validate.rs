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

//! Validate command - GEDCOM file syntax and structure validation.

use super::read_file;
use colored::Colorize;
use gedtree_core::{parse_with_options, traverse, ParseOptions, StatsCollector};

/// Validate a GEDCOM file for syntax and structural correctness.
///
/// Parses the file and prints a summary of its structure: record, person,
/// and family counts, plus the maximum nesting depth. Optional limits cap
/// the accepted nesting level and line count.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, if a line has a malformed
/// level, if a token cannot be classified, or if the level structure walks
/// above the document root.
pub fn validate(file: &str, max_level: Option<u32>, max_lines: Option<usize>) -> Result<(), String> {
    let content = read_file(file)?;

    let mut builder = ParseOptions::builder();
    if let Some(level) = max_level {
        builder = builder.max_level(level);
    }
    if let Some(lines) = max_lines {
        builder = builder.max_lines(lines);
    }

    match parse_with_options(&content, builder.build()) {
        Ok(ctx) => {
            let mut collector = StatsCollector::default();
            let _ = traverse(&ctx, &mut collector);
            println!("{} {}", "✓".green().bold(), file);
            println!("  Records: {}", collector.record_count);
            println!("  Persons: {}", collector.person_count);
            println!("  Families: {}", collector.family_count);
            println!("  Max depth: {}", collector.max_depth);
            if ctx.head().is_none() {
                println!("  {} no document header", "warning:".yellow());
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(format!("{}", e))
        }
    }
}
