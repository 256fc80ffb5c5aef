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

//! Persons command - list individual records.

use super::read_file;
use colored::Colorize;
use gedtree_core::{flatten, parse};

/// List individual records with their identifier and name.
///
/// Uses the flattened scalar listing, so the name shown is the record's
/// NAME field with surname slashes as stored.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
pub fn persons(file: &str) -> Result<(), String> {
    let content = read_file(file)?;
    let ctx = parse(&content).map_err(|e| format!("{}", e))?;

    let mut count = 0;
    for record in flatten(&ctx) {
        if record.kind != "INDI" {
            continue;
        }
        count += 1;
        let name = record
            .fields
            .iter()
            .find(|(path, _)| path == "NAME")
            .map(|(_, value)| value.as_str())
            .unwrap_or("(no name)");
        println!("{}  {}", record.id.bold(), name);
    }
    println!("{} persons", count);
    Ok(())
}
