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

//! Stats command - record counts and structure summary.

use super::read_file;
use gedtree_core::{parse, traverse, StatsCollector};

/// Summarize a GEDCOM file: record counts by kind and nesting depth.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
pub fn stats(file: &str) -> Result<(), String> {
    let content = read_file(file)?;
    let ctx = parse(&content).map_err(|e| format!("{}", e))?;

    let mut collector = StatsCollector::default();
    let _ = traverse(&ctx, &mut collector);

    println!("File: {}", file);
    println!("  Records: {}", collector.record_count);
    println!("  Persons: {}", collector.person_count);
    println!("  Families: {}", collector.family_count);
    println!("  Other records: {}", other_records(&collector));
    println!("  Nodes: {}", collector.node_count);
    println!("  Max depth: {}", collector.max_depth);
    Ok(())
}

fn other_records(collector: &StatsCollector) -> usize {
    collector.record_count - collector.person_count - collector.family_count
}
