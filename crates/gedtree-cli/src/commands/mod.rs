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

//! CLI command implementations.

mod convert;
mod persons;
mod stats;
mod validate;

pub use convert::{convert, from_json};
pub use persons::persons;
pub use stats::stats;
pub use validate::validate;

use std::fs;
use std::io::{self, Write};

/// Default maximum file size read by the CLI (1 GB).
/// Can be overridden via the GEDTREE_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("GEDTREE_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with a size check before allocation.
pub fn read_file(path: &str) -> Result<Vec<u8>, String> {
    let metadata = fs::metadata(path)
        .map_err(|e| format!("Failed to get metadata for '{}': {}", path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(format!(
            "File '{}' is too large ({} bytes). Maximum allowed size is {} bytes.\n\
             To process larger files, set GEDTREE_MAX_FILE_SIZE (in bytes).",
            path,
            metadata.len(),
            max_file_size,
        ));
    }

    fs::read(path).map_err(|e| format!("Failed to read '{}': {}", path, e))
}

/// Write output to a file, or stdout when no path is given.
pub fn write_output(output: Option<&str>, contents: &str) -> Result<(), String> {
    match output {
        Some(path) => fs::write(path, contents)
            .map_err(|e| format!("Failed to write '{}': {}", path, e)),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(contents.as_bytes())
                .and_then(|_| handle.write_all(b"\n"))
                .map_err(|e| format!("Failed to write to stdout: {}", e))
        }
    }
}
