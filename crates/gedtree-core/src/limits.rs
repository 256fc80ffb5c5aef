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

//! Input limits for GEDCOM parsing.

/// Configurable limits for parser input.
///
/// The build itself is atomic and cannot be cancelled mid-document, so
/// callers bound resource usage up front: all limits are enforced during
/// preprocessing, before any token is produced.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum file size in bytes (default: 256MB).
    pub max_file_size: usize,
    /// Maximum line length in bytes (default: 64KB).
    pub max_line_length: usize,
    /// Maximum number of lines (default: 10M).
    pub max_lines: usize,
    /// Maximum nesting level on a line (default: 99).
    pub max_level: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: 256 * 1024 * 1024, // 256MB
            max_line_length: 64 * 1024,       // 64KB
            max_lines: 10_000_000,
            max_level: 99,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_file_size: usize::MAX,
            max_line_length: usize::MAX,
            max_lines: usize::MAX,
            max_level: u32::MAX,
        }
    }
}
