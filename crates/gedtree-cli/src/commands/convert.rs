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

//! Convert commands - regenerate a GEDCOM file in another format.

use super::{read_file, write_output};
use crate::cli::OutputFormat;
use gedtree_core::{parse, to_ged, to_tsv};
use gedtree_json::{to_json, ToJsonConfig};

/// Convert a GEDCOM file to GEDCOM, tab-separated, or JSON output.
///
/// Converting to GEDCOM normalizes line endings and whitespace and appends
/// the trailer, which makes it useful as a cleanup pass on its own.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed, or if output
/// cannot be written.
pub fn convert(
    file: &str,
    to: OutputFormat,
    output: Option<&str>,
    compact: bool,
) -> Result<(), String> {
    let content = read_file(file)?;
    let ctx = parse(&content).map_err(|e| format!("{}", e))?;

    let rendered = match to {
        OutputFormat::Ged => to_ged(&ctx),
        OutputFormat::Tsv => to_tsv(&ctx),
        OutputFormat::Json => {
            let config = ToJsonConfig {
                pretty: !compact,
                ..ToJsonConfig::default()
            };
            to_json(&ctx, &config).map_err(|e| format!("{}", e))?
        }
    };

    write_output(output, &rendered)
}

/// Convert exported JSON back into GEDCOM text.
///
/// The JSON must have the shape `convert --to json` emits; the imported
/// tree is validated before serialization.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, is not valid JSON, does not
/// match the expected shape, or violates the context invariants.
pub fn from_json(file: &str, output: Option<&str>) -> Result<(), String> {
    let content = read_file(file)?;
    let text = String::from_utf8(content)
        .map_err(|e| format!("File '{}' is not valid UTF-8: {}", file, e))?;
    let ctx = gedtree_json::from_json(&text).map_err(|e| format!("{}", e))?;
    write_output(output, &to_ged(&ctx))
}
