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

//! Export-header synthesis.
//!
//! An exported document carries a freshly built 5.5.1 lineage-linked
//! header in place of whatever header the source had: source-system
//! identification, format declaration, character set, export date,
//! submitter, and file name. The synthesized nodes carry the same literal
//! lines and values a parse of the emitted text would reconstruct, so
//! export output round-trips through the builder unchanged.
//!
//! The export date is caller-supplied text; this crate never reads the
//! clock.

use crate::context::{Context, Node, HEAD_KEY};
use crate::error::{GedError, GedResult};
use crate::token::HEAD_TAG;

/// Source-system identifier emitted in the header.
pub const SOURCE_SYSTEM_ID: &str = "GEDTREE";
/// Human-readable source-system name.
pub const SOURCE_SYSTEM_NAME: &str = "gedtree";
/// Source-system version.
pub const SOURCE_SYSTEM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options for synthesizing an export header.
#[derive(Debug, Clone)]
pub struct HeaderOptions {
    /// Submitter display name; required, must not be blank.
    pub submitter_name: String,
    /// Submitter record identifier, when the document has one.
    pub submitter_id: Option<String>,
    /// Output file name; required, must not be blank. Whitespace runs are
    /// replaced with dashes and a `.ged` suffix is ensured.
    pub file_name: String,
    /// Export date text, e.g. `26 AUG 2026`.
    pub date: String,
}

impl HeaderOptions {
    /// Create options with the required fields.
    pub fn new(
        submitter_name: impl Into<String>,
        file_name: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            submitter_name: submitter_name.into(),
            submitter_id: None,
            file_name: file_name.into(),
            date: date.into(),
        }
    }

    /// Set the submitter record identifier.
    pub fn submitter_id(mut self, id: impl Into<String>) -> Self {
        self.submitter_id = Some(id.into());
        self
    }

    /// The sanitized file name as it appears on the FILE line.
    pub fn sanitized_file_name(&self) -> String {
        let mut name = self
            .file_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        if !name.to_ascii_lowercase().ends_with(".ged") {
            name.push_str(".ged");
        }
        name
    }
}

/// Build a standard export header record.
pub fn standard_header(options: &HeaderOptions) -> GedResult<Node> {
    if options.submitter_name.trim().is_empty() {
        return Err(GedError::invalid_shape("submitter name is required"));
    }
    if options.file_name.trim().is_empty() {
        return Err(GedError::invalid_shape("file name is required"));
    }

    let mut head = Node::new();
    head.kind = Some(HEAD_TAG.to_string());
    head.line = Some(format!("0 {}", HEAD_TAG));

    let mut sour = entry(1, "SOUR", SOURCE_SYSTEM_ID);
    sour.set_child("NAME", entry(2, "NAME", SOURCE_SYSTEM_NAME));
    sour.set_child("VERS", entry(2, "VERS", SOURCE_SYSTEM_VERSION));
    head.set_child("SOUR", sour);

    let mut gedc = entry(1, "GEDC", "");
    gedc.set_child("VERS", entry(2, "VERS", "5.5.1"));
    gedc.set_child("FORM", entry(2, "FORM", "LINEAGE-LINKED"));
    head.set_child("GEDC", gedc);

    head.set_child("CHAR", entry(1, "CHAR", "UTF-8"));
    head.set_child("DATE", entry(1, "DATE", &options.date));

    let mut subm = match &options.submitter_id {
        Some(id) => entry(1, "SUBM", id),
        None => entry(1, "SUBM", ""),
    };
    subm.set_child("NAME", entry(2, "NAME", &options.submitter_name));
    head.set_child("SUBM", subm);

    head.set_child("FILE", entry(1, "FILE", &options.sanitized_file_name()));

    Ok(head)
}

/// Replace the context's header with a freshly synthesized export header.
pub fn apply_standard_header(context: &mut Context, options: &HeaderOptions) -> GedResult<()> {
    let head = standard_header(options)?;
    context.insert(HEAD_KEY, head);
    Ok(())
}

fn entry(level: u32, tag: &str, value: &str) -> Node {
    let line = if value.trim().is_empty() {
        format!("{} {}", level, tag)
    } else {
        format!("{} {} {}", level, tag, value)
    };
    Node::leaf(value, line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::parse;
    use crate::error::GedErrorKind;
    use crate::writer::to_ged;

    fn options() -> HeaderOptions {
        HeaderOptions::new("Jane Doe", "family tree", "26 AUG 2026")
    }

    // ==================== Synthesis tests ====================

    #[test]
    fn test_standard_header_structure() {
        let head = standard_header(&options()).unwrap();
        assert_eq!(head.kind.as_deref(), Some("HEAD"));
        assert_eq!(head.line.as_deref(), Some("0 HEAD"));
        let sour = head.child("SOUR").unwrap();
        assert_eq!(sour.value.as_deref(), Some(SOURCE_SYSTEM_ID));
        assert_eq!(sour.scalar("NAME"), Some(SOURCE_SYSTEM_NAME));
        let gedc = head.child("GEDC").unwrap();
        assert_eq!(gedc.line.as_deref(), Some("1 GEDC"));
        assert_eq!(gedc.scalar("VERS"), Some("5.5.1"));
        assert_eq!(gedc.scalar("FORM"), Some("LINEAGE-LINKED"));
        assert_eq!(head.scalar("CHAR"), Some("UTF-8"));
        assert_eq!(head.scalar("DATE"), Some("26 AUG 2026"));
    }

    #[test]
    fn test_submitter_without_id() {
        let head = standard_header(&options()).unwrap();
        let subm = head.child("SUBM").unwrap();
        assert_eq!(subm.line.as_deref(), Some("1 SUBM"));
        assert_eq!(subm.scalar("NAME"), Some("Jane Doe"));
    }

    #[test]
    fn test_submitter_with_id() {
        let head = standard_header(&options().submitter_id("@U1@")).unwrap();
        assert_eq!(
            head.child("SUBM").unwrap().line.as_deref(),
            Some("1 SUBM @U1@")
        );
    }

    #[test]
    fn test_file_name_sanitized() {
        let opts = options();
        assert_eq!(opts.sanitized_file_name(), "family-tree.ged");
        let head = standard_header(&opts).unwrap();
        assert_eq!(
            head.child("FILE").unwrap().line.as_deref(),
            Some("1 FILE family-tree.ged")
        );
    }

    #[test]
    fn test_file_name_suffix_not_doubled() {
        let opts = HeaderOptions::new("Jane", "tree.ged", "26 AUG 2026");
        assert_eq!(opts.sanitized_file_name(), "tree.ged");
    }

    // ==================== Validation tests ====================

    #[test]
    fn test_blank_submitter_name_rejected() {
        let err = standard_header(&HeaderOptions::new("  ", "tree", "26 AUG 2026")).unwrap_err();
        assert_eq!(err.kind, GedErrorKind::InvalidShape);
    }

    #[test]
    fn test_blank_file_name_rejected() {
        let err = standard_header(&HeaderOptions::new("Jane", "", "26 AUG 2026")).unwrap_err();
        assert_eq!(err.kind, GedErrorKind::InvalidShape);
    }

    // ==================== Round-trip tests ====================

    #[test]
    fn test_synthesized_header_roundtrips() {
        let mut ctx = parse(b"0 HEAD\n1 SOUR old\n0 @I1@ INDI\n1 NAME Jane //\n").unwrap();
        apply_standard_header(&mut ctx, &options()).unwrap();
        let out = to_ged(&ctx);
        assert!(out.starts_with("0 HEAD\r\n1 SOUR GEDTREE\r\n"));
        assert!(out.contains("2 FORM LINEAGE-LINKED"));
        let reparsed = parse(out.as_bytes()).unwrap();
        assert_eq!(to_ged(&reparsed), out);
    }

    #[test]
    fn test_header_replacement_keeps_position() {
        let mut ctx = parse(b"0 HEAD\n0 @I1@ INDI\n").unwrap();
        apply_standard_header(&mut ctx, &options()).unwrap();
        let keys: Vec<_> = ctx.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["HEAD", "I1"]);
    }

    #[test]
    fn test_header_validates() {
        let mut ctx = Context::new();
        apply_standard_header(&mut ctx, &options()).unwrap();
        assert!(ctx.validate().is_ok());
    }
}
