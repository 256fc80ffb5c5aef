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

//! Input preprocessing for GEDCOM parsing.
//!
//! Lines are split on runs of newlines, so consecutive blank lines collapse
//! to a single split boundary: blank or whitespace-only lines produce no
//! token and do not act as record separators. Line numbers reported in
//! errors still count every physical line.

use crate::error::{GedError, GedResult};
use crate::limits::Limits;
use std::borrow::Cow;

/// Preprocessed input ready for tokenization.
///
/// Stores the normalized text and byte offsets of every non-blank line.
#[derive(Debug)]
pub struct PreprocessedInput {
    text: String,
    /// Line boundaries: (line_number, start_offset, end_offset)
    line_offsets: Vec<(usize, usize, usize)>,
}

impl PreprocessedInput {
    /// Get lines as a (line_num, &str) iterator, blank lines skipped.
    #[inline]
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.line_offsets
            .iter()
            .map(move |&(num, start, end)| (num, &self.text[start..end]))
    }

    /// Number of non-blank lines.
    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }
}

/// Preprocess raw input bytes into lines.
///
/// This handles:
/// - UTF-8 validation
/// - BOM skipping
/// - CRLF normalization
/// - Control character rejection (LF, CR, TAB allowed)
/// - Size, line length, and line count limits
pub fn preprocess(input: &[u8], limits: &Limits) -> GedResult<PreprocessedInput> {
    if input.len() > limits.max_file_size {
        return Err(GedError::security(
            format!(
                "file too large: exceeds limit of {} bytes",
                limits.max_file_size
            ),
            0,
        ));
    }

    let text = std::str::from_utf8(input)
        .map_err(|e| GedError::security(format!("invalid UTF-8 encoding: {}", e), 1))?;

    // Skip BOM if present
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    // Reject control characters other than LF, CR, TAB
    let mut line_num = 1;
    for &b in text.as_bytes() {
        if b == b'\n' {
            line_num += 1;
        } else if b < 0x20 && b != 0x09 && b != 0x0D {
            return Err(GedError::security(
                format!("control character U+{:04X} not allowed", b),
                line_num,
            ));
        }
    }

    // Normalize line endings; a bare CR becomes a line break too, so files
    // written with any of the three conventions tokenize the same way.
    let text: Cow<str> = if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    };

    let bytes = text.as_bytes();
    let mut line_offsets = Vec::new();
    let mut start = 0;
    let mut line_num = 1;

    let mut push_line = |start: usize, end: usize, line_num: usize| -> GedResult<()> {
        if end - start > limits.max_line_length {
            return Err(GedError::security(
                format!(
                    "line too long: exceeds limit of {} bytes",
                    limits.max_line_length
                ),
                line_num,
            ));
        }
        // Blank lines collapse into the split boundary
        if !text[start..end].trim().is_empty() {
            line_offsets.push((line_num, start, end));
            if line_offsets.len() > limits.max_lines {
                return Err(GedError::security(
                    format!("too many lines: exceeds limit of {}", limits.max_lines),
                    line_num,
                ));
            }
        }
        Ok(())
    };

    for (i, &b) in bytes.iter().enumerate() {
        if b == b'\n' {
            push_line(start, i, line_num)?;
            start = i + 1;
            line_num += 1;
        }
    }
    if start < bytes.len() {
        push_line(start, bytes.len(), line_num)?;
    }

    Ok(PreprocessedInput {
        text: text.into_owned(),
        line_offsets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(input: &str) -> Vec<(usize, String)> {
        let pre = preprocess(input.as_bytes(), &Limits::default()).unwrap();
        pre.lines().map(|(n, l)| (n, l.to_string())).collect()
    }

    // ==================== Line splitting tests ====================

    #[test]
    fn test_simple_lines() {
        let lines = lines_of("0 HEAD\n1 SOUR test");
        assert_eq!(
            lines,
            vec![(1, "0 HEAD".to_string()), (2, "1 SOUR test".to_string())]
        );
    }

    #[test]
    fn test_blank_lines_collapse() {
        let lines = lines_of("0 HEAD\n\n\n1 SOUR test\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], (4, "1 SOUR test".to_string()));
    }

    #[test]
    fn test_whitespace_only_line_skipped() {
        let lines = lines_of("0 HEAD\n   \n1 SOUR x");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_leading_newline_produces_no_empty_token() {
        let lines = lines_of("\n0 HEAD");
        assert_eq!(lines, vec![(2, "0 HEAD".to_string())]);
    }

    #[test]
    fn test_no_trailing_newline() {
        let lines = lines_of("0 HEAD");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let pre = preprocess(b"", &Limits::default()).unwrap();
        assert_eq!(pre.line_count(), 0);
    }

    // ==================== Normalization tests ====================

    #[test]
    fn test_crlf_normalized() {
        let lines = lines_of("0 HEAD\r\n1 CHAR UTF-8\r\n");
        assert_eq!(lines[0].1, "0 HEAD");
        assert_eq!(lines[1].1, "1 CHAR UTF-8");
    }

    #[test]
    fn test_bare_cr_is_line_break() {
        let lines = lines_of("0 HEAD\r1 CHAR UTF-8");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_bom_skipped() {
        let input = "\u{FEFF}0 HEAD";
        let lines = lines_of(input);
        assert_eq!(lines[0].1, "0 HEAD");
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let err = preprocess(&[0x30, 0x20, 0xFF], &Limits::default()).unwrap_err();
        assert_eq!(err.kind, crate::error::GedErrorKind::Security);
    }

    #[test]
    fn test_control_character_rejected() {
        let err = preprocess(b"0 HEAD\x01", &Limits::default()).unwrap_err();
        assert_eq!(err.kind, crate::error::GedErrorKind::Security);
    }

    #[test]
    fn test_tab_allowed() {
        let lines = lines_of("0\tHEAD");
        assert_eq!(lines[0].1, "0\tHEAD");
    }

    // ==================== Limit tests ====================

    #[test]
    fn test_file_size_limit() {
        let limits = Limits {
            max_file_size: 4,
            ..Limits::default()
        };
        let err = preprocess(b"0 HEAD", &limits).unwrap_err();
        assert_eq!(err.kind, crate::error::GedErrorKind::Security);
    }

    #[test]
    fn test_line_length_limit() {
        let limits = Limits {
            max_line_length: 10,
            ..Limits::default()
        };
        let err = preprocess(b"0 NOTE this line is too long", &limits).unwrap_err();
        assert_eq!(err.kind, crate::error::GedErrorKind::Security);
    }

    #[test]
    fn test_line_count_limit() {
        let limits = Limits {
            max_lines: 2,
            ..Limits::default()
        };
        let err = preprocess(b"0 HEAD\n1 A x\n1 B y", &limits).unwrap_err();
        assert_eq!(err.kind, crate::error::GedErrorKind::Security);
    }

    #[test]
    fn test_blank_lines_do_not_count_against_line_limit() {
        let limits = Limits {
            max_lines: 2,
            ..Limits::default()
        };
        assert!(preprocess(b"0 HEAD\n\n\n\n1 A x", &limits).is_ok());
    }
}
