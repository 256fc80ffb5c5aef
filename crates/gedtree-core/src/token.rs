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

//! Line tokenization for GEDCOM documents.
//!
//! Every non-blank source line becomes one [`LineToken`]: a nesting level,
//! a tag mnemonic, and the remaining free text rejoined with single spaces.
//! The classifier needs one line of lookahead, so [`TokenStream::pairs`]
//! yields each token together with the next one (or `None` at the end).

use crate::error::{GedError, GedResult};
use crate::limits::Limits;
use crate::preprocess::{preprocess, PreprocessedInput};

/// The document-header mnemonic.
pub const HEAD_TAG: &str = "HEAD";
/// The document trailer mnemonic; terminates a build, never enters the tree.
pub const TRAILER_TAG: &str = "TRLR";
/// The multi-line free-text continuation tag.
pub const CONTINUATION_TAG: &str = "CONT";
/// The personal-name tag; kept singular even when it repeats.
pub const NAME_TAG: &str = "NAME";
/// Cross-reference delimiter punctuation.
pub const XREF_DELIM: char = '@';

/// Entity-kind mnemonics whose presence in a value marks an identifier line.
pub const IDENTIFIER_KINDS: &[&str] = &["FAM", "INDI", "OBJE", "REPO", "SOUR", "SUBM", "SUBN"];

/// Tags that are object-like by identity, without needing the lookahead test.
pub const OBJECT_TAGS: &[&str] = &[
    "ADDR", "BIRT", "BURI", "DEAT", "MARR", "NAME", "NOTE", "SOUR", "FAMC", "CHIL", "FAMS",
];

/// Tags that accumulate as a collection entry per line.
pub const COLLECTION_TAGS: &[&str] = &[CONTINUATION_TAG];

/// Parent/child linkage tags that hold a sequence from the first occurrence.
pub const ALWAYS_SEQUENCE_TAGS: &[&str] = &["CHIL", "FAMS"];

/// Tags whose value is a cross-reference and gets its delimiters stripped.
pub const XREF_VALUE_TAGS: &[&str] = &["FAMC", "CHIL", "FAMS"];

/// Spousal-link tags; plain scalars, value delimiters stripped.
pub const SPOUSE_TAGS: &[&str] = &["HUSB", "WIFE"];

/// One tokenized source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToken {
    /// 1-based source line number (for error reporting).
    pub index: usize,
    /// Nesting level; `None` is the not-a-number state, fatal downstream.
    pub level: Option<u32>,
    /// Tag mnemonic (second field).
    pub tag: String,
    /// Remaining fields rejoined with single spaces; may be empty.
    pub value: String,
    /// The raw source line (for error reporting).
    pub raw: String,
}

impl LineToken {
    /// Tokenize a single line. Fields are split on whitespace runs, so
    /// multi-space runs in the input are normalized away.
    pub fn from_line(index: usize, line: &str) -> Self {
        let mut fields = line.split_whitespace();
        let level = fields.next().and_then(|f| f.parse::<u32>().ok());
        let tag = fields.next().unwrap_or("").to_string();
        let value = fields.collect::<Vec<_>>().join(" ");
        Self {
            index,
            level,
            tag,
            value,
            raw: line.to_string(),
        }
    }

    /// Whether this token's value is blank after trimming.
    pub fn has_value(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// The value with cross-reference delimiters stripped.
    pub fn stripped_value(&self) -> String {
        strip_xref(&self.value)
    }

    /// The tag with cross-reference delimiters stripped.
    pub fn stripped_tag(&self) -> String {
        strip_xref(&self.tag)
    }
}

/// Remove every cross-reference delimiter from a field.
pub fn strip_xref(field: &str) -> String {
    field.replace(XREF_DELIM, "")
}

/// An ordered, restartable sequence of line tokens with one-line lookahead.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<LineToken>,
}

impl TokenStream {
    /// Tokenize preprocessed input.
    pub fn new(input: &PreprocessedInput) -> Self {
        let tokens = input
            .lines()
            .map(|(num, line)| LineToken::from_line(num, line))
            .collect();
        Self { tokens }
    }

    /// Tokenize raw document bytes, enforcing the given limits.
    pub fn from_bytes(input: &[u8], limits: &Limits) -> GedResult<Self> {
        let pre = preprocess(input, limits)?;
        let stream = Self::new(&pre);
        for token in &stream.tokens {
            if let Some(level) = token.level {
                if level > limits.max_level {
                    return Err(GedError::security(
                        format!("nesting level {} exceeds limit {}", level, limits.max_level),
                        token.index,
                    )
                    .with_context(token.raw.clone()));
                }
            }
        }
        Ok(stream)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the stream is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over (token, lookahead) pairs. The final token's lookahead
    /// is `None`; the sentinel itself never materializes as a token.
    pub fn pairs(&self) -> impl Iterator<Item = (&LineToken, Option<&LineToken>)> {
        self.tokens
            .iter()
            .enumerate()
            .map(move |(i, tok)| (tok, self.tokens.get(i + 1)))
    }
}
