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

//! Structural role classification for line tokens.
//!
//! Each token plays one of five roles that decide how the tree builder
//! merges it into its parent. Classification is a pure function of the
//! token and its one-line lookahead: some tags are only object-like
//! contextually, when the next line nests beneath them, so the tag-identity
//! list is an override for known cases and the lookahead test is the
//! general rule.

use crate::token::{LineToken, HEAD_TAG, IDENTIFIER_KINDS, OBJECT_TAGS, COLLECTION_TAGS};

/// The structural role of a line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The document header (`0 HEAD`).
    Head,
    /// A cross-reference identifier declaration (`0 @I1@ INDI`).
    Identifier,
    /// A structured object that children attach to.
    Object,
    /// A repeatable collection entry (free-text continuation).
    Collection,
    /// A plain scalar; last write wins.
    Plain,
}

/// Classify a token given its lookahead.
///
/// Decision order, first match wins:
/// 1. `Head` for a level-0 line with the header mnemonic.
/// 2. `Identifier` when the value is one of the entity-kind mnemonics.
/// 3. At level > 0: `Object` by tag identity or because the next line is
///    deeper; `Collection` for continuation tags; `Plain` otherwise.
///
/// Returns `None` for a level-0 token that is neither header nor
/// identifier, and for tokens without a numeric level; both are fatal in
/// the builder.
pub fn classify(token: &LineToken, next: Option<&LineToken>) -> Option<Role> {
    let level = token.level?;
    if level == 0 && token.tag == HEAD_TAG {
        return Some(Role::Head);
    }
    if IDENTIFIER_KINDS.contains(&token.value.as_str()) {
        return Some(Role::Identifier);
    }
    if level == 0 {
        return None;
    }
    if OBJECT_TAGS.contains(&token.tag.as_str()) || about_to_nest(level, next) {
        return Some(Role::Object);
    }
    if COLLECTION_TAGS.contains(&token.tag.as_str()) {
        return Some(Role::Collection);
    }
    Some(Role::Plain)
}

/// Lookahead object test: true when the next line nests strictly deeper.
/// A missing next line, or one with a not-a-number level, never nests.
fn about_to_nest(level: u32, next: Option<&LineToken>) -> bool {
    match next.and_then(|t| t.level) {
        Some(next_level) => level < next_level,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(line: &str) -> LineToken {
        LineToken::from_line(1, line)
    }

    // ==================== Head tests ====================

    #[test]
    fn test_head() {
        assert_eq!(classify(&tok("0 HEAD"), None), Some(Role::Head));
    }

    #[test]
    fn test_head_wrong_level_is_not_head() {
        // A nested HEAD tag is not the document header
        assert_eq!(classify(&tok("1 HEAD"), None), Some(Role::Plain));
    }

    // ==================== Identifier tests ====================

    #[test]
    fn test_identifier_individual() {
        assert_eq!(classify(&tok("0 @I1@ INDI"), None), Some(Role::Identifier));
    }

    #[test]
    fn test_identifier_all_kinds() {
        for kind in ["FAM", "INDI", "OBJE", "REPO", "SOUR", "SUBM", "SUBN"] {
            let line = format!("0 @X1@ {}", kind);
            assert_eq!(classify(&tok(&line), None), Some(Role::Identifier));
        }
    }

    #[test]
    fn test_identifier_regardless_of_depth() {
        assert_eq!(classify(&tok("2 @I9@ INDI"), None), Some(Role::Identifier));
    }

    // ==================== Object tests ====================

    #[test]
    fn test_object_by_tag_identity() {
        assert_eq!(classify(&tok("1 BIRT"), None), Some(Role::Object));
        assert_eq!(classify(&tok("1 NAME John /Doe/"), None), Some(Role::Object));
        assert_eq!(classify(&tok("1 CHIL @I3@"), None), Some(Role::Object));
    }

    #[test]
    fn test_object_by_lookahead() {
        // OCCU is not in the object-tag set, but the next line nests under it
        let next = tok("2 DATE 1900");
        assert_eq!(
            classify(&tok("1 OCCU farmer"), Some(&next)),
            Some(Role::Object)
        );
    }

    #[test]
    fn test_lookahead_same_level_not_object() {
        let next = tok("1 SEX M");
        assert_eq!(classify(&tok("1 OCCU farmer"), Some(&next)), Some(Role::Plain));
    }

    #[test]
    fn test_lookahead_nan_level_not_object() {
        let next = tok("X DATE 1900");
        assert_eq!(classify(&tok("1 OCCU farmer"), Some(&next)), Some(Role::Plain));
    }

    #[test]
    fn test_no_lookahead_not_object() {
        assert_eq!(classify(&tok("1 OCCU farmer"), None), Some(Role::Plain));
    }

    #[test]
    fn test_continuation_with_children_is_object() {
        // Object wins over Collection when the next line nests deeper
        let next = tok("3 DATE 1900");
        assert_eq!(classify(&tok("2 CONT more"), Some(&next)), Some(Role::Object));
    }

    // ==================== Collection tests ====================

    #[test]
    fn test_collection_continuation() {
        assert_eq!(classify(&tok("2 CONT and more text"), None), Some(Role::Collection));
    }

    // ==================== Plain tests ====================

    #[test]
    fn test_plain() {
        assert_eq!(classify(&tok("1 SEX M"), None), Some(Role::Plain));
        assert_eq!(classify(&tok("1 HUSB @I1@"), None), Some(Role::Plain));
    }

    // ==================== Unclassifiable tests ====================

    #[test]
    fn test_level_zero_stray_is_unclassifiable() {
        assert_eq!(classify(&tok("0 TRLR"), None), None);
        assert_eq!(classify(&tok("0 NOTE loose"), None), None);
    }

    #[test]
    fn test_nan_level_is_unclassifiable() {
        assert_eq!(classify(&tok("X NAME John"), None), None);
    }
}
