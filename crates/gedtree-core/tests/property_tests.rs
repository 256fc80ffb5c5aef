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

//! Property-based tests for parse → serialize → parse roundtrip.
//!
//! These tests verify that:
//! - Parsing is deterministic
//! - Serialization is idempotent (serialize(parse(serialize(x))) == serialize(x))
//! - Structure survives the roundtrip (record keys, sequence lengths, order)

use gedtree_core::{parse, to_ged};
use proptest::prelude::*;

/// Strategy for a value field without delimiter or control characters.
fn value_text() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 /.-]{0,20}".prop_map(|s| s.trim().to_string())
}

/// Strategy for one individual record's lines.
fn individual(n: usize) -> impl Strategy<Value = String> {
    (value_text(), value_text(), prop::option::of(value_text())).prop_map(
        move |(name, place, date)| {
            let mut lines = format!("0 @I{}@ INDI\n1 NAME {} //\n1 BIRT\n2 PLAC {}\n", n, name, place);
            if let Some(date) = date {
                lines.push_str(&format!("2 DATE {}\n", date));
            }
            lines
        },
    )
}

/// Strategy for a whole small document.
fn document() -> impl Strategy<Value = String> {
    (1usize..6, 0usize..5).prop_flat_map(|(people, children)| {
        let persons: Vec<_> = (1..=people).map(individual).collect();
        persons.prop_map(move |persons| {
            let mut doc = String::from("0 HEAD\n1 SOUR GEDTREE\n");
            for person in &persons {
                doc.push_str(person);
            }
            doc.push_str("0 @F1@ FAM\n");
            for c in 0..children {
                doc.push_str(&format!("1 CHIL @C{}@\n", c));
            }
            doc.push_str("0 TRLR\n");
            doc
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: parsing the same document twice produces identical trees.
    #[test]
    fn prop_parse_determinism(doc in document()) {
        let first = parse(doc.as_bytes()).unwrap();
        let second = parse(doc.as_bytes()).unwrap();
        prop_assert_eq!(first, second, "parse non-deterministic");
    }

    /// Property: serialize(parse(serialize(parse(x)))) == serialize(parse(x)).
    #[test]
    fn prop_serialize_idempotent(doc in document()) {
        let first = to_ged(&parse(doc.as_bytes()).unwrap());
        let second = to_ged(&parse(first.as_bytes()).unwrap());
        prop_assert_eq!(first, second, "serialization not a fixpoint");
    }

    /// Property: the reparsed tree equals the original tree.
    #[test]
    fn prop_tree_survives_roundtrip(doc in document()) {
        let original = parse(doc.as_bytes()).unwrap();
        let reparsed = parse(to_ged(&original).as_bytes()).unwrap();
        prop_assert_eq!(original, reparsed, "tree changed in roundtrip");
    }

    /// Property: record keys and their order survive the roundtrip.
    #[test]
    fn prop_record_order_preserved(doc in document()) {
        let original = parse(doc.as_bytes()).unwrap();
        let reparsed = parse(to_ged(&original).as_bytes()).unwrap();
        let before: Vec<_> = original.iter().map(|(k, _)| k.to_string()).collect();
        let after: Vec<_> = reparsed.iter().map(|(k, _)| k.to_string()).collect();
        prop_assert_eq!(before, after, "record order changed");
    }

    /// Property: child-link sequences keep their length through roundtrip.
    #[test]
    fn prop_sequence_length_preserved(doc in document()) {
        let original = parse(doc.as_bytes()).unwrap();
        let reparsed = parse(to_ged(&original).as_bytes()).unwrap();
        let len_of = |ctx: &gedtree_core::Context| {
            ctx.get("F1")
                .and_then(|f| f.sequence("CHIL").map(<[_]>::len))
                .unwrap_or(0)
        };
        prop_assert_eq!(len_of(&original), len_of(&reparsed));
    }
}
