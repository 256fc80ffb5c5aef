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

//! Document regeneration from a context tree.
//!
//! Serialization is a pure depth-first walk in map insertion order, so it
//! emits records in the order the source document declared them. Each node
//! contributes its reconstructed literal line; structure (levels, tags,
//! values) is never re-derived from the tree shape. Lines are joined with
//! CRLF and the output always ends with the `0 TRLR` trailer, without a
//! trailing newline.

use crate::context::{Context, Entry, Node};
use crate::token::TRAILER_TAG;
use std::borrow::Cow;

/// Output variant for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Lineage-linked text: fields separated by spaces.
    #[default]
    Ged,
    /// Tab-separated: the first two field separators of every line become
    /// tabs, splitting level, tag, and value into columns.
    Tsv,
}

/// Serialize a context tree back into document text.
pub fn serialize(context: &Context, variant: Variant) -> String {
    let mut out = String::new();
    for (_, node) in context.iter() {
        write_node(&mut out, node, variant);
    }
    // The trailer is a fixed line, identical in both variants.
    out.push_str("0 ");
    out.push_str(TRAILER_TAG);
    out
}

/// Serialize to lineage-linked text.
pub fn to_ged(context: &Context) -> String {
    serialize(context, Variant::Ged)
}

/// Serialize to tab-separated text.
pub fn to_tsv(context: &Context) -> String {
    serialize(context, Variant::Tsv)
}

fn write_node(out: &mut String, node: &Node, variant: Variant) {
    if let Some(line) = &node.line {
        out.push_str(&render_line(line, variant));
        out.push_str("\r\n");
    }
    for entry in node.children.values() {
        match entry {
            Entry::Single(child) => write_node(out, child, variant),
            Entry::Many(children) => {
                for child in children {
                    write_node(out, child, variant);
                }
            }
        }
    }
}

/// Render one literal line in the requested variant. Value text keeps its
/// interior spaces; only the level and tag separators become tabs.
fn render_line<'a>(line: &'a str, variant: Variant) -> Cow<'a, str> {
    match variant {
        Variant::Ged => Cow::Borrowed(line),
        Variant::Tsv => Cow::Owned(line.replacen(' ', "\t", 2)),
    }
}
