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

//! The reconstructed context tree.
//!
//! A [`Context`] is the top-level map, keyed by cross-reference identifier
//! (delimiters stripped) plus the reserved `HEAD` entry. Every populated
//! node carries three reserved slots as struct fields rather than map
//! keys: the structural-kind marker, the reconstructed literal line, and
//! the scalar value. Child entries are a closed tagged variant over a
//! single node or an ordered sequence of nodes; once a slot has become a
//! sequence it never reverts.
//!
//! All maps preserve key insertion order, which is the document order the
//! serializer walks.

use crate::error::{GedError, GedResult};
use indexmap::IndexMap;

/// A node in the context tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Structural-kind marker; set only at cross-reference roots and HEAD.
    pub kind: Option<String>,
    /// The reconstructed literal source line, used for regeneration.
    pub line: Option<String>,
    /// The scalar value (delimiters stripped where the tag calls for it).
    pub value: Option<String>,
    /// Child entries in insertion order.
    pub children: IndexMap<String, Entry>,
}

impl Node {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a leaf node holding a value and its literal line.
    pub fn leaf(value: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            kind: None,
            line: Some(line.into()),
            value: Some(value.into()),
            children: IndexMap::new(),
        }
    }

    /// Get a single child node by tag.
    pub fn child(&self, tag: &str) -> Option<&Node> {
        self.children.get(tag)?.as_single()
    }

    /// Get a sequence of child nodes by tag.
    pub fn sequence(&self, tag: &str) -> Option<&[Node]> {
        self.children.get(tag)?.as_many()
    }

    /// Get a child's scalar value by tag.
    pub fn scalar(&self, tag: &str) -> Option<&str> {
        self.child(tag)?.value.as_deref()
    }

    /// Assign a single child, overwriting any previous entry for the tag.
    pub fn set_child(&mut self, tag: impl Into<String>, node: Node) {
        self.children.insert(tag.into(), Entry::Single(node));
    }

    /// Merge a repeatable child: a first occurrence is stored single; a
    /// repeat converts the slot to a sequence and appends. An existing
    /// sequence only ever grows.
    pub fn merge_repeatable(&mut self, tag: impl Into<String>, node: Node) {
        let tag = tag.into();
        match self.children.get_mut(&tag) {
            None => {
                self.children.insert(tag, Entry::Single(node));
            }
            Some(entry) => entry.push(node),
        }
    }

    /// Append to a sequence slot, creating the sequence if absent. An
    /// occupied single slot is coerced into the first element.
    pub fn push_to_sequence(&mut self, tag: impl Into<String>, node: Node) {
        let tag = tag.into();
        match self.children.get_mut(&tag) {
            None => {
                self.children.insert(tag, Entry::Many(vec![node]));
            }
            Some(entry) => entry.push(node),
        }
    }
}

/// A child slot: one node, or an ordered sequence of nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entry {
    /// A lone node.
    Single(Node),
    /// An ordered sequence; never reverts to a lone node.
    Many(Vec<Node>),
}

impl Entry {
    /// Append a node, converting a single slot into a two-element sequence.
    pub fn push(&mut self, node: Node) {
        match self {
            Entry::Many(nodes) => nodes.push(node),
            Entry::Single(_) => {
                let prev = std::mem::replace(self, Entry::Many(Vec::with_capacity(2)));
                if let (Entry::Single(prev), Entry::Many(nodes)) = (prev, &mut *self) {
                    nodes.push(prev);
                    nodes.push(node);
                }
            }
        }
    }

    /// Try to get as a single node.
    pub fn as_single(&self) -> Option<&Node> {
        match self {
            Entry::Single(node) => Some(node),
            Entry::Many(_) => None,
        }
    }

    /// Try to get as a sequence.
    pub fn as_many(&self) -> Option<&[Node]> {
        match self {
            Entry::Many(nodes) => Some(nodes),
            Entry::Single(_) => None,
        }
    }
}

/// The reserved top-level key for the document header.
pub const HEAD_KEY: &str = "HEAD";

/// The top-level context map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Context {
    entries: IndexMap<String, Node>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a top-level record. A repeated identifier silently overwrites
    /// the earlier one, keeping its original position in document order.
    pub fn insert(&mut self, id: impl Into<String>, node: Node) {
        self.entries.insert(id.into(), node);
    }

    /// Get a top-level record by identifier.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.entries.get(id)
    }

    /// Get a mutable top-level record by identifier.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.entries.get_mut(id)
    }

    /// Remove a top-level record.
    pub fn remove(&mut self, id: &str) -> Option<Node> {
        self.entries.shift_remove(id)
    }

    /// The document header record, if present.
    pub fn head(&self) -> Option<&Node> {
        self.entries.get(HEAD_KEY)
    }

    /// Iterate over (id, record) pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of top-level records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the context holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the invariants the build path guarantees: every node carries
    /// a literal line, and every top-level record a kind marker.
    ///
    /// Only contexts constructed outside the build path (for example via
    /// JSON import) can fail this.
    pub fn validate(&self) -> GedResult<()> {
        for (id, node) in &self.entries {
            if node.kind.is_none() {
                return Err(GedError::invalid_shape(format!(
                    "top-level record {} has no kind marker",
                    id
                )));
            }
            validate_node(id, node)?;
        }
        Ok(())
    }
}

fn validate_node(path: &str, node: &Node) -> GedResult<()> {
    if node.line.is_none() {
        return Err(GedError::invalid_shape(format!(
            "record {} has no literal line",
            path
        )));
    }
    for (tag, entry) in &node.children {
        let child_path = format!("{}.{}", path, tag);
        match entry {
            Entry::Single(child) => validate_node(&child_path, child)?,
            Entry::Many(children) => {
                for (i, child) in children.iter().enumerate() {
                    validate_node(&format!("{}.{}", child_path, i), child)?;
                }
            }
        }
    }
    Ok(())
}
