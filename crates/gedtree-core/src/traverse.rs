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

//! Read-only traversal over a completed context tree.
//!
//! Implement [`ContextVisitor`] to perform analysis or export without
//! duplicating the recursive walk; the `traverse` function handles the
//! structure. Traversal follows map insertion order, the same order the
//! serializer emits.
//!
//! [`flatten`] produces the identifier-keyed scalar listing that external
//! search/indexing layers consume.

use crate::context::{Context, Entry, Node};

/// Context provided to visitors during traversal.
#[derive(Debug, Clone)]
pub struct VisitorContext<'a> {
    /// Current nesting depth (0 = top-level records).
    pub depth: usize,
    /// Path from the top-level record to the current node (tag names).
    pub path: Vec<&'a str>,
    /// The tree being traversed.
    pub context: &'a Context,
}

impl<'a> VisitorContext<'a> {
    /// Create a new context for the top level.
    pub fn new(context: &'a Context) -> Self {
        Self {
            depth: 0,
            path: Vec::new(),
            context,
        }
    }

    /// Create a child context with incremented depth.
    pub fn child(&self, tag: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(tag);
        Self {
            depth: self.depth + 1,
            path,
            context: self.context,
        }
    }

    /// Get the current path as a dotted string (for error messages).
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path.join(".")
        }
    }
}

/// Trait for visiting elements of a context tree.
///
/// All methods except [`visit_node`](Self::visit_node) have default
/// implementations that do nothing, so implementations override only what
/// they need.
pub trait ContextVisitor {
    /// Error type returned by visitor methods.
    type Error;

    /// Called at the start of traversal.
    fn begin_document(&mut self, _context: &Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called at the end of traversal.
    fn end_document(&mut self, _context: &Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for each top-level record, before its children.
    fn begin_record(
        &mut self,
        _id: &str,
        _node: &Node,
        _ctx: &VisitorContext,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for each top-level record, after its children.
    fn end_record(
        &mut self,
        _id: &str,
        _node: &Node,
        _ctx: &VisitorContext,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every nested node, before its own children. Sequence
    /// elements are visited in order under their shared tag.
    fn visit_node(
        &mut self,
        tag: &str,
        node: &Node,
        ctx: &VisitorContext,
    ) -> Result<(), Self::Error>;
}

/// Traverse a context tree, calling visitor methods for each element.
pub fn traverse<V: ContextVisitor>(context: &Context, visitor: &mut V) -> Result<(), V::Error> {
    visitor.begin_document(context)?;
    let ctx = VisitorContext::new(context);
    for (id, node) in context.iter() {
        visitor.begin_record(id, node, &ctx)?;
        traverse_children(node, visitor, &ctx.child(id))?;
        visitor.end_record(id, node, &ctx)?;
    }
    visitor.end_document(context)?;
    Ok(())
}

fn traverse_children<'a, V: ContextVisitor>(
    node: &'a Node,
    visitor: &mut V,
    ctx: &VisitorContext<'a>,
) -> Result<(), V::Error> {
    for (tag, entry) in &node.children {
        match entry {
            Entry::Single(child) => {
                visitor.visit_node(tag, child, ctx)?;
                traverse_children(child, visitor, &ctx.child(tag))?;
            }
            Entry::Many(children) => {
                for child in children {
                    visitor.visit_node(tag, child, ctx)?;
                    traverse_children(child, visitor, &ctx.child(tag))?;
                }
            }
        }
    }
    Ok(())
}

/// Statistics collector visitor for analysis and testing.
#[derive(Debug, Default)]
pub struct StatsCollector {
    /// Number of top-level records (header included).
    pub record_count: usize,
    /// Number of individual records.
    pub person_count: usize,
    /// Number of family records.
    pub family_count: usize,
    /// Number of nested nodes visited.
    pub node_count: usize,
    /// Maximum nesting depth reached.
    pub max_depth: usize,
}

impl ContextVisitor for StatsCollector {
    type Error = std::convert::Infallible;

    fn begin_record(
        &mut self,
        _id: &str,
        node: &Node,
        _ctx: &VisitorContext,
    ) -> Result<(), Self::Error> {
        self.record_count += 1;
        match node.kind.as_deref() {
            Some("INDI") => self.person_count += 1,
            Some("FAM") => self.family_count += 1,
            _ => {}
        }
        Ok(())
    }

    fn visit_node(
        &mut self,
        _tag: &str,
        _node: &Node,
        ctx: &VisitorContext,
    ) -> Result<(), Self::Error> {
        self.node_count += 1;
        self.max_depth = self.max_depth.max(ctx.depth);
        Ok(())
    }
}

/// One top-level record flattened to its scalar sub-fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRecord {
    /// The record's identifier key.
    pub id: String,
    /// The record's kind marker.
    pub kind: String,
    /// Dotted field paths with their scalar values, in document order.
    /// Sequence elements carry their position: `CHIL.0`, `CHIL.1`.
    pub fields: Vec<(String, String)>,
}

/// Flatten every kinded top-level record to its non-blank scalar fields,
/// for external search/indexing layers.
pub fn flatten(context: &Context) -> Vec<FlatRecord> {
    context
        .iter()
        .filter_map(|(id, node)| {
            let kind = node.kind.clone()?;
            let mut fields = Vec::new();
            flatten_children(node, "", &mut fields);
            Some(FlatRecord {
                id: id.to_string(),
                kind,
                fields,
            })
        })
        .collect()
}

fn flatten_children(node: &Node, prefix: &str, fields: &mut Vec<(String, String)>) {
    for (tag, entry) in &node.children {
        let path = if prefix.is_empty() {
            tag.clone()
        } else {
            format!("{}.{}", prefix, tag)
        };
        match entry {
            Entry::Single(child) => flatten_node(child, &path, fields),
            Entry::Many(children) => {
                for (i, child) in children.iter().enumerate() {
                    flatten_node(child, &format!("{}.{}", path, i), fields);
                }
            }
        }
    }
}

fn flatten_node(node: &Node, path: &str, fields: &mut Vec<(String, String)>) {
    if let Some(value) = node.value.as_deref() {
        if !value.trim().is_empty() {
            fields.push((path.to_string(), value.to_string()));
        }
    }
    flatten_children(node, path, fields);
}
