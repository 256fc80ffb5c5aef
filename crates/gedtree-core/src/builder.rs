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

//! Tree builder: a strict left-to-right fold over the token stream.
//!
//! The builder keeps an explicit stack of active-record frames instead of
//! weak parent back-references: each frame holds its source level and a
//! path into the owned [`Context`] accumulator, so ancestor walks are
//! stack pops and record merging resolves the parent node by path lookup.
//! There is no shared mutable state; the context is exclusively owned by
//! the single build pass and returned on success.
//!
//! Failure is atomic. A non-numeric level, an unclassifiable token, or an
//! upward walk past the document root aborts the whole parse with the
//! first offending line; no partial tree is ever returned.

use crate::classify::{classify, Role};
use crate::context::{Context, Entry, Node, HEAD_KEY};
use crate::error::{GedError, GedResult};
use crate::limits::Limits;
use crate::token::{
    LineToken, TokenStream, ALWAYS_SEQUENCE_TAGS, CONTINUATION_TAG, NAME_TAG, SPOUSE_TAGS,
    TRAILER_TAG, XREF_VALUE_TAGS,
};

/// Parsing options.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Input limits, enforced before any token is produced.
    pub limits: Limits,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    limits: Limits,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum file size in bytes.
    pub fn max_file_size(mut self, size: usize) -> Self {
        self.limits.max_file_size = size;
        self
    }

    /// Set the maximum line length in bytes.
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.limits.max_line_length = length;
        self
    }

    /// Set the maximum number of lines.
    pub fn max_lines(mut self, count: usize) -> Self {
        self.limits.max_lines = count;
        self
    }

    /// Set the maximum nesting level.
    pub fn max_level(mut self, level: u32) -> Self {
        self.limits.max_level = level;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
        }
    }
}

/// Parse a GEDCOM document from bytes.
pub fn parse(input: &[u8]) -> GedResult<Context> {
    parse_with_options(input, ParseOptions::default())
}

/// Parse a GEDCOM document with custom options.
pub fn parse_with_options(input: &[u8], options: ParseOptions) -> GedResult<Context> {
    let stream = TokenStream::from_bytes(input, &options.limits)?;
    build(&stream)
}

/// Build a context tree from an already tokenized stream.
pub fn build(stream: &TokenStream) -> GedResult<Context> {
    let mut context = Context::new();
    let mut stack: Vec<Frame> = Vec::new();

    for (token, next) in stream.pairs() {
        let level = token.level.ok_or_else(|| {
            GedError::malformed_level("level field is not a number", token.index)
                .with_context(token.raw.clone())
        })?;

        // The trailer marks end of document; it never enters the tree.
        if level == 0 && token.tag == TRAILER_TAG {
            break;
        }

        let role = classify(token, next).ok_or_else(|| {
            GedError::unclassifiable(
                format!("token {} matches no structural role", token.tag),
                token.index,
            )
            .with_context(token.raw.clone())
        })?;

        // Ancestor walk: pop back to the enclosing scope. A new sibling
        // (equal level) replaces the active record, hence the +1.
        if let Some(active) = stack.last() {
            if level <= active.level {
                let steps = (active.level - level + 1) as usize;
                if steps > stack.len() {
                    return Err(GedError::broken_hierarchy(
                        format!(
                            "level {} walks {} steps up a chain of {}",
                            level,
                            steps,
                            stack.len()
                        ),
                        token.index,
                    )
                    .with_context(token.raw.clone()));
                }
                stack.truncate(stack.len() - steps);
            }
        }

        let frame = create_record(&mut context, &stack, token, level, role)?;
        stack.push(frame);
    }

    Ok(context)
}

/// A path segment into the context: a tag key, plus the sequence index
/// when the slot holds an ordered sequence.
#[derive(Debug, Clone)]
struct PathSeg {
    tag: String,
    index: Option<usize>,
}

/// An active record on the ancestor chain. `target` is `None` for records
/// that cannot take children (collection entries and plain scalars carry
/// an empty local context).
#[derive(Debug)]
struct Frame {
    level: u32,
    target: Option<Vec<PathSeg>>,
}

/// Resolve a path to its node in the context.
fn node_at_mut<'a>(context: &'a mut Context, path: &[PathSeg]) -> Option<&'a mut Node> {
    let (first, rest) = path.split_first()?;
    let mut node = context.get_mut(&first.tag)?;
    for seg in rest {
        node = match (context_entry_mut(node, &seg.tag)?, seg.index) {
            (Entry::Single(child), None) => child,
            (Entry::Many(children), Some(i)) => children.get_mut(i)?,
            _ => return None,
        };
    }
    Some(node)
}

fn context_entry_mut<'a>(node: &'a mut Node, tag: &str) -> Option<&'a mut Entry> {
    node.children.get_mut(tag)
}

/// Create the record for one token and merge it into the tree, returning
/// the frame that becomes the new active record.
fn create_record(
    context: &mut Context,
    stack: &[Frame],
    token: &LineToken,
    level: u32,
    role: Role,
) -> GedResult<Frame> {
    match role {
        Role::Head => {
            let mut node = Node::new();
            node.kind = Some(token.tag.clone());
            node.line = Some(format!("{} {}", level, token.tag));
            context.insert(HEAD_KEY, node);
            Ok(Frame {
                level,
                target: Some(vec![PathSeg {
                    tag: HEAD_KEY.to_string(),
                    index: None,
                }]),
            })
        }
        Role::Identifier => {
            let id = token.stripped_tag();
            let mut node = Node::new();
            node.kind = Some(token.value.clone());
            node.line = Some(format!("{} {} {}", level, token.tag, token.value));
            context.insert(id.clone(), node);
            Ok(Frame {
                level,
                target: Some(vec![PathSeg {
                    tag: id,
                    index: None,
                }]),
            })
        }
        Role::Object => create_object(context, stack, token, level),
        Role::Collection => create_collection(context, stack, token, level),
        Role::Plain => create_plain(context, stack, token, level),
    }
}

/// The parent path of the record under construction, or an error when the
/// chain is empty (a nested record cannot float above the document root).
fn parent_target<'a>(stack: &'a [Frame], token: &LineToken) -> GedResult<Option<&'a [PathSeg]>> {
    match stack.last() {
        Some(frame) => Ok(frame.target.as_deref()),
        None => Err(GedError::broken_hierarchy(
            format!("record {} has no enclosing record", token.tag),
            token.index,
        )
        .with_context(token.raw.clone())),
    }
}

fn create_object(
    context: &mut Context,
    stack: &[Frame],
    token: &LineToken,
    level: u32,
) -> GedResult<Frame> {
    let value = if XREF_VALUE_TAGS.contains(&token.tag.as_str()) {
        token.stripped_value()
    } else {
        token.value.clone()
    };
    let mut node = Node::new();
    node.value = Some(value);
    node.line = Some(if token.has_value() {
        format!("{} {} {}", level, token.tag, token.value)
    } else {
        format!("{} {}", level, token.tag)
    });

    let Some(parent_path) = parent_target(stack, token)?.map(<[PathSeg]>::to_vec) else {
        // Parent carries no attachable context; the record is kept on the
        // chain for level math but its content is dropped, like merging
        // into a detached map.
        return Ok(Frame {
            level,
            target: None,
        });
    };
    let parent = match node_at_mut(context, &parent_path) {
        Some(parent) => parent,
        None => {
            return Ok(Frame {
                level,
                target: None,
            })
        }
    };

    // Multi-value merge rule: a repeat converts the slot to a sequence,
    // except NAME stays singular (last write wins); CHIL/FAMS hold a
    // sequence from the very first occurrence.
    let tag = token.tag.as_str();
    if parent.children.contains_key(tag) && tag != NAME_TAG {
        parent.merge_repeatable(tag, node);
    } else if ALWAYS_SEQUENCE_TAGS.contains(&tag) {
        parent.push_to_sequence(tag, node);
    } else {
        parent.set_child(tag, node);
    }

    let index = match parent.children.get(tag) {
        Some(Entry::Many(nodes)) => Some(nodes.len() - 1),
        _ => None,
    };
    let mut path = parent_path;
    path.push(PathSeg {
        tag: token.tag.clone(),
        index,
    });
    Ok(Frame {
        level,
        target: Some(path),
    })
}

fn create_collection(
    context: &mut Context,
    stack: &[Frame],
    token: &LineToken,
    level: u32,
) -> GedResult<Frame> {
    // Continuation text may legitimately contain the delimiter character.
    let value = if token.tag == CONTINUATION_TAG {
        token.value.clone()
    } else {
        token.stripped_value()
    };
    let mut node = Node::new();
    node.value = Some(value);
    node.line = Some(format!("{} {} {}", level, token.tag, token.value));

    if let Some(parent_path) = parent_target(stack, token)?.map(<[PathSeg]>::to_vec) {
        if let Some(parent) = node_at_mut(context, &parent_path) {
            parent.push_to_sequence(token.tag.clone(), node);
        }
    }
    // Collection entries are leaves; they never parent classified children.
    Ok(Frame {
        level,
        target: None,
    })
}

fn create_plain(
    context: &mut Context,
    stack: &[Frame],
    token: &LineToken,
    level: u32,
) -> GedResult<Frame> {
    let value = if SPOUSE_TAGS.contains(&token.tag.as_str()) {
        token.stripped_value()
    } else {
        token.value.clone()
    };
    let mut node = Node::new();
    node.line = Some(if value.trim().is_empty() {
        format!("{} {}", level, token.tag)
    } else {
        format!("{} {} {}", level, token.tag, token.value)
    });
    node.value = Some(value);

    if let Some(parent_path) = parent_target(stack, token)?.map(<[PathSeg]>::to_vec) {
        if let Some(parent) = node_at_mut(context, &parent_path) {
            parent.set_child(token.tag.clone(), node);
        }
    }
    Ok(Frame {
        level,
        target: None,
    })
}
