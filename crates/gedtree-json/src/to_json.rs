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

//! Context tree to JSON conversion.
//!
//! Each node becomes a JSON object whose reserved lowercase keys carry the
//! node's own data (`kind`, `line`, `value`) and whose uppercase tag keys
//! carry children, an object for a single child or an array for a
//! sequence. Standard tag mnemonics are uppercase, but the line format
//! does not enforce case, so a child tag that spells a reserved key is
//! rejected rather than silently merged into the node data. Key order
//! follows map insertion order, which keeps document order through a JSON
//! round-trip.

use crate::error::JsonError;
use gedtree_core::{Context, Entry, Node};
use serde_json::{Map, Value as JsonValue};

/// Reserved key for a node's structural-kind marker.
pub const KIND_KEY: &str = "kind";
/// Reserved key for a node's reconstructed literal line.
pub const LINE_KEY: &str = "line";
/// Reserved key for a node's scalar value.
pub const VALUE_KEY: &str = "value";

/// Reserved node-data keys, in emission order.
pub const RESERVED_KEYS: &[&str] = &[KIND_KEY, LINE_KEY, VALUE_KEY];

/// Configuration for JSON output.
#[derive(Debug, Clone)]
pub struct ToJsonConfig {
    /// Pretty-print with indentation.
    pub pretty: bool,
    /// Omit blank `value` entries.
    pub skip_blank_values: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            skip_blank_values: false,
        }
    }
}

/// Convert a context tree to a JSON string.
///
/// # Errors
///
/// Returns [`JsonError::ReservedTagCollision`] if a child tag spells one
/// of the reserved keys, since such a tree could not be re-imported.
pub fn to_json(context: &Context, config: &ToJsonConfig) -> Result<String, JsonError> {
    let value = to_json_value(context, config)?;
    let out = if config.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    out.map_err(JsonError::from)
}

/// Convert a context tree to a `serde_json::Value`.
pub fn to_json_value(context: &Context, config: &ToJsonConfig) -> Result<JsonValue, JsonError> {
    let mut map = Map::with_capacity(context.len());
    for (id, node) in context.iter() {
        map.insert(id.to_string(), node_to_json(node, config, id)?);
    }
    Ok(JsonValue::Object(map))
}

fn node_to_json(node: &Node, config: &ToJsonConfig, path: &str) -> Result<JsonValue, JsonError> {
    let mut map = Map::with_capacity(RESERVED_KEYS.len() + node.children.len());
    if let Some(kind) = &node.kind {
        map.insert(KIND_KEY.to_string(), JsonValue::String(kind.clone()));
    }
    if let Some(line) = &node.line {
        map.insert(LINE_KEY.to_string(), JsonValue::String(line.clone()));
    }
    if let Some(value) = &node.value {
        if !(config.skip_blank_values && value.trim().is_empty()) {
            map.insert(VALUE_KEY.to_string(), JsonValue::String(value.clone()));
        }
    }
    for (tag, entry) in &node.children {
        if RESERVED_KEYS.contains(&tag.as_str()) {
            return Err(JsonError::ReservedTagCollision {
                tag: tag.clone(),
                path: path.to_string(),
            });
        }
        let child_path = format!("{}.{}", path, tag);
        let json = match entry {
            Entry::Single(child) => node_to_json(child, config, &child_path)?,
            Entry::Many(children) => {
                let mut elems = Vec::with_capacity(children.len());
                for (i, child) in children.iter().enumerate() {
                    elems.push(node_to_json(child, config, &format!("{}.{}", child_path, i))?);
                }
                JsonValue::Array(elems)
            }
        };
        map.insert(tag.clone(), json);
    }
    Ok(JsonValue::Object(map))
}
