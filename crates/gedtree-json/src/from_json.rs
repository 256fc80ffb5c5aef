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

//! JSON to context tree conversion.
//!
//! Accepts the shape [`to_json`](crate::to_json) emits. The imported tree
//! is validated against the context invariants before it is returned, so
//! hand-edited JSON that drops a literal line or a kind marker fails here
//! rather than producing a tree the serializer cannot regenerate.

use crate::error::JsonError;
use crate::to_json::{KIND_KEY, LINE_KEY, RESERVED_KEYS, VALUE_KEY};
use gedtree_core::{Context, Entry, Node};
use serde_json::Value as JsonValue;

/// Parse a JSON string into a context tree.
pub fn from_json(input: &str) -> Result<Context, JsonError> {
    let value: JsonValue = serde_json::from_str(input)?;
    from_json_value(&value)
}

/// Convert a `serde_json::Value` into a context tree.
pub fn from_json_value(value: &JsonValue) -> Result<Context, JsonError> {
    let root = value.as_object().ok_or_else(|| JsonError::InvalidRootType {
        found: type_name(value).to_string(),
    })?;

    let mut context = Context::new();
    for (id, record) in root {
        let obj = record.as_object().ok_or_else(|| JsonError::InvalidNodeType {
            path: id.clone(),
            found: type_name(record).to_string(),
        })?;
        context.insert(id.clone(), node_from_json(obj, id)?);
    }
    context.validate()?;
    Ok(context)
}

fn node_from_json(
    obj: &serde_json::Map<String, JsonValue>,
    path: &str,
) -> Result<Node, JsonError> {
    let mut node = Node::new();
    for (key, value) in obj {
        match key.as_str() {
            k if RESERVED_KEYS.contains(&k) => {
                let text = value
                    .as_str()
                    .ok_or_else(|| JsonError::NonStringMetadata {
                        key: key.clone(),
                        path: path.to_string(),
                    })?
                    .to_string();
                match k {
                    KIND_KEY => node.kind = Some(text),
                    LINE_KEY => node.line = Some(text),
                    VALUE_KEY => node.value = Some(text),
                    _ => unreachable!(),
                }
            }
            tag => {
                let child_path = format!("{}.{}", path, tag);
                let entry = match value {
                    JsonValue::Object(child) => {
                        Entry::Single(node_from_json(child, &child_path)?)
                    }
                    JsonValue::Array(children) => {
                        let mut nodes = Vec::with_capacity(children.len());
                        for (i, child) in children.iter().enumerate() {
                            let elem_path = format!("{}.{}", child_path, i);
                            let child =
                                child.as_object().ok_or_else(|| JsonError::InvalidNodeType {
                                    path: elem_path.clone(),
                                    found: type_name(child).to_string(),
                                })?;
                            nodes.push(node_from_json(child, &elem_path)?);
                        }
                        Entry::Many(nodes)
                    }
                    other => {
                        return Err(JsonError::InvalidNodeType {
                            path: child_path,
                            found: type_name(other).to_string(),
                        })
                    }
                };
                node.children.insert(tag.to_string(), entry);
            }
        }
    }
    Ok(node)
}

fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
