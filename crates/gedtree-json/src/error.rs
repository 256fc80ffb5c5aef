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

//! Error types for JSON conversion operations.

use thiserror::Error;

/// Errors that can occur during JSON to context-tree conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    ParseError(String),

    /// Root element must be an object
    #[error("Root must be a JSON object, found {found}")]
    InvalidRootType { found: String },

    /// A node slot held something other than an object or array of objects
    #[error("Expected object or array of objects at path {path}, found {found}")]
    InvalidNodeType { path: String, found: String },

    /// A reserved metadata key held a non-string value
    #[error("Reserved key {key} at path {path} must be a string")]
    NonStringMetadata { key: String, path: String },

    /// A child tag collides with a reserved node-data key
    #[error("Child tag {tag} at path {path} collides with a reserved key")]
    ReservedTagCollision { tag: String, path: String },

    /// The imported tree violates context invariants
    #[error("Invalid context shape: {0}")]
    InvalidShape(String),

    /// Generic conversion error
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        JsonError::ParseError(err.to_string())
    }
}

impl From<gedtree_core::GedError> for JsonError {
    fn from(err: gedtree_core::GedError) -> Self {
        JsonError::InvalidShape(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = JsonError::ParseError("unexpected token".to_string());
        assert_eq!(err.to_string(), "JSON parse error: unexpected token");
    }

    #[test]
    fn test_invalid_root_type_display() {
        let err = JsonError::InvalidRootType {
            found: "array".to_string(),
        };
        assert_eq!(err.to_string(), "Root must be a JSON object, found array");
    }

    #[test]
    fn test_invalid_node_type_display() {
        let err = JsonError::InvalidNodeType {
            path: "I1.BIRT".to_string(),
            found: "number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Expected object or array of objects at path I1.BIRT, found number"
        );
    }

    #[test]
    fn test_reserved_tag_collision_display() {
        let err = JsonError::ReservedTagCollision {
            tag: "kind".to_string(),
            path: "I1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Child tag kind at path I1 collides with a reserved key"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = JsonError::ParseError("x".to_string());
        let err2 = JsonError::ParseError("x".to_string());
        assert_eq!(err1, err2);
    }
}
