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

//! Error types for GEDCOM parsing and serialization.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GedErrorKind {
    /// Non-numeric level field on a line.
    MalformedLevel,
    /// A token matching none of the structural roles.
    UnclassifiableToken,
    /// An ancestor walk requested more steps than the chain has.
    BrokenHierarchy,
    /// A hand-constructed context violates the literal-text/kind invariants.
    InvalidShape,
    /// Input size or line-count limit exceeded.
    Security,
    /// Error during format conversion (JSON projection).
    Conversion,
    /// I/O error (file operations).
    Io,
}

impl fmt::Display for GedErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLevel => write!(f, "MalformedLevelError"),
            Self::UnclassifiableToken => write!(f, "UnclassifiableTokenError"),
            Self::BrokenHierarchy => write!(f, "BrokenHierarchyError"),
            Self::InvalidShape => write!(f, "InvalidShapeError"),
            Self::Security => write!(f, "SecurityError"),
            Self::Conversion => write!(f, "ConversionError"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// An error raised while building or serializing a document.
///
/// The build is atomic: the first fatal error aborts the whole parse and
/// no partial tree is returned. `line` is the 1-based source line and
/// `context`, when present, holds the raw text of the offending line.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct GedError {
    /// The kind of error.
    pub kind: GedErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based, 0 when not tied to a source line).
    pub line: usize,
    /// Raw text of the offending line, when available.
    pub context: Option<String>,
}

impl GedError {
    /// Create a new error.
    pub fn new(kind: GedErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            context: None,
        }
    }

    /// Attach the raw source line.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn malformed_level(message: impl Into<String>, line: usize) -> Self {
        Self::new(GedErrorKind::MalformedLevel, message, line)
    }

    pub fn unclassifiable(message: impl Into<String>, line: usize) -> Self {
        Self::new(GedErrorKind::UnclassifiableToken, message, line)
    }

    pub fn broken_hierarchy(message: impl Into<String>, line: usize) -> Self {
        Self::new(GedErrorKind::BrokenHierarchy, message, line)
    }

    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::new(GedErrorKind::InvalidShape, message, 0)
    }

    pub fn security(message: impl Into<String>, line: usize) -> Self {
        Self::new(GedErrorKind::Security, message, line)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(GedErrorKind::Conversion, message, 0)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(GedErrorKind::Io, message, 0)
    }
}

/// Result type for gedtree operations.
pub type GedResult<T> = Result<T, GedError>;
