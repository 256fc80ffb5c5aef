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

//! Core parser and data model for GEDCOM 5.5.1 lineage-linked documents.
//!
//! Parsing is a single left-to-right pass: the tokenizer splits the text
//! into level-tagged lines, the classifier assigns each line a structural
//! role using one line of lookahead, and the tree builder folds the stream
//! into a [`Context`] map keyed by cross-reference identifier, preserving
//! document order. The serializer regenerates the line format (or a
//! tab-separated variant) from the stored literal lines.
//!
//! ```
//! use gedtree_core::{parse, to_ged};
//!
//! let ctx = parse(b"0 HEAD\n0 @I1@ INDI\n1 NAME John /Doe/\n0 TRLR\n")?;
//! assert_eq!(ctx.get("I1").unwrap().scalar("NAME"), Some("John /Doe/"));
//! assert_eq!(to_ged(&ctx), "0 HEAD\r\n0 @I1@ INDI\r\n1 NAME John /Doe/\r\n0 TRLR");
//! # Ok::<(), gedtree_core::GedError>(())
//! ```

mod builder;
mod classify;
mod context;
mod error;
mod header;
mod limits;
mod preprocess;
pub mod token;
pub mod traverse;
mod writer;

pub use builder::{parse, parse_with_options, ParseOptions, ParseOptionsBuilder};
pub use classify::{classify, Role};
pub use context::{Context, Entry, Node, HEAD_KEY};
pub use error::{GedError, GedErrorKind, GedResult};
pub use header::{apply_standard_header, standard_header, HeaderOptions};
pub use limits::Limits;
pub use token::{strip_xref, LineToken, TokenStream};
pub use traverse::{flatten, traverse, ContextVisitor, FlatRecord, StatsCollector, VisitorContext};
pub use writer::{serialize, to_ged, to_tsv, Variant};
