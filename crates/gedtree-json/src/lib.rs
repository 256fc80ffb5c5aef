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

//! JSON conversion for GEDCOM context trees.
//!
//! ```
//! use gedtree_core::parse;
//! use gedtree_json::{from_json, to_json, ToJsonConfig};
//!
//! let ctx = parse(b"0 HEAD\n0 @I1@ INDI\n1 SEX M\n0 TRLR\n").unwrap();
//! let json = to_json(&ctx, &ToJsonConfig::default()).unwrap();
//! let imported = from_json(&json).unwrap();
//! assert_eq!(ctx, imported);
//! ```

mod error;
mod from_json;
mod to_json;

pub use error::JsonError;
pub use from_json::{from_json, from_json_value};
pub use to_json::{to_json, to_json_value, ToJsonConfig, KIND_KEY, LINE_KEY, VALUE_KEY};
