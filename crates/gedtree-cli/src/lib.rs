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

//! Library crate backing the `gedtree` binary.
//!
//! # Commands
//!
//! - **validate**: parse a GEDCOM file and report its structure
//! - **convert**: regenerate a file as GEDCOM, tab-separated, or JSON
//! - **from-json**: turn exported JSON back into GEDCOM text
//! - **persons**: list individual records with their names
//! - **stats**: summarize record counts and nesting depth

pub mod cli;
pub mod commands;
