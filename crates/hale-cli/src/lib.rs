// Dweve HALE - HAL Entities
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! HALE CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Inspection
//!
//! - **validate**: Check that a file holds a well-formed HAL resource
//! - **inspect**: Show the links and embedded resources of a HAL document as a tree
//! - **url**: Resolve the canonical URL of a resource
//! - **page**: Read the paging state of a collection response and resolve navigation
//!
//! ## Conversion
//!
//! - **convert**: Serialize a HAL document as `application/hal+json` or plain `application/json`
//!
//! ## Utilities
//!
//! - **completion**: Generate shell completion scripts (bash, zsh, fish, powershell, elvish)
//!
//! # Environment
//!
//! - `HALE_CONTENT_TYPE`, `HALE_URL_ROOT`, `HALE_URL_MIDDLE`: serialization defaults
//! - `HALE_MAX_FILE_SIZE`: maximum input size in bytes (default 1 GiB)
//! - `RUST_LOG`: log filter (default `warn`), logs go to stderr
//!
//! # Examples
//!
//! ```no_run
//! use hale_cli::commands::convert;
//! use hale_core::ContentType;
//!
//! # fn main() -> Result<(), hale_cli::error::CliError> {
//! // Flatten to plain JSON on stdout
//! convert("user.json", Some(ContentType::Json), true, None)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
