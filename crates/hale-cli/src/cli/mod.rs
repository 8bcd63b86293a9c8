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

//! CLI command definitions and argument parsing.
//!
//! Commands are organized into the following modules:
//!
//! - [`core`]: Inspection commands (validate, inspect, url, page)
//! - [`conversion`]: Serialization commands (convert)
//! - [`utility`]: Utility commands (completion)

mod conversion;
mod core;
mod utility;

use clap::{Parser, Subcommand};

pub use conversion::{ConversionCommands, Target};
pub use core::{CoreCommands, ModeArg};
pub use utility::UtilityCommands;

/// HALE - HAL resource toolkit
///
/// Converts, inspects and pages HAL (`application/hal+json`) documents.
///
/// # Examples
///
/// ```bash
/// # Flatten a HAL document to plain JSON
/// hale convert user.json --to json --pretty
///
/// # Resolve the URL of a resource
/// hale url user.json --url-root http://myserver.com/api --url-middle users
///
/// # Read the paging state of a collection response
/// hale page users.json --rel users --goto next
/// ```
#[derive(Parser)]
#[command(name = "hale")]
#[command(author, version, about = "HALE - HAL resource toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Core (validate, inspect, url, page)
/// ├── Conversion (convert)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Core commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Conversion commands - flattened to appear at top level
    #[command(flatten)]
    Conversion(ConversionCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns the rendered error message when reading, parsing, resolving
    /// or writing fails.
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Conversion(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
