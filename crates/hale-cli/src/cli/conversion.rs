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

//! Serialization commands.

use crate::commands;
use clap::{Subcommand, ValueEnum};
use hale_core::ContentType;

/// Output content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// Plain `application/json`: links dropped, embedded resources flattened
    Json,
    /// Lossless `application/hal+json`
    Hal,
}

impl From<Target> for ContentType {
    fn from(target: Target) -> Self {
        match target {
            Target::Json => ContentType::Json,
            Target::Hal => ContentType::HalJson,
        }
    }
}

/// Serialization commands.
#[derive(Subcommand)]
pub enum ConversionCommands {
    /// Serialize a HAL document as HAL JSON or plain JSON
    ///
    /// Without `--to`, the content type comes from HALE_CONTENT_TYPE and
    /// defaults to plain JSON.
    Convert {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output content type
        #[arg(short, long, value_enum)]
        to: Option<Target>,

        /// Pretty-print output
        #[arg(short, long)]
        pretty: bool,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl ConversionCommands {
    /// Execute the conversion command.
    pub fn execute(self) -> Result<(), String> {
        match self {
            ConversionCommands::Convert {
                file,
                to,
                pretty,
                output,
            } => commands::convert(&file, to.map(ContentType::from), pretty, output.as_deref())
                .map_err(|e| e.to_string()),
        }
    }
}
