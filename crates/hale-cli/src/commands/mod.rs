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

//! CLI command implementations

mod completion;
mod convert;
mod inspect;
mod page;
mod url;
mod validate;

pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use convert::convert;
pub use inspect::inspect;
pub use page::{page, PageArgs};
pub use url::{url, UrlArgs};
pub use validate::validate;

use crate::error::CliError;
use hale_core::{HalContext, Resource, ResourceOptions};
use serde_json::Value as JsonValue;
use std::fs;
use std::io::{self, Write};
use tracing::debug;

/// Default maximum file size (1 GB).
/// Can be overridden via HALE_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_VAR: &str = "HALE_MAX_FILE_SIZE";

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_VAR)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum are rejected before reading.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is too large, or
/// the file cannot be read as UTF-8.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    let max_file_size = get_max_file_size();

    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    debug!(path, bytes = metadata.len(), "reading input");
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Read a file as a JSON value.
pub fn read_json(path: &str) -> Result<JsonValue, CliError> {
    let content = read_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read a file as a HAL resource.
pub fn read_resource(path: &str, options: ResourceOptions) -> Result<Resource, CliError> {
    let value = read_json(path)?;
    Ok(Resource::from_json_with(&value, options)?)
}

/// Serialization defaults from the `HALE_*` environment variables.
pub fn load_context() -> Result<HalContext, CliError> {
    Ok(HalContext::from_env()?)
}

/// Render JSON compact or pretty, newline terminated.
pub fn render_json(value: &JsonValue, pretty: bool) -> Result<String, CliError> {
    let mut out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    out.push('\n');
    Ok(out)
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
