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

//! Convert command - HAL JSON / plain JSON serialization

use super::{load_context, read_resource, render_json, write_output};
use crate::error::CliError;
use hale_core::{ContentType, ResourceOptions};
use tracing::debug;

/// Serialize a HAL document with the requested content type.
///
/// With no explicit `content_type` the `HALE_CONTENT_TYPE` default applies,
/// then `application/json`.
///
/// # Examples
///
/// ```no_run
/// use hale_cli::commands::convert;
/// use hale_core::ContentType;
///
/// # fn main() -> Result<(), hale_cli::error::CliError> {
/// convert("user.json", Some(ContentType::HalJson), true, Some("user.hal.json"))?;
/// # Ok(())
/// # }
/// ```
pub fn convert(
    file: &str,
    content_type: Option<ContentType>,
    pretty: bool,
    output: Option<&str>,
) -> Result<(), CliError> {
    let ctx = load_context()?;
    let resource = read_resource(file, ResourceOptions::default())?;
    let content_type = ctx.content_type(content_type);

    debug!(file, %content_type, "converting");
    let value = resource.to_json_with(Some(content_type), &ctx);
    write_output(&render_json(&value, pretty)?, output)
}
