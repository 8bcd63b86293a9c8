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

//! Validate command - HAL document checking

use super::read_resource;
use crate::error::CliError;
use colored::Colorize;
use hale_core::ResourceOptions;

/// Check that a file holds a well-formed HAL resource.
///
/// # Errors
///
/// Returns the first codec error found, such as a link without `href` or an
/// empty link array.
pub fn validate(file: &str) -> Result<(), CliError> {
    let resource = read_resource(file, ResourceOptions::default())?;
    println!(
        "{} {} ({} links, {} embedded)",
        "✓".green(),
        file,
        resource.links().len(),
        resource.embedded().len()
    );
    Ok(())
}
