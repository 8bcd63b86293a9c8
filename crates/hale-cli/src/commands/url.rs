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

//! Url command - resource URL resolution

use super::{load_context, read_resource};
use crate::error::CliError;
use hale_core::ResourceOptions;

/// Arguments of [`url`].
#[derive(Debug, Clone, Default)]
pub struct UrlArgs {
    pub url_root: Option<String>,
    pub url_middle: Option<String>,
    pub collection_url: Option<String>,
    pub id_attribute: Option<String>,
}

/// Print the URL of the resource held in `file`.
///
/// The self link wins; otherwise the URL is derived from the resource root,
/// the collection URL, or `HALE_URL_ROOT` and `HALE_URL_MIDDLE`.
pub fn url(file: &str, args: &UrlArgs) -> Result<(), CliError> {
    let mut options = ResourceOptions::new();
    if let Some(id) = &args.id_attribute {
        options = options.id_attribute(id.clone());
    }
    if let Some(root) = &args.url_root {
        options = options.url_root(root.clone());
    }
    if let Some(middle) = &args.url_middle {
        options = options.url_middle(middle.clone());
    }

    let mut resource = read_resource(file, options)?;
    resource.set_collection_url(args.collection_url.clone());

    let ctx = load_context()?;
    println!("{}", resource.url(&ctx)?);
    Ok(())
}
