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

//! Page command - paged collection state and navigation

use super::{read_json, render_json, write_output};
use crate::error::CliError;
use hale_paging::{
    CollectionConfig, PageIndex, PageOptions, PageResolved, PagedCollection, PagingMode,
    ParseParams, QueryParams,
};
use serde_json::{json, Value as JsonValue};
use tracing::info;

/// Arguments of [`page`].
#[derive(Debug, Clone)]
pub struct PageArgs {
    pub rel: String,
    pub mode: PagingMode,
    pub url: Option<String>,
    pub page_property: Option<String>,
    pub first_page: i64,
    pub page_size: u64,
    pub parse_params: ParseParams,
    pub query_params: QueryParams,
    /// Navigation to resolve after parsing.
    pub goto: Option<PageIndex>,
    pub pretty: bool,
}

impl PageArgs {
    fn config(&self) -> CollectionConfig {
        let mut config = CollectionConfig::new()
            .mode(self.mode)
            .rel(self.rel.clone())
            .first_page(self.first_page)
            .page_size(self.page_size)
            .parse_params(self.parse_params.clone())
            .query_params(self.query_params.clone());
        if let Some(url) = &self.url {
            config = config.url(url.clone());
        }
        if let Some(property) = &self.page_property {
            config = config.page_property(property.clone());
        }
        config
    }
}

/// Parse a collection response and print its paging state as JSON.
///
/// With `goto`, the navigation is resolved and reported either as a page
/// served from the parsed records or as the request that would fetch it.
pub fn page(file: &str, args: &PageArgs) -> Result<(), CliError> {
    let resp = read_json(file)?;
    let mut collection = PagedCollection::new(args.config());
    let records = collection.parse(&resp)?.len();

    let mut report = json!({
        "state": collection.state(),
        "records": records,
        "hasNextPage": collection.has_next_page(),
        "hasPreviousPage": collection.has_previous_page(),
    });

    if let Some(index) = args.goto {
        let resolved = collection.get_page(index, PageOptions::new())?;
        info!(%index, cached = resolved.is_cached(), "navigation resolved");
        if let Some(obj) = report.as_object_mut() {
            obj.insert("goto".to_string(), describe(&resolved));
        }
    }

    write_output(&render_json(&report, args.pretty)?, None)
}

fn describe(resolved: &PageResolved) -> JsonValue {
    match resolved {
        PageResolved::Cached { page, models } => json!({
            "cached": true,
            "page": page,
            "records": models.len(),
        }),
        PageResolved::Fetched(request) => json!({
            "cached": false,
            "page": request.to,
            "from": request.from,
            "url": request.full_url(),
        }),
    }
}
