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

//! Collection configuration.

use hale_core::ResourceOptions;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default first page number.
pub const DEFAULT_FIRST_PAGE: i64 = 1;
/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: u64 = 12;

/// How pages are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagingMode {
    /// Every record is local, paging slices them.
    Client,
    /// Every page is fetched from the collection URL, nothing is retained.
    Server,
    /// Pages are fetched through the HAL navigation links and retained.
    #[default]
    Infinite,
}

impl fmt::Display for PagingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => write!(f, "client"),
            Self::Server => write!(f, "server"),
            Self::Infinite => write!(f, "infinite"),
        }
    }
}

/// Response field names holding the paging metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseParams {
    pub current_page: String,
    pub page_size: String,
    pub total_pages: Option<String>,
    pub total_records: Option<String>,
}

impl Default for ParseParams {
    fn default() -> Self {
        Self {
            current_page: "page".to_string(),
            page_size: "page_size".to_string(),
            total_pages: Some("total_pages".to_string()),
            total_records: Some("total_entries".to_string()),
        }
    }
}

impl ParseParams {
    pub fn current_page(mut self, field: impl Into<String>) -> Self {
        self.current_page = field.into();
        self
    }

    pub fn page_size(mut self, field: impl Into<String>) -> Self {
        self.page_size = field.into();
        self
    }

    pub fn total_pages(mut self, field: Option<String>) -> Self {
        self.total_pages = field;
        self
    }

    pub fn total_records(mut self, field: Option<String>) -> Self {
        self.total_records = field;
        self
    }
}

/// Query parameter names sent when fetching a page from the collection URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub current_page: String,
    pub page_size: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            current_page: "page".to_string(),
            page_size: "page_size".to_string(),
        }
    }
}

/// Configuration of a [`PagedCollection`](crate::PagedCollection).
#[derive(Debug, Clone)]
pub struct CollectionConfig {
    pub mode: PagingMode,
    /// Relation under `_embedded` holding the records. Required to parse records.
    pub rel: Option<String>,
    /// Sub-object of the response holding the paging metadata, if any.
    pub page_property: Option<String>,
    pub parse_params: ParseParams,
    pub query_params: QueryParams,
    /// Base URL of the collection.
    pub url: Option<String>,
    pub first_page: i64,
    pub page_size: u64,
    /// Options given to every record.
    pub resource_options: ResourceOptions,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            mode: PagingMode::default(),
            rel: None,
            page_property: None,
            parse_params: ParseParams::default(),
            query_params: QueryParams::default(),
            url: None,
            first_page: DEFAULT_FIRST_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            resource_options: ResourceOptions::default(),
        }
    }
}

impl CollectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: PagingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn page_property(mut self, property: impl Into<String>) -> Self {
        self.page_property = Some(property.into());
        self
    }

    pub fn parse_params(mut self, params: ParseParams) -> Self {
        self.parse_params = params;
        self
    }

    pub fn query_params(mut self, params: QueryParams) -> Self {
        self.query_params = params;
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn first_page(mut self, first_page: i64) -> Self {
        self.first_page = first_page;
        self
    }

    pub fn page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn resource_options(mut self, options: ResourceOptions) -> Self {
        self.resource_options = options;
        self
    }
}
