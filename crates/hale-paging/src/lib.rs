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

//! Paginated HAL collections.
//!
//! Maps page requests onto the `first`/`prev`/`next`/`last` links of HAL
//! collection responses, or onto page query parameters of the collection URL.
//!
//! # Modes
//!
//! - [`PagingMode::Client`]: every record is local; pages are slices.
//! - [`PagingMode::Server`]: every page is requested from the collection URL.
//! - [`PagingMode::Infinite`]: pages are requested through navigation links
//!   and kept, so returning to a page needs no request.
//!
//! # Example
//!
//! ```rust
//! use hale_paging::{CollectionConfig, PageIndex, PageOptions, PageResolved, PagedCollection};
//! use serde_json::json;
//!
//! let mut users = PagedCollection::new(
//!     CollectionConfig::new().rel("users").url("http://myserver.com/api/users").page_size(2),
//! );
//!
//! users.parse(&json!({
//!     "page": 1, "page_size": 2, "total_entries": 3,
//!     "_links": {
//!         "first": {"href": "http://myserver.com/api/users?page=1"},
//!         "next": {"href": "http://myserver.com/api/users?page=2"},
//!         "last": {"href": "http://myserver.com/api/users?page=2"}
//!     },
//!     "_embedded": {"users": [{"id": 1}, {"id": 2}]}
//! }))
//! .unwrap();
//!
//! match users.get_page(PageIndex::Next, PageOptions::new()).unwrap() {
//!     PageResolved::Fetched(request) => {
//!         assert_eq!(request.full_url(), "http://myserver.com/api/users?page=2")
//!     }
//!     PageResolved::Cached { .. } => unreachable!(),
//! }
//! ```

mod collection;
mod config;
mod index;
mod state;

pub use collection::{FetchRequest, PageOptions, PageResolved, PagedCollection, TOTAL_ITEMS_KEY};
pub use config::{
    CollectionConfig, PagingMode, ParseParams, QueryParams, DEFAULT_FIRST_PAGE, DEFAULT_PAGE_SIZE,
};
pub use index::PageIndex;
pub use state::{PageLinks, PagingState};
