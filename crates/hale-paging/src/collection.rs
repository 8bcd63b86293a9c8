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

//! The paged collection state machine.
//!
//! A [`PagedCollection`] never performs I/O. Navigating either resolves a
//! page from the records it already holds ([`PageResolved::Cached`]) or
//! describes the request the caller must issue ([`PageResolved::Fetched`]).
//! The caller hands the response body back through [`PagedCollection::parse`].

use crate::config::{CollectionConfig, PagingMode};
use crate::index::PageIndex;
use crate::state::{PageLinks, PagingState};
use hale_core::{capture_error, EmbeddedValue, HalError, HalResult, Resource, LINKS_KEY, EMBEDDED_KEY};
use serde_json::{json, Map, Value as JsonValue};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// Top-level response field holding the total item count.
pub const TOTAL_ITEMS_KEY: &str = "total_items";

const MISSING_URL: &str = "A \"url\" property or function must be specified";

/// Options for a single navigation.
#[derive(Default)]
pub struct PageOptions<'a> {
    /// Always describe a fetch, even when the page is held locally.
    pub fetch: bool,
    /// Invoked with the page models when the page is served locally.
    pub on_success: Option<Box<dyn FnOnce(&[Resource]) + 'a>>,
}

impl<'a> PageOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn force_fetch(mut self) -> Self {
        self.fetch = true;
        self
    }

    pub fn on_success<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&[Resource]) + 'a,
    {
        self.on_success = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for PageOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageOptions")
            .field("fetch", &self.fetch)
            .field("on_success", &self.on_success.is_some())
            .finish()
    }
}

/// A request the caller must perform to obtain a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    /// Query parameters to append to `url`. Empty for link-driven requests.
    pub query: Vec<(String, String)>,
    /// Page the collection was on.
    pub from: i64,
    /// Page being requested.
    pub to: i64,
}

impl FetchRequest {
    /// The URL with its query string applied.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, separator, query)
    }
}

/// Outcome of a navigation.
#[derive(Debug, Clone)]
pub enum PageResolved {
    /// Served from records already held; no request is needed.
    Cached { page: i64, models: Vec<Resource> },
    /// The page must be fetched and passed to [`PagedCollection::parse`].
    Fetched(FetchRequest),
}

impl PageResolved {
    pub fn is_cached(&self) -> bool {
        matches!(self, Self::Cached { .. })
    }

    pub fn fetch_request(&self) -> Option<&FetchRequest> {
        match self {
            Self::Fetched(request) => Some(request),
            Self::Cached { .. } => None,
        }
    }
}

/// A collection of HAL resources navigated page by page.
#[derive(Debug, Clone)]
pub struct PagedCollection {
    config: CollectionConfig,
    state: PagingState,
    models: Vec<Resource>,
    full: Vec<Resource>,
    page_hrefs: BTreeMap<i64, String>,
}

impl PagedCollection {
    pub fn new(config: CollectionConfig) -> Self {
        let state = PagingState::new(config.first_page, config.page_size);
        Self {
            config,
            state,
            models: Vec::new(),
            full: Vec::new(),
            page_hrefs: BTreeMap::new(),
        }
    }

    /// Build a collection holding every record up front, as client mode expects.
    pub fn with_records(config: CollectionConfig, records: Vec<Resource>) -> Self {
        let mut collection = Self::new(config);
        collection.set_full_collection(records);
        collection
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    pub fn mode(&self) -> PagingMode {
        self.config.mode
    }

    pub fn state(&self) -> &PagingState {
        &self.state
    }

    /// Models of the current page.
    pub fn models(&self) -> &[Resource] {
        &self.models
    }

    /// Every record held locally, in page order.
    pub fn full_collection(&self) -> &[Resource] {
        &self.full
    }

    /// Page hrefs recorded from navigation links, by page number.
    pub fn page_hrefs(&self) -> &BTreeMap<i64, String> {
        &self.page_hrefs
    }

    /// Replace the local records and recompute the totals from them.
    pub fn set_full_collection(&mut self, records: Vec<Resource>) {
        let records: Vec<Resource> = records.into_iter().map(|record| self.attach(record)).collect();
        self.full = records;
        self.state.total_records = Some(self.full.len() as u64);
        self.state.total_pages = None;
        self.state.derive_totals();
        self.models = self.slice(self.state.current_page);
    }

    // =========================================================================
    // Response parsing
    // =========================================================================

    /// Extract the navigation hrefs of a page response.
    pub fn parse_links(&self, resp: &JsonValue) -> HalResult<PageLinks> {
        let links = resp.get(LINKS_KEY).and_then(JsonValue::as_object);
        let href = |rel: &str| links.and_then(|l| l.get(rel)).and_then(link_href);

        let page_links = PageLinks {
            first: href("first"),
            last: href("last"),
            next: href("next"),
            prev: href("prev"),
        };

        if self.config.mode == PagingMode::Infinite && self.total_items(resp) != Some(0) {
            for (rel, found) in [("first", &page_links.first), ("last", &page_links.last)] {
                if found.is_none() {
                    return Err(capture_error(
                        HalError::missing_pagination_link(format!(
                            "Infinite paging requires a '{}' link, use the 'server' mode for non paginated collections !",
                            rel
                        )),
                        "PagedCollection::parse_links",
                        json!({ "links": links.cloned().map(JsonValue::Object) }),
                    ));
                }
            }
        }

        Ok(page_links)
    }

    /// Extract the records embedded under the configured relation.
    pub fn parse_records(&self, resp: &JsonValue) -> HalResult<Vec<Resource>> {
        let rel = self.config.rel.as_deref().ok_or_else(|| {
            capture_error(
                HalError::missing_relation_config(
                    "A 'rel' must be configured to read the records of a paged collection !",
                ),
                "PagedCollection::parse_records",
                json!({ "embedded": resp.get(EMBEDDED_KEY) }),
            )
        })?;

        let value = match resp.get(EMBEDDED_KEY).and_then(|e| e.get(rel)) {
            Some(value) => value,
            None => return Ok(Vec::new()),
        };

        let records = match EmbeddedValue::from_json_with(rel, value, &self.config.resource_options)? {
            EmbeddedValue::Resources(records) => records,
            EmbeddedValue::Resource(record) => vec![*record],
            EmbeddedValue::Null => Vec::new(),
        };

        Ok(records.into_iter().map(|record| self.attach(record)).collect())
    }

    /// Read paging metadata, returning the state the response describes.
    ///
    /// Fields missing from the response keep their current values.
    pub fn parse_state(&self, resp: &JsonValue) -> PagingState {
        let page = self.page_entity(resp);
        let params = &self.config.parse_params;
        let mut state = self.state.clone();

        if let Some(current) = read_i64(page, &params.current_page) {
            state.current_page = current;
        }
        if let Some(size) = read_u64(page, &params.page_size) {
            state.page_size = size;
        }

        let records = params.total_records.as_deref().and_then(|key| read_u64(page, key));
        let pages = params.total_pages.as_deref().and_then(|key| read_u64(page, key));
        if records.is_some() {
            state.total_records = records;
        }
        if pages.is_some() || records.is_some() {
            state.total_pages = pages;
        }
        state.derive_totals();

        state
    }

    /// Apply a page response: state, navigation links, records.
    ///
    /// Nothing is modified when the response is rejected.
    pub fn parse(&mut self, resp: &JsonValue) -> HalResult<&[Resource]> {
        let links = self.parse_links(resp)?;
        let mut state = self.parse_state(resp);
        let records = self.parse_records(resp)?;

        state.links = links.clone();
        self.state = state;

        match self.config.mode {
            PagingMode::Server => {
                self.models = records;
            }
            PagingMode::Client => {
                self.set_full_collection(records);
            }
            PagingMode::Infinite => {
                self.record_page_hrefs(&links);
                self.store_page(&records);
                self.models = records;
            }
        }

        debug!(
            mode = %self.config.mode,
            page = self.state.current_page,
            records = self.models.len(),
            "parsed collection page"
        );

        Ok(&self.models)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move to `index`.
    ///
    /// An index outside the known page range fails with `InvalidPageIndex`
    /// and leaves the collection unchanged.
    pub fn get_page(&mut self, index: PageIndex, options: PageOptions<'_>) -> HalResult<PageResolved> {
        let from = self.state.current_page;
        let page = self.resolve_index(index)?;
        let models = self.slice(page);

        let local = match self.config.mode {
            PagingMode::Client => true,
            PagingMode::Infinite => !models.is_empty(),
            PagingMode::Server => false,
        };

        if local && !options.fetch {
            self.state.current_page = page;
            self.models = models.clone();
            if let Some(callback) = options.on_success {
                callback(&self.models);
            }
            debug!(from, to = page, "page served locally");
            return Ok(PageResolved::Cached { page, models });
        }

        let request = self.request_for(page, from)?;
        self.state.current_page = page;
        debug!(from, to = page, url = %request.url, "page needs fetching");
        Ok(PageResolved::Fetched(request))
    }

    pub fn get_first_page(&mut self, options: PageOptions<'_>) -> HalResult<PageResolved> {
        self.get_page(PageIndex::First, options)
    }

    pub fn get_previous_page(&mut self, options: PageOptions<'_>) -> HalResult<PageResolved> {
        self.get_page(PageIndex::Prev, options)
    }

    pub fn get_next_page(&mut self, options: PageOptions<'_>) -> HalResult<PageResolved> {
        self.get_page(PageIndex::Next, options)
    }

    pub fn get_last_page(&mut self, options: PageOptions<'_>) -> HalResult<PageResolved> {
        self.get_page(PageIndex::Last, options)
    }

    pub fn has_previous_page(&self) -> bool {
        let current = self.state.current_page;
        match self.config.mode {
            PagingMode::Infinite => current
                .checked_sub(1)
                .is_some_and(|prev| self.page_hrefs.contains_key(&prev)),
            _ => current > self.state.first_page,
        }
    }

    pub fn has_next_page(&self) -> bool {
        let current = self.state.current_page;
        match self.config.mode {
            PagingMode::Infinite => current
                .checked_add(1)
                .is_some_and(|next| self.page_hrefs.contains_key(&next)),
            _ => self.state.last_page.is_some_and(|last| current < last),
        }
    }

    /// The request loading the current page.
    pub fn fetch_request(&self) -> HalResult<FetchRequest> {
        let page = self.state.current_page;
        self.request_for(page, page)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn attach(&self, mut record: Resource) -> Resource {
        if record.collection_url().is_none() {
            record.set_collection_url(self.config.url.clone());
        }
        record
    }

    /// Object holding the paging metadata.
    fn page_entity<'r>(&self, resp: &'r JsonValue) -> &'r JsonValue {
        self.config
            .page_property
            .as_deref()
            .and_then(|property| resp.get(property))
            .filter(|entity| entity.is_object())
            .unwrap_or(resp)
    }

    /// Total item count: `total_items`, else the total records field.
    fn total_items(&self, resp: &JsonValue) -> Option<u64> {
        resp.get(TOTAL_ITEMS_KEY).and_then(as_u64).or_else(|| {
            let key = self.config.parse_params.total_records.as_deref()?;
            read_u64(self.page_entity(resp), key)
        })
    }

    fn resolve_index(&self, index: PageIndex) -> HalResult<i64> {
        let state = &self.state;
        let page = match index {
            PageIndex::First => Some(state.first_page),
            PageIndex::Prev => state.current_page.checked_sub(1),
            PageIndex::Next => state.current_page.checked_add(1),
            PageIndex::Last => state.last_page,
            PageIndex::Number(n) => Some(n),
        };

        match page {
            Some(page) if state.in_range(page) => Ok(page),
            _ => Err(capture_error(
                HalError::invalid_page_index(format!(
                    "Page '{}' is outside of the page range !",
                    index
                )),
                "PagedCollection::get_page",
                json!({
                    "index": index.to_string(),
                    "firstPage": state.first_page,
                    "currentPage": state.current_page,
                    "lastPage": state.last_page,
                }),
            )),
        }
    }

    fn slice(&self, page: i64) -> Vec<Resource> {
        let start = self.state.page_start(page);
        if start >= self.full.len() {
            return Vec::new();
        }
        let end = start
            .saturating_add(self.state.page_size as usize)
            .min(self.full.len());
        self.full[start..end].to_vec()
    }

    fn record_page_hrefs(&mut self, links: &PageLinks) {
        let state = &self.state;
        let current = state.current_page;
        let mut entries = Vec::new();

        if let Some(href) = &links.first {
            entries.push((state.first_page, href.clone()));
        }
        if let (Some(href), Some(last)) = (&links.last, state.last_page) {
            entries.push((last, href.clone()));
        }
        if let (Some(href), Some(next)) = (&links.next, current.checked_add(1)) {
            entries.push((next, href.clone()));
        }
        if let (Some(href), Some(prev)) = (&links.prev, current.checked_sub(1)) {
            entries.push((prev, href.clone()));
        }

        self.page_hrefs.extend(entries);
    }

    fn store_page(&mut self, records: &[Resource]) {
        let start = self.state.page_start(self.state.current_page);
        if start > self.full.len() {
            warn!(
                page = self.state.current_page,
                start,
                held = self.full.len(),
                "page is not contiguous with the records held, not retaining it"
            );
            return;
        }
        // The page replaces its whole slot, even when it came back shorter.
        let end = start
            .saturating_add(self.state.page_size as usize)
            .min(self.full.len());
        self.full.splice(start..end, records.iter().cloned());
    }

    fn request_for(&self, page: i64, from: i64) -> HalResult<FetchRequest> {
        if self.config.mode == PagingMode::Infinite {
            if let Some(href) = self.page_hrefs.get(&page) {
                return Ok(FetchRequest {
                    url: href.clone(),
                    query: Vec::new(),
                    from,
                    to: page,
                });
            }
        }

        let url = self
            .config
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                capture_error(
                    HalError::url_resolution(MISSING_URL),
                    "PagedCollection::fetch_request",
                    json!({ "page": page }),
                )
            })?;

        let query = match self.config.mode {
            PagingMode::Client => Vec::new(),
            _ => {
                let params = &self.config.query_params;
                vec![
                    (params.current_page.clone(), page.to_string()),
                    (params.page_size.clone(), self.state.page_size.to_string()),
                ]
            }
        };

        Ok(FetchRequest {
            url: url.to_string(),
            query,
            from,
            to: page,
        })
    }
}

/// `href` of a link object, or of the first link of an array.
fn link_href(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Object(link) => link_object_href(link),
        JsonValue::Array(links) => links.first().and_then(JsonValue::as_object).and_then(link_object_href),
        _ => None,
    }
}

fn link_object_href(link: &Map<String, JsonValue>) -> Option<String> {
    link.get("href").and_then(JsonValue::as_str).map(str::to_string)
}

fn as_u64(value: &JsonValue) -> Option<u64> {
    match value {
        JsonValue::Number(n) => n.as_u64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn read_u64(entity: &JsonValue, key: &str) -> Option<u64> {
    entity.get(key).and_then(as_u64)
}

fn read_i64(entity: &JsonValue, key: &str) -> Option<i64> {
    match entity.get(key)? {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseParams;
    use hale_core::HalErrorKind;

    fn infinite() -> PagedCollection {
        PagedCollection::new(
            CollectionConfig::new()
                .rel("users")
                .url("http://myserver.com/api/users")
                .page_size(2),
        )
    }

    #[test]
    fn test_parse_links_first_last() {
        let links = infinite()
            .parse_links(&json!({
                "_links": {"first": {"href": "A"}, "last": {"href": "B"}},
                "total_items": 5
            }))
            .unwrap();
        assert_eq!(links.first.as_deref(), Some("A"));
        assert_eq!(links.last.as_deref(), Some("B"));
        assert!(links.next.is_none());
        assert!(links.prev.is_none());
    }

    #[test]
    fn test_parse_links_zero_items() {
        let links = infinite().parse_links(&json!({"total_items": 0})).unwrap();
        assert_eq!(links, PageLinks::default());
    }

    #[test]
    fn test_parse_links_missing_last() {
        let err = infinite()
            .parse_links(&json!({"_links": {"first": {"href": "A"}}, "total_items": 5}))
            .unwrap_err();
        assert_eq!(err.kind, HalErrorKind::MissingPaginationLink);
        assert!(err.message.contains("'last'"));
    }

    #[test]
    fn test_parse_links_server_mode_is_lenient() {
        let collection = PagedCollection::new(CollectionConfig::new().mode(PagingMode::Server));
        assert!(collection.parse_links(&json!({})).is_ok());
    }

    #[test]
    fn test_parse_records_requires_rel() {
        let collection = PagedCollection::new(CollectionConfig::new());
        let err = collection.parse_records(&json!({"_embedded": {}})).unwrap_err();
        assert_eq!(err.kind, HalErrorKind::MissingRelationConfig);
    }

    #[test]
    fn test_parse_records_single_object() {
        let records = infinite()
            .parse_records(&json!({"_embedded": {"users": {"id": 1}}}))
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].collection_url(), Some("http://myserver.com/api/users"));
    }

    #[test]
    fn test_parse_state_page_property() {
        let collection = PagedCollection::new(
            CollectionConfig::new().page_property("page").parse_params(
                ParseParams::default()
                    .current_page("number")
                    .page_size("size")
                    .total_pages(Some("totalPages".to_string()))
                    .total_records(Some("totalElements".to_string())),
            ),
        );
        let state = collection.parse_state(&json!({
            "number": 99,
            "page": {"number": 2, "size": 5, "totalElements": 11}
        }));
        assert_eq!(state.current_page, 2);
        assert_eq!(state.page_size, 5);
        assert_eq!(state.total_records, Some(11));
        assert_eq!(state.total_pages, Some(3));
        assert_eq!(state.last_page, Some(3));
    }

    #[test]
    fn test_out_of_range_leaves_state() {
        let mut collection = infinite();
        collection
            .parse(&json!({
                "page": 1, "page_size": 2, "total_entries": 4,
                "_links": {"first": {"href": "A"}, "last": {"href": "B"}},
                "_embedded": {"users": [{"id": 1}, {"id": 2}]}
            }))
            .unwrap();

        let before = collection.state().clone();
        let err = collection.get_page(PageIndex::Number(5), PageOptions::new()).unwrap_err();
        assert_eq!(err.kind, HalErrorKind::InvalidPageIndex);
        assert_eq!(collection.state(), &before);
    }

    #[test]
    fn test_full_url() {
        let request = FetchRequest {
            url: "http://myserver.com/api/users?sort=name".to_string(),
            query: vec![("page".to_string(), "2".to_string()), ("page size".to_string(), "12".to_string())],
            from: 1,
            to: 2,
        };
        assert_eq!(
            request.full_url(),
            "http://myserver.com/api/users?sort=name&page=2&page%20size=12"
        );
    }

    #[test]
    fn test_extreme_page_numbers_skip_neighbours() {
        let links = json!({
            "first": {"href": "A"}, "last": {"href": "B"},
            "next": {"href": "C"}, "prev": {"href": "D"}
        });

        let mut collection = infinite();
        collection
            .parse(&json!({
                "page": i64::MAX, "page_size": 2, "total_entries": 4,
                "_links": links, "_embedded": {"users": [{"id": 1}]}
            }))
            .unwrap();
        assert!(!collection.has_next_page());
        assert_eq!(collection.page_hrefs().get(&(i64::MAX - 1)).map(String::as_str), Some("D"));

        let mut collection = infinite();
        collection
            .parse(&json!({
                "page": i64::MIN, "page_size": 2, "total_entries": 4,
                "_links": links, "_embedded": {"users": [{"id": 1}]}
            }))
            .unwrap();
        assert!(!collection.has_previous_page());
        assert_eq!(collection.page_hrefs().get(&(i64::MIN + 1)).map(String::as_str), Some("C"));
    }

    #[test]
    fn test_refetched_short_page_replaces_slot() {
        let page = |number: i64, ids: Vec<i64>| {
            let users: Vec<JsonValue> = ids.into_iter().map(|id| json!({ "id": id })).collect();
            json!({
                "page": number, "page_size": 2, "total_entries": 3,
                "_links": {"first": {"href": "A"}, "last": {"href": "B"}},
                "_embedded": {"users": users}
            })
        };

        let mut collection = infinite();
        collection.parse(&page(1, vec![1, 2])).unwrap();
        collection.parse(&page(2, vec![3])).unwrap();
        assert_eq!(collection.full_collection().len(), 3);

        collection.parse(&page(1, vec![9])).unwrap();
        let ids: Vec<_> = collection
            .full_collection()
            .iter()
            .filter_map(|record| record.id().cloned())
            .collect();
        assert_eq!(ids, vec![json!(9), json!(3)]);
    }
}
