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

//! Builder pattern for creating customizable test fixtures.
//!
//! Builders produce raw JSON documents; parse them with
//! [`Resource::from_json`](hale_core::Resource::from_json) or use
//! [`ResourceBuilder::build_resource`].

use hale_core::{HalResult, Resource};
use serde_json::{json, Map, Value as JsonValue};

/// Builder for HAL resource documents.
///
/// # Examples
///
/// ```
/// use hale_test::fixtures::builders::ResourceBuilder;
/// use serde_json::json;
///
/// let doc = ResourceBuilder::new()
///     .attr("id", 1)
///     .link("self", "http://myserver.com/api/users/1")
///     .embed("address", ResourceBuilder::new().attr("city", "Paris"))
///     .build();
///
/// assert_eq!(doc["_links"]["self"]["href"], "http://myserver.com/api/users/1");
/// assert_eq!(doc["_embedded"]["address"], json!({"city": "Paris"}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceBuilder {
    attributes: Map<String, JsonValue>,
    links: Map<String, JsonValue>,
    embedded: Map<String, JsonValue>,
}

impl ResourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Adds a link with only an href.
    pub fn link(self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        let href: String = href.into();
        self.link_json(rel, json!({ "href": href }))
    }

    /// Adds a link array from (href, name) pairs.
    pub fn link_array(self, rel: impl Into<String>, links: &[(&str, &str)]) -> Self {
        let links: Vec<JsonValue> = links
            .iter()
            .map(|(href, name)| json!({"href": href, "name": name}))
            .collect();
        self.link_json(rel, JsonValue::Array(links))
    }

    /// Adds a link relation as raw JSON.
    pub fn link_json(mut self, rel: impl Into<String>, value: JsonValue) -> Self {
        self.links.insert(rel.into(), value);
        self
    }

    /// Embeds a single resource.
    pub fn embed(mut self, rel: impl Into<String>, resource: ResourceBuilder) -> Self {
        self.embedded.insert(rel.into(), resource.build());
        self
    }

    /// Embeds an array of resources.
    pub fn embed_many(mut self, rel: impl Into<String>, resources: Vec<ResourceBuilder>) -> Self {
        let items = resources.into_iter().map(ResourceBuilder::build).collect();
        self.embedded.insert(rel.into(), JsonValue::Array(items));
        self
    }

    /// Builds the document: attributes, then `_embedded`, then `_links`.
    pub fn build(self) -> JsonValue {
        let mut doc = self.attributes;
        if !self.embedded.is_empty() {
            doc.insert("_embedded".to_string(), JsonValue::Object(self.embedded));
        }
        if !self.links.is_empty() {
            doc.insert("_links".to_string(), JsonValue::Object(self.links));
        }
        JsonValue::Object(doc)
    }

    /// Builds and parses the document.
    pub fn build_resource(self) -> HalResult<Resource> {
        Resource::from_json(&self.build())
    }
}

/// Builder for paged collection responses.
///
/// # Examples
///
/// ```
/// use hale_test::fixtures::builders::PageBuilder;
/// use serde_json::json;
///
/// let page = PageBuilder::new("users")
///     .field("page", 1)
///     .link("first", "http://myserver.com/api/users?page=1")
///     .records(vec![json!({"id": 1})])
///     .build();
///
/// assert_eq!(page["_embedded"]["users"][0]["id"], 1);
/// ```
#[derive(Debug, Clone)]
pub struct PageBuilder {
    rel: String,
    fields: Map<String, JsonValue>,
    links: Map<String, JsonValue>,
    records: Option<Vec<JsonValue>>,
}

impl PageBuilder {
    /// Creates a builder embedding its records under `rel`.
    pub fn new(rel: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            fields: Map::new(),
            links: Map::new(),
            records: None,
        }
    }

    /// Adds a metadata field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Adds a navigation link.
    pub fn link(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        let href: String = href.into();
        self.links.insert(rel.into(), json!({ "href": href }));
        self
    }

    /// Adds a templated link.
    pub fn templated_link(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        let href: String = href.into();
        self.links
            .insert(rel.into(), json!({ "href": href, "templated": true }));
        self
    }

    /// Sets the embedded records.
    pub fn records(mut self, records: Vec<JsonValue>) -> Self {
        self.records = Some(records);
        self
    }

    /// Builds the response: `_links`, `_embedded`, then metadata fields.
    pub fn build(self) -> JsonValue {
        let mut doc = Map::new();
        if !self.links.is_empty() {
            doc.insert("_links".to_string(), JsonValue::Object(self.links));
        }
        if let Some(records) = self.records {
            doc.insert("_embedded".to_string(), json!({ self.rel: records }));
        }
        doc.extend(self.fields);
        JsonValue::Object(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_builder_order() {
        let doc = ResourceBuilder::new()
            .attr("id", 1)
            .link("self", "a")
            .embed_many("items", vec![ResourceBuilder::new().attr("n", 1)])
            .build();
        let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "_embedded", "_links"]);
    }

    #[test]
    fn test_resource_builder_parses() {
        let user = ResourceBuilder::new()
            .attr("id", 1)
            .link_array("friends", &[("b", "simon"), ("c", "john")])
            .build_resource()
            .unwrap();
        assert!(user.get_link("friends").unwrap().is_array());
    }

    #[test]
    fn test_page_builder_without_records() {
        let page = PageBuilder::new("users").field("total_items", 0).build();
        assert!(page.get("_embedded").is_none());
        assert_eq!(page["total_items"], 0);
    }
}
