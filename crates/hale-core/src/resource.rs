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

//! HAL resources.
//!
//! A [`Resource`] keeps its plain attributes, its [`Links`] and its
//! [`Embedded`] resources in separate namespaces. They are merged into one
//! JSON object on the wire:
//!
//! | content type           | output                                               |
//! |------------------------|------------------------------------------------------|
//! | `application/json`     | attributes, embedded relations flattened, no links   |
//! | `application/hal+json` | attributes, then `_embedded` and `_links` when non-empty |

use crate::capture::capture_error;
use crate::context::{ContentType, HalContext};
use crate::embedded::{Embedded, EmbeddedRegistry, EmbeddedValue};
use crate::error::{HalError, HalResult};
use crate::link::LinkValue;
use crate::links::Links;
use crate::url::resolve_url;
use serde_json::{json, Map, Value as JsonValue};
use tracing::debug;

/// Reserved key holding the links of a resource.
pub const LINKS_KEY: &str = "_links";
/// Reserved key holding the embedded resources of a resource.
pub const EMBEDDED_KEY: &str = "_embedded";

/// Per-resource settings, shared by every resource built from a template.
#[derive(Debug, Clone)]
pub struct ResourceOptions {
    /// Attribute holding the resource identifier. Defaults to `id`.
    pub id_attribute: String,
    /// Base URL of resources of this kind.
    pub url_root: Option<String>,
    /// Path segment appended to the context root URL.
    pub url_middle: Option<String>,
    /// Factories for embedded relations.
    pub registry: EmbeddedRegistry,
}

impl Default for ResourceOptions {
    fn default() -> Self {
        Self {
            id_attribute: "id".to_string(),
            url_root: None,
            url_middle: None,
            registry: EmbeddedRegistry::new(),
        }
    }
}

impl ResourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id_attribute(mut self, id_attribute: impl Into<String>) -> Self {
        self.id_attribute = id_attribute.into();
        self
    }

    pub fn url_root(mut self, url_root: impl Into<String>) -> Self {
        self.url_root = Some(url_root.into());
        self
    }

    pub fn url_middle(mut self, url_middle: impl Into<String>) -> Self {
        self.url_middle = Some(url_middle.into());
        self
    }

    /// Build the resources embedded under `rel` with `options`.
    pub fn embed(mut self, rel: impl Into<String>, options: ResourceOptions) -> Self {
        self.registry.register(rel, options);
        self
    }

    /// Build the resources embedded under `rel` with a closure.
    pub fn embed_with<F>(mut self, rel: impl Into<String>, builder: F) -> Self
    where
        F: Fn(&str, &JsonValue) -> HalResult<EmbeddedValue> + Send + Sync + 'static,
    {
        self.registry.register_with(rel, builder);
        self
    }
}

/// A HAL resource: attributes plus owned links and embedded resources.
#[derive(Debug, Clone, Default)]
pub struct Resource {
    attributes: Map<String, JsonValue>,
    links: Links,
    embedded: Embedded,
    options: ResourceOptions,
    collection_url: Option<String>,
}

impl Resource {
    /// An empty resource with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ResourceOptions) -> Self {
        Self {
            attributes: Map::new(),
            links: Links::new(),
            embedded: Embedded::with_registry(options.registry.clone()),
            options,
            collection_url: None,
        }
    }

    /// Build a resource from a HAL document.
    pub fn from_json(value: &JsonValue) -> HalResult<Self> {
        Self::from_json_with(value, ResourceOptions::default())
    }

    pub fn from_json_with(value: &JsonValue, options: ResourceOptions) -> HalResult<Self> {
        let mut resource = Self::with_options(options);
        resource.set(value)?;
        Ok(resource)
    }

    /// Assign attributes from a JSON object.
    ///
    /// `_links` and `_embedded` are merged relation by relation into the
    /// existing containers; every other key is upserted as an attribute.
    /// A `null` `_links` or `_embedded` is ignored. The resource is left
    /// unchanged when any part of `attrs` is rejected.
    pub fn set(&mut self, attrs: &JsonValue) -> HalResult<&mut Self> {
        let obj = expect_object(attrs, "Resource::set")?;
        let mut links = self.links.clone();
        let mut embedded = self.embedded.clone();
        merge_reserved(obj, &mut links, &mut embedded)?;
        Ok(self.commit(obj, links, embedded))
    }

    /// Assign one attribute. `_links` and `_embedded` keys are merged.
    pub fn set_attr(&mut self, key: impl Into<String>, value: JsonValue) -> HalResult<&mut Self> {
        let mut attrs = Map::with_capacity(1);
        attrs.insert(key.into(), value);
        self.set(&JsonValue::Object(attrs))
    }

    pub(crate) fn insert_attribute(&mut self, key: impl Into<String>, value: JsonValue) {
        self.attributes.insert(key.into(), value);
    }

    /// Replace links and embedded resources with those of a server response.
    ///
    /// A rejected response leaves the resource unchanged.
    pub fn parse(&mut self, resp: &JsonValue) -> HalResult<&mut Self> {
        let obj = expect_object(resp, "Resource::parse")?;
        let mut links = Links::new();
        let mut embedded = Embedded::with_registry(self.options.registry.clone());
        merge_reserved(obj, &mut links, &mut embedded)?;
        Ok(self.commit(obj, links, embedded))
    }

    fn commit(
        &mut self,
        obj: &Map<String, JsonValue>,
        links: Links,
        embedded: Embedded,
    ) -> &mut Self {
        self.links = links;
        self.embedded = embedded;
        for (key, value) in obj {
            if key != LINKS_KEY && key != EMBEDDED_KEY {
                self.attributes.insert(key.clone(), value.clone());
            }
        }

        debug!(
            attributes = self.attributes.len(),
            links = self.links.len(),
            embedded = self.embedded.len(),
            "resource attributes set"
        );
        self
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.attributes.get(key)
    }

    /// True if the attribute exists and is not `null`.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_null())
    }

    pub fn unset(&mut self, key: &str) -> Option<JsonValue> {
        self.attributes.shift_remove(key)
    }

    pub fn attributes(&self) -> &Map<String, JsonValue> {
        &self.attributes
    }

    /// The identifier, read from the configured id attribute.
    pub fn id(&self) -> Option<&JsonValue> {
        self.get(&self.options.id_attribute).filter(|v| !v.is_null())
    }

    /// A resource without identifier has never been saved.
    pub fn is_new(&self) -> bool {
        self.id().is_none()
    }

    pub fn options(&self) -> &ResourceOptions {
        &self.options
    }

    /// URL of the collection this resource belongs to.
    pub fn collection_url(&self) -> Option<&str> {
        self.collection_url.as_deref()
    }

    pub fn set_collection_url(&mut self, url: Option<String>) {
        self.collection_url = url;
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    pub fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }

    pub fn get_link(&self, rel: &str) -> Option<&LinkValue> {
        self.links.get(rel)
    }

    pub fn has_link(&self, rel: &str) -> bool {
        self.links.has(rel)
    }

    pub fn embedded(&self) -> &Embedded {
        &self.embedded
    }

    pub fn embedded_mut(&mut self) -> &mut Embedded {
        &mut self.embedded
    }

    pub fn get_embedded(&self, rel: &str) -> Option<&EmbeddedValue> {
        self.embedded.get(rel)
    }

    pub fn has_embedded(&self, rel: &str) -> bool {
        self.embedded.has(rel)
    }

    pub fn set_embedded(&mut self, rel: impl Into<String>, value: impl Into<EmbeddedValue>) {
        self.embedded.set(rel, value);
    }

    pub fn unset_embedded(&mut self, rel: &str) -> Option<EmbeddedValue> {
        self.embedded.unset(rel)
    }

    /// Serialize with the context's default content type.
    pub fn to_json(&self, ctx: &HalContext) -> JsonValue {
        self.to_json_with(None, ctx)
    }

    /// Serialize with `content_type`, falling back to the context default
    /// and then to `application/json`.
    pub fn to_json_with(&self, content_type: Option<ContentType>, ctx: &HalContext) -> JsonValue {
        self.to_json_as(ctx.content_type(content_type))
    }

    /// Serialize as `application/hal+json`.
    pub fn to_hal_json(&self) -> JsonValue {
        self.to_json_as(ContentType::HalJson)
    }

    pub fn to_json_as(&self, content_type: ContentType) -> JsonValue {
        let mut out = self.attributes.clone();

        match content_type {
            ContentType::Json => {
                for (rel, value) in self.embedded.to_json_map(content_type) {
                    out.insert(rel, value);
                }
            }
            ContentType::HalJson => {
                if !self.embedded.is_empty() {
                    out.insert(
                        EMBEDDED_KEY.to_string(),
                        self.embedded.to_json(content_type),
                    );
                }
                if !self.links.is_empty() {
                    out.insert(LINKS_KEY.to_string(), self.links.to_json());
                }
            }
        }

        JsonValue::Object(out)
    }

    /// A new resource rebuilt from this one's `application/hal+json` form.
    pub fn try_clone(&self) -> HalResult<Self> {
        let mut clone = Self::from_json_with(&self.to_hal_json(), self.options.clone())?;
        clone.collection_url = self.collection_url.clone();
        Ok(clone)
    }

    /// The URL of this resource, see [`resolve_url`].
    pub fn url(&self, ctx: &HalContext) -> HalResult<String> {
        resolve_url(self, ctx)
    }
}

fn expect_object<'v>(value: &'v JsonValue, method: &str) -> HalResult<&'v Map<String, JsonValue>> {
    value.as_object().ok_or_else(|| {
        capture_error(
            HalError::invalid_resource("A HAL resource must be a JSON object !"),
            method,
            json!({ "attributes": value }),
        )
    })
}

/// Merge `_links` and `_embedded` of `obj` into the staged containers.
fn merge_reserved(
    obj: &Map<String, JsonValue>,
    links: &mut Links,
    embedded: &mut Embedded,
) -> HalResult<()> {
    match obj.get(LINKS_KEY) {
        None | Some(JsonValue::Null) => {}
        Some(value) => links.merge_json(value)?,
    }
    match obj.get(EMBEDDED_KEY) {
        None | Some(JsonValue::Null) => {}
        Some(value) => embedded.merge_json(value)?,
    }
    Ok(())
}

/// Parse a HAL document from JSON text.
pub fn from_str(json: &str) -> HalResult<Resource> {
    from_str_with(json, ResourceOptions::default())
}

/// Parse a HAL document from JSON text, building it with `options`.
pub fn from_str_with(json: &str, options: ResourceOptions) -> HalResult<Resource> {
    let value: JsonValue = serde_json::from_str(json).map_err(|e| {
        capture_error(
            HalError::json(format!("Invalid JSON: {}", e)),
            "hale_core::from_str",
            json!({ "line": e.line(), "column": e.column() }),
        )
    })?;
    Resource::from_json_with(&value, options)
}
