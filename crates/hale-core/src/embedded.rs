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

//! The `_embedded` section of a resource.
//!
//! Embedded values are a single [`Resource`], an ordered sequence of
//! resources, or an explicit `null`. An [`EmbeddedRegistry`] decides how the
//! resources of a given relation are built:
//!
//! ```rust
//! use hale_core::{EmbeddedRegistry, Resource, ResourceOptions};
//! use serde_json::json;
//!
//! let address = ResourceOptions::new().url_middle("addresses");
//! let user = Resource::from_json_with(
//!     &json!({"name": "Alice", "_embedded": {"address": {"id": 7, "city": "Paris"}}}),
//!     ResourceOptions::new().embed("address", address),
//! )
//! .unwrap();
//!
//! let address = user.get_embedded("address").and_then(|e| e.as_resource()).unwrap();
//! assert_eq!(address.options().url_middle.as_deref(), Some("addresses"));
//! ```

use crate::capture::capture_error;
use crate::context::ContentType;
use crate::error::{HalError, HalResult};
use crate::resource::{Resource, ResourceOptions};
use indexmap::IndexMap;
use serde_json::{json, Map, Value as JsonValue};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Custom builder for the resources of one relation.
pub type EmbeddedBuilder = dyn Fn(&str, &JsonValue) -> HalResult<EmbeddedValue> + Send + Sync;

/// How the resources of a relation are built.
#[derive(Clone)]
pub enum EmbeddedFactory {
    /// Build resources with these options.
    Template(Arc<ResourceOptions>),
    /// Delegate to a closure receiving the relation and its raw JSON.
    Custom(Arc<EmbeddedBuilder>),
}

impl EmbeddedFactory {
    fn build(&self, rel: &str, value: &JsonValue) -> HalResult<EmbeddedValue> {
        match self {
            Self::Template(options) => EmbeddedValue::from_json_with(rel, value, options),
            Self::Custom(builder) => builder(rel, value),
        }
    }
}

impl fmt::Debug for EmbeddedFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(options) => f.debug_tuple("Template").field(options).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Per-relation factories for embedded resources.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedRegistry {
    factories: HashMap<String, EmbeddedFactory>,
}

impl EmbeddedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the resources of `rel` with `options`.
    pub fn register(&mut self, rel: impl Into<String>, options: ResourceOptions) {
        self.factories
            .insert(rel.into(), EmbeddedFactory::Template(Arc::new(options)));
    }

    /// Build the resources of `rel` with a closure.
    pub fn register_with<F>(&mut self, rel: impl Into<String>, builder: F)
    where
        F: Fn(&str, &JsonValue) -> HalResult<EmbeddedValue> + Send + Sync + 'static,
    {
        self.factories
            .insert(rel.into(), EmbeddedFactory::Custom(Arc::new(builder)));
    }

    pub fn get(&self, rel: &str) -> Option<&EmbeddedFactory> {
        self.factories.get(rel)
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Build the value of `rel`, through its factory when one is registered.
    pub fn build(&self, rel: &str, value: &JsonValue) -> HalResult<EmbeddedValue> {
        match self.get(rel) {
            Some(factory) => {
                debug!(rel, "building embedded resource with registered factory");
                factory.build(rel, value)
            }
            None => EmbeddedValue::from_json_with(rel, value, &ResourceOptions::default()),
        }
    }
}

/// The value of one `_embedded` relation.
#[derive(Debug, Clone)]
pub enum EmbeddedValue {
    Resource(Box<Resource>),
    Resources(Vec<Resource>),
    /// The relation was explicitly cleared.
    Null,
}

impl EmbeddedValue {
    /// Decide the variant from the JSON shape, building resources with `options`.
    pub fn from_json_with(
        rel: &str,
        value: &JsonValue,
        options: &ResourceOptions,
    ) -> HalResult<Self> {
        match value {
            JsonValue::Null => Ok(Self::Null),
            JsonValue::Object(_) => {
                let resource = Resource::from_json_with(value, options.clone())?;
                Ok(Self::Resource(Box::new(resource)))
            }
            JsonValue::Array(items) => {
                let mut resources = Vec::with_capacity(items.len());
                for item in items {
                    if !item.is_object() {
                        return Err(invalid_embedded(rel, value));
                    }
                    resources.push(Resource::from_json_with(item, options.clone())?);
                }
                Ok(Self::Resources(resources))
            }
            _ => Err(invalid_embedded(rel, value)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Resources(_))
    }

    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            Self::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    pub fn as_resources(&self) -> Option<&[Resource]> {
        match self {
            Self::Resources(resources) => Some(resources),
            _ => None,
        }
    }

    pub fn to_json(&self, content_type: ContentType) -> JsonValue {
        match self {
            Self::Resource(resource) => resource.to_json_as(content_type),
            Self::Resources(resources) => JsonValue::Array(
                resources
                    .iter()
                    .map(|r| r.to_json_as(content_type))
                    .collect(),
            ),
            Self::Null => JsonValue::Null,
        }
    }
}

impl From<Resource> for EmbeddedValue {
    fn from(resource: Resource) -> Self {
        Self::Resource(Box::new(resource))
    }
}

impl From<Vec<Resource>> for EmbeddedValue {
    fn from(resources: Vec<Resource>) -> Self {
        Self::Resources(resources)
    }
}

fn invalid_embedded(rel: &str, value: &JsonValue) -> HalError {
    capture_error(
        HalError::invalid_embedded_resource(format!(
            "Invalid embedded resource identified by 'rel'='{}' !",
            rel
        )),
        "EmbeddedValue::from_json",
        json!({ "rel": rel, "embedded": value }),
    )
}

/// Relation name to embedded resource mapping.
#[derive(Debug, Clone, Default)]
pub struct Embedded {
    relations: IndexMap<String, EmbeddedValue>,
    registry: EmbeddedRegistry,
}

impl Embedded {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: EmbeddedRegistry) -> Self {
        Self {
            relations: IndexMap::new(),
            registry,
        }
    }

    /// Build from an `_embedded` JSON object.
    pub fn from_json(value: &JsonValue, registry: EmbeddedRegistry) -> HalResult<Self> {
        let mut embedded = Self::with_registry(registry);
        embedded.merge_json(value)?;
        Ok(embedded)
    }

    pub fn registry(&self) -> &EmbeddedRegistry {
        &self.registry
    }

    pub fn set(&mut self, rel: impl Into<String>, value: impl Into<EmbeddedValue>) {
        self.relations.insert(rel.into(), value.into());
    }

    /// Set one relation from JSON: an object, an array of objects or null.
    pub fn set_json(&mut self, rel: &str, value: &JsonValue) -> HalResult<()> {
        let embedded = self.registry.build(rel, value)?;
        self.relations.insert(rel.to_string(), embedded);
        Ok(())
    }

    /// Upsert every relation of an `_embedded` object, keeping the others.
    ///
    /// Nothing is applied unless every relation is valid.
    pub fn merge_json(&mut self, value: &JsonValue) -> HalResult<()> {
        let obj = value.as_object().ok_or_else(|| {
            capture_error(
                HalError::invalid_embedded_resource("The '_embedded' property must be an object !"),
                "Embedded::merge_json",
                json!({ "embedded": value }),
            )
        })?;

        let staged = obj
            .iter()
            .map(|(rel, resource)| Ok((rel.clone(), self.registry.build(rel, resource)?)))
            .collect::<HalResult<Vec<_>>>()?;
        self.relations.extend(staged);
        Ok(())
    }

    pub fn get(&self, rel: &str) -> Option<&EmbeddedValue> {
        self.relations.get(rel)
    }

    pub fn get_mut(&mut self, rel: &str) -> Option<&mut EmbeddedValue> {
        self.relations.get_mut(rel)
    }

    /// True if `rel` is present and not cleared.
    pub fn has(&self, rel: &str) -> bool {
        self.get(rel).is_some_and(|v| !v.is_null())
    }

    pub fn unset(&mut self, rel: &str) -> Option<EmbeddedValue> {
        self.relations.shift_remove(rel)
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EmbeddedValue)> {
        self.relations.iter().map(|(rel, v)| (rel.as_str(), v))
    }

    /// Serialize every relation with `content_type`.
    pub fn to_json_map(&self, content_type: ContentType) -> Map<String, JsonValue> {
        self.relations
            .iter()
            .map(|(rel, value)| (rel.clone(), value.to_json(content_type)))
            .collect()
    }

    pub fn to_json(&self, content_type: ContentType) -> JsonValue {
        JsonValue::Object(self.to_json_map(content_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HalErrorKind;

    #[test]
    fn test_object_becomes_resource() {
        let embedded = Embedded::from_json(
            &json!({"address": {"city": "Paris", "_links": {"self": {"href": "http://a/1"}}}}),
            EmbeddedRegistry::new(),
        )
        .unwrap();

        let address = embedded.get("address").and_then(EmbeddedValue::as_resource).unwrap();
        assert_eq!(address.get("city"), Some(&json!("Paris")));
        assert!(address.has_link("self"));
    }

    #[test]
    fn test_array_becomes_resources() {
        let embedded = Embedded::from_json(
            &json!({"users": [{"name": "a"}, {"name": "b"}]}),
            EmbeddedRegistry::new(),
        )
        .unwrap();

        let users = embedded.get("users").and_then(EmbeddedValue::as_resources).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].get("name"), Some(&json!("b")));
    }

    #[test]
    fn test_null_is_kept_but_not_present() {
        let embedded = Embedded::from_json(&json!({"manager": null}), EmbeddedRegistry::new()).unwrap();
        assert!(!embedded.has("manager"));
        assert_eq!(embedded.to_json(ContentType::HalJson), json!({"manager": null}));
    }

    #[test]
    fn test_invalid_values() {
        let mut embedded = Embedded::new();
        for invalid in [json!(1), json!("x"), json!(true), json!([{"a": 1}, 2])] {
            let err = embedded.set_json("rel", &invalid).unwrap_err();
            assert_eq!(err.kind, HalErrorKind::InvalidEmbeddedResource);
        }
        assert!(embedded.is_empty());

        let err = Embedded::from_json(&json!([]), EmbeddedRegistry::new()).unwrap_err();
        assert_eq!(err.kind, HalErrorKind::InvalidEmbeddedResource);
    }

    #[test]
    fn test_registry_template_options() {
        let mut registry = EmbeddedRegistry::new();
        registry.register("items", ResourceOptions::new().id_attribute("sku"));

        let embedded =
            Embedded::from_json(&json!({"items": [{"sku": "A-1"}]}), registry).unwrap();
        let item = &embedded.get("items").and_then(EmbeddedValue::as_resources).unwrap()[0];
        assert_eq!(item.id(), Some(&json!("A-1")));
    }

    #[test]
    fn test_registry_custom_builder() {
        let mut registry = EmbeddedRegistry::new();
        registry.register_with("tags", |rel, value| {
            let names = value.as_array().cloned().unwrap_or_default();
            let resources = names
                .into_iter()
                .map(|name| Resource::from_json(&json!({ "rel": rel, "name": name })))
                .collect::<HalResult<Vec<_>>>()?;
            Ok(EmbeddedValue::Resources(resources))
        });

        let embedded = Embedded::from_json(&json!({"tags": ["a", "b"]}), registry).unwrap();
        assert_eq!(
            embedded.to_json(ContentType::Json),
            json!({"tags": [{"rel": "tags", "name": "a"}, {"rel": "tags", "name": "b"}]})
        );
    }

    #[test]
    fn test_merge_and_unset() {
        let mut embedded =
            Embedded::from_json(&json!({"a": {"x": 1}, "b": {"y": 2}}), EmbeddedRegistry::new())
                .unwrap();
        embedded.merge_json(&json!({"a": {"x": 3}})).unwrap();
        assert_eq!(
            embedded.to_json(ContentType::Json),
            json!({"a": {"x": 3}, "b": {"y": 2}})
        );

        assert!(embedded.unset("b").is_some());
        assert_eq!(embedded.len(), 1);
    }

    #[test]
    fn test_merge_is_all_or_nothing() {
        let mut embedded =
            Embedded::from_json(&json!({"a": {"x": 1}}), EmbeddedRegistry::new()).unwrap();
        let err = embedded
            .merge_json(&json!({"a": {"x": 2}, "b": 5}))
            .unwrap_err();
        assert_eq!(err.kind, HalErrorKind::InvalidEmbeddedResource);
        assert_eq!(embedded.to_json(ContentType::Json), json!({"a": {"x": 1}}));
    }
}
