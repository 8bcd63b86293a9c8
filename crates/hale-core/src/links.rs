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

//! The `_links` section of a resource.

use crate::capture::capture_error;
use crate::error::{HalError, HalResult};
use crate::link::{Link, LinkValue};
use indexmap::IndexMap;
use serde_json::{json, Map, Value as JsonValue};

/// Relation name to link mapping.
///
/// A relation set to [`LinkValue::Null`] is kept and serialized as `null`,
/// which distinguishes "explicitly cleared" from "never present".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Links {
    relations: IndexMap<String, LinkValue>,
}

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a `_links` JSON object.
    pub fn from_json(value: &JsonValue) -> HalResult<Self> {
        let mut links = Self::new();
        links.merge_json(value)?;
        Ok(links)
    }

    pub fn set(&mut self, rel: impl Into<String>, value: impl Into<LinkValue>) {
        self.relations.insert(rel.into(), value.into());
    }

    /// Set one relation from JSON: an object, an array of objects or null.
    pub fn set_json(&mut self, rel: &str, value: &JsonValue) -> HalResult<()> {
        let link = LinkValue::from_json(rel, value)?;
        self.relations.insert(rel.to_string(), link);
        Ok(())
    }

    /// Upsert every relation of a `_links` object, keeping the others.
    ///
    /// Nothing is applied unless every relation is valid.
    pub fn merge_json(&mut self, value: &JsonValue) -> HalResult<()> {
        let obj = value.as_object().ok_or_else(|| {
            capture_error(
                HalError::invalid_link("The '_links' property must be an object !"),
                "Links::merge_json",
                json!({ "links": value }),
            )
        })?;

        let staged = obj
            .iter()
            .map(|(rel, link)| Ok((rel.clone(), LinkValue::from_json(rel, link)?)))
            .collect::<HalResult<Vec<_>>>()?;
        self.relations.extend(staged);
        Ok(())
    }

    pub fn get(&self, rel: &str) -> Option<&LinkValue> {
        self.relations.get(rel)
    }

    /// True if `rel` is present and not cleared.
    pub fn has(&self, rel: &str) -> bool {
        self.get(rel).is_some_and(|v| !v.is_null())
    }

    /// Remove a relation entirely.
    pub fn unset(&mut self, rel: &str) -> Option<LinkValue> {
        self.relations.shift_remove(rel)
    }

    /// The `self` link. For a `self` array, its first member.
    pub fn get_self(&self) -> Option<&Link> {
        self.get("self").and_then(LinkValue::first_link)
    }

    pub fn has_self(&self) -> bool {
        self.get_self().is_some()
    }

    pub fn self_href(&self) -> Option<&str> {
        self.get_self().map(Link::href)
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LinkValue)> {
        self.relations.iter().map(|(rel, v)| (rel.as_str(), v))
    }

    pub fn to_json(&self) -> JsonValue {
        let map: Map<String, JsonValue> = self
            .relations
            .iter()
            .map(|(rel, link)| (rel.clone(), link.to_json()))
            .collect();
        JsonValue::Object(map)
    }
}
