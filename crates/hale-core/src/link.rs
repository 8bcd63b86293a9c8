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

//! HAL Link Objects.
//!
//! > A Link Object represents a hyperlink from the containing resource to a URI.
//!
//! See <https://tools.ietf.org/html/draft-kelly-json-hal-06#section-5>.

use crate::capture::capture_error;
use crate::error::{HalError, HalResult};
use crate::resource::Resource;
use serde::{Deserialize, Deserializer};
use serde_json::{json, Map, Value as JsonValue};

/// A single HAL link.
///
/// `templated` remembers whether it was supplied: a link built from
/// `{"href": ...}` serializes back to exactly `{"href": ...}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    href: String,
    #[serde(default, deserialize_with = "coerce_templated")]
    templated: Option<bool>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "type")]
    media_type: Option<String>,
    #[serde(default)]
    hreflang: Option<String>,
    #[serde(default)]
    profile: Option<String>,
    #[serde(default)]
    deprecation: Option<String>,
    /// Properties outside the registered HAL link attributes.
    #[serde(flatten)]
    extra: Map<String, JsonValue>,
}

/// Any value other than `true` counts as `false`.
fn coerce_templated<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(Some(value == JsonValue::Bool(true)))
}

impl Link {
    /// Create a link pointing to `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            templated: None,
            name: None,
            title: None,
            media_type: None,
            hreflang: None,
            profile: None,
            deprecation: None,
            extra: Map::new(),
        }
    }

    /// Build a link from its JSON representation.
    ///
    /// Fails with `MissingRequiredProperty` when `href` is absent or not a
    /// string, and with `InvalidLink` when a registered attribute has the
    /// wrong type.
    pub fn from_json(value: &JsonValue) -> HalResult<Self> {
        let has_href = value
            .as_object()
            .and_then(|obj| obj.get("href"))
            .is_some_and(JsonValue::is_string);

        if !has_href {
            return Err(capture_error(
                HalError::missing_required_property("Missing required property \"href\" !"),
                "Link::from_json",
                json!({ "link": value }),
            ));
        }

        serde_json::from_value(value.clone()).map_err(|e| {
            capture_error(
                HalError::invalid_link(format!("Invalid link attribute: {}", e)),
                "Link::from_json",
                json!({ "link": value }),
            )
        })
    }

    /// The target URI or URI template.
    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn set_href(&mut self, href: impl Into<String>) {
        self.href = href.into();
    }

    /// Whether `href` is a URI template.
    pub fn is_templated(&self) -> bool {
        self.templated == Some(true)
    }

    /// The `templated` value as supplied, `None` if it never was.
    pub fn templated(&self) -> Option<bool> {
        self.templated
    }

    pub fn set_templated(&mut self, templated: bool) {
        self.templated = Some(templated);
    }

    /// Secondary key for links sharing a relation.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Media type hint, serialized as `type`.
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn set_media_type(&mut self, media_type: impl Into<String>) {
        self.media_type = Some(media_type.into());
    }

    pub fn hreflang(&self) -> Option<&str> {
        self.hreflang.as_deref()
    }

    pub fn set_hreflang(&mut self, hreflang: impl Into<String>) {
        self.hreflang = Some(hreflang.into());
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn set_profile(&mut self, profile: impl Into<String>) {
        self.profile = Some(profile.into());
    }

    /// URL describing the deprecation of this link, if any.
    pub fn deprecation(&self) -> Option<&str> {
        self.deprecation.as_deref()
    }

    pub fn set_deprecation(&mut self, deprecation: impl Into<String>) {
        self.deprecation = Some(deprecation.into());
    }

    /// A property outside the registered HAL attributes.
    pub fn extra(&self, key: &str) -> Option<&JsonValue> {
        self.extra.get(key)
    }

    /// Always `false`, see [`LinkArray::is_array`].
    pub fn is_array(&self) -> bool {
        false
    }

    /// Build a resource whose only attribute is the identifier found in the
    /// last path segment of `href`.
    ///
    /// The identifier is an integer when the segment parses as one.
    pub fn create_resource(&self) -> Resource {
        let segment = self
            .href
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();

        let id = match segment.parse::<i64>() {
            Ok(n) => JsonValue::from(n),
            Err(_) => JsonValue::from(segment),
        };

        let mut resource = Resource::new();
        resource.insert_attribute("id", id);
        resource
    }

    pub fn to_json(&self) -> JsonValue {
        let mut map = Map::with_capacity(2 + self.extra.len());
        map.insert("href".to_string(), JsonValue::from(self.href.as_str()));

        if let Some(templated) = self.templated {
            map.insert("templated".to_string(), JsonValue::Bool(templated));
        }

        let optional = [
            ("name", &self.name),
            ("title", &self.title),
            ("type", &self.media_type),
            ("hreflang", &self.hreflang),
            ("profile", &self.profile),
            ("deprecation", &self.deprecation),
        ];
        for (key, value) in optional {
            if let Some(v) = value {
                map.insert(key.to_string(), JsonValue::from(v.as_str()));
            }
        }

        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }

        JsonValue::Object(map)
    }
}

/// Ordered links sharing one relation. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkArray {
    links: Vec<Link>,
}

impl LinkArray {
    /// Fails with `EmptyLinkArray` when `links` is empty.
    pub fn new(links: Vec<Link>) -> HalResult<Self> {
        if links.is_empty() {
            return Err(capture_error(
                HalError::empty_link_array("A LinkArray MUST BE created with at least one link !"),
                "LinkArray::new",
                json!({ "links": [] }),
            ));
        }
        Ok(Self { links })
    }

    /// Build from the JSON members of a link array.
    pub fn from_json(values: &[JsonValue]) -> HalResult<Self> {
        let links = values
            .iter()
            .map(Link::from_json)
            .collect::<HalResult<Vec<_>>>()?;
        Self::new(links)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always `false` for a constructed array.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Link> {
        self.links.get(index)
    }

    pub fn first(&self) -> &Link {
        &self.links[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.links.iter()
    }

    pub fn push(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Select a link by its `name` property.
    pub fn find_by_name(&self, name: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.name() == Some(name))
    }

    /// Always `true`, see [`Link::is_array`].
    pub fn is_array(&self) -> bool {
        true
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.links.iter().map(Link::to_json).collect())
    }
}

impl<'a> IntoIterator for &'a LinkArray {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

/// The value of one `_links` relation.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkValue {
    Link(Link),
    Array(LinkArray),
    /// The relation was explicitly cleared.
    Null,
}

impl LinkValue {
    /// Decide the variant from the JSON shape: object, array or null.
    pub fn from_json(rel: &str, value: &JsonValue) -> HalResult<Self> {
        match value {
            JsonValue::Null => Ok(Self::Null),
            JsonValue::Object(_) => Link::from_json(value).map(Self::Link),
            JsonValue::Array(items) => LinkArray::from_json(items).map(Self::Array),
            _ => Err(capture_error(
                HalError::invalid_link(format!("Invalid link identified by 'rel'='{}' !", rel)),
                "LinkValue::from_json",
                json!({ "rel": rel, "link": value }),
            )),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Self::Link(link) => Some(link),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&LinkArray> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// The single link, or the first member of an array.
    pub fn first_link(&self) -> Option<&Link> {
        match self {
            Self::Link(link) => Some(link),
            Self::Array(array) => Some(array.first()),
            Self::Null => None,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Link(link) => link.to_json(),
            Self::Array(array) => array.to_json(),
            Self::Null => JsonValue::Null,
        }
    }
}

impl From<Link> for LinkValue {
    fn from(link: Link) -> Self {
        Self::Link(link)
    }
}

impl From<LinkArray> for LinkValue {
    fn from(array: LinkArray) -> Self {
        Self::Array(array)
    }
}
