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

//! Serialization and URL resolution context.

use crate::capture::capture_error;
use crate::error::{HalError, HalResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

/// Media type a resource is serialized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContentType {
    /// `application/json`: links dropped, embedded resources flattened.
    #[default]
    #[serde(rename = "application/json")]
    Json,
    /// `application/hal+json`: `_links` and `_embedded` kept.
    #[serde(rename = "application/hal+json")]
    HalJson,
}

impl ContentType {
    pub const JSON: &'static str = "application/json";
    pub const HAL_JSON: &'static str = "application/hal+json";

    /// The media type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => Self::JSON,
            Self::HalJson => Self::HAL_JSON,
        }
    }

    /// Resolve the content type of a serialization call.
    ///
    /// The per-call choice wins over the configured default, which wins over
    /// `application/json`.
    pub fn resolve(per_call: Option<ContentType>, default: Option<ContentType>) -> ContentType {
        per_call.or(default).unwrap_or_default()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = HalError;

    /// Parse a media type, ignoring case and parameters such as `; charset=utf-8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let essence = s.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            Self::JSON => Ok(Self::Json),
            Self::HAL_JSON => Ok(Self::HalJson),
            _ => Err(capture_error(
                HalError::unsupported_content_type(format!(
                    "Unsupported content type '{}', expected '{}' or '{}'",
                    s,
                    Self::JSON,
                    Self::HAL_JSON
                )),
                "ContentType::from_str",
                json!({ "contentType": s }),
            )),
        }
    }
}

/// Defaults applied when serializing resources and resolving their URLs.
///
/// Every field is optional and every serialization call can still override
/// the content type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HalContext {
    /// Default content type for serialization.
    pub content_type: Option<ContentType>,
    /// Root URL used when a resource has neither a self link, its own root nor a collection.
    pub url_root: Option<String>,
    /// Path segment appended to `url_root` when the resource does not define one.
    pub url_middle: Option<String>,
}

impl HalContext {
    pub const CONTENT_TYPE_VAR: &'static str = "HALE_CONTENT_TYPE";
    pub const URL_ROOT_VAR: &'static str = "HALE_URL_ROOT";
    pub const URL_MIDDLE_VAR: &'static str = "HALE_URL_MIDDLE";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn with_url_root(mut self, url_root: impl Into<String>) -> Self {
        self.url_root = Some(url_root.into());
        self
    }

    pub fn with_url_middle(mut self, url_middle: impl Into<String>) -> Self {
        self.url_middle = Some(url_middle.into());
        self
    }

    /// The content type for a call that may carry its own choice.
    pub fn content_type(&self, per_call: Option<ContentType>) -> ContentType {
        ContentType::resolve(per_call, self.content_type)
    }

    /// Build a context from `HALE_CONTENT_TYPE`, `HALE_URL_ROOT` and `HALE_URL_MIDDLE`.
    ///
    /// Empty variables are ignored.
    pub fn from_env() -> HalResult<Self> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let content_type = var(Self::CONTENT_TYPE_VAR)
            .map(|v| v.parse::<ContentType>())
            .transpose()?;

        Ok(Self {
            content_type,
            url_root: var(Self::URL_ROOT_VAR),
            url_middle: var(Self::URL_MIDDLE_VAR),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HalErrorKind;

    #[test]
    fn test_resolve_fallback_order() {
        assert_eq!(ContentType::resolve(None, None), ContentType::Json);
        assert_eq!(
            ContentType::resolve(None, Some(ContentType::HalJson)),
            ContentType::HalJson
        );
        assert_eq!(
            ContentType::resolve(Some(ContentType::Json), Some(ContentType::HalJson)),
            ContentType::Json
        );
    }

    #[test]
    fn test_parse_content_type() {
        assert_eq!("application/json".parse::<ContentType>().unwrap(), ContentType::Json);
        assert_eq!(
            "Application/HAL+JSON; charset=utf-8".parse::<ContentType>().unwrap(),
            ContentType::HalJson
        );
        let err = "text/html".parse::<ContentType>().unwrap_err();
        assert_eq!(err.kind, HalErrorKind::UnsupportedContentType);
    }

    #[test]
    fn test_display_roundtrip() {
        for ct in [ContentType::Json, ContentType::HalJson] {
            assert_eq!(ct.to_string().parse::<ContentType>().unwrap(), ct);
        }
    }

    #[test]
    fn test_context_builder() {
        let ctx = HalContext::new()
            .with_content_type(ContentType::HalJson)
            .with_url_root("http://myserver.com/api")
            .with_url_middle("users");
        assert_eq!(ctx.content_type(None), ContentType::HalJson);
        assert_eq!(ctx.content_type(Some(ContentType::Json)), ContentType::Json);
        assert_eq!(ctx.url_root.as_deref(), Some("http://myserver.com/api"));
        assert_eq!(ctx.url_middle.as_deref(), Some("users"));
    }

    #[test]
    fn test_context_serde_names() {
        let ctx = HalContext::new().with_content_type(ContentType::HalJson);
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value["contentType"], "application/hal+json");
    }
}
