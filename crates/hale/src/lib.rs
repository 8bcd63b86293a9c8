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

//! # HALE - HAL Entities
//!
//! HALE models HAL (Hypertext Application Language) resources: JSON objects
//! carrying hyperlinks under `_links` and nested resources under `_embedded`.
//! Resources parse from and serialize to `application/hal+json` losslessly,
//! or to flattened `application/json`.
//!
//! ## Quick Start
//!
//! ```rust
//! use hale::{parse, to_hal_string, HalContext};
//!
//! let user = parse(r#"{
//!     "id": 1,
//!     "firstName": "Baptiste",
//!     "_links": {"self": {"href": "http://myserver.com/api/users/1"}},
//!     "_embedded": {"address": {"city": "Paris"}}
//! }"#)
//! .expect("Failed to parse");
//!
//! // Canonical URL
//! assert_eq!(user.url(&HalContext::new()).unwrap(), "http://myserver.com/api/users/1");
//!
//! // Plain JSON drops links and flattens embedded resources
//! let json = hale::to_json_string(&user, &HalContext::new(), false);
//! assert_eq!(json, r#"{"id":1,"firstName":"Baptiste","address":{"city":"Paris"}}"#);
//!
//! // HAL JSON keeps everything
//! let hal = to_hal_string(&user, false);
//! assert!(hal.contains("\"_links\""));
//! ```
//!
//! ## Modules
//!
//! - [`paging`]: paged collections navigated through HAL links

// Re-export core types
pub use hale_core::{
    // Error hook
    capture_error,
    reset_error_handler,
    set_error_handler,
    DefaultErrorHandler,
    ErrorHandler,
    // Serialization settings
    ContentType,
    HalContext,
    // Embedded resources
    Embedded,
    EmbeddedBuilder,
    EmbeddedFactory,
    EmbeddedRegistry,
    EmbeddedValue,
    // Errors
    HalError,
    HalErrorKind,
    HalResult,
    // Links
    Link,
    LinkArray,
    LinkValue,
    Links,
    // Resources
    Resource,
    ResourceOptions,
    resolve_url,
    EMBEDDED_KEY,
    LINKS_KEY,
};

// Error handling extensions
mod error_ext;
pub use error_ext::HalResultExt;

// Re-export paging
pub mod paging {
    //! Paged collections
    pub use hale_paging::{
        CollectionConfig, FetchRequest, PageIndex, PageLinks, PageOptions, PageResolved,
        PagedCollection, PagingMode, PagingState, ParseParams, QueryParams, DEFAULT_FIRST_PAGE,
        DEFAULT_PAGE_SIZE, TOTAL_ITEMS_KEY,
    };
}

/// Parse a HAL document from JSON text.
///
/// # Examples
///
/// ```rust
/// use hale::parse;
///
/// let user = parse(r#"{"id": 1}"#).unwrap();
/// assert_eq!(user.id(), Some(&serde_json::json!(1)));
/// ```
#[inline]
pub fn parse(input: &str) -> HalResult<Resource> {
    hale_core::from_str(input)
}

/// Parse a HAL document from JSON text with resource options.
#[inline]
pub fn parse_with(input: &str, options: ResourceOptions) -> HalResult<Resource> {
    hale_core::from_str_with(input, options)
}

/// Serialize a resource as `application/hal+json` text.
#[inline]
pub fn to_hal_string(resource: &Resource, pretty: bool) -> String {
    render(&resource.to_hal_json(), pretty)
}

/// Serialize a resource with the content type selected by `ctx`.
#[inline]
pub fn to_json_string(resource: &Resource, ctx: &HalContext, pretty: bool) -> String {
    render(&resource.to_json(ctx), pretty)
}

fn render(value: &serde_json::Value, pretty: bool) -> String {
    if pretty {
        format!("{:#}", value)
    } else {
        value.to_string()
    }
}

/// Validate HAL text without keeping the parsed resource.
#[inline]
pub fn validate(input: &str) -> HalResult<()> {
    parse(input).map(|_| ())
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_minimal() {
        let resource = parse("{}").unwrap();
        assert!(resource.attributes().is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse("{").unwrap_err();
        assert_eq!(err.kind, HalErrorKind::Json);
    }

    #[test]
    fn test_parse_with_options() {
        let order = parse_with(r#"{"number": "X1"}"#, ResourceOptions::new().id_attribute("number")).unwrap();
        assert_eq!(order.id(), Some(&json!("X1")));
    }

    #[test]
    fn test_parse_with_invalid_json_is_captured() {
        let err = parse_with("{\"number\":", ResourceOptions::new()).unwrap_err();
        assert_eq!(err.kind, HalErrorKind::Json);
        assert_eq!(err.method.as_deref(), Some("hale_core::from_str"));
        assert_eq!(err.context.as_ref().and_then(|c| c.get("line")), Some(&json!(1)));
    }

    #[test]
    fn test_to_hal_string_pretty() {
        let user = parse(r#"{"id": 1, "_links": {"self": {"href": "a"}}}"#).unwrap();
        let text = to_hal_string(&user, true);
        assert!(text.contains('\n'));
        assert_eq!(serde_json::from_str::<serde_json::Value>(&text).unwrap()["_links"]["self"]["href"], "a");
    }

    #[test]
    fn test_to_json_string_uses_context() {
        let user = parse(r#"{"id": 1, "_links": {"self": {"href": "a"}}}"#).unwrap();
        let ctx = HalContext::new().with_content_type(ContentType::HalJson);
        assert!(to_json_string(&user, &ctx, false).contains("_links"));
        assert!(!to_json_string(&user, &HalContext::new(), false).contains("_links"));
    }

    #[test]
    fn test_validate() {
        assert!(validate(r#"{"id": 1}"#).is_ok());
        assert!(validate("[1]").is_err());
    }
}
