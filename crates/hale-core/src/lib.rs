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

//! Core data model and codec for HAL (Hypertext Application Language) resources.
//!
//! A HAL document is a JSON object whose reserved `_links` and `_embedded`
//! keys hold hyperlinks and nested resources. This crate parses such a
//! document into a [`Resource`] and serializes it back, either losslessly as
//! `application/hal+json` or flattened as plain `application/json`.
//!
//! ```rust
//! use hale_core::{ContentType, HalContext, Resource};
//! use serde_json::json;
//!
//! let user = Resource::from_json(&json!({
//!     "firstName": "Baptiste",
//!     "_links": {"self": {"href": "http://myserver.com/api/users/1"}},
//!     "_embedded": {"address": {"city": "Paris"}}
//! }))
//! .unwrap();
//!
//! assert_eq!(user.url(&HalContext::new()).unwrap(), "http://myserver.com/api/users/1");
//! assert_eq!(
//!     user.to_json_as(ContentType::Json),
//!     json!({"firstName": "Baptiste", "address": {"city": "Paris"}})
//! );
//! ```
//!
//! See <https://tools.ietf.org/html/draft-kelly-json-hal-06>.

mod capture;
mod context;
mod embedded;
mod error;
mod link;
mod links;
mod resource;
mod url;

pub use capture::{capture_error, reset_error_handler, set_error_handler, DefaultErrorHandler, ErrorHandler};
pub use context::{ContentType, HalContext};
pub use embedded::{Embedded, EmbeddedBuilder, EmbeddedFactory, EmbeddedRegistry, EmbeddedValue};
pub use error::{HalError, HalErrorKind, HalResult};
pub use link::{Link, LinkArray, LinkValue};
pub use links::Links;
pub use resource::{from_str, from_str_with, Resource, ResourceOptions, EMBEDDED_KEY, LINKS_KEY};
pub use url::resolve_url;
