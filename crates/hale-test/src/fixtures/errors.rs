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

//! Error test fixtures.
//!
//! Invalid documents paired with the error kind parsing them must raise.

use hale_core::HalErrorKind;
use serde_json::{json, Value as JsonValue};

/// Invalid HAL documents as (name, document, expected kind).
pub fn invalid_documents() -> Vec<(&'static str, JsonValue, HalErrorKind)> {
    vec![
        ("not_an_object", json!([1, 2, 3]), HalErrorKind::InvalidResource),
        ("string_document", json!("user"), HalErrorKind::InvalidResource),
        (
            "link_without_href",
            json!({"_links": {"self": {"title": "Me"}}}),
            HalErrorKind::MissingRequiredProperty,
        ),
        (
            "link_href_not_string",
            json!({"_links": {"self": {"href": 42}}}),
            HalErrorKind::MissingRequiredProperty,
        ),
        (
            "scalar_link",
            json!({"_links": {"self": "http://myserver.com"}}),
            HalErrorKind::InvalidLink,
        ),
        (
            "empty_link_array",
            json!({"_links": {"friends": []}}),
            HalErrorKind::EmptyLinkArray,
        ),
        (
            "links_not_object",
            json!({"_links": ["http://myserver.com"]}),
            HalErrorKind::InvalidLink,
        ),
        (
            "scalar_embedded",
            json!({"_embedded": {"address": "Paris"}}),
            HalErrorKind::InvalidEmbeddedResource,
        ),
        (
            "embedded_array_of_scalars",
            json!({"_embedded": {"hobbies": [1, 2]}}),
            HalErrorKind::InvalidEmbeddedResource,
        ),
    ]
}

/// Malformed JSON texts.
pub fn invalid_json_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("unclosed_object", "{\"id\": 1"),
        ("trailing_comma", "{\"id\": 1,}"),
        ("single_quotes", "{'id': 1}"),
        ("bare_word", "user"),
    ]
}
