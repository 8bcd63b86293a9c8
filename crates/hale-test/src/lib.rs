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

//! Shared test fixtures and utilities for HALE crates.
//!
//! This crate provides canonical HAL documents, paged collection responses,
//! builders and error fixtures so the codec, paging and CLI test suites
//! work from the same data.
//!
//! # Quick Start
//!
//! ```rust
//! use hale_test::fixtures;
//!
//! // Pre-built documents
//! let doc = fixtures::user_full();        // links + embedded
//! let page = fixtures::users_page(1);     // infinite paging response
//!
//! // Custom documents
//! use hale_test::fixtures::builders::ResourceBuilder;
//!
//! let doc = ResourceBuilder::new()
//!     .attr("name", "Alice")
//!     .link("self", "http://myserver.com/api/users/1")
//!     .build();
//!
//! // Error cases
//! use hale_test::fixtures::errors;
//!
//! for (name, invalid, kind) in errors::invalid_documents() {
//!     // Feed `invalid` to the parser and expect `kind`
//! }
//! ```

use serde_json::Value as JsonValue;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> JsonValue)>;

/// Returns all fixtures as (name, pretty JSON) pairs.
pub fn fixtures_as_json() -> Vec<(&'static str, String)> {
    fixtures::all()
        .into_iter()
        .map(|(name, fixture_fn)| {
            let json = serde_json::to_string_pretty(&fixture_fn())
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e));
            (name, json)
        })
        .collect()
}

/// Canonical HAL documents and paged responses.
pub mod fixtures;

/// Link and embedded resource counting utilities.
pub mod counts;

pub use fixtures::*;

pub use counts::{count_embedded, count_links};

#[cfg(test)]
mod tests {
    use super::*;
    use hale_core::Resource;

    #[test]
    fn test_all_fixtures_parse() {
        for (name, fixture_fn) in fixtures::all() {
            let doc = fixture_fn();
            assert!(
                Resource::from_json(&doc).is_ok(),
                "Fixture {} should parse as a HAL resource",
                name
            );
        }
    }

    #[test]
    fn test_user_full_fixture() {
        let user = Resource::from_json(&fixtures::user_full()).unwrap();
        assert!(user.has_link("self"));
        assert!(user.has_embedded("address"));
        assert!(user.has_embedded("hobbies"));
    }

    #[test]
    fn test_count_links() {
        let user = Resource::from_json(&fixtures::user_full()).unwrap();
        // self, 2 friends, address self
        assert_eq!(counts::count_links(&user), 4);
    }

    #[test]
    fn test_count_embedded() {
        let user = Resource::from_json(&fixtures::user_full()).unwrap();
        // address + 2 hobbies
        assert_eq!(counts::count_embedded(&user), 3);
    }

    #[test]
    fn test_fixtures_as_json() {
        for (name, json) in fixtures_as_json() {
            assert!(!json.starts_with("{\"error\""), "Fixture '{}' failed to serialize", name);
        }
    }
}
