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

//! Error fixtures raise the kinds they are labelled with.

use hale_core::{from_str, HalErrorKind, Resource};
use hale_test::fixtures::{self, errors};

#[test]
fn test_invalid_documents_raise_expected_kind() {
    for (name, doc, kind) in errors::invalid_documents() {
        match Resource::from_json(&doc) {
            Ok(_) => panic!("Fixture '{}' should be rejected", name),
            Err(err) => assert_eq!(err.kind, kind, "Fixture '{}': {}", name, err),
        }
    }
}

#[test]
fn test_invalid_json_samples_raise_json_error() {
    for (name, text) in errors::invalid_json_samples() {
        let err = from_str(text).expect_err(name);
        assert_eq!(err.kind, HalErrorKind::Json, "Sample '{}'", name);
    }
}

#[test]
fn test_document_fixtures_roundtrip_as_hal() {
    for (name, fixture_fn) in fixtures::all() {
        let doc = fixture_fn();
        let resource = Resource::from_json(&doc).unwrap();
        assert_eq!(resource.to_hal_json(), doc, "Fixture '{}'", name);
    }
}

#[test]
fn test_users_pages_are_consistent() {
    let first = fixtures::users_page(1);
    let last = fixtures::users_page(3);

    assert_eq!(first["_embedded"]["users"].as_array().unwrap().len(), 2);
    assert_eq!(last["_embedded"]["users"].as_array().unwrap().len(), 1);
    assert!(first["_links"].get("prev").is_none());
    assert!(last["_links"].get("next").is_none());
    assert_eq!(first["_links"]["last"], last["_links"]["self"]);
}
