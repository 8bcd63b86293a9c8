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

//! Serialization and URL resolution tests for HAL resources.

use hale_core::{
    ContentType, EmbeddedValue, HalContext, HalErrorKind, Link, LinkValue, Resource,
    ResourceOptions,
};
use serde_json::{json, Value as JsonValue};

fn user_with_everything() -> JsonValue {
    json!({
        "id": 1,
        "firstName": "Baptiste",
        "lastName": "Gaillard",
        "_links": {
            "self": {"href": "http://myserver.com/api/users/1"},
            "friends": [
                {"href": "http://myserver.com/api/users/2", "name": "simon"},
                {"href": "http://myserver.com/api/users/3", "name": "john"}
            ]
        },
        "_embedded": {
            "address": {
                "city": "Paris",
                "_links": {"self": {"href": "http://myserver.com/api/addresses/8"}}
            },
            "hobbies": [
                {"id": 1, "name": "Football"},
                {"id": 2, "name": "Tennis"}
            ]
        }
    })
}

// =============================================================================
// application/hal+json
// =============================================================================

#[test]
fn test_hal_json_links_only() {
    let input = json!({
        "firstName": "Baptiste",
        "_links": {"self": {"href": "http://myserver.com/api/users/1"}}
    });
    let user = Resource::from_json(&input).unwrap();
    assert_eq!(user.to_hal_json(), input);
}

#[test]
fn test_hal_json_embedded_only() {
    let input = json!({
        "firstName": "Baptiste",
        "_embedded": {"address": {"city": "Paris"}}
    });
    let user = Resource::from_json(&input).unwrap();
    assert_eq!(user.to_hal_json(), input);
}

#[test]
fn test_hal_json_links_and_embedded() {
    let input = user_with_everything();
    let user = Resource::from_json(&input).unwrap();
    assert_eq!(user.to_hal_json(), input);
}

#[test]
fn test_hal_json_key_order() {
    let user = Resource::from_json(&user_with_everything()).unwrap();
    let out = user.to_hal_json();
    let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id", "firstName", "lastName", "_embedded", "_links"]);
}

#[test]
fn test_hal_json_keeps_cleared_relations() {
    let mut user = Resource::from_json(&user_with_everything()).unwrap();
    user.set_embedded("address", EmbeddedValue::Null);
    user.links_mut().set("friends", LinkValue::Null);

    let out = user.to_hal_json();
    assert_eq!(out["_embedded"]["address"], JsonValue::Null);
    assert_eq!(out["_links"]["friends"], JsonValue::Null);
    assert!(!user.has_embedded("address"));
    assert!(!user.has_link("friends"));
}

// =============================================================================
// application/json
// =============================================================================

#[test]
fn test_json_without_links_or_embedded() {
    let input = json!({"firstName": "Baptiste", "lastName": "Gaillard"});
    let user = Resource::from_json(&input).unwrap();
    assert_eq!(user.to_json(&HalContext::new()), input);
}

#[test]
fn test_json_drops_links() {
    let user = Resource::from_json(&json!({
        "firstName": "Baptiste",
        "_links": {"self": {"href": "http://myserver.com/api/users/1"}}
    }))
    .unwrap();
    assert_eq!(user.to_json(&HalContext::new()), json!({"firstName": "Baptiste"}));
}

#[test]
fn test_json_flattens_nested_embedded() {
    let user = Resource::from_json(&user_with_everything()).unwrap();
    assert_eq!(
        user.to_json_as(ContentType::Json),
        json!({
            "id": 1,
            "firstName": "Baptiste",
            "lastName": "Gaillard",
            "address": {"city": "Paris"},
            "hobbies": [
                {"id": 1, "name": "Football"},
                {"id": 2, "name": "Tennis"}
            ]
        })
    );
}

#[test]
fn test_json_embedded_overrides_attribute_with_same_name() {
    let user = Resource::from_json(&json!({
        "address": "old",
        "_embedded": {"address": {"city": "Paris"}}
    }))
    .unwrap();
    assert_eq!(
        user.to_json_as(ContentType::Json),
        json!({"address": {"city": "Paris"}})
    );
}

#[test]
fn test_context_default_content_type_applies_recursively() {
    let user = Resource::from_json(&user_with_everything()).unwrap();
    let ctx = HalContext::new().with_content_type(ContentType::HalJson);
    let out = user.to_json(&ctx);
    assert_eq!(
        out["_embedded"]["address"]["_links"]["self"]["href"],
        "http://myserver.com/api/addresses/8"
    );
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn test_link_and_embedded_accessors() {
    let user = Resource::from_json(&user_with_everything()).unwrap();

    let friends = user.get_link("friends").and_then(LinkValue::as_array).unwrap();
    assert_eq!(friends.len(), 2);
    assert_eq!(friends.find_by_name("john").map(Link::href), Some("http://myserver.com/api/users/3"));

    let hobbies = user.get_embedded("hobbies").and_then(EmbeddedValue::as_resources).unwrap();
    assert_eq!(hobbies[0].get("name"), Some(&json!("Football")));

    assert!(user.has_link("self"));
    assert!(!user.has_link("unknown"));
    assert!(user.has_embedded("address"));
    assert!(!user.has_embedded("unknown"));
}

#[test]
fn test_unset_embedded() {
    let mut user = Resource::from_json(&user_with_everything()).unwrap();
    assert!(user.unset_embedded("hobbies").is_some());
    assert!(user.get_embedded("hobbies").is_none());
    assert!(user.to_hal_json()["_embedded"].get("hobbies").is_none());
}

#[test]
fn test_set_embedded_with_built_resource() {
    let mut user = Resource::new();
    let address = Resource::from_json(&json!({"city": "Lyon"})).unwrap();
    user.set_embedded("address", address);
    assert_eq!(
        user.to_hal_json(),
        json!({"_embedded": {"address": {"city": "Lyon"}}})
    );
}

// =============================================================================
// Clone
// =============================================================================

#[test]
fn test_try_clone_is_lossless() {
    let user = Resource::from_json(&user_with_everything()).unwrap();
    let clone = user.try_clone().unwrap();
    assert_eq!(clone.to_hal_json(), user.to_hal_json());
}

#[test]
fn test_try_clone_is_independent() {
    let user = Resource::from_json(&user_with_everything()).unwrap();
    let mut clone = user.try_clone().unwrap();
    clone.set_attr("firstName", json!("Simon")).unwrap();
    assert_eq!(user.get("firstName"), Some(&json!("Baptiste")));
}

// =============================================================================
// URL resolution
// =============================================================================

#[test]
fn test_url_self_link_wins() {
    let mut user = Resource::from_json_with(
        &json!({
            "firstName": "Baptiste",
            "_links": {"self": {"href": "http://myserver.com/api/users/1"}}
        }),
        ResourceOptions::new().url_root("https://shoulnotbeused_3.com"),
    )
    .unwrap();
    user.set_attr("id", json!(45658)).unwrap();
    user.set_collection_url(Some("https://shoulnotbeused_2.com".to_string()));

    let ctx = HalContext::new().with_url_root("https://shoulnotbeused_1.com");
    assert_eq!(user.url(&ctx).unwrap(), "http://myserver.com/api/users/1");
}

#[test]
fn test_url_resource_root() {
    let mut user = Resource::with_options(
        ResourceOptions::new().url_root("http://myserver.com/api/users"),
    );
    user.set_attr("id", json!(1)).unwrap();
    user.set_collection_url(Some("https://shoulnotbeused_2.com".to_string()));

    let ctx = HalContext::new().with_url_root("https://shoulnotbeused_1.com");
    assert_eq!(user.url(&ctx).unwrap(), "http://myserver.com/api/users/1");
}

#[test]
fn test_url_collection() {
    let mut user = Resource::from_json(&json!({"id": 1})).unwrap();
    user.set_collection_url(Some("http://myserver.com/api/users".to_string()));

    let ctx = HalContext::new().with_url_root("https://shoulnotbeused_1.com");
    assert_eq!(user.url(&ctx).unwrap(), "http://myserver.com/api/users/1");
}

#[test]
fn test_url_context_root() {
    let user = Resource::from_json(&json!({"id": 1})).unwrap();
    let ctx = HalContext::new().with_url_root("http://myserver.com/api");
    assert_eq!(user.url(&ctx).unwrap(), "http://myserver.com/api/1");
}

#[test]
fn test_url_context_root_with_middle() {
    let user = Resource::from_json_with(
        &json!({"id": 1}),
        ResourceOptions::new().url_middle("users"),
    )
    .unwrap();
    let ctx = HalContext::new().with_url_root("http://myserver.com/api/");
    assert_eq!(user.url(&ctx).unwrap(), "http://myserver.com/api/users/1");

    let plain = Resource::from_json(&json!({"id": 1})).unwrap();
    let ctx = HalContext::new()
        .with_url_root("http://myserver.com/api")
        .with_url_middle("people");
    assert_eq!(plain.url(&ctx).unwrap(), "http://myserver.com/api/people/1");
}

#[test]
fn test_url_without_id_returns_base() {
    let user = Resource::with_options(ResourceOptions::new().url_middle("users"));
    let ctx = HalContext::new().with_url_root("http://myserver.com/api");
    assert_eq!(user.url(&ctx).unwrap(), "http://myserver.com/api/users");
}

#[test]
fn test_url_without_base_fails() {
    let user = Resource::from_json(&json!({"firstName": "Baptiste"})).unwrap();
    let err = user.url(&HalContext::new()).unwrap_err();
    assert_eq!(err.kind, HalErrorKind::UrlResolution);
    assert_eq!(err.message, "A \"url\" property or function must be specified");
    assert_eq!(err.method.as_deref(), Some("Resource::url"));
}

// =============================================================================
// Typed embedded resources
// =============================================================================

#[test]
fn test_registry_builds_typed_embedded_resources() {
    let options = ResourceOptions::new()
        .embed("address", ResourceOptions::new().url_middle("addresses"))
        .embed(
            "orders",
            ResourceOptions::new()
                .id_attribute("number")
                .embed("lines", ResourceOptions::new().id_attribute("line")),
        );

    let user = Resource::from_json_with(
        &json!({
            "_embedded": {
                "address": {"id": 8},
                "orders": [{"number": "X1", "_embedded": {"lines": [{"line": 1}]}}]
            }
        }),
        options,
    )
    .unwrap();

    let ctx = HalContext::new().with_url_root("http://myserver.com/api");
    let address = user.get_embedded("address").and_then(EmbeddedValue::as_resource).unwrap();
    assert_eq!(address.url(&ctx).unwrap(), "http://myserver.com/api/addresses/8");

    let order = &user.get_embedded("orders").and_then(EmbeddedValue::as_resources).unwrap()[0];
    assert_eq!(order.id(), Some(&json!("X1")));
    let line = &order.get_embedded("lines").and_then(EmbeddedValue::as_resources).unwrap()[0];
    assert_eq!(line.id(), Some(&json!(1)));
}
