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

//! Single resource documents.

use serde_json::{json, Value as JsonValue};

/// Base URL used by every fixture.
pub const API_ROOT: &str = "http://myserver.com/api";

/// User with attributes only.
pub fn plain_user() -> JsonValue {
    json!({
        "id": 1,
        "firstName": "Baptiste",
        "lastName": "Gaillard"
    })
}

/// User with a self link and a link array.
pub fn user_with_links() -> JsonValue {
    json!({
        "id": 1,
        "firstName": "Baptiste",
        "_links": {
            "self": {"href": "http://myserver.com/api/users/1"},
            "friends": [
                {"href": "http://myserver.com/api/users/2", "name": "simon"},
                {"href": "http://myserver.com/api/users/3", "name": "john"}
            ]
        }
    })
}

/// User with an embedded resource and an embedded array.
pub fn user_with_embedded() -> JsonValue {
    json!({
        "id": 1,
        "firstName": "Baptiste",
        "_embedded": {
            "address": {"id": 8, "city": "Paris"},
            "hobbies": [
                {"id": 1, "name": "Football"},
                {"id": 2, "name": "Tennis"}
            ]
        }
    })
}

/// User with links and embedded resources, nested links included.
pub fn user_full() -> JsonValue {
    json!({
        "id": 1,
        "firstName": "Baptiste",
        "lastName": "Gaillard",
        "_embedded": {
            "address": {
                "city": "Paris",
                "_links": {"self": {"href": "http://myserver.com/api/addresses/8"}}
            },
            "hobbies": [
                {"id": 1, "name": "Football"},
                {"id": 2, "name": "Tennis"}
            ]
        },
        "_links": {
            "self": {"href": "http://myserver.com/api/users/1"},
            "friends": [
                {"href": "http://myserver.com/api/users/2", "name": "simon"},
                {"href": "http://myserver.com/api/users/3", "name": "john"}
            ]
        }
    })
}

/// User with a templated search link carrying every optional link property.
pub fn user_with_templated_link() -> JsonValue {
    json!({
        "id": 1,
        "_links": {
            "self": {"href": "http://myserver.com/api/users/1"},
            "search": {
                "href": "http://myserver.com/api/users{?q}",
                "templated": true,
                "name": "search",
                "title": "Search users",
                "type": "application/hal+json",
                "hreflang": "en",
                "profile": "http://myserver.com/profiles/user",
                "deprecation": "http://myserver.com/deprecations/search"
            }
        }
    })
}

/// User whose relations were explicitly cleared.
pub fn user_with_cleared_relations() -> JsonValue {
    json!({
        "id": 1,
        "_embedded": {"address": null},
        "_links": {"friends": null}
    })
}

/// Order embedding lines which embed their product.
pub fn order_with_nested_embedded() -> JsonValue {
    json!({
        "number": "X1",
        "_embedded": {
            "lines": [
                {
                    "line": 1,
                    "quantity": 2,
                    "_embedded": {
                        "product": {
                            "sku": "A-100",
                            "_links": {"self": {"href": "http://myserver.com/api/products/A-100"}}
                        }
                    }
                },
                {"line": 2, "quantity": 1}
            ]
        },
        "_links": {"self": {"href": "http://myserver.com/api/orders/X1"}}
    })
}

/// Empty resource.
pub fn empty() -> JsonValue {
    json!({})
}
