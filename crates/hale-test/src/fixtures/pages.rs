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

//! Paged collection responses.

use super::builders::PageBuilder;
use serde_json::{json, Value as JsonValue};

/// Collection URL of the user pages.
pub const USERS_URL: &str = "http://myserver.com/api/users";

/// Number of users spread over [`users_page`].
pub const USERS_TOTAL: u64 = 5;

/// Users per page in [`users_page`].
pub const USERS_PAGE_SIZE: u64 = 2;

fn user(id: u64) -> JsonValue {
    json!({
        "id": id,
        "name": format!("user{}", id),
        "_links": {"self": {"href": format!("{}/{}", USERS_URL, id)}}
    })
}

fn page_href(page: i64) -> String {
    format!("{}?page={}&page_size={}", USERS_URL, page, USERS_PAGE_SIZE)
}

/// Page `page` (1-based) of five users, two per page, with HAL navigation links.
pub fn users_page(page: i64) -> JsonValue {
    let last = ((USERS_TOTAL + USERS_PAGE_SIZE - 1) / USERS_PAGE_SIZE) as i64;
    let start = ((page - 1).max(0) as u64) * USERS_PAGE_SIZE;
    let ids = (start + 1..=(start + USERS_PAGE_SIZE).min(USERS_TOTAL)).collect::<Vec<_>>();

    let mut builder = PageBuilder::new("users")
        .field("page", page)
        .field("page_size", USERS_PAGE_SIZE)
        .field("total_entries", USERS_TOTAL)
        .link("self", page_href(page))
        .link("first", page_href(1))
        .link("last", page_href(last))
        .records(ids.into_iter().map(user).collect());

    if page > 1 {
        builder = builder.link("prev", page_href(page - 1));
    }
    if page < last {
        builder = builder.link("next", page_href(page + 1));
    }
    builder.build()
}

fn three_users() -> Vec<JsonValue> {
    vec![
        json!({"firstName": "Baptiste", "lastName": "Gaillard"}),
        json!({"firstName": "Simon", "lastName": "Baudry"}),
        json!({"firstName": "John", "lastName": "Doe"}),
    ]
}

fn rest_links(builder: PageBuilder) -> PageBuilder {
    builder
        .templated_link("self", "http://localhost:8080/rest/users{?page,size,sort}")
        .link("search", "http://localhost:8080/rest/users/search")
}

/// Single server page of three users with flat metadata
/// (`page`, `page_size`, `totalPages`, `totalElements`).
pub fn server_page() -> JsonValue {
    rest_links(PageBuilder::new("users"))
        .records(three_users())
        .field("page_size", 20)
        .field("totalElements", 3)
        .field("totalPages", 1)
        .field("page", 1)
        .build()
}

/// Zero-based page metadata nested under `page`
/// (`number`, `size`, `totalElements`, `totalPages`).
pub fn nested_page(number: i64, size: u64, total_elements: u64) -> JsonValue {
    let total_pages = if size == 0 {
        0
    } else {
        (total_elements + size - 1) / size
    };
    let records = three_users()
        .into_iter()
        .take(size.min(total_elements) as usize)
        .collect();
    rest_links(PageBuilder::new("users"))
        .records(records)
        .field(
            "page",
            json!({
                "size": size,
                "totalElements": total_elements,
                "totalPages": total_pages,
                "number": number
            }),
        )
        .build()
}

/// Empty collection: no navigation links and a zero item count.
pub fn empty_page() -> JsonValue {
    PageBuilder::new("users")
        .field("total_items", 0)
        .records(Vec::new())
        .build()
}
