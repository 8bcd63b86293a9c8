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

//! Resource URL resolution.

use crate::capture::capture_error;
use crate::context::HalContext;
use crate::error::{HalError, HalResult};
use crate::resource::Resource;
use serde_json::{json, Value as JsonValue};

/// Resolve the URL of `resource`.
///
/// 1. The `self` link href, verbatim.
/// 2. Otherwise a base: the resource's own `url_root`, else its collection
///    URL, else the context `url_root` followed by the resource's (or the
///    context's) `url_middle`.
/// 3. The base alone for a resource without identifier, else the base
///    followed by the percent-encoded identifier.
///
/// Fails with `UrlResolution` when no base can be found.
pub fn resolve_url(resource: &Resource, ctx: &HalContext) -> HalResult<String> {
    if let Some(href) = resource.links().self_href() {
        return Ok(href.to_string());
    }

    let options = resource.options();
    let base = non_empty(options.url_root.as_deref())
        .or_else(|| non_empty(resource.collection_url()))
        .map(str::to_string)
        .or_else(|| {
            non_empty(ctx.url_root.as_deref()).map(|root| {
                let middle = non_empty(options.url_middle.as_deref())
                    .or_else(|| non_empty(ctx.url_middle.as_deref()));
                match middle {
                    Some(middle) => with_trailing_slash(root) + middle,
                    None => root.to_string(),
                }
            })
        });

    let base = base.ok_or_else(|| {
        capture_error(
            HalError::url_resolution("A \"url\" property or function must be specified"),
            "Resource::url",
            json!({
                "urlRoot": options.url_root,
                "urlMiddle": options.url_middle,
                "collectionUrl": resource.collection_url(),
                "contextUrlRoot": ctx.url_root,
            }),
        )
    })?;

    match resource.id() {
        None => Ok(base),
        Some(id) => Ok(with_trailing_slash(&base) + &encode_component(&id_segment(id))),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Append a `/` unless `base` already ends with one.
fn with_trailing_slash(base: &str) -> String {
    if base.is_empty() || base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    }
}

/// Characters `encodeURIComponent` leaves as is but `urlencoding` escapes.
const COMPONENT_MARKS: [(&str, &str); 5] =
    [("%21", "!"), ("%2A", "*"), ("%27", "'"), ("%28", "("), ("%29", ")")];

/// Percent-encode a path segment like `encodeURIComponent`.
fn encode_component(segment: &str) -> String {
    let mut encoded = urlencoding::encode(segment).into_owned();
    for (escaped, mark) in COMPONENT_MARKS {
        encoded = encoded.replace(escaped, mark);
    }
    encoded
}

fn id_segment(id: &JsonValue) -> String {
    match id {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
