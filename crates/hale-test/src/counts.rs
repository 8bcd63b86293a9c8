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

//! Counting utilities for verifying parsed resource graphs.

use hale_core::{EmbeddedValue, LinkValue, Resource};

/// Count links in a resource and every resource embedded in it.
///
/// A link array counts each of its links; cleared relations count nothing.
pub fn count_links(resource: &Resource) -> usize {
    let own: usize = resource
        .links()
        .iter()
        .map(|(_, value)| match value {
            LinkValue::Link(_) => 1,
            LinkValue::Array(links) => links.len(),
            LinkValue::Null => 0,
        })
        .sum();
    own + nested(resource).map(count_links).sum::<usize>()
}

/// Count resources embedded at any depth.
pub fn count_embedded(resource: &Resource) -> usize {
    nested(resource).map(|r| 1 + count_embedded(r)).sum()
}

fn nested(resource: &Resource) -> impl Iterator<Item = &Resource> {
    resource.embedded().iter().flat_map(|(_, value)| match value {
        EmbeddedValue::Resource(r) => std::slice::from_ref(r.as_ref()),
        EmbeddedValue::Resources(rs) => rs.as_slice(),
        EmbeddedValue::Null => &[],
    })
}
