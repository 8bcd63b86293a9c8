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

//! Canonical HAL fixtures.
//!
//! - **documents**: single resources with links, embedded resources or both
//! - **pages**: paged collection responses in the shapes servers return them
//! - **errors**: invalid documents with the error kind they must raise
//! - **builders**: builder pattern for customizable fixtures

pub mod builders;
mod documents;
pub mod errors;
mod pages;

pub use documents::*;
pub use pages::*;

use crate::FixtureList;

/// Returns all document fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("plain_user", plain_user),
        ("user_with_links", user_with_links),
        ("user_with_embedded", user_with_embedded),
        ("user_full", user_full),
        ("user_with_templated_link", user_with_templated_link),
        ("user_with_cleared_relations", user_with_cleared_relations),
        ("order_with_nested_embedded", order_with_nested_embedded),
        ("empty", empty),
    ]
}
