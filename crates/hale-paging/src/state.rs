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

//! Paging state and navigation links.

use serde::Serialize;

/// Navigation hrefs found in a page response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Where a collection stands in its paging sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingState {
    pub first_page: i64,
    pub current_page: i64,
    pub page_size: u64,
    pub total_pages: Option<u64>,
    pub total_records: Option<u64>,
    pub last_page: Option<i64>,
    pub links: PageLinks,
}

impl PagingState {
    pub fn new(first_page: i64, page_size: u64) -> Self {
        Self {
            first_page,
            current_page: first_page,
            page_size,
            total_pages: None,
            total_records: None,
            last_page: None,
            links: PageLinks::default(),
        }
    }

    /// Offset of the first record of `page` in the full record sequence.
    ///
    /// Pages before the first page start at 0.
    pub fn page_start(&self, page: i64) -> usize {
        let index = if self.first_page == 0 { page } else { page.saturating_sub(1) };
        (index.max(0) as u64).saturating_mul(self.page_size) as usize
    }

    /// Derive `total_pages` from `total_records` when missing, then `last_page`.
    pub(crate) fn derive_totals(&mut self) {
        if self.total_pages.is_none() {
            if let Some(records) = self.total_records {
                if self.page_size > 0 {
                    let partial = u64::from(records % self.page_size != 0);
                    self.total_pages = Some(records / self.page_size + partial);
                }
            }
        }
        self.last_page = self.total_pages.map(|pages| {
            let pages = pages.min(i64::MAX as u64) as i64;
            if self.first_page == 0 {
                (pages - 1).max(0)
            } else {
                pages.max(self.first_page)
            }
        });
    }

    /// Whether `page` lies within the known bounds.
    pub fn in_range(&self, page: i64) -> bool {
        page >= self.first_page && self.last_page.map_or(true, |last| page <= last)
    }
}
