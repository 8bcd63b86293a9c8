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

//! Inspection commands operating on a single HAL file.

use crate::commands::{self, PageArgs, UrlArgs};
use clap::{Subcommand, ValueEnum};
use hale_paging::{PageIndex, PagingMode, ParseParams, QueryParams, DEFAULT_FIRST_PAGE, DEFAULT_PAGE_SIZE};

/// Paging mode argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Every record is in the response; pages are slices
    Client,
    /// Every page is requested from the collection URL
    Server,
    /// Pages are requested through the HAL navigation links
    Infinite,
}

impl From<ModeArg> for PagingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Client => PagingMode::Client,
            ModeArg::Server => PagingMode::Server,
            ModeArg::Infinite => PagingMode::Infinite,
        }
    }
}

/// Inspection commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Validate a HAL document
    ///
    /// Checks every link has an href, link arrays are not empty and embedded
    /// values are resources.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Print the links and embedded resources of a HAL document
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Show attribute values and every link property
        #[arg(short, long)]
        verbose: bool,
    },

    /// Resolve the URL of a HAL resource
    ///
    /// The self link wins. Otherwise the URL is built from the resource root,
    /// the collection URL, or HALE_URL_ROOT and HALE_URL_MIDDLE, followed by
    /// the resource id.
    Url {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Root URL of the resource
        #[arg(long)]
        url_root: Option<String>,

        /// Path segment between the process root URL and the id
        #[arg(long)]
        url_middle: Option<String>,

        /// URL of the collection holding the resource
        #[arg(long)]
        collection_url: Option<String>,

        /// Attribute holding the resource id
        #[arg(long)]
        id_attribute: Option<String>,
    },

    /// Read the paging state of a HAL collection response
    Page {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Embedded relation holding the records
        #[arg(long)]
        rel: String,

        /// Paging mode
        #[arg(short, long, value_enum, default_value = "infinite")]
        mode: ModeArg,

        /// Collection URL used for page requests
        #[arg(long)]
        url: Option<String>,

        /// Response property holding the paging metadata
        #[arg(long)]
        page_property: Option<String>,

        /// Number of the first page
        #[arg(long, default_value_t = DEFAULT_FIRST_PAGE)]
        first_page: i64,

        /// Records per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u64,

        /// Response field holding the current page
        #[arg(long, default_value = "page")]
        current_page_param: String,

        /// Response field holding the page size
        #[arg(long, default_value = "page_size")]
        page_size_param: String,

        /// Response field holding the total page count
        #[arg(long, default_value = "total_pages")]
        total_pages_param: String,

        /// Response field holding the total record count
        #[arg(long, default_value = "total_entries")]
        total_records_param: String,

        /// Query parameter carrying the requested page
        #[arg(long, default_value = "page")]
        query_page_param: String,

        /// Query parameter carrying the page size
        #[arg(long, default_value = "page_size")]
        query_size_param: String,

        /// Navigate after parsing: first, prev, next, last or a page number
        #[arg(long, value_name = "INDEX", allow_hyphen_values = true)]
        goto: Option<PageIndex>,

        /// Pretty-print output
        #[arg(short, long)]
        pretty: bool,
    },
}

impl CoreCommands {
    /// Execute the inspection command.
    pub fn execute(self) -> Result<(), String> {
        let result = match self {
            CoreCommands::Validate { file } => commands::validate(&file),
            CoreCommands::Inspect { file, verbose } => commands::inspect(&file, verbose),
            CoreCommands::Url {
                file,
                url_root,
                url_middle,
                collection_url,
                id_attribute,
            } => commands::url(
                &file,
                &UrlArgs {
                    url_root,
                    url_middle,
                    collection_url,
                    id_attribute,
                },
            ),
            CoreCommands::Page {
                file,
                rel,
                mode,
                url,
                page_property,
                first_page,
                page_size,
                current_page_param,
                page_size_param,
                total_pages_param,
                total_records_param,
                query_page_param,
                query_size_param,
                goto,
                pretty,
            } => commands::page(
                &file,
                &PageArgs {
                    rel,
                    mode: mode.into(),
                    url,
                    page_property,
                    first_page,
                    page_size,
                    parse_params: ParseParams::default()
                        .current_page(current_page_param)
                        .page_size(page_size_param)
                        .total_pages(Some(total_pages_param))
                        .total_records(Some(total_records_param)),
                    query_params: QueryParams {
                        current_page: query_page_param,
                        page_size: query_size_param,
                    },
                    goto,
                    pretty,
                },
            ),
        };
        result.map_err(|e| e.to_string())
    }
}
