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

//! Error types for HAL resources and collections.

use serde_json::Value as JsonValue;
use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HalErrorKind {
    /// A link was built without its `href`.
    MissingRequiredProperty,
    /// A link array was built without any link.
    EmptyLinkArray,
    /// A `_links` relation holds a value that is neither an object, an array nor null.
    InvalidLink,
    /// An `_embedded` relation holds a value that is not a resource, an array of resources or null.
    InvalidEmbeddedResource,
    /// A resource payload is not a JSON object.
    InvalidResource,
    /// A paged collection has no relation name configured for its records.
    MissingRelationConfig,
    /// An infinite paged collection response lacks its `first` or `last` link.
    MissingPaginationLink,
    /// A page index is not a finite integer or cannot be resolved.
    InvalidPageIndex,
    /// No URL can be derived for a resource.
    UrlResolution,
    /// A media type other than `application/json` or `application/hal+json`.
    UnsupportedContentType,
    /// Malformed JSON text.
    Json,
}

impl fmt::Display for HalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredProperty => write!(f, "MissingRequiredProperty"),
            Self::EmptyLinkArray => write!(f, "EmptyLinkArray"),
            Self::InvalidLink => write!(f, "InvalidLink"),
            Self::InvalidEmbeddedResource => write!(f, "InvalidEmbeddedResource"),
            Self::InvalidResource => write!(f, "InvalidResource"),
            Self::MissingRelationConfig => write!(f, "MissingRelationConfig"),
            Self::MissingPaginationLink => write!(f, "MissingPaginationLink"),
            Self::InvalidPageIndex => write!(f, "InvalidPageIndex"),
            Self::UrlResolution => write!(f, "UrlResolutionError"),
            Self::UnsupportedContentType => write!(f, "UnsupportedContentType"),
            Self::Json => write!(f, "JsonError"),
        }
    }
}

/// An error raised while building, serializing or paging HAL resources.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct HalError {
    /// The kind of error.
    pub kind: HalErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Name of the method where the error was raised.
    pub method: Option<String>,
    /// Data describing the input that triggered the error.
    pub context: Option<JsonValue>,
    /// Annotations added while the error propagated, outermost first.
    pub trail: Option<String>,
}

impl HalError {
    /// Create a new error.
    pub fn new(kind: HalErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            method: None,
            context: None,
            trail: None,
        }
    }

    /// Record the method that raised the error.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Attach contextual data.
    pub fn with_context(mut self, context: JsonValue) -> Self {
        self.context = Some(context);
        self
    }

    // Convenience constructors for each error kind
    pub fn missing_required_property(message: impl Into<String>) -> Self {
        Self::new(HalErrorKind::MissingRequiredProperty, message)
    }

    pub fn empty_link_array(message: impl Into<String>) -> Self {
        Self::new(HalErrorKind::EmptyLinkArray, message)
    }

    pub fn invalid_link(message: impl Into<String>) -> Self {
        Self::new(HalErrorKind::InvalidLink, message)
    }

    pub fn invalid_embedded_resource(message: impl Into<String>) -> Self {
        Self::new(HalErrorKind::InvalidEmbeddedResource, message)
    }

    pub fn invalid_resource(message: impl Into<String>) -> Self {
        Self::new(HalErrorKind::InvalidResource, message)
    }

    pub fn missing_relation_config(message: impl Into<String>) -> Self {
        Self::new(HalErrorKind::MissingRelationConfig, message)
    }

    pub fn missing_pagination_link(message: impl Into<String>) -> Self {
        Self::new(HalErrorKind::MissingPaginationLink, message)
    }

    pub fn invalid_page_index(message: impl Into<String>) -> Self {
        Self::new(HalErrorKind::InvalidPageIndex, message)
    }

    pub fn url_resolution(message: impl Into<String>) -> Self {
        Self::new(HalErrorKind::UrlResolution, message)
    }

    pub fn unsupported_content_type(message: impl Into<String>) -> Self {
        Self::new(HalErrorKind::UnsupportedContentType, message)
    }

    pub fn json(message: impl Into<String>) -> Self {
        Self::new(HalErrorKind::Json, message)
    }
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
