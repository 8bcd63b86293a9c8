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

//! Error context helpers.
//!
//! Extension traits for `Result<T, HalError>` and `Result<T, serde_json::Error>`
//! that annotate errors as they propagate. Annotations accumulate in
//! [`HalError::trail`], outermost first; the message, kind, method and
//! JSON context of the original error are left untouched.
//!
//! # Examples
//!
//! ## Basic Context
//!
//! ```rust
//! use hale::{parse, HalResultExt};
//!
//! fn load_user(text: &str) -> Result<hale::Resource, hale::HalError> {
//!     parse(text).context("while loading the current user")
//! }
//! ```
//!
//! ## Lazy Context with Closures
//!
//! ```rust
//! use hale::{parse, HalResultExt};
//!
//! fn load_page(number: u64, text: &str) -> Result<(), hale::HalError> {
//!     let _page = parse(text)
//!         .with_context(|| format!("page {} ({} bytes)", number, text.len()))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Converting Foreign Errors
//!
//! ```rust
//! use hale::{HalError, HalResultExt};
//!
//! fn read_document(text: &str) -> Result<serde_json::Value, HalError> {
//!     serde_json::from_str(text)
//!         .map_err_to_hal(|e| HalError::json(format!("Invalid JSON: {}", e)))
//! }
//! ```

use crate::HalError;
use std::fmt;

/// Extension trait for annotating errors with context.
pub trait HalResultExt<T> {
    /// Add context to an error.
    ///
    /// Context is prepended to any existing context:
    ///
    /// ```rust
    /// use hale::{parse, HalResultExt};
    ///
    /// let result = parse("[]")
    ///     .context("in the users response")
    ///     .context("while refreshing");
    ///
    /// if let Err(e) = result {
    ///     assert_eq!(e.trail.unwrap(), "while refreshing; in the users response");
    /// }
    /// ```
    fn context<C>(self, context: C) -> Result<T, HalError>
    where
        C: fmt::Display;

    /// Add context to an error using a closure, evaluated only on error.
    fn with_context<C, F>(self, f: F) -> Result<T, HalError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;

    /// Convert a foreign error type to `HalError`.
    ///
    /// The closure receives the original error and must return a `HalError`.
    fn map_err_to_hal<F>(self, f: F) -> Result<T, HalError>
    where
        F: FnOnce(Self::ErrorType) -> HalError,
        Self: Sized;

    /// The error type for this Result
    type ErrorType;
}

impl<T> HalResultExt<T> for Result<T, HalError> {
    type ErrorType = HalError;

    fn context<C>(self, context: C) -> Result<T, HalError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, HalError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(e, f().to_string()))
    }

    fn map_err_to_hal<F>(self, _f: F) -> Result<T, HalError>
    where
        F: FnOnce(Self::ErrorType) -> HalError,
    {
        // Already a HalError
        self
    }
}

impl<T> HalResultExt<T> for Result<T, serde_json::Error> {
    type ErrorType = serde_json::Error;

    fn context<C>(self, context: C) -> Result<T, HalError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(HalError::json(e.to_string()), context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, HalError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(HalError::json(e.to_string()), f().to_string()))
    }

    fn map_err_to_hal<F>(self, f: F) -> Result<T, HalError>
    where
        F: FnOnce(Self::ErrorType) -> HalError,
    {
        self.map_err(f)
    }
}

/// Prepend `new_context` to the error trail, separated by `; `.
fn add_context_to_error(mut error: HalError, new_context: String) -> HalError {
    if new_context.is_empty() {
        return error;
    }

    error.trail = Some(match error.trail {
        Some(existing) => format!("{}; {}", new_context, existing),
        None => new_context,
    });

    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, HalErrorKind};
    use serde_json::json;

    #[test]
    fn test_context_on_error() {
        let result: Result<(), HalError> = Err(HalError::invalid_link("bad link")
            .with_method("Links::set_json")
            .with_context(json!({"rel": "self"})));
        let err = result.context("in user 1").unwrap_err();

        assert_eq!(err.trail.as_deref(), Some("in user 1"));
        assert_eq!(err.kind, HalErrorKind::InvalidLink);
        assert_eq!(err.method.as_deref(), Some("Links::set_json"));
        assert_eq!(err.context, Some(json!({"rel": "self"})));
    }

    #[test]
    fn test_context_on_ok() {
        let result: Result<i32, HalError> = Ok(42);
        assert_eq!(result.context("never used").unwrap(), 42);
    }

    #[test]
    fn test_context_chaining() {
        let err = parse("[]")
            .context("in the users response")
            .context("while refreshing")
            .unwrap_err();
        assert_eq!(err.trail.as_deref(), Some("while refreshing; in the users response"));
    }

    #[test]
    fn test_empty_context_ignored() {
        let result: Result<(), HalError> = Err(HalError::json("x"));
        assert!(result.context("").unwrap_err().trail.is_none());
    }

    #[test]
    fn test_with_context_lazy() {
        let mut called = false;
        let result: Result<i32, HalError> = Ok(1);
        let _ = result.with_context(|| {
            called = true;
            "unused"
        });
        assert!(!called);
    }

    #[test]
    fn test_serde_json_error_becomes_json_kind() {
        let result: Result<serde_json::Value, serde_json::Error> = serde_json::from_str("{");
        let err = result.context("reading response").unwrap_err();
        assert_eq!(err.kind, HalErrorKind::Json);
        assert_eq!(err.trail.as_deref(), Some("reading response"));
    }

    #[test]
    fn test_map_err_to_hal_passthrough() {
        let result: Result<(), HalError> = Err(HalError::url_resolution("no url"));
        let err = result
            .map_err_to_hal(|_| HalError::json("unused"))
            .unwrap_err();
        assert_eq!(err.kind, HalErrorKind::UrlResolution);
    }
}
