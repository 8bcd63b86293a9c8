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

//! Pluggable error capture.
//!
//! Every error raised by the library goes through [`capture_error`] before it
//! is returned to the caller. The installed [`ErrorHandler`] receives the
//! error, the name of the method that raised it and a JSON description of the
//! offending input, and returns the error that will be propagated.
//!
//! The default handler only records the method and context on the error.
//! A custom handler can forward errors to a log or a metrics sink:
//!
//! ```rust
//! use hale_core::{set_error_handler, reset_error_handler, ErrorHandler, HalError};
//! use serde_json::Value;
//! use std::sync::Arc;
//!
//! struct Logging;
//!
//! impl ErrorHandler for Logging {
//!     fn capture(&self, error: HalError, method: &str, context: Value) -> HalError {
//!         eprintln!("{} in {}", error, method);
//!         error.with_method(method).with_context(context)
//!     }
//! }
//!
//! set_error_handler(Arc::new(Logging));
//! reset_error_handler();
//! ```

use crate::error::HalError;
use serde_json::Value as JsonValue;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Hook receiving every error before it is returned.
pub trait ErrorHandler: Send + Sync {
    /// Wrap `error` with the raising `method` and `context`.
    ///
    /// The returned error is always propagated to the caller.
    fn capture(&self, error: HalError, method: &str, context: JsonValue) -> HalError;
}

/// Handler used when no custom handler is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorHandler;

impl ErrorHandler for DefaultErrorHandler {
    fn capture(&self, error: HalError, method: &str, context: JsonValue) -> HalError {
        error.with_method(method).with_context(context)
    }
}

static HANDLER: RwLock<Option<Arc<dyn ErrorHandler>>> = RwLock::new(None);

/// Install a process-wide error handler.
pub fn set_error_handler(handler: Arc<dyn ErrorHandler>) {
    *HANDLER.write().unwrap_or_else(PoisonError::into_inner) = Some(handler);
}

/// Restore the default error handler.
pub fn reset_error_handler() {
    *HANDLER.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Pass `error` through the installed handler.
pub fn capture_error(error: HalError, method: &str, context: JsonValue) -> HalError {
    let handler = HANDLER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    let error = match handler {
        Some(handler) => handler.capture(error, method, context),
        None => DefaultErrorHandler.capture(error, method, context),
    };

    debug!(kind = %error.kind, method, "captured error: {}", error.message);
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HalErrorKind;
    use serde_json::json;

    #[test]
    fn test_default_handler_records_method_and_context() {
        let err = DefaultErrorHandler.capture(
            HalError::invalid_link("bad"),
            "Links::set_json",
            json!({"rel": "next"}),
        );
        assert_eq!(err.kind, HalErrorKind::InvalidLink);
        assert_eq!(err.method.as_deref(), Some("Links::set_json"));
        assert_eq!(err.context, Some(json!({"rel": "next"})));
    }

    #[test]
    fn test_capture_error_always_returns_error() {
        let err = capture_error(
            HalError::url_resolution("no base"),
            "Resource::url",
            JsonValue::Null,
        );
        assert_eq!(err.kind, HalErrorKind::UrlResolution);
        assert_eq!(err.method.as_deref(), Some("Resource::url"));
    }
}
