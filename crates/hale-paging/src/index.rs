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

//! Page indexes.

use hale_core::{capture_error, HalError, HalResult};
use serde_json::{json, Value as JsonValue};
use std::fmt;
use std::str::FromStr;

/// A requested page: a literal number or a position relative to the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageIndex {
    First,
    Prev,
    Next,
    Last,
    Number(i64),
}

impl PageIndex {
    /// Read an index from JSON: a token string or an integral number.
    pub fn from_json(value: &JsonValue) -> HalResult<Self> {
        match value {
            JsonValue::String(s) => s.parse(),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(Self::Number(i));
                }
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                        Ok(Self::Number(f as i64))
                    }
                    _ => Err(invalid_index(value)),
                }
            }
            _ => Err(invalid_index(value)),
        }
    }
}

fn invalid_index(value: &JsonValue) -> HalError {
    capture_error(
        HalError::invalid_page_index("`index` must be a finite integer"),
        "PageIndex::from_json",
        json!({ "index": value }),
    )
}

impl FromStr for PageIndex {
    type Err = HalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "first" => Ok(Self::First),
            "prev" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            "last" => Ok(Self::Last),
            other => other
                .parse::<i64>()
                .map(Self::Number)
                .map_err(|_| invalid_index(&JsonValue::from(s))),
        }
    }
}

impl From<i64> for PageIndex {
    fn from(page: i64) -> Self {
        Self::Number(page)
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Prev => write!(f, "prev"),
            Self::Next => write!(f, "next"),
            Self::Last => write!(f, "last"),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hale_core::HalErrorKind;

    #[test]
    fn test_tokens() {
        assert_eq!("first".parse::<PageIndex>().unwrap(), PageIndex::First);
        assert_eq!("prev".parse::<PageIndex>().unwrap(), PageIndex::Prev);
        assert_eq!("next".parse::<PageIndex>().unwrap(), PageIndex::Next);
        assert_eq!("last".parse::<PageIndex>().unwrap(), PageIndex::Last);
        assert_eq!("3".parse::<PageIndex>().unwrap(), PageIndex::Number(3));
    }

    #[test]
    fn test_invalid_strings() {
        for s in ["middle", "1.5", "", "NaN"] {
            let err = s.parse::<PageIndex>().unwrap_err();
            assert_eq!(err.kind, HalErrorKind::InvalidPageIndex);
        }
    }

    #[test]
    fn test_from_json() {
        assert_eq!(PageIndex::from_json(&json!(2)).unwrap(), PageIndex::Number(2));
        assert_eq!(PageIndex::from_json(&json!(4.0)).unwrap(), PageIndex::Number(4));
        assert_eq!(PageIndex::from_json(&json!("next")).unwrap(), PageIndex::Next);

        for invalid in [json!(1.5), json!(null), json!(true), json!([1]), json!(1e300)] {
            let err = PageIndex::from_json(&invalid).unwrap_err();
            assert_eq!(err.kind, HalErrorKind::InvalidPageIndex);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(PageIndex::Last.to_string(), "last");
        assert_eq!(PageIndex::from(7).to_string(), "7");
    }
}
