//! The `paginated response` shared examples.
//!
//! Each example is an independent expectation about a decoded response body.
//! A response that fails one example can still pass the others, so callers
//! wanting a full picture should use [`PaginatedResponseExamples::run`].

use serde_json::{Map, Value};
use strum::IntoEnumIterator;

use crate::error::Violation;
use crate::field::{ITEMS_KEY, PaginationField};
use crate::report::{ExampleOutcome, ExampleReport};

#[cfg(test)]
#[path = "shared_examples_tests.rs"]
mod tests;

pub const GROUP: &str = "paginated response";

/// A single named expectation of the shared example group.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub description: &'static str,
    pub check: fn(&Value) -> Result<(), Violation>,
}

pub static EXAMPLES: [Example; 3] = [
    Example {
        description: "has pagination metadata",
        check: has_pagination_metadata,
    },
    Example {
        description: "has valid pagination values",
        check: has_valid_pagination_values,
    },
    Example {
        description: "has items array",
        check: has_items_array,
    },
];

/// All four pagination keys are present at the top level.
pub fn has_pagination_metadata(response: &Value) -> Result<(), Violation> {
    let object = as_object(response)?;
    let missing = PaginationField::iter()
        .map(PaginationField::key)
        .filter(|key| !object.contains_key(*key))
        .collect::<Vec<_>>();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Violation::MissingKeys { missing })
    }
}

/// Every pagination value is an integer within its bound.
///
/// Fields are checked in declaration order and the first violation wins.
pub fn has_valid_pagination_values(response: &Value) -> Result<(), Violation> {
    let object = as_object(response)?;
    PaginationField::iter().try_for_each(|field| {
        let bound = field.bound();
        let actual = object.get(field.key()).unwrap_or(&Value::Null);
        let Value::Number(number) = actual else {
            return Err(Violation::NotComparable {
                field,
                actual: actual.clone(),
                bound,
            });
        };
        match bound.admits(number) {
            Some(true) => Ok(()),
            Some(false) => Err(Violation::OutOfBound {
                field,
                actual: number.clone(),
                bound,
            }),
            None => Err(Violation::NotComparable {
                field,
                actual: actual.clone(),
                bound,
            }),
        }
    })
}

/// `items` is present and is an array.
pub fn has_items_array(response: &Value) -> Result<(), Violation> {
    match as_object(response)?.get(ITEMS_KEY) {
        Some(Value::Array(_)) => Ok(()),
        other => Err(Violation::NotAnArray {
            actual: other.cloned().unwrap_or(Value::Null),
        }),
    }
}

fn as_object(response: &Value) -> Result<&Map<String, Value>, Violation> {
    response.as_object().ok_or_else(|| Violation::NotAnObject {
        actual: response.clone(),
    })
}

/// Runner for the whole `paginated response` group.
pub struct PaginatedResponseExamples;

impl PaginatedResponseExamples {
    pub fn examples() -> &'static [Example] {
        &EXAMPLES
    }

    /// Run every example against the response, collecting one outcome per example.
    pub fn run(response: &Value) -> ExampleReport {
        let outcomes = EXAMPLES
            .iter()
            .map(|example| {
                let violation = (example.check)(response).err();
                if let Some(v) = &violation {
                    log::debug!("example '{}' failed: {}", example.description, v);
                }
                ExampleOutcome {
                    description: example.description,
                    violation,
                }
            })
            .collect();
        ExampleReport {
            group: GROUP,
            outcomes,
        }
    }

    /// Return the first violation in example order.
    ///
    /// # Example
    /// ```
    /// use pagecheck_core::shared_examples::PaginatedResponseExamples;
    /// use serde_json::json;
    ///
    /// let response = json!({
    ///     "current_page": 1,
    ///     "total_pages": 3,
    ///     "total_items": 25,
    ///     "items_per_page": 10,
    ///     "items": []
    /// });
    /// assert!(PaginatedResponseExamples::check(&response).is_ok());
    ///
    /// let err = PaginatedResponseExamples::check(&json!({})).unwrap_err();
    /// assert!(err.to_string().starts_with("expected keys to include"));
    /// ```
    pub fn check(response: &Value) -> Result<(), Violation> {
        EXAMPLES.iter().try_for_each(|example| (example.check)(response))
    }
}

/// Assert that the response passes every `paginated response` example.
///
/// Panics with the rendered report when any example fails.
#[track_caller]
pub fn assert_paginated_response(response: &Value) {
    let report = PaginatedResponseExamples::run(response);
    if !report.is_success() {
        panic!("{report}");
    }
}
