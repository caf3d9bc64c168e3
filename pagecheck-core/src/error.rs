use serde_json::{Number, Value};

use crate::field::{Bound, PaginationField};

/// A failed expectation against a paginated response.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum Violation {
    #[display("expected response to be an Object but got {actual}")]
    NotAnObject {
        #[error(not(source))]
        actual: Value,
    },
    #[display("expected keys to include {}", quoted_keys(missing))]
    MissingKeys {
        #[error(not(source))]
        missing: Vec<&'static str>,
    },
    #[display("{field}: expected {actual} to be {bound}")]
    OutOfBound {
        field: PaginationField,
        actual: Number,
        bound: Bound,
    },
    #[display("{field}: expected {actual} to be an Integer comparable to {bound}")]
    NotComparable {
        field: PaginationField,
        actual: Value,
        bound: Bound,
    },
    #[display("items: expected {actual} to be an Array")]
    NotAnArray {
        #[error(not(source))]
        actual: Value,
    },
}

fn quoted_keys(keys: &[&'static str]) -> String {
    keys.iter().map(|k| format!("\"{k}\"")).collect::<Vec<_>>().join(", ")
}
