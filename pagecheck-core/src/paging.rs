use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Violation;
use crate::shared_examples::PaginatedResponseExamples;

#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum Error {
    #[from]
    #[display("response does not have the shape of a paginated response")]
    Violation { source: Violation },
    #[from]
    #[display("unable to decode paginated response")]
    Decode { source: serde_json::Error },
}

/// Typed view of one page of a paginated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u64,
    pub items: Vec<T>,
}

impl<T: DeserializeOwned> Paginated<T> {
    /// Decode a response body after it passed every `paginated response` example.
    ///
    /// # Example
    /// ```
    /// use pagecheck_core::paging::{Error, Paginated};
    /// use serde_json::json;
    ///
    /// let response = json!({
    ///     "current_page": 2,
    ///     "total_pages": 2,
    ///     "total_items": 3,
    ///     "items_per_page": 2,
    ///     "items": ["c"]
    /// });
    /// let page = Paginated::<String>::from_response(response).unwrap();
    /// assert_eq!(page.items, vec!["c".to_string()]);
    ///
    /// let err = Paginated::<String>::from_response(json!({ "items": [] })).unwrap_err();
    /// assert!(matches!(err, Error::Violation { .. }));
    /// ```
    pub fn from_response(response: Value) -> Result<Self, Error> {
        PaginatedResponseExamples::check(&response)?;
        Ok(serde_json::from_value(response)?)
    }
}
