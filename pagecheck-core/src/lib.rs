pub mod error;
pub mod field;
pub mod macros;
pub mod paging;
pub mod prelude;
pub mod report;
pub mod shared_examples;

#[doc(hidden)]
pub use serde_json;
pub use shared_examples::assert_paginated_response;
