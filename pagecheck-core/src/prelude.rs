pub use crate::error::Violation;
pub use crate::field::{Bound, ITEMS_KEY, PaginationField};
pub use crate::paging::Paginated;
pub use crate::report::{ExampleOutcome, ExampleReport};
pub use crate::shared_examples::{PaginatedResponseExamples, assert_paginated_response};
