/// Generate one `#[test]` per `paginated response` example.
///
/// The response expression is evaluated once per generated test. The named
/// form wraps the tests in a module so several endpoints can share one file.
///
/// ```ignore
/// use pagecheck_core::paginated_response_examples;
///
/// paginated_response_examples!(words_index, fixtures::words_page());
/// paginated_response_examples!(groups_index, fixtures::groups_page());
/// ```
#[macro_export]
macro_rules! paginated_response_examples {
    (@example $example:ident, $response:expr) => {
        #[test]
        fn $example() {
            let response: $crate::serde_json::Value = $response;
            if let Err(violation) = $crate::shared_examples::$example(&response) {
                panic!("{}", violation);
            }
        }
    };
    ($name:ident, $response:expr) => {
        mod $name {
            #[allow(unused_imports)]
            use super::*;

            $crate::paginated_response_examples!($response);
        }
    };
    ($response:expr) => {
        $crate::paginated_response_examples!(@example has_pagination_metadata, $response);
        $crate::paginated_response_examples!(@example has_valid_pagination_values, $response);
        $crate::paginated_response_examples!(@example has_items_array, $response);
    };
}
