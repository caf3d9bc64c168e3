use serde_json::Number;

/// Key holding the slice of items returned for the current page.
pub const ITEMS_KEY: &str = "items";

/// Page-position metadata carried at the top level of a paginated response.
///
/// Variants are declared in the order the metadata is checked and reported.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum PaginationField {
    CurrentPage,
    TotalPages,
    TotalItems,
    ItemsPerPage,
}

impl PaginationField {
    /// Name of the field as it appears on the wire.
    ///
    /// # Example
    /// ```
    /// use pagecheck_core::field::PaginationField;
    ///
    /// assert_eq!(PaginationField::CurrentPage.key(), "current_page");
    /// assert_eq!(PaginationField::ItemsPerPage.key(), "items_per_page");
    /// ```
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn bound(self) -> Bound {
        match self {
            Self::CurrentPage => Bound::AtLeast(1),
            Self::TotalPages => Bound::AtLeast(0),
            Self::TotalItems => Bound::AtLeast(0),
            Self::ItemsPerPage => Bound::GreaterThan(0),
        }
    }
}

/// Lower bound a pagination value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Bound {
    #[display(">= {_0}")]
    AtLeast(i64),
    #[display("> {_0}")]
    GreaterThan(i64),
}

impl Bound {
    /// Check a JSON number against the bound.
    ///
    /// Returns `None` when the number is not an integer.
    ///
    /// # Example
    /// ```
    /// use pagecheck_core::field::Bound;
    /// use serde_json::Number;
    ///
    /// assert_eq!(Bound::AtLeast(1).admits(&Number::from(1)), Some(true));
    /// assert_eq!(Bound::AtLeast(1).admits(&Number::from(0)), Some(false));
    /// assert_eq!(Bound::GreaterThan(0).admits(&Number::from(0)), Some(false));
    /// assert_eq!(Bound::GreaterThan(0).admits(&Number::from(u64::MAX)), Some(true));
    /// assert_eq!(Bound::AtLeast(0).admits(&Number::from_f64(2.5).unwrap()), None);
    /// ```
    pub fn admits(&self, number: &Number) -> Option<bool> {
        match number.as_i64() {
            Some(value) => Some(match *self {
                Self::AtLeast(limit) => value >= limit,
                Self::GreaterThan(limit) => value > limit,
            }),
            // only integers above i64::MAX are left here
            None => number.as_u64().map(|_| true),
        }
    }
}
