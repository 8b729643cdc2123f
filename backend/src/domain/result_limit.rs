//! Upper bound on the number of typing results returned by a listing.

/// Number of results returned when the caller does not ask for a limit.
pub const DEFAULT_RESULT_LIMIT: usize = 50;

/// Maximum number of entries a listing may return.
///
/// Zero is a valid limit and yields an empty listing. There is no upper
/// bound beyond `usize`.
///
/// # Examples
/// ```
/// use typing_backend::domain::ResultLimit;
///
/// assert_eq!(ResultLimit::default().get(), 50);
/// assert_eq!(ResultLimit::new(0).get(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResultLimit(usize);

impl ResultLimit {
    pub const fn new(limit: usize) -> Self {
        Self(limit)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for ResultLimit {
    fn default() -> Self {
        Self(DEFAULT_RESULT_LIMIT)
    }
}

impl From<usize> for ResultLimit {
    fn from(value: usize) -> Self {
        Self(value)
    }
}
