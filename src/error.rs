//! Error types for strict window computation.

use thiserror::Error;

/// Result type for page-window operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Page-window errors.
///
/// The lenient operations never produce these; only the validating
/// [`PageWindowCalculator::try_window`] door does.
///
/// [`PageWindowCalculator::try_window`]: crate::PageWindowCalculator::try_window
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
	/// The requested current page lies beyond the last page.
	#[error("page index {index} is out of range (last page index is {last})")]
	PageOutOfRange {
		/// The rejected zero-based page index.
		index: usize,
		/// The last valid zero-based page index.
		last: usize,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_page_out_of_range_message() {
		let err = Error::PageOutOfRange { index: 9, last: 4 };
		assert_eq!(
			err.to_string(),
			"page index 9 is out of range (last page index is 4)"
		);
	}
}
