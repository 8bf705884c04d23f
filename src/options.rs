//! Ellipsis placement and click policy.

use serde::{Deserialize, Serialize};

/// Ellipsis policy for a [`PageWindowCalculator`].
///
/// Every flag defaults to `true`. The options are fixed for the lifetime of
/// the calculator they are handed to.
///
/// # Examples
///
/// ```
/// use page_window::EllipsisOptions;
///
/// let options = EllipsisOptions::default()
///     .counts_as_page(false)
///     .clickable(false);
///
/// assert!(options.enabled);
/// assert!(!options.counts_as_page);
/// assert!(!options.clickable);
/// ```
///
/// [`PageWindowCalculator`]: crate::PageWindowCalculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EllipsisOptions {
	/// Whether ellipsis markers are produced at all.
	pub enabled: bool,
	/// Whether a marker takes over an existing slot (`true`), keeping the
	/// window length unchanged, or is inserted as an extra slot (`false`),
	/// widening the window by up to one slot per side.
	pub counts_as_page: bool,
	/// When a marker would hide exactly one page, show that page's number
	/// instead of the marker. Only consulted when `counts_as_page` is
	/// `false`.
	pub show_single_hidden_page: bool,
	/// Whether clicks on a marker resolve to a halfway jump. When `false`,
	/// marker clicks report no navigation target.
	pub clickable: bool,
}

impl Default for EllipsisOptions {
	fn default() -> Self {
		Self {
			enabled: true,
			counts_as_page: true,
			show_single_hidden_page: true,
			clickable: true,
		}
	}
}

impl EllipsisOptions {
	/// Creates the default ellipsis policy.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets whether ellipsis markers are produced at all.
	pub fn enabled(mut self, enabled: bool) -> Self {
		self.enabled = enabled;
		self
	}

	/// Sets whether a marker takes over an existing slot instead of being
	/// inserted as an extra one.
	pub fn counts_as_page(mut self, counts_as_page: bool) -> Self {
		self.counts_as_page = counts_as_page;
		self
	}

	/// Sets whether a marker hiding exactly one page is replaced by that
	/// page's number.
	pub fn show_single_hidden_page(mut self, show: bool) -> Self {
		self.show_single_hidden_page = show;
		self
	}

	/// Sets whether clicks on a marker resolve to a halfway jump.
	pub fn clickable(mut self, clickable: bool) -> Self {
		self.clickable = clickable;
		self
	}
}
