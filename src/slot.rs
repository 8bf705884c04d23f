//! Window slot type shared by the calculator and its consumers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single slot of a computed page window.
///
/// A slot is either a concrete zero-based page index or an ellipsis marker
/// standing in for a run of hidden pages. Markers are not navigable by page
/// number; consumers attach the slot's rendered position instead and feed it
/// back through [`PageWindowCalculator::resolve_click`].
///
/// [`PageWindowCalculator::resolve_click`]: crate::PageWindowCalculator::resolve_click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageSlot {
	/// A navigable page button carrying its zero-based page index.
	Page(usize),
	/// A placeholder indicating hidden pages between shown slots.
	Ellipsis,
}

impl PageSlot {
	/// Returns the page index of a concrete page slot.
	///
	/// # Examples
	///
	/// ```
	/// use page_window::PageSlot;
	///
	/// assert_eq!(PageSlot::Page(3).as_page(), Some(3));
	/// assert_eq!(PageSlot::Ellipsis.as_page(), None);
	/// ```
	pub fn as_page(&self) -> Option<usize> {
		match self {
			PageSlot::Page(page) => Some(*page),
			PageSlot::Ellipsis => None,
		}
	}

	/// Returns true if this slot is an ellipsis marker.
	pub fn is_ellipsis(&self) -> bool {
		matches!(self, PageSlot::Ellipsis)
	}
}

impl fmt::Display for PageSlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PageSlot::Page(page) => write!(f, "{}", page),
			PageSlot::Ellipsis => write!(f, "..."),
		}
	}
}

impl From<usize> for PageSlot {
	fn from(page: usize) -> Self {
		PageSlot::Page(page)
	}
}
