//! The computed page window.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::slot::PageSlot;

/// An ordered, bounded sequence of page slots produced by
/// [`PageWindowCalculator::window`].
///
/// Slots appear in rendering order. With first/last pinning enabled the
/// first slot is always page `0` and the last slot the last page index.
///
/// # Examples
///
/// ```
/// use page_window::{PageSlot, PageWindowCalculator};
///
/// let calc = PageWindowCalculator::new(5);
/// let window = calc.window(2);
///
/// assert_eq!(window.len(), 5);
/// assert!(!window.has_ellipsis());
/// assert_eq!(window.pages().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(window[4], PageSlot::Page(4));
/// ```
///
/// [`PageWindowCalculator::window`]: crate::PageWindowCalculator::window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageWindow {
	slots: Vec<PageSlot>,
}

impl PageWindow {
	pub(crate) fn new(slots: Vec<PageSlot>) -> Self {
		Self { slots }
	}

	/// Returns the number of slots in the window.
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	/// Returns true if the window contains no slots.
	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Returns the slot at `index`.
	pub fn get(&self, index: usize) -> Option<PageSlot> {
		self.slots.get(index).copied()
	}

	/// Returns the first slot.
	pub fn first(&self) -> Option<PageSlot> {
		self.slots.first().copied()
	}

	/// Returns the last slot.
	pub fn last(&self) -> Option<PageSlot> {
		self.slots.last().copied()
	}

	/// Returns an iterator over the slots in rendering order.
	pub fn iter(&self) -> std::slice::Iter<'_, PageSlot> {
		self.slots.iter()
	}

	/// Returns the slots as a slice.
	pub fn as_slice(&self) -> &[PageSlot] {
		&self.slots
	}

	/// Returns true if any slot is an ellipsis marker.
	pub fn has_ellipsis(&self) -> bool {
		self.slots.iter().any(PageSlot::is_ellipsis)
	}

	/// Returns an iterator over the concrete page indices, skipping
	/// ellipsis markers.
	pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
		self.slots.iter().filter_map(PageSlot::as_page)
	}
}

impl Index<usize> for PageWindow {
	type Output = PageSlot;

	fn index(&self, index: usize) -> &Self::Output {
		&self.slots[index]
	}
}

impl IntoIterator for PageWindow {
	type Item = PageSlot;
	type IntoIter = std::vec::IntoIter<PageSlot>;

	fn into_iter(self) -> Self::IntoIter {
		self.slots.into_iter()
	}
}

impl<'a> IntoIterator for &'a PageWindow {
	type Item = &'a PageSlot;
	type IntoIter = std::slice::Iter<'a, PageSlot>;

	fn into_iter(self) -> Self::IntoIter {
		self.slots.iter()
	}
}
