//! Page-window computation and click resolution.
//!
//! The calculator derives a bounded-width run of page slots from an
//! arbitrarily large page range in three phases: base window selection
//! (anchored at the start, the end, or centered on the current page),
//! ellipsis placement on either side, and first/last pinning. A companion
//! rule resolves clicks on ellipsis markers to a halfway jump.

use crate::error::{Error, Result};
use crate::options::EllipsisOptions;
use crate::slot::PageSlot;
use crate::window::PageWindow;

/// Computes the visible page window for a pagination bar control and
/// resolves clicks on it.
///
/// The calculator owns the mutable total-page count and the display policy,
/// which is fixed once the calculator is in use. For a fixed configuration
/// and total, [`window`](Self::window) is a pure function of the current
/// page.
///
/// # Examples
///
/// ```
/// use page_window::{PageSlot, PageWindowCalculator};
///
/// let mut calc = PageWindowCalculator::new(20);
/// assert_eq!(calc.window(10).len(), 7);
///
/// calc.set_total_pages(3);
/// assert_eq!(calc.window(0).len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PageWindowCalculator {
	total_pages: usize,
	/// Maximum number of slots the window may occupy. At least 1.
	pub max_pages_shown: usize,
	/// Pin the first slot to page `0` and the last slot to the last page,
	/// overwriting whatever the windowing phases produced there.
	pub first_last: bool,
	/// Ellipsis placement and click policy.
	pub ellipsis: EllipsisOptions,
}

impl PageWindowCalculator {
	/// Creates a calculator for `total_pages` pages with the default
	/// policy: seven slots, ellipsis markers enabled and counting as
	/// pages, first/last pinning on.
	///
	/// `total_pages` is clamped to at least one page.
	///
	/// # Examples
	///
	/// ```
	/// use page_window::PageWindowCalculator;
	///
	/// let calc = PageWindowCalculator::new(0);
	/// assert_eq!(calc.total_pages(), 1);
	/// assert_eq!(calc.max_pages_shown, 7);
	/// ```
	pub fn new(total_pages: usize) -> Self {
		Self {
			total_pages: total_pages.max(1),
			max_pages_shown: 7,
			first_last: true,
			ellipsis: EllipsisOptions::default(),
		}
	}

	/// Sets the maximum number of slots shown, clamped to at least 1.
	///
	/// # Examples
	///
	/// ```
	/// use page_window::PageWindowCalculator;
	///
	/// let calc = PageWindowCalculator::new(50).max_pages_shown(9);
	/// assert_eq!(calc.window(25).len(), 9);
	/// ```
	pub fn max_pages_shown(mut self, shown: usize) -> Self {
		self.max_pages_shown = shown.max(1);
		self
	}

	/// Sets whether the first and last slots are pinned to page `0` and
	/// the last page.
	///
	/// # Examples
	///
	/// ```
	/// use page_window::{PageSlot, PageWindowCalculator};
	///
	/// let calc = PageWindowCalculator::new(20).first_last(false);
	/// let window = calc.window(10);
	/// assert_eq!(window[0], PageSlot::Ellipsis);
	/// ```
	pub fn first_last(mut self, pin: bool) -> Self {
		self.first_last = pin;
		self
	}

	/// Sets the ellipsis policy.
	///
	/// # Examples
	///
	/// ```
	/// use page_window::{EllipsisOptions, PageWindowCalculator};
	///
	/// let calc = PageWindowCalculator::new(20)
	///     .ellipsis_options(EllipsisOptions::default().enabled(false));
	/// assert!(!calc.window(10).has_ellipsis());
	/// ```
	pub fn ellipsis_options(mut self, options: EllipsisOptions) -> Self {
		self.ellipsis = options;
		self
	}

	/// Returns the current total page count.
	pub fn total_pages(&self) -> usize {
		self.total_pages
	}

	/// Returns the zero-based index of the last page.
	pub fn last_page_index(&self) -> usize {
		self.total_pages - 1
	}

	/// Sets the total page count, clamped to at least one page.
	///
	/// Subsequent window computations reflect the new range; nothing about
	/// previously computed windows is retained.
	///
	/// # Examples
	///
	/// ```
	/// use page_window::PageWindowCalculator;
	///
	/// let mut calc = PageWindowCalculator::new(10);
	/// calc.set_total_pages(0);
	/// assert_eq!(calc.total_pages(), 1);
	/// assert_eq!(calc.last_page_index(), 0);
	/// ```
	pub fn set_total_pages(&mut self, total_pages: usize) {
		self.total_pages = total_pages.max(1);
		tracing::trace!("total page count set to {}", self.total_pages);
	}

	/// Relative offset at which the current page sits in a centered
	/// window. Slots before this offset count as the front half when an
	/// ellipsis click is resolved.
	pub fn middle_index(&self) -> usize {
		self.max_pages_shown / 2
	}

	/// Computes the window of page slots to display for `current_page`.
	///
	/// `current_page` is a zero-based index the caller is responsible for
	/// keeping within `[0, last_page_index]`; out-of-range values are not
	/// rejected here and converge on the end-anchored window. Use
	/// [`try_window`](Self::try_window) to validate instead.
	///
	/// # Examples
	///
	/// ```
	/// use page_window::PageWindowCalculator;
	///
	/// let calc = PageWindowCalculator::new(20);
	/// let slots: Vec<String> =
	///     calc.window(10).iter().map(|slot| slot.to_string()).collect();
	/// assert_eq!(slots, ["0", "...", "9", "10", "11", "...", "19"]);
	/// ```
	pub fn window(&self, current_page: usize) -> PageWindow {
		let last = self.last_page_index();
		let middle = self.middle_index();
		let window_len = self.max_pages_shown.min(self.total_pages);

		// Anchor the run so it never leaves [0, last] while keeping the
		// current page visible and, where possible, centered.
		let start = if current_page < middle {
			0
		} else if current_page > last.saturating_sub(middle) {
			self.total_pages - window_len
		} else {
			current_page - middle
		};

		let mut slots: Vec<PageSlot> =
			(start..start + window_len).map(PageSlot::Page).collect();

		if self.ellipsis.enabled {
			// Both sides decide against the untouched base window.
			let middle_page = start + window_len / 2;
			if middle_page > middle {
				self.place_front_ellipsis(&mut slots, middle_page == middle + 1);
			}
			if middle_page + middle < last {
				self.place_back_ellipsis(&mut slots, middle_page + middle + 1 == last, last);
			}
		}

		if self.first_last {
			if let Some(first) = slots.first_mut() {
				*first = PageSlot::Page(0);
			}
			if let Some(last_slot) = slots.last_mut() {
				*last_slot = PageSlot::Page(last);
			}
		}

		PageWindow::new(slots)
	}

	/// Validating variant of [`window`](Self::window).
	///
	/// # Errors
	///
	/// Returns [`Error::PageOutOfRange`] when `current_page` lies beyond
	/// the last page index.
	///
	/// # Examples
	///
	/// ```
	/// use page_window::PageWindowCalculator;
	///
	/// let calc = PageWindowCalculator::new(5);
	/// assert!(calc.try_window(4).is_ok());
	/// assert!(calc.try_window(5).is_err());
	/// ```
	pub fn try_window(&self, current_page: usize) -> Result<PageWindow> {
		let last = self.last_page_index();
		if current_page > last {
			return Err(Error::PageOutOfRange {
				index: current_page,
				last,
			});
		}
		Ok(self.window(current_page))
	}

	/// Resolves a click on a window slot to a target page.
	///
	/// Concrete page slots navigate to their own index. An ellipsis click
	/// jumps halfway toward the boundary the marker stands for, inferred
	/// from `button_index` (the clicked slot's position within the
	/// rendered window): positions before [`middle_index`](Self::middle_index)
	/// are the front marker, the rest the back marker. Returns `None`
	/// when ellipsis clicks are disabled; the caller treats that as
	/// "ignore the click", not a fault.
	///
	/// # Examples
	///
	/// ```
	/// use page_window::{PageSlot, PageWindowCalculator};
	///
	/// let calc = PageWindowCalculator::new(20);
	/// assert_eq!(calc.resolve_click(10, PageSlot::Page(7), 3), Some(7));
	/// assert_eq!(calc.resolve_click(10, PageSlot::Ellipsis, 1), Some(5));
	/// assert_eq!(calc.resolve_click(10, PageSlot::Ellipsis, 5), Some(15));
	/// ```
	pub fn resolve_click(
		&self,
		current_page: usize,
		clicked: PageSlot,
		button_index: usize,
	) -> Option<usize> {
		match clicked {
			PageSlot::Page(page) => Some(page),
			PageSlot::Ellipsis => {
				if !self.ellipsis.clickable {
					tracing::debug!("ellipsis click at slot {} ignored", button_index);
					return None;
				}
				let target = if button_index < self.middle_index() {
					current_page / 2
				} else {
					(current_page + self.last_page_index()).div_ceil(2)
				};
				tracing::debug!(
					"ellipsis click at slot {} resolved to page {}",
					button_index,
					target
				);
				Some(target)
			}
		}
	}

	/// Returns true if a page precedes `current_page`.
	pub fn has_previous(&self, current_page: usize) -> bool {
		current_page > 0
	}

	/// Returns true if a page follows `current_page`.
	pub fn has_next(&self, current_page: usize) -> bool {
		current_page < self.last_page_index()
	}

	/// Returns the page before `current_page`, if any.
	pub fn previous_page(&self, current_page: usize) -> Option<usize> {
		self.has_previous(current_page).then(|| current_page - 1)
	}

	/// Returns the page after `current_page`, if any.
	///
	/// # Examples
	///
	/// ```
	/// use page_window::PageWindowCalculator;
	///
	/// let calc = PageWindowCalculator::new(3);
	/// assert_eq!(calc.next_page(1), Some(2));
	/// assert_eq!(calc.next_page(2), None);
	/// ```
	pub fn next_page(&self, current_page: usize) -> Option<usize> {
		self.has_next(current_page).then(|| current_page + 1)
	}

	fn place_front_ellipsis(&self, slots: &mut Vec<PageSlot>, single_hidden: bool) {
		// With pinning, slot 0 belongs to page 0, so the marker sits one in.
		let position = if self.first_last { 1 } else { 0 };
		if self.ellipsis.counts_as_page {
			if let Some(slot) = slots.get_mut(position) {
				*slot = PageSlot::Ellipsis;
			}
		} else if single_hidden && self.ellipsis.show_single_hidden_page {
			// The marker would hide a single page; show its number instead.
			let hidden_page = if self.first_last { 1 } else { 0 };
			slots.insert(position, PageSlot::Page(hidden_page));
		} else {
			slots.insert(position, PageSlot::Ellipsis);
		}
	}

	fn place_back_ellipsis(&self, slots: &mut Vec<PageSlot>, single_hidden: bool, last: usize) {
		if self.ellipsis.counts_as_page {
			let position = if self.first_last {
				slots.len().checked_sub(2)
			} else {
				slots.len().checked_sub(1)
			};
			if let Some(position) = position {
				slots[position] = PageSlot::Ellipsis;
			}
		} else {
			let position = if self.first_last {
				slots.len() - 1
			} else {
				slots.len()
			};
			if single_hidden && self.ellipsis.show_single_hidden_page {
				let hidden_page = if self.first_last { last - 1 } else { last };
				slots.insert(position, PageSlot::Page(hidden_page));
			} else {
				slots.insert(position, PageSlot::Ellipsis);
			}
		}
	}
}
