//! Behavioral tests for window computation and click resolution.
//!
//! Each case pins the exact slot sequence the control renders for a given
//! total page count, current page and policy.

use page_window::{EllipsisOptions, PageSlot, PageWindowCalculator};
use rstest::rstest;

fn rendered(calc: &PageWindowCalculator, current_page: usize) -> String {
	calc.window(current_page)
		.iter()
		.map(|slot| slot.to_string())
		.collect::<Vec<_>>()
		.join(" ")
}

// ============================================================================
// Default policy: seven slots, overwrite mode, pinning on
// ============================================================================

#[rstest]
#[case(20, 0, "0 1 2 3 4 ... 19")]
#[case(20, 3, "0 1 2 3 4 ... 19")]
#[case(20, 4, "0 ... 3 4 5 ... 19")]
#[case(20, 10, "0 ... 9 10 11 ... 19")]
#[case(20, 16, "0 ... 15 16 17 18 19")]
#[case(20, 19, "0 ... 15 16 17 18 19")]
#[case(8, 3, "0 1 2 3 4 ... 7")]
#[case(8, 4, "0 ... 3 4 5 6 7")]
#[case(5, 0, "0 1 2 3 4")]
#[case(5, 4, "0 1 2 3 4")]
#[case(1, 0, "0")]
fn test_default_windows(#[case] total: usize, #[case] current: usize, #[case] expected: &str) {
	let calc = PageWindowCalculator::new(total);
	assert_eq!(rendered(&calc, current), expected);
}

// ============================================================================
// Insert mode: markers widen the window, single hidden pages substituted
// ============================================================================

#[rstest]
#[case(9, 0, "0 1 2 3 ... 8")]
#[case(9, 3, "0 1 2 3 4 ... 8")]
#[case(9, 4, "0 ... 3 4 5 ... 8")]
#[case(9, 5, "0 ... 4 5 6 7 8")]
#[case(9, 8, "0 ... 5 6 7 8")]
#[case(7, 3, "0 1 2 3 4 5 6")]
fn test_insert_mode_windows(#[case] total: usize, #[case] current: usize, #[case] expected: &str) {
	let calc = PageWindowCalculator::new(total)
		.max_pages_shown(5)
		.ellipsis_options(EllipsisOptions::default().counts_as_page(false));
	assert_eq!(rendered(&calc, current), expected);
}

#[rstest]
fn test_insert_mode_never_exceeds_two_extra_slots() {
	let calc = PageWindowCalculator::new(9)
		.max_pages_shown(5)
		.ellipsis_options(EllipsisOptions::default().counts_as_page(false));
	for current in 0..9 {
		assert!(calc.window(current).len() <= 7, "current page {}", current);
	}
}

// ============================================================================
// Policy variations
// ============================================================================

#[rstest]
fn test_no_pinning_overwrite_mode() {
	let calc = PageWindowCalculator::new(20).first_last(false);
	assert_eq!(rendered(&calc, 10), "... 8 9 10 11 12 ...");
	assert_eq!(rendered(&calc, 0), "0 1 2 3 4 5 ...");
}

#[rstest]
fn test_ellipsis_disabled_keeps_plain_run() {
	let calc = PageWindowCalculator::new(20)
		.ellipsis_options(EllipsisOptions::default().enabled(false));
	assert_eq!(rendered(&calc, 10), "0 8 9 10 11 12 19");
	assert!(!calc.window(10).has_ellipsis());
}

#[rstest]
fn test_wider_window() {
	let calc = PageWindowCalculator::new(50).max_pages_shown(9);
	assert_eq!(rendered(&calc, 25), "0 ... 23 24 25 26 27 ... 49");
}

// ============================================================================
// Click resolution
// ============================================================================

#[rstest]
#[case(PageSlot::Page(7), 2, Some(7))]
#[case(PageSlot::Ellipsis, 0, Some(5))]
#[case(PageSlot::Ellipsis, 2, Some(5))]
#[case(PageSlot::Ellipsis, 5, Some(15))]
#[case(PageSlot::Ellipsis, 6, Some(15))]
fn test_resolve_click_default(
	#[case] clicked: PageSlot,
	#[case] button_index: usize,
	#[case] expected: Option<usize>,
) {
	let calc = PageWindowCalculator::new(20);
	assert_eq!(calc.resolve_click(10, clicked, button_index), expected);
}

#[rstest]
fn test_resolve_click_from_first_page() {
	let calc = PageWindowCalculator::new(20);
	// No pages precede the current one; the front jump stays at 0.
	assert_eq!(calc.resolve_click(0, PageSlot::Ellipsis, 0), Some(0));
	assert_eq!(calc.resolve_click(0, PageSlot::Ellipsis, 5), Some(10));
}

#[rstest]
fn test_resolve_click_disabled_is_a_no_op() {
	let calc = PageWindowCalculator::new(20)
		.ellipsis_options(EllipsisOptions::default().clickable(false));
	assert_eq!(calc.resolve_click(10, PageSlot::Ellipsis, 0), None);
	assert_eq!(calc.resolve_click(10, PageSlot::Ellipsis, 6), None);
	assert_eq!(calc.resolve_click(10, PageSlot::Page(4), 3), Some(4));
}

// ============================================================================
// Serialization
// ============================================================================

#[rstest]
fn test_window_serde_round_trip() {
	let calc = PageWindowCalculator::new(20);
	let window = calc.window(10);
	let json = serde_json::to_string(&window).unwrap();
	let restored: page_window::PageWindow = serde_json::from_str(&json).unwrap();
	assert_eq!(window, restored);
}

#[rstest]
fn test_slot_serde_round_trip() {
	for slot in [PageSlot::Page(3), PageSlot::Ellipsis] {
		let json = serde_json::to_string(&slot).unwrap();
		let restored: PageSlot = serde_json::from_str(&json).unwrap();
		assert_eq!(slot, restored);
	}
}
