//! Page-at-a-time list state shared by the community list pages.
//!
//! Extracted from the page components to keep the fetch guard, the loading
//! state machine and the page-number display math testable without a
//! rendering environment.

use shared::models::PageMeta;

/// Where a paginated list is in its fetch cycle.
///
/// A failed fetch keeps the previously loaded items on screen; the state
/// only records that the most recent fetch did not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl FetchState {
    pub fn is_loading(self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Current/total page tracking for one paginated collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
        }
    }
}

impl Pagination {
    /// Whether `page` may be requested at all. Out-of-range pages are
    /// rejected here, before any network call is made.
    pub fn accepts(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }

    /// Replace the tracked position with what the server reported.
    pub fn apply(&mut self, meta: &PageMeta) {
        self.current_page = meta.page;
        self.total_pages = meta.pages;
        self.total_items = meta.total;
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// One entry in the rendered page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page numbers to display: the first and last page always, the current
/// page with one neighbor on each side, and an ellipsis wherever more than
/// one page is skipped. A gap of exactly one page shows that page instead
/// of an ellipsis.
pub fn page_items(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    let mut pages = vec![1];

    let from = current_page.saturating_sub(1).max(2);
    let to = (current_page + 1).min(total_pages.saturating_sub(1));
    for page in from..=to {
        pages.push(page);
    }

    if total_pages > 1 {
        pages.push(total_pages);
    }
    pages.sort_unstable();
    pages.dedup();

    let mut items = Vec::with_capacity(pages.len() + 2);
    let mut previous = 0;
    for page in pages {
        match page - previous {
            0 | 1 => {}
            2 => items.push(PageItem::Page(previous + 1)),
            _ => items.push(PageItem::Ellipsis),
        }
        items.push(PageItem::Page(page));
        previous = page;
    }
    items
}

/// Ticket dispenser for in-flight list fetches.
///
/// Each fetch takes a ticket before it starts; by the time its response
/// arrives, a newer fetch may have taken a later ticket, in which case the
/// stale response must be discarded instead of overwriting fresher state.
#[derive(Debug, Default)]
pub struct Generation {
    current: u32,
}

impl Generation {
    /// Issue a ticket for a fetch that is about to start, superseding every
    /// fetch still in flight.
    pub fn begin(&mut self) -> u32 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    /// Whether a completed fetch holding `ticket` is still the latest.
    pub fn is_current(&self, ticket: u32) -> bool {
        self.current == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[PageItem]) -> Vec<Option<u32>> {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page(n) => Some(*n),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn rejects_out_of_range_pages() {
        let pagination = Pagination {
            current_page: 3,
            total_pages: 5,
            total_items: 42,
        };

        assert!(!pagination.accepts(0));
        assert!(pagination.accepts(1));
        assert!(pagination.accepts(5));
        assert!(!pagination.accepts(6));
    }

    #[test]
    fn default_pagination_accepts_only_page_one() {
        let pagination = Pagination::default();
        assert!(pagination.accepts(1));
        assert!(!pagination.accepts(2));
        assert!(!pagination.has_previous());
        assert!(!pagination.has_next());
    }

    #[test]
    fn apply_replaces_tracked_position() {
        let mut pagination = Pagination::default();
        pagination.apply(&PageMeta {
            page: 4,
            pages: 9,
            total: 83,
        });

        assert_eq!(pagination.current_page, 4);
        assert_eq!(pagination.total_pages, 9);
        assert_eq!(pagination.total_items, 83);
        assert!(pagination.has_previous());
        assert!(pagination.has_next());
    }

    #[test]
    fn middle_page_gets_ellipses_on_both_sides() {
        let items = page_items(5, 10);
        assert_eq!(
            pages(&items),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
    }

    #[test]
    fn single_page_collapses_to_one_entry() {
        assert_eq!(pages(&page_items(1, 1)), vec![Some(1)]);
    }

    #[test]
    fn small_neighborhood_needs_no_ellipsis() {
        assert_eq!(pages(&page_items(2, 3)), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn first_page_of_many() {
        assert_eq!(
            pages(&page_items(1, 10)),
            vec![Some(1), Some(2), None, Some(10)]
        );
    }

    #[test]
    fn last_page_of_many() {
        assert_eq!(
            pages(&page_items(10, 10)),
            vec![Some(1), None, Some(9), Some(10)]
        );
    }

    #[test]
    fn gap_of_exactly_one_page_shows_the_page() {
        // 1 _ 3 4 5 ... 10: only page 2 is skipped between 1 and the
        // neighborhood, so it is rendered instead of an ellipsis.
        assert_eq!(
            pages(&page_items(4, 10)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(10)]
        );
    }

    #[test]
    fn contiguous_neighborhood_has_no_gaps() {
        assert_eq!(
            pages(&page_items(3, 5)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn output_is_strictly_increasing_without_adjacent_ellipses() {
        for total in 1..=20u32 {
            for current in 1..=total {
                let items = page_items(current, total);

                let mut last_page = 0;
                let mut last_was_ellipsis = false;
                for item in &items {
                    match item {
                        PageItem::Page(n) => {
                            assert!(*n > last_page, "pages must strictly increase");
                            last_page = *n;
                            last_was_ellipsis = false;
                        }
                        PageItem::Ellipsis => {
                            assert!(!last_was_ellipsis, "no two consecutive ellipses");
                            last_was_ellipsis = true;
                        }
                    }
                }

                // First and last page always present, current always present.
                assert!(items.contains(&PageItem::Page(1)));
                assert!(items.contains(&PageItem::Page(total)));
                assert!(items.contains(&PageItem::Page(current)));
            }
        }
    }

    #[test]
    fn generation_discards_superseded_tickets() {
        let mut generation = Generation::default();

        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn fetch_state_defaults_to_idle() {
        assert_eq!(FetchState::default(), FetchState::Idle);
        assert!(FetchState::Loading.is_loading());
        assert!(!FetchState::Loaded.is_loading());
    }
}
