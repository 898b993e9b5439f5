use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAGE_SIZE;

/// Offset window over the user listing.
///
/// `skip` only ever moves in steps of `limit`, so it stays a multiple of it.
/// `total` is whatever the last listing response reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationCursor {
    pub skip: u64,
    pub limit: u64,
    pub total: u64,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationCursor {
    /// Cursor at the first page. A zero limit is raised to one.
    pub fn new(limit: u64) -> Self {
        Self {
            skip: 0,
            limit: limit.max(1),
            total: 0,
        }
    }

    pub fn previous(&mut self) {
        self.skip = self.skip.saturating_sub(self.limit);
    }

    /// Advances one page without consulting `total`; the backend answers a
    /// window past the end with an empty page.
    pub fn next(&mut self) {
        self.skip = self.skip.saturating_add(self.limit);
    }

    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    pub fn has_previous(&self) -> bool {
        self.skip > 0
    }

    pub fn has_next(&self) -> bool {
        self.skip + self.limit < self.total
    }

    /// One-based index of the current page.
    pub fn current_page(&self) -> u64 {
        self.skip / self.limit + 1
    }

    /// Number of pages, never less than one.
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.limit).max(1)
    }

    /// e.g. `2 of 3`
    pub fn page_label(&self) -> String {
        format!("{} of {}", self.current_page(), self.total_pages())
    }

    /// e.g. `Showing 51 to 100 of 120 results`
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "No results".to_string();
        }
        if self.skip >= self.total {
            return format!("No results on this page ({} total)", self.total);
        }
        let last = (self.skip + self.limit).min(self.total);
        format!("Showing {} to {} of {} results", self.skip + 1, last, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    fn cursor(skip: u64, limit: u64, total: u64) -> PaginationCursor {
        PaginationCursor { skip, limit, total }
    }

    #[test]
    fn test_second_of_three_pages() {
        let mut c = cursor(50, 50, 120);
        assert_eq!(c.page_label(), "2 of 3");
        assert!(c.has_next());
        assert!(c.has_previous());

        c.next();
        assert_eq!(c.skip, 100);
        assert_eq!(c.page_label(), "3 of 3");
        assert!(!c.has_next());
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let mut c = cursor(0, 50, 120);
        c.previous();
        assert_eq!(c, cursor(0, 50, 120));
        assert!(!c.has_previous());
    }

    #[test]
    fn test_next_is_not_clamped() {
        let mut c = cursor(100, 50, 120);
        c.next();
        assert_eq!(c.skip, 150);
        assert_eq!(c.page_label(), "4 of 3");
    }

    #[test]
    fn test_zero_limit_is_raised() {
        let c = PaginationCursor::new(0);
        assert_eq!(c.limit, 1);
        assert_eq!(c.total_pages(), 1);
    }

    #[test_case(0, 50, 0, "No results" ; "empty listing")]
    #[test_case(0, 50, 120, "Showing 1 to 50 of 120 results" ; "first page")]
    #[test_case(100, 50, 120, "Showing 101 to 120 of 120 results" ; "last partial page")]
    #[test_case(150, 50, 120, "No results on this page (120 total)" ; "past the end")]
    fn test_range_label(skip: u64, limit: u64, total: u64, expected: &str) {
        assert_eq!(cursor(skip, limit, total).range_label(), expected);
    }

    #[test_case(0, 1 ; "nothing")]
    #[test_case(50, 1 ; "exactly one page")]
    #[test_case(51, 2 ; "one over")]
    #[test_case(120, 3 ; "three pages")]
    fn test_total_pages(total: u64, expected: u64) {
        assert_eq!(cursor(0, 50, total).total_pages(), expected);
    }

    #[derive(Debug, Clone)]
    enum Move {
        Previous,
        Next,
        Total(u64),
    }

    fn moves() -> impl Strategy<Value = Vec<Move>> {
        prop::collection::vec(
            prop_oneof![
                Just(Move::Previous),
                Just(Move::Next),
                (0u64..1_000).prop_map(Move::Total),
            ],
            0..60,
        )
    }

    proptest! {
        #[test]
        fn prop_skip_stays_aligned(limit in 1u64..200, moves in moves()) {
            let mut c = PaginationCursor::new(limit);
            for m in moves {
                match m {
                    Move::Previous => c.previous(),
                    Move::Next => c.next(),
                    Move::Total(t) => c.set_total(t),
                }
                prop_assert_eq!(c.skip % c.limit, 0);
                prop_assert_eq!(c.limit, limit);
            }
        }

        #[test]
        fn prop_previous_at_zero_is_noop(limit in 1u64..200, total in 0u64..1_000) {
            let mut c = cursor(0, limit, total);
            c.previous();
            prop_assert_eq!(c, cursor(0, limit, total));
        }

        #[test]
        fn prop_next_then_previous_returns(limit in 1u64..200, page in 0u64..50, total in 0u64..10_000) {
            let start = cursor(page * limit, limit, total);
            let mut c = start;
            c.next();
            c.previous();
            prop_assert_eq!(c, start);
        }
    }
}
