//! Property tests for pagination and the exact-year filter

use folio_core::{filter_exact_year, BookSummary, Paginator, MAX_PAGE_BUTTONS, PAGE_SIZE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn total_pages_is_ceiling(len in 1usize..500) {
        let pages = Paginator::new(vec![(); len]);
        prop_assert_eq!(pages.total_pages(), (len + PAGE_SIZE - 1) / PAGE_SIZE);
    }

    #[test]
    fn out_of_range_page_is_noop(len in 1usize..500, start in 1usize..50, target in 0usize..100) {
        let mut pages = Paginator::new(vec![(); len]);
        pages.go_to_page(start);
        let before = pages.current_page();

        let moved = pages.go_to_page(target);
        let in_range = target >= 1 && target <= pages.total_pages();

        prop_assert_eq!(moved, in_range);
        if in_range {
            prop_assert_eq!(pages.current_page(), target);
        } else {
            prop_assert_eq!(pages.current_page(), before);
        }
        prop_assert!(pages.current_page() >= 1 && pages.current_page() <= pages.total_pages());
    }

    #[test]
    fn page_window_stays_in_bounds(len in 1usize..500, page in 1usize..50) {
        let mut pages = Paginator::new(vec![(); len]);
        pages.go_to_page(page);
        let window = pages.page_numbers();
        let total = pages.total_pages();

        prop_assert!(!window.is_empty());
        prop_assert!(window.len() <= MAX_PAGE_BUTTONS);
        prop_assert_eq!(window.len(), total.min(MAX_PAGE_BUTTONS));
        prop_assert!(window.contains(&pages.current_page()));
        prop_assert!(window[0] >= 1);
        prop_assert!(*window.last().unwrap() <= total);
        prop_assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn page_items_cover_list(len in 0usize..200) {
        let mut pages = Paginator::new((0..len).collect::<Vec<_>>());
        let mut seen = Vec::new();
        loop {
            prop_assert!(pages.page_items().len() <= PAGE_SIZE);
            seen.extend_from_slice(pages.page_items());
            if !pages.next_page() {
                break;
            }
        }
        prop_assert_eq!(seen, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn year_filter_is_exact(
        years in proptest::collection::vec(proptest::option::of(1990i32..2010), 0..60),
        wanted in 1990i32..2010
    ) {
        let books: Vec<BookSummary> = years
            .iter()
            .enumerate()
            .map(|(i, year)| {
                let book = BookSummary::new(format!("/works/OL{}W", i), "Book");
                match year {
                    Some(y) => book.with_year(*y),
                    None => book,
                }
            })
            .collect();
        let expected = years.iter().filter(|y| **y == Some(wanted)).count();

        let filtered = filter_exact_year(books, wanted);

        prop_assert_eq!(filtered.len(), expected);
        prop_assert!(filtered.iter().all(|b| b.first_publish_year == Some(wanted)));
    }
}
