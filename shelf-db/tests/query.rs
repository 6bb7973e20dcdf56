//! Compiled browse queries executed against a real database.

use std::collections::BTreeSet;

use shelf_catalog::*;
use shelf_db::*;

fn series(title_en: &str, title_jp: &str) -> Series {
    Series {
        id: Series::UNASSIGNED_ID,
        primary_language: if title_en.is_empty() {
            Language::Japanese
        } else {
            Language::English
        },
        title_en: title_en.to_string(),
        title_jp: title_jp.to_string(),
        description: String::new(),
        book_type: BookType::Manga,
        author_status: AuthorStatus::InProduction,
        total_volumes: String::new(),
        is_on_wishlist: false,
        user_status: UserStatus::Reading,
        volumes_owned: "1".to_string(),
        priority: Priority::Nil,
        rating: 0,
        notes: String::new(),
    }
}

fn run(conn: &rusqlite::Connection, filters: &FilterState, offset: u32) -> Vec<Series> {
    fetch_by_query(conn, &compile_page(filters, offset)).unwrap()
}

/// One row per combination of book type, author status, user status, priority, placement.
fn seed_every_combination(conn: &rusqlite::Connection) -> usize {
    let mut n = 0;
    for &book_type in BookType::all() {
        for &author_status in AuthorStatus::all() {
            for &user_status in UserStatus::all() {
                for &priority in Priority::all() {
                    for &placement in ShelfPlacement::all() {
                        let s = Series {
                            book_type,
                            author_status,
                            user_status,
                            priority,
                            is_on_wishlist: placement.is_wishlist(),
                            rating: (n % 11) as u8,
                            ..series(&format!("Series {n}"), "")
                        };
                        insert_series(conn, &s).unwrap();
                        n += 1;
                    }
                }
            }
        }
    }
    n
}

#[test]
fn unfiltered_query_selects_everything_in_sort_order() {
    let conn = open_memory().unwrap();
    let total = seed_every_combination(&conn);

    for &sort in SortMode::all() {
        let filters = FilterState::new().with_sort(sort);
        assert_eq!(count_matching(&conn, &filters).unwrap() as usize, total);

        let mut all = fetch_all(&conn).unwrap();
        match sort {
            SortMode::Id => {}
            SortMode::AuthorStatus => all.sort_by_key(|s| (s.author_status, s.id)),
            SortMode::UserStatus => all.sort_by_key(|s| (s.user_status, s.id)),
            SortMode::Priority => all.sort_by_key(|s| (s.priority, s.id)),
            SortMode::Rating => all.sort_by_key(|s| (std::cmp::Reverse(s.rating), s.id)),
        }
        let expected: Vec<i64> = all.iter().take(PAGE_SIZE as usize).map(|s| s.id).collect();
        let got: Vec<i64> = run(&conn, &filters, 0).iter().map(|s| s.id).collect();
        assert_eq!(got, expected, "sort {:?}", sort);
    }
}

#[test]
fn empty_facet_matches_nothing_regardless_of_others() {
    let conn = open_memory().unwrap();
    seed_every_combination(&conn);

    let base = FilterState::new().with_search("series");

    let mut f = base.clone();
    f.placements = BTreeSet::new();
    assert_eq!(count_matching(&conn, &f).unwrap(), 0);

    let mut f = base.clone();
    f.book_types = BTreeSet::new();
    assert_eq!(count_matching(&conn, &f).unwrap(), 0);

    let mut f = base.clone();
    f.author_statuses = BTreeSet::new();
    assert_eq!(count_matching(&conn, &f).unwrap(), 0);

    let mut f = base.clone();
    f.user_statuses = BTreeSet::new();
    assert_eq!(count_matching(&conn, &f).unwrap(), 0);

    let mut f = base;
    f.priorities = BTreeSet::new();
    assert!(run(&conn, &f, 0).is_empty());
}

#[test]
fn facets_restrict_to_selected_values() {
    let conn = open_memory().unwrap();
    let total = seed_every_combination(&conn) as i64;

    let mut filters = FilterState::default();
    filters.book_types = [BookType::LightNovel].into_iter().collect();
    assert_eq!(count_matching(&conn, &filters).unwrap(), total / 2);

    filters.user_statuses = [UserStatus::Reading, UserStatus::Waiting].into_iter().collect();
    assert_eq!(count_matching(&conn, &filters).unwrap(), total / 2 / 3);

    filters.placements = [ShelfPlacement::Wishlist].into_iter().collect();
    let rows = run(&conn, &filters, 0);
    assert!(!rows.is_empty());
    for s in rows {
        assert_eq!(s.book_type, BookType::LightNovel);
        assert!(matches!(s.user_status, UserStatus::Reading | UserStatus::Waiting));
        assert!(s.is_on_wishlist);
    }
}

#[test]
fn rating_descending_scenario() {
    let conn = open_memory().unwrap();
    for rating in [3, 9, 5] {
        insert_series(&conn, &Series { rating, ..series("Rated", "") }).unwrap();
    }
    let filters = FilterState::new().with_sort(SortMode::Rating);
    let ratings: Vec<u8> = run(&conn, &filters, 0).iter().map(|s| s.rating).collect();
    assert_eq!(ratings, vec![9, 5, 3]);
}

#[test]
fn rating_range_is_inclusive() {
    let conn = open_memory().unwrap();
    for rating in 0..=10 {
        insert_series(&conn, &Series { rating, ..series("Rated", "") }).unwrap();
    }
    let mut filters = FilterState::default();
    filters.rating = RatingRange::new(4, 6);
    let ratings: Vec<u8> = run(&conn, &filters, 0).iter().map(|s| s.rating).collect();
    assert_eq!(ratings, vec![4, 5, 6]);
}

#[test]
fn search_scenario_matches_case_insensitively() {
    let conn = open_memory().unwrap();
    insert_series(&conn, &series("Naruto", "")).unwrap();
    insert_series(&conn, &series("Bleach", "")).unwrap();

    let rows = run(&conn, &FilterState::new().with_search("naruto"), 0);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title_en, "Naruto");
}

#[test]
fn search_matches_either_title() {
    let conn = open_memory().unwrap();
    insert_series(&conn, &series("", "Shingeki no Kyojin")).unwrap();
    insert_series(&conn, &series("Attack on Titan", "")).unwrap();
    insert_series(&conn, &series("Mushishi", "")).unwrap();

    assert_eq!(run(&conn, &FilterState::new().with_search("KYOJIN"), 0).len(), 1);
    assert_eq!(run(&conn, &FilterState::new().with_search("titan"), 0).len(), 1);
    assert_eq!(run(&conn, &FilterState::new().with_search("i"), 0).len(), 3);
}

#[test]
fn search_text_is_bound_not_interpolated() {
    let conn = open_memory().unwrap();
    insert_series(&conn, &series("JoJo's Bizarre Adventure", "")).unwrap();
    insert_series(&conn, &series("100% Orange Juice", "")).unwrap();
    insert_series(&conn, &series("1000 Cranes", "")).unwrap();

    assert_eq!(run(&conn, &FilterState::new().with_search("jojo's"), 0).len(), 1);
    assert_eq!(run(&conn, &FilterState::new().with_search("100%"), 0).len(), 1);
    assert!(
        run(&conn, &FilterState::new().with_search("x' OR '1'='1"), 0).is_empty(),
        "quote in search text must not alter the query"
    );
    assert!(
        run(&conn, &FilterState::new().with_search("'); DROP TABLE series; --"), 0).is_empty()
    );
    assert_eq!(fetch_all(&conn).unwrap().len(), 3);
}

#[test]
fn pages_partition_the_result() {
    let conn = open_memory().unwrap();
    for i in 0..25 {
        insert_series(&conn, &series(&format!("Vol {i}"), "")).unwrap();
    }
    let filters = FilterState::default();
    let page0 = run(&conn, &filters, 0);
    let page1 = run(&conn, &filters, PAGE_SIZE);
    let page2 = run(&conn, &filters, 2 * PAGE_SIZE);
    let page3 = run(&conn, &filters, 3 * PAGE_SIZE);
    assert_eq!((page0.len(), page1.len(), page2.len(), page3.len()), (10, 10, 5, 0));

    let mut ids: Vec<i64> = [page0, page1, page2]
        .iter()
        .flatten()
        .map(|s| s.id)
        .collect();
    let before = ids.clone();
    ids.dedup();
    assert_eq!(ids, before);
    assert_eq!(ids.len(), 25);
}
