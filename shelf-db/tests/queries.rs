use std::collections::BTreeSet;

use shelf_catalog::*;
use shelf_db::*;

fn series(title_en: &str, rating: u8) -> Series {
    Series {
        id: Series::UNASSIGNED_ID,
        primary_language: Language::English,
        title_en: title_en.to_string(),
        title_jp: String::new(),
        description: String::new(),
        book_type: BookType::Manga,
        author_status: AuthorStatus::InProduction,
        total_volumes: String::new(),
        is_on_wishlist: false,
        user_status: UserStatus::Reading,
        volumes_owned: "1".to_string(),
        priority: Priority::Nil,
        rating,
        notes: String::new(),
    }
}

#[test]
fn fetch_all_is_ordered_by_id() {
    let conn = open_memory().unwrap();
    for (id, title) in [(3, "C"), (1, "A"), (2, "B")] {
        insert_series(&conn, &Series { id, ..series(title, 0) }).unwrap();
    }
    let ids: Vec<i64> = fetch_all(&conn).unwrap().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn malformed_ordinals_decode_to_defaults() {
    let conn = open_memory().unwrap();
    conn.execute(
        "INSERT INTO series (id, primary_language, title_en, book_type, author_status,
             user_status, priority, rating)
         VALUES (1, 7, 'Broken', 9, -2, 40, 12, 3)",
        [],
    )
    .unwrap();

    let s = fetch_series(&conn, 1).unwrap();
    assert_eq!(s.primary_language, Language::English);
    assert_eq!(s.book_type, BookType::Manga);
    assert_eq!(s.author_status, AuthorStatus::InProduction);
    assert_eq!(s.user_status, UserStatus::Reading);
    assert_eq!(s.priority, Priority::Nil);
    assert_eq!(s.rating, 3);
}

#[test]
fn out_of_range_rating_is_clamped() {
    let conn = open_memory().unwrap();
    conn.execute(
        "INSERT INTO series (id, title_en, rating) VALUES (1, 'Loud', 400)",
        [],
    )
    .unwrap();
    assert_eq!(fetch_series(&conn, 1).unwrap().rating, 10);
}

#[test]
fn count_matching_respects_filters() {
    let conn = open_memory().unwrap();
    insert_series(&conn, &series("Berserk", 10)).unwrap();
    insert_series(&conn, &series("Claymore", 6)).unwrap();
    insert_series(
        &conn,
        &Series {
            is_on_wishlist: true,
            ..series("Dorohedoro", 0)
        },
    )
    .unwrap();

    assert_eq!(count_matching(&conn, &FilterState::default()).unwrap(), 3);

    let mut filters = FilterState::default();
    filters.placements = [ShelfPlacement::Library].into_iter().collect();
    assert_eq!(count_matching(&conn, &filters).unwrap(), 2);

    filters.rating = RatingRange::new(7, 10);
    assert_eq!(count_matching(&conn, &filters).unwrap(), 1);

    filters.placements = BTreeSet::new();
    assert_eq!(count_matching(&conn, &filters).unwrap(), 0);
}

#[test]
fn shelf_stats_counts_placements_and_statuses() {
    let conn = open_memory().unwrap();
    insert_series(&conn, &series("A", 0)).unwrap();
    insert_series(
        &conn,
        &Series {
            user_status: UserStatus::Completed,
            ..series("B", 0)
        },
    )
    .unwrap();
    insert_series(
        &conn,
        &Series {
            is_on_wishlist: true,
            ..series("C", 0)
        },
    )
    .unwrap();

    let stats = shelf_stats(&conn).unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.library, 2);
    assert_eq!(stats.wishlist, 1);
    assert_eq!(stats.by_user_status.len(), UserStatus::all().len());
    assert_eq!(stats.by_user_status[0], (UserStatus::Reading, 1));
    assert_eq!(stats.by_user_status[2], (UserStatus::Completed, 1));
    assert_eq!(stats.by_user_status[3], (UserStatus::Planning, 0));
}
