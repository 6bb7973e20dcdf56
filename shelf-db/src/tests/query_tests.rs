use std::collections::BTreeSet;

use shelf_catalog::{BookType, Priority, RatingRange, UserStatus};

use super::*;

#[test]
fn default_filters_only_restrict_rating() {
    let q = compile_page(&FilterState::default(), 0);
    assert_eq!(
        q.sql(),
        format!(
            "SELECT {SERIES_COLUMNS} FROM series WHERE rating BETWEEN ?1 AND ?2 ORDER BY id ASC LIMIT ?3 OFFSET ?4"
        )
    );
    assert_eq!(
        q.params(),
        &[
            Value::Integer(0),
            Value::Integer(10),
            Value::Integer(10),
            Value::Integer(0)
        ]
    );
}

#[test]
fn offset_is_bound() {
    let q = compile_page(&FilterState::default(), 30);
    assert_eq!(q.params().last(), Some(&Value::Integer(30)));
}

#[test]
fn sort_modes_pick_their_column() {
    let cases = [
        (SortMode::Id, "ORDER BY id ASC"),
        (SortMode::AuthorStatus, "ORDER BY author_status ASC, id ASC"),
        (SortMode::UserStatus, "ORDER BY user_status ASC, id ASC"),
        (SortMode::Priority, "ORDER BY priority ASC, id ASC"),
        (SortMode::Rating, "ORDER BY rating DESC, id ASC"),
    ];
    for (sort, expected) in cases {
        let q = compile_page(&FilterState::new().with_sort(sort), 0);
        assert!(q.sql().contains(expected), "{sort:?}: {}", q.sql());
    }
}

#[test]
fn partial_facet_binds_selected_ordinals() {
    let mut filters = FilterState::default();
    filters.user_statuses = [UserStatus::Waiting, UserStatus::Planning]
        .into_iter()
        .collect();
    let q = compile_page(&filters, 0);
    assert!(q.sql().contains("user_status IN (?1, ?2)"), "{}", q.sql());
    assert_eq!(q.params()[0], Value::Integer(1));
    assert_eq!(q.params()[1], Value::Integer(3));
    assert!(q.sql().contains("rating BETWEEN ?3 AND ?4"));
}

#[test]
fn empty_facet_never_matches() {
    let mut filters = FilterState::default();
    filters.book_types = BTreeSet::<BookType>::new();
    let q = compile_count(&filters);
    assert_eq!(
        q.sql(),
        "SELECT COUNT(*) FROM series WHERE 0 = 1 AND rating BETWEEN ?1 AND ?2"
    );
}

#[test]
fn clauses_are_joined_with_and() {
    let mut filters = FilterState::default();
    filters.priorities = [Priority::Top].into_iter().collect();
    filters.rating = RatingRange::new(5, 8);
    filters.search = "One".to_string();
    let q = compile_count(&filters);
    assert_eq!(
        q.sql(),
        "SELECT COUNT(*) FROM series WHERE priority IN (?1) AND rating BETWEEN ?2 AND ?3 \
         AND (LOWER(title_en) LIKE ?4 ESCAPE '\\' OR LOWER(title_jp) LIKE ?4 ESCAPE '\\')"
    );
    assert_eq!(
        q.params(),
        &[
            Value::Integer(0),
            Value::Integer(5),
            Value::Integer(8),
            Value::Text("%one%".to_string())
        ]
    );
}

#[test]
fn blank_search_is_omitted() {
    let q = compile_count(&FilterState::new().with_search("  \t"));
    assert!(!q.sql().contains("LIKE"));
}

#[test]
fn like_pattern_escapes_wildcards() {
    assert_eq!(like_pattern("100%"), "%100\\%%");
    assert_eq!(like_pattern("a_b"), "%a\\_b%");
    assert_eq!(like_pattern("C:\\"), "%c:\\\\%");
    assert_eq!(like_pattern("O'Neil"), "%o'neil%");
}
