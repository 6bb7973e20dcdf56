use super::*;

#[test]
fn truncate_keeps_short_strings() {
    assert_eq!(truncate_str("Bleach", 10), "Bleach");
    assert_eq!(truncate_str("", 3), "");
}

#[test]
fn truncate_appends_ellipsis() {
    assert_eq!(truncate_str("Naruto Shippuden", 10), "Naruto ...");
    assert_eq!(truncate_str("Naruto", 2), "Na");
}

#[test]
fn truncate_counts_characters_not_bytes() {
    assert_eq!(truncate_str("ナルト疾風伝", 5), "ナル...");
}

#[test]
fn browse_args_replace_only_given_filters() {
    use shelf_catalog::{BookType, FilterState, SortMode, UserStatus};

    use crate::cli_types::BrowseArgs;

    let mut filters = FilterState::default().with_search("old");
    list::apply_browse_args(
        &mut filters,
        BrowseArgs {
            sort: Some(SortMode::Rating),
            book_type: Some(vec![BookType::LightNovel]),
            user_status: Some(vec![]),
            max_rating: Some(7),
            ..BrowseArgs::default()
        },
    );

    assert_eq!(filters.search, "old");
    assert_eq!(filters.sort, SortMode::Rating);
    assert_eq!(filters.book_types.len(), 1);
    assert!(filters.book_types.contains(&BookType::LightNovel));
    assert!(filters.user_statuses.is_empty());
    assert!(!filters.user_statuses.contains(&UserStatus::Reading));
    assert_eq!((filters.rating.lo(), filters.rating.hi()), (0, 7));
    assert_eq!(filters.placements, shelf_catalog::full_set());
}

#[test]
fn fields_overwrite_only_given_draft_values() {
    use shelf_catalog::Priority;
    use shelf_lib::SeriesDraft;

    use crate::cli_types::SeriesFields;

    let mut draft = SeriesDraft::new();
    edit::apply_fields(
        &mut draft,
        SeriesFields {
            title_en: Some("Bleach".to_string()),
            wishlist: Some(true),
            priority: Some(Priority::Top),
            ..SeriesFields::default()
        },
    );

    assert_eq!(draft.title_en, "Bleach");
    assert!(draft.is_on_wishlist);
    assert_eq!(draft.priority, Priority::Top);
    assert_eq!(draft.volumes_owned, "1");
    assert!(draft.title_jp.is_empty());
}
