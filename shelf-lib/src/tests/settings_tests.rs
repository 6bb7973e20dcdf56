use super::*;

#[test]
fn cli_override_wins() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.toml");
    save_database_path_at(&settings, Some(Path::new("/saved/shelf.db"))).unwrap();

    let resolved = resolve_database_path_at(&settings, Some(PathBuf::from("/cli/shelf.db")));
    assert_eq!(resolved, PathBuf::from("/cli/shelf.db"));
}

#[test]
fn saved_path_used_without_override() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("config").join("settings.toml");
    save_database_path_at(&settings, Some(Path::new("/saved/shelf.db"))).unwrap();

    assert_eq!(
        resolve_database_path_at(&settings, None),
        PathBuf::from("/saved/shelf.db")
    );
}

#[test]
fn falls_back_to_default_location() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("missing.toml");
    assert_eq!(
        resolve_database_path_at(&settings, None),
        default_database_path()
    );
    assert!(default_database_path().ends_with("shelf/shelf.db"));
}

#[test]
fn save_preserves_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.toml");
    std::fs::write(
        &settings,
        "[ui]\ntheme = \"dark\"\n\n[database]\nbackup = true\n",
    )
    .unwrap();

    save_database_path_at(&settings, Some(Path::new("/data/shelf.db"))).unwrap();

    let doc: toml::Value = std::fs::read_to_string(&settings).unwrap().parse().unwrap();
    assert_eq!(doc["ui"]["theme"].as_str(), Some("dark"));
    assert_eq!(doc["database"]["backup"].as_bool(), Some(true));
    assert_eq!(doc["database"]["path"].as_str(), Some("/data/shelf.db"));
    assert!(!settings.with_extension("toml.tmp").exists());
}

#[test]
fn clearing_removes_the_key() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.toml");
    save_database_path_at(&settings, Some(Path::new("/data/shelf.db"))).unwrap();
    save_database_path_at(&settings, None).unwrap();

    assert_eq!(load_database_path_at(&settings), None);
    let shown = load_settings_string_at(&settings).unwrap();
    assert!(!shown.contains("path"));
}

#[test]
fn empty_path_counts_as_unset() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.toml");
    std::fs::write(&settings, "[database]\npath = \"\"\n").unwrap();
    assert_eq!(load_database_path_at(&settings), None);
}
