use crate::query_gen::QueryGeneratorConfig;

#[test]
fn default_tables_cover_countries_api() {
    let config = QueryGeneratorConfig::default();

    assert_eq!(
        config.selection_set_for("Continent"),
        Some("{ code name countries { name code } }"),
    );
    assert_eq!(config.selection_set_for("Subdivision"), Some("{ code name }"));
    assert_eq!(config.selection_set_for("Planet"), None);
    assert_eq!(config.code_placeholder_for("continent"), Some("\"NA\""));
    assert_eq!(config.code_placeholder_for("country"), Some("\"US\""));
    assert_eq!(config.code_placeholder_for("language"), None);
}

#[test]
fn merge_overrides_matching_keys_and_keeps_the_rest() {
    let mut overrides = QueryGeneratorConfig::empty();
    overrides.selection_sets.insert("User".to_string(), "{ id login }".to_string());
    overrides.selection_sets.insert("Repo".to_string(), "{ id name }".to_string());

    let merged = QueryGeneratorConfig::default().merge(overrides);

    assert_eq!(merged.selection_set_for("User"), Some("{ id login }"));
    assert_eq!(merged.selection_set_for("Repo"), Some("{ id name }"));
    assert_eq!(merged.selection_set_for("Country"), QueryGeneratorConfig::default().selection_set_for("Country"));
}

#[test]
fn empty_config_has_no_entries() {
    let config = QueryGeneratorConfig::empty();

    assert!(config.selection_sets.is_empty());
    assert!(config.code_placeholders.is_empty());
}
