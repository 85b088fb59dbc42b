use indexmap::IndexMap;

/// Tables that steer [`QueryGenerator`](crate::query_gen::QueryGenerator).
///
/// The defaults describe the public countries API
/// (`https://countries.trevorblades.com/graphql`). Deserialized configs are
/// usually layered over the defaults with [`QueryGeneratorConfig::merge`].
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct QueryGeneratorConfig {
    /// Selection set emitted after a field, keyed by the field's bare return
    /// type name.
    pub selection_sets: IndexMap<String, String>,

    /// Placeholder literal used for an empty `code` argument, keyed by the
    /// name of the field the argument belongs to.
    pub code_placeholders: IndexMap<String, String>,
}
impl QueryGeneratorConfig {
    /// An empty config: no selection sets and no `code` placeholders.
    pub fn empty() -> Self {
        Self {
            selection_sets: IndexMap::new(),
            code_placeholders: IndexMap::new(),
        }
    }

    /// Layer `other` on top of `self`. Entries in `other` override entries
    /// with the same key.
    pub fn merge(mut self, other: QueryGeneratorConfig) -> Self {
        self.selection_sets.extend(other.selection_sets);
        self.code_placeholders.extend(other.code_placeholders);
        self
    }

    pub fn selection_set_for(&self, type_name: &str) -> Option<&str> {
        self.selection_sets.get(type_name).map(String::as_str)
    }

    pub fn code_placeholder_for(&self, field_name: &str) -> Option<&str> {
        self.code_placeholders.get(field_name).map(String::as_str)
    }
}
impl Default for QueryGeneratorConfig {
    fn default() -> Self {
        let selection_sets = [
            ("Country", "{ code name emoji capital continent { name } }"),
            ("Continent", "{ code name countries { name code } }"),
            ("Language", "{ code name native }"),
            ("State", "{ code name }"),
            ("Subdivision", "{ code name }"),
            ("User", "{ id name email }"),
        ];
        let code_placeholders = [
            ("continent", "\"NA\""),
            ("country", "\"US\""),
        ];

        Self {
            selection_sets: selection_sets.into_iter()
                .map(|(type_name, selection)| (type_name.to_string(), selection.to_string()))
                .collect(),
            code_placeholders: code_placeholders.into_iter()
                .map(|(field_name, literal)| (field_name.to_string(), literal.to_string()))
                .collect(),
        }
    }
}
