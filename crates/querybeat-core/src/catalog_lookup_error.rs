use crate::types::TypeKind;

/// Failure to resolve a `Type.field` path against a
/// [`SchemaCatalog`](crate::SchemaCatalog).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CatalogLookupError {
    #[error("Expected a field path of the form `Type.field`, got `{path}`")]
    MalformedFieldPath {
        path: String,
    },

    #[error("No type named `{type_name}` is defined in the schema")]
    UnknownType {
        type_name: String,
    },

    #[error("`{type_name}` is a {kind} type and has no fields")]
    TypeHasNoFields {
        type_name: String,
        kind: TypeKind,
    },

    #[error("`{type_name}` has no field named `{field_name}`")]
    UnknownField {
        type_name: String,
        field_name: String,
    },
}
