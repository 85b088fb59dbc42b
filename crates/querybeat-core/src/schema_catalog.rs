use crate::CatalogLookupError;
use crate::OperationKind;
use crate::sdl;
use crate::types::Field;
use crate::types::TypeDefinition;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, CatalogLookupError>;

/// The type definitions of one schema, indexed by name in source order.
///
/// If a name is defined more than once, the later definition replaces the
/// earlier one but keeps the earlier one's position.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaCatalog {
    types: IndexMap<String, TypeDefinition>,
}

impl SchemaCatalog {
    pub fn new(definitions: Vec<TypeDefinition>) -> Self {
        let mut types = IndexMap::with_capacity(definitions.len());
        for definition in definitions {
            if let Some(replaced) = types.insert(definition.name().to_string(), definition) {
                log::debug!("Type `{}` is defined more than once; keeping the last.", replaced.name());
            }
        }
        Self { types }
    }

    pub fn from_sdl(schema_text: &str) -> Self {
        Self::new(sdl::parse_sdl(schema_text))
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeDefinition> {
        self.types.get(type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// The root type for `kind`, if the schema defines one.
    pub fn root_operation(&self, kind: OperationKind) -> Option<&TypeDefinition> {
        self.types.get(kind.root_type_name())
            .filter(|def| def.kind() == kind.type_kind())
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    /// All types except those reserved for introspection (`__Schema`,
    /// `__Type`, ...).
    pub fn user_defined_types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types().filter(|def| !def.is_introspection_type())
    }

    /// Resolve a `Type.field` path, e.g. `Query.continent`.
    pub fn find_field(&self, path: &str) -> Result<&Field> {
        let Some((type_name, field_name)) = path.split_once('.')
            .map(|(type_name, field_name)| (type_name.trim(), field_name.trim()))
            .filter(|(type_name, field_name)| !type_name.is_empty() && !field_name.is_empty())
        else {
            return Err(CatalogLookupError::MalformedFieldPath {
                path: path.to_string(),
            });
        };

        let type_def = self.get(type_name).ok_or_else(|| {
            CatalogLookupError::UnknownType {
                type_name: type_name.to_string(),
            }
        })?;

        if !type_def.kind().has_fields() {
            return Err(CatalogLookupError::TypeHasNoFields {
                type_name: type_name.to_string(),
                kind: type_def.kind(),
            });
        }

        type_def.field(field_name).ok_or_else(|| {
            CatalogLookupError::UnknownField {
                type_name: type_name.to_string(),
                field_name: field_name.to_string(),
            }
        })
    }
}
