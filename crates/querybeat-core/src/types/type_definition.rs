use crate::types::Argument;
use crate::types::Field;
use crate::types::TypeKind;

/// One named type from a schema.
///
/// Only the member list matching [`TypeDefinition::kind`] is meaningful; the
/// others are left empty:
///
/// | kind                                                   | members            |
/// |--------------------------------------------------------|--------------------|
/// | `Object`, `Interface`, `Query`, `Mutation`, `Subscription` | `fields`       |
/// | `InputObject`                                          | `input_fields`     |
/// | `Union`                                                | `possible_types`   |
/// | `Enum`                                                 | `enum_values`      |
/// | `List`, `NonNull`                                      | `of_type`          |
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeDefinition {
    pub(super) name: String,
    pub(super) kind: TypeKind,
    pub(super) description: Option<String>,
    pub(super) fields: Vec<Field>,
    pub(super) enum_values: Vec<String>,
    pub(super) input_fields: Vec<Argument>,
    pub(super) possible_types: Vec<String>,
    pub(super) of_type: Option<String>,
}
impl TypeDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Always empty for parsed schemas: enum bodies are not captured.
    pub fn enum_values(&self) -> &[String] {
        &self.enum_values
    }

    pub fn input_fields(&self) -> &[Argument] {
        &self.input_fields
    }

    pub fn possible_types(&self) -> &[String] {
        &self.possible_types
    }

    pub fn of_type(&self) -> Option<&str> {
        self.of_type.as_deref()
    }

    /// Names beginning with `__` are reserved for introspection.
    pub fn is_introspection_type(&self) -> bool {
        self.name.starts_with("__")
    }
}
