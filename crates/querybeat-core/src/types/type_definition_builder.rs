use crate::types::Argument;
use crate::types::Field;
use crate::types::TypeDefinition;
use crate::types::TypeKind;

/// Accumulates the members of a [`TypeDefinition`] while its body is being
/// read, then freezes them into an immutable value with
/// [`TypeDefinitionBuilder::build`].
#[derive(Debug)]
pub struct TypeDefinitionBuilder {
    name: String,
    kind: TypeKind,
    description: Option<String>,
    fields: Vec<Field>,
    input_fields: Vec<Argument>,
    possible_types: Vec<String>,
}

impl TypeDefinitionBuilder {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            fields: vec![],
            input_fields: vec![],
            possible_types: vec![],
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn add_field(&mut self, field: Field) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn add_input_field(&mut self, input_field: Argument) -> &mut Self {
        self.input_fields.push(input_field);
        self
    }

    pub fn add_possible_type(&mut self, type_name: impl Into<String>) -> &mut Self {
        self.possible_types.push(type_name.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> TypeDefinition {
        TypeDefinition {
            name: self.name,
            kind: self.kind,
            description: self.description,
            fields: self.fields,
            // Enum bodies and wrapper types are never read from SDL.
            enum_values: vec![],
            input_fields: self.input_fields,
            possible_types: self.possible_types,
            of_type: None,
        }
    }
}
