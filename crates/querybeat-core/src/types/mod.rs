mod argument;
mod field;
mod type_definition;
mod type_definition_builder;
mod type_kind;
pub mod type_signature;

pub use argument::Argument;
pub use field::Field;
pub use type_definition::TypeDefinition;
pub use type_definition_builder::TypeDefinitionBuilder;
pub use type_kind::TypeKind;
pub use type_signature::TypeSignature;
