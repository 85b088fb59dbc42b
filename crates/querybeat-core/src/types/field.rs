use crate::types::Argument;
use crate::types::TypeSignature;
use crate::types::type_signature;

/// A field defined on an object, interface, or root operation type.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub name: String,
    /// The referenced type's bare name (no `[`, `]`, or `!`).
    pub type_name: String,
    pub is_list: bool,
    pub is_non_null: bool,
    pub args: Vec<Argument>,
    pub description: Option<String>,
}
impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_list: false,
            is_non_null: false,
            args: vec![],
            description: None,
        }
    }

    pub(crate) fn from_signature(
        name: &str,
        signature: TypeSignature,
        args: Vec<Argument>,
    ) -> Self {
        Self {
            name: name.to_string(),
            type_name: signature.type_name,
            is_list: signature.is_list,
            is_non_null: signature.is_non_null,
            args,
            description: None,
        }
    }

    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    pub fn non_null(mut self) -> Self {
        self.is_non_null = true;
        self
    }

    pub fn with_arg(mut self, arg: Argument) -> Self {
        self.args.push(arg);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The field's type as it would be written in SDL.
    ///
    /// Note that only one list/non-null pair is tracked, so `[T!]!` formats
    /// as `[T]!`.
    pub fn formatted_type(&self) -> String {
        type_signature::format_type_ref(
            &self.type_name,
            self.is_list,
            self.is_non_null,
        )
    }

    pub fn signature(&self) -> TypeSignature {
        TypeSignature::new(&self.type_name, self.is_list, self.is_non_null)
    }
}
