use crate::types::TypeSignature;

/// An argument accepted by a [`Field`](crate::types::Field), or one of the
/// input fields of an input object type.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub name: String,
    pub type_name: String,
    /// Raw, unparsed literal text following `=` in the schema.
    pub default_value: Option<String>,
    pub is_non_null: bool,
}
impl Argument {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            default_value: None,
            is_non_null: false,
        }
    }

    pub(crate) fn from_signature(
        name: &str,
        signature: TypeSignature,
        default_value: Option<String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            type_name: signature.type_name,
            default_value,
            is_non_null: signature.is_non_null,
        }
    }

    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn non_null(mut self) -> Self {
        self.is_non_null = true;
        self
    }

    /// The argument's type as it would be written in SDL, including any
    /// default value (e.g. `Int! = 10`).
    pub fn formatted_type(&self) -> String {
        let mut formatted = self.type_name.clone();
        if self.is_non_null {
            formatted.push('!');
        }
        if let Some(default_value) = &self.default_value {
            formatted.push_str(" = ");
            formatted.push_str(default_value);
        }
        formatted
    }
}
