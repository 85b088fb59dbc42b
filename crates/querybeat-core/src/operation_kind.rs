use crate::types::TypeKind;

/// The three root operation types a schema may define.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The conventional name of the root type for this operation kind.
    pub fn root_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }

    pub fn type_kind(&self) -> TypeKind {
        match self {
            Self::Mutation => TypeKind::Mutation,
            Self::Query => TypeKind::Query,
            Self::Subscription => TypeKind::Subscription,
        }
    }
}
