/// The category a [`TypeDefinition`](crate::types::TypeDefinition) belongs to.
///
/// [`TypeKind::Query`], [`TypeKind::Mutation`], and [`TypeKind::Subscription`]
/// are selected by the *name* of an object type rather than by any SDL
/// keyword.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    Mutation,
    NonNull,
    Object,
    Query,
    Scalar,
    Subscription,
    Union,
}
impl TypeKind {
    /// Classify a type introduced by `keyword` (`type`, `input`, `scalar`,
    /// `enum`, `interface`, or `union`) and named `type_name`.
    ///
    /// Unrecognized keywords fall back to [`TypeKind::Object`].
    pub fn classify(keyword: &str, type_name: &str) -> Self {
        match type_name {
            "Query" => Self::Query,
            "Mutation" => Self::Mutation,
            "Subscription" => Self::Subscription,
            _ => Self::from_sdl_keyword(keyword),
        }
    }

    pub fn from_sdl_keyword(keyword: &str) -> Self {
        match keyword {
            "enum" => Self::Enum,
            "input" => Self::InputObject,
            "interface" => Self::Interface,
            "scalar" => Self::Scalar,
            "union" => Self::Union,
            _ => Self::Object,
        }
    }

    /// Kinds whose definitions carry an ordered list of
    /// [`Field`](crate::types::Field)s.
    pub fn has_fields(&self) -> bool {
        matches!(
            self,
            Self::Interface
                | Self::Mutation
                | Self::Object
                | Self::Query
                | Self::Subscription
        )
    }

    pub fn is_root_operation(&self) -> bool {
        matches!(self, Self::Mutation | Self::Query | Self::Subscription)
    }

    /// Scalar and union definitions have no `{ ... }` body and end on the
    /// line that introduces them.
    pub fn is_self_terminating(&self) -> bool {
        matches!(self, Self::Scalar | Self::Union)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "Enum",
            Self::InputObject => "InputObject",
            Self::Interface => "Interface",
            Self::List => "List",
            Self::Mutation => "Mutation",
            Self::NonNull => "NonNull",
            Self::Object => "Object",
            Self::Query => "Query",
            Self::Scalar => "Scalar",
            Self::Subscription => "Subscription",
            Self::Union => "Union",
        }
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
