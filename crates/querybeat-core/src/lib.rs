//! Schema browsing and query generation for GraphQL APIs.
//!
//! [`sdl::parse_sdl`] reads schema text into [`types::TypeDefinition`]s,
//! [`SchemaCatalog`] indexes them by name, and
//! [`query_gen::QueryGenerator`] turns one of their fields into a runnable
//! query document.
//!
//! ```
//! use querybeat_core::SchemaCatalog;
//! use querybeat_core::query_gen::generate_query;
//! use std::collections::HashMap;
//!
//! let catalog = SchemaCatalog::from_sdl("
//!     type Query {
//!       continent(code: ID!): Continent
//!     }
//! ");
//! let field = catalog.find_field("Query.continent").unwrap();
//! let query = generate_query(field, &HashMap::new());
//! assert!(query.contains(r#"continent(code: "NA")"#));
//! ```

mod catalog_lookup_error;
mod load_state;
mod operation_kind;
pub mod query_gen;
mod schema_catalog;
pub mod sdl;
pub mod types;

pub use catalog_lookup_error::CatalogLookupError;
pub use load_state::LoadState;
pub use operation_kind::OperationKind;
pub use schema_catalog::SchemaCatalog;

#[cfg(test)]
mod tests;
