//! Turns a single field definition plus raw, user-entered argument text into
//! an executable query document.

mod argument_literal;
mod query_generator;
mod query_generator_config;

pub use query_generator::generate_query;
pub use query_generator::QueryGenerator;
pub use query_generator_config::QueryGeneratorConfig;

#[cfg(test)]
mod tests;
