//! A pragmatic, line-oriented reader for GraphQL schema definition language.
//!
//! The reader trades grammar fidelity for resilience against partial or
//! hand-edited schema text. It never fails: lines it does not understand are
//! skipped, and an unterminated type body is still emitted at end of input.
//!
//! Not supported: directives, implements-lists, multi-line (`"""`)
//! descriptions, nested braces inside a type body, and default values that
//! contain commas inside an argument list. Enum values are not collected.

mod line_patterns;
mod sdl_parser;

pub use sdl_parser::parse_sdl;
pub use sdl_parser::SdlParser;

#[cfg(test)]
mod tests;
