use crate::sdl::line_patterns;
use crate::types::Argument;
use crate::types::Field;
use crate::types::TypeDefinition;
use crate::types::TypeDefinitionBuilder;
use crate::types::TypeKind;
use crate::types::TypeSignature;

/// Parse a schema document into its type definitions, in source order.
///
/// ```
/// use querybeat_core::sdl::parse_sdl;
/// use querybeat_core::types::TypeKind;
///
/// let types = parse_sdl("
///     type Query {
///       continent(code: ID!): Continent
///     }
///     union SearchResult = Country | Continent
/// ");
/// assert_eq!(types.len(), 2);
/// assert_eq!(types[0].kind(), TypeKind::Query);
/// assert_eq!(types[1].possible_types(), ["Country", "Continent"]);
/// ```
pub fn parse_sdl(schema_text: &str) -> Vec<TypeDefinition> {
    let mut parser = SdlParser::new();
    for line in schema_text.lines() {
        parser.read_line(line);
    }
    let definitions = parser.finish();
    log::debug!("Parsed {} type definitions from SDL.", definitions.len());
    definitions
}

/// Incremental, line-at-a-time SDL reader.
///
/// [`parse_sdl`] is a thin wrapper that feeds every line of a document
/// through [`SdlParser::read_line`] and then calls [`SdlParser::finish`].
#[derive(Debug, Default)]
pub struct SdlParser {
    current: Option<TypeDefinitionBuilder>,
    definitions: Vec<TypeDefinition>,
    in_block: bool,
    pending_description: Option<String>,
}

impl SdlParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one raw line of schema text.
    ///
    /// Surrounding whitespace is ignored, as are blank lines, `#` comments,
    /// and lines opening or closing a `"""` block string.
    pub fn read_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || line.starts_with("\"\"\"") || line.starts_with('#') {
            return;
        }

        if let Some(caps) = line_patterns::DESCRIPTION.captures(line) {
            self.pending_description = Some(caps[1].trim().to_string());
            return;
        }

        if let Some(caps) = line_patterns::TYPE_INTRO.captures(line) {
            self.begin_type(&caps[1], &caps[2], line);
        } else if self.in_block && line.contains('{') {
            // Braces in a body line belong to a default such as `= {}`.
            self.read_member(line);
        } else if line.contains('{') && self.current.is_some() {
            self.in_block = true;
        } else if line.contains('}') && self.current.is_some() {
            self.close_block();
        } else if self.in_block {
            self.read_member(line);
        } else {
            log::trace!("Skipping SDL line outside of any type body: `{line}`");
        }
    }

    /// Flush any still-open type definition and return everything parsed.
    pub fn finish(mut self) -> Vec<TypeDefinition> {
        if let Some(builder) = self.current.take() {
            log::trace!(
                "Reached end of input inside `{}`; keeping it anyway.",
                builder.name(),
            );
            self.definitions.push(builder.build());
        }
        self.definitions
    }

    fn begin_type(&mut self, keyword: &str, type_name: &str, line: &str) {
        if let Some(previous) = self.current.take() {
            if self.in_block || previous.kind().is_self_terminating() {
                log::trace!(
                    "Dropping `{}`: a new type began before its body closed.",
                    previous.name(),
                );
            } else {
                self.definitions.push(previous.build());
            }
        }

        let kind = TypeKind::classify(keyword, type_name);
        let mut builder = TypeDefinitionBuilder::new(type_name, kind);
        if let Some(description) = self.pending_description.take() {
            builder.set_description(description);
        }

        if kind.is_self_terminating() {
            if kind == TypeKind::Union
                && let Some((_, members)) = line.split_once('=') {
                members.split('|')
                    .map(str::trim)
                    .filter(|member| !member.is_empty())
                    .for_each(|member| {
                        builder.add_possible_type(member);
                    });
            }
            self.definitions.push(builder.build());
            self.in_block = false;
        } else {
            self.in_block = line.contains('{');
            self.current = Some(builder);
        }
    }

    fn close_block(&mut self) {
        self.in_block = false;
        self.pending_description = None;
        if let Some(builder) = self.current.take() {
            self.definitions.push(builder.build());
        }
    }

    fn read_member(&mut self, line: &str) {
        let Some(builder) = self.current.as_mut() else {
            return;
        };
        let Some(caps) = line_patterns::FIELD.captures(line) else {
            log::trace!(
                "No field found on line `{line}` in `{}`.",
                builder.name(),
            );
            return;
        };

        let name = &caps[1];
        let signature = TypeSignature::parse(&caps[3]);
        let default_value = caps.get(4)
            .map(|m| m.as_str().trim())
            .filter(|default| !default.is_empty())
            .map(str::to_string);
        let description = self.pending_description.take();

        match builder.kind() {
            kind if kind.has_fields() => {
                let args = caps.get(2)
                    .map(|m| parse_arguments(m.as_str()))
                    .unwrap_or_default();
                let mut field = Field::from_signature(name, signature, args);
                field.description = description;
                builder.add_field(field);
            },

            TypeKind::InputObject => {
                builder.add_input_field(Argument::from_signature(
                    name,
                    signature,
                    default_value,
                ));
            },

            other_kind => log::trace!(
                "Ignoring member `{name}` of {other_kind} type `{}`.",
                builder.name(),
            ),
        }
    }
}

/// Split a raw `a: Int, b: String = "x"` argument list on commas and parse
/// each piece. Pieces that do not look like an argument are skipped.
fn parse_arguments(raw_args: &str) -> Vec<Argument> {
    raw_args.split(',')
        .filter_map(|piece| {
            let caps = line_patterns::ARGUMENT.captures(piece.trim())?;
            let default_value = caps.get(3)
                .map(|m| m.as_str().trim())
                .filter(|default| !default.is_empty())
                .map(str::to_string);
            Some(Argument::from_signature(
                &caps[1],
                TypeSignature::parse(&caps[2]),
                default_value,
            ))
        })
        .collect()
}
