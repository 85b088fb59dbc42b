use crate::sdl::SdlParser;
use crate::sdl::parse_sdl;
use crate::types::Argument;
use crate::types::TypeKind;

#[test]
fn object_type_with_non_null_and_list_fields() {
    let types = parse_sdl("
        type T {
          f: X!
          g: [Y]
        }
    ");

    assert_eq!(types.len(), 1);
    let type_def = &types[0];
    assert_eq!(type_def.name(), "T");
    assert_eq!(type_def.kind(), TypeKind::Object);
    assert_eq!(type_def.fields().len(), 2);

    let f = &type_def.fields()[0];
    assert_eq!(f.name, "f");
    assert_eq!(f.type_name, "X");
    assert!(f.is_non_null);
    assert!(!f.is_list);

    let g = &type_def.fields()[1];
    assert_eq!(g.name, "g");
    assert_eq!(g.type_name, "Y");
    assert!(g.is_list);
    assert!(!g.is_non_null);
}

#[test]
fn scalar_is_flushed_on_its_own_line() {
    let types = parse_sdl("scalar Foo");

    assert_eq!(types.len(), 1);
    assert_eq!(types[0].name(), "Foo");
    assert_eq!(types[0].kind(), TypeKind::Scalar);
}

#[test]
fn union_collects_possible_types() {
    let types = parse_sdl("union Bar = A | B");

    assert_eq!(types.len(), 1);
    assert_eq!(types[0].kind(), TypeKind::Union);
    assert_eq!(types[0].possible_types(), ["A", "B"]);
}

#[test]
fn union_without_members_has_no_possible_types() {
    let types = parse_sdl("union Empty");

    assert_eq!(types.len(), 1);
    assert!(types[0].possible_types().is_empty());
}

#[test]
fn scalar_and_union_do_not_swallow_following_type() {
    let types = parse_sdl("
        scalar Upload
        union Media = Image | Video
        type Image {
          url: String!
        }
    ");

    let names: Vec<&str> = types.iter().map(|def| def.name()).collect();
    assert_eq!(names, vec!["Upload", "Media", "Image"]);
    assert_eq!(types[2].fields().len(), 1);
}

#[test]
fn field_arguments_are_parsed() {
    let types = parse_sdl("
        type Query {
          country(code: ID!): Country
        }
    ");

    let field = &types[0].fields()[0];
    assert_eq!(field.name, "country");
    assert_eq!(field.type_name, "Country");
    assert_eq!(field.args, vec![Argument::new("code", "ID").non_null()]);
}

#[test]
fn multiple_arguments_with_defaults() {
    let types = parse_sdl(r#"
        type Query {
          countries(filter: CountryFilterInput, first: Int = 10, lang: String = "en"): [Country!]!
        }
    "#);

    let field = &types[0].fields()[0];
    assert!(field.is_list);
    assert!(field.is_non_null);
    assert_eq!(field.type_name, "Country");
    assert_eq!(field.args, vec![
        Argument::new("filter", "CountryFilterInput"),
        Argument::new("first", "Int").with_default_value("10"),
        Argument::new("lang", "String").with_default_value("\"en\""),
    ]);
}

#[test]
fn root_operation_types_are_classified_by_name() {
    let types = parse_sdl("
        type Query {
          ping: String
        }
        type Mutation {
          bump: Int
        }
        type Subscription {
          ticks: Int
        }
    ");

    let kinds: Vec<TypeKind> = types.iter().map(|def| def.kind()).collect();
    assert_eq!(kinds, vec![TypeKind::Query, TypeKind::Mutation, TypeKind::Subscription]);
}

#[test]
fn input_object_members_become_input_fields() {
    let types = parse_sdl(r#"
        input StringQueryOperatorInput {
          eq: String
          in: [String!] = ["US"]
          regex: String!
        }
    "#);

    let type_def = &types[0];
    assert_eq!(type_def.kind(), TypeKind::InputObject);
    assert!(type_def.fields().is_empty());
    assert_eq!(type_def.input_fields(), [
        Argument::new("eq", "String"),
        Argument::new("in", "String").with_default_value(r#"["US"]"#),
        Argument::new("regex", "String").non_null(),
    ]);
}

#[test]
fn enum_values_are_not_collected() {
    let types = parse_sdl("
        enum Color {
          RED
          GREEN
        }
    ");

    assert_eq!(types.len(), 1);
    assert_eq!(types[0].kind(), TypeKind::Enum);
    assert!(types[0].enum_values().is_empty());
    assert!(types[0].fields().is_empty());
}

#[test]
fn interface_fields_are_collected() {
    let types = parse_sdl("
        interface Node {
          id: ID!
        }
    ");

    assert_eq!(types[0].kind(), TypeKind::Interface);
    assert_eq!(types[0].fields()[0].name, "id");
}

#[test]
fn opening_brace_on_its_own_line() {
    let types = parse_sdl("
        type Language
        {
          code: ID!
          native: String
        }
    ");

    assert_eq!(types.len(), 1);
    assert_eq!(types[0].fields().len(), 2);
}

#[test]
fn field_with_brace_default_keeps_block_open() {
    let types = parse_sdl("
        type Query {
          continent(code: ID!): Continent
          continents(filter: ContinentFilterInput = {}): [Continent!]!
          country(code: ID!): Country
        }
        type Continent {
          code: ID!
        }
    ");

    let names: Vec<&str> = types.iter().map(|def| def.name()).collect();
    assert_eq!(names, vec!["Query", "Continent"]);

    let query_fields: Vec<&str> =
        types[0].fields()
            .iter()
            .map(|field| field.name.as_str())
            .collect();
    assert_eq!(query_fields, vec!["continent", "continents", "country"]);

    let continents = &types[0].fields()[1];
    assert_eq!(continents.args.len(), 1);
    assert_eq!(continents.args[0].default_value.as_deref(), Some("{}"));
    assert!(continents.is_list);
    assert!(continents.is_non_null);
}

#[test]
fn stray_opening_brace_inside_body_is_ignored() {
    let types = parse_sdl("
        type Language {
          {
          code: ID!
        }
    ");

    assert_eq!(types.len(), 1);
    assert_eq!(types[0].fields().len(), 1);
    assert_eq!(types[0].fields()[0].name, "code");
}

#[test]
fn bodiless_type_is_flushed_by_next_type() {
    let types = parse_sdl("
        type Marker
        type Country {
          code: ID!
        }
    ");

    let names: Vec<&str> = types.iter().map(|def| def.name()).collect();
    assert_eq!(names, vec!["Marker", "Country"]);
    assert!(types[0].fields().is_empty());
}

#[test]
fn unterminated_block_is_flushed_at_end_of_input() {
    let types = parse_sdl("
        type Country {
          code: ID!
          name: String!
    ");

    assert_eq!(types.len(), 1);
    assert_eq!(types[0].fields().len(), 2);
}

#[test]
fn comments_and_block_string_delimiters_are_skipped() {
    let types = parse_sdl(r#"
        # The countries API
        """
        type Ghost
        """
        type State {
          # code: Commented
          code: String
          name: String!
        }
    "#);

    // The line between the `"""` delimiters is still read.
    let names: Vec<&str> = types.iter().map(|def| def.name()).collect();
    assert_eq!(names, vec!["Ghost", "State"]);
    let state_fields: Vec<&str> =
        types[1].fields()
            .iter()
            .map(|field| field.name.as_str())
            .collect();
    assert_eq!(state_fields, vec!["code", "name"]);
}

#[test]
fn single_line_descriptions_attach_to_next_type_and_field() {
    let types = parse_sdl(r#"
        "A sovereign state"
        type Country {
          "ISO 3166-1 alpha-2 code"
          code: ID!
          name: String!
        }
    "#);

    let country = &types[0];
    assert_eq!(country.description(), Some("A sovereign state"));
    assert_eq!(
        country.fields()[0].description.as_deref(),
        Some("ISO 3166-1 alpha-2 code"),
    );
    assert_eq!(country.fields()[1].description, None);
}

#[test]
fn lines_outside_type_bodies_are_ignored() {
    let types = parse_sdl("
        schema {
          query: Query
        }
        directive @cacheControl(maxAge: Int) on FIELD_DEFINITION
    ");

    assert!(types.is_empty());
}

#[test]
fn empty_input_yields_no_types() {
    assert!(parse_sdl("").is_empty());
    assert!(parse_sdl("\n   \n\t\n").is_empty());
}

#[test]
fn incremental_parser_matches_parse_sdl() {
    let schema = "
        type Continent {
          code: ID!
          countries: [Country!]!
        }
        scalar Upload
    ";

    let mut parser = SdlParser::new();
    for line in schema.lines() {
        parser.read_line(line);
    }

    assert_eq!(parser.finish(), parse_sdl(schema));
}

#[test]
fn countries_schema_smoke_test() {
    let types = parse_sdl(include_str!("fixtures/countries.graphql"));

    let names: Vec<&str> = types.iter().map(|def| def.name()).collect();
    assert_eq!(names, vec![
        "Continent",
        "ContinentFilterInput",
        "Country",
        "CountryFilterInput",
        "Language",
        "LanguageFilterInput",
        "Query",
        "State",
        "StringQueryOperatorInput",
        "Subdivision",
    ]);

    let query = types.iter().find(|def| def.kind() == TypeKind::Query).unwrap();
    let query_fields: Vec<String> =
        query.fields()
            .iter()
            .map(|field| format!("{}: {}", field.name, field.formatted_type()))
            .collect();
    assert_eq!(query_fields, vec![
        "continent: Continent",
        "continents: [Continent]!",
        "countries: [Country]!",
        "country: Country",
        "language: Language",
        "languages: [Language]!",
    ]);
}
