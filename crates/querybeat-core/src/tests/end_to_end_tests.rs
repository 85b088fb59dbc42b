use crate::SchemaCatalog;
use crate::query_gen::generate_query;
use crate::sdl::parse_sdl;
use std::collections::HashMap;

fn squash_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn parse_then_generate_continent_query() {
    let types = parse_sdl("
        type Query {
          continent(code: ID!): Continent
        }
    ");
    let field = &types[0].fields()[0];

    let query = generate_query(field, &HashMap::new());

    assert_eq!(
        squash_whitespace(&query),
        r#"query ContinentGenerated { continent(code: "NA") { code name countries { name code } } }"#,
    );
}

#[test]
fn parse_then_generate_with_provided_filter() {
    let catalog = SchemaCatalog::from_sdl(include_str!("../sdl/tests/fixtures/countries.graphql"));
    let field = catalog.find_field("Query.countries").unwrap();
    let provided = HashMap::from([
        ("filter".to_string(), r#"{ code: { in: ["FR", "DE"] } }"#.to_string()),
    ]);

    let query = generate_query(field, &provided);

    assert_eq!(
        squash_whitespace(&query),
        r#"query CountriesGenerated { countries(filter: { code: { in: ["FR", "DE"] } }) { code name emoji capital continent { name } } }"#,
    );
}

#[test]
fn every_query_field_of_countries_schema_generates_a_query() {
    let catalog = SchemaCatalog::from_sdl(include_str!("../sdl/tests/fixtures/countries.graphql"));
    let query_type = catalog.get("Query").unwrap();

    for field in query_type.fields() {
        let query = generate_query(field, &HashMap::new());
        assert!(query.starts_with("query "), "{query}");
        assert_eq!(
            query.matches('{').count(),
            query.matches('}').count(),
            "unbalanced braces in {query}",
        );
    }
}
