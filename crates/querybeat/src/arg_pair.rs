/// A `name=value` pair passed to `generate --arg`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ArgPair {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub(crate) enum ArgPairParseError {
    #[error("expected `name=value`, got `{0}`")]
    MissingEquals(String),

    #[error("argument name is empty in `{0}`")]
    EmptyName(String),
}

/// clap value parser for `--arg name=value`. Only the first `=` separates
/// the name, so values may themselves contain `=`.
pub(crate) fn parse_arg_pair(raw: &str) -> Result<ArgPair, ArgPairParseError> {
    let (name, value) = raw.split_once('=')
        .ok_or_else(|| ArgPairParseError::MissingEquals(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ArgPairParseError::EmptyName(raw.to_string()));
    }
    Ok(ArgPair {
        name: name.to_string(),
        value: value.to_string(),
    })
}
