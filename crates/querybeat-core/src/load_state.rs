/// Where a request for some payload (schema text, query results, ...)
/// currently stands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}
impl<T> LoadState<T> {
    /// Settle a finished request: `Ok` becomes [`LoadState::Loaded`] and `Err`
    /// becomes [`LoadState::Failed`] carrying the error's display text.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::Loaded(payload),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        if let Self::Failed(message) = self {
            Some(message.as_str())
        } else {
            None
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::Loaded(payload) => LoadState::Loaded(f(payload)),
            Self::Failed(message) => LoadState::Failed(message),
        }
    }

    pub fn payload(&self) -> Option<&T> {
        if let Self::Loaded(payload) = self {
            Some(payload)
        } else {
            None
        }
    }

    pub fn into_payload(self) -> Option<T> {
        if let Self::Loaded(payload) = self {
            Some(payload)
        } else {
            None
        }
    }
}
