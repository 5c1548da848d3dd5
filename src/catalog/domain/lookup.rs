use crate::shared::error::FetchError;

/// Outcome of looking a resource up remotely.
///
/// `NotFound` is a definitive answer. `TransientError` means the answer is
/// unknown and asking again may help.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
    TransientError(String),
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
            Lookup::TransientError(reason) => Lookup::TransientError(reason),
        }
    }
}

impl<T> From<Result<T, FetchError>> for Lookup<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Lookup::Found(value),
            Err(error) if error.is_absent() => Lookup::NotFound,
            Err(error) => Lookup::TransientError(error.to_string()),
        }
    }
}
