use thiserror::Error;

/// Errors raised by record stores
///
/// These travel inside `anyhow::Error`; match on them with
/// `err.downcast_ref::<StoreError>()`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("{kind} store lock was poisoned")]
    Poisoned { kind: &'static str },
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: &str) -> Self {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// True if `err` wraps a `StoreError::NotFound`
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<StoreError>()
        .map(StoreError::is_not_found)
        .unwrap_or(false)
}
