use std::fmt;

/// Errors raised while building or seeding a store.
///
/// Store operations themselves never fail; this only covers parsing input
/// handed to the store from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Store configuration could not be parsed.
    Config(String),
    /// Seed data could not be parsed.
    Seed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Config(msg) => write!(f, "invalid store configuration: {}", msg),
            StoreError::Seed(msg) => write!(f, "invalid seed data: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
