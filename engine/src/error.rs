//! Error types for the search engine.

use common::facet::UnknownFacet;
use thiserror::Error;

pub type EngineResult<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A facet name outside the fixed set reached `set_facet`. Normal user
    /// interaction cannot produce this, so it is always surfaced.
    #[error("Invalid facet name: {0:?}")]
    InvalidFacetName(String),

    #[error("Invalid configuration value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },
}

impl From<UnknownFacet> for EngineError {
    fn from(err: UnknownFacet) -> Self {
        Self::InvalidFacetName(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_facet_converts_to_invalid_name() {
        let err: EngineError = "salary".parse::<common::facet::Facet>().unwrap_err().into();
        assert_eq!(err, EngineError::InvalidFacetName("salary".to_string()));
        assert_eq!(err.to_string(), "Invalid facet name: \"salary\"");
    }
}
