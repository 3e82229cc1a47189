//! Crate-level error type.
//!
//! `AnalysisError` is what the public entry points (`AnalysisContext::new`,
//! the loaders, option parsing) return. It wraps the subtree errors via
//! `#[from]` so `?` composes across layers. Statistical test failures only
//! reach this type when a caller runs a test directly; the report layer
//! absorbs them into absent fields instead.
use crate::{
    events::errors::EventError, loader::errors::LoaderError, series::errors::SeriesError,
    statistical_tests::errors::TestError,
};
use thiserror::Error;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Test(#[from] TestError),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// A configuration value outside its admissible range.
    #[error("Invalid option `{field}`: {reason}")]
    InvalidOption { field: &'static str, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "python-bindings")]
impl From<AnalysisError> for PyErr {
    fn from(err: AnalysisError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
