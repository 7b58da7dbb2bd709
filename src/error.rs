//! Error types for binding resolution and loading.

use pyo3::PyErr;
use thiserror::Error;

use crate::api::QtApiParseError;

/// Error while selecting or loading a Qt binding.
#[derive(Debug, Error)]
pub enum Error {
    /// A configured or requested API name is outside the known set.
    #[error(transparent)]
    UnknownQtApi(#[from] QtApiParseError),

    /// Auto-detection exhausted every candidate without a hit.
    #[error(
        "no Qt binding found, expected PySide, PyQt4 or PyQt5 to be importable \
         (set QUAYSIDE_QT_API to pick one explicitly)"
    )]
    NoQtBindingFound,

    /// A Python-level failure, surfaced unchanged.
    ///
    /// Covers binding imports, facade attribute lookups, and version reads.
    #[error(transparent)]
    Python(#[from] PyErr),
}
