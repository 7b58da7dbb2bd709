//! Binding installation probes.

use pyo3::exceptions::PyImportError;
use pyo3::prelude::*;

use crate::api::QtApi;

/// Detects whether a candidate binding is importable.
///
/// The trait seam keeps resolution testable without any Qt binding
/// installed; production code uses [`ImportProbe`].
pub trait BindingProbe {
    /// Check whether the binding's root package can be imported.
    ///
    /// An import error means "not installed"; any other Python failure is a
    /// real error and propagates.
    fn is_installed(&self, api: QtApi) -> PyResult<bool>;
}

/// Probe that imports the binding's root package in the embedded
/// interpreter.
///
/// Only the root package is touched. Submodules stay unimported so the sip
/// API-selection window is still open if a `pyqt4v2` load follows.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportProbe;

impl ImportProbe {
    /// Create a new import probe.
    pub fn new() -> Self {
        ImportProbe
    }
}

impl BindingProbe for ImportProbe {
    fn is_installed(&self, api: QtApi) -> PyResult<bool> {
        let Some(root) = api.root_module() else {
            return Ok(false);
        };

        Python::attach(|py| match py.import(root) {
            Ok(_) => {
                tracing::debug!("probe: {} is importable", root);
                Ok(true)
            }
            Err(err) if err.is_instance_of::<PyImportError>(py) => {
                tracing::debug!("probe: {} is not importable", root);
                Ok(false)
            }
            Err(err) => Err(err),
        })
    }
}
