//! Test doubles and fixtures for quayside unit tests.
//!
//! Resolution is pure given a probe, so the probe doubles here let it be
//! exercised without any Qt binding installed. The [`fixtures`] module
//! covers the other side: fake binding modules registered in
//! `sys.modules` so that probing and loading run against the real import
//! machinery.
//!
//! # Example
//!
//! ```rust,ignore
//! use quayside::resolve::{resolve, Selection};
//! use quayside::test_support::InstalledProbe;
//!
//! #[test]
//! fn test_example() {
//!     let probe = InstalledProbe::of(&[QtApi::PyQt5]);
//!     let api = resolve(&Selection::new(), &probe).unwrap();
//!     assert_eq!(api, QtApi::PyQt5);
//! }
//! ```

pub mod fixtures;

// Re-export fixtures for convenience
pub use fixtures::*;

use pyo3::exceptions::PyRuntimeError;
use pyo3::PyResult;

use crate::api::QtApi;
use crate::probe::BindingProbe;

/// Probe that reports a fixed set of bindings as importable.
#[derive(Debug, Clone, Default)]
pub struct InstalledProbe {
    installed: Vec<QtApi>,
}

impl InstalledProbe {
    /// Create a probe reporting exactly `apis` as installed.
    pub fn of(apis: &[QtApi]) -> Self {
        InstalledProbe {
            installed: apis.to_vec(),
        }
    }
}

impl BindingProbe for InstalledProbe {
    fn is_installed(&self, api: QtApi) -> PyResult<bool> {
        Ok(self.installed.contains(&api))
    }
}

/// Probe that reports every binding as missing.
#[derive(Debug, Clone, Copy)]
pub struct NothingProbe;

impl BindingProbe for NothingProbe {
    fn is_installed(&self, _api: QtApi) -> PyResult<bool> {
        Ok(false)
    }
}

/// Probe that errors on any contact.
///
/// For asserting that a resolution path never reaches auto-detection.
#[derive(Debug, Clone, Copy)]
pub struct FailingProbe;

impl BindingProbe for FailingProbe {
    fn is_installed(&self, api: QtApi) -> PyResult<bool> {
        Err(PyRuntimeError::new_err(format!("unexpected probe of {api}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installed_probe_reports_its_set() {
        let probe = InstalledProbe::of(&[QtApi::PySide, QtApi::PyQt5]);
        assert!(probe.is_installed(QtApi::PySide).unwrap());
        assert!(probe.is_installed(QtApi::PyQt5).unwrap());
        assert!(!probe.is_installed(QtApi::PyQt4).unwrap());
    }

    #[test]
    fn test_nothing_probe_reports_nothing() {
        for api in QtApi::DETECTION_ORDER {
            assert!(!NothingProbe.is_installed(api).unwrap());
        }
    }

    #[test]
    fn test_failing_probe_errors() {
        assert!(FailingProbe.is_installed(QtApi::PySide).is_err());
    }
}
