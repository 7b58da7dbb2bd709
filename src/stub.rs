//! Toolkit-less stand-in backend.
//!
//! Used for documentation builds and other environments without any Qt
//! toolkit installed: every module slot of the binding holds a stand-in
//! object that absorbs calls and attribute reads by returning itself, so
//! facade construction and downstream use both go through unchanged.

use std::ffi::CStr;

use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::api::QtApi;
use crate::loader::LoadedBinding;

const STANDIN_SOURCE: &CStr = cr#"class Standin:
    """Absorbs any use: calls and attribute reads both return the object."""

    def __call__(self, *args, **kwargs):
        return self

    def __getattr__(self, name):
        return self

    def __repr__(self):
        return "<quayside stand-in>"
"#;

fn standin_class(py: Python<'_>) -> PyResult<Bound<'_, PyAny>> {
    let module = PyModule::from_code(
        py,
        STANDIN_SOURCE,
        c"quayside_standin.py",
        c"quayside_standin",
    )?;
    module.getattr("Standin")
}

/// Assemble the stand-in binding for [`QtApi::None`].
///
/// Every module slot, widgets included, gets its own stand-in instance.
pub(crate) fn load_standins(py: Python<'_>) -> PyResult<LoadedBinding> {
    let class = standin_class(py)?;
    let fresh = || -> PyResult<Py<PyAny>> { Ok(class.call0()?.unbind()) };

    Ok(LoadedBinding {
        api: QtApi::None,
        root: fresh()?,
        qt_core: fresh()?,
        qt_gui: fresh()?,
        qt_test: fresh()?,
        qt_widgets: Some(fresh()?),
    })
}
