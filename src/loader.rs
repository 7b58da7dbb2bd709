//! Binding module imports.

use pyo3::prelude::*;

use crate::api::QtApi;
use crate::stub;

/// Type names switched to the v2 sip API for the `pyqt4v2` flavor.
const SIP_API_V2_TYPES: [&str; 7] = [
    "QDate",
    "QDateTime",
    "QString",
    "QTextStream",
    "QTime",
    "QUrl",
    "QVariant",
];

/// Module handles for one loaded binding.
#[derive(Debug)]
pub struct LoadedBinding {
    /// The API the modules were loaded for.
    pub api: QtApi,

    /// Root binding package (PySide, PyQt4 or PyQt5).
    pub root: Py<PyAny>,

    /// QtCore module.
    pub qt_core: Py<PyAny>,

    /// QtGui module.
    pub qt_gui: Py<PyAny>,

    /// QtTest module.
    pub qt_test: Py<PyAny>,

    /// QtWidgets module; only PyQt5 splits widgets out of QtGui.
    pub qt_widgets: Option<Py<PyAny>>,
}

/// Import the modules for a resolved API.
///
/// Loading trusts the resolver: nothing is re-probed, and an import failure
/// here surfaces as the original Python error. For `pyqt4v2` the sip API
/// selection runs before the first QtCore import; sip refuses the selection
/// once QtCore exists.
pub fn load(py: Python<'_>, api: QtApi) -> PyResult<LoadedBinding> {
    let Some(root_name) = api.root_module() else {
        return stub::load_standins(py);
    };

    if api == QtApi::PyQt4V2 {
        select_sip_api_v2(py)?;
    }

    tracing::debug!("loading Qt binding modules from {}", root_name);

    let root = py.import(root_name)?;
    let qt_core = py.import(format!("{}.QtCore", root_name))?;
    let qt_gui = py.import(format!("{}.QtGui", root_name))?;
    let qt_widgets = if api == QtApi::PyQt5 {
        Some(py.import("PyQt5.QtWidgets")?.into_any().unbind())
    } else {
        None
    };
    let qt_test = py.import(format!("{}.QtTest", root_name))?;

    Ok(LoadedBinding {
        api,
        root: root.into_any().unbind(),
        qt_core: qt_core.into_any().unbind(),
        qt_gui: qt_gui.into_any().unbind(),
        qt_test: qt_test.into_any().unbind(),
        qt_widgets,
    })
}

/// Switch sip to API v2 for PyQt4's string-like data types.
fn select_sip_api_v2(py: Python<'_>) -> PyResult<()> {
    let sip = py.import("sip")?;
    let setapi = sip.getattr("setapi")?;
    for name in SIP_API_V2_TYPES {
        setapi.call1((name, 2))?;
    }
    Ok(())
}
