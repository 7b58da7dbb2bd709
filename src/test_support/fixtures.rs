//! `sys.modules` fixtures that stand in for real Qt bindings.
//!
//! The fixture bindings are plain Python modules carrying the attributes
//! quayside reads off the real packages. Registered under the real dotted
//! names, the import machinery hands them out and probing and loading run
//! unchanged against them. `sys.modules` is process-global state, so every
//! test that installs fixtures holds [`modules_lock`] for its whole body
//! and removes what it registered before returning.

use std::ffi::CStr;
use std::sync::{Mutex, MutexGuard};

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};

use crate::api::QtApi;
use crate::loader::LoadedBinding;

static MODULES_LOCK: Mutex<()> = Mutex::new(());

const FIXTURE_SOURCE: &CStr = cr#"import types


def _named(name):
    def stand(*args, **kwargs):
        return None
    stand.__name__ = name
    stand.__qualname__ = name
    return stand


def _class(name):
    return type(name, (), {})


def build_family(family):
    """Build the module set of one binding family, keyed by dotted name."""
    root = types.ModuleType(family)
    core = types.ModuleType(family + ".QtCore")
    gui = types.ModuleType(family + ".QtGui")
    test = types.ModuleType(family + ".QtTest")

    core.Qt = _class("Qt")
    core.QEvent = _class("QEvent")
    core.qDebug = _named("qDebug")
    core.qWarning = _named("qWarning")
    core.qCritical = _named("qCritical")
    core.qFatal = _named("qFatal")
    core.QtDebugMsg = 0
    core.QtWarningMsg = 1
    core.QtCriticalMsg = 2
    core.QtFatalMsg = 3

    gui.QApplication = _class("QApplication")
    gui.QWidget = _class("QWidget")

    modules = {
        family: root,
        family + ".QtCore": core,
        family + ".QtGui": gui,
        family + ".QtTest": test,
    }

    if family == "PySide":
        core.Signal = _class("Signal")
        core.Slot = _class("Slot")
        core.Property = _class("Property")
        core.qInstallMsgHandler = _named("qInstallMsgHandler")
        core.qVersion = lambda: "4.8.7"
        core.__version__ = "4.8.6"
        root.__version__ = "1.2.4"
    elif family == "PyQt4":
        core.pyqtSignal = _class("pyqtSignal")
        core.pyqtSlot = _class("pyqtSlot")
        core.pyqtProperty = _class("pyqtProperty")
        core.qInstallMsgHandler = _named("qInstallMsgHandler")
        core.qVersion = lambda: "4.8.7"
        core.PYQT_VERSION_STR = "4.11.4"
        core.QT_VERSION_STR = "4.8.6"
    else:
        core.pyqtSignal = _class("pyqtSignal")
        core.pyqtSlot = _class("pyqtSlot")
        core.pyqtProperty = _class("pyqtProperty")
        core.qInstallMessageHandler = _named("qInstallMessageHandler")
        core.qVersion = lambda: "5.15.8"
        core.PYQT_VERSION_STR = "5.15.9"
        core.QT_VERSION_STR = "5.15.2"
        widgets = types.ModuleType("PyQt5.QtWidgets")
        widgets.QApplication = _class("QApplication")
        widgets.QWidget = _class("QWidget")
        modules["PyQt5.QtWidgets"] = widgets

    return modules


def build_sip():
    """Build a sip stand-in that records setapi calls."""
    sip = types.ModuleType("sip")
    sip.calls = []

    def setapi(name, version):
        sip.calls.append((name, version))

    sip.setapi = setapi
    return sip
"#;

/// Serialize tests that touch `sys.modules`.
pub fn modules_lock() -> MutexGuard<'static, ()> {
    match MODULES_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn fixture_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    PyModule::from_code(
        py,
        FIXTURE_SOURCE,
        c"quayside_fixtures.py",
        c"quayside_fixtures",
    )
}

fn build_family<'py>(py: Python<'py>, family: &str) -> PyResult<Bound<'py, PyDict>> {
    fixture_module(py)?
        .getattr("build_family")?
        .call1((family,))?
        .downcast_into::<PyDict>()
        .map_err(PyErr::from)
}

fn family_module_names(family: &str) -> Vec<String> {
    let mut names = vec![
        family.to_string(),
        format!("{family}.QtCore"),
        format!("{family}.QtGui"),
        format!("{family}.QtTest"),
    ];
    if family == "PyQt5" {
        names.push("PyQt5.QtWidgets".to_string());
    }
    names
}

/// Register a module in `sys.modules` under the given dotted name.
pub fn register_module(py: Python<'_>, name: &str, module: &Bound<'_, PyModule>) -> PyResult<()> {
    py.import("sys")?.getattr("modules")?.set_item(name, module)
}

/// Drop the given names from `sys.modules`, ignoring absent ones.
pub fn remove_modules(py: Python<'_>, names: &[&str]) -> PyResult<()> {
    let sys_modules = py.import("sys")?.getattr("modules")?;
    for name in names.iter().copied() {
        if sys_modules.contains(name)? {
            sys_modules.del_item(name)?;
        }
    }
    Ok(())
}

/// Install a complete fixture binding under its real module names.
pub fn install_fake_binding(py: Python<'_>, api: QtApi) -> PyResult<()> {
    let Some(family) = api.root_module() else {
        return Ok(());
    };
    let modules = build_family(py, family)?;
    let sys_modules = py.import("sys")?.getattr("modules")?;
    for (name, module) in modules.iter() {
        sys_modules.set_item(name, module)?;
    }
    Ok(())
}

/// Remove a fixture binding installed by [`install_fake_binding`].
pub fn remove_fake_binding(py: Python<'_>, api: QtApi) -> PyResult<()> {
    let Some(family) = api.root_module() else {
        return Ok(());
    };
    let names = family_module_names(family);
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    remove_modules(py, &names)
}

/// Install a sip stand-in that records `setapi` calls.
pub fn install_fake_sip(py: Python<'_>) -> PyResult<()> {
    let sip = fixture_module(py)?.getattr("build_sip")?.call0()?;
    py.import("sys")?.getattr("modules")?.set_item("sip", sip)
}

/// Remove the sip stand-in.
pub fn remove_fake_sip(py: Python<'_>) -> PyResult<()> {
    remove_modules(py, &["sip"])
}

/// Read the `(name, version)` pairs the sip stand-in has recorded.
pub fn sip_calls(py: Python<'_>) -> PyResult<Vec<(String, i32)>> {
    py.import("sip")?.getattr("calls")?.extract()
}

/// Build a [`LoadedBinding`] over fixture modules without touching
/// `sys.modules`.
///
/// For facade and version tests that need loaded-binding handles but no
/// import machinery. The stand-in binding comes from the loader, not from
/// here.
pub fn fake_loaded_binding(py: Python<'_>, api: QtApi) -> PyResult<LoadedBinding> {
    let family = api
        .root_module()
        .expect("fixture bindings exist only for real families");
    let modules = build_family(py, family)?;

    let fetch = |name: &str| -> PyResult<Py<PyAny>> {
        let module = modules
            .get_item(name)?
            .ok_or_else(|| PyRuntimeError::new_err(format!("fixture has no module {name}")))?;
        Ok(module.unbind())
    };

    Ok(LoadedBinding {
        api,
        root: fetch(family)?,
        qt_core: fetch(&format!("{family}.QtCore"))?,
        qt_gui: fetch(&format!("{family}.QtGui"))?,
        qt_test: fetch(&format!("{family}.QtTest"))?,
        qt_widgets: if api == QtApi::PyQt5 {
            Some(fetch("PyQt5.QtWidgets")?)
        } else {
            None
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_binding_round_trips_through_sys_modules() {
        let _guard = modules_lock();
        Python::attach(|py| {
            install_fake_binding(py, QtApi::PySide).unwrap();
            let core = py.import("PySide.QtCore").unwrap();
            assert!(core.getattr("Signal").is_ok());
            assert!(core.getattr("qInstallMsgHandler").is_ok());

            // PySide has no real distribution for this interpreter, so
            // after removal the import must fail.
            remove_fake_binding(py, QtApi::PySide).unwrap();
            assert!(py.import("PySide.QtCore").is_err());
        });
    }

    #[test]
    fn test_sip_stand_in_records_calls() {
        let _guard = modules_lock();
        Python::attach(|py| {
            install_fake_sip(py).unwrap();

            let sip = py.import("sip").unwrap();
            let setapi = sip.getattr("setapi").unwrap();
            setapi.call1(("QString", 2)).unwrap();
            setapi.call1(("QVariant", 2)).unwrap();

            let calls = sip_calls(py).unwrap();
            assert_eq!(
                calls,
                vec![("QString".to_string(), 2), ("QVariant".to_string(), 2)]
            );

            remove_fake_sip(py).unwrap();
        });
    }

    #[test]
    fn test_fake_loaded_binding_carries_family_attributes() {
        Python::attach(|py| {
            let pyside = fake_loaded_binding(py, QtApi::PySide).unwrap();
            assert!(pyside.qt_core.bind(py).getattr("Signal").is_ok());
            assert!(pyside.qt_core.bind(py).getattr("pyqtSignal").is_err());
            assert!(pyside.qt_widgets.is_none());

            let pyqt5 = fake_loaded_binding(py, QtApi::PyQt5).unwrap();
            assert!(pyqt5.qt_widgets.is_some());
        });
    }
}
