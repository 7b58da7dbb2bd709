//! Uniform facade over the active Qt binding.
//!
//! `QtFacade` normalizes the handful of names that differ between bindings
//! (signal/slot/property constructors, application and widget classes, the
//! message-handler installers) and copies the names that don't. Downstream
//! code holds one facade and never branches on the active binding.

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use crate::api::QtApi;
use crate::error::Error;
use crate::loader::{self, LoadedBinding};
use crate::probe::{BindingProbe, ImportProbe};
use crate::resolve::{resolve, Selection};

/// One message-handler installation slot.
///
/// Qt 4 era bindings install message handlers through `qInstallMsgHandler`,
/// PyQt5 through `qInstallMessageHandler`; per real binding exactly one
/// slot carries the callable. Callers branch on the variant, never on
/// attribute presence.
#[derive(Debug)]
pub enum InstallerSlot {
    /// The binding exposes this installation entry point.
    Available(Py<PyAny>),

    /// The binding has no such entry point.
    Unsupported,
}

impl InstallerSlot {
    /// Check if the slot carries an installer.
    pub fn is_supported(&self) -> bool {
        matches!(self, InstallerSlot::Available(_))
    }

    /// Get the installer callable, if the binding has one.
    pub fn as_callable(&self) -> Option<&Py<PyAny>> {
        match self {
            InstallerSlot::Available(installer) => Some(installer),
            InstallerSlot::Unsupported => None,
        }
    }
}

/// The uniform surface downstream code programs against.
///
/// Built once per process by [`QtFacade::bootstrap`] and read-only
/// afterwards. Every field holds either a live binding symbol or, for the
/// installer slots, an explicit [`InstallerSlot`] tag; construction never
/// leaves a field unset.
#[derive(Debug)]
pub struct QtFacade {
    /// The resolved API the facade was built for.
    pub api: QtApi,

    /// Root binding package.
    pub root: Py<PyAny>,

    /// QtCore module.
    pub qt_core: Py<PyAny>,

    /// QtGui module.
    pub qt_gui: Py<PyAny>,

    /// QtTest module.
    pub qt_test: Py<PyAny>,

    /// QtWidgets module, PyQt5 only.
    pub qt_widgets: Option<Py<PyAny>>,

    /// The `Qt` namespace from QtCore.
    pub qt: Py<PyAny>,

    /// The `QEvent` class from QtCore.
    pub q_event: Py<PyAny>,

    /// Signal constructor (`Signal` / `pyqtSignal`).
    pub signal: Py<PyAny>,

    /// Slot decorator (`Slot` / `pyqtSlot`).
    pub slot: Py<PyAny>,

    /// Property constructor (`Property` / `pyqtProperty`).
    pub property: Py<PyAny>,

    /// `QApplication` class.
    pub q_application: Py<PyAny>,

    /// `QWidget` base class.
    pub q_widget: Py<PyAny>,

    /// `qDebug` logging function.
    pub q_debug: Py<PyAny>,

    /// `qWarning` logging function.
    pub q_warning: Py<PyAny>,

    /// `qCritical` logging function.
    pub q_critical: Py<PyAny>,

    /// `qFatal` logging function.
    pub q_fatal: Py<PyAny>,

    /// `QtDebugMsg` severity constant.
    pub qt_debug_msg: Py<PyAny>,

    /// `QtWarningMsg` severity constant.
    pub qt_warning_msg: Py<PyAny>,

    /// `QtCriticalMsg` severity constant.
    pub qt_critical_msg: Py<PyAny>,

    /// `QtFatalMsg` severity constant.
    pub qt_fatal_msg: Py<PyAny>,

    /// Qt 4 style message-handler installer slot.
    pub q_install_msg_handler: InstallerSlot,

    /// Qt 5 style message-handler installer slot.
    pub q_install_message_handler: InstallerSlot,
}

impl QtFacade {
    /// Resolve, load, and build in one shot.
    ///
    /// This produces the long-lived facade consumers hold onto. Running it
    /// again to switch bindings mid-process is unsupported: binding modules
    /// keep global state (the sip API selection in particular) that cannot
    /// be redone once QtCore has been imported.
    pub fn bootstrap(selection: &Selection) -> Result<QtFacade, Error> {
        QtFacade::bootstrap_with(selection, &ImportProbe::new())
    }

    /// Bootstrap with a caller-supplied probe.
    pub fn bootstrap_with(
        selection: &Selection,
        probe: &dyn BindingProbe,
    ) -> Result<QtFacade, Error> {
        let api = resolve(selection, probe)?;
        let facade = Python::attach(|py| {
            let loaded = loader::load(py, api)?;
            QtFacade::build(py, &loaded)
        })?;
        tracing::debug!("Qt facade ready for {}", facade.api);
        Ok(facade)
    }

    /// Map a loaded binding onto the uniform name set.
    ///
    /// Pure attribute mapping over the handles in `loaded`; nothing is
    /// imported here.
    pub fn build(py: Python<'_>, loaded: &LoadedBinding) -> PyResult<QtFacade> {
        if loaded.api == QtApi::None {
            return build_stand_in(py, loaded);
        }

        let core = loaded.qt_core.bind(py);

        let (signal, slot, property) = if loaded.api == QtApi::PySide {
            (
                core.getattr("Signal")?,
                core.getattr("Slot")?,
                core.getattr("Property")?,
            )
        } else {
            (
                core.getattr("pyqtSignal")?,
                core.getattr("pyqtSlot")?,
                core.getattr("pyqtProperty")?,
            )
        };

        let widget_home = match (loaded.api, loaded.qt_widgets.as_ref()) {
            (QtApi::PyQt5, Some(widgets)) => widgets.bind(py),
            (QtApi::PyQt5, None) => {
                return Err(PyRuntimeError::new_err(
                    "PyQt5 binding was loaded without its QtWidgets module",
                ));
            }
            _ => loaded.qt_gui.bind(py),
        };

        let (q_install_msg_handler, q_install_message_handler) = if loaded.api == QtApi::PyQt5 {
            (
                InstallerSlot::Unsupported,
                InstallerSlot::Available(core.getattr("qInstallMessageHandler")?.unbind()),
            )
        } else {
            (
                InstallerSlot::Available(core.getattr("qInstallMsgHandler")?.unbind()),
                InstallerSlot::Unsupported,
            )
        };

        Ok(QtFacade {
            api: loaded.api,
            root: loaded.root.clone_ref(py),
            qt_core: loaded.qt_core.clone_ref(py),
            qt_gui: loaded.qt_gui.clone_ref(py),
            qt_test: loaded.qt_test.clone_ref(py),
            qt_widgets: loaded.qt_widgets.as_ref().map(|m| m.clone_ref(py)),
            qt: core.getattr("Qt")?.unbind(),
            q_event: core.getattr("QEvent")?.unbind(),
            signal: signal.unbind(),
            slot: slot.unbind(),
            property: property.unbind(),
            q_application: widget_home.getattr("QApplication")?.unbind(),
            q_widget: widget_home.getattr("QWidget")?.unbind(),
            q_debug: core.getattr("qDebug")?.unbind(),
            q_warning: core.getattr("qWarning")?.unbind(),
            q_critical: core.getattr("qCritical")?.unbind(),
            q_fatal: core.getattr("qFatal")?.unbind(),
            qt_debug_msg: core.getattr("QtDebugMsg")?.unbind(),
            qt_warning_msg: core.getattr("QtWarningMsg")?.unbind(),
            qt_critical_msg: core.getattr("QtCriticalMsg")?.unbind(),
            qt_fatal_msg: core.getattr("QtFatalMsg")?.unbind(),
            q_install_msg_handler,
            q_install_message_handler,
        })
    }

    /// Whether the active binding is PySide.
    pub fn using_pyside(&self) -> bool {
        self.api == QtApi::PySide
    }
}

/// Facade over the stand-in binding.
///
/// A stand-in answers every attribute read with itself, so each uniform
/// name maps straight back to its module's stand-in. Both installer slots
/// are populated here; only real bindings leave one unsupported.
fn build_stand_in(py: Python<'_>, loaded: &LoadedBinding) -> PyResult<QtFacade> {
    let core = || loaded.qt_core.clone_ref(py);
    let gui = || loaded.qt_gui.clone_ref(py);

    Ok(QtFacade {
        api: QtApi::None,
        root: loaded.root.clone_ref(py),
        qt_core: core(),
        qt_gui: gui(),
        qt_test: loaded.qt_test.clone_ref(py),
        qt_widgets: loaded.qt_widgets.as_ref().map(|m| m.clone_ref(py)),
        qt: core(),
        q_event: core(),
        signal: core(),
        slot: core(),
        property: core(),
        q_application: gui(),
        q_widget: gui(),
        q_debug: core(),
        q_warning: core(),
        q_critical: core(),
        q_fatal: core(),
        qt_debug_msg: core(),
        qt_warning_msg: core(),
        qt_critical_msg: core(),
        qt_fatal_msg: core(),
        q_install_msg_handler: InstallerSlot::Available(core()),
        q_install_message_handler: InstallerSlot::Available(core()),
    })
}
