//! Version reporting for the active binding.
//!
//! Every snapshot reads the live binding modules; nothing is cached at
//! facade construction, so a version attribute patched at runtime shows up
//! in the next call.

use pyo3::prelude::*;

use crate::api::QtApi;
use crate::error::Error;
use crate::facade::QtFacade;

/// Version strings describing the binding behind a facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Binding family name (`PySide`, `PyQt4`, `PyQt5`, or `none`).
    pub qt_api: String,

    /// Version of the binding package itself.
    pub qt_api_version: String,

    /// Qt version the process is running against.
    pub runtime: String,

    /// Qt version the binding was compiled against.
    pub compiled: String,
}

impl QtFacade {
    /// Take a fresh version snapshot of the active binding.
    ///
    /// PySide reports its package version from the root module and its
    /// compiled Qt version from `QtCore.__version__`; the PyQt families
    /// report `PYQT_VERSION_STR` and `QT_VERSION_STR`. The runtime Qt
    /// version always comes from calling `qVersion()`.
    pub fn versions(&self, py: Python<'_>) -> Result<VersionInfo, Error> {
        if self.api == QtApi::None {
            return Ok(VersionInfo {
                qt_api: QtApi::None.display_name().to_string(),
                qt_api_version: "n/a".to_string(),
                runtime: "n/a".to_string(),
                compiled: "n/a".to_string(),
            });
        }

        let core = self.qt_core.bind(py);
        let runtime = core.getattr("qVersion")?.call0()?.extract::<String>()?;

        let (qt_api_version, compiled) = if self.api == QtApi::PySide {
            (
                self.root.bind(py).getattr("__version__")?.extract()?,
                core.getattr("__version__")?.extract()?,
            )
        } else {
            (
                core.getattr("PYQT_VERSION_STR")?.extract()?,
                core.getattr("QT_VERSION_STR")?.extract()?,
            )
        };

        Ok(VersionInfo {
            qt_api: self.api.display_name().to_string(),
            qt_api_version,
            runtime,
            compiled,
        })
    }
}
