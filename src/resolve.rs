//! Active-API resolution.
//!
//! Priority order, first match wins:
//! 1. stub mode (toolkit-less stand-in facade)
//! 2. legacy force flag, pinning `pyqt4`
//! 3. explicit API requested by the caller
//! 4. configured name, validated case-insensitively
//! 5. auto-detection over [`QtApi::DETECTION_ORDER`]

use crate::api::QtApi;
use crate::error::Error;
use crate::probe::BindingProbe;

/// Inputs gathered before resolution.
///
/// `configured` stays a raw string so that validation (and its error)
/// happens during resolution rather than in the configuration layer.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// API requested programmatically by the embedding caller.
    pub explicit: Option<QtApi>,

    /// Legacy escape hatch pinning PyQt4 over everything else.
    pub force_pyqt: bool,

    /// Configured API name from the environment or a config file.
    pub configured: Option<String>,

    /// Resolve to the toolkit-less stand-in backend without probing.
    pub stub: bool,
}

impl Selection {
    /// Create an empty selection (auto-detection only).
    pub fn new() -> Self {
        Selection::default()
    }

    /// Set the explicit API override.
    pub fn with_explicit(mut self, api: Option<QtApi>) -> Self {
        self.explicit = api;
        self
    }

    /// Set the legacy force flag.
    pub fn with_force_pyqt(mut self, force: bool) -> Self {
        self.force_pyqt = force;
        self
    }

    /// Set the configured API name.
    pub fn with_configured(mut self, value: impl Into<String>) -> Self {
        self.configured = Some(value.into());
        self
    }

    /// Set stub mode.
    pub fn with_stub(mut self, stub: bool) -> Self {
        self.stub = stub;
        self
    }
}

/// Resolve the active Qt API.
///
/// The first matching input wins; nothing falls through once a value is
/// taken. The probe is only consulted when no input decides the API.
pub fn resolve(selection: &Selection, probe: &dyn BindingProbe) -> Result<QtApi, Error> {
    if selection.stub {
        tracing::debug!("stub mode set, using the stand-in backend");
        return Ok(QtApi::None);
    }

    if selection.force_pyqt {
        if selection.explicit.is_some() || selection.configured.is_some() {
            tracing::warn!("legacy force flag overrides the requested Qt API, using pyqt4");
        } else {
            tracing::debug!("legacy force flag set, using pyqt4");
        }
        return Ok(QtApi::PyQt4);
    }

    if let Some(api) = selection.explicit {
        tracing::debug!("using explicitly requested Qt API: {}", api);
        return Ok(api);
    }

    if let Some(raw) = selection.configured.as_deref().filter(|v| !v.is_empty()) {
        let api: QtApi = raw.parse()?;
        tracing::debug!("using configured Qt API: {}", api);
        return Ok(api);
    }

    for api in QtApi::DETECTION_ORDER {
        if probe.is_installed(api)? {
            tracing::debug!("auto-detected Qt API: {}", api);
            return Ok(api);
        }
    }

    Err(Error::NoQtBindingFound)
}
