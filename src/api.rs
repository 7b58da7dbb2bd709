//! Qt binding identifiers.
//!
//! `QtApi` is the closed set of bindings quayside can adapt to. `PyQt4V2`
//! is the sip-v2 flavor of PyQt4: same root package, extra pre-import
//! configuration. `None` is the toolkit-less stand-in backend; it is never
//! probed and never parsed from a configured name, only selected by stub
//! mode.

/// Identifier for a Python Qt binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QtApi {
    /// Original PySide (Qt 4)
    PySide,
    /// PyQt4 with the default sip API
    PyQt4,
    /// PyQt4 with sip API v2 selected before import
    PyQt4V2,
    /// PyQt5
    PyQt5,
    /// Stand-in backend for environments without any Qt toolkit
    None,
}

impl QtApi {
    /// Auto-detection candidates, probed in order.
    pub const DETECTION_ORDER: [QtApi; 3] = [QtApi::PySide, QtApi::PyQt4, QtApi::PyQt5];

    /// Get the API name as a configuration string.
    pub fn as_str(&self) -> &'static str {
        match self {
            QtApi::PySide => "pyside",
            QtApi::PyQt4 => "pyqt4",
            QtApi::PyQt4V2 => "pyqt4v2",
            QtApi::PyQt5 => "pyqt5",
            QtApi::None => "none",
        }
    }

    /// Binding name as reported in version records.
    ///
    /// Both PyQt4 flavors report `PyQt4`.
    pub fn display_name(&self) -> &'static str {
        match self {
            QtApi::PySide => "PySide",
            QtApi::PyQt4 | QtApi::PyQt4V2 => "PyQt4",
            QtApi::PyQt5 => "PyQt5",
            QtApi::None => "none",
        }
    }

    /// Root Python package imported for this binding.
    ///
    /// `PyQt4` and `PyQt4V2` share one root package. The stand-in backend
    /// imports nothing.
    pub fn root_module(&self) -> Option<&'static str> {
        match self {
            QtApi::PySide => Some("PySide"),
            QtApi::PyQt4 | QtApi::PyQt4V2 => Some("PyQt4"),
            QtApi::PyQt5 => Some("PyQt5"),
            QtApi::None => None,
        }
    }
}

impl std::fmt::Display for QtApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QtApi {
    type Err = QtApiParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pyside" => Ok(QtApi::PySide),
            "pyqt4" => Ok(QtApi::PyQt4),
            "pyqt4v2" => Ok(QtApi::PyQt4V2),
            "pyqt5" => Ok(QtApi::PyQt5),
            _ => Err(QtApiParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized Qt API name.
#[derive(Debug, Clone)]
pub struct QtApiParseError(pub String);

impl std::fmt::Display for QtApiParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid Qt API '{}', valid values: pyside, pyqt4, pyqt4v2, pyqt5",
            self.0
        )
    }
}

impl std::error::Error for QtApiParseError {}
