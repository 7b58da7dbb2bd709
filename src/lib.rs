//! Quayside - A uniform facade over the Python Qt bindings
//!
//! This crate provides the core library functionality for quayside:
//! probing which bindings are importable, resolving which one to use,
//! loading its modules, and building the uniform facade that embedded
//! test harnesses program against.

pub mod api;
pub mod config;
pub mod error;
pub mod facade;
pub mod loader;
pub mod probe;
pub mod resolve;
pub mod versions;

mod stub;

/// Test doubles and fixtures for quayside unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides probe doubles and fake binding modules
/// registered through `sys.modules`.
#[cfg(test)]
pub mod test_support;

pub use api::QtApi;
pub use error::Error;
pub use facade::{InstallerSlot, QtFacade};
pub use resolve::{resolve, Selection};
pub use versions::VersionInfo;
