//! `quayside versions` command

use anyhow::Result;
use pyo3::Python;

use quayside::config;
use quayside::QtFacade;

use crate::cli::VersionsArgs;

pub fn execute(args: VersionsArgs) -> Result<()> {
    let selection = config::gather_selection().with_explicit(args.api);
    let facade = QtFacade::bootstrap(&selection)?;
    let info = Python::attach(|py| facade.versions(py))?;

    println!("Qt API:      {}", info.qt_api);
    println!("API version: {}", info.qt_api_version);
    println!("Qt runtime:  {}", info.runtime);
    println!("Qt compiled: {}", info.compiled);

    Ok(())
}
