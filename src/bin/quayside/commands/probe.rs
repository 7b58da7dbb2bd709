//! `quayside probe` command

use anyhow::Result;

use quayside::probe::{BindingProbe, ImportProbe};
use quayside::QtApi;

pub fn execute() -> Result<()> {
    let probe = ImportProbe::new();

    println!("Bindings:");
    for api in QtApi::DETECTION_ORDER {
        // A broken candidate is reported in place so the others still probe.
        let status = match probe.is_installed(api) {
            Ok(true) => "installed".to_string(),
            Ok(false) => "not installed".to_string(),
            Err(e) => format!("probe failed: {e}"),
        };
        println!("  {:<8} {}", api.to_string(), status);
    }

    Ok(())
}
