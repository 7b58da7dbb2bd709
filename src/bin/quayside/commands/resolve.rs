//! `quayside resolve` command

use anyhow::Result;

use quayside::config;
use quayside::probe::ImportProbe;
use quayside::resolve;

use crate::cli::ResolveArgs;

pub fn execute(args: ResolveArgs) -> Result<()> {
    let selection = config::gather_selection().with_explicit(args.api);
    let api = resolve::resolve(&selection, &ImportProbe::new())?;

    println!("{}", api);

    Ok(())
}
