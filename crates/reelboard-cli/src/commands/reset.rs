use super::build_store;
use crate::output::Output;
use color_eyre::Result;
use movie_board_config::{Config, PathManager};

/// Wipe the saved board without loading it first
pub fn run_reset(config: &Config, paths: &PathManager, output: &Output) -> Result<()> {
    let mut store = build_store(config, paths)?;
    store.reset()?;
    output.success(format!(
        "Cleared saved board \"{}\"; movies will be loaded from the {} source on next use",
        store.slot_key(),
        config.source.kind.as_str()
    ));
    Ok(())
}
