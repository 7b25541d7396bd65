use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_board_config::{Config, PathManager};
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_config(cmd: ConfigCommands, paths: &PathManager, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(paths, output),
        ConfigCommands::Init { force } => init_config(paths, force, output),
    }
}

fn show_config(paths: &PathManager, output: &Output) -> Result<()> {
    let config_file = paths.config_file();
    let exists = config_file.exists();

    let config = Config::load_or_default(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            if !exists {
                output.warn(format!("Configuration file not found at: {}", config_file.display()));
                output.info("Showing defaults. Run 'reelboard config init' to write them to disk.");
            }

            println!("\n{}", "Configuration".bright_cyan().bold());
            println!("{}", config_table(&config, paths));

            if let Err(e) = config.validate() {
                output.warn(format!("Configuration is invalid: {}", e));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_file.display().to_string(),
                "exists": exists,
                "slot_file": paths.slots_dir().join(format!("{}.json", config.storage.slot)).display().to_string(),
                "config": config,
            }));
        }
    }

    Ok(())
}

fn config_table(config: &Config, paths: &PathManager) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Setting").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Value").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold),
    ]);

    table.add_row(vec![Cell::new("Config File"), Cell::new(paths.config_file().display().to_string())]);
    table.add_row(vec![Cell::new("Slot"), Cell::new(&config.storage.slot)]);
    table.add_row(vec![
        Cell::new("Slot File"),
        Cell::new(paths.slots_dir().join(format!("{}.json", config.storage.slot)).display().to_string()),
    ]);
    table.add_row(vec![Cell::new("Source"), Cell::new(config.source.kind.as_str())]);
    table.add_row(vec![Cell::new("Latency"), Cell::new(format!("{} ms", config.source.latency_ms))]);
    table.add_row(vec![
        Cell::new("Source URL"),
        Cell::new(config.source.url.as_deref().unwrap_or("-")),
    ]);
    table.add_row(vec![Cell::new("Log Level"), Cell::new(&config.logging.level)]);
    table.add_row(vec![
        Cell::new("JSON Logs"),
        Cell::new(if config.logging.json { "✓".green().to_string() } else { "✗".red().to_string() }),
    ]);
    table.add_row(vec![
        Cell::new("Log File"),
        Cell::new(
            config
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
    ]);
    table
}

fn init_config(paths: &PathManager, force: bool, output: &Output) -> Result<()> {
    let config_file = paths.config_file();
    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {}. Use --force to overwrite it.",
            config_file.display()
        ));
        return Ok(());
    }

    paths
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create directories: {}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}
