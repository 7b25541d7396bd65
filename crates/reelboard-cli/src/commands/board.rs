use super::{open_store, report_lifecycle};
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use movie_board_config::{Config, PathManager};
use movie_board_models::WatchStatus;
use owo_colors::OwoColorize;

pub async fn run_board(config: &Config, paths: &PathManager, search: Option<String>, output: &Output) -> Result<()> {
    let mut store = open_store(config, paths).await?;
    report_lifecycle(&store, output);

    if let Some(query) = search {
        store.set_search_query(query);
    }

    let columns = store.columns();
    if output.format() == OutputFormat::Human && !output.is_quiet() {
        println!("\n{}", "Movie Tracker".bright_cyan().bold());
        if !store.search_query().is_empty() {
            println!(
                "{}",
                format!("Showing {} of {} movies matching \"{}\"", columns.total(), store.all().len(), store.search_query())
                    .bright_black()
            );
        }
    }
    output.board(&columns);
    Ok(())
}

pub async fn run_list(
    config: &Config,
    paths: &PathManager,
    status: Option<WatchStatus>,
    search: Option<String>,
    output: &Output,
) -> Result<()> {
    let mut store = open_store(config, paths).await?;
    report_lifecycle(&store, output);

    if let Some(query) = search {
        store.set_search_query(query);
    }

    let movies = match status {
        Some(status) => store.by_status(status),
        None => store.filtered(),
    };
    output.movies(&movies);
    Ok(())
}
