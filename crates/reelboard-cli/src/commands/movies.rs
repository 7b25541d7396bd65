use super::{open_store, report_lifecycle};
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use movie_board_config::{Config, PathManager};
use movie_board_core::MovieStore;
use movie_board_models::{Movie, MovieId, WatchStatus};
use serde_json::json;

/// Review fields given on the command line; `None` keeps the current value
#[derive(Debug, Default)]
pub struct ReviewEdit {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<i64>,
    pub review: Option<String>,
}

impl ReviewEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.genre.is_none() && self.rating.is_none() && self.review.is_none()
    }

    /// Merge with the movie's current values into the full set `set_review` overwrites
    fn resolve(self, current: &Movie) -> (String, String, i64, String) {
        (
            self.name.unwrap_or_else(|| current.name.clone()),
            self.genre.unwrap_or_else(|| current.genre.clone()),
            self.rating.unwrap_or_else(|| i64::from(current.rating.value())),
            self.review.unwrap_or_else(|| current.review.clone()),
        )
    }
}

fn report_movie(store: &MovieStore, id: &MovieId, message: String, output: &Output) {
    match output.format() {
        OutputFormat::Human => output.success(message),
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "type": "success",
                "message": message,
                "movie": store.get(id),
            }));
        }
    }
}

fn not_found(id: &MovieId, output: &Output) {
    output.warn(format!("No movie with id {} on the board", id));
}

pub async fn run_add(
    config: &Config,
    paths: &PathManager,
    name: &str,
    genre: &str,
    status: WatchStatus,
    output: &Output,
) -> Result<()> {
    let mut store = open_store(config, paths).await?;
    report_lifecycle(&store, output);

    match store.add(name, genre, status)? {
        Some(id) => {
            let message = format!("Added \"{}\" to {} (id {})", name.trim(), status.label(), id);
            report_movie(&store, &id, message, output);
        }
        None => output.warn("Movie name cannot be empty; nothing was added"),
    }
    Ok(())
}

pub async fn run_move(config: &Config, paths: &PathManager, id: &str, status: WatchStatus, output: &Output) -> Result<()> {
    let mut store = open_store(config, paths).await?;
    report_lifecycle(&store, output);

    let id = MovieId::from(id);
    if store.set_status(&id, status)? {
        let name = store.get(&id).map(|m| m.name.clone()).unwrap_or_default();
        report_movie(&store, &id, format!("Moved \"{}\" to {}", name, status.label()), output);
    } else {
        not_found(&id, output);
    }
    Ok(())
}

pub async fn run_review(config: &Config, paths: &PathManager, id: &str, edit: ReviewEdit, output: &Output) -> Result<()> {
    let mut store = open_store(config, paths).await?;
    report_lifecycle(&store, output);

    let id = MovieId::from(id);
    let Some(current) = store.get(&id) else {
        not_found(&id, output);
        return Ok(());
    };

    if edit.is_empty() {
        output.info("Nothing to change; pass --name, --genre, --rating or --review");
        return Ok(());
    }

    let (name, genre, rating, review) = edit.resolve(current);
    store.set_review(&id, &name, &genre, rating, &review)?;

    let message = match store.get(&id) {
        Some(movie) if movie.rating.is_rated() => format!("Updated \"{}\" ({})", movie.name, movie.rating),
        Some(movie) => format!("Updated \"{}\"", movie.name),
        None => format!("Updated {}", id),
    };
    report_movie(&store, &id, message, output);
    Ok(())
}

pub async fn run_remove(config: &Config, paths: &PathManager, id: &str, output: &Output) -> Result<()> {
    let mut store = open_store(config, paths).await?;
    report_lifecycle(&store, output);

    let id = MovieId::from(id);
    let name = store.get(&id).map(|m| m.name.clone());
    if store.remove(&id)? {
        output.success(format!("Removed \"{}\"", name.unwrap_or_else(|| id.to_string())));
    } else {
        not_found(&id, output);
    }
    Ok(())
}
