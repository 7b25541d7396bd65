use clap::ValueEnum;
use comfy_table::{Cell, ContentArrangement, Table};
use movie_board_core::BoardColumns;
use movie_board_models::Movie;
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{} {}", "✓".green(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "success",
                    "message": msg.as_ref()
                }));
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{}", msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "info",
                    "message": msg.as_ref()
                }));
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{} {}", "⚠".yellow(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "warning",
                    "message": msg.as_ref()
                }));
            }
        }
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && self.format != OutputFormat::Human {
            return;
        }

        self.print_json(data);
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(data).unwrap_or_default());
            }
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Human => {
                println!("{}", data);
            }
        }
    }

    /// Flat movie listing: a table for humans, an array for JSON
    pub fn movies(&self, movies: &[&Movie]) {
        match self.format {
            OutputFormat::Human => {
                if self.quiet {
                    return;
                }
                if movies.is_empty() {
                    println!("{}", "No movies found".dimmed());
                    return;
                }
                println!("{}", movie_table(movies));
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.json(&serde_json::to_value(movies).unwrap_or_default());
            }
        }
    }

    /// The three board columns side by side
    pub fn board(&self, columns: &BoardColumns<'_>) {
        match self.format {
            OutputFormat::Human => {
                if self.quiet {
                    return;
                }
                println!("{}", board_table(columns));
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.json(&serde_json::to_value(columns).unwrap_or_default());
            }
        }
    }
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn rating_cell(movie: &Movie) -> String {
    if movie.rating.is_rated() {
        format!("{} ({})", movie.rating.stars(), movie.rating)
    } else {
        "-".to_string()
    }
}

pub fn movie_table(movies: &[&Movie]) -> Table {
    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("ID").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Name").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Genre").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Status").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Rating").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Review").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for movie in movies {
        table.add_row(vec![
            Cell::new(movie.id.as_str()),
            Cell::new(&movie.name),
            Cell::new(&movie.genre),
            Cell::new(movie.status.as_str()),
            Cell::new(rating_cell(movie)),
            Cell::new(&movie.review),
        ]);
    }
    table
}

/// One card per cell: name, genre and stars, with the id underneath
fn card(movie: &Movie) -> String {
    let mut card = movie.name.clone();
    if !movie.genre.is_empty() {
        card.push_str(&format!(" [{}]", movie.genre));
    }
    if movie.rating.is_rated() {
        card.push_str(&format!("\n{}", movie.rating.stars()));
    }
    card.push_str(&format!("\n#{}", movie.id));
    card
}

pub fn board_table(columns: &BoardColumns<'_>) -> Table {
    let mut table = styled_table();
    table.set_header(
        columns
            .iter()
            .map(|(status, movies)| {
                Cell::new(format!("{} ({})", status.label(), movies.len()))
                    .fg(comfy_table::Color::Cyan)
                    .add_attribute(comfy_table::Attribute::Bold)
            })
            .collect::<Vec<_>>(),
    );

    let depth = columns.iter().map(|(_, movies)| movies.len()).max().unwrap_or(0);
    for row in 0..depth {
        table.add_row(
            columns
                .iter()
                .map(|(_, movies)| Cell::new(movies.get(row).map(|m| card(m)).unwrap_or_default()))
                .collect::<Vec<_>>(),
        );
    }
    table
}
