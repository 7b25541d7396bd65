use clap::{ArgAction, Parser, Subcommand};
use commands::{board, config, movies, reset};
use movie_board_config::{Config, LoggingConfig, PathManager};
use movie_board_models::WatchStatus;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reelboard")]
#[command(about = "Reelboard - Track the movies you want to watch, are watching and have watched")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the board: Watch List, Watching and Watched columns
    Board {
        /// Only show movies whose name or genre contains this text
        #[arg(long, short)]
        search: Option<String>,
    },
    /// List movies as a flat table
    List {
        /// Only list movies in this column (watchlist, watching, watched)
        #[arg(long)]
        status: Option<WatchStatus>,

        /// Only list movies whose name or genre contains this text
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Add a movie to the board
    Add {
        /// Movie name
        name: String,

        /// Genre, e.g. "Sci-Fi"
        #[arg(long, short, default_value = "")]
        genre: String,

        /// Column to add the movie to
        #[arg(long, default_value = "watchlist")]
        status: WatchStatus,
    },
    /// Move a movie to another column
    #[command(long_about = "Move a movie to another column. This is the command-line equivalent of dragging a card between columns on the board.")]
    Move {
        /// Movie id as shown on the board
        id: String,

        /// Target column (watchlist, watching, watched)
        status: WatchStatus,
    },
    /// Edit a movie's name, genre, rating and review
    #[command(long_about = "Edit a movie's details. Fields that are not given keep their current value; the rating is clamped to 0-5.")]
    Review {
        /// Movie id as shown on the board
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        genre: Option<String>,

        /// Star rating, 0 (unrated) to 5
        #[arg(long, allow_negative_numbers = true)]
        rating: Option<i64>,

        #[arg(long)]
        review: Option<String>,
    },
    /// Remove a movie from the board
    Remove {
        /// Movie id as shown on the board
        id: String,
    },
    /// Clear the saved board; the next command loads movies from the source again
    Reset,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration and where it lives
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let paths = PathManager::default();
    let config_file = paths.config_file();
    // A broken config still gets logging; board commands report the error below
    let loaded = Config::load_or_default(&config_file);
    let logging_config = loaded
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_else(|_| LoggingConfig::default());

    logging::init_logging(cli.verbose, cli.quiet, &logging_config).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    if let Commands::Config { cmd } = cli.command {
        return config::run_config(cmd, &paths, &output);
    }

    let config = loaded
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    match cli.command {
        Commands::Board { search } => board::run_board(&config, &paths, search, &output).await,
        Commands::List { status, search } => board::run_list(&config, &paths, status, search, &output).await,
        Commands::Add { name, genre, status } => movies::run_add(&config, &paths, &name, &genre, status, &output).await,
        Commands::Move { id, status } => movies::run_move(&config, &paths, &id, status, &output).await,
        Commands::Review { id, name, genre, rating, review } => {
            let edit = movies::ReviewEdit { name, genre, rating, review };
            movies::run_review(&config, &paths, &id, edit, &output).await
        }
        Commands::Remove { id } => movies::run_remove(&config, &paths, &id, &output).await,
        Commands::Reset => reset::run_reset(&config, &paths, &output),
        Commands::Config { cmd } => config::run_config(cmd, &paths, &output),
    }
}
