use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{Movie, extract_editors};
use server::{EnrichmentOrchestrator, ServerConfig, resolve_page, validate_year};
use tmdb_client::{MovieId, MovieMetadataApi, TmdbClient};

/// movie-editors - Look up movies by year along with their editors
#[derive(Parser)]
#[command(name = "movie-editors")]
#[command(
    about = "Movies released in a year, with their editing crew, from TMDB",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of movies released in a year
    Movies {
        /// Release year (YYYY)
        #[arg(long)]
        year: String,

        /// Page of results (positive integer)
        #[arg(long, default_value = "1")]
        page: String,

        /// Print the raw JSON array instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the editors credited on a single movie
    Editors {
        /// TMDB movie ID
        #[arg(long)]
        movie_id: MovieId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::from_env().context("Invalid configuration")?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Movies { year, page, json } => handle_movies(config, year, page, json).await?,
        Commands::Editors { movie_id } => handle_editors(config, movie_id).await?,
    }

    Ok(())
}

/// Handle the 'movies' command
async fn handle_movies(config: ServerConfig, year: String, page: String, json: bool) -> Result<()> {
    // Same rules as the HTTP endpoint
    validate_year(&year)?;
    let page = resolve_page(Some(page.as_str()))?;

    let orchestrator = EnrichmentOrchestrator::from_config(config.tmdb)?;

    let start = Instant::now();
    let movies = orchestrator.enrich_movies_for_year(&year, &page).await?;
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&movies)?);
    } else {
        print_movies(&year, &page, &movies);
        println!("{} {} movies in {:?}", "✓".green(), movies.len(), elapsed);
    }
    Ok(())
}

/// Handle the 'editors' command
async fn handle_editors(config: ServerConfig, movie_id: MovieId) -> Result<()> {
    let client = TmdbClient::new(config.tmdb)?;
    let credits = client
        .movie_credits(movie_id)
        .await
        .with_context(|| format!("Failed to fetch credits for movie {}", movie_id))?;

    let editors = extract_editors(credits.crew.as_deref());
    println!("{}", format!("Editors for movie {}:", movie_id).bold().blue());
    if editors.is_empty() {
        println!("  {}", "(none credited)".dimmed());
    }
    for name in editors {
        println!("  {}{}", "• ".green(), name);
    }
    Ok(())
}

/// Helper function to format and print a page of movies
fn print_movies(year: &str, page: &str, movies: &[Movie]) {
    println!("{}", format!("Movies from {} (page {}):", year, page).bold().blue());

    for (i, movie) in movies.iter().enumerate() {
        println!(
            "{}. {} ({}) - Rating: {:.2}",
            (i + 1).to_string().green(),
            movie.title,
            movie.release_date,
            movie.vote_average
        );
        if movie.editors.is_empty() {
            println!("   Editors: {}", "unknown".dimmed());
        } else {
            println!("   Editors: {}", movie.editors.join(", "));
        }
    }
}
