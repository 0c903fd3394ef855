use anyhow::Result;
use dotenvy::dotenv;
use std::env;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use filmopedia::models::Movie;
use filmopedia::omdb::OmdbClient;
use filmopedia::search::SearchController;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn print_movie(movie: &Movie) {
    println!("{} ({})  [{}]", movie.title, movie.year, movie.rated);
    println!("Released: {}  Runtime: {}", movie.released, movie.runtime);
    println!("Genre:    {}", movie.genre);
    println!("Director: {}", movie.director);
    println!("Writer:   {}", movie.writer);
    println!("Actors:   {}", movie.actors);
    println!("Plot:     {}", movie.plot);
    println!(
        "IMDb:     {} ({} votes, {})",
        movie.imdb_rating, movie.imdb_votes, movie.imdb_id
    );
    println!("Metascore: {}", movie.metascore);
    for rating in &movie.ratings {
        println!("  {}: {}", rating.source, rating.value);
    }
    println!("Awards:   {}", movie.awards);
    if let Some(box_office) = &movie.box_office {
        println!("Box office: {box_office}");
    }
    println!("Poster:   {}", movie.poster);
}

#[tokio::main]
async fn main() -> Result<()> {
    match dotenv() {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => warn!("No .env file loaded ({}) - relying on environment", e),
    }
    init_tracing();

    let title = env::args().skip(1).collect::<Vec<_>>().join(" ");
    let controller = SearchController::new(Arc::new(OmdbClient::from_env()?));
    controller.search(&title).await;

    let state = controller.state();
    if let Some(movie) = &state.movie {
        print_movie(movie);
        return Ok(());
    }
    anyhow::bail!(
        "{}",
        state
            .error_message
            .unwrap_or_else(|| "search produced no outcome".to_string())
    )
}
