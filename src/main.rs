use anyhow::Context;
use serde_json::json;

use cinelist_lib::shared::application::PaginationParams;
use cinelist_lib::shared::utils::logger::init_logger;
use cinelist_lib::shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let services = cinelist_lib::bootstrap(&config)
        .await
        .with_context(|| format!("failed to load {}", config.dataset_path().display()))?;

    let params = PaginationParams::new(1, config.movies_per_page)?;
    let first_page = services.movies.browse_by_rank(params).await?;
    let genres = services.movies.genre_names().await?;
    let featured = services.movies.featured_movies(config.featured_movies).await?;

    let summary = json!({
        "movies": first_page.total_count,
        "first_page": first_page,
        "featured": featured,
        "genres": genres,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
