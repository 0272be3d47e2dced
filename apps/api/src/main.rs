use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tailor_api::config::Config;
use tailor_api::extraction::cache::{CachingExtractor, ExtractionCache};
use tailor_api::extraction::llm::LlmRequirementExtractor;
use tailor_api::extraction::RequirementExtractor;
use tailor_api::llm_client::{self, LlmClient};
use tailor_api::routes::build_router;
use tailor_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    let extractor = build_extractor(&config)?;
    let state = AppState::new(config.clone(), extractor);

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// LLM extractor, wrapped in the extraction cache unless capacity is 0.
fn build_extractor(config: &Config) -> Result<Option<Arc<dyn RequirementExtractor>>> {
    let Some(api_key) = config.anthropic_api_key.clone() else {
        warn!("ANTHROPIC_API_KEY not set; /api/v1/analyze disabled");
        return Ok(None);
    };

    let llm = LlmClient::new(api_key).context("failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let extractor = LlmRequirementExtractor::new(llm);

    if config.extraction_cache_capacity == 0 {
        info!("Extraction cache disabled");
        return Ok(Some(Arc::new(extractor)));
    }

    info!(
        "Extraction cache enabled ({} entries)",
        config.extraction_cache_capacity
    );
    let cache = ExtractionCache::new(config.extraction_cache_capacity as u64);
    Ok(Some(Arc::new(CachingExtractor::new(extractor, cache))))
}
