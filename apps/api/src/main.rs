mod advisor;
mod career;
mod config;
mod culture;
mod documents;
mod errors;
mod extract;
mod routes;
mod skills;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::GeminiAdvisor;
use crate::career::dataset::load_transitions;
use crate::career::qlearning::TrainingParams;
use crate::career::recommender::CareerRecommender;
use crate::config::Config;
use crate::culture::matcher::CultureMatcher;
use crate::documents::FileTextExtractor;
use crate::routes::build_router;
use crate::skills::extractor::SkillExtractor;
use crate::skills::taxonomy::TECHNICAL_SKILLS;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPath API v{}", env!("CARGO_PKG_VERSION"));

    // Skill taxonomy
    let skills = SkillExtractor::new(TECHNICAL_SKILLS).context("invalid skill taxonomy")?;
    info!("Skill extractor ready ({} skills)", skills.skill_count());

    // Career recommender: training must finish before the listener binds
    let records = load_transitions(&config.career_dataset_path)?;
    let seed = config.training_seed;
    let career = tokio::task::spawn_blocking(move || {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        CareerRecommender::train(records, &TrainingParams::default(), &mut rng)
    })
    .await
    .context("career training task panicked")??;
    info!(
        "Career recommender ready ({} transitions)",
        career.record_count()
    );

    // Culture matcher
    let culture = CultureMatcher::load(&config.culture_dataset_path)?;
    info!("Culture matcher ready ({} companies)", culture.company_count());

    // Collaborators
    let advisor = GeminiAdvisor::new(config.gemini_api_key.clone(), config.advisor_timeout)?;
    info!("Skill advisor initialized (model: {})", advisor::MODEL);
    let extractor = FileTextExtractor::new(config.extraction_timeout);

    // Build app state
    let state = AppState {
        config: config.clone(),
        skills: Arc::new(skills),
        career: Arc::new(career),
        culture: Arc::new(culture),
        extractor: Arc::new(extractor),
        advisor: Arc::new(advisor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
