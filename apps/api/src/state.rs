use std::sync::Arc;

use crate::advisor::SkillAdvisor;
use crate::career::recommender::CareerRecommender;
use crate::config::Config;
use crate::culture::matcher::CultureMatcher;
use crate::documents::TextExtractor;
use crate::skills::extractor::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is built before the listener binds and is read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub skills: Arc<SkillExtractor>,
    pub career: Arc<CareerRecommender>,
    pub culture: Arc<CultureMatcher>,
    /// Pluggable document reader. Default: FileTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable advice source. Default: GeminiAdvisor.
    pub advisor: Arc<dyn SkillAdvisor>,
}
