use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    extractors::{PlainTextExtractor, TextExtractor},
    services::{
        focus_sentence_service::FocusSentenceService, study_set_generator::StudySetGenerator,
        study_set_service::StudySetService,
    },
    summarizers::{HttpSummarizer, Summarizer, SummaryLength, UnavailableSummarizer},
};

#[derive(Clone)]
pub struct AppState {
    pub study_set_service: Arc<StudySetService>,
    pub extractor: Arc<dyn TextExtractor>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let summarizer: Arc<dyn Summarizer> = match &config.summarizer_url {
            Some(url) => {
                log::info!("Using summarizer at {}", url);
                Arc::new(HttpSummarizer::new(url.clone(), config.summarizer_api_key.clone()))
            }
            None => {
                log::info!("No SUMMARIZER_URL set, focus sentences come from the chunk text");
                Arc::new(UnavailableSummarizer)
            }
        };

        let length = SummaryLength {
            min_tokens: config.summarizer_min_length,
            max_tokens: config.summarizer_max_length,
        };
        let focus = FocusSentenceService::new(summarizer, length, config.summarizer_timeout());
        let generator = StudySetGenerator::new(focus, config.pipeline_settings());
        let study_set_service = Arc::new(StudySetService::new(
            generator,
            config.worker_pool_size,
            config.generation_timeout(),
            config.generation_seed,
        ));

        Ok(Self {
            study_set_service,
            extractor: Arc::new(PlainTextExtractor),
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            worker_pool_size: 0,
            ..Config::test_config()
        };

        assert!(matches!(AppState::new(config), Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_state_without_summarizer_still_generates() {
        let state = AppState::new(Config::test_config()).expect("valid config");

        let set = state
            .study_set_service
            .generate(crate::models::dto::request::GenerateRequest::new(
                crate::test_utils::fixtures::biology_notes(),
            ))
            .await
            .expect("generation should succeed");

        assert_eq!(set.flashcards.len(), 5);
        assert_eq!(set.quiz.len(), 5);
    }
}
