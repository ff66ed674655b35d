use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::sync::Semaphore;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::StudySet;
use crate::models::dto::request::GenerateRequest;
use crate::services::run_control::{CancellationFlag, RunControl};
use crate::services::study_set_generator::StudySetGenerator;

pub struct StudySetService {
    generator: StudySetGenerator,
    permits: Arc<Semaphore>,
    run_timeout: Duration,
    seed: Option<u64>,
}

impl StudySetService {
    pub fn new(
        generator: StudySetGenerator,
        worker_pool_size: usize,
        run_timeout: Duration,
        seed: Option<u64>,
    ) -> Self {
        Self {
            generator,
            permits: Arc::new(Semaphore::new(worker_pool_size.max(1))),
            run_timeout,
            seed,
        }
    }

    pub async fn generate(&self, request: GenerateRequest) -> AppResult<StudySet> {
        self.run(request, 0, CancellationFlag::new()).await
    }

    /// Same as `generate`, but `cancel` can abandon the run between chunks.
    pub async fn generate_with_cancellation(
        &self,
        request: GenerateRequest,
        cancel: CancellationFlag,
    ) -> AppResult<StudySet> {
        self.run(request, 0, cancel).await
    }

    /// Generates one study set per request, at most `worker_pool_size` at a time.
    /// Results come back in request order.
    pub async fn generate_many(&self, requests: Vec<GenerateRequest>) -> Vec<AppResult<StudySet>> {
        let runs = requests
            .into_iter()
            .enumerate()
            .map(|(position, request)| self.run(request, position as u64, CancellationFlag::new()));

        join_all(runs).await
    }

    async fn run(
        &self,
        request: GenerateRequest,
        position: u64,
        cancel: CancellationFlag,
    ) -> AppResult<StudySet> {
        request.validate()?;

        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| AppError::InternalError(format!("worker pool closed: {}", e)))?;

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(position)),
            None => SmallRng::from_entropy(),
        };
        let control = RunControl::unbounded()
            .with_cancellation(cancel)
            .with_timeout(self.run_timeout);

        let content = self
            .generator
            .generate(
                &request.text,
                request.n_flashcards,
                request.n_quiz,
                &mut rng,
                &control,
            )
            .await
            .inspect_err(|e| log::warn!("Study set generation stopped: {}", e))?;

        Ok(StudySet::new(&request.text, content))
    }
}
