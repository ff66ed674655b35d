use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::errors::{AppError, AppResult};

/// Shared switch a caller flips to abandon a document run.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Cancellation and deadline for one run, checked before each chunk's summarizer call.
#[derive(Debug, Clone, Default)]
pub struct RunControl {
    cancel: CancellationFlag,
    deadline: Option<Instant>,
}

impl RunControl {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_cancellation(mut self, cancel: CancellationFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    pub fn checkpoint(&self, stage: &str) -> AppResult<()> {
        if self.cancel.is_cancelled() {
            return Err(AppError::Cancelled(format!("cancelled during {}", stage)));
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(AppError::Timeout(format!("deadline passed during {}", stage)));
            }
        }
        Ok(())
    }
}
