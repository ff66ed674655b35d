use std::env;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub chunk_max_chars: usize,
    pub max_chunks: usize,
    pub default_flashcard_count: usize,
    pub default_quiz_count: usize,
    pub global_keyword_count: usize,
    pub chunk_keyword_count: usize,
    pub summarizer_url: Option<String>,
    pub summarizer_api_key: Option<SecretString>,
    pub summarizer_timeout_secs: u64,
    pub summarizer_min_length: u32,
    pub summarizer_max_length: u32,
    pub worker_pool_size: usize,
    pub generation_timeout_secs: u64,
    pub generation_seed: Option<u64>,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            chunk_max_chars: env_or("CHUNK_MAX_CHARS", 800),
            max_chunks: env_or("MAX_CHUNKS", 10),
            default_flashcard_count: env_or("DEFAULT_FLASHCARD_COUNT", 5),
            default_quiz_count: env_or("DEFAULT_QUIZ_COUNT", 5),
            global_keyword_count: env_or("GLOBAL_KEYWORD_COUNT", 30),
            chunk_keyword_count: env_or("CHUNK_KEYWORD_COUNT", 5),
            summarizer_url: env_opt("SUMMARIZER_URL"),
            summarizer_api_key: env_opt("SUMMARIZER_API_KEY").map(SecretString::from),
            summarizer_timeout_secs: env_or("SUMMARIZER_TIMEOUT_SECS", 30),
            summarizer_min_length: env_or("SUMMARIZER_MIN_LENGTH", 20),
            summarizer_max_length: env_or("SUMMARIZER_MAX_LENGTH", 60),
            worker_pool_size: env_or("WORKER_POOL_SIZE", 4),
            generation_timeout_secs: env_or("GENERATION_TIMEOUT_SECS", 300),
            generation_seed: env_opt("GENERATION_SEED").and_then(|s| s.trim().parse().ok()),
        }
    }

    /// Rejects values the pipeline cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if self.chunk_max_chars == 0 {
            return Err(AppError::ValidationError(
                "CHUNK_MAX_CHARS must be greater than zero".to_string(),
            ));
        }
        if self.max_chunks == 0 {
            return Err(AppError::ValidationError(
                "MAX_CHUNKS must be greater than zero".to_string(),
            ));
        }
        if self.worker_pool_size == 0 {
            return Err(AppError::ValidationError(
                "WORKER_POOL_SIZE must be greater than zero".to_string(),
            ));
        }
        if self.summarizer_min_length > self.summarizer_max_length {
            return Err(AppError::ValidationError(format!(
                "SUMMARIZER_MIN_LENGTH ({}) exceeds SUMMARIZER_MAX_LENGTH ({})",
                self.summarizer_min_length, self.summarizer_max_length
            )));
        }
        Ok(())
    }

    pub fn summarizer_timeout(&self) -> Duration {
        Duration::from_secs(self.summarizer_timeout_secs)
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            chunk_max_chars: self.chunk_max_chars,
            max_chunks: self.max_chunks,
            global_keyword_count: self.global_keyword_count,
            chunk_keyword_count: self.chunk_keyword_count,
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            chunk_max_chars: 800,
            max_chunks: 10,
            default_flashcard_count: 5,
            default_quiz_count: 5,
            global_keyword_count: 30,
            chunk_keyword_count: 5,
            summarizer_url: None,
            summarizer_api_key: None,
            summarizer_timeout_secs: 1,
            summarizer_min_length: 20,
            summarizer_max_length: 60,
            worker_pool_size: 2,
            generation_timeout_secs: 30,
            generation_seed: Some(7),
        }
    }
}

/// The knobs the generation pipeline reads; everything else in `Config` is plumbing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineSettings {
    pub chunk_max_chars: usize,
    pub max_chunks: usize,
    pub global_keyword_count: usize,
    pub chunk_keyword_count: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            chunk_max_chars: 800,
            max_chunks: 10,
            global_keyword_count: 30,
            chunk_keyword_count: 5,
        }
    }
}
