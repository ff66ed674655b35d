use serde::Serialize;

use crate::errors::{AppResult, ErrorResponse};
use crate::models::domain::StudySet;

/// One entry of a batch run: either the study set or the reason the document failed.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StudySetOutcome {
    Generated(StudySet),
    Failed { source: String, error: ErrorResponse },
}

impl StudySetOutcome {
    pub fn from_result(source: &str, result: &AppResult<StudySet>) -> Self {
        match result {
            Ok(set) => StudySetOutcome::Generated(set.clone()),
            Err(err) => StudySetOutcome::Failed {
                source: source.to_string(),
                error: ErrorResponse::from(err),
            },
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, StudySetOutcome::Generated(_))
    }
}
