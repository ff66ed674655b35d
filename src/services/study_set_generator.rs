use std::collections::HashSet;

use rand::Rng;

use crate::config::PipelineSettings;
use crate::constants::templates::{DEFAULT_FLASHCARD_KEYWORD, PADDING_FLASHCARD_KEYWORD};
use crate::errors::AppResult;
use crate::models::domain::{ChunkResult, Flashcard, QuizQuestion, StudyContent};
use crate::services::chunker::Chunker;
use crate::services::emergency_fallback::emergency_content;
use crate::services::focus_sentence_service::FocusSentenceService;
use crate::services::keyword_extractor::extract_keywords;
use crate::services::pipeline_stage::PipelineStage;
use crate::services::question_builder::{build_flashcard, build_quiz_question};
use crate::services::run_control::RunControl;

const MIN_QUIZ_KEYWORD_CHARS: usize = 3;

/// Keywords already spent on a quiz question in the current document.
#[derive(Debug, Default)]
pub struct UsedKeywords(HashSet<String>);

impl UsedKeywords {
    /// Marks `keyword` as used; false when it already was or is too short to quiz on.
    pub fn claim(&mut self, keyword: &str) -> bool {
        keyword.chars().count() > MIN_QUIZ_KEYWORD_CHARS && self.0.insert(keyword.to_string())
    }
}

/// Runs the whole document pipeline: chunk, extract keywords, focus each chunk, then build,
/// pad and trim the flashcards and quiz questions.
#[derive(Clone)]
pub struct StudySetGenerator {
    chunker: Chunker,
    focus: FocusSentenceService,
    settings: PipelineSettings,
}

impl StudySetGenerator {
    pub fn new(focus: FocusSentenceService, settings: PipelineSettings) -> Self {
        Self {
            chunker: Chunker::new(settings.chunk_max_chars, settings.max_chunks),
            focus,
            settings,
        }
    }

    /// Never fails on malformed or empty text; the only errors are cancellation and the
    /// run deadline, in which case nothing is returned.
    pub async fn generate<R: Rng + Send>(
        &self,
        text: &str,
        n_flashcards: usize,
        n_quiz: usize,
        rng: &mut R,
        control: &RunControl,
    ) -> AppResult<StudyContent> {
        enter(PipelineStage::Chunking);
        let chunks = self.chunker.chunk(text);
        log::info!("Got {} chunks from {} characters of text", chunks.len(), text.len());

        if chunks.is_empty() {
            enter(PipelineStage::EmergencyFallback);
            let content = emergency_content(text, n_flashcards, n_quiz, rng);
            log::info!(
                "Emergency fallback produced {} flashcards, {} quiz questions",
                content.flashcards.len(),
                content.quiz.len()
            );
            return Ok(content);
        }

        enter(PipelineStage::KeywordExtraction);
        let keyword_pool = extract_keywords(text, self.settings.global_keyword_count);
        log::debug!("Global keywords: {:?}", keyword_pool.iter().take(10).collect::<Vec<_>>());

        enter(PipelineStage::PerChunkProcessing);
        let mut results = Vec::with_capacity(chunks.len());
        let total = chunks.len();
        for chunk in chunks {
            control.checkpoint(&format!("chunk {}/{}", chunk.index + 1, total))?;
            log::debug!("Processing chunk {}/{}", chunk.index + 1, total);

            let sentence = self.focus.focus_sentence(&chunk.text).await;
            let keywords = extract_keywords(&chunk.text, self.settings.chunk_keyword_count);
            results.push(ChunkResult::new(sentence, keywords, chunk));
        }

        enter(PipelineStage::FlashcardBuilding);
        let mut flashcards = build_flashcards(&results, n_flashcards, rng);

        enter(PipelineStage::QuizBuilding);
        let mut used = UsedKeywords::default();
        let mut quiz = build_quiz(&results, &keyword_pool, n_quiz, &mut used, rng);

        if flashcards.len() < n_flashcards || quiz.len() < n_quiz {
            enter(PipelineStage::Padding);
            log::info!(
                "Only got {} flashcards, {} quiz questions, padding",
                flashcards.len(),
                quiz.len()
            );
            pad(
                &results,
                &keyword_pool,
                Targets { n_flashcards, n_quiz },
                &mut flashcards,
                &mut quiz,
                &mut used,
                rng,
            );
        }

        flashcards.truncate(n_flashcards);
        quiz.truncate(n_quiz);

        enter(PipelineStage::Done);
        log::info!(
            "Done: {} flashcards, {} quiz questions",
            flashcards.len(),
            quiz.len()
        );

        Ok(StudyContent {
            flashcards,
            quiz,
            fallback_used: false,
        })
    }
}

fn enter(stage: PipelineStage) {
    log::debug!("Pipeline stage: {}", stage);
}

#[derive(Debug, Clone, Copy)]
struct Targets {
    n_flashcards: usize,
    n_quiz: usize,
}

fn build_flashcards<R: Rng + ?Sized>(
    results: &[ChunkResult],
    n_flashcards: usize,
    rng: &mut R,
) -> Vec<Flashcard> {
    results
        .iter()
        .take(n_flashcards)
        .map(|result| {
            let keyword = result.top_keyword().unwrap_or(DEFAULT_FLASHCARD_KEYWORD);
            build_flashcard(&result.sentence, keyword, rng)
        })
        .collect()
}

fn build_quiz<R: Rng + ?Sized>(
    results: &[ChunkResult],
    keyword_pool: &[String],
    n_quiz: usize,
    used: &mut UsedKeywords,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let mut quiz = Vec::new();
    for result in results {
        if quiz.len() >= n_quiz {
            break;
        }
        if let Some(keyword) = result.keywords.iter().find(|k| used.claim(k)) {
            quiz.push(build_quiz_question(&result.sentence, keyword, keyword_pool, rng));
        }
    }
    quiz
}

/// Second pass over the chunks using each chunk's secondary keywords.
fn pad<R: Rng + ?Sized>(
    results: &[ChunkResult],
    keyword_pool: &[String],
    targets: Targets,
    flashcards: &mut Vec<Flashcard>,
    quiz: &mut Vec<QuizQuestion>,
    used: &mut UsedKeywords,
    rng: &mut R,
) {
    for result in results {
        if flashcards.len() < targets.n_flashcards {
            let keyword = result
                .secondary_keyword()
                .or_else(|| result.top_keyword())
                .unwrap_or(PADDING_FLASHCARD_KEYWORD);
            flashcards.push(build_flashcard(&result.sentence, keyword, rng));
        }
        if quiz.len() < targets.n_quiz {
            if let Some(keyword) = result.keywords.iter().skip(1).find(|k| used.claim(k)) {
                quiz.push(build_quiz_question(&result.sentence, keyword, keyword_pool, rng));
            }
        }
    }
}
