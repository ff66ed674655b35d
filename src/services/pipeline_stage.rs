use std::fmt;

/// Where a document run currently is, as reported in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Chunking,
    KeywordExtraction,
    PerChunkProcessing,
    FlashcardBuilding,
    QuizBuilding,
    Padding,
    EmergencyFallback,
    Done,
}

impl PipelineStage {
    pub fn name(&self) -> &'static str {
        match self {
            PipelineStage::Chunking => "chunking",
            PipelineStage::KeywordExtraction => "keyword_extraction",
            PipelineStage::PerChunkProcessing => "per_chunk_processing",
            PipelineStage::FlashcardBuilding => "flashcard_building",
            PipelineStage::QuizBuilding => "quiz_building",
            PipelineStage::Padding => "padding",
            PipelineStage::EmergencyFallback => "emergency_fallback",
            PipelineStage::Done => "done",
        }
    }

}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
