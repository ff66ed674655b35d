use crate::models::domain::Chunk;

/// Per-chunk output of the pipeline, shared read-only by the flashcard and quiz builders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkResult {
    pub sentence: String,
    pub keywords: Vec<String>,
    pub chunk: Chunk,
}

impl ChunkResult {
    pub fn new(sentence: String, keywords: Vec<String>, chunk: Chunk) -> Self {
        Self {
            sentence,
            keywords,
            chunk,
        }
    }

    pub fn top_keyword(&self) -> Option<&str> {
        self.keywords.first().map(String::as_str)
    }

    pub fn secondary_keyword(&self) -> Option<&str> {
        self.keywords.get(1).map(String::as_str)
    }
}
