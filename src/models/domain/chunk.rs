use serde::{Deserialize, Serialize};

/// A contiguous, topic-sized span of cleaned document text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Chunk {
    /// Position of the chunk in the document; chunk 0 is treated as the most prominent.
    pub index: usize,
    pub text: String,
}

impl Chunk {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}
