pub mod chunk;
pub mod chunk_result;
pub mod flashcard;
pub mod quiz_question;
pub mod study_set;
pub use chunk::Chunk;
pub use chunk_result::ChunkResult;
pub use flashcard::Flashcard;
pub use quiz_question::QuizQuestion;
pub use study_set::{StudyContent, StudySet};
