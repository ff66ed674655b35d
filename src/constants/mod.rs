pub mod prompts;
pub mod stopwords;
pub mod templates;
