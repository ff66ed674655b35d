pub mod chunker;
pub mod distractor_service;
pub mod emergency_fallback;
pub mod focus_sentence_service;
pub mod keyword_extractor;
pub mod pipeline_stage;
pub mod question_builder;
pub mod run_control;
pub mod study_set_generator;
pub mod study_set_service;
pub mod text_helpers;
