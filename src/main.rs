use std::path::PathBuf;
use std::process::ExitCode;

use futures::future::join_all;
use studygen_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::dto::{request::GenerateRequest, response::StudySetOutcome},
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        log::error!("No input files given");
        eprintln!("usage: studygen-server <file>...");
        return ExitCode::FAILURE;
    }

    let state = match AppState::new(Config::from_env()) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcomes = run(&state, &paths).await;
    let generated = outcomes.iter().filter(|o| o.is_generated()).count();
    log::info!("Generated {}/{} study sets", generated, outcomes.len());

    match serde_json::to_string_pretty(&outcomes) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize output: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if generated == 0 {
        log::error!("Every input failed");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Extracts every path, generates the readable ones as a batch, and reports one outcome per path
/// in argument order.
async fn run(state: &AppState, paths: &[PathBuf]) -> Vec<StudySetOutcome> {
    let texts: Vec<AppResult<String>> =
        join_all(paths.iter().map(|path| state.extractor.extract(path))).await;

    let requests: Vec<GenerateRequest> = texts
        .iter()
        .filter_map(|text| text.as_ref().ok())
        .map(|text| {
            GenerateRequest::new(text.clone()).with_counts(
                state.config.default_flashcard_count,
                state.config.default_quiz_count,
            )
        })
        .collect();

    let mut generated = state
        .study_set_service
        .generate_many(requests)
        .await
        .into_iter();

    paths
        .iter()
        .zip(texts)
        .map(|(path, text)| {
            let source = path.display().to_string();
            let result = match text {
                Ok(_) => generated.next().unwrap_or_else(|| {
                    Err(AppError::InternalError("missing batch result".to_string()))
                }),
                Err(e) => {
                    log::warn!("Skipping {}: {}", source, e);
                    Err(e)
                }
            };
            StudySetOutcome::from_result(&source, &result)
        })
        .collect()
}
