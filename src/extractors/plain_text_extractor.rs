use std::path::Path;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, AppResult};
use crate::extractors::TextExtractor;

static PAGE_NUMBER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\s*$").expect("PAGE_NUMBER_LINE is a valid regex pattern"));
static EXCESS_BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("EXCESS_BLANK_LINES is a valid regex pattern"));
static INLINE_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("INLINE_SPACES is a valid regex pattern"));

/// Reads UTF-8 text files. PDF parsing lives in a separate service, so `.pdf` inputs are refused.
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> AppResult<String> {
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            return Err(AppError::ExtractionError(format!(
                "{} is a PDF; only plain text files are supported",
                path.display()
            )));
        }

        let raw = tokio::fs::read_to_string(path).await?;
        let text = clean_extracted_text(&raw);
        if text.is_empty() {
            return Err(AppError::ExtractionError(format!(
                "no extractable text in {}",
                path.display()
            )));
        }

        log::info!("Extracted {} chars from {}", text.len(), path.display());
        Ok(text)
    }
}

/// Normalises typographic punctuation, drops bare page-number lines and collapses runs of
/// blank lines and spaces.
pub fn clean_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .chars()
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201c}' | '\u{201d}' => '"',
            other => other,
        })
        .collect();

    let kept: Vec<&str> = normalized
        .lines()
        .filter(|line| !PAGE_NUMBER_LINE.is_match(line))
        .collect();
    let joined = kept.join("\n");

    let collapsed = EXCESS_BLANK_LINES.replace_all(&joined, "\n\n");
    INLINE_SPACES.replace_all(&collapsed, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_clean_normalizes_punctuation_and_page_numbers() {
        let raw = "\u{201c}Cells\u{201d} \u{2014} the unit of life\n12\nIt\u{2019}s  true.\n\n\n\nNext";

        let cleaned = clean_extracted_text(raw);

        assert_eq!(cleaned, "\"Cells\" - the unit of life\nIt's true.\n\nNext");
    }

    #[tokio::test]
    async fn test_extracts_text_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .expect("temp file should be created");
        writeln!(file, "Osmosis moves water.\n\n3\n").expect("write should succeed");

        let text = PlainTextExtractor
            .extract(file.path())
            .await
            .expect("extraction should succeed");

        assert_eq!(text, "Osmosis moves water.");
    }

    #[tokio::test]
    async fn test_whitespace_only_file_has_no_extractable_text() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        writeln!(file, "   \n 4 \n").expect("write should succeed");

        let err = PlainTextExtractor.extract(file.path()).await.unwrap_err();

        assert!(matches!(err, AppError::ExtractionError(_)));
    }

    #[tokio::test]
    async fn test_pdf_is_refused() {
        let err = PlainTextExtractor
            .extract(Path::new("lecture.PDF"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ExtractionError(ref m) if m.contains("PDF")));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let err = PlainTextExtractor
            .extract(Path::new("/definitely/not/here.txt"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
