use crate::pam::PamResult;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Text file helpers and transmitted/received text comparison
pub struct TextProcessor;

impl TextProcessor {
    /// Read text from file, trailing whitespace removed
    pub fn read_text_file(file_path: &Path) -> PamResult<String> {
        let content = fs::read_to_string(file_path)?;
        info!("Successfully read text from: {}", file_path.display());
        Ok(content.trim_end().to_string())
    }

    /// Save text to file
    pub fn save_text_file(file_path: &Path, content: &str) -> PamResult<()> {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(file_path, content)?;
        info!("Text saved to: {}", file_path.display());
        Ok(())
    }

    /// Compare two texts symbol by symbol
    pub fn compare_texts(original: &str, received: &str) -> TextComparisonResult {
        let first_difference = original
            .chars()
            .zip(received.chars())
            .enumerate()
            .find(|(_, (o, r))| o != r)
            .map(|(position, (original_char, received_char))| TextDifference {
                position,
                original_char,
                received_char,
            });

        TextComparisonResult {
            is_perfect_match: original == received,
            original_length: original.chars().count(),
            received_length: received.chars().count(),
            first_difference,
        }
    }

    /// Log a comparison the way the loopback reports it
    pub fn log_comparison(comparison: &TextComparisonResult) {
        if comparison.is_perfect_match {
            info!("Text transmission perfect match");
            return;
        }

        warn!("Text transmission has differences");
        warn!("Original length: {} symbols", comparison.original_length);
        warn!("Received length: {} symbols", comparison.received_length);
        if let Some(diff) = &comparison.first_difference {
            warn!(
                "First difference at position {}: {:?} vs {:?}",
                diff.position, diff.original_char, diff.received_char
            );
        }
    }
}

/// Result of text comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextComparisonResult {
    pub is_perfect_match: bool,
    pub original_length: usize,
    pub received_length: usize,
    pub first_difference: Option<TextDifference>,
}

/// Details about the first difference found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDifference {
    pub position: usize,
    pub original_char: char,
    pub received_char: char,
}
