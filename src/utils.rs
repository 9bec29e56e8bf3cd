//! # Utilities Module
//!
//! ## Purpose
//! Common utility functions and helpers used throughout the legal case
//! analyzer for text handling, performance monitoring and request validation.
//!
//! ## Input/Output Specification
//! - **Input**: Various data types requiring common operations
//! - **Output**: Processed data, performance metrics
//! - **Functions**: Text utilities, performance helpers, validation functions

use std::time::Instant;

/// Performance timer for measuring operation duration
pub struct Timer {
    start: Instant,
    name: String,
}

/// Text processing utilities
pub struct TextUtils;

/// Validation utilities
pub struct ValidationUtils;

impl Timer {
    /// Start a new timer with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Stop timer and log duration
    pub fn stop(self) -> u64 {
        let elapsed = self.elapsed_ms();
        tracing::debug!("Timer '{}' completed in {}ms", self.name, elapsed);
        elapsed
    }
}

impl TextUtils {
    /// Truncate text to specified length with ellipsis
    pub fn truncate(text: &str, max_length: usize) -> String {
        if text.len() <= max_length {
            text.to_string()
        } else {
            format!("{}...", &text[..max_length.saturating_sub(3)])
        }
    }

    /// Extract preview text from longer content
    pub fn extract_preview(text: &str, max_words: usize) -> String {
        let words: Vec<&str> = text.split_whitespace().take(max_words).collect();
        let preview = words.join(" ");

        if words.len() >= max_words {
            format!("{}...", preview)
        } else {
            preview
        }
    }

    /// Sanitize text for safe display
    pub fn sanitize(text: &str) -> String {
        text.chars()
            .filter(|c| !c.is_control() || c.is_whitespace())
            .collect()
    }

    /// Count words in text
    pub fn word_count(text: &str) -> usize {
        text.split_whitespace().count()
    }
}

impl ValidationUtils {
    /// Validate a case description against configured length bounds
    pub fn is_valid_description(text: &str, min_length: usize, max_length: usize) -> bool {
        let trimmed = text.trim();
        !trimmed.is_empty() && trimmed.len() >= min_length && trimmed.len() <= max_length
    }
}

/// Macro for timing code blocks
#[macro_export]
macro_rules! time_block {
    ($name:expr, $block:block) => {{
        let timer = $crate::utils::Timer::new($name);
        let result = $block;
        timer.stop();
        result
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_truncate() {
        assert_eq!(TextUtils::truncate("Hello world", 20), "Hello world");
        assert_eq!(TextUtils::truncate("This is a very long text", 10), "This is...");
    }

    #[test]
    fn test_extract_preview() {
        assert_eq!(TextUtils::extract_preview("one two three four", 2), "one two...");
        assert_eq!(TextUtils::extract_preview("one two", 5), "one two");
    }

    #[test]
    fn test_description_validation() {
        assert!(ValidationUtils::is_valid_description("stole my bike", 2, 100));
        assert!(!ValidationUtils::is_valid_description("", 2, 100));
        assert!(!ValidationUtils::is_valid_description("a", 2, 100));
        assert!(!ValidationUtils::is_valid_description("   ", 2, 100));
    }
}
