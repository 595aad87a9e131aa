//! Deployment defaults for the frontend-architect Gemini setup.

use super::types::{GenerationConfig, SafetySetting, ThinkingLevel};

/// Model the instruction payload is tuned for.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// MIME type assumed for inline media when the caller does not say.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Harm categories filtered at `BLOCK_MEDIUM_AND_ABOVE` by default.
const SAFETY_CATEGORIES: &[&str] = &[
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

const DEFAULT_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

impl Default for GenerationConfig {
    /// Settings tuned for frontend code generation: high thinking for design
    /// decisions, warmer temperature for varied output, room for a complete
    /// single-file page.
    fn default() -> Self {
        Self {
            thinking_level: ThinkingLevel::High,
            temperature: 0.8,
            max_output_tokens: 32_768,
            top_p: 0.95,
            stop_sequences: Vec::new(),
            media_resolution: None,
        }
    }
}

pub fn default_safety_settings() -> Vec<SafetySetting> {
    SAFETY_CATEGORIES
        .iter()
        .map(|category| SafetySetting {
            category: (*category).to_string(),
            threshold: DEFAULT_THRESHOLD.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = GenerationConfig::default();
        assert_eq!(config.thinking_level, ThinkingLevel::High);
        assert_eq!(config.temperature, 0.8);
        assert_eq!(config.max_output_tokens, 32_768);
        assert_eq!(config.top_p, 0.95);
        assert!(config.stop_sequences.is_empty());
        assert!(config.media_resolution.is_none());
    }

    #[test]
    fn test_default_safety_covers_all_four_categories() {
        let settings = default_safety_settings();
        assert_eq!(settings.len(), 4);
        for setting in &settings {
            assert!(setting.category.starts_with("HARM_CATEGORY_"));
            assert_eq!(setting.threshold, "BLOCK_MEDIUM_AND_ABOVE");
        }
    }
}
