//! Request assembly for the `generateContent` endpoint.
//!
//! Builds are pure: the same prompt and options always produce the same
//! request value. Prompt content is never validated here; an empty or
//! degenerate prompt still yields a structurally valid request and the API
//! gets to reject it.

use super::config::{self, DEFAULT_IMAGE_MIME, DEFAULT_MODEL};
use super::types::{
    Content, GenerateContentRequest, GenerationConfig, InlineData, MediaResolution, Part,
    SafetySetting, ThinkingLevel,
};
use crate::prompts;

/// Per-field overrides for [`GenerationConfig`].
///
/// The overlay is shallow: each present field replaces the default outright,
/// including `stop_sequences`, which is swapped wholesale rather than merged.
#[derive(Debug, Clone, Default)]
pub struct GenerationOverrides {
    pub thinking_level: Option<ThinkingLevel>,
    pub temperature: Option<f64>,
    pub max_output_tokens: Option<u32>,
    pub top_p: Option<f64>,
    pub stop_sequences: Option<Vec<String>>,
    pub media_resolution: Option<MediaResolution>,
}

impl GenerationOverrides {
    fn apply(&self, mut config: GenerationConfig) -> GenerationConfig {
        if let Some(thinking_level) = self.thinking_level {
            config.thinking_level = thinking_level;
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(max_output_tokens) = self.max_output_tokens {
            config.max_output_tokens = max_output_tokens;
        }
        if let Some(top_p) = self.top_p {
            config.top_p = top_p;
        }
        if let Some(stop_sequences) = &self.stop_sequences {
            config.stop_sequences = stop_sequences.clone();
        }
        if let Some(media_resolution) = self.media_resolution {
            config.media_resolution = Some(media_resolution);
        }
        config
    }
}

/// Caller-supplied overrides for a single build.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub model: Option<String>,
    pub generation: GenerationOverrides,
    pub safety_settings: Option<Vec<SafetySetting>>,
}

/// Assembles requests around an injected system-instruction payload.
pub struct RequestBuilder {
    system_prompt: String,
}

impl RequestBuilder {
    /// Builder carrying the shipped frontend-architect payload.
    pub fn new() -> Self {
        Self::with_system_prompt(prompts::FRONTEND_ARCHITECT)
    }

    /// Builder carrying a caller-supplied instruction payload instead.
    pub fn with_system_prompt(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
        }
    }

    /// Text-only request: one user text part, defaults overlaid with
    /// whatever `options` supplies.
    pub fn text_request(&self, prompt: &str, options: &RequestOptions) -> GenerateContentRequest {
        tracing::debug!(prompt_len = prompt.len(), "building text request");
        self.assemble(
            vec![Part::Text {
                text: prompt.to_string(),
            }],
            GenerationConfig::default(),
            options,
        )
    }

    /// Multimodal request: inline media first, then the prompt text.
    ///
    /// `data_base64` is passed through as given; encoding correctness is the
    /// caller's responsibility. `mime_type` falls back to `image/png`.
    /// Media resolution is forced to `high` for analyzing design references,
    /// unless the caller's overrides set it explicitly.
    pub fn multimodal_request(
        &self,
        prompt: &str,
        data_base64: &str,
        mime_type: Option<&str>,
        options: &RequestOptions,
    ) -> GenerateContentRequest {
        let mime_type = mime_type.unwrap_or(DEFAULT_IMAGE_MIME);
        tracing::debug!(
            prompt_len = prompt.len(),
            mime_type,
            "building multimodal request"
        );

        let config = GenerationConfig {
            media_resolution: Some(MediaResolution::High),
            ..GenerationConfig::default()
        };

        self.assemble(
            vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: data_base64.to_string(),
                    },
                },
                Part::Text {
                    text: prompt.to_string(),
                },
            ],
            config,
            options,
        )
    }

    fn assemble(
        &self,
        parts: Vec<Part>,
        base_config: GenerationConfig,
        options: &RequestOptions,
    ) -> GenerateContentRequest {
        GenerateContentRequest {
            model: options
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            system_instruction: Content::system(self.system_prompt.clone()),
            contents: vec![Content::user(parts)],
            generation_config: options.generation.apply(base_config),
            safety_settings: options
                .safety_settings
                .clone()
                .unwrap_or_else(config::default_safety_settings),
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Text-only request with the shipped payload.
pub fn build_request(prompt: &str, options: &RequestOptions) -> GenerateContentRequest {
    RequestBuilder::new().text_request(prompt, options)
}

/// Multimodal request with the shipped payload.
pub fn build_multimodal_request(
    prompt: &str,
    data_base64: &str,
    mime_type: Option<&str>,
    options: &RequestOptions,
) -> GenerateContentRequest {
    RequestBuilder::new().multimodal_request(prompt, data_base64, mime_type, options)
}
