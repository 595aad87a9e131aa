//! Frontend architect prompt kit for the Gemini `generateContent` API.
//!
//! Packages a fixed system-instruction payload tuned for distinctive UI
//! generation, builds text and multimodal request bodies with override
//! merging, and parses the design decisions and HTML document back out of
//! the model's textual response. The HTTP call itself is the caller's
//! concern; this crate only produces and consumes the payloads.

pub mod design;
pub mod gemini;
pub mod parse;
pub mod prompts;

pub use gemini::request::{
    build_multimodal_request, build_request, GenerationOverrides, RequestBuilder, RequestOptions,
};
pub use gemini::types::{
    Content, GenerateContentRequest, GenerationConfig, InlineData, MediaResolution, Part,
    SafetySetting, ThinkingLevel,
};
pub use parse::{extract_html, parse_design_decisions, DesignDecisions};
