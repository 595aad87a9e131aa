//! Fixed instruction payloads shipped with the crate.
//!
//! The payload is opaque domain copy: the builder injects it verbatim and
//! never inspects it. Swapping instruction sets means swapping the file (and
//! bumping the version tag), not touching builder logic.

pub const FRONTEND_ARCHITECT: &str = include_str!("../data/prompts/frontend_architect.md");

/// Version tag for the shipped payload, bumped whenever the copy changes.
pub const FRONTEND_ARCHITECT_VERSION: &str = "2026-08";
