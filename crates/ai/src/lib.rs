//! DrinkMinder AI - the hydration coach.
//!
//! This crate turns the user profile and recent water log into a coaching
//! prompt, asks Gemini for a structured verdict, and degrades to a canned
//! insight whenever the provider is unreachable, slow, or incoherent.
//!
//! # Architecture
//!
//! - `insight_service`: Prompt assembly, timeout, and fallback policy
//! - `gemini`: Direct REST client for the `generateContent` endpoint
//! - `insight_model`: Insight DTOs shared with the shell
//! - `error`: AI coach error types

pub mod error;
pub mod gemini;
pub mod insight_model;
pub mod insight_service;

// Re-export main types for convenience
pub use error::AiError;
pub use gemini::{GeminiInsightProvider, InsightProviderTrait, DEFAULT_GEMINI_MODEL};
pub use insight_model::{HydrationInsight, InsightStatus};
pub use insight_service::{
    build_prompt, FakeInsightProvider, InsightConfig, InsightService, InsightServiceTrait,
};
