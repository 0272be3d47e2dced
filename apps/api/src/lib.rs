//! Tailor API — deterministic resume-vs-job scoring.
//!
//! `scoring` is the pure core and has no I/O. The remaining modules wire it to
//! an LLM requirement extractor and an axum HTTP surface.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod llm_client;
pub mod routes;
pub mod scoring;
pub mod state;
