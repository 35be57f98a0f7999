//! Google Gemini API client.
//!
//! Implements the `AiClient` trait for Gemini models via the
//! Generative Language API `generateContent` endpoint.

mod api;
mod client;
mod config;
mod wire;

#[cfg(test)]
mod tests;

pub use client::GeminiClient;
pub use config::GeminiConfig;
