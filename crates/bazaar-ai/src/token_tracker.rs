//! Token usage tracking for one session.

use crate::TokenUsage;

/// Cumulative token usage across the model calls of a session.
#[derive(Debug, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from an API call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self
            .total
            .output_tokens
            .saturating_add(usage.output_tokens);
        self.call_count += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    /// Number of model calls made.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
