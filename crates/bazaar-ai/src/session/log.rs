use crate::content::Turn;

/// Append-only turn log for one session.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.turns.clear();
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// The full ordered log, as sent to the model.
    pub fn snapshot(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
