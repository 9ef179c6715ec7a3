use std::collections::BTreeSet;

use super::OptionId;

/// A user's answer to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Single(OptionId),
    Multiple(BTreeSet<OptionId>),
}

impl Answer {
    /// An empty multiple selection counts as no answer.
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Single(_) => false,
            Answer::Multiple(ids) => ids.is_empty(),
        }
    }

    pub fn contains(&self, id: OptionId) -> bool {
        match self {
            Answer::Single(selected) => *selected == id,
            Answer::Multiple(ids) => ids.contains(&id),
        }
    }
}
