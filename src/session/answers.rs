use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Answer, OptionId};

/// The user's answers keyed by question index. A missing key means unanswered.
///
/// Option ids are not checked against the question at that index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    entries: BTreeMap<usize, Answer>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&Answer> {
        self.entries.get(&index)
    }

    pub fn set_single(&mut self, index: usize, id: OptionId) {
        self.entries.insert(index, Answer::Single(id));
    }

    /// Replace the whole selection at `index`.
    pub fn set_multiple(&mut self, index: usize, ids: BTreeSet<OptionId>) {
        self.entries.insert(index, Answer::Multiple(ids));
    }

    /// Add or remove `id` from the selection at `index`, creating it on first use.
    /// A single-answer entry at `index` is replaced by a fresh selection.
    pub fn toggle_multiple(&mut self, index: usize, id: OptionId, included: bool) {
        let entry = self
            .entries
            .entry(index)
            .or_insert_with(|| Answer::Multiple(BTreeSet::new()));

        if let Answer::Single(_) = entry {
            *entry = Answer::Multiple(BTreeSet::new());
        }

        if let Answer::Multiple(ids) = entry {
            if included {
                ids.insert(id);
            } else {
                ids.remove(&id);
            }
        }
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.entries
            .get(&index)
            .is_some_and(|answer| !answer.is_empty())
    }

    pub fn answered_count(&self) -> usize {
        self.entries.values().filter(|answer| !answer.is_empty()).count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.answered_count() == 0
    }
}
