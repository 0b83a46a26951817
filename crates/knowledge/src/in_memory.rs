//! In-memory store: useful for testing and throwaway sessions.

use std::cell::{Cell, RefCell};

use cognibot_core::error::KnowledgeError;
use cognibot_core::knowledge::{KnowledgeBase, KnowledgeStore};

/// Keeps the last saved knowledge base in memory and counts saves.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: RefCell<KnowledgeBase>,
    saves: Cell<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already populated knowledge base.
    pub fn with(knowledge: KnowledgeBase) -> Self {
        Self {
            saved: RefCell::new(knowledge),
            saves: Cell::new(0),
        }
    }

    /// A copy of what was last saved.
    pub fn snapshot(&self) -> KnowledgeBase {
        self.saved.borrow().clone()
    }

    /// How many times `save` was called.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl KnowledgeStore for InMemoryStore {
    fn name(&self) -> &str {
        "in_memory"
    }

    fn load(&self) -> KnowledgeBase {
        self.snapshot()
    }

    fn save(&self, knowledge: &KnowledgeBase) -> Result<(), KnowledgeError> {
        *self.saved.borrow_mut() = knowledge.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
