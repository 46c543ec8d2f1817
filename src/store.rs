use std::sync::{Arc, Mutex};

use crate::models::{TodoAction, TodoItem};

/// Items installed at process start so the deployed demo has something to
/// show. Ids run 1..=3; only the first is already done.
const SEED_ITEMS: &[(&str, bool)] = &[
    ("Stand up the build pipeline", true),
    ("Containerize the app", false),
    ("Deploy to the cluster", false),
];

/// In-memory store for board items.
///
/// Owns the item list and the id counter. All access goes through a single
/// mutex so each read-modify-write stays atomic when axum handles requests
/// concurrently — the data model has no other consistency mechanism. Nothing
/// is persisted; contents are discarded on shutdown.
pub struct TodoStore {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl TodoStore {
    /// Create an empty store with ids starting at 1.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                items: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a store pre-populated with the demo seed items.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().expect("store lock poisoned");
            for (i, (text, done)) in SEED_ITEMS.iter().enumerate() {
                inner.items.push(TodoItem {
                    id: i as u64 + 1,
                    text: text.to_string(),
                    done: *done,
                });
            }
            inner.next_id = SEED_ITEMS.len() as u64 + 1;
        }
        store
    }

    // ============================================================
    // Mutations
    // ============================================================

    /// Append a new pending item.
    ///
    /// Leading and trailing whitespace is trimmed; text that trims to empty
    /// is ignored and returns `None`. The id counter only advances on a
    /// successful add.
    pub fn add(&self, text: &str) -> Option<TodoItem> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut inner = self.inner.lock().expect("store lock poisoned");
        let item = TodoItem {
            id: inner.next_id,
            text: text.to_string(),
            done: false,
        };
        inner.next_id += 1;
        inner.items.push(item.clone());
        tracing::debug!(id = item.id, "added item");
        Some(item)
    }

    /// Flip the `done` flag on the item with a matching id.
    ///
    /// Returns `false` (and changes nothing) if no item matches.
    pub fn toggle(&self, id: u64) -> bool {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        match inner.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.done = !item.done;
                tracing::debug!(id, done = item.done, "toggled item");
                true
            }
            None => false,
        }
    }

    /// Remove every item with a matching id — at most one, since ids are
    /// unique. Returns `false` if nothing matched. Removed ids are never
    /// reassigned.
    pub fn remove(&self, id: u64) -> bool {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);
        let removed = inner.items.len() != before;
        if removed {
            tracing::debug!(id, "removed item");
        }
        removed
    }

    /// Apply a parsed action. No-op outcomes are intentionally swallowed;
    /// the caller redirects back to the board either way.
    pub fn apply(&self, action: TodoAction) {
        match action {
            TodoAction::Add { text } => {
                self.add(&text);
            }
            TodoAction::Toggle { id } => {
                self.toggle(id);
            }
            TodoAction::Delete { id } => {
                self.remove(id);
            }
        }
    }

    // ============================================================
    // Reads
    // ============================================================

    /// All items in insertion order.
    pub fn items(&self) -> Vec<TodoItem> {
        self.inner.lock().expect("store lock poisoned").items.clone()
    }

    /// Items in display order: pending before done, insertion order
    /// preserved within each group (stable sort).
    pub fn items_for_display(&self) -> Vec<TodoItem> {
        let mut items = self.items();
        items.sort_by_key(|item| item.done);
        items
    }

    /// Look up a single item by id.
    pub fn get(&self, id: u64) -> Option<TodoItem> {
        self.inner
            .lock()
            .expect("store lock poisoned")
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }
}

impl Clone for TodoStore {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
