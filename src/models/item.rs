use serde::{Deserialize, Serialize};

/// A single entry on the to-do board.
///
/// Items live in process memory only and are discarded on shutdown. Ids are
/// assigned monotonically by the store and never reused, even after the item
/// they belonged to is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    /// Trimmed, non-empty text. The 100-character bound is enforced by the
    /// form's `maxlength` attribute; the server does not re-validate length.
    pub text: String,
    pub done: bool,
}
