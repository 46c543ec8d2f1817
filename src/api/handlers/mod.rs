use axum::{
    extract::{rejection::FormRejection, Form, State},
    response::{Html, IntoResponse, Redirect},
    Json,
};

use crate::api::render;
use crate::models::{ActionForm, TodoAction};
use crate::store::TodoStore;

// ============================================================
// Board
// ============================================================

/// GET `/` — render the board, pending items first.
pub async fn board(State(store): State<TodoStore>) -> Html<String> {
    Html(render::board_page(&store.items_for_display()))
}

/// POST `/` — apply the posted action, then redirect back to the board.
///
/// Every POST answers with `303 See Other`, including no-ops: bodies axum
/// cannot parse, unknown actions, unparsable ids and empty text all fall
/// through without surfacing an error, so a browser refresh never resubmits
/// a mutation.
pub async fn apply_action(
    State(store): State<TodoStore>,
    form: Result<Form<ActionForm>, FormRejection>,
) -> Redirect {
    if let Ok(Form(form)) = form {
        match TodoAction::from_form(&form) {
            Some(action) => store.apply(action),
            None => tracing::debug!(action = ?form.action, "ignoring unusable form post"),
        }
    }
    Redirect::to("/")
}

// ============================================================
// Greeting (pipeline iterations 1 and 2)
// ============================================================

/// GET `/` on the hello variant — the greeting plus the deployed version.
pub async fn hello(State(version): State<String>) -> Html<String> {
    Html(render::hello_page(&version))
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
