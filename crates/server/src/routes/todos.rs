use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::types::Message;
use configs::BodyPolicy;
use models::todo::Todo;
use service::todo::TodoStore;
use tracing::info;

use crate::{body, responses::IndentedJson};

#[derive(Clone)]
pub struct TodoState {
    pub store: TodoStore,
    pub body_policy: BodyPolicy,
}

type NotFound = IndentedJson<Message>;

fn not_found() -> NotFound {
    IndentedJson(StatusCode::NOT_FOUND, Message::new("Todo not found"))
}

pub async fn list_todos(State(state): State<TodoState>) -> IndentedJson<Vec<Todo>> {
    IndentedJson(StatusCode::OK, state.store.list().await)
}

/// Append a todo. A body that does not decode (lenient policy) ends the
/// request with an empty 200 and leaves the collection untouched.
pub async fn add_todo(State(state): State<TodoState>, raw: Bytes) -> Response {
    match body::decode::<Todo>(state.body_policy, &raw) {
        Ok(Some(todo)) => {
            let todo = state.store.insert(todo).await;
            info!(id = %todo.id, "added todo");
            IndentedJson(StatusCode::CREATED, todo).into_response()
        }
        Ok(None) => StatusCode::OK.into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_todo(
    State(state): State<TodoState>,
    Path(id): Path<String>,
) -> Result<IndentedJson<Todo>, NotFound> {
    let todo = state.store.get(&id).await.ok_or_else(not_found)?;
    Ok(IndentedJson(StatusCode::OK, todo))
}

pub async fn toggle_todo_status(
    State(state): State<TodoState>,
    Path(id): Path<String>,
) -> Result<IndentedJson<Todo>, NotFound> {
    let todo = state.store.toggle(&id).await.ok_or_else(not_found)?;
    info!(id = %todo.id, completed = todo.completed, "toggled todo");
    Ok(IndentedJson(StatusCode::OK, todo))
}
