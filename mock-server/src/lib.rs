//! In-memory todo server used as the integration-test backend.
//!
//! Serves the same HTTP contract the client speaks: `GET /todos` lists,
//! `POST /todos` creates (assigning a sequential id when the submitted id
//! is 0), `DELETE /todos/{id}` removes. State lives in a `HashMap` behind
//! an `RwLock`; each `app()` call gets a fresh, empty store.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Default)]
pub struct Store {
    todos: RwLock<HashMap<u64, Todo>>,
    next_id: AtomicU64,
}

pub type Db = Arc<Store>;

pub fn app() -> Router {
    let db: Db = Arc::new(Store::default());
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.todos.read().await;
    Json(todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(mut input): Json<Todo>,
) -> (StatusCode, Json<Todo>) {
    if input.id == 0 {
        input.id = db.next_id.fetch_add(1, Ordering::Relaxed) + 1;
    }
    info!(id = input.id, title = %input.title, "created todo");
    db.todos.write().await.insert(input.id, input.clone());
    (StatusCode::CREATED, Json(input))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = db.todos.write().await;
    todos
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn todo_accepts_missing_id_and_completed() {
        let todo: Todo = serde_json::from_str(r#"{"title":"Minimal"}"#).unwrap();
        assert_eq!(todo.id, 0);
        assert!(!todo.completed);
    }

    #[test]
    fn todo_rejects_missing_title() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"id":1,"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 9,
            title: "Roundtrip".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }
}
