use std::sync::Arc;

use models::todo::Todo;
use tokio::sync::RwLock;

/// In-memory todo collection owned by one running process.
///
/// Insertion order is preserved and ids are not checked for uniqueness;
/// lookups resolve to the first record carrying the id.
#[derive(Clone, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<Vec<Todo>>>,
}

impl TodoStore {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { inner: Arc::new(RwLock::new(todos)) }
    }

    /// The three records every fresh process starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Todo::new("1", "Clean Room", false),
            Todo::new("2", "Read Book", false),
            Todo::new("3", "Record Video", false),
        ])
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Append and hand back the stored copy.
    pub async fn insert(&self, todo: Todo) -> Todo {
        let mut todos = self.inner.write().await;
        todos.push(todo.clone());
        todo
    }

    pub async fn get(&self, id: &str) -> Option<Todo> {
        let todos = self.inner.read().await;
        todos.iter().find(|t| t.id == id).cloned()
    }

    /// Flip `completed` on the first match. The write lock is held across
    /// lookup and flip so concurrent toggles never lose an update.
    pub async fn toggle(&self, id: &str) -> Option<Todo> {
        let mut todos = self.inner.write().await;
        let todo = todos.iter_mut().find(|t| t.id == id)?;
        todo.completed = !todo.completed;
        Some(todo.clone())
    }
}
