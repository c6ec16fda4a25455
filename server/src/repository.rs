//! Todo storage.
//!
//! The controller only sees the `TodoRepository` trait, so it can be driven by
//! the in-memory store in production and by a stub in tests.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{NewTodo, Todo, TodoId, TodoPatch};

/// Data-access operations over the todo collection.
pub trait TodoRepository: Send + Sync {
    /// All todos in insertion order.
    fn get_all(&self) -> Vec<Todo>;

    fn find_by_id(&self, id: TodoId) -> Option<Todo>;

    /// Assign the next id to `todo`, store it, and return the stored value.
    fn save(&self, todo: NewTodo) -> Todo;

    /// Remove the todo with `id`. Returns `false` when there was nothing to
    /// remove.
    fn delete_by_id(&self, id: TodoId) -> bool;

    /// Apply `patch` to the todo with `id`, returning the updated value, or
    /// `None` when no such todo exists.
    fn update(&self, id: TodoId, patch: TodoPatch) -> Option<Todo>;
}

#[derive(Debug)]
struct Store {
    todos: Vec<Todo>,
    next_id: TodoId,
}

/// Process-local repository backed by a `Vec`.
///
/// Ids start at 1 and are never reused, even after the todo holding one is
/// deleted.
#[derive(Debug)]
pub struct InMemoryTodoRepository {
    store: RwLock<Store>,
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                todos: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Build a repository pre-populated with `todos`, saved in order.
    pub fn with_todos(todos: impl IntoIterator<Item = NewTodo>) -> Self {
        let repo = Self::new();
        for todo in todos {
            repo.save(todo);
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.read().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Every mutation is a single push/remove/assign, so a panicking holder
    // cannot leave the store half-written.
    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn get_all(&self) -> Vec<Todo> {
        self.read().todos.clone()
    }

    fn find_by_id(&self, id: TodoId) -> Option<Todo> {
        self.read().todos.iter().find(|todo| todo.id == id).cloned()
    }

    fn save(&self, todo: NewTodo) -> Todo {
        let mut store = self.write();
        let id = store.next_id;
        store.next_id += 1;
        let todo = todo.into_todo(id);
        store.todos.push(todo.clone());
        todo
    }

    fn delete_by_id(&self, id: TodoId) -> bool {
        let mut store = self.write();
        match store.todos.iter().position(|todo| todo.id == id) {
            Some(index) => {
                store.todos.remove(index);
                true
            }
            None => false,
        }
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> Option<Todo> {
        let mut store = self.write();
        let todo = store.todos.iter_mut().find(|todo| todo.id == id)?;
        patch.apply(todo);
        Some(todo.clone())
    }
}
