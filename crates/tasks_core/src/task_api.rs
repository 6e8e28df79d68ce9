use crate::error::AppError;
use crate::model::Task;
use crate::storage::json_store::TaskStore;
use time::OffsetDateTime;

pub fn add_task(store: &mut TaskStore, title: &str) -> Result<Task, AppError> {
    add_task_at(store, title, OffsetDateTime::now_utc())
}

pub fn list_tasks(store: &TaskStore, include_completed: bool) -> Vec<&Task> {
    store
        .tasks()
        .iter()
        .filter(|task| include_completed || task.is_pending())
        .collect()
}

/// Returns `Ok(None)` when no task has `id`; the store is left untouched.
pub fn complete_task(store: &mut TaskStore, id: &str) -> Result<Option<Task>, AppError> {
    complete_task_at(store, id, OffsetDateTime::now_utc())
}

/// Removes the first task whose id equals `id`. `Ok(None)` when there is none.
pub fn delete_task(store: &mut TaskStore, id: &str) -> Result<Option<Task>, AppError> {
    let Some(index) = store.tasks().iter().position(|task| task.id == id) else {
        tracing::debug!(id, "delete: task not found");
        return Ok(None);
    };

    let removed = store.tasks_mut().remove(index);
    store.save()?;

    Ok(Some(removed))
}

fn add_task_at(
    store: &mut TaskStore,
    title: &str,
    created_at: OffsetDateTime,
) -> Result<Task, AppError> {
    let task = Task::new(title, created_at);
    store.tasks_mut().push(task.clone());
    store.save()?;

    tracing::debug!(id = %task.id, "added task");
    Ok(task)
}

fn complete_task_at(
    store: &mut TaskStore,
    id: &str,
    completed_at: OffsetDateTime,
) -> Result<Option<Task>, AppError> {
    let Some(task) = store.tasks_mut().iter_mut().find(|task| task.id == id) else {
        tracing::debug!(id, "complete: task not found");
        return Ok(None);
    };

    task.mark_completed(completed_at);
    let updated = task.clone();
    store.save()?;

    Ok(Some(updated))
}
