use crate::error::AppError;
use crate::model::Task;
use std::path::{Path, PathBuf};

pub const STORE_FILE_NAME: &str = "tasks.json";

/// The task list plus the file it was loaded from.
///
/// A store is read once per invocation, mutated in memory, and written back
/// wholesale with [`TaskStore::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Loads the list at `path`.
    ///
    /// A missing, unreadable or undecodable file is replaced by an empty list,
    /// which is written back immediately. Only that write can fail.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match read_tasks(path) {
            Ok(tasks) => {
                tracing::debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
                Ok(Self {
                    path: path.to_path_buf(),
                    tasks,
                })
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "resetting task store");
                let store = Self {
                    path: path.to_path_buf(),
                    tasks: Vec::new(),
                };
                store.save()?;
                Ok(store)
            }
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        write_tasks(&self.path, &self.tasks)?;
        tracing::debug!(path = %self.path.display(), count = self.tasks.len(), "saved tasks");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

pub fn store_path() -> Result<PathBuf, AppError> {
    let cwd = std::env::current_dir().map_err(|err| AppError::io(err.to_string()))?;
    Ok(cwd.join(STORE_FILE_NAME))
}

pub fn read_tasks(path: &Path) -> Result<Vec<Task>, AppError> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| AppError::io(format!("{}: {}", path.display(), err)))?;
    serde_json::from_str(&content).map_err(|err| {
        AppError::invalid_data(format!("invalid JSON in {}: {}", path.display(), err))
    })
}

pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| AppError::io(err.to_string()))?;
    }

    let content = serde_json::to_string_pretty(tasks)
        .map_err(|err| AppError::invalid_data(err.to_string()))?;
    std::fs::write(path, content)
        .map_err(|err| AppError::io(format!("{}: {}", path.display(), err)))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, permissions).map_err(|err| AppError::io(err.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{STORE_FILE_NAME, TaskStore, read_tasks, store_path, write_tasks};
    use crate::model::Task;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};
    use time::macros::datetime;

    fn temp_path(file_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("tasks-{nanos}-{file_name}"))
    }

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            completed: false,
            created_at: datetime!(2025-12-20 00:00:00 UTC),
            completed_at: None,
        }
    }

    #[test]
    fn store_path_uses_fixed_file_name() {
        let path = store_path().unwrap();
        assert_eq!(path.file_name().unwrap(), STORE_FILE_NAME);
        assert!(path.is_absolute());
    }

    #[test]
    fn save_and_load_round_trip_empty() {
        let path = temp_path("empty.json");
        write_tasks(&path, &[]).unwrap();

        let store = TaskStore::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(store.tasks().is_empty());
    }

    #[test]
    fn save_and_load_round_trip_single() {
        let path = temp_path("single.json");
        let original = task("task-1", "demo");

        write_tasks(&path, std::slice::from_ref(&original)).unwrap();
        let loaded = read_tasks(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, vec![original]);
    }

    #[test]
    fn save_and_load_round_trip_preserves_order() {
        let path = temp_path("many.json");
        let mut done = task("task-2", "second");
        done.mark_completed(datetime!(2025-12-21 09:15:30.5 UTC));
        let tasks = vec![task("task-1", "first"), done, task("task-3", "third")];

        let mut store = TaskStore::load(&path).unwrap();
        *store.tasks_mut() = tasks.clone();
        store.save().unwrap();

        let reloaded = TaskStore::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(reloaded.into_tasks(), tasks);
    }

    #[test]
    fn load_missing_file_persists_empty_list() {
        let path = temp_path("missing.json");
        assert!(!path.exists());

        let store = TaskStore::load(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(store.tasks().is_empty());
        assert_eq!(store.path(), path.as_path());
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn load_invalid_json_persists_empty_list() {
        let path = temp_path("corrupt.json");
        fs::write(&path, "{ not json").unwrap();

        let store = TaskStore::load(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(store.tasks().is_empty());
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn load_wrong_shape_persists_empty_list() {
        let path = temp_path("wrong-shape.json");
        let content = "{\n  \"schema_version\": 5,\n  \"tasks\": []\n}";
        fs::write(&path, content).unwrap();

        let store = TaskStore::load(&path).unwrap();
        let healed = read_tasks(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(store.tasks().is_empty());
        assert!(healed.is_empty());
    }

    #[test]
    fn read_tasks_rejects_non_boolean_completed() {
        let path = temp_path("bad-completed.json");
        let content = "[\n  {\n    \"id\": \"task-1\",\n    \"title\": \"demo\",\n    \"completed\": \"yes\",\n    \"createdAt\": \"2025-12-20T00:00:00Z\"\n  }\n]";
        fs::write(&path, content).unwrap();

        let err = read_tasks(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert_eq!(err.code(), "invalid_data");
    }

    #[test]
    fn read_tasks_reports_missing_file_as_io() {
        let path = temp_path("never-written.json");
        let err = read_tasks(&path).unwrap_err();
        assert_eq!(err.code(), "io_error");
    }

    #[test]
    fn written_file_uses_camel_case_fields() {
        let path = temp_path("fields.json");
        let mut done = task("task-1", "demo");
        done.mark_completed(datetime!(2025-12-21 09:00:00 UTC));

        write_tasks(&path, &[done, task("task-2", "open")]).unwrap();
        let stored: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(stored[0]["createdAt"], "2025-12-20T00:00:00Z");
        assert_eq!(stored[0]["completedAt"], "2025-12-21T09:00:00Z");
        assert_eq!(stored[0]["completed"], true);
        assert!(stored[1].get("completedAt").is_none());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn load_reports_unwritable_location() {
        let path = PathBuf::from("/proc/tasks-store-unwritable/tasks.json");
        let err = TaskStore::load(&path).unwrap_err();
        assert_eq!(err.code(), "io_error");
    }
}
