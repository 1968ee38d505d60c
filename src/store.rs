/// Durable task storage over SQLite.
use crate::models::Task;
use anyhow::Result;
use rusqlite::{Connection, params};
use std::path::Path;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    task TEXT NOT NULL,
    completed INTEGER DEFAULT 0
)";
const INSERT_TASK: &str = "INSERT INTO tasks (date, task) VALUES (?1, ?2)";
const UPDATE_COMPLETED: &str = "UPDATE tasks SET completed = ?1 WHERE id = ?2";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_FOR_DATE: &str = "SELECT id, date, task, completed FROM tasks WHERE date = ?1";

/// Owns the single `tasks` table. One long-lived connection, held by the
/// application root; every operation is a single statement and therefore
/// its own implicit transaction.
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Open (or create) the database file and ensure the schema exists.
    /// Parent directories are created on first run. Idempotent.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::from_connection(Connection::open(path)?)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute(SCHEMA_TASKS, [])?;
        Ok(Self { conn })
    }

    /// Append a new task with `completed = false` and return its id.
    /// Identical (date, text) pairs may coexist as distinct rows.
    pub fn insert(&self, date: &str, text: &str) -> Result<i64> {
        self.conn.execute(INSERT_TASK, params![date, text])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update one row's completion flag by primary key.
    /// Silent no-op if the id no longer exists.
    pub fn set_completed(&self, id: i64, completed: bool) -> Result<()> {
        self.conn.execute(UPDATE_COMPLETED, params![completed, id])?;
        Ok(())
    }

    /// Remove a row by primary key. Silent no-op if already absent.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.conn.execute(DELETE_TASK, params![id])?;
        Ok(())
    }

    /// All tasks stored under exactly `date`, in insertion (rowid) order.
    pub fn list_for_date(&self, date: &str) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_FOR_DATE)?;
        let rows = stmt.query_map(params![date], |row| {
            Ok(Task {
                id: row.get(0)?,
                date: row.get(1)?,
                text: row.get(2)?,
                completed: row.get(3)?,
            })
        })?;

        let mut tasks = Vec::new();
        for task in rows {
            tasks.push(task?);
        }
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_list() {
        let store = TaskStore::open_in_memory().unwrap();

        let id = store.insert("01.01.2025", "Buy milk").unwrap();
        let tasks = store.list_for_date("01.01.2025").unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_duplicate_tasks_coexist() {
        let store = TaskStore::open_in_memory().unwrap();

        let a = store.insert("02.01.2025", "Water plants").unwrap();
        let b = store.insert("02.01.2025", "Water plants").unwrap();

        assert_ne!(a, b);
        assert_eq!(store.list_for_date("02.01.2025").unwrap().len(), 2);
    }

    #[test]
    fn test_set_completed_touches_one_row() {
        let store = TaskStore::open_in_memory().unwrap();

        let first = store.insert("03.01.2025", "First").unwrap();
        let second = store.insert("03.01.2025", "Second").unwrap();

        store.set_completed(first, true).unwrap();

        let tasks = store.list_for_date("03.01.2025").unwrap();
        let completed: Vec<_> = tasks.iter().filter(|t| t.completed).collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, first);
        assert!(!tasks.iter().any(|t| t.id == second && t.completed));
    }

    #[test]
    fn test_set_completed_is_idempotent() {
        let store = TaskStore::open_in_memory().unwrap();

        let id = store.insert("04.01.2025", "Once or twice").unwrap();
        store.set_completed(id, true).unwrap();
        store.set_completed(id, true).unwrap();

        let tasks = store.list_for_date("04.01.2025").unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].completed);
    }

    #[test]
    fn test_set_completed_on_vanished_id_is_noop() {
        let store = TaskStore::open_in_memory().unwrap();

        let keep = store.insert("05.01.2025", "Keep me").unwrap();
        store.set_completed(keep + 100, true).unwrap();

        let tasks = store.list_for_date("05.01.2025").unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_delete_removes_row_for_good() {
        let store = TaskStore::open_in_memory().unwrap();

        let id = store.insert("06.01.2025", "Short-lived").unwrap();
        store.delete(id).unwrap();

        assert!(store.list_for_date("06.01.2025").unwrap().is_empty());

        // Deleting again is a silent no-op
        store.delete(id).unwrap();
        assert!(store.list_for_date("06.01.2025").unwrap().is_empty());
    }

    #[test]
    fn test_delete_leaves_other_rows_alone() {
        let store = TaskStore::open_in_memory().unwrap();

        let doomed = store.insert("07.01.2025", "Doomed").unwrap();
        let survivor = store.insert("07.01.2025", "Survivor").unwrap();

        store.delete(doomed).unwrap();

        let tasks = store.list_for_date("07.01.2025").unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, survivor);
    }

    #[test]
    fn test_list_matches_date_exactly() {
        let store = TaskStore::open_in_memory().unwrap();

        store.insert("05.03.2024", "Padded").unwrap();

        assert_eq!(store.list_for_date("05.03.2024").unwrap().len(), 1);
        // Unpadded variant is a different key entirely
        assert!(store.list_for_date("5.3.2024").unwrap().is_empty());
        assert!(store.list_for_date("06.03.2024").unwrap().is_empty());
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let store = TaskStore::open_in_memory().unwrap();

        store.insert("08.01.2025", "first").unwrap();
        store.insert("08.01.2025", "second").unwrap();
        store.insert("08.01.2025", "third").unwrap();

        let texts: Vec<_> = store
            .list_for_date("08.01.2025")
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_end_to_end_lifecycle() {
        let store = TaskStore::open_in_memory().unwrap();

        let id = store.insert("01.01.2025", "Buy milk").unwrap();
        let tasks = store.list_for_date("01.01.2025").unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(!tasks[0].completed);

        store.set_completed(id, true).unwrap();
        assert!(store.list_for_date("01.01.2025").unwrap()[0].completed);

        store.delete(id).unwrap();
        assert!(store.list_for_date("01.01.2025").unwrap().is_empty());
    }

    #[test]
    fn test_open_creates_file_and_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("data").join("tasks.db");

        {
            let store = TaskStore::open(&db_path).unwrap();
            store.insert("09.01.2025", "Persisted").unwrap();
        }
        assert!(db_path.exists());

        let store = TaskStore::open(&db_path).unwrap();
        let tasks = store.list_for_date("09.01.2025").unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Persisted");
    }
}
