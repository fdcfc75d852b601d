//! SQLite-backed local snapshot store.
//!
//! A single key-value table holds JSON snapshots of everything that must
//! survive a restart: the history ledger, the gamification counters, the
//! credential store, the local task list, and the session engine itself.
//! Entries are read once at startup and written after every mutation;
//! writes are best-effort and never block timer progress.

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::data_dir;
use crate::accounts::CredentialStore;
use crate::engine::SessionEngine;
use crate::error::{CoreError, Result, StorageError};
use crate::gamification::GamificationState;
use crate::history::HistoryLedger;
use crate::task::Task;

const KEY_ENGINE: &str = "session_engine";
const KEY_HISTORY: &str = "history";
const KEY_GAMIFICATION: &str = "gamification_state";
const KEY_CREDENTIALS: &str = "user_credential_store";
const KEY_TASKS: &str = "tasks";
const KEY_CALENDAR: &str = "calendar_tasks";

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/focusloop/focusloop.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    pub fn open() -> Result<Self> {
        Self::open_at(&data_dir()?.join("focusloop.db"))
    }

    /// Open a database at an explicit path.
    pub fn open_at(path: &std::path::Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| {
            CoreError::Storage(StorageError::OpenFailed {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StorageError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );",
            )
            .map_err(StorageError::from)?;
        Ok(())
    }

    // ── Key-value primitives ─────────────────────────────────────────

    pub fn kv_get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv WHERE key = ?1")
            .map_err(StorageError::from)?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(CoreError::Storage(e.into())),
        }
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map_err(StorageError::from)?;
        Ok(())
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.kv_get(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.kv_set(key, &serde_json::to_string(value)?)
    }

    // ── Typed snapshots ──────────────────────────────────────────────

    pub fn load_engine(&self) -> Result<Option<SessionEngine>> {
        self.load_json(KEY_ENGINE)
    }

    pub fn save_engine(&self, engine: &SessionEngine) -> Result<()> {
        self.save_json(KEY_ENGINE, engine)
    }

    pub fn load_history(&self) -> Result<HistoryLedger> {
        Ok(self.load_json(KEY_HISTORY)?.unwrap_or_default())
    }

    pub fn save_history(&self, ledger: &HistoryLedger) -> Result<()> {
        self.save_json(KEY_HISTORY, ledger)
    }

    pub fn load_gamification(&self) -> Result<GamificationState> {
        Ok(self.load_json(KEY_GAMIFICATION)?.unwrap_or_default())
    }

    pub fn save_gamification(&self, state: &GamificationState) -> Result<()> {
        self.save_json(KEY_GAMIFICATION, state)
    }

    pub fn load_credentials(&self) -> Result<CredentialStore> {
        Ok(self.load_json(KEY_CREDENTIALS)?.unwrap_or_default())
    }

    pub fn save_credentials(&self, store: &CredentialStore) -> Result<()> {
        self.save_json(KEY_CREDENTIALS, store)
    }

    pub fn load_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.load_json(KEY_TASKS)?.unwrap_or_default())
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        self.save_json(KEY_TASKS, &tasks)
    }

    pub fn load_calendar(&self) -> Result<crate::calendar::CalendarTaskMap> {
        Ok(self.load_json(KEY_CALENDAR)?.unwrap_or_default())
    }

    pub fn save_calendar(&self, map: &crate::calendar::CalendarTaskMap) -> Result<()> {
        self.save_json(KEY_CALENDAR, map)
    }
}
