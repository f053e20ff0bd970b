//! Goal repository contract and SQLite slot implementation.
//!
//! # Responsibility
//! - Save and load the full goal collection under one fixed slot key.
//! - Report failures as typed errors; callers choose how to degrade.
//!
//! # Invariants
//! - `save` encodes before touching storage, so an encode failure leaves the
//!   previously persisted collection intact.
//! - `save` overwrites the slot in a single statement.
//! - `load` of an absent slot is an empty collection, not an error.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::goal::Goal;
use crate::repo::codec::{self, CodecError};
use chrono::Utc;
use log::{debug, error};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

/// Fixed name of the slot holding the serialized goal collection.
pub const GOALS_SLOT_KEY: &str = "savedGoals";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for goal collection persistence.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Whole-collection persistence contract.
pub trait GoalRepository {
    /// Replaces the persisted collection with `goals`, preserving order.
    fn save(&self, goals: &[Goal]) -> RepoResult<()>;
    /// Reads the persisted collection; empty when nothing was saved yet.
    fn load(&self) -> RepoResult<Vec<Goal>>;
}

impl<R: GoalRepository + ?Sized> GoalRepository for &R {
    fn save(&self, goals: &[Goal]) -> RepoResult<()> {
        (**self).save(goals)
    }

    fn load(&self) -> RepoResult<Vec<Goal>> {
        (**self).load()
    }
}

/// SQLite-backed repository storing the collection in one `slots` row.
pub struct SqliteGoalRepository {
    conn: Connection,
}

impl SqliteGoalRepository {
    /// Wraps an already-migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens (and migrates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> RepoResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl GoalRepository for SqliteGoalRepository {
    fn save(&self, goals: &[Goal]) -> RepoResult<()> {
        let payload = codec::encode(goals).inspect_err(|err| {
            error!("event=goals_save module=repo status=error error_code=encode_failed error={err}");
        })?;

        self.conn
            .execute(
                "INSERT INTO slots (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at;",
                params![GOALS_SLOT_KEY, payload, Utc::now().timestamp_millis()],
            )
            .inspect_err(|err| {
                error!("event=goals_save module=repo status=error error_code=write_failed error={err}");
            })?;

        debug!(
            "event=goals_save module=repo status=ok count={} bytes={}",
            goals.len(),
            payload.len()
        );
        Ok(())
    }

    fn load(&self) -> RepoResult<Vec<Goal>> {
        let payload: Option<Vec<u8>> = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [GOALS_SLOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            debug!("event=goals_load module=repo status=empty");
            return Ok(Vec::new());
        };

        let goals = codec::decode(&payload)?;
        debug!(
            "event=goals_load module=repo status=ok count={}",
            goals.len()
        );
        Ok(goals)
    }
}
