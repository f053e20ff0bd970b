//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the goal board (store handle) and its operations to Dart via FRB.
//! - Translate dates and IDs to/from plain strings at the boundary.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Mutation results are envelopes; only `GoalBoard::open` throws.
//! - Dates cross the boundary as `YYYY-MM-DD` on the local calendar.

use chrono::NaiveDate;
use log::warn;
use quickgoals_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, local_today,
    ping as ping_inner, start_of_local_day, CoreConfig, DueStatus, GoalFilter, GoalId, GoalQuery,
    GoalStore, GoalSummary, SqliteGoalRepository, StoreError,
};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One goal row ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalItem {
    /// Stable goal ID in string form.
    pub goal_id: String,
    pub title: String,
    /// Target day as `YYYY-MM-DD`.
    pub target_date: String,
    pub is_completed: bool,
    /// Signed day count; negative means past due.
    pub days_remaining: i64,
    pub is_overdue: bool,
    /// `completed|overdue|due_soon|on_track`.
    pub status: String,
    /// `"N days left"` / `"N days ago"`; absent for completed goals.
    pub countdown: Option<String>,
}

/// List response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalListResponse {
    pub items: Vec<GoalItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Mutation response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalActionResponse {
    /// Whether the change was applied to the board.
    pub ok: bool,
    /// Whether the change was written to storage. `ok && !persisted` means
    /// the change lasts only for this session.
    pub persisted: bool,
    pub goal_id: Option<String>,
    pub message: String,
}

impl GoalActionResponse {
    fn applied(message: impl Into<String>, goal_id: GoalId) -> Self {
        Self {
            ok: true,
            persisted: true,
            goal_id: Some(goal_id.to_string()),
            message: message.into(),
        }
    }

    fn unchanged(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            persisted: false,
            goal_id: None,
            message: message.into(),
        }
    }

    fn from_store_error(err: StoreError, goal_id: GoalId) -> Self {
        Self {
            ok: true,
            persisted: false,
            goal_id: Some(goal_id.to_string()),
            message: format!("Change kept for this session only: {err}"),
        }
    }
}

/// Handle to one open goal collection.
///
/// The UI opens one board per session and keeps it for the app lifetime.
#[flutter_rust_bridge::frb(opaque)]
pub struct GoalBoard {
    store: Mutex<GoalStore<SqliteGoalRepository>>,
}

impl GoalBoard {
    /// Opens the board at `db_path`, or at the configured default path.
    ///
    /// An unreadable stored collection opens as an empty board.
    #[flutter_rust_bridge::frb(sync)]
    pub fn open(db_path: Option<String>) -> Result<GoalBoard, String> {
        let path = match db_path.map(|raw| raw.trim().to_string()) {
            Some(path) if !path.is_empty() => path.into(),
            _ => CoreConfig::from_env().map_err(|err| err.to_string())?.db_path,
        };
        let repo = SqliteGoalRepository::open(&path)
            .map_err(|err| format!("goal board open failed: {err}"))?;
        Ok(Self {
            store: Mutex::new(GoalStore::open(repo)),
        })
    }

    /// Lists goals newest-first, optionally filtered.
    ///
    /// `filter` is one of `all|active|completed|overdue`; `text` matches titles.
    #[flutter_rust_bridge::frb(sync)]
    pub fn list(&self, filter: Option<String>, text: Option<String>) -> GoalListResponse {
        let filter = match filter.as_deref().map(str::parse::<GoalFilter>).transpose() {
            Ok(filter) => filter.unwrap_or_default(),
            Err(err) => {
                return GoalListResponse {
                    items: Vec::new(),
                    message: err.to_string(),
                }
            }
        };
        let store = match self.lock() {
            Ok(store) => store,
            Err(message) => {
                return GoalListResponse {
                    items: Vec::new(),
                    message,
                }
            }
        };

        let today = local_today();
        let query = GoalQuery::new(filter, text);
        let items: Vec<GoalItem> = store
            .query(&query, today, &chrono::Local)
            .into_iter()
            .map(|goal| to_goal_item(GoalSummary::from_goal(goal, today, &chrono::Local)))
            .collect();
        let message = if items.is_empty() {
            "No goals.".to_string()
        } else {
            format!("{} goal(s).", items.len())
        };
        GoalListResponse { items, message }
    }

    /// Adds a goal due on `target_date` (`YYYY-MM-DD`).
    #[flutter_rust_bridge::frb(sync)]
    pub fn add(&self, title: String, target_date: String) -> GoalActionResponse {
        let day = match NaiveDate::parse_from_str(target_date.trim(), DATE_FORMAT) {
            Ok(day) => day,
            Err(err) => {
                return GoalActionResponse::unchanged(format!(
                    "invalid target_date `{target_date}`: {err}"
                ))
            }
        };
        let mut store = match self.lock() {
            Ok(store) => store,
            Err(message) => return GoalActionResponse::unchanged(message),
        };

        match store.add(title, start_of_local_day(day)) {
            Ok(Some(id)) => GoalActionResponse::applied("Goal added.", id),
            Ok(None) => GoalActionResponse::unchanged("Goal title cannot be empty."),
            Err(err) => match store.goals().first() {
                Some(goal) => GoalActionResponse::from_store_error(err, goal.id()),
                None => GoalActionResponse::unchanged(err.to_string()),
            },
        }
    }

    /// Flips completion of `goal_id`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle(&self, goal_id: String) -> GoalActionResponse {
        let id = match parse_goal_id(&goal_id) {
            Ok(id) => id,
            Err(message) => return GoalActionResponse::unchanged(message),
        };
        let mut store = match self.lock() {
            Ok(store) => store,
            Err(message) => return GoalActionResponse::unchanged(message),
        };

        match store.toggle(id) {
            Ok(Some(true)) => GoalActionResponse::applied("Goal completed.", id),
            Ok(Some(false)) => GoalActionResponse::applied("Goal reopened.", id),
            Ok(None) => GoalActionResponse::unchanged("Goal not found."),
            Err(err) => GoalActionResponse::from_store_error(err, id),
        }
    }

    /// Permanently removes `goal_id`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete(&self, goal_id: String) -> GoalActionResponse {
        let id = match parse_goal_id(&goal_id) {
            Ok(id) => id,
            Err(message) => return GoalActionResponse::unchanged(message),
        };
        let mut store = match self.lock() {
            Ok(store) => store,
            Err(message) => return GoalActionResponse::unchanged(message),
        };

        match store.delete(id) {
            Ok(0) => GoalActionResponse::unchanged("Goal not found."),
            Ok(_) => GoalActionResponse::applied("Goal deleted.", id),
            Err(err) => GoalActionResponse::from_store_error(err, id),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, GoalStore<SqliteGoalRepository>>, String> {
        self.store.lock().map_err(|_| {
            warn!("event=board_lock module=ffi status=error error_code=poisoned");
            "goal board is unavailable after an earlier failure".to_string()
        })
    }
}

fn parse_goal_id(raw: &str) -> Result<GoalId, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("invalid goal_id `{raw}`: {err}"))
}

fn to_goal_item(summary: GoalSummary) -> GoalItem {
    GoalItem {
        goal_id: summary.id.to_string(),
        title: summary.title,
        target_date: summary.target_date.format(DATE_FORMAT).to_string(),
        is_completed: summary.is_completed,
        days_remaining: summary.days_remaining,
        is_overdue: summary.is_overdue,
        status: due_status_label(summary.due_status).to_string(),
        countdown: summary.countdown,
    }
}

fn due_status_label(status: DueStatus) -> &'static str {
    match status {
        DueStatus::Completed => "completed",
        DueStatus::Overdue => "overdue",
        DueStatus::DueSoon => "due_soon",
        DueStatus::OnTrack => "on_track",
    }
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, ping, GoalBoard};
    use chrono::{Days, Local};

    fn open_board(dir: &tempfile::TempDir) -> GoalBoard {
        let path = dir.path().join("goals.sqlite3");
        GoalBoard::open(Some(path.to_str().unwrap().to_string())).unwrap()
    }

    fn day_from_today(days: u64, past: bool) -> String {
        let today = Local::now().date_naive();
        let day = if past {
            today.checked_sub_days(Days::new(days))
        } else {
            today.checked_add_days(Days::new(days))
        };
        day.unwrap().format("%Y-%m-%d").to_string()
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "/tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn add_then_list_reports_derived_fields() {
        let dir = tempfile::tempdir().unwrap();
        let board = open_board(&dir);

        let added = board.add("Run 5k".to_string(), day_from_today(10, false));
        assert!(added.ok && added.persisted, "{}", added.message);
        board.add("Read book".to_string(), day_from_today(2, true));

        let listed = board.list(None, None);
        assert_eq!(listed.items.len(), 2);
        assert_eq!(listed.items[0].title, "Read book");
        assert!(listed.items[0].is_overdue);
        assert_eq!(listed.items[0].status, "overdue");
        assert_eq!(listed.items[0].countdown.as_deref(), Some("2 days ago"));
        assert_eq!(listed.items[1].days_remaining, 10);
        assert_eq!(listed.items[1].goal_id, added.goal_id.unwrap());
    }

    #[test]
    fn blank_title_and_bad_date_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let board = open_board(&dir);

        let blank = board.add("  ".to_string(), day_from_today(1, false));
        assert!(!blank.ok);
        let bad_date = board.add("Trip".to_string(), "next week".to_string());
        assert!(!bad_date.ok);
        assert!(bad_date.message.contains("target_date"));
        assert!(board.list(None, None).items.is_empty());
    }

    #[test]
    fn toggle_and_delete_round_trip_through_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let board = open_board(&dir);
        let id = board
            .add("Today".to_string(), day_from_today(0, false))
            .goal_id
            .unwrap();

        let toggled = board.toggle(id.clone());
        assert!(toggled.ok);
        let reopened = open_board(&dir);
        let item = &reopened.list(Some("completed".to_string()), None).items[0];
        assert!(item.is_completed);
        assert!(!item.is_overdue);
        assert_eq!(item.days_remaining, 0);
        assert_eq!(item.countdown, None);

        assert!(board.delete(id.clone()).ok);
        assert!(!board.delete(id).ok);
        assert!(open_board(&dir).list(None, None).items.is_empty());
    }

    #[test]
    fn unknown_ids_and_filters_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let board = open_board(&dir);

        assert!(!board.toggle("not-a-uuid".to_string()).ok);
        assert!(!board.toggle(uuid::Uuid::new_v4().to_string()).ok);
        let listed = board.list(Some("someday".to_string()), None);
        assert!(listed.items.is_empty());
        assert!(listed.message.contains("someday"));
    }
}
