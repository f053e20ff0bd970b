//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `quickgoals_core` linkage without the Flutter/FFI runtime.
//! - Dump the stored goal list with derived status for quick inspection.
//!
//! Usage: `quickgoals [DB_PATH]` (defaults to `QUICKGOALS_DB_PATH` or the
//! temp-dir database).

use quickgoals_core::{
    init_logging, local_today, CoreConfig, GoalStore, GoalSummary, SqliteGoalRepository,
};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("quickgoals_core ping={}", quickgoals_core::ping());
    println!("quickgoals_core version={}", quickgoals_core::core_version());

    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(log_dir) = config.log_dir.as_ref().and_then(|dir| dir.to_str()) {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let db_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or(config.db_path);
    let repo = match SqliteGoalRepository::open(&db_path) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("cannot open {}: {err}", db_path.display());
            return ExitCode::FAILURE;
        }
    };
    let store = match GoalStore::try_open(repo) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("{err}; treating {} as empty", db_path.display());
            return ExitCode::SUCCESS;
        }
    };

    println!("db={} goals={}", db_path.display(), store.len());
    for summary in store.summaries(local_today(), &chrono::Local) {
        println!("{}", render_line(&summary));
    }
    ExitCode::SUCCESS
}

fn render_line(summary: &GoalSummary) -> String {
    let mark = if summary.is_completed { "[x]" } else { "[ ]" };
    let countdown = summary.countdown.as_deref().unwrap_or("done");
    format!(
        "{mark} {} due={} {} id={}",
        summary.title, summary.target_date, countdown, summary.id
    )
}
