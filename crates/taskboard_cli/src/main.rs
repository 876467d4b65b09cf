//! Command-line boundary for the task dashboard.
//!
//! # Responsibility
//! - Translate subcommands into dashboard mutations and views.
//! - Require explicit confirmation before deleting.
//! - Degrade to an in-memory session when the durable store cannot open.

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use log::warn;
use rusqlite::Connection;
use std::path::Path;
use std::process::ExitCode;
use taskboard_core::db::open_db;
use taskboard_core::{
    init_config, init_logging, Dashboard, FilterSelection, KeyValueStore, MemoryKeyValueStore,
    SelectionCounts, SqliteKeyValueStore, Task, TaskId,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match init_config(cli.to_config()) {
        Ok(config) => config,
        Err(_) => {
            eprintln!("error: configuration already initialized");
            return ExitCode::FAILURE;
        }
    };

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let conn = open_connection(&config.db_path);
    let store: Box<dyn KeyValueStore + '_> = match &conn {
        Some(conn) => Box::new(SqliteKeyValueStore::new(conn)),
        None => {
            warn!("event=store_open module=cli status=fallback mode=memory");
            eprintln!("warning: durable store unavailable; changes will not be saved");
            Box::new(MemoryKeyValueStore::new())
        }
    };
    let mut dashboard = Dashboard::open(store, config.storage_key.as_str());

    match run(&mut dashboard, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn open_connection(path: &Path) -> Option<Connection> {
    if let Some(parent) = path.parent() {
        if let Err(err) = std::fs::create_dir_all(parent) {
            warn!(
                "event=store_open module=cli status=error path={} error={err}",
                parent.display()
            );
            return None;
        }
    }
    open_db(path)
        .map_err(|err| {
            warn!(
                "event=store_open module=cli status=error path={} error={err}",
                path.display()
            );
        })
        .ok()
}

fn run<S: KeyValueStore>(dashboard: &mut Dashboard<S>, command: Command) -> Result<(), String> {
    match command {
        Command::Add { title, description } => {
            let task = dashboard
                .add_task(&title, &description)
                .map_err(|err| err.to_string())?;
            println!("created {}", format_task(&task));
        }
        Command::Status { id, status } => {
            let task_id = TaskId::new(id);
            if dashboard
                .update_status(&task_id, &status)
                .map_err(|err| err.to_string())?
            {
                println!("updated {task_id}");
            } else {
                println!("no task with id {task_id}");
            }
        }
        Command::Delete { id, yes } => {
            let task_id = TaskId::new(id);
            if !yes {
                return Err(format!(
                    "deleting {task_id} cannot be undone; re-run with --yes to confirm"
                ));
            }
            if dashboard.delete_task(&task_id) {
                println!("deleted {task_id}");
            } else {
                println!("no task with id {task_id}");
            }
        }
        Command::List { filter } => {
            let selection = filter
                .parse::<FilterSelection>()
                .map_err(|err| err.to_string())?;
            dashboard.set_filter(selection);
            print_counts(&dashboard.counts(), selection);
            let mut empty = true;
            for task in dashboard.visible_tasks() {
                println!("{}", format_task(task));
                if !task.description.is_empty() {
                    println!("    {}", task.description);
                }
                empty = false;
            }
            if empty {
                println!("No tasks yet. Create one to get started.");
            }
        }
        Command::Counts => print_counts(&dashboard.counts(), dashboard.filter()),
    }
    Ok(())
}

fn format_task(task: &Task) -> String {
    format!("[{}] {} {}", task.status, task.id, task.title)
}

fn print_counts(counts: &SelectionCounts, active: FilterSelection) {
    let line = counts
        .iter()
        .map(|(selection, count)| {
            let marker = if selection == active { "*" } else { "" };
            format!("{marker}{selection}: {count}")
        })
        .collect::<Vec<_>>()
        .join("  ");
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::cli::Command;
    use taskboard_core::{Dashboard, MemoryKeyValueStore, TaskStatus};

    #[test]
    fn delete_without_confirmation_keeps_task() {
        let mut dashboard = Dashboard::open(MemoryKeyValueStore::new(), "tasks");
        let task = dashboard
            .add_task("Buy milk", "")
            .expect("valid title should be accepted");

        let err = run(
            &mut dashboard,
            Command::Delete {
                id: task.id.to_string(),
                yes: false,
            },
        )
        .expect_err("unconfirmed delete must be refused");

        assert!(err.contains("--yes"));
        assert_eq!(dashboard.tasks().len(), 1);

        run(
            &mut dashboard,
            Command::Delete {
                id: task.id.to_string(),
                yes: true,
            },
        )
        .expect("confirmed delete should succeed");
        assert!(dashboard.tasks().is_empty());
    }

    #[test]
    fn status_command_rejects_invalid_status() {
        let mut dashboard = Dashboard::open(MemoryKeyValueStore::new(), "tasks");
        let task = dashboard
            .add_task("Buy milk", "")
            .expect("valid title should be accepted");

        let err = run(
            &mut dashboard,
            Command::Status {
                id: task.id.to_string(),
                status: "Blocked".to_string(),
            },
        )
        .expect_err("unknown status must be rejected");

        assert!(err.starts_with("invalid status"));
        assert_eq!(dashboard.tasks().tasks()[0].status, TaskStatus::Todo);
    }

    #[test]
    fn list_rejects_unknown_filter() {
        let mut dashboard = Dashboard::open(MemoryKeyValueStore::new(), "tasks");
        let err = run(
            &mut dashboard,
            Command::List {
                filter: "Someday".to_string(),
            },
        )
        .expect_err("unknown filter must be rejected");
        assert!(err.contains("invalid filter selection"));
    }
}
