//! Command-line arguments for the dashboard boundary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskboard_core::{
    default_log_level, DashboardConfig, FilterSelection, TaskStatus, DEFAULT_STORAGE_KEY,
};

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version, about = "Local task dashboard", long_about = None)]
pub struct Cli {
    /// SQLite file backing the durable store
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Storage key holding the task collection
    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    pub key: String,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Absolute directory for log files; logging is off when omitted
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a task in `To Do`
    Add {
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Change a task's status (To Do | In Progress | Done)
    Status {
        id: String,

        /// Also accepts `todo`, `in-progress`, `done` in any case
        #[arg(value_parser = status_label)]
        status: String,
    },

    /// Delete a task permanently
    Delete {
        id: String,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// List tasks visible under a filter selection
    List {
        /// All | To Do | In Progress | Done (slugs accepted)
        #[arg(short, long, default_value = "All", value_parser = selection_label)]
        filter: String,
    },

    /// Show task counts per filter selection
    Counts,
}

/// Maps shell-friendly status spellings onto the exact status labels.
///
/// Unrecognized input passes through unchanged so the core reports it.
pub fn status_label(raw: &str) -> Result<String, String> {
    let label = match slug(raw).as_str() {
        "todo" | "to-do" => TaskStatus::Todo.label(),
        "in-progress" | "inprogress" => TaskStatus::InProgress.label(),
        "done" => TaskStatus::Done.label(),
        _ => return Ok(raw.to_string()),
    };
    Ok(label.to_string())
}

/// Like [`status_label`], plus `all`.
pub fn selection_label(raw: &str) -> Result<String, String> {
    if slug(raw) == "all" {
        return Ok(FilterSelection::All.label().to_string());
    }
    status_label(raw)
}

fn slug(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace([' ', '_'], "-")
}

impl Cli {
    pub fn to_config(&self) -> DashboardConfig {
        let defaults = DashboardConfig::default();
        DashboardConfig {
            storage_key: self.key.clone(),
            db_path: self.db.clone().unwrap_or(defaults.db_path),
            log_level: self
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: self.log_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{selection_label, status_label, Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parses_add_with_description() {
        let cli = Cli::try_parse_from(["taskboard", "add", "Buy milk", "-d", "2 liters"])
            .expect("add command should parse");
        match cli.command {
            Command::Add { title, description } => {
                assert_eq!(title, "Buy milk");
                assert_eq!(description, "2 liters");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_uses_flags_over_defaults() {
        let cli = Cli::try_parse_from([
            "taskboard",
            "--db",
            "/tmp/board.sqlite3",
            "--key",
            "work",
            "counts",
        ])
        .expect("global flags should parse");

        let config = cli.to_config();
        assert_eq!(config.db_path, PathBuf::from("/tmp/board.sqlite3"));
        assert_eq!(config.storage_key, "work");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn delete_defaults_to_unconfirmed() {
        let cli = Cli::try_parse_from(["taskboard", "delete", "42"])
            .expect("delete command should parse");
        assert!(matches!(cli.command, Command::Delete { yes: false, .. }));
    }

    #[test]
    fn status_slugs_map_to_exact_labels() {
        for (raw, label) in [
            ("done", "Done"),
            (" DONE ", "Done"),
            ("todo", "To Do"),
            ("to_do", "To Do"),
            ("In Progress", "In Progress"),
            ("inprogress", "In Progress"),
        ] {
            assert_eq!(status_label(raw).as_deref(), Ok(label), "for `{raw}`");
        }
        assert_eq!(status_label("Blocked").as_deref(), Ok("Blocked"));
    }

    #[test]
    fn parsed_status_argument_is_normalized() {
        let cli = Cli::try_parse_from(["taskboard", "status", "42", "in-progress"])
            .expect("status command should parse");
        match cli.command {
            Command::Status { id, status } => {
                assert_eq!(id, "42");
                assert_eq!(status, "In Progress");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn selection_slugs_include_all() {
        assert_eq!(selection_label("all").as_deref(), Ok("All"));
        assert_eq!(selection_label("done").as_deref(), Ok("Done"));
    }
}
