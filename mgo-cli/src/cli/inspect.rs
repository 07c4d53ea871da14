// Copyright (c) 2024-2025 mgocli contributors
// SPDX-License-Identifier: MIT
//
//! Secondary inspection session
//!
//! An escape hatch for poking at the last result set without re-running
//! the query. Invoked by the controller after a successful query when
//! enabled; interrupt or end-of-input resumes the main prompt.

use colored::Colorize;
use log::warn;
use rustyline::error::ReadlineError;
use rustyline::history::MemHistory;
use rustyline::{Config, Editor};
use serde_json::Value;

use mgo_client::QueryResult;

use super::output;
use super::repl::ReplError;

/// Capability the controller may invoke after a successful query.
pub trait Inspect {
    fn inspect(&mut self, result: &QueryResult) -> Result<(), ReplError>;
}

/// Commands understood by the inspection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectCommand {
    /// Show the first n rows (default 5)
    Head(usize),
    /// List column names
    Columns,
    /// Row count of the result
    Count,
    /// Show one row as JSON
    Row(usize),
    /// Dump the whole result as JSON
    Json,
    Help,
    /// Resume the main prompt
    Exit,
}

impl InspectCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let argument = parts.next();

        match (command, argument) {
            ("head", None) => Ok(Self::Head(5)),
            ("head", Some(n)) => n
                .parse()
                .map(Self::Head)
                .map_err(|_| format!("not a row count: {}", n)),
            ("columns" | "cols", None) => Ok(Self::Columns),
            ("count", None) => Ok(Self::Count),
            ("row", Some(i)) => i
                .parse()
                .map(Self::Row)
                .map_err(|_| format!("not a row index: {}", i)),
            ("row", None) => Err("usage: row <index>".to_string()),
            ("json", None) => Ok(Self::Json),
            ("help", None) => Ok(Self::Help),
            ("exit" | "quit" | "q", None) => Ok(Self::Exit),
            _ => Err(format!("unknown command: {}", line.trim())),
        }
    }
}

/// Built-in inspector: a small sub-prompt over the last result.
#[derive(Default)]
pub struct ResultInspector;

impl ResultInspector {
    /// Execute one command; returns false when the session should end.
    fn execute(command: &InspectCommand, result: &QueryResult) -> bool {
        match command {
            InspectCommand::Head(n) => println!("{}", output::render(result, *n)),
            InspectCommand::Columns => println!("{}", result.columns.join(", ")),
            InspectCommand::Count => println!("{}", result.len()),
            InspectCommand::Row(i) => match result.rows.get(*i) {
                Some(row) => {
                    let value = Value::Object(row.values.clone());
                    match serde_json::to_string_pretty(&value) {
                        Ok(rendered) => println!("{}", rendered),
                        Err(e) => warn!("could not render row: {}", e),
                    }
                }
                None => warn!("no row {} (result has {} rows)", i, result.len()),
            },
            InspectCommand::Json => {
                let rows: Vec<Value> = result
                    .rows
                    .iter()
                    .map(|row| Value::Object(row.values.clone()))
                    .collect();
                match serde_json::to_string_pretty(&Value::Array(rows)) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(e) => warn!("could not render result: {}", e),
                }
            }
            InspectCommand::Help => print_help(),
            InspectCommand::Exit => return false,
        }
        true
    }
}

impl Inspect for ResultInspector {
    fn inspect(&mut self, result: &QueryResult) -> Result<(), ReplError> {
        println!(
            "{}",
            format!(
                "inspecting last result ({} rows); 'help' for commands, 'exit' to resume",
                result.len()
            )
            .yellow()
        );

        let mut editor: Editor<(), MemHistory> =
            Editor::with_history(Config::builder().build(), MemHistory::new())?;

        loop {
            let line = match editor.readline("[ inspect ] >>> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(ReplError::Readline(e)),
            };

            if line.trim().is_empty() {
                continue;
            }

            match InspectCommand::parse(&line) {
                Ok(command) => {
                    if !Self::execute(&command, result) {
                        break;
                    }
                }
                Err(message) => println!("{}", message.red()),
            }
        }

        Ok(())
    }
}

fn print_help() {
    println!("{}", "Inspection commands:".bold());
    println!("  {}   - preview the first n rows (default 5)", "head [n]".cyan());
    println!("  {}   - list column names", "columns".cyan());
    println!("  {}     - row count", "count".cyan());
    println!("  {}   - show one row as JSON", "row <i>".cyan());
    println!("  {}      - dump the result as JSON", "json".cyan());
    println!("  {}      - resume the query prompt", "exit".cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_head_with_and_without_count() {
        assert_eq!(InspectCommand::parse("head"), Ok(InspectCommand::Head(5)));
        assert_eq!(InspectCommand::parse("head 12"), Ok(InspectCommand::Head(12)));
        assert!(InspectCommand::parse("head twelve").is_err());
    }

    #[test]
    fn parses_row_with_index() {
        assert_eq!(InspectCommand::parse("row 3"), Ok(InspectCommand::Row(3)));
        assert!(InspectCommand::parse("row").is_err());
    }

    #[test]
    fn parses_aliases() {
        assert_eq!(InspectCommand::parse("cols"), Ok(InspectCommand::Columns));
        assert_eq!(InspectCommand::parse("q"), Ok(InspectCommand::Exit));
        assert_eq!(InspectCommand::parse("quit"), Ok(InspectCommand::Exit));
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(InspectCommand::parse("frobnicate").is_err());
        assert!(InspectCommand::parse("count 3").is_err());
    }

    #[test]
    fn exit_ends_the_session() {
        let result = QueryResult::default();
        assert!(!ResultInspector::execute(&InspectCommand::Exit, &result));
        assert!(ResultInspector::execute(&InspectCommand::Count, &result));
    }
}
