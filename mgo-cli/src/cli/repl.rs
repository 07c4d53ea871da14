// Copyright (c) 2024-2025 mgocli contributors
// SPDX-License-Identifier: MIT
//
//! REPL controller
//!
//! The loop is a small state machine: await a line, dispatch it, await the
//! next. `exit` (any casing), an interrupt, or end-of-input leave the loop
//! gracefully; a failed query is logged and never aborts the session.

use log::{error, info, warn};
use thiserror::Error;

use mgo_client::{DrillClient, QueryResult};

use super::inspect::Inspect;
use super::output;

/// Errors that abort the console itself (as opposed to a single query,
/// which is logged and recovered).
#[derive(Error, Debug)]
pub enum ReplError {
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// One read from the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    /// A submitted line (possibly empty)
    Line(String),
    /// Ctrl-C while awaiting input
    Interrupted,
    /// Ctrl-D while awaiting input
    Eof,
}

/// Source of input lines. The interactive prompt implements this; tests
/// drive the controller with scripted events instead.
pub trait LineSource {
    fn read_line(&mut self) -> Result<ReadEvent, ReplError>;
}

/// Query submission seam, implemented by [`mgo_client::DrillClient`].
pub trait QueryExecutor {
    fn query(&mut self, sql: &str) -> mgo_client::Result<QueryResult>;
}

impl QueryExecutor for DrillClient {
    fn query(&mut self, sql: &str) -> mgo_client::Result<QueryResult> {
        DrillClient::query(self, sql)
    }
}

/// Orchestrates the read-dispatch-render loop.
pub struct ReplController {
    row_limit: usize,
    preserve_case: bool,
    inspector: Option<Box<dyn Inspect>>,
}

impl ReplController {
    pub fn new(row_limit: usize, preserve_case: bool, inspector: Option<Box<dyn Inspect>>) -> Self {
        Self {
            row_limit,
            preserve_case,
            inspector,
        }
    }

    /// Run the loop until `exit`, interrupt, or end-of-input.
    pub fn run(
        &mut self,
        lines: &mut dyn LineSource,
        executor: &mut dyn QueryExecutor,
    ) -> Result<(), ReplError> {
        loop {
            let line = match lines.read_line()? {
                ReadEvent::Line(line) => line,
                // Control-C / Control-D: graceful exit, not an error
                ReadEvent::Interrupted | ReadEvent::Eof => break,
            };

            let query = self.normalize(&line);
            if query.eq_ignore_ascii_case("exit") {
                break;
            }
            if query.is_empty() {
                warn!("empty query, skipping processing");
                continue;
            }

            self.dispatch(&query, executor)?;
        }

        info!("shutting down...");
        Ok(())
    }

    /// Submit one query and render its preview. Query failures are logged
    /// and recovered; only console-level failures propagate.
    fn dispatch(&mut self, query: &str, executor: &mut dyn QueryExecutor) -> Result<(), ReplError> {
        info!("sending query to drill [{}]", query);
        match executor.query(query) {
            Ok(result) => {
                println!("{}", output::render(&result, self.row_limit));
                println!();
                if let Some(inspector) = self.inspector.as_mut() {
                    inspector.inspect(&result)?;
                }
            }
            Err(e) => error!("{}", e),
        }
        Ok(())
    }

    /// Legacy behavior lower-cases every query before submission, which
    /// also folds string literals. `--preserve-case` opts out.
    fn normalize(&self, line: &str) -> String {
        let trimmed = line.trim();
        if self.preserve_case {
            trimmed.to_string()
        } else {
            trimmed.to_lowercase()
        }
    }
}
