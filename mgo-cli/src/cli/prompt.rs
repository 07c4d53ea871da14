// Copyright (c) 2024-2025 mgocli contributors
// SPDX-License-Identifier: MIT
//
//! Interactive prompt session
//!
//! Wraps a rustyline editor with in-memory history, inline autosuggestion
//! from that history, SQL keyword completion, and keyword highlighting.
//! History lives for the process lifetime only; nothing is written to disk.

use std::borrow::Cow;

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::MemHistory;
use rustyline::validate::Validator;
use rustyline::{Config, Context, EditMode, Editor, Helper};

use super::repl::{LineSource, ReadEvent, ReplError};

/// Keywords recognized by the completer and the highlighter. Matching is
/// case-insensitive; completion follows the casing the user started typing.
const SQL_KEYWORDS: &[&str] = &[
    "ALL", "AND", "AS", "ASC", "AVG", "BETWEEN", "BY", "CASE", "CAST", "COUNT", "CREATE", "CROSS",
    "DESC", "DESCRIBE", "DISTINCT", "DROP", "ELSE", "END", "EXISTS", "FROM", "FULL", "GROUP",
    "HAVING", "IN", "INNER", "INSERT", "INTO", "IS", "JOIN", "LEFT", "LIKE", "LIMIT", "MAX", "MIN",
    "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER", "OUTER", "RIGHT", "SCHEMAS", "SELECT", "SHOW",
    "SUM", "TABLE", "TABLES", "THEN", "UNION", "USE", "VALUES", "VIEW", "WHEN", "WHERE", "WITH",
];

/// Rustyline helper: autosuggestion from history, keyword completion,
/// keyword highlighting.
#[derive(Default)]
pub struct MgoHelper {
    /// Submitted lines in submission order, mirrored from the editor history
    entries: Vec<String>,
}

impl MgoHelper {
    fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line so later inputs can be suggested from it.
    fn remember(&mut self, line: &str) {
        self.entries.push(line.to_string());
    }

    /// Longest history entry sharing `line` as a prefix, returned as the
    /// suffix to display inline after the cursor.
    fn suggest(&self, line: &str) -> Option<String> {
        if line.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .filter(|entry| entry.starts_with(line) && entry.len() > line.len())
            .max_by_key(|entry| entry.len())
            .map(|entry| entry[line.len()..].to_string())
    }

    fn completions(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_to_cursor = &line[..pos];
        let word_start = line_to_cursor
            .rfind(|c: char| c.is_whitespace() || c == ',' || c == '(')
            .map(|i| i + 1)
            .unwrap_or(0);
        let word = &line_to_cursor[word_start..];
        if word.is_empty() {
            return (word_start, Vec::new());
        }

        let word_upper = word.to_uppercase();
        let lowercase_input = word
            .chars()
            .next()
            .map(|c| c.is_lowercase())
            .unwrap_or(false);

        let candidates = SQL_KEYWORDS
            .iter()
            .filter(|kw| kw.starts_with(&word_upper))
            .map(|kw| {
                let replacement = if lowercase_input {
                    kw.to_lowercase()
                } else {
                    kw.to_string()
                };
                Pair {
                    display: kw.to_string(),
                    replacement,
                }
            })
            .collect();

        (word_start, candidates)
    }
}

/// Wrap recognized SQL keywords in ANSI color codes. Cosmetic only; the
/// submitted string is never altered.
fn highlight_sql(line: &str) -> Cow<'_, str> {
    let mut out = String::with_capacity(line.len());
    let mut word = String::new();
    let mut changed = false;

    let flush = |word: &mut String, out: &mut String, changed: &mut bool| {
        if word.is_empty() {
            return;
        }
        if SQL_KEYWORDS.contains(&word.to_uppercase().as_str()) {
            out.push_str(&word.as_str().cyan().bold().to_string());
            *changed = true;
        } else {
            out.push_str(word);
        }
        word.clear();
    };

    for c in line.chars() {
        if c.is_alphanumeric() || c == '_' {
            word.push(c);
        } else {
            flush(&mut word, &mut out, &mut changed);
            out.push(c);
        }
    }
    flush(&mut word, &mut out, &mut changed);

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(line)
    }
}

impl Completer for MgoHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.completions(line, pos))
    }
}

impl Hinter for MgoHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        self.suggest(line)
    }
}

impl Highlighter for MgoHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        highlight_sql(line)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        !line.is_empty()
    }
}

impl Validator for MgoHelper {}

impl Helper for MgoHelper {}

/// Interactive line input with a prompt that encodes the live session
/// identity: `[ mgo::<host>::<database> ] >>> `.
pub struct PromptSession {
    editor: Editor<MgoHelper, MemHistory>,
    prompt: String,
}

impl PromptSession {
    pub fn new(host: &str, database: &str) -> Result<Self, ReadlineError> {
        let config = Config::builder()
            .edit_mode(EditMode::Emacs)
            .history_ignore_space(true)
            .auto_add_history(false)
            .build();

        let mut editor = Editor::with_history(config, MemHistory::new())?;
        editor.set_helper(Some(MgoHelper::new()));

        Ok(Self {
            editor,
            prompt: format!("[ mgo::{}::{} ] >>> ", host, database),
        })
    }
}

impl LineSource for PromptSession {
    fn read_line(&mut self) -> Result<ReadEvent, ReplError> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                    if let Some(helper) = self.editor.helper_mut() {
                        helper.remember(line.trim());
                    }
                }
                Ok(ReadEvent::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadEvent::Eof),
            Err(e) => Err(ReplError::Readline(e)),
        }
    }
}
