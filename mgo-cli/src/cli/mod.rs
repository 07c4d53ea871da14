// Copyright (c) 2024-2025 mgocli contributors
// SPDX-License-Identifier: MIT
//
//! CLI module for mgocli
//!
//! Provides the command-line surface, the interactive prompt session,
//! result rendering, the REPL controller, and the optional result
//! inspection session.

pub mod commands;
pub mod inspect;
pub mod output;
pub mod prompt;
pub mod repl;

pub use commands::Cli;
pub use prompt::PromptSession;
pub use repl::ReplController;
