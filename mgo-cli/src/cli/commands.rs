// Copyright (c) 2024-2025 mgocli contributors
// SPDX-License-Identifier: MIT
//
//! CLI argument definitions for mgocli
//!
//! Every option can also be supplied through an environment variable;
//! an explicit flag always wins over the environment, which wins over
//! the built-in default.

use clap::Parser;

/// Default host matches docker-style DNS for a linked drill container.
pub const DRILL_DEFAULT_HOST: &str = "drill";
pub const DRILL_DEFAULT_PORT: u16 = 8047;

/// mgocli - Interactive SQL console for Apache Drill
#[derive(Parser, Debug)]
#[command(name = "mgocli")]
#[command(about = "Interactive SQL console for Apache Drill")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Host address of the drillbit server
    #[arg(short = 'H', long, env = "DRILL_HOST", default_value = DRILL_DEFAULT_HOST)]
    pub host: String,

    /// Port number of the drillbit server
    #[arg(short = 'p', long, env = "DRILL_PORT", default_value_t = DRILL_DEFAULT_PORT)]
    pub port: u16,

    /// Number of rows shown in the result preview
    #[arg(short = 'r', long = "row-limit", env = "MGO_ROW_LIMIT", default_value_t = 10)]
    pub row_limit: usize,

    /// Submit queries exactly as typed instead of lower-casing them
    #[arg(long = "preserve-case")]
    pub preserve_case: bool,

    /// Drop into an inspection session after each successful query
    #[arg(long)]
    pub inspect: bool,

    /// Print version information and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Database (Drill schema) queries run against
    #[arg(env = "MGO_DB", required_unless_present = "version")]
    pub database: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in ["DRILL_HOST", "DRILL_PORT", "MGO_ROW_LIMIT", "MGO_DB"] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_without_flags_or_env() {
        clear_env();
        let cli = Cli::try_parse_from(["mgocli", "analytics"]).unwrap();
        assert_eq!(cli.host, "drill");
        assert_eq!(cli.port, 8047);
        assert_eq!(cli.row_limit, 10);
        assert!(!cli.preserve_case);
        assert!(!cli.inspect);
        assert_eq!(cli.database.as_deref(), Some("analytics"));
    }

    #[test]
    #[serial]
    fn env_overrides_defaults() {
        clear_env();
        std::env::set_var("DRILL_HOST", "drill.internal");
        std::env::set_var("DRILL_PORT", "8048");
        std::env::set_var("MGO_ROW_LIMIT", "25");
        std::env::set_var("MGO_DB", "preprod");

        let cli = Cli::try_parse_from(["mgocli"]).unwrap();
        assert_eq!(cli.host, "drill.internal");
        assert_eq!(cli.port, 8048);
        assert_eq!(cli.row_limit, 25);
        assert_eq!(cli.database.as_deref(), Some("preprod"));
        clear_env();
    }

    #[test]
    #[serial]
    fn flags_override_env() {
        clear_env();
        std::env::set_var("DRILL_HOST", "drill.internal");
        std::env::set_var("MGO_DB", "preprod");

        let cli = Cli::try_parse_from(["mgocli", "-H", "localhost", "analytics"]).unwrap();
        assert_eq!(cli.host, "localhost");
        assert_eq!(cli.database.as_deref(), Some("analytics"));
        clear_env();
    }

    #[test]
    #[serial]
    fn database_is_required_without_version_flag() {
        clear_env();
        assert!(Cli::try_parse_from(["mgocli"]).is_err());
        let cli = Cli::try_parse_from(["mgocli", "--version"]).unwrap();
        assert!(cli.version);
        assert!(cli.database.is_none());
    }
}
