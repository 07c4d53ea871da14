// Copyright (c) 2024-2025 mgocli contributors
// SPDX-License-Identifier: MIT
//
//! mgocli entry point
//!
//! Parses the command line, initializes logging, connects to the Drillbit
//! and runs the REPL. Exit codes: 0 on normal exit or version print, 1
//! when the server cannot be reached at startup.

mod cli;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use log::{error, info};

use cli::inspect::{Inspect, ResultInspector};
use cli::{Cli, PromptSession, ReplController};
use mgo_client::DrillClient;

fn main() -> ExitCode {
    let args = Cli::parse();

    if args.version {
        println!("mgocli version: {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    // clap enforces the positional unless --version was given
    let Some(database) = args.database.clone() else {
        eprintln!("{}", "missing required argument: DATABASE".red());
        return ExitCode::FAILURE;
    };

    configure_logger();

    let mut client = match DrillClient::connect(&args.host, args.port) {
        Ok(client) => client,
        Err(e) => {
            error!("unable to reach Drill server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if !client.is_active() {
        error!("unable to reach Drill server at {}", client.base_url());
        return ExitCode::FAILURE;
    }
    info!("connected to Drillbit at {}", client.base_url());

    let mut prompt = match PromptSession::new(&args.host, &database) {
        Ok(prompt) => prompt,
        Err(e) => {
            error!("could not open terminal prompt: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", "mgocli".bold().green());
    println!("Type 'exit' to leave the console; Ctrl-C or Ctrl-D also quit");

    let inspector: Option<Box<dyn Inspect>> = if args.inspect {
        Some(Box::new(ResultInspector))
    } else {
        None
    };

    let mut controller = ReplController::new(args.row_limit, args.preserve_case, inspector);

    match controller.run(&mut prompt, &mut client) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("console failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Stream-only structured logging: `[timestamp] target :: LEVEL  - message`.
fn configure_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} :: {:<6} - {}",
                buf.timestamp(),
                record.target(),
                record.level(),
                record.args()
            )
        })
        .init();
}
