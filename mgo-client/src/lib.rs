// Copyright (c) 2024-2025 mgocli contributors
// SPDX-License-Identifier: MIT
//
//! Blocking client for the Apache Drill REST query endpoint.
//!
//! This crate wraps the two HTTP calls the console needs: a liveness probe
//! against `/status` and synchronous query submission against `/query.json`.
//! Result sets are fully materialized before they are returned; there is no
//! streaming, no timeout, and no cancellation of an in-flight query.
//!
//! # Quick Start
//!
//! ```no_run
//! use mgo_client::DrillClient;
//!
//! # fn main() -> Result<(), mgo_client::Error> {
//! let client = DrillClient::connect("drill", 8047)?;
//! if client.is_active() {
//!     let result = client.query("select * from cp.`employee.json` limit 3")?;
//!     for row in &result.rows {
//!         println!("{:?}", row.get("full_name"));
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod result;

pub use client::DrillClient;
pub use error::{Error, Result};
pub use result::{QueryResult, Row};
