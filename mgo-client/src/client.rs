//! Blocking HTTP client for a Drillbit server
//!
//! One client is constructed at startup and held for the process lifetime.
//! All calls are synchronous: `query` blocks until the full result set has
//! been returned or the server reports a failure. A hung server therefore
//! blocks the caller indefinitely; there is no timeout or cancellation.

use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::result::{parse_query_response, QueryResult};

/// Request envelope for `POST /query.json`.
#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    #[serde(rename = "queryType")]
    query_type: &'a str,
    query: &'a str,
}

/// Client for the REST query endpoint of a single Drillbit.
pub struct DrillClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl DrillClient {
    /// Build a client for the Drillbit at `host:port`.
    ///
    /// Only constructs the transport; no request is sent. Callers that want
    /// to fail fast should follow up with [`DrillClient::is_active`].
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| Error::Connection(e.to_string()))?;

        Ok(Self {
            http,
            base_url: format!("http://{}:{}", host, port),
        })
    }

    /// Liveness probe: true iff `GET /status` answers with a success status.
    pub fn is_active(&self) -> bool {
        let url = format!("{}/status", self.base_url);
        match self.http.get(&url).send() {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("liveness probe failed: {}", e);
                false
            }
        }
    }

    /// Submit `sql` and block until the full result set is returned.
    pub fn query(&self, sql: &str) -> Result<QueryResult> {
        let url = format!("{}/query.json", self.base_url);
        let request = QueryRequest {
            query_type: "SQL",
            query: sql,
        };

        let response = self.http.post(&url).json(&request).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            // Failure bodies usually carry an errorMessage; fall back to
            // the raw status line when they do not decode.
            return match parse_query_response(&body) {
                Err(Error::Query(message)) => Err(Error::Query(message)),
                _ => Err(Error::Query(format!("server answered {}", status))),
            };
        }

        parse_query_response(&body)
    }

    /// Base URL this client targets, e.g. `http://drill:8047`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
