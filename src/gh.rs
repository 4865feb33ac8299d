// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! GraphQL transport: one authenticated POST against the GitHub API.
//!
//! The run performs a single request; there is no retry policy. A
//! non-success HTTP status is fatal and carries the status code together
//! with the submitted query for diagnostics. A successful response is
//! decoded into the typed activity model, so required fields that are
//! missing surface as a malformed-response error at this boundary.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::{error::Error, stats::RawActivityResponse};

/// GitHub GraphQL endpoint.
const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

/// User-Agent header required by the GitHub API.
const USER_AGENT: &str = concat!("ghbadge/", env!("CARGO_PKG_VERSION"));

/// Submits the GraphQL query and decodes the activity response.
///
/// # Errors
///
/// Returns [`Error::Http`](Error::Http) when the request fails before a
/// status is available, [`Error::Transport`](Error::Transport) for a
/// non-success HTTP status, and
/// [`Error::MalformedResponse`](Error::MalformedResponse) when the body is
/// not valid JSON, carries a GraphQL `errors` array, or lacks required
/// fields.
pub async fn run_query(
    http: &Client,
    query: &str,
    apikey: &str
) -> Result<RawActivityResponse, Error> {
    let response = http
        .post(GRAPHQL_ENDPOINT)
        .bearer_auth(apikey)
        .header("User-Agent", USER_AGENT)
        .json(&serde_json::json!({ "query": query }))
        .send()
        .await
        .map_err(|source| Error::http(format!("failed to send GraphQL request: {source}")))?;

    check_status(response.status(), query)?;

    let body: Value = response
        .json()
        .await
        .map_err(|source| Error::malformed(format!("response body is not valid JSON: {source}")))?;

    debug!("GraphQL response received");
    decode_response(body)
}

/// Maps a non-success HTTP status to the fatal transport error.
fn check_status(status: StatusCode, query: &str) -> Result<(), Error> {
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::transport(status.as_u16(), query))
    }
}

/// Checks for GraphQL-level errors and decodes the typed response.
fn decode_response(body: Value) -> Result<RawActivityResponse, Error> {
    if let Some(errors) = body.get("errors") {
        return Err(Error::malformed(format!("GraphQL reported errors: {errors}")));
    }

    serde_json::from_value(body)
        .map_err(|source| Error::malformed(format!("missing required fields: {source}")))
}
