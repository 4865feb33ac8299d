// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

#![allow(non_shorthand_field_patterns)]

//! Error handling primitives shared across the badge generator.
//!
//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free while still
//! exposing a thoroughly documented error surface for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by the configuration loader, the GraphQL
/// transport, and the badge writer.
///
/// Two conditions are fatal by design: a non-success HTTP status from the
/// GraphQL endpoint ([`Error::Transport`]) and a successful response that is
/// missing required fields ([`Error::MalformedResponse`]). Missing data on
/// the optional latest-contribution path never constructs an error; the
/// normalizer degrades those fields to documented defaults instead.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// The GraphQL endpoint answered with a non-success HTTP status.
    #[error("query failed with HTTP status {status}: {query}")]
    Transport {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// The GraphQL document that was submitted.
        query:  String
    },
    /// A successful response is missing required top-level fields or carries
    /// a GraphQL `errors` array.
    #[error("malformed API response: {message}")]
    MalformedResponse {
        /// Human readable description of the missing or invalid data.
        message: String
    },
    /// The request failed before any HTTP status was received.
    #[error("network error: {message}")]
    Http {
        /// Human readable description of the underlying transport failure.
        message: String
    },
    /// Wraps I/O errors that occur while reading the configuration file.
    #[error("failed to read configuration from {path:?}: {source}")]
    Io {
        /// Location of the configuration file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps JSON decoding errors for the configuration document.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_json.
        source: serde_json::Error
    },
    /// Returned when the configuration violates invariants.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps I/O errors that occur while writing the badge artifact.
    #[error("failed to write badge at {path:?}: {source}")]
    BadgeIo {
        /// Location of the artifact being produced.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    }
}

impl Error {
    /// Constructs a transport error from the failing status and query text.
    ///
    /// # Parameters
    ///
    /// * `status` - HTTP status code returned by the GraphQL endpoint.
    /// * `query` - The submitted GraphQL document.
    pub fn transport<Q>(status: u16, query: Q) -> Self
    where
        Q: Into<String>
    {
        Self::Transport {
            status,
            query: query.into()
        }
    }

    /// Constructs a malformed-response error from the provided message.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the malformed data.
    pub fn malformed<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::MalformedResponse {
            message: message.into()
        }
    }

    /// Constructs a network error from the provided message.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the transport failure.
    pub fn http<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Http {
            message: message.into()
        }
    }

    /// Constructs a validation error from the provided message.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the configuration file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::BadgeIo`] variant capturing the failing path and
/// source.
///
/// # Parameters
///
/// * `path` - Location of the badge artifact that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn badge_io_error(path: &Path, source: std::io::Error) -> Error {
    Error::BadgeIo {
        path: path.to_path_buf(),
        source
    }
}
