// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration document consumed by the badge generator.
//!
//! The configuration is a small JSON document supplying the GitHub login to
//! query and the API token used for authentication. Values are validated on
//! load so downstream components can rely on non-empty credentials.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::{self, Error};

/// Parameters controlling a single badge generation run.
///
/// # Examples
///
/// ```
/// use ghbadge::BadgeConfig;
///
/// let json = r#"{ "username": "octocat", "apikey": "ghp_example" }"#;
/// let config: BadgeConfig = serde_json::from_str(json).expect("valid configuration");
/// assert_eq!(config.username, "octocat");
/// assert!(config.support);
/// ```
#[derive(Debug, Deserialize, Clone)]
pub struct BadgeConfig {
    /// GitHub login whose activity is summarized.
    pub username: String,

    /// Personal access token submitted as a bearer token.
    pub apikey: String,

    /// Whether the rendered badge carries the support footer link.
    #[serde(default = "default_support")]
    pub support: bool
}

fn default_support() -> bool {
    true
}

/// Loads and validates the configuration from the provided JSON file path.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read,
/// [`Error::Parse`](Error::Parse) when the JSON cannot be decoded, and
/// [`Error::Validation`](Error::Validation) when required fields are blank.
pub fn load_config(path: &Path) -> Result<BadgeConfig, Error> {
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    parse_config(&contents)
}

/// Parses and validates the configuration from a JSON document string.
///
/// This function is suitable for unit tests and higher-level callers that
/// already obtained the configuration contents.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the JSON cannot be decoded
/// and [`Error::Validation`](Error::Validation) when credentials are blank.
pub fn parse_config(contents: &str) -> Result<BadgeConfig, Error> {
    let config: BadgeConfig = serde_json::from_str(contents)?;

    if config.username.trim().is_empty() {
        return Err(Error::validation("username must not be empty"));
    }
    if config.apikey.trim().is_empty() {
        return Err(Error::validation("apikey must not be empty"));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{load_config, parse_config};
    use crate::error::Error;

    #[test]
    fn parse_config_accepts_minimal_document() {
        let config = parse_config(r#"{ "username": "octocat", "apikey": "token" }"#)
            .expect("expected parse success");

        assert_eq!(config.username, "octocat");
        assert_eq!(config.apikey, "token");
        assert!(config.support);
    }

    #[test]
    fn parse_config_honors_support_override() {
        let config =
            parse_config(r#"{ "username": "octocat", "apikey": "token", "support": false }"#)
                .expect("expected parse success");

        assert!(!config.support);
    }

    #[test]
    fn parse_config_rejects_blank_username() {
        let error = parse_config(r#"{ "username": "  ", "apikey": "token" }"#)
            .expect_err("expected validation failure");
        match error {
            Error::Validation {
                message
            } => {
                assert_eq!(message, "username must not be empty");
            }
            other => panic!("expected validation error, got {other:?}")
        }
    }

    #[test]
    fn parse_config_rejects_blank_apikey() {
        let error = parse_config(r#"{ "username": "octocat", "apikey": "" }"#)
            .expect_err("expected validation failure");
        assert!(matches!(error, Error::Validation { .. }));
    }

    #[test]
    fn parse_config_propagates_decode_errors() {
        let result = parse_config("{ not json");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn load_config_reads_configuration_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file");
        write!(file, r#"{{ "username": "octocat", "apikey": "token" }}"#)
            .expect("expected write to succeed");

        let config = load_config(file.path()).expect("expected load to succeed");
        assert_eq!(config.username, "octocat");
    }

    #[test]
    fn load_config_reports_io_errors() {
        let path = std::path::Path::new("/nonexistent/config.json");
        let error = load_config(path).expect_err("expected io error");
        assert!(matches!(error, Error::Io { .. }));
    }
}
