// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! GraphQL query construction for the activity fetch.
//!
//! The query document is embedded in the binary and parameterized through
//! placeholder substitution: the queried login plus two absolute timestamps
//! derived from the injected run instant. Keeping the timestamps explicit
//! parameters (instead of reading the clock here) makes query construction a
//! pure function.

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

/// Embedded GraphQL document with substitution placeholders.
///
/// Aliases (`sources`, `activity`, `latestRepo`, `repos`, `forks`) shape the
/// response into the exact structure expected by
/// [`RawActivityResponse`](crate::RawActivityResponse).
const ACTIVITY_QUERY: &str = r#"query {
  user(login: "$USERNAME$") {
    login
    name
    url
    avatarUrl
    followers {
      totalCount
    }
    sources: repositories(first: 100, ownerAffiliations: OWNER, isFork: false) {
      totalCount
      repos: nodes {
        primaryLanguage {
          name
        }
        stargazers {
          totalCount
        }
      }
    }
    activity: contributionsCollection(from: "$TIMESTAMP_7DAYSAGO$", to: "$TIMESTAMP_YESTERDAY$") {
      latestRepo: commitContributionsByRepository(maxRepositories: 1) {
        contributions(last: 1) {
          repos: nodes {
            repository {
              name
              url
              updatedAt
            }
          }
        }
      }
      contributionCalendar {
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
  forks: search(query: "user:$USERNAME$ fork:only", type: REPOSITORY) {
    repositoryCount
  }
}"#;

/// Builds the activity query for `username` relative to the run instant.
///
/// `$TIMESTAMP_7DAYSAGO$` and `$TIMESTAMP_YESTERDAY$` are replaced with
/// ISO-8601 UTC instants seven days and one day before `now`, bounding the
/// contribution calendar to the seven days the sparkline renders.
pub fn build_query(username: &str, now: DateTime<Utc>) -> String {
    let seven_days_ago =
        (now - TimeDelta::days(7)).to_rfc3339_opts(SecondsFormat::Secs, true);
    let yesterday = (now - TimeDelta::days(1)).to_rfc3339_opts(SecondsFormat::Secs, true);

    ACTIVITY_QUERY
        .replace("$USERNAME$", username)
        .replace("$TIMESTAMP_7DAYSAGO$", &seven_days_ago)
        .replace("$TIMESTAMP_YESTERDAY$", &yesterday)
}
