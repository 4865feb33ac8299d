// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Transformation logic that converts the raw GraphQL activity response into
//! a flat, display-ready statistics record.
//!
//! The normalizer owns all defaulting, aggregation, and recency decisions:
//! stargazer totals are summed across the repository collection, primary
//! languages are collected in first-seen order without duplicates, the
//! contribution calendar is flattened into a single chronological sequence,
//! and the latest-contribution pointer degrades to documented defaults at
//! every optional nesting level instead of failing the run.
//!
//! [`normalize`] is a pure function of the response and an injected run
//! timestamp, which keeps the recency window deterministic under test.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of whole elapsed days after which the latest contribution is no
/// longer considered recent.
pub const RECENT_WINDOW_DAYS: i64 = 14;

/// Strict timestamp format used by the one optional date field.
const LAST_UPDATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Typed mirror of the GraphQL activity response.
///
/// Required top-level fields are non-optional: their absence fails
/// deserialization and is reported as a malformed upstream response. Every
/// level of the latest-contribution path is independently optional so each
/// degrade point stays auditable.
#[derive(Debug, Deserialize)]
pub struct RawActivityResponse {
    /// Payload envelope of the GraphQL response.
    pub data: ResponseData
}

/// Top-level payload of the activity query.
#[derive(Debug, Deserialize)]
pub struct ResponseData {
    /// The queried user with identity, repositories, and activity data.
    pub user:  RawUser,
    /// Aliased repository search counting the user's forks.
    pub forks: ForkSearch
}

/// Result of the aliased fork search.
#[derive(Debug, Deserialize)]
pub struct ForkSearch {
    /// Number of fork repositories owned by the user.
    #[serde(rename = "repositoryCount")]
    pub repository_count: u64
}

/// User node of the activity query.
#[derive(Debug, Deserialize)]
pub struct RawUser {
    /// Account login.
    pub login:      String,
    /// Display name; GitHub reports `null` when unset.
    pub name:       Option<String>,
    /// Profile URL.
    pub url:        String,
    /// Avatar image URL.
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
    /// Follower counter.
    pub followers:  CountTotal,
    /// Owned source repositories.
    pub sources:    SourceRepositories,
    /// Contribution activity for the queried date range.
    pub activity:   ActivityCollection
}

/// Generic GraphQL counter object.
#[derive(Debug, Deserialize)]
pub struct CountTotal {
    /// Total count reported by the API.
    #[serde(rename = "totalCount")]
    pub total_count: u64
}

/// Owned source repository collection.
#[derive(Debug, Deserialize)]
pub struct SourceRepositories {
    /// Number of owned source repositories.
    #[serde(rename = "totalCount")]
    pub total_count: u64,
    /// Repository nodes carrying language and star data.
    #[serde(default)]
    pub repos:       Vec<SourceRepo>
}

/// Single repository node from the source collection.
#[derive(Debug, Deserialize)]
pub struct SourceRepo {
    /// Dominant language, absent for repositories without code.
    #[serde(default, rename = "primaryLanguage")]
    pub primary_language: Option<PrimaryLanguage>,
    /// Stargazer counter.
    pub stargazers:       CountTotal
}

/// Primary language descriptor.
#[derive(Debug, Deserialize)]
pub struct PrimaryLanguage {
    /// Language name as reported by GitHub.
    pub name: String
}

/// Contribution activity subtree.
#[derive(Debug, Deserialize)]
pub struct ActivityCollection {
    /// Aliased latest-contribution pointer; may be empty.
    #[serde(default, rename = "latestRepo")]
    pub latest_repo:           Vec<LatestRepoEntry>,
    /// Calendar of weekly contribution-day counts.
    #[serde(rename = "contributionCalendar")]
    pub contribution_calendar: ContributionCalendar
}

/// First nesting level of the latest-contribution path.
#[derive(Debug, Deserialize)]
pub struct LatestRepoEntry {
    /// Contribution connection; absent when the API returns no data.
    #[serde(default)]
    pub contributions: Option<LatestContributions>
}

/// Second nesting level of the latest-contribution path.
#[derive(Debug, Deserialize)]
pub struct LatestContributions {
    /// Aliased contribution nodes; may be empty.
    #[serde(default)]
    pub repos: Vec<LatestRepoNode>
}

/// Third nesting level of the latest-contribution path.
#[derive(Debug, Deserialize)]
pub struct LatestRepoNode {
    /// Repository the contribution was pushed to.
    #[serde(default)]
    pub repository: Option<LatestRepository>
}

/// Repository metadata of the latest contribution.
#[derive(Debug, Deserialize)]
pub struct LatestRepository {
    /// Repository name.
    #[serde(default)]
    pub name:       Option<String>,
    /// Repository URL.
    #[serde(default)]
    pub url:        Option<String>,
    /// Last update timestamp in strict `%Y-%m-%dT%H:%M:%SZ` form.
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>
}

/// Calendar of contribution weeks.
#[derive(Debug, Deserialize)]
pub struct ContributionCalendar {
    /// Weeks in the order the API returns them, oldest first.
    #[serde(default)]
    pub weeks: Vec<ContributionWeek>
}

/// Single calendar week.
#[derive(Debug, Deserialize)]
pub struct ContributionWeek {
    /// Days in the order the API returns them.
    #[serde(default, rename = "contributionDays")]
    pub contribution_days: Vec<RawContributionDay>
}

/// Single calendar day as reported by the API.
#[derive(Debug, Deserialize)]
pub struct RawContributionDay {
    /// Number of contributions on that day.
    #[serde(rename = "contributionCount")]
    pub contribution_count: u32,
    /// Calendar date as an ISO string.
    pub date:               String
}

/// One day of contribution activity in the flattened sequence.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContributionDay {
    /// Calendar date as an ISO string.
    pub date:  String,
    /// Non-negative contribution count.
    pub count: u32
}

/// Flat statistics record consumed by the sparkline generator and renderer.
///
/// Constructed once per run by [`normalize`] and read-only thereafter.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserStats {
    /// Account login, copied verbatim.
    pub login:             String,
    /// Display name, copied verbatim (may be absent).
    pub name:              Option<String>,
    /// Profile URL, copied verbatim.
    pub html_url:          String,
    /// Avatar URL, copied verbatim.
    pub avatar_url:        String,
    /// Follower count.
    pub followers:         u64,
    /// Sum of stargazer totals over the repository collection.
    pub stargazers:        u64,
    /// Number of owned source repositories.
    pub repos:             u64,
    /// Number of fork repositories.
    pub forks:             u64,
    /// Distinct primary-language names in first-seen order.
    pub languages:         Vec<String>,
    /// Name of the most recent contribution's repository; `None` when no
    /// latest-contribution data exists or it is older than the recency
    /// window.
    pub last_project:      Option<String>,
    /// URL of the latest-contribution repository, when known.
    pub last_project_url:  Option<String>,
    /// Last update instant of that repository; Unix epoch when absent or
    /// unparsable.
    pub last_project_date: DateTime<Utc>,
    /// Flattened contribution days in source order.
    pub contribs:          Vec<ContributionDay>,
    /// Maximum day count across `contribs`, 0 when empty.
    pub max_commits:       u32
}

/// Transforms the raw API response into a flat [`UserStats`] record.
///
/// The run timestamp `now` is injected by the caller so the recency decision
/// and downstream rendering stay deterministic. Missing or malformed data on
/// the latest-contribution path degrades to defaults; all other fields were
/// already validated during deserialization.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use ghbadge::{RawActivityResponse, normalize};
///
/// # fn main() -> Result<(), serde_json::Error> {
/// let raw: RawActivityResponse = serde_json::from_value(serde_json::json!({
///     "data": {
///         "user": {
///             "login": "octocat",
///             "name": "The Octocat",
///             "url": "https://github.com/octocat",
///             "avatarUrl": "https://example.com/a.png",
///             "followers": { "totalCount": 42 },
///             "sources": { "totalCount": 2, "repos": [] },
///             "activity": { "contributionCalendar": { "weeks": [] } }
///         },
///         "forks": { "repositoryCount": 3 }
///     }
/// }))?;
///
/// let stats = normalize(&raw, Utc::now());
/// assert_eq!(stats.followers, 42);
/// assert_eq!(stats.max_commits, 0);
/// # Ok(())
/// # }
/// ```
pub fn normalize(raw: &RawActivityResponse, now: DateTime<Utc>) -> UserStats {
    let user = &raw.data.user;
    let latest = latest_repository(&user.activity);

    let mut stargazers = 0u64;
    let mut languages: Vec<String> = Vec::new();

    for repo in &user.sources.repos {
        if let Some(language) = &repo.primary_language {
            if !languages.iter().any(|known| known == &language.name) {
                languages.push(language.name.clone());
            }
        }
        stargazers += repo.stargazers.total_count;
    }

    let mut contribs = Vec::new();
    for week in &user.activity.contribution_calendar.weeks {
        for day in &week.contribution_days {
            contribs.push(ContributionDay {
                date:  day.date.clone(),
                count: day.contribution_count
            });
        }
    }
    let max_commits = contribs.iter().map(|day| day.count).max().unwrap_or(0);

    let last_project_date = latest
        .and_then(|repository| repository.updated_at.as_deref())
        .and_then(parse_update_timestamp)
        .unwrap_or(DateTime::UNIX_EPOCH);

    let mut last_project = latest.and_then(|repository| repository.name.clone());
    let last_project_url = latest.and_then(|repository| repository.url.clone());

    // Whole elapsed days, truncated toward zero.
    let days_elapsed = (now - last_project_date).num_days();
    if days_elapsed > RECENT_WINDOW_DAYS {
        last_project = None;
    }

    debug!(
        login = %user.login,
        stargazers,
        languages = languages.len(),
        contribs = contribs.len(),
        "normalized activity statistics"
    );

    UserStats {
        login: user.login.clone(),
        name: user.name.clone(),
        html_url: user.url.clone(),
        avatar_url: user.avatar_url.clone(),
        followers: user.followers.total_count,
        stargazers,
        repos: user.sources.total_count,
        forks: raw.data.forks.repository_count,
        languages,
        last_project,
        last_project_url,
        last_project_date,
        contribs,
        max_commits
    }
}

/// Resolves the latest-contribution repository through explicit optional
/// checks at each nesting level.
fn latest_repository(activity: &ActivityCollection) -> Option<&LatestRepository> {
    activity
        .latest_repo
        .first()?
        .contributions
        .as_ref()?
        .repos
        .first()?
        .repository
        .as_ref()
}

/// Parses the strict last-update timestamp, yielding `None` on any mismatch.
fn parse_update_timestamp(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, LAST_UPDATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
