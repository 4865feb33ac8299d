// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for generating a GitHub activity badge.
//!
//! The library fetches a user's activity statistics through one
//! authenticated GraphQL query, normalizes the deeply nested response into a
//! flat [`UserStats`] record, renders a 7-day contribution sparkline, and
//! assembles a self-contained HTML badge. All public APIs are documented
//! with invariants, error semantics, and minimal examples.

mod badge;
mod config;
mod error;
mod format;
mod gh;
mod query;
mod sparkline;
mod stats;

pub use badge::{RenderContext, render_badge, write_badge};
pub use config::{BadgeConfig, load_config, parse_config};
pub use error::{Error, badge_io_error, io_error};
pub use format::{
    QUANTAS, shortnum, shortnum_with_precision, smarttruncate, smarttruncate_with,
};
pub use gh::run_query;
pub use query::build_query;
pub use sparkline::{SPARKLINE_DAYS, sparkline_svg};
pub use stats::{
    ContributionDay, RECENT_WINDOW_DAYS, RawActivityResponse, UserStats, normalize,
};
