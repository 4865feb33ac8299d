// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Badge rendering and file output.
//!
//! The renderer assembles the final self-contained HTML badge from the
//! normalized statistics record, the sparkline SVG, and the display
//! formatters. Rendering happens fully in memory; the file is only created
//! once the document is complete, so no partial output exists after a fatal
//! failure.

use std::{
    borrow::Cow,
    fs::File,
    io::{BufWriter, Write},
    path::Path
};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::{
    error::{self, Error},
    format::{shortnum, smarttruncate},
    stats::UserStats
};

/// Context mapping handed to the renderer.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Normalized statistics record.
    pub user:             &'a UserStats,
    /// Number of days covered by the sparkline.
    pub days:             usize,
    /// Whether the support footer link is rendered.
    pub support:          bool,
    /// Pre-rendered sparkline SVG markup.
    pub commit_sparkline: &'a str,
    /// Run instant displayed in the badge footer.
    pub generated_at:     DateTime<Utc>
}

/// Renders the badge HTML document from the provided context.
///
/// Counts are shortened with [`shortnum`], the language list is truncated
/// with [`smarttruncate`], and all dynamic text is XML-escaped. The
/// sparkline markup is inserted verbatim since it is generated content.
pub fn render_badge(context: &RenderContext<'_>) -> String {
    use std::fmt::Write as _;

    let user = context.user;
    let display_name = user.name.as_deref().unwrap_or(user.login.as_str());
    let languages = smarttruncate(&user.languages.join(", "));

    let mut html = String::with_capacity(2048);
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"en\">");
    let _ = writeln!(
        html,
        "<head><meta charset=\"utf-8\"><title>{} on GitHub</title></head>",
        escape_xml(display_name)
    );
    let _ = writeln!(html, "<body class=\"gh-badge\">");
    let _ = writeln!(
        html,
        "<a href=\"{}\"><img class=\"avatar\" src=\"{}\" alt=\"{}\" width=\"48\" height=\"48\"></a>",
        escape_xml(&user.html_url),
        escape_xml(&user.avatar_url),
        escape_xml(&user.login)
    );
    let _ = writeln!(
        html,
        "<h1><a href=\"{}\">{}</a></h1>",
        escape_xml(&user.html_url),
        escape_xml(display_name)
    );
    let _ = writeln!(
        html,
        "<ul class=\"counters\">\n<li>{} followers</li>\n<li>{} stargazers</li>\n<li>{} repos</li>\n<li>{} forks</li>\n</ul>",
        shortnum(user.followers as f64),
        shortnum(user.stargazers as f64),
        shortnum(user.repos as f64),
        shortnum(user.forks as f64)
    );
    if !user.languages.is_empty() {
        let _ = writeln!(html, "<p class=\"languages\">{}</p>", escape_xml(&languages));
    }
    if let Some(project) = user.last_project.as_deref() {
        let project_url = user.last_project_url.as_deref().unwrap_or(user.html_url.as_str());
        let _ = writeln!(
            html,
            "<p class=\"last-project\">last seen in <a href=\"{}\">{}</a></p>",
            escape_xml(project_url),
            escape_xml(project)
        );
    }
    let _ = writeln!(
        html,
        "<div class=\"sparkline\" title=\"commits over the last {} days (max {})\">\n{}\n</div>",
        context.days, user.max_commits, context.commit_sparkline
    );
    let _ = writeln!(
        html,
        "<footer>generated {}</footer>",
        context.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    if context.support {
        let _ = writeln!(
            html,
            "<a class=\"support\" href=\"https://github.com/sponsors/{}\">support</a>",
            escape_xml(&user.login)
        );
    }
    let _ = writeln!(html, "</body>");
    html.push_str("</html>\n");

    html
}

/// Writes the rendered badge to `path` through a buffered writer.
///
/// # Errors
///
/// Returns [`Error::BadgeIo`](Error::BadgeIo) when the file cannot be
/// created or written.
pub fn write_badge(path: &Path, contents: &str) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| error::badge_io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|source| error::badge_io_error(path, source))?;
    writer
        .flush()
        .map_err(|source| error::badge_io_error(path, source))?;

    debug!(path = %path.display(), "badge artifact written");
    Ok(())
}

fn escape_xml(value: &str) -> Cow<'_, str> {
    if value
        .chars()
        .any(|character| matches!(character, '&' | '<' | '>' | '\"' | '\''))
    {
        let mut escaped = String::with_capacity(value.len());
        for character in value.chars() {
            match character {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '\"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                other => escaped.push(other)
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(value)
    }
}
