//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output reads as an inventory of the page, in page order. Every entry
//! leads with its positional index and title; URLs and logos are indented
//! context lines underneath. Missing assets are listed last so they are the
//! final thing on screen.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Header
//!     Ada Example (Creator)
//!     001 LinkedIn
//!         Url: https://www.linkedin.com/in/ada-example
//!
//! About Me
//!     001 CV
//!         Url: /assets/cv.pdf
//!
//! Open Source
//!     001 Z-SEWER
//!         Url: #
//!         Logo: (placeholder)
//!
//! Website
//!     (none)
//!
//! Hobby • Music
//!     Player: https://open.spotify.com/embed/artist/...
//!
//! Missing assets
//!     documents "Degree" → /assets/degree.pdf
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html (© 2026)
//! 2 documents, 1 project, 1 website
//! Copied 3 files → assets/
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::content::{AssetRef, Portfolio, SiteCard};
use crate::generate::{BuildReport, Site};
use crate::render::SECTION_TITLES;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// `1 project`, `2 projects`.
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn entry_lines(lines: &mut Vec<String>, index: usize, title: &str, url: &str) {
    lines.push(format!("{}{} {}", indent(1), format_index(index), title));
    lines.push(format!("{}Url: {}", indent(2), url));
}

fn site_card_lines(lines: &mut Vec<String>, cards: &[SiteCard]) {
    if cards.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, card) in cards.iter().enumerate() {
        entry_lines(lines, i + 1, &card.title, &card.url);
        let desc = truncate_desc(card.description.trim(), 60);
        if !desc.is_empty() {
            lines.push(format!("{}{}", indent(2), desc));
        }
        let logo = card.logo.as_deref().unwrap_or("(placeholder)");
        lines.push(format!("{}Logo: {}", indent(2), logo));
    }
}

/// Format the page inventory for `check`.
pub fn format_check_output(site: &Site) -> Vec<String> {
    let portfolio: &Portfolio = &site.portfolio;
    let [about, open_source, website, hobby] = SECTION_TITLES;
    let mut lines = Vec::new();

    lines.push("Header".to_string());
    lines.push(format!(
        "{}{} ({})",
        indent(1),
        portfolio.identity.name,
        portfolio.identity.tagline
    ));
    for (i, social) in portfolio.socials.iter().enumerate() {
        entry_lines(&mut lines, i + 1, &social.label, &social.url);
    }

    lines.push(String::new());
    lines.push(about.to_string());
    if portfolio.documents.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, doc) in portfolio.documents.iter().enumerate() {
        entry_lines(&mut lines, i + 1, &doc.title, &doc.url);
    }

    lines.push(String::new());
    lines.push(open_source.to_string());
    site_card_lines(&mut lines, &portfolio.projects);

    lines.push(String::new());
    lines.push(website.to_string());
    site_card_lines(&mut lines, &portfolio.websites);

    lines.push(String::new());
    lines.push(hobby.to_string());
    lines.push(format!("{}Player: {}", indent(1), portfolio.media.embed_src));

    lines.extend(missing_asset_lines(&site.missing_assets));
    lines
}

fn missing_asset_lines(missing: &[AssetRef]) -> Vec<String> {
    if missing.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), "Missing assets".to_string()];
    for asset in missing {
        lines.push(format!("{}{} \u{2192} {}", indent(1), asset.owner, asset.url));
    }
    lines
}

/// Print the page inventory to stdout.
pub fn print_check_output(site: &Site) {
    for line in format_check_output(site) {
        println!("{}", line);
    }
}

/// Format the build summary.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let portfolio = &report.site.portfolio;
    let mut lines = vec![
        format!("Home \u{2192} index.html (\u{a9} {})", report.year),
        format!(
            "{}, {}, {}",
            plural(portfolio.documents.len(), "document"),
            plural(portfolio.projects.len(), "project"),
            plural(portfolio.websites.len(), "website"),
        ),
    ];
    if report.assets_copied > 0 {
        lines.push(format!(
            "Copied {} \u{2192} {}/",
            plural(report.assets_copied, "file"),
            report.assets_dir
        ));
    }
    lines.extend(missing_asset_lines(&report.site.missing_assets));
    lines
}

/// Print the build summary to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
