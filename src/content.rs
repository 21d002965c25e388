//! Portfolio content schema.
//!
//! Everything the page shows is declared in one `portfolio.toml` in the
//! content root. The file is deserialized into the strongly typed
//! [`Portfolio`] and validated once; after that it is read-only for the
//! lifetime of the build.
//!
//! ```toml
//! [identity]
//! name = "Ada Example"
//! tagline = "Creator"
//!
//! [[socials]]
//! label = "LinkedIn"
//! network = "linkedin"
//! url = "https://www.linkedin.com/in/ada-example"
//!
//! [media]
//! artist_url = "https://open.spotify.com/artist/..."
//! embed_src = "https://open.spotify.com/embed/artist/..."
//!
//! [[documents]]
//! title = "CV"
//! url = "/assets/cv.pdf"
//! subtitle = "Résumé (PDF)"
//!
//! [[projects]]
//! title = "Z-SEWER"
//! url = "#"
//! description = "Digital-twin for sewer network."
//! logo = "/assets/z-sewer.png"    # optional
//!
//! [[websites]]
//! title = "L U L L E"
//! url = "https://lulle.dev"
//! description = "Your first step into coding."
//! ```
//!
//! ## Load-time guarantees
//!
//! - Unknown keys and missing required fields are TOML errors, so a card
//!   without a title never reaches the renderer.
//! - Titles are unique within each collection and social labels are unique.
//!   Titles are the identity key of a card (`data-key` in the output), so a
//!   duplicate is rejected instead of rendered.
//! - Collections keep declaration order. Nothing is sorted.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

/// File name of the content declaration inside the content root.
pub const CONTENT_FILE: &str = "portfolio.toml";

/// Closing phrase of the footer when `identity.footer` is not set.
pub const DEFAULT_FOOTER: &str = "To be or not to be, that, is the question.";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{0} not found")]
    Missing(String),
    #[error("identity.name must not be empty")]
    EmptyName,
    #[error("duplicate title {title:?} in {collection}")]
    DuplicateTitle {
        collection: &'static str,
        title: String,
    },
    #[error("media.embed_src must be an absolute http(s) URL, got {0:?}")]
    InvalidEmbed(String),
}

/// The whole page, as declared by the site operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    pub identity: Identity,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub media: MediaEmbed,
    /// "About Me" section: circular links to documents.
    #[serde(default)]
    pub documents: Vec<DocumentLink>,
    /// "Open Source" section.
    #[serde(default)]
    pub projects: Vec<SiteCard>,
    /// "Website" section.
    #[serde(default)]
    pub websites: Vec<SiteCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Identity {
    pub name: String,
    pub tagline: String,
    /// Closing phrase of the copyright line.
    #[serde(default = "default_footer")]
    pub footer: String,
}

fn default_footer() -> String {
    DEFAULT_FOOTER.to_string()
}

/// Social networks with first-class support.
///
/// The set is closed: an unrecognized `network` value fails to load. Use
/// `other` for a network that has no icon yet; it still renders as a
/// clickable, labelled affordance so the header row keeps its alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[serde(rename = "linkedin")]
    LinkedIn,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Accessible name of the link. Unique among socials.
    pub label: String,
    pub network: Network,
    pub url: String,
}

/// Third-party player shown in the "Hobby • Music" section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaEmbed {
    pub artist_url: String,
    pub embed_src: String,
    /// Accessible title of the player iframe.
    #[serde(default = "default_media_title")]
    pub title: String,
}

fn default_media_title() -> String {
    "Spotify Artist".to_string()
}

/// A circular link to a hosted document (CV, certificate, diploma).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentLink {
    pub title: String,
    pub url: String,
    pub subtitle: String,
}

/// A project or website card.
///
/// `url` may be a placeholder such as `"#"` for work that is not public yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteCard {
    pub title: String,
    pub url: String,
    pub description: String,
    /// Logo image URL. Absent logos render as a "LOGO" placeholder block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// An entry of a rendered collection: one card, keyed by its title.
pub trait CardEntry {
    /// Stable identity of the card within its collection.
    fn key(&self) -> &str;
    /// Outbound navigation target.
    fn href(&self) -> &str;
}

impl CardEntry for DocumentLink {
    fn key(&self) -> &str {
        &self.title
    }

    fn href(&self) -> &str {
        &self.url
    }
}

impl CardEntry for SiteCard {
    fn key(&self) -> &str {
        &self.title
    }

    fn href(&self) -> &str {
        &self.url
    }
}

/// A URL in the content that points inside the content root (`/assets/...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    /// Where the reference comes from, e.g. `documents "CV"`.
    pub owner: String,
    pub url: String,
}

impl Portfolio {
    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.identity.name.trim().is_empty() {
            return Err(ContentError::EmptyName);
        }
        ensure_unique("socials", self.socials.iter().map(|s| s.label.as_str()))?;
        ensure_unique("documents", self.documents.iter().map(|d| d.title.as_str()))?;
        ensure_unique("projects", self.projects.iter().map(|c| c.title.as_str()))?;
        ensure_unique("websites", self.websites.iter().map(|c| c.title.as_str()))?;

        let src = self.media.embed_src.as_str();
        if !(src.starts_with("https://") || src.starts_with("http://")) {
            return Err(ContentError::InvalidEmbed(src.to_string()));
        }
        Ok(())
    }

    /// Every root-relative URL in the content, in page order.
    ///
    /// Protocol-relative URLs (`//cdn...`) are external and skipped.
    pub fn local_asset_refs(&self) -> Vec<AssetRef> {
        let mut refs = Vec::new();

        for doc in &self.documents {
            if is_local_url(&doc.url) {
                refs.push(AssetRef {
                    owner: format!("documents {:?}", doc.title),
                    url: doc.url.clone(),
                });
            }
        }
        for (collection, cards) in [("projects", &self.projects), ("websites", &self.websites)] {
            for card in cards {
                if is_local_url(&card.url) {
                    refs.push(AssetRef {
                        owner: format!("{collection} {:?}", card.title),
                        url: card.url.clone(),
                    });
                }
                if let Some(logo) = card.logo.as_deref().filter(|l| is_local_url(l)) {
                    refs.push(AssetRef {
                        owner: format!("{collection} {:?} logo", card.title),
                        url: logo.to_string(),
                    });
                }
            }
        }
        refs
    }

    /// Asset references that will not resolve in the output.
    ///
    /// Only `<root>/<assets_dir>` is copied, so a reference is missing when
    /// its file does not exist or lives outside `/<assets_dir>/`.
    pub fn missing_assets(&self, root: &Path, assets_dir: &str) -> Vec<AssetRef> {
        self.local_asset_refs()
            .into_iter()
            .filter(|r| !resolves_in_assets(&r.url, root, Path::new(assets_dir)))
            .collect()
    }
}

fn resolves_in_assets(url: &str, root: &Path, assets_dir: &Path) -> bool {
    let relative = url.trim_start_matches('/');
    // Drop query strings and fragments before hitting the filesystem.
    let relative = Path::new(relative.split(['?', '#']).next().unwrap_or(relative));
    let inside = relative.starts_with(assets_dir)
        && relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    inside && root.join(relative).is_file()
}

fn is_local_url(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//")
}

fn ensure_unique<'a>(
    collection: &'static str,
    titles: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for title in titles {
        if !seen.insert(title) {
            return Err(ContentError::DuplicateTitle {
                collection,
                title: title.to_string(),
            });
        }
    }
    Ok(())
}

/// Parse and validate a portfolio from TOML text.
pub fn parse_portfolio(content: &str) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio = toml::from_str(content)?;
    portfolio.validate()?;
    Ok(portfolio)
}

/// Load `portfolio.toml` from the content root.
pub fn load_portfolio(root: &Path) -> Result<Portfolio, ContentError> {
    let path = root.join(CONTENT_FILE);
    if !path.exists() {
        return Err(ContentError::Missing(path.display().to_string()));
    }
    let content = fs::read_to_string(&path)?;
    parse_portfolio(&content)
}

/// Returns a commented sample `portfolio.toml`.
///
/// Used by the `gen-content` CLI command.
pub fn stock_portfolio_toml() -> &'static str {
    r##"# Simple Folio Content
# ====================
# Everything shown on the page is declared here. Sections render in a fixed
# order: About Me (documents), Open Source (projects), Website (websites),
# Hobby • Music (media). Entries keep the order they are written in.
#
# Titles must be unique within a section. Unknown keys cause an error.

[identity]
name = "Ada Example"
tagline = "Creator"
# Closing phrase of the copyright line.
footer = "To be or not to be, that, is the question."

# ---------------------------------------------------------------------------
# Social links (header). network = "linkedin" | "other"
# "other" renders an empty, still clickable, button.
# ---------------------------------------------------------------------------
[[socials]]
label = "LinkedIn"
network = "linkedin"
url = "https://www.linkedin.com/in/ada-example"

# ---------------------------------------------------------------------------
# Music player (Hobby • Music)
# ---------------------------------------------------------------------------
[media]
artist_url = "https://open.spotify.com/artist/0000000000000000000000"
embed_src = "https://open.spotify.com/embed/artist/0000000000000000000000?utm_source=generator&theme=0"

# ---------------------------------------------------------------------------
# About Me: circular document links. Paths starting with / resolve against
# the content root, so /assets/cv.pdf is content/assets/cv.pdf. Only the
# assets directory is copied to the output.
# ---------------------------------------------------------------------------
[[documents]]
title = "CV"
url = "/assets/cv.pdf"
subtitle = "Résumé (PDF)"

[[documents]]
title = "Degree"
url = "/assets/degree.pdf"
subtitle = "Diplomas (PDF)"

# ---------------------------------------------------------------------------
# Open Source. logo is optional; without it a LOGO placeholder is shown.
# url = "#" keeps the card visible without a public link.
# ---------------------------------------------------------------------------
[[projects]]
title = "Z-SEWER"
url = "#"
description = "Digital-twin for sewer network."

# ---------------------------------------------------------------------------
# Website
# ---------------------------------------------------------------------------
[[websites]]
title = "L U L L E"
url = "https://lulle.dev"
description = "Your first step into coding."
"##
}
