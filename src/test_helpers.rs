//! Shared test utilities for the simple-folio test suite.
//!
//! Provides content builders and small HTML probes. The probes work on the
//! exact markup Maud emits (double-quoted attributes, no nested links), which
//! is all the renderer produces; they are not a general HTML parser.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut portfolio = sample_portfolio();
//! portfolio.websites = vec![site_card("A", None), site_card("B", Some("/b.png"))];
//! let html = render_page(&portfolio, &SiteConfig::default(), 2025).into_string();
//!
//! assert_eq!(inner_texts(&html, r#"<h3 class="card-title""#), ["A", "B"]);
//! let links = anchors_with_class(&html, "card-link");
//! assert_eq!(attr(links[0].head, "href"), Some("https://a.example"));
//! ```

use crate::content::{
    DEFAULT_FOOTER, DocumentLink, Identity, MediaEmbed, Network, Portfolio, SiteCard, SocialLink,
};

// =========================================================================
// Content builders
// =========================================================================

/// A small valid portfolio: one social, two documents, one project without
/// a logo and one website with a logo.
pub fn sample_portfolio() -> Portfolio {
    Portfolio {
        identity: Identity {
            name: "Ada Example".to_string(),
            tagline: "Creator".to_string(),
            footer: DEFAULT_FOOTER.to_string(),
        },
        socials: vec![social(
            "LinkedIn",
            Network::LinkedIn,
            "https://www.linkedin.com/in/ada-example",
        )],
        media: MediaEmbed {
            artist_url: "https://open.spotify.com/artist/abc".to_string(),
            embed_src: "https://open.spotify.com/embed/artist/abc?theme=0".to_string(),
            title: "Spotify Artist".to_string(),
        },
        documents: vec![
            document("CV", "/assets/cv.pdf"),
            document("Degree", "/assets/degree.pdf"),
        ],
        projects: vec![site_card("Z-Sewer", None)],
        websites: vec![site_card("Lulle", Some("/assets/lulle.png"))],
    }
}

pub fn social(label: &str, network: Network, url: &str) -> SocialLink {
    SocialLink {
        label: label.to_string(),
        network,
        url: url.to_string(),
    }
}

pub fn document(title: &str, url: &str) -> DocumentLink {
    DocumentLink {
        title: title.to_string(),
        url: url.to_string(),
        subtitle: format!("{title} (PDF)"),
    }
}

/// Card with url `https://<lowercased title>.example`.
pub fn site_card(title: &str, logo: Option<&str>) -> SiteCard {
    SiteCard {
        title: title.to_string(),
        url: format!("https://{}.example", title.to_lowercase()),
        description: format!("About {title}."),
        logo: logo.map(str::to_string),
    }
}

// =========================================================================
// HTML probes
// =========================================================================

/// An `<a>` element split into its opening tag and its inner HTML.
#[derive(Debug)]
pub struct Anchor<'a> {
    pub head: &'a str,
    pub inner: &'a str,
}

/// Text directly after each element that starts with `open`, up to the next
/// tag. `open` is the start of the opening tag, e.g. `<h2 class="x"`.
pub fn inner_texts<'a>(html: &'a str, open: &str) -> Vec<&'a str> {
    let mut texts = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(open) {
        let after = &rest[start + open.len()..];
        let Some(gt) = after.find('>') else { break };
        let body = &after[gt + 1..];
        let end = body.find('<').unwrap_or(body.len());
        texts.push(&body[..end]);
        rest = body;
    }
    texts
}

/// Opening tags starting with `open` (e.g. `<img`), including the `>`.
pub fn tags<'a>(html: &'a str, open: &str) -> Vec<&'a str> {
    let mut found = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(open) {
        let tail = &rest[start..];
        let Some(gt) = tail.find('>') else { break };
        found.push(&tail[..=gt]);
        rest = &tail[gt + 1..];
    }
    found
}

/// All `<a>` elements whose class list contains `class`, in document order.
pub fn anchors_with_class<'a>(html: &'a str, class: &str) -> Vec<Anchor<'a>> {
    let mut anchors = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find("<a ") {
        let tail = &rest[start..];
        let Some(gt) = tail.find('>') else { break };
        let head = &tail[..=gt];
        let body = &tail[gt + 1..];
        let end = body.find("</a>").unwrap_or(body.len());
        let has_class = attr(head, "class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false);
        if has_class {
            anchors.push(Anchor {
                head,
                inner: &body[..end],
            });
        }
        rest = body;
    }
    anchors
}

/// Value of attribute `name` in an opening tag.
pub fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_helpers_read_maud_markup() {
        let html = r#"<div><a class="card-link enter" href="/x" data-key="X"><h3 class="card-title">X</h3></a><a class="other" href="/y">y</a></div>"#;
        let links = anchors_with_class(html, "card-link");
        assert_eq!(links.len(), 1);
        assert_eq!(attr(links[0].head, "href"), Some("/x"));
        assert_eq!(attr(links[0].head, "data-key"), Some("X"));
        assert_eq!(inner_texts(html, r#"<h3 class="card-title""#), ["X"]);
        assert_eq!(tags(html, "<a"), [
            r#"<a class="card-link enter" href="/x" data-key="X">"#,
            r#"<a class="other" href="/y">"#,
        ]);
    }
}
