//! Portfolio page rendering.
//!
//! A pure function from [`Portfolio`] + [`SiteConfig`] + year to one Maud
//! [`Markup`] tree. No I/O, no state: the same inputs always produce the same
//! HTML, which is what lets the tests below assert on exact strings.
//!
//! ## Page Structure
//!
//! ```text
//! header            name, tagline, social links
//! main
//! ├── About Me      circular document links
//! ├── Open Source   project cards
//! ├── Website       website cards
//! └── Hobby • Music nested card hosting the player iframe
//! footer            © <year> <name>. <closing phrase>
//! ```
//!
//! The section order and heading texts are fixed. Every section renders even
//! when its collection is empty, so anything consuming the page by heading
//! text sees the same sequence on every site.
//!
//! ## Outbound Links
//!
//! Every link leaves the page: `target="_blank"` plus [`OUTBOUND_REL`]. What
//! happens after the click (404, blocked embed) is the browser's business.

use crate::config::{self, MotionConfig, SiteConfig};
use crate::content::{CardEntry, DocumentLink, MediaEmbed, Network, Portfolio, SiteCard, SocialLink};
use crate::motion::{ENTER_CLASS, Entrance};
use maud::{DOCTYPE, Markup, PreEscaped, Render, html};

/// `rel` of every outbound link.
pub const OUTBOUND_REL: &str = "noreferrer";

/// Section headings, in page order.
pub const SECTION_TITLES: [&str; 4] = ["About Me", "Open Source", "Website", "Hobby • Music"];

/// Text of the block shown in place of a missing logo.
pub const LOGO_PLACEHOLDER: &str = "LOGO";

const PLAYER_PERMISSIONS: &str =
    "autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture";

const CSS_STATIC: &str = include_str!("../static/style.css");
const LINKEDIN_ICON: &str = include_str!("../static/icons/linkedin.svg");

impl Network {
    /// Inline SVG icon, if the network has one.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            Network::LinkedIn => Some(LINKEDIN_ICON),
            Network::Other => None,
        }
    }
}

/// Full stylesheet: generated custom properties followed by the static rules.
pub fn stylesheet(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_layout_css(&config.layout),
        CSS_STATIC
    )
}

/// Render the whole page.
pub fn render_page(portfolio: &Portfolio, config: &SiteConfig, year: i32) -> Markup {
    let motion = &config.motion;
    let [about, open_source, website, hobby] = SECTION_TITLES;

    let content = html! {
        (render_header(portfolio, motion))
        main.content {
            section id="about" {
                (section_title(about))
                (render_documents(&portfolio.documents, motion))
            }
            section id="open-source" {
                (section_title(open_source))
                (render_site_cards(&portfolio.projects, motion))
            }
            section id="websites" {
                (section_title(website))
                (render_site_cards(&portfolio.websites, motion))
            }
            section id="hobby" {
                (section_title(hobby))
                (render_media(&portfolio.media, config.layout.player_height))
            }
        }
        (render_footer(&portfolio.identity.name, &portfolio.identity.footer, year))
    };

    base_document(
        &portfolio.identity.name,
        &portfolio.identity.tagline,
        &stylesheet(config),
        content,
    )
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, description: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="color-scheme" content="light dark";
                meta name="description" content=(description);
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                div.page {
                    (content)
                }
            }
        }
    }
}

/// Section heading at a fixed rank.
pub fn section_title(label: impl Render) -> Markup {
    html! {
        h2.section-title { (label) }
    }
}

/// Elevated, blurred, rounded container. `extra` adds classes.
pub fn card(extra: Option<&str>, content: Markup) -> Markup {
    let class = match extra {
        Some(extra) => format!("card {extra}"),
        None => "card".to_string(),
    };
    html! {
        div class=(class) { (content) }
    }
}

/// One outbound link per entry, in declaration order.
///
/// Entries are keyed by [`CardEntry::key`]; keys must be unique within the
/// collection (enforced when the content is loaded). The n-th entry gets
/// the entrance built by `entrance(n)`, so the cards cascade.
pub fn render_collection<T: CardEntry>(
    entries: &[T],
    layout_class: &str,
    link_class: &str,
    motion: &MotionConfig,
    entrance: fn(usize, &MotionConfig) -> Entrance,
    body: impl Fn(&T) -> Markup,
) -> Markup {
    html! {
        div class=(layout_class) {
            @for (index, entry) in entries.iter().enumerate() {
                @let enter = motion.enabled.then(|| entrance(index, motion));
                a class=(entering_class(link_class, enter.is_some()))
                    href=(entry.href())
                    target="_blank"
                    rel=(OUTBOUND_REL)
                    data-key=(entry.key())
                    style=[enter.map(|e| e.style())] {
                    (body(entry))
                }
            }
        }
    }
}

fn entering_class(class: &str, entering: bool) -> String {
    if entering {
        format!("{class} {ENTER_CLASS}")
    } else {
        class.to_string()
    }
}

fn render_documents(documents: &[DocumentLink], motion: &MotionConfig) -> Markup {
    render_collection(
        documents,
        "doc-row",
        "doc-link",
        motion,
        Entrance::pop,
        |doc| {
            html! {
                div.doc-circle {
                    div.doc-text {
                        div.doc-title { (doc.title) }
                        div.doc-subtitle { (doc.subtitle) }
                    }
                }
            }
        },
    )
}

fn render_site_cards(cards: &[SiteCard], motion: &MotionConfig) -> Markup {
    render_collection(cards, "card-list", "card-link", motion, Entrance::rise, |site| {
        card(
            Some("site-card"),
            html! {
                (render_logo(site))
                div.site-text {
                    h3.card-title { (site.title) }
                    p.card-description { (site.description) }
                }
                div.visit-hint { "Visit ↗" }
            },
        )
    })
}

/// Logo image, or a fixed-size placeholder block when the card has none.
fn render_logo(site: &SiteCard) -> Markup {
    html! {
        @if let Some(src) = &site.logo {
            img.logo src=(src) alt=(site.title) loading="lazy";
        } @else {
            div.logo.logo-placeholder { (LOGO_PLACEHOLDER) }
        }
    }
}

/// Header: identity and social links.
fn render_header(portfolio: &Portfolio, motion: &MotionConfig) -> Markup {
    let enter = motion.enabled.then(|| Entrance::header(motion));
    html! {
        header.site-header {
            div class=(entering_class("hero", enter.is_some())) style=[enter.map(|e| e.style())] {
                h1.name { (portfolio.identity.name) }
                p.tagline { (portfolio.identity.tagline) }
                nav.socials {
                    @for social in &portfolio.socials {
                        (render_social(social))
                    }
                }
            }
        }
    }
}

/// One social button. Networks without an icon keep an empty, clickable box.
fn render_social(social: &SocialLink) -> Markup {
    html! {
        a.social-link
            href=(social.url)
            target="_blank"
            rel=(OUTBOUND_REL)
            aria-label=(social.label)
            title=(social.label)
            data-key=(social.label) {
            @if let Some(icon) = social.network.icon() {
                (PreEscaped(icon))
            }
        }
    }
}

/// Player iframe in a card nested in a card.
fn render_media(media: &MediaEmbed, player_height: u32) -> Markup {
    card(
        Some("media-frame"),
        html! {
            (card(Some("media-card"), html! {
                iframe.player
                    title=(media.title)
                    src=(media.embed_src)
                    height=(player_height)
                    frameborder="0"
                    allow=(PLAYER_PERMISSIONS)
                    allowfullscreen
                    loading="lazy" {}
            }))
            a.artist-link href=(media.artist_url) target="_blank" rel=(OUTBOUND_REL) {
                "Open artist page ↗"
            }
        },
    )
}

/// Copyright line. `year` comes from the clock at render time.
fn render_footer(name: &str, closing: &str, year: i32) -> Markup {
    html! {
        footer.site-footer {
            p { "© " (year) " " (name) ". " (closing) }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
