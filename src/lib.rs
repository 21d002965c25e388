//! # Simple Folio
//!
//! A minimal static site generator for one-page personal portfolios. One
//! TOML file declares the whole page; one command turns it into a single
//! `index.html` with inline CSS, next to a copy of the assets it links to.
//!
//! # The Page
//!
//! ```text
//! header              name, tagline, social links
//! About Me            circular links to documents (CV, certificates)
//! Open Source         project cards
//! Website             website cards
//! Hobby • Music       embedded music player
//! footer              © <current year> <name>. <closing phrase>
//! ```
//!
//! The section order and headings are fixed; what goes in them is content.
//!
//! # Pipeline
//!
//! ```text
//! content/portfolio.toml ─┐
//! content/config.toml ────┼─ load + validate ─ render (pure) ─ dist/index.html
//! content/assets/ ────────┴──────────── copy ───────────────── dist/assets/
//! ```
//!
//! Rendering is a pure function of the content, the presentation config and
//! the year. The year comes from a [`clock::Clock`] so it is read at build
//! time, never stored, and can be pinned in tests.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | `portfolio.toml` schema: identity, socials, documents, projects, websites, media |
//! | [`config`] | `config.toml` presentation settings: colors, motion, layout; merging and CSS generation |
//! | [`render`] | Maud components and the page renderer |
//! | [`motion`] | Entrance animation descriptors and the per-position stagger |
//! | [`clock`] | Calendar year source for the footer |
//! | [`generate`] | Load, render, write, copy assets |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `log` + `flexi_logger` bootstrap |
//!
//! # Design Decisions
//!
//! ## Content and Presentation Are Separate Files
//!
//! `portfolio.toml` says what the page shows; `config.toml` says how it looks.
//! The second is optional and sparse, merged over stock defaults, so a site
//! owner only ever edits content.
//!
//! ## Errors at Load Time, Fallbacks at Render Time
//!
//! Anything the author can get wrong (a card without a title, a duplicate
//! title, an unknown social network, a typo in a key) fails the build with a
//! message. Anything that is a legitimate gap renders a designed fallback: a
//! card without a logo gets a "LOGO" placeholder, a network without an icon
//! gets an empty button.
//!
//! ## The Browser Does the Moving
//!
//! Entrance animations are descriptors (start state, end state, duration,
//! delay) written as inline CSS custom properties. One `@keyframes` rule
//! interpolates them. No JavaScript ships with the page, and
//! `prefers-reduced-motion` turns every animation off.

pub mod clock;
pub mod config;
pub mod content;
pub mod generate;
pub mod logging;
pub mod motion;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
