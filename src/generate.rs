//! Site generation.
//!
//! Loads `config.toml` and `portfolio.toml` from the content root, renders the
//! page and writes the output directory:
//!
//! ```text
//! dist/
//! ├── index.html        # The whole portfolio, CSS inlined
//! └── assets/           # Copy of content/assets/ (PDFs, logos, images)
//! ```
//!
//! Asset URLs in the content (`/assets/cv.pdf`) are not rewritten; they
//! resolve because the assets directory lands at the same path under the
//! output root. References to files that do not exist, or that live outside
//! the assets directory and so are never copied, are logged as warnings and
//! reported, never fatal: a missing logo or PDF is a broken link in the
//! browser, not a broken build.
//!
//! The output directory must not overlap the content root.

use crate::clock::Clock;
use crate::config::{self, ConfigError, SiteConfig};
use crate::content::{self, AssetRef, ContentError, Portfolio};
use crate::render;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error(
        "output directory {} overlaps content directory {}; choose an output outside the content",
        output.display(),
        content.display()
    )]
    OutputOverlapsContent { content: PathBuf, output: PathBuf },
}

/// Validated inputs of a build.
#[derive(Debug)]
pub struct Site {
    pub config: SiteConfig,
    pub portfolio: Portfolio,
    /// Local asset references with no file behind them.
    pub missing_assets: Vec<AssetRef>,
}

/// What a build wrote.
#[derive(Debug)]
pub struct BuildReport {
    pub index: PathBuf,
    pub assets_dir: String,
    pub assets_copied: usize,
    pub year: i32,
    pub site: Site,
}

/// Load and validate everything under `source` without writing anything.
pub fn load_site(source: &Path) -> Result<Site, GenerateError> {
    let config = config::load_config(source)?;
    let portfolio = content::load_portfolio(source)?;
    let missing_assets = portfolio.missing_assets(source, &config.assets_dir);
    for missing in &missing_assets {
        warn!(
            "event=asset_check module=generate status=missing owner={} url={}",
            missing.owner, missing.url
        );
    }
    info!(
        "event=load module=generate status=ok documents={} projects={} websites={} socials={}",
        portfolio.documents.len(),
        portfolio.projects.len(),
        portfolio.websites.len(),
        portfolio.socials.len()
    );
    Ok(Site {
        config,
        portfolio,
        missing_assets,
    })
}

/// Build the site from `source` into `output`.
///
/// The footer year is read from `clock` once, at render time.
pub fn generate(
    source: &Path,
    output: &Path,
    clock: &impl Clock,
) -> Result<BuildReport, GenerateError> {
    let started_at = Instant::now();
    info!(
        "event=build module=generate status=start source={} output={}",
        source.display(),
        output.display()
    );

    let site = load_site(source)?;
    ensure_disjoint(source, output)?;
    let year = clock.current_year();
    let page = render::render_page(&site.portfolio, &site.config, year);

    fs::create_dir_all(output)?;
    let index = output.join("index.html");
    fs::write(&index, page.into_string())?;
    debug!("event=write module=generate status=ok path={}", index.display());

    let assets_dir = site.config.assets_dir.clone();
    let assets_copied = copy_assets(&source.join(&assets_dir), &output.join(&assets_dir))?;

    info!(
        "event=build module=generate status=ok assets={} duration_ms={}",
        assets_copied,
        started_at.elapsed().as_millis()
    );
    Ok(BuildReport {
        index,
        assets_dir,
        assets_copied,
        year,
        site,
    })
}

/// Refuse an output directory that is, contains, or sits inside the content
/// root. Copying assets onto themselves truncates them.
fn ensure_disjoint(source: &Path, output: &Path) -> Result<(), GenerateError> {
    let content = source.canonicalize()?;
    let output = resolve_path(output)?;
    if output.starts_with(&content) || content.starts_with(&output) {
        return Err(GenerateError::OutputOverlapsContent { content, output });
    }
    Ok(())
}

/// Absolute form of `path`, which may not exist yet. The nearest existing
/// ancestor is canonicalized and the rest joined back on.
fn resolve_path(path: &Path) -> Result<PathBuf, std::io::Error> {
    match path.canonicalize() {
        Ok(resolved) => Ok(resolved),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let Some(name) = path.file_name() else {
                return Err(err);
            };
            let parent = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            Ok(resolve_path(parent)?.join(name))
        }
        Err(err) => Err(err),
    }
}

/// Copy `src` into `dst` recursively, skipping dotfiles. Returns the number
/// of files copied. A missing `src` copies nothing.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        debug!(
            "event=copy_assets module=generate status=skipped reason=no_dir path={}",
            src.display()
        );
        return Ok(0);
    }

    let mut copied = 0;
    let walker = WalkDir::new(src)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));
    for entry in walker {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
