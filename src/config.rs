//! Presentation settings.
//!
//! Handles loading, validating, and merging `config.toml`. Content lives in
//! `portfolio.toml` (see [`crate::content`]); this file only controls how the
//! page looks and moves. It is optional: stock defaults reproduce the stock
//! look, and a user file overrides just the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"         # Copied verbatim to the output root
//!
//! [motion]
//! enabled = true                # false = no entrance animations
//! header_duration_ms = 400      # Header fade-down
//! card_duration_ms = 350        # Card entrance
//! stagger_ms = 50               # Extra delay per card position
//!
//! [layout]
//! max_width = "72rem"           # Page column width
//! section_gap = "2.5rem"        # Space between sections
//! player_height = 352           # Music player iframe height (px)
//!
//! [colors.light]
//! background_from = "#f8fafc"   # Page gradient, top
//! background_to = "#eef2ff"     # Page gradient, bottom
//! text = "#0f172a"
//! text_muted = "#525252"        # Taglines, subtitles, footer
//! card = "rgba(255, 255, 255, 0.8)"
//! border = "rgba(0, 0, 0, 0.05)"
//! placeholder = "#e5e5e5"       # LOGO placeholder block
//!
//! [colors.dark]
//! background_from = "#0f172a"
//! background_to = "#020617"
//! text = "#f1f5f9"
//! text_muted = "#a3a3a3"
//! card = "rgba(15, 23, 42, 0.7)"
//! border = "rgba(255, 255, 255, 0.1)"
//! placeholder = "#262626"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [motion]
//! enabled = false
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name of the presentation settings inside the content root.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site presentation settings loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory under the content root copied to the output root.
    pub assets_dir: String,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Entrance animation timings.
    pub motion: MotionConfig,
    /// Page geometry.
    pub layout: LayoutConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            colors: ColorConfig::default(),
            motion: MotionConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Longest duration accepted for a single entrance animation.
const MAX_DURATION_MS: u64 = 10_000;
/// Longest per-position stagger accepted.
const MAX_STAGGER_MS: u64 = 1_000;

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let motion = &self.motion;
        for (key, value) in [
            ("motion.header_duration_ms", motion.header_duration_ms),
            ("motion.card_duration_ms", motion.card_duration_ms),
        ] {
            if value == 0 || value > MAX_DURATION_MS {
                return Err(ConfigError::Validation(format!(
                    "{key} must be 1-{MAX_DURATION_MS}"
                )));
            }
        }
        if motion.stagger_ms > MAX_STAGGER_MS {
            return Err(ConfigError::Validation(format!(
                "motion.stagger_ms must be 0-{MAX_STAGGER_MS}"
            )));
        }
        if self.layout.player_height == 0 {
            return Err(ConfigError::Validation(
                "layout.player_height must be non-zero".into(),
            ));
        }
        let assets = Path::new(&self.assets_dir);
        if self.assets_dir.is_empty()
            || assets.is_absolute()
            || assets
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(ConfigError::Validation(
                "assets_dir must be a relative path inside the content root".into(),
            ));
        }
        for (key, value) in self.css_values() {
            if value.contains(CSS_FORBIDDEN) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a plain CSS value without `<`, `;`, `{{` or `}}`, got {value:?}"
                )));
            }
        }
        Ok(())
    }

    /// Every free-form string that ends up inside the inline `<style>`.
    fn css_values(&self) -> Vec<(String, &str)> {
        let mut values = vec![
            ("layout.max_width".to_string(), self.layout.max_width.as_str()),
            ("layout.section_gap".to_string(), self.layout.section_gap.as_str()),
        ];
        for (mode, scheme) in [("light", &self.colors.light), ("dark", &self.colors.dark)] {
            values.extend(
                scheme
                    .entries()
                    .into_iter()
                    .map(|(name, value)| (format!("colors.{mode}.{name}"), value)),
            );
        }
        values
    }
}

/// Characters that would end a declaration, a rule or the style element.
const CSS_FORBIDDEN: [char; 4] = ['<', ';', '{', '}'];

/// Entrance animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// When false, elements render in their final state with no animation.
    pub enabled: bool,
    /// Duration of the header fade-down.
    pub header_duration_ms: u64,
    /// Duration of each card entrance.
    pub card_duration_ms: u64,
    /// Delay added per card position so cards cascade in declaration order.
    pub stagger_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            header_duration_ms: 400,
            card_duration_ms: 350,
            stagger_ms: 50,
        }
    }
}

/// Page geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Maximum width of the page column (CSS value).
    pub max_width: String,
    /// Vertical gap between sections (CSS value).
    pub section_gap: String,
    /// Height of the music player iframe in pixels.
    pub player_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width: "72rem".to_string(),
            section_gap: "2.5rem".to_string(),
            player_height: 352,
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Top of the page background gradient.
    pub background_from: String,
    /// Bottom of the page background gradient.
    pub background_to: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (tagline, subtitles, descriptions, footer).
    pub text_muted: String,
    /// Card and circle fill. Translucent values let the backdrop blur show.
    pub card: String,
    /// Card, circle and social button borders.
    pub border: String,
    /// Fill of the LOGO placeholder block.
    pub placeholder: String,
}

impl ColorScheme {
    /// Keys as written in `config.toml`, with their values.
    fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("background_from", self.background_from.as_str()),
            ("background_to", self.background_to.as_str()),
            ("text", self.text.as_str()),
            ("text_muted", self.text_muted.as_str()),
            ("card", self.card.as_str()),
            ("border", self.border.as_str()),
            ("placeholder", self.placeholder.as_str()),
        ]
    }

    pub fn default_light() -> Self {
        Self {
            background_from: "#f8fafc".to_string(),
            background_to: "#eef2ff".to_string(),
            text: "#0f172a".to_string(),
            text_muted: "#525252".to_string(),
            card: "rgba(255, 255, 255, 0.8)".to_string(),
            border: "rgba(0, 0, 0, 0.05)".to_string(),
            placeholder: "#e5e5e5".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background_from: "#0f172a".to_string(),
            background_to: "#020617".to_string(),
            text: "#f1f5f9".to_string(),
            text_muted: "#a3a3a3".to_string(),
            card: "rgba(15, 23, 42, 0.7)".to_string(),
            border: "rgba(255, 255, 255, 0.1)".to_string(),
            placeholder: "#262626".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Folio Configuration
# ==========================
# Presentation settings only; page content lives in portfolio.toml.
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory under the content root copied verbatim to the output root.
# Reference its files from portfolio.toml as /assets/<file>.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Entrance animations
# ---------------------------------------------------------------------------
[motion]
# Set to false to render everything in its final state.
enabled = true

# Header fade-down duration.
header_duration_ms = 400

# Card entrance duration.
card_duration_ms = 350

# Extra delay per card position: the n-th card starts n * stagger_ms later,
# so cards cascade in the order they are declared.
stagger_ms = 50

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[layout]
# Maximum width of the page column (CSS value).
max_width = "72rem"

# Vertical gap between sections (CSS value).
section_gap = "2.5rem"

# Height of the music player in pixels.
player_height = 352

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background_from = "#f8fafc"
background_to = "#eef2ff"
text = "#0f172a"
text_muted = "#525252"    # Tagline, subtitles, descriptions, footer
card = "rgba(255, 255, 255, 0.8)"
border = "rgba(0, 0, 0, 0.05)"
placeholder = "#e5e5e5"   # LOGO placeholder block

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background_from = "#0f172a"
background_to = "#020617"
text = "#f1f5f9"
text_muted = "#a3a3a3"
card = "rgba(15, 23, 42, 0.7)"
border = "rgba(255, 255, 255, 0.1)"
placeholder = "#262626"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = scheme_properties(&colors.light, "    "),
        dark = scheme_properties(&colors.dark, "        "),
    )
}

fn scheme_properties(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("--color-bg-from", &scheme.background_from),
        ("--color-bg-to", &scheme.background_to),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-card", &scheme.card),
        ("--color-border", &scheme.border),
        ("--color-placeholder", &scheme.placeholder),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Generate CSS custom properties from layout config.
pub fn generate_layout_css(layout: &LayoutConfig) -> String {
    format!(
        r#":root {{
    --max-width: {max_width};
    --section-gap: {section_gap};
    --player-height: {player_height}px;
}}"#,
        max_width = layout.max_width,
        section_gap = layout.section_gap,
        player_height = layout.player_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_colors() {
        let config = SiteConfig::default();
        assert_eq!(config.colors.light.background_from, "#f8fafc");
        assert_eq!(config.colors.dark.background_from, "#0f172a");
    }

    #[test]
    fn default_config_has_motion_settings() {
        let config = SiteConfig::default();
        assert!(config.motion.enabled);
        assert_eq!(config.motion.header_duration_ms, 400);
        assert_eq!(config.motion.card_duration_ms, 350);
        assert_eq!(config.motion.stagger_ms, 50);
    }

    #[test]
    fn default_config_has_layout_settings() {
        let config = SiteConfig::default();
        assert_eq!(config.assets_dir, "assets");
        assert_eq!(config.layout.max_width, "72rem");
        assert_eq!(config.layout.player_height, 352);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors.light]
text = "#000000"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.colors.light.text, "#000000");
        // Defaults preserved
        assert_eq!(config.colors.light.background_from, "#f8fafc");
        assert_eq!(config.colors.dark.text, "#f1f5f9");
        assert_eq!(config.motion.stagger_ms, 50);
    }

    #[test]
    fn parse_motion_settings() {
        let toml = r#"
[motion]
enabled = false
stagger_ms = 120
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert!(!config.motion.enabled);
        assert_eq!(config.motion.stagger_ms, 120);
        assert_eq!(config.motion.card_duration_ms, 350);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r##"
assets_dir = "static"

[layout]
player_height = 152
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.assets_dir, "static");
        assert_eq!(config.layout.player_height, 152);
        assert_eq!(config.layout.max_width, "72rem");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[motion]
card_duration_ms = 0
"#,
        )
        .unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn style_breaking_color_is_rejected() {
        let mut config = SiteConfig::default();
        config.colors.dark.card = "red}</style><script>alert(1)</script>".to_string();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("colors.dark.card"));
    }

    #[test]
    fn style_breaking_layout_value_is_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[layout]\nmax_width = \"72rem; color: red\"\n",
        )
        .unwrap();

        let err = load_config(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("layout.max_width"));
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[motion]
stager_ms = 10
"#,
        )
        .unwrap();

        assert!(load_config(tmp.path()).is_err());
    }

    // =========================================================================
    // CSS generation tests
    // =========================================================================

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.card = "#f0f0f0".to_string();
        colors.dark.card = "#1a1a1a".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-card: #f0f0f0;"));
        assert!(css.contains("--color-card: #1a1a1a;"));
    }

    #[test]
    fn generate_css_includes_all_variables() {
        let css = generate_color_css(&ColorConfig::default());
        for var in [
            "--color-bg-from:",
            "--color-bg-to:",
            "--color-text:",
            "--color-text-muted:",
            "--color-card:",
            "--color-border:",
            "--color-placeholder:",
        ] {
            assert_eq!(css.matches(var).count(), 2, "{var} in both schemes");
        }
    }

    #[test]
    fn generate_css_includes_dark_mode_media_query() {
        let css = generate_color_css(&ColorConfig::default());
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
    }

    #[test]
    fn generate_layout_css_includes_variables() {
        let css = generate_layout_css(&LayoutConfig::default());
        assert!(css.contains("--max-width: 72rem;"));
        assert!(css.contains("--section-gap: 2.5rem;"));
        assert!(css.contains("--player-height: 352px;"));
    }

    #[test]
    fn color_scheme_default_is_light() {
        assert_eq!(ColorScheme::default(), ColorScheme::default_light());
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"stagger_ms = 50"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"stagger_ms = 80"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("stagger_ms").unwrap().as_integer(), Some(80));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r##"
[colors.light]
card = "#fff"
text = "#000"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[colors.light]
card = "#fafafa"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let light = merged.get("colors").unwrap().get("light").unwrap();
        assert_eq!(light.get("card").unwrap().as_str(), Some("#fafafa"));
        assert_eq!(light.get("text").unwrap().as_str(), Some("#000"));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[layout]
max_widht = "60rem"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let toml_str = r#"
[animation]
stagger_ms = 10
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_duration_bounds() {
        let mut config = SiteConfig::default();
        config.motion.header_duration_ms = MAX_DURATION_MS;
        assert!(config.validate().is_ok());

        config.motion.header_duration_ms = MAX_DURATION_MS + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("header_duration_ms"));
    }

    #[test]
    fn validate_stagger_too_large() {
        let mut config = SiteConfig::default();
        config.motion.stagger_ms = 0;
        assert!(config.validate().is_ok());

        config.motion.stagger_ms = MAX_STAGGER_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_player_height_zero() {
        let mut config = SiteConfig::default();
        config.layout.player_height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_assets_dir_stays_inside_root() {
        let mut config = SiteConfig::default();
        for bad in ["", "../shared", "/var/www/assets"] {
            config.assets_dir = bad.to_string();
            assert!(config.validate().is_err(), "{bad:?} accepted");
        }
        config.assets_dir = "static/files".to_string();
        assert!(config.validate().is_ok());
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[motion]"));
        assert!(content.contains("[layout]"));
        assert!(content.contains("[colors.light]"));
        assert!(content.contains("[colors.dark]"));
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value().unwrap();
        assert!(val.is_table());
        assert!(val.get("motion").is_some());
        assert!(val.get("layout").is_some());
        assert!(val.get("colors").is_some());
        assert!(val.get("assets_dir").is_some());
    }
}
