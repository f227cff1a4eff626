//! Configuration loading and parsing.
//!
//! Parses `poststudio.toml` (or an override path provided by the binary).
//! Two sections:
//! - `[compose]`: draft-side defaults (style, enrichment, template, affixes,
//!   hashtags) that become a `ComposeOptions`.
//! - `[visual]`: card metadata (ratio, theme, font, sizes, colors). The text
//!   pipeline never reads these; they ride along for the renderer.
//!
//! Every field has a default and unknown fields are ignored, so older or
//! newer settings files still load. A missing file silently yields defaults;
//! a file that cannot be read or parsed falls back to defaults with a `warn!`. Numeric visual fields are clamped to the slider
//! ranges the studio exposes; the raw parsed values stay in `file`.
//!
//! Settings are written back verbatim through [`Config::to_toml`]; where they
//! are stored is the host's business.

use anyhow::Result;
use core_enrich::{ComposeOptions, Template};
use core_text::StyleKind;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::PathBuf};
use tracing::{info, warn};

pub mod presets;
pub use presets::{FONT_PRESETS, FontPreset, RATIO_PRESETS, RatioPreset, THEME_PRESETS, ThemePreset};

pub const CONFIG_FILE_NAME: &str = "poststudio.toml";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ComposeConfig {
    #[serde(default = "ComposeConfig::default_style")]
    pub style: String,
    #[serde(default = "ComposeConfig::default_auto_enrich")]
    pub auto_enrich: bool,
    #[serde(default = "ComposeConfig::default_template")]
    pub template: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub hashtags: String,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            style: Self::default_style(),
            auto_enrich: Self::default_auto_enrich(),
            template: Self::default_template(),
            prefix: String::new(),
            suffix: String::new(),
            hashtags: String::new(),
        }
    }
}

impl ComposeConfig {
    fn default_style() -> String {
        StyleKind::Bold.as_str().to_string()
    }
    const fn default_auto_enrich() -> bool {
        true
    }
    fn default_template() -> String {
        Template::Blank.as_str().to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VisualConfig {
    #[serde(default = "VisualConfig::default_ratio")]
    pub ratio: String,
    #[serde(default = "VisualConfig::default_theme")]
    pub theme: String,
    #[serde(default = "VisualConfig::default_font")]
    pub font: String,
    #[serde(default = "VisualConfig::default_font_size")]
    pub font_size: u16,
    #[serde(default = "VisualConfig::default_line_height")]
    pub line_height: f32,
    #[serde(default)]
    pub align: Align,
    #[serde(default = "VisualConfig::default_padding")]
    pub padding: u16,
    #[serde(default = "VisualConfig::default_radius")]
    pub radius: u16,
    #[serde(default)]
    pub show_watermark: bool,
    #[serde(default = "VisualConfig::default_watermark")]
    pub watermark: String,
    #[serde(default)]
    pub show_safe: bool,
    // Per-field overrides on top of the theme preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_gradient: Option<bool>,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            ratio: Self::default_ratio(),
            theme: Self::default_theme(),
            font: Self::default_font(),
            font_size: Self::default_font_size(),
            line_height: Self::default_line_height(),
            align: Align::Left,
            padding: Self::default_padding(),
            radius: Self::default_radius(),
            show_watermark: false,
            watermark: Self::default_watermark(),
            show_safe: false,
            bg1: None,
            bg2: None,
            fg: None,
            accent: None,
            use_gradient: None,
        }
    }
}

impl VisualConfig {
    pub const FONT_SIZE_RANGE: (u16, u16) = (24, 96);
    pub const LINE_HEIGHT_RANGE: (f32, f32) = (1.0, 1.8);
    pub const PADDING_RANGE: (u16, u16) = (32, 160);
    pub const RADIUS_RANGE: (u16, u16) = (0, 64);

    fn default_ratio() -> String {
        RATIO_PRESETS[0].key.to_string()
    }
    fn default_theme() -> String {
        THEME_PRESETS[0].name.to_string()
    }
    fn default_font() -> String {
        FONT_PRESETS[0].label.to_string()
    }
    const fn default_font_size() -> u16 {
        48
    }
    const fn default_line_height() -> f32 {
        1.2
    }
    const fn default_padding() -> u16 {
        64
    }
    const fn default_radius() -> u16 {
        32
    }
    fn default_watermark() -> String {
        "@yourhandle".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub visual: VisualConfig,
}

/// Colors after applying per-field overrides to the selected theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub bg1: String,
    pub bg2: String,
    pub fg: String,
    pub accent: String,
    pub gradient: bool,
}

/// Card geometry and typography after clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveVisual {
    pub ratio: &'static RatioPreset,
    pub font: &'static FontPreset,
    pub font_size: u16,
    pub line_height: f32,
    pub padding: u16,
    pub radius: u16,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
}

/// Config path lookup: working directory first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("poststudio").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_read_failed_using_defaults");
            return Ok(Config::default());
        }
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config {
            raw: Some(content),
            file,
        }),
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Compose defaults from the `[compose]` section. Unknown style or
    /// template names fall back to bold / blank.
    pub fn compose_options(&self) -> ComposeOptions {
        let c = &self.file.compose;
        let style = c.style.parse::<StyleKind>().unwrap_or_else(|e| {
            warn!(target: "config", error = %e, "compose_style_fallback");
            StyleKind::Bold
        });
        let template = c.template.parse::<Template>().unwrap_or_else(|e| {
            warn!(target: "config", error = %e, "compose_template_fallback");
            Template::Blank
        });
        ComposeOptions {
            template,
            auto_enrich: c.auto_enrich,
            prefix: c.prefix.clone(),
            suffix: c.suffix.clone(),
            hashtags: c.hashtags.clone(),
            style,
        }
    }

    /// Theme preset with any per-field overrides applied.
    pub fn theme(&self) -> ResolvedTheme {
        let v = &self.file.visual;
        let preset = ThemePreset::find(&v.theme);
        let pick = |o: &Option<String>, d: &str| o.clone().unwrap_or_else(|| d.to_string());
        ResolvedTheme {
            bg1: pick(&v.bg1, preset.bg1),
            bg2: pick(&v.bg2, preset.bg2),
            fg: pick(&v.fg, preset.fg),
            accent: pick(&v.accent, preset.accent),
            gradient: v.use_gradient.unwrap_or(preset.gradient),
        }
    }

    /// Visual settings clamped to the studio's slider ranges.
    pub fn visual(&self) -> EffectiveVisual {
        let v = &self.file.visual;
        let (fs_lo, fs_hi) = VisualConfig::FONT_SIZE_RANGE;
        let (lh_lo, lh_hi) = VisualConfig::LINE_HEIGHT_RANGE;
        let (pd_lo, pd_hi) = VisualConfig::PADDING_RANGE;
        let (rd_lo, rd_hi) = VisualConfig::RADIUS_RANGE;
        let font_size = clamp_logged("font_size", v.font_size, fs_lo, fs_hi);
        let padding = clamp_logged("padding", v.padding, pd_lo, pd_hi);
        let radius = clamp_logged("radius", v.radius, rd_lo, rd_hi);
        let line_height = if v.line_height.is_finite() {
            v.line_height.clamp(lh_lo, lh_hi)
        } else {
            VisualConfig::default_line_height()
        };
        if line_height != v.line_height {
            info!(target: "config", field = "line_height", raw = v.line_height, clamped = line_height, "visual_value_clamped");
        }
        EffectiveVisual {
            ratio: RatioPreset::find(&v.ratio),
            font: FontPreset::find(&v.font),
            font_size,
            line_height,
            padding,
            radius,
        }
    }

    /// Serialize the current settings for an external store.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(&self.file)?)
    }
}

fn clamp_logged(field: &'static str, raw: u16, lo: u16, hi: u16) -> u16 {
    let clamped = raw.clamp(lo, hi);
    if clamped != raw {
        info!(target: "config", field, raw, clamped, min = lo, max = hi, "visual_value_clamped");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl<'a> Write for LockedWriter<'a> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    fn load_str(content: &str) -> Config {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), content).unwrap();
        load_from(Some(tmp.path().to_path_buf())).unwrap()
    }

    #[test]
    fn default_config_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml"))).unwrap();
        assert!(cfg.raw.is_none());
        assert_eq!(cfg.file, ConfigFile::default());
        let opts = cfg.compose_options();
        assert_eq!(opts.style, StyleKind::Bold);
        assert!(opts.auto_enrich);
        assert_eq!(opts.template, Template::Blank);
    }

    #[test]
    fn parses_compose_section() {
        let cfg = load_str(
            "[compose]\nstyle = \"boldItalic\"\nauto_enrich = false\ntemplate = \"tip\"\nhashtags = \"rust ai\"\n",
        );
        let opts = cfg.compose_options();
        assert_eq!(opts.style, StyleKind::BoldItalic);
        assert!(!opts.auto_enrich);
        assert_eq!(opts.template, Template::Tip);
        assert_eq!(opts.hashtags, "rust ai");
        assert!(cfg.raw.is_some());
    }

    #[test]
    fn unknown_names_fall_back() {
        let cfg = load_str("[compose]\nstyle = \"fraktur\"\ntemplate = \"meme\"\n");
        let opts = cfg.compose_options();
        assert_eq!(opts.style, StyleKind::Bold);
        assert_eq!(opts.template, Template::Blank);
    }

    #[test]
    fn invalid_toml_uses_defaults() {
        let cfg = load_str("[compose\nstyle = ");
        assert!(cfg.raw.is_none());
        assert_eq!(cfg.file, ConfigFile::default());
    }

    #[test]
    fn unreadable_file_warns_and_uses_defaults() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), b"[compose]\nstyle = \"italic\xff\"\n").unwrap();
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();

        let cfg = with_default(subscriber, || load_from(Some(tmp.path().to_path_buf())).unwrap());

        assert!(cfg.raw.is_none());
        assert_eq!(cfg.file, ConfigFile::default());
        let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("WARN config:"));
        assert!(log_output.contains("config_read_failed_using_defaults"));
    }

    #[test]
    fn missing_file_is_silent() {
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .with_writer(writer)
            .finish();

        with_default(subscriber, || {
            load_from(Some(PathBuf::from("__nonexistent_quiet__.toml"))).unwrap()
        });

        assert!(buffer.lock().unwrap().is_empty());
    }

    #[test]
    fn unknown_fields_ignored() {
        let cfg = load_str("[visual]\nratio = \"1:1\"\nsparkles = true\n[extra]\nx = 1\n");
        assert_eq!(cfg.visual().ratio.key, "1:1");
    }

    #[test]
    fn theme_overrides_apply_per_field() {
        let cfg = load_str("[visual]\ntheme = \"Charcoal\"\naccent = \"#ff0000\"\nuse_gradient = true\n");
        let theme = cfg.theme();
        assert_eq!(theme.bg1, "#0b0f19");
        assert_eq!(theme.accent, "#ff0000");
        assert!(theme.gradient);
    }

    #[test]
    fn visual_values_clamped() {
        let cfg = load_str(
            "[visual]\nfont_size = 200\nline_height = 0.5\npadding = 8\nradius = 90\nalign = \"center\"\n",
        );
        let v = cfg.visual();
        assert_eq!(v.font_size, 96);
        assert_eq!(v.line_height, 1.0);
        assert_eq!(v.padding, 32);
        assert_eq!(v.radius, 64);
        assert_eq!(cfg.file.visual.align, Align::Center);
        assert_eq!(cfg.file.visual.font_size, 200);
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let cfg = load_str("[compose]\nprefix = \"🔥\"\n[visual]\nfg = \"#123456\"\nshow_safe = true\n");
        let written = cfg.to_toml().unwrap();
        let reparsed: ConfigFile = toml::from_str(&written).unwrap();
        assert_eq!(reparsed, cfg.file);
    }

    #[test]
    fn clamp_logging_uses_config_target() {
        let cfg = load_str("[visual]\nfont_size = 10\n");
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();

        let v = with_default(subscriber, || cfg.visual());

        let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("INFO config:"));
        assert!(log_output.contains("visual_value_clamped"));
        assert!(log_output.contains("font_size"));
        assert_eq!(v.font_size, 24);
    }
}
