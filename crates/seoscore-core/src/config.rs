//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! The following configuration file formats are supported:
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `seoscore.<ext>` in current directory or any parent
//! - `.seoscore.<ext>` in current directory or any parent
//! - `seo.<ext>` in current directory or any parent
//! - `.seo.<ext>` in current directory or any parent
//! - `~/.config/seoscore/config.<ext>` (user config)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use seoscore_core::config::{Config, ConfigLoader};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("title range: {:?}", config.scoring.title);
//! ```

use std::collections::BTreeSet;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default title length window, in characters.
pub const DEFAULT_TITLE_RANGE: OptimalRange = OptimalRange { min: 50, max: 60 };
/// Default description length window, in characters.
pub const DEFAULT_DESCRIPTION_RANGE: OptimalRange = OptimalRange { min: 120, max: 160 };
/// Default content length window, in words.
pub const DEFAULT_CONTENT_RANGE: OptimalRange = OptimalRange { min: 300, max: 2000 };

/// Topical terms checked in titles and descriptions when nothing is configured.
pub const DEFAULT_DOMAIN_KEYWORDS: &[&str] = &[
    "court",
    "judgment",
    "jurisprudence",
    "law",
    "legal",
    "legislation",
    "regulation",
];

/// Vowels counted by the syllable estimate when nothing is configured.
pub const DEFAULT_VOWELS: &str = "aeiouy";

/// Inclusive `[min, max]` window for a length measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct OptimalRange {
    /// Smallest length that does not count as too short.
    pub min: usize,
    /// Largest length that does not count as too long.
    pub max: usize,
}

/// Keyword density window, in percent of total words.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct DensityRange {
    /// Average density below this is too sparse.
    pub min: f64,
    /// Average density above this is keyword stuffing.
    pub max: f64,
}

impl Default for DensityRange {
    fn default() -> Self {
        Self { min: 0.5, max: 3.0 }
    }
}

/// Thresholds for the readability dimension.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct ReadabilityThresholds {
    /// Average sentence length (words) above which sentences are too long.
    pub max_words_per_sentence: f64,
    /// Average syllables per word above which vocabulary is too complex.
    pub max_syllables_per_word: f64,
    /// Lowest score labelled `Easy`.
    pub easy_min_score: u8,
    /// Lowest score labelled `Medium`.
    pub medium_min_score: u8,
}

impl Default for ReadabilityThresholds {
    fn default() -> Self {
        Self {
            max_words_per_sentence: 20.0,
            max_syllables_per_word: 2.5,
            easy_min_score: 80,
            medium_min_score: 60,
        }
    }
}

/// Which characters count as letters for the syllable estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LetterSet {
    /// Only `a`-`z` after lower-casing. Accented letters are dropped.
    #[default]
    Ascii,
    /// Any Unicode alphabetic character.
    Unicode,
}

/// Alphabet used by the naive syllable estimate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct SyllableAlphabet {
    /// Characters counted as vowels.
    pub vowels: String,
    /// Characters kept before counting.
    pub letters: LetterSet,
}

impl Default for SyllableAlphabet {
    fn default() -> Self {
        Self {
            vowels: DEFAULT_VOWELS.to_string(),
            letters: LetterSet::Ascii,
        }
    }
}

/// Literal markers that flag structure in marked-up content.
///
/// Matched case-insensitively anywhere in the content, on top of the
/// Markdown/HTML detection in [`crate::markup`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct MarkerConfig {
    /// Heading markers.
    pub heading: Vec<String>,
    /// Image-embed markers.
    pub image: Vec<String>,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            heading: ["<h1", "<h2", "<h3", "<h4", "<h5", "<h6"]
                .into_iter()
                .map(String::from)
                .collect(),
            image: vec!["<img".to_string()],
        }
    }
}

/// Score deductions and bonuses, one field per rule.
///
/// Values are magnitudes: deductions are subtracted and bonuses added, so
/// a negative value is rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Adjustments {
    /// Title shorter than its window.
    pub title_too_short: u32,
    /// Title longer than its window.
    pub title_too_long: u32,
    /// Title without a domain keyword.
    pub title_off_topic: u32,
    /// Title starting with a lower-case letter.
    pub title_lowercase: u32,
    /// Description shorter than its window.
    pub description_too_short: u32,
    /// Description longer than its window.
    pub description_too_long: u32,
    /// Description without a domain keyword.
    pub description_off_topic: u32,
    /// Content below the minimum word count.
    pub content_too_short: u32,
    /// Content above the maximum word count.
    pub content_too_long: u32,
    /// Bonus for heading markers.
    pub heading_bonus: u32,
    /// Deduction when no heading marker is present.
    pub heading_missing: u32,
    /// Bonus for image markers.
    pub image_bonus: u32,
    /// Average keyword density below the window.
    pub keywords_sparse: u32,
    /// Average keyword density above the window.
    pub keywords_dense: u32,
    /// Average sentence too long.
    pub long_sentences: u32,
    /// Average word too complex.
    pub complex_words: u32,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            title_too_short: 30,
            title_too_long: 20,
            title_off_topic: 15,
            title_lowercase: 10,
            description_too_short: 30,
            description_too_long: 20,
            description_off_topic: 15,
            content_too_short: 30,
            content_too_long: 10,
            heading_bonus: 10,
            heading_missing: 20,
            image_bonus: 5,
            keywords_sparse: 30,
            keywords_dense: 20,
            long_sentences: 20,
            complex_words: 15,
        }
    }
}

/// Tunable parameters of the scoring engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Title length window (characters).
    pub title: OptimalRange,
    /// Description length window (characters).
    pub description: OptimalRange,
    /// Content length window (words).
    pub content: OptimalRange,
    /// Topical terms; titles and descriptions should mention at least one.
    pub domain_keywords: BTreeSet<String>,
    /// Average keyword density window.
    pub keyword_density: DensityRange,
    /// Readability thresholds and level cut-offs.
    pub readability: ReadabilityThresholds,
    /// Alphabet for the syllable estimate.
    pub syllables: SyllableAlphabet,
    /// Extra structural markers.
    pub markers: MarkerConfig,
    /// Per-rule score adjustments.
    pub adjustments: Adjustments,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_RANGE,
            description: DEFAULT_DESCRIPTION_RANGE,
            content: DEFAULT_CONTENT_RANGE,
            domain_keywords: DEFAULT_DOMAIN_KEYWORDS
                .iter()
                .map(|k| (*k).to_string())
                .collect(),
            keyword_density: DensityRange::default(),
            readability: ReadabilityThresholds::default(),
            syllables: SyllableAlphabet::default(),
            markers: MarkerConfig::default(),
            adjustments: Adjustments::default(),
        }
    }
}

impl ScoringConfig {
    /// Replace the domain keyword set.
    pub fn with_domain_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Settings for the `http` command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Address to bind to (e.g., "0.0.0.0" or "127.0.0.1").
    pub bind_address: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl HttpConfig {
    /// Full bind address (`ip:port`).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// The configuration for seoscore.
///
/// This struct is deserialized from config files found during discovery
/// (TOML, YAML, or JSON).
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Applies to the CLI, the MCP server and the HTTP service. Omit to use
    /// the default. Use `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    #[serde(default)]
    pub disable_input_limit: bool,
    /// Minimum acceptable overall score for the `analyze` command.
    pub min_overall_score: Option<u8>,
    /// HTTP service settings.
    pub http: HttpConfig,
    /// Scoring engine parameters.
    pub scoring: ScoringConfig,
}

impl Config {
    /// Effective input limit: `None` when the limit is disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "seoscore";

/// Application names to search for config files (in precedence order, lowest first).
const APP_NAMES: &[&str] = &["seo", "seoscore"];

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/seoscore/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `SEOSCORE_*` environment variables (`__` separates nested keys)
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/seoscore/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // SEOSCORE_LOG_LEVEL=debug, SEOSCORE_SCORING__TITLE__MIN=40, etc.
        figment = figment.merge(Env::prefixed("SEOSCORE_").split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            domain_keywords = config.scoring.domain_keywords.len(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that has any
    /// match, ordered low-to-high precedence: `seo` names before `seoscore`
    /// names, dotfiles before regular files within each app name.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            for app_name in APP_NAMES {
                for ext in CONFIG_EXTENSIONS {
                    let dotfile = dir.join(format!(".{app_name}.{ext}"));
                    if dotfile.is_file() {
                        found.push(dotfile);
                    }
                }
                for ext in CONFIG_EXTENSIONS {
                    let regular = dir.join(format!("{app_name}.{ext}"));
                    if regular.is_file() {
                        found.push(regular);
                    }
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Boundary is checked after the config files so a config next
            // to the marker is still found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in XDG config directory.
    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let proj_dirs = project_dirs()?;
        let config_dir = proj_dirs.config_dir();

        for ext in CONFIG_EXTENSIONS {
            let config_path = config_dir.join(format!("config.{ext}"));
            if config_path.is_file() {
                return Utf8PathBuf::from_path_buf(config_path).ok();
            }
        }

        None
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the project directories for XDG-compliant path resolution.
///
/// Returns `None` if the home directory cannot be determined.
fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the user config directory path.
///
/// Returns `~/.config/seoscore/` on Linux, `~/Library/Application Support/seoscore/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

/// Get the local data directory path (machine-specific, not synced).
///
/// Default home of the JSONL log files.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.data_local_dir().to_path_buf()).ok()
}
