//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.moji/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::search::remote::DEFAULT_API_URL;
use crate::search::skin_tone::{MAX_SKIN_TONE, SKIN_TONE_NAMES};

// ============================================================================
// Config Struct (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MojiConfig {
    /// Preferred skin tone, 0 (none) through 5 (darkest).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_tone: Option<u8>,
    /// How many emojis a search shows, 1 through 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Semantic search endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SKIN_TONE: u8 = 0;
pub const DEFAULT_LIMIT: usize = 7;
pub const MAX_LIMIT: usize = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub skin_tone: u8,
    pub limit: usize,
    pub api_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.moji/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".moji").join("config.toml"))
}

/// Load config from `~/.moji/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MojiConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MojiConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MojiConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MojiConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MojiConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# moji Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# skin_tone = 0    # 0 (none) through 5 (darkest); also set by --skin-tone
# limit = 7        # emojis shown per search, 1 through 10
# api_url = "https://emoji.getdango.com"    # Or set MOJI_API_URL env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

/// Persists `tone` as the new default skin tone, keeping any other settings
/// already in the file.
pub fn save_skin_tone(tone: u8) -> Result<(), ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, skin tone not persisted");
        return Ok(());
    };

    let mut config = if path.exists() {
        let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
        toml::from_str(&contents).map_err(ConfigError::Parse)?
    } else {
        MojiConfig::default()
    };
    let tone = tone.min(MAX_SKIN_TONE);
    config.skin_tone = Some(tone);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::Io)?;
    }
    let rendered = toml::to_string(&config).map_err(ConfigError::Serialize)?;
    fs::write(&path, rendered).map_err(ConfigError::Io)?;
    info!(
        "Persisted skin tone {} ({}) to {}",
        tone,
        SKIN_TONE_NAMES[usize::from(tone)],
        path.display()
    );
    Ok(())
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars
/// → CLI. Out-of-range values are clamped rather than rejected.
pub fn resolve(
    config: &MojiConfig,
    cli_skin_tone: Option<u8>,
    cli_limit: Option<usize>,
) -> ResolvedConfig {
    // Skin tone: CLI → config → default
    let skin_tone = cli_skin_tone
        .or(config.skin_tone)
        .unwrap_or(DEFAULT_SKIN_TONE)
        .min(MAX_SKIN_TONE);

    // Limit: CLI → config → default
    let limit = cli_limit
        .or(config.limit)
        .unwrap_or(DEFAULT_LIMIT)
        .clamp(1, MAX_LIMIT);

    // API URL: env → config → default
    let api_url = std::env::var("MOJI_API_URL")
        .ok()
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    ResolvedConfig {
        skin_tone,
        limit,
        api_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = MojiConfig::default();
        assert!(config.skin_tone.is_none());
        assert!(config.limit.is_none());
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&MojiConfig::default(), None, None);
        assert_eq!(resolved.skin_tone, DEFAULT_SKIN_TONE);
        assert_eq!(resolved.limit, DEFAULT_LIMIT);
        assert_eq!(resolved.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MojiConfig {
            skin_tone: Some(3),
            limit: Some(5),
            api_url: Some("https://example.com".to_string()),
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.skin_tone, 3);
        assert_eq!(resolved.limit, 5);
        assert_eq!(resolved.api_url, "https://example.com");
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = MojiConfig {
            skin_tone: Some(3),
            limit: Some(5),
            api_url: None,
        };
        let resolved = resolve(&config, Some(1), Some(9));
        assert_eq!(resolved.skin_tone, 1);
        assert_eq!(resolved.limit, 9);
    }

    #[test]
    fn test_resolve_clamps_out_of_range_values() {
        let resolved = resolve(&MojiConfig::default(), Some(42), Some(0));
        assert_eq!(resolved.skin_tone, MAX_SKIN_TONE);
        assert_eq!(resolved.limit, 1);

        let resolved = resolve(&MojiConfig::default(), None, Some(500));
        assert_eq!(resolved.limit, MAX_LIMIT);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let config: MojiConfig = toml::from_str("limit = 3\n").unwrap();
        assert_eq!(config.limit, Some(3));
        assert!(config.skin_tone.is_none());
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
skin_tone = 4
limit = 10
api_url = "http://localhost:9000"
"#;
        let config: MojiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.skin_tone, Some(4));
        assert_eq!(config.limit, Some(10));
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_unknown_keys_are_rejected_gracefully() {
        // toml deserialization ignores unknown keys by default, so an old
        // or hand-edited file with extras still loads.
        let config: MojiConfig = toml::from_str("limit = 2\nfavourite = \"🦄\"\n").unwrap();
        assert_eq!(config.limit, Some(2));
    }

    #[test]
    fn test_sparse_config_serializes_without_nones() {
        let config = MojiConfig {
            skin_tone: Some(2),
            limit: None,
            api_url: None,
        };
        let rendered = toml::to_string(&config).unwrap();
        assert_eq!(rendered.trim(), "skin_tone = 2");
    }
}
