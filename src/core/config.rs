//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::motion::{Ease, Motion, Spring, Tween};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub images: ImagesConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AnimationConfig {
    pub spring_stiffness: Option<f64>,
    pub spring_damping: Option<f64>,
    pub spring_mass: Option<f64>,
    pub fade_ms: Option<u64>,
    pub reveal_delay_ms: Option<u64>,
    pub reveal_ms: Option<u64>,
    pub frame_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ImagesConfig {
    pub enabled: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub placeholder_base: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SPRING_STIFFNESS: f64 = 60.0;
pub const DEFAULT_SPRING_DAMPING: f64 = 18.0;
pub const DEFAULT_SPRING_MASS: f64 = 1.2;
pub const DEFAULT_FADE_MS: u64 = 400;
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 300;
pub const DEFAULT_REVEAL_MS: u64 = 1000;
pub const DEFAULT_SHADE_MS: u64 = 500;
pub const DEFAULT_FRAME_MS: u64 = 33;
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PLACEHOLDER_BASE: &str = "https://picsum.photos/seed";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub motion: Motion,
    pub frame_ms: u64,
    pub images_enabled: bool,
    pub image_timeout_secs: u64,
    pub placeholder_base: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&FolioConfig::default(), &CliOverrides::default())
    }
}

/// Values that came from CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub no_images: bool,
    pub frame_ms: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml` (or `explicit` when given).
///
/// A missing default file is generated and `FolioConfig::default()` returned.
/// A missing explicit file is an I/O error. A malformed file is
/// `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<FolioConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    load_from(&path)
}

fn load_from(path: &Path) -> Result<FolioConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Folio Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [animation]
# spring_stiffness = 60.0           # page-turn rotation spring
# spring_damping = 18.0
# spring_mass = 1.2
# fade_ms = 400                     # opacity track, independent of rotation
# reveal_delay_ms = 300             # content fade-in after a turn starts
# reveal_ms = 1000
# frame_ms = 33                     # redraw interval while animating

# [images]
# enabled = true                    # Or set FOLIO_IMAGES=0
# timeout_secs = 10
# placeholder_base = "https://picsum.photos/seed"
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

// ============================================================================
// Resolution
// ============================================================================

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparseable {}={:?}", key, raw);
            None
        }
    }
}

/// Accepts the usual spellings of a boolean switch.
fn env_flag(key: &str) -> Option<bool> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!("Ignoring unrecognized {}={:?}", key, raw);
            None
        }
    }
}

/// Spring parameters must be finite and positive or the motion goes NaN.
fn positive(key: &str, value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            warn!("Ignoring {} = {} (must be positive), using {}", key, v, default);
            default
        }
        None => default,
    }
}

fn secs(ms: u64) -> f64 {
    ms as f64 / 1000.0
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FolioConfig, cli: &CliOverrides) -> ResolvedConfig {
    let anim = &config.animation;

    let rotation = Spring::new(
        positive("spring_stiffness", anim.spring_stiffness, DEFAULT_SPRING_STIFFNESS),
        positive("spring_damping", anim.spring_damping, DEFAULT_SPRING_DAMPING),
        positive("spring_mass", anim.spring_mass, DEFAULT_SPRING_MASS),
    );
    let defaults = Motion::default();
    let motion = Motion {
        rotation,
        fade: Tween::new(0.0, secs(anim.fade_ms.unwrap_or(DEFAULT_FADE_MS)), defaults.fade.ease),
        reveal: Tween::new(
            secs(anim.reveal_delay_ms.unwrap_or(DEFAULT_REVEAL_DELAY_MS)),
            secs(anim.reveal_ms.unwrap_or(DEFAULT_REVEAL_MS)),
            Ease::OutCubic,
        ),
        shade: Tween::new(0.0, secs(DEFAULT_SHADE_MS), defaults.shade.ease),
    };

    // Frame interval: CLI → env → config → default
    let frame_ms = cli
        .frame_ms
        .or_else(|| env_parse("FOLIO_FRAME_MS"))
        .or(anim.frame_ms)
        .unwrap_or(DEFAULT_FRAME_MS)
        .max(1);

    // Images: --no-images wins, then env, then config
    let images_enabled = if cli.no_images {
        false
    } else {
        env_flag("FOLIO_IMAGES")
            .or(config.images.enabled)
            .unwrap_or(true)
    };

    let image_timeout_secs = env_parse("FOLIO_IMAGE_TIMEOUT_SECS")
        .or(config.images.timeout_secs)
        .unwrap_or(DEFAULT_IMAGE_TIMEOUT_SECS);

    let placeholder_base = std::env::var("FOLIO_PLACEHOLDER_BASE")
        .ok()
        .or_else(|| config.images.placeholder_base.clone())
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER_BASE.to_string());

    ResolvedConfig {
        motion,
        frame_ms,
        images_enabled,
        image_timeout_secs,
        placeholder_base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = FolioConfig::default();
        assert!(config.animation.spring_stiffness.is_none());
        assert!(config.images.enabled.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&FolioConfig::default(), &CliOverrides::default());
        assert_eq!(resolved.motion.rotation, Spring::default());
        assert!((resolved.motion.fade.duration - 0.4).abs() < 1e-9);
        assert!((resolved.motion.reveal.delay - 0.3).abs() < 1e-9);
        assert!((resolved.motion.reveal.duration - 1.0).abs() < 1e-9);
        assert_eq!(resolved.image_timeout_secs, DEFAULT_IMAGE_TIMEOUT_SECS);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FolioConfig {
            animation: AnimationConfig {
                spring_stiffness: Some(120.0),
                spring_damping: Some(10.0),
                spring_mass: Some(1.0),
                fade_ms: Some(200),
                reveal_delay_ms: Some(0),
                reveal_ms: Some(500),
                frame_ms: None,
            },
            images: ImagesConfig {
                enabled: None,
                timeout_secs: Some(3),
                placeholder_base: Some("http://localhost:9/seed".to_string()),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.motion.rotation, Spring::new(120.0, 10.0, 1.0));
        assert!((resolved.motion.fade.duration - 0.2).abs() < 1e-9);
        assert_eq!(resolved.motion.reveal.delay, 0.0);
        assert!((resolved.motion.reveal.duration - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_rejects_degenerate_spring() {
        let config = FolioConfig {
            animation: AnimationConfig {
                spring_stiffness: Some(-40.0),
                spring_damping: Some(f64::NAN),
                spring_mass: Some(0.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        let spring = resolved.motion.rotation;
        assert_eq!(spring.stiffness(), DEFAULT_SPRING_STIFFNESS);
        assert_eq!(spring.damping(), DEFAULT_SPRING_DAMPING);
        assert_eq!(spring.mass(), DEFAULT_SPRING_MASS);
        assert!(spring.progress(0.2).is_finite());
        assert!(resolved.motion.total_duration().is_finite());
    }

    #[test]
    fn test_resolve_keeps_valid_spring_fields_beside_bad_ones() {
        let config = FolioConfig {
            animation: AnimationConfig {
                spring_stiffness: Some(90.0),
                spring_mass: Some(-1.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let spring = resolve(&config, &CliOverrides::default()).motion.rotation;
        assert_eq!(spring, Spring::new(90.0, DEFAULT_SPRING_DAMPING, DEFAULT_SPRING_MASS));
    }

    #[test]
    fn test_resolve_cli_no_images_wins() {
        let config = FolioConfig {
            images: ImagesConfig {
                enabled: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            no_images: true,
            frame_ms: Some(16),
        };
        let resolved = resolve(&config, &cli);
        assert!(!resolved.images_enabled);
        assert_eq!(resolved.frame_ms, 16);
    }

    #[test]
    fn test_frame_ms_never_zero() {
        let cli = CliOverrides {
            no_images: false,
            frame_ms: Some(0),
        };
        assert_eq!(resolve(&FolioConfig::default(), &cli).frame_ms, 1);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[animation]
spring_stiffness = 80.0
fade_ms = 250
frame_ms = 20

[images]
enabled = false
timeout_secs = 4
placeholder_base = "http://127.0.0.1:8080/seed"
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.animation.spring_stiffness, Some(80.0));
        assert_eq!(config.animation.fade_ms, Some(250));
        assert_eq!(config.animation.frame_ms, Some(20));
        assert_eq!(config.images.enabled, Some(false));
        assert_eq!(config.images.timeout_secs, Some(4));
        assert_eq!(
            config.images.placeholder_base.as_deref(),
            Some("http://127.0.0.1:8080/seed")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[images]
timeout_secs = 2
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.images.timeout_secs, Some(2));
        assert!(config.images.enabled.is_none());
        assert!(config.animation.fade_ms.is_none());
    }

    #[test]
    fn test_malformed_explicit_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("folio-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        fs::write(&path, "[animation\nfade_ms = ").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let path = std::env::temp_dir().join("folio-definitely-missing.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("config I/O error"));
    }
}
