//! Settings file for the `ashtaka` tools.
//!
//! Every field is optional; an empty file yields the defaults.
//!
//! ```toml
//! ephemeris = "data/ephemeris.json"
//!
//! [gochara]
//! house_weight = 0.6
//! dignity_weight = 0.4
//! retrograde_factor = 0.9
//!
//! [scan]
//! top_n = 10
//! strong_sav_threshold = 30
//! weak_sav_threshold = 22
//! strong_sav_bonus = 5.0
//! weak_sav_penalty = 3.0
//! ```

use std::path::{Path, PathBuf};

use ashtaka_base::GocharaConfig;
use ashtaka_search::ScanConfig;
use serde::{Deserialize, Serialize};

/// Errors from loading or validating settings.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default ephemeris table. Relative paths resolve against the
    /// settings file's directory.
    pub ephemeris: Option<PathBuf>,
    pub gochara: GocharaConfig,
    pub scan: ScanConfig,
}

impl Settings {
    /// Parse and validate settings text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse, and validate a settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings = Self::from_toml_str(&raw)?;
        if let (Some(eph), Some(dir)) = (settings.ephemeris.as_ref(), path.parent()) {
            if eph.is_relative() {
                settings.ephemeris = Some(dir.join(eph));
            }
        }
        log::debug!("settings loaded from {}", path.display());
        Ok(settings)
    }

    /// `load` when a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.gochara;
        for w in [g.house_weight, g.dignity_weight] {
            if !w.is_finite() || w < 0.0 {
                return Err(ConfigError::Invalid(
                    "gochara weights must be finite and non-negative",
                ));
            }
        }
        if !(g.retrograde_factor > 0.0 && g.retrograde_factor <= 1.0) {
            return Err(ConfigError::Invalid(
                "gochara.retrograde_factor must be in (0, 1]",
            ));
        }

        let s = &self.scan;
        if s.top_n == 0 {
            return Err(ConfigError::Invalid("scan.top_n must be at least 1"));
        }
        if s.weak_sav_threshold > s.strong_sav_threshold {
            return Err(ConfigError::Invalid(
                "scan.weak_sav_threshold exceeds scan.strong_sav_threshold",
            ));
        }
        for v in [s.strong_sav_bonus, s.weak_sav_penalty] {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::Invalid(
                    "scan bonus and penalty must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}
