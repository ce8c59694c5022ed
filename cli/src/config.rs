//! Lookup configuration.
//!
//! Flags and environment variables (handled by clap) override the TOML
//! file at `~/.config/barcode-lookup/config.toml`, which overrides the
//! built-in defaults. A missing default file is fine; a missing file passed
//! with `--config` is not.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use eyre::{eyre, Result, WrapErr};
use log::{debug, trace};
use lookup_core::{LookupRequest, DEFAULT_ENDPOINT};
use serde::Deserialize;

/// Barcode looked up when none is configured.
pub const DEFAULT_BARCODE: &str = "8901548143629";

/// Outbound call timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Contents of the config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub barcode: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load `explicit` if given, else the default path if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::read(path);
        }
        match Self::path() {
            Some(path) if path.exists() => Self::read(&path),
            Some(path) => {
                trace!("no config file at {}", path.display());
                Ok(Self::default())
            }
            None => {
                trace!("could not determine config directory");
                Ok(Self::default())
            }
        }
    }

    /// The default config file path: `<config dir>/barcode-lookup/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("barcode-lookup").join("config.toml"))
    }

    fn read(path: &Path) -> Result<Self> {
        debug!("reading config from {}", path.display());
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).wrap_err_with(|| format!("invalid config at {}", path.display()))
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub barcode: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub request: LookupRequest,
    pub timeout: Duration,
}

impl Settings {
    /// Layer `overrides` over `file` over the defaults.
    ///
    /// Fails when no API key is configured anywhere, or when the timeout
    /// is zero.
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Self> {
        let api_key = overrides
            .api_key
            .or(file.api_key)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                eyre!(
                    "no API key configured\n\
                     Pass --api-key, set BARCODE_LOOKUP_API_KEY, or add\n\n\
                     api-key = \"your-key\"\n\n\
                     to the config file"
                )
            })?;
        let barcode = overrides
            .barcode
            .or(file.barcode)
            .unwrap_or_else(|| DEFAULT_BARCODE.to_string());
        let endpoint = overrides
            .endpoint
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let timeout = match overrides.timeout_secs.or(file.timeout_secs) {
            Some(0) => return Err(eyre!("timeout-secs must be at least 1")),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            request: LookupRequest::with_endpoint(&barcode, &api_key, &endpoint),
            timeout,
        })
    }
}
