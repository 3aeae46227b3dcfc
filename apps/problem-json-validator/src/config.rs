//! Validator configuration.
//!
//! Layers, lowest precedence first: built-in defaults, an optional YAML file,
//! `PROBLEM_VALIDATOR_*` environment variables. CLI flags are applied on top by `main`.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::ValidatorError;

/// Environment variable prefix, e.g. `PROBLEM_VALIDATOR_REQUIRE_TYPE=true`.
pub const ENV_PREFIX: &str = "PROBLEM_VALIDATOR_";

/// Keys read from the environment; other `PROBLEM_VALIDATOR_*` variables are ignored.
const ENV_KEYS: &[&str] = &["max_file_size", "require_type", "require_title", "json"];

/// Default file size limit: 10 MB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Files larger than this many bytes are reported and not parsed.
    pub max_file_size: u64,
    /// Report problems that do not carry a `type` URI.
    pub require_type: bool,
    /// Report problems that do not carry a `title`.
    pub require_title: bool,
    /// Emit the report as JSON instead of human-readable text.
    pub json: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            require_type: false,
            require_title: false,
            json: false,
        }
    }
}

impl ValidatorConfig {
    /// Build the effective configuration from defaults, `file` and the environment.
    ///
    /// # Errors
    /// Returns [`ValidatorError::MissingConfig`] if `file` is given but absent, and
    /// [`ValidatorError::Config`] if a layer holds unknown keys or ill-typed values.
    pub fn load(file: Option<&Path>) -> Result<Self, ValidatorError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            if !path.is_file() {
                return Err(ValidatorError::MissingConfig(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS))
            .extract()
            .map_err(|e| ValidatorError::Config(Box::new(e)))
    }
}
