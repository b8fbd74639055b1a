//! CLI runtime configuration.
//!
//! Configuration is resolved once at startup and passed into the commands, so that nothing reads
//! process-wide environment variables while a command runs.

use kyuuid_uuid::{UuidFormat, UuidResult};

/// Environment variable naming the default output format for `generate`.
pub const DEFAULT_FORMAT_ENV: &str = "KYUUID_DEFAULT_FORMAT";

/// Output format for `generate` when neither `--format` nor the environment chooses one.
pub const BUILTIN_DEFAULT_FORMAT: UuidFormat = UuidFormat::TruncatedBase64;

/// CLI configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    default_format: UuidFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::new(BUILTIN_DEFAULT_FORMAT)
    }
}

impl CliConfig {
    pub fn new(default_format: UuidFormat) -> Self {
        Self { default_format }
    }

    /// Reads [`DEFAULT_FORMAT_ENV`] from the process environment.
    pub fn from_env() -> UuidResult<Self> {
        Self::from_env_value(std::env::var(DEFAULT_FORMAT_ENV).ok())
    }

    /// Builds the configuration from an optional environment value.
    ///
    /// If `value` is `None` or empty/whitespace, the built-in default format is used.
    pub fn from_env_value(value: Option<String>) -> UuidResult<Self> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let parsed = value.map(|v| v.parse::<UuidFormat>()).transpose()?;

        Ok(Self::new(parsed.unwrap_or(BUILTIN_DEFAULT_FORMAT)))
    }

    pub fn default_format(&self) -> UuidFormat {
        self.default_format
    }
}
