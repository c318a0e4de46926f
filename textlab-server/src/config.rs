use std::env::VarError;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use textlab_core::analysis::DEFAULT_MAX_INPUT_CHARS;

/// Environment variable prefix (ex. `TEXTLAB_PORT`).
const ENV_PREFIX: &str = "TEXTLAB_";

const ENV_HOST: &str = "HOST";
const ENV_PORT: &str = "PORT";
const ENV_WORKERS: &str = "WORKERS";
const ENV_MAX_INPUT_CHARS: &str = "MAX_INPUT_CHARS";
const ENV_MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
const ENV_TOKENIZER_PATH: &str = "TOKENIZER_PATH";

/// Unprefixed port variable set by most hosting platforms.
const ENV_PLATFORM_PORT: &str = "PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_BODY_BYTES: usize = 256 * 1024;

/// Errors produced when building or validating the server configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	#[error("config validation: {0}")]
	Validation(String),

	#[error("env var {key}: {message}")]
	EnvVar { key: String, message: String },

	#[error("env var {key}={value:?}: {message}")]
	Parse { key: String, value: String, message: String },
}

/// Process entry parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	/// Number of actix workers.
	pub workers: usize,
	/// Largest accepted text field, in chars.
	pub max_input_chars: usize,
	/// Largest accepted JSON body, in bytes.
	pub max_body_bytes: usize,
	/// Hugging Face `tokenizer.json` used by morphological analysis.
	pub tokenizer_path: Option<PathBuf>,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: DEFAULT_HOST.to_owned(),
			port: DEFAULT_PORT,
			workers: num_cpus::get(),
			max_input_chars: DEFAULT_MAX_INPUT_CHARS,
			max_body_bytes: DEFAULT_MAX_BODY_BYTES,
			tokenizer_path: None,
		}
	}
}

fn env_key(suffix: &str) -> String {
	format!("{ENV_PREFIX}{suffix}")
}

/// Reads `key` through `lookup`; `Ok(None)` if unset.
fn env_string<F>(lookup: &F, key: &str) -> Result<Option<String>, ConfigError>
where
	F: Fn(&str) -> Result<String, VarError>,
{
	match lookup(key) {
		Ok(s) => Ok(Some(s)),
		Err(VarError::NotPresent) => Ok(None),
		Err(e) => Err(ConfigError::EnvVar { key: key.to_owned(), message: e.to_string() }),
	}
}

/// Reads and parses `key` through `lookup`; `Ok(None)` if unset.
fn env_parsed<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
	F: Fn(&str) -> Result<String, VarError>,
	T: FromStr,
	T::Err: std::fmt::Display,
{
	let Some(value) = env_string(lookup, key)? else {
		return Ok(None);
	};
	match value.trim().parse() {
		Ok(t) => Ok(Some(t)),
		Err(e) => Err(ConfigError::Parse { key: key.to_owned(), value, message: e.to_string() }),
	}
}

impl ServerConfig {
	/// Builds the configuration from the process environment.
	///
	/// # Errors
	/// Returns [`ConfigError`] if a set variable cannot be read or parsed,
	/// or if the result fails [`validate`](ServerConfig::validate).
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key))
	}

	/// Builds the configuration from an arbitrary variable source,
	/// falling back to [`ServerConfig::default`] for unset values.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Result<String, VarError>,
	{
		let default = Self::default();

		let host = env_string(&lookup, &env_key(ENV_HOST))?.unwrap_or(default.host);
		let port = match env_parsed::<_, u16>(&lookup, &env_key(ENV_PORT))? {
			Some(port) => port,
			None => env_parsed(&lookup, ENV_PLATFORM_PORT)?.unwrap_or(default.port),
		};
		let workers = env_parsed(&lookup, &env_key(ENV_WORKERS))?.unwrap_or(default.workers);
		let max_input_chars =
			env_parsed(&lookup, &env_key(ENV_MAX_INPUT_CHARS))?.unwrap_or(default.max_input_chars);
		let max_body_bytes =
			env_parsed(&lookup, &env_key(ENV_MAX_BODY_BYTES))?.unwrap_or(default.max_body_bytes);
		let tokenizer_path = env_string(&lookup, &env_key(ENV_TOKENIZER_PATH))?
			.filter(|s| !s.trim().is_empty())
			.map(PathBuf::from);

		let config = Self { host, port, workers, max_input_chars, max_body_bytes, tokenizer_path };
		config.validate()?;
		Ok(config)
	}

	/// # Errors
	/// Returns [`ConfigError::Validation`] on an empty host or a zero limit.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.host.trim().is_empty() {
			return Err(ConfigError::Validation("host must not be empty".to_owned()));
		}
		if self.workers == 0 {
			return Err(ConfigError::Validation("workers must be greater than 0".to_owned()));
		}
		if self.max_input_chars == 0 {
			return Err(ConfigError::Validation("max_input_chars must be greater than 0".to_owned()));
		}
		if self.max_body_bytes == 0 {
			return Err(ConfigError::Validation("max_body_bytes must be greater than 0".to_owned()));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
		let map: HashMap<String, String> =
			vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		move |key: &str| map.get(key).cloned().ok_or(VarError::NotPresent)
	}

	#[test]
	fn defaults_when_nothing_is_set() {
		let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
		assert_eq!(config, ServerConfig::default());
		assert_eq!(config.port, 5000);
		assert!(config.tokenizer_path.is_none());
	}

	#[test]
	fn prefixed_variables_override_defaults() {
		let config = ServerConfig::from_lookup(lookup(&[
			("TEXTLAB_HOST", "127.0.0.1"),
			("TEXTLAB_PORT", "8080"),
			("TEXTLAB_WORKERS", "2"),
			("TEXTLAB_MAX_INPUT_CHARS", "500"),
			("TEXTLAB_TOKENIZER_PATH", "./data/tokenizer.json"),
		]))
		.unwrap();
		assert_eq!(config.host, "127.0.0.1");
		assert_eq!(config.port, 8080);
		assert_eq!(config.workers, 2);
		assert_eq!(config.max_input_chars, 500);
		assert_eq!(config.tokenizer_path, Some(PathBuf::from("./data/tokenizer.json")));
	}

	#[test]
	fn platform_port_is_a_fallback() {
		let config = ServerConfig::from_lookup(lookup(&[("PORT", "10000")])).unwrap();
		assert_eq!(config.port, 10000);

		let config =
			ServerConfig::from_lookup(lookup(&[("PORT", "10000"), ("TEXTLAB_PORT", "7000")])).unwrap();
		assert_eq!(config.port, 7000);
	}

	#[test]
	fn invalid_number_is_a_parse_error() {
		let err = ServerConfig::from_lookup(lookup(&[("TEXTLAB_PORT", "http")])).unwrap_err();
		assert!(matches!(err, ConfigError::Parse { ref key, .. } if key == "TEXTLAB_PORT"));
		assert!(err.to_string().contains("http"));
	}

	#[test]
	fn zero_limits_are_rejected() {
		let err = ServerConfig::from_lookup(lookup(&[("TEXTLAB_MAX_INPUT_CHARS", "0")])).unwrap_err();
		assert!(matches!(err, ConfigError::Validation(_)));
		let config = ServerConfig { workers: 0, ..ServerConfig::default() };
		assert!(config.validate().is_err());
	}

	#[test]
	fn blank_tokenizer_path_means_none() {
		let config = ServerConfig::from_lookup(lookup(&[("TEXTLAB_TOKENIZER_PATH", "  ")])).unwrap();
		assert!(config.tokenizer_path.is_none());
	}
}
