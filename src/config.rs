use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub completion: CompletionSettings,
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Text completion API used for the narrative recommendations
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionSettings {
    #[serde(default = "default_completion_endpoint")]
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Unset means the HTTP client's own default
    pub timeout_secs: Option<u64>,
}

fn default_completion_endpoint() -> String { "https://api.together.xyz/inference".to_string() }
fn default_model() -> String { "togethercomputer/llama-2-70b-chat".to_string() }
fn default_max_tokens() -> u32 { 800 }
fn default_temperature() -> f32 { 0.7 }

/// Web search API used for the additional results
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_country")]
    pub country: String,
    pub timeout_secs: Option<u64>,
}

fn default_search_endpoint() -> String { "https://google.serper.dev/search".to_string() }
fn default_country() -> String { "gt".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SCHOOL_FINDER__)
    /// 5. TOGETHER_API_KEY / SERPER_API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SCHOOL_FINDER__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SCHOOL_FINDER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_credential_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path (`SCHOOL_FINDER_CONFIG`)
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SCHOOL_FINDER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_credential_overrides(settings)?.try_deserialize()
    }
}

/// The two API keys may also come from their conventional variable names
fn apply_credential_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(key) = env::var("TOGETHER_API_KEY") {
        builder = builder.set_override("completion.api_key", key)?;
    }
    if let Ok(key) = env::var("SERPER_API_KEY") {
        builder = builder.set_override("search.api_key", key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_defaults_fill_everything_but_keys() {
        let settings = from_toml(
            r#"
            [completion]
            api_key = "together"

            [search]
            api_key = "serper"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.completion.endpoint, "https://api.together.xyz/inference");
        assert_eq!(settings.completion.model, "togethercomputer/llama-2-70b-chat");
        assert_eq!(settings.completion.max_tokens, 800);
        assert!((settings.completion.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(settings.completion.timeout_secs, None);
        assert_eq!(settings.search.endpoint, "https://google.serper.dev/search");
        assert_eq!(settings.search.country, "gt");
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_missing_api_key_fails() {
        let result = from_toml(
            r#"
            [completion]
            model = "x"

            [search]
            api_key = "serper"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("school-finder-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"
            [server]
            port = 9090

            [completion]
            api_key = "together"
            max_tokens = 700

            [search]
            api_key = "serper"
            country = "sv"
            "#,
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();

        let settings = settings.unwrap();
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.completion.max_tokens, 700);
        assert_eq!(settings.search.country, "sv");
        assert_eq!(settings.search.endpoint, "https://google.serper.dev/search");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let path = std::env::temp_dir().join(format!("school-finder-{}.toml", uuid::Uuid::new_v4()));
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_shorter_completion_budget() {
        let settings = from_toml(
            r#"
            [completion]
            api_key = "together"
            max_tokens = 500

            [search]
            api_key = "serper"
            "#,
        )
        .unwrap();
        assert_eq!(settings.completion.max_tokens, 500);
    }
}
