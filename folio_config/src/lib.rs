use std::{net::SocketAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::Sensitive;
use serde::Deserialize;
use url::Url;

/// The bundled default configuration.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Colon separated list of additional config files.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

/// Load the configuration from the bundled defaults, the files listed in
/// `FOLIO_CONFIG` and the telegram credential environment variables.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var(CONFIG_PATH_ENV).unwrap_or_default();
    let paths = paths
        .split(':')
        .filter(|path| !path.is_empty())
        .collect::<Vec<_>>();
    load_with_env(&paths, &[], |key| std::env::var(key).ok())
}

/// Load the configuration from the bundled defaults, the given files and
/// additional TOML snippets. Environment variables are ignored.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    load_with_env(paths, overrides, |_| None)
}

fn load_with_env(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Config> {
    let builder = config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })?;

    let builder = overrides.iter().fold(builder, |builder, &snippet| {
        builder.add_source(File::from_str(snippet, FileFormat::Toml))
    });

    let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    builder
        .set_override_option("telegram.bot_token", non_empty(BOT_TOKEN_ENV))?
        .set_override_option("telegram.chat_id", non_empty(CHAT_ID_ENV))?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub telegram: TelegramConfig,
    pub site: SiteConfig,
    pub sentry: Option<SentryConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
}

#[derive(Debug, Deserialize)]
pub struct TelegramConfig {
    pub require_credentials: bool,
    pub api_endpoint_override: Option<Url>,
    pub bot_token: Option<Sensitive<String>>,
    pub chat_id: Option<String>,
}

/// Both secrets needed to relay a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramCredentials {
    pub bot_token: Sensitive<String>,
    pub chat_id: String,
}

impl TelegramConfig {
    /// Returns the credentials if both are present and non-empty.
    pub fn credentials(&self) -> Option<TelegramCredentials> {
        let bot_token = self.bot_token.as_ref().filter(|x| !x.trim().is_empty())?;
        let chat_id = self.chat_id.as_ref().filter(|x| !x.trim().is_empty())?;
        Some(TelegramCredentials {
            bot_token: bot_token.clone(),
            chat_id: chat_id.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    pub owner: String,
    pub title: String,
    pub description: String,
    pub open_to_work: bool,
    pub bio: Vec<String>,
    #[serde(default)]
    pub about: Vec<String>,
    pub links: SiteLinksConfig,
}

#[derive(Debug, Deserialize)]
pub struct SiteLinksConfig {
    pub x: Option<Url>,
    pub github: Option<Url>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SentryConfig {
    pub dsn: Url,
}

#[cfg(test)]
mod tests {
    use folio_utils::assert_matches;

    use super::*;

    const NO_PATHS: &[&str] = &[];

    #[test]
    fn load_default_config() {
        let config = load_with_override(NO_PATHS, &[]).unwrap();
        assert!(config.telegram.require_credentials);
        assert_eq!(config.telegram.credentials(), None);
        assert!(config.sentry.is_none());
    }

    #[test]
    fn override_snippet() {
        let config = load_with_override(
            NO_PATHS,
            &["[telegram]\nbot_token = \"token\"\nchat_id = \"42\"\nrequire_credentials = false"],
        )
        .unwrap();
        assert!(!config.telegram.require_credentials);
        assert_eq!(
            config.telegram.credentials(),
            Some(TelegramCredentials {
                bot_token: "token".to_owned().into(),
                chat_id: "42".into(),
            })
        );
    }

    #[test]
    fn credentials_from_env() {
        let config = load_with_env(NO_PATHS, &[], |key| match key {
            BOT_TOKEN_ENV => Some("123456:ABC".into()),
            CHAT_ID_ENV => Some("4242".into()),
            _ => None,
        })
        .unwrap();
        let credentials = config.telegram.credentials().unwrap();
        assert_eq!(*credentials.bot_token, "123456:ABC");
        assert_eq!(credentials.chat_id, "4242");
    }

    #[test]
    fn one_credential_missing() {
        let config = load_with_env(NO_PATHS, &[], |key| {
            (key == BOT_TOKEN_ENV).then(|| "123456:ABC".into())
        })
        .unwrap();
        assert_eq!(config.telegram.credentials(), None);
    }

    #[test]
    fn empty_env_counts_as_absent() {
        let config = load_with_env(
            NO_PATHS,
            &["[telegram]\nbot_token = \"from-file\"\nchat_id = \"42\""],
            |key| (key == BOT_TOKEN_ENV).then(String::new),
        )
        .unwrap();
        let credentials = config.telegram.credentials().unwrap();
        assert_eq!(*credentials.bot_token, "from-file");
    }

    #[test]
    fn missing_file() {
        let result = load_with_override(&["/nonexistent/folio.toml"], &[]);
        assert_matches!(result, Err(_));
    }
}
