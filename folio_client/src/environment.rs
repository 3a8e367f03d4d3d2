use std::env::consts::{ARCH, OS};

use folio_models::contact::BrowserInfo;
use folio_utils::folio_version;

/// Metadata about the environment a submission is sent from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientEnvironment {
    pub user_agent: Option<String>,
    pub platform: Option<String>,
    pub vendor: Option<String>,
    pub language: Option<String>,
}

impl ClientEnvironment {
    /// Describe the current process. The language is taken from the usual
    /// locale variables.
    pub fn detect() -> Self {
        Self::detect_with(|key| std::env::var(key).ok())
    }

    fn detect_with(env: impl Fn(&str) -> Option<String>) -> Self {
        let language = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .into_iter()
            .filter_map(&env)
            .find(|x| !x.is_empty())
            .and_then(|x| language_tag(&x));

        Self {
            user_agent: Some(format!("folio/{}", folio_version())),
            platform: Some(format!("{OS} {ARCH}")),
            vendor: None,
            language,
        }
    }
}

impl From<ClientEnvironment> for BrowserInfo {
    fn from(value: ClientEnvironment) -> Self {
        Self {
            user_agent: value.user_agent,
            platform: value.platform,
            vendor: value.vendor,
            language: value.language,
        }
    }
}

/// Turns a posix locale like `en_US.UTF-8` into a language tag (`en-US`).
fn language_tag(locale: &str) -> Option<String> {
    let locale = locale.split(['.', '@']).next().unwrap_or_default();
    if locale.is_empty() || locale == "C" || locale == "POSIX" {
        return None;
    }
    Some(locale.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tags() {
        assert_eq!(language_tag("en_US.UTF-8").as_deref(), Some("en-US"));
        assert_eq!(language_tag("tr_TR").as_deref(), Some("tr-TR"));
        assert_eq!(language_tag("de_DE@euro").as_deref(), Some("de-DE"));
        assert_eq!(language_tag("de").as_deref(), Some("de"));
        assert_eq!(language_tag("C.UTF-8"), None);
        assert_eq!(language_tag("POSIX"), None);
        assert_eq!(language_tag(""), None);
    }

    #[test]
    fn detect_prefers_lc_all() {
        let env = ClientEnvironment::detect_with(|key| match key {
            "LC_ALL" => Some("tr_TR.UTF-8".into()),
            "LANG" => Some("en_US.UTF-8".into()),
            _ => None,
        });
        assert_eq!(env.language.as_deref(), Some("tr-TR"));
        assert_eq!(env.platform, Some(format!("{OS} {ARCH}")));
        assert_eq!(env.vendor, None);
    }

    #[test]
    fn detect_skips_empty() {
        let env = ClientEnvironment::detect_with(|key| match key {
            "LC_ALL" => Some(String::new()),
            "LANG" => Some("en_GB.UTF-8".into()),
            _ => None,
        });
        assert_eq!(env.language.as_deref(), Some("en-GB"));
    }

    #[test]
    fn detect_without_locale() {
        let env = ClientEnvironment::detect_with(|_| None);
        assert_eq!(env.language, None);
        assert!(env.user_agent.is_some_and(|x| x.starts_with("folio/")));
    }
}
