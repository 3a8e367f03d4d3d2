use std::sync::Arc;

use anyhow::ensure;
use folio_api_rest::{RestServerConfig, RestServerSiteConfig};
use folio_config::{Config, SiteLinksConfig, BOT_TOKEN_ENV, CHAT_ID_ENV};
use folio_core_contact_impl::{ContactFeatureConfig, ContactRelayCredentials};
use folio_di::provider;
use folio_extern_impl::telegram::TelegramApiServiceConfig;
use folio_templates_contracts::SocialLink;
use tracing::warn;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        // API
        rest_server_config: RestServerConfig,

        // Extern
        telegram_api_service_config: TelegramApiServiceConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
    }
}

impl Provider {
    /// Fails if the telegram credentials are required but missing.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let site = &config.site;
        let rest_server_config = RestServerConfig {
            addr: config.http.address,
            site: Arc::new(RestServerSiteConfig {
                owner: site.owner.clone(),
                title: site.title.clone(),
                description: site.description.clone(),
                open_to_work: site.open_to_work,
                bio: site.bio.clone(),
                about: site.about.clone(),
                links: social_links(&site.links),
            }),
        };

        // Extern
        let telegram_api_service_config =
            TelegramApiServiceConfig::new(config.telegram.api_endpoint_override.clone());

        // Core
        let credentials = config.telegram.credentials();
        if credentials.is_none() {
            ensure!(
                !config.telegram.require_credentials,
                "Telegram credentials are missing. Set {BOT_TOKEN_ENV} and {CHAT_ID_ENV} or \
                 disable telegram.require_credentials."
            );
            warn!("Telegram credentials are missing, contact submissions will be refused");
        }
        let contact_feature_config = ContactFeatureConfig {
            credentials: credentials.map(|credentials| {
                Arc::new(ContactRelayCredentials {
                    bot_token: credentials.bot_token,
                    chat_id: credentials.chat_id,
                })
            }),
        };

        Ok(Self {
            _cache: Default::default(),
            rest_server_config,
            telegram_api_service_config,
            contact_feature_config,
        })
    }
}

fn social_links(links: &SiteLinksConfig) -> Vec<SocialLink> {
    let x = links.x.as_ref().map(|url| ("x", url.to_string()));
    let github = links.github.as_ref().map(|url| ("github", url.to_string()));
    let email = links
        .email
        .as_ref()
        .map(|email| ("mail", format!("mailto:{email}")));

    [x, github, email]
        .into_iter()
        .flatten()
        .map(|(label, href)| SocialLink {
            label: label.into(),
            href,
        })
        .collect()
}
