use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use folio_core_contact_contracts::ContactFeatureService;
use folio_di::Build;
use folio_templates_contracts::{SocialLink, TemplateService};
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod extractors;
mod middlewares;
mod models;
mod routes;
#[cfg(test)]
mod tests;

pub use folio_models::contact::CONTACT_ENDPOINT;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Contact, Template> {
    config: RestServerConfig,
    contact: Contact,
    template: Template,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
    pub site: Arc<RestServerSiteConfig>,
}

/// Content of the static pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestServerSiteConfig {
    pub owner: String,
    pub title: String,
    pub description: String,
    pub open_to_work: bool,
    pub bio: Vec<String>,
    pub about: Vec<String>,
    pub links: Vec<SocialLink>,
}

impl<Contact, Template> RestServer<Contact, Template>
where
    Contact: ContactFeatureService,
    Template: TemplateService,
{
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.config.addr;
        let router = self.router();

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind to {addr}"))?;
        info!("Listening on {addr}");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Failed to run HTTP server")?;

        info!("Server shut down");
        Ok(())
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::assets::router())
            .merge(routes::pages::router(
                self.template.into(),
                Arc::clone(&self.config.site),
            ));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::client_address::add(router);
        middlewares::request_id::add(router)
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                tracing::error!("Failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
