use folio_config::Config;
use folio_di::Provide;
use tracing::info;

use crate::environment::{types::RestServer, Provider};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let mut provider = Provider::new(&config)?;
    let server: RestServer = provider.provide();
    info!("Starting http server on {}", config.http.address);
    server.serve().await
}
