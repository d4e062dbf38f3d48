use std::sync::mpsc::Sender;
use std::time::Duration;

use reqwest::Client;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::catalog::error::FetchError;
use crate::catalog::product::Catalog;
use crate::ui::events::AppEvent;
use crate::ui::lifetime::ScreenLifetime;

/// Reads the product list from the remote catalog endpoint.
#[derive(Debug, Clone)]
pub struct CatalogFetcher {
    client: Client,
    endpoint: String,
}

impl CatalogFetcher {
    /// Build a fetcher for `endpoint`.
    ///
    /// `request_timeout` of `None` waits for the response indefinitely.
    pub fn new(endpoint: impl Into<String>, request_timeout: Option<Duration>) -> Result<Self, FetchError> {
        let endpoint = endpoint.into();
        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::failure(&endpoint, e))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Shared HTTP client, reused for image downloads.
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// One `GET` with no headers, query or body.
    ///
    /// Either the whole list decodes or the call fails; partial data is
    /// never returned.
    pub async fn fetch(&self) -> Result<Catalog, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::failure(&self.endpoint, e))?;

        let response = response
            .error_for_status()
            .map_err(|e| FetchError::failure(&self.endpoint, e))?;

        response
            .json::<Catalog>()
            .await
            .map_err(|e| FetchError::failure(&self.endpoint, e))
    }
}

/// Run the mount-time fetch on `runtime`.
///
/// On success the catalog is delivered as [`AppEvent::CatalogFetched`], but
/// only while `lifetime` is still mounted. Failures are logged and dropped;
/// nothing is retried.
pub fn spawn_catalog_fetch(
    runtime: &Handle,
    fetcher: CatalogFetcher,
    events: Sender<AppEvent>,
    lifetime: ScreenLifetime,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        tracing::debug!(endpoint = fetcher.endpoint(), "Fetching catalog");
        match fetcher.fetch().await {
            Ok(products) => {
                if !lifetime.is_mounted() {
                    tracing::debug!("Catalog arrived after unmount, discarding");
                    return;
                }
                tracing::info!(count = products.len(), "Catalog fetched");
                if events.send(AppEvent::CatalogFetched(products)).is_err() {
                    tracing::trace!("Catalog dropped (event loop gone)");
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching products");
            }
        }
    })
}
