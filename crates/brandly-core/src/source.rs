// ── Brand data source ──
//
// `BrandSource` is the seam between controllers and the network. The
// production implementation is `Catalog`; tests substitute in-memory fakes.

use std::sync::Arc;

use async_trait::async_trait;
use brandly_api::BrandClient;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::model::{Brand, BrandId, IdPolicy};

/// Read-only access to the brand catalogue.
#[async_trait]
pub trait BrandSource: Send + Sync {
    /// Every brand, in server order.
    async fn list_brands(&self) -> Result<Vec<Brand>, FetchError>;

    /// A single brand. The returned record always carries `id` (or its
    /// canonical form under the active [`IdPolicy`]).
    async fn get_brand(&self, id: &BrandId) -> Result<Brand, FetchError>;
}

#[async_trait]
impl<S: BrandSource + ?Sized> BrandSource for Arc<S> {
    async fn list_brands(&self) -> Result<Vec<Brand>, FetchError> {
        (**self).list_brands().await
    }

    async fn get_brand(&self, id: &BrandId) -> Result<Brand, FetchError> {
        (**self).get_brand(id).await
    }
}

/// HTTP-backed [`BrandSource`].
#[derive(Debug, Clone)]
pub struct Catalog {
    client: BrandClient,
    id_policy: IdPolicy,
}

impl Catalog {
    /// Build an HTTP client from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let client = BrandClient::new(config.base_url.as_str(), &config.transport())?;
        Ok(Self::from_client(client, config.id_policy))
    }

    pub fn from_client(client: BrandClient, id_policy: IdPolicy) -> Self {
        Self { client, id_policy }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }
}

#[async_trait]
impl BrandSource for Catalog {
    async fn list_brands(&self) -> Result<Vec<Brand>, FetchError> {
        let brands = self.client.list_brands().await?;
        debug!(count = brands.len(), "brand list fetched");
        Ok(brands.into_iter().map(Brand::from).collect())
    }

    async fn get_brand(&self, id: &BrandId) -> Result<Brand, FetchError> {
        let segment = self.id_policy.path_segment(id)?;
        let brand = self.client.get_brand(&segment).await?;
        Ok(Brand::from(brand))
    }
}
