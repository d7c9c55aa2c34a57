// Brand endpoints
//
// Two read-only routes: the full collection and a single record by id.

use tracing::debug;

use crate::client::BrandClient;
use crate::error::Error;
use crate::types::BrandResponse;

impl BrandClient {
    /// List every brand in server order.
    ///
    /// `GET {base}/brands`
    pub async fn list_brands(&self) -> Result<Vec<BrandResponse>, Error> {
        let url = self.url(&["brands"])?;
        debug!("listing brands");
        self.get(url).await
    }

    /// Fetch one brand by its path segment.
    ///
    /// `GET {base}/brands/{id}`. The record must carry the requested id;
    /// anything else is reported as [`Error::IdMismatch`].
    pub async fn get_brand(&self, id: &str) -> Result<BrandResponse, Error> {
        let url = self.url(&["brands", id])?;
        debug!(id, "fetching brand");
        let brand: BrandResponse = self.get(url).await?;
        if brand.id != id {
            return Err(Error::IdMismatch {
                requested: id.to_owned(),
                returned: brand.id,
            });
        }
        Ok(brand)
    }
}
