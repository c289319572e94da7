use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::CatalogConfig;
use crate::model::product::Product;
use crate::repository::catalog_error::CatalogError;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Load the full product list. The file is re-read on every call so
    /// catalog edits show up on the next page refresh without a restart.
    async fn load_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Linear scan for one product. A missing id is `Ok(None)`, never an
    /// error; callers decide whether to redirect or show an error page.
    async fn get_product_by_id(&self, product_id: &str) -> Result<Option<Product>, CatalogError>;
}

/// Catalog backed by a JSON array file on disk. Read-only; the file is
/// edited out of band.
pub struct JsonProductRepository {
    config: CatalogConfig,
}

impl JsonProductRepository {
    pub fn new(config: CatalogConfig) -> Self {
        JsonProductRepository { config }
    }
}

#[async_trait]
impl ProductRepository for JsonProductRepository {
    #[instrument(skip(self))]
    async fn load_products(&self) -> Result<Vec<Product>, CatalogError> {
        let bytes = match tokio::fs::read(&self.config.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Catalog file {:?} absent, serving empty catalog", self.config.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(CatalogError::Io(e)),
        };
        let products: Vec<Product> = serde_json::from_slice(&bytes)?;
        debug!("Loaded {} products from catalog", products.len());
        Ok(products)
    }

    async fn get_product_by_id(&self, product_id: &str) -> Result<Option<Product>, CatalogError> {
        let products = self.load_products().await?;
        Ok(products.into_iter().find(|p| p.id == product_id))
    }
}
