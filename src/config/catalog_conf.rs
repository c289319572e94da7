use std::env;
use std::path::PathBuf;

/// Location of the product catalog file.
///
/// The catalog is a JSON array maintained by hand; the server only ever
/// reads it, so pointing `CATALOG_PATH` at a different file is the whole
/// deployment story for product updates.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        let path = env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/products.json"));
        CatalogConfig { path }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            path: PathBuf::from("data/products.json"),
        }
    }
}
