use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::config::StudioConfig;
use crate::dto::order_dto::OrderForm;
use crate::model::order::OrderSummary;
use crate::model::product::Product;
use crate::repository::catalog_error::CatalogError;
use crate::repository::product_repo::ProductRepository;
use crate::util::email::OrderNotifier;

/// Outcome of a successful submission, enough for the success page.
#[derive(Debug, Clone)]
pub struct OrderPlaced {
    pub product: Product,
    pub customer_name: String,
}

/// Order pipeline failures, each mapped to its own user-facing message by
/// the handler. `Notification` carries no detail; the cause is already in
/// the logs by the time it is returned.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Product not found.")]
    ProductNotFound,

    #[error("{0}")]
    OutsideServiceArea(String),

    #[error("Order notification failed")]
    Notification,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[async_trait]
pub trait OrderService: Send + Sync {
    async fn place_order(&self, form: OrderForm) -> Result<OrderPlaced, OrderError>;
}

pub struct OrderServiceImpl {
    pub catalog: Arc<dyn ProductRepository>,
    pub notifier: Arc<dyn OrderNotifier>,
    pub studio: Arc<StudioConfig>,
}

/// Soft service-area check: the city must contain the district name or its
/// alternate spelling, case-insensitively. An empty city skips the check
/// entirely; that pass-through is inherited behavior, kept as-is (see
/// DESIGN.md).
pub fn city_is_eligible(city: &str, studio: &StudioConfig) -> bool {
    if city.is_empty() {
        return true;
    }
    let city = city.to_lowercase();
    city.contains(&studio.service_area.to_lowercase())
        || city.contains(&studio.service_area_alt.to_lowercase())
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    #[instrument(skip(self, form), fields(product_id = %form.product_id, files = form.files.len()))]
    async fn place_order(&self, form: OrderForm) -> Result<OrderPlaced, OrderError> {
        info!("Processing order submission");

        let product = self
            .catalog
            .get_product_by_id(&form.product_id)
            .await?
            .ok_or(OrderError::ProductNotFound)?;

        if !city_is_eligible(&form.city, &self.studio) {
            info!("Order rejected: city {:?} outside service area", form.city);
            return Err(OrderError::OutsideServiceArea(
                self.studio.service_area_rejection(),
            ));
        }

        let summary = OrderSummary::from_product(&product, &form);

        if let Err(e) = self.notifier.send_order_email(&summary, &form.files).await {
            error!("Failed to send order email: {}", e);
            return Err(OrderError::Notification);
        }

        info!("Order placed for product {}", product.id);
        Ok(OrderPlaced {
            product,
            customer_name: form.name,
        })
    }
}
