use axum::{routing::get, Router};

use crate::handler::page_handler::{
    contact_handler, index_handler, product_handler, services_handler, shop_handler, PageState,
};

pub fn page_router(state: PageState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/shop", get(shop_handler))
        .route("/product/{id}", get(product_handler))
        .route("/services", get(services_handler))
        .route("/contact", get(contact_handler))
        .with_state(state)
}
