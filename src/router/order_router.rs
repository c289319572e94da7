use axum::{routing::post, Router};

use crate::handler::order_handler::{create_order_handler, OrderState};

pub fn order_router(state: OrderState) -> Router {
    Router::new()
        .route("/order", post(create_order_handler))
        .with_state(state)
}
