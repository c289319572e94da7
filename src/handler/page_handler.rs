use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
};
use std::sync::Arc;
use tracing::debug;

use crate::config::StudioConfig;
use crate::repository::product_repo::ProductRepository;
use crate::util::error::HandlerError;
use crate::view::pages;

/// Shared state for the storefront pages: the catalog plus studio identity.
#[derive(Clone)]
pub struct PageState {
    pub catalog: Arc<dyn ProductRepository>,
    pub studio: Arc<StudioConfig>,
}

pub async fn index_handler(
    State(state): State<PageState>,
) -> Result<Html<String>, HandlerError> {
    let products = state.catalog.load_products().await?;
    let featured = products.first();
    Ok(Html(pages::render_home(&state.studio, featured, &products)))
}

pub async fn shop_handler(State(state): State<PageState>) -> Result<Html<String>, HandlerError> {
    let products = state.catalog.load_products().await?;
    Ok(Html(pages::render_shop(&state.studio, &products)))
}

/// Product detail. A miss redirects to the shop listing instead of erroring.
pub async fn product_handler(
    State(state): State<PageState>,
    Path(product_id): Path<String>,
) -> Result<axum::response::Response, HandlerError> {
    match state.catalog.get_product_by_id(&product_id).await? {
        Some(product) => Ok(Html(pages::render_product(&state.studio, &product)).into_response()),
        None => {
            debug!("Product {:?} not in catalog, redirecting to /shop", product_id);
            Ok(Redirect::to("/shop").into_response())
        }
    }
}

pub async fn services_handler(State(state): State<PageState>) -> Html<String> {
    Html(pages::render_services(&state.studio))
}

pub async fn contact_handler(State(state): State<PageState>) -> Html<String> {
    Html(pages::render_contact(&state.studio))
}
