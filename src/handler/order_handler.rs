use axum::{extract::Multipart, extract::State, response::Html};
use bytes::BytesMut;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::config::StudioConfig;
use crate::dto::order_dto::{OrderForm, UploadedFile};
use crate::service::order_service::{OrderError, OrderService};
use crate::util::error::HandlerError;
use crate::view::pages;

/// State for the order route: the pipeline plus studio identity for
/// rendering the result pages.
#[derive(Clone)]
pub struct OrderState {
    pub service: Arc<dyn OrderService>,
    pub studio: Arc<StudioConfig>,
}

/// POST /order: walk the multipart form, collect trimmed text fields and
/// in-memory file uploads, then hand the assembled form to the order
/// service and render the outcome page.
pub async fn create_order_handler(
    State(state): State<OrderState>,
    mut multipart: Multipart,
) -> Result<Html<String>, HandlerError> {
    info!("Order submission received");
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut files: Vec<UploadedFile> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Error reading multipart field: {}", e);
        HandlerError::bad_request("Malformed order form.")
    })? {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();
        debug!("Processing field: {}", name);
        if name == "design_files" {
            let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
            let content_type = field.content_type().map(|s| s.to_string()).unwrap_or_default();
            let mut buf = BytesMut::new();
            let mut stream = field;
            while let Some(chunk) = stream.chunk().await.map_err(|e| {
                error!("Error reading file chunk: {}", e);
                HandlerError::bad_request("Failed to read uploaded file.")
            })? {
                buf.extend_from_slice(&chunk);
            }
            info!("Received file: {} ({} bytes)", filename, buf.len());
            files.push(UploadedFile {
                filename,
                content_type,
                content: buf.to_vec(),
            });
        } else {
            let value = field.text().await.map_err(|e| {
                error!("Failed to read field {}: {}", name, e);
                HandlerError::bad_request("Malformed order form.")
            })?;
            fields.insert(name, value.trim().to_string());
        }
    }

    let form = OrderForm::from_fields(fields, files);

    match state.service.place_order(form).await {
        Ok(placed) => Ok(Html(pages::render_order_success(
            &state.studio,
            &placed.product,
            &placed.customer_name,
        ))),
        Err(OrderError::ProductNotFound) => Ok(Html(pages::render_order_error(
            &state.studio,
            "Product not found.",
        ))),
        Err(OrderError::OutsideServiceArea(message)) => {
            Ok(Html(pages::render_order_error(&state.studio, &message)))
        }
        Err(OrderError::Notification) => Ok(Html(pages::render_order_error(
            &state.studio,
            "Something went wrong while placing your order. \
             Please try again or contact us directly.",
        ))),
        Err(OrderError::Catalog(e)) => Err(HandlerError::from(e)),
    }
}
