use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::config::app_conf::AppConfig;
use crate::config::{CatalogConfig, EmailConfig, StudioConfig};
use crate::handler::order_handler::OrderState;
use crate::handler::page_handler::PageState;
use crate::repository::product_repo::JsonProductRepository;
use crate::router::order_router::order_router;
use crate::router::page_router::page_router;
use crate::service::order_service::OrderServiceImpl;
use crate::util::email::SmtpOrderNotifier;

pub struct App {
    config: AppConfig,
    router: Router,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let studio = Arc::new(StudioConfig::from_env());
        let catalog_config = CatalogConfig::from_env();
        let email_config = EmailConfig::from_env().expect("Email config error");

        let catalog = Arc::new(JsonProductRepository::new(catalog_config));
        let notifier = Arc::new(
            SmtpOrderNotifier::new(email_config, (*studio).clone())
                .expect("Failed to create SMTP order notifier"),
        );
        let order_service = Arc::new(OrderServiceImpl {
            catalog: catalog.clone(),
            notifier,
            studio: studio.clone(),
        });

        let page_state = PageState {
            catalog,
            studio: studio.clone(),
        };
        let order_state = OrderState {
            service: order_service,
            studio,
        };

        let router = Router::new()
            .merge(page_router(page_state))
            .merge(order_router(order_state))
            .route("/health", get(|| async { "OK" }));

        App { config, router }
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }
}
