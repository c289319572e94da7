use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use std::sync::Arc;
use studio_storefront::config::{CatalogConfig, StudioConfig};
use studio_storefront::handler::page_handler::PageState;
use studio_storefront::repository::product_repo::JsonProductRepository;
use studio_storefront::router::page_router::page_router;
use tempfile::TempDir;
use tower::ServiceExt;

fn app_with_catalog(dir: &TempDir, contents: &str) -> Router {
    let path = dir.path().join("products.json");
    std::fs::write(&path, contents).unwrap();
    let state = PageState {
        catalog: Arc::new(JsonProductRepository::new(CatalogConfig { path })),
        studio: Arc::new(StudioConfig::default()),
    };
    page_router(state)
}

const ONE_VASE: &str = r#"[{"id": "p1", "name": "Vase", "price": 500, "unit": "each"}]"#;

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_home_shows_featured_and_listing() {
    let dir = TempDir::new().unwrap();
    let app = app_with_catalog(&dir, ONE_VASE);

    let resp = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Featured"));
    assert!(body.contains("Vase"));
    assert!(body.contains("National Digital Studio"));
}

#[tokio::test]
async fn test_home_with_empty_catalog_file_absent() {
    let dir = TempDir::new().unwrap();
    let state = PageState {
        catalog: Arc::new(JsonProductRepository::new(CatalogConfig {
            path: dir.path().join("missing.json"),
        })),
        studio: Arc::new(StudioConfig::default()),
    };
    let app = page_router(state);

    let resp = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("No products available yet"));
}

#[tokio::test]
async fn test_shop_lists_all_products() {
    let dir = TempDir::new().unwrap();
    let app = app_with_catalog(
        &dir,
        r#"[{"id": "p1", "name": "Vase", "price": 500, "unit": "each"},
            {"id": "p2", "name": "Frame", "price": 250, "unit": "each"}]"#,
    );

    let resp = app
        .oneshot(Request::builder().uri("/shop").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Vase"));
    assert!(body.contains("Frame"));
}

#[tokio::test]
async fn test_product_page_renders_product() {
    let dir = TempDir::new().unwrap();
    let app = app_with_catalog(&dir, ONE_VASE);

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/product/p1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Vase"));
    assert!(body.contains("Place Order"));
}

#[tokio::test]
async fn test_unknown_product_redirects_to_shop() {
    let dir = TempDir::new().unwrap();
    let app = app_with_catalog(&dir, ONE_VASE);

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/product/p404")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("location").unwrap(), "/shop");
}

#[tokio::test]
async fn test_malformed_catalog_is_a_server_error() {
    let dir = TempDir::new().unwrap();
    let app = app_with_catalog(&dir, "{ not json");

    let resp = app
        .oneshot(Request::builder().uri("/shop").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(resp).await;
    // Generic page only, no parser detail.
    assert!(!body.contains("expected"));
}

#[tokio::test]
async fn test_services_and_contact_pages() {
    let dir = TempDir::new().unwrap();
    for uri in ["/services", "/contact"] {
        let app = app_with_catalog(&dir, ONE_VASE);
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains("Kunnamangalam, Kozhikode, Kerala"));
    }
}
