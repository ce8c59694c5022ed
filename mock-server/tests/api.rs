use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Catalog, Product, ProductsPage};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- lookup ---

#[tokio::test]
async fn known_barcode_returns_product() {
    let resp = app()
        .oneshot(get("/v3/products?barcode=8901548143629&formatted=y&key=test-key"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: ProductsPage = body_json(resp).await;
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].title, "Choco Bar");
    assert_eq!(page.products[0].barcode_number, "8901548143629");
}

#[tokio::test]
async fn unknown_barcode_returns_empty_list() {
    let resp = app()
        .oneshot(get("/v3/products?barcode=0000000000000&formatted=y&key=test-key"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: ProductsPage = body_json(resp).await;
    assert!(page.products.is_empty());
}

#[tokio::test]
async fn formatted_is_optional() {
    let resp = app()
        .oneshot(get("/v3/products?barcode=012345678905&key=test-key"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: ProductsPage = body_json(resp).await;
    assert_eq!(page.products[0].title, "Widget");
}

// --- auth ---

#[tokio::test]
async fn wrong_key_returns_403() {
    let resp = app()
        .oneshot(get("/v3/products?barcode=8901548143629&formatted=y&key=nope"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(&body_bytes(resp).await[..], b"Invalid API key");
}

#[tokio::test]
async fn missing_key_returns_403() {
    let resp = app()
        .oneshot(get("/v3/products?barcode=8901548143629"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn missing_barcode_returns_400() {
    let resp = app()
        .oneshot(get("/v3/products?formatted=y&key=test-key"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- custom catalog ---

#[tokio::test]
async fn custom_catalog_and_key() {
    let catalog = Catalog::new(
        "other",
        vec![Product {
            barcode_number: "42".to_string(),
            title: "Answer".to_string(),
            brand: "Deep Thought".to_string(),
            category: "Books".to_string(),
        }],
    );

    let resp = app_with(catalog.clone())
        .oneshot(get("/v3/products?barcode=42&key=other"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: ProductsPage = body_json(resp).await;
    assert_eq!(page.products[0].title, "Answer");

    let resp = app_with(catalog)
        .oneshot(get("/v3/products?barcode=42&key=test-key"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

// --- misc ---

#[tokio::test]
async fn health_returns_plain_text() {
    let resp = app().oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"ok");
}

#[tokio::test]
async fn garbled_returns_non_utf8_500() {
    let resp = app().oneshot(get("/garbled")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_bytes(resp).await;
    assert!(std::str::from_utf8(&body).is_err());
}

#[tokio::test(start_paused = true)]
async fn slow_answers_after_delay() {
    let started = tokio::time::Instant::now();
    let resp = app().oneshot(get("/slow")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(started.elapsed() >= mock_server::SLOW_DELAY);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(get("/v2/products")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
