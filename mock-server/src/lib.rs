use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Key the default app accepts.
pub const API_KEY: &str = "test-key";

/// How long `/slow` holds a request before answering.
pub const SLOW_DELAY: Duration = Duration::from_secs(3);

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub barcode_number: String,
    pub title: String,
    pub brand: String,
    pub category: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<Product>,
}

#[derive(Deserialize)]
pub struct LookupParams {
    pub barcode: Option<String>,
    pub key: Option<String>,
}

#[derive(Clone)]
pub struct Catalog {
    api_key: Arc<str>,
    products: Arc<HashMap<String, Product>>,
}

impl Catalog {
    pub fn new(api_key: &str, products: Vec<Product>) -> Self {
        let products = products
            .into_iter()
            .map(|p| (p.barcode_number.clone(), p))
            .collect();
        Self {
            api_key: api_key.into(),
            products: Arc::new(products),
        }
    }
}

/// Products the default app knows about.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            barcode_number: "8901548143629".to_string(),
            title: "Choco Bar".to_string(),
            brand: "Sample Foods".to_string(),
            category: "Food, Beverages & Tobacco > Food Items > Candy & Chocolate".to_string(),
        },
        Product {
            barcode_number: "012345678905".to_string(),
            title: "Widget".to_string(),
            brand: "Acme".to_string(),
            category: "Hardware".to_string(),
        },
    ]
}

pub fn app() -> Router {
    app_with(Catalog::new(API_KEY, sample_products()))
}

pub fn app_with(catalog: Catalog) -> Router {
    Router::new()
        .route("/v3/products", get(lookup_products))
        .route("/health", get(health))
        .route("/slow", get(slow))
        .route("/garbled", get(garbled))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, catalog: Catalog) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(catalog)).await
}

async fn lookup_products(
    State(catalog): State<Catalog>,
    Query(params): Query<LookupParams>,
) -> Result<Json<ProductsPage>, (StatusCode, &'static str)> {
    if params.key.as_deref() != Some(&*catalog.api_key) {
        return Err((StatusCode::FORBIDDEN, "Invalid API key"));
    }
    let barcode = params
        .barcode
        .ok_or((StatusCode::BAD_REQUEST, "Missing barcode parameter"))?;

    let products = catalog.products.get(&barcode).cloned().into_iter().collect();
    Ok(Json(ProductsPage { products }))
}

async fn health() -> &'static str {
    "ok"
}

async fn slow() -> Json<ProductsPage> {
    tokio::time::sleep(SLOW_DELAY).await;
    Json(ProductsPage {
        products: Vec::new(),
    })
}

/// A 500 whose body is not valid UTF-8.
async fn garbled() -> (StatusCode, Vec<u8>) {
    (StatusCode::INTERNAL_SERVER_ERROR, vec![0xff, 0xfe, 0xfd])
}
