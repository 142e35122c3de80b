//! End-to-end behaviour of the catalog pipeline, driven through
//! `Router::dispatch` against a freshly seeded store per test.

use catalog::config::AuthConfig;
use catalog::{AppState, Method, ProductStore, Request, Response, Router, api};
use serde_json::{Value, json};

const KEY: &str = "test-key";

fn app() -> Router<AppState> {
    api::router(AppState::new(ProductStore::seeded(), AuthConfig::new("x-api-key", KEY)))
}

async fn send(app: &Router<AppState>, req: Request) -> (u16, Value) {
    let res: Response = app.dispatch(req).await;
    let body = serde_json::from_slice(res.body()).expect("every response is a JSON envelope");
    (res.status_code(), body)
}

async fn get(app: &Router<AppState>, target: &str) -> (u16, Value) {
    send(app, Request::builder(Method::Get, target).build()).await
}

fn authed(method: Method, target: &str, body: Value) -> Request {
    Request::builder(method, target).header("x-api-key", KEY).json(&body).build()
}

fn names(body: &Value) -> Vec<&str> {
    body["data"]
        .as_array()
        .expect("data is an array")
        .iter()
        .map(|p| p["name"].as_str().expect("name is a string"))
        .collect()
}

#[tokio::test]
async fn root_greets() {
    let (status, body) = get(&app(), "/").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "success");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn health_checks_answer() {
    let app = app();
    assert_eq!(get(&app, "/healthz").await.0, 200);

    let (status, body) = get(&app, "/readyz").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"], 3);
}

#[tokio::test]
async fn default_listing_is_first_three_with_total() {
    let (status, body) = get(&app(), "/api/products").await;
    assert_eq!(status, 200);
    assert_eq!(names(&body), ["Laptop", "Smartphone", "Coffee Maker"]);
    assert_eq!(body["total"], 3);
    assert_eq!(body["page"], 1);
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn category_filter_returns_both_electronics() {
    let (status, body) = get(&app(), "/api/products?category=electronics").await;
    assert_eq!(status, 200);
    assert_eq!(names(&body), ["Laptop", "Smartphone"]);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn pagination_past_the_end_is_empty_not_an_error() {
    let app = app();
    let (_, body) = get(&app, "/api/products?page=2&limit=2").await;
    assert_eq!(names(&body), ["Coffee Maker"]);

    let (status, body) = get(&app, "/api/products?page=5").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn invalid_pagination_is_rejected() {
    let (status, body) = get(&app(), "/api/products?page=abc").await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"status": "error", "message": "page must be a positive integer"}));

    let (status, _) = get(&app(), "/api/products?limit=0").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn oversized_page_is_past_the_end() {
    let (status, body) = get(&app(), "/api/products?page=99999999999999999999").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn search_matches_case_insensitively() {
    let (status, body) = get(&app(), "/api/products/search?name=PHONE").await;
    assert_eq!(status, 200);
    assert_eq!(names(&body), ["Smartphone"]);
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn search_without_term_is_400() {
    let app = app();
    for target in ["/api/products/search", "/api/products/search?name="] {
        let (status, body) = get(&app, target).await;
        assert_eq!(status, 400, "{target}");
        assert_eq!(body["status"], "error");
    }
}

#[tokio::test]
async fn stats_counts_seed_categories() {
    let (status, body) = get(&app(), "/api/products/stats").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"], json!({"electronics": 2, "kitchen": 1}));
}

#[tokio::test]
async fn get_by_id_and_unknown_id() {
    let app = app();
    let (status, body) = get(&app, "/api/products/2").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["name"], "Smartphone");
    assert_eq!(body["data"]["inStock"], true);

    let (status, body) = get(&app, "/api/products/999").await;
    assert_eq!(status, 404);
    assert_eq!(
        body,
        json!({"status": "error", "message": "Product with id 999 not found"})
    );
}

#[tokio::test]
async fn percent_encoded_id_is_decoded() {
    let (status, body) = get(&app(), "/api/products/%31").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["name"], "Laptop");
}

#[tokio::test]
async fn repeated_reads_are_identical() {
    let app = app();
    assert_eq!(get(&app, "/api/products/1").await, get(&app, "/api/products/1").await);
    assert_eq!(
        get(&app, "/api/products?category=kitchen").await,
        get(&app, "/api/products?category=kitchen").await
    );
}

#[tokio::test]
async fn create_returns_201_with_fresh_stable_id() {
    let app = app();
    let body = json!({"name": "Kettle", "price": 25, "category": "kitchen"});

    let (status, first) = send(&app, authed(Method::Post, "/api/products", body.clone())).await;
    assert_eq!(status, 201);
    assert_eq!(first["data"]["inStock"], true);
    let id = first["data"]["id"].as_str().unwrap().to_owned();

    let (_, second) = send(&app, authed(Method::Post, "/api/products", body)).await;
    assert_ne!(second["data"]["id"], first["data"]["id"]);

    let (status, read) = get(&app, &format!("/api/products/{id}")).await;
    assert_eq!(status, 200);
    assert_eq!(read["data"], first["data"]);

    let (_, stats) = get(&app, "/api/products/stats").await;
    assert_eq!(stats["data"]["kitchen"], 3);
}

#[tokio::test]
async fn create_without_key_is_401_and_store_unchanged() {
    let app = app();
    let req = Request::builder(Method::Post, "/api/products")
        .json(&json!({"name": "Kettle", "price": 25}))
        .build();

    let (status, body) = send(&app, req).await;
    assert_eq!(status, 401);
    assert_eq!(body["status"], "error");

    let (status, _) = send(
        &app,
        Request::builder(Method::Post, "/api/products")
            .header("x-api-key", "wrong")
            .json(&json!({"name": "Kettle", "price": 25}))
            .build(),
    )
    .await;
    assert_eq!(status, 401);

    assert_eq!(get(&app, "/api/products").await.1["total"], 3);
}

#[tokio::test]
async fn auth_runs_before_validation() {
    let req = Request::builder(Method::Post, "/api/products").json(&json!({})).build();
    assert_eq!(send(&app(), req).await.0, 401);
}

#[tokio::test]
async fn create_without_price_is_400_and_store_unchanged() {
    let app = app();
    let (status, body) = send(&app, authed(Method::Post, "/api/products", json!({"name": "Kettle"}))).await;
    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({"status": "error", "message": "Price is required and must be a number"})
    );
    assert_eq!(get(&app, "/api/products").await.1["total"], 3);
}

#[tokio::test]
async fn create_with_mistyped_optional_field_is_400() {
    let body = json!({"name": "Kettle", "price": 25, "inStock": "yes"});
    let (status, _) = send(&app(), authed(Method::Post, "/api/products", body)).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn update_merges_and_keeps_id() {
    let app = app();
    let body = json!({"name": "Gaming Laptop", "price": 1299.5, "id": "hijack"});
    let (status, updated) = send(&app, authed(Method::Put, "/api/products/1", body)).await;
    assert_eq!(status, 200);
    assert_eq!(
        updated["data"],
        json!({
            "id": "1",
            "name": "Gaming Laptop",
            "description": "High-performance laptop",
            "price": 1299.5,
            "category": "electronics",
            "inStock": true
        })
    );

    let (_, read) = get(&app, "/api/products/1").await;
    assert_eq!(read["data"], updated["data"]);
    assert_eq!(get(&app, "/api/products/hijack").await.0, 404);
}

#[tokio::test]
async fn update_is_guarded_and_validated() {
    let app = app();
    let body = json!({"name": "X", "price": 1});
    let unauthenticated = Request::builder(Method::Put, "/api/products/1").json(&body).build();
    assert_eq!(send(&app, unauthenticated).await.0, 401);

    let (status, _) = send(&app, authed(Method::Put, "/api/products/1", json!({"price": 1}))).await;
    assert_eq!(status, 400);
    assert_eq!(get(&app, "/api/products/1").await.1["data"]["name"], "Laptop");
}

#[tokio::test]
async fn update_and_delete_unknown_id_are_404() {
    let app = app();
    let body = json!({"name": "X", "price": 1});
    assert_eq!(send(&app, authed(Method::Put, "/api/products/nope", body)).await.0, 404);

    let req = Request::builder(Method::Delete, "/api/products/nope")
        .header("x-api-key", KEY)
        .build();
    assert_eq!(send(&app, req).await.0, 404);
}

#[tokio::test]
async fn delete_returns_record_then_404s() {
    let app = app();
    let delete = || {
        Request::builder(Method::Delete, "/api/products/3")
            .header("x-api-key", KEY)
            .build()
    };

    let unauthenticated = Request::builder(Method::Delete, "/api/products/3").build();
    assert_eq!(send(&app, unauthenticated).await.0, 401);

    let (status, body) = send(&app, delete()).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["name"], "Coffee Maker");

    assert_eq!(get(&app, "/api/products/3").await.0, 404);
    assert_eq!(send(&app, delete()).await.0, 404);
    assert_eq!(get(&app, "/api/products/stats").await.1["data"], json!({"electronics": 2}));
}

#[tokio::test]
async fn literal_subpaths_are_not_captured_as_ids() {
    let app = app();
    assert_eq!(get(&app, "/api/products/search?name=lap").await.0, 200);
    assert_eq!(get(&app, "/api/products/stats").await.0, 200);
}

#[tokio::test]
async fn unmatched_route_is_404_route_not_found() {
    let app = app();
    let expected = json!({"status": "error", "message": "Route not found"});

    assert_eq!(get(&app, "/api/unknown").await, (404, expected.clone()));

    let req = Request::builder(Method::Patch, "/api/products/1").header("x-api-key", KEY).build();
    assert_eq!(send(&app, req).await, (404, expected));
}
