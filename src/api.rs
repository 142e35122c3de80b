//! The catalog route table and its handlers.
//!
//! | Route | Guards | Handler |
//! |---|---|---|
//! | `GET /` | | [`index`] |
//! | `GET /healthz`, `GET /readyz` | | [`health`](crate::health) |
//! | `GET /api/products` | | [`list_products`] |
//! | `GET /api/products/search` | | [`search_products`] |
//! | `GET /api/products/stats` | | [`product_stats`] |
//! | `GET /api/products/{id}` | | [`get_product`] |
//! | `POST /api/products` | auth, validate | [`create_product`] |
//! | `PUT /api/products/{id}` | auth, validate | [`update_product`] |
//! | `DELETE /api/products/{id}` | auth | [`delete_product`] |
//!
//! Every request is logged first, matched or not.

use std::collections::BTreeMap;
use std::num::IntErrorKind;

use crate::envelope::Success;
use crate::error::ApiError;
use crate::health;
use crate::method::Method;
use crate::middleware::{self, Chain};
use crate::product::{NewProduct, Product, ProductPatch};
use crate::request::Request;
use crate::router::Router;
use crate::state::AppState;
use crate::store::{DEFAULT_LIMIT, DEFAULT_PAGE, ListQuery};

type ApiResult<T> = Result<Success<T>, ApiError>;

/// Builds the full catalog router around `state`.
pub fn router(state: AppState) -> Router<AppState> {
    let guarded = Chain::new().then(middleware::authenticate);
    let guarded_body = guarded.clone().then(middleware::validate_product);

    Router::new(state)
        .wrap(middleware::log_request)
        .on(Method::Get, "/", index)
        .on(Method::Get, "/healthz", health::liveness)
        .on(Method::Get, "/readyz", health::readiness)
        .on(Method::Get, "/api/products", list_products)
        .on(Method::Get, "/api/products/search", search_products)
        .on(Method::Get, "/api/products/stats", product_stats)
        .on(Method::Get, "/api/products/{id}", get_product)
        .on_with(Method::Post, "/api/products", guarded_body.clone(), create_product)
        .on_with(Method::Put, "/api/products/{id}", guarded_body, update_product)
        .on_with(Method::Delete, "/api/products/{id}", guarded, delete_product)
}

// GET /
pub async fn index(_req: Request, _state: AppState) -> Success<()> {
    Success::message("Welcome to the product catalog API")
}

// GET /api/products?category=&page=&limit=
pub async fn list_products(req: Request, state: AppState) -> ApiResult<Vec<Product>> {
    let query = list_query(&req)?;
    let page = state.store.list(&query);
    let count = page.items.len();
    Ok(Success::ok(page.items).count(count).total(page.total).page(page.page))
}

// GET /api/products/search?name=
pub async fn search_products(req: Request, state: AppState) -> ApiResult<Vec<Product>> {
    let matches = state.store.search(req.query("name").unwrap_or_default())?;
    let count = matches.len();
    Ok(Success::ok(matches).count(count))
}

// GET /api/products/stats
pub async fn product_stats(_req: Request, state: AppState) -> Success<BTreeMap<String, usize>> {
    Success::ok(state.store.stats())
}

// GET /api/products/{id}
pub async fn get_product(req: Request, state: AppState) -> ApiResult<Product> {
    let product = state.store.get(product_id(&req)?)?;
    Ok(Success::ok(product))
}

// POST /api/products → 201
pub async fn create_product(req: Request, state: AppState) -> ApiResult<Product> {
    let new: NewProduct = req.json()?;
    let product = state.store.create(new);
    tracing::info!(id = %product.id, "product created");
    Ok(Success::created(product))
}

// PUT /api/products/{id}
pub async fn update_product(req: Request, state: AppState) -> ApiResult<Product> {
    let patch: ProductPatch = req.json()?;
    let product = state.store.update(product_id(&req)?, patch)?;
    tracing::info!(id = %product.id, "product updated");
    Ok(Success::ok(product))
}

// DELETE /api/products/{id}
pub async fn delete_product(req: Request, state: AppState) -> ApiResult<Product> {
    let product = state.store.delete(product_id(&req)?)?;
    tracing::info!(id = %product.id, "product deleted");
    Ok(Success::ok(product))
}

/// The `{id}` path parameter. Only missing if a route was registered without it.
fn product_id(req: &Request) -> Result<&str, ApiError> {
    req.param("id")
        .ok_or_else(|| ApiError::internal("route is missing its {id} parameter"))
}

/// Reads `category`, `page` and `limit` from the query string.
///
/// `page` and `limit` must be integers >= 1 when present. Values too large
/// for `usize` saturate, so an absurd page is simply past the end.
fn list_query(req: &Request) -> Result<ListQuery, ApiError> {
    Ok(ListQuery {
        category: req.query("category").map(str::to_owned),
        page: positive(req.query("page"), "page", DEFAULT_PAGE)?,
        limit: positive(req.query("limit"), "limit", DEFAULT_LIMIT)?,
    })
}

fn positive(raw: Option<&str>, name: &str, default: usize) -> Result<usize, ApiError> {
    let Some(raw) = raw else { return Ok(default) };
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        _ => Err(ApiError::validation(format!("{name} must be a positive integer"))),
    }
}
