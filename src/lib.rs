//! # catalog
//!
//! An in-memory product catalog served over HTTP/JSON.
//!
//! ## The pipeline
//!
//! ```text
//! request ─▶ log_request ─▶ route lookup ─▶ route chain ─▶ handler ─▶ Success
//!                                 │          (auth,          │
//!                                 │           validate)      │
//!                                 └──── any ApiError ────────┴─▶ error envelope
//! ```
//!
//! Every stage returns `Result<_, ApiError>`. The first `Err` skips everything
//! after it and is rendered once, by the [`envelope`] formatter, as
//! `{"status":"error","message":…}` with the error's status code.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use catalog::{api, config::Config, AppState, ProductStore, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), catalog::Error> {
//!     let config = Config::from_env()?;
//!     let state = AppState::new(ProductStore::seeded(), config.auth.clone());
//!
//!     Server::bind(config.bind_address).serve(api::router(state)).await
//! }
//! ```
//!
//! ## Testing without a socket
//!
//! [`Router::dispatch`] runs the whole pipeline in-process:
//!
//! ```rust
//! # async fn demo() {
//! use catalog::{api, config::AuthConfig, AppState, Method, ProductStore, Request};
//!
//! let app = api::router(AppState::new(ProductStore::seeded(), AuthConfig::default()));
//! let res = app.dispatch(Request::builder(Method::Get, "/api/products/stats").build()).await;
//! assert_eq!(res.status_code(), 200);
//! # }
//! ```

mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod state;
mod status;

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod health;
pub mod middleware;
pub mod product;
pub mod store;

pub use error::{ApiError, Error};
pub use handler::Handler;
pub use method::{Method, UnknownMethod};
pub use product::{NewProduct, Product, ProductPatch};
pub use request::{Request, RequestBuilder};
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::{serve_listener, Server};
pub use state::AppState;
pub use status::Status;
pub use store::ProductStore;
