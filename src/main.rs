//! catalog server binary.
//!
//! Run with:
//!   PORT=3000 API_KEY=secret123 RUST_LOG=catalog=debug cargo run
//!
//! Try:
//!   curl http://localhost:3000/api/products?category=electronics
//!   curl http://localhost:3000/api/products/search?name=phone
//!   curl -X POST http://localhost:3000/api/products \
//!        -H 'x-api-key: secret123' -H 'content-type: application/json' \
//!        -d '{"name":"Kettle","price":25,"category":"kitchen"}'

use catalog::config::Config;
use catalog::{AppState, ProductStore, Server, api};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), catalog::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        bind_address = %config.bind_address,
        api_key_header = %config.auth.header,
        "configuration loaded"
    );

    let store = ProductStore::seeded();
    tracing::info!(products = store.len(), "store seeded");

    let state = AppState::new(store, config.auth);
    Server::bind(config.bind_address).serve(api::router(state)).await
}
