//! Radix-tree request router.
//!
//! One tree per HTTP method, O(path-length) lookup. Each route carries its
//! own middleware [`Chain`]; the router itself carries a global chain that
//! runs before lookup, so it sees unmatched requests too.
//!
//! # Route specificity
//!
//! matchit always prefers a static segment over a parameter segment at the
//! same position, whatever the registration order. `/api/products/search`
//! therefore never reaches a `/api/products/{id}` handler with
//! `id = "search"`. Keep literal sub-resources static; that invariant is what
//! makes the route table order-independent.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::error::ApiError;
use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{Chain, Middleware};
use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A registered handler plus the stages that guard it.
struct Endpoint<S> {
    chain: Chain<S>,
    handler: BoxedHandler<S>,
}

/// The application router.
///
/// Owns the application state `S` and clones it into every request. Build it
/// once at startup and pass it to [`Server::serve`](crate::Server::serve).
pub struct Router<S> {
    state: S,
    global: Chain<S>,
    routes: HashMap<Method, MatchitRouter<Arc<Endpoint<S>>>>,
}

impl<S> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(state: S) -> Self {
        Self { state, global: Chain::new(), routes: HashMap::new() }
    }

    /// Adds a stage that runs for every request, before route lookup.
    pub fn wrap(mut self, stage: impl Middleware<S>) -> Self {
        self.global = self.global.then(stage);
        self
    }

    /// Register an unguarded handler for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    pub fn on(self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.on_with(method, path, Chain::new(), handler)
    }

    /// Register a handler guarded by `chain`. The chain runs after the global
    /// stages and before the handler.
    ///
    /// # Panics
    ///
    /// Panics if `path` is malformed or conflicts with an existing route.
    /// Routes are registered at startup, so this surfaces immediately.
    pub fn on_with(
        mut self,
        method: Method,
        path: &str,
        chain: Chain<S>,
        handler: impl Handler<S>,
    ) -> Self {
        let endpoint = Arc::new(Endpoint { chain, handler: handler.into_boxed_handler() });
        let route = format!("{method} {path}");
        self.routes
            .entry(method)
            .or_default()
            .insert(path, endpoint)
            .unwrap_or_else(|e| panic!("invalid route `{route}`: {e}"));
        self
    }

    /// Runs one request through the whole pipeline.
    ///
    /// Global stages, lookup, route stages, handler. The first failure at any
    /// step is rendered by the envelope formatter and nothing after it runs.
    pub async fn dispatch(&self, mut req: Request) -> Response {
        let state = self.state.clone();

        if let Err(e) = self.global.run(&req, &state) {
            return e.into_response();
        }

        let Some((endpoint, params)) = self.lookup(req.method(), req.path()) else {
            return ApiError::route_not_found().into_response();
        };
        req.params = params;

        if let Err(e) = endpoint.chain.run(&req, &state) {
            return e.into_response();
        }

        endpoint.handler.call(req, state).await
    }

    fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(Arc<Endpoint<S>>, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let endpoint = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), decode_param(v)))
            .collect();
        Some((endpoint, params))
    }
}

/// Percent-decodes a path segment. Sequences that do not decode to UTF-8
/// are passed through as written.
fn decode_param(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn echo_id(req: Request, _state: ()) -> String {
        format!("id={}", req.param("id").unwrap_or("-"))
    }

    async fn literal(_req: Request, _state: ()) -> &'static str {
        "literal"
    }

    fn text(res: &Response) -> &str {
        std::str::from_utf8(res.body()).unwrap()
    }

    #[tokio::test]
    async fn static_segment_wins_over_parameter_regardless_of_order() {
        let router = Router::new(())
            .on(Method::Get, "/items/{id}", echo_id)
            .on(Method::Get, "/items/search", literal);

        let res = router.dispatch(Request::builder(Method::Get, "/items/search").build()).await;
        assert_eq!(text(&res), "literal");

        let res = router.dispatch(Request::builder(Method::Get, "/items/7").build()).await;
        assert_eq!(text(&res), "id=7");
    }

    #[tokio::test]
    async fn path_params_are_percent_decoded() {
        let router = Router::new(()).on(Method::Get, "/items/{id}", echo_id);

        let res = router.dispatch(Request::builder(Method::Get, "/items/%31").build()).await;
        assert_eq!(text(&res), "id=1");

        let res = router.dispatch(Request::builder(Method::Get, "/items/a%20b+c").build()).await;
        assert_eq!(text(&res), "id=a b+c");

        let res = router.dispatch(Request::builder(Method::Get, "/items/%FF").build()).await;
        assert_eq!(text(&res), "id=%FF");
    }

    #[tokio::test]
    async fn unmatched_method_or_path_is_route_not_found() {
        let router = Router::new(()).on(Method::Get, "/items/{id}", echo_id);

        for req in [
            Request::builder(Method::Post, "/items/7").build(),
            Request::builder(Method::Get, "/nowhere").build(),
        ] {
            let res = router.dispatch(req).await;
            assert_eq!(res.status_code(), 404);
        }
    }

    #[tokio::test]
    async fn route_chain_short_circuits_before_handler() {
        let deny = |_: &Request, _: &()| -> Result<(), ApiError> {
            Err(ApiError::unauthorized("no"))
        };
        let router = Router::new(())
            .on_with(Method::Get, "/items/{id}", Chain::new().then(deny), echo_id);

        let res = router.dispatch(Request::builder(Method::Get, "/items/7").build()).await;
        assert_eq!(res.status_code(), 401);
    }

    #[tokio::test]
    async fn global_chain_sees_unmatched_requests() {
        let deny = |_: &Request, _: &()| -> Result<(), ApiError> {
            Err(ApiError::validation("global"))
        };
        let router = Router::new(()).wrap(deny);

        let res = router.dispatch(Request::builder(Method::Get, "/nowhere").build()).await;
        assert_eq!(res.status_code(), 400);
    }

    #[tokio::test]
    async fn extension_methods_pass_the_global_chain_then_404() {
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let router = Router::new(())
            .wrap(move |req: &Request, _: &()| -> Result<(), ApiError> {
                log.lock().push(req.method().to_string());
                Ok(())
            })
            .on(Method::Get, "/items/{id}", echo_id);

        let purge = Method::Extension("PURGE".to_owned());
        let res = router.dispatch(Request::builder(purge, "/items/7").build()).await;
        assert_eq!(res.status_code(), 404);
        assert_eq!(*seen.lock(), ["PURGE"]);
    }
}
