//! Health-check handlers.
//!
//! | Check | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can the pod serve traffic? Failure → pulled from load-balancer. |
//!
//! Both bypass auth and validation and answer with the standard envelope.

use crate::envelope::Success;
use crate::request::Request;
use crate::state::AppState;

/// Liveness check. No dependencies: if it answers, the process is alive.
pub async fn liveness(_req: Request, _state: AppState) -> Success<()> {
    Success::message("ok")
}

/// Readiness check. The store is in-process, so holding a state means ready;
/// the record count is reported for visibility.
pub async fn readiness(_req: Request, state: AppState) -> Success<usize> {
    Success::ok(state.store.len())
}
