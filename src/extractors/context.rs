//! Per-request store context derived from the server's shutdown token.

use crate::context::RequestContext;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// Each request gets a fresh deadline of `now + request_timeout` and a child
/// of the shutdown token, so stopping the server cancels in-flight store calls.
#[async_trait]
impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(RequestContext::child_of(&state.shutdown, state.request_timeout))
    }
}
