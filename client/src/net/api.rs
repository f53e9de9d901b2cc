//! REST helper for the advisor endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub returning a transport error, since submitting a
//! question is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`AskError`]; [`submit_form`] folds both
//! the success and failure cases into an [`Outcome`] so the caller never sees
//! a `Result`. There is no retry and no timeout: one attempt per submission.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use advice::{AnswerResult, AskError, FormSnapshot, Outcome, Query};

#[cfg(any(test, feature = "hydrate"))]
fn ask_endpoint() -> &'static str {
    advice::ASK_PATH
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_failed(err: impl std::fmt::Display) -> AskError {
    AskError::transport(format!("invalid response: {err}"))
}

/// Post a query to `POST /ask` and decode the answer.
///
/// # Errors
///
/// Returns [`AskError::RequestFailed`] with the raw body text for a non-2xx
/// status, and [`AskError::Transport`] if the request cannot be sent or the
/// body is not a valid answer.
pub async fn post_query(query: &Query) -> Result<AnswerResult, AskError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ask_endpoint())
            .json(query)
            .map_err(AskError::transport)?
            .send()
            .await
            .map_err(AskError::transport)?;
        if !resp.ok() {
            let body = resp.text().await.map_err(AskError::transport)?;
            return Err(AskError::from_status(resp.status(), body));
        }
        resp.json::<AnswerResult>().await.map_err(decode_failed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(AskError::transport("not available on server"))
    }
}

/// Normalize a form snapshot, submit it, and shape the result for rendering.
pub async fn submit_form(form: &FormSnapshot) -> Outcome {
    Outcome::from_result(post_query(&Query::from_form(form)).await)
}
