//! `POST /ask` forwarder.
//!
//! The body is decoded as a [`Query`] so malformed requests are rejected here
//! with a 4xx, then re-encoded and posted to the upstream advisor. The
//! upstream status, content type, and body are returned unchanged, so a
//! non-2xx reply reaches the browser as the same status and raw text.
//! An unreachable upstream becomes `502 Bad Gateway` with a plain-text body.

#[cfg(test)]
#[path = "ask_test.rs"]
mod ask_test;

use advice::Query;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Upstream reply relayed verbatim to the caller.
#[derive(Debug)]
struct UpstreamReply {
    status: StatusCode,
    content_type: Option<HeaderValue>,
    body: Bytes,
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        if let Some(content_type) = self.content_type {
            response.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        response
    }
}

pub async fn ask(State(state): State<AppState>, Json(query): Json<Query>) -> Response {
    let url = state.ask_url();
    tracing::debug!(
        upstream = %url,
        district = ?query.district,
        crop = ?query.crop,
        lang = %query.lang,
        "forwarding question"
    );

    match forward(&state.http, &url, &query).await {
        Ok(reply) => {
            if reply.status.is_success() {
                tracing::debug!(status = reply.status.as_u16(), "advisor answered");
            } else {
                tracing::warn!(status = reply.status.as_u16(), "advisor returned an error status");
            }
            reply.into_response()
        }
        Err(e) => {
            tracing::warn!(upstream = %url, error = %e, "advisor upstream unavailable");
            (StatusCode::BAD_GATEWAY, bad_gateway_message(&e)).into_response()
        }
    }
}

async fn forward(http: &reqwest::Client, url: &str, query: &Query) -> Result<UpstreamReply, reqwest::Error> {
    let resp = http.post(url).json(query).send().await?;
    let status = resp.status();
    let content_type = resp.headers().get(CONTENT_TYPE).cloned();
    let body = resp.bytes().await?;
    Ok(UpstreamReply { status, content_type, body })
}

fn bad_gateway_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "advisor upstream timed out".to_owned()
    } else {
        format!("advisor upstream unavailable: {err}")
    }
}
