use axum::body::{Body, BodyDataStream, Bytes};
use axum::extract::{ConnectInfo, State};
use axum::http::{header, HeaderMap, HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use chrono::Utc;
use futures::Stream;
use sitegate_application::services::{DecisionEngine, TelemetryPipeline};
use sitegate_domain::net::strip_port;
use sitegate_domain::{Action, TelemetryEvent};
use std::net::{IpAddr, SocketAddr};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{ready, Context, Poll};
use std::time::Instant;
use tracing::{debug, error, warn};
use url::Url;

use super::forwarder::UpstreamForwarder;

const X_REQUEST_ID: &str = "x-request-id";

#[derive(Clone)]
pub struct ProxyState {
    pub engine: Arc<DecisionEngine>,
    pub telemetry: Arc<TelemetryPipeline>,
    pub forwarder: UpstreamForwarder,
}

/// Catch-all router: every request goes through the decision engine and,
/// when allowed, on to the site's upstream.
pub fn proxy_router(state: ProxyState) -> Router {
    Router::new().fallback(handle_proxy).with_state(state)
}

/// Request attributes captured before the body is handed to the forwarder.
struct RequestMeta {
    started: Instant,
    client_ip: Arc<str>,
    user_agent: Arc<str>,
    method: Arc<str>,
    path: Arc<str>,
}

impl RequestMeta {
    fn event(&self, site_id: i64, status: StatusCode, action: Action) -> TelemetryEvent {
        TelemetryEvent {
            timestamp: Utc::now(),
            site_id,
            client_ip: Arc::clone(&self.client_ip),
            user_agent: Arc::clone(&self.user_agent),
            method: Arc::clone(&self.method),
            path: Arc::clone(&self.path),
            status: status.as_u16(),
            duration_us: self.started.elapsed().as_micros() as u64,
            action,
        }
    }
}

/// Event for a forwarded response, recorded once its body is done.
struct PendingEvent {
    telemetry: Arc<TelemetryPipeline>,
    meta: RequestMeta,
    site_id: i64,
    status: StatusCode,
}

impl PendingEvent {
    fn record(self) {
        self.telemetry
            .record(self.meta.event(self.site_id, self.status, Action::Allow));
    }
}

/// Upstream body that records its event when the stream ends or the
/// client goes away, so the duration covers the whole transfer.
struct RecordOnEnd {
    inner: BodyDataStream,
    pending: Option<PendingEvent>,
}

impl Stream for RecordOnEnd {
    type Item = Result<Bytes, axum::Error>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let item = ready!(Pin::new(&mut self.inner).poll_next(cx));
        if item.is_none() {
            if let Some(pending) = self.pending.take() {
                pending.record();
            }
        }
        Poll::Ready(item)
    }
}

impl Drop for RecordOnEnd {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.record();
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

async fn handle_proxy(
    State(state): State<ProxyState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    req: Request<Body>,
) -> Response {
    let remote_addr = remote.to_string();
    let host = header_str(req.headers(), header::HOST.as_str())
        .or_else(|| req.uri().host())
        .unwrap_or_default()
        .to_string();

    let meta = RequestMeta {
        started: Instant::now(),
        client_ip: Arc::from(strip_port(&remote_addr)),
        user_agent: Arc::from(header_str(req.headers(), header::USER_AGENT.as_str()).unwrap_or_default()),
        method: Arc::from(req.method().as_str()),
        path: Arc::from(req.uri().path()),
    };
    let request_id = header_str(req.headers(), X_REQUEST_ID).map(str::to_string);

    let decision = match state.engine.analyze(&host, &remote_addr).await {
        Ok(decision) => decision.with_request_id(request_id),
        Err(e) => {
            error!(error = %e, host = %host, "Site resolution failed");
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            state.telemetry.record(meta.event(0, status, Action::Block));
            return (status, "Internal Server Error").into_response();
        }
    };

    let site_id = decision.site_id();

    if decision.is_blocked() {
        debug!(
            host = %host,
            client = %meta.client_ip,
            reason = %decision.reason,
            request_id = ?decision.request_id,
            "Request blocked"
        );
        let status = StatusCode::FORBIDDEN;
        state.telemetry.record(meta.event(site_id, status, Action::Block));
        let mut response = (status, format!("Access Denied: {}", decision.reason)).into_response();
        if let Some(value) = decision
            .request_id
            .as_deref()
            .and_then(|id| HeaderValue::from_str(id).ok())
        {
            response.headers_mut().insert(X_REQUEST_ID, value);
        }
        return response;
    }

    let target = match decision.site.as_ref().filter(|s| s.has_target()) {
        Some(site) => Url::parse(&site.target_url),
        None => {
            let status = StatusCode::NOT_FOUND;
            state.telemetry.record(meta.event(site_id, status, Action::Allow));
            return (status, "No upstream configured").into_response();
        }
    };

    let target = match target {
        Ok(url) => url,
        Err(e) => {
            error!(error = %e, host = %host, "Invalid upstream URL");
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            state.telemetry.record(meta.event(site_id, status, Action::Allow));
            return (status, "Invalid upstream URL").into_response();
        }
    };

    let client_ip = meta.client_ip.parse::<IpAddr>().ok();
    match state.forwarder.forward(&target, req, client_ip).await {
        Ok(response) => {
            let (parts, body) = response.into_parts();
            let body = RecordOnEnd {
                inner: body.into_data_stream(),
                pending: Some(PendingEvent {
                    telemetry: Arc::clone(&state.telemetry),
                    meta,
                    site_id,
                    status: parts.status,
                }),
            };
            Response::from_parts(parts, Body::from_stream(body))
        }
        Err(e) => {
            warn!(error = %e, upstream = %target, "Upstream request failed");
            let status = StatusCode::BAD_GATEWAY;
            state.telemetry.record(meta.event(site_id, status, Action::Allow));
            (status, "Bad Gateway").into_response()
        }
    }
}
