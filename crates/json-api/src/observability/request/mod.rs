//! Request-level logging, request IDs, and parent trace extraction.

mod parent_context;
mod request_ids;
mod spans;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, error, info, warn};
use tracing_opentelemetry::OpenTelemetrySpanExt as _;

use super::{metrics, settings};

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// Paths polled by infrastructure; served without spans or metrics.
const UNTRACED_PATHS: [&str; 2] = ["/metrics", "/healthcheck"];

#[derive(Debug)]
struct RequestSummary<'a> {
    request_id: &'a str,
    method: &'a str,
    path: &'a str,
    status: StatusCode,
    duration: Duration,
}

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if UNTRACED_PATHS.contains(&req.uri().path()) {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();

    let request_id =
        request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());

    request_ids::set_request_id_header(res, &request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let remote_addr = req.remote_addr().to_string();
    let spans::RequestSpanName {
        otel_path,
        otel_span_name,
    } = spans::request_span_name(&method, &path);
    let _in_flight_request = metrics::InFlightRequestGuard::track();

    let span = tracing::info_span!(
        parent: None,
        "http.request",
        otel.name = %otel_span_name,
        otel.kind = "server",
        request_id = %request_id,
        method = %method,
        path = %path,
        remote_addr = %remote_addr,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    if settings::otel_parent_propagation_enabled()
        && let Some(parent_context) = parent_context::extract_parent_context(req.headers())
        && let Err(source) = span.set_parent(parent_context)
    {
        warn!("failed to set parent context on request span: {source}");
    }

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let summary = RequestSummary {
        request_id: &request_id,
        method: &method,
        path: &path,
        status: request_ids::response_status_or_ok(res.status_code),
        duration: started.elapsed(),
    };

    metrics::observe_request(
        &method,
        &otel_path,
        summary.status.as_u16(),
        summary.duration.as_secs_f64(),
    );

    record_completion(&span, &summary);
}

fn record_completion(span: &Span, summary: &RequestSummary<'_>) {
    let status = summary.status.as_u16();
    let duration_ms = summary.duration.as_millis();
    let threshold_ms = u128::from(settings::slow_request_threshold_ms());

    span.record("status", status);
    span.record("duration_ms", duration_ms);

    span.in_scope(|| {
        info!(status, duration_ms, "request.completed");

        if summary.status.is_server_error() {
            error!(
                status,
                method = %summary.method,
                path = %summary.path,
                request_id = %summary.request_id,
                "server error response"
            );
        } else if summary.status.is_client_error() {
            warn!(
                status,
                method = %summary.method,
                path = %summary.path,
                request_id = %summary.request_id,
                "client error response"
            );
        }

        if duration_ms > threshold_ms {
            warn!(
                method = %summary.method,
                path = %summary.path,
                request_id = %summary.request_id,
                duration_ms,
                threshold_ms,
                "slow request detected"
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn echo_request_id(depot: &mut Depot) -> String {
        depot
            .get::<String>(REQUEST_ID_DEPOT_KEY)
            .cloned()
            .unwrap_or_default()
    }

    fn service() -> Service {
        Service::new(
            Router::new()
                .hoop(request_logging)
                .push(Router::with_path("purchases/payment").post(echo_request_id))
                .push(Router::with_path("healthcheck").get(echo_request_id)),
        )
    }

    #[tokio::test]
    async fn inbound_request_id_is_echoed() -> TestResult {
        let mut res = TestClient::post("http://example.com/purchases/payment")
            .add_header(request_ids::REQUEST_ID_HEADER, "storefront-7f3a", true)
            .send(&service())
            .await;

        let header = res
            .headers()
            .get(request_ids::REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);

        assert_eq!(header.as_deref(), Some("storefront-7f3a"));
        assert_eq!(res.take_string().await?, "storefront-7f3a");

        Ok(())
    }

    #[tokio::test]
    async fn healthcheck_is_not_traced() -> TestResult {
        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&service())
            .await;

        assert!(res.headers().get(request_ids::REQUEST_ID_HEADER).is_none());
        assert_eq!(res.take_string().await?, "");

        Ok(())
    }
}
