use reqwest::{Method, Request, Response, Url};
use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;
use tower::{Layer, Service};
use tracing::{error, info};

/// Tower layer that logs every outgoing request and how it ended.
///
/// Emits one start line (`GET https://host/users`) and, once the inner service
/// resolves, exactly one `completed in {ms}ms` or `failed in {ms}ms` line.
/// Responses with a non-success status count as failures; they are still
/// returned untouched. A request dropped before it resolves (timeout, `select!`,
/// task cancellation) logs `failed in {ms}ms` with a `request cancelled` error.
///
/// Elapsed time runs until the inner service yields the response head; reading
/// the body afterwards is not included.
#[derive(Clone, Debug, Default)]
pub struct LoggingLayer;

impl LoggingLayer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggingService { inner }
    }
}

#[derive(Clone, Debug)]
pub struct LoggingService<S> {
    inner: S,
}

/// Owns the terminal log line of one request; logs a cancellation on drop
/// unless `finish` ran first.
struct InFlight {
    method: Method,
    url: Url,
    started: Instant,
    armed: bool,
}

impl InFlight {
    fn start(method: Method, url: Url) -> Self {
        info!(http.method = %method, url = %url, "{method} {url}");
        Self {
            method,
            url,
            started: Instant::now(),
            armed: true,
        }
    }

    fn finish<E: Display>(&mut self, result: &Result<Response, E>) {
        self.armed = false;
        let (method, url) = (&self.method, &self.url);
        let elapsed = self.started.elapsed().as_millis();

        match result {
            Ok(response) if response.status().is_success() => {
                info!(
                    http.method = %method,
                    url = %url,
                    http.status_code = response.status().as_u16(),
                    elapsed_ms = elapsed,
                    "{method} {url} completed in {elapsed}ms"
                );
            }
            Ok(response) => {
                error!(
                    http.method = %method,
                    url = %url,
                    http.status_code = response.status().as_u16(),
                    elapsed_ms = elapsed,
                    "{method} {url} failed in {elapsed}ms"
                );
            }
            Err(err) => {
                error!(
                    http.method = %method,
                    url = %url,
                    elapsed_ms = elapsed,
                    error = %err,
                    "{method} {url} failed in {elapsed}ms"
                );
            }
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let (method, url) = (&self.method, &self.url);
        let elapsed = self.started.elapsed().as_millis();
        error!(
            http.method = %method,
            url = %url,
            elapsed_ms = elapsed,
            error = "request cancelled",
            "{method} {url} failed in {elapsed}ms"
        );
    }
}

impl<S> Service<Request> for LoggingService<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Display + Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let mut in_flight = InFlight::start(req.method().clone(), req.url().clone());
        let future = self.inner.call(req);

        Box::pin(async move {
            let result = future.await;
            in_flight.finish(&result);
            result
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tower::ServiceExt;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context as LayerContext, SubscriberExt};
    use tracing_subscriber::{Layer as SubscriberLayer, Registry};

    /// Records `(level, message)` for every event seen.
    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<(Level, String)>>>,
    }

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: Subscriber> SubscriberLayer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: LayerContext<'_, S>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.events
                .lock()
                .unwrap()
                .push((*event.metadata().level(), visitor.0));
        }
    }

    impl CaptureLayer {
        fn messages(&self) -> Vec<(Level, String)> {
            self.events.lock().unwrap().clone()
        }
    }

    #[derive(Debug)]
    struct TransportDown;

    impl fmt::Display for TransportDown {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("connection refused")
        }
    }

    fn request() -> Request {
        Request::new(
            Method::GET,
            Url::parse("http://api.test/users?skip=0&limit=100").unwrap(),
        )
    }

    fn respond_with(status: u16) -> Response {
        Response::from(
            http::Response::builder()
                .status(status)
                .body("[]".to_string())
                .unwrap(),
        )
    }

    /// Counts lines matching the start, completed and failed shapes.
    fn classify(events: &[(Level, String)]) -> (usize, usize, usize) {
        let start = events
            .iter()
            .filter(|(_, m)| m == "GET http://api.test/users?skip=0&limit=100")
            .count();
        let completed = events
            .iter()
            .filter(|(l, m)| *l == Level::INFO && m.contains(" completed in ") && m.ends_with("ms"))
            .count();
        let failed = events
            .iter()
            .filter(|(l, m)| *l == Level::ERROR && m.contains(" failed in ") && m.ends_with("ms"))
            .count();
        (start, completed, failed)
    }

    #[tokio::test]
    async fn logs_start_and_completion_on_success() {
        let capture = CaptureLayer::default();
        let _guard = tracing::subscriber::set_default(Registry::default().with(capture.clone()));

        let inner = tower::service_fn(|_req: Request| async {
            Ok::<_, TransportDown>(respond_with(200))
        });
        let response = LoggingLayer::new()
            .layer(inner)
            .oneshot(request())
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let events = capture.messages();
        assert_eq!(events.len(), 2);
        assert_eq!(classify(&events), (1, 1, 0));
        assert!(events[1].1.starts_with("GET http://api.test/users?skip=0&limit=100 completed in "));
    }

    #[tokio::test]
    async fn logs_failure_on_transport_error() {
        let capture = CaptureLayer::default();
        let _guard = tracing::subscriber::set_default(Registry::default().with(capture.clone()));

        let inner =
            tower::service_fn(|_req: Request| async { Err::<Response, _>(TransportDown) });
        let result = LoggingLayer::new().layer(inner).oneshot(request()).await;

        assert!(result.is_err());
        assert_eq!(classify(&capture.messages()), (1, 0, 1));
    }

    #[tokio::test]
    async fn logs_failure_on_error_status_and_returns_response() {
        let capture = CaptureLayer::default();
        let _guard = tracing::subscriber::set_default(Registry::default().with(capture.clone()));

        let inner = tower::service_fn(|_req: Request| async {
            Ok::<_, TransportDown>(respond_with(404))
        });
        let response = LoggingLayer::new()
            .layer(inner)
            .oneshot(request())
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 404);
        assert_eq!(classify(&capture.messages()), (1, 0, 1));
    }

    #[tokio::test]
    async fn elapsed_time_parses_as_non_negative_millis() {
        let capture = CaptureLayer::default();
        let _guard = tracing::subscriber::set_default(Registry::default().with(capture.clone()));

        let inner = tower::service_fn(|_req: Request| async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok::<_, TransportDown>(respond_with(201))
        });
        LoggingLayer::new()
            .layer(inner)
            .oneshot(request())
            .await
            .unwrap();

        let events = capture.messages();
        let last = &events.last().unwrap().1;
        let millis: u128 = last
            .rsplit(' ')
            .next()
            .and_then(|word| word.strip_suffix("ms"))
            .and_then(|digits| digits.parse().ok())
            .unwrap();
        assert!(millis >= 5);
    }

    #[tokio::test]
    async fn logs_failure_when_caller_drops_the_request() {
        let capture = CaptureLayer::default();
        let _guard = tracing::subscriber::set_default(Registry::default().with(capture.clone()));

        let inner = tower::service_fn(|_req: Request| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok::<_, TransportDown>(respond_with(200))
        });
        let outcome = tokio::time::timeout(
            Duration::from_millis(10),
            LoggingLayer::new().layer(inner).oneshot(request()),
        )
        .await;

        assert!(outcome.is_err());
        let events = capture.messages();
        assert_eq!(events.len(), 2);
        assert_eq!(classify(&events), (1, 0, 1));
    }

    #[tokio::test]
    async fn completion_is_logged_before_the_body_is_read() {
        let capture = CaptureLayer::default();
        let _guard = tracing::subscriber::set_default(Registry::default().with(capture.clone()));

        let inner = tower::service_fn(|_req: Request| async {
            Ok::<_, TransportDown>(respond_with(200))
        });
        let response = LoggingLayer::new()
            .layer(inner)
            .oneshot(request())
            .await
            .unwrap();

        assert_eq!(classify(&capture.messages()), (1, 1, 0));
        assert_eq!(response.text().await.unwrap(), "[]");
        assert_eq!(capture.messages().len(), 2);
    }
}
