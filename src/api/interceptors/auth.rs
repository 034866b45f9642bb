use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Tower layer reserved for request authentication.
///
/// There is no credential source yet, so requests pass through exactly as
/// given and responses or errors come back untouched.
#[derive(Clone, Debug, Default)]
pub struct AuthLayer;

impl AuthLayer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService { inner }
    }
}

#[derive(Clone, Debug)]
pub struct AuthService<S> {
    inner: S,
}

impl<S, Request> Service<Request> for AuthService<S>
where
    S: Service<Request>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        self.inner.call(req)
    }
}
