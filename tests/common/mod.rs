#![allow(dead_code)]

use axum::Router;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use snip::application::{LinkService, LinkServiceConfig};
use snip::domain::repositories::{ClickRepository, LinkRepository};
use snip::infrastructure::persistence::{
    InMemoryClickRepository, InMemoryLinkRepository, NullClickRepository,
};
use snip::routes::router;
use snip::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;

pub const BASE_URL: &str = "https://snip.test";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn peer_addr() -> SocketAddr {
    "127.0.0.1:12345".parse().unwrap()
}

pub fn create_state_with(
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
) -> AppState {
    let config = LinkServiceConfig {
        base_url: BASE_URL.to_string(),
        ..LinkServiceConfig::default()
    };

    AppState::new(Arc::new(LinkService::new(links, clicks, config)))
}

pub fn create_test_state() -> AppState {
    create_state_with(
        Arc::new(InMemoryLinkRepository::new()),
        Arc::new(InMemoryClickRepository::new()),
    )
}

pub fn create_state_without_history() -> AppState {
    create_state_with(
        Arc::new(InMemoryLinkRepository::new()),
        Arc::new(NullClickRepository::new()),
    )
}

/// Full application router with a fixed peer address.
pub fn test_server(state: AppState) -> TestServer {
    test_server_with_timeout(state, REQUEST_TIMEOUT)
}

pub fn test_server_with_timeout(state: AppState, request_timeout: Duration) -> TestServer {
    let app: Router = router(state, request_timeout).layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}

/// Creates a link through the service and returns its code.
pub async fn create_test_link(state: &AppState, url: &str) -> String {
    state.link_service.create_link(url).await.unwrap().short_code
}

/// Polls stats until the detached click recording catches up.
pub async fn wait_for_click_count(state: &AppState, code: &str, expected: i64) {
    for _ in 0..200 {
        let stats = state.link_service.get_stats(code).await.unwrap();
        if stats.click_count >= expected {
            assert_eq!(stats.click_count, expected);
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("click count for {code} never reached {expected}");
}

/// Polls click history until `expected` events are stored.
pub async fn wait_for_history(state: &AppState, code: &str, expected: usize) {
    for _ in 0..200 {
        let history = state.link_service.list_clicks(code, 0).await.unwrap();
        if history.clicks.len() >= expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("click history for {code} never reached {expected} events");
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        req.extensions_mut().insert(ConnectInfo(peer_addr()));
        self.inner.call(req)
    }
}
