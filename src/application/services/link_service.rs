//! Link lifecycle service: creation, redirect, stats, deletion and click history.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::click_recorder::ClickRecorder;
use crate::domain::entities::{ClickEvent, ClickMetadata, Link};
use crate::domain::repositories::{ClickRepository, LinkRepository, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, DEFAULT_CODE_LENGTH};
use crate::utils::url_validator::validate_url;

/// Attempts used when the configured maximum is zero.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Construction-time settings for [`LinkService`].
#[derive(Debug, Clone)]
pub struct LinkServiceConfig {
    /// Public base URL short links are built on, e.g. `https://snip.io`.
    /// A trailing slash is ignored.
    pub base_url: String,
    /// Length of generated codes; zero or less means the default of 7.
    pub code_length: i64,
    /// How many codes to try before giving up on a collision streak.
    pub max_attempts: usize,
}

impl Default for LinkServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            code_length: DEFAULT_CODE_LENGTH as i64,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Result of a successful link creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}

/// Analytics snapshot for a single link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStats {
    pub short_code: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkStats {
    fn from(link: Link) -> Self {
        Self {
            short_code: link.short_code,
            original_url: link.original_url,
            click_count: link.click_count,
            created_at: link.created_at,
        }
    }
}

/// Recorded clicks of a link, most recent first.
///
/// `history_supported` is `false` when the click store keeps counts only; the
/// list is then always empty.
#[derive(Debug, Clone)]
pub struct ClickHistory {
    pub short_code: String,
    pub history_supported: bool,
    pub clicks: Vec<ClickEvent>,
}

/// Service for creating, resolving and managing shortened links.
///
/// Holds no link state of its own: every call reads fresh from the stores and
/// drops its working copy afterwards. Storage backends are injected as trait
/// objects, chosen once at startup.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
    recorder: ClickRecorder,
    generator: CodeGenerator,
    base_url: String,
    max_attempts: usize,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        links: Arc<dyn LinkRepository>,
        clicks: Arc<dyn ClickRepository>,
        config: LinkServiceConfig,
    ) -> Self {
        let max_attempts = if config.max_attempts == 0 {
            DEFAULT_MAX_ATTEMPTS
        } else {
            config.max_attempts
        };

        Self {
            recorder: ClickRecorder::new(links.clone(), clicks.clone()),
            links,
            clicks,
            generator: CodeGenerator::new(config.code_length),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_attempts,
        }
    }

    /// Shortens `original_url`.
    ///
    /// # Code Generation
    ///
    /// Generates a random code and stores it with an atomic conditional
    /// create. A collision moves on to a fresh code; up to `max_attempts`
    /// codes are tried.
    ///
    /// # Errors
    ///
    /// - [`AppError::EmptyUrl`] for blank input
    /// - [`AppError::InvalidUrl`] unless the URL is absolute HTTP(S) with a host
    /// - [`AppError::CodeGenerationExhausted`] when every attempt collided
    /// - [`AppError::Internal`] on random source or storage failures, without retrying
    pub async fn create_link(&self, original_url: &str) -> Result<CreatedLink, AppError> {
        validate_url(original_url)?;

        for attempt in 1..=self.max_attempts {
            let code = self
                .generator
                .generate()
                .map_err(|e| AppError::internal("generating short code", e))?;

            match self.links.create(Link::new(code.clone(), original_url)).await {
                Ok(()) => {
                    info!(code = %code, attempt, "Link created");
                    return Ok(CreatedLink {
                        short_url: self.short_url(&code),
                        short_code: code,
                        original_url: original_url.to_string(),
                    });
                }
                Err(StoreError::AlreadyExists) => {
                    debug!(code = %code, attempt, "Short code collision, retrying");
                    metrics::counter!("snip_code_collisions_total").increment(1);
                }
                Err(e) => return Err(AppError::internal("creating link", e)),
            }
        }

        warn!(attempts = self.max_attempts, "Gave up generating a unique short code");
        Err(AppError::CodeGenerationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves a short code to its original URL and schedules click recording.
    ///
    /// The counter increment and the click event are written by a detached
    /// task; this method returns as soon as the link has been read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LinkNotFound`] if the code is unknown.
    pub async fn redirect(&self, code: &str, metadata: ClickMetadata) -> Result<String, AppError> {
        let link = self
            .links
            .get_by_code(code)
            .await
            .map_err(lookup_error("fetching link"))?;

        self.recorder.spawn(link.short_code, metadata);

        Ok(link.original_url)
    }

    /// Returns click count and metadata for a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LinkNotFound`] if the code is unknown.
    pub async fn get_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        self.links
            .get_by_code(code)
            .await
            .map(LinkStats::from)
            .map_err(lookup_error("fetching link"))
    }

    /// Returns up to `limit` recorded clicks of a link, most recent first.
    ///
    /// A `limit` of zero or less returns every recorded click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LinkNotFound`] if the code is unknown.
    pub async fn list_clicks(&self, code: &str, limit: i64) -> Result<ClickHistory, AppError> {
        let link = self
            .links
            .get_by_code(code)
            .await
            .map_err(lookup_error("fetching link"))?;

        let clicks = self
            .clicks
            .list_by_link(link.id(), limit)
            .await
            .map_err(|e| AppError::internal("listing clicks", e))?;

        Ok(ClickHistory {
            short_code: link.short_code,
            history_supported: self.clicks.supports_history(),
            clicks,
        })
    }

    /// Deletes a link together with its click history.
    ///
    /// History goes first so a failure leaves the link in place and the call
    /// can be repeated. Once deleted, the code may be handed out again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LinkNotFound`] if the code is unknown.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        self.clicks
            .purge_link(code)
            .await
            .map_err(|e| AppError::internal("purging click history", e))?;

        self.links
            .delete(code)
            .await
            .map_err(lookup_error("deleting link"))?;

        info!(code = %code, "Link deleted");
        Ok(())
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Generator used for new codes, exposed for capacity reporting.
    pub fn generator(&self) -> &CodeGenerator {
        &self.generator
    }

    /// Name of the configured link store.
    pub fn storage_backend(&self) -> &'static str {
        self.links.backend_name()
    }

    /// Checks that the link store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend does not answer.
    pub async fn ping_storage(&self) -> Result<(), AppError> {
        self.links
            .ping()
            .await
            .map_err(|e| AppError::internal("pinging storage", e))
    }
}

/// Maps a lookup failure, keeping "not found" distinct from storage faults.
fn lookup_error(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |err| match err {
        StoreError::NotFound => AppError::LinkNotFound,
        other => AppError::internal(context, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockClickRepository, MockLinkRepository};
    use crate::infrastructure::persistence::{
        InMemoryClickRepository, InMemoryLinkRepository, NullClickRepository,
    };
    use crate::utils::code_generator::ALPHABET;
    use chrono::Utc;
    use mockall::Sequence;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::time::Duration;

    fn memory_service(config: LinkServiceConfig) -> LinkService {
        LinkService::new(
            Arc::new(InMemoryLinkRepository::new()),
            Arc::new(InMemoryClickRepository::new()),
            config,
        )
    }

    fn mock_service(links: MockLinkRepository, clicks: MockClickRepository) -> LinkService {
        LinkService::new(Arc::new(links), Arc::new(clicks), LinkServiceConfig::default())
    }

    async fn wait_for_clicks(service: &LinkService, code: &str, expected: i64) -> i64 {
        for _ in 0..200 {
            let count = service.get_stats(code).await.unwrap().click_count;
            if count >= expected {
                return count;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        service.get_stats(code).await.unwrap().click_count
    }

    /// In-memory link store whose counter increments stall for `delay`.
    struct SlowIncrementRepository {
        inner: InMemoryLinkRepository,
        delay: Duration,
    }

    #[async_trait::async_trait]
    impl LinkRepository for SlowIncrementRepository {
        async fn create(&self, link: Link) -> Result<(), StoreError> {
            self.inner.create(link).await
        }

        async fn get_by_code(&self, code: &str) -> Result<Link, StoreError> {
            self.inner.get_by_code(code).await
        }

        async fn increment_click_count(&self, code: &str) -> Result<(), StoreError> {
            tokio::time::sleep(self.delay).await;
            self.inner.increment_click_count(code).await
        }

        async fn delete(&self, code: &str) -> Result<(), StoreError> {
            self.inner.delete(code).await
        }

        async fn ping(&self) -> Result<(), StoreError> {
            self.inner.ping().await
        }

        fn backend_name(&self) -> &'static str {
            "slow"
        }
    }

    fn slow_increment_service(delay: Duration) -> LinkService {
        LinkService::new(
            Arc::new(SlowIncrementRepository {
                inner: InMemoryLinkRepository::new(),
                delay,
            }),
            Arc::new(InMemoryClickRepository::new()),
            LinkServiceConfig::default(),
        )
    }

    fn io_error(message: &str) -> StoreError {
        StoreError::backend("test backend", std::io::Error::other(message.to_string()))
    }

    #[tokio::test]
    async fn test_create_link_success() {
        let service = memory_service(LinkServiceConfig::default());

        let created = service.create_link("https://example.com").await.unwrap();

        assert_eq!(created.short_code.len(), DEFAULT_CODE_LENGTH);
        assert!(created.short_code.bytes().all(|b| ALPHABET.contains(&b)));
        assert!(created.short_url.contains(&created.short_code));
        assert_eq!(
            created.short_url,
            format!("http://localhost:8080/{}", created.short_code)
        );
        assert_eq!(created.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_create_link_empty_url() {
        let service = memory_service(LinkServiceConfig::default());

        assert!(matches!(
            service.create_link("").await,
            Err(AppError::EmptyUrl)
        ));
        assert!(matches!(
            service.create_link("   ").await,
            Err(AppError::EmptyUrl)
        ));
    }

    #[tokio::test]
    async fn test_create_link_invalid_url() {
        let service = memory_service(LinkServiceConfig::default());

        for url in ["example.com", "ftp://example.com", "https://", "not a url"] {
            let result = service.create_link(url).await;
            assert!(
                matches!(result, Err(AppError::InvalidUrl(_))),
                "{url} should be invalid"
            );
        }
    }

    #[tokio::test]
    async fn test_create_link_does_not_touch_storage_on_invalid_url() {
        let mut links = MockLinkRepository::new();
        links.expect_create().times(0);

        let service = mock_service(links, MockClickRepository::new());

        assert!(service.create_link("ftp://example.com").await.is_err());
    }

    #[tokio::test]
    async fn test_create_link_trims_trailing_slash_from_base_url() {
        let service = memory_service(LinkServiceConfig {
            base_url: "https://snip.io/".to_string(),
            ..LinkServiceConfig::default()
        });

        let created = service.create_link("https://example.com").await.unwrap();

        assert_eq!(
            created.short_url,
            format!("https://snip.io/{}", created.short_code)
        );
        assert!(!created.short_url["https://".len()..].contains("//"));
    }

    #[tokio::test]
    async fn test_create_link_honours_code_length() {
        let service = memory_service(LinkServiceConfig {
            code_length: 12,
            ..LinkServiceConfig::default()
        });

        let created = service.create_link("https://example.com").await.unwrap();
        assert_eq!(created.short_code.len(), 12);
        assert_eq!(service.generator().length(), 12);

        let service = memory_service(LinkServiceConfig {
            code_length: -3,
            ..LinkServiceConfig::default()
        });
        assert_eq!(service.generator().length(), DEFAULT_CODE_LENGTH);
    }

    #[tokio::test]
    async fn test_create_link_retries_on_collision() {
        let mut links = MockLinkRepository::new();
        let mut seq = Sequence::new();
        let tried = Arc::new(Mutex::new(Vec::new()));

        let tried_clone = tried.clone();
        links
            .expect_create()
            .times(2)
            .in_sequence(&mut seq)
            .returning(move |link| {
                tried_clone.lock().unwrap().push(link.short_code);
                Err(StoreError::AlreadyExists)
            });

        let tried_clone = tried.clone();
        links
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |link| {
                tried_clone.lock().unwrap().push(link.short_code);
                Ok(())
            });

        let service = mock_service(links, MockClickRepository::new());

        let created = service.create_link("https://example.com").await.unwrap();

        let tried = tried.lock().unwrap();
        assert_eq!(tried.len(), 3);
        assert_eq!(tried.last(), Some(&created.short_code));
    }

    #[tokio::test]
    async fn test_create_link_exhausts_attempts() {
        let mut links = MockLinkRepository::new();
        links
            .expect_create()
            .times(DEFAULT_MAX_ATTEMPTS)
            .returning(|_| Err(StoreError::AlreadyExists));

        let service = mock_service(links, MockClickRepository::new());

        let result = service.create_link("https://example.com").await;

        assert!(matches!(
            result,
            Err(AppError::CodeGenerationExhausted { attempts: 5 })
        ));
    }

    #[tokio::test]
    async fn test_create_link_respects_configured_attempts() {
        let mut links = MockLinkRepository::new();
        links
            .expect_create()
            .times(2)
            .returning(|_| Err(StoreError::AlreadyExists));

        let service = LinkService::new(
            Arc::new(links),
            Arc::new(MockClickRepository::new()),
            LinkServiceConfig {
                max_attempts: 2,
                ..LinkServiceConfig::default()
            },
        );

        assert!(matches!(
            service.create_link("https://example.com").await,
            Err(AppError::CodeGenerationExhausted { attempts: 2 })
        ));
    }

    #[tokio::test]
    async fn test_create_link_storage_fault_is_not_retried() {
        let mut links = MockLinkRepository::new();
        links
            .expect_create()
            .times(1)
            .returning(|_| Err(io_error("connection refused")));

        let service = mock_service(links, MockClickRepository::new());

        let result = service.create_link("https://example.com").await;

        match result {
            Err(AppError::Internal { context, .. }) => assert_eq!(context, "creating link"),
            other => panic!("expected internal error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_redirect_returns_original_url() {
        let service = memory_service(LinkServiceConfig::default());
        let url = "https://example.com/some/path?q=1";

        let created = service.create_link(url).await.unwrap();
        let resolved = service
            .redirect(&created.short_code, ClickMetadata::default())
            .await
            .unwrap();

        assert_eq!(resolved, url);
    }

    #[tokio::test]
    async fn test_redirect_not_found() {
        let service = memory_service(LinkServiceConfig::default());

        let result = service
            .redirect("nonexistent-code", ClickMetadata::default())
            .await;

        assert!(matches!(result, Err(AppError::LinkNotFound)));
    }

    #[tokio::test]
    async fn test_redirect_lookup_fault_is_internal() {
        let mut links = MockLinkRepository::new();
        links
            .expect_get_by_code()
            .times(1)
            .returning(|_| Err(io_error("timeout")));
        links.expect_increment_click_count().times(0);

        let service = mock_service(links, MockClickRepository::new());

        let result = service.redirect("abc2345", ClickMetadata::default()).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_redirect_counts_click_eventually() {
        let service = memory_service(LinkServiceConfig::default());
        let created = service.create_link("https://example.com").await.unwrap();

        assert_eq!(
            service.get_stats(&created.short_code).await.unwrap().click_count,
            0
        );

        service
            .redirect(&created.short_code, ClickMetadata::default())
            .await
            .unwrap();

        assert_eq!(wait_for_clicks(&service, &created.short_code, 1).await, 1);
    }

    #[tokio::test]
    async fn test_redirect_does_not_wait_for_slow_increment() {
        let service = slow_increment_service(Duration::from_millis(500));
        let created = service.create_link("https://example.com").await.unwrap();

        let started = std::time::Instant::now();
        let url = service
            .redirect(&created.short_code, ClickMetadata::default())
            .await
            .unwrap();
        let elapsed = started.elapsed();

        assert_eq!(url, "https://example.com");
        assert!(elapsed < Duration::from_millis(200), "redirect took {elapsed:?}");
        assert_eq!(
            service.get_stats(&created.short_code).await.unwrap().click_count,
            0
        );
        assert_eq!(wait_for_clicks(&service, &created.short_code, 1).await, 1);
    }

    #[tokio::test]
    async fn test_click_survives_cancelled_caller() {
        let service = Arc::new(slow_increment_service(Duration::from_millis(100)));
        let created = service.create_link("https://example.com").await.unwrap();

        let (redirected_tx, redirected_rx) = tokio::sync::oneshot::channel();
        let caller = {
            let service = service.clone();
            let code = created.short_code.clone();
            tokio::spawn(async move {
                let result = service.redirect(&code, ClickMetadata::default()).await;
                let _ = redirected_tx.send(result);
                // Stand-in for a client that hangs around until it is dropped.
                std::future::pending::<()>().await;
            })
        };

        let url = redirected_rx.await.unwrap().unwrap();
        assert_eq!(url, "https://example.com");
        caller.abort();
        assert!(caller.await.unwrap_err().is_cancelled());

        assert_eq!(wait_for_clicks(&service, &created.short_code, 1).await, 1);
    }

    #[tokio::test]
    async fn test_redirect_records_click_event_with_metadata() {
        let service = memory_service(LinkServiceConfig::default());
        let created = service.create_link("https://example.com").await.unwrap();

        let metadata = ClickMetadata::new(
            Some("https://news.ycombinator.com"),
            Some("curl/8.0"),
            Some("203.0.113.7".to_string()),
        );
        service
            .redirect(&created.short_code, metadata)
            .await
            .unwrap();
        wait_for_clicks(&service, &created.short_code, 1).await;

        let mut history = service.list_clicks(&created.short_code, 0).await.unwrap();
        for _ in 0..100 {
            if !history.clicks.is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
            history = service.list_clicks(&created.short_code, 0).await.unwrap();
        }

        assert!(history.history_supported);
        assert_eq!(history.clicks.len(), 1);
        let click = &history.clicks[0];
        assert_eq!(click.link_id, created.short_code);
        assert_eq!(click.referrer, "https://news.ycombinator.com");
        assert_eq!(click.user_agent, "curl/8.0");
        assert_eq!(click.ip_address, "203.0.113.7");
        assert!(click.clicked_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_get_stats() {
        let service = memory_service(LinkServiceConfig::default());
        let before = Utc::now();
        let created = service.create_link("https://example.com").await.unwrap();

        let stats = service.get_stats(&created.short_code).await.unwrap();

        assert_eq!(stats.short_code, created.short_code);
        assert_eq!(stats.original_url, "https://example.com");
        assert_eq!(stats.click_count, 0);
        assert!(stats.created_at >= before);
    }

    #[tokio::test]
    async fn test_get_stats_not_found() {
        let service = memory_service(LinkServiceConfig::default());

        assert!(matches!(
            service.get_stats("missing").await,
            Err(AppError::LinkNotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_link() {
        let service = memory_service(LinkServiceConfig::default());
        let created = service.create_link("https://example.com").await.unwrap();

        service.delete_link(&created.short_code).await.unwrap();

        assert!(matches!(
            service.get_stats(&created.short_code).await,
            Err(AppError::LinkNotFound)
        ));
        assert!(matches!(
            service.delete_link(&created.short_code).await,
            Err(AppError::LinkNotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_link_not_found() {
        let service = memory_service(LinkServiceConfig::default());

        assert!(matches!(
            service.delete_link("missing").await,
            Err(AppError::LinkNotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_link_purges_history_first() {
        let mut links = MockLinkRepository::new();
        let mut clicks = MockClickRepository::new();
        let mut seq = Sequence::new();

        clicks
            .expect_purge_link()
            .withf(|id| id == "abc2345")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        links
            .expect_delete()
            .withf(|code| code == "abc2345")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = mock_service(links, clicks);

        service.delete_link("abc2345").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_link_keeps_link_when_purge_fails() {
        let mut links = MockLinkRepository::new();
        let mut clicks = MockClickRepository::new();

        clicks
            .expect_purge_link()
            .times(1)
            .returning(|_| Err(io_error("read-only replica")));
        links.expect_delete().times(0);

        let service = mock_service(links, clicks);

        assert!(matches!(
            service.delete_link("abc2345").await,
            Err(AppError::Internal { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_clicks_without_history_support() {
        let service = LinkService::new(
            Arc::new(InMemoryLinkRepository::new()),
            Arc::new(NullClickRepository::new()),
            LinkServiceConfig::default(),
        );
        let created = service.create_link("https://example.com").await.unwrap();

        service
            .redirect(&created.short_code, ClickMetadata::default())
            .await
            .unwrap();
        assert_eq!(wait_for_clicks(&service, &created.short_code, 1).await, 1);

        let history = service.list_clicks(&created.short_code, 10).await.unwrap();
        assert!(!history.history_supported);
        assert!(history.clicks.is_empty());
    }

    #[tokio::test]
    async fn test_list_clicks_not_found() {
        let service = memory_service(LinkServiceConfig::default());

        assert!(matches!(
            service.list_clicks("missing", 10).await,
            Err(AppError::LinkNotFound)
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_never_share_a_code() {
        // Two-character codes make collisions frequent enough to exercise retries.
        let service = Arc::new(memory_service(LinkServiceConfig {
            code_length: 2,
            max_attempts: 50,
            ..LinkServiceConfig::default()
        }));

        let mut handles = Vec::new();
        for i in 0..200 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .create_link(&format!("https://example.com/{i}"))
                    .await
            }));
        }

        let mut codes = HashSet::new();
        for handle in handles {
            let created = handle.await.unwrap().unwrap();
            assert!(codes.insert(created.short_code), "duplicate live code");
        }

        assert_eq!(codes.len(), 200);
        for code in &codes {
            service.get_stats(code).await.unwrap();
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_redirects_accumulate_clicks() {
        let service = Arc::new(memory_service(LinkServiceConfig::default()));
        let created = service.create_link("https://example.com").await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..100 {
            let service = service.clone();
            let code = created.short_code.clone();
            handles.push(tokio::spawn(async move {
                service.redirect(&code, ClickMetadata::default()).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(wait_for_clicks(&service, &created.short_code, 100).await, 100);
    }
}
