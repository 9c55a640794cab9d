//! Resolution pipeline for address-or-name input fields.
//!
//! ```text
//! input ─► address literal? ─► yes: done
//!            │ no
//!            ▼
//!          contains '.'? ─► no: InvalidName
//!            │ yes
//!            ▼
//!          namehash(lowercase) ─► cache hit? ─► yes: done
//!            │ no
//!            ▼
//!          registry.owner(node) ─► null: UnresolvedName
//!            │ owner
//!            ▼
//!          cache.put, done
//! ```
//!
//! `queue_resolve` puts a debounce timer in front of the same pipeline.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};
use url::Url;

use ensfield_cache::ResolutionCache;
use ensfield_core::constants::{ENS_LABEL_SEPARATOR, ENS_OWNER_METHOD};
use ensfield_core::error::{ResolutionError, Result};
use ensfield_core::traits::ContractCallClient;
use ensfield_core::types::{Address, CacheKey, ContractCall, MethodSignature, Node};

use crate::config::ResolverConfig;
use crate::namehash::namehash;

/// Where a resolved address came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionSource {
    /// The input was already an address.
    Literal,
    /// Answered from the shared cache.
    Cache,
    /// Fetched from the registry contract.
    Network,
}

/// A successful resolution with its metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved address (never the null address)
    pub address: Address,
    /// Where the address came from
    pub source: ResolutionSource,
    /// Normalized name, `None` for address literals
    pub name: Option<String>,
    /// Namehash of `name`, `None` for address literals
    pub node: Option<Node>,
}

impl Resolution {
    /// Returns true if no registry call was needed.
    pub fn from_cache(&self) -> bool {
        self.source == ResolutionSource::Cache
    }
}

/// The stateless part of the coordinator, cheap to clone into timer tasks.
#[derive(Clone)]
struct Pipeline {
    config: Arc<ResolverConfig>,
    cache: Arc<ResolutionCache>,
    client: Arc<dyn ContractCallClient>,
}

impl Pipeline {
    fn cache_key(&self, node: Node) -> CacheKey {
        CacheKey::new(node, self.config.network)
    }

    async fn resolve(&self, input: &str) -> Result<Resolution> {
        if let Ok(address) = Address::parse_literal(input) {
            if address.is_zero() {
                return Err(ResolutionError::UnresolvedName {
                    name: input.to_string(),
                });
            }
            debug!("Input is an address literal");
            return Ok(Resolution {
                address,
                source: ResolutionSource::Literal,
                name: None,
                node: None,
            });
        }

        if !input.contains(ENS_LABEL_SEPARATOR) {
            return Err(ResolutionError::InvalidName {
                input: input.to_string(),
            });
        }

        let name = input.to_lowercase();
        let node = namehash(&name);
        let key = self.cache_key(node);

        if let Some(address) = self.cache.get(&key) {
            debug!(%name, "Cache hit");
            return Ok(Resolution {
                address,
                source: ResolutionSource::Cache,
                name: Some(name),
                node: Some(node),
            });
        }

        debug!(%name, %node, "Cache miss, querying registry");

        let call = self.build_call(node)?;
        let owner = match self.client.call_address(&call).await {
            Ok(owner) => owner,
            Err(source) => {
                warn!(%name, contract = %call.contract, error = %source, "Registry call failed");
                return Err(ResolutionError::ResolutionFailed {
                    name,
                    contract: call.contract,
                    source,
                });
            }
        };

        if owner.is_zero() {
            debug!(%name, "Registry returned the null address");
            return Err(ResolutionError::UnresolvedName { name });
        }

        self.cache.put(key, owner);
        info!(%name, address = %owner, network = %self.config.network, "Resolved ENS name");

        Ok(Resolution {
            address: owner,
            source: ResolutionSource::Network,
            name: Some(name),
            node: Some(node),
        })
    }

    /// Builds the `owner(bytes32)` call against the configured registry.
    fn build_call(&self, node: Node) -> Result<ContractCall> {
        let rpc_url = &self.config.rpc_url;
        let endpoint = Url::parse(rpc_url).map_err(|e| ResolutionError::TransportSetup {
            endpoint: rpc_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ResolutionError::TransportSetup {
                endpoint: rpc_url.clone(),
                reason: format!("unsupported scheme '{}'", endpoint.scheme()),
            });
        }

        let contract = self.config.registry_address;
        if contract.is_zero() {
            return Err(ResolutionError::ContractCallSetup {
                contract: contract.to_string(),
                reason: "registry address is the null address".into(),
            });
        }

        let method = MethodSignature::parse(ENS_OWNER_METHOD).map_err(|reason| {
            ResolutionError::ContractCallSetup {
                contract: contract.to_string(),
                reason,
            }
        })?;

        Ok(ContractCall {
            endpoint,
            contract,
            method,
            node,
        })
    }
}

/// Resolves address-or-name input, with an optional debounce in front.
///
/// Owns one [`ResolverConfig`] and at most one pending debounce timer. The
/// [`ResolutionCache`] is shared: hand the same `Arc` to every coordinator in
/// the process.
pub struct ResolutionCoordinator {
    pipeline: Pipeline,
    runtime: Option<Handle>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl ResolutionCoordinator {
    /// Creates a coordinator.
    ///
    /// Timers run on the Tokio runtime current at construction, if there is one.
    pub fn new(
        config: Arc<ResolverConfig>,
        cache: Arc<ResolutionCache>,
        client: Arc<dyn ContractCallClient>,
    ) -> Self {
        Self {
            pipeline: Pipeline {
                config,
                cache,
                client,
            },
            runtime: Handle::try_current().ok(),
            pending: Mutex::new(None),
        }
    }

    /// Runs debounce timers on `runtime`, so `queue_resolve` can be called
    /// from threads outside it.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.pipeline.config
    }

    /// Returns the shared cache.
    pub fn cache(&self) -> &Arc<ResolutionCache> {
        &self.pipeline.cache
    }

    /// Resolves `input` to an address.
    ///
    /// # Errors
    ///
    /// - [`ResolutionError::InvalidName`] if `input` is neither an address nor dotted
    /// - [`ResolutionError::TransportSetup`] / [`ResolutionError::ContractCallSetup`]
    ///   if the registry call cannot be built
    /// - [`ResolutionError::UnresolvedName`] if the registry has no owner
    /// - [`ResolutionError::ResolutionFailed`] if the call itself fails
    pub async fn resolve(&self, input: &str) -> Result<Address> {
        self.resolve_full(input).await.map(|r| r.address)
    }

    /// Resolves `input`, also reporting where the address came from.
    #[instrument(skip(self), fields(network = %self.pipeline.config.network))]
    pub async fn resolve_full(&self, input: &str) -> Result<Resolution> {
        self.pipeline.resolve(input).await
    }

    /// Debounced [`resolve`](Self::resolve).
    ///
    /// A cached name completes immediately, on the caller's thread. Otherwise
    /// any earlier timer that has not fired yet is cancelled and its callback
    /// dropped unused; after `delay`, `input` is resolved and the result passed
    /// to `on_complete`. A resolution that is already running is never
    /// cancelled and still fills the cache.
    ///
    /// Timers run on the runtime captured by [`new`](Self::new) or
    /// [`with_runtime`](Self::with_runtime), else on the caller's runtime. With
    /// neither, `on_complete` receives [`ResolutionError::TransportSetup`].
    pub fn queue_resolve<F>(&self, input: &str, delay: Duration, on_complete: F)
    where
        F: FnOnce(Result<Address>) + Send + 'static,
    {
        let key = self.pipeline.cache_key(namehash(&input.to_lowercase()));
        if let Some(address) = self.pipeline.cache.get(&key) {
            debug!(input, "Cache hit, skipping debounce");
            on_complete(Ok(address));
            return;
        }

        let Some(runtime) = self.runtime.clone().or_else(|| Handle::try_current().ok()) else {
            warn!(input, "No Tokio runtime to schedule resolution on");
            on_complete(Err(ResolutionError::TransportSetup {
                endpoint: self.pipeline.config.rpc_url.clone(),
                reason: "no Tokio runtime available".into(),
            }));
            return;
        };

        let pipeline = self.pipeline.clone();
        let input = input.to_string();

        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            if !previous.is_finished() {
                debug!("Superseding pending resolution");
            }
            previous.abort();
        }

        *pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // Detached so a later re-arm cannot abort the call.
            tokio::spawn(async move {
                let result = pipeline.resolve(&input).await.map(|r| r.address);
                on_complete(result);
            });
        }));
    }

    /// [`queue_resolve`](Self::queue_resolve) with the configured default delay.
    pub fn queue_resolve_default<F>(&self, input: &str, on_complete: F)
    where
        F: FnOnce(Result<Address>) + Send + 'static,
    {
        let delay = self.pipeline.config.debounce();
        self.queue_resolve(input, delay, on_complete);
    }

    /// Cancels the pending timer, if any. Returns true if one was still waiting.
    pub fn cancel_pending(&self) -> bool {
        match self.pending.lock().take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// Returns true if a debounce timer is armed and has not fired yet.
    pub fn has_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ResolutionCoordinator {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use ensfield_core::error::TransportError;
    use ensfield_core::types::NetworkId;
    use test_case::test_case;
    use tokio::sync::mpsc;
    use tokio::time::Instant;
    use tokio_test::assert_err;

    const OWNER: Address = Address::from_array([0xA1; 20]);

    struct MockClient {
        response: std::result::Result<Address, TransportError>,
        latency: Duration,
        calls: AtomicUsize,
        seen: Mutex<Vec<(ContractCall, Instant)>>,
    }

    impl MockClient {
        fn returning(address: Address) -> Arc<Self> {
            Self::with(Ok(address), Duration::ZERO)
        }

        fn failing(error: TransportError) -> Arc<Self> {
            Self::with(Err(error), Duration::ZERO)
        }

        fn with(
            response: std::result::Result<Address, TransportError>,
            latency: Duration,
        ) -> Arc<Self> {
            Arc::new(Self {
                response,
                latency,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContractCallClient for MockClient {
        async fn call_address(
            &self,
            call: &ContractCall,
        ) -> std::result::Result<Address, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().push((call.clone(), Instant::now()));
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            self.response.clone()
        }
    }

    fn config() -> ResolverConfig {
        ResolverConfig::new("http://localhost:8545")
    }

    fn coordinator(
        config: ResolverConfig,
        cache: &Arc<ResolutionCache>,
        client: &Arc<MockClient>,
    ) -> ResolutionCoordinator {
        ResolutionCoordinator::new(Arc::new(config), cache.clone(), client.clone())
    }

    fn fresh(client: &Arc<MockClient>) -> ResolutionCoordinator {
        coordinator(config(), &Arc::new(ResolutionCache::new()), client)
    }

    // ───────────────────────────────────────────────────────────────────────
    // resolve
    // ───────────────────────────────────────────────────────────────────────

    #[test_case("0xd8da6bf26964af9d7eed9e03e53415d37aa96045" ; "lowercase")]
    #[test_case("0xD8dA6BF26964aF9D7eEd9e03E53415D37aA96045" ; "checksummed")]
    #[tokio::test]
    async fn test_literal_address_skips_collaborator(input: &str) {
        let client = MockClient::returning(OWNER);
        let coordinator = fresh(&client);

        let resolution = coordinator.resolve_full(input).await.unwrap();

        assert_eq!(resolution.address, input.parse::<Address>().unwrap());
        assert_eq!(resolution.source, ResolutionSource::Literal);
        assert_eq!(client.calls(), 0);
        assert!(coordinator.cache().is_empty());
    }

    #[tokio::test]
    async fn test_null_literal_is_unresolved() {
        let client = MockClient::returning(OWNER);
        let coordinator = fresh(&client);

        let err = assert_err!(
            coordinator
                .resolve("0x0000000000000000000000000000000000000000")
                .await
        );
        assert!(matches!(err, ResolutionError::UnresolvedName { .. }));
        assert_eq!(client.calls(), 0);
    }

    #[test_case("alice" ; "bare label")]
    #[test_case("" ; "empty")]
    #[test_case("0x1234" ; "short hex")]
    #[tokio::test]
    async fn test_undotted_input_is_invalid(input: &str) {
        let client = MockClient::returning(OWNER);
        let coordinator = fresh(&client);

        let err = assert_err!(coordinator.resolve(input).await);
        assert!(matches!(err, ResolutionError::InvalidName { .. }));
        assert!(err.is_input_error());
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_resolve_builds_owner_call() {
        let client = MockClient::returning(OWNER);
        let coordinator = fresh(&client);

        let resolution = coordinator.resolve_full("Alice.ETH").await.unwrap();
        assert_eq!(resolution.address, OWNER);
        assert_eq!(resolution.source, ResolutionSource::Network);
        assert_eq!(resolution.name.as_deref(), Some("alice.eth"));
        assert_eq!(resolution.node, Some(namehash("alice.eth")));

        let seen = client.seen.lock();
        let (call, _) = &seen[0];
        assert_eq!(call.endpoint.as_str(), "http://localhost:8545/");
        assert_eq!(call.contract, coordinator.config().registry_address);
        assert_eq!(call.method.signature(), "owner(bytes32)");
        assert_eq!(call.node, namehash("alice.eth"));
    }

    #[tokio::test]
    async fn test_cache_shared_across_coordinators() {
        let client = MockClient::returning(OWNER);
        let cache = Arc::new(ResolutionCache::new());

        let first = coordinator(config(), &cache, &client);
        assert_eq!(first.resolve("alice.eth").await.unwrap(), OWNER);
        assert_eq!(client.calls(), 1);

        // Same coordinator, different case: cached.
        let again = first.resolve_full("ALICE.eth").await.unwrap();
        assert!(again.from_cache());
        assert_eq!(client.calls(), 1);

        // Fresh coordinator sharing the cache: cached.
        let second = coordinator(config(), &cache, &client);
        assert_eq!(second.resolve("alice.eth").await.unwrap(), OWNER);
        assert_eq!(client.calls(), 1);

        // Different network: not cached.
        let sepolia = coordinator(config().with_network(NetworkId::SEPOLIA), &cache, &client);
        assert_eq!(sepolia.resolve("alice.eth").await.unwrap(), OWNER);
        assert_eq!(client.calls(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_null_owner_is_not_cached() {
        let client = MockClient::returning(Address::ZERO);
        let coordinator = fresh(&client);

        let err = assert_err!(coordinator.resolve("nobody.eth").await);
        assert!(matches!(
            err,
            ResolutionError::UnresolvedName { ref name } if name == "nobody.eth"
        ));

        assert_err!(coordinator.resolve("nobody.eth").await);
        assert_eq!(client.calls(), 2);
        assert!(coordinator.cache().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_wraps_cause() {
        let client = MockClient::failing(TransportError::Http("connection refused".into()));
        let coordinator = fresh(&client);

        let err = assert_err!(coordinator.resolve("alice.eth").await);
        match &err {
            ResolutionError::ResolutionFailed {
                name,
                contract,
                source,
            } => {
                assert_eq!(name, "alice.eth");
                assert_eq!(*contract, coordinator.config().registry_address);
                assert_eq!(*source, TransportError::Http("connection refused".into()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_recoverable());
        assert!(coordinator.cache().is_empty());
    }

    #[test_case("not a url" ; "garbage")]
    #[test_case("ftp://rpc.example" ; "unsupported scheme")]
    #[test_case("ws://127.0.0.1:1" ; "websocket")]
    #[test_case("wss://rpc.example" ; "secure websocket")]
    #[tokio::test]
    async fn test_bad_endpoint_is_transport_setup_error(rpc_url: &str) {
        let client = MockClient::returning(OWNER);
        let coordinator = coordinator(
            ResolverConfig::new(rpc_url),
            &Arc::new(ResolutionCache::new()),
            &client,
        );

        let err = assert_err!(coordinator.resolve("alice.eth").await);
        assert!(matches!(
            err,
            ResolutionError::TransportSetup { ref endpoint, .. } if endpoint == rpc_url
        ));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_null_registry_is_contract_setup_error() {
        let client = MockClient::returning(OWNER);
        let coordinator = coordinator(
            config().with_registry(Address::ZERO),
            &Arc::new(ResolutionCache::new()),
            &client,
        );

        let err = assert_err!(coordinator.resolve("alice.eth").await);
        assert!(matches!(err, ResolutionError::ContractCallSetup { .. }));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_setup_errors_do_not_apply_to_cached_names() {
        let client = MockClient::returning(OWNER);
        let cache = Arc::new(ResolutionCache::new());
        cache.put(CacheKey::new(namehash("alice.eth"), NetworkId::MAINNET), OWNER);

        let coordinator = coordinator(ResolverConfig::new("not a url"), &cache, &client);
        assert_eq!(coordinator.resolve("alice.eth").await.unwrap(), OWNER);
    }

    // ───────────────────────────────────────────────────────────────────────
    // queue_resolve
    // ───────────────────────────────────────────────────────────────────────

    type Outcome = (usize, Result<Address>);

    fn recorder(
        tx: &mpsc::UnboundedSender<Outcome>,
        id: usize,
    ) -> impl FnOnce(Result<Address>) + Send + 'static {
        let tx = tx.clone();
        move |result| {
            let _ = tx.send((id, result));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_queue_debounces_to_last_call() {
        let client = MockClient::returning(OWNER);
        let coordinator = fresh(&client);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let delay = Duration::from_millis(500);
        let start = Instant::now();

        coordinator.queue_resolve("a.eth", delay, recorder(&tx, 1));
        tokio::time::sleep(Duration::from_millis(300)).await;
        coordinator.queue_resolve("al.eth", delay, recorder(&tx, 2));
        tokio::time::sleep(Duration::from_millis(300)).await;
        coordinator.queue_resolve("alice.eth", delay, recorder(&tx, 3));
        assert!(coordinator.has_pending());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(client.calls(), 0);

        let (id, result) = rx.recv().await.unwrap();
        assert_eq!(id, 3);
        assert_eq!(result.unwrap(), OWNER);
        assert_eq!(client.calls(), 1);

        let (call, at) = client.seen.lock()[0].clone();
        assert_eq!(call.node, namehash("alice.eth"));
        let waited = at.duration_since(start);
        assert!(waited >= Duration::from_millis(1100), "fired after {waited:?}");
        assert!(waited < Duration::from_millis(1150), "fired after {waited:?}");

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_queue_cached_bypasses_debounce() {
        let client = MockClient::returning(OWNER);
        let coordinator = fresh(&client);
        coordinator.resolve("alice.eth").await.unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel();
        coordinator.queue_resolve("Alice.eth", Duration::from_secs(10), recorder(&tx, 1));

        let (id, result) = rx.try_recv().unwrap();
        assert_eq!(id, 1);
        assert_eq!(result.unwrap(), OWNER);
        assert!(!coordinator.has_pending());
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_queue_delivers_errors_through_callback() {
        let client = MockClient::returning(OWNER);
        let coordinator = fresh(&client);
        let (tx, mut rx) = mpsc::unbounded_channel();

        coordinator.queue_resolve("alice", Duration::from_millis(100), recorder(&tx, 1));

        let (_, result) = rx.recv().await.unwrap();
        assert!(matches!(result, Err(ResolutionError::InvalidName { .. })));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_requeue_does_not_cancel_in_flight_call() {
        let client = MockClient::with(Ok(OWNER), Duration::from_secs(2));
        let coordinator = fresh(&client);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let delay = Duration::from_millis(100);

        coordinator.queue_resolve("alice.eth", delay, recorder(&tx, 1));
        // Timer fires at 100ms; the call is now in flight.
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(client.calls(), 1);

        coordinator.queue_resolve("bob.eth", delay, recorder(&tx, 2));

        let mut delivered = vec![rx.recv().await.unwrap().0, rx.recv().await.unwrap().0];
        delivered.sort_unstable();
        assert_eq!(delivered, vec![1, 2]);
        assert_eq!(client.calls(), 2);

        let alice = CacheKey::new(namehash("alice.eth"), NetworkId::MAINNET);
        assert_eq!(coordinator.cache().get(&alice), Some(OWNER));
    }

    #[tokio::test(start_paused = true)]
    async fn test_queue_default_uses_configured_delay() {
        let client = MockClient::returning(OWNER);
        let coordinator = coordinator(
            config().with_debounce(Duration::from_millis(250)),
            &Arc::new(ResolutionCache::new()),
            &client,
        );
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = Instant::now();

        coordinator.queue_resolve_default("alice.eth", recorder(&tx, 1));
        rx.recv().await.unwrap();

        let (_, at) = client.seen.lock()[0].clone();
        assert!(at.duration_since(start) >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_pending() {
        let client = MockClient::returning(OWNER);
        let coordinator = fresh(&client);
        let (tx, mut rx) = mpsc::unbounded_channel();

        assert!(!coordinator.cancel_pending());

        coordinator.queue_resolve("alice.eth", Duration::from_millis(500), recorder(&tx, 1));
        assert!(coordinator.cancel_pending());
        assert!(!coordinator.has_pending());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_timer() {
        let client = MockClient::returning(OWNER);
        let coordinator = fresh(&client);
        let (tx, mut rx) = mpsc::unbounded_channel();

        coordinator.queue_resolve("alice.eth", Duration::from_millis(500), recorder(&tx, 1));
        drop(coordinator);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(client.calls(), 0);
    }

    #[test]
    fn test_queue_from_thread_outside_runtime() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .unwrap();
        let client = MockClient::returning(OWNER);
        let coordinator = fresh(&client).with_runtime(runtime.handle().clone());
        let (tx, rx) = std::sync::mpsc::channel();

        coordinator.queue_resolve("alice.eth", Duration::from_millis(10), move |result| {
            let _ = tx.send(result);
        });

        let result = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(result.unwrap(), OWNER);
        assert_eq!(client.calls(), 1);
    }

    #[test]
    fn test_queue_without_runtime_reports_setup_error() {
        let client = MockClient::returning(OWNER);
        let coordinator = fresh(&client);
        let (tx, rx) = std::sync::mpsc::channel();

        coordinator.queue_resolve("alice.eth", Duration::from_millis(10), move |result| {
            let _ = tx.send(result);
        });

        let err = rx.try_recv().unwrap().unwrap_err();
        assert!(matches!(err, ResolutionError::TransportSetup { .. }));
        assert!(!coordinator.has_pending());
        assert_eq!(client.calls(), 0);
    }
}
