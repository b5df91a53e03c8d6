//! DNS-caching transport — the connection layer under `IitraderHttp`.
//!
//! The service sits on a small set of long-lived addresses, so the
//! transport keeps connections warm instead of cycling them: idle eviction
//! is disabled, TCP keepalive probes hold the path open, and DNS answers
//! are cached with an hourly background refresh. On connect, the pool
//! walks the cached address list in order until one address accepts.

use async_lock::RwLock;
use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Dial timeout for a single connection attempt.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// TCP keepalive probe interval for pooled connections.
const TCP_KEEPALIVE: Duration = Duration::from_secs(30);

/// Idle connections kept per host. The client talks to a single origin,
/// so this is also the effective total.
const MAX_IDLE_PER_HOST: usize = 50;

/// How often cached DNS entries are re-resolved.
const DNS_REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// HTTP transport with a hostname→address cache shared between the
/// connection pool and a background refresh task.
///
/// Cloning shares the pool, the cache, and the refresh task; the task is
/// aborted when the last clone drops. Construction must happen inside a
/// Tokio runtime.
#[derive(Clone, Debug)]
pub struct Transport {
    client: reqwest::Client,
    _refresh: Arc<RefreshGuard>,
}

impl Transport {
    pub fn new() -> Self {
        let resolver = CachingResolver::default();

        let refresh = tokio::spawn({
            let resolver = resolver.clone();
            async move {
                let mut tick = tokio::time::interval(DNS_REFRESH_INTERVAL);
                // The first tick fires immediately; cached entries are
                // fresh at that point, so skip it.
                tick.tick().await;
                loop {
                    tick.tick().await;
                    resolver.refresh().await;
                }
            }
        });

        let client = reqwest::Client::builder()
            .dns_resolver(Arc::new(resolver))
            .connect_timeout(CONNECT_TIMEOUT)
            .tcp_keepalive(TCP_KEEPALIVE)
            .pool_max_idle_per_host(MAX_IDLE_PER_HOST)
            .pool_idle_timeout(None)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            _refresh: Arc::new(RefreshGuard(refresh)),
        }
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

/// Aborts the refresh task when the last `Transport` clone drops.
#[derive(Debug)]
struct RefreshGuard(JoinHandle<()>);

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// `reqwest` DNS hook that caches resolved addresses per hostname.
///
/// Addresses are cached with port 0; the connector rewrites the port per
/// request. Literal-IP hosts never reach the resolver.
#[derive(Clone, Default)]
struct CachingResolver {
    cache: Arc<RwLock<HashMap<String, Vec<SocketAddr>>>>,
}

impl CachingResolver {
    /// Cached addresses for `host`, resolving and caching on first use.
    async fn lookup(&self, host: &str) -> std::io::Result<Vec<SocketAddr>> {
        if let Some(addrs) = self.cache.read().await.get(host) {
            return Ok(addrs.clone());
        }
        let addrs = resolve_host(host).await?;
        self.cache
            .write()
            .await
            .insert(host.to_string(), addrs.clone());
        Ok(addrs)
    }

    /// Re-resolve every cached hostname. A host that fails to resolve
    /// keeps its previous addresses.
    async fn refresh(&self) {
        let hosts: Vec<String> = self.cache.read().await.keys().cloned().collect();
        for host in hosts {
            match resolve_host(&host).await {
                Ok(addrs) => {
                    tracing::debug!(host = %host, count = addrs.len(), "Refreshed DNS entry");
                    self.cache.write().await.insert(host, addrs);
                }
                Err(e) => {
                    tracing::warn!(host = %host, error = %e, "DNS refresh failed, keeping cached addresses");
                }
            }
        }
    }
}

impl Resolve for CachingResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = self.clone();
        Box::pin(async move {
            let addrs = resolver.lookup(name.as_str()).await?;
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}

async fn resolve_host(host: &str) -> std::io::Result<Vec<SocketAddr>> {
    let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host, 0)).await?.collect();
    if addrs.is_empty() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no addresses for {}", host),
        ));
    }
    Ok(addrs)
}
