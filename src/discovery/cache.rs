//! Lazy, process-wide cache of service channels.

use crate::discovery::ServiceRegistry;
use crate::rpc::{Channel, Connector};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiscoveryError {
    #[error("service {service} unavailable: {reason}")]
    ServiceUnavailable { service: String, reason: String },
}

impl DiscoveryError {
    fn unavailable(service: &str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        warn!(service, %reason, "Service unavailable");
        DiscoveryError::ServiceUnavailable {
            service: service.to_string(),
            reason,
        }
    }
}

/// Maps a logical service name to an open [`Channel`].
///
/// The first `resolve` for a name asks the registry for healthy instances, connects to
/// the first one and keeps the channel. Later calls return the stored channel without
/// touching the registry. Channels are never revalidated or evicted; a dead peer shows
/// up as a failed call on the channel.
///
/// Build one per process (or per component that needs its own view) and share it by
/// reference.
pub struct ConnectionCache {
    registry: Arc<dyn ServiceRegistry>,
    connector: Arc<dyn Connector>,
    channels: Mutex<HashMap<String, Channel>>,
}

impl ConnectionCache {
    pub fn new(registry: Arc<dyn ServiceRegistry>, connector: Arc<dyn Connector>) -> Self {
        Self {
            registry,
            connector,
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the channel for `service`, connecting on first use.
    ///
    /// The whole check-else-connect-and-store sequence runs under one lock, so
    /// concurrent callers racing on the same uncached name open exactly one channel.
    #[instrument(skip(self))]
    pub async fn resolve(&self, service: &str) -> Result<Channel, DiscoveryError> {
        let mut channels = self.channels.lock().await;
        if let Some(channel) = channels.get(service) {
            debug!(address = channel.target(), "Using cached channel");
            return Ok(channel.clone());
        }

        let instances = self
            .registry
            .healthy_instances(service)
            .await
            .map_err(|e| DiscoveryError::unavailable(service, e.to_string()))?;
        let instance = instances
            .into_iter()
            .next()
            .ok_or_else(|| DiscoveryError::unavailable(service, "no healthy instances"))?;

        info!(address = %instance.endpoint(), "Connecting to service");
        let channel = self
            .connector
            .connect(&instance)
            .await
            .map_err(|e| DiscoveryError::unavailable(service, e.to_string()))?;

        channels.insert(service.to_string(), channel.clone());
        Ok(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{InMemoryRegistry, RegistryError, ServiceInstance};
    use crate::rpc::TransportError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::mpsc;

    /// Hands out channels to nowhere and counts how many it opened.
    #[derive(Default)]
    struct CountingConnector {
        opened: AtomicUsize,
    }

    #[async_trait]
    impl Connector for CountingConnector {
        async fn connect(&self, instance: &ServiceInstance) -> Result<Channel, TransportError> {
            self.opened.fetch_add(1, Ordering::SeqCst);
            // Widen the race window between concurrent resolvers
            tokio::time::sleep(Duration::from_millis(5)).await;
            let (sender, _receiver) = mpsc::channel(1);
            Ok(Channel::new(
                instance.endpoint(),
                sender,
                Duration::from_secs(1),
            ))
        }
    }

    /// Counts lookups and delegates to an in-memory registry.
    struct CountingRegistry {
        inner: InMemoryRegistry,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl ServiceRegistry for CountingRegistry {
        async fn healthy_instances(
            &self,
            service: &str,
        ) -> Result<Vec<ServiceInstance>, RegistryError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.healthy_instances(service).await
        }
    }

    struct UnreachableRegistry;

    #[async_trait]
    impl ServiceRegistry for UnreachableRegistry {
        async fn healthy_instances(
            &self,
            _service: &str,
        ) -> Result<Vec<ServiceInstance>, RegistryError> {
            Err(RegistryError::Unreachable("connection reset".into()))
        }
    }

    async fn registry_with(instances: &[(&str, &str, u16)]) -> Arc<CountingRegistry> {
        let inner = InMemoryRegistry::new();
        for (service, address, port) in instances {
            inner
                .register(ServiceInstance::new(*service, *address, *port))
                .await;
        }
        Arc::new(CountingRegistry {
            inner,
            lookups: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn test_first_healthy_instance_is_chosen() {
        let registry = registry_with(&[
            ("menu-service", "10.0.0.1", 1),
            ("menu-service", "10.0.0.2", 2),
        ])
        .await;
        registry
            .inner
            .set_health("menu-service", "10.0.0.1", 1, false)
            .await
            .unwrap();
        let cache = ConnectionCache::new(registry, Arc::new(CountingConnector::default()));

        let channel = cache.resolve("menu-service").await.unwrap();
        assert_eq!(channel.target(), "10.0.0.2:2");
    }

    #[tokio::test]
    async fn test_cache_hit_skips_registry() {
        let registry = registry_with(&[("user-service", "10.0.0.1", 1)]).await;
        let connector = Arc::new(CountingConnector::default());
        let cache = ConnectionCache::new(registry.clone(), connector.clone());

        cache.resolve("user-service").await.unwrap();
        cache.resolve("user-service").await.unwrap();
        cache.resolve("user-service").await.unwrap();

        assert_eq!(registry.lookups.load(Ordering::SeqCst), 1);
        assert_eq!(connector.opened.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_resolves_open_one_channel_per_name() {
        let registry = registry_with(&[
            ("user-service", "10.0.0.1", 1),
            ("menu-service", "10.0.0.2", 2),
        ])
        .await;
        let connector = Arc::new(CountingConnector::default());
        let cache = Arc::new(ConnectionCache::new(registry, connector.clone()));

        let mut handles = Vec::new();
        for i in 0..16 {
            let cache = cache.clone();
            let name = if i % 2 == 0 { "user-service" } else { "menu-service" };
            handles.push(tokio::spawn(async move { cache.resolve(name).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(connector.opened.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_no_healthy_instance_is_unavailable() {
        let registry = registry_with(&[]).await;
        let cache = ConnectionCache::new(registry, Arc::new(CountingConnector::default()));

        let err = cache.resolve("user-service").await.unwrap_err();
        assert_eq!(
            err,
            DiscoveryError::ServiceUnavailable {
                service: "user-service".into(),
                reason: "no healthy instances".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_registry_is_unavailable_and_not_cached() {
        let connector = Arc::new(CountingConnector::default());
        let cache = ConnectionCache::new(Arc::new(UnreachableRegistry), connector.clone());

        assert!(cache.resolve("user-service").await.is_err());
        assert!(cache.resolve("user-service").await.is_err());
        assert_eq!(connector.opened.load(Ordering::SeqCst), 0);
    }
}
