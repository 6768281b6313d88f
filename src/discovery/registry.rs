use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

/// One registered instance of a logical service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInstance {
    pub service: String,
    pub address: String,
    pub port: u16,
    pub healthy: bool,
}

impl ServiceInstance {
    /// A healthy instance.
    pub fn new(service: impl Into<String>, address: impl Into<String>, port: u16) -> Self {
        Self {
            service: service.into(),
            address: address.into(),
            port,
            healthy: true,
        }
    }

    /// `address:port`
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    fn is(&self, service: &str, address: &str, port: u16) -> bool {
        self.service == service && self.address == address && self.port == port
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("registry unreachable: {0}")]
    Unreachable(String),

    #[error("no instance of {service} at {endpoint}")]
    UnknownInstance { service: String, endpoint: String },
}

/// A health-checked catalog of service instances.
#[async_trait]
pub trait ServiceRegistry: Send + Sync {
    /// Healthy instances of `service`, in registration order. Empty when none are.
    async fn healthy_instances(&self, service: &str)
        -> Result<Vec<ServiceInstance>, RegistryError>;
}

/// Registry kept in process memory. Services register themselves at boot.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    instances: RwLock<Vec<ServiceInstance>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an instance, replacing any previous registration at the same endpoint.
    pub async fn register(&self, instance: ServiceInstance) {
        let mut instances = self.instances.write().await;
        info!(service = %instance.service, address = %instance.endpoint(), "Registered");
        match instances
            .iter_mut()
            .find(|i| i.is(&instance.service, &instance.address, instance.port))
        {
            Some(existing) => *existing = instance,
            None => instances.push(instance),
        }
    }

    pub async fn deregister(
        &self,
        service: &str,
        address: &str,
        port: u16,
    ) -> Result<(), RegistryError> {
        let mut instances = self.instances.write().await;
        let before = instances.len();
        instances.retain(|i| !i.is(service, address, port));
        if instances.len() == before {
            return Err(unknown(service, address, port));
        }
        let endpoint = format!("{address}:{port}");
        info!(service, address = %endpoint, "Deregistered");
        Ok(())
    }

    /// Marks an instance healthy or unhealthy, as a health check would.
    pub async fn set_health(
        &self,
        service: &str,
        address: &str,
        port: u16,
        healthy: bool,
    ) -> Result<(), RegistryError> {
        let mut instances = self.instances.write().await;
        let instance = instances
            .iter_mut()
            .find(|i| i.is(service, address, port))
            .ok_or_else(|| unknown(service, address, port))?;
        instance.healthy = healthy;
        info!(service, address = %instance.endpoint(), healthy, "Health changed");
        Ok(())
    }
}

fn unknown(service: &str, address: &str, port: u16) -> RegistryError {
    RegistryError::UnknownInstance {
        service: service.to_string(),
        endpoint: format!("{address}:{port}"),
    }
}

#[async_trait]
impl ServiceRegistry for InMemoryRegistry {
    async fn healthy_instances(
        &self,
        service: &str,
    ) -> Result<Vec<ServiceInstance>, RegistryError> {
        let instances = self.instances.read().await;
        Ok(instances
            .iter()
            .filter(|i| i.service == service && i.healthy)
            .cloned()
            .collect())
    }
}
