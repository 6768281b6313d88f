//! The in-process address space servers bind to and clients connect through.

use crate::discovery::ServiceInstance;
use crate::rpc::{Call, Channel};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info};

/// Pending calls a listener buffers before senders wait.
const LISTENER_BACKLOG: usize = 64;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("address {0} is already in use")]
    AddressInUse(String),

    #[error("connection refused by {0}")]
    ConnectionRefused(String),
}

/// Opens channels to registered instances.
///
/// [`ConnectionCache`](crate::discovery::ConnectionCache) only knows this trait, so tests
/// can count or fail connection attempts.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, instance: &ServiceInstance) -> Result<Channel, TransportError>;
}

/// The server end of a bound address.
#[derive(Debug)]
pub struct Listener {
    address: String,
    receiver: mpsc::Receiver<Call>,
}

impl Listener {
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Waits for the next call. `None` once every sender is gone.
    pub async fn accept(&mut self) -> Option<Call> {
        self.receiver.recv().await
    }
}

/// A shared table of bound addresses.
///
/// Cloning shares the table. A binding stays live for as long as its [`Listener`]; once
/// the listener is dropped the address refuses connections and can be bound again.
#[derive(Clone)]
pub struct Network {
    endpoints: Arc<RwLock<HashMap<String, mpsc::Sender<Call>>>>,
    call_timeout: Duration,
}

impl Network {
    /// `call_timeout` bounds every call made on channels this network opens.
    pub fn new(call_timeout: Duration) -> Self {
        Self {
            endpoints: Arc::new(RwLock::new(HashMap::new())),
            call_timeout,
        }
    }

    pub async fn bind(&self, address: &str, port: u16) -> Result<Listener, TransportError> {
        let endpoint = format!("{address}:{port}");
        let mut endpoints = self.endpoints.write().await;

        if endpoints
            .get(&endpoint)
            .is_some_and(|sender| !sender.is_closed())
        {
            return Err(TransportError::AddressInUse(endpoint));
        }

        let (sender, receiver) = mpsc::channel(LISTENER_BACKLOG);
        endpoints.insert(endpoint.clone(), sender);
        info!(address = %endpoint, "Bound");

        Ok(Listener {
            address: endpoint,
            receiver,
        })
    }
}

#[async_trait]
impl Connector for Network {
    async fn connect(&self, instance: &ServiceInstance) -> Result<Channel, TransportError> {
        let endpoint = instance.endpoint();
        let endpoints = self.endpoints.read().await;

        match endpoints.get(&endpoint) {
            Some(sender) if !sender.is_closed() => {
                debug!(service = %instance.service, address = %endpoint, "Connected");
                Ok(Channel::new(endpoint, sender.clone(), self.call_timeout))
            }
            _ => Err(TransportError::ConnectionRefused(endpoint)),
        }
    }
}
