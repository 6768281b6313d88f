use crate::rpc::{Call, Listener, Request, Response, Status};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A service that answers calls arriving on a [`Listener`].
#[async_trait]
pub trait RpcService: Send + Sync + 'static {
    /// Logical name used in logs.
    fn name(&self) -> &str;

    async fn handle(&self, request: Request) -> Result<Response, Status>;
}

/// Accept loop. Every call is handled on its own task so a slow call never blocks the
/// next one. Returns once the listener closes.
///
/// A call whose caller stops waiting (deadline or disconnect) is cancelled: the handler
/// future is dropped at its next await point, so work it has not yet reached never runs.
pub async fn serve<S: RpcService>(mut listener: Listener, service: Arc<S>) {
    info!(service = service.name(), address = listener.address(), "Serving");

    while let Some(call) = listener.accept().await {
        let service = service.clone();
        tokio::spawn(async move {
            let Call {
                request,
                mut respond_to,
            } = call;
            let method = request.method();

            let result = tokio::select! {
                result = service.handle(request) => result,
                _ = respond_to.closed() => {
                    warn!(service = service.name(), method, "Caller went away, call cancelled");
                    return;
                }
            };

            match &result {
                Ok(_) => debug!(service = service.name(), method, "Call ok"),
                Err(status) => debug!(service = service.name(), method, %status, "Call failed"),
            }
            let _ = respond_to.send(result);
        });
    }

    info!(service = service.name(), "Listener closed");
}
