use crate::rpc::{Request, Response, Status};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

/// One inbound call as a server sees it.
#[derive(Debug)]
pub struct Call {
    pub request: Request,
    pub respond_to: oneshot::Sender<Result<Response, Status>>,
}

/// A client's handle to one server.
///
/// Channels are cheap to clone and safe to use from many tasks at once; each call
/// carries its own reply slot.
#[derive(Debug, Clone)]
pub struct Channel {
    target: String,
    sender: mpsc::Sender<Call>,
    timeout: Duration,
}

impl Channel {
    pub fn new(target: impl Into<String>, sender: mpsc::Sender<Call>, timeout: Duration) -> Self {
        Self {
            target: target.into(),
            sender,
            timeout,
        }
    }

    /// The `address:port` this channel is connected to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Sends one request and waits for its reply.
    ///
    /// Fails with `Unavailable` when the server is gone and with `DeadlineExceeded` when
    /// no reply arrives within the call timeout.
    pub async fn unary(&self, request: Request) -> Result<Response, Status> {
        let method = request.method();
        debug!(peer = %self.target, method, "Sending call");

        let (respond_to, reply) = oneshot::channel();
        let call = async {
            self.sender
                .send(Call {
                    request,
                    respond_to,
                })
                .await
                .map_err(|_| {
                    Status::unavailable(format!("{} is not accepting calls", self.target))
                })?;
            reply
                .await
                .map_err(|_| Status::unavailable(format!("{} dropped the call", self.target)))?
        };

        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(Status::deadline_exceeded(format!(
                "{method} to {} timed out after {}ms",
                self.target,
                self.timeout.as_millis()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;

    #[tokio::test]
    async fn test_call_to_closed_server_is_unavailable() {
        let (sender, receiver) = mpsc::channel(1);
        drop(receiver);
        let channel = Channel::new("127.0.0.1:1", sender, Duration::from_secs(1));

        let status = channel.unary(Request::GetUser(UserId(1))).await.unwrap_err();
        assert_eq!(status.code, crate::rpc::Code::Unavailable);
    }

    #[tokio::test]
    async fn test_silent_server_hits_deadline() {
        let (sender, mut receiver) = mpsc::channel::<Call>(1);
        // Hold calls without answering them
        let held = tokio::spawn(async move {
            let mut calls = Vec::new();
            while let Some(call) = receiver.recv().await {
                calls.push(call);
            }
        });
        let channel = Channel::new("127.0.0.1:2", sender, Duration::from_millis(20));

        let status = channel.unary(Request::ListUsers).await.unwrap_err();
        assert_eq!(status.code, crate::rpc::Code::DeadlineExceeded);
        assert!(status.message.contains("ListUsers"));
        held.abort();
    }
}
