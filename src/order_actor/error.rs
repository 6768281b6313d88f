//! Error types for the Order actor and the order service built on top of it.

use crate::rpc::{Code, Status};
use thiserror::Error;

/// Why an order operation failed.
///
/// This is the taxonomy callers see. Each variant renders as `<code>: <reason>` so a
/// client can tell exactly which precondition failed without reading logs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The request itself is wrong: empty order, zero quantity, unknown user or item.
    #[error("invalid_argument: {0}")]
    InvalidArgument(String),

    /// The requested order does not exist.
    #[error("not_found: {0}")]
    NotFound(String),

    /// A dependency could not be located or reached.
    #[error("unavailable: {0}")]
    ServiceUnavailable(String),

    /// The store failed.
    #[error("internal: {0}")]
    Internal(String),
}

impl OrderError {
    /// The RPC status code this error travels as.
    pub fn code(&self) -> Code {
        match self {
            OrderError::InvalidArgument(_) => Code::InvalidArgument,
            OrderError::NotFound(_) => Code::NotFound,
            OrderError::ServiceUnavailable(_) => Code::Unavailable,
            OrderError::Internal(_) => Code::Internal,
        }
    }

    /// The reason without its code prefix.
    pub fn reason(&self) -> &str {
        match self {
            OrderError::InvalidArgument(reason)
            | OrderError::NotFound(reason)
            | OrderError::ServiceUnavailable(reason)
            | OrderError::Internal(reason) => reason,
        }
    }
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::Internal(msg)
    }
}

impl From<OrderError> for Status {
    fn from(err: OrderError) -> Self {
        Status::new(err.code(), err.reason())
    }
}

impl From<Status> for OrderError {
    fn from(status: Status) -> Self {
        match status.code {
            Code::InvalidArgument => OrderError::InvalidArgument(status.message),
            Code::NotFound => OrderError::NotFound(status.message),
            Code::Unavailable => OrderError::ServiceUnavailable(status.message),
            Code::DeadlineExceeded | Code::Internal | Code::Unimplemented => {
                OrderError::Internal(status.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code_prefix() {
        let err = OrderError::InvalidArgument("menu item 7 not found: no such item".into());
        assert_eq!(
            err.to_string(),
            "invalid_argument: menu item 7 not found: no such item"
        );
    }

    #[test]
    fn test_status_round_trip_keeps_class() {
        let err = OrderError::ServiceUnavailable("user-service".into());
        let status = Status::from(err.clone());
        assert_eq!(status.code, Code::Unavailable);
        assert_eq!(OrderError::from(status), err);
    }
}
