// error.rs: reasons a log line is rejected
use std::net::IpAddr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum LineError {
    #[error("line has {found} fields, expected at least {required}")]
    MissingFields { found: usize, required: usize },

    #[error("invalid source address {0:?}")]
    InvalidSourceAddress(String),

    #[error("invalid destination address {0:?}")]
    InvalidDestinationAddress(String),

    #[error("destination {0} is in a private range")]
    PrivateDestination(IpAddr),
}

impl LineError {
    /// Short label used when tallying rejections.
    pub fn kind(&self) -> &'static str {
        match self {
            LineError::MissingFields { .. } => "missing_fields",
            LineError::InvalidSourceAddress(_) => "invalid_source_address",
            LineError::InvalidDestinationAddress(_) => "invalid_destination_address",
            LineError::PrivateDestination(_) => "private_destination",
        }
    }
}
