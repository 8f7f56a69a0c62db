//! Error types for route operations.

use std::io;

/// Result type for route operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or submitting a route request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or incomplete route specification.
    #[error("{0}")]
    Usage(String),

    /// Flushing the IPv6 routing table is not supported.
    #[error("flushing the inet6 routing table is not supported")]
    FlushUnsupported,

    /// Address text could not be resolved to an IPv6 address.
    #[error("unknown host: {host}")]
    Lookup {
        /// The address text that failed to resolve.
        host: String,
    },

    /// The control socket could not be created.
    #[error("socket: {0}")]
    Socket(#[source] io::Error),

    /// Interface name could not be resolved to an index.
    #[error("interface not found: {name}")]
    InterfaceNotFound {
        /// The interface name that was not found.
        name: String,
    },

    /// ioctl failed.
    #[error("ioctl {name} failed: {source}")]
    Ioctl {
        /// The ioctl name.
        name: &'static str,
        /// The underlying error.
        source: io::Error,
    },
}

impl Error {
    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Error::Usage(message.into())
    }

    /// Create an ioctl error.
    pub fn ioctl(name: &'static str, source: io::Error) -> Self {
        Error::Ioctl { name, source }
    }

    /// Check whether this error is a usage-class error (bad token stream).
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_) | Error::FlushUnsupported)
    }
}
