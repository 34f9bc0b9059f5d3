//! Server lifecycle errors.

use std::io;

use thiserror::Error;

/// Errors that can stop the server.
///
/// Request handling is infallible; only the listener can fail.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound (port in use, permission denied).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The accept loop stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_display() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:3000".to_string(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "failed to bind 0.0.0.0:3000: address in use");
    }

    #[test]
    fn test_bind_error_keeps_source() {
        use std::error::Error as _;

        let err = ServerError::Bind {
            addr: "0.0.0.0:3000".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_serve_from_io() {
        let err: ServerError = io::Error::other("boom").into();
        assert!(matches!(err, ServerError::Serve(_)));
    }
}
