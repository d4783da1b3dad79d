//! Error types for structclone.

use thiserror::Error;

/// Boxed root cause produced by an encoding strategy.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during a clone operation.
///
/// None of these are retried by the crate. The intermediate buffer is
/// released on every path that returns one of them.
#[derive(Debug, Error)]
pub enum CloneError {
    /// The source handle was absent. Nothing was allocated.
    #[error("source is nil")]
    NilSource,

    /// The destination handle was absent. Nothing was allocated.
    #[error("destination is nil")]
    NilDestination,

    /// The source could not be encoded. The destination was not touched.
    #[error("error encoding source with {codec}: {source}")]
    Encode {
        /// Name of the encoding strategy.
        codec: &'static str,
        /// The underlying encoder error.
        #[source]
        source: BoxError,
    },

    /// The encoded source could not be decoded into the destination type.
    #[error("error decoding destination with {codec}: {source}")]
    Decode {
        /// Name of the encoding strategy.
        codec: &'static str,
        /// The underlying decoder error.
        #[source]
        source: BoxError,
    },
}

impl CloneError {
    pub(crate) fn encode(codec: &'static str, source: impl Into<BoxError>) -> Self {
        CloneError::Encode {
            codec,
            source: source.into(),
        }
    }

    pub(crate) fn decode(codec: &'static str, source: impl Into<BoxError>) -> Self {
        CloneError::Decode {
            codec,
            source: source.into(),
        }
    }

    /// Returns true if either handle was absent.
    pub fn is_nil(&self) -> bool {
        matches!(self, CloneError::NilSource | CloneError::NilDestination)
    }

    /// Name of the strategy that failed, if the failure came from a codec.
    pub fn codec(&self) -> Option<&'static str> {
        match self {
            CloneError::Encode { codec, .. } | CloneError::Decode { codec, .. } => Some(*codec),
            _ => None,
        }
    }
}

/// Invalid [`PoolConfig`](crate::PoolConfig) parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolConfigError {
    /// A buffer capacity was zero.
    #[error("invalid config: buffer capacities must be non-zero")]
    ZeroCapacity,

    /// The initial capacity exceeded the retained capacity limit.
    #[error("invalid config: initial capacity {initial} exceeds max retained capacity {max_retained}")]
    CapacityOrder {
        /// Requested initial capacity.
        initial: usize,
        /// Requested retained capacity limit.
        max_retained: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_nil_display() {
        assert_eq!(CloneError::NilSource.to_string(), "source is nil");
        assert_eq!(CloneError::NilDestination.to_string(), "destination is nil");
        assert!(CloneError::NilSource.is_nil());
        assert!(CloneError::NilSource.codec().is_none());
    }

    #[test]
    fn test_encode_wraps_cause() {
        let cause = std::io::Error::other("sink closed");
        let err = CloneError::encode("json", cause);

        assert!(err.to_string().starts_with("error encoding source with json"));
        assert_eq!(err.codec(), Some("json"));
        assert!(!err.is_nil());

        let source = err.source().expect("cause should be preserved");
        assert_eq!(source.to_string(), "sink closed");
    }

    #[test]
    fn test_decode_display() {
        let err = CloneError::decode("cbor", "unexpected map");
        assert_eq!(
            err.to_string(),
            "error decoding destination with cbor: unexpected map"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = PoolConfigError::CapacityOrder {
            initial: 10,
            max_retained: 5,
        };
        assert!(err.to_string().contains("initial capacity 10"));
    }
}
