//! Encoding strategies for the intermediate representation.
//!
//! A [`Codec`] is the encode/decode capability pair the clone operation is
//! generic over. Each call builds one encoder bound to the pooled buffer and
//! one decoder bound to its contents.
//!
//! - [`Cbor`] - Binary, self-describing (requires `cbor` feature)
//! - [`Json`] - Text, field-name-keyed (requires `json` feature)

#[cfg(feature = "cbor")]
mod cbor;
#[cfg(feature = "json")]
mod finite;
#[cfg(feature = "json")]
mod json;

#[cfg(feature = "cbor")]
pub use cbor::Cbor;
#[cfg(feature = "json")]
pub use json::Json;

use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// An encoding strategy usable by [`Cloner`](crate::Cloner).
///
/// Implementations must decode exactly what they encode; any value that
/// survives `encode` followed by `decode` into the same type must compare
/// equal to the original under the format's own notion of equality.
pub trait Codec {
    /// Short name reported in errors and logs.
    const NAME: &'static str;

    /// Error returned by [`Codec::encode`].
    type EncodeError: std::error::Error + Send + Sync + 'static;

    /// Error returned by [`Codec::decode`].
    type DecodeError: std::error::Error + Send + Sync + 'static;

    /// Writes the encoded form of `value` into `writer`.
    fn encode<S, W>(&self, value: &S, writer: W) -> Result<(), Self::EncodeError>
    where
        S: Serialize + ?Sized,
        W: io::Write;

    /// Reconstructs a value from a complete encoded representation.
    fn decode<D>(&self, bytes: &[u8]) -> Result<D, Self::DecodeError>
    where
        D: DeserializeOwned;
}
