//! CBOR strategy backed by `ciborium`.

use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::Codec;

/// Binary, self-describing strategy.
///
/// CBOR keeps the distinctions JSON loses: byte strings stay byte strings,
/// map keys may be any value, and integers keep their sign and width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cbor;

impl Codec for Cbor {
    const NAME: &'static str = "cbor";

    type EncodeError = ciborium::ser::Error<io::Error>;
    type DecodeError = ciborium::de::Error<io::Error>;

    fn encode<S, W>(&self, value: &S, writer: W) -> Result<(), Self::EncodeError>
    where
        S: Serialize + ?Sized,
        W: io::Write,
    {
        ciborium::ser::into_writer(value, writer)
    }

    fn decode<D>(&self, bytes: &[u8]) -> Result<D, Self::DecodeError>
    where
        D: DeserializeOwned,
    {
        ciborium::de::from_reader(bytes)
    }
}
