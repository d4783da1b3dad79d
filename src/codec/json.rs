//! JSON strategy backed by `serde_json`.

use std::io;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::Codec;
use super::finite::FiniteCheck;

/// Text, field-name-keyed strategy.
///
/// Map keys must serialize as strings or integers. Non-finite floats have
/// no JSON form and are rejected at encode time rather than written as
/// `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Json;

impl Codec for Json {
    const NAME: &'static str = "json";

    type EncodeError = serde_json::Error;
    type DecodeError = serde_json::Error;

    fn encode<S, W>(&self, value: &S, writer: W) -> Result<(), Self::EncodeError>
    where
        S: Serialize + ?Sized,
        W: io::Write,
    {
        value.serialize(FiniteCheck)?;

        let mut serializer = serde_json::Serializer::new(writer);
        value.serialize(&mut serializer)
    }

    fn decode<D>(&self, bytes: &[u8]) -> Result<D, Self::DecodeError>
    where
        D: DeserializeOwned,
    {
        let mut deserializer = serde_json::Deserializer::from_slice(bytes);
        let value: D = Deserialize::deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_field_names_on_the_wire() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let mut out = Vec::new();
        Json.encode(&Point { x: 1, y: -1 }, &mut out).unwrap();
        assert_eq!(out, br#"{"x":1,"y":-1}"#);
    }

    #[test]
    fn test_tuple_keys_rejected() {
        let mut map = HashMap::new();
        map.insert((1, 2), 3);

        let mut out = Vec::new();
        assert!(Json.encode(&map, &mut out).is_err());
    }

    #[test]
    fn test_non_finite_rejected_at_encode() {
        let mut out = Vec::new();
        let err = Json.encode(&Some(f64::NAN), &mut out).unwrap_err();
        assert!(err.to_string().contains("unsupported value: NaN"));
        assert!(out.is_empty(), "nothing should be written");

        assert!(Json.encode(&f32::INFINITY, &mut out).is_err());
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        let result: Result<u32, _> = Json.decode(b"7 8");
        assert!(result.is_err());
    }
}
