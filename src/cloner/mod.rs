//! Clone operation.
//!
//! - [`Cloner`] - Generic encode/decode roundtrip over a [`Codec`](crate::Codec)
//! - [`clone_binary`] / [`clone_text`] - One-shot helpers on the shared pool

mod engine;

pub use engine::Cloner;

#[cfg(any(feature = "cbor", feature = "json"))]
use serde::{Serialize, de::DeserializeOwned};

#[cfg(any(feature = "cbor", feature = "json"))]
use crate::error::CloneError;

/// Clones `source` into `destination` through the CBOR strategy.
///
/// # Example
///
/// ```
/// let source = vec![1u16, 2, 3];
/// let mut destination: Vec<u16> = Vec::new();
///
/// structclone::clone_binary(Some(&source), Some(&mut destination))?;
/// assert_eq!(destination, source);
/// # Ok::<(), structclone::CloneError>(())
/// ```
#[cfg(feature = "cbor")]
pub fn clone_binary<S, D>(source: Option<&S>, destination: Option<&mut D>) -> Result<(), CloneError>
where
    S: Serialize + ?Sized,
    D: DeserializeOwned,
{
    Cloner::new(crate::codec::Cbor).clone_into(source, destination)
}

/// Clones `source` into `destination` through the JSON strategy.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// let source = HashMap::from([("k".to_string(), 1i64)]);
/// let mut destination: HashMap<String, i64> = HashMap::new();
///
/// structclone::clone_text(Some(&source), Some(&mut destination))?;
/// assert_eq!(destination, source);
/// # Ok::<(), structclone::CloneError>(())
/// ```
#[cfg(feature = "json")]
pub fn clone_text<S, D>(source: Option<&S>, destination: Option<&mut D>) -> Result<(), CloneError>
where
    S: Serialize + ?Sized,
    D: DeserializeOwned,
{
    Cloner::new(crate::codec::Json).clone_into(source, destination)
}
