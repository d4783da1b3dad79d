//! Core clone engine - Cloner over a pluggable codec.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use structclone::{BufferPool, Cloner, Json, PoolConfig};
//!
//! let pool = Arc::new(BufferPool::new(PoolConfig::default().with_max_idle(4)));
//! let cloner = Cloner::with_pool(Json, pool);
//!
//! let source = vec![String::from("a"), String::from("b")];
//! let mut destination: Vec<String> = Vec::new();
//! cloner.clone_into(Some(&source), Some(&mut destination))?;
//!
//! assert_eq!(destination, source);
//! # Ok::<(), structclone::CloneError>(())
//! ```

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::buffer::BufferPool;
use crate::codec::Codec;
use crate::error::CloneError;

/// Deep-copies values by encoding them into a pooled buffer and decoding
/// the result.
///
/// `Cloner` is cheap to clone and can be shared across threads; every call
/// borrows its own buffer and builds its own encoder and decoder.
///
/// # Failure states
///
/// - [`CloneError::NilSource`] / [`CloneError::NilDestination`]: returned
///   before any buffer is acquired.
/// - [`CloneError::Encode`]: decoding never runs and the destination is
///   untouched.
/// - [`CloneError::Decode`]: the decoder builds a fresh value and the
///   destination is only assigned once decoding completes, so it keeps its
///   previous value. This holds for every [`Codec`] because decoding yields
///   an owned value.
#[derive(Debug, Clone)]
pub struct Cloner<C> {
    codec: C,
    pool: Arc<BufferPool>,
}

impl<C: Codec> Cloner<C> {
    /// Creates a cloner backed by the shared process-wide pool.
    pub fn new(codec: C) -> Self {
        Self::with_pool(codec, BufferPool::shared())
    }

    /// Creates a cloner backed by the given pool.
    pub fn with_pool(codec: C, pool: Arc<BufferPool>) -> Self {
        Self { codec, pool }
    }

    /// Returns the encoding strategy.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Returns the buffer pool.
    pub fn pool(&self) -> &Arc<BufferPool> {
        &self.pool
    }

    /// Copies the data reachable from `source` into `destination`.
    ///
    /// `S` and `D` are independent; the call fails with
    /// [`CloneError::Decode`] when the encoded shape of `S` cannot be read
    /// as a `D`.
    ///
    /// # Errors
    ///
    /// See the [type-level docs](Cloner#failure-states).
    pub fn clone_into<S, D>(
        &self,
        source: Option<&S>,
        destination: Option<&mut D>,
    ) -> Result<(), CloneError>
    where
        S: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        let source = source.ok_or(CloneError::NilSource)?;
        let destination = destination.ok_or(CloneError::NilDestination)?;

        *destination = self.roundtrip(source)?;
        Ok(())
    }

    /// Clones `source` into a freshly decoded `D`.
    pub fn duplicate<S, D>(&self, source: &S) -> Result<D, CloneError>
    where
        S: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        self.roundtrip(source)
    }

    fn roundtrip<S, D>(&self, source: &S) -> Result<D, CloneError>
    where
        S: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        // Released on every return below.
        let mut buffer = self.pool.acquire();

        if let Err(err) = self.codec.encode(source, &mut buffer) {
            tracing::debug!(codec = C::NAME, error = %err, "encoding source failed");
            return Err(CloneError::encode(C::NAME, err));
        }

        self.codec.decode(buffer.as_bytes()).map_err(|err| {
            tracing::debug!(
                codec = C::NAME,
                encoded_len = buffer.len(),
                error = %err,
                "decoding destination failed"
            );
            CloneError::decode(C::NAME, err)
        })
    }
}

impl<C: Codec + Default> Default for Cloner<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::codec::Json;
    use crate::config::PoolConfig;
    use serde::{Deserialize, Serializer, ser::Error as _};
    use tracing_test::traced_test;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: u32,
        labels: Vec<String>,
    }

    struct Callback(#[allow(dead_code)] fn() -> u32);

    impl Serialize for Callback {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("function values cannot be serialized"))
        }
    }

    fn cloner() -> Cloner<Json> {
        let pool = Arc::new(BufferPool::new(PoolConfig::default().with_max_idle(2)));
        Cloner::with_pool(Json, pool)
    }

    #[test]
    fn test_clone_into_replaces_destination() {
        let cloner = cloner();
        let source = Sample {
            id: 9,
            labels: vec!["x".into()],
        };
        let mut destination = Sample {
            id: 1,
            labels: vec!["stale".into(), "values".into()],
        };

        cloner
            .clone_into(Some(&source), Some(&mut destination))
            .unwrap();

        assert_eq!(destination, source);
        assert_eq!(cloner.pool().stats().leased, 0);
    }

    #[test]
    fn test_nil_checks_skip_pool() {
        let cloner = cloner();
        let source = Sample::default();
        let mut destination = Sample::default();

        let err = cloner
            .clone_into(None::<&Sample>, Some(&mut destination))
            .unwrap_err();
        assert!(matches!(err, CloneError::NilSource));

        let err = cloner
            .clone_into(Some(&source), None::<&mut Sample>)
            .unwrap_err();
        assert!(matches!(err, CloneError::NilDestination));

        // Source is checked first.
        let err = cloner
            .clone_into(None::<&Sample>, None::<&mut Sample>)
            .unwrap_err();
        assert!(matches!(err, CloneError::NilSource));

        assert_eq!(cloner.pool().stats().acquired(), 0);
    }

    #[test]
    fn test_decode_failure_keeps_destination() {
        let cloner = cloner();
        let mut destination = Sample {
            id: 5,
            labels: vec![],
        };

        let err = cloner
            .clone_into(Some("not a struct"), Some(&mut destination))
            .unwrap_err();

        assert!(matches!(err, CloneError::Decode { codec: "json", .. }));
        assert_eq!(destination.id, 5);
        assert_eq!(cloner.pool().stats().leased, 0);
    }

    #[test]
    fn test_duplicate_unsized_source() {
        let cloner = cloner();
        let words: &[&str] = &["one", "two"];

        let owned: Vec<String> = cloner.duplicate(words).unwrap();
        assert_eq!(owned, vec!["one".to_string(), "two".to_string()]);
    }

    #[traced_test]
    #[test]
    fn test_encode_failure_is_logged() {
        let cloner = cloner();
        let mut destination = Sample::default();

        let err = cloner
            .clone_into(Some(&Callback(|| 7)), Some(&mut destination))
            .unwrap_err();

        assert!(matches!(err, CloneError::Encode { .. }));
        assert!(err.to_string().contains("function values cannot be serialized"));
        assert!(logs_contain("encoding source failed"));
        assert_eq!(destination, Sample::default());
    }
}
