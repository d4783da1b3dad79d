//! structclone
//!
//! Deep copies through serialization.
//!
//! `structclone` copies the data reachable from a source value into a
//! destination value by encoding the source into a pooled byte buffer and
//! decoding the destination back out of it. Source and destination types are
//! chosen independently; they only have to agree on their encoded shape.
//!
//! After a successful clone the two values share no storage: sequences,
//! maps, and nested structures are rebuilt from bytes.
//!
//! The crate intentionally:
//! - does NOT define a wire format (it borrows CBOR or JSON)
//! - does NOT detect cycles or compare values
//! - does NOT expose the intermediate bytes
//!
//! # Binary (feature = "cbor")
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct Settings {
//!     name: String,
//!     retries: u8,
//!     hosts: Vec<String>,
//! }
//!
//! let source = Settings {
//!     name: "primary".into(),
//!     retries: 3,
//!     hosts: vec!["a.internal".into(), "b.internal".into()],
//! };
//! let mut copy = Settings::default();
//!
//! structclone::clone_binary(Some(&source), Some(&mut copy))?;
//! assert_eq!(copy, source);
//! # Ok::<(), structclone::CloneError>(())
//! ```
//!
//! # Custom pool (feature = "json")
//!
//! ```
//! use std::sync::Arc;
//! use structclone::{BufferPool, Cloner, Json, PoolConfig};
//!
//! let pool = Arc::new(BufferPool::new(PoolConfig::new(256, 16 * 1024, 4)?));
//! let cloner = Cloner::with_pool(Json, pool);
//!
//! let tags: Vec<String> = cloner.duplicate(&["x", "y"])?;
//! assert_eq!(tags, ["x", "y"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod cloner;
mod codec;
mod config;
mod error;

//
// Public surface
//

pub use buffer::{BufferPool, PoolStats, PooledBuffer};
pub use cloner::Cloner;
pub use codec::Codec;
pub use config::PoolConfig;
pub use error::{BoxError, CloneError, PoolConfigError};

#[cfg(feature = "cbor")]
pub use cloner::clone_binary;
#[cfg(feature = "cbor")]
pub use codec::Cbor;

#[cfg(feature = "json")]
pub use cloner::clone_text;
#[cfg(feature = "json")]
pub use codec::Json;
