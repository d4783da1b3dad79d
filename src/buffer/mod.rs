//! Buffer management for the intermediate representation.
//!
//! A [`BufferPool`] lends out [`PooledBuffer`] guards so repeated clones do
//! not allocate a fresh byte buffer on every call. The pool is an ordinary
//! value: construct one per subsystem, or use [`BufferPool::shared`].

mod pool;

pub use pool::{BufferPool, PoolStats, PooledBuffer};
