//! Shared buffer pool for intermediate encodings.

use std::io;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use bytes::{BufMut, BytesMut};
use parking_lot::Mutex;

use crate::config::PoolConfig;

/// A thread-safe pool of reusable byte buffers.
///
/// Buffers are lent out through [`PooledBuffer`] guards and come back,
/// cleared, when the guard is dropped. A returned buffer is never handed out
/// with bytes from its previous use.
///
/// # Example
///
/// ```
/// use std::io::Write;
/// use structclone::BufferPool;
///
/// let pool = BufferPool::default();
///
/// let mut buf = pool.acquire();
/// buf.write_all(b"scratch")?;
/// pool.release(buf);
///
/// let buf = pool.acquire();
/// assert!(buf.as_bytes().is_empty());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct BufferPool {
    config: PoolConfig,
    idle: Mutex<Vec<BytesMut>>,
    created: AtomicU64,
    reused: AtomicU64,
    discarded: AtomicU64,
    leased: AtomicUsize,
}

impl BufferPool {
    /// Creates an empty pool with the given configuration.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            idle: Mutex::new(Vec::with_capacity(config.max_idle().min(16))),
            created: AtomicU64::new(0),
            reused: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
            leased: AtomicUsize::new(0),
        }
    }

    /// Returns the process-wide pool used by [`clone_binary`](crate::clone_binary)
    /// and [`clone_text`](crate::clone_text).
    pub fn shared() -> Arc<BufferPool> {
        static SHARED: OnceLock<Arc<BufferPool>> = OnceLock::new();
        SHARED
            .get_or_init(|| Arc::new(BufferPool::default()))
            .clone()
    }

    /// Returns the pool configuration.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Takes an idle buffer from the pool or allocates a new one.
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let recycled = self.idle.lock().pop();
        let data = match recycled {
            Some(data) => {
                self.reused.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(capacity = data.capacity(), "reusing pooled buffer");
                data
            }
            None => {
                self.created.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(
                    capacity = self.config.initial_capacity(),
                    "allocating pooled buffer"
                );
                BytesMut::with_capacity(self.config.initial_capacity())
            }
        };
        self.leased.fetch_add(1, Ordering::Relaxed);

        PooledBuffer { pool: self, data }
    }

    /// Returns a buffer to the pool.
    ///
    /// Equivalent to dropping the guard.
    pub fn release(&self, buffer: PooledBuffer<'_>) {
        debug_assert!(
            std::ptr::eq(self, buffer.pool),
            "buffer released to a foreign pool"
        );
        drop(buffer);
    }

    /// Returns a snapshot of the pool counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            created: self.created.load(Ordering::Relaxed),
            reused: self.reused.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            leased: self.leased.load(Ordering::Relaxed),
            idle: self.idle.lock().len(),
        }
    }

    fn put_back(&self, mut data: BytesMut) {
        self.leased.fetch_sub(1, Ordering::Relaxed);

        if data.capacity() > self.config.max_retained_capacity() {
            self.discarded.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(
                capacity = data.capacity(),
                limit = self.config.max_retained_capacity(),
                "dropping oversized buffer"
            );
            return;
        }

        data.clear();

        let mut idle = self.idle.lock();
        if idle.len() < self.config.max_idle() {
            idle.push(data);
        } else {
            self.discarded.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

/// Snapshot of [`BufferPool`] counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Buffers allocated because no idle buffer was available.
    pub created: u64,
    /// Acquisitions served from an idle buffer.
    pub reused: u64,
    /// Released buffers dropped instead of pooled.
    pub discarded: u64,
    /// Buffers currently lent out.
    pub leased: usize,
    /// Buffers currently idle in the pool.
    pub idle: usize,
}

impl PoolStats {
    /// Total number of successful acquisitions.
    pub fn acquired(&self) -> u64 {
        self.created + self.reused
    }
}

/// A buffer on loan from a [`BufferPool`].
///
/// Dropping the guard clears the buffer and returns it to its pool.
#[derive(Debug)]
pub struct PooledBuffer<'a> {
    pool: &'a BufferPool,
    data: BytesMut,
}

impl PooledBuffer<'_> {
    /// Returns the bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Appends bytes to the buffer.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.data.put_slice(bytes);
    }

    /// Discards the contents, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the allocated capacity.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl io::Write for PooledBuffer<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.put_back(std::mem::take(&mut self.data));
    }
}
