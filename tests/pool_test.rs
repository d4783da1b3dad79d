// Integration tests for the buffer pool
// Tests cover: reuse without leftover bytes, retention limits, concurrent leasing

use std::collections::HashSet;
use std::io::Write;
use std::sync::{Arc, Barrier};

use structclone::{BufferPool, PoolConfig};

// ============================================================================
// Reuse
// ============================================================================

#[test]
fn test_reused_buffer_is_empty() {
    let pool = BufferPool::new(PoolConfig::new(32, 4096, 1).unwrap());

    let mut buf = pool.acquire();
    buf.write_all(b"secret bytes").unwrap();
    assert_eq!(buf.as_bytes(), b"secret bytes");
    pool.release(buf);

    let buf = pool.acquire();
    assert!(buf.as_bytes().is_empty(), "recycled buffer must not expose prior bytes");
    assert_eq!(pool.stats().reused, 1);
}

#[test]
fn test_clear_resets_length() {
    let pool = BufferPool::default();
    let mut buf = pool.acquire();

    buf.extend_from_slice(&[7u8; 100]);
    let capacity = buf.capacity();
    buf.clear();

    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), capacity);
}

#[test]
fn test_release_order_is_not_significant() {
    let pool = BufferPool::new(PoolConfig::new(16, 1024, 4).unwrap());

    let a = pool.acquire();
    let b = pool.acquire();
    let c = pool.acquire();
    pool.release(b);
    pool.release(a);
    pool.release(c);

    let stats = pool.stats();
    assert_eq!(stats.created, 3);
    assert_eq!(stats.idle, 3);
    assert_eq!(stats.leased, 0);

    let held: Vec<_> = (0..3).map(|_| pool.acquire()).collect();
    assert!(held.iter().all(|buf| buf.is_empty()));
    assert_eq!(pool.stats().reused, 3);
}

// ============================================================================
// Retention Limits
// ============================================================================

#[test]
fn test_grown_buffer_not_retained() {
    let pool = BufferPool::new(PoolConfig::new(16, 256, 4).unwrap());

    {
        let mut buf = pool.acquire();
        buf.extend_from_slice(&vec![0u8; 1024]);
    }

    let stats = pool.stats();
    assert_eq!(stats.idle, 0);
    assert_eq!(stats.discarded, 1);
}

#[test]
fn test_config_validation() {
    assert!(PoolConfig::new(0, 16, 1).is_err());
    assert!(PoolConfig::new(64, 16, 1).is_err());
    assert!(PoolConfig::default().with_max_retained_capacity(0).validate().is_err());
    assert!(PoolConfig::new(16, 16, 0).is_ok());
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_leases_are_distinct() {
    const THREADS: usize = 8;

    let pool = Arc::new(BufferPool::new(PoolConfig::new(64, 4096, THREADS).unwrap()));
    let barrier = Barrier::new(THREADS);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|id| {
                let pool = &pool;
                let barrier = &barrier;
                scope.spawn(move || {
                    let mut buf = pool.acquire();
                    let marker = format!("thread-{id}");
                    buf.write_all(marker.as_bytes()).unwrap();

                    // Every thread holds its lease at the same time.
                    barrier.wait();
                    assert_eq!(buf.as_bytes(), marker.as_bytes());
                    buf.as_ptr() as usize
                })
            })
            .collect();

        let addrs: HashSet<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(addrs.len(), THREADS);
    });

    let stats = pool.stats();
    assert_eq!(stats.leased, 0);
    assert_eq!(stats.created, THREADS as u64);
}
