//! Basic deep-copy example with both strategies and a private pool.
//!
//! Run with:
//!     cargo run --example basic

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use structclone::{BufferPool, Cbor, Cloner, Json, PoolConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Service {
    name: String,
    replicas: u32,
    hosts: Vec<String>,
    limits: HashMap<String, f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = Service {
        name: "ingest".to_string(),
        replicas: 3,
        hosts: vec!["a.internal".into(), "b.internal".into()],
        limits: HashMap::from([("cpu".to_string(), 1.5), ("memory_gb".to_string(), 4.0)]),
    };

    // One-shot helpers on the shared pool
    let mut binary_copy = Service::default();
    structclone::clone_binary(Some(&source), Some(&mut binary_copy))?;
    println!("cbor copy: {binary_copy:?}");

    let mut text_copy = Service::default();
    structclone::clone_text(Some(&source), Some(&mut text_copy))?;
    println!("json copy: {text_copy:?}");

    // A dedicated pool, reused across calls
    let pool = Arc::new(BufferPool::new(PoolConfig::new(1024, 64 * 1024, 4)?));
    let cloner = Cloner::with_pool(Cbor, Arc::clone(&pool));

    let mut fleet = Vec::new();
    for replica in 0..source.replicas {
        let mut copy: Service = cloner.duplicate(&source)?;
        copy.name = format!("{}-{replica}", source.name);
        fleet.push(copy);
    }
    println!("\nfleet: {:?}", fleet.iter().map(|s| &s.name).collect::<Vec<_>>());

    let stats = pool.stats();
    println!(
        "pool: created={} reused={} idle={}",
        stats.created, stats.reused, stats.idle
    );

    // Failures name the phase that failed
    let err = Cloner::with_pool(Json, pool)
        .duplicate::<_, u64>(&source)
        .unwrap_err();
    println!("\nexpected failure: {err}");

    Ok(())
}
