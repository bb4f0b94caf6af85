//! Concurrent usage demo
//!
//! Shares one cache between worker threads and prints what survives.
//! Run with `RUST_LOG=ttl_lru=trace` to see touches, evictions and expiries.

use std::sync::Arc;
use std::thread;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttl_lru::{Cache, CacheConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "concurrent_usage=info,ttl_lru=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CacheConfig::new(8, 30);
    info!(
        "Configuration loaded: capacity={}, ttl={}s",
        config.capacity, config.ttl_seconds
    );
    let cache: Arc<Cache<String>> = Arc::new(config.build()?);

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..6 {
                    let key = format!("user:{}", (worker * 3 + i) % 10);
                    if cache.add(key.clone(), format!("profile from worker {}", worker)) {
                        info!(worker, key = %key, "Inserted");
                    }
                }
            })
        })
        .collect();

    for worker in workers {
        if worker.join().is_err() {
            anyhow::bail!("worker thread panicked");
        }
    }

    info!("Cache holds {} of {} entries", cache.len(), cache.capacity());
    for key in cache.keys() {
        if let Some(value) = cache.get(&key) {
            info!(key = %key, value = %value, "Live entry");
        }
    }

    Ok(())
}
