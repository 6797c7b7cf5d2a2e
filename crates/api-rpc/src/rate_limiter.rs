//! Rate Limiter (Token Bucket)
//!
//! Guards the request method against bursts. One bucket for the whole
//! process; tokens refill continuously at a fixed per-second rate.

use std::time::Instant;
use tokio::sync::Mutex;

/// Token-bucket rate limiter
pub struct RateLimiter {
    bucket: Mutex<Bucket>,
    max_tokens: u32,
    refill_rate: u32,
}

struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

impl RateLimiter {
    /// `max_tokens` is the burst ceiling, `refill_rate` the sustained
    /// tokens-per-second.
    pub fn new(max_tokens: u32, refill_rate: u32) -> Self {
        Self {
            bucket: Mutex::new(Bucket {
                tokens: max_tokens as f64,
                last_refill: Instant::now(),
            }),
            max_tokens,
            refill_rate,
        }
    }

    /// Consume one token if available. Returns false when rate limited.
    pub async fn check(&self) -> bool {
        let mut bucket = self.bucket.lock().await;

        let now = Instant::now();
        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.tokens =
            (bucket.tokens + elapsed * self.refill_rate as f64).min(self.max_tokens as f64);
        bucket.last_refill = now;

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Duration};

    #[tokio::test]
    async fn test_allows_within_burst() {
        let limiter = RateLimiter::new(10, 10);

        for _ in 0..10 {
            assert!(limiter.check().await);
        }

        // 11th exceeds the burst
        assert!(!limiter.check().await);
    }

    #[tokio::test]
    async fn test_refills_over_time() {
        let limiter = RateLimiter::new(5, 10); // 10 tokens/sec

        for _ in 0..5 {
            assert!(limiter.check().await);
        }
        assert!(!limiter.check().await);

        sleep(Duration::from_millis(500)).await;

        // ~5 tokens back after half a second
        assert!(limiter.check().await);
    }

    #[tokio::test]
    async fn test_concurrent_checks_never_exceed_burst() {
        use std::sync::Arc;

        let limiter = Arc::new(RateLimiter::new(50, 1));

        let mut handles = vec![];
        for _ in 0..10 {
            let limiter = Arc::clone(&limiter);
            handles.push(tokio::spawn(async move {
                let mut allowed = 0;
                for _ in 0..10 {
                    if limiter.check().await {
                        allowed += 1;
                    }
                }
                allowed
            }));
        }

        let mut total = 0;
        for handle in handles {
            total += handle.await.unwrap();
        }

        assert!(total <= 50, "expected at most 50 allowed, got {}", total);
    }
}
