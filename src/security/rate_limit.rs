use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Process-wide token bucket: up to `burst` tokens, refilled at
/// `requests_per_sec`, one token per accepted request. Reject-on-exceed,
/// no queuing. Cheap to clone; clones share the bucket.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<Bucket>>,
}

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    capacity: f64,
    refill_per_sec: f64,
    last_refill: Instant,
}

impl RateLimiter {
    pub fn new(requests_per_sec: u32, burst: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Bucket {
                tokens: burst as f64,
                capacity: burst as f64,
                refill_per_sec: requests_per_sec as f64,
                last_refill: Instant::now(),
            })),
        }
    }

    /// Take one token; false when the bucket is empty.
    pub async fn allow(&self) -> bool {
        let mut bucket = self.inner.lock().await;
        let now = Instant::now();
        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * bucket.refill_per_sec).min(bucket.capacity);
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

    #[tokio::test]
    async fn burst_of_b_plus_one_rejects_exactly_one() {
        let limiter = RateLimiter::new(1, 5);
        let mut accepted = 0;
        let mut rejected = 0;
        for _ in 0..6 {
            if limiter.allow().await {
                accepted += 1;
            } else {
                rejected += 1;
            }
        }
        assert_eq!(accepted, 5);
        assert_eq!(rejected, 1);
    }

    #[tokio::test]
    async fn tokens_refill_over_time() {
        let limiter = RateLimiter::new(1000, 1);
        assert!(limiter.allow().await);
        assert!(!limiter.allow().await);

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(limiter.allow().await);
    }

    #[tokio::test]
    async fn refill_never_exceeds_capacity() {
        let limiter = RateLimiter::new(1000, 2);
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(limiter.allow().await);
        assert!(limiter.allow().await);
        assert!(!limiter.allow().await);
    }
}
