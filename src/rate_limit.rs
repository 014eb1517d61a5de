use dashmap::DashMap;
use std::time::{Duration, Instant};

// Rate limit entry - tracks requests per client key
struct RateLimitEntry {
    count: u32,
    window_start: Instant,
}

// Fixed-window counter keyed by client identifier. The whole window is
// forgiven the instant it expires; this is not a token bucket.
//
// Entries are never evicted, so the map grows with the number of distinct
// clients seen over the process lifetime. Counters also live only in this
// process: separate instances count independently. Both are accepted
// limitations of the current deployment; a shared store with atomic
// increment is the hardening path.
pub struct RateLimiter {
    entries: DashMap<String, RateLimitEntry>,
    capacity: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(capacity: u32, window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            capacity,
            window,
        }
    }

    // Returns true if the request is allowed and consumes one slot.
    // The dashmap entry guard stays held across the reset/increment
    // sequence, so concurrent calls for the same key cannot interleave.
    pub fn check_and_consume(&self, key: &str) -> bool {
        let now = Instant::now();

        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert(RateLimitEntry {
                count: 0,
                window_start: now,
            });

        // window expired? reset it
        if entry.window_start.elapsed() > self.window {
            entry.count = 1;
            entry.window_start = now;
            return true;
        }

        // under limit? allow
        if entry.count < self.capacity {
            entry.count += 1;
            return true;
        }

        // over limit - deny without consuming
        false
    }
}
