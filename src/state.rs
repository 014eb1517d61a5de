use std::sync::Arc;

use crate::cors::OriginPolicy;
use crate::provider::CompletionProvider;
use crate::rate_limit::RateLimiter;

// App's shared state. The provider sits behind the trait so tests can
// inject a mock; the rate limiter owns its map exclusively.
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
    pub origin_policy: OriginPolicy,
    pub rate_limiter: RateLimiter,
}
